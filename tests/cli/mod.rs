pub mod errors;
pub mod logging;
pub mod nodes;
pub mod path;
