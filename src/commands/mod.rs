//! CLI commands for pathfinder

pub mod dispatch;
pub mod helpers;
pub mod nodes;
pub mod path;
pub mod show;
