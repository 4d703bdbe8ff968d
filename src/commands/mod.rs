//! CLI commands

pub mod apply;
pub mod list;
pub mod restore;
pub mod snapshot;
pub mod utils;
