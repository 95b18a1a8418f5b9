//! CLI command implementations

pub mod add;
pub mod config;
pub mod edit;
pub mod list;
pub mod remove;
pub mod search;
pub mod show;
pub mod status;
