/// The current version of Toolchat, sourced from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod assistant;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod matching;
pub mod webui;
