//! Application layer for the comuna registry

pub mod config;
pub mod repository;

pub use config::Config;
pub use repository::{open_comuna_repo, open_comuna_repo_at};
