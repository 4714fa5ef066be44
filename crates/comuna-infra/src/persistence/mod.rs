//! Persistence implementations
//!
//! This module provides file-based implementations of the repository traits.

mod file_comuna_repo;

pub use file_comuna_repo::FileComunaRepository;

/// Store file name used when nothing else is configured
pub const DEFAULT_STORE_FILE: &str = "comunas.txt";
