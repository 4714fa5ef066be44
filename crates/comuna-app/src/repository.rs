//! Repository adapters for persistence layer

use std::path::PathBuf;

use comuna_infra::{FileComunaRepository, LogObserver};
use comuna_types::{LoadPolicy, Result};

use crate::config::Config;

/// Open the file-based comuna repository named by the config
pub fn open_comuna_repo(config: &Config) -> Result<FileComunaRepository> {
    open_comuna_repo_at(config.store_path(), config.on_malformed)
}

/// Open the file-based comuna repository at a custom path
pub fn open_comuna_repo_at(
    store_path: PathBuf,
    policy: LoadPolicy,
) -> Result<FileComunaRepository> {
    FileComunaRepository::open_with(store_path, policy, LogObserver).map_err(Into::into)
}
