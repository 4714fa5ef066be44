//! Routes repository events to the `log` facade

use comuna_domain::{RepositoryEvent, RepositoryObserver};
use log::{error, info, warn};

/// Observer that writes every repository event to the process logger
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl RepositoryObserver for LogObserver {
    fn notify(&self, event: RepositoryEvent) {
        match event {
            RepositoryEvent::Loaded { path, count } => {
                info!("Loaded {} comunas from {}", count, path.display())
            }
            RepositoryEvent::LoadFailed(err) if err.is_missing_store() => {
                warn!("{}; starting with an empty registry", err)
            }
            RepositoryEvent::LoadFailed(err) => {
                error!("{}; starting with an empty registry", err)
            }
            RepositoryEvent::MalformedLine(err) => {
                warn!("Skipped: {}; it will be dropped from the store on the next save", err)
            }
            RepositoryEvent::Added { comuna } => info!("Added {}", comuna),
            RepositoryEvent::Rejected(err) => warn!("{}", err),
            RepositoryEvent::Saved { path, count } => {
                info!("Saved {} comunas to {}", count, path.display())
            }
            RepositoryEvent::SaveFailed(err) => {
                error!("{}; the record is kept in memory only", err)
            }
        }
    }
}
