//! File-based implementation of ComunaRepository
//!
//! The whole collection lives in memory. Every add rewrites the store file
//! from scratch, which is fine for small registries and costs O(n) per add.
//! The rewrite holds exactly the in-memory records, so lines skipped at load
//! are gone from the store after the first add.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use comuna_domain::{matches_ignore_case, ComunaRepository, RepositoryEvent, RepositoryObserver};
use comuna_types::{Comuna, LoadPolicy, StoreError};

use crate::line_codec::{check_storable, read_comunas, write_comunas, LoadOutcome};
use crate::log_observer::LogObserver;

/// File-based Comuna repository (comma-separated lines)
pub struct FileComunaRepository {
    store_path: PathBuf,
    comunas: Vec<Comuna>,
    observer: Box<dyn RepositoryObserver>,
}

impl FileComunaRepository {
    /// Open a store, skipping malformed lines and logging through `log`
    pub fn open(store_path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        Self::open_with(store_path, LoadPolicy::default(), LogObserver)
    }

    /// Open a store with an explicit malformed-line policy and observer
    ///
    /// A missing or unreadable store is not an error: the repository starts
    /// empty and the observer receives `LoadFailed`. The only error returned
    /// is `StoreError::MalformedRecord`, under `LoadPolicy::Abort`.
    pub fn open_with<O>(
        store_path: impl Into<PathBuf>,
        policy: LoadPolicy,
        observer: O,
    ) -> Result<Self, StoreError>
    where
        O: RepositoryObserver + 'static,
    {
        let store_path = store_path.into();
        let observer: Box<dyn RepositoryObserver> = Box::new(observer);

        let comunas = match load(&store_path, policy) {
            Ok(LoadOutcome { comunas, malformed }) => {
                for err in malformed {
                    observer.notify(RepositoryEvent::MalformedLine(err));
                }
                observer.notify(RepositoryEvent::Loaded {
                    path: store_path.clone(),
                    count: comunas.len(),
                });
                comunas
            }
            Err(err @ StoreError::MalformedRecord { .. }) => return Err(err),
            Err(err) => {
                observer.notify(RepositoryEvent::LoadFailed(err));
                Vec::new()
            }
        };

        Ok(Self {
            store_path,
            comunas,
            observer,
        })
    }

    /// Get the store path
    pub fn path(&self) -> &Path {
        &self.store_path
    }

    /// Number of records held
    pub fn len(&self) -> usize {
        self.comunas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comunas.is_empty()
    }

    /// Rewrite the store from the in-memory collection
    fn persist(&self) {
        match self.write_store() {
            Ok(()) => self.observer.notify(RepositoryEvent::Saved {
                path: self.store_path.clone(),
                count: self.comunas.len(),
            }),
            Err(source) => self
                .observer
                .notify(RepositoryEvent::SaveFailed(StoreError::Unwritable {
                    path: self.store_path.clone(),
                    source,
                })),
        }
    }

    fn write_store(&self) -> io::Result<()> {
        let file = File::create(&self.store_path)?;
        write_comunas(file, &self.comunas)
    }
}

fn load(store_path: &Path, policy: LoadPolicy) -> Result<LoadOutcome, StoreError> {
    let file = File::open(store_path).map_err(|source| StoreError::Unreadable {
        path: store_path.to_path_buf(),
        source,
    })?;
    read_comunas(BufReader::new(file), store_path, policy)
}

impl ComunaRepository for FileComunaRepository {
    fn add_comuna(&mut self, comuna: Comuna) {
        if let Err(reason) = check_storable(&comuna) {
            self.observer
                .notify(RepositoryEvent::Rejected(StoreError::UnstorableRecord {
                    id: comuna.id(),
                    reason,
                }));
            return;
        }

        self.comunas.push(comuna.clone());
        self.observer.notify(RepositoryEvent::Added { comuna });
        self.persist();
    }

    fn find_all(&self) -> Vec<Comuna> {
        self.comunas.clone()
    }

    fn find_by_zone(&self, zone: &str) -> Vec<Comuna> {
        self.comunas
            .iter()
            .filter(|c| matches_ignore_case(c.zone(), zone))
            .cloned()
            .collect()
    }

    fn find_by_id(&self, id: i32) -> Option<Comuna> {
        self.comunas.iter().find(|c| c.id() == id).cloned()
    }

    fn find_by_name(&self, name: &str) -> Option<Comuna> {
        self.comunas
            .iter()
            .find(|c| matches_ignore_case(c.name(), name))
            .cloned()
    }
}
