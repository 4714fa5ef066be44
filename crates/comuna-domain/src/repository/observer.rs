//! Diagnostic events emitted by repositories
//!
//! Repositories never log directly. They hand events to an observer, so the
//! binary can route them to the logger and tests can inspect them.

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use comuna_types::{Comuna, StoreError};

#[derive(Debug)]
pub enum RepositoryEvent {
    /// Store read completely
    Loaded { path: PathBuf, count: usize },
    /// Store missing or unreadable; the repository starts empty
    LoadFailed(StoreError),
    /// A line was skipped while loading; the next save drops it from the store
    MalformedLine(StoreError),
    Added { comuna: Comuna },
    /// Record refused because it cannot be written as a single store line
    Rejected(StoreError),
    Saved { path: PathBuf, count: usize },
    /// Store could not be rewritten; memory and disk now differ
    SaveFailed(StoreError),
}

/// Receiver of repository events
pub trait RepositoryObserver {
    fn notify(&self, event: RepositoryEvent);
}

impl<T: RepositoryObserver + ?Sized> RepositoryObserver for Rc<T> {
    fn notify(&self, event: RepositoryEvent) {
        (**self).notify(event)
    }
}

/// Observer that keeps every event in memory
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: RefCell<Vec<RepositoryEvent>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain the recorded events
    pub fn take_events(&self) -> Vec<RepositoryEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

impl RepositoryObserver for RecordingObserver {
    fn notify(&self, event: RepositoryEvent) {
        self.events.borrow_mut().push(event);
    }
}
