//! Domain layer: record model helpers and repository abstractions

pub mod model;
pub mod repository;

pub use model::*;
pub use repository::{
    matches_ignore_case, ComunaRepository, RecordingObserver, RepositoryEvent,
    RepositoryObserver,
};
