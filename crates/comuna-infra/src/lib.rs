//! Infrastructure layer
//!
//! Concrete implementations of domain interfaces: the flat-file store codec,
//! the file-backed repository, and the observer that routes repository
//! events to the `log` facade.

pub mod line_codec;
pub mod log_observer;
pub mod persistence;

pub use log_observer::LogObserver;
pub use persistence::FileComunaRepository;
