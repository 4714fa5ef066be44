//! Domain model types

pub mod registration_date;

pub use comuna_types::Comuna;
pub use registration_date::{parse_date, validate_date};
