//! Repository trait definitions for data persistence

mod observer;

pub use observer::{RecordingObserver, RepositoryEvent, RepositoryObserver};

use comuna_types::{Comuna, DomainError};

/// Repository for comuna records
///
/// Storage failures never surface through these methods; implementations
/// report them to their observer instead.
pub trait ComunaRepository {
    /// Append a record and persist the whole collection
    ///
    /// File-backed implementations refuse records whose zone or name holds
    /// a line break and report them to their observer instead.
    fn add_comuna(&mut self, comuna: Comuna);

    /// All records in insertion order
    fn find_all(&self) -> Vec<Comuna>;

    /// Records whose zone matches, ignoring case
    fn find_by_zone(&self, zone: &str) -> Vec<Comuna>;

    /// First record with the given id
    fn find_by_id(&self, id: i32) -> Option<Comuna>;

    /// First record whose name matches, ignoring case
    fn find_by_name(&self, name: &str) -> Option<Comuna>;

    /// Like `find_by_id`, but a missing record is an error
    fn require_by_id(&self, id: i32) -> Result<Comuna, DomainError> {
        self.find_by_id(id).ok_or(DomainError::RecordNotFound(id))
    }
}

/// Case-insensitive text equality used by zone and name lookups
pub fn matches_ignore_case(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    struct VecRepository(Vec<Comuna>);

    impl ComunaRepository for VecRepository {
        fn add_comuna(&mut self, comuna: Comuna) {
            self.0.push(comuna);
        }

        fn find_all(&self) -> Vec<Comuna> {
            self.0.clone()
        }

        fn find_by_zone(&self, zone: &str) -> Vec<Comuna> {
            self.0
                .iter()
                .filter(|c| matches_ignore_case(c.zone(), zone))
                .cloned()
                .collect()
        }

        fn find_by_id(&self, id: i32) -> Option<Comuna> {
            self.0.iter().find(|c| c.id() == id).cloned()
        }

        fn find_by_name(&self, name: &str) -> Option<Comuna> {
            self.0
                .iter()
                .find(|c| matches_ignore_case(c.name(), name))
                .cloned()
        }
    }

    #[test]
    fn test_require_by_id() {
        let mut repo = VecRepository(Vec::new());
        let comuna = Comuna::new(
            1,
            "Norte",
            10000,
            "Los Colores",
            1,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        );
        repo.add_comuna(comuna.clone());

        assert_eq!(repo.require_by_id(1), Ok(comuna));
        assert_eq!(repo.require_by_id(999), Err(DomainError::RecordNotFound(999)));
    }

    #[test]
    fn test_matches_ignore_case() {
        assert!(matches_ignore_case("Norte", "NORTE"));
        assert!(matches_ignore_case("Ñuñoa", "ÑUÑOA"));
        assert!(!matches_ignore_case("Norte", "Sur"));
        assert!(!matches_ignore_case("Norte", "Norte "));
    }
}
