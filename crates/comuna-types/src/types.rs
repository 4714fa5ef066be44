//! Record type held by the repository

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format used wherever a registration date is stored or parsed
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One administrative district record
///
/// Immutable once built. No validation happens here; bad dates are rejected
/// where text is parsed, not at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comuna {
    id: i32,
    zone: String,
    population: i32,
    name: String,
    code: i32,
    registration_date: NaiveDate,
}

impl Comuna {
    pub fn new(
        id: i32,
        zone: impl Into<String>,
        population: i32,
        name: impl Into<String>,
        code: i32,
        registration_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            zone: zone.into(),
            population,
            name: name.into(),
            code,
            registration_date,
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn zone(&self) -> &str {
        &self.zone
    }

    pub fn population(&self) -> i32 {
        self.population
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> i32 {
        self.code
    }

    pub fn registration_date(&self) -> NaiveDate {
        self.registration_date
    }
}

impl fmt::Display for Comuna {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Comuna {{ id: {}, zone: '{}', population: {}, name: '{}', code: {}, registration_date: {} }}",
            self.id,
            self.zone,
            self.population,
            self.name,
            self.code,
            self.registration_date.format(DATE_FORMAT)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_lists_fields_in_order() {
        let comuna = Comuna::new(
            1,
            "Norte",
            10000,
            "Los Colores",
            1,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        );
        assert_eq!(
            comuna.to_string(),
            "Comuna { id: 1, zone: 'Norte', population: 10000, name: 'Los Colores', code: 1, registration_date: 2024-01-01 }"
        );
    }

    #[test]
    fn test_accepts_any_values() {
        let comuna = Comuna::new(
            -5,
            "",
            -1,
            "",
            i32::MAX,
            NaiveDate::from_ymd_opt(1900, 2, 28).unwrap(),
        );
        assert_eq!(comuna.id(), -5);
        assert_eq!(comuna.population(), -1);
        assert_eq!(comuna.code(), i32::MAX);
        assert!(comuna.zone().is_empty());
    }
}
