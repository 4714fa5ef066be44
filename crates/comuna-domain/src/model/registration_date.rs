//! Registration date checks shared by callers that build records by hand

use chrono::NaiveDate;
use comuna_types::{DomainError, DATE_FORMAT};

/// Build a calendar date from loose components
///
/// Out-of-range components produce `DomainError::InvalidBirthDate` carrying
/// the input as `day/month/year`.
pub fn validate_date(year: i32, month: i32, day: i32) -> Result<NaiveDate, DomainError> {
    let invalid = || DomainError::InvalidBirthDate(format!("{}/{}/{}", day, month, year));

    let month = u32::try_from(month).map_err(|_| invalid())?;
    let day = u32::try_from(day).map_err(|_| invalid())?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(text: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT)
        .map_err(|_| DomainError::InvalidBirthDate(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_date_ok() {
        let date = validate_date(2024, 2, 29).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn test_validate_date_negative_components() {
        let err = validate_date(-1999, -1, -2).unwrap_err();
        assert_eq!(err, DomainError::InvalidBirthDate("-2/-1/-1999".to_string()));
    }

    #[test]
    fn test_validate_date_out_of_range() {
        assert!(validate_date(2023, 2, 29).is_err());
        assert!(validate_date(2024, 13, 1).is_err());
        assert!(validate_date(2024, 4, 31).is_err());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-01-01").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
        assert!(matches!(
            parse_date("01/01/2024"),
            Err(DomainError::InvalidBirthDate(_))
        ));
        assert!(parse_date("2024-02-30").is_err());
    }
}
