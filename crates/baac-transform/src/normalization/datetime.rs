//! Accident date/time assembly.
//!
//! The export splits the accident timestamp into `mois`, `jour` and `hrmn`
//! (`"1615"` for 16:15, `"15"` for 00:15) and leaves the year implicit.

use baac_model::CellValue;
use chrono::{NaiveDate, NaiveTime};

use super::NormalizeError;
use super::numeric::parse_integer;

fn parse_component(value: &str) -> Option<u32> {
    parse_integer(value).and_then(|number| u32::try_from(number).ok())
}

fn parse_time(hour: &str, minute: &str, raw: &str) -> Result<NaiveTime, NormalizeError> {
    let invalid = || NormalizeError::InvalidTime {
        value: raw.to_string(),
    };
    let hour = parse_component(hour).ok_or_else(invalid)?;
    let minute = parse_component(minute).ok_or_else(invalid)?;
    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(invalid)
}

/// Build the accident date, with its time when `hour_minute` carries one.
///
/// - blank `month` or `day`: empty
/// - `hour_minute` longer than two characters: `HHMM`, the last two
///   characters being minutes
/// - exactly two characters: minutes past midnight
/// - shorter: date only
///
/// Impossible dates and times are errors, never coerced.
pub fn compose_datetime(
    year: i32,
    month: &str,
    day: &str,
    hour_minute: &str,
) -> Result<CellValue, NormalizeError> {
    if month.trim().is_empty() || day.trim().is_empty() {
        return Ok(CellValue::Empty);
    }
    let date = parse_component(month)
        .zip(parse_component(day))
        .and_then(|(m, d)| NaiveDate::from_ymd_opt(year, m, d))
        .ok_or_else(|| NormalizeError::InvalidDate {
            year,
            month: month.to_string(),
            day: day.to_string(),
        })?;

    let length = hour_minute.chars().count();
    let time = if length > 2 {
        let split = hour_minute
            .char_indices()
            .nth(length - 2)
            .map_or(0, |(idx, _)| idx);
        let (hour, minute) = hour_minute.split_at(split);
        parse_time(hour, minute, hour_minute)?
    } else if length == 2 {
        parse_time("0", hour_minute, hour_minute)?
    } else {
        return Ok(CellValue::Date(date));
    };
    Ok(CellValue::DateTime(date.and_time(time)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn datetime(month: u32, day: u32, hour: u32, minute: u32) -> CellValue {
        CellValue::DateTime(
            NaiveDate::from_ymd_opt(2009, month, day)
                .unwrap()
                .and_hms_opt(hour, minute, 0)
                .unwrap(),
        )
    }

    #[test]
    fn test_full_hhmm() {
        assert_eq!(
            compose_datetime(2009, "10", "4", "1615"),
            Ok(datetime(10, 4, 16, 15))
        );
        assert_eq!(
            compose_datetime(2009, "3", "15", "800"),
            Ok(datetime(3, 15, 8, 0))
        );
        assert_eq!(
            compose_datetime(2009, "12", "31", "2359"),
            Ok(datetime(12, 31, 23, 59))
        );
    }

    #[test]
    fn test_minutes_only() {
        assert_eq!(
            compose_datetime(2009, "10", "4", "15"),
            Ok(datetime(10, 4, 0, 15))
        );
    }

    #[test]
    fn test_bare_date() {
        let date = NaiveDate::from_ymd_opt(2009, 10, 4).unwrap();
        assert_eq!(compose_datetime(2009, "10", "4", ""), Ok(CellValue::Date(date)));
        assert_eq!(compose_datetime(2009, "10", "4", "5"), Ok(CellValue::Date(date)));
    }

    #[test]
    fn test_missing_month_or_day() {
        assert_eq!(compose_datetime(2009, "", "4", "1615"), Ok(CellValue::Empty));
        assert_eq!(compose_datetime(2009, "10", " ", "1615"), Ok(CellValue::Empty));
    }

    #[test]
    fn test_year_is_configurable() {
        let date = NaiveDate::from_ymd_opt(2012, 2, 29).unwrap();
        assert_eq!(compose_datetime(2012, "2", "29", ""), Ok(CellValue::Date(date)));
    }

    #[test]
    fn test_impossible_date() {
        assert_eq!(
            compose_datetime(2009, "4", "31", "1200"),
            Err(NormalizeError::InvalidDate {
                year: 2009,
                month: "4".to_string(),
                day: "31".to_string(),
            })
        );
        assert!(compose_datetime(2009, "2", "29", "").is_err());
        assert!(compose_datetime(2009, "13", "1", "").is_err());
        assert!(compose_datetime(2009, "x", "1", "").is_err());
    }

    #[test]
    fn test_impossible_time() {
        assert_eq!(
            compose_datetime(2009, "1", "1", "2460"),
            Err(NormalizeError::InvalidTime {
                value: "2460".to_string()
            })
        );
        assert!(compose_datetime(2009, "1", "1", "2500").is_err());
        assert!(compose_datetime(2009, "1", "1", "75").is_err());
        assert!(compose_datetime(2009, "1", "1", "8:00").is_err());
    }
}
