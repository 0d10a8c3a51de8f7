//! Timestamp parsing for strings like `2020-03-15T08:30:00.000`.
//!
//! The input is read as a run of numeric fields separated by anything that is
//! not an ASCII digit, in the order year, month, day, hour, minute, second,
//! millisecond. Months are 1-based on input and 0-based in calendar arithmetic.

use std::str::FromStr;
use std::sync::OnceLock;

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};
use regex::Regex;

use crate::error::DateParseError;

/// Number of positional fields a timestamp must carry.
pub const FIELD_COUNT: usize = 7;

static DIGIT_RUNS: OnceLock<Regex> = OnceLock::new();

/// Split `s` into its maximal ASCII digit runs, in order.
///
/// Delimiters at either end do not produce empty tokens.
#[must_use]
pub fn tokenize(s: &str) -> Vec<&str> {
    let re = DIGIT_RUNS.get_or_init(|| Regex::new("[0-9]+").expect("digit run regex must compile"));
    re.find_iter(s).map(|m| m.as_str()).collect()
}

/// The seven named fields of a timestamp, before range checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsoFields {
    pub year: i32,
    /// 1-based, as written.
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    /// The fractional token read as a whole number of milliseconds.
    pub millisecond: u32,
}

impl FromStr for IsoFields {
    type Err = DateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens = tokenize(s);
        if tokens.len() < FIELD_COUNT {
            return Err(DateParseError::MissingFields {
                found: tokens.len(),
            });
        }

        Ok(IsoFields {
            year: field("year", tokens[0])?,
            month: field("month", tokens[1])?,
            day: field("day", tokens[2])?,
            hour: field("hour", tokens[3])?,
            minute: field("minute", tokens[4])?,
            second: field("second", tokens[5])?,
            millisecond: field("millisecond", tokens[6])?,
        })
    }
}

fn field<T: FromStr>(name: &'static str, token: &str) -> Result<T, DateParseError> {
    token.parse().map_err(|_| DateParseError::FieldOverflow {
        field: name,
        token: token.to_string(),
    })
}

fn check(name: &'static str, value: u32, max: u32) -> Result<u32, DateParseError> {
    if value > max {
        return Err(DateParseError::OutOfRange { field: name, value });
    }
    Ok(value)
}

impl IsoFields {
    /// Calendar month index, January = 0.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` when the written month is not 1..=12.
    pub fn month0(&self) -> Result<u32, DateParseError> {
        match self.month {
            1..=12 => Ok(self.month - 1),
            other => Err(DateParseError::OutOfRange {
                field: "month",
                value: other,
            }),
        }
    }

    /// Build the UTC instant these fields describe.
    ///
    /// Values are not rolled over into the next unit: a day 32 or an hour 24
    /// is an error rather than a later date.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` for any field outside its calendar range and
    /// `InvalidInstant` for years chrono cannot represent.
    pub fn to_instant(&self) -> Result<DateTime<Utc>, DateParseError> {
        let month0 = self.month0()?;
        let first_of_year = NaiveDate::from_ymd_opt(self.year, 1, 1)
            .ok_or_else(|| DateParseError::InvalidInstant(format!("year {}", self.year)))?;
        let date = first_of_year
            .with_month0(month0)
            .and_then(|d| d.with_day(self.day))
            .ok_or(DateParseError::OutOfRange {
                field: "day",
                value: self.day,
            })?;

        let time = NaiveTime::from_hms_milli_opt(
            check("hour", self.hour, 23)?,
            check("minute", self.minute, 59)?,
            check("second", self.second, 59)?,
            check("millisecond", self.millisecond, 999)?,
        )
        .ok_or_else(|| DateParseError::InvalidInstant(format!("{self:?}")))?;

        Ok(date.and_time(time).and_utc())
    }
}

/// Parse a timestamp string into a UTC instant.
///
/// Tokens after the seventh are ignored.
///
/// # Errors
///
/// Fails when fewer than seven numeric fields are present, or when a field
/// does not fit its calendar range.
pub fn parse_iso_string(s: &str) -> Result<DateTime<Utc>, DateParseError> {
    s.parse::<IsoFields>()?.to_instant()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayFormat {
    #[default]
    Medium,
    Full,
}

/// Render an instant the way venue and show pages display start times.
#[must_use]
pub fn format_instant(dt: &DateTime<Utc>, format: DisplayFormat) -> String {
    let pattern = match format {
        DisplayFormat::Medium => "%a %m, %d, %Y %-I:%M%p",
        DisplayFormat::Full => "%A %B, %-d, %Y at %-I:%M%p",
    };
    dt.format(pattern).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn parses_full_timestamp() {
        let dt = parse_iso_string("2020-03-15T08:30:00.000").unwrap();
        assert_eq!(dt.year(), 2020);
        assert_eq!(dt.month0(), 2);
        assert_eq!(dt.day(), 15);
        assert_eq!(dt.hour(), 8);
        assert_eq!(dt.minute(), 30);
        assert_eq!(dt.second(), 0);
        assert_eq!(dt.timestamp_subsec_millis(), 0);
    }

    #[test]
    fn fraction_is_whole_milliseconds() {
        let dt = parse_iso_string("2021-12-31 23:59:58.5").unwrap();
        assert_eq!(dt.timestamp_subsec_millis(), 5);
        let dt = parse_iso_string("2021-12-31 23:59:58.123").unwrap();
        assert_eq!(dt.timestamp_subsec_millis(), 123);
    }

    #[test]
    fn any_delimiter_run_separates_fields() {
        let a = parse_iso_string("2019/07/04 -- 12h05m09s :: 250").unwrap();
        let b = parse_iso_string("2019-07-04T12:05:09.250").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn surrounding_delimiters_are_ignored() {
        let dt = parse_iso_string("  T2020-01-02T03:04:05.006Z ").unwrap();
        assert_eq!(dt.to_rfc3339(), "2020-01-02T03:04:05.006+00:00");
    }

    #[test]
    fn extra_fields_are_ignored() {
        let dt = parse_iso_string("2020-03-15T08:30:00.000+05:00").unwrap();
        assert_eq!(dt.hour(), 8);
    }

    #[test]
    fn non_ascii_digits_are_delimiters() {
        assert_eq!(tokenize("2020\u{0663}01"), vec!["2020", "01"]);
    }

    #[test]
    fn short_input_is_rejected() {
        assert_eq!(
            parse_iso_string("2020-03-15"),
            Err(DateParseError::MissingFields { found: 3 })
        );
        assert_eq!(
            parse_iso_string(""),
            Err(DateParseError::MissingFields { found: 0 })
        );
    }

    #[test]
    fn out_of_range_fields_do_not_roll_over() {
        assert_eq!(
            parse_iso_string("2020-13-01T00:00:00.000"),
            Err(DateParseError::OutOfRange {
                field: "month",
                value: 13
            })
        );
        assert_eq!(
            parse_iso_string("2020-00-01T00:00:00.000"),
            Err(DateParseError::OutOfRange {
                field: "month",
                value: 0
            })
        );
        assert_eq!(
            parse_iso_string("2019-02-29T00:00:00.000"),
            Err(DateParseError::OutOfRange {
                field: "day",
                value: 29
            })
        );
        assert_eq!(
            parse_iso_string("2020-01-01T24:00:00.000"),
            Err(DateParseError::OutOfRange {
                field: "hour",
                value: 24
            })
        );
        assert_eq!(
            parse_iso_string("2020-01-01T00:00:00.1000"),
            Err(DateParseError::OutOfRange {
                field: "millisecond",
                value: 1000
            })
        );
    }

    #[test]
    fn oversized_token_is_overflow() {
        let err = parse_iso_string("99999999999-01-01T00:00:00.000").unwrap_err();
        assert!(matches!(err, DateParseError::FieldOverflow { field: "year", .. }));
    }

    #[test]
    fn reparsing_is_stable() {
        let s = "1999-12-31T23:59:59.999";
        assert_eq!(parse_iso_string(s), parse_iso_string(s));
    }

    #[test]
    fn fields_record_is_named() {
        let fields: IsoFields = "2020-03-15T08:30:00.000".parse().unwrap();
        assert_eq!(fields.month, 3);
        assert_eq!(fields.month0(), Ok(2));
        assert_eq!(fields.millisecond, 0);
    }

    #[test]
    fn display_formats() {
        let dt = parse_iso_string("2020-03-15T08:30:00.000").unwrap();
        assert_eq!(format_instant(&dt, DisplayFormat::Medium), "Sun 03, 15, 2020 8:30AM");
        assert_eq!(
            format_instant(&dt, DisplayFormat::Full),
            "Sunday March, 15, 2020 at 8:30AM"
        );
        let evening = parse_iso_string("2020-03-05T20:05:00.000").unwrap();
        assert_eq!(format_instant(&evening, DisplayFormat::Medium), "Thu 03, 05, 2020 8:05PM");
    }
}
