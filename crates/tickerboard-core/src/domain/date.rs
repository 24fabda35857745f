use std::fmt::{Display, Formatter};

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::macros::{date, format_description};
use time::{Date, OffsetDateTime};

use crate::error::ValidationError;

/// Calendar date of a trading day, serialized as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TradingDate(Date);

impl TradingDate {
    /// Earliest day the price provider is queried for, matching the
    /// original dashboard's date picker floor.
    pub const EARLIEST_SUPPORTED: TradingDate = TradingDate(date!(2015 - 01 - 01));

    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        Date::parse(input, format_description!("[year]-[month]-[day]"))
            .map(Self)
            .map_err(|_| ValidationError::InvalidDate {
                value: input.to_owned(),
            })
    }

    /// Current date in UTC.
    pub fn today_utc() -> Self {
        Self(OffsetDateTime::now_utc().date())
    }

    pub fn from_date(date: Date) -> Self {
        Self(date)
    }

    /// Date of a provider-supplied unix timestamp, interpreted in UTC.
    pub fn from_unix_timestamp(ts: i64) -> Result<Self, ValidationError> {
        OffsetDateTime::from_unix_timestamp(ts)
            .map(|dt| Self(dt.date()))
            .map_err(|_| ValidationError::InvalidDate {
                value: ts.to_string(),
            })
    }

    /// Unix timestamp of this day's midnight, UTC.
    pub fn unix_timestamp(self) -> i64 {
        self.0.midnight().assume_utc().unix_timestamp()
    }

    /// Midnight of the following day, used as the exclusive upper bound of
    /// a provider query window.
    pub fn exclusive_end_timestamp(self) -> i64 {
        self.unix_timestamp() + 86_400
    }

    pub fn into_inner(self) -> Date {
        self.0
    }

    pub fn format_ymd(self) -> String {
        self.0
            .format(format_description!("[year]-[month]-[day]"))
            .expect("TradingDate must be YMD formattable")
    }
}

impl Display for TradingDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_ymd())
    }
}

impl Serialize for TradingDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.format_ymd())
    }
}

impl<'de> Deserialize<'de> for TradingDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(D::Error::custom)
    }
}

/// Inclusive date window, `start <= end` by construction.
///
/// Deliberately not deserializable: wire input must pass through `new`
/// so the invariant cannot be bypassed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: TradingDate,
    pub end: TradingDate,
}

impl DateRange {
    pub fn new(start: TradingDate, end: TradingDate) -> Result<Self, ValidationError> {
        if start > end {
            return Err(ValidationError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ymd_date() {
        let parsed = TradingDate::parse("2020-01-31").expect("must parse");
        assert_eq!(parsed.format_ymd(), "2020-01-31");
    }

    #[test]
    fn rejects_malformed_date() {
        let err = TradingDate::parse("31/01/2020").expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidDate { .. }));
    }

    #[test]
    fn unix_timestamp_is_utc_midnight() {
        let day = TradingDate::parse("2020-01-01").expect("must parse");
        assert_eq!(day.unix_timestamp(), 1_577_836_800);
        assert_eq!(day.exclusive_end_timestamp(), 1_577_923_200);
    }

    #[test]
    fn rejects_inverted_range() {
        let start = TradingDate::parse("2020-02-01").expect("must parse");
        let end = TradingDate::parse("2020-01-01").expect("must parse");
        assert!(matches!(
            DateRange::new(start, end),
            Err(ValidationError::InvalidRange { .. })
        ));
    }

}
