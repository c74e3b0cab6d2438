//! Date helpers for records exchanged with the browser frontend

use chrono::{DateTime, NaiveDate, Utc};

/// Parse a calendar date from either `YYYY-MM-DD` or an RFC 3339 timestamp.
///
/// Timestamps are converted to UTC before the date is taken.
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok().or_else(|| {
        DateTime::parse_from_rfc3339(value).ok().map(|ts| ts.with_timezone(&Utc).date_naive())
    })
}

/// Serde adapter storing a `NaiveDate` as `YYYY-MM-DD` while accepting
/// full timestamps on input.
///
/// # Usage
/// ```rust
/// use chrono::NaiveDate;
/// use diwan_domain::utils::dates::flexible_date;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Letter {
///     #[serde(with = "flexible_date")]
///     date: NaiveDate,
/// }
///
/// let letter: Letter = serde_json::from_str(r#"{"date":"2024-03-05T21:30:00Z"}"#).unwrap();
/// assert_eq!(letter.date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
/// ```
pub mod flexible_date {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    /// Serde serialization result type
    type SerializeResult<S> = Result<<S as Serializer>::Ok, <S as Serializer>::Error>;

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> SerializeResult<S>
    where
        S: Serializer,
    {
        serializer.collect_str(&date.format("%Y-%m-%d"))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_calendar_date(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid calendar date: {raw}")))
    }
}
