//! NumericDate (RFC 7519 Section 2)
//!
//! Seconds since the Unix epoch. The wire form is always a JSON integer;
//! decimal input is accepted and floored to the whole second.

use chrono::{DateTime, Utc};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A wall-clock instant carried by the `exp`, `nbf` and `iat` claims
///
/// The in-memory instant keeps full precision so that a caller can compare
/// against it exactly. Sub-second precision is dropped on every encode and
/// every decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NumericDate(DateTime<Utc>);

impl NumericDate {
    /// Wrap an instant
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    /// The current instant
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Instant at a whole number of seconds since the epoch
    ///
    /// `None` when the value is outside the representable range.
    pub fn from_timestamp(seconds: i64) -> Option<Self> {
        DateTime::from_timestamp(seconds, 0).map(Self)
    }

    /// Whole seconds since the epoch, sub-second precision discarded
    pub fn timestamp(&self) -> i64 {
        self.0.timestamp()
    }

    /// The wrapped instant
    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }
}

impl From<DateTime<Utc>> for NumericDate {
    fn from(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }
}

impl From<NumericDate> for DateTime<Utc> {
    fn from(date: NumericDate) -> Self {
        date.0
    }
}

impl fmt::Display for NumericDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.timestamp())
    }
}

impl Serialize for NumericDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.timestamp())
    }
}

impl<'de> Deserialize<'de> for NumericDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(NumericDateVisitor)
    }
}

struct NumericDateVisitor;

impl NumericDateVisitor {
    fn from_seconds<E: de::Error>(seconds: i64) -> Result<NumericDate, E> {
        NumericDate::from_timestamp(seconds)
            .ok_or_else(|| E::custom(format!("numeric date {seconds} is out of range")))
    }
}

impl<'de> Visitor<'de> for NumericDateVisitor {
    type Value = NumericDate;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a number of seconds since the Unix epoch")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Self::from_seconds(value)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        let seconds = i64::try_from(value)
            .map_err(|_| E::custom(format!("numeric date {value} is out of range")))?;
        Self::from_seconds(seconds)
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        if !value.is_finite() || value < i64::MIN as f64 || value >= i64::MAX as f64 {
            return Err(E::custom(format!("numeric date {value} is out of range")));
        }
        Self::from_seconds(value.floor() as i64)
    }
}
