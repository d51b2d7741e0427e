//! Serialization utilities for durations
//!
//! Durations in configuration documents are written as whole milliseconds.
//! Serializing truncates toward zero, so a sub-millisecond remainder does not
//! survive a round trip.

use std::time::Duration;

use serde::{Deserialize, Deserializer, Serializer};

/// Serde serialization result type
type SerializeResult<S> = Result<<S as Serializer>::Ok, <S as Serializer>::Error>;

fn millis(duration: &Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Custom serialization module for Duration as milliseconds
///
/// # Usage
/// ```rust
/// use std::time::Duration;
///
/// use memocache::duration_millis;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Example {
///     #[serde(with = "duration_millis")]
///     timeout: Duration,
/// }
/// ```
pub mod duration_millis {
    use super::{millis, Deserialize, Deserializer, Duration, SerializeResult, Serializer};

    /// Serialize a Duration as milliseconds (u64)
    pub fn serialize<S>(duration: &Duration, serializer: S) -> SerializeResult<S>
    where
        S: Serializer,
    {
        serializer.serialize_u64(millis(duration))
    }

    /// Deserialize milliseconds (u64) into a Duration
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}

/// Same as [`duration_millis`], for optional durations
pub mod option_duration_millis {
    use super::{millis, Deserialize, Deserializer, Duration, SerializeResult, Serializer};

    /// Serialize an optional Duration as optional milliseconds
    #[allow(clippy::ref_option)]
    pub fn serialize<S>(duration: &Option<Duration>, serializer: S) -> SerializeResult<S>
    where
        S: Serializer,
    {
        match duration {
            Some(duration) => serializer.serialize_some(&millis(duration)),
            None => serializer.serialize_none(),
        }
    }

    /// Deserialize optional milliseconds into an optional Duration
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<u64>::deserialize(deserializer)?.map(Duration::from_millis))
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for serialization utilities
    //!
    //! Tests cover duration_millis and option_duration_millis through JSON,
    //! including the zero and absent cases.

    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Serialize, Deserialize, PartialEq, Debug)]
    struct TestStruct {
        #[serde(with = "duration_millis")]
        timeout: Duration,
        #[serde(with = "option_duration_millis", default)]
        ttl: Option<Duration>,
    }

    /// Tests that Duration serializes to milliseconds as u64
    #[test]
    fn test_duration_millis_serialize() {
        let data =
            TestStruct { timeout: Duration::from_millis(1500), ttl: Some(Duration::from_secs(2)) };

        let json = serde_json::to_string(&data).expect("Should serialize valid struct");
        assert_eq!(json, r#"{"timeout":1500,"ttl":2000}"#);
    }

    /// Tests that milliseconds deserialize to Duration
    #[test]
    fn test_duration_millis_deserialize() {
        let data: TestStruct =
            serde_json::from_str(r#"{"timeout":0,"ttl":250}"#).expect("Should deserialize");

        assert_eq!(data.timeout, Duration::ZERO);
        assert_eq!(data.ttl, Some(Duration::from_millis(250)));
    }

    /// Tests that a missing or null optional duration becomes None
    #[test]
    fn test_option_duration_millis_absent() {
        let missing: TestStruct =
            serde_json::from_str(r#"{"timeout":10}"#).expect("Should deserialize");
        let null: TestStruct =
            serde_json::from_str(r#"{"timeout":10,"ttl":null}"#).expect("Should deserialize");

        assert_eq!(missing.ttl, None);
        assert_eq!(null.ttl, None);
    }

    /// Tests that sub-millisecond precision is truncated on serialization
    #[test]
    fn test_duration_millis_truncates_sub_millisecond() {
        let data = TestStruct {
            timeout: Duration::from_micros(1_500),
            ttl: Some(Duration::from_nanos(999_999)),
        };

        let json = serde_json::to_string(&data).expect("Should serialize valid struct");
        assert_eq!(json, r#"{"timeout":1,"ttl":0}"#);

        let back: TestStruct = serde_json::from_str(&json).expect("Should deserialize");
        assert_eq!(back.timeout, Duration::from_millis(1));
        assert_eq!(back.ttl, Some(Duration::ZERO));
    }

    /// Tests that a negative duration is rejected
    #[test]
    fn test_duration_millis_rejects_negative() {
        let result = serde_json::from_str::<TestStruct>(r#"{"timeout":-5}"#);
        assert!(result.is_err());
    }
}
