//! Reading status of a library entry.

use crate::error::ReadifyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where a book sits in the reader's queue.
///
/// Variant order is the enumeration order used for statistics output.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ReadingStatus {
    #[default]
    Planned,
    Reading,
    Completed,
    Dropped,
}

impl ReadingStatus {
    /// All statuses in enumeration order.
    pub const ALL: [ReadingStatus; 4] = [
        ReadingStatus::Planned,
        ReadingStatus::Reading,
        ReadingStatus::Completed,
        ReadingStatus::Dropped,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReadingStatus::Planned => "planned",
            ReadingStatus::Reading => "reading",
            ReadingStatus::Completed => "completed",
            ReadingStatus::Dropped => "dropped",
        }
    }

    /// Strict parse; accepts any case and surrounding whitespace.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "planned" => Some(ReadingStatus::Planned),
            "reading" => Some(ReadingStatus::Reading),
            "completed" => Some(ReadingStatus::Completed),
            "dropped" => Some(ReadingStatus::Dropped),
            _ => None,
        }
    }

    /// Coercing parse: anything unrecognized becomes `Planned`.
    pub fn parse_lenient(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }
}

impl FromStr for ReadingStatus {
    type Err = ReadifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ReadifyError::Validation {
            field: "status".to_string(),
            message: format!(
                "'{}' is not one of planned, reading, completed, dropped",
                s
            ),
        })
    }
}

impl fmt::Display for ReadingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_roundtrip() {
        for status in ReadingStatus::ALL {
            assert_eq!(ReadingStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn test_parse_ignores_case_and_whitespace() {
        assert_eq!(
            ReadingStatus::parse("  Completed "),
            Some(ReadingStatus::Completed)
        );
    }

    #[test]
    fn test_lenient_parse_defaults_to_planned() {
        assert_eq!(ReadingStatus::parse_lenient("finished"), ReadingStatus::Planned);
        assert_eq!(ReadingStatus::parse_lenient(""), ReadingStatus::Planned);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!("abandoned".parse::<ReadingStatus>().is_err());
        assert_eq!(
            "dropped".parse::<ReadingStatus>().unwrap(),
            ReadingStatus::Dropped
        );
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&ReadingStatus::Reading).unwrap();
        assert_eq!(json, "\"reading\"");

        let parsed: ReadingStatus = serde_json::from_str("\"dropped\"").unwrap();
        assert_eq!(parsed, ReadingStatus::Dropped);
        // Coercion of stored values lives in `Book`'s field deserializer.
        assert!(serde_json::from_str::<ReadingStatus>("\"on-hold\"").is_err());
    }

    #[test]
    fn test_enumeration_order() {
        let mut shuffled = vec![
            ReadingStatus::Dropped,
            ReadingStatus::Planned,
            ReadingStatus::Completed,
            ReadingStatus::Reading,
        ];
        shuffled.sort();
        assert_eq!(shuffled, ReadingStatus::ALL.to_vec());
    }
}
