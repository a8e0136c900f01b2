//! User records consumed by the aggregation.
//!
//! Upstream user documents carry dozens of fields; only the handful the
//! aggregation reads survive decoding into [`UserRecord`].

use std::fmt;
use std::str::FromStr;

/// Gender as reported by the upstream users API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

/// Error returned when parsing a gender from upstream text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseGenderError {
    value: String,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => f.write_str("male"),
            Self::Female => f.write_str("female"),
        }
    }
}

impl fmt::Display for ParseGenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported gender `{}`", self.value)
    }
}

impl std::error::Error for ParseGenderError {}

impl FromStr for Gender {
    type Err = ParseGenderError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            _ => Err(ParseGenderError {
                value: value.to_owned(),
            }),
        }
    }
}

/// One upstream user, reduced to the fields the aggregation reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    /// Employer department; the aggregation key.
    pub department: String,
    pub gender: Gender,
    pub age: u32,
    pub hair_color: String,
    pub first_name: String,
    pub last_name: String,
    /// Postal code of the user's home address.
    pub postal_code: String,
}

/// Key for the name-to-postal-code map: first and last name joined without
/// a separator.
pub(crate) fn name_key(first_name: &str, last_name: &str) -> String {
    format!("{first_name}{last_name}")
}
