//! Age range codec.
//!
//! A department's age range is exchanged as `"<min>-<max>"` text. Before any
//! age has been observed the range is the empty sentinel: `min` holds the
//! largest representable bound and `max` the smallest, so the first merged
//! age wins both comparisons and collapses the range to `"<age>-<age>"`.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Inclusive `[min, max]` age range, or the empty sentinel.
///
/// # Examples
/// ```
/// use department_stats::domain::AgeRange;
///
/// let range = AgeRange::EMPTY.merged_with(30).merged_with(25);
/// assert_eq!(range.serialize(), "25-30");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AgeRange {
    min: i64,
    max: i64,
}

/// Error returned when age range text cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseAgeRangeError {
    /// No `-` separates the two bounds.
    #[error("age range `{input}` is missing the `-` separator")]
    MissingSeparator {
        /// Offending input.
        input: String,
    },
    /// A bound is not a base-10 integer.
    #[error("age range `{input}` has a non-numeric bound: {source}")]
    InvalidBound {
        /// Offending input.
        input: String,
        /// Integer parse failure.
        source: ParseIntError,
    },
    /// `min` is greater than `max`.
    #[error("age range `{input}` has min greater than max")]
    Inverted {
        /// Offending input.
        input: String,
    },
}

impl AgeRange {
    /// Sentinel for "no ages observed yet".
    pub const EMPTY: Self = Self {
        min: i64::MAX,
        max: i64::MIN,
    };

    /// Build a non-empty range, returning `None` when `min > max`.
    pub const fn new(min: i64, max: i64) -> Option<Self> {
        if min > max {
            None
        } else {
            Some(Self { min, max })
        }
    }

    /// Lower bound; `i64::MAX` for the sentinel.
    pub const fn min(&self) -> i64 {
        self.min
    }

    /// Upper bound; `i64::MIN` for the sentinel.
    pub const fn max(&self) -> i64 {
        self.max
    }

    /// Whether this is the empty sentinel.
    pub const fn is_empty(&self) -> bool {
        self.min > self.max
    }

    /// Parse `"<min>-<max>"` text; empty text yields [`AgeRange::EMPTY`].
    ///
    /// The text is split on the first `-` only.
    ///
    /// # Errors
    /// Returns [`ParseAgeRangeError`] for non-empty text that is not two
    /// integers separated by `-` with `min <= max`.
    pub fn parse(text: &str) -> Result<Self, ParseAgeRangeError> {
        if text.is_empty() {
            return Ok(Self::EMPTY);
        }
        let (min, max) =
            text.split_once('-')
                .ok_or_else(|| ParseAgeRangeError::MissingSeparator {
                    input: text.to_owned(),
                })?;
        let parse_bound = |bound: &str| {
            bound
                .parse::<i64>()
                .map_err(|source| ParseAgeRangeError::InvalidBound {
                    input: text.to_owned(),
                    source,
                })
        };
        Self::new(parse_bound(min)?, parse_bound(max)?).ok_or_else(|| {
            ParseAgeRangeError::Inverted {
                input: text.to_owned(),
            }
        })
    }

    /// Render `"<min>-<max>"` unconditionally, sentinel bounds included.
    ///
    /// Use [`AgeRange::to_text`] when the sentinel should render as empty.
    pub fn serialize(&self) -> String {
        format!("{}-{}", self.min, self.max)
    }

    /// Render the range, or the empty string for the sentinel.
    pub fn to_text(&self) -> String {
        if self.is_empty() {
            String::new()
        } else {
            self.serialize()
        }
    }

    /// Widen the range so it includes `age`.
    #[must_use]
    pub fn merged_with(self, age: u32) -> Self {
        let age = i64::from(age);
        Self {
            min: self.min.min(age),
            max: self.max.max(age),
        }
    }
}

impl Default for AgeRange {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl fmt::Display for AgeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl FromStr for AgeRange {
    type Err = ParseAgeRangeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

/// Merge `age` into the range encoded by `current` and return the new text.
///
/// Empty `current` is the sentinel, so the result is `"<age>-<age>"`.
/// Malformed `current` text is discarded and the range restarts from `age`.
///
/// # Examples
/// ```
/// use department_stats::domain::merge_age;
///
/// assert_eq!(merge_age("", 24), "24-24");
/// assert_eq!(merge_age("20-40", 18), "18-40");
/// assert_eq!(merge_age("20-40", 25), "20-40");
/// ```
pub fn merge_age(current: &str, age: u32) -> String {
    let range = AgeRange::parse(current).unwrap_or_else(|error| {
        tracing::warn!(%error, "discarding malformed age range");
        AgeRange::EMPTY
    });
    range.merged_with(age).serialize()
}
