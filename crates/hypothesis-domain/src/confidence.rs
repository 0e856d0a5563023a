//! Confidence level module

use crate::validation::Violation;
use std::fmt;

/// Lowest accepted confidence percentage
pub const MIN_CONFIDENCE: i32 = 0;

/// Highest accepted confidence percentage
pub const MAX_CONFIDENCE: i32 = 100;

/// Self-assessed certainty expressed as an integer percentage [0, 100]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ConfidenceLevel(u8);

impl ConfidenceLevel {
    /// Create a confidence level, rejecting values outside [0, 100]
    ///
    /// # Examples
    ///
    /// ```
    /// use hypothesis_domain::ConfidenceLevel;
    ///
    /// assert_eq!(ConfidenceLevel::new(72).unwrap().percent(), 72);
    /// assert!(ConfidenceLevel::new(101).is_err());
    /// ```
    pub fn new(percent: i32) -> Result<Self, String> {
        if (MIN_CONFIDENCE..=MAX_CONFIDENCE).contains(&percent) {
            Ok(Self(percent as u8))
        } else {
            Err(format!(
                "must be between {} and {} (got {})",
                MIN_CONFIDENCE, MAX_CONFIDENCE, percent
            ))
        }
    }

    /// Get the percentage value
    pub fn percent(&self) -> u8 {
        self.0
    }

    /// Get the level as a fraction in [0.0, 1.0]
    pub fn as_fraction(&self) -> f64 {
        f64::from(self.0) / 100.0
    }

    pub(crate) fn check(field: &str, percent: i32) -> Option<Violation> {
        Self::new(percent).err().map(|issue| Violation::new(field, issue))
    }
}

impl TryFrom<i32> for ConfidenceLevel {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
