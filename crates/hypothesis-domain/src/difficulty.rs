//! Difficulty module - how hard a research question is expected to be

use crate::validation::ValidationError;

/// Difficulty rating attached to a thread
///
/// Agent-created threads default to [`Difficulty::Research`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    /// Introductory problems
    Beginner,

    /// Requires some background
    Intermediate,

    /// Requires specialist knowledge
    Advanced,

    /// Open research problem
    #[default]
    Research,
}

impl Difficulty {
    /// All difficulties in ascending order
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
        Difficulty::Research,
    ];

    /// Get the difficulty name as sent on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
            Difficulty::Research => "research",
        }
    }

    /// Parse a difficulty, failing with a validation error on field `difficulty`
    ///
    /// # Examples
    ///
    /// ```
    /// use hypothesis_domain::Difficulty;
    ///
    /// assert_eq!(Difficulty::parse("Advanced").unwrap(), Difficulty::Advanced);
    /// assert!(Difficulty::parse("impossible").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            "research" => Ok(Difficulty::Research),
            _ => Err(ValidationError::single(
                "difficulty",
                format!(
                    "must be one of beginner, intermediate, advanced, research (got '{}')",
                    s
                ),
            )),
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
