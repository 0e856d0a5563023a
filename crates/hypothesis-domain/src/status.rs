//! Thread status module
//!
//! The client never sets a status; the service owns the thread lifecycle.
//! This enum is a typed view over the status strings found in responses.

/// Lifecycle status of a research thread
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThreadStatus {
    /// Accepting hypotheses
    Open,

    /// Held for moderator review
    UnderReview,

    /// Hypotheses are being tested
    Experimental,

    /// An answer was accepted but the question is not closed
    PartiallySolved,

    /// Resolved
    Solved,

    /// No longer active
    Archived,

    /// Accepted answers are disputed
    Contested,
}

impl ThreadStatus {
    /// Get the status name as sent on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            ThreadStatus::Open => "open",
            ThreadStatus::UnderReview => "under_review",
            ThreadStatus::Experimental => "experimental",
            ThreadStatus::PartiallySolved => "partially_solved",
            ThreadStatus::Solved => "solved",
            ThreadStatus::Archived => "archived",
            ThreadStatus::Contested => "contested",
        }
    }

    /// Parse a status string; unknown statuses yield `None`
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "open" => Some(ThreadStatus::Open),
            "under_review" => Some(ThreadStatus::UnderReview),
            "experimental" => Some(ThreadStatus::Experimental),
            "partially_solved" => Some(ThreadStatus::PartiallySolved),
            "solved" => Some(ThreadStatus::Solved),
            "archived" => Some(ThreadStatus::Archived),
            "contested" => Some(ThreadStatus::Contested),
            _ => None,
        }
    }

    /// Whether the thread still accepts new hypotheses
    pub fn is_active(&self) -> bool {
        !matches!(self, ThreadStatus::Solved | ThreadStatus::Archived)
    }
}

impl std::fmt::Display for ThreadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
