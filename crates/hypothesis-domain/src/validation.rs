//! Client-side validation errors
//!
//! Requests are checked before any I/O happens. A failed check never stops
//! at the first problem: every violation is collected so the caller sees
//! all offending fields at once.

use thiserror::Error;

/// A single failed precondition on a named field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {issue}")]
pub struct Violation {
    /// Field path in wire casing (e.g. `title`, `evidence[2].description`)
    pub field: String,

    /// Human-readable description of the problem
    pub issue: String,
}

impl Violation {
    /// Create a new violation
    pub fn new(field: impl Into<String>, issue: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            issue: issue.into(),
        }
    }
}

/// Input failed one or more preconditions
///
/// Always holds at least one [`Violation`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid request: {}", join(.violations))]
pub struct ValidationError {
    violations: Vec<Violation>,
}

impl ValidationError {
    /// Create an error for a single field
    pub fn single(field: impl Into<String>, issue: impl Into<String>) -> Self {
        Self {
            violations: vec![Violation::new(field, issue)],
        }
    }

    /// All collected violations, in the order they were found
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Names of the fields that failed
    pub fn fields(&self) -> Vec<&str> {
        self.violations.iter().map(|v| v.field.as_str()).collect()
    }

    /// Check whether a given field failed
    pub fn has_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

fn join(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(Violation::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Accumulates violations while a request is checked
#[derive(Debug, Default)]
pub(crate) struct Validator {
    violations: Vec<Violation>,
}

impl Validator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Blank (empty or whitespace-only) strings count as missing.
    pub(crate) fn require_non_empty(&mut self, field: &str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.violations.push(Violation::new(field, "must not be empty"));
        }
        self
    }

    pub(crate) fn push(&mut self, violation: Violation) -> &mut Self {
        self.violations.push(violation);
        self
    }

    pub(crate) fn finish(self) -> Result<(), ValidationError> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                violations: self.violations,
            })
        }
    }
}
