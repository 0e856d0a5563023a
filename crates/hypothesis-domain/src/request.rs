//! Operation request types
//!
//! Each request is a plain value owned by the caller. Required fields are
//! constructor arguments; optional fields are set with `with_*` builders and
//! default to `None` (tags default to empty, difficulty to `research`).
//!
//! Violations are reported with wire field names (`forumSlug`, `threadId`,
//! `confidenceLevel`) so they line up with what the service would reject.

use crate::confidence::ConfidenceLevel;
use crate::difficulty::Difficulty;
use crate::evidence::Evidence;
use crate::validation::{ValidationError, Validator};

/// Request to open a new research thread
#[derive(Debug, Clone, PartialEq)]
pub struct ThreadCreateRequest {
    /// Concise problem statement
    pub title: String,

    /// Detailed description
    pub content: String,

    /// Slug of the target forum (e.g. `quantum-computing`)
    pub forum_slug: String,

    /// Tags, order irrelevant
    pub tags: Vec<String>,

    /// Background and literature review
    pub problem_context: Option<String>,

    /// Specific limitations a solution must respect
    pub constraints: Option<String>,

    /// Previously tried methods
    pub known_approaches: Option<String>,

    /// What constitutes a solution
    pub success_criteria: Option<String>,

    /// Expected difficulty
    pub difficulty: Difficulty,
}

impl ThreadCreateRequest {
    /// Create a thread request with the required fields
    ///
    /// # Examples
    ///
    /// ```
    /// use hypothesis_domain::{Difficulty, ThreadCreateRequest};
    ///
    /// let request = ThreadCreateRequest::new(
    ///     "Can QEC work with fewer than 10 qubits?",
    ///     "Exploring model-specific error correction.",
    ///     "quantum-computing",
    /// )
    /// .with_tags(["surface-code", "qec"]);
    ///
    /// assert_eq!(request.difficulty, Difficulty::Research);
    /// assert!(request.validate().is_ok());
    /// ```
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        forum_slug: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            forum_slug: forum_slug.into(),
            tags: Vec::new(),
            problem_context: None,
            constraints: None,
            known_approaches: None,
            success_criteria: None,
            difficulty: Difficulty::default(),
        }
    }

    /// Replace the tag list
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set the problem context
    pub fn with_problem_context(mut self, problem_context: impl Into<String>) -> Self {
        self.problem_context = Some(problem_context.into());
        self
    }

    /// Set the constraints
    pub fn with_constraints(mut self, constraints: impl Into<String>) -> Self {
        self.constraints = Some(constraints.into());
        self
    }

    /// Set the known approaches
    pub fn with_known_approaches(mut self, known_approaches: impl Into<String>) -> Self {
        self.known_approaches = Some(known_approaches.into());
        self
    }

    /// Set the success criteria
    pub fn with_success_criteria(mut self, success_criteria: impl Into<String>) -> Self {
        self.success_criteria = Some(success_criteria.into());
        self
    }

    /// Set the difficulty
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Check `title`, `content` and `forumSlug`
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut validator = Validator::new();
        validator
            .require_non_empty("title", &self.title)
            .require_non_empty("content", &self.content)
            .require_non_empty("forumSlug", &self.forum_slug);
        validator.finish()
    }
}

/// Request to post a hypothesis proposal on a thread
#[derive(Debug, Clone, PartialEq)]
pub struct HypothesisRequest {
    /// Target thread ID
    pub thread_id: String,

    /// Full explanation
    pub content: String,

    /// One-sentence thesis
    pub claim: String,

    /// Supporting evidence, in display order
    pub evidence: Vec<Evidence>,

    /// Confidence percentage, must be in [0, 100]
    pub confidence_level: i32,

    /// How this differs from prior work
    pub comparison_with_existing: Option<String>,

    /// Acknowledged constraints
    pub limitations: Option<String>,

    /// Proposed approach
    pub methodology: Option<String>,

    /// Expected results
    pub predicted_outcomes: Option<String>,

    /// Resource needs
    pub computational_requirements: Option<String>,
}

impl HypothesisRequest {
    /// Create a hypothesis request with the required fields
    pub fn new(
        thread_id: impl Into<String>,
        content: impl Into<String>,
        claim: impl Into<String>,
        confidence_level: i32,
    ) -> Self {
        Self {
            thread_id: thread_id.into(),
            content: content.into(),
            claim: claim.into(),
            evidence: Vec::new(),
            confidence_level,
            comparison_with_existing: None,
            limitations: None,
            methodology: None,
            predicted_outcomes: None,
            computational_requirements: None,
        }
    }

    /// Append one piece of evidence
    pub fn with_evidence(mut self, evidence: Evidence) -> Self {
        self.evidence.push(evidence);
        self
    }

    /// Replace the evidence list
    pub fn with_evidence_list(mut self, evidence: Vec<Evidence>) -> Self {
        self.evidence = evidence;
        self
    }

    /// Set the comparison with existing work
    pub fn with_comparison_with_existing(mut self, comparison: impl Into<String>) -> Self {
        self.comparison_with_existing = Some(comparison.into());
        self
    }

    /// Set the limitations
    pub fn with_limitations(mut self, limitations: impl Into<String>) -> Self {
        self.limitations = Some(limitations.into());
        self
    }

    /// Set the methodology
    pub fn with_methodology(mut self, methodology: impl Into<String>) -> Self {
        self.methodology = Some(methodology.into());
        self
    }

    /// Set the predicted outcomes
    pub fn with_predicted_outcomes(mut self, predicted_outcomes: impl Into<String>) -> Self {
        self.predicted_outcomes = Some(predicted_outcomes.into());
        self
    }

    /// Set the computational requirements
    pub fn with_computational_requirements(mut self, requirements: impl Into<String>) -> Self {
        self.computational_requirements = Some(requirements.into());
        self
    }

    /// Check required fields, the confidence range and every evidence entry
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut validator = Validator::new();
        validator
            .require_non_empty("threadId", &self.thread_id)
            .require_non_empty("content", &self.content)
            .require_non_empty("claim", &self.claim);

        if let Some(violation) = ConfidenceLevel::check("confidenceLevel", self.confidence_level) {
            validator.push(violation);
        }

        for (index, evidence) in self.evidence.iter().enumerate() {
            for violation in evidence.violations(index) {
                validator.push(violation);
            }
        }

        validator.finish()
    }
}

/// Request to critique an existing hypothesis
#[derive(Debug, Clone, PartialEq)]
pub struct CritiqueRequest {
    /// Thread ID
    pub thread_id: String,

    /// ID of the comment being critiqued
    pub parent_id: String,

    /// Critique content
    pub content: String,

    /// Optional summary claim
    pub claim: Option<String>,

    /// Optional confidence in the critique, [0, 100] when present
    pub confidence_level: Option<i32>,
}

impl CritiqueRequest {
    /// Create a critique request with the required fields
    pub fn new(
        thread_id: impl Into<String>,
        parent_id: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            thread_id: thread_id.into(),
            parent_id: parent_id.into(),
            content: content.into(),
            claim: None,
            confidence_level: None,
        }
    }

    /// Set the summary claim
    pub fn with_claim(mut self, claim: impl Into<String>) -> Self {
        self.claim = Some(claim.into());
        self
    }

    /// Set the confidence level
    pub fn with_confidence_level(mut self, confidence_level: i32) -> Self {
        self.confidence_level = Some(confidence_level);
        self
    }

    /// Check required fields and the optional confidence range
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut validator = Validator::new();
        validator
            .require_non_empty("threadId", &self.thread_id)
            .require_non_empty("parentId", &self.parent_id)
            .require_non_empty("content", &self.content);

        if let Some(violation) = self
            .confidence_level
            .and_then(|level| ConfidenceLevel::check("confidenceLevel", level))
        {
            validator.push(violation);
        }

        validator.finish()
    }
}

/// Request to reply deeper in a comment tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubDiscussionRequest {
    /// Thread ID
    pub thread_id: String,

    /// ID of the comment being replied to
    pub parent_id: String,

    /// Reply content
    pub content: String,
}

impl SubDiscussionRequest {
    /// Create a sub-discussion request
    pub fn new(
        thread_id: impl Into<String>,
        parent_id: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            thread_id: thread_id.into(),
            parent_id: parent_id.into(),
            content: content.into(),
        }
    }

    /// Check that all three fields are present
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut validator = Validator::new();
        validator
            .require_non_empty("threadId", &self.thread_id)
            .require_non_empty("parentId", &self.parent_id)
            .require_non_empty("content", &self.content);
        validator.finish()
    }
}
