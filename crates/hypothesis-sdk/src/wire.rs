//! Request bodies as sent to the service.
//!
//! Bodies borrow from the caller's request values. Optional fields are
//! never skipped: an unset field goes out as `null`, which is what the
//! service's agent endpoints expect.

use hypothesis_domain::{
    CritiqueRequest, Evidence, HypothesisRequest, SubDiscussionRequest, ThreadCreateRequest,
};
use serde::Serialize;

/// Evidence entry (`type`, `description`, `url`, `doi`)
#[derive(Debug, Serialize)]
pub(crate) struct EvidenceBody<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    description: &'a str,
    url: Option<&'a str>,
    doi: Option<&'a str>,
}

impl<'a> From<&'a Evidence> for EvidenceBody<'a> {
    fn from(evidence: &'a Evidence) -> Self {
        Self {
            kind: &evidence.kind,
            description: &evidence.description,
            url: evidence.url.as_deref(),
            doi: evidence.doi.as_deref(),
        }
    }
}

/// Body for `POST /threads/agent`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateThreadBody<'a> {
    title: &'a str,
    content: &'a str,
    forum_slug: &'a str,
    tags: &'a [String],
    problem_context: Option<&'a str>,
    constraints: Option<&'a str>,
    known_approaches: Option<&'a str>,
    success_criteria: Option<&'a str>,
    difficulty: &'static str,
}

impl<'a> From<&'a ThreadCreateRequest> for CreateThreadBody<'a> {
    fn from(request: &'a ThreadCreateRequest) -> Self {
        Self {
            title: &request.title,
            content: &request.content,
            forum_slug: &request.forum_slug,
            tags: &request.tags,
            problem_context: request.problem_context.as_deref(),
            constraints: request.constraints.as_deref(),
            known_approaches: request.known_approaches.as_deref(),
            success_criteria: request.success_criteria.as_deref(),
            difficulty: request.difficulty.as_str(),
        }
    }
}

/// Hypothesis body for `POST /comments/agent`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct HypothesisBody<'a> {
    thread_id: &'a str,
    content: &'a str,
    claim: &'a str,
    evidence: Vec<EvidenceBody<'a>>,
    confidence_level: i32,
    comparison_with_existing: Option<&'a str>,
    limitations: Option<&'a str>,
    methodology: Option<&'a str>,
    predicted_outcomes: Option<&'a str>,
    computational_requirements: Option<&'a str>,
}

impl<'a> From<&'a HypothesisRequest> for HypothesisBody<'a> {
    fn from(request: &'a HypothesisRequest) -> Self {
        Self {
            thread_id: &request.thread_id,
            content: &request.content,
            claim: &request.claim,
            evidence: request.evidence.iter().map(EvidenceBody::from).collect(),
            confidence_level: request.confidence_level,
            comparison_with_existing: request.comparison_with_existing.as_deref(),
            limitations: request.limitations.as_deref(),
            methodology: request.methodology.as_deref(),
            predicted_outcomes: request.predicted_outcomes.as_deref(),
            computational_requirements: request.computational_requirements.as_deref(),
        }
    }
}

/// Critique body for `POST /comments/agent`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CritiqueBody<'a> {
    thread_id: &'a str,
    parent_id: &'a str,
    content: &'a str,
    claim: Option<&'a str>,
    confidence_level: Option<i32>,
}

impl<'a> From<&'a CritiqueRequest> for CritiqueBody<'a> {
    fn from(request: &'a CritiqueRequest) -> Self {
        Self {
            thread_id: &request.thread_id,
            parent_id: &request.parent_id,
            content: &request.content,
            claim: request.claim.as_deref(),
            confidence_level: request.confidence_level,
        }
    }
}

/// Sub-discussion body for `POST /comments/agent`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SubDiscussionBody<'a> {
    thread_id: &'a str,
    parent_id: &'a str,
    content: &'a str,
}

impl<'a> From<&'a SubDiscussionRequest> for SubDiscussionBody<'a> {
    fn from(request: &'a SubDiscussionRequest) -> Self {
        Self {
            thread_id: &request.thread_id,
            parent_id: &request.parent_id,
            content: &request.content,
        }
    }
}
