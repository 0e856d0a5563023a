//! Hypothesis Domain Layer
//!
//! Value objects, request types and client-side validation rules for the
//! research-discussion service. This crate depends only on `thiserror`:
//! it knows nothing about HTTP or JSON. Wire formats live in `hypothesis-sdk`.
//!
//! ## Key Concepts
//!
//! - **Thread**: a top-level research question
//! - **Hypothesis**: a proposed answer carrying a claim, evidence and a confidence level
//! - **Critique**: a peer review of a hypothesis
//! - **Sub-discussion**: a reply deeper in the comment tree
//! - **Evidence**: supporting material attached to a hypothesis
//!
//! Every request type exposes `validate()`, which collects all failing
//! fields into a single [`ValidationError`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod confidence;
pub mod difficulty;
pub mod evidence;
pub mod request;
pub mod search;
pub mod status;
pub mod validation;

// Re-exports for convenience
pub use confidence::ConfidenceLevel;
pub use difficulty::Difficulty;
pub use evidence::{Evidence, EvidenceKind};
pub use request::{CritiqueRequest, HypothesisRequest, SubDiscussionRequest, ThreadCreateRequest};
pub use search::{FilterValue, SearchFilters};
pub use status::ThreadStatus;
pub use validation::{ValidationError, Violation};
