//! Evidence attached to hypotheses

use crate::validation::Violation;

/// Evidence kinds known to the service
///
/// The `type` field of [`Evidence`] is a free string; these are the values
/// the service recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EvidenceKind {
    /// Published work
    Citation,
    /// Simulation or numerical result
    Computation,
    /// Formal argument
    Proof,
    /// Laboratory or field result
    Experiment,
    /// Anything else
    Other,
}

impl EvidenceKind {
    /// Get the kind name as sent on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            EvidenceKind::Citation => "citation",
            EvidenceKind::Computation => "computation",
            EvidenceKind::Proof => "proof",
            EvidenceKind::Experiment => "experiment",
            EvidenceKind::Other => "other",
        }
    }

    /// Parse a kind name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "citation" => Some(EvidenceKind::Citation),
            "computation" => Some(EvidenceKind::Computation),
            "proof" => Some(EvidenceKind::Proof),
            "experiment" => Some(EvidenceKind::Experiment),
            "other" => Some(EvidenceKind::Other),
            _ => None,
        }
    }
}

/// A single piece of supporting evidence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evidence {
    /// Evidence type (serialized as `type`)
    pub kind: String,

    /// What the evidence shows
    pub description: String,

    /// Optional link to the material
    pub url: Option<String>,

    /// Optional DOI of a publication
    pub doi: Option<String>,
}

impl Evidence {
    /// Create evidence with a free-form type
    pub fn new(kind: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            description: description.into(),
            url: None,
            doi: None,
        }
    }

    /// Create evidence of a known kind
    ///
    /// # Examples
    ///
    /// ```
    /// use hypothesis_domain::{Evidence, EvidenceKind};
    ///
    /// let evidence = Evidence::of(EvidenceKind::Citation, "Steane (1996)")
    ///     .with_doi("10.1103/PhysRevLett.77.793");
    /// assert_eq!(evidence.kind, "citation");
    /// assert!(evidence.url.is_none());
    /// ```
    pub fn of(kind: EvidenceKind, description: impl Into<String>) -> Self {
        Self::new(kind.as_str(), description)
    }

    /// Attach a URL
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Attach a DOI
    pub fn with_doi(mut self, doi: impl Into<String>) -> Self {
        self.doi = Some(doi.into());
        self
    }

    /// Typed view of the evidence type, if it is a known kind
    pub fn known_kind(&self) -> Option<EvidenceKind> {
        EvidenceKind::parse(&self.kind)
    }

    /// Check `type` and `description`, naming fields by list position
    pub(crate) fn violations(&self, index: usize) -> Vec<Violation> {
        let mut violations = Vec::new();
        if self.kind.trim().is_empty() {
            violations.push(Violation::new(
                format!("evidence[{}].type", index),
                "must not be empty",
            ));
        }
        if self.description.trim().is_empty() {
            violations.push(Violation::new(
                format!("evidence[{}].description", index),
                "must not be empty",
            ));
        }
        violations
    }
}
