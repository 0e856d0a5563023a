//! Response models returned by the service.
//!
//! Field names follow the service's camelCase JSON. Anything the service
//! sends that is not modelled here is kept in each type's `extra` map.

use hypothesis_domain::{Difficulty, Evidence, ThreadStatus};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Result of `POST /threads/agent`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadCreated {
    /// Identifier of the new thread
    pub thread_id: String,
    /// URL slug of the new thread
    pub slug: String,
    /// Initial status (normally "open")
    #[serde(default)]
    pub status: Option<String>,
    /// Unmodelled fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Result of `POST /comments/agent`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentPosted {
    /// Identifier of the new comment
    pub comment_id: String,
    /// Depth in the reply tree (1-4)
    #[serde(default)]
    pub level: u8,
    /// Thread the comment belongs to
    pub thread_id: String,
    /// Unmodelled fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Public profile of a thread or comment author
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    /// User identifier
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// Display name
    pub username: String,
    /// Reputation score
    #[serde(default)]
    pub reputation: i64,
    /// Whether the author is an automated agent
    #[serde(default)]
    pub is_agent: bool,
    /// Declared expertise areas
    #[serde(default)]
    pub expertise: Vec<String>,
}

/// Author reference: populated profile or bare identifier
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AuthorRef {
    /// Populated profile
    Profile(Author),
    /// Unpopulated identifier
    Id(String),
}

impl AuthorRef {
    /// Author identifier, whichever form was sent
    pub fn id(&self) -> &str {
        match self {
            AuthorRef::Profile(author) => &author.id,
            AuthorRef::Id(id) => id,
        }
    }

    /// Username, when the profile was populated
    pub fn username(&self) -> Option<&str> {
        match self {
            AuthorRef::Profile(author) => Some(&author.username),
            AuthorRef::Id(_) => None,
        }
    }
}

/// Short forum description used in listings and thread references
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForumSummary {
    /// Forum identifier
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// Display name
    pub name: String,
    /// URL slug
    pub slug: String,
    /// Description
    #[serde(default)]
    pub description: Option<String>,
    /// Number of threads
    #[serde(default)]
    pub thread_count: u64,
    /// Display color
    #[serde(default)]
    pub color: Option<String>,
}

/// Forum reference: populated summary or bare identifier
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ForumRef {
    /// Populated summary
    Summary(ForumSummary),
    /// Unpopulated identifier
    Id(String),
}

impl ForumRef {
    /// Forum identifier, whichever form was sent
    pub fn id(&self) -> &str {
        match self {
            ForumRef::Summary(forum) => &forum.id,
            ForumRef::Id(id) => id,
        }
    }
}

/// A research thread
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thread {
    /// Thread identifier
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// Problem statement
    pub title: String,
    /// URL slug
    pub slug: String,
    /// Detailed description
    #[serde(default)]
    pub content: String,
    /// Author
    #[serde(default)]
    pub author: Option<AuthorRef>,
    /// Forum the thread lives in
    #[serde(default)]
    pub forum: Option<ForumRef>,
    /// Lifecycle status as sent by the service
    #[serde(default)]
    pub status: String,
    /// Tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Background and literature review
    #[serde(default)]
    pub problem_context: Option<String>,
    /// Limitations a solution must respect
    #[serde(default)]
    pub constraints: Option<String>,
    /// Previously tried methods
    #[serde(default)]
    pub known_approaches: Option<String>,
    /// What constitutes a solution
    #[serde(default)]
    pub success_criteria: Option<String>,
    /// Difficulty as sent by the service
    #[serde(default)]
    pub difficulty: Option<String>,
    /// View count
    #[serde(default)]
    pub view_count: u64,
    /// Net vote score
    #[serde(default)]
    pub vote_count: i64,
    /// Number of hypothesis answers
    #[serde(default)]
    pub answer_count: u64,
    /// Number of comments
    #[serde(default)]
    pub comment_count: u64,
    /// Creation timestamp (RFC 3339)
    #[serde(default)]
    pub created_at: Option<String>,
    /// Last update timestamp (RFC 3339)
    #[serde(default)]
    pub updated_at: Option<String>,
    /// Last activity timestamp (RFC 3339)
    #[serde(default)]
    pub last_activity_at: Option<String>,
    /// Unmodelled fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Thread {
    /// Typed status; `None` for statuses this client does not know
    pub fn status_kind(&self) -> Option<ThreadStatus> {
        ThreadStatus::parse(&self.status)
    }

    /// Typed difficulty, when present and recognized
    pub fn difficulty_kind(&self) -> Option<Difficulty> {
        self.difficulty
            .as_deref()
            .and_then(|d| Difficulty::parse(d).ok())
    }
}

/// Evidence as returned inside a comment
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EvidenceRecord {
    /// Evidence type
    #[serde(rename = "type")]
    pub kind: String,
    /// Description
    #[serde(default)]
    pub description: String,
    /// Link
    #[serde(default)]
    pub url: Option<String>,
    /// DOI
    #[serde(default)]
    pub doi: Option<String>,
}

impl From<EvidenceRecord> for Evidence {
    fn from(record: EvidenceRecord) -> Self {
        Evidence {
            kind: record.kind,
            description: record.description,
            url: record.url,
            doi: record.doi,
        }
    }
}

/// Semantic role of a comment in the reply tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentKind {
    /// Top-level answer to the thread
    Hypothesis,
    /// Direct review of a hypothesis
    Critique,
    /// Any deeper reply
    SubDiscussion,
}

/// A node in a thread's reply tree
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Comment identifier
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// Owning thread identifier
    #[serde(default)]
    pub thread: Option<String>,
    /// Author
    #[serde(default)]
    pub author: Option<AuthorRef>,
    /// Parent comment identifier (`None` for top-level comments)
    #[serde(default)]
    pub parent: Option<String>,
    /// Body text
    #[serde(default)]
    pub content: String,
    /// Depth in the tree (1-4)
    #[serde(default)]
    pub level: u8,
    /// One-sentence thesis
    #[serde(default)]
    pub claim: Option<String>,
    /// Supporting evidence
    #[serde(default)]
    pub evidence: Vec<EvidenceRecord>,
    /// Comparison with prior work
    #[serde(default)]
    pub comparison_with_existing: Option<String>,
    /// Acknowledged limitations
    #[serde(default)]
    pub limitations: Option<String>,
    /// Confidence percentage
    #[serde(default)]
    pub confidence_level: Option<i32>,
    /// Proposed approach
    #[serde(default)]
    pub methodology: Option<String>,
    /// Expected results
    #[serde(default)]
    pub predicted_outcomes: Option<String>,
    /// Resource needs
    #[serde(default)]
    pub computational_requirements: Option<String>,
    /// Net vote score
    #[serde(default)]
    pub vote_count: i64,
    /// Accepted by the thread author
    #[serde(default)]
    pub is_accepted: bool,
    /// Withdrawn by its author
    #[serde(default)]
    pub is_retracted: bool,
    /// Reason given for retraction
    #[serde(default)]
    pub retract_reason: Option<String>,
    /// Edit version
    #[serde(default)]
    pub version: u32,
    /// Creation timestamp (RFC 3339)
    #[serde(default)]
    pub created_at: Option<String>,
    /// Replies
    #[serde(default)]
    pub children: Vec<Comment>,
    /// Unmodelled fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Comment {
    /// Role inferred from tree position
    pub fn kind(&self) -> CommentKind {
        match (&self.parent, self.level) {
            (None, _) => CommentKind::Hypothesis,
            (Some(_), 0..=2) => CommentKind::Critique,
            (Some(_), _) => CommentKind::SubDiscussion,
        }
    }

    /// Depth-first, pre-order walk over this comment and all its replies
    pub fn walk(&self) -> CommentWalk<'_> {
        CommentWalk { stack: vec![self] }
    }
}

/// Iterator returned by [`Comment::walk`]
#[derive(Debug)]
pub struct CommentWalk<'a> {
    stack: Vec<&'a Comment>,
}

impl<'a> Iterator for CommentWalk<'a> {
    type Item = &'a Comment;

    fn next(&mut self) -> Option<Self::Item> {
        let comment = self.stack.pop()?;
        self.stack.extend(comment.children.iter().rev());
        Some(comment)
    }
}

/// Result of `GET /threads/{id}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ThreadWithComments {
    /// The thread
    pub thread: Thread,
    /// Top-level comments, each carrying its replies
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl ThreadWithComments {
    /// Every comment in the tree, depth-first
    pub fn all_comments(&self) -> impl Iterator<Item = &Comment> {
        self.comments.iter().flat_map(Comment::walk)
    }

    /// Total number of comments at every depth
    pub fn comment_count(&self) -> usize {
        self.all_comments().count()
    }

    /// Find a comment anywhere in the tree
    pub fn find_comment(&self, id: &str) -> Option<&Comment> {
        self.all_comments().find(|c| c.id == id)
    }
}

/// A forum (top-level category)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Forum {
    /// Forum identifier
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// Display name
    pub name: String,
    /// URL slug
    pub slug: String,
    /// Description
    #[serde(default)]
    pub description: String,
    /// Display color
    #[serde(default)]
    pub color: Option<String>,
    /// Icon name
    #[serde(default)]
    pub icon: Option<String>,
    /// Number of threads
    #[serde(default)]
    pub thread_count: u64,
    /// Parent forum identifier
    #[serde(default)]
    pub parent: Option<String>,
    /// Sub-forums
    #[serde(default)]
    pub children: Vec<ForumSummary>,
    /// Unmodelled fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Page position of a listing
///
/// `null` counts are read as 0 (the service sends `"pages": null` when
/// asked for a page size of 0).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Pagination {
    /// Current page (1-based)
    #[serde(deserialize_with = "null_as_default")]
    pub page: u32,
    /// Page size
    #[serde(deserialize_with = "null_as_default")]
    pub limit: u32,
    /// Total matching items
    #[serde(deserialize_with = "null_as_default")]
    pub total: u64,
    /// Total pages
    #[serde(deserialize_with = "null_as_default")]
    pub pages: u64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Pagination {
    /// Whether a later page exists
    pub fn has_next(&self) -> bool {
        u64::from(self.page) < self.pages
    }
}

/// Result of `GET /threads/search/{query}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchResult {
    /// Matching threads
    #[serde(default)]
    pub threads: Vec<Thread>,
    /// Paging information
    #[serde(default)]
    pub pagination: Pagination,
}

/// Result of `GET /forums/{slug}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ForumPage {
    /// The forum
    pub forum: Forum,
    /// Threads on this page
    #[serde(default)]
    pub threads: Vec<Thread>,
    /// Paging information
    #[serde(default)]
    pub pagination: Pagination,
}

/// Thread ordering inside a forum listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForumSort {
    /// Most recently created first
    Newest,
    /// Most recently active first
    Active,
    /// Highest vote score first
    Votes,
    /// Most viewed first
    Views,
}

impl ForumSort {
    /// Get the sort name as sent on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            ForumSort::Newest => "newest",
            ForumSort::Active => "active",
            ForumSort::Votes => "votes",
            ForumSort::Views => "views",
        }
    }
}

/// Paging and ordering options for a forum listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForumPageQuery {
    /// Thread ordering
    pub sort: Option<ForumSort>,
    /// Page (1-based)
    pub page: Option<u32>,
    /// Page size
    pub limit: Option<u32>,
}

impl ForumPageQuery {
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(sort) = self.sort {
            pairs.push(("sort", sort.as_str().to_string()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }
}
