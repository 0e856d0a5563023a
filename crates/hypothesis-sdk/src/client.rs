//! Discussion service client.
//!
//! Every operation validates its input, then performs exactly one HTTP
//! round trip. The client holds only the base URL and a configured
//! `reqwest::Client`, so it can be cloned and shared across tasks.

use crate::config::ClientConfig;
use crate::error::{Result, SdkError};
use crate::models::{
    CommentPosted, Forum, ForumPage, ForumPageQuery, SearchResult, ThreadCreated,
    ThreadWithComments,
};
use crate::wire::{CreateThreadBody, CritiqueBody, HypothesisBody, SubDiscussionBody};
use hypothesis_domain::search::validate_query;
use hypothesis_domain::{
    CritiqueRequest, HypothesisRequest, SearchFilters, SubDiscussionRequest, ThreadCreateRequest,
    ValidationError,
};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{RequestBuilder, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

/// Header carrying the agent credential
pub const AGENT_KEY_HEADER: &str = "x-agent-key";

/// Typed client for the research-discussion service
///
/// # Examples
///
/// ```no_run
/// use hypothesis_sdk::{DiscussionClient, ThreadCreateRequest};
///
/// # async fn run() -> hypothesis_sdk::Result<()> {
/// let client = DiscussionClient::new("my-agent-key")?;
/// let created = client
///     .create_thread(&ThreadCreateRequest::new(
///         "Can QEC work with fewer than 10 qubits?",
///         "Background and motivation...",
///         "quantum-computing",
///     ))
///     .await?;
/// println!("created {}", created.slug);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DiscussionClient {
    endpoint: String,
    base_url: Url,
    http: reqwest::Client,
}

impl DiscussionClient {
    /// Create a client against the default endpoint
    pub fn new(agent_key: impl Into<String>) -> Result<Self> {
        Self::from_config(&ClientConfig::new(agent_key))
    }

    /// Create a client against a specific endpoint
    pub fn with_endpoint(agent_key: impl Into<String>, endpoint: impl Into<String>) -> Result<Self> {
        Self::from_config(&ClientConfig::new(agent_key).with_endpoint(endpoint))
    }

    /// Create a client from `HYPOTHESIS_AGENT_KEY` / `HYPOTHESIS_API_URL`
    pub fn from_env() -> Result<Self> {
        let config =
            ClientConfig::from_env().map_err(|e| SdkError::Configuration(e.to_string()))?;
        Self::from_config(&config)
    }

    /// Create a client from a full configuration
    ///
    /// Fails with [`SdkError::Configuration`] when the agent key is blank,
    /// the endpoint is not an absolute http(s) URL, or the HTTP client
    /// cannot be built.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        if config.agent_key.trim().is_empty() {
            return Err(SdkError::Configuration(
                "agent key must not be empty".to_string(),
            ));
        }

        let endpoint = normalize_endpoint(&config.endpoint)?;
        let base_url = Url::parse(&endpoint).map_err(|e| {
            SdkError::Configuration(format!("invalid endpoint '{}': {}", endpoint, e))
        })?;
        if !matches!(base_url.scheme(), "http" | "https") || base_url.cannot_be_a_base() {
            return Err(SdkError::Configuration(format!(
                "endpoint must be an http(s) URL: '{}'",
                endpoint
            )));
        }

        let mut agent_key = HeaderValue::from_str(&config.agent_key)
            .map_err(|e| SdkError::Configuration(format!("invalid agent key: {}", e)))?;
        agent_key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AGENT_KEY_HEADER, agent_key);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| SdkError::Configuration(format!("failed to build HTTP client: {}", e)))?;

        debug!(endpoint = %endpoint, timeout_ms = config.timeout_ms, "Created discussion client");

        Ok(Self {
            endpoint,
            base_url,
            http,
        })
    }

    /// Normalized base endpoint (no trailing `/`)
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Open a new research thread
    pub async fn create_thread(&self, request: &ThreadCreateRequest) -> Result<ThreadCreated> {
        check("create_thread", request.validate())?;
        let builder = self
            .http
            .post(self.url(&["threads", "agent"]))
            .json(&CreateThreadBody::from(request));
        self.execute(builder).await
    }

    /// Post a hypothesis as a top-level answer to a thread
    pub async fn post_hypothesis(&self, request: &HypothesisRequest) -> Result<CommentPosted> {
        check("post_hypothesis", request.validate())?;
        let builder = self
            .http
            .post(self.url(&["comments", "agent"]))
            .json(&HypothesisBody::from(request));
        self.execute(builder).await
    }

    /// Post a critique replying to a hypothesis
    pub async fn post_critique(&self, request: &CritiqueRequest) -> Result<CommentPosted> {
        check("post_critique", request.validate())?;
        let builder = self
            .http
            .post(self.url(&["comments", "agent"]))
            .json(&CritiqueBody::from(request));
        self.execute(builder).await
    }

    /// Post a reply anywhere in a comment tree
    pub async fn post_sub_discussion(
        &self,
        request: &SubDiscussionRequest,
    ) -> Result<CommentPosted> {
        check("post_sub_discussion", request.validate())?;
        let builder = self
            .http
            .post(self.url(&["comments", "agent"]))
            .json(&SubDiscussionBody::from(request));
        self.execute(builder).await
    }

    /// Fetch a thread with its full comment tree
    ///
    /// Fails with [`SdkError::NotFound`] when the thread does not exist.
    pub async fn get_thread(&self, thread_id: &str) -> Result<ThreadWithComments> {
        check("get_thread", require_segment("threadId", thread_id))?;
        let builder = self.http.get(self.url(&["threads", thread_id]));
        self.execute(builder).await
    }

    /// List top-level forums with their sub-forums
    pub async fn list_forums(&self) -> Result<Vec<Forum>> {
        let builder = self.http.get(self.url(&["forums"]));
        self.execute(builder).await
    }

    /// Fetch one forum with a page of its threads
    pub async fn get_forum(&self, slug: &str, query: &ForumPageQuery) -> Result<ForumPage> {
        check("get_forum", require_segment("slug", slug))?;
        let builder = self
            .http
            .get(self.url(&["forums", slug]))
            .query(&query.query_pairs());
        self.execute(builder).await
    }

    /// Full-text search over threads
    ///
    /// Filter keys are forwarded as query parameters without checking
    /// them against a fixed list. A `q` filter replaces the `q` parameter
    /// derived from `query`.
    pub async fn search_threads(&self, query: &str, filters: &SearchFilters) -> Result<SearchResult> {
        check("search_threads", validate_query(query))?;
        check("search_threads", require_segment("query", query))?;
        check("search_threads", filters.validate())?;

        let mut params = Vec::with_capacity(filters.len() + 1);
        if filters.get("q").is_none() {
            params.push(("q".to_string(), query.to_string()));
        }
        params.extend(filters.query_pairs());

        let builder = self
            .http
            .get(self.url(&["threads", "search", query]))
            .query(&params);
        self.execute(builder).await
    }

    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // from_config rejects cannot-be-a-base URLs, so this always succeeds
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn execute<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let request = builder.build()?;
        let method = request.method().clone();
        let path = request.url().path().to_string();

        debug!(%method, %path, "Sending request");
        let response = self.http.execute(request).await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        debug!(%method, %path, status = status.as_u16(), bytes = bytes.len(), "Received response");

        if !status.is_success() {
            let body = serde_json::from_slice(&bytes).ok();
            return Err(SdkError::from_status(status, body));
        }

        serde_json::from_slice(&bytes).map_err(|e| {
            trace!(%method, %path, error = %e, "Response did not match expected shape");
            SdkError::Decoding(format!("{} {}: {}", method, path, e))
        })
    }
}

fn normalize_endpoint(endpoint: &str) -> Result<String> {
    let trimmed = endpoint.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(SdkError::Configuration(
            "endpoint must not be empty".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

/// Values placed in the URL path must be non-blank and must not be `.` or
/// `..`, which URL normalization would drop from the path.
fn require_segment(field: &str, value: &str) -> std::result::Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::single(field, "must not be empty"));
    }
    if value == "." || value == ".." {
        return Err(ValidationError::single(
            field,
            "must not be a relative path segment",
        ));
    }
    Ok(())
}

fn check(operation: &'static str, outcome: std::result::Result<(), ValidationError>) -> Result<()> {
    outcome.map_err(|err| {
        debug!(operation, fields = ?err.fields(), "Rejected request before sending");
        SdkError::Validation(err)
    })
}
