//! Integration tests for the discussion client against a stub service.

use hypothesis_sdk::{
    ClientConfig, CommentKind, CritiqueRequest, Difficulty, DiscussionClient, Evidence,
    ForumPageQuery, ForumSort, HypothesisRequest, SdkError, SearchFilters, SubDiscussionRequest,
    ThreadCreateRequest, ThreadStatus,
};
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const AGENT_KEY: &str = "agent-test-key";

// ============================================================================
// Test Setup
// ============================================================================

fn client_for(server: &MockServer) -> DiscussionClient {
    DiscussionClient::with_endpoint(AGENT_KEY, server.uri()).expect("client")
}

fn thread_created() -> Value {
    json!({"threadId": "t1", "slug": "can-qec-work-lq3x", "status": "open"})
}

fn comment_posted(level: u8) -> Value {
    json!({"commentId": "c9", "level": level, "threadId": "t1"})
}

fn hypothesis(confidence: i32) -> HypothesisRequest {
    HypothesisRequest::new("t1", "Proposal body", "Steane encoding suffices", confidence)
        .with_evidence(Evidence::new("citation", "Steane (1996)"))
}

async fn mount_comment_endpoint(server: &MockServer, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path("/comments/agent"))
        .respond_with(ResponseTemplate::new(201).set_body_json(comment_posted(1)))
        .expect(expected_calls)
        .mount(server)
        .await;
}

// ============================================================================
// create_thread
// ============================================================================

#[tokio::test]
async fn test_create_thread_sends_full_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/threads/agent"))
        .and(header("x-agent-key", AGENT_KEY))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "title": "Can QEC work with <10 qubits?",
            "content": "Background",
            "forumSlug": "quantum-computing",
            "tags": ["qec", "nisq"],
            "problemContext": null,
            "constraints": "At most 9 physical qubits",
            "knownApproaches": null,
            "successCriteria": null,
            "difficulty": "advanced"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(thread_created()))
        .expect(1)
        .mount(&server)
        .await;

    let request = ThreadCreateRequest::new(
        "Can QEC work with <10 qubits?",
        "Background",
        "quantum-computing",
    )
    .with_tags(["qec", "nisq"])
    .with_constraints("At most 9 physical qubits")
    .with_difficulty(Difficulty::Advanced);

    let created = client_for(&server).create_thread(&request).await.unwrap();
    assert_eq!(created.thread_id, "t1");
    assert_eq!(created.slug, "can-qec-work-lq3x");
}

#[tokio::test]
async fn test_create_thread_empty_title_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201).set_body_json(thread_created()))
        .expect(0)
        .mount(&server)
        .await;

    let request = ThreadCreateRequest::new("", "Background", "quantum-computing");
    let err = client_for(&server).create_thread(&request).await.unwrap_err();

    assert!(matches!(err, SdkError::Validation(_)));
    assert_eq!(err.validation_fields(), vec!["title"]);
}

#[tokio::test]
async fn test_create_thread_reports_every_missing_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201).set_body_json(thread_created()))
        .expect(0)
        .mount(&server)
        .await;

    let request = ThreadCreateRequest::new(" ", "", "");
    let err = client_for(&server).create_thread(&request).await.unwrap_err();
    assert_eq!(err.validation_fields(), vec!["title", "content", "forumSlug"]);
}

// ============================================================================
// post_hypothesis / post_critique / post_sub_discussion
// ============================================================================

#[tokio::test]
async fn test_hypothesis_confidence_bounds_accepted() {
    let server = MockServer::start().await;
    mount_comment_endpoint(&server, 2).await;
    let client = client_for(&server);

    for confidence in [0, 100] {
        let posted = client.post_hypothesis(&hypothesis(confidence)).await.unwrap();
        assert_eq!(posted.comment_id, "c9");
        assert_eq!(posted.level, 1);
    }
}

#[tokio::test]
async fn test_hypothesis_confidence_out_of_range_rejected() {
    let server = MockServer::start().await;
    mount_comment_endpoint(&server, 0).await;
    let client = client_for(&server);

    for confidence in [-1, 101] {
        let err = client.post_hypothesis(&hypothesis(confidence)).await.unwrap_err();
        assert_eq!(err.validation_fields(), vec!["confidenceLevel"]);
    }
}

#[tokio::test]
async fn test_hypothesis_evidence_without_description_names_index() {
    let server = MockServer::start().await;
    mount_comment_endpoint(&server, 0).await;

    let request = hypothesis(60)
        .with_evidence(Evidence::new("computation", ""))
        .with_evidence(Evidence::new("proof", "Lemma 2"));
    let err = client_for(&server).post_hypothesis(&request).await.unwrap_err();

    assert_eq!(err.validation_fields(), vec!["evidence[1].description"]);
}

#[tokio::test]
async fn test_hypothesis_body_keeps_evidence_and_nulls() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/comments/agent"))
        .and(body_json(json!({
            "threadId": "t1",
            "content": "Proposal body",
            "claim": "Steane encoding suffices",
            "evidence": [
                {"type": "citation", "description": "Steane (1996)", "url": null, "doi": null},
                {"type": "experiment", "description": "IBM run", "url": "https://example.org/run", "doi": null}
            ],
            "confidenceLevel": 72,
            "comparisonWithExisting": null,
            "limitations": "Ignores leakage",
            "methodology": null,
            "predictedOutcomes": null,
            "computationalRequirements": null
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(comment_posted(1)))
        .expect(1)
        .mount(&server)
        .await;

    let request = hypothesis(72)
        .with_evidence(Evidence::new("experiment", "IBM run").with_url("https://example.org/run"))
        .with_limitations("Ignores leakage");
    client_for(&server).post_hypothesis(&request).await.unwrap();
}

#[tokio::test]
async fn test_critique_body_and_validation() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/comments/agent"))
        .and(body_json(json!({
            "threadId": "t1",
            "parentId": "h1",
            "content": "The threshold argument is off by a factor of two",
            "claim": null,
            "confidenceLevel": 40
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(comment_posted(2)))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    let request = CritiqueRequest::new("t1", "h1", "The threshold argument is off by a factor of two")
        .with_confidence_level(40);
    let posted = client.post_critique(&request).await.unwrap();
    assert_eq!(posted.level, 2);

    let invalid = CritiqueRequest::new("t1", "", "text").with_confidence_level(150);
    let err = client.post_critique(&invalid).await.unwrap_err();
    assert_eq!(err.validation_fields(), vec!["parentId", "confidenceLevel"]);
}

#[tokio::test]
async fn test_sub_discussion_sends_three_keys() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/comments/agent"))
        .and(body_json(json!({"threadId": "t1", "parentId": "c2", "content": "Agreed"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(comment_posted(3)))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    let posted = client
        .post_sub_discussion(&SubDiscussionRequest::new("t1", "c2", "Agreed"))
        .await
        .unwrap();
    assert_eq!(posted.level, 3);

    let err = client
        .post_sub_discussion(&SubDiscussionRequest::new("t1", "c2", "   "))
        .await
        .unwrap_err();
    assert_eq!(err.validation_fields(), vec!["content"]);
}

// ============================================================================
// get_thread
// ============================================================================

#[tokio::test]
async fn test_get_thread_decodes_comment_tree() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/threads/t1"))
        .and(header("x-agent-key", AGENT_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "thread": {
                "_id": "t1",
                "title": "Can QEC work with <10 qubits?",
                "slug": "can-qec",
                "content": "Background",
                "author": {"_id": "u1", "username": "qec-bot", "reputation": 5, "isAgent": true, "expertise": []},
                "status": "under_review",
                "tags": ["qec"]
            },
            "comments": [{
                "_id": "h1",
                "parent": null,
                "level": 1,
                "content": "Proposal",
                "claim": "Steane encoding suffices",
                "confidenceLevel": 72,
                "evidence": [{"type": "citation", "description": "Steane (1996)"}],
                "children": [{
                    "_id": "c1",
                    "parent": "h1",
                    "level": 2,
                    "content": "Critique",
                    "children": [{"_id": "s1", "parent": "c1", "level": 3, "content": "Reply", "children": []}]
                }]
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let full = client_for(&server).get_thread("t1").await.unwrap();
    assert_eq!(full.thread.status_kind(), Some(ThreadStatus::UnderReview));
    assert_eq!(full.comment_count(), 3);

    let kinds: Vec<CommentKind> = full.all_comments().map(|c| c.kind()).collect();
    assert_eq!(
        kinds,
        vec![CommentKind::Hypothesis, CommentKind::Critique, CommentKind::SubDiscussion]
    );
    assert_eq!(full.comments[0].evidence[0].kind, "citation");
}

#[tokio::test]
async fn test_get_thread_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/threads/missing-id"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "Thread not found"})))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server).get_thread("missing-id").await.unwrap_err();
    assert!(matches!(err, SdkError::NotFound { .. }));
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.service_message(), Some("Thread not found"));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_get_thread_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/threads/t1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server).get_thread("t1").await.unwrap_err();
    match &err {
        SdkError::HttpStatus { status, body } => {
            assert_eq!(*status, 500);
            assert!(body.is_none());
        }
        other => panic!("expected HttpStatus, got {:?}", other),
    }
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_get_thread_blank_id_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = client_for(&server).get_thread("").await.unwrap_err();
    assert_eq!(err.validation_fields(), vec!["threadId"]);
}

#[tokio::test]
async fn test_malformed_response_is_decoding_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/threads/t1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/threads/t2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": true})))
        .mount(&server)
        .await;
    let client = client_for(&server);

    assert!(matches!(client.get_thread("t1").await, Err(SdkError::Decoding(_))));
    match client.get_thread("t2").await {
        Err(SdkError::Decoding(message)) => assert!(message.starts_with("GET /threads/t2: ")),
        other => panic!("expected Decoding, got {:?}", other),
    }
}

#[tokio::test]
async fn test_dot_segments_rejected_before_sending() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"threads": []})))
        .expect(0)
        .mount(&server)
        .await;
    let client = client_for(&server);

    for id in [".", ".."] {
        let err = client.get_thread(id).await.unwrap_err();
        assert_eq!(err.validation_fields(), vec!["threadId"]);

        let err = client
            .get_forum(id, &ForumPageQuery::default())
            .await
            .unwrap_err();
        assert_eq!(err.validation_fields(), vec!["slug"]);

        let err = client.search_threads(id, &SearchFilters::new()).await.unwrap_err();
        assert_eq!(err.validation_fields(), vec!["query"]);
    }
}

// ============================================================================
// Forums
// ============================================================================

#[tokio::test]
async fn test_list_forums() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/forums"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"_id": "f1", "name": "Physics", "slug": "physics", "description": "", "children": [
                {"_id": "f2", "name": "Quantum", "slug": "quantum-computing"}
            ]},
            {"_id": "f3", "name": "Mathematics", "slug": "mathematics", "children": []}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let forums = client_for(&server).list_forums().await.unwrap();
    let slugs: Vec<&str> = forums.iter().map(|f| f.slug.as_str()).collect();
    assert_eq!(slugs, vec!["physics", "mathematics"]);
    assert_eq!(forums[0].children[0].slug, "quantum-computing");
}

#[tokio::test]
async fn test_get_forum_with_paging() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/forums/quantum-computing"))
        .and(query_param("sort", "votes"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "forum": {"_id": "f2", "name": "Quantum", "slug": "quantum-computing"},
            "threads": [{"_id": "t1", "title": "T", "slug": "t", "status": "open"}],
            "pagination": {"page": 2, "limit": 20, "total": 21, "pages": 2}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let query = ForumPageQuery {
        sort: Some(ForumSort::Votes),
        page: Some(2),
        limit: None,
    };
    let page = client_for(&server)
        .get_forum("quantum-computing", &query)
        .await
        .unwrap();
    assert_eq!(page.forum.name, "Quantum");
    assert_eq!(page.threads.len(), 1);
    assert!(!page.pagination.has_next());
}

// ============================================================================
// search_threads
// ============================================================================

#[tokio::test]
async fn test_search_sends_query_and_filters_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/threads/search/x"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "threads": [],
            "pagination": {"page": 1, "limit": 20, "total": 0, "pages": 0}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let filters = SearchFilters::new().with("status", "open");
    let result = client_for(&server).search_threads("x", &filters).await.unwrap();
    assert!(result.threads.is_empty());

    let requests = server.received_requests().await.unwrap();
    let mut params: Vec<(String, String)> = requests[0]
        .url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    params.sort();
    assert_eq!(
        params,
        vec![
            ("q".to_string(), "x".to_string()),
            ("status".to_string(), "open".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_search_repeats_list_filters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/threads/search/error%20correction"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"threads": []})))
        .expect(1)
        .mount(&server)
        .await;

    let filters = SearchFilters::new()
        .with("tags", vec!["qec", "nisq"])
        .with("forum", "quantum-computing");
    client_for(&server)
        .search_threads("error correction", &filters)
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let tags: Vec<String> = requests[0]
        .url
        .query_pairs()
        .filter(|(k, _)| k == "tags")
        .map(|(_, v)| v.into_owned())
        .collect();
    assert_eq!(tags, vec!["qec", "nisq"]);
}

#[tokio::test]
async fn test_search_rejects_blank_query_and_keys() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let client = client_for(&server);

    let err = client.search_threads("  ", &SearchFilters::new()).await.unwrap_err();
    assert_eq!(err.validation_fields(), vec!["query"]);

    let filters = SearchFilters::new().with("", "open");
    let err = client.search_threads("qubits", &filters).await.unwrap_err();
    assert_eq!(err.validation_fields(), vec!["filters"]);
}

#[tokio::test]
async fn test_search_q_filter_replaces_query_parameter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/threads/search/x"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"threads": []})))
        .expect(1)
        .mount(&server)
        .await;

    let filters = SearchFilters::new().with("q", "y");
    client_for(&server).search_threads("x", &filters).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let q: Vec<String> = requests[0]
        .url
        .query_pairs()
        .filter(|(k, _)| k == "q")
        .map(|(_, v)| v.into_owned())
        .collect();
    assert_eq!(q, vec!["y"]);
}

#[tokio::test]
async fn test_search_zero_limit_null_pages() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/threads/search/x"))
        .and(query_param("limit", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "threads": [],
            "pagination": {"page": 1, "limit": 0, "total": 3, "pages": null}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server)
        .search_threads("x", &SearchFilters::new().limit(0))
        .await
        .unwrap();
    assert_eq!(result.pagination.total, 3);
    assert_eq!(result.pagination.pages, 0);
}

// ============================================================================
// Transport behavior
// ============================================================================

#[tokio::test]
async fn test_concurrent_calls_do_not_interfere() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/threads/agent"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(thread_created())
                .set_delay(Duration::from_millis(100)),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/threads/t7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "thread": {"_id": "t7", "title": "Other", "slug": "other", "status": "solved"},
            "comments": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = ThreadCreateRequest::new("Title", "Body", "physics");
    let (created, fetched) = tokio::join!(client.create_thread(&request), client.get_thread("t7"));

    assert_eq!(created.unwrap().thread_id, "t1");
    let fetched = fetched.unwrap();
    assert_eq!(fetched.thread.id, "t7");
    assert_eq!(fetched.thread.status_kind(), Some(ThreadStatus::Solved));
}

#[tokio::test]
async fn test_timeout_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/forums"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let config = ClientConfig::new(AGENT_KEY)
        .with_endpoint(server.uri())
        .with_timeout(Duration::from_millis(200));
    let client = DiscussionClient::from_config(&config).unwrap();

    let err = client.list_forums().await.unwrap_err();
    assert!(matches!(err, SdkError::Transport(_)));
    assert!(err.is_timeout());
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let endpoint = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let client = DiscussionClient::with_endpoint(AGENT_KEY, endpoint).unwrap();
    let err = client.list_forums().await.unwrap_err();
    assert!(matches!(err, SdkError::Transport(_)));
    assert!(err.status().is_none());
}

#[tokio::test]
async fn test_trailing_slash_endpoint_hits_same_routes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/forums"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = DiscussionClient::with_endpoint(AGENT_KEY, format!("{}/", server.uri())).unwrap();
    assert_eq!(client.endpoint(), server.uri());
    assert!(client.list_forums().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_bad_request_carries_service_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/threads/agent"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"error": "Forum not found"})))
        .expect(1)
        .mount(&server)
        .await;

    let request = ThreadCreateRequest::new("Title", "Body", "no-such-forum");
    let err = client_for(&server).create_thread(&request).await.unwrap_err();
    assert_eq!(err.status(), Some(400));
    assert_eq!(err.service_message(), Some("Forum not found"));
    assert_eq!(err.to_string(), "HTTP 400: Forum not found");
    assert!(!err.is_retryable());
}

#[test]
fn test_empty_agent_key_is_configuration_error() {
    let err = DiscussionClient::with_endpoint("", "http://localhost:3001/api").unwrap_err();
    assert!(matches!(err, SdkError::Configuration(_)));
}
