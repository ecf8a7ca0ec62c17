//! Integration tests for the GraphQL executor against a mocked endpoint.

use std::collections::HashMap;
use std::io::Write;

use mon_net::graphql::{ExecutorConfig, GraphQLExecutor, NO_HEADERS};
use mon_net::Error;
use serde::Deserialize;
use serde_json::{Value, json};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const QUERY: &str = "query GetUser($id: Int!) { user: users_by_pk(id: $id) { id name } }";

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
struct User {
    id: i64,
    name: String,
}

fn endpoint(server: &MockServer) -> String {
    format!("{}/v1/graphql", server.uri())
}

fn executor(server: &MockServer, secret: Option<&str>) -> GraphQLExecutor {
    let mut builder = GraphQLExecutor::builder(endpoint(server)).query(QUERY);
    if let Some(secret) = secret {
        builder = builder.admin_secret(secret);
    }
    builder.build().expect("Failed to build executor")
}

async fn respond_with(server: &MockServer, body: Value) {
    Mock::given(method("POST"))
        .and(path("/v1/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_happy_path_populates_model() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/graphql"))
        .and(header("content-type", "application/json"))
        .and(header("x-hasura-admin-secret", "admin-secret"))
        .and(body_json(json!({"query": QUERY, "variables": {"id": 1}})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": {"user": {"id": 1, "name": "john"}}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut executor = executor(&server, Some("admin-secret"));
    let mut user = User::default();

    executor
        .set_response_key("user")
        .set_response_model(&mut user)
        .exec(&json!({"id": 1}), NO_HEADERS)
        .await
        .expect("exec failed");

    assert_eq!(
        user,
        User {
            id: 1,
            name: "john".into()
        }
    );
}

#[tokio::test]
async fn test_exec_returns_model_by_value() {
    let server = MockServer::start().await;
    respond_with(
        &server,
        json!({"data": {"users": [{"id": 1, "name": "john"}, {"id": 2, "name": "jane"}]}}),
    )
    .await;

    let mut executor = executor(&server, None);
    executor.set_response_key("users");

    let users: Vec<User> = executor
        .exec(&json!({"limit": 2}), NO_HEADERS)
        .await
        .expect("exec failed");

    assert_eq!(users.len(), 2);
    assert_eq!(users[1].name, "jane");
}

#[tokio::test]
async fn test_error_envelope_leaves_model_untouched() {
    let server = MockServer::start().await;
    respond_with(
        &server,
        json!({"errors": [{"message": "field 'users_by_pk' not found in type: 'query_root'"}]}),
    )
    .await;

    let mut executor = executor(&server, Some("admin-secret"));
    let original = User {
        id: 7,
        name: "unchanged".into(),
    };
    let mut user = original.clone();

    let err = executor
        .set_response_key("user")
        .set_response_model(&mut user)
        .exec(&json!({"id": 1}), NO_HEADERS)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Remote { .. }));
    assert_eq!(err.to_string(), "remote GraphQL call reported errors");
    assert_eq!(
        err.remote_messages(),
        vec!["field 'users_by_pk' not found in type: 'query_root'"]
    );
    assert_eq!(user, original);
}

#[tokio::test]
async fn test_empty_errors_list_is_failure() {
    let server = MockServer::start().await;
    respond_with(
        &server,
        json!({"data": {"user": {"id": 1, "name": "john"}}, "errors": []}),
    )
    .await;

    let mut executor = executor(&server, None);
    let result: mon_net::Result<User> = executor
        .set_response_key("user")
        .exec(&json!({"id": 1}), NO_HEADERS)
        .await;

    assert!(matches!(result, Err(Error::Remote { .. })));
}

#[tokio::test]
async fn test_null_errors_is_success() {
    let server = MockServer::start().await;
    respond_with(
        &server,
        json!({"data": {"user": {"id": 1, "name": "john"}}, "errors": null}),
    )
    .await;

    let mut executor = executor(&server, None);
    let user: User = executor
        .set_response_key("user")
        .exec(&json!({"id": 1}), NO_HEADERS)
        .await
        .expect("exec failed");

    assert_eq!(user.id, 1);
}

#[tokio::test]
async fn test_null_row_leaves_model_untouched() {
    let server = MockServer::start().await;
    respond_with(&server, json!({"data": {"user": null}})).await;

    let mut executor = executor(&server, None);
    let original = User {
        id: 7,
        name: "unchanged".into(),
    };
    let mut user = original.clone();

    executor
        .set_response_key("user")
        .set_response_model(&mut user)
        .exec(&json!({"id": 404}), NO_HEADERS)
        .await
        .expect("null row is not an error");

    assert_eq!(user, original);

    // By value, an Option target distinguishes the missing row
    let found: Option<User> = executor
        .exec(&json!({"id": 404}), NO_HEADERS)
        .await
        .expect("exec failed");
    assert_eq!(found, None);

    let strict: mon_net::Result<User> = executor.exec(&json!({"id": 404}), NO_HEADERS).await;
    assert!(matches!(strict, Err(Error::ModelMismatch { .. })));
}

#[tokio::test]
async fn test_missing_response_key() {
    let server = MockServer::start().await;
    respond_with(&server, json!({"data": {"other": {"id": 1}}})).await;

    let mut executor = executor(&server, None);
    let mut user = User::default();

    let err = executor
        .set_response_key("user")
        .set_response_model(&mut user)
        .exec(&json!({"id": 1}), NO_HEADERS)
        .await
        .unwrap_err();

    match err {
        Error::ResponseShape(msg) => assert!(msg.contains("'user'")),
        other => panic!("expected shape error, got {other:?}"),
    }
    assert_eq!(user, User::default());
}

#[tokio::test]
async fn test_model_mismatch() {
    let server = MockServer::start().await;
    respond_with(&server, json!({"data": {"user": {"id": "one", "name": 5}}})).await;

    let mut executor = executor(&server, None);
    let mut user = User::default();

    let err = executor
        .set_response_key("user")
        .set_response_model(&mut user)
        .exec(&json!({"id": 1}), NO_HEADERS)
        .await
        .unwrap_err();

    match err {
        Error::ModelMismatch { key, .. } => assert_eq!(key, "user"),
        other => panic!("expected model mismatch, got {other:?}"),
    }
    assert_eq!(user, User::default());
}

#[tokio::test]
async fn test_whole_data_without_response_key() {
    let server = MockServer::start().await;
    respond_with(&server, json!({"data": {"user": {"id": 1, "name": "john"}}})).await;

    #[derive(Deserialize)]
    struct Data {
        user: User,
    }

    let executor = executor(&server, None);
    let data: Data = executor
        .exec(&json!({"id": 1}), NO_HEADERS)
        .await
        .expect("exec failed");

    assert_eq!(data.user.name, "john");
}

#[tokio::test]
async fn test_caller_header_overrides_admin_secret() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/graphql"))
        .and(header("x-hasura-admin-secret", "caller-secret"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": {"user": {"id": 1, "name": "john"}}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut executor = executor(&server, Some("configured-secret"));

    let mut headers = HashMap::new();
    headers.insert("X-Hasura-Admin-Secret".to_string(), "caller-secret".to_string());
    headers.insert("x-hasura-role".to_string(), "editor".to_string());

    let user: User = executor
        .set_response_key("user")
        .exec(&json!({"id": 1}), &headers)
        .await
        .expect("exec failed");
    assert_eq!(user.id, 1);

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);

    let secrets: Vec<_> = requests[0]
        .headers
        .get_all("x-hasura-admin-secret")
        .iter()
        .map(|v| v.to_str().unwrap().to_string())
        .collect();
    assert_eq!(secrets, vec!["caller-secret"]);
    assert_eq!(
        requests[0].headers.get("x-hasura-role").unwrap(),
        "editor"
    );
}

#[tokio::test]
async fn test_caller_header_overrides_content_type() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header("content-type", "application/graphql+json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": {"user": {"id": 3, "name": "kim"}}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut executor = executor(&server, None);
    let user: User = executor
        .set_response_key("user")
        .exec(&json!({"id": 3}), [("Content-Type", "application/graphql+json")])
        .await
        .expect("exec failed");

    assert_eq!(user.name, "kim");
}

#[tokio::test]
async fn test_no_secret_header_without_secret() {
    let server = MockServer::start().await;
    respond_with(&server, json!({"data": {"user": {"id": 1, "name": "john"}}})).await;

    let mut executor = executor(&server, None);
    let _: User = executor
        .set_response_key("user")
        .exec(&json!({"id": 1}), NO_HEADERS)
        .await
        .expect("exec failed");

    let requests = server.received_requests().await.expect("recording enabled");
    assert!(requests[0].headers.get("x-hasura-admin-secret").is_none());
}

#[tokio::test]
async fn test_non_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("upstream unavailable"))
        .mount(&server)
        .await;

    let mut executor = executor(&server, None);
    let result: mon_net::Result<User> = executor
        .set_response_key("user")
        .exec(&json!({"id": 1}), NO_HEADERS)
        .await;

    match result {
        Err(Error::InvalidBody { status, .. }) => assert_eq!(status, 502),
        other => panic!("expected invalid body, got {other:?}"),
    }
}

#[tokio::test]
async fn test_error_envelope_on_http_error_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({"errors": [{"message": "invalid x-hasura-admin-secret"}]})),
        )
        .mount(&server)
        .await;

    let mut executor = executor(&server, Some("wrong"));
    let result: mon_net::Result<User> = executor
        .set_response_key("user")
        .exec(&json!({"id": 1}), NO_HEADERS)
        .await;

    assert!(matches!(result, Err(Error::Remote { .. })));
}

#[tokio::test]
async fn test_unreachable_endpoint() {
    let executor = GraphQLExecutor::builder("http://127.0.0.1:1/v1/graphql")
        .query(QUERY)
        .build()
        .expect("Failed to build executor");

    let result: mon_net::Result<Value> = executor.exec(&json!({"id": 1}), NO_HEADERS).await;

    let err = result.unwrap_err();
    assert!(err.is_transport(), "expected transport error, got {err:?}");
}

#[tokio::test]
async fn test_serialization_failure_sends_nothing() {
    let server = MockServer::start().await;
    respond_with(&server, json!({"data": {}})).await;

    let executor = executor(&server, None);

    let mut variables = HashMap::new();
    variables.insert((1, 2), "tuple keys are not JSON");

    let result: mon_net::Result<Value> = executor.exec(&variables, NO_HEADERS).await;
    assert!(matches!(result, Err(Error::Serialize(_))));

    let requests = server.received_requests().await.expect("recording enabled");
    assert!(requests.is_empty());
}

#[tokio::test]
async fn test_invalid_caller_header() {
    let server = MockServer::start().await;
    respond_with(&server, json!({"data": {}})).await;

    let executor = executor(&server, None);
    let result: mon_net::Result<Value> = executor
        .exec(&json!({}), [("x-hasura-role", "bad\nvalue")])
        .await;

    assert!(matches!(result, Err(Error::InvalidHeader(_))));
}

#[tokio::test]
async fn test_new_reads_query_file() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_json(json!({"query": QUERY, "variables": null})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": {"user": {"id": 9, "name": "ana"}}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(QUERY.as_bytes()).unwrap();

    let mut executor =
        GraphQLExecutor::new(endpoint(&server), Some("admin-secret"), file.path()).unwrap();
    assert!(executor.has_admin_secret());
    assert_eq!(executor.query().as_str(), QUERY);

    let user: User = executor
        .set_response_key("user")
        .exec(&(), NO_HEADERS)
        .await
        .expect("exec failed");
    assert_eq!(user.id, 9);
}

#[test]
fn test_new_fails_on_missing_query_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("get_user.gql");

    let result = GraphQLExecutor::new("https://hasura.example.com/v1/graphql", None, &path);
    match result {
        Err(Error::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn test_from_config() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(QUERY.as_bytes()).unwrap();

    let config: ExecutorConfig = serde_json::from_value(json!({
        "url": "https://hasura.example.com/v1/graphql",
        "admin_secret": "admin-secret",
        "query_path": file.path()
    }))
    .unwrap();

    let executor = GraphQLExecutor::from_config(config).unwrap();
    assert!(executor.has_admin_secret());
    assert_eq!(executor.query().as_str(), QUERY);
}
