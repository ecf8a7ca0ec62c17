//! End-to-end: a token issued by the codec travels as a caller header and
//! verifies on the other side.

use mon::graphql::{GraphQLExecutor, NO_HEADERS};
use mon::jwt::{Claims, JwtCodec};
use serde::Deserialize;
use serde_json::json;
use tracing_subscriber::EnvFilter;
use wiremock::matchers::{header_exists, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Default, Deserialize)]
struct Profile {
    id: i64,
    email: String,
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[tokio::test]
async fn test_issued_token_is_forwarded_and_verifies() {
    init_tracing();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header_exists("authorization"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"profile": {"id": 12, "email": "john@example.com"}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let codec = JwtCodec::new("hasura-jwt-secret", "HS256");
    let mut claims = Claims::new();
    claims.insert("sub".into(), json!("12"));
    claims.insert(
        "https://hasura.io/jwt/claims".into(),
        json!({"x-hasura-default-role": "user", "x-hasura-user-id": "12"}),
    );
    let token = codec.encrypt(&mut claims).expect("encrypt failed");

    let mut executor = GraphQLExecutor::builder(format!("{}/v1/graphql", server.uri()))
        .query("query { profile { id email } }")
        .build()
        .expect("Failed to build executor");

    let bearer = format!("Bearer {token}");
    let mut profile = Profile::default();
    executor
        .set_response_key("profile")
        .set_response_model(&mut profile)
        .exec(&(), [("Authorization", bearer.as_str())])
        .await
        .expect("exec failed");
    assert_eq!(profile.id, 12);
    assert_eq!(profile.email, "john@example.com");

    let requests = server.received_requests().await.expect("recording enabled");
    let sent = requests[0]
        .headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .expect("bearer token sent");

    let verified = codec.decrypt(sent).expect("forwarded token verifies");
    assert_eq!(verified["sub"], "12");
    assert_eq!(
        verified["https://hasura.io/jwt/claims"]["x-hasura-default-role"],
        "user"
    );
}

#[tokio::test]
async fn test_remote_errors_surface_through_umbrella() {
    init_tracing();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": [{"message": "Could not verify JWT: JWTExpired"}]
        })))
        .mount(&server)
        .await;

    let mut executor = GraphQLExecutor::builder(format!("{}/v1/graphql", server.uri()))
        .query("query { profile { id email } }")
        .build()
        .expect("Failed to build executor");

    let result: mon::graphql::Result<Profile> = executor
        .set_response_key("profile")
        .exec(&(), NO_HEADERS)
        .await;

    let err = result.unwrap_err();
    assert!(matches!(err, mon::graphql::Error::Remote { .. }));
    assert_eq!(err.remote_messages(), vec!["Could not verify JWT: JWTExpired"]);
}
