// Integration tests for `PortalClient` using wiremock.
#![allow(clippy::unwrap_used)]

use pretty_assertions::assert_eq;
use secrecy::SecretString;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use newsfront_api::{Endpoints, Error, PortalClient};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, PortalClient) {
    let server = MockServer::start().await;
    let client = PortalClient::from_reqwest(&server.uri(), reqwest::Client::new()).unwrap();
    (server, client)
}

fn token() -> SecretString {
    SecretString::from("tok-123".to_string())
}

// ── Happy-path tests ────────────────────────────────────────────────

#[tokio::test]
async fn test_get_profile_sends_bearer_token() {
    let (server, client) = setup().await;

    let body = json!({
        "code": "s2024",
        "level": 2,
        "name": "Sara Ali",
        "nameAR": "سارة علي",
        "user": { "imageName": "x.png", "academicEmail": "sara@uni.edu" }
    });

    Mock::given(method("GET"))
        .and(path("/profile"))
        .and(header("authorization", "Bearer tok-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let profile = client.get_profile(&token()).await.unwrap();

    assert_eq!(profile.code, "s2024");
    assert_eq!(profile.level, json!(2));
    assert_eq!(profile.name_ar, "سارة علي");
    assert_eq!(profile.user.image_name.as_deref(), Some("x.png"));
}

#[tokio::test]
async fn test_get_news_appends_id() {
    let (server, client) = setup().await;

    let body = json!({
        "id": 42,
        "title": "Campus opens",
        "titleAR": "افتتاح الحرم",
        "content": "Body",
        "contentAR": "نص",
        "coverImage": "cover.jpg",
        "images": [{ "imageName": "a.jpg" }, { "imageName": "b.jpg" }],
        "tags": "sports politics tech",
        "publisher": { "name": "Omar", "nameAR": "عمر" },
        "publisherId": 9,
        "publicationDate": "2024-03-01T10:30:00Z",
        "likes": 5,
        "views": 120,
        "isBreakingNews": true
    });

    Mock::given(method("GET"))
        .and(path("/news/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let article = client.get_news(42).await.unwrap();

    assert_eq!(article.id, 42);
    assert_eq!(article.images.len(), 2);
    assert_eq!(article.images[1].image_name, "b.jpg");
    assert_eq!(article.publisher.name_ar, "عمر");
    assert_eq!(article.publisher_id, json!(9));
    assert!(article.is_breaking_news);
}

#[tokio::test]
async fn test_custom_endpoints() {
    let server = MockServer::start().await;
    let client = PortalClient::from_reqwest(&format!("{}/api/v2", server.uri()), reqwest::Client::new())
        .unwrap()
        .with_endpoints(Endpoints {
            profile: "/students/me".into(),
            news: "/articles/".into(),
        });

    Mock::given(method("GET"))
        .and(path("/api/v2/articles/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 3 })))
        .expect(1)
        .mount(&server)
        .await;

    let article = client.get_news(3).await.unwrap();
    assert_eq!(article.id, 3);
}

// ── Error tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_error_body_becomes_api_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/news/404"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({ "message": "Not found", "statusCode": 404 })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let err = client.get_news(404).await.unwrap_err();
    match err {
        Error::Api {
            message,
            status,
            body,
        } => {
            assert_eq!(message, "Not found");
            assert_eq!(status, Some(404));
            assert_eq!(body["statusCode"], json!(404));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unauthorized_profile() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/profile"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "message": "Invalid token" })),
        )
        .mount(&server)
        .await;

    let err = client.get_profile(&token()).await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.to_string(), "API error (HTTP 401): Invalid token");
}

#[tokio::test]
async fn test_malformed_success_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/news/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client.get_news(1).await.unwrap_err();
    assert!(
        matches!(err, Error::Deserialization { ref body, .. } if body == "not json"),
        "unexpected error: {err:?}"
    );
}
