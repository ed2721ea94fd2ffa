// End-to-end tests for `Portal` against a wiremock backend.
#![allow(clippy::unwrap_used)]

use std::sync::Arc;
use std::time::Duration;

use secrecy::SecretString;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use newsfront_core::{
    Catalog, Locale, Portal, PortalConfig, Rendered, Session, SessionUser, view,
};

// ── Helpers ─────────────────────────────────────────────────────────

fn config(server: &MockServer) -> PortalConfig {
    PortalConfig::new(server.uri().parse().unwrap())
}

fn token() -> SecretString {
    SecretString::from("tok-123".to_string())
}

fn profile_body() -> serde_json::Value {
    json!({
        "code": "s2024",
        "level": 1,
        "name": "Sara Ali",
        "nameAR": "سارة علي",
        "user": { "imageName": "x.png", "academicEmail": "sara@uni.edu" }
    })
}

fn article_body(images: serde_json::Value) -> serde_json::Value {
    json!({
        "id": 42,
        "title": "Campus opens",
        "titleAR": "افتتاح الحرم",
        "content": "Body",
        "contentAR": "نص",
        "coverImage": "cover.jpg",
        "images": images,
        "tags": "sports politics tech",
        "publisher": { "name": "Omar", "nameAR": "عمر" },
        "publisherId": 9,
        "publicationDate": "2024-03-01T10:30:00Z",
        "likes": 5,
        "views": 120,
        "isBreakingNews": false
    })
}

async fn mount_profile(server: &MockServer, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path("/profile"))
        .and(header("authorization", "Bearer tok-123"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(profile_body())
                .set_delay(Duration::from_millis(50)),
        )
        .expect(expected_calls)
        .mount(server)
        .await;
}

// ── Profile ─────────────────────────────────────────────────────────

#[tokio::test]
async fn concurrent_profile_cards_share_one_request() {
    let server = MockServer::start().await;
    mount_profile(&server, 1).await;

    let portal = Portal::new(config(&server)).unwrap();
    let t = Catalog::builtin(Locale::En);
    let token = token();

    let (a, b) = tokio::join!(
        portal.profile_card(&token, &t, false),
        portal.profile_card(&token, &t, false),
    );

    assert_eq!(a, b);
    assert_eq!(a.ready().unwrap().display_name, "Sara Ali");

    let user = portal.session().current_user().unwrap();
    assert_eq!(user.image_name.as_deref(), Some("x.png"));
    assert_eq!(portal.session().revision(), 1);
}

#[tokio::test]
async fn cached_profile_is_reused_without_publishing_again() {
    let server = MockServer::start().await;
    mount_profile(&server, 1).await;

    let portal = Portal::new(config(&server)).unwrap();
    let t = Catalog::builtin(Locale::Ar);

    portal.profile_card(&token(), &t, true).await;
    let card = portal.profile_card(&token(), &t, true).await;

    assert_eq!(card.ready().unwrap().display_name, "سارة علي");
    assert_eq!(portal.session().revision(), 1);
}

#[tokio::test]
async fn profile_success_merges_into_existing_session_user() {
    let server = MockServer::start().await;
    mount_profile(&server, 1).await;

    let session = Arc::new(Session::with_user(SessionUser {
        code: Some("s2024".into()),
        token: Some(token()),
        ..SessionUser::default()
    }));
    let client = newsfront_api::PortalClient::new(
        server.uri().parse().unwrap(),
        newsfront_api::Endpoints::default(),
        &newsfront_api::transport::TransportConfig::default(),
    )
    .unwrap();
    let portal = Portal::with_client(config(&server), client, session);

    portal.profile(&token()).settled().await;

    let user = portal.session().current_user().unwrap();
    assert_eq!(user.code.as_deref(), Some("s2024"));
    assert_eq!(user.image_name.as_deref(), Some("x.png"));
}

#[tokio::test]
async fn profile_without_image_clears_previous_avatar() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/profile"))
        .and(header("authorization", "Bearer tok-b"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": "s2025",
            "level": 2,
            "name": "Bilal",
            "user": { "imageName": "" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let session = Arc::new(Session::with_user(SessionUser {
        code: Some("s2024".into()),
        image_name: Some("alice.png".into()),
        ..SessionUser::default()
    }));
    let client = newsfront_api::PortalClient::new(
        server.uri().parse().unwrap(),
        newsfront_api::Endpoints::default(),
        &newsfront_api::transport::TransportConfig::default(),
    )
    .unwrap();
    let portal = Portal::with_client(config(&server), client, session);

    let state = portal
        .profile(&SecretString::from("tok-b".to_string()))
        .settled()
        .await;
    assert!(state.is_success());

    let user = portal.session().current_user().unwrap();
    assert_eq!(user.image_name, None);
    assert_eq!(portal.session().revision(), 1);
}

// ── News ────────────────────────────────────────────────────────────

#[tokio::test]
async fn failed_article_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/news/404"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({ "message": "Not found", "statusCode": 404 })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let portal = Portal::new(config(&server)).unwrap();
    let t = Catalog::builtin(Locale::En);

    let page = portal.news_page(404, &t).await;
    let Rendered::Failed(cause) = &page.detail else {
        panic!("expected failure, got {:?}", page.detail);
    };
    assert_eq!(cause.message, "Not found");
    assert_eq!(cause.status_code, Some(404));
    assert_eq!(page.title, "News");

    let again = portal.news(404).state();
    assert!(again.is_error());
}

#[tokio::test]
async fn article_without_images_has_no_carousel() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/news/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(article_body(json!([]))))
        .expect(1)
        .mount(&server)
        .await;

    let portal = Portal::new(config(&server)).unwrap();
    let page = portal.news_page(42, &Catalog::builtin(Locale::En)).await;

    let detail = page.detail.ready().unwrap();
    assert!(detail.carousel.is_none());
    assert_eq!(page.title, "Campus opens");
    assert!(page.sidebar.profile_card.is_none());
}

#[tokio::test]
async fn news_page_sidebar_shows_signed_in_user() {
    let server = MockServer::start().await;
    mount_profile(&server, 1).await;
    Mock::given(method("GET"))
        .and(path("/news/42"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(article_body(json!([{ "imageName": "a.jpg" }]))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let portal = Portal::new(config(&server)).unwrap();
    portal.session().set_current_user(newsfront_core::SessionUserPatch {
        code: Some("s2024".into()),
        token: Some(token()),
        ..Default::default()
    });

    let page = portal.news_page(42, &Catalog::builtin(Locale::Ar)).await;

    assert_eq!(page.title, "افتتاح الحرم");
    let detail = page.detail.ready().unwrap();
    assert_eq!(detail.carousel.as_ref().unwrap().images, vec!["a.jpg"]);
    let card = page.sidebar.profile_card.as_ref().unwrap();
    assert_eq!(card.ready().unwrap().handle.label, "@s2024");
}

#[tokio::test]
async fn zero_freshness_refetches_every_observation() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/news/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(article_body(json!([]))))
        .expect(2)
        .mount(&server)
        .await;

    let mut cfg = config(&server);
    cfg.freshness = Duration::ZERO;
    let portal = Portal::new(cfg).unwrap();

    portal.news(42).settled().await;
    let state = portal.news(42).settled().await;

    let page = view::news_page(&state, None, &Catalog::builtin(Locale::En));
    assert_eq!(page.detail.ready().unwrap().id, 42);
}
