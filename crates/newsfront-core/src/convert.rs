// ── API-to-domain type conversions ──
//
// Bridges raw `newsfront_api` response types into canonical
// `newsfront_core::model` types, and transport errors into `ErrorInfo`.
// Loosely typed wire fields (numbers-or-strings, optional timestamps) are
// normalized here.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::Value;

use newsfront_api::models::{NewsArticleResponse, ProfileResponse};

use crate::model::{NewsArticle, NewsImage, Publisher, UserProfile};
use crate::resource::ErrorInfo;

// ── Helpers ────────────────────────────────────────────────────────

/// Render a scalar JSON value as text; `None` for null, empty, or compound values.
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Drop empty strings.
fn non_empty(raw: Option<String>) -> Option<String> {
    raw.filter(|s| !s.is_empty())
}

/// Parse an RFC 3339 timestamp, or a naive ISO-8601 one taken as UTC.
fn parse_datetime(raw: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = raw?.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

// ── Records ────────────────────────────────────────────────────────

impl From<ProfileResponse> for UserProfile {
    fn from(p: ProfileResponse) -> Self {
        Self {
            level: scalar_to_string(&p.level).unwrap_or_default(),
            code: p.code,
            name: p.name,
            name_ar: p.name_ar,
            image_name: non_empty(p.user.image_name),
            academic_email: non_empty(p.user.academic_email),
        }
    }
}

impl From<NewsArticleResponse> for NewsArticle {
    fn from(a: NewsArticleResponse) -> Self {
        Self {
            id: a.id,
            publisher_id: scalar_to_string(&a.publisher_id),
            publication_date: parse_datetime(a.publication_date.as_deref()),
            title: a.title,
            title_ar: a.title_ar,
            content: a.content,
            content_ar: a.content_ar,
            cover_image: non_empty(a.cover_image),
            images: a
                .images
                .into_iter()
                .map(|img| NewsImage {
                    image_name: img.image_name,
                })
                .collect(),
            tags: a.tags,
            publisher: Publisher {
                name: a.publisher.name,
                name_ar: a.publisher.name_ar,
            },
            likes: a.likes,
            views: a.views,
            is_breaking_news: a.is_breaking_news,
        }
    }
}

// ── Errors ─────────────────────────────────────────────────────────

impl From<newsfront_api::Error> for ErrorInfo {
    fn from(err: newsfront_api::Error) -> Self {
        let status_code = err.status();
        let raw = err.raw_body();
        let message = match err {
            newsfront_api::Error::Api { message, .. } => message,
            other => other.to_string(),
        };
        Self {
            message,
            status_code,
            raw,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use serde_json::json;

    #[test]
    fn profile_flattens_nested_user() {
        let raw: ProfileResponse = serde_json::from_value(json!({
            "code": "s2024",
            "level": 3,
            "name": "Sara",
            "nameAR": "سارة",
            "user": { "imageName": "", "academicEmail": "sara@uni.edu" }
        }))
        .unwrap();

        let profile = UserProfile::from(raw);
        assert_eq!(profile.level, "3");
        assert_eq!(profile.image_name, None);
        assert_eq!(profile.academic_email.as_deref(), Some("sara@uni.edu"));
    }

    #[test]
    fn article_normalizes_loose_fields() {
        let raw: NewsArticleResponse = serde_json::from_value(json!({
            "id": 1,
            "publisherId": "p-9",
            "publicationDate": "2024-03-01T10:30:00",
            "images": [{ "imageName": "a.jpg" }]
        }))
        .unwrap();

        let article = NewsArticle::from(raw);
        assert_eq!(article.publisher_id.as_deref(), Some("p-9"));
        let date = article.publication_date.unwrap();
        assert_eq!((date.year(), date.month(), date.hour()), (2024, 3, 10));
        assert_eq!(article.images[0].image_name, "a.jpg");
        assert_eq!(article.cover_image, None);
    }

    #[test]
    fn rfc3339_with_offset_is_converted_to_utc() {
        let date = parse_datetime(Some("2024-03-01T12:00:00+02:00")).unwrap();
        assert_eq!(date.hour(), 10);
        assert!(parse_datetime(Some("yesterday")).is_none());
        assert!(parse_datetime(None).is_none());
    }

    #[test]
    fn api_error_keeps_body_verbatim() {
        let body = json!({ "message": "Not found", "statusCode": 404 });
        let info = ErrorInfo::from(newsfront_api::Error::Api {
            message: "Not found".into(),
            status: Some(404),
            body: body.clone(),
        });
        assert_eq!(info.message, "Not found");
        assert_eq!(info.status_code, Some(404));
        assert_eq!(info.raw, body);
    }

    #[test]
    fn other_errors_use_display() {
        let info = ErrorInfo::from(newsfront_api::Error::Tls("bad cert".into()));
        assert_eq!(info.message, "TLS error: bad cert");
        assert_eq!(info.status_code, None);
        assert!(info.raw.is_null());
    }
}
