// Portal API response types
//
// Models for the news portal's JSON API. Keys are camelCase with `AR`
// suffixes for the Arabic variants. Fields use `#[serde(default)]` liberally
// because the backend omits empty values instead of sending nulls.

use serde::{Deserialize, Serialize};

// ── Profile ──────────────────────────────────────────────────────────

/// Body of the authenticated profile endpoint.
///
/// Display data lives at the top level while the account-level fields
/// (avatar, academic e-mail) are nested under `user`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub level: serde_json::Value,
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "nameAR")]
    pub name_ar: String,
    #[serde(default)]
    pub user: ProfileAccount,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Account sub-record nested inside `ProfileResponse`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileAccount {
    #[serde(default)]
    pub image_name: Option<String>,
    #[serde(default)]
    pub academic_email: Option<String>,
}

// ── News ─────────────────────────────────────────────────────────────

/// Full article object from `GET {news_path}/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticleResponse {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default, rename = "titleAR")]
    pub title_ar: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, rename = "contentAR")]
    pub content_ar: String,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub images: Vec<NewsImage>,
    /// Space-delimited tag list.
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub publisher: Publisher,
    /// Numeric on most deployments, string on some; kept loose.
    #[serde(default)]
    pub publisher_id: serde_json::Value,
    /// ISO-8601 timestamp.
    #[serde(default)]
    pub publication_date: Option<String>,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub is_breaking_news: bool,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// One entry of an article's image gallery.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsImage {
    pub image_name: String,
}

/// Author block embedded in an article.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Publisher {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "nameAR")]
    pub name_ar: String,
}

// ── Errors ───────────────────────────────────────────────────────────

/// Conventional error body: `{ "message": "...", "statusCode": 404 }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    /// Kept loose: some backends send it as a string.
    #[serde(default)]
    pub status_code: serde_json::Value,
}

impl ErrorBody {
    /// `statusCode` as an HTTP status, when it is a number or numeric
    /// string in range.
    pub fn status(&self) -> Option<u16> {
        match &self.status_code {
            serde_json::Value::Number(n) => n.as_u64().and_then(|n| u16::try_from(n).ok()),
            serde_json::Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}
