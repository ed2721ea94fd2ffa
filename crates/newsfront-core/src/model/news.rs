// ── News article domain types ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsArticle {
    pub id: u64,
    pub title: String,
    pub title_ar: String,
    pub content: String,
    pub content_ar: String,
    pub cover_image: Option<String>,
    /// Gallery in display order.
    pub images: Vec<NewsImage>,
    /// Space-delimited tag list, kept verbatim.
    pub tags: String,
    pub publisher: Publisher,
    /// Used to build the "articles by this author" link.
    pub publisher_id: Option<String>,
    pub publication_date: Option<DateTime<Utc>>,
    pub likes: u64,
    pub views: u64,
    pub is_breaking_news: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsImage {
    pub image_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publisher {
    pub name: String,
    pub name_ar: String,
}
