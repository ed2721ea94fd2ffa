// ── News detail view ──
//
// The article body plus the page chrome around it: page title and a
// sidebar holding the signed-in user's card and the related-news slot.

use serde::Serialize;

use super::{Link, ProfileCard, Rendered};
use crate::i18n::Translate;
use crate::locale::{self, Locale};
use crate::model::{NewsArticle, UserProfile};
use crate::resource::ResourceState;
use crate::tags::{self, TagLink};

/// Display format for publication dates.
const DATE_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Cover image with its alt text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverImage {
    pub src: Option<String>,
    pub alt: String,
}

/// Image gallery handed to the carousel widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Carousel {
    pub title: String,
    pub images: Vec<String>,
}

/// Translated captions for the metadata rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailLabels {
    pub wrote_by: String,
    pub tags: String,
    pub date: String,
    pub likes: String,
    pub views: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsDetail {
    pub id: u64,
    /// Present only for breaking news.
    pub breaking_banner: Option<String>,
    pub cover: CoverImage,
    pub publisher: Link,
    pub tags: Vec<TagLink>,
    pub published: Option<String>,
    pub likes: u64,
    pub views: u64,
    pub title: String,
    pub content: String,
    /// Omitted entirely when the article has no gallery images.
    pub carousel: Option<Carousel>,
    pub labels: DetailLabels,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sidebar {
    /// Only present when the session has a user with a code.
    pub profile_card: Option<Rendered<ProfileCard>>,
    pub related_news_title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewsPage {
    /// Document title: the localized article title once loaded.
    pub title: String,
    pub detail: Rendered<NewsDetail>,
    pub sidebar: Sidebar,
}

/// Render the article body.
pub fn news_detail(state: &ResourceState<NewsArticle>, t: &dyn Translate) -> Rendered<NewsDetail> {
    Rendered::from_state(state, |a| build(a, t))
}

/// Render the full page. `profile` is `Some` only when the session user
/// has a code, in which case the sidebar carries their card.
pub fn news_page(
    article: &ResourceState<NewsArticle>,
    profile: Option<&ResourceState<UserProfile>>,
    t: &dyn Translate,
) -> NewsPage {
    let title = article.data().map_or_else(
        || t.translate("news.news"),
        |a| locale::resolve(t.locale(), &a.title, &a.title_ar).clone(),
    );

    NewsPage {
        title,
        detail: news_detail(article, t),
        sidebar: Sidebar {
            profile_card: profile.map(|state| super::profile_card(state, t, false)),
            related_news_title: t.translate("news.related"),
        },
    }
}

fn build(article: &NewsArticle, t: &dyn Translate) -> NewsDetail {
    let lang: Locale = t.locale();

    let carousel = (!article.images.is_empty()).then(|| Carousel {
        title: article.title.clone(),
        images: article.images.iter().map(|i| i.image_name.clone()).collect(),
    });

    let publisher = Link::new(
        locale::resolve(lang, &article.publisher.name, &article.publisher.name_ar).clone(),
        format!(
            "/news?search.publisherId={}",
            article.publisher_id.as_deref().unwrap_or_default()
        ),
    )
    .with_title("Show Articles By This Author");

    NewsDetail {
        id: article.id,
        breaking_banner: article
            .is_breaking_news
            .then(|| t.translate("news.isBreaking")),
        cover: CoverImage {
            src: article.cover_image.clone(),
            alt: format!("{} Image Cover", article.title),
        },
        publisher,
        tags: tags::links(&article.tags),
        published: article
            .publication_date
            .map(|d| d.format(DATE_FORMAT).to_string()),
        likes: article.likes,
        views: article.views,
        title: locale::resolve(lang, &article.title, &article.title_ar).clone(),
        content: locale::resolve(lang, &article.content, &article.content_ar).clone(),
        carousel,
        labels: DetailLabels {
            wrote_by: t.translate("news.wroteBy"),
            tags: t.translate("news.tags"),
            date: t.translate("news.date"),
            likes: t.translate("misc.likes"),
            views: t.translate("misc.views"),
        },
    }
}
