// ── Translation lookup ──
//
// Views only need `translate(key)` and the active locale. `Catalog` is the
// built-in implementation with English and Arabic tables; embedders with
// their own string tables implement `Translate` directly.

use std::collections::HashMap;

use crate::locale::Locale;

/// Translation lookup consumed by the views.
pub trait Translate {
    fn locale(&self) -> Locale;

    /// Translated string for `key`.
    fn translate(&self, key: &str) -> String;
}

const EN: &[(&str, &str)] = &[
    ("misc.My Profile", "My Profile"),
    ("misc.Home", "Home"),
    ("misc.likes", "Likes"),
    ("misc.views", "Views"),
    ("misc.loading", "Loading..."),
    ("misc.error", "Something went wrong"),
    ("news.news", "News"),
    ("news.isBreaking", "Breaking News"),
    ("news.wroteBy", "Written by"),
    ("news.tags", "Tags"),
    ("news.date", "Date"),
    ("news.related", "Latest News"),
    ("profile.level_1", "First Level"),
    ("profile.level_2", "Second Level"),
    ("profile.level_3", "Third Level"),
    ("profile.level_4", "Fourth Level"),
];

const AR: &[(&str, &str)] = &[
    ("misc.My Profile", "ملفي الشخصي"),
    ("misc.Home", "الرئيسية"),
    ("misc.likes", "الإعجابات"),
    ("misc.views", "المشاهدات"),
    ("misc.loading", "جار التحميل..."),
    ("misc.error", "حدث خطأ ما"),
    ("news.news", "الأخبار"),
    ("news.isBreaking", "عاجل"),
    ("news.wroteBy", "كتب بواسطة"),
    ("news.tags", "الوسوم"),
    ("news.date", "التاريخ"),
    ("news.related", "آخر الأخبار"),
    ("profile.level_1", "المستوى الأول"),
    ("profile.level_2", "المستوى الثاني"),
    ("profile.level_3", "المستوى الثالث"),
    ("profile.level_4", "المستوى الرابع"),
];

/// In-memory string table for one locale.
///
/// Unknown keys translate to themselves.
#[derive(Debug, Clone)]
pub struct Catalog {
    locale: Locale,
    entries: HashMap<String, String>,
}

impl Catalog {
    /// The built-in table for `locale`.
    pub fn builtin(locale: Locale) -> Self {
        let table = match locale {
            Locale::En => EN,
            Locale::Ar => AR,
        };
        Self {
            locale,
            entries: table
                .iter()
                .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
                .collect(),
        }
    }

    /// Add or override one entry.
    #[must_use]
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }
}

impl Translate for Catalog {
    fn locale(&self) -> Locale {
        self.locale
    }

    fn translate(&self, key: &str) -> String {
        self.entries
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_owned())
    }
}
