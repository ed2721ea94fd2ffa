// ── Locale field resolution ──
//
// Records carry English and Arabic variants side by side (`title` /
// `titleAR`). Selection happens per field, so a partially translated record
// renders mixed-language output.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// UI language.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Locale {
    #[default]
    En,
    Ar,
}

/// Text direction of a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Locale {
    pub fn direction(self) -> Direction {
        match self {
            Self::En => Direction::Ltr,
            Self::Ar => Direction::Rtl,
        }
    }
}

/// Pick the Arabic variant under `Locale::Ar`, the primary one otherwise.
///
/// No fallback: an empty Arabic variant is returned as-is.
pub fn resolve<T>(locale: Locale, primary: T, arabic_variant: T) -> T {
    match locale {
        Locale::Ar => arabic_variant,
        Locale::En => primary,
    }
}
