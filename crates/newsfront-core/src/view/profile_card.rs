// ── Profile card view ──

use serde::Serialize;

use super::{Link, Rendered};
use crate::i18n::Translate;
use crate::locale;
use crate::model::UserProfile;
use crate::resource::ResourceState;

/// Compact card for the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileCard {
    /// `@code`, linking to the profile page.
    pub handle: Link,
    /// Rendered muted when the card sits on the profile page itself.
    pub handle_muted: bool,
    pub level_label: String,
    pub display_name: String,
    /// `None` renders an avatar placeholder.
    pub avatar: Option<String>,
    pub academic_email: Option<String>,
    /// "My Profile" everywhere except on the profile page, where it is "Home".
    pub action: Link,
}

/// Render the profile card for a profile resource.
pub fn profile_card(
    state: &ResourceState<UserProfile>,
    t: &dyn Translate,
    profile_page: bool,
) -> Rendered<ProfileCard> {
    Rendered::from_state(state, |p| build(p, t, profile_page))
}

fn build(profile: &UserProfile, t: &dyn Translate, profile_page: bool) -> ProfileCard {
    let action = if profile_page {
        Link::new(t.translate("misc.Home"), "/")
    } else {
        Link::new(t.translate("misc.My Profile"), "/profile")
    };

    ProfileCard {
        handle: Link::new(format!("@{}", profile.code), "/profile"),
        handle_muted: profile_page,
        level_label: t.translate(&format!("profile.level_{}", profile.level)),
        display_name: locale::resolve(t.locale(), &profile.name, &profile.name_ar).clone(),
        avatar: profile.image_name.clone(),
        academic_email: profile.academic_email.clone(),
        action,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use pretty_assertions::assert_eq;
    use tokio::time::Instant;

    use crate::i18n::Catalog;
    use crate::locale::Locale;
    use crate::resource::ErrorInfo;

    fn sample() -> UserProfile {
        UserProfile {
            code: "s2024".into(),
            level: "2".into(),
            name: "Sara Ali".into(),
            name_ar: "سارة علي".into(),
            image_name: Some("x.png".into()),
            academic_email: Some("sara@uni.edu".into()),
        }
    }

    fn success(profile: UserProfile) -> ResourceState<UserProfile> {
        ResourceState::Success {
            value: Arc::new(profile),
            fetched_at: Instant::now(),
        }
    }

    #[test]
    fn english_card() {
        let t = Catalog::builtin(Locale::En);
        let card = profile_card(&success(sample()), &t, false);

        assert_eq!(
            card,
            Rendered::Ready(ProfileCard {
                handle: Link::new("@s2024", "/profile"),
                handle_muted: false,
                level_label: "Second Level".into(),
                display_name: "Sara Ali".into(),
                avatar: Some("x.png".into()),
                academic_email: Some("sara@uni.edu".into()),
                action: Link::new("My Profile", "/profile"),
            })
        );
    }

    #[test]
    fn arabic_card_on_profile_page() {
        let t = Catalog::builtin(Locale::Ar);
        let card = profile_card(&success(sample()), &t, true);
        let card = card.ready().unwrap();

        assert_eq!(card.display_name, "سارة علي");
        assert!(card.handle_muted);
        assert_eq!(card.action, Link::new("الرئيسية", "/"));
    }

    #[test]
    fn missing_avatar_is_placeholder() {
        let t = Catalog::builtin(Locale::En);
        let mut profile = sample();
        profile.image_name = None;
        let card = profile_card(&success(profile), &t, false);
        assert_eq!(card.ready().unwrap().avatar, None);
    }

    #[test]
    fn loading_and_error_states() {
        let t = Catalog::builtin(Locale::En);
        assert_eq!(profile_card(&ResourceState::Idle, &t, false), Rendered::Loading);
        assert_eq!(profile_card(&ResourceState::Loading, &t, false), Rendered::Loading);

        let cause = ErrorInfo::new("Invalid token").with_status(401);
        let state = ResourceState::Error {
            cause: cause.clone(),
            failed_at: Instant::now(),
        };
        assert_eq!(profile_card(&state, &t, false), Rendered::Failed(cause));
    }
}
