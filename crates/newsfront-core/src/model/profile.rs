// ── User profile domain type ──

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Public handle, rendered as `@code`.
    pub code: String,
    /// Academic level; selects the `profile.level_<level>` label.
    pub level: String,
    pub name: String,
    pub name_ar: String,
    /// Avatar image; `None` renders a placeholder.
    pub image_name: Option<String>,
    pub academic_email: Option<String>,
}
