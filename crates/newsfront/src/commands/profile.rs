//! Profile command handler.

use newsfront_core::{ProfileCard, Rendered, Translate};

use crate::cli::ProfileArgs;
use crate::error::CliError;
use crate::output::{self, Painter};

use super::Ctx;

pub async fn handle(ctx: &Ctx<'_>, args: ProfileArgs) -> Result<(), CliError> {
    let token = ctx.resolved.require_token()?;
    let card = ctx
        .portal
        .profile_card(token, &ctx.catalog, args.profile_page)
        .await;

    let out = output::render_single(
        &ctx.resolved.output,
        &card,
        |c| detail(c, &ctx.catalog, &ctx.painter),
        |c| c.ready().map(|c| c.handle.label.clone()).unwrap_or_default(),
    )?;
    output::print_output(&out, ctx.global.quiet);

    match card {
        Rendered::Failed(ref cause) => Err(CliError::fetch("profile", cause)),
        _ => Ok(()),
    }
}

/// Human layout for a profile card (also used in the news sidebar).
pub(crate) fn detail(card: &Rendered<ProfileCard>, t: &dyn Translate, p: &Painter) -> String {
    let c = match card {
        Rendered::Loading => return t.translate("misc.loading"),
        Rendered::Failed(_) => return p.error(&t.translate("misc.error")),
        Rendered::Ready(c) => c,
    };

    let handle = if c.handle_muted {
        p.muted(&c.handle.label)
    } else {
        p.link(&c.handle.label)
    };

    let mut lines = vec![
        p.heading(&c.display_name),
        format!("{handle}  ({})", c.level_label),
        format!(
            "Avatar:  {}",
            c.avatar.as_deref().unwrap_or("(placeholder)")
        ),
    ];
    if let Some(ref email) = c.academic_email {
        lines.push(format!("Email:   {email}"));
    }
    lines.push(format!("{} -> {}", p.link(&c.action.label), c.action.href));
    lines.join("\n")
}
