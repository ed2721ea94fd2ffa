//! News command handler.

use newsfront_core::{NewsDetail, NewsPage, Rendered, SessionUserPatch, Translate};

use crate::cli::NewsArgs;
use crate::error::CliError;
use crate::output::{self, Painter};

use super::{Ctx, profile};

pub async fn handle(ctx: &Ctx<'_>, args: NewsArgs) -> Result<(), CliError> {
    seed_session(ctx);

    let page = ctx.portal.news_page(args.id, &ctx.catalog).await;

    if let Some(Rendered::Failed(ref cause)) = page.sidebar.profile_card {
        tracing::warn!(error = %cause, "sidebar profile unavailable");
    }

    let out = output::render_single(
        &ctx.resolved.output,
        &page,
        |p| detail(p, &ctx.catalog, &ctx.painter),
        |p| p.title.clone(),
    )?;
    output::print_output(&out, ctx.global.quiet);

    match page.detail {
        Rendered::Failed(ref cause) => Err(CliError::fetch(format!("news {}", args.id), cause)),
        _ => Ok(()),
    }
}

/// The configured user code stands in for a signed-in session.
fn seed_session(ctx: &Ctx<'_>) {
    let Some(ref code) = ctx.resolved.user_code else {
        return;
    };
    ctx.portal.session().set_current_user(SessionUserPatch {
        code: Some(code.clone()),
        token: ctx.resolved.token.clone(),
        ..SessionUserPatch::default()
    });
}

fn detail(page: &NewsPage, t: &dyn Translate, p: &Painter) -> String {
    let mut sections = vec![p.heading(&page.title)];

    sections.push(match page.detail {
        Rendered::Loading => t.translate("misc.loading"),
        Rendered::Failed(_) => p.error(&t.translate("misc.error")),
        Rendered::Ready(ref d) => article(d, p),
    });

    let mut sidebar = vec![p.heading(&format!("── {} ──", page.sidebar.related_news_title))];
    if let Some(ref card) = page.sidebar.profile_card {
        sidebar.insert(0, profile::detail(card, t, p));
    }
    sections.push(sidebar.join("\n\n"));

    sections.join("\n\n")
}

fn article(d: &NewsDetail, p: &Painter) -> String {
    let mut lines = Vec::new();
    if let Some(ref banner) = d.breaking_banner {
        lines.push(p.banner(banner));
    }
    lines.push(p.heading(&d.title));
    lines.push(format!(
        "Cover:   {} ({})",
        d.cover.src.as_deref().unwrap_or("-"),
        d.cover.alt
    ));
    lines.push(format!(
        "{}: {} -> {}",
        d.labels.wrote_by,
        p.link(&d.publisher.label),
        d.publisher.href
    ));
    lines.push(format!(
        "{}: {}",
        d.labels.date,
        d.published.as_deref().unwrap_or("-")
    ));
    lines.push(format!(
        "{}: {}   {}: {}",
        d.labels.likes, d.likes, d.labels.views, d.views
    ));

    let mut blocks = vec![lines.join("\n")];
    if !d.tags.is_empty() {
        blocks.push(output::tag_table(&d.tags, &d.labels.tags, p.direction()));
    }
    blocks.push(d.content.clone());
    if let Some(ref carousel) = d.carousel {
        let mut gallery = vec![p.muted(&carousel.title)];
        gallery.extend(carousel.images.iter().map(|i| format!("  - {i}")));
        blocks.push(gallery.join("\n"));
    }
    blocks.join("\n\n")
}
