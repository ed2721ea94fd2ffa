//! Output formatting: table, JSON, YAML, plain.
//!
//! Renders view models in the format selected by `--output`. Table emits
//! a human layout, structured formats use serde, plain emits one value
//! per line.

use std::io::{self, IsTerminal, Write};

use owo_colors::OwoColorize;
use serde::Serialize;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Segment},
};

use newsfront_core::Direction;
use newsfront_core::tags::TagLink;

use crate::cli::{ColorMode, OutputFormat};
use crate::error::CliError;

// ── Color helpers ────────────────────────────────────────────────────

/// Determine whether color output should be enabled.
pub fn should_color(mode: &ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stdout().is_terminal() && std::env::var("NO_COLOR").is_err(),
    }
}

/// Styling for the table layout; every method is a no-op when color is off.
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    color: bool,
    direction: Direction,
}

impl Painter {
    pub fn new(color: bool, direction: Direction) -> Self {
        Self { color, direction }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn heading(&self, s: &str) -> String {
        if self.color {
            s.bold().cyan().to_string()
        } else {
            s.to_owned()
        }
    }

    pub fn banner(&self, s: &str) -> String {
        if self.color {
            s.bold().red().to_string()
        } else {
            format!("[{s}]")
        }
    }

    pub fn muted(&self, s: &str) -> String {
        if self.color {
            s.dimmed().to_string()
        } else {
            s.to_owned()
        }
    }

    pub fn link(&self, s: &str) -> String {
        if self.color {
            s.underline().blue().to_string()
        } else {
            s.to_owned()
        }
    }

    pub fn error(&self, s: &str) -> String {
        if self.color {
            s.red().to_string()
        } else {
            s.to_owned()
        }
    }
}

// ── Render dispatchers ───────────────────────────────────────────────

/// Render a single serde-serializable item in the chosen format.
///
/// Table rendering uses `detail_fn`, which returns a pre-formatted string.
pub fn render_single<T>(
    format: &OutputFormat,
    data: &T,
    detail_fn: impl Fn(&T) -> String,
    id_fn: impl Fn(&T) -> String,
) -> Result<String, CliError>
where
    T: Serialize,
{
    match format {
        OutputFormat::Table => Ok(detail_fn(data)),
        OutputFormat::Json => render_json(data, false),
        OutputFormat::JsonCompact => render_json(data, true),
        OutputFormat::Yaml => render_yaml(data),
        OutputFormat::Plain => Ok(id_fn(data)),
    }
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

// ── Tag table ────────────────────────────────────────────────────────

#[derive(Tabled)]
struct TagRow {
    #[tabled(rename = "Tag")]
    tag: String,
    #[tabled(rename = "Link")]
    href: String,
}

/// Tags as a table; right-aligned for right-to-left locales.
pub fn tag_table(tags: &[TagLink], header: &str, direction: Direction) -> String {
    let rows: Vec<TagRow> = tags
        .iter()
        .map(|t| TagRow {
            tag: t.tag.clone(),
            href: t.href.clone(),
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    if direction == Direction::Rtl {
        table.with(Modify::new(Segment::all()).with(Alignment::right()));
    }
    format!("{header}\n{table}")
}

// ── Format-specific renderers ────────────────────────────────────────

fn render_json<T: Serialize + ?Sized>(data: &T, compact: bool) -> Result<String, CliError> {
    let out = if compact {
        serde_json::to_string(data)
    } else {
        serde_json::to_string_pretty(data)
    };
    out.map_err(|e| CliError::Render {
        message: e.to_string(),
    })
}

fn render_yaml<T: Serialize + ?Sized>(data: &T) -> Result<String, CliError> {
    serde_yaml::to_string(data).map_err(|e| CliError::Render {
        message: e.to_string(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Item {
        id: u64,
        title: String,
    }

    fn item() -> Item {
        Item {
            id: 7,
            title: "Campus reopens".into(),
        }
    }

    #[test]
    fn structured_formats_use_serde() {
        let json = render_single(&OutputFormat::JsonCompact, &item(), |_| String::new(), |_| String::new())
            .unwrap();
        assert_eq!(json, r#"{"id":7,"title":"Campus reopens"}"#);

        let yaml = render_single(&OutputFormat::Yaml, &item(), |_| String::new(), |_| String::new())
            .unwrap();
        assert!(yaml.contains("title: Campus reopens"));
    }

    #[test]
    fn plain_and_table_use_callbacks() {
        let plain = render_single(&OutputFormat::Plain, &item(), |_| "detail".into(), |i| i.id.to_string())
            .unwrap();
        assert_eq!(plain, "7");
        let table = render_single(&OutputFormat::Table, &item(), |_| "detail".into(), |i| i.id.to_string())
            .unwrap();
        assert_eq!(table, "detail");
    }

    #[test]
    fn painter_without_color_is_plain_text() {
        let p = Painter::new(false, Direction::Ltr);
        assert_eq!(p.heading("News"), "News");
        assert_eq!(p.banner("Breaking"), "[Breaking]");
    }

    #[test]
    fn tag_table_lists_every_tag() {
        let tags = newsfront_core::tags::links("sports campus");
        let out = tag_table(&tags, "Tags", Direction::Ltr);
        assert!(out.starts_with("Tags\n"));
        assert!(out.contains("/news?search.tags=sports"));
        assert!(out.contains("/news?search.tags=campus"));
    }
}
