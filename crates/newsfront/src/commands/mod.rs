//! Command handlers, one module per top-level subcommand.

pub mod config_cmd;
pub mod news;
pub mod profile;

use newsfront_core::{Catalog, Portal, Translate};

use crate::cli::{Command, GlobalOpts};
use crate::config::Resolved;
use crate::error::CliError;
use crate::output::{self, Painter};

/// Shared state for commands that talk to the portal.
pub struct Ctx<'a> {
    pub portal: &'a Portal,
    pub resolved: &'a Resolved,
    pub catalog: Catalog,
    pub painter: Painter,
    pub global: &'a GlobalOpts,
}

impl<'a> Ctx<'a> {
    pub fn new(portal: &'a Portal, resolved: &'a Resolved, global: &'a GlobalOpts) -> Self {
        let catalog = Catalog::builtin(resolved.locale);
        let painter = Painter::new(
            output::should_color(&resolved.color),
            catalog.locale().direction(),
        );
        Self {
            portal,
            resolved,
            catalog,
            painter,
            global,
        }
    }
}

/// Route a portal command to its handler.
pub async fn dispatch(cmd: Command, ctx: &Ctx<'_>) -> Result<(), CliError> {
    match cmd {
        Command::Profile(args) => profile::handle(ctx, args).await,
        Command::News(args) => news::handle(ctx, args).await,
        Command::Config(_) | Command::Completions(_) => Err(CliError::Validation {
            field: "command".into(),
            reason: "handled before connecting".into(),
        }),
    }
}
