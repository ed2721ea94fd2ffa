//! Clap derive structures for the `newsfront` CLI.
//!
//! Defines the command tree, global flags, and shared types.

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use newsfront_core::Locale;

// ── Top-Level CLI ────────────────────────────────────────────────────

/// newsfront -- read the news portal from the terminal
#[derive(Debug, Parser)]
#[command(
    name = "newsfront",
    version,
    about = "Read news portal articles and profiles from the command line",
    long_about = "Fetches profile and news records from the portal REST backend\n\
        and renders them in English or Arabic.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Backend profile to use
    #[arg(long, short = 'p', env = "NEWSFRONT_PROFILE", global = true)]
    pub profile: Option<String>,

    /// API base URL (overrides profile)
    #[arg(long, short = 'u', env = "NEWSFRONT_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Access token for the profile endpoint
    #[arg(long, env = "NEWSFRONT_TOKEN", global = true, hide_env_values = true)]
    pub token: Option<String>,

    /// Display language (en, ar)
    #[arg(long, short = 'l', env = "NEWSFRONT_LOCALE", global = true)]
    pub locale: Option<Locale>,

    /// Output format [default: `defaults.output` from config, else table]
    #[arg(long, short = 'o', env = "NEWSFRONT_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output [default: `defaults.color` from config, else auto]
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Accept invalid TLS certificates
    #[arg(long, short = 'k', env = "NEWSFRONT_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds (overrides profile)
    #[arg(long, env = "NEWSFRONT_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable layout (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the signed-in user's profile card
    #[command(alias = "me")]
    Profile(ProfileArgs),

    /// Show one news article
    #[command(alias = "n")]
    News(NewsArgs),

    /// Manage configuration profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Debug, Args)]
pub struct ProfileArgs {
    /// Render as on the profile page (muted handle, "Home" button)
    #[arg(long)]
    pub profile_page: bool,
}

#[derive(Debug, Args)]
pub struct NewsArgs {
    /// Article id
    pub id: u64,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell
    pub shell: Shell,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the config file location
    Path,

    /// Print the effective configuration (tokens redacted)
    Show,

    /// Create or update a profile
    Init(ConfigInitArgs),

    /// Store an access token in the system keyring
    SetToken(SetTokenArgs),
}

#[derive(Debug, Args)]
pub struct ConfigInitArgs {
    /// API base URL for the profile
    #[arg(long)]
    pub base_url: String,

    /// Code of the signed-in user
    #[arg(long)]
    pub user_code: Option<String>,

    /// Environment variable holding the access token
    #[arg(long)]
    pub token_env: Option<String>,

    /// Default display language for the profile
    #[arg(long)]
    pub locale: Option<Locale>,

    /// Make this the default profile
    #[arg(long)]
    pub set_default: bool,
}

#[derive(Debug, Args)]
pub struct SetTokenArgs {
    /// The access token
    pub token: String,
}
