//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use scribe_core::domain::ArticleType;

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "scribe",
    bin_name = "scribe",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f989} Scaffold a new article stub",
    long_about = "Scribe creates a Markdown article with front matter under \
                  ./articles, named article-<random hex>.md. Run without a \
                  subcommand to create one with the configured defaults.",
    after_help = "EXAMPLES:\n\
        \x20 scribe\n\
        \x20 scribe new --title \"Value objects\" --type tech --topic rust --topic ddd\n\
        \x20 scribe new --dir drafts --dry-run\n\
        \x20 scribe completions bash > /usr/share/bash-completion/completions/scribe",
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute; `new` when omitted.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new article.
    #[command(
        visible_alias = "n",
        about = "Create a new article",
        after_help = "EXAMPLES:\n\
            \x20 scribe new\n\
            \x20 scribe new --dir blog/articles --title \"Hello\"\n\
            \x20 scribe new --topic rust,cli --published\n\
            \x20 scribe new --draft"
    )]
    New(NewArgs),

    /// Write a default configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 scribe init           # user config directory\n\
            \x20 scribe init --local   # ./.scribe.toml"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 scribe completions bash > ~/.local/share/bash-completion/completions/scribe\n\
            \x20 scribe completions zsh  > ~/.zfunc/_scribe"
    )]
    Completions(CompletionsArgs),

    /// Inspect the resolved configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 scribe config get template.topics\n\
            \x20 scribe config list\n\
            \x20 scribe config path"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `scribe new`. Every field overrides the configuration.
#[derive(Debug, Clone, Default, Args)]
pub struct NewArgs {
    /// Directory that receives the article (created if missing).
    #[arg(short = 'd', long = "dir", value_name = "DIR", help = "Articles directory")]
    pub dir: Option<PathBuf>,

    #[arg(short = 't', long = "title", value_name = "TITLE", help = "Article title")]
    pub title: Option<String>,

    #[arg(short = 'e', long = "emoji", value_name = "EMOJI", help = "Eye-catch emoji")]
    pub emoji: Option<String>,

    #[arg(long = "type", value_name = "TYPE", help = "Article type: idea or tech")]
    pub kind: Option<ArticleType>,

    /// Topic tag; repeat the flag or separate with commas. Replaces the
    /// configured list.
    #[arg(
        long = "topic",
        value_name = "TAG",
        value_delimiter = ',',
        help = "Topic tag (repeatable)"
    )]
    pub topics: Vec<String>,

    /// Write an empty topic list.
    #[arg(long = "no-topics", conflicts_with = "topics", help = "Write no topics")]
    pub no_topics: bool,

    #[arg(long = "published", help = "Mark the article as published")]
    pub published: bool,

    /// Write `published: false` even when the config says otherwise.
    #[arg(long = "draft", conflicts_with = "published", help = "Mark the article as a draft")]
    pub draft: bool,

    /// Prompt for the title and type.
    #[arg(short = 'i', long = "interactive", help = "Prompt for title and type")]
    pub interactive: bool,

    /// Print the target path and content without writing anything.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `scribe init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.scribe.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `scribe completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: clap_complete::Shell,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `scribe config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `articles.dir`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the user configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
