//! Implementation of the `scribe new` command (also the default command).
//!
//! Responsibility: merge CLI flags over the loaded configuration, call the
//! core scaffolder, and display results. No business logic lives here.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use scribe_adapters::{LocalFilesystem, OsEntropy};
use scribe_core::{
    application::Scaffolder,
    domain::{ArticleTemplate, TargetPath},
};

use crate::{
    cli::NewArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// What `--output-format json` prints.
#[derive(Debug, Serialize)]
struct ArticleReport<'a> {
    path: String,
    slug: &'a str,
    dry_run: bool,
}

/// Execute the `scribe new` command.
///
/// Dispatch sequence:
/// 1. Resolve the articles directory and the template
/// 2. Prompt for title and type with `--interactive`
/// 3. Early-exit with a preview if `--dry-run`
/// 4. Create the article via `Scaffolder`
/// 5. Print the created path
#[instrument(skip_all)]
pub fn execute(args: NewArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    // 1. Resolve inputs
    let dir = resolve_dir(&args, &config)?;
    let mut template = build_template(&args, &config);

    // 2. Interactive prompts
    if args.interactive {
        template = prompt_template(template)?;
    }

    debug!(
        dir = %dir.display(),
        kind = %template.kind,
        topics = template.topics.len(),
        "Template resolved"
    );

    let scaffolder = Scaffolder::new(Box::new(LocalFilesystem::new()), Box::new(OsEntropy::new()))
        .with_template(template);

    // 3. Dry run: describe but do not write.
    if args.dry_run {
        let target = scaffolder.plan_article(&dir)?;
        if output.is_json() {
            return report(&output, &target, true);
        }
        output.info(&format!("Dry run: would create {target}"))?;
        output.print("")?;
        output.print(&scaffolder.render())?;
        return Ok(());
    }

    // 4. Scaffold
    info!(dir = %dir.display(), "Scaffold started");
    let target = scaffolder.create_article(&dir)?;

    // 5. Report
    if output.is_json() {
        return report(&output, &target, false);
    }
    output.success(&format!("Created: {target}"))?;

    Ok(())
}

fn report(output: &OutputManager, target: &TargetPath, dry_run: bool) -> CliResult<()> {
    output.json(&ArticleReport {
        path: target.file_path().display().to_string(),
        slug: target.slug().as_str(),
        dry_run,
    })?;
    Ok(())
}

// ── Input resolution ──────────────────────────────────────────────────────────

fn resolve_dir(args: &NewArgs, config: &AppConfig) -> CliResult<PathBuf> {
    let dir = args.dir.as_deref().unwrap_or(config.articles.dir.as_path());
    validate_dir(dir)?;
    Ok(dir.to_path_buf())
}

fn validate_dir(dir: &Path) -> CliResult<()> {
    if dir.as_os_str().is_empty() {
        return Err(CliError::InvalidInput {
            message: "articles directory cannot be empty".into(),
        });
    }
    Ok(())
}

/// Overlay the flags that were given on the configured template.
fn build_template(args: &NewArgs, config: &AppConfig) -> ArticleTemplate {
    let mut template = config.template.clone();

    if let Some(title) = &args.title {
        template = template.with_title(title.clone());
    }
    if let Some(emoji) = &args.emoji {
        template = template.with_emoji(emoji.clone());
    }
    if let Some(kind) = args.kind {
        template = template.with_kind(kind);
    }
    if args.no_topics {
        template = template.with_topics(Vec::<String>::new());
    } else if !args.topics.is_empty() {
        template = template.with_topics(args.topics.iter().map(|t| t.trim().to_string()));
    }
    if args.published {
        template = template.with_published(true);
    } else if args.draft {
        template = template.with_published(false);
    }

    template
}

// ── Interactive prompts ───────────────────────────────────────────────────────

#[cfg(feature = "interactive")]
fn prompt_template(template: ArticleTemplate) -> CliResult<ArticleTemplate> {
    use dialoguer::{Input, Select};
    use scribe_core::domain::ArticleType;

    let prompt_err = |e: dialoguer::Error| CliError::IoError {
        message: "failed to read interactive input".into(),
        source: std::io::Error::other(e),
    };

    let title: String = Input::new()
        .with_prompt("Title")
        .with_initial_text(template.title.clone())
        .allow_empty(true)
        .interact_text()
        .map_err(prompt_err)?;

    let kinds = [ArticleType::Idea, ArticleType::Tech];
    let default = kinds.iter().position(|k| *k == template.kind).unwrap_or(0);
    let selected = Select::new()
        .with_prompt("Type")
        .items(&kinds.map(|k| k.as_str()))
        .default(default)
        .interact_opt()
        .map_err(prompt_err)?
        .ok_or(CliError::Cancelled)?;

    Ok(template.with_title(title).with_kind(kinds[selected]))
}

#[cfg(not(feature = "interactive"))]
fn prompt_template(_template: ArticleTemplate) -> CliResult<ArticleTemplate> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use scribe_core::domain::{ArticleType, DEFAULT_TOPICS};

    use super::*;

    #[test]
    fn dir_defaults_to_config() {
        let dir = resolve_dir(&NewArgs::default(), &AppConfig::default()).unwrap();
        assert_eq!(dir, PathBuf::from("articles"));
    }

    #[test]
    fn dir_flag_overrides_config() {
        let args = NewArgs {
            dir: Some(PathBuf::from("drafts")),
            ..NewArgs::default()
        };
        assert_eq!(
            resolve_dir(&args, &AppConfig::default()).unwrap(),
            PathBuf::from("drafts")
        );
    }

    #[test]
    fn empty_dir_is_invalid_input() {
        let args = NewArgs {
            dir: Some(PathBuf::new()),
            ..NewArgs::default()
        };
        assert!(matches!(
            resolve_dir(&args, &AppConfig::default()),
            Err(CliError::InvalidInput { .. })
        ));
    }

    #[test]
    fn no_flags_keep_configured_template() {
        let template = build_template(&NewArgs::default(), &AppConfig::default());
        assert_eq!(template, ArticleTemplate::default());
        assert_eq!(template.topics, DEFAULT_TOPICS.map(String::from).to_vec());
    }

    #[test]
    fn flags_override_template_fields() {
        let args = NewArgs {
            title: Some("Hello".into()),
            emoji: Some("🦀".into()),
            kind: Some(ArticleType::Tech),
            topics: vec![" rust ".into(), "cli".into()],
            published: true,
            ..NewArgs::default()
        };
        let template = build_template(&args, &AppConfig::default());

        assert_eq!(template.title, "Hello");
        assert_eq!(template.emoji, "🦀");
        assert_eq!(template.kind, ArticleType::Tech);
        assert_eq!(template.topics, vec!["rust", "cli"]);
        assert!(template.published);
    }

    #[test]
    fn draft_overrides_published_config() {
        let mut config = AppConfig::default();
        config.template = config.template.with_published(true);

        assert!(build_template(&NewArgs::default(), &config).published);

        let args = NewArgs {
            draft: true,
            ..NewArgs::default()
        };
        assert!(!build_template(&args, &config).published);
    }

    #[test]
    fn no_topics_clears_list() {
        let args = NewArgs {
            no_topics: true,
            ..NewArgs::default()
        };
        assert!(build_template(&args, &AppConfig::default()).topics.is_empty());
    }

    #[test]
    fn config_template_is_the_base() {
        let mut config = AppConfig::default();
        config.template = config.template.with_topics(["Zenn"]);
        let template = build_template(&NewArgs::default(), &config);
        assert_eq!(template.topics, vec!["Zenn"]);
    }
}
