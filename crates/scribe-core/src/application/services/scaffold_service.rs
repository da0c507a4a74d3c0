//! Scaffolder - main application orchestrator.
//!
//! This service coordinates the whole workflow:
//! 1. Validate the template
//! 2. Draw a slug from the entropy port
//! 3. Ensure the articles directory exists
//! 4. Write the rendered template with create-new semantics
//!
//! There is no rollback: a write interrupted after the file was created can
//! leave a partial file behind, exactly as the storage primitive allows.

use std::path::Path;

use tracing::{debug, info, instrument};

use crate::{
    application::ports::{EntropySource, Filesystem},
    domain::{ArticleTemplate, DEFAULT_ARTICLES_DIR, Slug, TOKEN_BYTES, TargetPath},
    error::ScribeResult,
};

/// Creates one uniquely named article per call.
pub struct Scaffolder {
    filesystem: Box<dyn Filesystem>,
    entropy: Box<dyn EntropySource>,
    template: ArticleTemplate,
}

impl Scaffolder {
    /// Create a scaffolder with the stock template.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use scribe_core::application::Scaffolder;
    ///
    /// let scaffolder = Scaffolder::new(
    ///     filesystem, // impl Filesystem
    ///     entropy,    // impl EntropySource
    /// );
    /// ```
    pub fn new(filesystem: Box<dyn Filesystem>, entropy: Box<dyn EntropySource>) -> Self {
        Self {
            filesystem,
            entropy,
            template: ArticleTemplate::default(),
        }
    }

    /// Replace the template written into new articles.
    pub fn with_template(mut self, template: ArticleTemplate) -> Self {
        self.template = template;
        self
    }

    pub fn template(&self) -> &ArticleTemplate {
        &self.template
    }

    /// The exact content a new article would receive.
    pub fn render(&self) -> String {
        self.template.render()
    }

    /// Draw a fresh slug from the entropy source.
    pub fn generate_slug(&self) -> ScribeResult<Slug> {
        let mut bytes = [0u8; TOKEN_BYTES];
        self.entropy.fill(&mut bytes)?;
        Ok(Slug::from_bytes(bytes))
    }

    /// Validate the template and pick a target path without touching the
    /// filesystem.
    #[instrument(skip_all, fields(dir = %articles_dir.as_ref().display()))]
    pub fn plan_article(&self, articles_dir: impl AsRef<Path>) -> ScribeResult<TargetPath> {
        self.template.validate()?;
        let slug = self.generate_slug()?;
        debug!(slug = %slug, "Slug generated");
        Ok(TargetPath::new(articles_dir.as_ref(), slug))
    }

    /// Create a new article under `articles_dir`.
    ///
    /// The directory (and any missing ancestors) is created first. An
    /// existing file with the generated name is reported as a write error
    /// and left untouched.
    #[instrument(skip_all, fields(dir = %articles_dir.as_ref().display()))]
    pub fn create_article(&self, articles_dir: impl AsRef<Path>) -> ScribeResult<TargetPath> {
        let target = self.plan_article(articles_dir)?;
        let content = self.template.render();

        self.filesystem.ensure_dir(target.dir())?;
        debug!(dir = %target.dir().display(), "Articles directory ready");

        let path = target.file_path();
        self.filesystem.create_new_file(&path, &content)?;
        info!(path = %path.display(), bytes = content.len(), "Article created");

        Ok(target)
    }

    /// [`Self::create_article`] under `./articles`.
    pub fn create_default_article(&self) -> ScribeResult<TargetPath> {
        self.create_article(DEFAULT_ARTICLES_DIR)
    }
}
