use thiserror::Error;

/// Root domain error type.
///
/// All errors are cloneable and provide suggestions for the CLI.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid template: {0}")]
    InvalidTemplate(String),

    #[error("Invalid slug '{slug}': {reason}")]
    InvalidSlug { slug: String, reason: String },

    #[error("Unknown article type '{0}'")]
    UnknownArticleType(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidTemplate(msg) => vec![
                format!("Details: {msg}"),
                "Check the [template] section of your config file".into(),
                "Front matter values must fit on a single line".into(),
            ],
            Self::InvalidSlug { .. } => vec![
                "Slugs look like article-0123456789abcdef".into(),
            ],
            Self::UnknownArticleType(_) => vec![
                "Supported types:".into(),
                "  • idea - opinion or essay".into(),
                "  • tech - technical article".into(),
            ],
        }
    }
}
