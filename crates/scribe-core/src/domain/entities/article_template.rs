//! The front-matter template written into every new article.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::domain::{error::DomainError, value_objects::ArticleType};

/// Front matter delimiter line.
pub const FRONT_MATTER_DELIMITER: &str = "---";

pub const DEFAULT_EMOJI: &str = "🦉";

pub const DEFAULT_TOPICS: [&str; 4] = ["CakePHP", "PHP8", "ドメイン駆動設計", "DDD"];

/// Fields of the article front matter, followed by an empty body.
///
/// The default value renders to the stock template byte-for-byte:
///
/// ```text
/// ---
/// title: ""
/// emoji: "🦉"
/// type: "idea"
/// topics: ["CakePHP", "PHP8", "ドメイン駆動設計", "DDD"]
/// published: false
/// ---
///
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticleTemplate {
    pub title: String,
    pub emoji: String,
    #[serde(rename = "type")]
    pub kind: ArticleType,
    pub topics: Vec<String>,
    pub published: bool,
}

impl Default for ArticleTemplate {
    fn default() -> Self {
        Self {
            title: String::new(),
            emoji: DEFAULT_EMOJI.to_string(),
            kind: ArticleType::default(),
            topics: DEFAULT_TOPICS.iter().map(|t| t.to_string()).collect(),
            published: false,
        }
    }
}

impl ArticleTemplate {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = emoji.into();
        self
    }

    pub fn with_kind(mut self, kind: ArticleType) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_topics<I, S>(mut self, topics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.topics = topics.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_published(mut self, published: bool) -> Self {
        self.published = published;
        self
    }

    /// Check that the template renders to well-formed front matter.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.emoji.trim().is_empty() {
            return Err(DomainError::InvalidTemplate("emoji cannot be empty".into()));
        }
        if is_multiline(&self.title) {
            return Err(DomainError::InvalidTemplate(
                "title cannot contain line breaks".into(),
            ));
        }
        if is_multiline(&self.emoji) {
            return Err(DomainError::InvalidTemplate(
                "emoji cannot contain line breaks".into(),
            ));
        }
        for (index, topic) in self.topics.iter().enumerate() {
            if topic.trim().is_empty() {
                return Err(DomainError::InvalidTemplate(format!(
                    "topic #{} is empty",
                    index + 1
                )));
            }
            if is_multiline(topic) {
                return Err(DomainError::InvalidTemplate(format!(
                    "topic '{}' contains a line break",
                    topic.escape_debug()
                )));
            }
        }
        Ok(())
    }

    /// Render the article content: front matter plus an empty body.
    pub fn render(&self) -> String {
        let topics = self
            .topics
            .iter()
            .map(|t| quote(t))
            .collect::<Vec<_>>()
            .join(", ");

        let mut buf = String::new();
        let _ = writeln!(buf, "{FRONT_MATTER_DELIMITER}");
        let _ = writeln!(buf, "title: {}", quote(&self.title));
        let _ = writeln!(buf, "emoji: {}", quote(&self.emoji));
        let _ = writeln!(buf, "type: {}", quote(self.kind.as_str()));
        let _ = writeln!(buf, "topics: [{topics}]");
        let _ = writeln!(buf, "published: {}", self.published);
        let _ = writeln!(buf, "{FRONT_MATTER_DELIMITER}");
        let _ = writeln!(buf);
        buf
    }
}

fn is_multiline(value: &str) -> bool {
    value.contains(['\n', '\r'])
}

/// Double-quoted scalar. JSON string escaping is valid YAML, and leaves
/// non-ASCII text untouched.
fn quote(value: &str) -> String {
    serde_json::Value::String(value.to_owned()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const STOCK_TEMPLATE: &str = "---\n\
title: \"\"\n\
emoji: \"🦉\"\n\
type: \"idea\"\n\
topics: [\"CakePHP\", \"PHP8\", \"ドメイン駆動設計\", \"DDD\"]\n\
published: false\n\
---\n\
\n";

    #[test]
    fn default_renders_stock_template() {
        assert_eq!(ArticleTemplate::default().render(), STOCK_TEMPLATE);
    }

    #[test]
    fn render_ends_with_blank_line_after_delimiter() {
        assert!(ArticleTemplate::default().render().ends_with("---\n\n"));
    }

    #[test]
    fn custom_fields_render_in_order() {
        let template = ArticleTemplate::default()
            .with_title("Value objects in Rust")
            .with_emoji("🦀")
            .with_kind(ArticleType::Tech)
            .with_topics(["Rust", "DDD"])
            .with_published(true);

        let rendered = template.render();
        assert!(rendered.contains("title: \"Value objects in Rust\"\n"));
        assert!(rendered.contains("emoji: \"🦀\"\n"));
        assert!(rendered.contains("type: \"tech\"\n"));
        assert!(rendered.contains("topics: [\"Rust\", \"DDD\"]\n"));
        assert!(rendered.contains("published: true\n"));
    }

    #[test]
    fn quotes_and_backslashes_are_escaped() {
        let rendered = ArticleTemplate::default()
            .with_title(r#"Say "hi" \ bye"#)
            .render();
        assert!(rendered.contains(r#"title: "Say \"hi\" \\ bye""#));
    }

    #[test]
    fn empty_topic_list_renders_empty_brackets() {
        let rendered = ArticleTemplate::default()
            .with_topics(Vec::<String>::new())
            .render();
        assert!(rendered.contains("topics: []\n"));
    }

    #[test]
    fn default_template_is_valid() {
        assert!(ArticleTemplate::default().validate().is_ok());
    }

    #[test]
    fn empty_emoji_is_invalid() {
        let template = ArticleTemplate::default().with_emoji("  ");
        assert!(matches!(
            template.validate(),
            Err(DomainError::InvalidTemplate(_))
        ));
    }

    #[test]
    fn multiline_title_is_invalid() {
        let template = ArticleTemplate::default().with_title("one\ntwo");
        assert!(template.validate().is_err());
    }

    #[test]
    fn blank_topic_is_invalid() {
        let template = ArticleTemplate::default().with_topics(["Rust", ""]);
        let err = template.validate().unwrap_err();
        assert!(err.to_string().contains("#2"));
    }

    #[test]
    fn deserializes_partial_table_with_defaults() {
        let template: ArticleTemplate =
            serde_json::from_str(r#"{"type": "tech", "topics": ["Rust"]}"#).unwrap();
        assert_eq!(template.kind, ArticleType::Tech);
        assert_eq!(template.topics, vec!["Rust".to_string()]);
        assert_eq!(template.emoji, DEFAULT_EMOJI);
        assert!(!template.published);
    }
}
