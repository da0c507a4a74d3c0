//! Domain value objects: Slug, ArticleType.
//!
//! These are pure value types with equality-by-value and no identity. Random
//! bytes come from the `EntropySource` port; this file only turns them into
//! a well-formed name.

use std::fmt::{self, Write as _};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

// ── Slug ──────────────────────────────────────────────────────────────────────

/// Prefix shared by every generated slug.
pub const SLUG_PREFIX: &str = "article-";

/// Number of random bytes behind a slug token.
pub const TOKEN_BYTES: usize = 8;

/// Length of the hex token (two characters per byte).
pub const TOKEN_LEN: usize = TOKEN_BYTES * 2;

/// File extension of scaffolded articles.
pub const ARTICLE_EXTENSION: &str = "md";

/// The random filename stem of an article: `article-<16 lowercase hex>`.
///
/// Invariant: always matches `article-[0-9a-f]{16}`. Enforced by both
/// constructors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    /// Build a slug from raw entropy.
    pub fn from_bytes(bytes: [u8; TOKEN_BYTES]) -> Self {
        let mut slug = String::with_capacity(SLUG_PREFIX.len() + TOKEN_LEN);
        slug.push_str(SLUG_PREFIX);
        for byte in bytes {
            // Writing into a String cannot fail.
            let _ = write!(slug, "{byte:02x}");
        }
        Self(slug)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The hex token without the `article-` prefix.
    pub fn token(&self) -> &str {
        &self.0[SLUG_PREFIX.len()..]
    }

    /// `<slug>.md`
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.0, ARTICLE_EXTENSION)
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Slug {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| DomainError::InvalidSlug {
            slug: s.to_string(),
            reason: reason.to_string(),
        };

        let token = s
            .strip_prefix(SLUG_PREFIX)
            .ok_or_else(|| invalid("missing 'article-' prefix"))?;

        if token.len() != TOKEN_LEN {
            return Err(invalid("token must be 16 characters"));
        }
        if !token
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
        {
            return Err(invalid("token must be lowercase hexadecimal"));
        }

        Ok(Self(s.to_string()))
    }
}

// ── ArticleType ───────────────────────────────────────────────────────────────

/// The `type` field of the front matter.
///
/// Parsed case-insensitively from the command line and from config, both
/// through [`FromStr`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ArticleType {
    #[default]
    Idea,
    Tech,
}

impl ArticleType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idea => "idea",
            Self::Tech => "tech",
        }
    }
}

impl fmt::Display for ArticleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArticleType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "idea" => Ok(Self::Idea),
            "tech" => Ok(Self::Tech),
            _ => Err(DomainError::UnknownArticleType(s.to_string())),
        }
    }
}

impl TryFrom<String> for ArticleType {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_from_bytes_is_lowercase_hex() {
        let slug = Slug::from_bytes([0x00, 0x1f, 0xab, 0xcd, 0xef, 0x10, 0x99, 0xff]);
        assert_eq!(slug.as_str(), "article-001fabcdef1099ff");
        assert_eq!(slug.token().len(), TOKEN_LEN);
        assert_eq!(slug.file_name(), "article-001fabcdef1099ff.md");
    }

    #[test]
    fn generated_slug_parses_back() {
        let slug = Slug::from_bytes([7; TOKEN_BYTES]);
        assert_eq!(slug.as_str().parse::<Slug>().unwrap(), slug);
    }

    #[test]
    fn slug_rejects_missing_prefix() {
        assert!("post-0123456789abcdef".parse::<Slug>().is_err());
    }

    #[test]
    fn slug_rejects_wrong_length() {
        assert!("article-0123".parse::<Slug>().is_err());
        assert!("article-0123456789abcdef00".parse::<Slug>().is_err());
    }

    #[test]
    fn slug_rejects_uppercase_and_non_hex() {
        assert!("article-0123456789ABCDEF".parse::<Slug>().is_err());
        assert!("article-0123456789abcdeg".parse::<Slug>().is_err());
    }

    #[test]
    fn article_type_parses_case_insensitively() {
        assert_eq!("Tech".parse::<ArticleType>().unwrap(), ArticleType::Tech);
        assert_eq!("idea".parse::<ArticleType>().unwrap(), ArticleType::Idea);
        assert!(matches!(
            "poem".parse::<ArticleType>(),
            Err(DomainError::UnknownArticleType(_))
        ));
    }

    #[test]
    fn article_type_deserializes_through_from_str() {
        let kind: ArticleType = serde_json::from_str("\"Tech\"").unwrap();
        assert_eq!(kind, ArticleType::Tech);

        let err = serde_json::from_str::<ArticleType>("\"poem\"").unwrap_err();
        assert!(err.to_string().contains("Unknown article type 'poem'"));
    }

    #[test]
    fn article_type_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ArticleType::Tech).unwrap(), "\"tech\"");
    }

    #[test]
    fn article_type_defaults_to_idea() {
        assert_eq!(ArticleType::default(), ArticleType::Idea);
        assert_eq!(ArticleType::Idea.to_string(), "idea");
    }
}
