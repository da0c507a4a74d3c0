//! Core domain layer for Scribe.
//!
//! Pure logic only: slug formatting, the front-matter template, and target
//! path composition. Randomness and I/O are reached through the ports in
//! `crate::application::ports`.

pub mod entities;
pub mod error;
pub mod value_objects;

pub use entities::{
    article_template::{DEFAULT_EMOJI, DEFAULT_TOPICS, FRONT_MATTER_DELIMITER},
    target_path::DEFAULT_ARTICLES_DIR,
    ArticleTemplate, TargetPath,
};

pub use error::DomainError;

pub use value_objects::{ArticleType, Slug, ARTICLE_EXTENSION, SLUG_PREFIX, TOKEN_BYTES, TOKEN_LEN};
