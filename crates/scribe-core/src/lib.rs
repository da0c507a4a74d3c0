//! Scribe Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Scribe
//! article scaffolding tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           scribe-cli (CLI)              │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │              (Scaffolder)               │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │       (Filesystem, EntropySource)       │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     scribe-adapters (Infrastructure)    │
//! │  (LocalFilesystem, OsEntropy, etc)      │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │   (Slug, ArticleTemplate, TargetPath)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use scribe_core::prelude::*;
//!
//! let scaffolder = Scaffolder::new(filesystem, entropy);
//! let target = scaffolder.create_article("articles")?;
//! println!("Created: {}", target.file_path().display());
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        Scaffolder,
        ports::{EntropySource, Filesystem},
    };
    pub use crate::domain::{
        ArticleTemplate, ArticleType, DEFAULT_ARTICLES_DIR, Slug, TargetPath,
    };
    pub use crate::error::{ScribeError, ScribeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
