pub mod article_template;
pub mod target_path;

pub use article_template::ArticleTemplate;
pub use target_path::TargetPath;
