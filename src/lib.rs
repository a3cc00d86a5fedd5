pub mod config;
pub mod error;
pub mod models;
pub mod github;
pub mod export;

pub use config::{Config, FetchConfig, PageFailurePolicy};
pub use error::{Error, Result};
pub use github::GitHubClient;
pub use export::{build_contribution_table, build_repository_graph, build_repository_table};
