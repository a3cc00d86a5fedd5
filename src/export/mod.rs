pub mod csv;
pub mod graph;
pub mod table;

pub use csv::to_csv;
pub use graph::{build_graph, build_repository_graph, to_json};
pub use table::{build_contribution_table, build_repository_table, build_table};

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;

use crate::error::Result;
use crate::github::GitHubClient;
use crate::models::{Contribution, Repository};

/// Fetches the contributor list of every repository, one repository at a
/// time, in catalog order.
pub async fn collect_contributions(
    api: &GitHubClient,
    repos: &[Repository],
) -> Result<Vec<Arc<Vec<Contribution>>>> {
    let pb = if api.show_progress() {
        let pb = ProgressBar::new(repos.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} repos")
        {
            pb.set_style(style.progress_chars("#>-"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut all_contributions = Vec::with_capacity(repos.len());
    for repo in repos {
        all_contributions.push(api.list_contributors(&repo.name).await?);
        pb.inc(1);
    }

    pb.finish_and_clear();
    tracing::info!(
        "Fetched contributors for {} repositories",
        all_contributions.len()
    );
    Ok(all_contributions)
}
