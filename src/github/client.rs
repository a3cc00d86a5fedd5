use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::config::{Config, FetchConfig};
use crate::error::Result;
use crate::github::paginator::Paginator;
use crate::github::transport::{HttpTransport, ReqwestTransport};
use crate::models::{Contribution, Repository};

type Cache<T> = Mutex<HashMap<String, Arc<Vec<T>>>>;

/// Access to one organization's repositories and their contributors.
///
/// Results are memoized per organization and per repository name for the
/// lifetime of the client. Nothing is ever evicted; build a new client to
/// start from a clean cache.
pub struct GitHubClient {
    transport: Box<dyn HttpTransport>,
    base_url: String,
    org: String,
    fetch_config: FetchConfig,
    show_progress: bool,
    repositories: Cache<Repository>,
    contributors: Cache<Contribution>,
}

impl GitHubClient {
    pub fn new(config: &Config) -> Result<Self> {
        let transport = ReqwestTransport::new(&config.github_token)?;
        Ok(Self::with_transport(
            transport,
            &config.api_url,
            &config.org,
            FetchConfig::from(config),
        ))
    }

    pub fn with_transport(
        transport: impl HttpTransport + 'static,
        base_url: &str,
        org: &str,
        fetch_config: FetchConfig,
    ) -> Self {
        Self {
            transport: Box::new(transport),
            base_url: base_url.trim_end_matches('/').to_string(),
            org: org.to_string(),
            fetch_config,
            show_progress: false,
            repositories: Mutex::new(HashMap::new()),
            contributors: Mutex::new(HashMap::new()),
        }
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn show_progress(&self) -> bool {
        self.show_progress
    }

    /// Public repositories of `org`, in API order.
    pub async fn list_repositories(&self, org: &str) -> Result<Arc<Vec<Repository>>> {
        if let Some(cached) = self.repositories.lock().await.get(org) {
            tracing::debug!("Repository list for {} served from cache", org);
            return Ok(cached.clone());
        }

        let url = format!("{}/orgs/{}/repos", self.base_url, org);
        tracing::info!("Fetching repositories for: {}", org);
        let records = Paginator::new(self.transport.as_ref(), &self.fetch_config)
            .fetch_all(&url, &[("type", "public")])
            .await?;

        let repos = records
            .iter()
            .enumerate()
            .map(|(index, record)| Repository::from_record(record, index))
            .collect::<Result<Vec<_>>>()?;
        tracing::info!("Found {} repositories", repos.len());

        let mut cache = self.repositories.lock().await;
        Ok(cache.entry(org.to_string()).or_insert_with(|| Arc::new(repos)).clone())
    }

    /// Repositories of the organization this client was built for.
    pub async fn get_repo_list(&self) -> Result<Arc<Vec<Repository>>> {
        self.list_repositories(&self.org).await
    }

    /// Contributors of `repo_name` within the client's organization.
    pub async fn list_contributors(&self, repo_name: &str) -> Result<Arc<Vec<Contribution>>> {
        if let Some(cached) = self.contributors.lock().await.get(repo_name) {
            tracing::debug!("Contributors of {} served from cache", repo_name);
            return Ok(cached.clone());
        }

        let url = format!(
            "{}/repos/{}/{}/contributors",
            self.base_url, self.org, repo_name
        );
        tracing::debug!("Fetching contributors for: {}/{}", self.org, repo_name);
        let records = Paginator::new(self.transport.as_ref(), &self.fetch_config)
            .fetch_all(&url, &[])
            .await?;

        let contributions = records
            .iter()
            .enumerate()
            .map(|(index, record)| Contribution::from_record(repo_name, record, index))
            .collect::<Result<Vec<_>>>()?;

        let mut cache = self.contributors.lock().await;
        Ok(cache
            .entry(repo_name.to_string())
            .or_insert_with(|| Arc::new(contributions))
            .clone())
    }
}
