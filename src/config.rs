use crate::error::{Error, Result};
use std::env;
use std::str::FromStr;

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_ORG: &str = "Sydney-Informatics-Hub";
pub const PER_PAGE: u32 = 100;

/// What the paginator does when a page comes back with a status other than 200.
///
/// `Skip` drops the page body and keeps following the `link` header, leaving a
/// silent gap in the results. `Abort` fails the whole fetch instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PageFailurePolicy {
    #[default]
    Skip,
    Abort,
}

impl FromStr for PageFailurePolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "skip" => Ok(PageFailurePolicy::Skip),
            "abort" => Ok(PageFailurePolicy::Abort),
            other => Err(Error::Config(format!(
                "unknown page failure policy '{}', expected 'skip' or 'abort'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub github_token: String,
    pub org: String,
    pub api_url: String,
    pub page_failure_policy: PageFailurePolicy,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let github_token = env::var("GITHUB_TOKEN")
            .map_err(|_| Error::Config("GITHUB_TOKEN environment variable not set".to_string()))?;

        let org = env::var("GITHUB_ORG").unwrap_or_else(|_| DEFAULT_ORG.to_string());

        let api_url = env::var("GITHUB_API_URL")
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let page_failure_policy = match env::var("PAGE_FAILURE_POLICY") {
            Ok(v) => v.parse()?,
            Err(_) => PageFailurePolicy::default(),
        };

        Ok(Self {
            github_token,
            org,
            api_url,
            page_failure_policy,
        })
    }
}

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub per_page: u32,
    pub page_failure_policy: PageFailurePolicy,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            per_page: PER_PAGE,
            page_failure_policy: PageFailurePolicy::default(),
        }
    }
}

impl From<&Config> for FetchConfig {
    fn from(config: &Config) -> Self {
        Self {
            per_page: PER_PAGE,
            page_failure_policy: config.page_failure_policy,
        }
    }
}
