use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::models::table::{Cell, Tabular};

/// A public repository owned by the organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Repository {
    pub name: String,
    pub description: Option<String>,
    pub url: String,
}

/// One contributor's commit count against one repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contribution {
    pub repo_name: String,
    pub user_name: String,
    pub user_url: String,
    pub avatar_url: String,
    pub contributions: u64,
}

impl Repository {
    /// Decodes one entry of `GET /orgs/{org}/repos`.
    ///
    /// `description` must be present but may be `null`.
    pub fn from_record(record: &Value, index: usize) -> Result<Self> {
        Ok(Self {
            name: require_str(record, "name", index)?,
            description: nullable_str(record, "description", index)?,
            url: require_str(record, "html_url", index)?,
        })
    }
}

impl Contribution {
    /// Decodes one entry of `GET /repos/{owner}/{repo}/contributors`. The
    /// response does not name the repository, so the caller supplies it.
    pub fn from_record(repo_name: &str, record: &Value, index: usize) -> Result<Self> {
        Ok(Self {
            repo_name: repo_name.to_string(),
            user_name: require_str(record, "login", index)?,
            user_url: require_str(record, "html_url", index)?,
            avatar_url: require_str(record, "avatar_url", index)?,
            contributions: record
                .get("contributions")
                .and_then(Value::as_u64)
                .ok_or(Error::MissingField {
                    field: "contributions",
                    index,
                })?,
        })
    }
}

impl Tabular for Repository {
    const FIELDS: &'static [&'static str] = &["name", "description", "url"];

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::from(self.name.as_str()),
            Cell::from(self.description.as_deref()),
            Cell::from(self.url.as_str()),
        ]
    }
}

impl Tabular for Contribution {
    const FIELDS: &'static [&'static str] =
        &["repo_name", "user_name", "user_url", "avatar_url", "contributions"];

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::from(self.repo_name.as_str()),
            Cell::from(self.user_name.as_str()),
            Cell::from(self.user_url.as_str()),
            Cell::from(self.avatar_url.as_str()),
            Cell::from(self.contributions),
        ]
    }
}

fn require_str(record: &Value, field: &'static str, index: usize) -> Result<String> {
    record
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(Error::MissingField { field, index })
}

fn nullable_str(record: &Value, field: &'static str, index: usize) -> Result<Option<String>> {
    match record.get(field) {
        Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        _ => Err(Error::MissingField { field, index }),
    }
}
