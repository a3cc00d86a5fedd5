use crate::error::Result;
use crate::export::collect_contributions;
use crate::github::GitHubClient;
use crate::models::{Contribution, Repository, Table, Tabular};

/// Projects each field of `T` across `records`, preserving input order.
/// An empty input still yields every column.
pub fn build_table<T: Tabular>(records: &[T]) -> Table {
    let mut table = Table::with_columns(T::FIELDS);
    for record in records {
        table.push_row(record.cells());
    }
    table
}

/// Columns: `name, description, url`.
pub async fn build_repository_table(api: &GitHubClient) -> Result<Table> {
    let repos = api.get_repo_list().await?;
    Ok(build_table::<Repository>(&repos))
}

/// Columns: `repo_name, user_name, user_url, avatar_url, contributions`.
pub async fn build_contribution_table(api: &GitHubClient) -> Result<Table> {
    let repos = api.get_repo_list().await?;
    let contributions: Vec<Contribution> = collect_contributions(api, &repos)
        .await?
        .iter()
        .flat_map(|list| list.iter().cloned())
        .collect();
    Ok(build_table(&contributions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FetchConfig;
    use crate::github::transport::testing::{page, ScriptedTransport};
    use crate::models::Cell;
    use serde_json::json;
    use std::sync::Arc;

    fn contributor(login: &str, count: u64) -> serde_json::Value {
        json!({
            "login": login,
            "html_url": format!("https://github.com/{}", login),
            "avatar_url": format!("https://avatars.githubusercontent.com/{}", login),
            "contributions": count,
        })
    }

    fn scripted_org() -> Arc<ScriptedTransport> {
        let transport = Arc::new(ScriptedTransport::new());
        transport.push(
            "https://api.github.com/orgs/acme/repos",
            page(
                json!([
                    {"name": "A", "description": "first", "html_url": "https://github.com/acme/A"},
                    {"name": "B", "description": null, "html_url": "https://github.com/acme/B"},
                ]),
                false,
            ),
        );
        transport.push(
            "https://api.github.com/repos/acme/A/contributors",
            page(json!([contributor("alice", 10), contributor("bob", 5)]), false),
        );
        transport.push(
            "https://api.github.com/repos/acme/B/contributors",
            page(json!([contributor("bob", 3)]), false),
        );
        transport
    }

    #[test]
    fn test_empty_repository_table_keeps_columns() {
        let table = build_table::<Repository>(&[]);
        assert_eq!(table.column_names(), vec!["name", "description", "url"]);
        assert_eq!(table.row_count(), 0);
    }

    #[tokio::test]
    async fn test_build_repository_table() {
        let transport = scripted_org();
        let api = GitHubClient::with_transport(
            transport.clone(),
            "https://api.github.com",
            "acme",
            FetchConfig::default(),
        );

        let table = build_repository_table(&api).await.unwrap();
        assert_eq!(table.row_count(), 2);
        assert_eq!(
            table.column("name").unwrap(),
            &[Cell::from("A"), Cell::from("B")]
        );
        assert_eq!(
            table.column("description").unwrap(),
            &[Cell::from("first"), Cell::Null]
        );
    }

    #[tokio::test]
    async fn test_build_contribution_table() {
        let transport = scripted_org();
        let api = GitHubClient::with_transport(
            transport.clone(),
            "https://api.github.com",
            "acme",
            FetchConfig::default(),
        );

        let table = build_contribution_table(&api).await.unwrap();
        assert_eq!(
            table.column_names(),
            vec!["repo_name", "user_name", "user_url", "avatar_url", "contributions"]
        );
        assert_eq!(table.row_count(), 3);
        assert_eq!(
            table.column("repo_name").unwrap(),
            &[Cell::from("A"), Cell::from("A"), Cell::from("B")]
        );
        assert_eq!(
            table.column("user_name").unwrap(),
            &[Cell::from("alice"), Cell::from("bob"), Cell::from("bob")]
        );
        assert_eq!(
            table.column("contributions").unwrap(),
            &[Cell::Integer(10), Cell::Integer(5), Cell::Integer(3)]
        );
        assert_eq!(transport.request_count(), 3);
    }
}
