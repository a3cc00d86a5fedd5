use std::collections::HashSet;

use crate::error::Result;
use crate::export::collect_contributions;
use crate::github::GitHubClient;
use crate::models::{Contribution, GraphEdge, GraphNode, NodeGroup, Repository, RepositoryGraph};

/// Links each repository to its contributors.
///
/// Repository nodes are emitted in catalog order, each followed by the
/// contributors not seen under an earlier repository. Contributor nodes are
/// deduplicated by login; edges are not.
pub fn build_graph<'a, I>(entries: I) -> RepositoryGraph
where
    I: IntoIterator<Item = (&'a Repository, &'a [Contribution])>,
{
    let mut graph = RepositoryGraph::default();
    let mut seen_contributors: HashSet<&str> = HashSet::new();

    for (repo, contributions) in entries {
        graph
            .nodes
            .push(GraphNode::new(repo.name.as_str(), NodeGroup::Repository));

        for contrib in contributions {
            if seen_contributors.insert(contrib.user_name.as_str()) {
                graph
                    .nodes
                    .push(GraphNode::new(contrib.user_name.as_str(), NodeGroup::Contributor));
            }
            graph.links.push(GraphEdge {
                source: repo.name.clone(),
                target: contrib.user_name.clone(),
            });
        }
    }

    graph
}

pub async fn build_repository_graph(api: &GitHubClient) -> Result<RepositoryGraph> {
    let repos = api.get_repo_list().await?;
    let contributions = collect_contributions(api, &repos).await?;

    let graph = build_graph(
        repos
            .iter()
            .zip(contributions.iter().map(|list| list.as_slice())),
    );
    tracing::info!(
        "Built graph with {} nodes and {} links",
        graph.nodes.len(),
        graph.links.len()
    );
    Ok(graph)
}

/// Compact `{"nodes":[...],"links":[...]}`.
pub fn to_json(graph: &RepositoryGraph) -> Result<String> {
    Ok(serde_json::to_string(graph)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(name: &str) -> Repository {
        Repository {
            name: name.to_string(),
            description: None,
            url: format!("https://github.com/acme/{}", name),
        }
    }

    fn contrib(repo: &str, login: &str, count: u64) -> Contribution {
        Contribution {
            repo_name: repo.to_string(),
            user_name: login.to_string(),
            user_url: format!("https://github.com/{}", login),
            avatar_url: String::new(),
            contributions: count,
        }
    }

    #[test]
    fn test_shared_contributor_gets_one_node() {
        let repos = vec![repo("A"), repo("B")];
        let a = vec![contrib("A", "alice", 10), contrib("A", "bob", 5)];
        let b = vec![contrib("B", "bob", 3)];

        let graph = build_graph(vec![
            (&repos[0], a.as_slice()),
            (&repos[1], b.as_slice()),
        ]);

        let nodes: Vec<_> = graph
            .nodes
            .iter()
            .map(|n| (n.id.as_str(), n.group))
            .collect();
        assert_eq!(
            nodes,
            vec![
                ("A", NodeGroup::Repository),
                ("alice", NodeGroup::Contributor),
                ("bob", NodeGroup::Contributor),
                ("B", NodeGroup::Repository),
            ]
        );

        let links: Vec<_> = graph
            .links
            .iter()
            .map(|l| (l.source.as_str(), l.target.as_str()))
            .collect();
        assert_eq!(links, vec![("A", "alice"), ("A", "bob"), ("B", "bob")]);
    }

    #[test]
    fn test_graph_json_shape() {
        let repos = vec![repo("A")];
        let a = vec![contrib("A", "alice", 1)];
        let graph = build_graph(vec![(&repos[0], a.as_slice())]);

        assert_eq!(
            to_json(&graph).unwrap(),
            r#"{"nodes":[{"id":"A","group":"Repository","radius":7},{"id":"alice","group":"Contributor","radius":10}],"links":[{"source":"A","target":"alice"}]}"#
        );
    }

    #[test]
    fn test_repository_without_contributors() {
        let repos = vec![repo("empty")];
        let none: Vec<Contribution> = Vec::new();
        let graph = build_graph(vec![(&repos[0], none.as_slice())]);
        assert_eq!(graph.nodes.len(), 1);
        assert!(graph.links.is_empty());
    }
}
