use serde::Serialize;

pub const REPOSITORY_RADIUS: u32 = 7;
pub const CONTRIBUTOR_RADIUS: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NodeGroup {
    Repository,
    Contributor,
}

impl NodeGroup {
    pub fn radius(&self) -> u32 {
        match self {
            NodeGroup::Repository => REPOSITORY_RADIUS,
            NodeGroup::Contributor => CONTRIBUTOR_RADIUS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphNode {
    pub id: String,
    pub group: NodeGroup,
    pub radius: u32,
}

impl GraphNode {
    pub fn new(id: impl Into<String>, group: NodeGroup) -> Self {
        Self {
            id: id.into(),
            group,
            radius: group.radius(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
}

/// Repository/contributor graph in the shape force-directed layouts expect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RepositoryGraph {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphEdge>,
}
