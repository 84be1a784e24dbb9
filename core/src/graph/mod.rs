pub mod builder;

use crate::descriptors::Descriptors;
use crate::error::GraphError;
use crate::string_normalization::clean_tag;
use crate::weights::Weights;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// Position of a node in the taxonomy, smallest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Style,
    StyleCluster,
    Supergenre,
    SupergenreCluster,
    SupergenreSupercluster,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Style => "style",
            Level::StyleCluster => "style_cluster",
            Level::Supergenre => "supergenre",
            Level::SupergenreCluster => "supergenre_cluster",
            Level::SupergenreSupercluster => "supergenre_supercluster",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    Hierarchy,
    Cluster,
    PrimaryOrigin,
    SecondaryOrigin,
    AntiInfluence,
    WeakSubstitution,
    InterCluster,
}

impl EdgeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeKind::Hierarchy => "hierarchy",
            EdgeKind::Cluster => "cluster",
            EdgeKind::PrimaryOrigin => "primary_origin",
            EdgeKind::SecondaryOrigin => "secondary_origin",
            EdgeKind::AntiInfluence => "anti_influence",
            EdgeKind::WeakSubstitution => "weak_substitution",
            EdgeKind::InterCluster => "inter_cluster",
        }
    }

    pub fn is_origin(&self) -> bool {
        matches!(self, EdgeKind::PrimaryOrigin | EdgeKind::SecondaryOrigin)
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub target: NodeId,
    pub kind: EdgeKind,
    pub weight: f32,
}

#[derive(Debug, Clone)]
pub struct Node {
    pub name: String,
    pub level: Level,
    pub aliases: Vec<String>,
    pub edges: Vec<Edge>,
}

/// Outcome of looking a tag up in the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagResolution {
    Node(NodeId),
    Excluded,
    Unknown,
}

/// Immutable genre/style graph built once from a descriptor bundle.
///
/// Safe to share between threads: nothing mutates it after [`GenreGraph::build`].
#[derive(Debug, Clone)]
pub struct GenreGraph {
    nodes: Vec<Node>,
    index: FxHashMap<String, NodeId>,
    aliases: FxHashMap<String, NodeId>,
    exclusions: FxHashSet<String>,
    conditional: FxHashSet<NodeId>,
    supergenre_of: FxHashMap<NodeId, NodeId>,
    weights: Weights,
}

impl GenreGraph {
    pub fn build(descriptors: &Descriptors) -> Result<Self, GraphError> {
        builder::GraphBuilder::new(descriptors.weights)?.build(&descriptors.normalized())
    }

    pub fn resolve(&self, tag: &str) -> TagResolution {
        let clean = clean_tag(tag);
        if self.exclusions.contains(&clean) {
            return TagResolution::Excluded;
        }

        let resolved = self
            .aliases
            .get(&clean)
            .or_else(|| self.index.get(&clean))
            .copied();

        match resolved {
            Some(id) if self.exclusions.contains(&self.nodes[id.index()].name) => {
                TagResolution::Excluded
            }
            Some(id) => TagResolution::Node(id),
            None => TagResolution::Unknown,
        }
    }

    /// Node lookup by name, without alias redirection.
    pub fn find(&self, tag: &str) -> Option<NodeId> {
        self.index.get(&clean_tag(tag)).copied()
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn name(&self, id: NodeId) -> &str {
        &self.nodes[id.index()].name
    }

    pub fn level(&self, id: NodeId) -> Level {
        self.nodes[id.index()].level
    }

    pub fn edges(&self, id: NodeId) -> &[Edge] {
        &self.nodes[id.index()].edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|node| node.edges.len()).sum::<usize>() / 2
    }

    pub fn alias_count(&self) -> usize {
        self.aliases.len()
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    pub fn has_edge(&self, a: NodeId, b: NodeId, kind: EdgeKind) -> bool {
        self.edges(a)
            .iter()
            .any(|edge| edge.target == b && edge.kind == kind)
    }

    pub fn supergenre_of(&self, id: NodeId) -> Option<NodeId> {
        self.supergenre_of.get(&id).copied()
    }

    /// Whether two nodes sit under the same supergenre, or one is the other's supergenre.
    pub fn intra_supergenre(&self, a: NodeId, b: NodeId) -> bool {
        let parent_a = self.supergenre_of(a);
        let parent_b = self.supergenre_of(b);

        match (parent_a, parent_b) {
            (Some(x), Some(y)) if x == y => true,
            _ => parent_a == Some(b) || parent_b == Some(a),
        }
    }

    /// Tags marked as clashing with `id`, whichever side of the row declared it.
    pub fn anti_influences(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.edges(id)
            .iter()
            .filter(|edge| edge.kind == EdgeKind::AntiInfluence)
            .map(|edge| edge.target)
    }

    pub fn is_conditional(&self, id: NodeId) -> bool {
        self.conditional.contains(&id)
    }
}
