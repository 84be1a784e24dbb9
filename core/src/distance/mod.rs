pub mod dijkstra;

use crate::graph::{Edge, EdgeKind, GenreGraph, NodeId, TagResolution};
use dijkstra::{PathFlags, ShortestPath, shortest_path};
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceOptions {
    /// Apply origin discounts and the anti-influence penalty.
    pub use_influences: bool,
    /// Distances above this value are reported as [`Unreachable::BeyondLimit`].
    pub max_distance: Option<f32>,
}

impl Default for DistanceOptions {
    fn default() -> Self {
        Self {
            use_influences: true,
            max_distance: None,
        }
    }
}

impl DistanceOptions {
    pub fn new(use_influences: bool, max_distance: Option<f32>) -> Self {
        Self {
            use_influences,
            max_distance,
        }
    }

    /// Plain path cost, no influence adjustments.
    pub fn raw() -> Self {
        Self::new(false, None)
    }
}

/// Why no distance exists between two tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unreachable {
    Excluded(String),
    Unknown(String),
    Disconnected,
    BeyondLimit,
}

impl fmt::Display for Unreachable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unreachable::Excluded(tag) => write!(f, "'{tag}' is excluded from distance scoring"),
            Unreachable::Unknown(tag) => write!(f, "'{tag}' is not in the genre graph"),
            Unreachable::Disconnected => f.write_str("no path between the two tags"),
            Unreachable::BeyondLimit => f.write_str("distance exceeds the configured limit"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OriginAdjustment {
    pub kind: EdgeKind,
    /// Path cost with the direct origin link between the endpoints removed.
    pub baseline: f32,
    pub influence: f32,
}

impl OriginAdjustment {
    pub fn adjusted(&self) -> f32 {
        self.baseline + self.influence
    }
}

/// Full breakdown of one distance computation.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceReport {
    pub from: NodeId,
    pub to: NodeId,
    pub path: Vec<NodeId>,
    pub path_cost: f32,
    pub flags: PathFlags,
    pub origin_adjustment: Option<OriginAdjustment>,
    pub anti_influence_penalty: Option<f32>,
    pub total: f32,
    /// Nodes settled by the main search.
    pub nodes_visited: usize,
}

impl DistanceReport {
    fn identity(node: NodeId) -> Self {
        Self {
            from: node,
            to: node,
            path: vec![node],
            path_cost: 0.0,
            flags: PathFlags::default(),
            origin_adjustment: None,
            anti_influence_penalty: None,
            total: 0.0,
            nodes_visited: 0,
        }
    }

    fn from_path(from: NodeId, to: NodeId, shortest: ShortestPath) -> Self {
        Self {
            from,
            to,
            path_cost: shortest.cost,
            total: shortest.cost,
            path: shortest.path,
            flags: shortest.flags,
            origin_adjustment: None,
            anti_influence_penalty: None,
            nodes_visited: shortest.nodes_visited,
        }
    }
}

/// Anti-influence links only ever add a penalty; they are never walked.
fn is_anti_influence(edge: &Edge) -> bool {
    edge.kind == EdgeKind::AntiInfluence
}

fn is_direct_origin(node: NodeId, edge: &Edge, a: NodeId, b: NodeId) -> bool {
    edge.kind.is_origin()
        && ((node == a && edge.target == b) || (node == b && edge.target == a))
}

impl GenreGraph {
    /// Influence-adjusted distance between two tags, `None` when unreachable.
    pub fn distance(&self, a: &str, b: &str) -> Option<f32> {
        self.distance_with(a, b, &DistanceOptions::default())
    }

    pub fn distance_with(&self, a: &str, b: &str, options: &DistanceOptions) -> Option<f32> {
        self.explain(a, b, options).ok().map(|report| report.total)
    }

    pub fn explain(
        &self,
        a: &str,
        b: &str,
        options: &DistanceOptions,
    ) -> Result<DistanceReport, Unreachable> {
        let from = self.endpoint(a)?;
        let to = self.endpoint(b)?;
        self.explain_nodes(from, to, options)
    }

    /// Same as [`GenreGraph::explain`] for tags that are already resolved.
    pub fn explain_nodes(
        &self,
        from: NodeId,
        to: NodeId,
        options: &DistanceOptions,
    ) -> Result<DistanceReport, Unreachable> {
        if from == to {
            return Ok(DistanceReport::identity(from));
        }

        let slack = if options.use_influences {
            self.weights().max_discount()
        } else {
            0.0
        };
        let bound = options.max_distance.map(|limit| limit + slack);

        let shortest = shortest_path(self, from, to, bound, |_, edge| is_anti_influence(edge))?;
        let mut report = DistanceReport::from_path(from, to, shortest);

        if options.use_influences {
            if let Some(adjustment) = self.origin_adjustment(&report, bound) {
                report.total = report.total.min(adjustment.adjusted());
                report.origin_adjustment = Some(adjustment);
            }
            if self.has_edge(from, to, EdgeKind::AntiInfluence) {
                let penalty = self.weights().anti_influence as f32;
                report.total += penalty;
                report.anti_influence_penalty = Some(penalty);
            }
        }
        report.total = report.total.max(0.0);

        debug!(
            from = %self.name(from),
            to = %self.name(to),
            path_cost = report.path_cost,
            total = report.total,
            "distance computed"
        );

        if options.max_distance.is_some_and(|limit| report.total > limit) {
            return Err(Unreachable::BeyondLimit);
        }
        Ok(report)
    }

    fn endpoint(&self, tag: &str) -> Result<NodeId, Unreachable> {
        match self.resolve(tag) {
            TagResolution::Node(id) => Ok(id),
            TagResolution::Excluded => Err(Unreachable::Excluded(tag.to_string())),
            TagResolution::Unknown => Err(Unreachable::Unknown(tag.to_string())),
        }
    }

    /// Discount for endpoints that share a supergenre and are linked by an
    /// origin relation. Primary origin takes precedence over secondary.
    fn origin_adjustment(
        &self,
        report: &DistanceReport,
        bound: Option<f32>,
    ) -> Option<OriginAdjustment> {
        let (from, to) = (report.from, report.to);
        let weights = self.weights();

        let (kind, influence) = if self.has_edge(from, to, EdgeKind::PrimaryOrigin) {
            (EdgeKind::PrimaryOrigin, weights.primary_origin_influence)
        } else if self.has_edge(from, to, EdgeKind::SecondaryOrigin) {
            (EdgeKind::SecondaryOrigin, weights.secondary_origin_influence)
        } else {
            return None;
        };

        if !self.intra_supergenre(from, to) {
            return None;
        }

        let baseline = if report.flags.via_origin {
            shortest_path(self, from, to, bound, |node, edge| {
                is_anti_influence(edge) || is_direct_origin(node, edge, from, to)
            })
            .ok()?
            .cost
        } else {
            report.path_cost
        };

        Some(OriginAdjustment {
            kind,
            baseline,
            influence: influence as f32,
        })
    }
}
