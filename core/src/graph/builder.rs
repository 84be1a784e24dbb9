use super::{Edge, EdgeKind, GenreGraph, Level, Node, NodeId};
use crate::descriptors::{Descriptors, Relation, RelationTable};
use crate::error::GraphError;
use crate::weights::Weights;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, info, warn};

/// How the rows of one relation table become nodes and edges.
struct RelationShape {
    parent_level: Option<Level>,
    child_level: Level,
    kind: EdgeKind,
    weight: f32,
}

fn relation_shape(relation: Relation, weights: &Weights) -> Option<RelationShape> {
    let half = |value: i32| value as f32 / 2.0;
    let flat = |kind: EdgeKind, value: i32| RelationShape {
        parent_level: None,
        child_level: Level::Style,
        kind,
        weight: value as f32,
    };

    let shape = match relation {
        Relation::SupergenreSupercluster => RelationShape {
            parent_level: Some(Level::SupergenreSupercluster),
            child_level: Level::SupergenreCluster,
            kind: EdgeKind::Hierarchy,
            weight: half(weights.supergenre_supercluster),
        },
        Relation::SupergenreCluster => RelationShape {
            parent_level: Some(Level::SupergenreCluster),
            child_level: Level::Supergenre,
            kind: EdgeKind::Hierarchy,
            weight: half(weights.supergenre_cluster),
        },
        Relation::Supergenre => RelationShape {
            parent_level: Some(Level::Supergenre),
            child_level: Level::Style,
            kind: EdgeKind::Hierarchy,
            weight: half(weights.intra_supergenre),
        },
        Relation::StyleCluster => RelationShape {
            parent_level: Some(Level::StyleCluster),
            child_level: Level::Style,
            kind: EdgeKind::Cluster,
            weight: weights.cluster as f32,
        },
        Relation::PrimaryOrigin => flat(EdgeKind::PrimaryOrigin, weights.primary_origin),
        Relation::SecondaryOrigin => flat(EdgeKind::SecondaryOrigin, weights.secondary_origin),
        Relation::AntiInfluence => flat(EdgeKind::AntiInfluence, weights.anti_influence),
        Relation::WeakSubstitution => flat(EdgeKind::WeakSubstitution, weights.weak_substitutions),
        Relation::SupergenreLink => flat(EdgeKind::InterCluster, weights.inter_supergenre),
        Relation::SuperclusterLink => {
            flat(EdgeKind::InterCluster, weights.inter_supergenre_supercluster)
        }
        Relation::Substitution => return None,
    };
    Some(shape)
}

#[derive(Default)]
struct LevelRoles {
    as_parent: Option<Level>,
    as_child: Option<Level>,
}

impl LevelRoles {
    fn resolve(&self) -> Level {
        self.as_parent.or(self.as_child).unwrap_or(Level::Style)
    }
}

pub(crate) struct GraphBuilder {
    weights: Weights,
    nodes: Vec<Node>,
    index: FxHashMap<String, NodeId>,
    roles: Vec<LevelRoles>,
    memberships: FxHashMap<(Relation, NodeId), NodeId>,
    edge_set: FxHashSet<(NodeId, NodeId, EdgeKind)>,
    redeclarations: usize,
}

impl GraphBuilder {
    pub(crate) fn new(weights: Weights) -> Result<Self, GraphError> {
        weights.validate()?;
        Ok(Self {
            weights,
            nodes: Vec::new(),
            index: FxHashMap::default(),
            roles: Vec::new(),
            memberships: FxHashMap::default(),
            edge_set: FxHashSet::default(),
            redeclarations: 0,
        })
    }

    /// Builds the graph from an already normalized descriptor bundle.
    pub(crate) fn build(mut self, descriptors: &Descriptors) -> Result<GenreGraph, GraphError> {
        for relation in Relation::ALL {
            if let Some(shape) = relation_shape(relation, &self.weights) {
                self.add_relation(relation, descriptors.table(relation), &shape);
            }
        }

        if self.redeclarations > 0 {
            warn!(
                count = self.redeclarations,
                "tags placed under more than one parent; kept the first declaration"
            );
        }

        let aliases = self.register_aliases(descriptors.table(Relation::Substitution))?;
        self.finish(descriptors, aliases)
    }

    fn add_relation(&mut self, relation: Relation, table: &RelationTable, shape: &RelationShape) {
        for row in table.rows() {
            let parent = self.intern(&row.parent);
            match shape.parent_level {
                Some(level) => self.mark_parent(parent, level),
                None => self.mark_child(parent, shape.child_level),
            }

            for child_name in &row.children {
                if child_name == &row.parent {
                    continue;
                }
                let child = self.intern(child_name);
                self.mark_child(child, shape.child_level);

                if relation.is_hierarchy() && !self.claim_membership(relation, child, parent) {
                    continue;
                }
                self.link(parent, child, shape.kind, shape.weight);
            }
        }
    }

    fn intern(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }

        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            name: name.to_string(),
            level: Level::Style,
            aliases: Vec::new(),
            edges: Vec::new(),
        });
        self.roles.push(LevelRoles::default());
        self.index.insert(name.to_string(), id);
        id
    }

    fn mark_parent(&mut self, id: NodeId, level: Level) {
        let roles = &mut self.roles[id.index()];
        roles.as_parent = roles.as_parent.max(Some(level));
    }

    fn mark_child(&mut self, id: NodeId, level: Level) {
        let roles = &mut self.roles[id.index()];
        roles.as_child = roles.as_child.max(Some(level));
    }

    /// One parent per child and hierarchy table; the first declaration wins.
    fn claim_membership(&mut self, relation: Relation, child: NodeId, parent: NodeId) -> bool {
        match self.memberships.get(&(relation, child)) {
            None => {
                self.memberships.insert((relation, child), parent);
                true
            }
            Some(&existing) if existing == parent => true,
            Some(&existing) => {
                debug!(
                    table = relation.key(),
                    tag = %self.nodes[child.index()].name,
                    kept = %self.nodes[existing.index()].name,
                    ignored = %self.nodes[parent.index()].name,
                    "ignoring hierarchy re-declaration"
                );
                self.redeclarations += 1;
                false
            }
        }
    }

    fn link(&mut self, a: NodeId, b: NodeId, kind: EdgeKind, weight: f32) {
        let key = if a < b { (a, b, kind) } else { (b, a, kind) };
        if !self.edge_set.insert(key) {
            return;
        }

        self.nodes[a.index()].edges.push(Edge { target: b, kind, weight });
        self.nodes[b.index()].edges.push(Edge { target: a, kind, weight });
    }

    /// Maps every alias to its canonical node, following substitution chains.
    fn register_aliases(
        &mut self,
        table: &RelationTable,
    ) -> Result<FxHashMap<String, NodeId>, GraphError> {
        let mut targets: FxHashMap<&str, &str> = FxHashMap::default();
        let mut declared: Vec<&str> = Vec::new();

        for row in table.rows() {
            for alias in &row.children {
                if alias == &row.parent || targets.contains_key(alias.as_str()) {
                    continue;
                }
                targets.insert(alias, &row.parent);
                declared.push(alias);
            }
        }

        let mut aliases = FxHashMap::default();
        for alias in declared {
            let mut chain = vec![alias];
            let mut current = targets[alias];
            loop {
                if chain.contains(&current) {
                    chain.push(current);
                    return Err(GraphError::SubstitutionCycle {
                        chain: chain.into_iter().map(str::to_string).collect(),
                    });
                }
                chain.push(current);
                match targets.get(current) {
                    Some(&next) => current = next,
                    None => break,
                }
            }

            let Some(&canonical) = self.index.get(current) else {
                warn!(alias, target = current, "substitution target is not a graph node");
                continue;
            };
            if self.index.contains_key(alias) {
                warn!(alias, target = current, "substitution alias shadows a placed node");
            }

            self.nodes[canonical.index()].aliases.push(alias.to_string());
            aliases.insert(alias.to_string(), canonical);
        }

        Ok(aliases)
    }

    fn finish(
        mut self,
        descriptors: &Descriptors,
        aliases: FxHashMap<String, NodeId>,
    ) -> Result<GenreGraph, GraphError> {
        for (node, roles) in self.nodes.iter_mut().zip(&self.roles) {
            node.level = roles.resolve();
        }

        let exclusions: FxHashSet<String> =
            descriptors.map_distance_exclusions.iter().cloned().collect();

        let mut conditional = FxHashSet::default();
        for tag in &descriptors.style_anti_influences_conditional {
            match aliases.get(tag).or_else(|| self.index.get(tag)) {
                Some(&id) => {
                    conditional.insert(id);
                }
                None => warn!(tag = %tag, "conditional anti-influence tag is not a graph node"),
            }
        }

        let supergenre_of = self
            .memberships
            .iter()
            .filter(|((relation, _), _)| *relation == Relation::Supergenre)
            .map(|(&(_, child), &parent)| (child, parent))
            .collect();

        let graph = GenreGraph {
            nodes: self.nodes,
            index: self.index,
            aliases,
            exclusions,
            conditional,
            supergenre_of,
            weights: self.weights,
        };

        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            aliases = graph.alias_count(),
            "genre graph built"
        );
        Ok(graph)
    }
}
