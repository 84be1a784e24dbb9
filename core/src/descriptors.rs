use crate::error::GraphError;
use crate::string_normalization::clean_tag;
use crate::weights::Weights;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::path::Path;
use tracing::warn;

/// The relation tables a descriptor bundle can declare, in build order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    SupergenreSupercluster,
    SupergenreCluster,
    Supergenre,
    StyleCluster,
    PrimaryOrigin,
    SecondaryOrigin,
    AntiInfluence,
    WeakSubstitution,
    Substitution,
    SupergenreLink,
    SuperclusterLink,
}

impl Relation {
    pub const ALL: [Relation; 11] = [
        Relation::SupergenreSupercluster,
        Relation::SupergenreCluster,
        Relation::Supergenre,
        Relation::StyleCluster,
        Relation::PrimaryOrigin,
        Relation::SecondaryOrigin,
        Relation::AntiInfluence,
        Relation::WeakSubstitution,
        Relation::Substitution,
        Relation::SupergenreLink,
        Relation::SuperclusterLink,
    ];

    /// Key of the table in a descriptor document.
    pub fn key(self) -> &'static str {
        match self {
            Relation::SupergenreSupercluster => "style_supergenre_supercluster",
            Relation::SupergenreCluster => "style_supergenre_cluster",
            Relation::Supergenre => "style_supergenre",
            Relation::StyleCluster => "style_cluster",
            Relation::PrimaryOrigin => "style_primary_origin",
            Relation::SecondaryOrigin => "style_secondary_origin",
            Relation::AntiInfluence => "style_anti_influence",
            Relation::WeakSubstitution => "style_weak_substitutions",
            Relation::Substitution => "style_substitutions",
            Relation::SupergenreLink => "supergenre_links",
            Relation::SuperclusterLink => "supercluster_links",
        }
    }

    pub fn is_hierarchy(self) -> bool {
        matches!(
            self,
            Relation::SupergenreSupercluster | Relation::SupergenreCluster | Relation::Supergenre
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelationRow {
    pub parent: String,
    pub children: Vec<String>,
}

impl RelationRow {
    pub fn new(parent: &str, children: &[&str]) -> Self {
        Self {
            parent: parent.to_string(),
            children: children.iter().map(|child| child.to_string()).collect(),
        }
    }

    /// Reads a `[parent, [children...]]` row. Anything else is rejected.
    fn from_value(value: &Value) -> Option<Self> {
        let pair = value.as_array().filter(|pair| pair.len() == 2)?;
        let parent = pair[0].as_str()?;
        let children = pair[1]
            .as_array()?
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect();

        Some(Self {
            parent: parent.to_string(),
            children,
        })
    }
}

/// Ordered rows of one relation. Declaration order is preserved because
/// first-declaration-wins decisions depend on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationTable {
    rows: Vec<RelationRow>,
}

impl RelationTable {
    pub fn rows(&self) -> &[RelationRow] {
        &self.rows
    }

    pub fn push(&mut self, row: RelationRow) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn from_values(values: Vec<Value>) -> Self {
        let mut rows = Vec::with_capacity(values.len());
        for (position, value) in values.iter().enumerate() {
            match RelationRow::from_value(value) {
                Some(row) => rows.push(row),
                None => warn!(position, row = %value, "skipping malformed descriptor row"),
            }
        }
        Self { rows }
    }

    fn cleaned(&self) -> Self {
        let rows = self
            .rows
            .iter()
            .filter_map(|row| {
                let parent = clean_tag(&row.parent);
                if parent.is_empty() {
                    return None;
                }
                let children = row
                    .children
                    .iter()
                    .map(|child| clean_tag(child))
                    .filter(|child| !child.is_empty())
                    .collect();
                Some(RelationRow { parent, children })
            })
            .collect();
        Self { rows }
    }
}

impl<'de> Deserialize<'de> for RelationTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = Vec::<Value>::deserialize(deserializer)?;
        Ok(Self::from_values(values))
    }
}

impl Serialize for RelationTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let pairs: Vec<(&str, &[String])> = self
            .rows
            .iter()
            .map(|row| (row.parent.as_str(), row.children.as_slice()))
            .collect();
        pairs.serialize(serializer)
    }
}

/// Declarative description of a genre graph: relation tables, weights, the
/// exclusion set and the conditional anti-influence flags.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Descriptors {
    #[serde(default)]
    pub style_supergenre_supercluster: RelationTable,
    #[serde(default)]
    pub style_supergenre_cluster: RelationTable,
    #[serde(default)]
    pub style_supergenre: RelationTable,
    #[serde(default)]
    pub style_cluster: RelationTable,
    #[serde(default)]
    pub style_primary_origin: RelationTable,
    #[serde(default)]
    pub style_secondary_origin: RelationTable,
    #[serde(default)]
    pub style_anti_influence: RelationTable,
    #[serde(default)]
    pub style_weak_substitutions: RelationTable,
    #[serde(default)]
    pub style_substitutions: RelationTable,
    #[serde(default)]
    pub supergenre_links: RelationTable,
    #[serde(default)]
    pub supercluster_links: RelationTable,
    #[serde(default)]
    pub style_anti_influences_conditional: Vec<String>,
    #[serde(default)]
    pub map_distance_exclusions: Vec<String>,
    pub weights: Weights,
}

impl Descriptors {
    pub fn from_json_str(json: &str) -> Result<Self, GraphError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, GraphError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn table(&self, relation: Relation) -> &RelationTable {
        match relation {
            Relation::SupergenreSupercluster => &self.style_supergenre_supercluster,
            Relation::SupergenreCluster => &self.style_supergenre_cluster,
            Relation::Supergenre => &self.style_supergenre,
            Relation::StyleCluster => &self.style_cluster,
            Relation::PrimaryOrigin => &self.style_primary_origin,
            Relation::SecondaryOrigin => &self.style_secondary_origin,
            Relation::AntiInfluence => &self.style_anti_influence,
            Relation::WeakSubstitution => &self.style_weak_substitutions,
            Relation::Substitution => &self.style_substitutions,
            Relation::SupergenreLink => &self.supergenre_links,
            Relation::SuperclusterLink => &self.supercluster_links,
        }
    }

    fn table_mut(&mut self, relation: Relation) -> &mut RelationTable {
        match relation {
            Relation::SupergenreSupercluster => &mut self.style_supergenre_supercluster,
            Relation::SupergenreCluster => &mut self.style_supergenre_cluster,
            Relation::Supergenre => &mut self.style_supergenre,
            Relation::StyleCluster => &mut self.style_cluster,
            Relation::PrimaryOrigin => &mut self.style_primary_origin,
            Relation::SecondaryOrigin => &mut self.style_secondary_origin,
            Relation::AntiInfluence => &mut self.style_anti_influence,
            Relation::WeakSubstitution => &mut self.style_weak_substitutions,
            Relation::Substitution => &mut self.style_substitutions,
            Relation::SupergenreLink => &mut self.supergenre_links,
            Relation::SuperclusterLink => &mut self.supercluster_links,
        }
    }

    pub fn with_row(mut self, relation: Relation, parent: &str, children: &[&str]) -> Self {
        self.table_mut(relation).push(RelationRow::new(parent, children));
        self
    }

    pub fn with_exclusion(mut self, tag: &str) -> Self {
        self.map_distance_exclusions.push(tag.to_string());
        self
    }

    pub fn with_conditional(mut self, tag: &str) -> Self {
        self.style_anti_influences_conditional.push(tag.to_string());
        self
    }

    pub fn with_weights(mut self, weights: Weights) -> Self {
        self.weights = weights;
        self
    }

    /// Returns a copy with every tag passed through [`clean_tag`]; tags that clean
    /// to nothing are dropped. The graph builder only ever sees normalized bundles.
    pub fn normalized(&self) -> Self {
        let mut normalized = Self {
            weights: self.weights,
            style_anti_influences_conditional: clean_list(&self.style_anti_influences_conditional),
            map_distance_exclusions: clean_list(&self.map_distance_exclusions),
            ..Self::default()
        };
        for relation in Relation::ALL {
            *normalized.table_mut(relation) = self.table(relation).cleaned();
        }
        normalized
    }
}

fn clean_list(tags: &[String]) -> Vec<String> {
    let mut seen = FxHashSet::default();
    tags.iter()
        .map(|tag| clean_tag(tag))
        .filter(|tag| !tag.is_empty() && seen.insert(tag.clone()))
        .collect()
}
