pub mod descriptors;
pub mod distance;
pub mod error;
pub mod graph;
pub mod similarity;
pub mod similarity_config;
pub mod string_normalization;
pub mod weights;

// Re-export commonly used items
pub use descriptors::{Descriptors, Relation, RelationRow, RelationTable};
pub use distance::dijkstra::PathFlags;
pub use distance::{DistanceOptions, DistanceReport, OriginAdjustment, Unreachable};
pub use error::GraphError;
pub use graph::{Edge, EdgeKind, GenreGraph, Level, Node, NodeId, TagResolution};
pub use similarity::{AntiInfluenceFilter, RankedCandidate, SimilarityQuery, TagMatch};
pub use similarity_config::{SimilarityConfig, UnscoreablePolicy};
pub use string_normalization::{clean_tag, clean_tags};
pub use weights::Weights;
