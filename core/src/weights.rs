use crate::error::GraphError;
use serde::{Deserialize, Serialize};

/// Link weights of the genre graph.
///
/// Direct links (`primary_origin`, `secondary_origin`, `weak_substitutions`, the
/// `inter_*` links) are applied once. Indirect links (`cluster` and the hierarchy
/// levels) accumulate along the path. The two `*_influence` values are signed
/// adjustments applied to the final distance, not edge weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weights {
    pub primary_origin: i32,
    pub secondary_origin: i32,
    pub weak_substitutions: i32,
    pub cluster: i32,
    pub intra_supergenre: i32,
    pub supergenre_cluster: i32,
    pub supergenre_supercluster: i32,
    pub inter_supergenre: i32,
    pub inter_supergenre_supercluster: i32,
    pub substitutions: i32,
    pub anti_influence: i32,
    pub primary_origin_influence: i32,
    pub secondary_origin_influence: i32,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            primary_origin: 185,
            secondary_origin: 300,
            weak_substitutions: 20,
            cluster: 42,
            intra_supergenre: 100,
            supergenre_cluster: 50,
            supergenre_supercluster: 75,
            inter_supergenre: 200,
            inter_supergenre_supercluster: 300,
            substitutions: 0,
            anti_influence: 100,
            primary_origin_influence: -10,
            secondary_origin_influence: -5,
        }
    }
}

impl Weights {
    /// Edge weights must be strictly positive. `substitutions` only has to be
    /// non-negative: aliases merge into their target instead of becoming edges.
    pub fn validate(&self) -> Result<(), GraphError> {
        let edge_weights = [
            ("primary_origin", self.primary_origin),
            ("secondary_origin", self.secondary_origin),
            ("weak_substitutions", self.weak_substitutions),
            ("cluster", self.cluster),
            ("intra_supergenre", self.intra_supergenre),
            ("supergenre_cluster", self.supergenre_cluster),
            ("supergenre_supercluster", self.supergenre_supercluster),
            ("inter_supergenre", self.inter_supergenre),
            ("inter_supergenre_supercluster", self.inter_supergenre_supercluster),
            ("anti_influence", self.anti_influence),
        ];

        for (key, value) in edge_weights {
            if value <= 0 {
                return Err(GraphError::InvalidWeight { key, value });
            }
        }
        if self.substitutions < 0 {
            return Err(GraphError::InvalidWeight {
                key: "substitutions",
                value: self.substitutions,
            });
        }
        Ok(())
    }

    /// Largest distance reduction the origin influences can produce.
    pub fn max_discount(&self) -> f32 {
        let strongest = self
            .primary_origin_influence
            .min(self.secondary_origin_influence)
            .min(0);
        -(strongest as f32)
    }
}
