/// What to do with candidates whose tags are all unreachable from the reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnscoreablePolicy {
    /// Leave them out of the ranking.
    Exclude,
    /// Rank them with this distance.
    MaxDistance(f32),
}

/// Configuration for similarity ranking
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityConfig {
    /// Drop candidates scoring above this distance
    pub max_distance: Option<f32>,
    /// Keep only the N closest candidates
    pub limit: Option<usize>,
    pub unscoreable: UnscoreablePolicy,
    /// Apply anti-influence filtering for every reference tag, not only conditional ones
    pub broaden_anti_influence_filter: bool,
    /// Apply origin discounts and anti-influence penalties when scoring
    pub use_influences: bool,
}

impl SimilarityConfig {
    pub fn new(
        max_distance: Option<f32>,
        limit: Option<usize>,
        unscoreable: UnscoreablePolicy,
        broaden_anti_influence_filter: bool,
        use_influences: bool,
    ) -> Self {
        Self {
            max_distance,
            limit,
            unscoreable,
            broaden_anti_influence_filter,
            use_influences,
        }
    }
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            max_distance: None,
            limit: None,
            unscoreable: UnscoreablePolicy::Exclude,
            broaden_anti_influence_filter: false,
            use_influences: true,
        }
    }
}
