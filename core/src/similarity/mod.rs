use crate::distance::{DistanceOptions, Unreachable};
use crate::graph::{GenreGraph, NodeId, TagResolution};
use crate::similarity_config::{SimilarityConfig, UnscoreablePolicy};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use tracing::debug;

/// The closest reference/candidate tag pair of a track comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct TagMatch {
    pub reference_tag: String,
    pub candidate_tag: String,
    pub distance: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankedCandidate<Id> {
    pub id: Id,
    pub distance: f32,
    /// `None` when the candidate was unscoreable and ranked by policy.
    pub best_match: Option<TagMatch>,
}

impl<Id> RankedCandidate<Id> {
    pub fn is_unscoreable(&self) -> bool {
        self.best_match.is_none()
    }
}

/// Nodes a candidate must not carry to be considered at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AntiInfluenceFilter {
    banned: FxHashSet<NodeId>,
}

impl AntiInfluenceFilter {
    pub fn is_empty(&self) -> bool {
        self.banned.is_empty()
    }

    pub fn len(&self) -> usize {
        self.banned.len()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.banned.contains(&id)
    }

    /// Whether any of the tags resolves to a banned node.
    pub fn rejects<S: AsRef<str>>(&self, graph: &GenreGraph, tags: &[S]) -> bool {
        if self.banned.is_empty() {
            return false;
        }
        tags.iter().any(|tag| match graph.resolve(tag.as_ref()) {
            TagResolution::Node(id) => self.banned.contains(&id),
            _ => false,
        })
    }
}

struct ResolvedTag<'t> {
    tag: &'t str,
    node: NodeId,
}

enum Closest {
    Found(TagMatch),
    BeyondLimit,
    Unscoreable,
}

/// Track-level similarity over a shared genre graph.
pub struct SimilarityQuery<'g> {
    graph: &'g GenreGraph,
    config: SimilarityConfig,
    options: DistanceOptions,
}

impl<'g> SimilarityQuery<'g> {
    pub fn new(graph: &'g GenreGraph, config: SimilarityConfig) -> Self {
        let options = DistanceOptions::new(config.use_influences, config.max_distance);
        Self {
            graph,
            config,
            options,
        }
    }

    /// Closest tag pair between two tag sets. Pairs without a distance are
    /// ignored; ties go to the earliest reference tag, then the earliest
    /// candidate tag.
    pub fn best_match<S: AsRef<str>, T: AsRef<str>>(
        &self,
        reference: &[S],
        candidate: &[T],
    ) -> Option<TagMatch> {
        match self.closest(&self.resolve_all(reference), candidate) {
            Closest::Found(found) => Some(found),
            Closest::BeyondLimit | Closest::Unscoreable => None,
        }
    }

    /// Minimum pairwise distance, `None` when the pair of tracks is unscoreable.
    pub fn score_track<S: AsRef<str>, T: AsRef<str>>(
        &self,
        reference: &[S],
        candidate: &[T],
    ) -> Option<f32> {
        self.best_match(reference, candidate).map(|found| found.distance)
    }

    /// Nodes banned by the reference tags. A conditional tag bans every tag it
    /// shares an anti-influence row with, as the row parent or as a listed child.
    pub fn anti_influence_filter<S: AsRef<str>>(&self, reference: &[S]) -> AntiInfluenceFilter {
        self.filter_for(&self.resolve_all(reference))
    }

    /// Tags that resolve to nothing in the graph. Excluded tags are not reported.
    pub fn unknown_tags<S: AsRef<str>>(&self, tags: &[S]) -> Vec<String> {
        tags.iter()
            .map(AsRef::as_ref)
            .filter(|tag| self.graph.resolve(tag) == TagResolution::Unknown)
            .map(str::to_string)
            .collect()
    }

    /// Ranks a pool of candidate tracks against the reference tags, closest first.
    ///
    /// Candidates carrying an anti-influence of a conditional reference tag are
    /// dropped before scoring. The result is the same for any order of `pool`.
    pub fn rank_candidates<Id, S>(
        &self,
        reference: &[S],
        pool: &[(Id, Vec<String>)],
    ) -> Vec<RankedCandidate<Id>>
    where
        Id: Ord + Clone + Send + Sync,
        S: AsRef<str>,
    {
        let reference = self.resolve_all(reference);
        let filter = self.filter_for(&reference);

        let mut ranked: Vec<RankedCandidate<Id>> = pool
            .par_iter()
            .filter(|(_, tags)| !filter.rejects(self.graph, tags))
            .filter_map(|(id, tags)| self.rank_one(id, &reference, tags))
            .collect();

        ranked.sort_by(|a, b| {
            a.distance
                .total_cmp(&b.distance)
                .then_with(|| a.id.cmp(&b.id))
        });
        if let Some(limit) = self.config.limit {
            ranked.truncate(limit);
        }

        debug!(
            pool = pool.len(),
            ranked = ranked.len(),
            filtered = filter.len(),
            "candidates ranked"
        );
        ranked
    }

    fn rank_one<Id: Clone>(
        &self,
        id: &Id,
        reference: &[ResolvedTag<'_>],
        tags: &[String],
    ) -> Option<RankedCandidate<Id>> {
        let (distance, best_match) = match self.closest(reference, tags) {
            Closest::Found(found) => (found.distance, Some(found)),
            Closest::BeyondLimit => return None,
            Closest::Unscoreable => match self.config.unscoreable {
                UnscoreablePolicy::Exclude => return None,
                UnscoreablePolicy::MaxDistance(distance) => (distance, None),
            },
        };

        if self.config.max_distance.is_some_and(|limit| distance > limit) {
            return None;
        }
        Some(RankedCandidate {
            id: id.clone(),
            distance,
            best_match,
        })
    }

    fn resolve_all<'t, S: AsRef<str>>(&self, tags: &'t [S]) -> Vec<ResolvedTag<'t>> {
        tags.iter()
            .filter_map(|tag| match self.graph.resolve(tag.as_ref()) {
                TagResolution::Node(node) => Some(ResolvedTag {
                    tag: tag.as_ref(),
                    node,
                }),
                TagResolution::Excluded | TagResolution::Unknown => None,
            })
            .collect()
    }

    fn filter_for(&self, reference: &[ResolvedTag<'_>]) -> AntiInfluenceFilter {
        let banned = reference
            .iter()
            .filter(|resolved| {
                self.config.broaden_anti_influence_filter || self.graph.is_conditional(resolved.node)
            })
            .flat_map(|resolved| self.graph.anti_influences(resolved.node))
            .collect();
        AntiInfluenceFilter { banned }
    }

    fn closest<T: AsRef<str>>(&self, reference: &[ResolvedTag<'_>], candidate: &[T]) -> Closest {
        let candidate = self.resolve_all(candidate);
        let mut best: Option<TagMatch> = None;
        let mut beyond_limit = false;

        for reference_tag in reference {
            for candidate_tag in &candidate {
                let (from, to) = (reference_tag.node, candidate_tag.node);
                let report = match self.graph.explain_nodes(from, to, &self.options) {
                    Ok(report) => report,
                    Err(Unreachable::BeyondLimit) => {
                        beyond_limit = true;
                        continue;
                    }
                    Err(_) => continue,
                };

                if best.as_ref().is_none_or(|found| report.total < found.distance) {
                    best = Some(TagMatch {
                        reference_tag: reference_tag.tag.to_string(),
                        candidate_tag: candidate_tag.tag.to_string(),
                        distance: report.total,
                    });
                }
            }
        }

        match best {
            Some(found) => Closest::Found(found),
            None if beyond_limit => Closest::BeyondLimit,
            None => Closest::Unscoreable,
        }
    }
}
