mod common;

use common::{fixture_descriptors, fixture_graph};
use genregraph_core::{
    GenreGraph, RankedCandidate, SimilarityConfig, SimilarityQuery, UnscoreablePolicy,
};

fn pool(entries: &[(&str, &[&str])]) -> Vec<(String, Vec<String>)> {
    entries
        .iter()
        .map(|(id, tags)| {
            (
                id.to_string(),
                tags.iter().map(|tag| tag.to_string()).collect(),
            )
        })
        .collect()
}

fn ids(ranked: &[RankedCandidate<String>]) -> Vec<&str> {
    ranked.iter().map(|candidate| candidate.id.as_str()).collect()
}

fn rock_pool() -> Vec<(String, Vec<String>)> {
    pool(&[
        ("t1", &["shoegaze"]),
        ("t2", &["post-punk", "seen live"]),
        ("t3", &["doom metal"]),
        ("t4", &["polka"]),
        ("t5", &["garage rock"]),
    ])
}

#[test]
fn test_score_is_minimum_over_tag_pairs() {
    let graph = fixture_graph();
    let query = SimilarityQuery::new(&graph, SimilarityConfig::default());

    let score = query.score_track(&["indie rock", "seen live"], &["doom metal", "post-punk"]);
    assert_eq!(score, Some(90.0));
}

#[test]
fn test_unreachable_pairs_are_ignored() {
    let graph = fixture_graph();
    let query = SimilarityQuery::new(&graph, SimilarityConfig::default());

    let score = query.score_track(&["indie rock"], &["polka", "field recordings", "grunge"]);
    assert_eq!(score, Some(100.0));
}

#[test]
fn test_all_pairs_unreachable_is_unscoreable() {
    let graph = fixture_graph();
    let query = SimilarityQuery::new(&graph, SimilarityConfig::default());

    assert_eq!(query.score_track(&["indie rock"], &["polka", "field recordings"]), None);
    assert_eq!(query.score_track(&["seen live"], &["indie rock"]), None);
    assert_eq!(query.score_track::<&str, &str>(&[], &["indie rock"]), None);
}

#[test]
fn test_best_match_ties_follow_input_order() {
    let graph = fixture_graph();
    let query = SimilarityQuery::new(&graph, SimilarityConfig::default());

    let found = query
        .best_match(&["grunge", "indie rock"], &["slowcore", "shoegaze"])
        .unwrap();
    assert_eq!(found.reference_tag, "grunge");
    assert_eq!(found.candidate_tag, "slowcore");
    assert_eq!(found.distance, 100.0);

    let found = query
        .best_match(&["indie rock", "slowcore"], &["garage rock", "grunge"])
        .unwrap();
    assert_eq!(found.reference_tag, "indie rock");
    assert_eq!(found.candidate_tag, "garage rock");
}

#[test]
fn test_rank_orders_by_distance_then_id() {
    let graph = fixture_graph();
    let query = SimilarityQuery::new(&graph, SimilarityConfig::default());

    let ranked = query.rank_candidates(&["indie rock"], &rock_pool());

    assert_eq!(ids(&ranked), vec!["t2", "t1", "t5", "t3"]);
    let distances: Vec<f32> = ranked.iter().map(|candidate| candidate.distance).collect();
    assert_eq!(distances, vec![90.0, 100.0, 100.0, 150.0]);
}

#[test]
fn test_rank_is_independent_of_pool_order() {
    let graph = fixture_graph();
    let query = SimilarityQuery::new(&graph, SimilarityConfig::default());

    let forward = query.rank_candidates(&["indie rock"], &rock_pool());
    let mut reversed_pool = rock_pool();
    reversed_pool.reverse();
    let reversed = query.rank_candidates(&["indie rock"], &reversed_pool);

    assert_eq!(forward, reversed);
}

#[test]
fn test_unscoreable_policy_max_distance() {
    let graph = fixture_graph();
    let config = SimilarityConfig {
        unscoreable: UnscoreablePolicy::MaxDistance(1000.0),
        ..SimilarityConfig::default()
    };
    let query = SimilarityQuery::new(&graph, config);

    let ranked = query.rank_candidates(&["indie rock"], &rock_pool());

    assert_eq!(ids(&ranked), vec!["t2", "t1", "t5", "t3", "t4"]);
    let last = ranked.last().unwrap();
    assert_eq!(last.distance, 1000.0);
    assert!(last.is_unscoreable());
}

#[test]
fn test_limit_and_max_distance() {
    let graph = fixture_graph();

    let limited = SimilarityQuery::new(
        &graph,
        SimilarityConfig::new(None, Some(2), UnscoreablePolicy::Exclude, false, true),
    );
    assert_eq!(
        ids(&limited.rank_candidates(&["indie rock"], &rock_pool())),
        vec!["t2", "t1"]
    );

    let bounded = SimilarityQuery::new(
        &graph,
        SimilarityConfig::new(Some(100.0), None, UnscoreablePolicy::MaxDistance(1000.0), false, true),
    );
    assert_eq!(
        ids(&bounded.rank_candidates(&["indie rock"], &rock_pool())),
        vec!["t2", "t1", "t5"]
    );
}

#[test]
fn test_without_influences() {
    let graph = fixture_graph();
    let config = SimilarityConfig {
        use_influences: false,
        ..SimilarityConfig::default()
    };
    let query = SimilarityQuery::new(&graph, config);

    assert_eq!(query.score_track(&["post-punk"], &["indie rock"]), Some(100.0));
}

#[test]
fn test_conditional_anti_influences_filter_candidates() {
    let graph = fixture_graph();
    let query = SimilarityQuery::new(&graph, SimilarityConfig::default());
    let candidates = pool(&[
        ("c1", &["doom metal"]),
        ("c2", &["shoegaze", "dream pop"]),
        ("c3", &["grunge"]),
    ]);

    let ranked = query.rank_candidates(&["black metal"], &candidates);

    assert_eq!(ids(&ranked), vec!["c3"]);
    assert_eq!(ranked[0].distance, 150.0);
    assert_eq!(query.anti_influence_filter(&["black metal"]).len(), 2);
}

#[test]
fn test_plain_anti_influences_only_penalize() {
    let graph = fixture_graph();
    let query = SimilarityQuery::new(&graph, SimilarityConfig::default());
    let candidates = pool(&[("j1", &["free jazz"])]);

    assert!(query.anti_influence_filter(&["cool jazz"]).is_empty());
    let ranked = query.rank_candidates(&["cool jazz"], &candidates);
    assert_eq!(ids(&ranked), vec!["j1"]);
    assert_eq!(ranked[0].distance, 200.0);
}

#[test]
fn test_broadened_filter_covers_every_reference_tag() {
    let graph = fixture_graph();
    let config = SimilarityConfig {
        broaden_anti_influence_filter: true,
        ..SimilarityConfig::default()
    };
    let query = SimilarityQuery::new(&graph, config);
    let candidates = pool(&[("j1", &["free jazz"]), ("j2", &["bebop"])]);

    assert_eq!(query.anti_influence_filter(&["cool jazz"]).len(), 1);
    assert_eq!(ids(&query.rank_candidates(&["cool jazz"], &candidates)), vec!["j2"]);
}

#[test]
fn test_filter_matches_aliases_of_banned_nodes() {
    let graph = fixture_graph();
    let query = SimilarityQuery::new(&graph, SimilarityConfig::default());
    let filter = query.anti_influence_filter(&["Black Metal"]);

    assert!(filter.rejects(&graph, &["DOOM METAL"]));
    assert!(!filter.rejects(&graph, &["grunge", "polka"]));
}

#[test]
fn test_conditional_tag_listed_as_child_bans_the_row_parent() {
    let graph = GenreGraph::build(&fixture_descriptors().with_conditional("doom metal")).unwrap();
    let query = SimilarityQuery::new(&graph, SimilarityConfig::default());
    let filter = query.anti_influence_filter(&["doom metal"]);

    assert_eq!(filter.len(), 1);
    assert!(filter.rejects(&graph, &["black metal"]));
    assert!(!filter.rejects(&graph, &["dream pop"]));
}

#[test]
fn test_unknown_tags_are_reported() {
    let graph = fixture_graph();
    let query = SimilarityQuery::new(&graph, SimilarityConfig::default());

    let unknown = query.unknown_tags(&["indie rock", "polka", "seen live", "Indie", "zydeco"]);
    assert_eq!(unknown, vec!["polka", "zydeco"]);
}
