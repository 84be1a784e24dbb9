#![allow(dead_code)]

use genregraph_core::{Descriptors, GenreGraph, Relation};

/// Small rock/metal/jazz taxonomy:
///
/// popular music (supercluster)
///   guitar music (cluster): rock, metal
///   improvised music (cluster): jazz
///
/// "ethereal" is a style cluster hub over shoegaze, dream pop and slowcore.
/// "found sound" only reaches field recordings, which is cut off from the rest.
pub fn fixture_descriptors() -> Descriptors {
    Descriptors::default()
        .with_row(
            Relation::SupergenreSupercluster,
            "popular music",
            &["guitar music", "improvised music"],
        )
        .with_row(Relation::SupergenreCluster, "guitar music", &["rock", "metal"])
        .with_row(Relation::SupergenreCluster, "improvised music", &["jazz"])
        .with_row(
            Relation::Supergenre,
            "rock",
            &[
                "indie rock",
                "shoegaze",
                "dream pop",
                "slowcore",
                "post-punk",
                "garage rock",
                "grunge",
                "noise rock",
            ],
        )
        .with_row(Relation::Supergenre, "metal", &["doom metal", "black metal"])
        .with_row(Relation::Supergenre, "jazz", &["bebop", "cool jazz", "free jazz"])
        .with_row(Relation::StyleCluster, "ethereal", &["shoegaze", "dream pop", "slowcore"])
        .with_row(Relation::StyleCluster, "found sound", &["field recordings"])
        .with_row(Relation::PrimaryOrigin, "post-punk", &["indie rock"])
        .with_row(Relation::PrimaryOrigin, "shoegaze", &["dream pop"])
        .with_row(Relation::PrimaryOrigin, "free jazz", &["noise rock"])
        .with_row(Relation::SecondaryOrigin, "garage rock", &["grunge"])
        .with_row(Relation::AntiInfluence, "black metal", &["doom metal", "dream pop"])
        .with_row(Relation::AntiInfluence, "cool jazz", &["free jazz"])
        .with_row(Relation::WeakSubstitution, "post-punk", &["new wave"])
        .with_row(Relation::Substitution, "indie rock", &["indie", "indie-rock"])
        .with_row(Relation::Substitution, "post-punk", &["post punk"])
        .with_row(Relation::Substitution, "post punk", &["postpunk"])
        .with_exclusion("seen live")
        .with_exclusion("Favorites")
        .with_conditional("black metal")
}

pub fn fixture_graph() -> GenreGraph {
    GenreGraph::build(&fixture_descriptors()).unwrap()
}

pub fn bundled_descriptors_path() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../cli/data/discogs.json")
}
