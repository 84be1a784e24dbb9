use genregraph::colors::ColorScheme;
use genregraph_core::{EdgeKind, Level};

#[test]
fn test_color_scheme_with_colors() {
    let colors = ColorScheme::new(true);

    // Just verify methods don't panic and keep the text
    assert!(colors.tag("Shoegaze").to_string().contains("Shoegaze"));
    assert!(colors.level(Level::Style).to_string().contains("(style)"));
    assert!(colors.edge_kind(EdgeKind::Hierarchy).to_string().contains("hierarchy"));
    assert!(colors.success("Success").to_string().contains("Success"));
    assert!(colors.error("Error").to_string().contains("Error"));
    assert!(colors.step_number("1.").to_string().contains("1."));
    assert!(colors.distance("90").to_string().contains("90"));
    assert!(colors.number("123").to_string().contains("123"));
    assert!(colors.stats("Stats").to_string().contains("Stats"));
}

#[test]
fn test_color_scheme_no_colors() {
    let colors = ColorScheme::new(false);

    // With colors disabled, output should be plain text
    assert_eq!(colors.tag("Shoegaze").to_string(), "Shoegaze");
    assert_eq!(colors.edge_kind(EdgeKind::Cluster).to_string(), "cluster");
    assert_eq!(colors.success("Success").to_string(), "Success");
    assert_eq!(colors.error("Error").to_string(), "Error");
}

#[test]
fn test_every_level_and_edge_kind_keeps_its_name() {
    let colors = ColorScheme::new(true);

    for level in [
        Level::Style,
        Level::StyleCluster,
        Level::Supergenre,
        Level::SupergenreCluster,
        Level::SupergenreSupercluster,
    ] {
        let text = colors.level(level).to_string();
        assert!(text.contains(&format!("({})", level.as_str())), "{text}");
    }

    for kind in [
        EdgeKind::Hierarchy,
        EdgeKind::Cluster,
        EdgeKind::PrimaryOrigin,
        EdgeKind::SecondaryOrigin,
        EdgeKind::AntiInfluence,
        EdgeKind::WeakSubstitution,
        EdgeKind::InterCluster,
    ] {
        assert!(colors.edge_kind(kind).to_string().contains(kind.as_str()));
    }
}
