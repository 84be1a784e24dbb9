use genregraph_core::{
    DistanceReport, EdgeKind, GenreGraph, NodeId, RankedCandidate, TagResolution, Unreachable,
};
use std::collections::BTreeMap;

use crate::app::DescriptorSource;
use crate::colors::ColorScheme;

/// Distances are multiples of 0.5; whole values print without a fraction.
pub fn format_distance(distance: f32) -> String {
    if distance.fract() == 0.0 {
        format!("{:.0}", distance)
    } else {
        format!("{:.1}", distance)
    }
}

pub fn display_distance(
    graph: &GenreGraph,
    tag_a: &str,
    tag_b: &str,
    outcome: &Result<DistanceReport, Unreachable>,
    show_path: bool,
    colors: &ColorScheme,
) {
    let report = match outcome {
        Ok(report) => report,
        Err(reason) => {
            println!(
                "{} {} and {}: {}",
                colors.error("❌ No distance between"),
                colors.tag(&format!("\"{}\"", tag_a)),
                colors.tag(&format!("\"{}\"", tag_b)),
                reason
            );
            return;
        }
    };

    println!(
        "{} {} → {}: {}",
        colors.success("✅"),
        colors.tag(&format!("\"{}\"", graph.name(report.from))),
        colors.tag(&format!("\"{}\"", graph.name(report.to))),
        colors.distance(&format_distance(report.total))
    );

    if let Some(adjustment) = &report.origin_adjustment {
        println!(
            "   {} {} discount: {} {:+}",
            colors.stats("↘"),
            colors.edge_kind(adjustment.kind),
            colors.number(&format_distance(adjustment.baseline)),
            adjustment.influence
        );
    }
    if let Some(penalty) = report.anti_influence_penalty {
        println!(
            "   {} anti-influence penalty: +{}",
            colors.stats("↗"),
            colors.number(&format_distance(penalty))
        );
    }

    if show_path {
        display_path(graph, report, colors);
    }
}

fn display_path(graph: &GenreGraph, report: &DistanceReport, colors: &ColorScheme) {
    let path_flow = report
        .path
        .iter()
        .map(|&id| colors.tag(&format!("\"{}\"", graph.name(id))).to_string())
        .collect::<Vec<_>>()
        .join(" → ");
    println!("\n{}", path_flow);

    println!(); // Add blank line before detailed list
    let mut cost = 0.0;
    for (step_index, pair) in report.path.windows(2).enumerate() {
        let (from, to) = (pair[0], pair[1]);
        let Some(edge) = cheapest_edge(graph, from, to) else {
            continue;
        };
        cost += edge.1;

        println!(
            "{:3} {} [{}] {}",
            colors.step_number(&format!("{}.", step_index + 1)),
            colors.tag(&format!("\"{}\"", graph.name(to))),
            colors.edge_kind(edge.0),
            colors.number(&format_distance(cost))
        );
    }

    println!(
        "\n{} path cost {} ({} nodes visited)",
        colors.stats("📊"),
        colors.number(&format_distance(report.path_cost)),
        colors.number(&report.nodes_visited.to_string())
    );
}

fn cheapest_edge(graph: &GenreGraph, from: NodeId, to: NodeId) -> Option<(EdgeKind, f32)> {
    graph
        .edges(from)
        .iter()
        .filter(|edge| edge.target == to && edge.kind != EdgeKind::AntiInfluence)
        .map(|edge| (edge.kind, edge.weight))
        .min_by(|a, b| a.1.total_cmp(&b.1))
}

pub fn display_ranking(
    reference: &[String],
    ranked: &[RankedCandidate<String>],
    unknown_tags: &[String],
    colors: &ColorScheme,
) {
    let reference_list = reference
        .iter()
        .map(|tag| colors.tag(&format!("\"{}\"", tag)).to_string())
        .collect::<Vec<_>>()
        .join(", ");
    println!("🎵 Ranking against {}", reference_list);

    for tag in unknown_tags {
        println!(
            "{} {} is not in the genre graph",
            colors.error("⚠"),
            colors.tag(&format!("\"{}\"", tag))
        );
    }

    if ranked.is_empty() {
        println!("{}", colors.error("❌ No track could be ranked"));
        return;
    }

    println!();
    for (position, candidate) in ranked.iter().enumerate() {
        let mut line = format!(
            "{:3} {} {}",
            colors.step_number(&format!("{}.", position + 1)),
            colors.distance(&format!("{:>6}", format_distance(candidate.distance))),
            candidate.id
        );

        match &candidate.best_match {
            Some(found) => line.push_str(&format!(
                " ({} ~ {})",
                colors.tag(&found.reference_tag),
                colors.tag(&found.candidate_tag)
            )),
            None => line.push_str(&format!(" {}", colors.error("(unscoreable)"))),
        }
        println!("{}", line);
    }

    println!(
        "\n{} Ranked {} tracks",
        colors.stats("📊"),
        colors.number(&ranked.len().to_string())
    );
}

pub fn display_graph_summary(graph: &GenreGraph, source: &DescriptorSource, colors: &ColorScheme) {
    println!("🎵 Genre graph from {}", source);
    println!(
        "{} {} nodes, {} edges, {} aliases",
        colors.stats("📊"),
        colors.number(&graph.node_count().to_string()),
        colors.number(&graph.edge_count().to_string()),
        colors.number(&graph.alias_count().to_string())
    );
}

pub fn display_tag_info(graph: &GenreGraph, tag: &str, colors: &ColorScheme) {
    let id = match graph.resolve(tag) {
        TagResolution::Node(id) => id,
        TagResolution::Excluded => {
            println!(
                "{} is excluded from distance scoring",
                colors.tag(&format!("\"{}\"", tag))
            );
            return;
        }
        TagResolution::Unknown => {
            println!(
                "{} {} is not in the genre graph",
                colors.error("❌"),
                colors.tag(&format!("\"{}\"", tag))
            );
            return;
        }
    };

    let node = graph.node(id);
    println!(
        "{} {}",
        colors.tag(&format!("\"{}\"", node.name)),
        colors.level(node.level)
    );
    if graph.find(tag) != Some(id) {
        println!("   resolved from {}", colors.tag(&format!("\"{}\"", tag)));
    }
    if !node.aliases.is_empty() {
        println!("   aliases: {}", node.aliases.join(", "));
    }
    if let Some(parent) = graph.supergenre_of(id) {
        println!("   supergenre: {}", colors.tag(graph.name(parent)));
    }
    if graph.is_conditional(id) {
        println!("   anti-influences are enforced as filters");
    }

    let mut neighbours: BTreeMap<EdgeKind, Vec<&str>> = BTreeMap::new();
    for edge in &node.edges {
        neighbours
            .entry(edge.kind)
            .or_default()
            .push(graph.name(edge.target));
    }

    for (kind, mut names) in neighbours {
        names.sort_unstable();
        println!("   {}: {}", colors.edge_kind(kind), names.join(", "));
    }
}
