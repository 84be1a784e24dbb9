use clap::Parser;
use genregraph::colors::ColorScheme;
use genregraph::*;
use genregraph_core::{DistanceOptions, SimilarityQuery};
use std::error::Error;
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();

    let args = Args::parse();
    let colors = ColorScheme::new(!args.no_color);

    if let Err(error) = run(args, &colors) {
        eprintln!("{}", colors.error(&format!("❌ Error: {}", error)));
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args, colors: &ColorScheme) -> Result<(), Box<dyn Error>> {
    let app = GenreGraphApp::new(args.descriptors.clone())?;
    let graph = app.load_graph()?;

    match args.command {
        Command::Distance {
            tag_a,
            tag_b,
            max_distance,
            show_path,
        } => {
            let options = DistanceOptions::new(!args.raw, max_distance);
            let outcome = graph.explain(&tag_a, &tag_b, &options);
            display::display_distance(&graph, &tag_a, &tag_b, &outcome, show_path, colors);
        }
        Command::Rank {
            reference,
            pool,
            limit,
            max_distance,
            broaden,
            unscoreable_as,
        } => {
            let pool = load_pool(&pool)?;
            let config = similarity_config(limit, max_distance, broaden, unscoreable_as, args.raw);
            let query = SimilarityQuery::new(&graph, config);

            let unknown_tags = query.unknown_tags(&reference);
            let ranked = query.rank_candidates(&reference, &pool);
            display::display_ranking(&reference, &ranked, &unknown_tags, colors);
        }
        Command::Info { tag: Some(tag) } => display::display_tag_info(&graph, &tag, colors),
        Command::Info { tag: None } => display::display_graph_summary(&graph, &app.source, colors),
    }

    Ok(())
}
