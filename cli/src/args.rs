use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "genregraph")]
#[command(about = "Measure how far apart music genres and styles are, and rank tracks by genre")]
pub struct Args {
    /// Descriptor JSON file (the bundled discogs taxonomy is used when omitted)
    #[arg(
        short,
        long,
        value_name = "PATH",
        env = "GENREGRAPH_DESCRIPTORS",
        global = true
    )]
    pub descriptors: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Plain path cost: no origin discounts, no anti-influence penalty
    #[arg(long, global = true)]
    pub raw: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Distance between two genre or style tags
    Distance {
        /// First tag
        tag_a: String,

        /// Second tag
        tag_b: String,

        /// Treat anything farther than this as unreachable
        #[arg(short = 'm', long, value_name = "DISTANCE")]
        max_distance: Option<f32>,

        /// Show the graph path behind the distance
        #[arg(short = 'p', long)]
        show_path: bool,
    },

    /// Rank a pool of tracks by genre similarity to reference tags
    Rank {
        /// Reference track tags
        #[arg(short, long, value_name = "TAG", required = true, num_args = 1..)]
        reference: Vec<String>,

        /// JSON file with an array of {"id": ..., "tags": [...]} entries
        #[arg(long, value_name = "POOL.json")]
        pool: PathBuf,

        /// Show only the N closest tracks
        #[arg(short = 'n', long, value_name = "COUNT")]
        limit: Option<usize>,

        /// Drop tracks farther than this
        #[arg(short = 'm', long, value_name = "DISTANCE")]
        max_distance: Option<f32>,

        /// Filter anti-influences of every reference tag, not only conditional ones
        #[arg(short, long)]
        broaden: bool,

        /// Rank unscoreable tracks at this distance instead of dropping them
        #[arg(long, value_name = "DISTANCE")]
        unscoreable_as: Option<f32>,
    },

    /// Graph summary, or the details of one tag
    Info {
        /// Tag to describe
        tag: Option<String>,
    },
}
