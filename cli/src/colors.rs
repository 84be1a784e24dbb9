use colored::*;
use genregraph_core::{EdgeKind, Level};

/// Terminal styling for CLI output.
///
/// Colors are global in `colored`; `--no-color` turns them off for the whole process.
pub struct ColorScheme;

impl ColorScheme {
    pub fn new(use_colors: bool) -> Self {
        if !use_colors {
            colored::control::set_override(false);
        }
        Self
    }

    pub fn tag(&self, text: &str) -> ColoredString {
        text.yellow()
    }

    /// Broader taxonomy levels print brighter.
    pub fn level(&self, level: Level) -> ColoredString {
        let text = format!("({})", level);
        match level {
            Level::Style => text.cyan(),
            Level::StyleCluster => text.bright_cyan(),
            Level::Supergenre => text.blue(),
            Level::SupergenreCluster | Level::SupergenreSupercluster => text.bright_blue().bold(),
        }
    }

    /// Origin links pull tags together, anti-influence pushes them apart.
    pub fn edge_kind(&self, kind: EdgeKind) -> ColoredString {
        let text = kind.as_str();
        match kind {
            EdgeKind::PrimaryOrigin | EdgeKind::SecondaryOrigin => text.green(),
            EdgeKind::AntiInfluence => text.red(),
            EdgeKind::WeakSubstitution => text.bright_magenta(),
            EdgeKind::Hierarchy | EdgeKind::Cluster | EdgeKind::InterCluster => text.magenta(),
        }
    }

    pub fn success(&self, text: &str) -> ColoredString {
        text.green()
    }

    pub fn error(&self, text: &str) -> ColoredString {
        text.red()
    }

    pub fn step_number(&self, text: &str) -> ColoredString {
        text.blue()
    }

    pub fn distance(&self, text: &str) -> ColoredString {
        text.bold()
    }

    pub fn number(&self, text: &str) -> ColoredString {
        text.green()
    }

    pub fn stats(&self, text: &str) -> ColoredString {
        text.blue()
    }
}
