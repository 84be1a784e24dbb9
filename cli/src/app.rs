use genregraph_core::{Descriptors, GenreGraph};
use std::{error::Error, fmt, path::PathBuf};
use tracing::debug;

const BUNDLED_DESCRIPTORS: &str = include_str!("../data/discogs.json");

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptorSource {
    Bundled,
    File(PathBuf),
}

impl fmt::Display for DescriptorSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DescriptorSource::Bundled => f.write_str("bundled discogs taxonomy"),
            DescriptorSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

pub struct GenreGraphApp {
    pub source: DescriptorSource,
}

impl GenreGraphApp {
    pub fn new(descriptors_path: Option<PathBuf>) -> Result<Self, Box<dyn Error>> {
        let source = match descriptors_path {
            Some(path) => {
                if !path.exists() {
                    return Err(format!("Descriptor file does not exist: {:?}", path).into());
                }
                DescriptorSource::File(path)
            }
            None => DescriptorSource::Bundled,
        };

        Ok(Self { source })
    }

    pub fn load_descriptors(&self) -> Result<Descriptors, Box<dyn Error>> {
        debug!(source = %self.source, "loading descriptors");
        let descriptors = match &self.source {
            DescriptorSource::Bundled => Descriptors::from_json_str(BUNDLED_DESCRIPTORS)?,
            DescriptorSource::File(path) => Descriptors::from_path(path)?,
        };
        Ok(descriptors)
    }

    pub fn load_graph(&self) -> Result<GenreGraph, Box<dyn Error>> {
        let descriptors = self.load_descriptors()?;
        Ok(GenreGraph::build(&descriptors)?)
    }
}
