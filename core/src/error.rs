use thiserror::Error;

/// Failures raised while loading descriptors or building the graph.
///
/// Lookups never fail with this type: unknown, excluded and disconnected tags are
/// reported through [`crate::Unreachable`].
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("cannot read descriptor file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid descriptor document: {0}")]
    Descriptor(#[from] serde_json::Error),

    #[error("weight '{key}' is out of range (got {value})")]
    InvalidWeight { key: &'static str, value: i32 },

    #[error("substitution cycle: {}", chain.join(" -> "))]
    SubstitutionCycle { chain: Vec<String> },
}
