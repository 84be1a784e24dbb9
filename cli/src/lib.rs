pub mod app;
pub mod args;
pub mod colors;
pub mod display;
pub mod rank;

// Re-export commonly used items
pub use app::{DescriptorSource, GenreGraphApp};
pub use args::{Args, Command};
pub use display::format_distance;
pub use rank::{PoolEntry, load_pool, parse_pool, similarity_config};
