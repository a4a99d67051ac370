//! Random grid graph generation: a full mesh with random weights, sliced
//! into a requested number of connected components.

pub mod config;
pub mod partition;

pub use config::GeneratorConfig;
pub use partition::{PartitionGenerator, generate};
