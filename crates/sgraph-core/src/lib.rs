//! **sgraph-core** — weighted grid graphs.
//!
//! This crate provides the foundational pieces of the *sgraph* workspace:
//!
//! - [`GridGraph`]: an undirected graph whose edges only join 4-neighbours
//!   of a `rows x columns` grid, with strictly positive weights
//! - [`ComponentScanner`]: breadth-first reachability and the component
//!   count built on it
//! - [`format`]: the plain-text file format ([`load`], [`save`])
//! - [`Range`], [`GridShape`], [`Direction`] and the shared [`GraphError`]

pub mod bfs;
pub mod error;
pub mod format;
pub mod geom;
pub mod graph;
pub mod range;
pub mod traits;

pub use bfs::ComponentScanner;
pub use error::{GraphError, Result};
pub use format::{load, save};
pub use geom::{Direction, GridShape};
pub use graph::{Connection, Edge, GridGraph};
pub use range::Range;
pub use traits::{Pather, WeightedPather};
