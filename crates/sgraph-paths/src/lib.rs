//! Shortest paths over weighted grid graphs.
//!
//! [`ShortestPathEngine`] runs Dijkstra's algorithm from one start node over
//! any [`WeightedPather`](sgraph_core::WeightedPather), normally a
//! [`GridGraph`](sgraph_core::GridGraph):
//!
//! ```
//! use sgraph_core::GridGraph;
//! use sgraph_paths::ShortestPathEngine;
//!
//! let mut g = GridGraph::new(3, 1).unwrap();
//! g.add_connection(0, 1, 1.5).unwrap();
//! g.add_connection(1, 2, 2.0).unwrap();
//!
//! let mut sp = ShortestPathEngine::new(&g, 0).unwrap();
//! sp.run();
//! assert_eq!(sp.distance_to(2), 3.5);
//! assert_eq!(sp.path_to(2).unwrap().to_string(), "0 -> 1 -> 2");
//! ```

mod dijkstra;
mod path;

pub use dijkstra::{ShortestPathEngine, UNREACHABLE};
pub use path::NodePath;
