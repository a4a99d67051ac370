//! The weighted grid graph.
//!
//! [`GridGraph`] stores one adjacency list per node. Nodes are allocated once
//! at construction and never added or removed; only edges change. Every edge
//! is stored twice, once in each endpoint's list, with the same weight.

use crate::bfs::ComponentScanner;
use crate::error::{GraphError, Result};
use crate::geom::GridShape;
use crate::range::Range;
use crate::traits::{Pather, WeightedPather};

/// One half of an undirected edge, as seen from its owning node.
///
/// Identity is the neighbour index alone; the weight is payload.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Connection {
    pub neighbor: usize,
    pub weight: f64,
}

/// An undirected edge reported once, with `a < b`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub a: usize,
    pub b: usize,
    pub weight: f64,
}

// ---------------------------------------------------------------------------
// GridGraph
// ---------------------------------------------------------------------------

/// An undirected, positively weighted graph whose edges only join
/// 4-neighbours of a `rows x columns` grid.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "GraphRecord", try_from = "GraphRecord")
)]
pub struct GridGraph {
    shape: GridShape,
    adjacency: Vec<Vec<Connection>>,
}

impl GridGraph {
    /// Create a graph with `columns * rows` isolated nodes.
    pub fn new(columns: usize, rows: usize) -> Result<Self> {
        let shape = GridShape::new(columns, rows)?;
        Ok(Self {
            shape,
            adjacency: vec![Vec::new(); shape.node_count()],
        })
    }

    #[inline]
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.shape.node_count()
    }

    #[inline]
    pub fn column_count(&self) -> usize {
        self.shape.columns()
    }

    #[inline]
    pub fn row_count(&self) -> usize {
        self.shape.rows()
    }

    /// Add the edge `i`-`j` with `weight`.
    ///
    /// Re-adding an existing edge with the same weight is a no-op, which is
    /// what lets the text format list every edge from both endpoints.
    pub fn add_connection(&mut self, i: usize, j: usize, weight: f64) -> Result<()> {
        self.shape.check(i)?;
        self.shape.check(j)?;
        if !self.shape.are_adjacent(i, j) {
            return Err(GraphError::NotAdjacent { a: i, b: j });
        }
        if !(weight > 0.0 && weight.is_finite()) {
            return Err(GraphError::InvalidWeight(weight));
        }

        if let Some(existing) = self.find(i, j).map(|c| c.weight) {
            if existing == weight {
                return Ok(());
            }
            return Err(GraphError::ConflictingEdge {
                a: i,
                b: j,
                existing,
                requested: weight,
            });
        }

        self.adjacency[i].push(Connection {
            neighbor: j,
            weight,
        });
        self.adjacency[j].push(Connection {
            neighbor: i,
            weight,
        });
        Ok(())
    }

    /// Remove the edge `i`-`j` from both endpoints. No-op if it does not
    /// exist (including when either index is off the grid).
    ///
    /// Returns the removed weight.
    pub fn remove_connection(&mut self, i: usize, j: usize) -> Option<f64> {
        if !self.shape.contains(i) || !self.shape.contains(j) {
            return None;
        }
        let weight = Self::detach(&mut self.adjacency[i], j)?;
        Self::detach(&mut self.adjacency[j], i);
        Some(weight)
    }

    /// Remove every edge.
    pub fn clear_connections(&mut self) {
        for list in &mut self.adjacency {
            list.clear();
        }
    }

    /// Whether the edge `i`-`j` exists.
    #[inline]
    pub fn has_connection(&self, i: usize, j: usize) -> bool {
        self.find(i, j).is_some()
    }

    /// The connections of `i` in insertion order. Empty for an index off
    /// the grid.
    #[inline]
    pub fn connections(&self, i: usize) -> &[Connection] {
        self.adjacency.get(i).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Indices of the nodes joined to `i`, in insertion order.
    pub fn neighbor_indices(&self, i: usize) -> impl Iterator<Item = usize> + '_ {
        self.connections(i).iter().map(|c| c.neighbor)
    }

    #[inline]
    pub fn degree(&self, i: usize) -> usize {
        self.connections(i).len()
    }

    /// Weight of the edge `i`-`j`, or `0.0` when there is no such edge.
    #[inline]
    pub fn edge_weight(&self, i: usize, j: usize) -> f64 {
        self.find(i, j).map_or(0.0, |c| c.weight)
    }

    /// Every edge exactly once, ordered by its lower endpoint.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(a, list)| {
            list.iter()
                .filter(move |c| c.neighbor > a)
                .map(move |c| Edge {
                    a,
                    b: c.neighbor,
                    weight: c.weight,
                })
        })
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Number of connected components, counted with repeated
    /// breadth-first scans from the lowest unvisited node.
    pub fn component_count(&self) -> usize {
        let mut scanner = ComponentScanner::new(self);
        let mut count = 0;
        while let Some(start) = scanner.first_unvisited_node() {
            // `start` comes from the scanner's own bitmap, so it is in range.
            if scanner.run(start).is_err() {
                break;
            }
            count += 1;
        }
        count
    }

    /// Smallest and largest edge weight, or `[0, 0]` when there are no
    /// edges.
    pub fn edge_value_range(&self) -> Range {
        Range::spanning(self.edges().map(|e| e.weight)).unwrap_or_default()
    }

    fn find(&self, i: usize, j: usize) -> Option<&Connection> {
        self.connections(i).iter().find(|c| c.neighbor == j)
    }

    fn detach(list: &mut Vec<Connection>, neighbor: usize) -> Option<f64> {
        let pos = list.iter().position(|c| c.neighbor == neighbor)?;
        Some(list.remove(pos).weight)
    }
}

impl Pather for GridGraph {
    #[inline]
    fn node_count(&self) -> usize {
        GridGraph::node_count(self)
    }

    fn neighbors(&self, node: usize, buf: &mut Vec<usize>) {
        buf.extend(self.neighbor_indices(node));
    }
}

impl WeightedPather for GridGraph {
    #[inline]
    fn cost(&self, from: usize, to: usize) -> f64 {
        self.edge_weight(from, to)
    }
}

// ---------------------------------------------------------------------------
// serde support
// ---------------------------------------------------------------------------

/// Serialized form of a [`GridGraph`]: dimensions plus an edge list.
/// Deserializing re-validates every edge.
#[cfg(feature = "serde")]
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct GraphRecord {
    pub rows: usize,
    pub columns: usize,
    pub edges: Vec<Edge>,
}

#[cfg(feature = "serde")]
impl From<GridGraph> for GraphRecord {
    fn from(g: GridGraph) -> Self {
        Self {
            rows: g.row_count(),
            columns: g.column_count(),
            edges: g.edges().collect(),
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<GraphRecord> for GridGraph {
    type Error = GraphError;

    fn try_from(r: GraphRecord) -> Result<Self> {
        let mut g = GridGraph::new(r.columns, r.rows)?;
        for e in r.edges {
            g.add_connection(e.a, e.b, e.weight)?;
        }
        Ok(g)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mesh(columns: usize, rows: usize) -> GridGraph {
        let mut g = GridGraph::new(columns, rows).unwrap();
        let shape = g.shape();
        for i in 0..g.node_count() {
            if shape.column(i) + 1 < columns {
                g.add_connection(i, i + 1, 1.0).unwrap();
            }
            if shape.row(i) + 1 < rows {
                g.add_connection(i, i + columns, 1.0).unwrap();
            }
        }
        g
    }

    #[test]
    fn dimensions() {
        let g = GridGraph::new(3, 4).unwrap();
        assert_eq!(g.column_count(), 3);
        assert_eq!(g.row_count(), 4);
        assert_eq!(g.node_count(), 12);
        assert_eq!(g.edge_count(), 0);
        assert!(matches!(
            GridGraph::new(0, 4),
            Err(GraphError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn edges_are_symmetric() {
        let mut g = GridGraph::new(3, 3).unwrap();
        g.add_connection(4, 1, 0.75).unwrap();
        g.add_connection(4, 5, 1.25).unwrap();
        assert_eq!(g.edge_weight(4, 1), g.edge_weight(1, 4));
        assert_eq!(g.edge_weight(5, 4), 1.25);
        assert_eq!(g.neighbor_indices(4).collect::<Vec<_>>(), vec![1, 5]);
        assert_eq!(g.neighbor_indices(1).collect::<Vec<_>>(), vec![4]);
        assert_eq!(g.degree(4), 2);
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn readding_with_equal_weight_is_a_no_op() {
        let mut g = GridGraph::new(2, 1).unwrap();
        g.add_connection(0, 1, 2.5).unwrap();
        g.add_connection(0, 1, 2.5).unwrap();
        g.add_connection(1, 0, 2.5).unwrap();
        assert_eq!(g.degree(0), 1);
        assert_eq!(g.degree(1), 1);

        let err = g.add_connection(0, 1, 3.0).unwrap_err();
        assert!(matches!(
            err,
            GraphError::ConflictingEdge {
                a: 0,
                b: 1,
                existing,
                requested,
            } if existing == 2.5 && requested == 3.0
        ));
        assert_eq!(g.edge_weight(0, 1), 2.5);
    }

    #[test]
    fn remove_then_readd_with_new_weight() {
        let mut g = GridGraph::new(2, 1).unwrap();
        g.add_connection(0, 1, 2.5).unwrap();
        assert_eq!(g.remove_connection(1, 0), Some(2.5));
        assert!(!g.has_connection(0, 1));
        g.add_connection(0, 1, 3.0).unwrap();
        assert_eq!(g.edge_weight(1, 0), 3.0);
    }

    #[test]
    fn removing_a_missing_edge_is_a_no_op() {
        let mut g = GridGraph::new(2, 2).unwrap();
        assert_eq!(g.remove_connection(0, 1), None);
        assert_eq!(g.remove_connection(0, 99), None);
        assert_eq!(g.edge_weight(0, 1), 0.0);
    }

    #[test]
    fn rejects_invalid_edges() {
        let mut g = GridGraph::new(3, 3).unwrap();
        assert!(matches!(
            g.add_connection(0, 9, 1.0),
            Err(GraphError::OutOfRange { index: 9, node_count: 9 })
        ));
        assert!(matches!(
            g.add_connection(0, 4, 1.0),
            Err(GraphError::NotAdjacent { a: 0, b: 4 })
        ));
        // 2 and 3 differ by one index but sit on different rows.
        assert!(matches!(
            g.add_connection(2, 3, 1.0),
            Err(GraphError::NotAdjacent { .. })
        ));
        assert!(matches!(
            g.add_connection(0, 0, 1.0),
            Err(GraphError::NotAdjacent { .. })
        ));
        assert!(matches!(
            g.add_connection(0, 1, 0.0),
            Err(GraphError::InvalidWeight(_))
        ));
        assert!(matches!(
            g.add_connection(0, 1, -2.0),
            Err(GraphError::InvalidWeight(_))
        ));
        assert!(matches!(
            g.add_connection(0, 1, f64::NAN),
            Err(GraphError::InvalidWeight(_))
        ));
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn removal_keeps_insertion_order() {
        let mut g = GridGraph::new(3, 3).unwrap();
        for n in [1, 3, 5, 7] {
            g.add_connection(4, n, 1.0).unwrap();
        }
        g.remove_connection(4, 3);
        assert_eq!(g.neighbor_indices(4).collect::<Vec<_>>(), vec![1, 5, 7]);
    }

    #[test]
    fn full_mesh_is_one_component() {
        let g = mesh(4, 3);
        assert_eq!(g.component_count(), 1);
        assert_eq!(g.edge_count(), 3 * 3 + 4 * 2);
        assert_eq!(g.degree(5), 4);
        assert_eq!(g.degree(0), 2);
    }

    #[test]
    fn counts_components() {
        let mut g = GridGraph::new(3, 2).unwrap();
        assert_eq!(g.component_count(), 6);
        g.add_connection(0, 1, 1.0).unwrap();
        g.add_connection(1, 4, 1.0).unwrap();
        assert_eq!(g.component_count(), 4);
        g.add_connection(2, 5, 1.0).unwrap();
        assert_eq!(g.component_count(), 3);
    }

    #[test]
    fn edge_value_range() {
        let mut g = GridGraph::new(3, 1).unwrap();
        assert_eq!(g.edge_value_range(), Range::default());
        g.add_connection(0, 1, 0.5).unwrap();
        g.add_connection(1, 2, 4.0).unwrap();
        assert_eq!(g.edge_value_range(), Range { min: 0.5, max: 4.0 });
    }

    #[test]
    fn edges_listed_once() {
        let g = mesh(2, 2);
        let edges: Vec<_> = g.edges().map(|e| (e.a, e.b)).collect();
        assert_eq!(edges, vec![(0, 1), (0, 2), (1, 3), (2, 3)]);
    }

    #[test]
    fn out_of_range_queries_are_empty() {
        let g = mesh(2, 2);
        assert_eq!(g.degree(17), 0);
        assert_eq!(g.neighbor_indices(17).count(), 0);
        assert!(!g.has_connection(17, 0));
    }
}
