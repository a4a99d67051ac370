/// Minimal traversal interface: node count and neighbour enumeration.
pub trait Pather {
    /// Number of addressable nodes; valid indices are `0..node_count()`.
    fn node_count(&self) -> usize;

    /// Append the neighbours of `node` into `buf`. The caller clears `buf`
    /// before calling.
    fn neighbors(&self, node: usize, buf: &mut Vec<usize>);
}

/// Pather with weighted edges.
pub trait WeightedPather: Pather {
    /// Weight of the edge `from`-`to`. Must be > 0 for every pair reported
    /// by [`Pather::neighbors`].
    fn cost(&self, from: usize, to: usize) -> f64;
}
