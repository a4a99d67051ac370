//! Breadth-first reachability scans.

use std::collections::VecDeque;

use crate::error::{GraphError, Result};
use crate::traits::Pather;

/// Breadth-first scanner over a [`Pather`].
///
/// The visited bitmap persists across [`run`](Self::run) calls, so repeated
/// runs from [`first_unvisited_node`](Self::first_unvisited_node) walk each
/// connected component exactly once.
pub struct ComponentScanner<'a, P: Pather + ?Sized> {
    pather: &'a P,
    visited: Vec<bool>,
    discovered: Vec<usize>,
    queue: VecDeque<usize>,
    nbuf: Vec<usize>,
}

impl<'a, P: Pather + ?Sized> ComponentScanner<'a, P> {
    pub fn new(pather: &'a P) -> Self {
        Self {
            pather,
            visited: vec![false; pather.node_count()],
            discovered: Vec::new(),
            queue: VecDeque::new(),
            nbuf: Vec::with_capacity(4),
        }
    }

    /// FIFO traversal from `start`, marking every reachable node visited.
    ///
    /// Nodes already visited by an earlier run are not entered again. The
    /// discovery list is reset and then filled, in discovery order, with
    /// every newly reached node other than `start`.
    pub fn run(&mut self, start: usize) -> Result<()> {
        if start >= self.visited.len() {
            return Err(GraphError::OutOfRange {
                index: start,
                node_count: self.visited.len(),
            });
        }

        self.discovered.clear();
        self.queue.clear();
        self.visited[start] = true;
        self.queue.push_back(start);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(current) = self.queue.pop_front() {
            nbuf.clear();
            self.pather.neighbors(current, &mut nbuf);

            for &n in nbuf.iter() {
                let Some(seen) = self.visited.get_mut(n) else {
                    continue;
                };
                if *seen {
                    continue;
                }
                *seen = true;
                self.queue.push_back(n);
                self.discovered.push(n);
            }
        }

        self.nbuf = nbuf;
        Ok(())
    }

    /// Nodes reached by the last run, excluding its start node.
    #[inline]
    pub fn discovered(&self) -> &[usize] {
        &self.discovered
    }

    #[inline]
    pub fn was_visited(&self, i: usize) -> bool {
        self.visited.get(i).copied().unwrap_or(false)
    }

    pub fn has_unvisited_node(&self) -> bool {
        self.visited.iter().any(|v| !v)
    }

    /// Lowest-index node not visited by any run so far.
    pub fn first_unvisited_node(&self) -> Option<usize> {
        self.visited.iter().position(|v| !v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Undirected graph given as an explicit edge list.
    struct EdgeList {
        n: usize,
        edges: Vec<(usize, usize)>,
    }

    impl Pather for EdgeList {
        fn node_count(&self) -> usize {
            self.n
        }

        fn neighbors(&self, node: usize, buf: &mut Vec<usize>) {
            for &(a, b) in &self.edges {
                if a == node {
                    buf.push(b);
                } else if b == node {
                    buf.push(a);
                }
            }
        }
    }

    #[test]
    fn discovery_order_is_breadth_first() {
        // 0 - 1 - 3
        // |
        // 2 - 4
        let g = EdgeList {
            n: 6,
            edges: vec![(0, 1), (0, 2), (1, 3), (2, 4)],
        };
        let mut bfs = ComponentScanner::new(&g);
        bfs.run(0).unwrap();
        assert_eq!(bfs.discovered(), &[1, 2, 3, 4]);
        assert!(bfs.was_visited(0));
        assert!(bfs.was_visited(4));
        assert!(!bfs.was_visited(5));
        assert!(bfs.has_unvisited_node());
        assert_eq!(bfs.first_unvisited_node(), Some(5));
    }

    #[test]
    fn visited_state_accumulates() {
        let g = EdgeList {
            n: 4,
            edges: vec![(0, 1), (2, 3)],
        };
        let mut bfs = ComponentScanner::new(&g);
        bfs.run(2).unwrap();
        assert_eq!(bfs.discovered(), &[3]);
        assert_eq!(bfs.first_unvisited_node(), Some(0));
        bfs.run(0).unwrap();
        assert_eq!(bfs.discovered(), &[1]);
        assert!(!bfs.has_unvisited_node());
        assert_eq!(bfs.first_unvisited_node(), None);
    }

    #[test]
    fn isolated_start_discovers_nothing() {
        let g = EdgeList {
            n: 3,
            edges: vec![(1, 2)],
        };
        let mut bfs = ComponentScanner::new(&g);
        bfs.run(0).unwrap();
        assert!(bfs.discovered().is_empty());
        assert!(bfs.was_visited(0));
        assert!(!bfs.was_visited(1));
    }

    #[test]
    fn bad_start_is_rejected() {
        let g = EdgeList {
            n: 3,
            edges: Vec::new(),
        };
        let mut bfs = ComponentScanner::new(&g);
        assert!(matches!(
            bfs.run(3),
            Err(GraphError::OutOfRange { index: 3, node_count: 3 })
        ));
        assert!(!bfs.was_visited(42));
    }
}
