//! Single-source shortest paths.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use sgraph_core::{ComponentScanner, GraphError, GridGraph, Range, Result, WeightedPather};

use crate::path::NodePath;

/// Distance reported for nodes the search never reached.
pub const UNREACHABLE: f64 = f64::INFINITY;

const NO_PREVIOUS: usize = usize::MAX;

/// Frontier entry, ordered so that `BinaryHeap` (a max-heap) pops the
/// smallest distance first.
#[derive(Clone, Copy, Debug)]
struct NodeRef {
    idx: usize,
    dist: f64,
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for NodeRef {}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .dist
            .total_cmp(&self.dist)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dijkstra search from one start node.
///
/// The engine owns its distance, predecessor and settled arrays and only
/// reads the graph. Build it with [`new`](Self::new), call
/// [`run`](Self::run), then query.
pub struct ShortestPathEngine<'a, P: WeightedPather + ?Sized = GridGraph> {
    pather: &'a P,
    start: usize,
    distance: Vec<f64>,
    previous: Vec<usize>,
    settled: Vec<bool>,
    frontier: BinaryHeap<NodeRef>,
}

impl<'a, P: WeightedPather + ?Sized> ShortestPathEngine<'a, P> {
    /// Prepare a search from `start`.
    ///
    /// The frontier is seeded with exactly the nodes reachable from
    /// `start`; everything else stays [`UNREACHABLE`].
    pub fn new(pather: &'a P, start: usize) -> Result<Self> {
        let len = pather.node_count();
        if start >= len {
            return Err(GraphError::OutOfRange {
                index: start,
                node_count: len,
            });
        }

        let mut scanner = ComponentScanner::new(pather);
        scanner.run(start)?;

        let mut distance = vec![UNREACHABLE; len];
        distance[start] = 0.0;

        let mut frontier = BinaryHeap::with_capacity(scanner.discovered().len() + 1);
        frontier.push(NodeRef {
            idx: start,
            dist: 0.0,
        });
        frontier.extend(scanner.discovered().iter().map(|&idx| NodeRef {
            idx,
            dist: UNREACHABLE,
        }));

        Ok(Self {
            pather,
            start,
            distance,
            previous: vec![NO_PREVIOUS; len],
            settled: vec![false; len],
            frontier,
        })
    }

    /// Settle every reachable node, always expanding the unsettled node
    /// with the smallest known distance.
    pub fn run(&mut self) {
        let mut nbuf = Vec::with_capacity(4);

        while let Some(NodeRef { idx, dist }) = self.frontier.pop() {
            // Stale entry: settled already, or superseded by a shorter one.
            if self.settled[idx] || dist > self.distance[idx] {
                continue;
            }
            self.settled[idx] = true;

            nbuf.clear();
            self.pather.neighbors(idx, &mut nbuf);

            for &n in nbuf.iter() {
                if n >= self.settled.len() || self.settled[n] {
                    continue;
                }
                // Zero means no edge.
                let w = self.pather.cost(idx, n);
                if w <= 0.0 {
                    continue;
                }
                let tentative = dist + w;
                if tentative < self.distance[n] {
                    self.distance[n] = tentative;
                    self.previous[n] = idx;
                    self.frontier.push(NodeRef {
                        idx: n,
                        dist: tentative,
                    });
                }
            }
        }

        log::debug!(
            "shortest paths from {}: {} of {} nodes settled",
            self.start,
            self.settled.iter().filter(|&&s| s).count(),
            self.settled.len()
        );
    }

    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Shortest distance from the start to `i`, or [`UNREACHABLE`].
    #[inline]
    pub fn distance_to(&self, i: usize) -> f64 {
        self.distance.get(i).copied().unwrap_or(UNREACHABLE)
    }

    #[inline]
    pub fn is_reachable(&self, i: usize) -> bool {
        self.distance_to(i).is_finite()
    }

    /// Whether `i` has been finalized by [`run`](Self::run).
    #[inline]
    pub fn is_settled(&self, i: usize) -> bool {
        self.settled.get(i).copied().unwrap_or(false)
    }

    /// Node sequence from the start to `i`, or `None` when `i` is
    /// unreachable.
    pub fn path_to(&self, i: usize) -> Option<NodePath> {
        if !self.is_reachable(i) {
            return None;
        }
        let mut nodes = Vec::new();
        let mut ci = i;
        while ci != NO_PREVIOUS {
            nodes.push(ci);
            ci = self.previous[ci];
        }
        nodes.reverse();
        Some(NodePath::new(nodes))
    }

    /// Spread of the finite distances, or `None` if nothing beyond the
    /// start has been reached.
    pub fn value_range(&self) -> Option<Range> {
        let mut finite = self.distance.iter().copied().filter(|d| d.is_finite());
        let first = finite.next()?;
        let rest = Range::spanning(finite)?;
        Some(Range {
            min: rest.min.min(first),
            max: rest.max.max(first),
        })
    }
}
