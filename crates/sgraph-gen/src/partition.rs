//! Random partitioning of a grid mesh into connected components.
//!
//! Generation starts from the full mesh (every grid edge present, one
//! component) and repeatedly *slices* it. A slice takes a random
//! self-avoiding walk through fully connected interior nodes, from one
//! border-like node to another, and removes the edges along one side of the
//! walk, like building a maze wall. The component count is measured after
//! every slice; a slice that would overshoot the target is rolled back.

use rand::Rng;
use sgraph_core::{Direction, Edge, GraphError, GridGraph, Range, Result};

use crate::config::GeneratorConfig;

/// Generate a `rows x columns` graph split into exactly `components`
/// connected components, with weights drawn uniformly from
/// `[min_weight, max_weight)`.
pub fn generate<R: Rng + ?Sized>(
    columns: usize,
    rows: usize,
    components: usize,
    min_weight: f64,
    max_weight: f64,
    rng: &mut R,
) -> Result<GridGraph> {
    let cfg = GeneratorConfig::new(columns, rows, components, min_weight, max_weight);
    PartitionGenerator::new(rng).generate(&cfg)
}

/// Grid graph generator driven by a caller-supplied random source.
pub struct PartitionGenerator<R> {
    pub rng: R,
}

impl<R: Rng> PartitionGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a graph as described by `cfg`.
    ///
    /// Fails with `InvalidDimension`, `InvalidComponentCount` or
    /// `InvalidRange` for bad parameters, and with `PartitionUnreachable`
    /// when the retry budget runs out.
    pub fn generate(&mut self, cfg: &GeneratorConfig) -> Result<GridGraph> {
        let mut graph = GridGraph::new(cfg.columns, cfg.rows)?;
        let target = cfg.components;
        if target == 0 || target > graph.node_count() {
            return Err(GraphError::InvalidComponentCount {
                requested: target,
                node_count: graph.node_count(),
            });
        }
        let weights = Range::weights(cfg.min_weight, cfg.max_weight)?;

        let mut best = 0;
        for round in 0..=cfg.restarts {
            graph.clear_connections();
            self.fill_mesh(&mut graph, weights)?;
            let reached = self.partition(&mut graph, target, cfg.slice_attempts)?;
            if reached == target {
                log::info!(
                    "generated {} graph with {} components ({} edges, {} restarts)",
                    graph.shape(),
                    target,
                    graph.edge_count(),
                    round
                );
                return Ok(graph);
            }
            best = best.max(reached);
            if round < cfg.restarts {
                log::warn!(
                    "stuck at {reached} of {target} components after {} slice attempts, starting over",
                    cfg.slice_attempts
                );
            }
        }

        Err(GraphError::PartitionUnreachable {
            requested: target,
            reached: best,
        })
    }

    /// Add every grid edge (right and down neighbour of each node) with a
    /// fresh random weight.
    pub fn fill_mesh(&mut self, graph: &mut GridGraph, weights: Range) -> Result<()> {
        let shape = graph.shape();
        for i in 0..graph.node_count() {
            for dir in [Direction::Right, Direction::Down] {
                if let Some(n) = shape.step(i, dir) {
                    let w = self.draw_weight(weights);
                    graph.add_connection(i, n, w)?;
                }
            }
        }
        Ok(())
    }

    /// Slice `graph` until it has `target` components or `attempts` runs
    /// out. Returns the component count reached.
    fn partition(&mut self, graph: &mut GridGraph, target: usize, attempts: usize) -> Result<usize> {
        let mut count = graph.component_count();
        let mut tries = 0;

        while count < target && tries < attempts {
            tries += 1;
            let Some(removed) = self.slice(graph) else {
                continue;
            };
            if removed.is_empty() {
                continue;
            }

            let after = graph.component_count();
            if after > target {
                log::debug!("slice overshot to {after} components, rolling back");
                for e in &removed {
                    graph.add_connection(e.a, e.b, e.weight)?;
                }
                continue;
            }
            if after != count {
                log::debug!("slice {tries}: {count} -> {after} components");
            }
            count = after;
        }

        Ok(count)
    }

    /// One slice attempt. Returns the removed edges, or `None` when the
    /// walk crossed itself and the graph was left untouched.
    pub(crate) fn slice(&mut self, graph: &mut GridGraph) -> Option<Vec<Edge>> {
        let path = self.walk(graph)?;
        let mut removed = Vec::new();
        if path.len() == 2 {
            cut_pair(graph, path[0], path[1], &mut removed);
        } else {
            cut_along(graph, &path, &mut removed);
        }
        Some(removed)
    }

    /// Random walk from a node of degree 1..=3 through degree-4 nodes,
    /// ending on the first node whose degree is not 4.
    fn walk(&mut self, graph: &GridGraph) -> Option<Vec<usize>> {
        let starts: Vec<usize> = (0..graph.node_count())
            .filter(|&i| matches!(graph.degree(i), 1..=3))
            .collect();
        if starts.is_empty() {
            return None;
        }

        let mut current = starts[self.rng.random_range(0..starts.len())];
        let mut path = vec![current];
        loop {
            let conns = graph.connections(current);
            let next = conns[self.rng.random_range(0..conns.len())].neighbor;
            if path.contains(&next) {
                log::trace!("walk crossed itself at {next}");
                return None;
            }
            path.push(next);
            current = next;
            if graph.degree(current) != 4 {
                return Some(path);
            }
        }
    }

    fn draw_weight(&mut self, weights: Range) -> f64 {
        loop {
            let w = self.rng.random_range(weights.min..weights.max);
            if w > 0.0 {
                return w;
            }
        }
    }
}

/// Cut for a two-node walk `a`-`b`.
///
/// If the two nodes only touch each other the edge between them goes.
/// Otherwise both are stripped of every other neighbour, leaving `a`-`b` as
/// a component of its own.
pub(crate) fn cut_pair(graph: &mut GridGraph, a: usize, b: usize, removed: &mut Vec<Edge>) {
    if graph.degree(a) == 1 && graph.degree(b) == 1 {
        sever(graph, a, b, removed);
        return;
    }
    for (node, partner) in [(a, b), (b, a)] {
        let others: Vec<usize> = graph
            .neighbor_indices(node)
            .filter(|&n| n != partner)
            .collect();
        for n in others {
            sever(graph, node, n, removed);
        }
    }
}

/// Wall cut alongside a walk of three or more nodes.
///
/// Each vertex loses the edge on its wall side for the step it takes part
/// in: the left edge for a vertical step, the bottom edge for a horizontal
/// one. Turn vertices lose both.
pub(crate) fn cut_along(graph: &mut GridGraph, path: &[usize], removed: &mut Vec<Edge>) {
    let shape = graph.shape();
    let Some(dirs) = path
        .windows(2)
        .map(|w| shape.direction(w[0], w[1]))
        .collect::<Option<Vec<_>>>()
    else {
        log::error!("walk contains a non-adjacent step: {path:?}");
        return;
    };
    let Some((&last_dir, _)) = dirs.split_last() else {
        return;
    };

    wall(graph, path[0], dirs[0], removed);
    for i in 1..dirs.len() {
        if dirs[i] != dirs[i - 1] {
            wall(graph, path[i], dirs[i - 1], removed);
        }
        wall(graph, path[i], dirs[i], removed);
    }
    wall(graph, path[path.len() - 1], last_dir, removed);
}

fn wall(graph: &mut GridGraph, node: usize, step: Direction, removed: &mut Vec<Edge>) {
    let side = if step.is_vertical() {
        Direction::Left
    } else {
        Direction::Down
    };
    if let Some(n) = graph.shape().step(node, side) {
        sever(graph, node, n, removed);
    }
}

fn sever(graph: &mut GridGraph, a: usize, b: usize, removed: &mut Vec<Edge>) {
    if let Some(weight) = graph.remove_connection(a, b) {
        removed.push(Edge {
            a: a.min(b),
            b: a.max(b),
            weight,
        });
    }
}
