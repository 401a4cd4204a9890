use std::collections::{BTreeSet, HashSet};

use chase_core::{Location, Terrain};

use crate::frontier::{BestFirst, BreadthFirst, Frontier};
use crate::node::{NodeKind, SearchNode, MOVES};
use crate::{Footprint, Route, RouteQuery};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Max number of nodes taken off the frontier before giving up.
    pub max_iterations: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
        }
    }
}

/// Runs route and sound searches over a [`Terrain`].
///
/// Nodes live in an arena and point at their parent by index. A successor is dropped when a node
/// with the same identity was already explored or is waiting on the frontier, so the first path
/// to reach a cell is the one kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct Searcher {
    config: SearchConfig,
}

struct Found {
    nodes: Vec<SearchNode>,
    leaf: usize,
    open: Vec<usize>,
    closed: Vec<usize>,
}

impl Searcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Best-first route search. Returns an empty route when no goal is reached.
    pub fn route<T>(&self, terrain: &T, query: &RouteQuery) -> Route
    where
        T: Terrain + ?Sized,
    {
        let kind = NodeKind::Route(query.kind);
        let mut frontier = BestFirst::default();
        match self.run(terrain, kind, query.start, &query.obstacles, &mut frontier) {
            Some(found) => found.route(),
            None => Route::new(),
        }
    }

    /// Breadth-first sound propagation from `origin`.
    ///
    /// The footprint is the filled area covered once the first cell `depth` steps away is
    /// reached: every explored cell plus the queued ones within `depth` of the origin, origin
    /// included. Walls stop the sound; obstacles do not.
    pub fn footprint<T>(&self, terrain: &T, origin: Location, depth: u32) -> Footprint
    where
        T: Terrain + ?Sized,
    {
        let kind = NodeKind::Sound { origin, depth };
        let mut frontier = BreadthFirst::default();
        match self.run(terrain, kind, origin, &BTreeSet::new(), &mut frontier) {
            Some(found) => found.area(origin, depth),
            None => Footprint::default(),
        }
    }

    fn run<T, F>(
        &self,
        terrain: &T,
        kind: NodeKind,
        start: Location,
        obstacles: &BTreeSet<Location>,
        frontier: &mut F,
    ) -> Option<Found>
    where
        T: Terrain + ?Sized,
        F: Frontier,
    {
        let root = kind.root(start);
        let mut nodes = vec![root];
        let mut explored = HashSet::new();
        let mut queued = HashSet::new();
        let mut closed = Vec::new();
        queued.insert(kind.key(&root));
        frontier.push(0, kind.score(&root));

        let mut iterations = 0;
        while iterations < self.config.max_iterations {
            let Some(leaf) = frontier.pop() else {
                break;
            };
            iterations += 1;

            let node = nodes[leaf];
            let key = kind.key(&node);
            queued.remove(&key);
            if kind.is_goal(&node) {
                let open = frontier.drain();
                return Some(Found {
                    nodes,
                    leaf,
                    open,
                    closed,
                });
            }
            explored.insert(key);
            closed.push(leaf);

            for direction in MOVES {
                let location = node.location.step(direction);
                if terrain.is_wall(location) || obstacles.contains(&location) {
                    continue;
                }
                let child = SearchNode {
                    parent: Some(leaf),
                    location,
                    g: node.g + 1,
                    direction,
                };
                let child_key = kind.key(&child);
                if explored.contains(&child_key) || queued.contains(&child_key) {
                    continue;
                }
                let index = nodes.len();
                nodes.push(child);
                queued.insert(child_key);
                frontier.push(index, kind.score(&child));
            }
        }

        tracing::debug!(start = %start, kind = ?kind, iterations, "no solution found");
        None
    }
}

impl Found {
    fn route(&self) -> Route {
        let mut steps = Vec::new();
        let mut current = self.leaf;
        while let Some(parent) = self.nodes[current].parent {
            steps.push(self.nodes[current].location);
            current = parent;
        }
        steps.into_iter().rev().collect()
    }

    fn area(&self, origin: Location, depth: u32) -> Footprint {
        self.closed
            .iter()
            .chain(std::iter::once(&self.leaf))
            .chain(&self.open)
            .map(|&index| self.nodes[index].location)
            .filter(|at| at.manhattan(origin) <= depth)
            .collect()
    }
}
