use std::collections::BTreeSet;

use chase_core::{Direction, Location};

use crate::Evaluator;

/// Base value for heuristics that maximise a distance.
pub const FAR: f64 = i32::MAX as f64;

/// Successor moves in expansion order. `Idle` is the stay move.
pub(crate) const MOVES: [Direction; 5] = [
    Direction::Idle,
    Direction::Left,
    Direction::Right,
    Direction::Up,
    Direction::Down,
];

/// What a route search is after. Each variant carries its own goal test and heuristic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RouteKind {
    /// Shortest path to `dest`.
    Path { dest: Location },
    /// Reach `dest` while keeping away from `avoid`.
    Flank { dest: Location, avoid: Location },
    /// Get at least `max_dist` (Manhattan) away from `origin`, moving away from `from`.
    Flee {
        origin: Location,
        from: Location,
        max_dist: u32,
    },
    /// Like `Flee`, but prefers moves aligned with `heading`. Nodes are told apart by their move
    /// direction as well as their cell; the start node moves along `facing`.
    Pursue {
        origin: Location,
        from: Location,
        max_dist: u32,
        heading: Direction,
        facing: Direction,
    },
}

impl RouteKind {
    pub fn evaluator(&self) -> Evaluator {
        match self {
            RouteKind::Path { .. } | RouteKind::Flank { .. } => Evaluator::AStar,
            RouteKind::Flee { .. } | RouteKind::Pursue { .. } => Evaluator::Greedy,
        }
    }
}

/// A route search request.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteQuery {
    pub start: Location,
    pub kind: RouteKind,
    /// Cells that cannot be entered besides walls.
    pub obstacles: BTreeSet<Location>,
}

impl RouteQuery {
    pub fn new(start: Location, kind: RouteKind) -> Self {
        Self {
            start,
            kind,
            obstacles: BTreeSet::new(),
        }
    }

    pub fn with_obstacles(mut self, obstacles: BTreeSet<Location>) -> Self {
        self.obstacles = obstacles;
        self
    }
}

/// Node variant driving one search run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum NodeKind {
    Route(RouteKind),
    Sound { origin: Location, depth: u32 },
}

/// Arena entry. `parent` indexes into the same arena.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SearchNode {
    pub parent: Option<usize>,
    pub location: Location,
    pub g: u32,
    pub direction: Direction,
}

/// Identity used for explored/frontier membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeKey {
    location: Location,
    direction: Option<Direction>,
}

impl NodeKind {
    pub fn root(&self, start: Location) -> SearchNode {
        let direction = match self {
            NodeKind::Route(RouteKind::Pursue { facing, .. }) => *facing,
            _ => Direction::Idle,
        };
        SearchNode {
            parent: None,
            location: start,
            g: 0,
            direction,
        }
    }

    pub fn key(&self, node: &SearchNode) -> NodeKey {
        let direction = match self {
            NodeKind::Route(RouteKind::Pursue { .. }) => Some(node.direction),
            _ => None,
        };
        NodeKey {
            location: node.location,
            direction,
        }
    }

    pub fn is_goal(&self, node: &SearchNode) -> bool {
        let at = node.location;
        match *self {
            NodeKind::Route(RouteKind::Path { dest }) | NodeKind::Route(RouteKind::Flank { dest, .. }) => {
                at == dest
            }
            NodeKind::Route(RouteKind::Flee {
                origin, max_dist, ..
            })
            | NodeKind::Route(RouteKind::Pursue {
                origin, max_dist, ..
            }) => at.manhattan(origin) >= max_dist,
            NodeKind::Sound { origin, depth } => at.manhattan(origin) == depth,
        }
    }

    pub fn heuristic(&self, node: &SearchNode) -> f64 {
        let at = node.location;
        match *self {
            NodeKind::Route(RouteKind::Path { dest }) => f64::from(at.manhattan(dest)),
            NodeKind::Route(RouteKind::Flank { dest, avoid }) => {
                100.0 - 6.0 * at.euclidean(avoid) + f64::from(at.manhattan(dest))
            }
            NodeKind::Route(RouteKind::Flee { from, .. }) => FAR - at.euclidean(from),
            NodeKind::Route(RouteKind::Pursue { from, heading, .. }) => {
                FAR - alignment(node.direction, heading) - at.euclidean(from)
            }
            NodeKind::Sound { .. } => 0.0,
        }
    }

    pub fn score(&self, node: &SearchNode) -> f64 {
        match self {
            NodeKind::Route(kind) => kind.evaluator().score(node.g, self.heuristic(node)),
            NodeKind::Sound { .. } => 0.0,
        }
    }
}

/// Reward for moving along `heading`: full when aligned, none when exactly reversed.
fn alignment(direction: Direction, heading: Direction) -> f64 {
    if direction == heading {
        10.0
    } else if direction == heading.opposite() {
        0.0
    } else {
        5.0
    }
}
