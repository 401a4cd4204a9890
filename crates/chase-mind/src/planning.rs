use std::collections::BTreeSet;

use chase_core::{Location, Role, RoomId, SplitMix64, Subject, World};
use chase_search::{Route, RouteKind, RouteQuery, Searcher};

use crate::obstacles::dynamic_obstacles;
use crate::{Beliefs, Intention, IntentionKind, MindConfig, Result};

/// Everything a plan procedure may consult.
pub struct Planning<'a> {
    pub me: Subject,
    pub role: Role,
    pub intention: &'a Intention,
    pub beliefs: &'a Beliefs,
    pub world: &'a World,
    /// Cells walked so far, oldest first.
    pub history: &'a [Location],
    pub config: &'a MindConfig,
    pub rng: SplitMix64,
}

impl Planning<'_> {
    pub fn searcher(&self) -> Searcher {
        Searcher::with_config(self.config.search)
    }

    /// Believed static obstacles plus the agents currently worth routing around.
    pub fn blocked(&self) -> BTreeSet<Location> {
        let mut blocked = self.beliefs.obstacles.clone();
        blocked.extend(dynamic_obstacles(&self.me, self.role, self.beliefs, self.world));
        blocked
    }

    pub fn search(&self, from: Location, kind: RouteKind) -> Route {
        let query = RouteQuery::new(from, kind).with_obstacles(self.blocked());
        self.searcher().route(self.world, &query)
    }

    pub fn path(&self, from: Location, dest: Location) -> Route {
        self.search(from, RouteKind::Path { dest })
    }

    /// Route to the farthest tile of `room` still believed unexplored. Empty once the room is no
    /// longer tracked.
    pub fn explore(&self, from: Location, room: RoomId) -> Route {
        match self
            .beliefs
            .rooms
            .get(&room)
            .and_then(|r| r.farthest_unexplored(from))
        {
            Some(dest) => self.path(from, dest),
            None => Route::new(),
        }
    }
}

pub type PlanFn = fn(&mut Planning<'_>) -> Result<Route>;

pub struct PlanProcedure {
    pub kind: IntentionKind,
    pub build: PlanFn,
}

impl PlanProcedure {
    pub const fn new(kind: IntentionKind, build: PlanFn) -> Self {
        Self { kind, build }
    }
}

/// Plan procedures keyed by intention kind; the first one registered for a kind wins.
#[derive(Default)]
pub struct PlanLibrary {
    procedures: Vec<PlanProcedure>,
}

impl PlanLibrary {
    pub fn new(procedures: Vec<PlanProcedure>) -> Self {
        Self { procedures }
    }

    pub fn kinds(&self) -> impl Iterator<Item = IntentionKind> + '_ {
        self.procedures.iter().map(|p| p.kind)
    }

    /// Builds the plan for the current intention. Kinds without a procedure get an empty plan.
    pub fn plan(&self, planning: &mut Planning<'_>) -> Result<Route> {
        let kind = planning.intention.kind;
        match self.procedures.iter().find(|p| p.kind == kind) {
            Some(procedure) => (procedure.build)(planning),
            None => Ok(Route::new()),
        }
    }
}

/// The cell closest to `from`; the first in row-major order wins ties.
pub(crate) fn nearest_cell(cells: &BTreeSet<Location>, from: Location) -> Option<Location> {
    let mut best: Option<(Location, u32)> = None;
    for &at in cells {
        let d = at.manhattan(from);
        if best.map_or(true, |(_, bd)| d < bd) {
            best = Some((at, d));
        }
    }
    best.map(|(at, _)| at)
}
