use chase_core::{AgentId, Location, Speed, Subject, World};

use crate::{Beliefs, Intention, IntentionKind, Result};

/// Read-only view used by goal predicates and intention builders.
#[derive(Clone, Copy)]
pub struct Deliberation<'a> {
    pub me: Subject,
    pub beliefs: &'a Beliefs,
    pub current: &'a Intention,
    pub world: &'a World,
}

impl<'a> Deliberation<'a> {
    pub fn pursuer(&self) -> Option<AgentId> {
        self.world.pursuer()
    }

    pub fn sees_pursuer(&self) -> bool {
        self.pursuer().is_some_and(|p| self.beliefs.sees_agent(p))
    }

    /// Where the pursuer was last seen.
    pub fn pursuer_location(&self) -> Option<Location> {
        self.pursuer().and_then(|p| self.beliefs.location_of(p))
    }

    pub fn pursuer_sees_me(&self) -> bool {
        self.pursuer()
            .is_some_and(|p| self.beliefs.believes_sees(p, self.me.id))
    }

    pub fn pursuer_hears_me(&self) -> bool {
        self.pursuer()
            .is_some_and(|p| self.beliefs.believes_hears(p, self.me.id))
    }

    pub fn pursuer_speed(&self) -> Option<Speed> {
        self.pursuer().and_then(|p| self.world.speed(p))
    }

    pub fn pursuer_at_top_speed(&self) -> bool {
        self.pursuer_speed() == Some(Speed::VeryFast)
    }

    /// Agents currently in view.
    pub fn seen(&self) -> impl Iterator<Item = &'a Subject> {
        self.beliefs.sees.agents.values()
    }

    /// Pursued agents currently in view.
    pub fn seen_peers(&self) -> impl Iterator<Item = &'a Subject> {
        let world = self.world;
        self.seen().filter(move |s| world.is_pursued(s.id))
    }

    pub fn is_current(&self, kind: IntentionKind) -> bool {
        self.current.is(kind)
    }
}

pub type Predicate = fn(&Deliberation<'_>) -> bool;
pub type Builder = fn(&Deliberation<'_>) -> Result<Intention>;

/// One entry of a priority decision list.
pub struct Goal {
    pub kind: IntentionKind,
    pub applies: Predicate,
    /// Binds the intention's target; `None` for goals without one.
    pub select: Option<Builder>,
}

impl Goal {
    pub const fn new(kind: IntentionKind, applies: Predicate, select: Builder) -> Self {
        Self {
            kind,
            applies,
            select: Some(select),
        }
    }

    pub const fn untargeted(kind: IntentionKind, applies: Predicate) -> Self {
        Self {
            kind,
            applies,
            select: None,
        }
    }

    pub fn intention(&self, d: &Deliberation<'_>) -> Result<Intention> {
        match self.select {
            Some(select) => select(d),
            None => Ok(Intention::new(self.kind)),
        }
    }
}

/// Goals in priority order. The first goal whose predicate holds is selected.
#[derive(Default)]
pub struct GoalTable {
    goals: Vec<Goal>,
}

impl GoalTable {
    pub fn new(goals: Vec<Goal>) -> Self {
        Self { goals }
    }

    pub fn kinds(&self) -> impl Iterator<Item = IntentionKind> + '_ {
        self.goals.iter().map(|g| g.kind)
    }

    /// The highest-priority applicable goal.
    pub fn applicable(&self, d: &Deliberation<'_>) -> Option<&Goal> {
        self.goals.iter().find(|g| (g.applies)(d))
    }

    /// Selects an intention, or `none` when no goal applies.
    pub fn select(&self, d: &Deliberation<'_>) -> Result<Intention> {
        match self.applicable(d) {
            Some(goal) => goal.intention(d),
            None => Ok(Intention::none()),
        }
    }
}
