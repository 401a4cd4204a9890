use std::collections::{BTreeMap, BTreeSet};

use crate::{
    AgentId, Direction, Level, Location, Role, Speed, Status, Subject, Terrain,
};

/// The observable state of one agent.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub id: AgentId,
    pub role: Role,
    pub location: Location,
    pub direction: Direction,
    pub speed: Speed,
    /// True after a step, false after holding position.
    pub moving: bool,
    pub status: Status,
    /// Cells where this agent can currently be heard.
    pub noise: BTreeSet<Location>,
    /// Previously occupied cells, oldest first.
    pub path: Vec<Location>,
}

impl Body {
    pub fn subject(&self) -> Subject {
        Subject::new(self.id, self.location, self.direction)
    }

    /// The cell occupied before the last step, or the current one if the agent never moved.
    pub fn previous(&self) -> Location {
        self.path.last().copied().unwrap_or(self.location)
    }

    /// Moves one cell, recording history and facing.
    pub fn step_to(&mut self, next: Location) {
        self.direction = Direction::between(self.location, next);
        self.path.push(self.location);
        self.location = next;
        self.moving = true;
    }
}

/// Live registry of agents and food on top of a static [`Level`].
#[derive(Debug, Clone)]
pub struct World {
    level: Level,
    foods: BTreeSet<Location>,
    bodies: BTreeMap<AgentId, Body>,
}

impl World {
    pub fn new(level: Level) -> Self {
        let bodies = level
            .spawns()
            .iter()
            .map(|spawn| {
                let body = Body {
                    id: spawn.id,
                    role: spawn.role,
                    location: spawn.location,
                    direction: spawn.facing,
                    speed: Speed::Medium,
                    moving: true,
                    status: Status::default(),
                    noise: BTreeSet::new(),
                    path: Vec::new(),
                };
                (spawn.id, body)
            })
            .collect();
        Self {
            foods: level.foods().clone(),
            level,
            bodies,
        }
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn body(&self, id: AgentId) -> Option<&Body> {
        self.bodies.get(&id)
    }

    pub fn body_mut(&mut self, id: AgentId) -> Option<&mut Body> {
        self.bodies.get_mut(&id)
    }

    /// Bodies in ascending id order.
    pub fn bodies(&self) -> impl Iterator<Item = &Body> {
        self.bodies.values()
    }

    pub fn ids(&self) -> Vec<AgentId> {
        self.bodies.keys().copied().collect()
    }

    pub fn pursuer(&self) -> Option<AgentId> {
        self.bodies
            .values()
            .find(|b| b.role == Role::Pursuer)
            .map(|b| b.id)
    }

    pub fn role(&self, id: AgentId) -> Option<Role> {
        self.bodies.get(&id).map(|b| b.role)
    }

    pub fn is_pursued(&self, id: AgentId) -> bool {
        self.role(id) == Some(Role::Pursued)
    }

    pub fn is_at(&self, id: AgentId, at: Location) -> bool {
        self.bodies.get(&id).is_some_and(|b| b.location == at)
    }

    pub fn agents_at(&self, at: Location) -> impl Iterator<Item = &Body> {
        self.bodies.values().filter(move |b| b.location == at)
    }

    /// Published status of an agent; unknown ids and the pursuer report no flags.
    pub fn status(&self, id: AgentId) -> Status {
        self.bodies
            .get(&id)
            .filter(|b| b.role == Role::Pursued)
            .map(|b| b.status)
            .unwrap_or_default()
    }

    pub fn is_moving(&self, id: AgentId) -> bool {
        self.bodies.get(&id).is_some_and(|b| b.moving)
    }

    pub fn speed(&self, id: AgentId) -> Option<Speed> {
        self.bodies.get(&id).map(|b| b.speed)
    }

    pub fn has_obstacle(&self, at: Location) -> bool {
        self.level.has_obstacle(at)
    }

    pub fn has_food(&self, at: Location) -> bool {
        self.foods.contains(&at)
    }

    pub fn foods(&self) -> &BTreeSet<Location> {
        &self.foods
    }

    pub fn remove_food(&mut self, at: Location) -> bool {
        self.foods.remove(&at)
    }
}

impl Terrain for World {
    fn is_wall(&self, at: Location) -> bool {
        self.level.is_wall(at)
    }
}
