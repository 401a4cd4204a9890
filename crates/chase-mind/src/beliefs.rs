use std::collections::{BTreeMap, BTreeSet};

use chase_core::{AgentId, Level, Location, Room, RoomId, Subject};

use crate::{AudioPercept, Percept, VisionPercept};

/// An agent's model of the world, including nested models of what other agents believe.
#[derive(Debug, Clone, Default)]
pub struct Beliefs {
    /// Last known state of every agent ever seen.
    pub agents: BTreeMap<AgentId, Subject>,
    pub obstacles: BTreeSet<Location>,
    pub foods: BTreeSet<Location>,
    /// Rooms that still have unexplored tiles.
    pub rooms: BTreeMap<RoomId, Room>,
    /// Most recent vision.
    pub sees: VisionPercept,
    /// Most recent hearing.
    pub hears: AudioPercept,
    /// Modeled beliefs of other agents.
    pub tom: BTreeMap<AgentId, Beliefs>,
}

impl Beliefs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Beliefs that start with every room unexplored.
    pub fn with_rooms(level: &Level) -> Self {
        Self {
            rooms: level.rooms().clone(),
            ..Self::default()
        }
    }

    pub fn revise(&mut self, percept: Percept) {
        match percept {
            Percept::Vision(vision) => self.revise_vision(vision),
            Percept::Audio(audio) => self.revise_audio(audio),
        }
    }

    fn revise_vision(&mut self, vision: VisionPercept) {
        for (&id, &subject) in &vision.agents {
            self.agents.insert(id, subject);
        }
        self.obstacles.extend(vision.obstacles.iter().copied());
        self.foods.extend(vision.foods.iter().copied());
        for room in self.rooms.values_mut() {
            room.explore(&vision.locations);
        }
        self.rooms.retain(|_, room| !room.is_explored());
        self.sees = vision;
    }

    fn revise_audio(&mut self, audio: AudioPercept) {
        self.hears = audio;
    }

    /// Starts exploring every room of the level again.
    pub fn refill_rooms(&mut self, level: &Level) {
        self.rooms = level.rooms().clone();
    }

    /// Puts one room back, fully unexplored.
    pub fn restore_room(&mut self, room: &Room) {
        let mut room = room.clone();
        room.reset();
        self.rooms.insert(room.id, room);
    }

    pub fn sees_agent(&self, id: AgentId) -> bool {
        self.sees.agents.contains_key(&id)
    }

    pub fn hears_agent(&self, id: AgentId) -> bool {
        self.hears.agents.contains_key(&id)
    }

    pub fn sees_anyone(&self) -> bool {
        !self.sees.agents.is_empty()
    }

    pub fn hears_anyone(&self) -> bool {
        !self.hears.agents.is_empty()
    }

    pub fn location_of(&self, id: AgentId) -> Option<Location> {
        self.agents.get(&id).map(|s| s.location)
    }

    pub fn nested(&self, id: AgentId) -> Option<&Beliefs> {
        self.tom.get(&id)
    }

    /// Whether, as far as we can tell, `observer` currently sees `target`.
    pub fn believes_sees(&self, observer: AgentId, target: AgentId) -> bool {
        self.nested(observer).is_some_and(|b| b.sees_agent(target))
    }

    /// Whether, as far as we can tell, `observer` currently hears `target`.
    pub fn believes_hears(&self, observer: AgentId, target: AgentId) -> bool {
        self.nested(observer).is_some_and(|b| b.hears_agent(target))
    }

    /// Heard and seen agents merged, heard first; a seen entry replaces the heard one in place.
    pub fn perceived(&self) -> Vec<Subject> {
        let mut merged: Vec<Subject> = self.hears.agents.values().copied().collect();
        for subject in self.sees.agents.values() {
            match merged.iter_mut().find(|s| s.id == subject.id) {
                Some(slot) => *slot = *subject,
                None => merged.push(*subject),
            }
        }
        merged
    }

    /// Deepest level of nested beliefs below this one.
    pub fn nesting(&self) -> usize {
        self.tom
            .values()
            .map(|b| 1 + b.nesting())
            .max()
            .unwrap_or(0)
    }
}
