#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::Location;

/// Room identifier: the lowercase layout letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RoomId(pub char);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named region of floor tiles.
///
/// `tiles` is the fixed membership; `unexplored` shrinks as an observer sees tiles and is what a
/// belief store tracks. Entrances are tiles bordering walkable cells outside the room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: RoomId,
    tiles: BTreeSet<Location>,
    unexplored: BTreeSet<Location>,
    entrances: BTreeSet<Location>,
}

impl Room {
    pub fn new(id: RoomId, tiles: BTreeSet<Location>, entrances: BTreeSet<Location>) -> Self {
        Self {
            id,
            unexplored: tiles.clone(),
            tiles,
            entrances,
        }
    }

    pub fn contains(&self, at: Location) -> bool {
        self.tiles.contains(&at)
    }

    pub fn is_entrance(&self, at: Location) -> bool {
        self.entrances.contains(&at)
    }

    pub fn tiles(&self) -> &BTreeSet<Location> {
        &self.tiles
    }

    pub fn unexplored(&self) -> &BTreeSet<Location> {
        &self.unexplored
    }

    pub fn entrances(&self) -> &BTreeSet<Location> {
        &self.entrances
    }

    pub fn is_explored(&self) -> bool {
        self.unexplored.is_empty()
    }

    /// Marks every seen tile of this room as explored.
    pub fn explore<'a>(&mut self, seen: impl IntoIterator<Item = &'a Location>) {
        for at in seen {
            self.unexplored.remove(at);
        }
    }

    /// Forgets all exploration progress.
    pub fn reset(&mut self) {
        self.unexplored = self.tiles.clone();
    }

    pub fn nearest_entrance(&self, from: Location) -> Option<Location> {
        first_by(&self.entrances, |at| at.manhattan(from), |d, best| d < best)
    }

    /// Manhattan distance from `from` to this room's nearest entrance.
    pub fn distance_to(&self, from: Location) -> Option<u32> {
        self.nearest_entrance(from).map(|at| at.manhattan(from))
    }

    pub fn nearest_unexplored(&self, from: Location) -> Option<Location> {
        first_by(&self.unexplored, |at| at.manhattan(from), |d, best| d < best)
    }

    pub fn farthest_unexplored(&self, from: Location) -> Option<Location> {
        first_by(&self.unexplored, |at| at.manhattan(from), |d, best| d > best)
    }
}

fn first_by(
    cells: &BTreeSet<Location>,
    key: impl Fn(Location) -> u32,
    better: impl Fn(u32, u32) -> bool,
) -> Option<Location> {
    let mut best: Option<(Location, u32)> = None;
    for &at in cells {
        let k = key(at);
        if best.map_or(true, |(_, bk)| better(k, bk)) {
            best = Some((at, k));
        }
    }
    best.map(|(at, _)| at)
}

/// The room whose nearest entrance is closest to `from`; ties keep the smaller room id.
pub fn nearest_room(rooms: &BTreeMap<RoomId, Room>, from: Location) -> Option<&Room> {
    let mut best: Option<(&Room, u32)> = None;
    for room in rooms.values() {
        let Some(d) = room.distance_to(from) else {
            continue;
        };
        if best.map_or(true, |(_, bd)| d < bd) {
            best = Some((room, d));
        }
    }
    best.map(|(room, _)| room)
}
