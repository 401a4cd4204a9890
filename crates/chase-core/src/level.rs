use std::collections::{BTreeMap, BTreeSet};

use crate::{AgentId, Direction, LevelError, Location, Role, Room, RoomId};

/// Anything that can answer "is this cell a wall?". Cells outside the grid are walls.
pub trait Terrain {
    fn is_wall(&self, at: Location) -> bool;
}

/// Where and how an agent enters the level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spawn {
    pub id: AgentId,
    pub role: Role,
    pub location: Location,
    pub facing: Direction,
}

/// The static part of a level: geometry, rooms, initial objects and spawns.
#[derive(Debug, Clone)]
pub struct Level {
    rows: i32,
    cols: i32,
    walls: BTreeSet<Location>,
    pits: BTreeSet<Location>,
    obstacles: BTreeSet<Location>,
    foods: BTreeSet<Location>,
    rooms: BTreeMap<RoomId, Room>,
    spawns: Vec<Spawn>,
    rendezvous: Option<Location>,
}

impl Level {
    /// Parses a character layout.
    ///
    /// `+` wall, `-` pit, `&` obstacle, `0` pursuer, `1`-`9` pursued, `a`-`z` room tile,
    /// `A`-`Z` room tile with food on it; any other glyph is plain floor. Blank lines are skipped.
    pub fn parse(layout: &str) -> Result<Self, LevelError> {
        let lines: Vec<&str> = layout
            .lines()
            .map(|l| l.trim_end_matches('\r'))
            .filter(|l| !l.is_empty())
            .collect();
        let Some(first) = lines.first() else {
            return Err(LevelError::Empty);
        };
        let width = first.chars().count();

        let mut walls = BTreeSet::new();
        let mut pits = BTreeSet::new();
        let mut obstacles = BTreeSet::new();
        let mut foods = BTreeSet::new();
        let mut room_tiles: BTreeMap<RoomId, BTreeSet<Location>> = BTreeMap::new();
        let mut spawns: Vec<Spawn> = Vec::new();

        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(LevelError::Ragged {
                    row,
                    expected: width,
                    found,
                });
            }
            for (col, glyph) in line.chars().enumerate() {
                let at = Location::new(row as i32, col as i32);
                match glyph {
                    '+' => {
                        walls.insert(at);
                    }
                    '-' => {
                        pits.insert(at);
                    }
                    '&' => {
                        obstacles.insert(at);
                    }
                    '0'..='9' => {
                        let (Some(id), Some(role)) =
                            (AgentId::from_glyph(glyph), Role::for_glyph(glyph))
                        else {
                            continue;
                        };
                        if let Some(prev) = spawns.iter().find(|s| s.id == id) {
                            return Err(LevelError::DuplicateAgent {
                                id,
                                first: prev.location,
                                second: at,
                            });
                        }
                        spawns.push(Spawn {
                            id,
                            role,
                            location: at,
                            facing: Direction::Idle,
                        });
                    }
                    c if c.is_ascii_alphabetic() => {
                        let id = RoomId(c.to_ascii_lowercase());
                        room_tiles.entry(id).or_default().insert(at);
                        if c.is_ascii_uppercase() {
                            foods.insert(at);
                        }
                    }
                    _ => {}
                }
            }
        }

        let rendezvous = spawns
            .iter()
            .find(|s| s.role == Role::Pursued)
            .map(|s| s.location);

        let mut level = Self {
            rows: lines.len() as i32,
            cols: width as i32,
            walls,
            pits,
            obstacles,
            foods,
            rooms: BTreeMap::new(),
            spawns,
            rendezvous,
        };
        level.rooms = room_tiles
            .into_iter()
            .map(|(id, tiles)| {
                let entrances = level.entrances_of(&tiles);
                (id, Room::new(id, tiles, entrances))
            })
            .collect();
        Ok(level)
    }

    fn entrances_of(&self, tiles: &BTreeSet<Location>) -> BTreeSet<Location> {
        tiles
            .iter()
            .copied()
            .filter(|&tile| {
                tile.neighbors().iter().any(|&n| {
                    !self.is_wall(n) && !self.obstacles.contains(&n) && !tiles.contains(&n)
                })
            })
            .collect()
    }

    /// Sets the initial facing of a spawn. Unknown ids are ignored.
    pub fn with_facing(mut self, id: AgentId, facing: Direction) -> Self {
        if let Some(spawn) = self.spawns.iter_mut().find(|s| s.id == id) {
            spawn.facing = facing;
        }
        self
    }

    /// Checks the level can host a game: one pursuer and at least one pursued agent.
    pub fn validate(&self) -> Result<(), LevelError> {
        if self.pursuer().is_none() {
            return Err(LevelError::MissingPursuer);
        }
        if !self.spawns.iter().any(|s| s.role == Role::Pursued) {
            return Err(LevelError::MissingPursued);
        }
        Ok(())
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    pub fn in_bounds(&self, at: Location) -> bool {
        at.row >= 0 && at.col >= 0 && at.row < self.rows && at.col < self.cols
    }

    pub fn is_pit(&self, at: Location) -> bool {
        self.pits.contains(&at)
    }

    pub fn has_obstacle(&self, at: Location) -> bool {
        self.obstacles.contains(&at)
    }

    pub fn walls(&self) -> &BTreeSet<Location> {
        &self.walls
    }

    pub fn obstacles(&self) -> &BTreeSet<Location> {
        &self.obstacles
    }

    /// Food placed by the layout. The live set is owned by [`crate::World`].
    pub fn foods(&self) -> &BTreeSet<Location> {
        &self.foods
    }

    pub fn rooms(&self) -> &BTreeMap<RoomId, Room> {
        &self.rooms
    }

    pub fn room(&self, id: RoomId) -> Result<&Room, LevelError> {
        self.rooms.get(&id).ok_or(LevelError::UnknownRoom(id))
    }

    /// The room a cell belongs to, if any.
    pub fn room_at(&self, at: Location) -> Option<&Room> {
        self.rooms.values().find(|room| room.contains(at))
    }

    pub fn in_room(&self, id: RoomId, at: Location) -> bool {
        self.rooms.get(&id).is_some_and(|room| room.contains(at))
    }

    pub fn in_any_room(&self, at: Location) -> bool {
        self.room_at(at).is_some()
    }

    pub fn spawns(&self) -> &[Spawn] {
        &self.spawns
    }

    pub fn pursuer(&self) -> Option<&Spawn> {
        self.spawns.iter().find(|s| s.role == Role::Pursuer)
    }

    /// Gathering point for regrouping: the first pursued spawn in reading order.
    pub fn rendezvous(&self) -> Option<Location> {
        self.rendezvous
    }
}

impl Terrain for Level {
    fn is_wall(&self, at: Location) -> bool {
        !self.in_bounds(at) || self.walls.contains(&at)
    }
}
