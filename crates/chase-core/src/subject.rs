use crate::{AgentId, Direction, Location};

/// A perceived agent: who, where, and which way it faces.
///
/// Two subjects are the same subject when their ids match, wherever they were observed.
#[derive(Debug, Clone, Copy)]
pub struct Subject {
    pub id: AgentId,
    pub location: Location,
    pub direction: Direction,
}

impl Subject {
    pub const fn new(id: AgentId, location: Location, direction: Direction) -> Self {
        Self {
            id,
            location,
            direction,
        }
    }

    /// A subject known only by id and position (e.g. heard, not seen).
    pub const fn heard(id: AgentId, location: Location) -> Self {
        Self::new(id, location, Direction::Idle)
    }
}

impl PartialEq for Subject {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Subject {}

impl std::hash::Hash for Subject {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// The subject closest to `from` by Manhattan distance; the earliest one wins ties.
pub fn nearest<'a, I>(subjects: I, from: Location) -> Option<&'a Subject>
where
    I: IntoIterator<Item = &'a Subject>,
{
    let mut best: Option<(&Subject, u32)> = None;
    for subject in subjects {
        let d = subject.location.manhattan(from);
        if best.map_or(true, |(_, bd)| d < bd) {
            best = Some((subject, d));
        }
    }
    best.map(|(s, _)| s)
}
