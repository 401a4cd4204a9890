use std::collections::{BTreeSet, VecDeque};

use chase_core::Location;

/// Ordered cells to walk, front first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Route {
    steps: VecDeque<Location>,
}

impl Route {
    pub fn new() -> Self {
        Self::default()
    }

    /// A one-step route that keeps the agent where it is.
    pub fn hold(at: Location) -> Self {
        Self {
            steps: VecDeque::from([at]),
        }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn front(&self) -> Option<Location> {
        self.steps.front().copied()
    }

    pub fn last(&self) -> Option<Location> {
        self.steps.back().copied()
    }

    pub fn pop_front(&mut self) -> Option<Location> {
        self.steps.pop_front()
    }

    pub fn push(&mut self, at: Location) {
        self.steps.push_back(at);
    }

    /// Appends `other` after the current last step.
    pub fn extend(&mut self, other: Route) {
        self.steps.extend(other.steps);
    }

    pub fn contains(&self, at: Location) -> bool {
        self.steps.contains(&at)
    }

    pub fn iter(&self) -> impl Iterator<Item = Location> + '_ {
        self.steps.iter().copied()
    }

    /// Keeps the longest prefix whose cells satisfy `keep`.
    pub fn truncate_at(&mut self, mut keep: impl FnMut(Location) -> bool) {
        let cut = self
            .steps
            .iter()
            .position(|&at| !keep(at))
            .unwrap_or(self.steps.len());
        self.steps.truncate(cut);
    }
}

impl FromIterator<Location> for Route {
    fn from_iter<I: IntoIterator<Item = Location>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().collect(),
        }
    }
}

/// Cells reached by a sound at its propagation depth.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Footprint {
    cells: BTreeSet<Location>,
}

impl Footprint {
    pub fn contains(&self, at: Location) -> bool {
        self.cells.contains(&at)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &BTreeSet<Location> {
        &self.cells
    }

    pub fn into_cells(self) -> BTreeSet<Location> {
        self.cells
    }

    /// The footprint without one cell, typically the emitter's own.
    pub fn without(mut self, at: Location) -> Self {
        self.cells.remove(&at);
        self
    }
}

impl FromIterator<Location> for Footprint {
    fn from_iter<I: IntoIterator<Item = Location>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}
