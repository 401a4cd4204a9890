use chase_core::room::nearest_room;
use chase_core::subject::nearest;
use chase_core::Subject;

use crate::IntentionKind::{Eat, Flee, Search, Wait};
use crate::{Deliberation, Goal, GoalTable, Intention, MindError, Result, Target};

/// Agents within this Manhattan distance are too close for comfort.
pub(crate) const COMFORT_DISTANCE: u32 = 3;

pub fn table() -> GoalTable {
    GoalTable::new(vec![
        Goal::new(Flee, flee, flee_target),
        Goal::untargeted(Wait, wait),
        Goal::new(Eat, eat, |_| Ok(Intention::targeting(Eat, Target::Food))),
        Goal::new(Search, search, search_target),
    ])
}

/// Nearest agent heard or seen; a seen agent replaces its heard entry.
pub(crate) fn nearest_perceived(d: &Deliberation<'_>) -> Option<Subject> {
    let perceived = d.beliefs.perceived();
    nearest(&perceived, d.me.location).copied()
}

fn nearest_distance(d: &Deliberation<'_>) -> Option<u32> {
    nearest_perceived(d).map(|s| s.location.manhattan(d.me.location))
}

/// Waiting out a sighting ends in running; so does hearing anyone or being seen up close.
fn flee(d: &Deliberation<'_>) -> bool {
    d.is_current(Wait)
        || d.beliefs.hears_anyone()
        || (d.beliefs.sees_anyone()
            && nearest_distance(d).is_some_and(|dist| dist <= COMFORT_DISTANCE))
}

fn flee_target(d: &Deliberation<'_>) -> Result<Intention> {
    Ok(match nearest_perceived(d) {
        Some(threat) => Intention::targeting(Flee, Target::Agent(threat.id)),
        None => Intention::new(Flee),
    })
}

/// Someone is in view but still far away.
fn wait(d: &Deliberation<'_>) -> bool {
    d.beliefs.sees_anyone()
        && !d.is_current(Wait)
        && nearest_distance(d).is_some_and(|dist| dist > COMFORT_DISTANCE)
}

fn eat(d: &Deliberation<'_>) -> bool {
    !d.beliefs.sees_anyone() && !d.beliefs.sees.foods.is_empty()
}

fn search(d: &Deliberation<'_>) -> bool {
    !d.beliefs.sees_anyone() && !d.beliefs.rooms.is_empty()
}

fn search_target(d: &Deliberation<'_>) -> Result<Intention> {
    nearest_room(&d.beliefs.rooms, d.me.location)
        .map(|room| Intention::targeting(Search, Target::Room(room.id)))
        .ok_or(MindError::NoRooms)
}
