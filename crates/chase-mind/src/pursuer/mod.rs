//! The pursuer: it forages for food and runs from anyone who gets close.

mod goals;
mod plans;

use chase_core::{Role, Speed};
use chase_search::Route;

use crate::IntentionKind::{Eat, Flee, None as Idle, Search, Wait};
use crate::{Archetype, Frame, GoalTable, PlanLibrary, Result};

use goals::COMFORT_DISTANCE;

pub struct Pursuer {
    goals: GoalTable,
    plans: PlanLibrary,
}

impl Default for Pursuer {
    fn default() -> Self {
        Self {
            goals: goals::table(),
            plans: plans::library(),
        }
    }
}

impl Archetype for Pursuer {
    fn role(&self) -> Role {
        Role::Pursuer
    }

    fn goals(&self) -> &GoalTable {
        &self.goals
    }

    fn plans(&self) -> &PlanLibrary {
        &self.plans
    }

    fn commit(&self, frame: &mut Frame<'_>) {
        if frame.beliefs.rooms.is_empty() {
            frame.beliefs.refill_rooms(frame.world.level());
        }
        let timers = frame.config.timers;
        let kind = frame.intention.kind;
        match kind {
            Eat => frame.countdown.start(frame.pace.countdown(timers.eat)),
            Wait => frame.countdown.start(frame.pace.countdown(timers.wait)),
            _ => {}
        }
        let speed = if kind == Flee {
            frame.beliefs.foods.clear();
            Speed::VeryFast
        } else {
            Speed::Medium
        };
        if let Some(body) = frame.world.body_mut(frame.me) {
            body.speed = speed;
        }
    }

    fn succeeded(&self, frame: &mut Frame<'_>) -> bool {
        match frame.intention.kind {
            Eat if frame.countdown.is_done() => {
                if let Some(at) = frame.subject().map(|s| s.location) {
                    frame.beliefs.foods.remove(&at);
                    frame.world.remove_food(at);
                }
                true
            }
            Wait => frame.countdown.is_done(),
            Search => frame
                .intention
                .room()
                .map_or(true, |id| !frame.beliefs.rooms.contains_key(&id)),
            _ => false,
        }
    }

    fn reconsider(&self, frame: &mut Frame<'_>) -> Result<bool> {
        let kind = frame.intention.kind;
        let perceives = frame.beliefs.sees_anyone() || frame.beliefs.hears_anyone();
        let calm = !matches!(kind, Wait | Flee);

        if kind == Flee && perceives {
            let d = frame.deliberation()?;
            let threat = goals::nearest_perceived(&d).map(|s| s.id);
            if threat != frame.intention.agent() {
                return Ok(true);
            }
        }
        if perceives && calm {
            return Ok(true);
        }
        if calm && kind != Eat && !frame.beliefs.sees.foods.is_empty() {
            return Ok(true);
        }
        if kind == Idle && frame.beliefs.rooms.is_empty() && !frame.world.foods().is_empty() {
            frame.beliefs.refill_rooms(frame.world.level());
            return Ok(true);
        }
        if kind == Wait {
            let me = frame.subject().map(|s| s.location);
            let close = me.is_some_and(|me| {
                frame
                    .beliefs
                    .sees
                    .agents
                    .values()
                    .any(|s| s.location.manhattan(me) < COMFORT_DISTANCE)
            });
            return Ok(close || frame.beliefs.hears_anyone());
        }
        Ok(false)
    }

    fn sound(&self, plan: &Route, frame: &Frame<'_>) -> bool {
        !plan.iter().any(|at| frame.beliefs.obstacles.contains(&at))
    }
}
