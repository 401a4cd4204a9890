//! The pursued agents: they hunt the pursuer, coordinating through what they believe their peers
//! can see.

mod goals;
mod plans;

use chase_core::{AgentId, Role, Speed, Status, Subject, World};
use chase_search::{Route, Searcher};

use crate::obstacles::dynamic_obstacles;
use crate::IntentionKind::{
    self, Ambush, Assist, Capture, Flank, Halt, Recover, Regroup, Search, Track,
};
use crate::{tom, Archetype, Beliefs, Frame, GoalTable, MindConfig, PlanLibrary, Result};

/// Intentions that justify dropping whatever the agent is doing.
pub const URGENT: [IntentionKind; 6] = [Recover, Capture, Halt, Flank, Assist, Ambush];

pub struct Pursued {
    goals: GoalTable,
    plans: PlanLibrary,
}

impl Default for Pursued {
    fn default() -> Self {
        Self {
            goals: goals::table(),
            plans: plans::library(),
        }
    }
}

fn status_for(kind: IntentionKind) -> Status {
    Status {
        recovering: kind == Recover,
        urgent: matches!(kind, Assist | Flank | Track | Ambush | Capture),
        regrouping: kind == Regroup,
    }
}

impl Archetype for Pursued {
    fn role(&self) -> Role {
        Role::Pursued
    }

    fn goals(&self) -> &GoalTable {
        &self.goals
    }

    fn plans(&self) -> &PlanLibrary {
        &self.plans
    }

    fn revise(&self, me: &Subject, beliefs: &mut Beliefs, world: &World, config: &MindConfig) {
        tom::update(world, me, beliefs, config.tom_depth);
    }

    fn commit(&self, frame: &mut Frame<'_>) {
        let kind = frame.intention.kind;
        let timers = frame.config.timers;
        match kind {
            Recover => frame.countdown.start(frame.pace.countdown(timers.recover)),
            Ambush => frame.countdown.start(frame.pace.countdown(timers.ambush)),
            _ => {}
        }
        let speed = if matches!(kind, Capture | Assist | Track) {
            frame.beliefs.refill_rooms(frame.world.level());
            Speed::Fast
        } else {
            Speed::Medium
        };
        if let Some(body) = frame.world.body_mut(frame.me) {
            body.speed = speed;
            body.status = status_for(kind);
        }
    }

    fn succeeded(&self, frame: &mut Frame<'_>) -> bool {
        let sees_pursuer = frame.sees_pursuer();
        match frame.intention.kind {
            Recover => frame.countdown.is_done(),
            Halt => !sees_pursuer,
            Track | Assist => sees_pursuer,
            Flank => frame
                .intention
                .agent()
                .is_some_and(|peer| frame.beliefs.believes_sees(peer, frame.me)),
            Ambush => {
                if sees_pursuer || !frame.countdown.is_done() {
                    return false;
                }
                let level = frame.world.level();
                if let Some(room) = frame.intention.room().and_then(|id| level.rooms().get(&id)) {
                    frame.beliefs.restore_room(room);
                }
                true
            }
            Search => {
                sees_pursuer
                    || frame
                        .intention
                        .room()
                        .map_or(true, |id| !frame.beliefs.rooms.contains_key(&id))
            }
            Regroup => {
                let world = &*frame.world;
                let met = frame.beliefs.hears_anyone()
                    || frame.beliefs.sees.agents.values().any(|s| {
                        !(world.status(s.id).regrouping && !world.is_moving(s.id))
                    });
                if met {
                    frame.beliefs.refill_rooms(world.level());
                }
                met
            }
            _ => false,
        }
    }

    fn reconsider(&self, frame: &mut Frame<'_>) -> Result<bool> {
        match frame.intention.kind {
            Recover => Ok(false),
            Capture => Ok(!frame.sees_pursuer()),
            current => {
                let d = frame.deliberation()?;
                Ok(self
                    .goals
                    .applicable(&d)
                    .is_some_and(|goal| goal.kind != current && URGENT.contains(&goal.kind)))
            }
        }
    }

    fn sound(&self, plan: &Route, frame: &Frame<'_>) -> bool {
        let Some(me) = frame.subject() else {
            return false;
        };
        let beliefs = &*frame.beliefs;
        let kind = frame.intention.kind;

        if kind == Capture {
            let target = frame.intention.agent().and_then(|id| beliefs.location_of(id));
            if plan.last() != target {
                return false;
            }
        }
        if kind == Search
            && frame.world.level().in_any_room(me.location)
            && plan.iter().all(|at| beliefs.sees.locations.contains(&at))
        {
            return false;
        }
        if !matches!(kind, Track | Recover) {
            let blocking = dynamic_obstacles(&me, Role::Pursued, beliefs, frame.world);
            if plan.iter().any(|at| blocking.contains(&at)) {
                return false;
            }
        }
        !plan.iter().any(|at| beliefs.obstacles.contains(&at))
    }

    /// Stepping makes noise around the new cell; how far it carries depends on the speed.
    fn stepped(&self, me: AgentId, world: &mut World, config: &MindConfig) {
        let Some(body) = world.body(me) else {
            return;
        };
        let origin = body.location;
        let depth = body.speed.noise_depth();
        let noise = Searcher::with_config(config.search)
            .footprint(&*world, origin, depth)
            .without(origin)
            .into_cells();
        if let Some(body) = world.body_mut(me) {
            body.noise = noise;
        }
    }
}
