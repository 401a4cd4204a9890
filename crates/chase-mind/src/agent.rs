//! The per-agent control loop, unrolled into one resumable step per scheduling tick.

use chase_core::{AgentId, Pace, Role, Subject, TickContext, World};
use chase_search::Route;
use chase_tools::trace::tags;
use chase_tools::{TraceEvent, TraceSink};
use tracing::{debug, error};

use crate::perception::{field_of_view, hear, see};
use crate::{
    Archetype, Beliefs, Deliberation, Frame, Intention, MindConfig, MindError, Percept, Planning,
    Pursued, Pursuer, Result,
};

/// RNG stream used by plan procedures.
const PLAN_STREAM: u64 = 1;

/// Intention timer counted in ticks. A countdown that was never started is done.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Countdown {
    remaining: u64,
}

impl Countdown {
    pub fn start(&mut self, ticks: u64) {
        self.remaining = ticks;
    }

    pub fn advance(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    pub fn is_done(&self) -> bool {
        self.remaining == 0
    }

    pub fn remaining(&self) -> u64 {
        self.remaining
    }
}

/// Repeating movement timer. It becomes ready once per interval and stays ready until taken.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cooldown {
    elapsed: u64,
    ready: bool,
}

impl Cooldown {
    pub fn advance(&mut self, interval: u64) {
        self.elapsed += 1;
        if self.elapsed >= interval {
            self.elapsed = 0;
            self.ready = true;
        }
    }

    /// Consumes readiness; true when the agent may move this tick.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.ready)
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }
}

pub struct Agent {
    id: AgentId,
    archetype: Box<dyn Archetype>,
    config: MindConfig,
    beliefs: Beliefs,
    intention: Intention,
    plan: Route,
    /// Inside the execute loop of a committed plan.
    engaged: bool,
    cooldown: Cooldown,
    countdown: Countdown,
}

impl std::fmt::Debug for Agent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Agent")
            .field("id", &self.id)
            .field("role", &self.archetype.role())
            .field("intention", &self.intention)
            .field("plan", &self.plan)
            .field("engaged", &self.engaged)
            .finish_non_exhaustive()
    }
}

impl Agent {
    /// An agent that knows every room of the level and has no intention yet.
    pub fn new(
        id: AgentId,
        archetype: Box<dyn Archetype>,
        world: &World,
        config: MindConfig,
    ) -> Self {
        Self {
            id,
            archetype,
            config,
            beliefs: Beliefs::with_rooms(world.level()),
            intention: Intention::none(),
            plan: Route::new(),
            engaged: false,
            cooldown: Cooldown::default(),
            countdown: Countdown::default(),
        }
    }

    pub fn for_role(id: AgentId, role: Role, world: &World, config: MindConfig) -> Self {
        let archetype: Box<dyn Archetype> = match role {
            Role::Pursuer => Box::new(Pursuer::default()),
            Role::Pursued => Box::new(Pursued::default()),
        };
        Self::new(id, archetype, world, config)
    }

    pub fn id(&self) -> AgentId {
        self.id
    }

    pub fn role(&self) -> Role {
        self.archetype.role()
    }

    pub fn beliefs(&self) -> &Beliefs {
        &self.beliefs
    }

    pub fn intention(&self) -> &Intention {
        &self.intention
    }

    pub fn plan(&self) -> &Route {
        &self.plan
    }

    pub fn is_engaged(&self) -> bool {
        self.engaged
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    /// Runs one scheduling tick of the control loop.
    ///
    /// A fresh cycle perceives, deliberates and plans. While the intention is unfinished and the
    /// plan non-empty, each tick moves when the cooldown allows, perceives again, and then
    /// either reconsiders the intention or, failing that, repairs an unsound plan.
    pub fn tick(
        &mut self,
        ctx: &TickContext,
        world: &mut World,
        trace: &mut dyn TraceSink,
    ) -> Result<()> {
        let speed = world.speed(self.id).ok_or(MindError::Detached(self.id))?;
        self.cooldown.advance(ctx.pace.move_interval(speed));
        self.countdown.advance();

        if !self.engaged {
            self.perceive(world)?;
            self.deliberate(world, ctx.tick, trace)?;
            self.make_plan(ctx, world, trace, tags::PLAN)?;
            self.engaged = true;
        }

        let succeeded = {
            let (archetype, _, mut frame) = self.parts(world, ctx.pace);
            archetype.succeeded(&mut frame)
        };
        if succeeded || self.plan.is_empty() {
            if succeeded {
                debug!(agent = %self.id, intention = %self.intention, "intention succeeded");
                trace.emit(
                    TraceEvent::new(ctx.tick, tags::SUCCEEDED)
                        .with_agent(self.id)
                        .with_detail(self.intention.to_string()),
                );
            }
            self.engaged = false;
            return Ok(());
        }

        if self.cooldown.take() {
            self.execute(world)?;
        }

        self.perceive(world)?;

        let reconsider = {
            let (archetype, _, mut frame) = self.parts(world, ctx.pace);
            archetype.reconsider(&mut frame)?
        };
        if reconsider {
            self.deliberate(world, ctx.tick, trace)?;
            return self.make_plan(ctx, world, trace, tags::PLAN);
        }

        let sound = {
            let (archetype, plan, frame) = self.parts(world, ctx.pace);
            archetype.sound(plan, &frame)
        };
        if !sound {
            self.make_plan(ctx, world, trace, tags::REPLAN)?;
        }
        Ok(())
    }

    fn subject(&self, world: &World) -> Result<Subject> {
        world
            .body(self.id)
            .map(|b| b.subject())
            .ok_or(MindError::Detached(self.id))
    }

    /// Splits the agent into its archetype, its plan and a frame over everything else.
    fn parts<'a>(
        &'a mut self,
        world: &'a mut World,
        pace: Pace,
    ) -> (&'a dyn Archetype, &'a Route, Frame<'a>) {
        let Agent {
            id,
            archetype,
            config,
            beliefs,
            intention,
            plan,
            countdown,
            ..
        } = self;
        let frame = Frame {
            me: *id,
            beliefs,
            intention,
            countdown,
            world,
            pace,
            config,
        };
        (&**archetype, &*plan, frame)
    }

    fn perceive(&mut self, world: &World) -> Result<()> {
        let me = self.subject(world)?;
        let fov = field_of_view(world, me.direction, me.location);
        let vision = see(world, self.id, &fov);
        let audio = hear(world, self.id);
        self.beliefs.revise(Percept::Vision(vision));
        self.beliefs.revise(Percept::Audio(audio));
        self.archetype
            .revise(&me, &mut self.beliefs, world, &self.config);
        Ok(())
    }

    fn deliberate(&mut self, world: &World, tick: u64, trace: &mut dyn TraceSink) -> Result<()> {
        let d = Deliberation {
            me: self.subject(world)?,
            beliefs: &self.beliefs,
            current: &self.intention,
            world,
        };
        let next = self.archetype.goals().select(&d)?;
        if next != self.intention {
            debug!(agent = %self.id, from = %self.intention, to = %next, "intention changed");
            trace.emit(
                TraceEvent::new(tick, tags::INTENTION)
                    .with_agent(self.id)
                    .with_detail(next.to_string()),
            );
        }
        self.intention = next;
        Ok(())
    }

    fn make_plan(
        &mut self,
        ctx: &TickContext,
        world: &mut World,
        trace: &mut dyn TraceSink,
        tag: &'static str,
    ) -> Result<()> {
        let body = world.body(self.id).ok_or(MindError::Detached(self.id))?;
        let mut planning = Planning {
            me: body.subject(),
            role: self.archetype.role(),
            intention: &self.intention,
            beliefs: &self.beliefs,
            world: &*world,
            history: &body.path,
            config: &self.config,
            rng: ctx.rng_for_agent(self.id, PLAN_STREAM),
        };
        let plan = match self.archetype.plans().plan(&mut planning) {
            Ok(plan) => plan,
            Err(err) => {
                error!(agent = %self.id, intention = %self.intention, error = %err, "planning failed");
                return Err(err);
            }
        };
        debug!(agent = %self.id, intention = %self.intention, steps = plan.len(), "{tag}");
        trace.emit(
            TraceEvent::new(ctx.tick, tag)
                .with_agent(self.id)
                .with_detail(format!("{} steps={}", self.intention, plan.len())),
        );
        self.plan = plan;

        let (archetype, _, mut frame) = self.parts(world, ctx.pace);
        archetype.commit(&mut frame);
        Ok(())
    }

    /// Steps to the head of the plan. A head equal to the current cell means holding position
    /// and is kept in the plan.
    fn execute(&mut self, world: &mut World) -> Result<()> {
        let body = world.body_mut(self.id).ok_or(MindError::Detached(self.id))?;
        match self.plan.front() {
            Some(next) if next != body.location => {
                self.plan.pop_front();
                body.step_to(next);
                self.archetype.stepped(self.id, world, &self.config);
            }
            _ => body.moving = false,
        }
        Ok(())
    }
}
