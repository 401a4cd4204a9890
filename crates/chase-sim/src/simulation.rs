use chase_core::{AgentId, Level, TickContext, World};
use chase_mind::Agent;
use chase_tools::trace::tags;
use chase_tools::{TraceEvent, TraceLog, TraceSink};
use tracing::info;

use crate::{supervisor, AgentSnapshot, Outcome, Result, SimConfig};

/// A level being played out, one tick at a time.
pub struct Simulation {
    world: World,
    /// In id order; this is the order agents act in within a tick.
    agents: Vec<Agent>,
    config: SimConfig,
    tick: u64,
    outcome: Option<Outcome>,
    trace: TraceLog,
}

impl Simulation {
    pub fn new(level: Level, config: SimConfig) -> Result<Self> {
        level.validate()?;
        config.validate()?;
        let world = World::new(level);
        let mind = config.mind();
        let agents = world
            .bodies()
            .map(|body| Agent::for_role(body.id, body.role, &world, mind))
            .collect();
        Ok(Self {
            world,
            agents,
            config,
            tick: 0,
            outcome: None,
            trace: TraceLog::default(),
        })
    }

    pub fn from_layout(layout: &str, config: SimConfig) -> Result<Self> {
        Self::new(Level::parse(layout)?, config)
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.agents.iter().find(|a| a.id() == id)
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Ticks completed so far.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn trace(&self) -> &TraceLog {
        &self.trace
    }

    pub fn into_trace(self) -> TraceLog {
        self.trace
    }

    /// Advances every agent by one tick, then checks for the end of the chase. Once an outcome
    /// is reached no agent is ticked again.
    pub fn step(&mut self) -> Result<Option<Outcome>> {
        if self.outcome.is_some() {
            return Ok(self.outcome);
        }
        let ctx = TickContext::new(self.tick, self.config.seed, self.config.pace());
        for agent in &mut self.agents {
            agent.tick(&ctx, &mut self.world, &mut self.trace)?;
        }
        self.tick += 1;

        if let Some(outcome) = supervisor::judge(&self.world) {
            self.finish(ctx.tick, outcome);
        }
        Ok(self.outcome)
    }

    /// Steps until an outcome is reached or `max_ticks` run out.
    pub fn run(&mut self) -> Result<Outcome> {
        loop {
            if let Some(outcome) = self.step()? {
                return Ok(outcome);
            }
            if self.tick >= self.config.max_ticks {
                self.finish(self.tick, Outcome::Timeout);
                return Ok(Outcome::Timeout);
            }
        }
    }

    /// Ends the run without waiting for the tick limit.
    pub fn cancel(&mut self) -> Outcome {
        if self.outcome.is_none() {
            self.finish(self.tick, Outcome::Timeout);
        }
        self.outcome.unwrap_or(Outcome::Timeout)
    }

    pub fn snapshots(&self) -> Vec<AgentSnapshot> {
        self.agents
            .iter()
            .filter_map(|agent| AgentSnapshot::capture(agent, &self.world))
            .collect()
    }

    fn finish(&mut self, tick: u64, outcome: Outcome) {
        info!(tick, %outcome, "chase over");
        self.trace
            .emit(TraceEvent::new(tick, tags::OUTCOME).with_detail(outcome.to_string()));
        self.outcome = Some(outcome);
    }
}
