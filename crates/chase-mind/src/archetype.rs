use chase_core::{AgentId, Pace, Role, Subject, World};
use chase_search::Route;

use crate::{
    Beliefs, Countdown, Deliberation, GoalTable, Intention, MindConfig, MindError, PlanLibrary,
    Result,
};

/// Mutable view of one agent's mind and the world, handed to archetype hooks.
pub struct Frame<'a> {
    pub me: AgentId,
    pub beliefs: &'a mut Beliefs,
    pub intention: &'a Intention,
    pub countdown: &'a mut Countdown,
    pub world: &'a mut World,
    pub pace: Pace,
    pub config: &'a MindConfig,
}

impl Frame<'_> {
    pub fn subject(&self) -> Option<Subject> {
        self.world.body(self.me).map(|b| b.subject())
    }

    pub fn deliberation(&self) -> Result<Deliberation<'_>> {
        let me = self.subject().ok_or(MindError::Detached(self.me))?;
        Ok(Deliberation {
            me,
            beliefs: &*self.beliefs,
            current: self.intention,
            world: &*self.world,
        })
    }

    pub fn sees_pursuer(&self) -> bool {
        self.world
            .pursuer()
            .is_some_and(|p| self.beliefs.sees_agent(p))
    }
}

/// Behaviour that differs between the pursuer and the pursued agents.
pub trait Archetype {
    fn role(&self) -> Role;

    fn goals(&self) -> &GoalTable;

    fn plans(&self) -> &PlanLibrary;

    /// Runs after the base belief revision of every perception step.
    fn revise(&self, _me: &Subject, _beliefs: &mut Beliefs, _world: &World, _config: &MindConfig) {
    }

    /// Side effects of committing to a freshly built plan: timers, speed, published status.
    fn commit(&self, frame: &mut Frame<'_>);

    /// Whether the current intention has been achieved. May update beliefs or the world.
    fn succeeded(&self, frame: &mut Frame<'_>) -> bool;

    /// Whether fresh beliefs call for picking a new intention.
    fn reconsider(&self, frame: &mut Frame<'_>) -> Result<bool>;

    /// Whether `plan` can still be followed.
    fn sound(&self, plan: &Route, frame: &Frame<'_>) -> bool;

    /// Runs after the agent stepped to a new cell.
    fn stepped(&self, _me: AgentId, _world: &mut World, _config: &MindConfig) {}
}
