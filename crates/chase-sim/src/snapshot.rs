use chase_core::{AgentId, Direction, Location, Role, Speed, Status, World};
use chase_mind::Agent;
use serde::{Deserialize, Serialize};

/// Read-only view of one agent for renderers and trace files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentSnapshot {
    pub id: AgentId,
    pub role: Role,
    pub location: Location,
    pub direction: Direction,
    pub speed: Speed,
    pub moving: bool,
    pub status: Status,
    pub intention: String,
    pub plan: Vec<Location>,
    pub noise: Vec<Location>,
    /// Cells in view on the agent's last perception.
    pub visible: Vec<Location>,
    pub obstacles: Vec<Location>,
    pub foods: Vec<Location>,
}

impl AgentSnapshot {
    /// `None` when the agent has no body in `world`.
    pub fn capture(agent: &Agent, world: &World) -> Option<Self> {
        let body = world.body(agent.id())?;
        let sees = &agent.beliefs().sees;
        Some(Self {
            id: body.id,
            role: body.role,
            location: body.location,
            direction: body.direction,
            speed: body.speed,
            moving: body.moving,
            status: body.status,
            intention: agent.intention().to_string(),
            plan: agent.plan().iter().collect(),
            noise: body.noise.iter().copied().collect(),
            visible: sees.locations.iter().copied().collect(),
            obstacles: sees.obstacles.iter().copied().collect(),
            foods: sees.foods.iter().copied().collect(),
        })
    }
}
