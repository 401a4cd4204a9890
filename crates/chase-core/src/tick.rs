use crate::{rng, AgentId, Speed, SplitMix64};

/// Converts simulated durations into scheduling ticks.
///
/// Durations are expressed the way the game tunes them: a movement interval of
/// `exec_time / simulation_speed` seconds and countdowns of `scale / simulation_speed` seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pace {
    pub ticks_per_second: u32,
    pub simulation_speed: f64,
}

impl Default for Pace {
    fn default() -> Self {
        Self {
            ticks_per_second: 60,
            simulation_speed: 10.0,
        }
    }
}

impl Pace {
    /// Whole ticks covering `units / simulation_speed` seconds, never less than one.
    pub fn scaled_ticks(&self, units: f64) -> u64 {
        let speed = self.simulation_speed.max(f64::MIN_POSITIVE);
        let ticks = (units * f64::from(self.ticks_per_second.max(1)) / speed).ceil();
        if !ticks.is_finite() {
            u64::MAX
        } else if ticks < 1.0 {
            1
        } else {
            ticks as u64
        }
    }

    /// Ticks between two moves at `speed`.
    pub fn move_interval(&self, speed: Speed) -> u64 {
        self.scaled_ticks(f64::from(speed.exec_time()))
    }

    /// Ticks for a countdown tuned as `scale` at unit simulation speed.
    pub fn countdown(&self, scale: f64) -> u64 {
        self.scaled_ticks(scale)
    }

    pub fn tick_seconds(&self) -> f64 {
        1.0 / f64::from(self.ticks_per_second.max(1))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickContext {
    pub tick: u64,
    pub seed: u64,
    pub pace: Pace,
}

impl TickContext {
    pub fn new(tick: u64, seed: u64, pace: Pace) -> Self {
        Self { tick, seed, pace }
    }

    /// RNG for one agent on this tick. `stream` separates independent decisions.
    pub fn rng_for_agent(&self, agent: AgentId, stream: u64) -> SplitMix64 {
        let seed = rng::derive_seed(self.seed ^ rng::mix64(self.tick), agent.stable_id(), stream);
        SplitMix64::new(seed)
    }
}
