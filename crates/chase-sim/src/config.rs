//! Simulation configuration, loaded from YAML.

use std::path::Path;

use chase_core::Pace;
use chase_mind::{MindConfig, Timers};
use chase_search::SearchConfig;
use serde::{Deserialize, Serialize};

use crate::{Result, SimError};

/// Top-level configuration. Every field is optional in the YAML file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Global speed scalar; larger runs every timer faster.
    #[serde(default = "default_simulation_speed")]
    pub simulation_speed: f64,

    /// Scheduling ticks per real second.
    #[serde(default = "default_ticks_per_second")]
    pub ticks_per_second: u32,

    #[serde(default)]
    pub seed: u64,

    /// Headless runs stop with a timeout after this many ticks.
    #[serde(default = "default_max_ticks")]
    pub max_ticks: u64,

    #[serde(default)]
    pub timers: TimerSection,

    #[serde(default)]
    pub mind: MindSection,

    #[serde(default)]
    pub search: SearchSection,
}

/// Intention countdowns, in seconds at simulation speed 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerSection {
    #[serde(default = "default_eat")]
    pub eat: f64,
    #[serde(default = "default_wait")]
    pub wait: f64,
    #[serde(default = "default_recover")]
    pub recover: f64,
    #[serde(default = "default_ambush")]
    pub ambush: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MindSection {
    #[serde(default = "default_tom_depth")]
    pub tom_depth: u32,
    #[serde(default = "default_flee_distance")]
    pub flee_distance: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchSection {
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
}

fn default_simulation_speed() -> f64 {
    10.0
}
fn default_ticks_per_second() -> u32 {
    60
}
fn default_max_ticks() -> u64 {
    100_000
}
fn default_eat() -> f64 {
    Timers::default().eat
}
fn default_wait() -> f64 {
    Timers::default().wait
}
fn default_recover() -> f64 {
    Timers::default().recover
}
fn default_ambush() -> f64 {
    Timers::default().ambush
}
fn default_tom_depth() -> u32 {
    MindConfig::default().tom_depth
}
fn default_flee_distance() -> u32 {
    MindConfig::default().flee_distance
}
fn default_max_iterations() -> usize {
    SearchConfig::default().max_iterations
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            simulation_speed: default_simulation_speed(),
            ticks_per_second: default_ticks_per_second(),
            seed: 0,
            max_ticks: default_max_ticks(),
            timers: TimerSection::default(),
            mind: MindSection::default(),
            search: SearchSection::default(),
        }
    }
}

impl Default for TimerSection {
    fn default() -> Self {
        Self {
            eat: default_eat(),
            wait: default_wait(),
            recover: default_recover(),
            ambush: default_ambush(),
        }
    }
}

impl Default for MindSection {
    fn default() -> Self {
        Self {
            tom_depth: default_tom_depth(),
            flee_distance: default_flee_distance(),
        }
    }
}

impl Default for SearchSection {
    fn default() -> Self {
        Self {
            max_iterations: default_max_iterations(),
        }
    }
}

impl SimConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| SimError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.simulation_speed.is_finite() && self.simulation_speed > 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "simulation_speed must be positive, got {}",
                self.simulation_speed
            )));
        }
        if self.ticks_per_second == 0 {
            return Err(SimError::InvalidConfig(
                "ticks_per_second must be at least 1".to_string(),
            ));
        }
        let timers = [
            self.timers.eat,
            self.timers.wait,
            self.timers.recover,
            self.timers.ambush,
        ];
        if timers.iter().any(|t| !t.is_finite() || *t < 0.0) {
            return Err(SimError::InvalidConfig(
                "timers must be finite and non-negative".to_string(),
            ));
        }
        Ok(())
    }

    pub fn pace(&self) -> Pace {
        Pace {
            ticks_per_second: self.ticks_per_second,
            simulation_speed: self.simulation_speed,
        }
    }

    pub fn mind(&self) -> MindConfig {
        MindConfig {
            tom_depth: self.mind.tom_depth,
            flee_distance: self.mind.flee_distance,
            timers: Timers {
                eat: self.timers.eat,
                wait: self.timers.wait,
                recover: self.timers.recover,
                ambush: self.timers.ambush,
            },
            search: SearchConfig {
                max_iterations: self.search.max_iterations,
            },
        }
    }
}
