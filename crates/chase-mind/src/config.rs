use chase_search::SearchConfig;

/// Countdown lengths, tuned as seconds at unit simulation speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timers {
    pub eat: f64,
    pub wait: f64,
    pub recover: f64,
    pub ambush: f64,
}

impl Default for Timers {
    fn default() -> Self {
        Self {
            eat: 400.0,
            wait: 400.0,
            recover: 50.0,
            ambush: 300.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MindConfig {
    /// Nesting depth of modeled beliefs about other agents.
    pub tom_depth: u32,
    /// Manhattan distance a flee route has to reach.
    pub flee_distance: u32,
    pub timers: Timers,
    pub search: SearchConfig,
}

impl Default for MindConfig {
    fn default() -> Self {
        Self {
            tom_depth: 3,
            flee_distance: 10,
            timers: Timers::default(),
            search: SearchConfig::default(),
        }
    }
}
