/// Deterministic RNG helpers for per-agent random choices.
///
/// Every random decision in a run draws from a stream derived from `(seed, agent, stream)`, so a
/// run replays exactly for a given seed. Not cryptographic.

pub trait DeterministicRng {
    fn next_u64(&mut self) -> u64;

    /// Uniform value in `0..bound`; `bound` must be non-zero.
    fn below(&mut self, bound: u64) -> u64 {
        debug_assert!(bound > 0, "bound must be > 0");
        // Multiply-shift keeps the high bits, which are the well-mixed ones.
        ((u128::from(self.next_u64()) * u128::from(bound)) >> 64) as u64
    }

    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let idx = self.below(items.len() as u64) as usize;
        items.get(idx)
    }
}

/// SplitMix64 generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }
}

impl DeterministicRng for SplitMix64 {
    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E3779B97F4A7C15);
        mix64(self.state)
    }
}

pub fn mix64(mut x: u64) -> u64 {
    x ^= x >> 30;
    x = x.wrapping_mul(0xBF58476D1CE4E5B9);
    x ^= x >> 27;
    x = x.wrapping_mul(0x94D049BB133111EB);
    x ^ (x >> 31)
}

/// Seed for one agent's stream within a run.
pub fn derive_seed(run_seed: u64, agent: u64, stream: u64) -> u64 {
    mix64(run_seed ^ mix64(agent.wrapping_add(0x9E3779B97F4A7C15)) ^ mix64(stream))
}
