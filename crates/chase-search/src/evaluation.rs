/// How a best-first frontier scores a node from its path cost `g` and heuristic `h`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluator {
    /// `g + h`
    AStar,
    /// `h`
    Greedy,
}

impl Evaluator {
    pub fn score(self, g: u32, h: f64) -> f64 {
        match self {
            Evaluator::AStar => f64::from(g) + h,
            Evaluator::Greedy => h,
        }
    }
}
