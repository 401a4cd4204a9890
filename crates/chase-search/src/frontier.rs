use core::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

/// Open list of arena indices.
pub(crate) trait Frontier {
    fn push(&mut self, index: usize, score: f64);
    fn pop(&mut self) -> Option<usize>;
    /// Remaining entries in the order they would be popped.
    fn drain(&mut self) -> Vec<usize>;
}

#[derive(Debug)]
struct OpenEntry {
    score: f64,
    tie: u64,
    index: usize,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the heap pops the lowest score; equal scores pop in insertion order.
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| other.tie.cmp(&self.tie))
    }
}

/// Lowest score first.
#[derive(Debug, Default)]
pub(crate) struct BestFirst {
    heap: BinaryHeap<OpenEntry>,
    next_tie: u64,
}

impl Frontier for BestFirst {
    fn push(&mut self, index: usize, score: f64) {
        let tie = self.next_tie;
        self.next_tie += 1;
        self.heap.push(OpenEntry { score, tie, index });
    }

    fn pop(&mut self) -> Option<usize> {
        self.heap.pop().map(|e| e.index)
    }

    fn drain(&mut self) -> Vec<usize> {
        let mut out = Vec::with_capacity(self.heap.len());
        while let Some(index) = self.pop() {
            out.push(index);
        }
        out
    }
}

/// First in, first out.
#[derive(Debug, Default)]
pub(crate) struct BreadthFirst {
    queue: VecDeque<usize>,
}

impl Frontier for BreadthFirst {
    fn push(&mut self, index: usize, _score: f64) {
        self.queue.push_back(index);
    }

    fn pop(&mut self) -> Option<usize> {
        self.queue.pop_front()
    }

    fn drain(&mut self) -> Vec<usize> {
        self.queue.drain(..).collect()
    }
}
