//! The frontier containers behind each search strategy.

use std::collections::{BinaryHeap, VecDeque};

use maze_core::Point;

use crate::Algorithm;

/// Heap entry, ordered by `f` and then by position for use in `BinaryHeap`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
    pub(crate) pos: Point,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first, and among
        // equal f the smallest (row, col).
        other.f.cmp(&self.f).then_with(|| other.pos.cmp(&self.pos))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Discovered-but-not-finalized cells, ordered per strategy.
#[derive(Debug)]
pub(crate) enum Frontier {
    Heap(BinaryHeap<NodeRef>),
    Queue(VecDeque<usize>),
    Stack(Vec<usize>),
}

impl Frontier {
    pub(crate) fn for_algorithm(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::AStar | Algorithm::Dijkstra => Self::Heap(BinaryHeap::new()),
            Algorithm::Bfs => Self::Queue(VecDeque::new()),
            Algorithm::Dfs => Self::Stack(Vec::new()),
        }
    }

    /// Add a cell. `f` is only used by the heap.
    pub(crate) fn push(&mut self, idx: usize, pos: Point, f: i32) {
        match self {
            Self::Heap(h) => h.push(NodeRef { idx, f, pos }),
            Self::Queue(q) => q.push_back(idx),
            Self::Stack(s) => s.push(idx),
        }
    }

    pub(crate) fn pop(&mut self) -> Option<usize> {
        match self {
            Self::Heap(h) => h.pop().map(|n| n.idx),
            Self::Queue(q) => q.pop_front(),
            Self::Stack(s) => s.pop(),
        }
    }
}
