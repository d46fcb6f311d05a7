//! The three orderings a driver can impose on pending nodes.
//!
//! Frontiers hold [`NodeId`]s, never domain values, so no discipline here
//! ever needs `State` or `Action` to be comparable.

use std::collections::BinaryHeap;
use std::collections::VecDeque;
use std::fmt::Debug;

use crate::search::NodeId;

/// Discovery order. Backs `breadth_first`.
#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<NodeId>,
}

impl FifoFrontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn push(&mut self, node: NodeId) {
        self.queue.push_back(node);
    }

    #[inline(always)]
    pub fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop_front()
    }

    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

/// Reverse discovery order. Backs `depth_first`.
#[derive(Debug, Default)]
pub struct LifoFrontier {
    stack: Vec<NodeId>,
}

impl LifoFrontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn push(&mut self, node: NodeId) {
        self.stack.push(node);
    }

    #[inline(always)]
    pub fn pop(&mut self) -> Option<NodeId> {
        self.stack.pop()
    }

    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

/// One pending entry: the rank the driver computed, the sequence number the
/// frontier assigned on insertion, and the node they belong to.
#[derive(Debug)]
struct RankedEntry<K>
where
    K: Ord + Debug,
{
    rank: K,
    seq: u64,
    node: NodeId,
}

impl<K: Ord + Debug> PartialEq for RankedEntry<K> {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank && self.seq == other.seq
    }
}
impl<K: Ord + Debug> Eq for RankedEntry<K> {}

impl<K: Ord + Debug> Ord for RankedEntry<K> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // `BinaryHeap` is a max-heap; reversing (rank, seq) makes the
        // smallest rank win and, among equals, the earliest insertion.
        (&self.rank, self.seq).cmp(&(&other.rank, other.seq)).reverse()
    }
}
impl<K: Ord + Debug> PartialOrd for RankedEntry<K> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority order by an explicit key. Backs `uniform_cost`, `astar` and
/// `greedy_best_first`.
///
/// Ties break by insertion sequence, ascending. The sequence is assigned
/// here, on push, so a driver cannot accidentally reuse one and equal-rank
/// pops replay insertion order exactly.
#[derive(Debug)]
pub struct RankedFrontier<K>
where
    K: Ord + Debug,
{
    heap: BinaryHeap<RankedEntry<K>>,
    next_seq: u64,
}

impl<K: Ord + Debug> Default for RankedFrontier<K> {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }
}

impl<K: Ord + Debug> RankedFrontier<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, rank: K, node: NodeId) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(RankedEntry { rank, seq, node });
    }

    pub fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|e| e.node)
    }

    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(i: u32) -> NodeId {
        NodeId::new(i).unwrap()
    }

    #[test]
    fn fifo_pops_in_discovery_order() {
        let mut f = FifoFrontier::new();
        f.push(id(0));
        f.push(id(1));
        f.push(id(2));
        assert_eq!(f.pop(), Some(id(0)));
        assert_eq!(f.pop(), Some(id(1)));
        assert_eq!(f.pop(), Some(id(2)));
        assert_eq!(f.pop(), None);
    }

    #[test]
    fn lifo_pops_in_reverse_discovery_order() {
        let mut f = LifoFrontier::new();
        f.push(id(0));
        f.push(id(1));
        f.push(id(2));
        assert_eq!(f.pop(), Some(id(2)));
        assert_eq!(f.pop(), Some(id(1)));
        assert_eq!(f.pop(), Some(id(0)));
        assert_eq!(f.pop(), None);
    }

    #[test]
    fn ranked_pops_by_rank() {
        let mut f = RankedFrontier::<u32>::new();
        f.push(5, id(0));
        f.push(1, id(1));
        f.push(3, id(2));
        assert_eq!(f.pop(), Some(id(1)));
        assert_eq!(f.pop(), Some(id(2)));
        assert_eq!(f.pop(), Some(id(0)));
    }

    #[test]
    fn equal_ranks_pop_in_insertion_order() {
        let mut f = RankedFrontier::<u32>::new();
        f.push(7, id(10));
        f.push(7, id(11));
        f.push(7, id(12));
        f.push(1, id(13));
        assert_eq!(f.pop(), Some(id(13)));
        assert_eq!(f.pop(), Some(id(10)));
        assert_eq!(f.pop(), Some(id(11)));
        assert_eq!(f.pop(), Some(id(12)));
    }

    #[test]
    fn sequence_survives_interleaved_pops() {
        let mut f = RankedFrontier::<u32>::new();
        f.push(2, id(0));
        f.push(2, id(1));
        assert_eq!(f.pop(), Some(id(0)));
        f.push(2, id(2));
        // The sequence counter keeps growing across pops, so the node from
        // the earlier push still wins.
        assert_eq!(f.pop(), Some(id(1)));
        assert_eq!(f.pop(), Some(id(2)));
    }
}
