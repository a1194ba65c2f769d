//! Segmentation graph and frontier.
//!
//! Nodes are text offsets, edges are spans that a dictionary word (or an
//! unknown-span fallback) covers. Every edge points strictly forward.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

/// Adjacency lists indexed by offset, in edge discovery order.
#[derive(Debug, Clone)]
pub(crate) struct Graph {
    edges: Vec<Vec<usize>>,
}

impl Graph {
    pub(crate) fn new(text_len: usize) -> Self {
        Self {
            edges: vec![Vec::new(); text_len + 1],
        }
    }

    pub(crate) fn add_edge(&mut self, from: usize, to: usize) {
        debug_assert!(to > from, "edge {from} -> {to} does not move forward");
        self.edges[from].push(to);
    }

    /// The first path a breadth-first search from `start` finds to `goal`.
    ///
    /// Returns the offsets after `start`, ending with `goal`. Among paths with
    /// the fewest edges, the one whose edges were discovered earliest wins.
    pub(crate) fn first_path(&self, start: usize, goal: usize) -> Option<Vec<usize>> {
        if start == goal {
            return Some(Vec::new());
        }
        if start > goal || goal >= self.edges.len() {
            return None;
        }

        // Edges only point forward, so nothing past `goal` can lead back to it.
        let mut parent: Vec<Option<usize>> = vec![None; goal - start];
        let mut queue = VecDeque::from([start]);

        while let Some(vertex) = queue.pop_front() {
            for &next in &self.edges[vertex] {
                if next == goal {
                    let mut path = vec![goal];
                    let mut at = vertex;
                    while at != start {
                        path.push(at);
                        at = parent[at - start]?;
                    }
                    path.reverse();
                    return Some(path);
                }
                if next < goal && parent[next - start].is_none() {
                    parent[next - start] = Some(vertex);
                    queue.push_back(next);
                }
            }
        }

        None
    }
}

/// Offsets reachable by some discovered path, smallest first, each held at
/// most once.
#[derive(Debug, Clone)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Reverse<usize>>,
    queued: Vec<bool>,
}

impl Frontier {
    pub(crate) fn new(text_len: usize) -> Self {
        Self {
            heap: BinaryHeap::new(),
            queued: vec![false; text_len + 1],
        }
    }

    /// Insert `offset` unless it is already queued.
    pub(crate) fn push(&mut self, offset: usize) {
        if !self.queued[offset] {
            self.queued[offset] = true;
            self.heap.push(Reverse(offset));
        }
    }

    pub(crate) fn pop(&mut self) -> Option<usize> {
        let Reverse(offset) = self.heap.pop()?;
        self.queued[offset] = false;
        Some(offset)
    }

    pub(crate) fn min(&self) -> Option<usize> {
        self.heap.peek().map(|&Reverse(offset)| offset)
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(len: usize, edges: &[(usize, usize)]) -> Graph {
        let mut g = Graph::new(len);
        for &(from, to) in edges {
            g.add_edge(from, to);
        }
        g
    }

    #[test]
    fn test_single_path() {
        let g = graph(6, &[(0, 3), (3, 6)]);
        assert_eq!(g.first_path(0, 6), Some(vec![3, 6]));
    }

    #[test]
    fn test_fewest_edges_wins() {
        let g = graph(6, &[(0, 2), (0, 4), (2, 4), (4, 6), (2, 6)]);
        // 0 -> 2 -> 6 is found before 0 -> 4 -> 6 because 2 was discovered first
        assert_eq!(g.first_path(0, 6), Some(vec![2, 6]));
    }

    #[test]
    fn test_discovery_order_breaks_ties() {
        let g = graph(6, &[(0, 4), (0, 2), (2, 6), (4, 6)]);
        assert_eq!(g.first_path(0, 6), Some(vec![4, 6]));
    }

    #[test]
    fn test_shorter_path_beats_earlier_longer() {
        let g = graph(9, &[(0, 3), (3, 6), (6, 9), (0, 9)]);
        assert_eq!(g.first_path(0, 9), Some(vec![9]));
    }

    #[test]
    fn test_dead_ends_ignored() {
        let g = graph(9, &[(0, 2), (0, 3), (3, 9)]);
        assert_eq!(g.first_path(0, 9), Some(vec![3, 9]));
    }

    #[test]
    fn test_unreachable() {
        let g = graph(6, &[(0, 2)]);
        assert_eq!(g.first_path(0, 6), None);
        assert_eq!(g.first_path(4, 2), None);
        assert_eq!(g.first_path(3, 3), Some(vec![]));
    }

    #[test]
    fn test_frontier_dedup_and_order() {
        let mut f = Frontier::new(10);
        f.push(5);
        f.push(2);
        f.push(5);
        f.push(9);
        assert_eq!(f.len(), 3);
        assert_eq!(f.min(), Some(2));
        assert_eq!(f.pop(), Some(2));
        assert_eq!(f.pop(), Some(5));
        f.push(5);
        assert_eq!(f.len(), 2);
        assert_eq!(f.pop(), Some(5));
        assert_eq!(f.pop(), Some(9));
        assert_eq!(f.pop(), None);
        assert_eq!(f.min(), None);
    }
}
