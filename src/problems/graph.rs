//! Explicit weighted digraphs.
//!
//! The smallest possible domain: vertices are states, outgoing edges are
//! actions. An action carries its target and weight, so applying and
//! costing it never re-scans the adjacency list.

use derive_more::Display;

use crate::cache::Cache;
use crate::problem::Actions;
use crate::problem::Problem;
use crate::space::Action;
use crate::space::State;

#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash)]
#[display("v{_0}")]
pub struct VertexId(pub u32);

impl State for VertexId {}

#[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
#[display("→{to} (${weight})")]
pub struct Edge {
    pub to: VertexId,
    pub weight: u32,
}

impl Action for Edge {}

#[derive(Clone, Debug, Default)]
pub struct Digraph {
    adjacency: Vec<Vec<Edge>>,
}

impl Digraph {
    #[must_use]
    pub fn with_vertices(count: u32) -> Self {
        Self {
            adjacency: vec![vec![]; count as usize],
        }
    }

    /// Adds a directed edge. Insertion order is enumeration order, and with
    /// it the drivers' tie-break order.
    pub fn edge(&mut self, from: u32, to: u32, weight: u32) {
        self.adjacency[from as usize].push(Edge {
            to: VertexId(to),
            weight,
        });
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    #[must_use]
    pub fn outgoing(&self, v: VertexId) -> &[Edge] {
        &self.adjacency[v.0 as usize]
    }
}

#[derive(Debug)]
pub struct DigraphProblem {
    graph: Digraph,
    start: VertexId,
    goal: VertexId,
    cache: Cache,
}

impl DigraphProblem {
    #[must_use]
    pub fn new(graph: Digraph, start: u32, goal: u32) -> Self {
        debug_assert!((start as usize) < graph.vertex_count());
        debug_assert!((goal as usize) < graph.vertex_count());
        Self {
            graph,
            start: VertexId(start),
            goal: VertexId(goal),
            cache: Cache::new(),
        }
    }

    #[must_use]
    pub fn goal(&self) -> VertexId {
        self.goal
    }
}

impl Problem<VertexId, Edge, u32> for DigraphProblem {
    fn initial_state(&self) -> VertexId {
        self.start
    }

    fn is_goal(&self, s: &VertexId) -> bool {
        *s == self.goal
    }

    fn actions(&self, s: &VertexId) -> Actions<Edge> {
        self.graph.outgoing(*s).iter().copied().collect()
    }

    fn transition(&self, _s: &VertexId, a: &Edge) -> VertexId {
        a.to
    }

    fn cost(&self, _s: &VertexId, a: &Edge) -> u32 {
        a.weight
    }

    fn cache(&self) -> &Cache {
        &self.cache
    }
}
