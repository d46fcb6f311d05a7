use nonmax::NonMaxU32;
use thousands::Separable;

use crate::space::Action;
use crate::space::Cost;
use crate::space::Path;
use crate::space::State;

/// A stable handle into a [`SearchTree`].
///
/// Niche-packed so `Option<(NodeId, A)>` parent links stay small.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(NonMaxU32);

impl NodeId {
    #[inline(always)]
    #[must_use]
    pub fn new(index: u32) -> Option<Self> {
        NonMaxU32::new(index).map(Self)
    }

    #[inline(always)]
    #[must_use]
    fn index(self) -> usize {
        self.0.get() as usize
    }
}

/// One node of the search forest: a state, the accumulated cost and depth
/// that reached it, and a back-reference to the parent it was generated
/// from. The path to a node is never stored; it is derived by walking
/// parents when (and only when) a goal is found.
#[derive(Debug)]
pub(crate) struct SearchNode<St, A, C>
where
    St: State,
    A: Action,
    C: Cost,
{
    pub(crate) state: St,
    pub(crate) g: C,
    pub(crate) depth: u32,
    pub(crate) parent: Option<(NodeId, A)>,
}

/// An append-only arena of search nodes.
///
/// Nodes are shared structure: one parent backs many children. Handles stay
/// valid for the life of the tree, and the tree lives exactly as long as one
/// driver invocation.
pub(crate) struct SearchTree<St, A, C>
where
    St: State,
    A: Action,
    C: Cost,
{
    nodes: Vec<SearchNode<St, A, C>>,
}

impl<St, A, C> SearchTree<St, A, C>
where
    St: State,
    A: Action,
    C: Cost,
{
    #[inline(always)]
    #[must_use]
    pub(crate) fn new() -> Self {
        Self { nodes: vec![] }
    }

    #[inline(always)]
    pub(crate) fn push(&mut self, node: SearchNode<St, A, C>) -> NodeId {
        let index = self.nodes.len();
        debug_assert!(index < u32::MAX as usize);
        self.nodes.push(node);
        NodeId::new(index as u32).unwrap()
    }

    #[inline(always)]
    #[must_use]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Reconstructs the root-to-`goal` path by walking parent handles.
    #[must_use]
    pub(crate) fn path(&self, goal: NodeId) -> Path<St, A, C> {
        let end = &self[goal];
        let mut actions = Vec::with_capacity(end.depth as usize);

        let mut at = goal;
        while let Some((parent, action)) = self[at].parent {
            actions.push(action);
            debug_assert!(parent != at);
            at = parent;
        }
        actions.reverse();

        Path {
            start: self[at].state.clone(),
            end: end.state.clone(),
            cost: end.g,
            actions,
        }
    }
}

impl<St, A, C> std::ops::Index<NodeId> for SearchTree<St, A, C>
where
    St: State,
    A: Action,
    C: Cost,
{
    type Output = SearchNode<St, A, C>;

    #[inline(always)]
    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.index()]
    }
}

impl<St, A, C> std::fmt::Debug for SearchTree<St, A, C>
where
    St: State,
    A: Action,
    C: Cost,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "SearchTree{{({} nodes)}}", self.len())
    }
}

/// An optional ceiling on one search invocation.
///
/// The only resource control there is: without one, an exhaustive driver on
/// a huge or infinite reachable set simply runs until memory does.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Limits {
    pub max_expansions: Option<usize>,
    pub max_depth: Option<u32>,
}

impl Limits {
    /// No ceiling; run to frontier exhaustion.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn expansions(self, max: usize) -> Self {
        Self {
            max_expansions: Some(max),
            ..self
        }
    }

    #[must_use]
    pub fn depth(self, max: u32) -> Self {
        Self {
            max_depth: Some(max),
            ..self
        }
    }
}

/// Counters for one search invocation.
///
/// `expanded` is the benchmark number: it increments exactly once per
/// action-enumeration call the driver makes, and nothing else — heuristics
/// in particular — can move it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Action-enumeration calls, one per accepted pop.
    pub expanded: usize,
    /// Nodes created, root included.
    pub generated: usize,
    /// Whether the run stopped on [`Limits`] rather than on a goal or an
    /// empty frontier.
    pub truncated: bool,
}

impl std::fmt::Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "expanded {}, generated {}{}",
            self.expanded.separate_with_commas(),
            self.generated.separate_with_commas(),
            if self.truncated { " (truncated)" } else { "" },
        )
    }
}

/// What one driver invocation produced.
///
/// A `None` plan is the regular "no solution" answer (or a truncated run,
/// see [`SearchStats::truncated`]); the drivers never fail.
#[derive(Clone, Debug)]
pub struct SearchOutcome<St, A, C>
where
    St: State,
    A: Action,
    C: Cost,
{
    pub plan: Option<Path<St, A, C>>,
    pub stats: SearchStats,
}

impl<St, A, C> SearchOutcome<St, A, C>
where
    St: State,
    A: Action,
    C: Cost,
{
    #[inline(always)]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.plan.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    impl State for char {}
    impl Action for u8 {}

    #[test]
    fn path_walks_parent_handles_back_to_the_root() {
        let mut tree = SearchTree::<char, u8, u32>::new();
        let root = tree.push(SearchNode {
            state: 'a',
            g: 0,
            depth: 0,
            parent: None,
        });
        let mid = tree.push(SearchNode {
            state: 'b',
            g: 2,
            depth: 1,
            parent: Some((root, 1u8)),
        });
        let leaf = tree.push(SearchNode {
            state: 'c',
            g: 5,
            depth: 2,
            parent: Some((mid, 2u8)),
        });

        let path = tree.path(leaf);
        assert_eq!(path.start, 'a');
        assert_eq!(path.end, 'c');
        assert_eq!(path.cost, 5);
        assert_eq!(path.actions, vec![1u8, 2u8]);
    }

    #[test]
    fn trivial_path_for_a_root_goal() {
        let mut tree = SearchTree::<char, u8, u32>::new();
        let root = tree.push(SearchNode {
            state: 'a',
            g: 0,
            depth: 0,
            parent: None,
        });
        let path = tree.path(root);
        assert!(path.is_empty());
        assert_eq!(path.cost, 0);
    }

    #[test]
    fn limits_compose() {
        let l = Limits::none().expansions(10).depth(3);
        assert_eq!(l.max_expansions, Some(10));
        assert_eq!(l.max_depth, Some(3));
        assert_eq!(Limits::none(), Limits::default());
    }
}
