//! The search drivers.
//!
//! Five expansion orders over one contract: a driver repeatedly pops the
//! best pending node, skips it if its state was already explored, otherwise
//! marks it explored and enumerates its actions, until a goal is found or
//! the frontier empties. The drivers differ only in frontier discipline,
//! ranking key and goal-test placement.

pub mod best_first;
pub mod blind;

pub use best_first::astar;
pub use best_first::greedy_best_first;
pub use best_first::uniform_cost;
pub use blind::breadth_first;
pub use blind::depth_first;

use rustc_hash::FxHashSet;

use crate::problem::Actions;
use crate::problem::Problem;
use crate::search::Limits;
use crate::search::NodeId;
use crate::search::SearchNode;
use crate::search::SearchOutcome;
use crate::search::SearchStats;
use crate::search::SearchTree;
use crate::space::Action;
use crate::space::Cost;
use crate::space::State;

/// The state one driver invocation owns exclusively: the node arena, the
/// explored set, the counters and the budget. Dropped on return.
pub(crate) struct Exploration<'p, P, St, A, C>
where
    P: Problem<St, A, C>,
    St: State,
    A: Action,
    C: Cost,
{
    label: &'static str,
    problem: &'p P,
    tree: SearchTree<St, A, C>,
    explored: FxHashSet<St>,
    stats: SearchStats,
    limits: Limits,
}

impl<'p, P, St, A, C> Exploration<'p, P, St, A, C>
where
    P: Problem<St, A, C>,
    St: State,
    A: Action,
    C: Cost,
{
    #[must_use]
    pub(crate) fn new(label: &'static str, problem: &'p P, limits: Limits) -> Self {
        Self {
            label,
            problem,
            tree: SearchTree::new(),
            explored: FxHashSet::default(),
            stats: SearchStats::default(),
            limits,
        }
    }

    pub(crate) fn root(&mut self, state: St) -> NodeId {
        self.stats.generated += 1;
        self.tree.push(SearchNode {
            state,
            g: C::zero(),
            depth: 0,
            parent: None,
        })
    }

    /// Admits a popped node, or `None` if its state was already explored.
    /// Duplicates are allowed to pile up in the frontier; this is the single
    /// point that filters them.
    pub(crate) fn accept(&mut self, id: NodeId) -> Option<St> {
        let state = self.tree[id].state.clone();
        if !self.explored.insert(state.clone()) {
            return None;
        }
        Some(state)
    }

    /// Enumerates the actions of an accepted state. The one and only call
    /// site of [`Problem::actions`], and the one and only increment of
    /// [`SearchStats::expanded`].
    pub(crate) fn expand(&mut self, state: &St) -> Actions<A> {
        self.stats.expanded += 1;
        self.problem.actions(state)
    }

    pub(crate) fn child(&mut self, parent: NodeId, parent_state: &St, action: A) -> (NodeId, St, C) {
        let state = self.problem.transition(parent_state, &action);
        let g = self.tree[parent].g + self.problem.cost(parent_state, &action);
        let depth = self.tree[parent].depth + 1;
        self.stats.generated += 1;
        let id = self.tree.push(SearchNode {
            state: state.clone(),
            g,
            depth,
            parent: Some((parent, action)),
        });
        (id, state, g)
    }

    #[inline(always)]
    #[must_use]
    pub(crate) fn at_depth_limit(&self, id: NodeId) -> bool {
        self.limits
            .max_depth
            .is_some_and(|max| self.tree[id].depth >= max)
    }

    #[inline(always)]
    #[must_use]
    pub(crate) fn out_of_budget(&self) -> bool {
        self.limits
            .max_expansions
            .is_some_and(|max| self.stats.expanded >= max)
    }

    #[must_use]
    pub(crate) fn solved(self, goal: NodeId) -> SearchOutcome<St, A, C> {
        let plan = self.tree.path(goal);
        log::debug!(
            "{}: goal after {} ({} actions, cost {})",
            self.label,
            self.stats,
            plan.len(),
            plan.cost,
        );
        SearchOutcome {
            plan: Some(plan),
            stats: self.stats,
        }
    }

    #[must_use]
    pub(crate) fn exhausted(self) -> SearchOutcome<St, A, C> {
        log::debug!("{}: frontier exhausted after {}", self.label, self.stats);
        SearchOutcome {
            plan: None,
            stats: self.stats,
        }
    }

    #[must_use]
    pub(crate) fn truncated(mut self) -> SearchOutcome<St, A, C> {
        self.stats.truncated = true;
        log::warn!("{}: budget hit after {}", self.label, self.stats);
        SearchOutcome {
            plan: None,
            stats: self.stats,
        }
    }
}
