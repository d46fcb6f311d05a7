use smallvec::SmallVec;

use crate::cache::Cache;
use crate::space::Action;
use crate::space::Cost;
use crate::space::State;

/// Inline capacity covers the 4-way movement domains without allocating.
pub type Actions<A> = SmallVec<[A; 4]>;

/// A transition system: everything a driver needs to explore a domain.
///
/// Callers must keep `transition` pure and deterministic and `cost`
/// non-negative; the drivers assume both and do not check either.
///
/// `actions` enumeration order is the sole deterministic tie-break source:
/// equal-priority nodes are expanded in the order their actions were
/// enumerated, so implementations should keep that order stable.
pub trait Problem<St, A, C>: std::fmt::Debug
where
    St: State,
    A: Action,
    C: Cost,
{
    fn initial_state(&self) -> St;

    fn is_goal(&self, s: &St) -> bool;

    fn actions(&self, s: &St) -> Actions<A>;

    fn transition(&self, s: &St, a: &A) -> St;

    fn cost(&self, _s: &St, _a: &A) -> C {
        C::one()
    }

    /// The instance-scoped memo store, shared by every heuristic evaluated
    /// against this instance.
    fn cache(&self) -> &Cache;
}

/// An instance-specific cost-to-goal estimate.
///
/// For `astar` to be optimal the estimate must be admissible (never above
/// the true remaining cost); consistency additionally guarantees that no
/// state is expanded twice.
///
/// Evaluators may read and populate `problem.cache()` freely, but must never
/// call `Problem::actions`: the driver's own enumeration is the expansion
/// count that benchmarks compare heuristics by, and an evaluator that
/// enumerates actions does hidden search work that count can't see.
pub trait Heuristic<P, St, A, C>: std::fmt::Debug
where
    P: Problem<St, A, C>,
    St: State,
    A: Action,
    C: Cost,
{
    fn h(problem: &P, s: &St) -> C;
}

/// The everywhere-zero estimate. Trivially consistent; `astar` with it
/// degenerates into `uniform_cost`, expansion for expansion.
#[derive(Debug)]
pub struct ZeroHeuristic;

impl<P, St, A, C> Heuristic<P, St, A, C> for ZeroHeuristic
where
    P: Problem<St, A, C>,
    St: State,
    A: Action,
    C: Cost,
{
    #[inline(always)]
    fn h(_problem: &P, _s: &St) -> C {
        C::zero()
    }
}
