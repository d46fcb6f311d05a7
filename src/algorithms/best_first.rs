//! The three ranked drivers: one loop, three ranking keys.

use std::fmt::Debug;

use num_traits::SaturatingAdd;

use crate::algorithms::Exploration;
use crate::frontier::RankedFrontier;
use crate::problem::Heuristic;
use crate::problem::Problem;
use crate::search::Limits;
use crate::search::SearchOutcome;
use crate::space::Action;
use crate::space::Cost;
use crate::space::State;

/// The shared best-first loop: pop the minimal `(rank, insertion)` entry,
/// skip already-explored states, test goals on expansion, rank children as
/// they are generated.
fn ranked<P, St, A, C, K, F>(
    label: &'static str,
    problem: &P,
    start: St,
    limits: Limits,
    rank: F,
) -> SearchOutcome<St, A, C>
where
    P: Problem<St, A, C>,
    St: State,
    A: Action,
    C: Cost,
    K: Ord + Debug,
    F: Fn(&P, C, &St) -> K,
{
    let mut run = Exploration::new(label, problem, limits);

    let mut frontier = RankedFrontier::new();
    let root_rank = rank(problem, C::zero(), &start);
    let root = run.root(start);
    frontier.push(root_rank, root);

    while let Some(id) = frontier.pop() {
        let Some(state) = run.accept(id) else {
            continue;
        };
        if problem.is_goal(&state) {
            return run.solved(id);
        }
        if run.out_of_budget() {
            return run.truncated();
        }
        if run.at_depth_limit(id) {
            continue;
        }
        for action in run.expand(&state) {
            let (child, child_state, g) = run.child(id, &state, action);
            frontier.push(rank(problem, g, &child_state), child);
        }
    }

    run.exhausted()
}

/// Uniform-cost: rank by accumulated cost `g`.
///
/// Returns a minimal-total-cost plan whenever step costs are non-negative.
pub fn uniform_cost<P, St, A, C>(problem: &P, start: St, limits: Limits) -> SearchOutcome<St, A, C>
where
    P: Problem<St, A, C>,
    St: State,
    A: Action,
    C: Cost,
{
    ranked("uniform-cost", problem, start, limits, |_p, g, _s| g)
}

/// A*: rank by `g + h`, saturating.
///
/// The rank of a child is recomputed from scratch when the child is
/// generated; nothing of the parent's estimate is carried over. Optimal
/// when `H` is admissible; expands each state at most once when `H` is
/// consistent. An inadmissible `H` degrades the answer, never the
/// termination.
pub fn astar<H, P, St, A, C>(problem: &P, start: St, limits: Limits) -> SearchOutcome<St, A, C>
where
    H: Heuristic<P, St, A, C>,
    P: Problem<St, A, C>,
    St: State,
    A: Action,
    C: Cost,
{
    ranked("astar", problem, start, limits, |p, g, s| {
        g.saturating_add(&H::h(p, s))
    })
}

/// Greedy best-first: rank by `h` alone.
///
/// No optimality guarantee of any kind; it heads for whatever looks
/// closest.
pub fn greedy_best_first<H, P, St, A, C>(
    problem: &P,
    start: St,
    limits: Limits,
) -> SearchOutcome<St, A, C>
where
    H: Heuristic<P, St, A, C>,
    P: Problem<St, A, C>,
    St: State,
    A: Action,
    C: Cost,
{
    ranked("greedy-best-first", problem, start, limits, |p, _g, s| {
        H::h(p, s)
    })
}
