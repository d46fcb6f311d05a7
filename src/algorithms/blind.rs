//! The two uninformed, unranked drivers.

use crate::algorithms::Exploration;
use crate::frontier::FifoFrontier;
use crate::frontier::LifoFrontier;
use crate::problem::Problem;
use crate::search::Limits;
use crate::search::SearchOutcome;
use crate::space::Action;
use crate::space::Cost;
use crate::space::State;

/// Breadth-first: FIFO frontier, goal test on generation.
///
/// Because expansion proceeds in non-decreasing depth, testing a child the
/// moment it is generated gives the same answer as testing it when popped,
/// one layer earlier. The start state is tested up front so a
/// trivially-solved instance returns an empty plan. Returns a
/// fewest-actions plan; cost-optimal only under uniform step costs.
pub fn breadth_first<P, St, A, C>(problem: &P, start: St, limits: Limits) -> SearchOutcome<St, A, C>
where
    P: Problem<St, A, C>,
    St: State,
    A: Action,
    C: Cost,
{
    let mut run = Exploration::new("breadth-first", problem, limits);

    let root = run.root(start.clone());
    if problem.is_goal(&start) {
        return run.solved(root);
    }

    let mut frontier = FifoFrontier::new();
    frontier.push(root);

    while let Some(id) = frontier.pop() {
        let Some(state) = run.accept(id) else {
            continue;
        };
        if run.out_of_budget() {
            return run.truncated();
        }
        if run.at_depth_limit(id) {
            continue;
        }
        for action in run.expand(&state) {
            let (child, child_state, _g) = run.child(id, &state, action);
            if problem.is_goal(&child_state) {
                return run.solved(child);
            }
            frontier.push(child);
        }
    }

    run.exhausted()
}

/// Depth-first: LIFO frontier, goal test on expansion.
///
/// A generated child is never tested early: it waits in the frontier and is
/// tested only once popped and accepted, like every other non-BFS driver.
/// Children are pushed in enumeration order, so the last-enumerated action
/// is explored first. No optimality of any kind; complete only when the
/// reachable set is finite (or a [`Limits`] ceiling is supplied).
pub fn depth_first<P, St, A, C>(problem: &P, start: St, limits: Limits) -> SearchOutcome<St, A, C>
where
    P: Problem<St, A, C>,
    St: State,
    A: Action,
    C: Cost,
{
    let mut run = Exploration::new("depth-first", problem, limits);

    let mut frontier = LifoFrontier::new();
    frontier.push(run.root(start));

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
            let (child, _child_state, _g) = run.child(id, &state, action);
            frontier.push(child);
        }
    }

    run.exhausted()
}
