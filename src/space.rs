use std::fmt::Debug;
use std::hash::Hash;

use num_traits::One;
use num_traits::SaturatingAdd;
use num_traits::Zero;

/// A domain configuration.
///
/// Opaque to the drivers beyond equality and hashing; notably it is never
/// required to support ordering.
pub trait State: Clone + Debug + PartialEq + Eq + Hash {}

/// A domain operator, paired by the caller with the state it applies to.
pub trait Action: Copy + Clone + Debug + PartialEq + Eq {}

/// A non-negative, totally-ordered step cost.
///
/// Integer costs implement this directly; real-valued domains use
/// [`crate::float_cost::FloatCost`].
pub trait Cost:
    Copy
    + Clone
    + Debug
    + std::fmt::Display
    + PartialEq
    + Eq
    + PartialOrd
    + Ord
    + SaturatingAdd
    + Zero
    + One
    + std::ops::Add<Self, Output = Self>
    + std::ops::AddAssign
{
}

impl Cost for u32 {}
impl Cost for u64 {}

/// A reconstructed plan: the actions from `start` to `end` and their total
/// cost.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path<St, A, C>
where
    St: State,
    A: Action,
    C: Cost,
{
    pub start: St,
    pub end: St,
    pub cost: C,
    pub actions: Vec<A>,
}

impl<St, A, C> Path<St, A, C>
where
    St: State,
    A: Action,
    C: Cost,
{
    #[inline(always)]
    pub fn trivial(state: St) -> Self {
        Self {
            start: state.clone(),
            end: state,
            cost: C::zero(),
            actions: vec![],
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Replays the actions through `problem` and checks that they lead from
    /// `start` to `end` for exactly `cost`.
    pub fn replays_on<P>(&self, problem: &P) -> bool
    where
        P: crate::problem::Problem<St, A, C>,
    {
        let mut state = self.start.clone();
        let mut cost = C::zero();
        for a in &self.actions {
            cost += problem.cost(&state, a);
            state = problem.transition(&state, a);
        }
        state == self.end && cost == self.cost
    }
}

impl<St, A, C> std::fmt::Display for Path<St, A, C>
where
    St: State,
    A: Action,
    C: Cost,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "Path({}, {:?}:{:?}:{:?})",
            self.cost,
            self.start,
            self.actions.iter().take(20).collect::<Vec<_>>(),
            self.end
        )
    }
}
