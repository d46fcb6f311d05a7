//! Crate-pushing puzzles.
//!
//! Standard text notation: `#` wall, space floor, `.` goal, `$` crate,
//! `@` player, `*` crate on a goal, `+` player on a goal. The player walks
//! and pushes one crate at a time; every move costs one.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::cache::Cache;
use crate::geometry::manhattan_distance;
use crate::geometry::Direction;
use crate::geometry::Point;
use crate::geometry::DIRECTIONS;
use crate::problem::Actions;
use crate::problem::Heuristic;
use crate::problem::Problem;
use crate::space::State;

/// The immutable part of an instance: the floor plan and the goal cells.
#[derive(Clone, Debug)]
pub struct SokobanLayout {
    width: usize,
    height: usize,
    walkable: FxHashSet<Point>,
    goals: Vec<Point>,
}

impl SokobanLayout {
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    #[must_use]
    pub fn goals(&self) -> &[Point] {
        &self.goals
    }

    #[inline(always)]
    #[must_use]
    pub fn walkable(&self, p: Point) -> bool {
        self.walkable.contains(&p)
    }

    #[inline(always)]
    fn cell_index(&self, p: Point) -> usize {
        p.y as usize * self.width + p.x as usize
    }
}

/// The mutable part: where the player and the crates are.
///
/// Crates are kept sorted so two states reached by pushing different crates
/// into the same arrangement compare (and hash) equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SokobanState {
    pub player: Point,
    crates: Vec<Point>,
}

impl State for SokobanState {}

impl SokobanState {
    fn new(player: Point, mut crates: Vec<Point>) -> Self {
        crates.sort_unstable();
        Self { player, crates }
    }

    #[must_use]
    pub fn crates(&self) -> &[Point] {
        &self.crates
    }

    #[inline(always)]
    fn crate_at(&self, p: Point) -> bool {
        self.crates.binary_search(&p).is_ok()
    }
}

#[derive(Debug, Error)]
pub enum SokobanParseError {
    #[error("empty input")]
    EmptyInput,
    #[error("invalid character '{ch}' at ({x},{y})")]
    InvalidCharacter { ch: char, x: usize, y: usize },
    #[error("no player marker")]
    MissingPlayer,
    #[error("{crates} crates but {goals} goals")]
    CrateGoalMismatch { crates: usize, goals: usize },
}

#[derive(Debug)]
pub struct SokobanProblem {
    layout: SokobanLayout,
    initial: SokobanState,
    cache: Cache,
}

impl SokobanProblem {
    #[must_use]
    pub fn layout(&self) -> &SokobanLayout {
        &self.layout
    }
}

impl std::convert::TryFrom<&str> for SokobanProblem {
    type Error = SokobanParseError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        let lines: Vec<&str> = text.lines().filter(|l| !l.is_empty()).collect();
        if lines.is_empty() {
            return Err(SokobanParseError::EmptyInput);
        }

        let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let height = lines.len();
        let mut walkable = FxHashSet::default();
        let mut goals = vec![];
        let mut crates = vec![];
        let mut player = None;

        for (y, line) in lines.iter().enumerate() {
            for (x, ch) in line.chars().enumerate() {
                let p = Point::new(x as i32, y as i32);
                match ch {
                    '#' => continue,
                    ' ' => {}
                    '.' => goals.push(p),
                    '$' => crates.push(p),
                    '@' => player = Some(p),
                    '*' => {
                        goals.push(p);
                        crates.push(p);
                    }
                    '+' => {
                        goals.push(p);
                        player = Some(p);
                    }
                    ch => return Err(SokobanParseError::InvalidCharacter { ch, x, y }),
                }
                walkable.insert(p);
            }
        }

        if crates.len() != goals.len() {
            return Err(SokobanParseError::CrateGoalMismatch {
                crates: crates.len(),
                goals: goals.len(),
            });
        }
        let player = player.ok_or(SokobanParseError::MissingPlayer)?;

        Ok(Self {
            layout: SokobanLayout {
                width,
                height,
                walkable,
                goals,
            },
            initial: SokobanState::new(player, crates),
            cache: Cache::new(),
        })
    }
}

impl Problem<SokobanState, Direction, u32> for SokobanProblem {
    fn initial_state(&self) -> SokobanState {
        self.initial.clone()
    }

    fn is_goal(&self, s: &SokobanState) -> bool {
        s.crates.iter().all(|c| self.layout.goals.contains(c))
    }

    fn actions(&self, s: &SokobanState) -> Actions<Direction> {
        DIRECTIONS
            .iter()
            .copied()
            .filter(|d| {
                let dest = s.player.step(*d);
                if !self.layout.walkable(dest) {
                    return false;
                }
                if s.crate_at(dest) {
                    let beyond = dest.step(*d);
                    self.layout.walkable(beyond) && !s.crate_at(beyond)
                } else {
                    true
                }
            })
            .collect()
    }

    fn transition(&self, s: &SokobanState, a: &Direction) -> SokobanState {
        let dest = s.player.step(*a);
        let mut crates = s.crates.clone();
        if let Ok(pushed) = crates.binary_search(&dest) {
            crates[pushed] = dest.step(*a);
        }
        SokobanState::new(dest, crates)
    }

    fn cache(&self) -> &Cache {
        &self.cache
    }
}

/// Distance from the player to the nearest crate, minus the final step.
/// A weak estimate: it says nothing about how far the crates are from
/// their goals.
#[derive(Debug)]
pub struct NearestCrate;

impl Heuristic<SokobanProblem, SokobanState, Direction, u32> for NearestCrate {
    fn h(_problem: &SokobanProblem, s: &SokobanState) -> u32 {
        s.crates
            .iter()
            .map(|c| manhattan_distance(s.player, *c))
            .min()
            .map_or(0, |d| d.saturating_sub(1))
    }
}

/// Walking distance from each cell to its nearest goal, precomputed once
/// per instance by a multi-source flood fill and memoized in the problem
/// cache; the estimate is the farthest crate's entry. Every move advances
/// at most one crate by one cell, so the maximum is admissible.
#[derive(Debug)]
pub struct GoalDistance;

const GOAL_DISTANCE_TABLE: &str = "sokoban.goal-distance-table";

fn flood_fill(layout: &SokobanLayout) -> Vec<u32> {
    let mut table = vec![u32::MAX; layout.width * layout.height];
    let mut queue = VecDeque::new();

    for &goal in layout.goals() {
        table[layout.cell_index(goal)] = 0;
        queue.push_back(goal);
    }
    while let Some(p) = queue.pop_front() {
        let d = table[layout.cell_index(p)];
        for direction in DIRECTIONS {
            let next = p.step(direction);
            if layout.walkable(next) && table[layout.cell_index(next)] == u32::MAX {
                table[layout.cell_index(next)] = d + 1;
                queue.push_back(next);
            }
        }
    }

    table
}

impl Heuristic<SokobanProblem, SokobanState, Direction, u32> for GoalDistance {
    fn h(problem: &SokobanProblem, s: &SokobanState) -> u32 {
        let table = problem
            .cache()
            .get_or_compute(GOAL_DISTANCE_TABLE, || flood_fill(problem.layout()));

        s.crates
            .iter()
            .map(|c| table[problem.layout.cell_index(*c)])
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;
    use crate::algorithms::astar;
    use crate::algorithms::breadth_first;
    use crate::algorithms::probes::Recorded;
    use crate::algorithms::probes::Via;
    use crate::algorithms::uniform_cost;
    use crate::search::Limits;

    #[test]
    fn parses_standard_notation() {
        let p = SokobanProblem::try_from(indoc! {"
            ######
            #+ $ #
            # *  #
            ######
        "})
        .unwrap();

        let s = p.initial_state();
        assert_eq!(s.player, Point::new(1, 1));
        assert_eq!(s.crates().len(), 2);
        assert_eq!(p.layout().goals().len(), 2);
        assert!(p.layout().walkable(Point::new(1, 1)));
        assert!(!p.layout().walkable(Point::new(0, 0)));
    }

    #[test]
    fn rejects_mismatched_instances() {
        assert!(matches!(
            SokobanProblem::try_from("#@$#"),
            Err(SokobanParseError::CrateGoalMismatch { crates: 1, goals: 0 })
        ));
        assert!(matches!(
            SokobanProblem::try_from("#$.#"),
            Err(SokobanParseError::MissingPlayer)
        ));
    }

    #[test]
    fn blocked_pushes_are_not_offered() {
        // The crate sits against the right wall; only walking moves remain.
        let p = SokobanProblem::try_from(indoc! {"
            #####
            #@$##
            #. ##
            #####
        "})
        .unwrap();

        let moves = p.actions(&p.initial_state());
        assert_eq!(moves.as_slice(), &[Direction::Down]);
    }

    #[test]
    fn pushing_moves_the_crate() {
        let p = SokobanProblem::try_from(indoc! {"
            #####
            #@$.#
            #####
        "})
        .unwrap();

        let s = p.initial_state();
        let pushed = p.transition(&s, &Direction::Right);
        assert_eq!(pushed.player, Point::new(2, 1));
        assert_eq!(pushed.crates(), &[Point::new(3, 1)]);
        assert!(p.is_goal(&pushed));
    }

    #[test]
    fn one_push_levels_solve_optimally() {
        let p = SokobanProblem::try_from(indoc! {"
            #####
            #@$.#
            #####
        "})
        .unwrap();

        let ucs = uniform_cost(&p, p.initial_state(), Limits::none());
        let a = astar::<GoalDistance, _, _, _, _>(&p, p.initial_state(), Limits::none());
        assert_eq!(ucs.plan.expect("solvable").cost, 1);
        assert_eq!(a.plan.expect("solvable").cost, 1);
    }

    #[test]
    fn flood_fill_table_is_memoized_per_instance() {
        let p = SokobanProblem::try_from(indoc! {"
            #######
            #@ $ .#
            #     #
            #######
        "})
        .unwrap();

        assert!(p.cache().is_empty());
        let first = GoalDistance::h(&p, &p.initial_state());
        assert!(p.cache().contains(GOAL_DISTANCE_TABLE));
        assert_eq!(first, 2); // the crate is two cells from the goal

        // Another instance of the same layout starts cold.
        let q = SokobanProblem::try_from(indoc! {"
            #######
            #@ $ .#
            #     #
            #######
        "})
        .unwrap();
        assert!(q.cache().is_empty());
    }

    #[test]
    fn heuristics_preserve_optimality() {
        let level = indoc! {"
            #######
            #@ $ .#
            #     #
            #######
        "};
        let p = SokobanProblem::try_from(level).unwrap();

        let ucs = uniform_cost(&p, p.initial_state(), Limits::none());
        let strong = astar::<GoalDistance, _, _, _, _>(&p, p.initial_state(), Limits::none());
        let weak = astar::<NearestCrate, _, _, _, _>(&p, p.initial_state(), Limits::none());

        let best = ucs.plan.expect("solvable").cost;
        assert_eq!(best, 3);
        assert_eq!(strong.plan.expect("solvable").cost, best);
        assert_eq!(weak.plan.expect("solvable").cost, best);
    }

    #[test]
    fn expansion_counter_matches_with_the_cached_heuristic() {
        let p = SokobanProblem::try_from(indoc! {"
            #######
            #@ $ .#
            #     #
            #######
        "})
        .unwrap();

        let rec = Recorded::new(&p);
        let outcome =
            astar::<Via<GoalDistance>, _, _, _, _>(&rec, p.initial_state(), Limits::none());
        assert!(outcome.is_solved());
        assert_eq!(outcome.stats.expanded, rec.enumerated.borrow().len());
        assert_eq!(outcome.stats.expanded, rec.distinct());
    }

    #[test]
    fn dead_positions_exhaust_to_no_solution() {
        // The crate is wedged: pushing right hits a wall and the player can
        // never get to its right side.
        let p = SokobanProblem::try_from(indoc! {"
            #####
            #@$##
            #.###
            #####
        "})
        .unwrap();

        let outcome = breadth_first(&p, p.initial_state(), Limits::none());
        assert!(outcome.plan.is_none());
        assert!(!outcome.stats.truncated);
    }
}
