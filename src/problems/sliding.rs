//! The 3×3 sliding-tile puzzle.
//!
//! Tiles 1–8 plus a blank; an action names the direction the blank moves.
//! The goal is always the canonical solved board, so instances are just a
//! scrambled start.

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

const SIDE: i32 = 3;
const CELLS: usize = 9;
const BLANK: u8 = 0;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SlidingState {
    tiles: [u8; CELLS],
}

impl State for SlidingState {}

impl SlidingState {
    /// The canonical goal board: tiles in order, blank last.
    #[must_use]
    pub fn solved() -> Self {
        Self {
            tiles: [1, 2, 3, 4, 5, 6, 7, 8, BLANK],
        }
    }

    #[inline(always)]
    fn blank_index(&self) -> usize {
        // A valid board always has a blank
        self.tiles.iter().position(|&t| t == BLANK).unwrap()
    }

    #[inline(always)]
    fn point_of(index: usize) -> Point {
        Point::new(index as i32 % SIDE, index as i32 / SIDE)
    }

    #[inline(always)]
    fn index_of(p: Point) -> usize {
        (p.y * SIDE + p.x) as usize
    }

    #[inline(always)]
    fn in_bounds(p: Point) -> bool {
        p.x >= 0 && p.x < SIDE && p.y >= 0 && p.y < SIDE
    }
}

impl std::fmt::Display for SlidingState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for row in self.tiles.chunks(SIDE as usize) {
            for &t in row {
                if t == BLANK {
                    write!(f, " _")?;
                } else {
                    write!(f, " {t}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum SlidingError {
    #[error("tiles {0:?} are not a permutation of 0..=8")]
    NotAPermutation([u8; CELLS]),
}

#[derive(Debug)]
pub struct SlidingProblem {
    start: SlidingState,
    cache: Cache,
}

impl SlidingProblem {
    #[must_use]
    pub fn new(start: SlidingState) -> Self {
        Self {
            start,
            cache: Cache::new(),
        }
    }

    pub fn from_tiles(tiles: [u8; CELLS]) -> Result<Self, SlidingError> {
        let mut seen = [false; CELLS];
        for &t in &tiles {
            if (t as usize) >= CELLS || seen[t as usize] {
                return Err(SlidingError::NotAPermutation(tiles));
            }
            seen[t as usize] = true;
        }
        Ok(Self::new(SlidingState { tiles }))
    }

    /// A solvable instance, reached by a random walk of `steps` blank moves
    /// back from the solved board.
    pub fn scrambled<R: rand::Rng>(steps: usize, rng: &mut R) -> Self {
        let mut state = SlidingState::solved();
        let template = Self::new(state);
        for _ in 0..steps {
            let moves = template.actions(&state);
            let a = moves[rng.random_range(0..moves.len())];
            state = template.transition(&state, &a);
        }
        Self::new(state)
    }
}

impl Problem<SlidingState, Direction, u32> for SlidingProblem {
    fn initial_state(&self) -> SlidingState {
        self.start
    }

    fn is_goal(&self, s: &SlidingState) -> bool {
        *s == SlidingState::solved()
    }

    fn actions(&self, s: &SlidingState) -> Actions<Direction> {
        let blank = SlidingState::point_of(s.blank_index());
        DIRECTIONS
            .iter()
            .copied()
            .filter(|d| SlidingState::in_bounds(blank.step(*d)))
            .collect()
    }

    fn transition(&self, s: &SlidingState, a: &Direction) -> SlidingState {
        let blank = s.blank_index();
        let target = SlidingState::index_of(SlidingState::point_of(blank).step(*a));
        let mut tiles = s.tiles;
        tiles.swap(blank, target);
        SlidingState { tiles }
    }

    fn cache(&self) -> &Cache {
        &self.cache
    }
}

/// Sum of city-block distances of every tile to its home cell.
/// Admissible and consistent: each move shifts exactly one tile one cell.
#[derive(Debug)]
pub struct TileManhattan;

impl Heuristic<SlidingProblem, SlidingState, Direction, u32> for TileManhattan {
    fn h(_problem: &SlidingProblem, s: &SlidingState) -> u32 {
        s.tiles
            .iter()
            .enumerate()
            .filter(|&(_, &t)| t != BLANK)
            .map(|(at, &t)| {
                let home = SlidingState::point_of(t as usize - 1);
                manhattan_distance(SlidingState::point_of(at), home)
            })
            .sum()
    }
}
