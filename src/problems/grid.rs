//! 2D grid navigation.
//!
//! Maps parse from text: `#` wall, `.` or space open, `S` start, `G` goal.
//! Movement is 4-directional at unit cost; costs are floats so the
//! straight-line heuristic composes with them directly.

use derive_more::Display;
use thiserror::Error;

use crate::cache::Cache;
use crate::float_cost::FloatCost;
use crate::geometry::euclidean_distance;
use crate::geometry::manhattan_distance;
use crate::geometry::Direction;
use crate::geometry::Point;
use crate::geometry::DIRECTIONS;
use crate::problem::Actions;
use crate::problem::Heuristic;
use crate::problem::Problem;

pub type GridCost = FloatCost<f64>;

#[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
pub enum GridCell {
    #[display("░")]
    Open,
    #[display("█")]
    Wall,
}

#[derive(Debug, Error)]
pub enum GridParseError {
    #[error("empty input")]
    EmptyInput,
    #[error("invalid character '{ch}' at ({x},{y})")]
    InvalidCharacter { ch: char, x: usize, y: usize },
    #[error("no start marker 'S'")]
    MissingStart,
    #[error("no goal marker 'G'")]
    MissingGoal,
}

impl std::convert::TryFrom<char> for GridCell {
    type Error = char;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch {
            '.' | ' ' => Ok(GridCell::Open),
            '#' => Ok(GridCell::Wall),
            ch => Err(ch),
        }
    }
}

#[derive(Clone, Debug)]
pub struct GridMap {
    cells: Vec<GridCell>,
    width: usize,
    height: usize,
}

impl GridMap {
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    #[inline(always)]
    #[must_use]
    pub fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
    }

    #[inline(always)]
    #[must_use]
    pub fn at(&self, p: Point) -> GridCell {
        debug_assert!(self.in_bounds(p));
        self.cells[p.y as usize * self.width + p.x as usize]
    }

    #[inline(always)]
    #[must_use]
    pub fn walkable(&self, p: Point) -> bool {
        self.in_bounds(p) && self.at(p) == GridCell::Open
    }
}

#[derive(Debug)]
pub struct GridProblem {
    map: GridMap,
    start: Point,
    goal: Point,
    cache: Cache,
}

impl GridProblem {
    #[must_use]
    pub fn map(&self) -> &GridMap {
        &self.map
    }

    #[must_use]
    pub fn start(&self) -> Point {
        self.start
    }

    #[must_use]
    pub fn goal(&self) -> Point {
        self.goal
    }
}

impl std::convert::TryFrom<&str> for GridProblem {
    type Error = GridParseError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        let lines: Vec<&str> = text.lines().filter(|l| !l.is_empty()).collect();
        if lines.is_empty() {
            return Err(GridParseError::EmptyInput);
        }

        let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let height = lines.len();
        let mut cells = vec![GridCell::Wall; width * height];
        let mut start = None;
        let mut goal = None;

        for (y, line) in lines.iter().enumerate() {
            for (x, ch) in line.chars().enumerate() {
                cells[y * width + x] = match ch {
                    'S' => {
                        start = Some(Point::new(x as i32, y as i32));
                        GridCell::Open
                    }
                    'G' => {
                        goal = Some(Point::new(x as i32, y as i32));
                        GridCell::Open
                    }
                    ch => GridCell::try_from(ch)
                        .map_err(|ch| GridParseError::InvalidCharacter { ch, x, y })?,
                };
            }
        }

        Ok(Self {
            map: GridMap {
                cells,
                width,
                height,
            },
            start: start.ok_or(GridParseError::MissingStart)?,
            goal: goal.ok_or(GridParseError::MissingGoal)?,
            cache: Cache::new(),
        })
    }
}

impl Problem<Point, Direction, GridCost> for GridProblem {
    fn initial_state(&self) -> Point {
        self.start
    }

    fn is_goal(&self, s: &Point) -> bool {
        *s == self.goal
    }

    fn actions(&self, s: &Point) -> Actions<Direction> {
        DIRECTIONS
            .iter()
            .copied()
            .filter(|d| self.map.walkable(s.step(*d)))
            .collect()
    }

    fn transition(&self, s: &Point, a: &Direction) -> Point {
        s.step(*a)
    }

    fn cost(&self, _s: &Point, _a: &Direction) -> GridCost {
        FloatCost::new(1.0)
    }

    fn cache(&self) -> &Cache {
        &self.cache
    }
}

impl std::fmt::Display for GridProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for y in 0..self.map.height {
            for x in 0..self.map.width {
                let p = Point::new(x as i32, y as i32);
                if p == self.start {
                    write!(f, "S")?;
                } else if p == self.goal {
                    write!(f, "G")?;
                } else {
                    write!(f, "{}", self.map.at(p))?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// City-block distance to the goal. Admissible and consistent on a
/// 4-connected unit-cost grid.
#[derive(Debug)]
pub struct ManhattanToGoal;

impl Heuristic<GridProblem, Point, Direction, GridCost> for ManhattanToGoal {
    #[inline(always)]
    fn h(problem: &GridProblem, s: &Point) -> GridCost {
        FloatCost::new(f64::from(manhattan_distance(*s, problem.goal)))
    }
}

/// Straight-line distance to the goal. Admissible (it ignores walls and
/// the 4-way movement restriction) but looser than [`ManhattanToGoal`].
#[derive(Debug)]
pub struct StraightLineToGoal;

impl Heuristic<GridProblem, Point, Direction, GridCost> for StraightLineToGoal {
    #[inline(always)]
    fn h(problem: &GridProblem, s: &Point) -> GridCost {
        FloatCost::new(euclidean_distance(*s, problem.goal))
    }
}
