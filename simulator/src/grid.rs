use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::density::Density;
use crate::error::GridError;
use crate::pattern::Pattern;

const ALIVE_CHAR: char = '#';
const DEAD_CHAR: char = '.';

/// Moore neighborhood, orthogonal and diagonal.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// What a single [`GridSimulator::step`] changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepOutcome {
    pub births: usize,
    pub deaths: usize,
}

impl StepOutcome {
    pub fn changed(&self) -> bool {
        self.births > 0 || self.deaths > 0
    }
}

/// Fixed-size board of alive/dead cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridSimulator {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
    generation: u64,
}

impl GridSimulator {
    /// Creates an all-dead board. Both dimensions must be positive.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::ZeroDimension { rows, cols });
        }
        let len = rows
            .checked_mul(cols)
            .ok_or(GridError::TooLarge { rows, cols })?;
        Ok(GridSimulator {
            rows,
            cols,
            cells: vec![false; len],
            generation: 0,
        })
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of steps taken since the board was created, cleared or randomized.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|alive| **alive).count()
    }

    /// # Panics
    ///
    /// Panics if `(row, col)` lies outside the grid. Use [`GridSimulator::get`]
    /// for coordinates that come from user input.
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        assert!(
            self.contains(row, col),
            "cell ({row}, {col}) is outside the {}x{} grid",
            self.rows,
            self.cols
        );
        self.cells[self.index(row, col)]
    }

    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        self.contains(row, col).then(|| self.cells[self.index(row, col)])
    }

    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> Result<(), GridError> {
        let index = self.checked_index(row, col)?;
        self.cells[index] = alive;
        Ok(())
    }

    /// Flips one cell and returns its new state.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<bool, GridError> {
        let index = self.checked_index(row, col)?;
        self.cells[index] = !self.cells[index];
        Ok(self.cells[index])
    }

    /// Counts live cells among the up to eight neighbors of `(row, col)`.
    /// Neighbors beyond the edge are skipped, so a corner has at most 3 and an
    /// edge cell at most 5.
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> usize {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| {
                let neighbor_row = row.checked_add_signed(dr)?;
                let neighbor_col = col.checked_add_signed(dc)?;
                self.get(neighbor_row, neighbor_col)
            })
            .filter(|alive| *alive)
            .count()
    }

    /// Advance the grid by one generation.
    ///
    /// Every cell is classified against the pre-step board first; births and
    /// deaths are only written once the scan is complete.
    pub fn step(&mut self) -> StepOutcome {
        let mut births = Vec::new();
        let mut deaths = Vec::new();

        for row in 0..self.rows {
            for col in 0..self.cols {
                let index = self.index(row, col);
                match (self.cells[index], self.count_live_neighbors(row, col)) {
                    (true, 2..=3) => {} // Survives
                    (true, _) => deaths.push(index),
                    (false, 3) => births.push(index),
                    (false, _) => {}
                }
            }
        }

        for &index in &births {
            self.cells[index] = true;
        }
        for &index in &deaths {
            self.cells[index] = false;
        }
        self.generation += 1;

        let outcome = StepOutcome {
            births: births.len(),
            deaths: deaths.len(),
        };
        log::trace!(
            "generation {}: {} born, {} died",
            self.generation,
            outcome.births,
            outcome.deaths
        );
        outcome
    }

    /// Randomizes every cell using the thread-local generator.
    pub fn randomize(&mut self, density: Density) {
        self.randomize_with(&mut rand::rng(), density);
    }

    /// Sets each cell alive independently with probability `density`.
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R, density: Density) {
        let probability = density.probability();
        for cell in self.cells.iter_mut() {
            *cell = rng.random_bool(probability);
        }
        self.generation = 0;
        log::debug!(
            "randomized {}x{} grid at {density}, population {}",
            self.rows,
            self.cols,
            self.population()
        );
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
        self.generation = 0;
        log::debug!("cleared {}x{} grid", self.rows, self.cols);
    }

    /// Brings `pattern` to life with its top-left corner at `origin`.
    /// Nothing is written unless every cell of the pattern fits.
    pub fn place(&mut self, pattern: &Pattern, origin: (usize, usize)) -> Result<(), GridError> {
        let (row, col) = origin;
        let (height, width) = pattern.extent();
        if row.saturating_add(height) > self.rows || col.saturating_add(width) > self.cols {
            return Err(GridError::PatternOutOfBounds {
                name: pattern.name,
                row,
                col,
            });
        }
        for &(dr, dc) in pattern.cells {
            let index = self.index(row + dr, col + dc);
            self.cells[index] = true;
        }
        log::debug!("placed {} at ({row}, {col})", pattern.name);
        Ok(())
    }

    /// Iterates `(row, col, alive)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, alive)| (index / cols, index % cols, *alive))
    }

    fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn checked_index(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if self.contains(row, col) {
            Ok(self.index(row, col))
        } else {
            Err(GridError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }
}

impl fmt::Display for GridSimulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            for alive in row {
                let ch = if *alive { ALIVE_CHAR } else { DEAD_CHAR };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parses the [`Display`](fmt::Display) format: one line per row, `#` alive and
/// `.` dead. Blank lines are ignored; all rows must have the same width.
impl FromStr for GridSimulator {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::new();
        let mut rows = 0;
        let mut cols = None;

        for (line_index, line) in s.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let width = line.chars().count();
            match cols {
                None => cols = Some(width),
                Some(expected) if expected != width => {
                    return Err(GridError::Parse {
                        line: line_index + 1,
                        reason: format!("expected {expected} cells, found {width}"),
                    });
                }
                Some(_) => {}
            }
            for ch in line.chars() {
                let alive = match ch {
                    ALIVE_CHAR => true,
                    DEAD_CHAR => false,
                    other => {
                        return Err(GridError::Parse {
                            line: line_index + 1,
                            reason: format!("unexpected character {other:?}"),
                        });
                    }
                };
                cells.push(alive);
            }
            rows += 1;
        }

        let cols = cols.unwrap_or(0);
        let mut grid = GridSimulator::new(rows, cols)?;
        grid.cells = cells;
        Ok(grid)
    }
}
