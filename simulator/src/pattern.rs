/// A named arrangement of live cells, as offsets from its top-left corner.
#[derive(Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "block",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    },
    Pattern {
        name: "blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
];

impl Pattern {
    pub fn find(name: &str) -> Option<&'static Pattern> {
        PATTERNS
            .iter()
            .find(|pattern| pattern.name.eq_ignore_ascii_case(name))
    }

    /// Bounding box as `(height, width)`.
    pub fn extent(&self) -> (usize, usize) {
        self.cells
            .iter()
            .fold((0, 0), |(height, width), &(row, col)| {
                (height.max(row + 1), width.max(col + 1))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridSimulator;

    fn placed(name: &str, rows: usize, cols: usize, origin: (usize, usize)) -> GridSimulator {
        let mut grid = GridSimulator::new(rows, cols).unwrap();
        grid.place(Pattern::find(name).unwrap(), origin).unwrap();
        grid
    }

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(Pattern::find("Glider").map(|p| p.name), Some("glider"));
        assert!(Pattern::find("gosper gun").is_none());
    }

    #[test]
    fn extents() {
        assert_eq!(Pattern::find("block").unwrap().extent(), (2, 2));
        assert_eq!(Pattern::find("blinker").unwrap().extent(), (1, 3));
        assert_eq!(Pattern::find("beacon").unwrap().extent(), (4, 4));
    }

    #[test]
    fn oscillators_return_after_two_generations() {
        for name in ["blinker", "toad", "beacon"] {
            let mut grid = placed(name, 8, 8, (2, 2));
            let start = grid.clone();

            assert!(grid.step().changed(), "{name} should change");
            grid.step();
            assert_eq!(grid.to_string(), start.to_string(), "{name}");
        }
    }

    #[test]
    fn glider_translates_diagonally_every_four_generations() {
        let mut grid = placed("glider", 10, 10, (1, 1));
        for _ in 0..4 {
            grid.step();
        }
        assert_eq!(grid.to_string(), placed("glider", 10, 10, (2, 2)).to_string());
    }
}
