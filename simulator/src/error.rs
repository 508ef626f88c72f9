use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    ZeroDimension { rows: usize, cols: usize },

    #[error("a {rows}x{cols} grid has more cells than can be addressed")]
    TooLarge { rows: usize, cols: usize },

    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("density must be within [0, 1], got {0}")]
    InvalidDensity(f64),

    #[error("pattern '{name}' does not fit at ({row}, {col})")]
    PatternOutOfBounds {
        name: &'static str,
        row: usize,
        col: usize,
    },

    #[error("invalid grid text at line {line}: {reason}")]
    Parse { line: usize, reason: String },
}
