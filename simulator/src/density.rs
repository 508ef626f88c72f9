use std::fmt;

use crate::error::GridError;

/// Probability that a cell comes up alive when the board is randomized.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Density(f64);

impl Density {
    /// Roughly a third of the board alive.
    pub const DEFAULT: Density = Density(0.3);
    pub const EMPTY: Density = Density(0.0);
    pub const FULL: Density = Density(1.0);

    pub fn new(probability: f64) -> Result<Self, GridError> {
        if (0.0..=1.0).contains(&probability) {
            Ok(Density(probability))
        } else {
            Err(GridError::InvalidDensity(probability))
        }
    }

    pub fn probability(self) -> f64 {
        self.0
    }
}

impl Default for Density {
    fn default() -> Self {
        Density::DEFAULT
    }
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}%", self.0 * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_boundary_probabilities() {
        assert_eq!(Density::new(0.0), Ok(Density::EMPTY));
        assert_eq!(Density::new(1.0), Ok(Density::FULL));
    }

    #[test]
    fn rejects_out_of_range_and_nan() {
        assert_eq!(Density::new(1.5), Err(GridError::InvalidDensity(1.5)));
        assert_eq!(Density::new(-0.1), Err(GridError::InvalidDensity(-0.1)));
        assert!(Density::new(f64::NAN).is_err());
    }

    #[test]
    fn default_matches_thirty_percent() {
        assert_eq!(Density::default().probability(), 0.3);
        assert_eq!(Density::default().to_string(), "30%");
    }
}
