use anyhow::{bail, Context};
use clap::Parser;
use life_simulator::{Density, Pattern, TickInterval};

#[derive(Parser, Debug)]
#[command(name = "life-gui")]
#[command(version)]
#[command(about = "Interactive Conway's Game of Life")]
pub struct Cli {
    /// Number of grid rows
    #[arg(long, default_value = "100")]
    pub rows: usize,

    /// Number of grid columns
    #[arg(long, default_value = "200")]
    pub cols: usize,

    /// Milliseconds between automatic steps (falls back to 500 if not a positive integer)
    #[arg(long, env = "LIFE_INTERVAL_MS")]
    pub interval_ms: Option<String>,

    /// Fraction of cells alive after Randomize, between 0 and 1
    #[arg(long, env = "LIFE_DENSITY", default_value = "0.3")]
    pub density: f64,

    /// Seed for reproducible randomization
    #[arg(long, env = "LIFE_SEED")]
    pub seed: Option<u64>,

    /// Preset pattern placed in the middle of the board at startup
    #[arg(long)]
    pub pattern: Option<String>,

    /// Size of one cell in pixels
    #[arg(long, default_value = "6.0")]
    pub cell_size: f32,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub rows: usize,
    pub cols: usize,
    pub interval: TickInterval,
    pub density: Density,
    pub seed: Option<u64>,
    pub pattern: Option<&'static Pattern>,
    pub cell_size: f32,
}

impl Cli {
    pub fn into_config(self) -> anyhow::Result<AppConfig> {
        if self.rows == 0 || self.cols == 0 {
            bail!("grid must have at least one row and column, got {}x{}", self.rows, self.cols);
        }
        if self.rows.checked_mul(self.cols).is_none() {
            bail!("a {}x{} grid is too large", self.rows, self.cols);
        }
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            bail!("--cell-size must be a positive number of pixels, got {}", self.cell_size);
        }
        let density = Density::new(self.density).context("invalid --density")?;

        let interval = match self.interval_ms.as_deref() {
            Some(raw) => TickInterval::parse(raw).unwrap_or_else(|| {
                log::warn!("ignoring interval {raw:?}, using {}", TickInterval::DEFAULT);
                TickInterval::DEFAULT
            }),
            None => TickInterval::DEFAULT,
        };

        let pattern = self
            .pattern
            .as_deref()
            .map(|name| {
                Pattern::find(name).with_context(|| format!("unknown --pattern {name:?}"))
            })
            .transpose()?;

        Ok(AppConfig {
            rows: self.rows,
            cols: self.cols,
            interval,
            density,
            seed: self.seed,
            pattern,
            cell_size: self.cell_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(args: &[&str]) -> anyhow::Result<AppConfig> {
        let argv = std::iter::once("life-gui").chain(args.iter().copied());
        Cli::try_parse_from(argv)?.into_config()
    }

    #[test]
    fn defaults_match_original_board() {
        let config = config(&[]).unwrap();
        assert_eq!((config.rows, config.cols), (100, 200));
        assert_eq!(config.density, Density::DEFAULT);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn interval_parses_or_falls_back() {
        assert_eq!(config(&["--interval-ms", "250"]).unwrap().interval.millis(), 250);
        assert_eq!(config(&["--interval-ms", "soon"]).unwrap().interval, TickInterval::DEFAULT);
        assert_eq!(config(&["--interval-ms", ""]).unwrap().interval, TickInterval::DEFAULT);
        assert_eq!(config(&["--interval-ms", "+250"]).unwrap().interval.millis(), 250);
    }

    #[test]
    fn rejects_bad_density_and_dimensions() {
        assert!(config(&["--density", "1.2"]).is_err());
        assert!(config(&["--rows", "0"]).is_err());
        assert!(config(&["--cell-size", "0"]).is_err());
        assert!(config(&["--cols", "-3"]).is_err());
    }

    #[test]
    fn rejects_grid_too_large_to_address() {
        let rows = usize::MAX.to_string();
        let cols = "2".to_owned();
        let err = config(&["--rows", &rows, "--cols", &cols]).unwrap_err();
        assert!(err.to_string().contains("too large"));
    }

    #[test]
    fn pattern_is_looked_up_by_name() {
        let glider = config(&["--pattern", "Glider"]).unwrap().pattern;
        assert_eq!(glider.map(|p| p.name), Some("glider"));
        assert!(config(&["--pattern", "spaceship"]).is_err());
    }

    #[test]
    fn seed_is_optional() {
        assert_eq!(config(&["--seed", "99"]).unwrap().seed, Some(99));
    }
}
