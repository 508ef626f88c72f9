use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use eframe::egui;
use eframe::egui::{Pos2, ScrollArea, Ui};
use life_simulator::{
    AutoRun, Density, GridSimulator, Pattern, SharedSimulator, TickInterval, PATTERNS,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::AppConfig;

pub struct LifeApp {
    simulator: SharedSimulator,
    // Some while the simulation is auto-running; dropping it stops the ticker.
    autorun: Option<AutoRun>,
    interval_input: String,
    density: Density,
    rng: StdRng,
    cell_size: f32,
    selected_pattern: &'static Pattern,
}

impl LifeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> anyhow::Result<Self> {
        let mut simulator = GridSimulator::new(config.rows, config.cols)?;
        if let Some(pattern) = config.pattern {
            simulator.place(pattern, centered_origin(pattern, simulator.dimensions()))?;
        }
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self {
            simulator: Arc::new(Mutex::new(simulator)),
            autorun: None,
            interval_input: config.interval.millis().to_string(),
            density: config.density,
            rng,
            cell_size: config.cell_size,
            selected_pattern: config.pattern.unwrap_or(&PATTERNS[0]),
        })
    }

    fn simulator(&self) -> MutexGuard<'_, GridSimulator> {
        self.simulator.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn step_once(&mut self) {
        self.simulator().step();
    }

    fn randomize(&mut self) {
        let density = self.density;
        let mut grid = self.simulator.lock().unwrap_or_else(PoisonError::into_inner);
        grid.randomize_with(&mut self.rng, density);
    }

    fn clear(&mut self) {
        self.simulator().clear();
    }

    fn place_selected_pattern(&mut self) {
        let pattern = self.selected_pattern;
        let mut grid = self.simulator();
        let origin = centered_origin(pattern, grid.dimensions());
        if let Err(err) = grid.place(pattern, origin) {
            log::warn!("{err}");
        }
    }

    fn toggle_running(&mut self, ctx: &egui::Context) {
        if let Some(autorun) = self.autorun.take() {
            autorun.stop();
            log::info!("simulation stopped");
            return;
        }

        let interval = match TickInterval::parse(&self.interval_input) {
            Some(interval) => interval,
            None => {
                let interval = TickInterval::DEFAULT;
                log::warn!("ignoring interval {:?}, using {interval}", self.interval_input);
                self.interval_input = interval.millis().to_string();
                interval
            }
        };

        let ctx = ctx.clone();
        self.autorun = Some(AutoRun::start(Arc::clone(&self.simulator), interval, move |outcome| {
            if outcome.changed() {
                ctx.request_repaint();
            }
        }));
        log::info!("simulation running every {interval}");
    }

    fn controls(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            if ui.button("Step").clicked() {
                self.step_once();
            }
            if ui.button("Randomize").clicked() {
                self.randomize();
            }
            if ui.button("Clear").clicked() {
                self.clear();
            }

            let label = if self.autorun.is_some() { "Stop" } else { "Start" };
            if ui.button(label).clicked() {
                self.toggle_running(ui.ctx());
            }
            ui.label("Interval (ms)");
            ui.add_enabled(
                self.autorun.is_none(),
                egui::TextEdit::singleline(&mut self.interval_input).desired_width(60.0),
            );

            ui.separator();
            egui::ComboBox::from_id_salt("pattern")
                .selected_text(self.selected_pattern.name)
                .show_ui(ui, |ui| {
                    for pattern in PATTERNS {
                        ui.selectable_value(&mut self.selected_pattern, pattern, pattern.name);
                    }
                });
            if ui.button("Place").clicked() {
                self.place_selected_pattern();
            }
        });

        let status = {
            let grid = self.simulator();
            format!("Generation {}  ·  Population {}", grid.generation(), grid.population())
        };
        let running = match &self.autorun {
            Some(autorun) => format!("running every {}", autorun.interval()),
            None => "paused".to_owned(),
        };
        ui.label(format!("{status}  ·  {running}"));
    }

    fn create_grid(&mut self, ui: &mut Ui) {
        let cell_size = self.cell_size;
        let mut grid = self.simulator();
        let (rows, cols) = grid.dimensions();

        let (rect, response) = ui.allocate_exact_size(
            egui::vec2(cell_size * cols as f32, cell_size * rows as f32),
            egui::Sense::click(),
        );

        if response.clicked() {
            let hit = response
                .interact_pointer_pos()
                .and_then(|pos| cell_at(rect.min, pos, cell_size, (rows, cols)));
            if let Some((row, col)) = hit {
                if let Err(err) = grid.toggle(row, col) {
                    log::debug!("click ignored: {err}");
                }
            }
        }

        let painter = ui.painter_at(rect);
        for (row, col, alive) in grid.cells() {
            let pos = rect.min + egui::vec2(col as f32 * cell_size, row as f32 * cell_size);
            let color = if alive {
                egui::Color32::WHITE
            } else {
                egui::Color32::DARK_GRAY
            };
            painter.rect_filled(
                egui::Rect::from_min_size(pos, egui::vec2(cell_size, cell_size)),
                cell_size / 4f32,
                color,
            );
        }
    }
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.heading("Game of Life");
            self.controls(ui);
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::both().show(ui, |ui| {
                self.create_grid(ui);
            });
        });
    }
}

/// Top-left corner that puts `pattern` in the middle of the grid.
fn centered_origin(pattern: &Pattern, dimensions: (usize, usize)) -> (usize, usize) {
    let (rows, cols) = dimensions;
    let (height, width) = pattern.extent();
    (rows.saturating_sub(height) / 2, cols.saturating_sub(width) / 2)
}

/// Maps a pointer position to the `(row, col)` under it, if any.
pub fn cell_at(
    origin: Pos2,
    pos: Pos2,
    cell_size: f32,
    dimensions: (usize, usize),
) -> Option<(usize, usize)> {
    let offset = pos - origin;
    if offset.x < 0.0 || offset.y < 0.0 || cell_size <= 0.0 {
        return None;
    }
    let row = (offset.y / cell_size) as usize;
    let col = (offset.x / cell_size) as usize;
    let (rows, cols) = dimensions;
    (row < rows && col < cols).then_some((row, col))
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::pos2;

    #[test]
    fn maps_pixels_to_cells() {
        let origin = pos2(10.0, 20.0);
        assert_eq!(cell_at(origin, pos2(10.0, 20.0), 8.0, (4, 5)), Some((0, 0)));
        assert_eq!(cell_at(origin, pos2(27.9, 44.1), 8.0, (4, 5)), Some((3, 2)));
        assert_eq!(cell_at(origin, pos2(49.9, 51.9), 8.0, (4, 5)), Some((3, 4)));
    }

    #[test]
    fn centers_patterns_and_clamps_oversized_ones() {
        let glider = Pattern::find("glider").unwrap();
        assert_eq!(centered_origin(glider, (11, 21)), (4, 9));
        assert_eq!(centered_origin(glider, (2, 2)), (0, 0));
    }

    #[test]
    fn rejects_points_outside_grid() {
        let origin = pos2(10.0, 20.0);
        assert_eq!(cell_at(origin, pos2(9.0, 25.0), 8.0, (4, 5)), None);
        assert_eq!(cell_at(origin, pos2(50.0, 25.0), 8.0, (4, 5)), None);
        assert_eq!(cell_at(origin, pos2(15.0, 52.0), 8.0, (4, 5)), None);
    }
}
