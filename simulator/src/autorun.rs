use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex, TryLockError};
use std::thread::{self, JoinHandle};

use crate::grid::{GridSimulator, StepOutcome};
use crate::interval::TickInterval;

/// Simulator handle shared between the UI and the ticker thread.
pub type SharedSimulator = Arc<Mutex<GridSimulator>>;

/// A running auto-step loop. Steps the shared simulator once per interval
/// until stopped or dropped.
///
/// Ticks never queue up: if the simulator is locked when a tick fires (a step,
/// a click or a repaint still holds it), that tick is skipped.
pub struct AutoRun {
    interval: TickInterval,
    stop_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl AutoRun {
    pub fn start<F>(simulator: SharedSimulator, interval: TickInterval, on_step: F) -> Self
    where
        F: Fn(StepOutcome) + Send + 'static,
    {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let period = interval.as_duration();

        let handle = thread::spawn(move || loop {
            match stop_rx.recv_timeout(period) {
                Err(RecvTimeoutError::Timeout) => {}
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }

            let outcome = match simulator.try_lock() {
                Ok(mut grid) => grid.step(),
                Err(TryLockError::WouldBlock) => {
                    log::trace!("simulator busy, skipping tick");
                    continue;
                }
                Err(TryLockError::Poisoned(_)) => {
                    log::error!("simulator lock poisoned, stopping auto-run");
                    break;
                }
            };
            on_step(outcome);
        });

        log::debug!("auto-run started at {interval}");
        AutoRun {
            interval,
            stop_tx: Some(stop_tx),
            handle: Some(handle),
        }
    }

    pub fn interval(&self) -> TickInterval {
        self.interval
    }

    /// Stops issuing ticks and waits for the ticker thread to exit.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        // Dropping the sender wakes the ticker without waiting out the interval.
        self.stop_tx.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::error!("auto-run thread panicked");
            }
            log::debug!("auto-run stopped");
        }
    }
}

impl Drop for AutoRun {
    fn drop(&mut self) {
        self.shutdown();
    }
}
