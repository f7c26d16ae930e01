//! Refresh loop and its cancellation protocol.
//!
//! The loop runs on its own thread and owns the terminal while monitoring.
//! The foreground keeps the [`CancelHandle`]; calling [`CancelHandle::cancel`]
//! sends the one-shot stop signal, which the loop always checks before
//! starting a tick.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, SyncSender};
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::system::provider::UtilizationProvider;
use crate::system::sampler::Sampler;
use crate::ui::canvas::TerminalCanvas;
use crate::ui::frame::Frame;
use crate::ui::screen::Compositor;

/// Sending half of the stop signal. Consumed on use, so it fires at most once.
#[derive(Debug)]
pub struct CancelHandle {
    tx: SyncSender<()>,
}

impl CancelHandle {
    pub fn cancel(self) {
        // The loop may already be gone; nothing left to stop then
        if self.tx.send(()).is_err() {
            debug!("refresh loop already stopped");
        }
    }
}

/// Receiving half of the stop signal, owned by the refresh loop
#[derive(Debug)]
pub struct CancelSignal {
    rx: Receiver<()>,
}

/// Build a connected one-shot cancellation pair
pub fn cancellation() -> (CancelHandle, CancelSignal) {
    let (tx, rx) = mpsc::sync_channel(1);
    (CancelHandle { tx }, CancelSignal { rx })
}

/// Refresh loop state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// What a finished session did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSummary {
    pub ticks: u64,
}

/// Context for one monitoring run: timer period, display region and the
/// stop signal, handed to the loop at start.
pub struct RefreshSession<P, C> {
    tick_interval: Duration,
    gauge_width: u32,
    sampler: Sampler<P>,
    compositor: Compositor<C>,
    cancel: CancelSignal,
    state: LoopState,
}

impl<P: UtilizationProvider, C: TerminalCanvas> RefreshSession<P, C> {
    pub fn new(
        tick_interval: Duration,
        gauge_width: u32,
        sampler: Sampler<P>,
        compositor: Compositor<C>,
        cancel: CancelSignal,
    ) -> Self {
        Self {
            tick_interval,
            gauge_width,
            sampler,
            compositor,
            cancel,
            state: LoopState::Running,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Run until cancelled. Ticks one interval after start and every
    /// interval after that.
    pub fn run(mut self) -> SessionSummary {
        let mut summary = SessionSummary::default();

        if let Err(e) = self.compositor.allocate() {
            warn!(error = %e, "failed to reserve display region");
        }
        info!(
            interval_ms = self.tick_interval.as_millis() as u64,
            line_budget = self.compositor.line_budget(),
            "monitoring started"
        );

        let mut next_tick = Instant::now() + self.tick_interval;
        while self.state == LoopState::Running {
            let wait = next_tick.saturating_duration_since(Instant::now());

            // A pending stop wins over a due tick, even with zero wait
            match self.cancel.rx.recv_timeout(wait) {
                Ok(()) | Err(RecvTimeoutError::Disconnected) => {
                    self.state = LoopState::Stopped;
                }
                Err(RecvTimeoutError::Timeout) => {
                    self.tick();
                    summary.ticks += 1;

                    next_tick += self.tick_interval;
                    let now = Instant::now();
                    if next_tick < now {
                        // Fell behind (slow provider or terminal): don't burst
                        next_tick = now + self.tick_interval;
                    }
                }
            }
        }

        info!(ticks = summary.ticks, "monitoring stopped");
        summary
    }

    /// sample -> render -> present, start to finish
    fn tick(&mut self) {
        let sample = self.sampler.sample();
        let frame = Frame::build(&sample, self.gauge_width);
        if let Err(e) = self.compositor.present(&frame) {
            warn!(error = %e, "failed to draw frame");
        }
    }
}
