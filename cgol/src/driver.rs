// driver.rs - Warm-up, then render/advance/sleep until the tick budget runs out

use std::future::Future;
use std::io::{self, Write};
use std::num::NonZeroU64;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use tokio::time::{Instant, sleep_until};

use crate::render::Renderer;
use crate::stepper::Stepper;
use crate::viewport::ViewportTracker;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    WarmingUp { remaining: u64 },
    Running,
    Terminated,
}

/// Timing knobs for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSettings {
    pub delay  : Duration,
    pub warmup : u64,
    pub ticks  : Option<NonZeroU64>,   // None runs until interrupted
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub generation  : u64,
    pub ticks       : u64,
    pub interrupted : bool,
}

pub struct Driver<W: Write> {
    stepper     : Stepper,
    renderer    : Renderer<W>,
    viewport    : Arc<ViewportTracker>,
    settings    : RunSettings,
    state       : DriverState,
    ticks       : u64,
    interrupted : bool,
}

impl<W: Write> Driver<W> {
    pub fn new(
        stepper: Stepper,
        renderer: Renderer<W>,
        viewport: Arc<ViewportTracker>,
        settings: RunSettings,
    ) -> Self {
        Self {
            stepper,
            renderer,
            viewport,
            settings,
            state: DriverState::WarmingUp { remaining: settings.warmup },
            ticks: 0,
            interrupted: false,
        }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn stepper(&self) -> &Stepper {
        &self.stepper
    }

    pub fn renderer(&self) -> &Renderer<W> {
        &self.renderer
    }

    /// Runs until the tick budget is spent. Without a budget this never
    /// returns on its own.
    pub async fn run(&mut self) -> io::Result<RunSummary> {
        self.run_until(std::future::pending()).await
    }

    /// Like [`Driver::run`], but also stops once `shutdown` resolves. The
    /// cursor is parked and shown before returning in that case.
    pub async fn run_until<F>(&mut self, shutdown: F) -> io::Result<RunSummary>
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        loop {
            match self.state {
                DriverState::WarmingUp { .. } => self.warm_up(),
                DriverState::Running => self.cycle(shutdown.as_mut()).await?,
                DriverState::Terminated => break,
            }
        }

        Ok(RunSummary {
            generation: self.stepper.generation(),
            ticks: self.ticks,
            interrupted: self.interrupted,
        })
    }

    /// Advances through the warm-up generations without drawing anything.
    fn warm_up(&mut self) {
        while let DriverState::WarmingUp { remaining } = self.state {
            if remaining == 0 {
                tracing::debug!(generation = self.stepper.generation(), "warm-up finished");
                self.state = DriverState::Running;
                break;
            }
            self.stepper.advance();
            self.state = DriverState::WarmingUp { remaining: remaining - 1 };
        }
    }

    /// One tick: render, advance, then sleep unless the budget is spent.
    async fn cycle<F>(&mut self, mut shutdown: Pin<&mut F>) -> io::Result<()>
    where
        F: Future<Output = ()>,
    {
        self.render()?;
        self.stepper.advance();
        self.ticks += 1;

        if self.settings.ticks.is_some_and(|budget| self.ticks >= budget.get()) {
            self.state = DriverState::Terminated;
            return Ok(());
        }

        // A resize redraws immediately; the sleep then carries on towards
        // the same deadline rather than starting over.
        let deadline = Instant::now() + self.settings.delay;
        let tracker = Arc::clone(&self.viewport);
        loop {
            tokio::select! {
                _ = sleep_until(deadline) => return Ok(()),
                _ = tracker.changed() => self.render()?,
                _ = shutdown.as_mut() => {
                    tracing::debug!(generation = self.stepper.generation(), "interrupted");
                    self.renderer.park_cursor(self.viewport.get())?;
                    self.interrupted = true;
                    self.state = DriverState::Terminated;
                    return Ok(());
                }
            }
        }
    }

    fn render(&mut self) -> io::Result<()> {
        self.renderer
            .draw(self.stepper.grid(), self.stepper.generation(), self.viewport.get())
    }
}
