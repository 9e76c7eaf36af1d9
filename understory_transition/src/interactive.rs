// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture-driven progress and spring settling.
//!
//! ## Usage
//!
//! 1) Create an [`InteractiveDriver`] when a gesture opens a transition and
//!    call [`InteractiveDriver::begin`] to put the context in interactive mode.
//! 2) While the gesture moves, call [`InteractiveDriver::update`] with the
//!    current progress and velocity.
//! 3) On release, call [`InteractiveDriver::finish`] or
//!    [`InteractiveDriver::cancel`] with the release velocity.
//! 4) Call [`InteractiveDriver::tick`] once per display refresh until it
//!    reports the [`TransitionOutcome`].
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Rect, Vec2};
//! use understory_transition::{
//!     InteractiveDriver, Operation, SpringParams, TransitionContext, TransitionOutcome, defaults,
//! };
//!
//! let bounds = Rect::new(0.0, 0.0, 400.0, 800.0);
//! let animators = defaults::slide_pop(bounds.width(), defaults::DEFAULT_DURATION);
//! let mut ctx = TransitionContext::new(Operation::Pop, bounds, true, 2, 1, animators);
//!
//! let mut driver = InteractiveDriver::new(SpringParams::default());
//! driver.begin(&mut ctx);
//! driver.update(&mut ctx, 0.8, Vec2::new(120.0, 0.0));
//! driver.finish(&ctx, Vec2::ZERO);
//!
//! let outcome = loop {
//!     if let Some(outcome) = driver.tick(&mut ctx, 1.0 / 60.0) {
//!         break outcome;
//!     }
//! };
//! assert_eq!(outcome, TransitionOutcome::Finished);
//! assert_eq!(ctx.progress(), 1.0);
//! ```

use kurbo::Vec2;

use crate::context::{TransitionContext, TransitionOutcome};
use crate::spring::{SettleDirection, SpringParams, SpringSimulation};

/// Drives a [`TransitionContext`] from a gesture, then settles it with a spring.
#[derive(Clone, Debug)]
pub struct InteractiveDriver {
    params: SpringParams,
    progress: f64,
    velocity: Vec2,
    simulation: Option<SpringSimulation>,
}

impl InteractiveDriver {
    /// Creates a driver that will settle with `params`.
    #[must_use]
    pub fn new(params: SpringParams) -> Self {
        Self {
            params,
            progress: 0.0,
            velocity: Vec2::ZERO,
            simulation: None,
        }
    }

    /// Puts `context` into interactive mode at progress `0.0`.
    pub fn begin<S>(&mut self, context: &mut TransitionContext<S>) {
        self.progress = 0.0;
        context.begin_interactive();
    }

    /// Last progress forwarded to the context.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Last gesture velocity seen.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Whether the gesture has been released and the spring is running.
    #[must_use]
    pub fn is_settling(&self) -> bool {
        self.simulation.is_some()
    }

    /// The running spring, if released.
    #[must_use]
    pub fn simulation(&self) -> Option<&SpringSimulation> {
        self.simulation.as_ref()
    }

    /// Forwards gesture progress to `context`. Ignored once settling.
    pub fn update<S>(&mut self, context: &mut TransitionContext<S>, progress: f64, velocity: Vec2) {
        if self.simulation.is_some() {
            return;
        }
        self.progress = progress.clamp(0.0, 1.0);
        self.velocity = velocity;
        context.update_progress(self.progress);
    }

    /// Releases towards the end of the transition.
    pub fn finish<S>(&mut self, context: &TransitionContext<S>, velocity: Vec2) {
        self.release(SettleDirection::Finish, context, velocity);
    }

    /// Releases back towards the start of the transition.
    pub fn cancel<S>(&mut self, context: &TransitionContext<S>, velocity: Vec2) {
        self.release(SettleDirection::Cancel, context, velocity);
    }

    fn release<S>(
        &mut self,
        direction: SettleDirection,
        context: &TransitionContext<S>,
        velocity: Vec2,
    ) {
        if self.simulation.is_some() {
            return;
        }
        self.velocity = velocity;
        tracing::debug!(
            ?direction,
            progress = self.progress,
            velocity = velocity.x,
            "interactive transition released"
        );
        self.simulation = Some(SpringSimulation::new(
            direction,
            self.params,
            self.progress,
            context.container().width(),
            velocity.x,
        ));
    }

    /// Steps the spring by `dt` seconds and forwards the new progress.
    ///
    /// On the terminal tick, finishes or cancels `context` and returns its
    /// outcome. Returns `None` before release and while still moving.
    pub fn tick<S>(
        &mut self,
        context: &mut TransitionContext<S>,
        dt: f64,
    ) -> Option<TransitionOutcome> {
        let simulation = self.simulation.as_mut()?;
        let progress = simulation.step(dt);
        self.progress = progress.clamp(0.0, 1.0);
        context.update_progress(progress);
        if !simulation.is_at_rest() {
            return None;
        }
        match simulation.direction() {
            SettleDirection::Finish => context.finish(),
            SettleDirection::Cancel => context.cancel(),
        }
    }
}
