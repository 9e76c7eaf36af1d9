// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Damped spring used to settle a released interactive transition.
//!
//! The simulation is a fixed-step forward-Euler integration of a unit mass on
//! a spring with linear friction, moving from the current position towards a
//! fixed target:
//!
//! ```text
//! friction = velocity * F
//! spring   = (target - position) * K
//! velocity += (spring - friction) * dt
//! position += velocity * dt
//! ```
//!
//! It comes to rest once `|velocity| < rest_velocity` and
//! `|target - position| < rest_distance`. The default constants (`F = 20`,
//! `K = 150`) are tuned together to settle within a few dozen frames at
//! 60 Hz; change them together or not at all.

/// Sub-steps taken by one [`SpringSimulation::step`] at most.
const MAX_SUBSTEPS: u32 = 600;

/// Tunables of the settling spring.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpringParams {
    /// Friction constant `F`.
    pub friction: f64,
    /// Spring constant `K`.
    pub stiffness: f64,
    /// Speed below which the spring may come to rest, in units per second.
    pub rest_velocity: f64,
    /// Distance to target below which the spring may come to rest.
    pub rest_distance: f64,
}

impl SpringParams {
    /// Default friction constant.
    pub const FRICTION: f64 = 20.0;
    /// Default spring constant.
    pub const STIFFNESS: f64 = 150.0;
    /// Default rest velocity.
    pub const REST_VELOCITY: f64 = 5.0;
    /// Default rest distance.
    pub const REST_DISTANCE: f64 = 1.0;
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            friction: Self::FRICTION,
            stiffness: Self::STIFFNESS,
            rest_velocity: Self::REST_VELOCITY,
            rest_distance: Self::REST_DISTANCE,
        }
    }
}

/// Which end of the transition the spring settles on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SettleDirection {
    /// Settle at progress `1.0` and finish the transition.
    Finish,
    /// Settle at progress `0.0` and cancel the transition.
    Cancel,
}

/// One-dimensional spring moving a transition towards its finish or its start.
///
/// Position is measured along the container width: for
/// [`SettleDirection::Finish`] it starts at `fraction * extent`, for
/// [`SettleDirection::Cancel`] at `(1 - fraction) * extent`. In both cases the
/// target is `extent`, and [`SpringSimulation::progress`] maps the position
/// back onto transition progress.
#[derive(Clone, Debug)]
pub struct SpringSimulation {
    params: SpringParams,
    direction: SettleDirection,
    position: f64,
    velocity: f64,
    target: f64,
    ticks: u32,
    at_rest: bool,
}

impl SpringSimulation {
    /// Longest interval integrated in one forward-Euler sub-step, in seconds.
    pub const MAX_STEP: f64 = 1.0 / 60.0;

    /// Creates a simulation starting at transition progress `fraction`.
    ///
    /// `release_velocity` is the gesture's velocity along the axis; only its
    /// magnitude is used. A non-positive `extent` is at rest immediately.
    #[must_use]
    pub fn new(
        direction: SettleDirection,
        params: SpringParams,
        fraction: f64,
        extent: f64,
        release_velocity: f64,
    ) -> Self {
        let fraction = fraction.clamp(0.0, 1.0);
        let extent = extent.max(0.0);
        let position = match direction {
            SettleDirection::Finish => fraction * extent,
            SettleDirection::Cancel => (1.0 - fraction) * extent,
        };
        Self {
            params,
            direction,
            position,
            velocity: release_velocity.abs(),
            target: extent,
            ticks: 0,
            at_rest: extent <= 0.0,
        }
    }

    /// Direction the spring settles in.
    #[must_use]
    pub fn direction(&self) -> SettleDirection {
        self.direction
    }

    /// Current position along the extent.
    #[must_use]
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Current velocity.
    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Number of steps taken so far.
    #[must_use]
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Whether the terminal condition has been reached.
    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        self.at_rest
    }

    /// Transition progress implied by the current position.
    ///
    /// May briefly leave `[0, 1]` when the spring overshoots.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.target <= 0.0 {
            return match self.direction {
                SettleDirection::Finish => 1.0,
                SettleDirection::Cancel => 0.0,
            };
        }
        let ratio = self.position / self.target;
        match self.direction {
            SettleDirection::Finish => ratio,
            SettleDirection::Cancel => 1.0 - ratio,
        }
    }

    /// Advances the spring by `dt` seconds and returns the new progress.
    ///
    /// The interval is integrated in sub-steps of at most [`Self::MAX_STEP`], so a
    /// slow or irregular frame clock sees the same motion as a 60 Hz one.
    /// A state that stops being finite is snapped to the target and treated
    /// as at rest. Once at rest, further steps are no-ops.
    pub fn step(&mut self, dt: f64) -> f64 {
        if self.at_rest {
            return self.progress();
        }
        let mut remaining = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let mut substeps = 0;
        while remaining > 0.0 && !self.at_rest && substeps < MAX_SUBSTEPS {
            let h = remaining.min(Self::MAX_STEP);
            self.integrate(h);
            remaining -= h;
            substeps += 1;
        }
        self.ticks += 1;
        tracing::trace!(
            tick = self.ticks,
            substeps,
            position = self.position,
            velocity = self.velocity,
            at_rest = self.at_rest,
            "spring step"
        );
        self.progress()
    }

    fn integrate(&mut self, h: f64) {
        let friction_force = self.velocity * self.params.friction;
        let spring_force = (self.target - self.position) * self.params.stiffness;
        let net_force = spring_force - friction_force;
        self.velocity += net_force * h;
        self.position += self.velocity * h;

        if !self.position.is_finite() || !self.velocity.is_finite() {
            tracing::debug!(direction = ?self.direction, "spring diverged, snapping to target");
            self.position = self.target;
            self.velocity = 0.0;
            self.at_rest = true;
            return;
        }
        self.at_rest = self.velocity.abs() < self.params.rest_velocity
            && (self.target - self.position).abs() < self.params.rest_distance;
    }
}
