// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interruptible animators.
//!
//! An [`Animator`] advances a fraction from `0.0` to `1.0` over its duration
//! and exposes the interpolated [`TransitionFrame`] at that fraction. While a
//! gesture drives a transition, the fraction is scrubbed directly through
//! [`Animator::set_fraction_complete`]; afterwards the animator is stopped and
//! parked at one of its ends with [`Animator::finish_at`].
//!
//! ## Lifecycle
//!
//! ```text
//! Inactive --start/pause/set_fraction--> Active --advance to 1.0--> Inactive
//!                                          |
//!                                        stop
//!                                          v
//!                                       Stopped --finish_at--> Inactive
//! ```

use alloc::boxed::Box;
use core::fmt::Debug;

use crate::curve::Curve;
use crate::frame::TransitionFrame;

/// Coarse lifecycle state of an animator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AnimatorState {
    /// Not started, or parked at a terminal position.
    #[default]
    Inactive,
    /// Started (running or paused mid-flight).
    Active,
    /// Stopped mid-flight; waiting for [`Animator::finish_at`].
    Stopped,
}

/// Where [`Animator::finish_at`] parks the animator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimatorPosition {
    /// Fraction `0.0`.
    Start,
    /// Fraction `1.0`.
    End,
    /// Keep the current fraction.
    Current,
}

/// A fractional animation that can be played, scrubbed, and interrupted.
pub trait Animator: Debug {
    /// Total duration in seconds.
    fn duration(&self) -> f64;

    /// Linear fraction complete in `[0, 1]`.
    fn fraction_complete(&self) -> f64;

    /// Whether [`Animator::set_fraction_complete`] has any effect.
    fn is_interruptible(&self) -> bool {
        true
    }

    /// Pauses the animator and jumps to `fraction`.
    ///
    /// Ignored by non-interruptible animators and by stopped animators.
    fn set_fraction_complete(&mut self, fraction: f64);

    /// Current lifecycle state.
    fn state(&self) -> AnimatorState;

    /// Whether [`Animator::advance`] currently moves the fraction.
    fn is_running(&self) -> bool;

    /// Starts (or resumes) playback.
    fn start(&mut self);

    /// Pauses playback, keeping the current fraction.
    fn pause(&mut self);

    /// Advances playback by `dt` seconds.
    ///
    /// Returns `true` on the call that reaches the end.
    fn advance(&mut self, dt: f64) -> bool;

    /// Stops an active animator without settling it.
    fn stop(&mut self);

    /// Parks the animator at `position` and makes it inactive.
    fn finish_at(&mut self, position: AnimatorPosition);

    /// Interpolated placements at the current fraction.
    fn frame(&self) -> TransitionFrame;
}

/// The pair of animators driving one transition.
///
/// Content and chrome are animated independently so that the chrome can lead
/// or lag the screen content.
#[derive(Debug)]
pub struct TransitionAnimators {
    /// Animator for the screen content.
    pub content: Box<dyn Animator>,
    /// Animator for the surrounding chrome (title, back control).
    pub chrome: Box<dyn Animator>,
}

impl TransitionAnimators {
    /// Bundles a content and a chrome animator.
    pub fn new(content: impl Animator + 'static, chrome: impl Animator + 'static) -> Self {
        Self {
            content: Box::new(content),
            chrome: Box::new(chrome),
        }
    }

    /// The longer of the two durations.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.content.duration().max(self.chrome.duration())
    }
}

/// Stock [`Animator`] interpolating between two [`TransitionFrame`]s.
///
/// Playback applies the configured [`Curve`]; scrubbing through
/// [`Animator::set_fraction_complete`] is linear so content tracks the finger.
#[derive(Clone, Debug)]
pub struct PropertyAnimator {
    duration: f64,
    curve: Curve,
    start: TransitionFrame,
    end: TransitionFrame,
    fraction: f64,
    state: AnimatorState,
    running: bool,
    scrubbing: bool,
    interruptible: bool,
}

impl PropertyAnimator {
    /// Creates an interruptible animator from `start` to `end`.
    ///
    /// A non-positive `duration` completes on the first [`Animator::advance`].
    #[must_use]
    pub fn new(duration: f64, curve: Curve, start: TransitionFrame, end: TransitionFrame) -> Self {
        Self {
            duration,
            curve,
            start,
            end,
            fraction: 0.0,
            state: AnimatorState::Inactive,
            running: false,
            scrubbing: false,
            interruptible: true,
        }
    }

    /// Makes the animator ignore [`Animator::set_fraction_complete`].
    #[must_use]
    pub fn non_interruptible(mut self) -> Self {
        self.interruptible = false;
        self
    }

    /// Timing curve used during playback.
    #[must_use]
    pub fn curve(&self) -> Curve {
        self.curve
    }
}

impl Animator for PropertyAnimator {
    fn duration(&self) -> f64 {
        self.duration
    }

    fn fraction_complete(&self) -> f64 {
        self.fraction
    }

    fn is_interruptible(&self) -> bool {
        self.interruptible
    }

    fn set_fraction_complete(&mut self, fraction: f64) {
        if !self.interruptible || self.state == AnimatorState::Stopped {
            return;
        }
        self.fraction = fraction.clamp(0.0, 1.0);
        self.state = AnimatorState::Active;
        self.running = false;
        self.scrubbing = true;
    }

    fn state(&self) -> AnimatorState {
        self.state
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn start(&mut self) {
        if self.state == AnimatorState::Stopped {
            return;
        }
        self.state = AnimatorState::Active;
        self.running = true;
        self.scrubbing = false;
    }

    fn pause(&mut self) {
        if self.state == AnimatorState::Stopped {
            return;
        }
        self.state = AnimatorState::Active;
        self.running = false;
    }

    fn advance(&mut self, dt: f64) -> bool {
        if !self.running || self.state != AnimatorState::Active {
            return false;
        }
        if self.duration <= 0.0 {
            self.fraction = 1.0;
        } else {
            self.fraction = (self.fraction + dt / self.duration).min(1.0);
        }
        if self.fraction >= 1.0 {
            self.running = false;
            self.state = AnimatorState::Inactive;
            return true;
        }
        false
    }

    fn stop(&mut self) {
        if self.state == AnimatorState::Active {
            self.state = AnimatorState::Stopped;
            self.running = false;
        }
    }

    fn finish_at(&mut self, position: AnimatorPosition) {
        match position {
            AnimatorPosition::Start => self.fraction = 0.0,
            AnimatorPosition::End => self.fraction = 1.0,
            AnimatorPosition::Current => {}
        }
        self.state = AnimatorState::Inactive;
        self.running = false;
        self.scrubbing = false;
    }

    fn frame(&self) -> TransitionFrame {
        let t = if self.scrubbing {
            self.fraction
        } else {
            self.curve.apply(self.fraction)
        };
        self.start.lerp(self.end, t)
    }
}
