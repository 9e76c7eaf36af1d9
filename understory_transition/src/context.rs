// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-transition context.
//!
//! A [`TransitionContext`] is created for every push or pop and discarded when
//! it completes. It owns the two screens taking part, the container bounds and
//! the [`TransitionAnimators`], and reports its [`TransitionOutcome`] exactly
//! once: the first call to [`TransitionContext::finish`],
//! [`TransitionContext::cancel`] or a terminal [`TransitionContext::tick`]
//! returns `Some`, every later call returns `None`.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Rect;
//! use understory_transition::{Operation, TransitionContext, TransitionOutcome, defaults};
//!
//! let bounds = Rect::new(0.0, 0.0, 400.0, 800.0);
//! let animators = defaults::slide_push(bounds.width(), defaults::DEFAULT_DURATION);
//! let mut ctx =
//!     TransitionContext::new(Operation::Push, bounds, true, "list", "detail", animators);
//!
//! // Interactive scrubbing.
//! ctx.update_progress(0.25);
//! assert_eq!(ctx.progress(), 0.25);
//!
//! assert_eq!(ctx.cancel(), Some(TransitionOutcome::Cancelled));
//! assert!(ctx.is_cancelled());
//! // Completion is reported once.
//! assert_eq!(ctx.finish(), None);
//! ```

use core::fmt;

use kurbo::Rect;

use crate::animator::{AnimatorPosition, AnimatorState, TransitionAnimators};
use crate::frame::TransitionFrame;

/// Direction of a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// A screen is added on top.
    Push,
    /// One or more screens are removed from the top.
    Pop,
}

/// How a transition ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransitionOutcome {
    /// The destination screen became visible.
    Finished,
    /// The transition was rolled back to the originating screen.
    Cancelled,
}

impl TransitionOutcome {
    /// Returns `true` for [`TransitionOutcome::Finished`].
    #[must_use]
    pub fn is_success(self) -> bool {
        matches!(self, Self::Finished)
    }
}

/// State of one in-flight transition between two screens of type `S`.
pub struct TransitionContext<S> {
    operation: Operation,
    container: Rect,
    animated: bool,
    from: S,
    to: S,
    animators: TransitionAnimators,
    interactive: bool,
    cancelled: bool,
    completed: bool,
}

impl<S> TransitionContext<S> {
    /// Creates a context; animators are left untouched until
    /// [`TransitionContext::start`] or [`TransitionContext::begin_interactive`].
    pub fn new(
        operation: Operation,
        container: Rect,
        animated: bool,
        from: S,
        to: S,
        animators: TransitionAnimators,
    ) -> Self {
        Self {
            operation,
            container,
            animated,
            from,
            to,
            animators,
            interactive: false,
            cancelled: false,
            completed: false,
        }
    }

    /// Push or pop.
    #[must_use]
    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// Bounds of the shared container.
    #[must_use]
    pub fn container(&self) -> Rect {
        self.container
    }

    /// Whether the transition is animated.
    #[must_use]
    pub fn is_animated(&self) -> bool {
        self.animated
    }

    /// The screen being navigated away from.
    #[must_use]
    pub fn from(&self) -> &S {
        &self.from
    }

    /// The screen being navigated to.
    #[must_use]
    pub fn to(&self) -> &S {
        &self.to
    }

    /// Whether a gesture drives the progress.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Set by [`TransitionContext::cancel`] before completion is reported.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Whether the outcome has been reported.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Total animation duration (the longer of content and chrome).
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.animators.duration()
    }

    /// Fraction complete of the content animator.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.animators.content.fraction_complete()
    }

    /// Current content placements.
    #[must_use]
    pub fn content_frame(&self) -> TransitionFrame {
        self.animators.content.frame()
    }

    /// Current chrome placements.
    #[must_use]
    pub fn chrome_frame(&self) -> TransitionFrame {
        self.animators.chrome.frame()
    }

    /// Starts programmatic playback of both animators.
    pub fn start(&mut self) {
        if self.completed || self.interactive {
            return;
        }
        self.animators.content.start();
        self.animators.chrome.start();
    }

    /// Switches to gesture-driven progress, pinned at the start.
    pub fn begin_interactive(&mut self) {
        if self.completed {
            return;
        }
        self.interactive = true;
        self.update_progress(0.0);
    }

    /// Scrubs both animators to `fraction` (clamped to `[0, 1]`).
    ///
    /// Non-interruptible animators keep their own timing.
    pub fn update_progress(&mut self, fraction: f64) {
        if self.completed {
            return;
        }
        let fraction = fraction.clamp(0.0, 1.0);
        for animator in [&mut self.animators.content, &mut self.animators.chrome] {
            if animator.is_interruptible() {
                animator.set_fraction_complete(fraction);
            }
        }
    }

    /// Advances programmatic playback by `dt` seconds.
    ///
    /// Returns [`TransitionOutcome::Finished`] once both animators have played
    /// to their end. Interactive transitions are settled by their driver and
    /// ignore this call.
    pub fn tick(&mut self, dt: f64) -> Option<TransitionOutcome> {
        if self.completed || self.interactive {
            return None;
        }
        self.animators.content.advance(dt);
        self.animators.chrome.advance(dt);
        let settled = self.animators.content.state() == AnimatorState::Inactive
            && self.animators.chrome.state() == AnimatorState::Inactive;
        if settled {
            self.complete(TransitionOutcome::Finished)
        } else {
            None
        }
    }

    /// Drives both animators to their end and reports success.
    pub fn finish(&mut self) -> Option<TransitionOutcome> {
        if self.completed {
            return None;
        }
        self.settle(AnimatorPosition::End);
        self.complete(TransitionOutcome::Finished)
    }

    /// Rolls both animators back to their start and reports cancellation.
    pub fn cancel(&mut self) -> Option<TransitionOutcome> {
        if self.completed {
            return None;
        }
        self.cancelled = true;
        self.settle(AnimatorPosition::Start);
        self.complete(TransitionOutcome::Cancelled)
    }

    /// Consumes the context, returning `(from, to)`.
    pub fn into_screens(self) -> (S, S) {
        (self.from, self.to)
    }

    fn settle(&mut self, position: AnimatorPosition) {
        let content = &mut self.animators.content;
        let chrome = &mut self.animators.chrome;
        if content.state() == AnimatorState::Active && chrome.state() == AnimatorState::Active {
            content.stop();
            chrome.stop();
        }
        content.finish_at(position);
        chrome.finish_at(position);
    }

    fn complete(&mut self, outcome: TransitionOutcome) -> Option<TransitionOutcome> {
        self.completed = true;
        tracing::debug!(
            operation = ?self.operation,
            ?outcome,
            interactive = self.interactive,
            "transition completed"
        );
        Some(outcome)
    }
}

impl<S> fmt::Debug for TransitionContext<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionContext")
            .field("operation", &self.operation)
            .field("container", &self.container)
            .field("animated", &self.animated)
            .field("animators", &self.animators)
            .field("interactive", &self.interactive)
            .field("cancelled", &self.cancelled)
            .field("completed", &self.completed)
            .finish_non_exhaustive()
    }
}
