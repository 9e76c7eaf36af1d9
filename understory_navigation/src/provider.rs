// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection of the animators for a push or pop.

use kurbo::Rect;
use understory_transition::TransitionAnimators;
use understory_transition::defaults::{self, DEFAULT_DURATION};

use crate::screen::Screen;

/// Produces the content and chrome animators for a transition.
///
/// `from` is the screen on top of the stack when the navigation is
/// requested; `to` is the screen that will be on top afterwards.
pub trait AnimationProvider {
    /// Animators for pushing `to` over `from`.
    fn push_animators(
        &self,
        from: &dyn Screen,
        to: &dyn Screen,
        container: Rect,
    ) -> TransitionAnimators;

    /// Animators for popping `from` back to `to`.
    fn pop_animators(
        &self,
        from: &dyn Screen,
        to: &dyn Screen,
        container: Rect,
    ) -> TransitionAnimators;
}

/// Honors [`CustomTransitions`](crate::CustomTransitions) on the current top
/// screen and otherwise falls back to the built-in slides.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DefaultAnimationProvider {
    duration: f64,
}

impl DefaultAnimationProvider {
    /// Creates a provider whose built-in slides last `duration` seconds.
    #[must_use]
    pub fn new(duration: f64) -> Self {
        Self { duration }
    }

    /// Duration of the built-in slides.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.duration
    }
}

impl Default for DefaultAnimationProvider {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION)
    }
}

impl AnimationProvider for DefaultAnimationProvider {
    fn push_animators(
        &self,
        from: &dyn Screen,
        to: &dyn Screen,
        container: Rect,
    ) -> TransitionAnimators {
        from.custom_transitions()
            .and_then(|custom| custom.custom_push_animation(to, container))
            .unwrap_or_else(|| defaults::slide_push(container.width(), self.duration))
    }

    fn pop_animators(
        &self,
        from: &dyn Screen,
        to: &dyn Screen,
        container: Rect,
    ) -> TransitionAnimators {
        from.custom_transitions()
            .and_then(|custom| custom.custom_pop_animation(to, container))
            .unwrap_or_else(|| defaults::slide_pop(container.width(), self.duration))
    }
}
