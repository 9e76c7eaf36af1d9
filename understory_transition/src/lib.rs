// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_transition --heading-base-level=0

//! Understory Transition: headless screen transition primitives.
//!
//! This crate models the mechanics of animating between two screens without
//! owning any screens, scene graph, or clock. It provides:
//!
//! - [`Animator`]: an interruptible fractional animation, with the stock
//!   [`PropertyAnimator`] interpolating between two [`TransitionFrame`]s under
//!   a [`Curve`].
//! - [`defaults`]: the built-in slide push/pop animations and
//!   [`defaults::DEFAULT_DURATION`].
//! - [`TransitionContext`]: the state of one in-flight transition, pairing a
//!   content and a chrome animator ([`TransitionAnimators`]) and reporting its
//!   [`TransitionOutcome`] exactly once.
//! - [`InteractiveDriver`] and [`SpringSimulation`]: gesture-driven progress
//!   and the damped spring that settles a released gesture on finish or
//!   cancel.
//!
//! Callers drive time explicitly: [`TransitionContext::tick`] for programmatic
//! playback and [`InteractiveDriver::tick`] for spring settling, both with the
//! frame interval in seconds. Tests can therefore run transitions with a fixed
//! step instead of real display timing.
//!
//! ## Programmatic playback
//!
//! ```rust
//! use kurbo::Rect;
//! use understory_transition::{Operation, TransitionContext, TransitionOutcome, defaults};
//!
//! let bounds = Rect::new(0.0, 0.0, 320.0, 640.0);
//! let animators = defaults::slide_push(bounds.width(), defaults::DEFAULT_DURATION);
//! let mut ctx =
//!     TransitionContext::new(Operation::Push, bounds, true, "inbox", "thread", animators);
//! ctx.start();
//!
//! let mut outcome = None;
//! while outcome.is_none() {
//!     outcome = ctx.tick(1.0 / 60.0);
//! }
//! assert_eq!(outcome, Some(TransitionOutcome::Finished));
//! assert_eq!(ctx.content_frame().to.offset.x, 0.0);
//! ```
//!
//! ## Features
//!
//! - `std` (default): forward `std` to `kurbo` and `tracing`.
//! - `libm`: use `libm` for `kurbo` float math in `no_std` builds.
//! - `serde`: derive `Serialize`/`Deserialize` for [`SpringParams`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod animator;
mod context;
mod curve;
pub mod defaults;
mod frame;
mod interactive;
mod spring;

pub use animator::{
    Animator, AnimatorPosition, AnimatorState, PropertyAnimator, TransitionAnimators,
};
pub use context::{Operation, TransitionContext, TransitionOutcome};
pub use curve::Curve;
pub use frame::{Placement, TransitionFrame};
pub use interactive::InteractiveDriver;
pub use spring::{SettleDirection, SpringParams, SpringSimulation};

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use crate::SpringParams;

    #[test]
    fn spring_params_fill_missing_fields_with_defaults() {
        let params: SpringParams = serde_json::from_str(r#"{ "stiffness": 200.0 }"#).unwrap();
        assert_eq!(params.stiffness, 200.0);
        assert_eq!(params.friction, SpringParams::FRICTION);
        assert_eq!(params.rest_distance, SpringParams::REST_DISTANCE);
    }
}
