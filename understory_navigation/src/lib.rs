// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_navigation --heading-base-level=0

//! Understory Navigation: a headless screen stack.
//!
//! This crate manages an ordered stack of opaque [`Screen`]s and the
//! transitions between them. It does not render; hosts read the current
//! [`TransitionFrame`](understory_transition::TransitionFrame) and
//! [`Chrome`] state and draw accordingly.
//!
//! - [`NavigationStack`]: `push`, `pop`, `pop_to`, `pop_to_root` and
//!   `set_stack`, with at most one transition open at a time.
//! - [`Screen`] and its optional capabilities ([`CustomTransitions`],
//!   [`PopVeto`], [`InteractivePop`], [`PreviewProvider`]).
//! - [`AnimationProvider`]: chooses content and chrome animators, with
//!   [`DefaultAnimationProvider`] honoring per-screen overrides.
//! - [`GestureCoordinator`] and [`PanTracker`]: swipe-to-pop and swipe-to-push
//!   of a previewed screen, settled by a spring on release.
//! - [`Navigation`]: an awaitable handle resolving to a [`NavOutcome`].
//!
//! The host owns the clock. Call [`NavigationStack::tick`] with the frame
//! interval while [`NavigationStack::is_transitioning`] is `true`; this plays
//! programmatic animations and settles released swipes.
//!
//! ## Example
//!
//! ```rust
//! use std::rc::Rc;
//! use kurbo::Rect;
//! use understory_navigation::{NavigationStack, Screen, ScreenRef};
//!
//! struct Page(&'static str);
//! impl Screen for Page {
//!     fn title(&self) -> Option<String> {
//!         Some(self.0.into())
//!     }
//! }
//!
//! let inbox: ScreenRef = Rc::new(Page("Inbox"));
//! let thread: ScreenRef = Rc::new(Page("Thread"));
//! let mut stack = NavigationStack::new(inbox, Rect::new(0.0, 0.0, 390.0, 844.0));
//!
//! let nav = stack.push(thread.clone(), true).unwrap();
//! // Requests while a transition is open are dropped.
//! assert!(stack.pop(false).is_none());
//!
//! while stack.tick(1.0 / 60.0) {}
//! assert!(nav.outcome().unwrap().is_completed());
//! assert!(Rc::ptr_eq(stack.top(), &thread));
//! assert_eq!(stack.chrome().back_title(), Some("Inbox"));
//!
//! let nav = stack.pop(false).unwrap();
//! let popped = nav.outcome().unwrap().popped().cloned().unwrap();
//! assert!(Rc::ptr_eq(&popped, &thread));
//! assert_eq!(stack.depth(), 1);
//! ```
//!
//! ## Features
//!
//! - `std` (default): forward `std` to `kurbo`, `tracing` and
//!   `understory_transition`.
//! - `libm`: use `libm` for `kurbo` float math in `no_std` builds.
//! - `serde`: derive `Serialize`/`Deserialize` for [`NavigationConfig`].
//!
//! This crate is `no_std` and uses `alloc`. Screens are shared as
//! `Rc<dyn Screen>`; the stack is meant to live on a single UI thread.

#![no_std]

extern crate alloc;

mod chrome;
mod config;
pub mod gesture;
pub mod pending;
mod provider;
mod screen;
mod stack;

pub use chrome::Chrome;
pub use config::NavigationConfig;
pub use gesture::{
    GestureCoordinator, GestureIntent, PanEvent, PanPhase, PanTracker, SwipeDirection,
};
pub use pending::{NavOutcome, Navigation};
pub use provider::{AnimationProvider, DefaultAnimationProvider};
pub use screen::{
    CustomTransitions, InteractivePop, PopVeto, Preview, PreviewProvider, Screen, ScreenRef,
};
pub use stack::{NavigationStack, Rejected};
