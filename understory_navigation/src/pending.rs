// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Awaitable results of navigation commands.
//!
//! Every accepted command returns a [`Navigation`]. Non-animated commands
//! resolve before they return; animated and interactive ones resolve on the
//! tick that completes the transition. A [`Navigation`] can be polled with
//! [`Navigation::outcome`] or awaited as a [`Future`] on the same thread that
//! ticks the stack.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll, Waker};

use crate::screen::ScreenRef;

/// Result of a navigation command.
#[derive(Clone)]
pub enum NavOutcome {
    /// The transition finished and the stack was updated.
    Completed {
        /// Screens removed from the stack, bottom to top. Empty for pushes.
        removed: Vec<ScreenRef>,
    },
    /// The transition was cancelled; the stack is unchanged.
    Cancelled,
}

impl NavOutcome {
    /// Returns `true` for [`NavOutcome::Completed`].
    #[must_use]
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }

    /// Removed screens, or `None` if cancelled.
    #[must_use]
    pub fn removed(&self) -> Option<&[ScreenRef]> {
        match self {
            Self::Completed { removed } => Some(removed),
            Self::Cancelled => None,
        }
    }

    /// Consumes the outcome, returning the removed screens if completed.
    #[must_use]
    pub fn into_removed(self) -> Option<Vec<ScreenRef>> {
        match self {
            Self::Completed { removed } => Some(removed),
            Self::Cancelled => None,
        }
    }

    /// The screen that was on top before the command, if it was removed.
    #[must_use]
    pub fn popped(&self) -> Option<&ScreenRef> {
        self.removed().and_then(<[ScreenRef]>::last)
    }
}

impl fmt::Debug for NavOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Completed { removed } => f
                .debug_struct("Completed")
                .field("removed", &removed.len())
                .finish(),
            Self::Cancelled => f.write_str("Cancelled"),
        }
    }
}

#[derive(Default)]
struct Slot {
    outcome: Option<NavOutcome>,
    waker: Option<Waker>,
}

/// Handle to an accepted navigation command.
pub struct Navigation {
    slot: Rc<RefCell<Slot>>,
}

impl Navigation {
    pub(crate) fn new() -> (Self, Resolver) {
        let slot = Rc::new(RefCell::new(Slot::default()));
        (Self { slot: slot.clone() }, Resolver { slot })
    }

    /// Whether the transition has completed or been cancelled.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.slot.borrow().outcome.is_some()
    }

    /// The outcome, once resolved.
    #[must_use]
    pub fn outcome(&self) -> Option<NavOutcome> {
        self.slot.borrow().outcome.clone()
    }
}

impl fmt::Debug for Navigation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Navigation")
            .field("outcome", &self.slot.borrow().outcome)
            .finish()
    }
}

impl Future for Navigation {
    type Output = NavOutcome;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut slot = self.slot.borrow_mut();
        match &slot.outcome {
            Some(outcome) => Poll::Ready(outcome.clone()),
            None => {
                slot.waker = Some(cx.waker().clone());
                Poll::Pending
            }
        }
    }
}

/// Stack-side half of a [`Navigation`].
///
/// Dropping it unresolved, as happens when the stack is dropped mid-transition,
/// resolves the handle as [`NavOutcome::Cancelled`].
pub(crate) struct Resolver {
    slot: Rc<RefCell<Slot>>,
}

impl Resolver {
    pub(crate) fn resolve(self, outcome: NavOutcome) {
        self.settle(outcome);
    }

    fn settle(&self, outcome: NavOutcome) {
        let waker = {
            let mut slot = self.slot.borrow_mut();
            if slot.outcome.is_some() {
                return;
            }
            slot.outcome = Some(outcome);
            slot.waker.take()
        };
        if let Some(waker) = waker {
            waker.wake();
        }
    }
}

impl Drop for Resolver {
    fn drop(&mut self) {
        self.settle(NavOutcome::Cancelled);
    }
}
