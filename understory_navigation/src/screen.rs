// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Screens and their optional capabilities.
//!
//! A [`Screen`] is opaque to the stack: it only receives lifecycle
//! notifications and may opt into extra behavior by returning a capability
//! from one of its accessor methods. Each accessor defaults to `None`, which
//! resolves to documented default behavior:
//!
//! | Capability              | Default when absent                          |
//! |-------------------------|----------------------------------------------|
//! | [`CustomTransitions`]   | built-in slide push/pop                      |
//! | [`PopVeto`]             | the screen can always be popped              |
//! | [`InteractivePop`]      | the configured pop start threshold (`0.2`)   |
//! | [`PreviewProvider`]     | no leading-edge swipe-push                   |
//!
//! Capabilities usually return `Some(self)`:
//!
//! ```
//! use understory_navigation::{PopVeto, Screen};
//! use core::cell::Cell;
//!
//! struct Editor { dirty: Cell<bool> }
//!
//! impl PopVeto for Editor {
//!     fn can_be_popped(&self) -> bool { !self.dirty.get() }
//! }
//!
//! impl Screen for Editor {
//!     fn pop_veto(&self) -> Option<&dyn PopVeto> { Some(self) }
//! }
//! ```

use alloc::rc::Rc;
use alloc::string::String;
use core::fmt;

use kurbo::Rect;
use understory_transition::TransitionAnimators;

/// Shared handle to a screen. Identity is pointer identity.
pub type ScreenRef = Rc<dyn Screen>;

/// A navigable unit of content managed by a navigation stack.
pub trait Screen {
    /// Title shown in the chrome while this screen is on top.
    fn title(&self) -> Option<String> {
        None
    }

    /// The screen is about to become the visible screen.
    fn will_appear(&self, _animated: bool) {}

    /// The screen became the visible screen.
    fn did_appear(&self, _animated: bool) {}

    /// The screen is about to stop being the visible screen.
    fn will_disappear(&self, _animated: bool) {}

    /// The screen is no longer the visible screen.
    fn did_disappear(&self, _animated: bool) {}

    /// The screen is about to be dropped by a multi-level pop or stack replacement.
    fn will_be_dismissed(&self) {}

    /// The screen was dropped by a multi-level pop or stack replacement.
    fn did_dismiss(&self) {}

    /// Custom push/pop animations started from this screen.
    fn custom_transitions(&self) -> Option<&dyn CustomTransitions> {
        None
    }

    /// Veto on popping this screen.
    fn pop_veto(&self) -> Option<&dyn PopVeto> {
        None
    }

    /// Override of the swipe-to-pop start threshold.
    fn interactive_pop(&self) -> Option<&dyn InteractivePop> {
        None
    }

    /// Screen to preview with a leading-edge swipe.
    fn preview_provider(&self) -> Option<&dyn PreviewProvider> {
        None
    }
}

/// Per-screen animation overrides.
///
/// The stack asks the screen on top at request time; returning `None` falls
/// back to the stack's animation provider.
pub trait CustomTransitions {
    /// Animation for pushing `to` on top of this screen.
    fn custom_push_animation(
        &self,
        _to: &dyn Screen,
        _container: Rect,
    ) -> Option<TransitionAnimators> {
        None
    }

    /// Animation for popping this screen back to `to`.
    fn custom_pop_animation(
        &self,
        _to: &dyn Screen,
        _container: Rect,
    ) -> Option<TransitionAnimators> {
        None
    }
}

/// Veto on back-navigation.
pub trait PopVeto {
    /// Whether the screen may currently be popped.
    fn can_be_popped(&self) -> bool;
}

/// Swipe-to-pop tuning.
pub trait InteractivePop {
    /// Fraction of the container width, measured from the leading edge, in
    /// which a rightward swipe starts an interactive pop. `None` keeps the
    /// configured default.
    fn start_threshold(&self) -> Option<f64>;
}

/// Declares a screen that a leftward swipe from the trailing edge pushes.
pub trait PreviewProvider {
    /// The screen to preview, if any.
    fn next_screen_to_preview(&self) -> Option<Preview>;
}

/// A screen offered for leading-edge swipe-push.
#[derive(Clone)]
pub struct Preview {
    /// The screen that would be pushed.
    pub screen: ScreenRef,
    /// Fraction of the container width, measured from the trailing edge, in
    /// which a leftward swipe starts the push.
    pub start_threshold: f64,
}

impl Preview {
    /// Creates a preview declaration.
    #[must_use]
    pub fn new(screen: ScreenRef, start_threshold: f64) -> Self {
        Self {
            screen,
            start_threshold,
        }
    }
}

impl fmt::Debug for Preview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Preview")
            .field("screen", &Rc::as_ptr(&self.screen))
            .field("start_threshold", &self.start_threshold)
            .finish()
    }
}

/// Whether `screen` currently allows being popped.
pub(crate) fn can_be_popped(screen: &dyn Screen) -> bool {
    screen.pop_veto().is_none_or(|veto| veto.can_be_popped())
}

/// Pointer identity of two screen handles.
pub(crate) fn same_screen(a: &ScreenRef, b: &ScreenRef) -> bool {
    Rc::ptr_eq(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    struct Plain;
    impl Screen for Plain {}

    struct Guarded(Cell<bool>);
    impl PopVeto for Guarded {
        fn can_be_popped(&self) -> bool {
            self.0.get()
        }
    }
    impl Screen for Guarded {
        fn pop_veto(&self) -> Option<&dyn PopVeto> {
            Some(self)
        }
    }

    #[test]
    fn screens_without_veto_can_be_popped() {
        assert!(can_be_popped(&Plain));
    }

    #[test]
    fn veto_is_consulted_live() {
        let s = Guarded(Cell::new(false));
        assert!(!can_be_popped(&s));
        s.0.set(true);
        assert!(can_be_popped(&s));
    }

    #[test]
    fn identity_is_by_pointer() {
        let a: ScreenRef = Rc::new(Plain);
        let b: ScreenRef = Rc::new(Plain);
        assert!(same_screen(&a, &a.clone()));
        assert!(!same_screen(&a, &b));
    }
}
