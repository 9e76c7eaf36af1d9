// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The navigation stack state machine.
//!
//! ```text
//! Idle ── push/pop/pop_to/set_stack ──▶ Transitioning ── outcome ──▶ Idle
//!   │                                        ▲
//!   └──── recognized swipe ──▶ Interactive ── release ───┘
//!                                (Finishing | Cancelling)
//! ```
//!
//! Only `Idle` accepts commands. The screen list is mutated once, when the
//! transition finishes; a cancelled transition leaves it untouched.

use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use kurbo::Rect;
use understory_transition::{
    InteractiveDriver, Operation, SettleDirection, TransitionContext, TransitionFrame,
    TransitionOutcome,
};

use crate::chrome::Chrome;
use crate::config::NavigationConfig;
use crate::gesture::{GestureCoordinator, GestureIntent, PanEvent, PanPhase};
use crate::pending::{NavOutcome, Navigation, Resolver};
use crate::provider::{AnimationProvider, DefaultAnimationProvider};
use crate::screen::{ScreenRef, can_be_popped, same_screen};

/// Why a navigation command was not accepted.
///
/// Commands themselves only return `None`; use
/// [`NavigationStack::check_navigation`] and friends to learn the reason.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rejected {
    /// Another transition is in flight.
    InFlight,
    /// The stack holds only its root.
    RootOnly,
    /// The top screen currently refuses to be popped.
    Vetoed,
    /// The target screen is not on the stack.
    NotOnStack,
    /// The target screen is already on top.
    AlreadyTop,
    /// The screen is already on the stack.
    AlreadyOnStack,
}

impl fmt::Display for Rejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InFlight => "a transition is already in flight",
            Self::RootOnly => "the stack holds only its root screen",
            Self::Vetoed => "the top screen cannot be popped right now",
            Self::NotOnStack => "the target screen is not on the stack",
            Self::AlreadyTop => "the target screen is already on top",
            Self::AlreadyOnStack => "the screen is already on the stack",
        })
    }
}

impl core::error::Error for Rejected {}

/// Stack mutation applied when a transition finishes.
enum StackChange {
    Push,
    Pop,
    PopTo {
        index: usize,
    },
    Replace {
        screens: Vec<ScreenRef>,
        removed: Vec<ScreenRef>,
    },
}

struct ActiveTransition {
    context: TransitionContext<ScreenRef>,
    change: StackChange,
    driver: Option<InteractiveDriver>,
    resolver: Resolver,
}

/// An ordered stack of screens with animated and swipe-driven transitions.
///
/// The bottom screen is the root and the top screen is visible. The stack is
/// never empty. At most one transition is open at a time; commands issued
/// while one is open return `None` and change nothing.
///
/// Time is driven by the host: call [`NavigationStack::tick`] once per frame
/// while [`NavigationStack::is_transitioning`] is `true`.
pub struct NavigationStack {
    screens: Vec<ScreenRef>,
    container: Rect,
    config: NavigationConfig,
    provider: Box<dyn AnimationProvider>,
    chrome: Chrome,
    gesture: GestureCoordinator,
    transition: Option<ActiveTransition>,
}

impl NavigationStack {
    /// Creates a stack holding `root`, laid out in `container`.
    ///
    /// The root is assumed to be visible already and receives no appear
    /// notifications.
    #[must_use]
    pub fn new(root: ScreenRef, container: Rect) -> Self {
        Self::with_config(root, container, NavigationConfig::default())
    }

    /// Creates a stack with explicit tunables.
    #[must_use]
    pub fn with_config(root: ScreenRef, container: Rect, config: NavigationConfig) -> Self {
        let screens = vec![root];
        let mut chrome = Chrome::default();
        chrome.refresh(&screens);
        Self {
            screens,
            container,
            config,
            provider: Box::new(DefaultAnimationProvider::new(config.duration)),
            chrome,
            gesture: GestureCoordinator::new(),
            transition: None,
        }
    }

    /// Replaces the animation provider used for subsequent transitions.
    pub fn set_animation_provider(&mut self, provider: impl AnimationProvider + 'static) {
        self.provider = Box::new(provider);
    }

    /// Updates the container bounds.
    ///
    /// A transition already in flight keeps the bounds it was opened with.
    pub fn set_container(&mut self, container: Rect) {
        self.container = container;
    }

    /// Current container bounds.
    #[must_use]
    pub fn container(&self) -> Rect {
        self.container
    }

    /// Tunables in effect.
    #[must_use]
    pub fn config(&self) -> &NavigationConfig {
        &self.config
    }

    /// Screens from root to top.
    #[must_use]
    pub fn screens(&self) -> &[ScreenRef] {
        &self.screens
    }

    /// The visible screen.
    #[must_use]
    pub fn top(&self) -> &ScreenRef {
        &self.screens[self.screens.len() - 1]
    }

    /// The bottom screen.
    #[must_use]
    pub fn root(&self) -> &ScreenRef {
        &self.screens[0]
    }

    /// Number of screens on the stack; always at least one.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.screens.len()
    }

    /// Whether `screen` is on the stack.
    #[must_use]
    pub fn contains(&self, screen: &ScreenRef) -> bool {
        self.position(screen).is_some()
    }

    /// Whether a transition is open.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    /// Whether the open transition is driven by a swipe.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.transition.as_ref().is_some_and(|t| t.driver.is_some())
    }

    /// The open transition, if any.
    #[must_use]
    pub fn transition(&self) -> Option<&TransitionContext<ScreenRef>> {
        self.transition.as_ref().map(|t| &t.context)
    }

    /// Current content placement of the open transition.
    #[must_use]
    pub fn transition_frame(&self) -> Option<TransitionFrame> {
        self.transition().map(TransitionContext::content_frame)
    }

    /// Chrome state for the visible screen.
    #[must_use]
    pub fn chrome(&self) -> &Chrome {
        &self.chrome
    }

    /// Swipe interpretation state.
    #[must_use]
    pub fn gesture(&self) -> &GestureCoordinator {
        &self.gesture
    }

    /// Whether a command could start now.
    pub fn check_navigation(&self) -> Result<(), Rejected> {
        if self.transition.is_some() {
            Err(Rejected::InFlight)
        } else {
            Ok(())
        }
    }

    /// Whether [`NavigationStack::pop`] would be accepted now.
    pub fn check_pop(&self) -> Result<(), Rejected> {
        self.check_navigation()?;
        if self.screens.len() <= 1 {
            return Err(Rejected::RootOnly);
        }
        if !can_be_popped(&**self.top()) {
            return Err(Rejected::Vetoed);
        }
        Ok(())
    }

    /// Whether [`NavigationStack::push`] of `screen` would be accepted now.
    pub fn check_push(&self, screen: &ScreenRef) -> Result<(), Rejected> {
        self.check_navigation()?;
        if self.contains(screen) {
            return Err(Rejected::AlreadyOnStack);
        }
        Ok(())
    }

    /// Whether [`NavigationStack::pop_to`] of `target` would be accepted now,
    /// returning the target's index.
    pub fn check_pop_to(&self, target: &ScreenRef) -> Result<usize, Rejected> {
        self.check_navigation()?;
        let index = self.position(target).ok_or(Rejected::NotOnStack)?;
        if index + 1 == self.screens.len() {
            return Err(Rejected::AlreadyTop);
        }
        Ok(index)
    }

    /// Pushes `screen` on top.
    ///
    /// The screen is appended only when the transition finishes.
    pub fn push(&mut self, screen: ScreenRef, animated: bool) -> Option<Navigation> {
        if let Err(reason) = self.check_push(&screen) {
            return rejected("push", reason);
        }
        Some(self.open_push(screen, animated, false))
    }

    /// Pops the top screen.
    ///
    /// Rejected on a root-only stack or when the top screen's
    /// [`PopVeto`](crate::PopVeto) refuses. The popped screen is reported by
    /// [`NavOutcome::popped`].
    pub fn pop(&mut self, animated: bool) -> Option<Navigation> {
        if let Err(reason) = self.check_pop() {
            return rejected("pop", reason);
        }
        Some(self.open_pop(animated, false))
    }

    /// Pops every screen above `target`.
    ///
    /// The dropped screens receive [`Screen::will_be_dismissed`] before the
    /// transition and [`Screen::did_dismiss`] after it.
    ///
    /// [`Screen::will_be_dismissed`]: crate::Screen::will_be_dismissed
    /// [`Screen::did_dismiss`]: crate::Screen::did_dismiss
    pub fn pop_to(&mut self, target: &ScreenRef, animated: bool) -> Option<Navigation> {
        let index = match self.check_pop_to(target) {
            Ok(index) => index,
            Err(reason) => return rejected("pop_to", reason),
        };
        for screen in &self.screens[index + 1..] {
            screen.will_be_dismissed();
        }
        let from = self.top().clone();
        let to = self.screens[index].clone();
        let animators = self.provider.pop_animators(&*from, &*to, self.container);
        let context =
            TransitionContext::new(Operation::Pop, self.container, animated, from, to, animators);
        Some(self.open(context, StackChange::PopTo { index }, false))
    }

    /// Pops every screen above the root.
    pub fn pop_to_root(&mut self, animated: bool) -> Option<Navigation> {
        let root = self.root().clone();
        self.pop_to(&root, animated)
    }

    /// Replaces the whole stack with `screens`, root first.
    ///
    /// Screens that are not kept are dismissed. The transition animates as a
    /// push when the new top was not on the stack, as a pop when it was, and
    /// not at all when the top is unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `screens` is empty.
    pub fn set_stack(&mut self, screens: Vec<ScreenRef>, animated: bool) -> Option<Navigation> {
        assert!(!screens.is_empty(), "a navigation stack cannot be emptied");
        if let Err(reason) = self.check_set_stack(&screens) {
            return rejected("set_stack", reason);
        }
        let removed: Vec<ScreenRef> = self
            .screens
            .iter()
            .filter(|old| !screens.iter().any(|new| same_screen(old, new)))
            .cloned()
            .collect();
        for screen in &removed {
            screen.will_be_dismissed();
        }

        let from = self.top().clone();
        let to = screens[screens.len() - 1].clone();
        if same_screen(&from, &to) {
            tracing::debug!(depth = screens.len(), "stack replaced under the visible screen");
            self.screens = screens;
            self.chrome.refresh(&self.screens);
            for screen in &removed {
                screen.did_dismiss();
            }
            let (navigation, resolver) = Navigation::new();
            resolver.resolve(NavOutcome::Completed { removed });
            return Some(navigation);
        }

        let (operation, animators) = if self.contains(&to) {
            (Operation::Pop, self.provider.pop_animators(&*from, &*to, self.container))
        } else {
            (Operation::Push, self.provider.push_animators(&*from, &*to, self.container))
        };
        let context =
            TransitionContext::new(operation, self.container, animated, from, to, animators);
        Some(self.open(context, StackChange::Replace { screens, removed }, false))
    }

    /// Feeds a swipe event.
    ///
    /// A `Began` event may open an interactive pop or preview push; later
    /// events drive or release it. Returns `true` if the event was consumed
    /// for navigation, `false` if it should go to the content instead.
    pub fn handle_pan(&mut self, event: &PanEvent) -> bool {
        match event.phase {
            PanPhase::Began => self.begin_swipe(event),
            PanPhase::Changed => self.drive_swipe(event),
            PanPhase::Ended => self.release_swipe(event, false),
            PanPhase::Cancelled => self.release_swipe(event, true),
        }
    }

    /// Advances the open transition by `dt` seconds.
    ///
    /// Plays programmatic animations and settles released swipes. Returns
    /// `true` while a transition remains open.
    pub fn tick(&mut self, dt: f64) -> bool {
        let Some(active) = &mut self.transition else {
            return false;
        };
        let outcome = match &mut active.driver {
            Some(driver) => driver.tick(&mut active.context, dt),
            None => active.context.tick(dt),
        };
        if let Some(outcome) = outcome {
            self.complete(outcome);
        }
        self.transition.is_some()
    }

    /// Reports the visible screen's scroll offset to the chrome.
    ///
    /// Ignored while a transition is open. Returns `true` if applied.
    pub fn report_scroll_offset(&mut self, offset: f64) -> bool {
        if self.transition.is_some() {
            tracing::trace!(offset, "scroll offset ignored during transition");
            return false;
        }
        self.chrome
            .apply_scroll_offset(offset, self.config.chrome_collapse_distance);
        true
    }

    fn position(&self, screen: &ScreenRef) -> Option<usize> {
        self.screens.iter().position(|s| same_screen(s, screen))
    }

    fn check_set_stack(&self, screens: &[ScreenRef]) -> Result<(), Rejected> {
        self.check_navigation()?;
        for (i, screen) in screens.iter().enumerate() {
            if screens[..i].iter().any(|earlier| same_screen(earlier, screen)) {
                return Err(Rejected::AlreadyOnStack);
            }
        }
        Ok(())
    }

    fn open_push(&mut self, screen: ScreenRef, animated: bool, interactive: bool) -> Navigation {
        let from = self.top().clone();
        let animators = self.provider.push_animators(&*from, &*screen, self.container);
        let context = TransitionContext::new(
            Operation::Push,
            self.container,
            animated,
            from,
            screen,
            animators,
        );
        self.open(context, StackChange::Push, interactive)
    }

    fn open_pop(&mut self, animated: bool, interactive: bool) -> Navigation {
        let depth = self.screens.len();
        let from = self.screens[depth - 1].clone();
        let to = self.screens[depth - 2].clone();
        let animators = self.provider.pop_animators(&*from, &*to, self.container);
        let context =
            TransitionContext::new(Operation::Pop, self.container, animated, from, to, animators);
        self.open(context, StackChange::Pop, interactive)
    }

    fn open(
        &mut self,
        mut context: TransitionContext<ScreenRef>,
        change: StackChange,
        interactive: bool,
    ) -> Navigation {
        let animated = context.is_animated();
        context.from().will_disappear(animated);
        context.to().will_appear(animated);

        let driver = if interactive {
            let mut driver = InteractiveDriver::new(self.config.spring);
            driver.begin(&mut context);
            Some(driver)
        } else {
            if animated {
                context.start();
            }
            None
        };
        tracing::debug!(
            operation = ?context.operation(),
            animated,
            interactive,
            depth = self.screens.len(),
            "transition opened"
        );

        let (navigation, resolver) = Navigation::new();
        self.transition = Some(ActiveTransition {
            context,
            change,
            driver,
            resolver,
        });
        if !animated && !interactive {
            let outcome = self.transition.as_mut().and_then(|t| t.context.finish());
            if let Some(outcome) = outcome {
                self.complete(outcome);
            }
        }
        navigation
    }

    fn complete(&mut self, outcome: TransitionOutcome) {
        let Some(ActiveTransition {
            context,
            change,
            resolver,
            ..
        }) = self.transition.take()
        else {
            return;
        };
        self.gesture.reset();
        let animated = context.is_animated();
        let (from, to) = context.into_screens();

        let result = match outcome {
            TransitionOutcome::Finished => {
                from.did_disappear(animated);
                let (removed, dismissed) = self.apply(change, &to);
                self.chrome.refresh(&self.screens);
                to.did_appear(animated);
                if dismissed {
                    for screen in &removed {
                        screen.did_dismiss();
                    }
                }
                NavOutcome::Completed { removed }
            }
            TransitionOutcome::Cancelled => {
                to.will_disappear(animated);
                from.will_appear(animated);
                to.did_disappear(animated);
                from.did_appear(animated);
                NavOutcome::Cancelled
            }
        };
        tracing::debug!(
            depth = self.screens.len(),
            completed = result.is_completed(),
            "navigation resolved"
        );
        resolver.resolve(result);
    }

    /// Applies `change`, returning the removed screens and whether they are
    /// owed a dismissal notification.
    fn apply(&mut self, change: StackChange, to: &ScreenRef) -> (Vec<ScreenRef>, bool) {
        match change {
            StackChange::Push => {
                self.screens.push(to.clone());
                (Vec::new(), false)
            }
            StackChange::Pop => (self.screens.pop().into_iter().collect(), false),
            StackChange::PopTo { index } => (self.screens.split_off(index + 1), true),
            StackChange::Replace { screens, removed } => {
                self.screens = screens;
                (removed, true)
            }
        }
    }

    fn begin_swipe(&mut self, event: &PanEvent) -> bool {
        if self.transition.is_some() {
            return false;
        }
        let top = self.top().clone();
        let intent = self.gesture.begin(
            event,
            self.container,
            self.screens.len(),
            &*top,
            self.config.pop_start_threshold,
        );
        let accepted = match intent {
            None => return false,
            Some(GestureIntent::Pop) => self.check_pop().map(|()| {
                self.open_pop(true, true);
            }),
            Some(GestureIntent::Push(screen)) => self.check_push(&screen).map(|()| {
                self.open_push(screen, true, true);
            }),
        };
        if let Err(reason) = accepted {
            tracing::debug!(%reason, "swipe recognized but navigation rejected");
            self.gesture.reset();
            return false;
        }
        self.drive_swipe(event);
        true
    }

    fn drive_swipe(&mut self, event: &PanEvent) -> bool {
        let Some(ActiveTransition {
            context,
            driver: Some(driver),
            ..
        }) = &mut self.transition
        else {
            return false;
        };
        let Some(progress) = self.gesture.progress(event, context.container().width()) else {
            return false;
        };
        driver.update(context, progress, event.velocity);
        true
    }

    fn release_swipe(&mut self, event: &PanEvent, cancelled: bool) -> bool {
        let Some(ActiveTransition {
            context,
            driver: Some(driver),
            ..
        }) = &mut self.transition
        else {
            return false;
        };
        if driver.is_settling() {
            return false;
        }
        let decision = if cancelled {
            Some(SettleDirection::Cancel)
        } else {
            self.gesture.release(
                event,
                context.container().width(),
                driver.progress(),
                context.duration(),
                self.config.completion_threshold,
            )
        };
        match decision {
            Some(SettleDirection::Finish) => driver.finish(context, event.velocity),
            Some(SettleDirection::Cancel) => driver.cancel(context, event.velocity),
            None => return false,
        }
        self.gesture.reset();
        true
    }
}

impl fmt::Debug for NavigationStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationStack")
            .field("depth", &self.screens.len())
            .field("container", &self.container)
            .field("config", &self.config)
            .field("chrome", &self.chrome)
            .field("gesture", &self.gesture)
            .field("transition", &self.transition())
            .finish_non_exhaustive()
    }
}

fn rejected(command: &'static str, reason: Rejected) -> Option<Navigation> {
    tracing::debug!(command, %reason, "navigation rejected");
    None
}
