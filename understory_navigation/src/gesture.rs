// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Horizontal swipe interpretation for interactive navigation.
//!
//! - [`PanTracker`] turns raw pointer samples into [`PanEvent`]s carrying the
//!   translation since the press and a release velocity.
//! - [`GestureCoordinator`] decides whether a pan opens an interactive pop
//!   (rightward, from the leading edge) or an interactive push of a previewed
//!   screen (leftward, from the trailing edge), maps movement to progress, and
//!   picks finish or cancel on release.
//!
//! The coordinator only interprets; the stack owns the transition it opens.
//!
//! ## Release decision
//!
//! On release the translation is projected forward by the animation time
//! still to run at the current velocity:
//!
//! ```text
//! leftover   = progress * duration
//! completion = |translation.x + leftover * velocity.x| / width
//! ```
//!
//! The transition finishes iff `completion` is strictly greater than the
//! completion threshold.

use alloc::rc::{Rc, Weak};

use kurbo::{Point, Rect, Vec2};
use understory_transition::SettleDirection;

use crate::screen::{Screen, ScreenRef};

/// Phase of a pan gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PanPhase {
    /// The pointer started moving after a press.
    Began,
    /// The pointer moved.
    Changed,
    /// The pointer was released.
    Ended,
    /// The platform cancelled the gesture.
    Cancelled,
}

/// One pan gesture update in container coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanEvent {
    /// Gesture phase.
    pub phase: PanPhase,
    /// Current pointer position.
    pub location: Point,
    /// Movement since the press.
    pub translation: Vec2,
    /// Current velocity in units per second.
    pub velocity: Vec2,
}

impl PanEvent {
    /// Creates a pan event.
    #[must_use]
    pub fn new(phase: PanPhase, location: Point, translation: Vec2, velocity: Vec2) -> Self {
        Self {
            phase,
            location,
            translation,
            velocity,
        }
    }

    /// Where the pointer was pressed.
    #[must_use]
    pub fn origin(&self) -> Point {
        self.location - self.translation
    }
}

/// Weight of the newest sample in the velocity estimate.
const VELOCITY_SMOOTHING: f64 = 0.5;

/// Builds [`PanEvent`]s from timestamped pointer samples.
///
/// A press followed by a release without movement is a tap and produces no
/// events. Times are in seconds.
#[derive(Clone, Copy, Debug, Default)]
pub struct PanTracker {
    start: Option<Point>,
    last: Option<(Point, f64)>,
    velocity: Option<Vec2>,
    began: bool,
}

impl PanTracker {
    /// Creates an idle tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a press is being tracked.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    /// Starts tracking a press at `pos`.
    pub fn press(&mut self, pos: Point, time: f64) {
        self.start = Some(pos);
        self.last = Some((pos, time));
        self.velocity = None;
        self.began = false;
    }

    /// Records movement; emits `Began` on the first move and `Changed` after.
    pub fn move_to(&mut self, pos: Point, time: f64) -> Option<PanEvent> {
        let start = self.start?;
        self.sample(pos, time);
        let phase = if self.began {
            PanPhase::Changed
        } else {
            self.began = true;
            PanPhase::Began
        };
        Some(PanEvent::new(phase, pos, pos - start, self.current_velocity()))
    }

    /// Ends tracking; emits `Ended` if the pan had begun.
    pub fn release(&mut self, pos: Point, time: f64) -> Option<PanEvent> {
        let start = self.start?;
        let event = if self.began {
            self.sample(pos, time);
            Some(PanEvent::new(
                PanPhase::Ended,
                pos,
                pos - start,
                self.current_velocity(),
            ))
        } else {
            None
        };
        self.reset();
        event
    }

    /// Aborts tracking; emits `Cancelled` if the pan had begun.
    pub fn cancel(&mut self) -> Option<PanEvent> {
        let start = self.start?;
        let event = match (self.began, self.last) {
            (true, Some((pos, _))) => Some(PanEvent::new(
                PanPhase::Cancelled,
                pos,
                pos - start,
                self.current_velocity(),
            )),
            _ => None,
        };
        self.reset();
        event
    }

    fn sample(&mut self, pos: Point, time: f64) {
        if let Some((last_pos, last_time)) = self.last {
            let dt = time - last_time;
            if dt > 0.0 {
                let instant = (pos - last_pos) / dt;
                self.velocity = Some(match self.velocity {
                    Some(v) => v + (instant - v) * VELOCITY_SMOOTHING,
                    None => instant,
                });
            }
        }
        self.last = Some((pos, time));
    }

    fn current_velocity(&self) -> Vec2 {
        self.velocity.unwrap_or(Vec2::ZERO)
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Direction of the swipe driving the current interactive transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SwipeDirection {
    /// No interactive transition.
    #[default]
    None,
    /// Leftward swipe pushing a previewed screen.
    Left,
    /// Rightward swipe popping the top screen.
    Right,
}

/// What a recognized swipe asks the stack to do.
#[derive(Clone)]
pub enum GestureIntent {
    /// Pop the top screen interactively.
    Pop,
    /// Push the previewed screen interactively.
    Push(ScreenRef),
}

impl core::fmt::Debug for GestureIntent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Pop => f.write_str("Pop"),
            Self::Push(screen) => f.debug_tuple("Push").field(&Rc::as_ptr(screen)).finish(),
        }
    }
}

/// Projected completion fraction of a released swipe.
///
/// `progress` is the transition progress at release and `duration` the total
/// animation duration; their product is the animation time still to run.
#[must_use]
pub fn completion_fraction(
    translation_x: f64,
    velocity_x: f64,
    progress: f64,
    duration: f64,
    width: f64,
) -> f64 {
    let leftover = progress * duration;
    (translation_x + leftover * velocity_x).abs() / width
}

/// Interprets pan events as interactive navigation.
///
/// Holds only a weak reference to a previewed screen; the stack owns it once
/// the push opens.
#[derive(Debug, Default)]
pub struct GestureCoordinator {
    direction: SwipeDirection,
    preview: Option<Weak<dyn Screen>>,
}

impl GestureCoordinator {
    /// Creates an idle coordinator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Direction of the swipe in progress.
    #[must_use]
    pub fn direction(&self) -> SwipeDirection {
        self.direction
    }

    /// Whether a swipe currently drives a transition.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.direction != SwipeDirection::None
    }

    /// The screen being previewed by a leftward swipe, if still alive.
    #[must_use]
    pub fn previewed_screen(&self) -> Option<ScreenRef> {
        self.preview.as_ref().and_then(Weak::upgrade)
    }

    /// Interprets a `Began` event.
    ///
    /// `depth` is the number of screens on the stack and `top` the visible
    /// one. Returns `None` (leaving the coordinator idle) when the swipe does
    /// not start inside a threshold or the container is degenerate.
    pub fn begin(
        &mut self,
        event: &PanEvent,
        container: Rect,
        depth: usize,
        top: &dyn Screen,
        default_pop_threshold: f64,
    ) -> Option<GestureIntent> {
        self.reset();
        let width = container.width();
        if width <= 0.0 {
            return None;
        }
        let area = (event.origin().x - container.x0) / width;

        if event.velocity.x > 0.0 && depth > 1 {
            let threshold = top
                .interactive_pop()
                .and_then(|pop| pop.start_threshold())
                .unwrap_or(default_pop_threshold);
            if area < threshold {
                self.direction = SwipeDirection::Right;
                tracing::debug!(area, threshold, "swipe-to-pop recognized");
                return Some(GestureIntent::Pop);
            }
        } else if event.velocity.x < 0.0 {
            let preview = top
                .preview_provider()
                .and_then(|provider| provider.next_screen_to_preview())?;
            if 1.0 - area < preview.start_threshold {
                self.direction = SwipeDirection::Left;
                self.preview = Some(Rc::downgrade(&preview.screen));
                tracing::debug!(
                    area,
                    threshold = preview.start_threshold,
                    "swipe-to-preview recognized"
                );
                return Some(GestureIntent::Push(preview.screen));
            }
        }
        None
    }

    /// Progress implied by a `Changed` event.
    ///
    /// Movement against the swipe direction pins progress at `0.0` rather
    /// than cancelling. Returns `None` when no swipe is active.
    #[must_use]
    pub fn progress(&self, event: &PanEvent, width: f64) -> Option<f64> {
        if width <= 0.0 {
            return None;
        }
        let tx = event.translation.x;
        match self.direction {
            SwipeDirection::None => None,
            SwipeDirection::Right => Some(if tx >= 0.0 { tx.abs() / width } else { 0.0 }),
            SwipeDirection::Left => Some(if tx <= 0.0 { tx.abs() / width } else { 0.0 }),
        }
    }

    /// Finish-or-cancel decision for an `Ended` event.
    ///
    /// Returns `None` when no swipe is active.
    #[must_use]
    pub fn release(
        &self,
        event: &PanEvent,
        width: f64,
        progress: f64,
        duration: f64,
        threshold: f64,
    ) -> Option<SettleDirection> {
        if self.direction == SwipeDirection::None || width <= 0.0 {
            return None;
        }
        let completion = completion_fraction(
            event.translation.x,
            event.velocity.x,
            progress,
            duration,
            width,
        );
        let decision = if completion > threshold {
            SettleDirection::Finish
        } else {
            SettleDirection::Cancel
        };
        tracing::debug!(completion, threshold, ?decision, "swipe released");
        Some(decision)
    }

    /// Returns to idle and drops the preview reference.
    pub fn reset(&mut self) {
        self.direction = SwipeDirection::None;
        self.preview = None;
    }
}
