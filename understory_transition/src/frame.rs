// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

/// Placement of one screen (or its chrome) at an instant of a transition.
///
/// Offsets are in container units, relative to the screen's resting position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Translation from the resting position.
    pub offset: Vec2,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

impl Placement {
    /// Resting, fully opaque placement.
    pub const RESTING: Self = Self {
        offset: Vec2::ZERO,
        opacity: 1.0,
    };

    /// Creates a placement shifted horizontally by `dx`.
    #[must_use]
    pub const fn shifted(dx: f64) -> Self {
        Self {
            offset: Vec2::new(dx, 0.0),
            opacity: 1.0,
        }
    }

    /// Returns this placement with a different opacity.
    #[must_use]
    pub const fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Linearly interpolates towards `other`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            offset: self.offset.lerp(other.offset, t),
            opacity: self.opacity + (other.opacity - self.opacity) * t,
        }
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self::RESTING
    }
}

/// Placement of both screens taking part in a transition.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TransitionFrame {
    /// The screen being navigated away from.
    pub from: Placement,
    /// The screen being navigated to.
    pub to: Placement,
}

impl TransitionFrame {
    /// Creates a frame from the two placements.
    #[must_use]
    pub const fn new(from: Placement, to: Placement) -> Self {
        Self { from, to }
    }

    /// Linearly interpolates both placements towards `other`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            from: self.from.lerp(other.from, t),
            to: self.to.lerp(other.to, t),
        }
    }
}
