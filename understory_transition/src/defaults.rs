// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Built-in slide transitions used when a screen supplies no custom animation.
//!
//! Push slides the incoming screen in from the trailing edge while the
//! outgoing screen drifts a fraction of the width towards the leading edge.
//! Pop is the mirror image: the top screen slides out to the trailing edge.
//! The chrome cross-fades its titles on a faster-settling curve than the
//! content, so it leads the content slightly.

use crate::animator::{PropertyAnimator, TransitionAnimators};
use crate::curve::Curve;
use crate::frame::{Placement, TransitionFrame};

/// Default duration of push and pop animations, in seconds.
pub const DEFAULT_DURATION: f64 = 0.4;

/// Fraction of the container width the covered screen drifts by.
pub const PARALLAX: f64 = 0.3;

/// Fraction of the container width the chrome titles travel.
const CHROME_TRAVEL: f64 = 0.5;

/// Slide-in-from-trailing-edge push for a container `width` units wide.
#[must_use]
pub fn slide_push(width: f64, duration: f64) -> TransitionAnimators {
    let content = PropertyAnimator::new(
        duration,
        Curve::EaseInOut,
        TransitionFrame::new(Placement::RESTING, Placement::shifted(width)),
        TransitionFrame::new(Placement::shifted(-PARALLAX * width), Placement::RESTING),
    );
    let chrome = PropertyAnimator::new(
        duration,
        Curve::EaseOut,
        TransitionFrame::new(
            Placement::RESTING,
            Placement::shifted(CHROME_TRAVEL * width).with_opacity(0.0),
        ),
        TransitionFrame::new(
            Placement::shifted(-CHROME_TRAVEL * width).with_opacity(0.0),
            Placement::RESTING,
        ),
    );
    TransitionAnimators::new(content, chrome)
}

/// Slide-out-to-trailing-edge pop for a container `width` units wide.
#[must_use]
pub fn slide_pop(width: f64, duration: f64) -> TransitionAnimators {
    let content = PropertyAnimator::new(
        duration,
        Curve::EaseInOut,
        TransitionFrame::new(Placement::RESTING, Placement::shifted(-PARALLAX * width)),
        TransitionFrame::new(Placement::shifted(width), Placement::RESTING),
    );
    let chrome = PropertyAnimator::new(
        duration,
        Curve::EaseOut,
        TransitionFrame::new(
            Placement::RESTING,
            Placement::shifted(-CHROME_TRAVEL * width).with_opacity(0.0),
        ),
        TransitionFrame::new(
            Placement::shifted(CHROME_TRAVEL * width).with_opacity(0.0),
            Placement::RESTING,
        ),
    );
    TransitionAnimators::new(content, chrome)
}
