// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Timing curve mapping an animator's linear fraction to eased progress.
///
/// All curves map `0.0 → 0.0` and `1.0 → 1.0`; inputs outside `[0, 1]` are
/// clamped first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Curve {
    /// Constant speed.
    Linear,
    /// Slow start (cubic).
    EaseIn,
    /// Slow end (cubic).
    EaseOut,
    /// Slow start and end (cubic).
    #[default]
    EaseInOut,
}

impl Curve {
    /// Evaluates the curve at `t`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t * t,
            Self::EaseOut => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
            Self::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = 2.0 - 2.0 * t;
                    1.0 - u * u * u / 2.0
                }
            }
        }
    }
}
