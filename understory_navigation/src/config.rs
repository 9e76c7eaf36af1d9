// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use understory_transition::SpringParams;
use understory_transition::defaults::DEFAULT_DURATION;

/// Tunables of a [`NavigationStack`](crate::NavigationStack).
///
/// With the `serde` feature, missing fields deserialize to their defaults.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavigationConfig {
    /// Leading-edge fraction of the width in which a rightward swipe starts
    /// an interactive pop, unless the top screen overrides it.
    pub pop_start_threshold: f64,
    /// Projected completion fraction a released swipe must exceed to finish.
    pub completion_threshold: f64,
    /// Duration of the built-in push/pop animations, in seconds.
    pub duration: f64,
    /// Spring settling a released swipe.
    pub spring: SpringParams,
    /// Scroll distance over which the chrome goes from expanded to collapsed.
    pub chrome_collapse_distance: f64,
}

impl NavigationConfig {
    /// Default [`NavigationConfig::pop_start_threshold`].
    pub const POP_START_THRESHOLD: f64 = 0.2;
    /// Default [`NavigationConfig::completion_threshold`].
    pub const COMPLETION_THRESHOLD: f64 = 0.3;
    /// Default [`NavigationConfig::chrome_collapse_distance`].
    pub const CHROME_COLLAPSE_DISTANCE: f64 = 44.0;
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            pop_start_threshold: Self::POP_START_THRESHOLD,
            completion_threshold: Self::COMPLETION_THRESHOLD,
            duration: DEFAULT_DURATION,
            spring: SpringParams::default(),
            chrome_collapse_distance: Self::CHROME_COLLAPSE_DISTANCE,
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let json = r#"{ "duration": 0.25, "spring": { "friction": 26.0 } }"#;
        let config: NavigationConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.duration, 0.25);
        assert_eq!(config.spring.friction, 26.0);
        assert_eq!(config.spring.stiffness, SpringParams::STIFFNESS);
        assert_eq!(config.pop_start_threshold, NavigationConfig::POP_START_THRESHOLD);
    }
}
