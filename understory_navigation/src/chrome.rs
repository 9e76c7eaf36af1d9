// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use crate::screen::ScreenRef;

/// State of the chrome surrounding the visible screen.
///
/// Refreshed after every completed stack mutation. Between transitions the
/// host feeds the visible screen's scroll offset through
/// [`NavigationStack::report_scroll_offset`](crate::NavigationStack::report_scroll_offset),
/// which drives [`Chrome::collapse_fraction`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Chrome {
    title: Option<String>,
    back_title: Option<String>,
    back_visible: bool,
    scroll_offset: f64,
    collapse_fraction: f64,
}

impl Chrome {
    /// Title of the visible screen.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Title of the screen a back control returns to.
    #[must_use]
    pub fn back_title(&self) -> Option<&str> {
        self.back_title.as_deref()
    }

    /// Whether a back control is shown.
    #[must_use]
    pub fn is_back_visible(&self) -> bool {
        self.back_visible
    }

    /// Last reported scroll offset of the visible screen.
    #[must_use]
    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    /// `0.0` fully expanded to `1.0` fully collapsed.
    #[must_use]
    pub fn collapse_fraction(&self) -> f64 {
        self.collapse_fraction
    }

    pub(crate) fn refresh(&mut self, screens: &[ScreenRef]) {
        let depth = screens.len();
        self.title = screens.last().and_then(|top| top.title());
        self.back_title = depth
            .checked_sub(2)
            .and_then(|below| screens[below].title());
        self.back_visible = depth > 1;
        self.scroll_offset = 0.0;
        self.collapse_fraction = 0.0;
    }

    pub(crate) fn apply_scroll_offset(&mut self, offset: f64, collapse_distance: f64) {
        self.scroll_offset = offset;
        self.collapse_fraction = if collapse_distance > 0.0 {
            (offset / collapse_distance).clamp(0.0, 1.0)
        } else if offset > 0.0 {
            1.0
        } else {
            0.0
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::Screen;
    use alloc::rc::Rc;
    use alloc::vec;

    struct Titled(&'static str);
    impl Screen for Titled {
        fn title(&self) -> Option<String> {
            Some(self.0.into())
        }
    }

    #[test]
    fn refresh_reflects_top_and_previous() {
        let mut chrome = Chrome::default();
        let a: ScreenRef = Rc::new(Titled("Inbox"));
        let b: ScreenRef = Rc::new(Titled("Thread"));
        chrome.refresh(&[a.clone()]);
        assert_eq!(chrome.title(), Some("Inbox"));
        assert_eq!(chrome.back_title(), None);
        assert!(!chrome.is_back_visible());

        chrome.refresh(&vec![a, b]);
        assert_eq!(chrome.title(), Some("Thread"));
        assert_eq!(chrome.back_title(), Some("Inbox"));
        assert!(chrome.is_back_visible());
    }

    #[test]
    fn scroll_offset_maps_to_collapse_fraction() {
        let mut chrome = Chrome::default();
        chrome.apply_scroll_offset(22.0, 44.0);
        assert_eq!(chrome.collapse_fraction(), 0.5);
        chrome.apply_scroll_offset(-30.0, 44.0);
        assert_eq!(chrome.collapse_fraction(), 0.0);
        chrome.apply_scroll_offset(500.0, 44.0);
        assert_eq!(chrome.collapse_fraction(), 1.0);
        assert_eq!(chrome.scroll_offset(), 500.0);
    }

    #[test]
    fn refresh_resets_scroll_state() {
        let mut chrome = Chrome::default();
        chrome.apply_scroll_offset(30.0, 44.0);
        chrome.refresh(&[Rc::new(Titled("Inbox")) as ScreenRef]);
        assert_eq!(chrome.scroll_offset(), 0.0);
        assert_eq!(chrome.collapse_fraction(), 0.0);
    }
}
