//! Responsive layout state: mobile detection and sidebar visibility.
//!
//! DESIGN
//! ======
//! Transitions return the signal to broadcast instead of publishing it, so
//! callers can emit after the reactive update has finished. A listener that
//! reacts to `sidebar-close` by toggling the sidebar would otherwise re-enter
//! the update.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use crate::util::broadcast::DrawerSignal;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LayoutState {
    pub is_mobile: bool,
    pub is_sidebar_open: bool,
}

impl LayoutState {
    /// Recompute `is_mobile` for a viewport `width` against `breakpoint`.
    ///
    /// Leaving mobile layout while open force-closes the sidebar.
    pub fn resize(&mut self, width: f64, breakpoint: f64) -> Option<DrawerSignal> {
        self.is_mobile = width <= breakpoint;
        if !self.is_mobile && self.is_sidebar_open {
            self.is_sidebar_open = false;
            return Some(DrawerSignal::SidebarClosed);
        }
        None
    }

    /// Apply an external open/close request.
    pub fn set_open(&mut self, is_open: bool) {
        self.is_sidebar_open = is_open;
    }

    /// Close the sidebar; only acts while mobile and open.
    pub fn close(&mut self) -> Option<DrawerSignal> {
        if self.is_mobile && self.is_sidebar_open {
            self.is_sidebar_open = false;
            return Some(DrawerSignal::SidebarClosed);
        }
        None
    }

    /// Whether the drawer is rendered as an open overlay.
    pub fn is_overlay_open(&self) -> bool {
        self.is_mobile && self.is_sidebar_open
    }
}
