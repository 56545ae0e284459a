//! Reactive driver for responsive layout and sidebar visibility.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use leptos::prelude::*;

use crate::state::layout::LayoutState;
use crate::util::broadcast::{Broadcast, DrawerSignal};
use crate::util::nav;

#[derive(Clone, Copy)]
pub struct LayoutHandle {
    pub state: RwSignal<LayoutState>,
    /// Close the sidebar if it is open on mobile.
    pub close: Callback<()>,
}

/// Track viewport size and the external sidebar toggle.
///
/// A route change while the mobile sidebar is open closes it.
pub fn use_layout(bus: &Broadcast, breakpoint: f64) -> LayoutHandle {
    let state = RwSignal::new(LayoutState::default());
    if let Some(width) = nav::viewport_width() {
        // Sidebar starts closed, so the initial measurement never broadcasts.
        state.update(|s| {
            s.resize(width, breakpoint);
        });
    }

    let relay = bus.clone();
    let subscription = bus.subscribe(move |signal| {
        let emitted = match signal {
            DrawerSignal::ViewportResized { width } => {
                let width = *width;
                state.try_update(|s| s.resize(width, breakpoint)).flatten()
            }
            DrawerSignal::SidebarToggle { is_open } => {
                let is_open = *is_open;
                state.try_update(|s| s.set_open(is_open));
                None
            }
            DrawerSignal::RouteChanged(_) => state.try_update(LayoutState::close).flatten(),
            DrawerSignal::SidebarClosed | DrawerSignal::AccountSelected { .. } => None,
        };
        if let Some(signal) = emitted {
            relay.publish(signal);
        }
    });

    let cleanup_bus = bus.clone();
    on_cleanup(move || cleanup_bus.unsubscribe(subscription));

    let close_bus = bus.clone();
    let close = Callback::new(move |()| {
        if let Some(signal) = state.try_update(LayoutState::close).flatten() {
            close_bus.publish(signal);
        }
    });

    LayoutHandle { state, close }
}
