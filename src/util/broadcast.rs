//! In-process publish/subscribe channel for drawer coordination.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hooks publish and subscribe to [`DrawerSignal`]s here instead of reaching for
//! window events directly. The DOM bridge (`util::dom_bridge`) is just another
//! subscriber/publisher that mirrors the window-event contract sibling
//! micro-frontends rely on.
//!
//! DESIGN
//! ======
//! Dispatch is synchronous. The subscriber list is snapshotted before handlers
//! run, so a handler may publish or unsubscribe without deadlocking.

#[cfg(test)]
#[path = "broadcast_test.rs"]
mod broadcast_test;

use std::sync::{Arc, Mutex, PoisonError};

/// Window event carrying the header's open/close request.
pub const SIDEBAR_TOGGLE_EVENT: &str = "sidebar-toggle";
/// Window event announcing the drawer closed itself.
pub const SIDEBAR_CLOSE_EVENT: &str = "sidebar-close";
/// Window event announcing a new selected account.
pub const ACCOUNT_CHANGED_EVENT: &str = "accountIdChanged";
/// Window event fired by single-spa once a reroute completes.
pub const ROUTING_EVENT: &str = "single-spa:routing-event";
pub const POPSTATE_EVENT: &str = "popstate";
pub const HASHCHANGE_EVENT: &str = "hashchange";
pub const RESIZE_EVENT: &str = "resize";

/// What triggered a route refresh.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteSource {
    /// single-spa finished rerouting.
    RoutingEvent,
    /// Browser back/forward.
    PopState,
    HashChange,
}

impl RouteSource {
    /// Whether the path read should wait one tick for the URL to settle.
    pub fn defers_read(self) -> bool {
        matches!(self, Self::RoutingEvent)
    }

    /// Map a window event name to its route source.
    pub fn from_event_name(name: &str) -> Option<Self> {
        match name {
            ROUTING_EVENT => Some(Self::RoutingEvent),
            POPSTATE_EVENT => Some(Self::PopState),
            HASHCHANGE_EVENT => Some(Self::HashChange),
            _ => None,
        }
    }
}

/// A fire-and-forget notification on the drawer bus.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawerSignal {
    /// External request to open or close the sidebar.
    SidebarToggle { is_open: bool },
    /// The drawer closed itself.
    SidebarClosed,
    /// A new account was selected and persisted.
    AccountSelected { account_id: String },
    /// The browser route may have changed.
    RouteChanged(RouteSource),
    /// The viewport was resized to `width` CSS pixels.
    ViewportResized { width: f64 },
}

impl DrawerSignal {
    /// Window event name this signal is mirrored to, for outbound signals.
    pub fn outbound_event_name(&self) -> Option<&'static str> {
        match self {
            Self::SidebarClosed => Some(SIDEBAR_CLOSE_EVENT),
            Self::AccountSelected { .. } => Some(ACCOUNT_CHANGED_EVENT),
            Self::SidebarToggle { .. } | Self::RouteChanged(_) | Self::ViewportResized { .. } => None,
        }
    }
}

/// Handle returned by [`Broadcast::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Handler = Arc<dyn Fn(&DrawerSignal) + Send + Sync>;

#[derive(Default)]
struct BusInner {
    next_id: u64,
    handlers: Vec<(SubscriptionId, Handler)>,
}

/// Cloneable handle to a shared signal bus.
#[derive(Clone, Default)]
pub struct Broadcast {
    inner: Arc<Mutex<BusInner>>,
}

impl std::fmt::Debug for Broadcast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Broadcast")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

impl Broadcast {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for every subsequent signal.
    pub fn subscribe<F>(&self, handler: F) -> SubscriptionId
    where
        F: Fn(&DrawerSignal) + Send + Sync + 'static,
    {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.handlers.push((id, Arc::new(handler)));
        id
    }

    /// Drop a subscription. Unknown ids are ignored.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.handlers.retain(|(sid, _)| *sid != id);
    }

    /// Deliver `signal` to every current subscriber, in subscription order.
    pub fn publish(&self, signal: DrawerSignal) {
        let handlers: Vec<Handler> = {
            let inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
            inner.handlers.iter().map(|(_, h)| Arc::clone(h)).collect()
        };
        log::debug!("broadcast {signal:?} to {} subscribers", handlers.len());
        for handler in handlers {
            handler(&signal);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).handlers.len()
    }
}
