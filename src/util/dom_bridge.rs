//! Mirror the drawer bus onto window events.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sibling micro-frontends talk to the drawer through window `CustomEvent`s:
//! the header toggles the sidebar with `sidebar-toggle`, and listens for
//! `sidebar-close` and `accountIdChanged`. This bridge is the only place that
//! touches those events; everything inside the drawer uses the bus.

use leptos::prelude::*;
use wasm_bindgen::{JsCast as _, JsValue};

use super::broadcast::{
    Broadcast, DrawerSignal, HASHCHANGE_EVENT, POPSTATE_EVENT, RESIZE_EVENT, ROUTING_EVENT, RouteSource,
    SIDEBAR_TOGGLE_EVENT, SubscriptionId,
};
use super::nav;

/// Installed listeners and the outbound subscription.
pub struct DomBridge {
    bus: Broadcast,
    subscription: SubscriptionId,
    listeners: Vec<WindowListenerHandle>,
}

impl DomBridge {
    /// Remove every window listener and the bus subscription.
    pub fn remove(self) {
        self.bus.unsubscribe(self.subscription);
        for handle in self.listeners {
            handle.remove();
        }
    }
}

/// Start forwarding window events to `bus` and outbound signals to the window.
pub fn install(bus: &Broadcast) -> DomBridge {
    let subscription = bus.subscribe(dispatch);

    let mut listeners = Vec::with_capacity(5);

    let toggle_bus = bus.clone();
    listeners.push(window_event_listener_untyped(SIDEBAR_TOGGLE_EVENT, move |ev| {
        match toggle_detail(&ev) {
            Some(is_open) => toggle_bus.publish(DrawerSignal::SidebarToggle { is_open }),
            None => log::warn!("{SIDEBAR_TOGGLE_EVENT} without a boolean detail.isOpen"),
        }
    }));

    let resize_bus = bus.clone();
    listeners.push(window_event_listener_untyped(RESIZE_EVENT, move |_| {
        if let Some(width) = nav::viewport_width() {
            resize_bus.publish(DrawerSignal::ViewportResized { width });
        }
    }));

    for name in [ROUTING_EVENT, POPSTATE_EVENT, HASHCHANGE_EVENT] {
        let Some(source) = RouteSource::from_event_name(name) else {
            continue;
        };
        let route_bus = bus.clone();
        listeners.push(window_event_listener_untyped(name, move |_| {
            route_bus.publish(DrawerSignal::RouteChanged(source));
        }));
    }

    DomBridge {
        bus: bus.clone(),
        subscription,
        listeners,
    }
}

fn toggle_detail(ev: &web_sys::Event) -> Option<bool> {
    let custom = ev.dyn_ref::<web_sys::CustomEvent>()?;
    js_sys::Reflect::get(&custom.detail(), &JsValue::from_str("isOpen"))
        .ok()?
        .as_bool()
}

fn dispatch(signal: &DrawerSignal) {
    let Some(name) = signal.outbound_event_name() else {
        return;
    };
    let Some(window) = web_sys::window() else {
        return;
    };
    let init = web_sys::CustomEventInit::new();
    if let DrawerSignal::AccountSelected { account_id } = signal {
        let detail = js_sys::Object::new();
        let _ = js_sys::Reflect::set(&detail, &JsValue::from_str("accountId"), &JsValue::from_str(account_id));
        init.set_detail(&detail);
    }
    match web_sys::CustomEvent::new_with_event_init_dict(name, &init) {
        Ok(event) => {
            let _ = window.dispatch_event(&event);
        }
        Err(e) => log::warn!("failed to build {name} event: {e:?}"),
    }
}
