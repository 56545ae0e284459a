//! Reactive mirror of `location.pathname`.

#[cfg(test)]
#[path = "current_path_test.rs"]
mod current_path_test;

use leptos::prelude::*;

use crate::util::broadcast::{Broadcast, DrawerSignal};
use crate::util::nav;

/// Current browser path, refreshed on every route signal.
///
/// single-spa routing events are read one tick later so the host has finished
/// updating the URL.
pub fn use_current_path(bus: &Broadcast) -> ReadSignal<String> {
    let (path, set_path) = signal(nav::current_path());

    let subscription = bus.subscribe(move |signal| {
        let DrawerSignal::RouteChanged(source) = signal else {
            return;
        };
        #[cfg(feature = "csr")]
        if source.defers_read() {
            gloo_timers::callback::Timeout::new(0, move || set_path.set(nav::current_path())).forget();
            return;
        }
        #[cfg(not(feature = "csr"))]
        let _ = source;
        set_path.set(nav::current_path());
    });

    let bus = bus.clone();
    on_cleanup(move || bus.unsubscribe(subscription));

    path
}
