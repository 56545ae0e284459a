use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};

fn recorder(bus: &Broadcast) -> (SubscriptionId, Arc<Mutex<Vec<DrawerSignal>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let id = bus.subscribe(move |signal| sink.lock().unwrap().push(signal.clone()));
    (id, seen)
}

#[test]
fn publish_reaches_every_subscriber() {
    let bus = Broadcast::new();
    let (_, first) = recorder(&bus);
    let (_, second) = recorder(&bus);

    bus.publish(DrawerSignal::SidebarClosed);

    assert_eq!(*first.lock().unwrap(), vec![DrawerSignal::SidebarClosed]);
    assert_eq!(*second.lock().unwrap(), vec![DrawerSignal::SidebarClosed]);
}

#[test]
fn unsubscribe_stops_delivery() {
    let bus = Broadcast::new();
    let (id, seen) = recorder(&bus);
    bus.unsubscribe(id);

    bus.publish(DrawerSignal::SidebarToggle { is_open: true });

    assert!(seen.lock().unwrap().is_empty());
    assert_eq!(bus.subscriber_count(), 0);
}

#[test]
fn clones_share_subscribers() {
    let bus = Broadcast::new();
    let (_, seen) = recorder(&bus);

    bus.clone().publish(DrawerSignal::AccountSelected { account_id: "acc-1".into() });

    assert_eq!(seen.lock().unwrap().len(), 1);
}

#[test]
fn handler_may_publish_without_deadlock() {
    let bus = Broadcast::new();
    let closes = Arc::new(AtomicUsize::new(0));

    let relay = bus.clone();
    bus.subscribe(move |signal| {
        if matches!(signal, DrawerSignal::SidebarToggle { is_open: false }) {
            relay.publish(DrawerSignal::SidebarClosed);
        }
    });
    let counter = Arc::clone(&closes);
    bus.subscribe(move |signal| {
        if *signal == DrawerSignal::SidebarClosed {
            counter.fetch_add(1, Ordering::SeqCst);
        }
    });

    bus.publish(DrawerSignal::SidebarToggle { is_open: false });

    assert_eq!(closes.load(Ordering::SeqCst), 1);
}

#[test]
fn outbound_event_names_match_window_contract() {
    assert_eq!(DrawerSignal::SidebarClosed.outbound_event_name(), Some("sidebar-close"));
    assert_eq!(
        DrawerSignal::AccountSelected { account_id: "a".into() }.outbound_event_name(),
        Some("accountIdChanged")
    );
    assert_eq!(DrawerSignal::SidebarToggle { is_open: true }.outbound_event_name(), None);
    assert_eq!(DrawerSignal::RouteChanged(RouteSource::PopState).outbound_event_name(), None);
    assert_eq!(DrawerSignal::ViewportResized { width: 320.0 }.outbound_event_name(), None);
}

#[test]
fn route_source_from_event_name() {
    assert_eq!(
        RouteSource::from_event_name("single-spa:routing-event"),
        Some(RouteSource::RoutingEvent)
    );
    assert_eq!(RouteSource::from_event_name("popstate"), Some(RouteSource::PopState));
    assert_eq!(RouteSource::from_event_name("hashchange"), Some(RouteSource::HashChange));
    assert_eq!(RouteSource::from_event_name("resize"), None);
}

#[test]
fn only_routing_event_defers_path_read() {
    assert!(RouteSource::RoutingEvent.defers_read());
    assert!(!RouteSource::PopState.defers_read());
    assert!(!RouteSource::HashChange.defers_read());
}
