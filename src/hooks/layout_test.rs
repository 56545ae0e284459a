use super::*;
use crate::util::broadcast::RouteSource;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

const BREAKPOINT: f64 = 768.0;

fn count_closes(bus: &Broadcast) -> Arc<AtomicUsize> {
    let closes = Arc::new(AtomicUsize::new(0));
    let sink = Arc::clone(&closes);
    bus.subscribe(move |signal| {
        if *signal == DrawerSignal::SidebarClosed {
            sink.fetch_add(1, Ordering::SeqCst);
        }
    });
    closes
}

#[test]
fn leaving_mobile_while_open_publishes_one_close() {
    let owner = Owner::new();
    owner.with(|| {
        let bus = Broadcast::new();
        let closes = count_closes(&bus);
        let layout = use_layout(&bus, BREAKPOINT);

        bus.publish(DrawerSignal::ViewportResized { width: 500.0 });
        bus.publish(DrawerSignal::SidebarToggle { is_open: true });
        assert!(layout.state.with_untracked(LayoutState::is_overlay_open));

        bus.publish(DrawerSignal::ViewportResized { width: 1024.0 });
        bus.publish(DrawerSignal::ViewportResized { width: 1200.0 });

        assert_eq!(closes.load(Ordering::SeqCst), 1);
        let state = layout.state.get_untracked();
        assert!(!state.is_mobile);
        assert!(!state.is_sidebar_open);
    });
}

#[test]
fn route_change_closes_open_mobile_sidebar() {
    let owner = Owner::new();
    owner.with(|| {
        let bus = Broadcast::new();
        let closes = count_closes(&bus);
        let layout = use_layout(&bus, BREAKPOINT);

        bus.publish(DrawerSignal::ViewportResized { width: 500.0 });
        bus.publish(DrawerSignal::SidebarToggle { is_open: true });
        bus.publish(DrawerSignal::RouteChanged(RouteSource::PopState));

        assert_eq!(closes.load(Ordering::SeqCst), 1);
        assert!(!layout.state.with_untracked(|s| s.is_sidebar_open));

        bus.publish(DrawerSignal::RouteChanged(RouteSource::HashChange));
        assert_eq!(closes.load(Ordering::SeqCst), 1);
    });
}

#[test]
fn route_change_on_desktop_keeps_sidebar_state() {
    let owner = Owner::new();
    owner.with(|| {
        let bus = Broadcast::new();
        let closes = count_closes(&bus);
        let layout = use_layout(&bus, BREAKPOINT);

        bus.publish(DrawerSignal::ViewportResized { width: 1280.0 });
        bus.publish(DrawerSignal::SidebarToggle { is_open: true });
        bus.publish(DrawerSignal::RouteChanged(RouteSource::RoutingEvent));

        assert_eq!(closes.load(Ordering::SeqCst), 0);
        assert!(layout.state.with_untracked(|s| s.is_sidebar_open));
    });
}

#[test]
fn close_callback_publishes_only_when_it_closes() {
    let owner = Owner::new();
    owner.with(|| {
        let bus = Broadcast::new();
        let closes = count_closes(&bus);
        let layout = use_layout(&bus, BREAKPOINT);

        layout.close.run(());
        assert_eq!(closes.load(Ordering::SeqCst), 0);

        bus.publish(DrawerSignal::ViewportResized { width: 500.0 });
        bus.publish(DrawerSignal::SidebarToggle { is_open: true });
        layout.close.run(());
        layout.close.run(());

        assert_eq!(closes.load(Ordering::SeqCst), 1);
    });
}

#[test]
fn cleanup_unsubscribes_from_bus() {
    let bus = Broadcast::new();
    let owner = Owner::new();
    owner.with(|| {
        use_layout(&bus, BREAKPOINT);
    });
    assert_eq!(bus.subscriber_count(), 1);

    owner.cleanup();
    assert_eq!(bus.subscriber_count(), 0);
}
