use super::*;
use crate::util::broadcast::RouteSource;

#[test]
fn path_starts_empty_outside_browser() {
    let owner = Owner::new();
    owner.with(|| {
        let bus = Broadcast::new();
        let path = use_current_path(&bus);
        bus.publish(DrawerSignal::RouteChanged(RouteSource::PopState));
        assert_eq!(path.get_untracked(), "");
    });
}

#[test]
fn subscription_lives_as_long_as_owner() {
    let bus = Broadcast::new();
    let owner = Owner::new();
    owner.with(|| {
        use_current_path(&bus);
    });
    assert_eq!(bus.subscriber_count(), 1);

    owner.cleanup();
    assert_eq!(bus.subscriber_count(), 0);
}
