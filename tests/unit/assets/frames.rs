use super::*;

#[test]
fn failure_borrows_nearest_earlier_loaded_frame() {
    let mut set = FrameSet::<&'static str>::new(5);
    assert_eq!(set.resolve_loaded(FrameIndex(1), "one"), Resolution::Loaded);
    assert_eq!(set.resolve_failed(FrameIndex(3)), Resolution::Fallback(FrameIndex(1)));
    assert_eq!(set.image(FrameIndex(3)).map(|i| **i), Some("one"));

    // Fallback slots are not themselves fallback sources.
    assert_eq!(set.resolve_failed(FrameIndex(4)), Resolution::Fallback(FrameIndex(1)));
}

#[test]
fn failure_without_predecessor_is_missing() {
    let mut set = FrameSet::<u8>::new(3);
    assert_eq!(set.resolve_failed(FrameIndex(0)), Resolution::Missing);
    assert!(set.image(FrameIndex(0)).is_none());
    assert!(set.wants_fetch(FrameIndex(0)));

    // A later success elsewhere does not retroactively fill the hole.
    set.resolve_loaded(FrameIndex(2), 9);
    assert!(set.image(FrameIndex(0)).is_none());
}

#[test]
fn counter_counts_each_slot_once() {
    let mut set = FrameSet::<u8>::new(2);
    set.resolve_failed(FrameIndex(0));
    set.resolve_loaded(FrameIndex(0), 1);
    set.resolve_loaded(FrameIndex(1), 2);
    set.resolve_loaded(FrameIndex(1), 3);
    let progress = set.progress();
    assert_eq!(progress.resolved, 2);
    assert!(progress.is_complete());
    assert_eq!(progress.fraction(), 1.0);
}

#[test]
fn late_failure_does_not_downgrade_a_loaded_slot() {
    let mut set = FrameSet::<u8>::new(2);
    set.resolve_loaded(FrameIndex(1), 7);
    assert_eq!(set.resolve_failed(FrameIndex(1)), Resolution::Loaded);
    assert!(set.slot(FrameIndex(1)).unwrap().is_loaded());
}

#[test]
fn pending_slots_are_not_requested_twice() {
    let mut set = FrameSet::<u8>::new(4);
    assert!(set.mark_pending(FrameIndex(1)));
    assert!(!set.mark_pending(FrameIndex(1)));
    set.resolve_loaded(FrameIndex(2), 0);

    let wanted = set.unrequested_in(FrameRange::all(4));
    assert_eq!(wanted, vec![FrameIndex(0), FrameIndex(3)]);
}

#[test]
fn out_of_range_resolution_is_ignored() {
    let mut set = FrameSet::<u8>::new(1);
    assert_eq!(set.resolve_loaded(FrameIndex(5), 1), Resolution::Missing);
    assert_eq!(set.resolve_failed(FrameIndex(5)), Resolution::Missing);
    assert_eq!(set.progress().resolved, 0);
    assert!(!set.mark_pending(FrameIndex(5)));
}
