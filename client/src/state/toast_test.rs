use super::*;

// =============================================================
// Helpers
// =============================================================

fn recorder(hub: &ToastHub) -> (Arc<Mutex<Vec<Vec<u64>>>>, Subscription) {
    let seen = Arc::new(Mutex::new(Vec::<Vec<u64>>::new()));
    let sink = seen.clone();
    let sub = hub.subscribe(move |toasts| {
        sink.lock().unwrap().push(toasts.iter().map(|t| t.id).collect());
    });
    (seen, sub)
}

fn ids(hub: &ToastHub) -> Vec<u64> {
    hub.toasts().iter().map(|t| t.id).collect()
}

// =============================================================
// Id allocation
// =============================================================

#[test]
fn ids_start_at_one_and_increase_by_one() {
    let hub = ToastHub::new();
    assert_eq!(hub.success("saved"), 1);
    assert_eq!(hub.error("failed"), 2);
    assert_eq!(hub.info("heads up"), 3);
    assert_eq!(ids(&hub), vec![1, 2, 3]);
}

#[test]
fn ids_are_not_reused_after_remove() {
    let hub = ToastHub::new();
    let a = hub.info("a");
    hub.remove(a);
    let b = hub.info("b");
    assert_eq!(b, a + 1);
    assert_eq!(ids(&hub), vec![b]);
}

#[test]
fn clones_share_the_same_queue() {
    let hub = ToastHub::new();
    let other = hub.clone();
    hub.info("one");
    assert_eq!(other.info("two"), 2);
    assert_eq!(hub.toasts().len(), 2);
}

#[test]
fn items_keep_kind_and_message() {
    let hub = ToastHub::new();
    hub.success("Resume uploaded");
    hub.error("Upload failed");
    let toasts = hub.toasts();
    assert_eq!(toasts[0].kind, ToastKind::Success);
    assert_eq!(toasts[0].message, "Resume uploaded");
    assert_eq!(toasts[1].kind, ToastKind::Error);
    assert_eq!(toasts[1].kind.as_str(), "error");
}

// =============================================================
// Removal
// =============================================================

#[test]
fn remove_drops_only_the_matching_item() {
    let hub = ToastHub::new();
    hub.info("a");
    let b = hub.info("b");
    hub.info("c");
    hub.remove(b);
    assert_eq!(ids(&hub), vec![1, 3]);
}

#[test]
fn remove_unknown_id_leaves_sequence_and_listeners_untouched() {
    let hub = ToastHub::new();
    hub.info("a");
    let (seen, _sub) = recorder(&hub);
    hub.remove(99);
    assert_eq!(ids(&hub), vec![1]);
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn snapshots_are_not_mutated_by_later_changes() {
    let hub = ToastHub::new();
    hub.info("a");
    let before = hub.toasts();
    hub.info("b");
    hub.remove(1);
    assert_eq!(before.len(), 1);
    assert_eq!(before[0].id, 1);
}

// =============================================================
// Subscriptions
// =============================================================

#[test]
fn listener_sees_every_mutation_in_order() {
    let hub = ToastHub::new();
    let (seen, _sub) = recorder(&hub);
    hub.success("a");
    hub.error("b");
    hub.remove(1);
    assert_eq!(*seen.lock().unwrap(), vec![vec![1], vec![1, 2], vec![2]]);
}

#[test]
fn removed_item_absent_from_next_notification() {
    let hub = ToastHub::new();
    let id = hub.info("gone soon");
    let (seen, _sub) = recorder(&hub);
    hub.remove(id);
    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert!(!seen[0].contains(&id));
}

#[test]
fn unsubscribe_stops_further_notifications() {
    let hub = ToastHub::new();
    let (seen, sub) = recorder(&hub);
    hub.info("a");
    sub.unsubscribe();
    hub.info("b");
    assert_eq!(seen.lock().unwrap().len(), 1);
}

#[test]
fn duplicate_subscriptions_are_independent() {
    let hub = ToastHub::new();
    let count = Arc::new(Mutex::new(0_u32));
    let make = |count: Arc<Mutex<u32>>| move |_: &[ToastItem]| *count.lock().unwrap() += 1;
    let first = hub.subscribe(make(count.clone()));
    let _second = hub.subscribe(make(count.clone()));

    hub.info("a");
    assert_eq!(*count.lock().unwrap(), 2);

    first.unsubscribe();
    hub.info("b");
    assert_eq!(*count.lock().unwrap(), 3);
}

#[test]
fn listener_may_remove_reentrantly() {
    let hub = ToastHub::new();
    let inner = hub.clone();
    let _auto_dismiss = hub.subscribe(move |toasts| {
        if let Some(first) = toasts.iter().find(|t| t.kind == ToastKind::Info) {
            inner.remove(first.id);
        }
    });
    let (seen, _sub) = recorder(&hub);

    hub.info("flash");

    assert!(hub.toasts().is_empty());
    assert_eq!(*seen.lock().unwrap(), vec![vec![1], vec![]]);
}

#[test]
fn unsubscribe_after_hub_dropped_is_noop() {
    let hub = ToastHub::new();
    let sub = hub.subscribe(|_| {});
    drop(hub);
    sub.unsubscribe();
}

#[test]
fn panicking_listener_does_not_stall_later_deliveries() {
    let hub = ToastHub::new();
    let faulty = hub.subscribe(|_| panic!("listener failed"));

    let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| hub.info("a")));
    assert!(outcome.is_err());
    faulty.unsubscribe();

    let (seen, _sub) = recorder(&hub);
    hub.info("b");
    hub.info("c");

    assert_eq!(*seen.lock().unwrap(), vec![vec![1, 2], vec![1, 2, 3]]);
}
