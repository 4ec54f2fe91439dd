//! Integration tests: the waitlist reducer running inside the Store
//! runtime, with notification effects executing for real against a
//! recording notifier.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;
use std::time::Duration;

use chrono::{TimeZone, Utc};
use waitline_core::environment::FixedClock;
use waitline_runtime::{Store, StoreError};
use waitlist::{
    EntryId, EntryStatus, EventId, Priority, RecordingNotifier, StatusFilter, WaitlistAction,
    WaitlistEnvironment, WaitlistReducer, WaitlistState,
};

type WaitlistStore = Store<WaitlistState, WaitlistAction, WaitlistEnvironment, WaitlistReducer>;

fn test_store(notifier: RecordingNotifier) -> WaitlistStore {
    let frozen = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    let environment = WaitlistEnvironment::new(EventId::new(), "Tech Conference 2024")
        .with_clock(Arc::new(FixedClock::new(frozen)))
        .with_notifier(Arc::new(notifier));
    Store::new(WaitlistState::new(), WaitlistReducer::new(), environment)
}

async fn join(store: &WaitlistStore, name: &str, email: &str, priority: Priority) -> EntryId {
    let id = EntryId::new();
    store
        .send(WaitlistAction::AddEntry {
            id,
            name: name.to_string(),
            email: email.to_string(),
            phone: None,
            priority,
            notes: None,
        })
        .await
        .unwrap();
    id
}

#[tokio::test]
async fn notify_next_delivers_through_the_notifier() {
    let notifier = RecordingNotifier::new();
    let store = test_store(notifier.clone());

    let alice = join(&store, "Alice", "alice@example.com", Priority::Low).await;
    let _bob = join(&store, "Bob", "bob@example.com", Priority::High).await;

    let mut handle = store
        .send(WaitlistAction::NotifyNext { available_spots: 1 })
        .await
        .unwrap();
    handle.wait().await;

    // First joined wins, priority notwithstanding
    let sent = notifier.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].entry_id, alice);
    assert_eq!(sent[0].email, "alice@example.com");
    assert_eq!(sent[0].event_title, "Tech Conference 2024");

    let status = store.state(move |s| s.get(&alice).map(|e| e.status)).await;
    assert_eq!(status, Some(EntryStatus::Notified));
}

#[tokio::test]
async fn bulk_notify_sends_at_most_available_spots() {
    let notifier = RecordingNotifier::new();
    let store = test_store(notifier.clone());

    let a = join(&store, "Alice", "alice@example.com", Priority::Medium).await;
    let b = join(&store, "Bob", "bob@example.com", Priority::Medium).await;
    let c = join(&store, "Carol", "carol@example.com", Priority::Medium).await;

    let mut handle = store
        .send(WaitlistAction::BulkNotify {
            selected: vec![c, a, b],
            available_spots: 2,
        })
        .await
        .unwrap();
    handle.wait().await;

    // Caller order decides who gets the two spots
    let recipients: Vec<EntryId> = notifier.sent().iter().map(|n| n.entry_id).collect();
    assert_eq!(recipients, vec![c, a]);

    let waiting = store.state(|s| s.stats().waiting).await;
    assert_eq!(waiting, 1);
}

#[tokio::test]
async fn delivery_failure_leaves_entry_notified() {
    let notifier = RecordingNotifier::failing("smtp unreachable");
    let store = test_store(notifier.clone());

    let alice = join(&store, "Alice", "alice@example.com", Priority::Medium).await;

    let mut handle = store
        .send(WaitlistAction::NotifyNext { available_spots: 1 })
        .await
        .unwrap();
    handle.wait().await;

    // The failure event has been fed back by now; status must not rewind
    assert_eq!(notifier.sent().len(), 1);
    let status = store.state(move |s| s.get(&alice).map(|e| e.status)).await;
    assert_eq!(status, Some(EntryStatus::Notified));
}

#[tokio::test]
async fn rejected_notify_sets_last_error_and_sends_nothing() {
    let notifier = RecordingNotifier::new();
    let store = test_store(notifier.clone());

    join(&store, "Alice", "alice@example.com", Priority::Medium).await;

    let mut handle = store
        .send(WaitlistAction::NotifyNext { available_spots: 0 })
        .await
        .unwrap();
    handle.wait().await;

    assert!(notifier.sent().is_empty());
    let last_error = store.state(|s| s.last_error.clone()).await;
    assert_eq!(
        last_error.as_deref(),
        Some("No available spots or waiting entries")
    );
}

#[tokio::test]
async fn full_cycle_with_filtering_and_stats() {
    let notifier = RecordingNotifier::new();
    let store = test_store(notifier.clone());

    let alice = join(&store, "Alice Johnson", "alice@example.com", Priority::High).await;
    let bob = join(&store, "Bob Smith", "bob@example.com", Priority::Low).await;
    let _carol = join(&store, "Carol White", "carol@example.com", Priority::Medium).await;

    let mut handle = store
        .send(WaitlistAction::NotifyNext { available_spots: 1 })
        .await
        .unwrap();
    handle.wait().await;

    store
        .send(WaitlistAction::SetStatus {
            id: alice,
            status: EntryStatus::Confirmed,
        })
        .await
        .unwrap();
    store
        .send(WaitlistAction::RemoveEntry { id: bob })
        .await
        .unwrap();

    let stats = store.state(WaitlistState::stats).await;
    assert_eq!(stats.confirmed, 1);
    assert_eq!(stats.waiting, 1);

    let smiths = store
        .state(|s| s.filter("smith", StatusFilter::All).count())
        .await;
    assert_eq!(smiths, 0);

    // Carol kept her original position even though Bob left
    let carol_position = store
        .state(|s| {
            s.filter("carol", StatusFilter::All)
                .map(|e| e.position)
                .next()
        })
        .await;
    assert_eq!(carol_position, Some(3));
}

#[tokio::test]
async fn shutdown_drains_pending_notifications() {
    let notifier = RecordingNotifier::new();
    let store = test_store(notifier.clone());

    join(&store, "Alice", "alice@example.com", Priority::Medium).await;
    store
        .send(WaitlistAction::NotifyNext { available_spots: 1 })
        .await
        .unwrap();

    store.shutdown(Duration::from_secs(5)).await.unwrap();
    assert_eq!(notifier.sent().len(), 1);

    let result = store
        .send(WaitlistAction::NotifyNext { available_spots: 1 })
        .await;
    assert!(matches!(result, Err(StoreError::ShutdownInProgress)));
}
