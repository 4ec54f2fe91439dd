//! Demo binary: drives a waitlist for one event through a full cycle.
//!
//! Run with `cargo run -p waitlist`. Set `WAITLIST_LOG=debug` for more
//! detail.

use std::error::Error;

use tracing_subscriber::EnvFilter;
use waitline_runtime::Store;
use waitlist::{
    Config, EntryId, EntryStatus, EventCapacity, EventId, Priority, StatusFilter, WaitlistAction,
    WaitlistEnvironment, WaitlistReducer, WaitlistState,
};

fn add(name: &str, email: &str, priority: Priority) -> (EntryId, WaitlistAction) {
    let id = EntryId::new();
    let action = WaitlistAction::AddEntry {
        id,
        name: name.to_string(),
        email: email.to_string(),
        phone: None,
        priority,
        notes: None,
    };
    (id, action)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.log_level.clone()))
        .init();

    let capacity = EventCapacity::new(200, 198);
    let environment = WaitlistEnvironment::new(EventId::new(), "Tech Conference 2024");
    let store = Store::new(WaitlistState::new(), WaitlistReducer::new(), environment);

    tracing::info!(
        available_spots = capacity.available_spots(),
        "Waitlist service started"
    );

    // People join the waitlist
    let (alice, add_alice) = add("Alice Johnson", "alice@example.com", Priority::High);
    let (_bob, add_bob) = add("Bob Smith", "bob@example.com", Priority::Low);
    let (carol, add_carol) = add("Carol White", "carol@example.com", Priority::Medium);

    store.send(add_alice).await?;
    store.send(add_bob).await?;
    store.send(add_carol).await?;

    // A spot opens: Alice joined first, so she is notified first
    let mut handle = store
        .send(WaitlistAction::NotifyNext {
            available_spots: capacity.available_spots(),
        })
        .await?;
    handle.wait().await;

    store
        .send(WaitlistAction::SetStatus {
            id: alice,
            status: EntryStatus::Confirmed,
        })
        .await?;

    // An operator hand-picks Carol for the next spot
    let mut handle = store
        .send(WaitlistAction::BulkNotify {
            selected: vec![carol],
            available_spots: 1,
        })
        .await?;
    handle.wait().await;

    let stats = store.state(WaitlistState::stats).await;
    tracing::info!(
        waiting = stats.waiting,
        notified = stats.notified,
        confirmed = stats.confirmed,
        declined = stats.declined,
        "Waitlist status"
    );

    let waiting_names = store
        .state(|s| {
            s.filter("", StatusFilter::Only(EntryStatus::Waiting))
                .map(|e| e.name.clone())
                .collect::<Vec<_>>()
        })
        .await;
    tracing::info!(?waiting_names, "Still waiting");

    store.shutdown(config.shutdown_timeout).await?;
    Ok(())
}
