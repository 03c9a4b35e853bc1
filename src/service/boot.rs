use crate::adapter::{AccountHandle, InMemoryJournal};
use std::sync::Arc;

/// Setup the teller system and return the account handle
///
/// This creates all the infrastructure:
/// - InMemoryJournal (the event store)
/// - AccountHandle (spawns the account actor on-demand)
///
/// Architecture:
/// - CSV -> Orchestrator -> AccountHandle -> AccountActor -> InMemoryJournal
/// - The actor is the single writer; it rebuilds its state from the journal
///   on start and applies events in sequence order
pub async fn boot() -> AccountHandle {
    let journal: Arc<dyn crate::port::Journal + Send + Sync> = Arc::new(InMemoryJournal::new());

    tracing::info!("Teller system initialized");

    AccountHandle::new(journal)
}
