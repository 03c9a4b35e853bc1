use crate::domain::{AccountEvent, EventEnvelope, EventMetadata, TellerError};
use async_trait::async_trait;

/// Journal is responsible for appending and replaying events to the log.
/// Replaying the log from the start reconstructs the account state.
#[async_trait]
pub trait Journal {
    /// Append an event to the log
    ///
    /// The journal constructs the EventEnvelope by:
    /// - Assigning the next sequence number atomically
    /// - Adding the provided metadata
    /// - Wrapping the event
    ///
    /// Returns the complete EventEnvelope with assigned sequence number.
    /// Idempotent via deduplication_key - returns existing envelope if duplicate.
    async fn append(
        &self,
        event: AccountEvent,
        metadata: EventMetadata,
    ) -> Result<EventEnvelope, TellerError>;

    /// Replay events starting from a sequence number
    /// Returns events in order
    async fn replay(&self, from_sequence: Option<u64>) -> Result<Vec<EventEnvelope>, TellerError>;

    /// Get the highest sequence number (current position in the log)
    async fn highest_sequence(&self) -> Result<Option<u64>, TellerError>;
}
