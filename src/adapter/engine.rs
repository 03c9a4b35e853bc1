use crate::{
    domain::{
        AccountCommand, AccountState, CommandMetadata, EngineError, EventEnvelope, EventMetadata,
        TellerError,
    },
    port::{Engine, EventHandler, Journal, Processor},
};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

/// Context for the Engine containing current state and journal
pub struct EngineContext {
    /// The journal for persisting events
    pub journal: Arc<dyn Journal + Send + Sync>,
    /// Current state of the account
    pub current_state: AccountState,
}

/// The main teller engine implementation
pub struct TellerEngine {
    processor: Arc<dyn Processor>,
}

impl TellerEngine {
    pub fn new(processor: Arc<dyn Processor>) -> Self {
        Self { processor }
    }
}

#[async_trait]
impl Engine for TellerEngine {
    type Context = EngineContext;

    /// Process a command by orchestrating the following steps:
    /// 1. Bind the command to its handler
    /// 2. Decide against the current state (guards live here)
    /// 3. Persist the event to the journal (journal assigns the sequence
    ///    number atomically and handles idempotency)
    /// 4. Apply the event to the state (functional - returns new state)
    ///
    /// A rejected command short-circuits after step 2: nothing is
    /// persisted, no envelope is produced, and the returned state is the
    /// input state unchanged. That is the machine's no-op rejection; the
    /// only errors out of this path are contract violations and
    /// infrastructure failures.
    ///
    /// INFRASTRUCTURE CONTRACT (caller's responsibility):
    /// - Caller MUST serialize calls (the account actor does)
    /// - Caller MUST verify sequence number ordering after persistence
    /// - Caller MUST update state atomically after successful processing
    async fn process_command(
        &self,
        command: AccountCommand,
        metadata: CommandMetadata,
        context: &Self::Context,
    ) -> Result<(Option<EventEnvelope>, AccountState), TellerError> {
        let action = command.action();

        // 1. Bind the command to its handler
        let decide_fn = self.processor.prepare(command)?;

        // 2. Decide: guards against the CURRENT state. Empty = rejection.
        let events = decide_fn.apply(&context.current_state)?;

        let Some(event) = events.into_iter().next() else {
            tracing::debug!(action, "command rejected - state unchanged");
            return Ok((None, context.current_state.clone()));
        };

        // 3. Persistence: append the event to the journal
        //    Journal handles:
        //    - Idempotency check via deduplication_key
        //    - Atomic sequence number assignment (under journal's write lock)
        //    - Returns the existing envelope if duplicate
        let event_metadata = EventMetadata {
            deduplication_key: metadata.deduplication_key,
            timestamp: Utc::now(),
        };

        let envelope = context.journal.append(event, event_metadata).await?;

        // 4. State transition: apply the event to get the new state
        let new_state = envelope
            .apply(&context.current_state)
            .ok_or(TellerError::Engine(EngineError::StateTransitionFailed))?;

        tracing::debug!(action, sequence_nr = envelope.sequence_nr, "command applied");

        Ok((Some(envelope), new_state))
    }

    fn processor(&self) -> &dyn Processor {
        self.processor.as_ref()
    }
}
