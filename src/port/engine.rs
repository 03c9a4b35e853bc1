use crate::domain::{
    AccountCommand, AccountEvent, AccountState, CommandMetadata, EventEnvelope, TellerError,
};
use async_trait::async_trait;

/// Engine orchestrates command processing with exclusive state access
///
/// Responsibilities:
/// - Global ordering via sequence numbers
/// - Deduplication via CommandMetadata (idempotent at-least-once)
/// - Event persistence via Journal
/// - Exclusive access to current state (serialized by the account actor)
#[async_trait]
pub trait Engine {
    type Context;

    /// Process a command with ordering and delivery guarantees
    ///
    /// The engine orchestrates:
    /// 1. processor.prepare(cmd) -> returns Decide function
    /// 2. decide_fn(actual_state) -> events (empty = rejected, no-op)
    /// 3. Persist the event to the journal (idempotency & sequence assignment)
    /// 4. Apply the event to the state (functional)
    ///
    /// Returns (Envelope, NewState) - the envelope is `None` for a rejected
    /// command, and the returned state is then the input state unchanged.
    /// The caller is responsible for updating its state.
    async fn process_command(
        &self,
        command: AccountCommand,
        metadata: CommandMetadata,
        context: &Self::Context,
    ) -> Result<(Option<EventEnvelope>, AccountState), TellerError>;

    /// Get the command processor
    fn processor(&self) -> &dyn Processor;
}

/// Processor dispatches commands to handlers
pub trait Processor: Send + Sync {
    /// Bind a command to its handler.
    ///
    /// Returns a DecideFn that will be called with exclusive access to the
    /// actual state. Preparation itself is pure: this domain has no
    /// external resources to load before deciding.
    fn prepare(&self, command: AccountCommand) -> Result<Box<dyn DecideFn>, TellerError>;
}

/// The Decide function returned by Processor::prepare
///
/// Called with exclusive access to the actual state; must be fast - no
/// async, no I/O, just business logic.
pub trait DecideFn: Send {
    /// Decide against the actual state: the events to persist, or an empty
    /// vec when the command is rejected as a no-op.
    fn apply(&self, actual_state: &AccountState) -> Result<Vec<AccountEvent>, TellerError>;
}
