use crate::domain::{AccountEvent, AccountState, TellerError};
use chrono::{DateTime, Utc};

/// A command handler decides whether its command may transition the account.
///
/// Both phases are pure: no async, no I/O, just business rules against the
/// state the caller holds exclusive access to.
pub trait CommandHandler {
    type Entity;

    /// Validate the command against the current state.
    ///
    /// `Ok(None)` is a rejection: the command decides no events and the
    /// state stays as it is. Errors are reserved for contract violations,
    /// which no recognized command produces here.
    fn validate(&self, state: &AccountState) -> Result<Option<Self::Entity>, TellerError>;

    /// Emit events from the validated entity.
    ///
    /// Amounts are resolved from the state's staged buffers here so the
    /// events are self-contained for replay.
    fn emit(
        &self,
        state: &AccountState,
        entity: &Self::Entity,
        timestamp: DateTime<Utc>,
    ) -> Result<Vec<AccountEvent>, TellerError>;
}
