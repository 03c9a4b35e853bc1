use crate::{
    domain::{AccountEvent, AccountState, Emptied, TellerError, WithdrawAll},
    port::CommandHandler,
};
use chrono::{DateTime, Utc};

impl CommandHandler for WithdrawAll {
    type Entity = ();

    fn validate(&self, state: &AccountState) -> Result<Option<Self::Entity>, TellerError> {
        // Unconditional while active; emptying an already-empty balance is
        // fine (idempotent).
        Ok(state.active().map(|_| ()))
    }

    fn emit(
        &self,
        _state: &AccountState,
        _entity: &Self::Entity,
        _timestamp: DateTime<Utc>,
    ) -> Result<Vec<AccountEvent>, TellerError> {
        Ok(vec![AccountEvent::Emptied(Emptied {})])
    }
}
