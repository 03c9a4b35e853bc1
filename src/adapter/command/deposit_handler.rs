use crate::{
    domain::{AccountEvent, AccountState, Deposit, Deposited, TellerError},
    port::CommandHandler,
};
use chrono::{DateTime, Utc};

impl CommandHandler for Deposit {
    // The staged amount being committed.
    type Entity = i64;

    fn validate(&self, state: &AccountState) -> Result<Option<Self::Entity>, TellerError> {
        let Some(account) = state.active() else {
            return Ok(None);
        };

        // Committing an empty buffer is a no-op. No minimum or maximum.
        Ok(account.staged_deposit)
    }

    fn emit(
        &self,
        _state: &AccountState,
        entity: &Self::Entity,
        _timestamp: DateTime<Utc>,
    ) -> Result<Vec<AccountEvent>, TellerError> {
        Ok(vec![AccountEvent::Deposited(Deposited { amount: *entity })])
    }
}
