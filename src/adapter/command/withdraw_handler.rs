use crate::{
    domain::{AccountEvent, AccountState, TellerError, Withdraw, Withdrawn},
    port::CommandHandler,
};
use chrono::{DateTime, Utc};

impl CommandHandler for Withdraw {
    // The staged amount being committed.
    type Entity = i64;

    fn validate(&self, state: &AccountState) -> Result<Option<Self::Entity>, TellerError> {
        let Some(account) = state.active() else {
            return Ok(None);
        };

        let Some(amount) = account.staged_withdrawal else {
            return Ok(None);
        };

        // The staged field is the authoritative comparison: a withdrawal
        // never overdraws the balance.
        if account.balance < amount {
            return Ok(None);
        }

        Ok(Some(amount))
    }

    fn emit(
        &self,
        _state: &AccountState,
        entity: &Self::Entity,
        _timestamp: DateTime<Utc>,
    ) -> Result<Vec<AccountEvent>, TellerError> {
        Ok(vec![AccountEvent::Withdrawn(Withdrawn { amount: *entity })])
    }
}
