use crate::{
    domain::{AccountEvent, AccountState, LoanGranted, RequestLoan, TellerError},
    port::CommandHandler,
};
use chrono::{DateTime, Utc};

impl CommandHandler for RequestLoan {
    // The staged loan amount being granted.
    type Entity = i64;

    fn validate(&self, state: &AccountState) -> Result<Option<Self::Entity>, TellerError> {
        let Some(account) = state.active() else {
            return Ok(None);
        };

        // Only one outstanding loan at a time.
        if account.loan > 0 {
            return Ok(None);
        }

        Ok(account.staged_loan)
    }

    fn emit(
        &self,
        _state: &AccountState,
        entity: &Self::Entity,
        _timestamp: DateTime<Utc>,
    ) -> Result<Vec<AccountEvent>, TellerError> {
        Ok(vec![AccountEvent::LoanGranted(LoanGranted {
            amount: *entity,
        })])
    }
}
