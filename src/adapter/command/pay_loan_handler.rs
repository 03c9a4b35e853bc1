use crate::{
    domain::{AccountEvent, AccountState, LoanRepaid, PayLoan, TellerError},
    port::CommandHandler,
};
use chrono::{DateTime, Utc};

impl CommandHandler for PayLoan {
    // The staged payment amount.
    type Entity = i64;

    fn validate(&self, state: &AccountState) -> Result<Option<Self::Entity>, TellerError> {
        let Some(account) = state.active() else {
            return Ok(None);
        };

        if account.balance == 0 {
            return Ok(None);
        }

        let Some(amount) = account.staged_loan_payment else {
            return Ok(None);
        };

        // Cannot pay back more than the recorded loan. Paying more than the
        // balance is allowed: the balance going negative is intended, the
        // account simply cannot close until it is settled.
        if amount > account.loan {
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
        Ok(vec![AccountEvent::LoanRepaid(LoanRepaid { amount: *entity })])
    }
}
