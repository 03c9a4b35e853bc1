use crate::{
    domain::{AccountEvent, AccountState, Open, Opened, TellerError, OPENING_BALANCE},
    port::CommandHandler,
};
use chrono::{DateTime, Utc};

impl CommandHandler for Open {
    type Entity = ();

    fn validate(&self, _state: &AccountState) -> Result<Option<Self::Entity>, TellerError> {
        // Open has no precondition. Against an already-active account the
        // decided event re-sets the balance to the opening amount - the
        // original system's behavior, kept deliberately.
        Ok(Some(()))
    }

    fn emit(
        &self,
        _state: &AccountState,
        _entity: &Self::Entity,
        _timestamp: DateTime<Utc>,
    ) -> Result<Vec<AccountEvent>, TellerError> {
        Ok(vec![AccountEvent::Opened(Opened {
            opening_balance: OPENING_BALANCE,
        })])
    }
}
