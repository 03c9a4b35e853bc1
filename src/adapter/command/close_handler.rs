use crate::{
    domain::{AccountEvent, AccountState, Close, CloseRejected, Closed, TellerError},
    port::CommandHandler,
};
use chrono::{DateTime, Utc};

/// Whether the account may actually close.
///
/// A refused close is not a silent rejection: it decides a CloseRejected
/// event, which records the advisory message on the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    Settled,
    Refused,
}

impl CommandHandler for Close {
    type Entity = CloseOutcome;

    fn validate(&self, state: &AccountState) -> Result<Option<Self::Entity>, TellerError> {
        let Some(account) = state.active() else {
            return Ok(None);
        };

        if account.loan != 0 || account.balance != 0 {
            return Ok(Some(CloseOutcome::Refused));
        }

        Ok(Some(CloseOutcome::Settled))
    }

    fn emit(
        &self,
        _state: &AccountState,
        entity: &Self::Entity,
        _timestamp: DateTime<Utc>,
    ) -> Result<Vec<AccountEvent>, TellerError> {
        let event = match entity {
            CloseOutcome::Settled => AccountEvent::Closed(Closed {}),
            CloseOutcome::Refused => AccountEvent::CloseRejected(CloseRejected {}),
        };

        Ok(vec![event])
    }
}
