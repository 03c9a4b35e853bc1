use crate::{
    domain::{AccountState, ActiveAccountState, CloseRejected, CLOSE_ADVISORY},
    port::EventHandler,
};

impl EventHandler for CloseRejected {
    fn apply(&self, state: &AccountState) -> Option<AccountState> {
        let account = state.active()?;
        Some(AccountState::Active(ActiveAccountState {
            error_message: Some(CLOSE_ADVISORY.to_string()),
            ..account.clone()
        }))
    }
}
