use crate::{
    domain::{AccountState, Closed},
    port::EventHandler,
};

impl EventHandler for Closed {
    fn apply(&self, state: &AccountState) -> Option<AccountState> {
        state.active()?;
        // Full reset: the advisory message does not survive a successful
        // close.
        Some(AccountState::initial())
    }
}
