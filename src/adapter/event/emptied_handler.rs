use crate::{
    domain::{AccountState, ActiveAccountState, Emptied},
    port::EventHandler,
};

impl EventHandler for Emptied {
    fn apply(&self, state: &AccountState) -> Option<AccountState> {
        let account = state.active()?;
        Some(AccountState::Active(ActiveAccountState {
            balance: 0,
            ..account.clone()
        }))
    }
}
