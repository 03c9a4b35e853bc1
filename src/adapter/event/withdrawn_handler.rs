use crate::{
    domain::{AccountState, ActiveAccountState, Withdrawn},
    port::EventHandler,
};

impl EventHandler for Withdrawn {
    fn apply(&self, state: &AccountState) -> Option<AccountState> {
        let account = state.active()?;
        Some(AccountState::Active(ActiveAccountState {
            balance: account.balance - self.amount,
            staged_withdrawal: None,
            ..account.clone()
        }))
    }
}
