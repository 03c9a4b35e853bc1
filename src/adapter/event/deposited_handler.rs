use crate::{
    domain::{AccountState, ActiveAccountState, Deposited},
    port::EventHandler,
};

impl EventHandler for Deposited {
    fn apply(&self, state: &AccountState) -> Option<AccountState> {
        let account = state.active()?;
        Some(AccountState::Active(ActiveAccountState {
            balance: account.balance + self.amount,
            staged_deposit: None,
            ..account.clone()
        }))
    }
}
