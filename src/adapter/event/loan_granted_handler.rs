use crate::{
    domain::{AccountState, ActiveAccountState, LoanGranted},
    port::EventHandler,
};

impl EventHandler for LoanGranted {
    fn apply(&self, state: &AccountState) -> Option<AccountState> {
        let account = state.active()?;
        Some(AccountState::Active(ActiveAccountState {
            loan: self.amount,
            balance: account.balance + self.amount,
            staged_loan: None,
            ..account.clone()
        }))
    }
}
