use crate::{
    domain::{AccountState, ActiveAccountState, LoanRepaid},
    port::EventHandler,
};

impl EventHandler for LoanRepaid {
    fn apply(&self, state: &AccountState) -> Option<AccountState> {
        let account = state.active()?;
        // Both sides decrease; the balance may cross zero.
        Some(AccountState::Active(ActiveAccountState {
            loan: account.loan - self.amount,
            balance: account.balance - self.amount,
            staged_loan_payment: None,
            ..account.clone()
        }))
    }
}
