//! Applies for the four staging events: store the amount in the matching
//! buffer, leave everything else alone.

use crate::{
    domain::{
        AccountState, ActiveAccountState, DepositStaged, LoanPaymentStaged, LoanStaged,
        WithdrawalStaged,
    },
    port::EventHandler,
};

impl EventHandler for DepositStaged {
    fn apply(&self, state: &AccountState) -> Option<AccountState> {
        let account = state.active()?;
        Some(AccountState::Active(ActiveAccountState {
            staged_deposit: Some(self.amount),
            ..account.clone()
        }))
    }
}

impl EventHandler for WithdrawalStaged {
    fn apply(&self, state: &AccountState) -> Option<AccountState> {
        let account = state.active()?;
        Some(AccountState::Active(ActiveAccountState {
            staged_withdrawal: Some(self.amount),
            ..account.clone()
        }))
    }
}

impl EventHandler for LoanStaged {
    fn apply(&self, state: &AccountState) -> Option<AccountState> {
        let account = state.active()?;
        Some(AccountState::Active(ActiveAccountState {
            staged_loan: Some(self.amount),
            ..account.clone()
        }))
    }
}

impl EventHandler for LoanPaymentStaged {
    fn apply(&self, state: &AccountState) -> Option<AccountState> {
        let account = state.active()?;
        Some(AccountState::Active(ActiveAccountState {
            staged_loan_payment: Some(self.amount),
            ..account.clone()
        }))
    }
}
