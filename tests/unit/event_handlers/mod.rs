mod close_rejected_handler;
mod closed_handler;
mod deposited_handler;
mod loan_repaid_handler;
mod opened_handler;

use teller::domain::{AccountState, ActiveAccountState};

/// An active account with the given balances and empty buffers
pub fn active_account(balance: i64, loan: i64) -> AccountState {
    AccountState::Active(ActiveAccountState {
        balance,
        loan,
        staged_deposit: None,
        staged_withdrawal: None,
        staged_loan: None,
        staged_loan_payment: None,
        error_message: None,
    })
}
