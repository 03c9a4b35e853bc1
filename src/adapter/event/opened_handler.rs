use crate::{
    domain::{AccountState, ActiveAccountState, Opened},
    port::EventHandler,
};

impl EventHandler for Opened {
    fn apply(&self, state: &AccountState) -> Option<AccountState> {
        match state {
            AccountState::Inactive => Some(AccountState::Active(ActiveAccountState {
                balance: self.opening_balance,
                ..ActiveAccountState::opened()
            })),
            // Re-opening an active account re-sets the balance and keeps
            // everything else, the loan included.
            AccountState::Active(account) => Some(AccountState::Active(ActiveAccountState {
                balance: self.opening_balance,
                ..account.clone()
            })),
        }
    }
}
