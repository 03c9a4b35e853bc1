mod close_rejected_handler;
mod closed_handler;
mod deposited_handler;
mod emptied_handler;
mod loan_granted_handler;
mod loan_repaid_handler;
mod opened_handler;
mod staged_handlers;
mod withdrawn_handler;

use crate::domain::{AccountEvent, AccountState};
use crate::{domain::EventEnvelope, port::EventHandler};

impl EventHandler for EventEnvelope {
    fn apply(&self, state: &AccountState) -> Option<AccountState> {
        match &self.event {
            AccountEvent::Opened(event) => event.apply(state),
            AccountEvent::DepositStaged(event) => event.apply(state),
            AccountEvent::WithdrawalStaged(event) => event.apply(state),
            AccountEvent::LoanStaged(event) => event.apply(state),
            AccountEvent::LoanPaymentStaged(event) => event.apply(state),
            AccountEvent::Deposited(event) => event.apply(state),
            AccountEvent::Withdrawn(event) => event.apply(state),
            AccountEvent::Emptied(event) => event.apply(state),
            AccountEvent::LoanGranted(event) => event.apply(state),
            AccountEvent::LoanRepaid(event) => event.apply(state),
            AccountEvent::Closed(event) => event.apply(state),
            AccountEvent::CloseRejected(event) => event.apply(state),
        }
    }
}
