//! Handlers for the four staging commands.
//!
//! Staging stores a pending amount without validation; the matching commit
//! command is where the guards live.

use crate::{
    domain::{
        AccountEvent, AccountState, DepositStaged, LoanPaymentStaged, LoanStaged, StageDeposit,
        StageLoan, StageLoanPayment, StageWithdrawal, TellerError, WithdrawalStaged,
    },
    port::CommandHandler,
};
use chrono::{DateTime, Utc};

impl CommandHandler for StageDeposit {
    type Entity = ();

    fn validate(&self, state: &AccountState) -> Result<Option<Self::Entity>, TellerError> {
        Ok(state.active().map(|_| ()))
    }

    fn emit(
        &self,
        _state: &AccountState,
        _entity: &Self::Entity,
        _timestamp: DateTime<Utc>,
    ) -> Result<Vec<AccountEvent>, TellerError> {
        Ok(vec![AccountEvent::DepositStaged(DepositStaged {
            amount: self.amount,
        })])
    }
}

impl CommandHandler for StageWithdrawal {
    type Entity = ();

    fn validate(&self, state: &AccountState) -> Result<Option<Self::Entity>, TellerError> {
        Ok(state.active().map(|_| ()))
    }

    fn emit(
        &self,
        _state: &AccountState,
        _entity: &Self::Entity,
        _timestamp: DateTime<Utc>,
    ) -> Result<Vec<AccountEvent>, TellerError> {
        Ok(vec![AccountEvent::WithdrawalStaged(WithdrawalStaged {
            amount: self.amount,
        })])
    }
}

impl CommandHandler for StageLoan {
    type Entity = ();

    fn validate(&self, state: &AccountState) -> Result<Option<Self::Entity>, TellerError> {
        Ok(state.active().map(|_| ()))
    }

    fn emit(
        &self,
        _state: &AccountState,
        _entity: &Self::Entity,
        _timestamp: DateTime<Utc>,
    ) -> Result<Vec<AccountEvent>, TellerError> {
        Ok(vec![AccountEvent::LoanStaged(LoanStaged {
            amount: self.amount,
        })])
    }
}

impl CommandHandler for StageLoanPayment {
    type Entity = ();

    fn validate(&self, state: &AccountState) -> Result<Option<Self::Entity>, TellerError> {
        Ok(state.active().map(|_| ()))
    }

    fn emit(
        &self,
        _state: &AccountState,
        _entity: &Self::Entity,
        _timestamp: DateTime<Utc>,
    ) -> Result<Vec<AccountEvent>, TellerError> {
        Ok(vec![AccountEvent::LoanPaymentStaged(LoanPaymentStaged {
            amount: self.amount,
        })])
    }
}
