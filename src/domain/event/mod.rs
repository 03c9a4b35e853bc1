use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
/// The events a command can decide. Amounts are captured at decide time so
/// that replaying the journal alone rebuilds the account state.
pub enum AccountEvent {
    Opened(Opened),
    DepositStaged(DepositStaged),
    WithdrawalStaged(WithdrawalStaged),
    LoanStaged(LoanStaged),
    LoanPaymentStaged(LoanPaymentStaged),
    Deposited(Deposited),
    Withdrawn(Withdrawn),
    Emptied(Emptied),
    LoanGranted(LoanGranted),
    LoanRepaid(LoanRepaid),
    Closed(Closed),
    CloseRejected(CloseRejected),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opened {
    pub opening_balance: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositStaged {
    pub amount: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawalStaged {
    pub amount: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanStaged {
    pub amount: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanPaymentStaged {
    pub amount: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deposited {
    pub amount: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Withdrawn {
    pub amount: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// The balance was emptied to zero (withdraw-all).
pub struct Emptied {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanGranted {
    pub amount: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanRepaid {
    pub amount: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// The account settled and returned to the initial inactive state.
pub struct Closed {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A close was refused; applying this records the advisory message on the
/// state and changes nothing else.
pub struct CloseRejected {}
