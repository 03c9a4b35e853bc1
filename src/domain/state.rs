use serde::{Deserialize, Serialize};

/// Balance every account opens with.
pub const OPENING_BALANCE: i64 = 500;

/// Advisory surfaced when a close is refused.
pub const CLOSE_ADVISORY: &str = "Please ensure your loan is paid and balance 0!";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum AccountState {
    Inactive,
    Active(ActiveAccountState),
}

/// Active account state - balances plus the staged input buffers.
///
/// A `None` buffer is an empty input; a staged amount is committed (and the
/// buffer cleared) by the matching commit command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveAccountState {
    pub balance: i64,
    pub loan: i64,
    pub staged_deposit: Option<i64>,
    pub staged_withdrawal: Option<i64>,
    pub staged_loan: Option<i64>,
    pub staged_loan_payment: Option<i64>,
    pub error_message: Option<String>,
}

// Inactive carries no fields: an account that is not active has no balance
// and no loan, so the variant itself is the invariant.

impl AccountState {
    /// The state every session starts from, and the result of a successful
    /// close.
    pub fn initial() -> Self {
        AccountState::Inactive
    }

    pub fn is_active(&self) -> bool {
        matches!(self, AccountState::Active(_))
    }

    /// The active account record, if any.
    pub fn active(&self) -> Option<&ActiveAccountState> {
        match self {
            AccountState::Active(account) => Some(account),
            AccountState::Inactive => None,
        }
    }
}

impl ActiveAccountState {
    /// A freshly opened account: opening balance, no loan, empty buffers.
    pub fn opened() -> Self {
        Self {
            balance: OPENING_BALANCE,
            loan: 0,
            staged_deposit: None,
            staged_withdrawal: None,
            staged_loan: None,
            staged_loan_payment: None,
            error_message: None,
        }
    }
}
