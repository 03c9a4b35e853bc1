use serde::{Deserialize, Serialize};

use crate::domain::CommandError;

/// CSV row structure (flat deserialization)
#[derive(Debug, Deserialize)]
struct CsvRow {
    action: String,
    #[serde(default)]
    amount: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
/// A command is a single action against the account. The action set is
/// closed: opening, the four staging actions, the four commit actions, and
/// closing.
///
/// Commands are the write side of the machine: each one is decided against
/// the current AccountState and either produces exactly one event or is
/// rejected as a no-op.
pub enum AccountCommand {
    Open(Open),
    StageDeposit(StageDeposit),
    StageWithdrawal(StageWithdrawal),
    StageLoan(StageLoan),
    StageLoanPayment(StageLoanPayment),
    Deposit(Deposit),
    Withdraw(Withdraw),
    WithdrawAll(WithdrawAll),
    RequestLoan(RequestLoan),
    PayLoan(PayLoan),
    Close(Close),
}

// Custom Deserialize implementation for CSV format
impl<'de> Deserialize<'de> for AccountCommand {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let row = CsvRow::deserialize(deserializer)?;
        row.try_into().map_err(serde::de::Error::custom)
    }
}

impl TryFrom<CsvRow> for AccountCommand {
    type Error = CommandError;

    fn try_from(row: CsvRow) -> Result<Self, Self::Error> {
        let staged = |amount: Option<i64>| {
            amount.ok_or_else(|| CommandError::MissingAmount(row.action.clone()))
        };

        match row.action.to_lowercase().as_str() {
            "openaccount" => Ok(Self::Open(Open {})),
            "setdeposit" => Ok(Self::StageDeposit(StageDeposit {
                amount: staged(row.amount)?,
            })),
            "setwithdraw" => Ok(Self::StageWithdrawal(StageWithdrawal {
                amount: staged(row.amount)?,
            })),
            "setloan" => Ok(Self::StageLoan(StageLoan {
                amount: staged(row.amount)?,
            })),
            "setloanpay" => Ok(Self::StageLoanPayment(StageLoanPayment {
                amount: staged(row.amount)?,
            })),
            "deposit" => Ok(Self::Deposit(Deposit {})),
            "withdraw" => Ok(Self::Withdraw(Withdraw {})),
            "withdrawall" => Ok(Self::WithdrawAll(WithdrawAll {})),
            "requestloan" => Ok(Self::RequestLoan(RequestLoan {})),
            "payloan" => Ok(Self::PayLoan(PayLoan {})),
            "closeaccount" => Ok(Self::Close(Close {})),
            other => Err(CommandError::UnknownAction(other.to_string())),
        }
    }
}

impl AccountCommand {
    /// The action identifier, as it appears on the wire.
    pub fn action(&self) -> &'static str {
        match self {
            AccountCommand::Open(_) => "openAccount",
            AccountCommand::StageDeposit(_) => "setDeposit",
            AccountCommand::StageWithdrawal(_) => "setWithdraw",
            AccountCommand::StageLoan(_) => "setLoan",
            AccountCommand::StageLoanPayment(_) => "setLoanPay",
            AccountCommand::Deposit(_) => "deposit",
            AccountCommand::Withdraw(_) => "withdraw",
            AccountCommand::WithdrawAll(_) => "withdrawAll",
            AccountCommand::RequestLoan(_) => "requestLoan",
            AccountCommand::PayLoan(_) => "payLoan",
            AccountCommand::Close(_) => "closeAccount",
        }
    }

    /// Whether the command falls under the uniform inactive guard.
    ///
    /// Every command except Open is a no-op while the account is inactive.
    pub fn requires_active(&self) -> bool {
        !matches!(self, AccountCommand::Open(_))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Opens the account at the opening balance and activates it.
///
/// Open has no precondition: issued against an already-active account it
/// re-sets the balance to the opening amount and leaves the loan, the
/// staged buffers, and the error message alone. That is the original
/// system's behavior, kept as-is.
pub struct Open {}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Stages a deposit amount. The buffer is overwritten, not validated.
pub struct StageDeposit {
    pub amount: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Stages a withdrawal amount. The buffer is overwritten, not validated.
pub struct StageWithdrawal {
    pub amount: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Stages a loan amount. The buffer is overwritten, not validated.
pub struct StageLoan {
    pub amount: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Stages a loan payment amount. The buffer is overwritten, not validated.
pub struct StageLoanPayment {
    pub amount: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Commits the staged deposit: the buffered amount is added to the balance
/// and the buffer cleared. Rejected when the buffer is empty.
pub struct Deposit {}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Commits the staged withdrawal. Rejected when the buffer is empty or the
/// balance does not cover the staged amount; the balance never overdraws
/// through a withdrawal.
pub struct Withdraw {}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Empties the balance to zero unconditionally. Idempotent.
pub struct WithdrawAll {}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Commits the staged loan request. Only one loan may be outstanding at a
/// time: rejected while a loan is open (or the buffer is empty). On success
/// the staged amount is recorded as the loan and credited to the balance.
pub struct RequestLoan {}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Commits the staged loan payment. Rejected when the balance is zero, the
/// buffer is empty, or the staged amount exceeds the recorded loan. On
/// success both loan and balance decrease by the staged amount - the
/// balance may go negative, which is intended: the account cannot close
/// until it is settled.
pub struct PayLoan {}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Closes the account. Refused (with an advisory recorded on the state)
/// unless the loan and the balance are both zero; on success the account
/// returns to the initial inactive state.
pub struct Close {}
