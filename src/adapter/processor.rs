use crate::{
    domain::{AccountCommand, AccountEvent, AccountState, TellerError},
    port::{CommandHandler, DecideFn, Processor},
};
use chrono::Utc;

/// CommandProcessor dispatches commands to their handlers
pub struct CommandProcessor;

impl CommandProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CommandProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl Processor for CommandProcessor {
    fn prepare(&self, command: AccountCommand) -> Result<Box<dyn DecideFn>, TellerError> {
        let requires_active = command.requires_active();

        match command {
            AccountCommand::Open(cmd) => Ok(Box::new(PreparedCommand::new(cmd, requires_active))),
            AccountCommand::StageDeposit(cmd) => {
                Ok(Box::new(PreparedCommand::new(cmd, requires_active)))
            }
            AccountCommand::StageWithdrawal(cmd) => {
                Ok(Box::new(PreparedCommand::new(cmd, requires_active)))
            }
            AccountCommand::StageLoan(cmd) => {
                Ok(Box::new(PreparedCommand::new(cmd, requires_active)))
            }
            AccountCommand::StageLoanPayment(cmd) => {
                Ok(Box::new(PreparedCommand::new(cmd, requires_active)))
            }
            AccountCommand::Deposit(cmd) => {
                Ok(Box::new(PreparedCommand::new(cmd, requires_active)))
            }
            AccountCommand::Withdraw(cmd) => {
                Ok(Box::new(PreparedCommand::new(cmd, requires_active)))
            }
            AccountCommand::WithdrawAll(cmd) => {
                Ok(Box::new(PreparedCommand::new(cmd, requires_active)))
            }
            AccountCommand::RequestLoan(cmd) => {
                Ok(Box::new(PreparedCommand::new(cmd, requires_active)))
            }
            AccountCommand::PayLoan(cmd) => {
                Ok(Box::new(PreparedCommand::new(cmd, requires_active)))
            }
            AccountCommand::Close(cmd) => Ok(Box::new(PreparedCommand::new(cmd, requires_active))),
        }
    }
}

struct PreparedCommand<H: CommandHandler> {
    handler: H,
    requires_active: bool,
}

impl<H: CommandHandler> PreparedCommand<H> {
    fn new(handler: H, requires_active: bool) -> Self {
        Self {
            handler,
            requires_active,
        }
    }
}

impl<H> DecideFn for PreparedCommand<H>
where
    H: CommandHandler + Send + Sync + 'static,
{
    fn apply(&self, actual_state: &AccountState) -> Result<Vec<AccountEvent>, TellerError> {
        // Uniform inactive guard: every command except Open is a no-op
        // while the account is inactive. The UI disabling its controls is a
        // convenience, not a boundary - the machine enforces this itself.
        if self.requires_active && !actual_state.is_active() {
            return Ok(Vec::new());
        }

        let Some(entity) = self.handler.validate(actual_state)? else {
            return Ok(Vec::new());
        };

        self.handler.emit(actual_state, &entity, Utc::now())
    }
}
