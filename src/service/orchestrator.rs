use crate::adapter::AccountHandle;
use crate::domain::{
    AccountCommand, AccountState, CommandMetadata, DeduplicationKey, OrchestratorMode,
};
use std::fs::File;

pub struct Orchestrator {
    handle: AccountHandle,
    mode: OrchestratorMode,
}

impl Orchestrator {
    pub async fn new(mode: OrchestratorMode) -> Self {
        let handle = super::boot().await;
        Self { handle, mode }
    }

    /// Create an Orchestrator with a custom handle.
    ///
    /// ## Warning: This is NOT MEANT FOR PRODUCTION USE. Only for testing purposes.
    pub fn with_handle(handle: AccountHandle, mode: OrchestratorMode) -> Self {
        Self { handle, mode }
    }

    pub async fn process(self) -> Result<AccountState, Box<dyn std::error::Error>> {
        let OrchestratorMode::Csv { file_path } = self.mode.clone();
        self.process_csv(&file_path).await
    }

    async fn process_csv(
        self,
        file_path: &str,
    ) -> Result<AccountState, Box<dyn std::error::Error>> {
        let file_handle = File::open(file_path)?;
        let mut rdr = csv::Reader::from_reader(file_handle);

        let mut line_num = 0;

        for result in rdr.deserialize() {
            line_num += 1;

            // An unrecognized action identifier surfaces here and aborts
            // the session: that is a caller bug, not a domain rejection.
            let command: AccountCommand = result?;

            let metadata = CommandMetadata {
                deduplication_key: DeduplicationKey::new(format!("csv:{}:{}", file_path, line_num)),
            };

            // Rejected commands come back Ok with the state untouched, so
            // any error out of the actor is infrastructure and fatal.
            self.handle.process_command(command, metadata).await?;
        }

        let final_state = self
            .handle
            .get_state()
            .await?
            .unwrap_or_else(AccountState::initial);

        self.handle.shutdown().await;

        Ok(final_state)
    }

    /// Output the account state as CSV to stdout
    pub fn output_csv(state: &AccountState) -> Result<(), Box<dyn std::error::Error>> {
        let mut wtr = csv::Writer::from_writer(std::io::stdout());
        wtr.write_record(["balance", "loan", "active", "error"])?;

        match state {
            AccountState::Active(account) => {
                wtr.write_record([
                    &account.balance.to_string(),
                    &account.loan.to_string(),
                    "true",
                    account.error_message.as_deref().unwrap_or(""),
                ])?;
            }
            AccountState::Inactive => {
                wtr.write_record(["0", "0", "false", ""])?;
            }
        }

        wtr.flush()?;
        Ok(())
    }
}
