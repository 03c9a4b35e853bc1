use std::io::Write;
use std::sync::Arc;
use teller::adapter::{AccountHandle, InMemoryJournal};
use teller::domain::{AccountState, OrchestratorMode, CLOSE_ADVISORY};
use teller::port::Journal;
use teller::service::Orchestrator;
use tempfile::NamedTempFile;

fn test_handle(journal: Arc<dyn Journal + Send + Sync>) -> AccountHandle {
    AccountHandle::with_namespace(journal, format!("test-{}", uuid::Uuid::new_v4()))
}

fn orchestrator_for(temp_file: &NamedTempFile) -> Orchestrator {
    let journal: Arc<dyn Journal + Send + Sync> = Arc::new(InMemoryJournal::new());
    Orchestrator::with_handle(
        test_handle(journal),
        OrchestratorMode::Csv {
            file_path: temp_file.path().to_str().unwrap().to_string(),
        },
    )
}

#[tokio::test]
async fn test_csv_session_happy_path() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "action,amount").unwrap();
    writeln!(temp_file, "openAccount,").unwrap();
    writeln!(temp_file, "setDeposit,200").unwrap();
    writeln!(temp_file, "deposit,").unwrap();
    writeln!(temp_file, "setWithdraw,50").unwrap();
    writeln!(temp_file, "withdraw,").unwrap();
    temp_file.flush().unwrap();

    let state = orchestrator_for(&temp_file).process().await.unwrap();

    match state {
        AccountState::Active(account) => {
            assert_eq!(account.balance, 650);
            assert_eq!(account.loan, 0);
            assert_eq!(account.error_message, None);
        }
        _ => panic!("Expected Active state"),
    }
}

#[tokio::test]
async fn test_csv_session_rejections_leave_state_intact() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "action,amount").unwrap();
    writeln!(temp_file, "openAccount,").unwrap();
    writeln!(temp_file, "setWithdraw,900").unwrap();
    writeln!(temp_file, "withdraw,").unwrap(); // Overdraw - rejected
    writeln!(temp_file, "setDeposit,25").unwrap();
    writeln!(temp_file, "deposit,").unwrap();
    temp_file.flush().unwrap();

    let state = orchestrator_for(&temp_file).process().await.unwrap();

    match state {
        AccountState::Active(account) => {
            assert_eq!(account.balance, 525);
            // The rejected withdrawal left its staged amount in place
            assert_eq!(account.staged_withdrawal, Some(900));
        }
        _ => panic!("Expected Active state"),
    }
}

#[tokio::test]
async fn test_csv_session_with_loan_round_trip() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "action,amount").unwrap();
    writeln!(temp_file, "openAccount,").unwrap();
    writeln!(temp_file, "setLoan,1000").unwrap();
    writeln!(temp_file, "requestLoan,").unwrap();
    writeln!(temp_file, "setLoanPay,1000").unwrap();
    writeln!(temp_file, "payLoan,").unwrap();
    temp_file.flush().unwrap();

    let state = orchestrator_for(&temp_file).process().await.unwrap();

    match state {
        AccountState::Active(account) => {
            assert_eq!(account.balance, 500);
            assert_eq!(account.loan, 0);
        }
        _ => panic!("Expected Active state"),
    }
}

#[tokio::test]
async fn test_csv_session_closing_returns_initial_state() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "action,amount").unwrap();
    writeln!(temp_file, "openAccount,").unwrap();
    writeln!(temp_file, "withdrawAll,").unwrap();
    writeln!(temp_file, "closeAccount,").unwrap();
    temp_file.flush().unwrap();

    let state = orchestrator_for(&temp_file).process().await.unwrap();

    assert_eq!(state, AccountState::initial());
}

#[tokio::test]
async fn test_csv_session_refused_close_records_advisory() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "action,amount").unwrap();
    writeln!(temp_file, "openAccount,").unwrap();
    writeln!(temp_file, "closeAccount,").unwrap(); // Balance is 500 - refused
    temp_file.flush().unwrap();

    let state = orchestrator_for(&temp_file).process().await.unwrap();

    match state {
        AccountState::Active(account) => {
            assert_eq!(account.balance, 500);
            assert_eq!(account.error_message, Some(CLOSE_ADVISORY.to_string()));
        }
        _ => panic!("Expected Active state"),
    }
}

#[tokio::test]
async fn test_csv_session_unknown_action_fails_loudly() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "action,amount").unwrap();
    writeln!(temp_file, "openAccount,").unwrap();
    writeln!(temp_file, "transmogrify,42").unwrap();
    temp_file.flush().unwrap();

    let result = orchestrator_for(&temp_file).process().await;

    let err = result.expect_err("Unknown actions are a contract violation");
    assert!(err.to_string().contains("transmogrify"));
}

#[tokio::test]
async fn test_empty_csv_session_yields_initial_state() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "action,amount").unwrap();
    temp_file.flush().unwrap();

    let state = orchestrator_for(&temp_file).process().await.unwrap();

    assert_eq!(state, AccountState::initial());
}
