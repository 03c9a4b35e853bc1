use super::active_account;
use teller::domain::*;
use teller::port::EventHandler;

#[test]
fn test_rejection_records_the_advisory() {
    let event = CloseRejected {};
    let state = active_account(500, 0);

    let next = event.apply(&state).unwrap();

    match next {
        AccountState::Active(account) => {
            assert_eq!(account.balance, 500);
            assert_eq!(account.error_message, Some(CLOSE_ADVISORY.to_string()));
        }
        _ => panic!("Expected Active state"),
    }
}

#[test]
fn test_rejection_overwrites_nothing_else() {
    let event = CloseRejected {};
    let state = active_account(0, 500);

    let next = event.apply(&state).unwrap();

    match next {
        AccountState::Active(account) => {
            assert_eq!(account.balance, 0);
            assert_eq!(account.loan, 500);
        }
        _ => panic!("Expected Active state"),
    }
}
