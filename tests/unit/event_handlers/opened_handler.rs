use super::active_account;
use teller::domain::*;
use teller::port::EventHandler;

#[test]
fn test_open_from_inactive_yields_fresh_account() {
    let event = Opened {
        opening_balance: 500,
    };

    let next = event.apply(&AccountState::initial()).unwrap();

    match next {
        AccountState::Active(account) => {
            assert_eq!(account.balance, 500);
            assert_eq!(account.loan, 0);
            assert_eq!(account.staged_deposit, None);
            assert_eq!(account.error_message, None);
        }
        _ => panic!("Expected Active state"),
    }
}

#[test]
fn test_reopen_resets_balance_and_keeps_the_rest() {
    let event = Opened {
        opening_balance: 500,
    };
    let state = active_account(1500, 1000);

    let next = event.apply(&state).unwrap();

    match next {
        AccountState::Active(account) => {
            assert_eq!(account.balance, 500);
            assert_eq!(account.loan, 1000);
        }
        _ => panic!("Expected Active state"),
    }
}
