use super::active_account;
use teller::domain::*;
use teller::port::EventHandler;

#[test]
fn test_repayment_reduces_loan_and_balance() {
    let event = LoanRepaid { amount: 400 };
    let state = active_account(1500, 1000);

    let next = event.apply(&state).unwrap();

    match next {
        AccountState::Active(account) => {
            assert_eq!(account.balance, 1100);
            assert_eq!(account.loan, 600);
        }
        _ => panic!("Expected Active state"),
    }
}

#[test]
fn test_repayment_may_cross_zero() {
    let event = LoanRepaid { amount: 1000 };
    let state = active_account(300, 1000);

    let next = event.apply(&state).unwrap();

    match next {
        AccountState::Active(account) => {
            assert_eq!(account.balance, -700);
            assert_eq!(account.loan, 0);
        }
        _ => panic!("Expected Active state"),
    }
}
