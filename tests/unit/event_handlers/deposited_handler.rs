use teller::domain::*;
use teller::port::EventHandler;

#[test]
fn test_deposited_adds_amount_and_clears_buffer() {
    let event = Deposited { amount: 200 };
    let state = AccountState::Active(ActiveAccountState {
        balance: 500,
        loan: 0,
        staged_deposit: Some(200),
        staged_withdrawal: None,
        staged_loan: None,
        staged_loan_payment: None,
        error_message: None,
    });

    let next = event.apply(&state).unwrap();

    match next {
        AccountState::Active(account) => {
            assert_eq!(account.balance, 700);
            assert_eq!(account.staged_deposit, None);
        }
        _ => panic!("Expected Active state"),
    }
}

#[test]
fn test_deposited_does_not_apply_while_inactive() {
    let event = Deposited { amount: 200 };

    assert!(event.apply(&AccountState::initial()).is_none());
}
