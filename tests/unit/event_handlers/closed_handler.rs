use super::active_account;
use teller::domain::*;
use teller::port::EventHandler;

#[test]
fn test_closed_returns_the_initial_state() {
    let event = Closed {};
    let state = active_account(0, 0);

    let next = event.apply(&state).unwrap();

    assert_eq!(next, AccountState::initial());
}

#[test]
fn test_closed_does_not_apply_while_inactive() {
    let event = Closed {};

    assert!(event.apply(&AccountState::initial()).is_none());
}
