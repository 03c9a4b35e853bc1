use crate::domain::AccountState;

/// EventHandler is responsible for applying the event to the state.
///
/// Apply is a pure function: it never has side effects and never mutates in
/// place - it returns the replacement state. `None` means the event does not
/// fit the state's macro-state (e.g. a financial event against an inactive
/// account), which can only happen through an infrastructure bug.
pub trait EventHandler: Send {
    fn apply(&self, state: &AccountState) -> Option<AccountState>;
}
