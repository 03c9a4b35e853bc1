use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

// Domain rejections (overdraw, second loan, unsettled close) are not errors:
// they decide no events and leave the state unchanged. What remains here are
// contract violations and infrastructure failures, both of which fail loudly.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum CommandError {
    #[error("Unknown action: {0}")]
    UnknownAction(String),
    #[error("Action '{0}' requires an amount")]
    MissingAmount(String),
}

#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum EngineError {
    #[error("State transition failed - event could not be applied")]
    StateTransitionFailed,
    #[error("Account actor unavailable: {0}")]
    ActorUnavailable(String),
    #[error("Account actor call timed out")]
    ActorTimeout,
}

#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum TellerError {
    Command(CommandError),
    Engine(EngineError),
}

impl Display for TellerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TellerError::Command(e) => e.fmt(f),
            TellerError::Engine(e) => e.fmt(f),
        }
    }
}
