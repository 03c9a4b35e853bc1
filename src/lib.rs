//! Event-sourced engine for a single bank account.
//!
//! Commands are validated against the current [`domain::AccountState`],
//! allowed transitions are persisted as events to a [`port::Journal`], and
//! events are applied functionally to produce the next state. Disallowed
//! transitions decide no events and leave the state untouched; only
//! unrecognized action identifiers fail loudly.

pub mod adapter;
pub mod domain;
pub mod port;
pub mod service;
