use crate::{
    adapter::{CommandProcessor, EngineContext, TellerEngine},
    domain::{AccountCommand, AccountState, CommandMetadata, EngineError, TellerError},
    port::{Engine, EventHandler, Journal},
};
use ractor::{Actor, ActorProcessingErr, ActorRef, RpcReplyPort};
use std::sync::Arc;

/// Messages that can be sent to the AccountActor
pub enum AccountActorMessage {
    ProcessCommand(
        AccountCommand,
        CommandMetadata,
        RpcReplyPort<Result<(), TellerError>>,
    ),
    GetState(RpcReplyPort<AccountState>),
}

pub struct AccountActorArguments {
    pub journal: Arc<dyn Journal + Send + Sync>,
}

pub struct AccountActorState {
    pub account_state: AccountState,
    pub engine: Arc<dyn Engine<Context = EngineContext> + Send + Sync>,
    pub journal: Arc<dyn Journal + Send + Sync>,
    /// Last applied journal sequence number
    /// Used to guarantee events are applied in order: seq[n] > seq[n-1]
    /// Also enables idempotent handling of at-least-once redelivery
    pub last_sequence: u64,
}

/// AccountActor owns the live account state.
///
/// All command processing goes through this one actor, which makes it the
/// single writer: each message reads the current state snapshot and swaps
/// in the replacement wholesale, with no partial visibility.
pub struct AccountActor;

impl Actor for AccountActor {
    type Msg = AccountActorMessage;
    type State = AccountActorState;
    type Arguments = AccountActorArguments;

    async fn pre_start(
        &self,
        _myself: ActorRef<Self::Msg>,
        args: Self::Arguments,
    ) -> Result<Self::State, ActorProcessingErr> {
        let processor = Arc::new(CommandProcessor::new());
        let engine = Arc::new(TellerEngine::new(processor));

        // Rebuild the state by replaying the journal from the beginning.
        // On a fresh journal this is a no-op and we start from the initial
        // inactive state.
        let mut account_state = AccountState::initial();
        let mut last_sequence = 0;

        for envelope in args.journal.replay(None).await? {
            account_state = envelope
                .apply(&account_state)
                .ok_or(TellerError::Engine(EngineError::StateTransitionFailed))?;
            last_sequence = envelope.sequence_nr;
        }

        tracing::info!(last_sequence, "AccountActor starting (journal replayed)");

        Ok(AccountActorState {
            account_state,
            engine,
            journal: args.journal,
            last_sequence,
        })
    }

    async fn handle(
        &self,
        _myself: ActorRef<Self::Msg>,
        message: Self::Msg,
        state: &mut Self::State,
    ) -> Result<(), ActorProcessingErr> {
        match message {
            AccountActorMessage::ProcessCommand(command, metadata, reply) => {
                // This actor provides the ordering guarantees. We have
                // &mut state, which means:
                // 1. Only ONE message processes at a time
                // 2. Decide + persistence + state update happen atomically
                // 3. Events are applied in strict sequence order
                //
                // Flow: decide -> persist -> verify sequence -> update state
                // If the command is rejected: state unchanged, nothing persisted
                // If persistence fails: state unchanged
                // If the sequence regresses: PANIC (infrastructure bug)

                let context = EngineContext {
                    journal: state.journal.clone(),
                    current_state: state.account_state.clone(),
                };

                match state
                    .engine
                    .process_command(command, metadata, &context)
                    .await
                {
                    Ok((None, _unchanged)) => {
                        // No-op rejection: nothing persisted, nothing to apply.
                        let _ = reply.send(Ok(()));
                    }
                    Ok((Some(envelope), new_state)) => {
                        // Verify event ordering before swapping state in.
                        //
                        // Cases:
                        // 1. seq > last_sequence -> Apply (normal case)
                        // 2. seq == last_sequence -> Skip (at-least-once duplicate)
                        // 3. seq < last_sequence -> PANIC (ordering violation)

                        if envelope.sequence_nr < state.last_sequence {
                            panic!(
                                "CRITICAL: Event ordering violation! Last sequence \
                                 was {}, got {}. This indicates a bug in the \
                                 infrastructure (out-of-order delivery).",
                                state.last_sequence, envelope.sequence_nr
                            );
                        }

                        if envelope.sequence_nr == state.last_sequence {
                            // Duplicate delivery - already applied, skip
                            tracing::debug!(
                                sequence_nr = envelope.sequence_nr,
                                "skipping duplicate event"
                            );
                            let _ = reply.send(Ok(()));
                            return Ok(());
                        }

                        state.account_state = new_state;
                        state.last_sequence = envelope.sequence_nr;

                        tracing::debug!(sequence_nr = envelope.sequence_nr, "applied event");
                        let _ = reply.send(Ok(()));
                    }
                    Err(e) => {
                        // Contract violation or infrastructure failure -
                        // state unchanged
                        tracing::error!("failed to process command: {}", e);
                        let _ = reply.send(Err(e));
                    }
                }
            }

            AccountActorMessage::GetState(reply) => {
                let _ = reply.send(state.account_state.clone());
            }
        }

        Ok(())
    }
}

/// Type alias for AccountActor reference
pub type AccountActorRef = ActorRef<AccountActorMessage>;
