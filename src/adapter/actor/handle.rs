use crate::adapter::{AccountActor, AccountActorArguments, AccountActorMessage};
use crate::domain::{AccountCommand, AccountState, CommandMetadata, EngineError, TellerError};
use crate::port::Journal;
use ractor::{rpc::CallResult, Actor, ActorRef};
use std::sync::Arc;

type AccountActorRef = ActorRef<AccountActorMessage>;

/// AccountHandle is the dispatch point for the single account actor.
///
/// The actor is registered under a global name in ractor's registry, so the
/// handle can be cloned and shared freely: `get_or_spawn` finds the running
/// actor or spawns it, and the named registration guarantees there is never
/// more than one writer for the account.
#[derive(Clone)]
pub struct AccountHandle {
    /// Shared journal (passed to the spawned actor)
    journal: Arc<dyn Journal + Send + Sync>,
    /// Namespace prefix for the actor name (for test isolation)
    namespace: String,
}

impl AccountHandle {
    pub fn new(journal: Arc<dyn Journal + Send + Sync>) -> Self {
        Self {
            journal,
            namespace: String::new(),
        }
    }

    /// Create a handle with a custom namespace for test isolation.
    ///
    /// ## Warning: This is NOT MEANT FOR PRODUCTION USE. Only for testing purposes.
    pub fn with_namespace(journal: Arc<dyn Journal + Send + Sync>, namespace: String) -> Self {
        Self { journal, namespace }
    }

    fn actor_name(&self) -> String {
        if self.namespace.is_empty() {
            "account".to_string()
        } else {
            format!("{}-account", self.namespace)
        }
    }

    /// Get or spawn the account actor via ractor's global registry
    ///
    /// `ActorRef::where_is` checks the registry first, so two concurrent
    /// callers cannot end up with two writers: the named actor is a
    /// singleton.
    pub async fn get_or_spawn(&self) -> Result<AccountActorRef, TellerError> {
        let actor_name = self.actor_name();

        // Fast path: the actor is already running
        if let Some(actor_ref) = ActorRef::<AccountActorMessage>::where_is(actor_name.clone()) {
            return Ok(actor_ref);
        }

        let args = AccountActorArguments {
            journal: self.journal.clone(),
        };

        match Actor::spawn(Some(actor_name.clone()), AccountActor, args).await {
            Ok((actor_ref, _handle)) => Ok(actor_ref),
            Err(e) => {
                // Spawn failed - maybe another caller just spawned it?
                // Try the lookup one more time before giving up
                if let Some(actor_ref) = ActorRef::<AccountActorMessage>::where_is(actor_name) {
                    Ok(actor_ref)
                } else {
                    Err(TellerError::Engine(EngineError::ActorUnavailable(format!(
                        "Failed to spawn or find account actor: {:?}",
                        e
                    ))))
                }
            }
        }
    }

    /// Process a command (get_or_spawn + rpc call)
    pub async fn process_command(
        &self,
        command: AccountCommand,
        metadata: CommandMetadata,
    ) -> Result<(), TellerError> {
        let actor_ref = self.get_or_spawn().await?;

        match actor_ref
            .call(
                |reply| AccountActorMessage::ProcessCommand(command, metadata, reply),
                Some(std::time::Duration::from_millis(500)),
            )
            .await
        {
            Ok(CallResult::Success(Ok(()))) => Ok(()),
            Ok(CallResult::Success(Err(e))) => Err(e),
            Ok(CallResult::Timeout) => Err(TellerError::Engine(EngineError::ActorTimeout)),
            Ok(CallResult::SenderError) => Err(TellerError::Engine(
                EngineError::ActorUnavailable("Actor sender error".to_string()),
            )),
            Err(e) => Err(TellerError::Engine(EngineError::ActorUnavailable(format!(
                "Failed to send command to account actor: {:?}",
                e
            )))),
        }
    }

    /// Get the current account state, if the actor is running
    pub async fn get_state(&self) -> Result<Option<AccountState>, TellerError> {
        let actor_name = self.actor_name();

        if let Some(actor_ref) = ActorRef::<AccountActorMessage>::where_is(actor_name) {
            match actor_ref
                .call(
                    AccountActorMessage::GetState,
                    Some(std::time::Duration::from_millis(100)),
                )
                .await
            {
                Ok(CallResult::Success(state)) => Ok(Some(state)),
                Ok(CallResult::Timeout) => Err(TellerError::Engine(EngineError::ActorTimeout)),
                Ok(CallResult::SenderError) => Err(TellerError::Engine(
                    EngineError::ActorUnavailable("Actor sender error".to_string()),
                )),
                Err(e) => Err(TellerError::Engine(EngineError::ActorUnavailable(format!(
                    "Failed to get state from account actor: {:?}",
                    e
                )))),
            }
        } else {
            Ok(None)
        }
    }

    /// Stop the account actor if it is running
    pub async fn shutdown(&self) {
        if let Some(actor_ref) = ActorRef::<AccountActorMessage>::where_is(self.actor_name()) {
            actor_ref.stop(None);
        }
    }
}
