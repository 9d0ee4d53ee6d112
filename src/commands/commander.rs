//! Command orchestration and execution.
//!
//! This module provides the [`Commander`] struct, the entry point for every
//! incoming SMS. It routes the message to its handler and turns the outcome into
//! a [`Reply`].
//!
//! # Flow
//!
//! ```text
//! InboundMessage → Command::new() → run() → CommandResult → Reply::from_result()
//! ```
//!
//! # Examples
//!
//! ```no_run
//! let commander = Commander::new(requester, context);
//! let reply = commander
//!     .handle(&InboundMessage {
//!         from: "+15551234567".to_string(),
//!         body: Some("subscribe".to_string()),
//!     })
//!     .await;
//! println!("{}", reply.to_twiml());
//! ```

use log::info;

use crate::{
    commands::{
        CommandContext, CommandResult, InboundMessage, Reply,
        actions::{handle_broadcast, handle_help, handle_moderators, handle_subscribe, handle_test},
        command::{Command, CommandKind},
    },
    notify::Notifier,
};

/// Command orchestrator.
///
/// Holds the Notify client and the settings shared by every command. Both are
/// read-only, a single `Commander` serves every request.
pub struct Commander<N: Notifier> {
    /// Notify API client
    notifier: N,
    /// Owner and admin settings
    context: CommandContext,
}

impl<N: Notifier> Commander<N> {
    /// Creates a new Commander.
    ///
    /// # Arguments
    ///
    /// * `notifier` - Client used to call the Notify service
    /// * `context` - Owner and admin settings
    pub fn new(notifier: N, context: CommandContext) -> Self {
        Commander { notifier, context }
    }

    /// Handles an incoming message and returns the reply to send back.
    ///
    /// Never fails: API errors are logged and answered with a generic message.
    pub async fn handle(&self, message: &InboundMessage) -> Reply {
        let command = Command::new(message);
        info!("received message from {}", command.sender());

        let result = self.run(&command).await;
        Reply::from_result(result)
    }

    /// Executes a command with the handler matching its keyword.
    ///
    /// # Command Handlers
    ///
    /// - [`CommandKind::Help`] → [`handle_help`]
    /// - [`CommandKind::Subscribe`] → [`handle_subscribe`]
    /// - [`CommandKind::Broadcast`] → [`handle_broadcast`]
    /// - [`CommandKind::Test`] → [`handle_test`]
    /// - [`CommandKind::Moderators`] → [`handle_moderators`]
    pub async fn run(&self, command: &Command) -> CommandResult {
        match command.kind() {
            CommandKind::Help => handle_help(&self.context),
            CommandKind::Subscribe => {
                handle_subscribe(&self.notifier, command, &self.context).await
            }
            CommandKind::Broadcast => {
                handle_broadcast(&self.notifier, command, &self.context).await
            }
            CommandKind::Test => handle_test(&self.notifier, command, &self.context).await,
            CommandKind::Moderators => {
                handle_moderators(&self.notifier, command, &self.context).await
            }
        }
    }
}
