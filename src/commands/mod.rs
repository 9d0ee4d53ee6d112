//! Bot command parsing, execution and reply formatting.
//!
//! This module provides the complete processing pipeline of an incoming SMS.
//!
//! # Overview
//!
//! 1. **Parsing** - Wrapping the [`InboundMessage`] into a [`command::Command`]
//!    with a normalized sender
//! 2. **Dispatch** - Picking the handler from the first word of the body
//! 3. **Execution** - Running the handler, which calls the Notify API at most once
//! 4. **Reply** - Turning the result into a TwiML [`reply::Reply`]
//!
//! # Architecture
//!
//! ```text
//! Incoming SMS
//!      │
//!      ▼
//! ┌─────────────┐
//! │  Commander  │  ← Entry point: handle()
//! └─────────────┘
//!      │
//!      ├── Command::new() ─── normalized sender, arguments, text
//!      │
//!      ├── run() ─────────────┐
//!      │                      ▼
//!      │           ┌─────────────────────┐
//!      │           │ Action Handlers     │
//!      │           │  - handle_help      │
//!      │           │  - handle_subscribe │
//!      │           │  - handle_broadcast │
//!      │           │  - handle_test      │
//!      │           │  - handle_moderators│
//!      │           └─────────────────────┘
//!      │                      │
//!      │                      ▼
//!      │           ┌────────────────────┐
//!      │           │  CommandResult     │
//!      │           │  - response        │
//!      │           │  - error           │
//!      │           └────────────────────┘
//!      │
//!      └── Reply::from_result() ─── TwiML
//! ```
//!
//! # Available Commands
//!
//! | Keyword | Admin only | Description |
//! |---------|------------|-------------|
//! | `subscribe` | no | Subscribe the sender to broadcasts |
//! | `broadcast <text>` / `send <text>` | yes | Send `text` to every subscriber |
//! | `test <text>` | yes | Send `text` to the sender only |
//! | `mods <text>` | yes | Send `text` to every admin |
//! | anything else | no | Display help |
//!
//! Keywords are case-insensitive.
//!
//! # Module Organization
//!
//! - [`commander`] - Dispatches commands and formats replies
//! - [`command`] - Command parsing
//! - [`actions`] - Individual command handlers
//! - [`sms_response`] - User facing texts
//! - [`reply`] - TwiML reply

use serde::Deserialize;

use crate::notify::NotifyError;

mod actions;
mod command;
mod commander;
mod reply;
mod sms_response;

pub use crate::commands::commander::Commander;
pub use crate::commands::reply::Reply;

/// SMS posted by Twilio to the webhook.
///
/// Twilio sends many more fields, only the sender and the text are used.
#[derive(Debug, Clone, Deserialize)]
pub struct InboundMessage {
    /// Sender phone number, as received
    #[serde(rename = "From")]
    pub from: String,
    /// Message text
    #[serde(rename = "Body", default)]
    pub body: Option<String>,
}

/// Read-only settings shared by every command.
///
/// Built once at startup from the [`Config`](crate::config::Config).
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Display name of the bot owner
    pub owner_name: String,
    /// Phone number of the bot owner
    pub owner_number: String,
    /// Numbers allowed to broadcast, in configuration order
    pub admins: Vec<String>,
}

impl CommandContext {
    /// Whether `sender` is allowed to use the admin commands.
    ///
    /// `sender` must already be normalized, the comparison is exact.
    pub fn is_admin(&self, sender: &str) -> bool {
        self.admins.iter().any(|admin| admin == sender)
    }
}

/// Result of command execution.
///
/// `response` is the text the handler wants to send back. When `error` is set,
/// the reply falls back to a generic message instead (see [`Reply::from_result`]).
#[derive(Debug)]
pub struct CommandResult {
    /// Text proposed by the handler
    pub response: String,
    /// Error returned by the Notify API, if any
    pub error: Option<NotifyError>,
}

impl CommandResult {
    /// A successful result.
    pub fn ok(response: String) -> Self {
        CommandResult {
            response,
            error: None,
        }
    }

    /// A failed result with the handler fallback text.
    pub fn failed(response: String, error: NotifyError) -> Self {
        CommandResult {
            response,
            error: Some(error),
        }
    }
}
