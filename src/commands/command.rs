//! Command parsing.
//!
//! This module wraps an [`InboundMessage`] into a [`Command`] and maps its first
//! word to a [`CommandKind`].

use log::debug;

use crate::{commands::InboundMessage, utils::normalize_phone_number};

/// Handler selected by the first word of a message.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum CommandKind {
    /// Display help information
    Help,
    /// Subscribe the sender to broadcasts
    Subscribe,
    /// Send the text to every subscriber, also reachable with `send`
    Broadcast,
    /// Send the text to the sender only
    Test,
    /// Send the text to every admin
    Moderators,
}

impl CommandKind {
    /// Maps a lowercase keyword to its command.
    ///
    /// Unknown keywords, including the empty one, map to [`CommandKind::Help`].
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "subscribe" => CommandKind::Subscribe,
            "broadcast" | "send" => CommandKind::Broadcast,
            "test" => CommandKind::Test,
            "mods" => CommandKind::Moderators,
            _ => CommandKind::Help,
        }
    }
}

/// An incoming message ready to be executed.
///
/// The sender is normalized with [`normalize_phone_number`] on creation, every
/// authorization check and API call uses this normalized form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// Normalized sender phone number
    sender: String,
    /// Raw message body, empty when absent
    body: String,
}

impl Command {
    /// Creates a command from an incoming message.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let message = InboundMessage {
    ///     from: "5551234567".to_string(),
    ///     body: Some("broadcast hello world".to_string()),
    /// };
    /// let command = Command::new(&message);
    /// assert_eq!(command.sender(), "+15551234567");
    /// assert_eq!(command.text(), "hello world");
    /// ```
    pub fn new(message: &InboundMessage) -> Self {
        Command {
            sender: normalize_phone_number(&message.from),
            body: message.body.clone().unwrap_or_default(),
        }
    }

    /// Normalized sender phone number.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Lowercase first word of the body, empty if there is none.
    pub fn keyword(&self) -> String {
        self.body
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_lowercase()
    }

    /// Handler this command is routed to.
    pub fn kind(&self) -> CommandKind {
        let kind = CommandKind::from_keyword(&self.keyword());
        debug!("command from {} routed to {:?}", &self.sender, kind);
        kind
    }

    /// Words following the keyword.
    ///
    /// The body is trimmed then split on single spaces, so consecutive spaces
    /// inside the text are kept as empty words. Other whitespace is not a
    /// separator: in `"broadcast\nhello world"` the first word is
    /// `"broadcast\nhello"`, while [`Command::keyword`] still reads `broadcast`.
    pub fn arguments(&self) -> Vec<&str> {
        let trimmed = self.body.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }

        trimmed.split(' ').skip(1).collect()
    }

    /// The body without its keyword.
    pub fn text(&self) -> String {
        self.arguments().join(" ")
    }
}
