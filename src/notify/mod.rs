//! Twilio Notify API client.
//!
//! This module wraps the two Notify operations the bot relies on: registering a
//! subscriber binding and sending a notification to a set of bindings.
//!
//! # Modules
//!
//! - `requester` - HTTP client and the [`Notifier`] trait used by the commands
//! - `response_structs` - Data structures for API responses
//! - `structs` - Bindings and notifications sent to the API
//!
//! # Examples
//!
//! ```no_run
//! let requester = NotifyRequester::new("https://notify.twilio.com", "AC123", "token", "IS123");
//! let notification = Notification {
//!     body: "Hello everyone".to_string(),
//!     recipients: Recipients::Tag("all".to_string()),
//! };
//! requester.create_notification(&notification).await?;
//! ```

mod requester;
mod response_structs;
mod structs;

use thiserror::Error;

#[cfg(test)]
pub use crate::notify::requester::MockNotifier;
pub use crate::notify::requester::{Notifier, NotifyRequester};
#[cfg(test)]
pub use crate::notify::response_structs::{BindingResponse, NotificationResponse};
pub use crate::notify::structs::{Binding, Notification, Recipients};

/// Tag reaching every subscriber of the Notify service.
pub const TAG_ALL: &str = "all";

/// Errors returned by the Notify API client.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The request could not be sent or the response could not be read.
    #[error("request to the notify api failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    ///
    /// `code` is the Twilio error code when the body could be parsed.
    #[error("notify api responded with status {status} (code {code:?}): {message}")]
    Api {
        status: u16,
        code: Option<u32>,
        message: String,
    },

    /// A binding could not be encoded as JSON.
    #[error("unable to encode binding: {0}")]
    Encoding(#[from] serde_json::Error),
}
