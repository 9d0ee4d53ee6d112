//! TwiML reply sent back to Twilio.
//!
//! Twilio reads the webhook response as TwiML and texts the `<Message>` content
//! back to the sender.

use log::error;
use quick_xml::escape::escape;

use crate::commands::{CommandResult, sms_response::format_retry};

/// A single text message answering the sender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Text of the message
    pub message: String,
}

impl Reply {
    /// Builds the reply from the outcome of a command.
    ///
    /// When the command failed, the error is logged and the text proposed by the
    /// handler is replaced by the generic retry message.
    pub fn from_result(result: CommandResult) -> Self {
        let message = match result.error {
            Some(err) => {
                error!("command failed: {}", err);
                format_retry()
            }
            None => result.response,
        };

        Reply { message }
    }

    /// Renders the reply as a TwiML document.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let reply = Reply { message: "Hi & bye".to_string() };
    /// assert_eq!(
    ///     reply.to_twiml(),
    ///     "<?xml version=\"1.0\" encoding=\"UTF-8\"?><Response><Message>Hi &amp; bye</Message></Response>"
    /// );
    /// ```
    pub fn to_twiml(&self) -> String {
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?><Response><Message>{}</Message></Response>",
            escape(self.message.as_str())
        )
    }
}
