//! Command action handlers.
//!
//! Individual handler functions for each bot command. Each handler receives the
//! [`Command`](crate::commands::command::Command), the shared
//! [`CommandContext`](crate::commands::CommandContext) and, when it needs one, the
//! [`Notifier`](crate::notify::Notifier). It returns a
//! [`CommandResult`](crate::commands::CommandResult).
//!
//! # Handler Pattern
//!
//! 1. Admin handlers check the sender against the admin list first
//! 2. At most one Notify API call is made
//! 3. The result carries the text to send back and the API error, if any
//!
//! # Available Handlers
//!
//! - [`handle_help`] - Display help information
//! - [`handle_subscribe`] - Subscribe the sender
//! - [`handle_broadcast`] - Send a message to every subscriber
//! - [`handle_test`] - Send a message to the sender
//! - [`handle_moderators`] - Send a message to every admin

use log::warn;

use crate::commands::{
    CommandContext, CommandResult, command::Command, sms_response::format_not_authorized,
};

mod broadcast;
mod help;
mod moderators;
mod subscribe;
mod test_message;

pub use crate::commands::actions::{
    broadcast::handle_broadcast, help::handle_help, moderators::handle_moderators,
    subscribe::handle_subscribe, test_message::handle_test,
};

/// Rejects commands sent by a number missing from the admin list.
///
/// Returns the result to send back when the sender is not an admin, `None` when
/// the command can go on.
fn reject_non_admin(command: &Command, context: &CommandContext) -> Option<CommandResult> {
    if context.is_admin(command.sender()) {
        return None;
    }

    warn!("{} is not allowed to use admin commands", command.sender());
    Some(CommandResult::ok(format_not_authorized()))
}

#[cfg(test)]
pub(crate) mod test_utils {
    use std::{cell::RefCell, sync::Once};

    use log::{Level, LevelFilter, Log, Metadata, Record};

    use crate::commands::{CommandContext, InboundMessage, command::Command};
    use crate::notify::NotifyError;

    pub const ADMIN: &str = "+15551234567";
    pub const STRANGER: &str = "+15559999999";

    pub fn create_test_context() -> CommandContext {
        CommandContext {
            owner_name: "Jane".to_string(),
            owner_number: "+15550001111".to_string(),
            admins: vec![ADMIN.to_string()],
        }
    }

    pub fn create_command(from: &str, body: &str) -> Command {
        Command::new(&InboundMessage {
            from: from.to_string(),
            body: Some(body.to_string()),
        })
    }

    pub fn create_api_error() -> NotifyError {
        NotifyError::Api {
            status: 500,
            code: Some(20500),
            message: "Internal Server Error".to_string(),
        }
    }

    thread_local! {
        static RECORDS: RefCell<Vec<(Level, String, String)>> = const { RefCell::new(Vec::new()) };
    }

    /// Logger keeping the records of the current thread.
    ///
    /// `#[tokio::test]` runs on the test thread, so tests running in parallel do
    /// not see each other's records.
    struct CaptureLogger;

    impl Log for CaptureLogger {
        fn enabled(&self, _: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            RECORDS.with(|records| {
                records.borrow_mut().push((
                    record.level(),
                    record.target().to_owned(),
                    record.args().to_string(),
                ))
            });
        }

        fn flush(&self) {}
    }

    static LOGGER: CaptureLogger = CaptureLogger;
    static INIT: Once = Once::new();

    /// Installs the capture logger and clears the records of the current thread.
    pub fn start_log_capture() {
        INIT.call_once(|| {
            let _ = log::set_logger(&LOGGER);
            log::set_max_level(LevelFilter::Trace);
        });
        RECORDS.with(|records| records.borrow_mut().clear());
    }

    /// Error records of the current thread as `(target, message)`.
    pub fn captured_errors() -> Vec<(String, String)> {
        RECORDS.with(|records| {
            records
                .borrow()
                .iter()
                .filter(|(level, _, _)| *level == Level::Error)
                .map(|(_, target, message)| (target.clone(), message.clone()))
                .collect()
        })
    }
}
