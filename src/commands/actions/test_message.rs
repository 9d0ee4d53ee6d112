//! Test command handler.
//!
//! Lets an admin preview a message by sending it to their own number only,
//! addressed through their identity on the Notify service.

use log::{debug, info};

use crate::{
    commands::{
        CommandContext, CommandResult,
        actions::reject_non_admin,
        command::Command,
        sms_response::{format_broadcast_failure, format_test_success},
    },
    notify::{Notification, Notifier, Recipients},
};

/// Sends the command text to the sender.
///
/// # Returns
///
/// - The not authorized message, without calling the API, if the sender is not an admin
/// - A success message echoing the sender number when the notification is created
/// - The broadcast failure message with the API error otherwise
pub async fn handle_test<N: Notifier>(
    notifier: &N,
    command: &Command,
    context: &CommandContext,
) -> CommandResult {
    debug!("handling test command: {:?}", command);

    if let Some(rejection) = reject_non_admin(command, context) {
        return rejection;
    }

    let sender = command.sender();
    let notification = Notification {
        body: command.text(),
        recipients: Recipients::Identities(vec![sender.to_owned()]),
    };

    match notifier.create_notification(&notification).await {
        Ok(response) => {
            info!("test notification {} sent to {}", response.sid, sender);
            CommandResult::ok(format_test_success(sender))
        }
        Err(err) => CommandResult::failed(format_broadcast_failure(), err),
    }
}
