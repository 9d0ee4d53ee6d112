//! Broadcast command handler.
//!
//! Sends the text of the command to every subscriber, through the `all` tag of
//! the Notify service. Reachable with both `broadcast` and `send`.
//!
//! Only admins can broadcast.

use log::{debug, info};

use crate::{
    commands::{
        CommandContext, CommandResult,
        actions::reject_non_admin,
        command::Command,
        sms_response::{format_broadcast_failure, format_broadcast_success},
    },
    notify::{Notification, Notifier, Recipients, TAG_ALL},
};

/// Sends the command text to every subscriber.
///
/// # Returns
///
/// - The not authorized message, without calling the API, if the sender is not an admin
/// - The broadcast success message when the notification is created
/// - The broadcast failure message with the API error otherwise
pub async fn handle_broadcast<N: Notifier>(
    notifier: &N,
    command: &Command,
    context: &CommandContext,
) -> CommandResult {
    debug!("handling broadcast command: {:?}", command);

    if let Some(rejection) = reject_non_admin(command, context) {
        return rejection;
    }

    let notification = Notification {
        body: command.text(),
        recipients: Recipients::Tag(TAG_ALL.to_owned()),
    };

    match notifier.create_notification(&notification).await {
        Ok(response) => {
            info!("{} broadcast notification {}", command.sender(), response.sid);
            CommandResult::ok(format_broadcast_success())
        }
        Err(err) => CommandResult::failed(format_broadcast_failure(), err),
    }
}
