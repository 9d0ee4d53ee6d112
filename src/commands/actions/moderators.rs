//! Moderators command handler.
//!
//! Sends the text of the command to every admin. Admins are addressed with
//! inline SMS bindings, so they do not need to be subscribed.

use log::{debug, info};

use crate::{
    commands::{
        CommandContext, CommandResult,
        actions::reject_non_admin,
        command::Command,
        sms_response::{format_broadcast_failure, format_moderators_success},
    },
    notify::{Binding, Notification, Notifier, Recipients},
};

/// Builds one SMS binding per admin, keeping the admin list order.
pub fn admin_bindings(admins: &[String]) -> Vec<Binding> {
    admins.iter().map(|admin| Binding::sms(admin)).collect()
}

/// Sends the command text to every admin.
///
/// # Returns
///
/// - The not authorized message, without calling the API, if the sender is not an admin
/// - A success message listing the admins when the notification is created
/// - The broadcast failure message with the API error otherwise
pub async fn handle_moderators<N: Notifier>(
    notifier: &N,
    command: &Command,
    context: &CommandContext,
) -> CommandResult {
    debug!("handling moderators command: {:?}", command);

    if let Some(rejection) = reject_non_admin(command, context) {
        return rejection;
    }

    let notification = Notification {
        body: command.text(),
        recipients: Recipients::Bindings(admin_bindings(&context.admins)),
    };

    match notifier.create_notification(&notification).await {
        Ok(response) => {
            info!(
                "{} sent notification {} to moderators",
                command.sender(),
                response.sid
            );
            CommandResult::ok(format_moderators_success(&context.admins))
        }
        Err(err) => CommandResult::failed(format_broadcast_failure(), err),
    }
}
