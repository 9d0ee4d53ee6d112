//! Subscription command handler.
//!
//! Creates an SMS binding on the Notify service for the sender, so that the
//! following broadcasts reach them. The sender number is both the identity and
//! the address of the binding.

use log::{debug, info};

use crate::{
    commands::{
        CommandContext, CommandResult,
        command::Command,
        sms_response::{format_subscribe_failure, format_subscribe_success},
    },
    notify::{Binding, Notifier},
};

/// Subscribes the sender to broadcasts.
///
/// # Returns
///
/// - The subscribe success message when the binding is created
/// - The subscribe failure message, pointing to the owner, with the API error otherwise
pub async fn handle_subscribe<N: Notifier>(
    notifier: &N,
    command: &Command,
    context: &CommandContext,
) -> CommandResult {
    debug!("handling subscribe command: {:?}", command);

    let sender = command.sender();
    match notifier
        .create_binding(sender, &Binding::sms(sender))
        .await
    {
        Ok(binding) => {
            info!(
                "{} subscribed with {} binding {} to {}",
                binding.identity, binding.binding_type, binding.sid, binding.address
            );
            CommandResult::ok(format_subscribe_success())
        }
        Err(err) => CommandResult::failed(
            format_subscribe_failure(&context.owner_name, &context.owner_number),
            err,
        ),
    }
}
