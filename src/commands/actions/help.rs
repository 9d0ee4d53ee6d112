//! Help command handler.
//!
//! Tells the sender how to subscribe and how to reach the owner. This is also
//! the answer to any message the bot does not understand.

use log::debug;

use crate::commands::{CommandContext, CommandResult, sms_response::format_help};

/// Returns the help message. Never calls the Notify API.
pub fn handle_help(context: &CommandContext) -> CommandResult {
    debug!("handling help command");

    CommandResult::ok(format_help(&context.owner_name, &context.owner_number))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::actions::test_utils::create_test_context;

    #[test]
    fn test_handle_help() {
        let result = handle_help(&create_test_context());

        assert!(result.error.is_none());
        assert_eq!(result.response, format_help("Jane", "+15550001111"));
    }
}
