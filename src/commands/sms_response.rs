//! SMS response formatters for bot commands.
//!
//! Every text the bot sends back lives here. Texts are plain, SMS has no formatting.

/// Formats the help message.
///
/// # Arguments
///
/// * `owner_name` - Display name of the bot owner
/// * `owner_number` - Phone number of the bot owner
///
/// # Examples
///
/// ```ignore
/// let help = format_help("Jane", "+15550001111");
/// assert!(help.contains("subscribe"));
/// ```
pub fn format_help(owner_name: &str, owner_number: &str) -> String {
    format!(
        "Thanks for texting {}! Reply \"subscribe\" to receive updates by text message. \
        Questions? Reach {} at {}.",
        owner_name, owner_name, owner_number
    )
}

/// Formats the reply to a successful subscription.
pub fn format_subscribe_success() -> String {
    "Thanks! You are now subscribed and will receive our next updates.".to_owned()
}

/// Formats the reply to a failed subscription.
///
/// Points the user to the owner since the subscription did not go through.
pub fn format_subscribe_failure(owner_name: &str, owner_number: &str) -> String {
    format!(
        "Sorry, we could not subscribe you. Please contact {} at {}.",
        owner_name, owner_number
    )
}

/// Formats the reply to an admin command sent by someone who is not an admin.
pub fn format_not_authorized() -> String {
    "Your phone number is not authorized to broadcast in this application.".to_owned()
}

/// Formats the reply to a successful broadcast.
pub fn format_broadcast_success() -> String {
    "Boom! Your message was broadcast to all subscribers.".to_owned()
}

/// Formats the reply to a failed broadcast, test or moderators message.
pub fn format_broadcast_failure() -> String {
    "Failed to send your message.".to_owned()
}

/// Formats the reply to a successful test message.
///
/// # Examples
///
/// ```ignore
/// let msg = format_test_success("+15551234567");
/// assert!(msg.contains("+15551234567"));
/// ```
pub fn format_test_success(sender: &str) -> String {
    format!("Test message sent to {}.", sender)
}

/// Formats the reply to a message sent to the moderators.
///
/// # Arguments
///
/// * `admins` - Numbers the message was sent to
pub fn format_moderators_success(admins: &[String]) -> String {
    format!("Message sent to moderators: {}.", admins.join(", "))
}

/// Formats the reply sent whenever a command ends with an error.
pub fn format_retry() -> String {
    "Oops! Something went wrong. Please try again later.".to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_help() {
        assert_eq!(
            format_help("Jane", "+15550001111"),
            "Thanks for texting Jane! Reply \"subscribe\" to receive updates by text message. \
            Questions? Reach Jane at +15550001111."
        );
    }

    #[test]
    fn test_format_subscribe_failure_contains_owner() {
        let msg = format_subscribe_failure("Jane", "+15550001111");
        assert!(msg.contains("Jane"));
        assert!(msg.contains("+15550001111"));
    }

    #[test]
    fn test_format_test_success() {
        assert_eq!(
            format_test_success("+15551234567"),
            "Test message sent to +15551234567."
        );
    }

    #[test]
    fn test_format_moderators_success() {
        let admins = vec!["+15551111111".to_string(), "+15552222222".to_string()];
        assert_eq!(
            format_moderators_success(&admins),
            "Message sent to moderators: +15551111111, +15552222222."
        );
    }

    #[test]
    fn test_format_retry_differs_from_fallbacks() {
        assert_ne!(format_retry(), format_broadcast_failure());
        assert_ne!(format_retry(), format_subscribe_failure("Jane", "+15550001111"));
    }

    #[test]
    fn test_format_not_authorized() {
        assert!(format_not_authorized().contains("not authorized"));
    }
}
