//! Data sent to the Notify API.

use serde::Serialize;

use crate::notify::NotifyError;

/// Channel a binding delivers on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BindingType {
    Sms,
}

impl BindingType {
    /// Value expected by the `BindingType` form field.
    pub fn as_str(&self) -> &'static str {
        match self {
            BindingType::Sms => "sms",
        }
    }
}

/// An address reachable on a channel.
///
/// Serialized as `{"binding_type":"sms","address":"+15551234567"}` when passed
/// inline to a notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Binding {
    pub binding_type: BindingType,
    pub address: String,
}

impl Binding {
    /// Creates an SMS binding for a phone number.
    pub fn sms(address: &str) -> Self {
        Binding {
            binding_type: BindingType::Sms,
            address: address.to_owned(),
        }
    }
}

/// Who a notification is delivered to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recipients {
    /// Every identity carrying the tag
    Tag(String),
    /// Explicit identities, each must already have a binding
    Identities(Vec<String>),
    /// Explicit bindings, no subscription needed
    Bindings(Vec<Binding>),
}

/// A message to send through the Notify service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub body: String,
    pub recipients: Recipients,
}

impl Notification {
    /// Builds the form fields of the `Notifications` endpoint.
    ///
    /// Identities and bindings are repeated fields, one per recipient.
    pub fn to_form(&self) -> Result<Vec<(&'static str, String)>, NotifyError> {
        let mut form = vec![("Body", self.body.clone())];

        match &self.recipients {
            Recipients::Tag(tag) => form.push(("Tag", tag.clone())),
            Recipients::Identities(identities) => {
                form.extend(identities.iter().map(|identity| ("Identity", identity.clone())))
            }
            Recipients::Bindings(bindings) => {
                for binding in bindings {
                    form.push(("ToBinding", serde_json::to_string(binding)?));
                }
            }
        }

        Ok(form)
    }
}
