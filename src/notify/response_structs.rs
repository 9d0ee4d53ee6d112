//! Data structures returned by the Notify API.
//!
//! Only the fields the bot logs are kept, the rest of the payload is ignored.

use serde::Deserialize;

/// Response of `POST /v1/Services/{sid}/Bindings`.
#[derive(Debug, Deserialize)]
pub struct BindingResponse {
    pub sid: String,
    pub identity: String,
    pub binding_type: String,
    pub address: String,
}

/// Response of `POST /v1/Services/{sid}/Notifications`.
#[derive(Debug, Deserialize)]
pub struct NotificationResponse {
    pub sid: String,
}

/// Error payload sent with non-success statuses.
///
/// ```json
/// { "code": 20404, "message": "The requested resource was not found", "status": 404 }
/// ```
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorResponse {
    #[serde(default)]
    pub code: Option<u32>,
    pub message: String,
}
