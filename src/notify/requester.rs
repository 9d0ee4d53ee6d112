//! HTTP client for the Twilio Notify API.
//!
//! This module provides the [`NotifyRequester`] struct for creating bindings and
//! notifications on a Notify service.

use log::{debug, info};
use mockall::automock;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::notify::{
    NotifyError,
    response_structs::{ApiErrorResponse, BindingResponse, NotificationResponse},
    structs::{Binding, Notification},
};

/// HTTP client for a Twilio Notify service.
///
/// Requests are authenticated with HTTP basic auth using the account SID and
/// auth token.
///
/// # Examples
///
/// ```no_run
/// let requester = NotifyRequester::new("https://notify.twilio.com", "AC123", "token", "IS123");
/// let binding = requester.create_binding("+15551234567", &Binding::sms("+15551234567")).await?;
/// println!("Binding: {:?}", binding);
/// ```
pub struct NotifyRequester {
    /// Notify API base url
    url: String,
    /// Twilio account SID
    account_sid: String,
    /// Twilio auth token
    auth_token: String,
    /// Notify service SID
    service_sid: String,
    /// HTTP client
    client: Client,
}

/// Trait for calling the Notify service.
///
/// This trait abstracts the HTTP operations for easier testing with mocks.
#[automock]
pub trait Notifier {
    /// Registers `binding` for `identity` so that tagged notifications reach it.
    async fn create_binding(
        &self,
        identity: &str,
        binding: &Binding,
    ) -> Result<BindingResponse, NotifyError>;
    /// Sends a notification to its recipients.
    async fn create_notification(
        &self,
        notification: &Notification,
    ) -> Result<NotificationResponse, NotifyError>;
}

impl NotifyRequester {
    /// Create a new [NotifyRequester].
    ///
    /// # Arguments
    ///
    /// * `url` - The base URL of the Notify API, without trailing slash.
    /// * `account_sid` - The Twilio account SID.
    /// * `auth_token` - The Twilio auth token.
    /// * `service_sid` - The SID of the Notify service.
    pub fn new(url: &str, account_sid: &str, auth_token: &str, service_sid: &str) -> Self {
        let client = reqwest::Client::new();
        NotifyRequester {
            url: url.to_string(),
            account_sid: account_sid.to_string(),
            auth_token: auth_token.to_string(),
            service_sid: service_sid.to_string(),
            client,
        }
    }

    /// Posts `form` to a resource of the service and parses the JSON answer.
    ///
    /// Non-success statuses are turned into [`NotifyError::Api`], using the Twilio
    /// error payload when there is one.
    async fn post<T: DeserializeOwned>(
        &self,
        resource: &str,
        form: &[(&str, String)],
    ) -> Result<T, NotifyError> {
        let url = format!("{}/v1/Services/{}/{}", &self.url, &self.service_sid, resource);
        debug!("request {} with {:?}", &url, form);

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            debug!("error response from {} -> {} {}", &url, status, &body);

            return Err(match serde_json::from_str::<ApiErrorResponse>(&body) {
                Ok(error) => NotifyError::Api {
                    status: status.as_u16(),
                    code: error.code,
                    message: error.message,
                },
                Err(_) => NotifyError::Api {
                    status: status.as_u16(),
                    code: None,
                    message: body,
                },
            });
        }

        Ok(response.json().await?)
    }
}

impl Notifier for NotifyRequester {
    /// Request `POST /v1/Services/{sid}/Bindings`.
    ///
    /// The form sent is:
    /// ```text
    /// Identity=+15551234567&BindingType=sms&Address=+15551234567
    /// ```
    async fn create_binding(
        &self,
        identity: &str,
        binding: &Binding,
    ) -> Result<BindingResponse, NotifyError> {
        info!("request binding creation for {}", identity);

        let form = [
            ("Identity", identity.to_owned()),
            ("BindingType", binding.binding_type.as_str().to_owned()),
            ("Address", binding.address.clone()),
        ];
        let binding_response: BindingResponse = self.post("Bindings", &form).await?;

        debug!("binding created -> {:?}", &binding_response);

        Ok(binding_response)
    }

    /// Request `POST /v1/Services/{sid}/Notifications`.
    ///
    /// See [`Notification::to_form`] for the form sent.
    async fn create_notification(
        &self,
        notification: &Notification,
    ) -> Result<NotificationResponse, NotifyError> {
        info!("request notification to {:?}", &notification.recipients);

        let form = notification.to_form()?;
        let notification_response: NotificationResponse =
            self.post("Notifications", &form).await?;

        debug!("notification created -> {:?}", &notification_response);

        Ok(notification_response)
    }
}
