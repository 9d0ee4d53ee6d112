//! Bot module serving the Twilio webhook.
//!
//! This module provides the [`Bot`] implementation which exposes the HTTP endpoint
//! Twilio calls for every SMS received on the bot number.
//!
//! # Overview
//!
//! Twilio posts each incoming SMS as an `application/x-www-form-urlencoded` form.
//! The bot runs the command found in the message and answers with TwiML, which
//! Twilio texts back to the sender.
//!
//! # Routes
//!
//! - `POST {server.path}` - Incoming SMS webhook, `/sms` by default
//! - `GET /health` - Health check, answers `ok`
//!
//! # Command Processing Flow
//!
//! ```text
//! Twilio POST → Form<InboundMessage> → Commander::handle() → Reply → TwiML
//! ```
//!
//! # Example
//!
//! ```no_run
//! let config = Config::load("config.yaml")?;
//! let bot = Bot::new(config);
//! bot.start().await?; // Runs indefinitely
//! ```

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::{
    Form, Router,
    extract::State,
    http::header,
    response::IntoResponse,
    routing::{get, post},
};
use log::{debug, info};
use tokio::net::TcpListener;

use crate::{
    commands::{CommandContext, Commander, InboundMessage},
    config::Config,
    notify::NotifyRequester,
};

/// Commander shared by every request.
type SharedCommander = Arc<Commander<NotifyRequester>>;

/// Main bot structure serving the SMS webhook.
///
/// The configuration is read once at startup. Every request shares the same
/// [`Commander`], which only holds read-only state, so requests are handled
/// concurrently without locking.
pub struct Bot {
    /// Command executor shared with the request handlers
    commander: SharedCommander,
    /// Address the server binds to
    address: String,
    /// Path of the webhook route
    path: String,
}

impl Bot {
    /// Creates a new Bot from the configuration.
    ///
    /// Builds the Notify client and the command context. No network call is made
    /// until the first SMS comes in.
    pub fn new(config: Config) -> Self {
        let requester = NotifyRequester::new(
            &config.twilio.api_url,
            &config.twilio.account_sid,
            &config.twilio.auth_token,
            &config.twilio.notify_service_sid,
        );

        let context = CommandContext {
            admins: config.admins(),
            owner_name: config.owner.name,
            owner_number: config.owner.number,
        };
        info!("{} admin number(s) configured", context.admins.len());

        Bot {
            commander: Arc::new(Commander::new(requester, context)),
            address: format!("{}:{}", config.server.host, config.server.port),
            path: config.server.path,
        }
    }

    /// Starts the webhook server.
    ///
    /// Runs until the process is terminated.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured address is invalid, cannot be bound, or if
    /// the server stops unexpectedly.
    pub async fn start(self) -> Result<(), anyhow::Error> {
        let address: SocketAddr = self
            .address
            .parse()
            .with_context(|| format!("invalid server address {}", &self.address))?;
        let listener = TcpListener::bind(address)
            .await
            .with_context(|| format!("unable to bind {}", address))?;

        info!("listening for incoming sms on http://{}{}", address, &self.path);

        axum::serve(listener, router(self.commander, &self.path))
            .await
            .context("webhook server stopped")
    }
}

/// Builds the webhook router.
///
/// # Arguments
///
/// * `commander` - Command executor shared with the handlers
/// * `path` - Path of the SMS webhook
pub fn router(commander: SharedCommander, path: &str) -> Router {
    Router::new()
        .route(path, post(handle_sms))
        .route("/health", get(health))
        .with_state(commander)
}

/// Handles an incoming SMS and answers with TwiML.
async fn handle_sms(
    State(commander): State<SharedCommander>,
    Form(message): Form<InboundMessage>,
) -> impl IntoResponse {
    debug!("incoming sms: {:?}", message);

    let reply = commander.handle(&message).await;

    debug!("replying with {:?}", reply);

    ([(header::CONTENT_TYPE, "text/xml")], reply.to_twiml())
}

async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use mockito::Matcher;
    use tower::ServiceExt;

    use super::*;

    fn create_router(url: &str) -> Router {
        let requester = NotifyRequester::new(url, "AC123", "token", "IS123");
        let context = CommandContext {
            owner_name: "Jane".to_string(),
            owner_number: "+15550001111".to_string(),
            admins: vec!["+15551234567".to_string()],
        };

        router(Arc::new(Commander::new(requester, context)), "/sms")
    }

    fn sms_request(form: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/sms")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_owned()))
            .unwrap()
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_subscribe_webhook() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/Services/IS123/Bindings")
            .match_body(Matcher::AllOf(vec![
                Matcher::UrlEncoded("Identity".to_owned(), "+15551234567".to_owned()),
                Matcher::UrlEncoded("Address".to_owned(), "+15551234567".to_owned()),
            ]))
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(r#"{"sid": "BS123", "identity": "+15551234567", "binding_type": "sms", "address": "+15551234567"}"#)
            .expect(1)
            .create_async()
            .await;

        let response = create_router(&server.url())
            .oneshot(sms_request(
                "From=5551234567&Body=subscribe&MessageSid=SM123",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/xml");
        assert_eq!(
            body_string(response).await,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?><Response><Message>Thanks! You are now subscribed and will receive our next updates.</Message></Response>"
        );
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_subscribe_webhook_api_failure() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/Services/IS123/Bindings")
            .with_status(500)
            .with_header("content-type", "application/json")
            .with_body(r#"{"code": 20500, "message": "Internal Server Error", "status": 500}"#)
            .expect(1)
            .create_async()
            .await;

        let response = create_router(&server.url())
            .oneshot(sms_request("From=%2B15551234567&Body=subscribe"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_string(response).await,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?><Response><Message>Oops! Something went wrong. Please try again later.</Message></Response>"
        );
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_unauthorized_webhook_makes_no_call() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let response = create_router(&server.url())
            .oneshot(sms_request("From=%2B15559999999&Body=test+ping"))
            .await
            .unwrap();

        assert_eq!(
            body_string(response).await,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?><Response><Message>Your phone number is not authorized to broadcast in this application.</Message></Response>"
        );
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_broadcast_webhook() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/Services/IS123/Notifications")
            .match_body(Matcher::AllOf(vec![
                Matcher::UrlEncoded("Body".to_owned(), "hello world".to_owned()),
                Matcher::UrlEncoded("Tag".to_owned(), "all".to_owned()),
            ]))
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(r#"{"sid": "NT123"}"#)
            .expect(1)
            .create_async()
            .await;

        let response = create_router(&server.url())
            .oneshot(sms_request(
                "From=%2B15551234567&Body=Broadcast+hello+world",
            ))
            .await
            .unwrap();

        assert!(body_string(response).await.contains("Boom!"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_missing_body_replies_help() {
        let server = mockito::Server::new_async().await;

        let response = create_router(&server.url())
            .oneshot(sms_request("From=%2B15559999999"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_string(response).await.contains("Reply &quot;subscribe&quot;"));
    }

    #[tokio::test]
    async fn test_missing_sender_is_rejected() {
        let server = mockito::Server::new_async().await;

        let response = create_router(&server.url())
            .oneshot(sms_request("Body=subscribe"))
            .await
            .unwrap();

        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_health() {
        let server = mockito::Server::new_async().await;

        let response = create_router(&server.url())
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "ok");
    }
}
