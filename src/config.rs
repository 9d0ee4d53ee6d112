//! Configuration file structures for the Herald bot.
//!
//! The configuration is read from a YAML file and can be overridden by environment
//! variables prefixed with `HERALD_`, using `__` to reach nested keys.
//!
//! # Configuration File Format
//!
//! ```yaml
//! # Twilio account and Notify service
//! twilio:
//!   account_sid: "ACxxxxxxxxxxxxxxxx"
//!   auth_token: "secret-token"
//!   notify_service_sid: "ISxxxxxxxxxxxxxxxx"
//!
//! # Person running the bot, shown in help and error messages
//! owner:
//!   name: "Jane"
//!   number: "+15550001111"
//!
//! # Numbers allowed to broadcast, comma separated
//! admin_numbers: "+15551111111,+15552222222"
//!
//! # Webhook server, optional
//! server:
//!   host: "0.0.0.0"
//!   port: 3000
//!   path: "/sms"
//! ```
//!
//! # Environment Variable Overrides
//!
//! ```bash
//! export HERALD_TWILIO__AUTH_TOKEN="secret-from-env"
//! export HERALD_ADMIN_NUMBERS="+15551111111,+15553333333"
//! ```

use anyhow::Context;
use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
use serde::Deserialize;

/// Default base URL of the Twilio Notify API.
const DEFAULT_NOTIFY_API_URL: &str = "https://notify.twilio.com";

/// Root configuration structure for the Herald bot.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Twilio account configuration
    pub twilio: Twilio,
    /// Owner of the bot
    pub owner: Owner,
    /// Comma separated list of the phone numbers allowed to broadcast.
    ///
    /// Use [`Config::admins`] to get the parsed list.
    pub admin_numbers: String,
    /// Webhook server configuration
    #[serde(default)]
    pub server: Server,
}

/// Twilio account and Notify service configuration.
///
/// # YAML Section
///
/// ```yaml
/// twilio:
///   account_sid: "ACxxxxxxxxxxxxxxxx"
///   auth_token: "secret-token"
///   notify_service_sid: "ISxxxxxxxxxxxxxxxx"
///   api_url: "https://notify.twilio.com"
/// ```
#[derive(Debug, Deserialize)]
pub struct Twilio {
    /// Account SID, used as the basic auth user.
    pub account_sid: String,

    /// Auth token, used as the basic auth password.
    pub auth_token: String,

    /// SID of the Notify service holding the subscriber bindings.
    pub notify_service_sid: String,

    /// Base URL of the Notify API.
    ///
    /// Only worth changing to point the bot at a test server.
    #[serde(default = "default_notify_api_url")]
    pub api_url: String,
}

/// Owner of the bot.
///
/// Users are told to contact the owner when something goes wrong.
#[derive(Debug, Deserialize)]
pub struct Owner {
    /// Display name of the owner
    pub name: String,
    /// Phone number users can reach the owner at
    pub number: String,
}

/// Webhook server configuration.
#[derive(Debug, Deserialize)]
pub struct Server {
    /// Address the server binds to
    #[serde(default = "default_host")]
    pub host: String,
    /// Port the server listens on
    #[serde(default = "default_port")]
    pub port: u16,
    /// Path Twilio posts incoming messages to
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for Server {
    fn default() -> Self {
        Server {
            host: default_host(),
            port: default_port(),
            path: default_path(),
        }
    }
}

fn default_notify_api_url() -> String {
    DEFAULT_NOTIFY_API_URL.to_owned()
}

fn default_host() -> String {
    "0.0.0.0".to_owned()
}

fn default_port() -> u16 {
    3000
}

fn default_path() -> String {
    "/sms".to_owned()
}

impl Config {
    /// Loads the configuration from a YAML file, applying `HERALD_` environment overrides.
    ///
    /// A trailing slash on the Notify API url is removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if a required key is missing
    /// from both the file and the environment.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// let config = Config::load("config.yaml")?;
    /// println!("Owner: {}", config.owner.name);
    /// ```
    pub fn load(path: &str) -> Result<Self, anyhow::Error> {
        let mut config: Config = Figment::new()
            .merge(Yaml::file(path))
            .merge(Env::prefixed("HERALD_").split("__"))
            .extract()
            .with_context(|| format!("invalid configuration in {}", path))?;

        while config.twilio.api_url.ends_with('/') {
            config.twilio.api_url.pop();
        }

        Ok(config)
    }

    /// Returns the admin phone numbers in configuration order.
    ///
    /// Entries are trimmed and empty entries are dropped, so `"+1555, +1666,"`
    /// yields `["+1555", "+1666"]`.
    pub fn admins(&self) -> Vec<String> {
        parse_admin_numbers(&self.admin_numbers)
    }
}

/// Splits a comma separated list of phone numbers.
pub fn parse_admin_numbers(admin_numbers: &str) -> Vec<String> {
    admin_numbers
        .split(',')
        .map(str::trim)
        .filter(|number| !number.is_empty())
        .map(str::to_owned)
        .collect()
}
