//! Herald - An SMS bot to subscribe people and broadcast messages through Twilio Notify.
//!
//! This is the main entry point for the Herald bot, which answers the SMS Twilio
//! forwards to its webhook.
//!
//! # Overview
//!
//! Anyone texting the bot number can subscribe to updates. Admins, listed in the
//! configuration, can then broadcast a message to every subscriber, try it on
//! their own phone first, or reach the other admins only.
//!
//! # Configuration
//!
//! Create a `config.yaml` file with your settings:
//!
//! ```yaml
//! twilio:
//!   account_sid: "ACxxxxxxxxxxxxxxxx"
//!   auth_token: "your-auth-token"
//!   notify_service_sid: "ISxxxxxxxxxxxxxxxx"
//!
//! owner:
//!   name: "Jane"
//!   number: "+15550001111"
//!
//! admin_numbers: "+15551111111,+15552222222"
//! ```
//!
//! # Environment Variable Overrides
//!
//! Override any configuration value using environment variables with the `HERALD_` prefix:
//!
//! ```bash
//! export HERALD_TWILIO__ACCOUNT_SID="ACxxxxxxxxxxxxxxxx"
//! export HERALD_TWILIO__AUTH_TOKEN="your-auth-token"
//! export HERALD_SERVER__PORT=8080
//! ```
//!
//! # Usage
//!
//! ```bash
//! herald --config config.yaml
//! ```
//!
//! Then point the "A message comes in" webhook of the Twilio number to
//! `http://<host>:3000/sms`.
//!
//! # Bot Commands
//!
//! - `subscribe` - Receive the next broadcasts
//! - `broadcast <message>` or `send <message>` - Send a message to every subscriber (admins)
//! - `test <message>` - Send a message to yourself (admins)
//! - `mods <message>` - Send a message to every admin (admins)
//! - anything else - Display help information
//!
//! # Architecture
//!
//! - [`bot`] - Webhook server
//! - [`commands`] - Command parsing, execution and replies
//! - [`config`] - YAML configuration with environment variable support
//! - [`notify`] - Twilio Notify API client
//! - [`utils`] - Phone number normalization
//!
//! # Environment Variables
//!
//! - `RUST_LOG` - Controls logging level (default: `info`)

use clap::Parser;
use env_logger::Env;
use log::{error, info};

use crate::{bot::Bot, config::Config};

mod bot;
mod commands;
mod config;
mod notify;
mod utils;

/// Command-line arguments for the Herald bot.
///
/// Everything else is set in the YAML file (see [`config::Config`]).
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the YAML configuration file.
    ///
    /// Values can be overridden with `HERALD_` prefixed environment variables,
    /// using `__` between nested keys.
    #[arg(short, long)]
    config: String,
}

/// Main entry point for the Herald bot.
///
/// 1. **Logging Setup**: `info` level by default, overridden by `RUST_LOG`
/// 2. **Argument Parsing**: Parses command-line arguments using `clap`
/// 3. **Configuration Loading**: Reads the YAML file and the environment overrides
/// 4. **Bot Execution**: Serves the webhook until the process is terminated
///
/// Configuration and server errors are logged and end the process without panicking.
#[tokio::main]
async fn main() {
    // Put logger at info level by default
    let env = Env::default().filter_or("RUST_LOG", "info");
    env_logger::init_from_env(env);

    info!("Starting herald {}...", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    let config = match Config::load(&args.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load config file: {:#}", e);
            return;
        }
    };

    let bot = Bot::new(config);
    if let Err(e) = bot.start().await {
        error!("Webhook server failed: {:#}", e);
    }
}
