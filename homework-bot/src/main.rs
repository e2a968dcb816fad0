//! Homework Bot
//!
//! A polling daemon that watches homework review statuses and reports every
//! change to a Telegram chat.
//!
//! Architecture:
//! - Configuration: Credentials and timing from environment variables
//! - Repositories: HTTP communication with the review API
//! - Services: Message delivery to the chat
//! - Scheduler: The poll-diff-notify loop

mod config;
mod error;
mod repository;
mod scheduler;
mod service;

use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::repository::HttpHomeworkRepository;
use crate::scheduler::HomeworkPoller;
use crate::service::TelegramNotifier;
use homework_client::{PracticumClient, TelegramClient};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "homework_bot=debug,homework_client=debug,homework_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Homework Bot");

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            error!(severity = "CRITICAL", "{:#}", e);
            return Err(e);
        }
    };

    let http = homework_client::http_client(config.fetch_timeout)
        .context("Failed to build HTTP client")?;

    let practicum = PracticumClient::with_client(
        config.practicum_endpoint.clone(),
        config.practicum_token.clone(),
        http.clone(),
    );
    let telegram = TelegramClient::with_client(
        config.telegram_api_url.clone(),
        config.telegram_token.clone(),
        http,
    );

    info!(
        "Loaded configuration: endpoint={}, chat_id={}",
        practicum.endpoint(),
        config.telegram_chat_id
    );

    let repository = Arc::new(HttpHomeworkRepository::new(practicum));
    let notifier = Arc::new(TelegramNotifier::new(
        telegram,
        config.telegram_chat_id.clone(),
    ));

    let mut poller = HomeworkPoller::new(
        repository,
        notifier,
        config.poll_interval,
        chrono::Utc::now().timestamp(),
    );

    info!(
        "Poll interval: {:?}, fetch timeout: {:?}",
        config.poll_interval, config.fetch_timeout
    );

    poller.run(shutdown_signal()).await;

    info!("Homework Bot stopped");
    Ok(())
}

/// Loads and validates configuration from environment variables
fn load_config() -> Result<Config> {
    let config = Config::from_env().context("Check the bot environment variables")?;
    config.validate()?;
    Ok(config)
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
