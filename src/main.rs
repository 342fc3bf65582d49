// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Club Admin session probe
//!
//! Resumes the stored session against the club backend and reports who is
//! signed in, refreshing the access token if needed.

use anyhow::Context;
use club_admin::{
    app::HistoryNavigator,
    auth::{FileTokenStore, MemoryTokenStore, TokenStore},
    config::Config,
    AdminClient,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(api = %config.api_base_url, "Starting Club Admin session probe");

    let tokens: Arc<dyn TokenStore> = match &config.token_store_path {
        Some(path) => Arc::new(FileTokenStore::open(path).context("Failed to open token store")?),
        None => {
            tracing::warn!("CLUB_TOKEN_FILE not set, using an empty in-memory session");
            Arc::new(MemoryTokenStore::new())
        }
    };

    let client = AdminClient::new(config, tokens, Arc::new(HistoryNavigator::new()));

    if !client.session.check_auth().await {
        tracing::info!("No active session; sign in to continue");
        return Ok(());
    }

    let user = client
        .session
        .current_user()
        .await
        .context("Failed to fetch current user")?;
    tracing::info!(
        user_id = user.id,
        email = %user.email,
        role = ?user.role,
        "Session active"
    );
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() -> anyhow::Result<()> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("club_admin=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .init();
    Ok(())
}
