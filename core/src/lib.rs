/*
 * SPDX-FileCopyrightText: 2026 Pixis Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod consts;
pub mod database;
pub mod input;
pub mod types;

use anyhow::{Context, Result, bail};
use clap::Parser;
use database::connect_db;
use input::load_secret;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use types::*;

pub async fn init_state() -> Result<Arc<ServerState>> {
    let cli = Cli::parse();

    init_logging(&cli)?;

    tracing::info!(ip = %cli.ip, port = cli.port, "Starting Pixis Server");

    let jwt_secret = resolve_jwt_secret(&cli)?;
    let db = connect_db(&cli).await?;

    tracing::info!("Database ready");

    Ok(Arc::new(ServerState {
        db,
        cli,
        jwt_secret,
    }))
}

pub fn init_logging(cli: &Cli) -> Result<()> {
    let filter = EnvFilter::try_new(&cli.log_level).context("Invalid log level")?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = if cli.log_json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}

/// The secret file takes precedence over an inline secret.
pub fn resolve_jwt_secret(cli: &Cli) -> Result<String> {
    let secret = match (&cli.jwt_secret_file, &cli.jwt_secret) {
        (Some(file), _) => load_secret(file).context("Failed to read jwt secret file")?,
        (None, Some(secret)) => secret.trim().to_string(),
        (None, None) => bail!("No jwt secret provided"),
    };

    if secret.is_empty() {
        bail!("Jwt secret is empty");
    }

    Ok(secret)
}
