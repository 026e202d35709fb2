/*
 * SPDX-FileCopyrightText: 2026 Pixis Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use pixis_core::init_state;
use std::sync::Arc;

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    let state = init_state().await?;

    if let Err(e) = web::serve_web(Arc::clone(&state)).await {
        tracing::error!("Server stopped: {}", e);
        return Err(e.into());
    }

    Ok(())
}
