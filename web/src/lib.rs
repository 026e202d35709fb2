/*
 * SPDX-FileCopyrightText: 2026 Pixis Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod authorization;
pub mod endpoints;
pub mod error;

use axum::routing::{get, post};
use axum::{Router, middleware};
use endpoints::*;
use http::{HeaderValue, Method, header};
use pixis_core::types::ServerState;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router(state: Arc<ServerState>) -> Router {
    let resources = Router::new()
        .route("/departments", get(departments::get).post(departments::post))
        .route(
            "/departments/{department}",
            get(departments::get_department)
                .put(departments::put_department)
                .delete(departments::delete_department),
        )
        .route("/services", get(services::get).post(services::post))
        .route(
            "/services/{service}",
            get(services::get_service)
                .put(services::put_service)
                .delete(services::delete_service),
        )
        .route("/duties", get(duties::get).post(duties::post))
        .route(
            "/duties/{duty}",
            get(duties::get_duty)
                .put(duties::put_duty)
                .delete(duties::delete_duty),
        )
        .route("/conscripts", get(conscripts::get).post(conscripts::post))
        .route(
            "/conscripts/{conscript}",
            get(conscripts::get_conscript)
                .put(conscripts::put_conscript)
                .delete(conscripts::delete_conscript),
        )
        .route(
            "/conscript_duties",
            get(conscript_duties::get)
                .post(conscript_duties::post)
                .put(conscript_duties::put)
                .delete(conscript_duties::delete),
        )
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state),
            authorization::authorize,
        ));

    let mut app = Router::new()
        .merge(resources)
        .route("/auth/login", post(auth::post_login))
        .route("/health", get(get_health))
        .fallback(handle_404)
        .layer(TraceLayer::new_for_http());

    if let Some(cors) = cors_layer(&state) {
        app = app.layer(cors);
    }

    app.with_state(state)
}

fn cors_layer(state: &ServerState) -> Option<CorsLayer> {
    let serve_url = state.cli.serve_url.as_deref()?;

    let origin = match serve_url.parse::<HeaderValue>() {
        Ok(origin) => origin,
        Err(e) => {
            tracing::warn!("Ignoring invalid serve url {}: {}", serve_url, e);
            return None;
        }
    };

    Some(
        CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([header::AUTHORIZATION, header::ACCEPT, header::CONTENT_TYPE])
            .allow_credentials(true),
    )
}

pub async fn serve_web(state: Arc<ServerState>) -> std::io::Result<()> {
    let server_url = format!("{}:{}", state.cli.ip, state.cli.port);
    let app = create_router(Arc::clone(&state));

    let listener = tokio::net::TcpListener::bind(&server_url).await?;
    tracing::info!("Listening on {}", server_url);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }

    tracing::info!("Shutting down");
}
