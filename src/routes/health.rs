// ABOUTME: Liveness endpoint for deployment probes
// ABOUTME: Reports service name, version, and configured model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PlateGenie

//! Health route.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use super::ServerResources;

/// Health check response body
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status; always "ok" when the process can answer
    pub status: String,
    /// Service name
    pub service: String,
    /// Crate version
    pub version: String,
    /// Configured generation model tier
    pub model: String,
}

/// Health routes handler
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create the health routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/health", get(Self::health))
            .with_state(resources)
    }

    /// Liveness probe
    #[allow(clippy::unused_async)] // axum handlers must be async
    async fn health(State(resources): State<Arc<ServerResources>>) -> Response {
        let response = HealthResponse {
            status: "ok".to_owned(),
            service: "plategenie".to_owned(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
            model: resources.config.gemini_model.clone(),
        };
        (StatusCode::OK, Json(response)).into_response()
    }
}
