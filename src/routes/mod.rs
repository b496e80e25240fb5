// ABOUTME: HTTP router assembly and shared server resources
// ABOUTME: Wires generation and health routes with tracing and CORS layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PlateGenie

//! HTTP route registration for the generation service.

pub mod generate;
pub mod health;

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::config::ServerConfig;
use crate::generation::RecipeGenerator;

/// Shared resources injected into route handlers
pub struct ServerResources {
    /// Recipe generation service with its LLM provider
    pub generator: RecipeGenerator,
    /// Server configuration
    pub config: ServerConfig,
}

impl ServerResources {
    /// Create server resources from a generator and configuration
    #[must_use]
    pub fn new(generator: RecipeGenerator, config: ServerConfig) -> Self {
        Self { generator, config }
    }
}

/// Build the application router with all routes and middleware layers
#[must_use]
pub fn router(resources: Arc<ServerResources>) -> Router {
    let cors = cors_layer(&resources.config);

    Router::new()
        .merge(generate::GenerateRoutes::routes(resources.clone()))
        .merge(health::HealthRoutes::routes(resources))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Build the CORS layer from configured origins; when no origins are
/// configured the service is open to any origin, which suits a public
/// web client deployment
fn cors_layer(config: &ServerConfig) -> CorsLayer {
    if config.cors_allowed_origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| {
            HeaderValue::from_str(origin)
                .map_err(|e| warn!(origin = %origin, error = %e, "Skipping invalid CORS origin"))
                .ok()
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}
