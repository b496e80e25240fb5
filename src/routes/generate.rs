// ABOUTME: Route handler for the recipe generation endpoint
// ABOUTME: Maps typed generation failures onto the fixed public wire contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PlateGenie

//! Generation route.
//!
//! `POST /api/generate-plan` takes `{"ingredients": [..]}` and returns a JSON
//! array of recipe suggestions. The wire contract collapses all failures into
//! three fixed bodies: a 400 for empty input, a 503 whose body contains
//! "overloaded" for provider capacity exhaustion (the web client matches on
//! that word), and a generic 500 for everything else. Finer-grained error
//! detail goes to logs only.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::error;

use super::ServerResources;
use crate::errors::{AppError, ErrorCode};

/// Fixed body for empty or missing ingredient lists
const NO_INGREDIENTS_MESSAGE: &str = "No ingredients provided";

/// Fixed body for provider capacity exhaustion; must contain "overloaded"
const OVERLOADED_MESSAGE: &str = "The model is overloaded. Please try again later.";

/// Fixed body for every other generation failure
const GENERATION_FAILED_MESSAGE: &str =
    "Failed to generate meal plan. Please check your API key or try again.";

/// Request body for the generation endpoint
#[derive(Debug, Deserialize)]
pub struct GeneratePlanRequest {
    /// Pantry ingredient names; absent is treated the same as empty
    #[serde(default)]
    pub ingredients: Vec<String>,
}

/// Simple error body matching the public contract
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateErrorBody {
    /// User-facing error message
    pub error: String,
}

/// Generation routes handler
pub struct GenerateRoutes;

impl GenerateRoutes {
    /// Create the generation routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/generate-plan", post(Self::generate_plan))
            .with_state(resources)
    }

    /// Generate recipe suggestions from the posted ingredient list
    async fn generate_plan(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<GeneratePlanRequest>,
    ) -> Response {
        match resources.generator.generate(&request.ingredients).await {
            Ok(recipes) => (StatusCode::OK, Json(recipes)).into_response(),
            Err(err) => Self::map_failure(&err),
        }
    }

    /// Collapse a typed generation failure onto the fixed wire contract
    fn map_failure(err: &AppError) -> Response {
        match err.code {
            ErrorCode::InvalidInput | ErrorCode::MissingRequiredField => (
                StatusCode::BAD_REQUEST,
                Json(GenerateErrorBody {
                    error: NO_INGREDIENTS_MESSAGE.to_owned(),
                }),
            )
                .into_response(),
            ErrorCode::ExternalRateLimited => {
                error!(code = ?err.code, message = %err.message, "Generation provider overloaded");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(GenerateErrorBody {
                        error: OVERLOADED_MESSAGE.to_owned(),
                    }),
                )
                    .into_response()
            }
            _ => {
                error!(code = ?err.code, message = %err.message, "Recipe generation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(GenerateErrorBody {
                        error: GENERATION_FAILED_MESSAGE.to_owned(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
