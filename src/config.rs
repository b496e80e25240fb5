// ABOUTME: Environment-driven server configuration
// ABOUTME: Reads port, model tier, and CORS settings with sensible defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PlateGenie

//! Environment-only configuration for the generation service.
//!
//! All knobs come from process environment variables. The Gemini API key is
//! deliberately not read here: its absence must surface as an error on the
//! first generation call, not as a startup failure.

use std::env;

use crate::errors::AppError;

/// Default HTTP port
const DEFAULT_HTTP_PORT: u16 = 8081;

/// Server configuration loaded from the environment
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP port to bind
    pub http_port: u16,
    /// Gemini model tier used for generation requests
    pub gemini_model: String,
    /// Allowed CORS origins; empty means allow any origin
    pub cors_allowed_origins: Vec<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// Recognized variables:
    /// - `HTTP_PORT` (default 8081)
    /// - `GEMINI_MODEL` (default `gemini-1.5-flash`)
    /// - `CORS_ALLOWED_ORIGINS` (comma-separated; unset allows any origin)
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `HTTP_PORT` is set but not a valid
    /// port number.
    pub fn from_env() -> Result<Self, AppError> {
        let http_port = match env::var("HTTP_PORT") {
            Ok(value) => value
                .parse::<u16>()
                .map_err(|e| AppError::config(format!("Invalid HTTP_PORT '{value}': {e}")))?,
            Err(_) => DEFAULT_HTTP_PORT,
        };

        let gemini_model =
            env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-1.5-flash".to_owned());

        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .map(|value| {
                value
                    .split(',')
                    .map(|origin| origin.trim().to_owned())
                    .filter(|origin| !origin.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            http_port,
            gemini_model,
            cors_allowed_origins,
        })
    }

    /// One-line configuration summary for startup logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "http_port={} gemini_model={} cors_origins={}",
            self.http_port,
            self.gemini_model,
            if self.cors_allowed_origins.is_empty() {
                "any".to_owned()
            } else {
                self.cors_allowed_origins.join(",")
            }
        )
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: DEFAULT_HTTP_PORT,
            gemini_model: "gemini-1.5-flash".to_owned(),
            cors_allowed_origins: Vec::new(),
        }
    }
}
