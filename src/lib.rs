// ABOUTME: Main library entry point for the PlateGenie generation service
// ABOUTME: Exposes recipe generation over HTTP backed by a pluggable LLM provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PlateGenie

#![deny(unsafe_code)]

//! # PlateGenie Generation Service
//!
//! An HTTP service that turns pantry ingredients into recipe suggestions by
//! prompting a generative text model (Google Gemini), sanitizing its
//! free-text output, and returning structured recipes.
//!
//! ## Features
//!
//! - **Single-shot generation**: one prompt, one model call, no streaming or
//!   retries
//! - **Strict response validation**: fence stripping, array-delimiter check,
//!   and typed JSON decode of the model's output
//! - **Pluggable providers**: the model backend is a capability object
//!   injected at construction, so tests can run against a deterministic fake
//! - **Typed failures**: every error path returns a structured response;
//!   provider capacity exhaustion is distinguishable from generic failures
//!
//! ## Architecture
//!
//! - **llm**: provider SPI and the Gemini implementation
//! - **generation**: prompt construction, response sanitization, and the
//!   generation pipeline
//! - **routes**: axum HTTP surface (`POST /api/generate-plan`, `GET /health`)
//! - **config / logging / errors**: environment-driven ambient concerns
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use plategenie::config::ServerConfig;
//! use plategenie::generation::RecipeGenerator;
//! use plategenie::llm::GeminiProvider;
//! use plategenie::routes::{self, ServerResources};
//!
//! # fn main() -> plategenie::errors::AppResult<()> {
//! let config = ServerConfig::from_env()?;
//! let provider = Arc::new(GeminiProvider::from_env());
//! let generator = RecipeGenerator::new(provider).with_model(&config.gemini_model);
//! let app = routes::router(Arc::new(ServerResources::new(generator, config)));
//! # let _ = app;
//! # Ok(())
//! # }
//! ```

/// Environment-driven server configuration
pub mod config;

/// Unified error handling with machine-readable codes
pub mod errors;

/// Recipe generation pipeline: prompt, sanitize, validate, decode
pub mod generation;

/// LLM provider abstraction and the Gemini implementation
pub mod llm;

/// Structured logging configuration
pub mod logging;

/// Common data models
pub mod models;

/// HTTP routes and router assembly
pub mod routes;
