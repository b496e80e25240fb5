// ABOUTME: Server binary for the PlateGenie generation service
// ABOUTME: Loads env configuration, initializes logging, and serves the HTTP API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PlateGenie

//! # PlateGenie Server Binary
//!
//! Starts the generation service. Configuration comes from the environment;
//! the Gemini API key is resolved lazily per request so a missing key is a
//! request-time failure, not a startup crash.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use plategenie::{
    config::ServerConfig,
    generation::RecipeGenerator,
    llm::GeminiProvider,
    logging,
    routes::{self, ServerResources},
};
use tracing::info;

#[derive(Parser)]
#[command(name = "plategenie-server")]
#[command(about = "PlateGenie generation service - recipes from pantry ingredients")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_from_env()?;

    info!("Starting PlateGenie generation service");
    info!("{}", config.summary());

    let provider = Arc::new(GeminiProvider::from_env());
    let generator = RecipeGenerator::new(provider).with_model(&config.gemini_model);

    let addr = format!("0.0.0.0:{}", config.http_port);
    let resources = Arc::new(ServerResources::new(generator, config));
    let app = routes::router(resources);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server running on http://{addr}");
    info!("Available endpoints:");
    info!("  GET  /health             - Health check");
    info!("  POST /api/generate-plan  - Generate recipes from ingredients");

    axum::serve(listener, app).await?;

    Ok(())
}
