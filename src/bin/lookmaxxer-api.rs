// ABOUTME: LookMaxxer API server binary
// ABOUTME: Loads environment configuration, initializes logging and serves HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LookMaxxer

//! # LookMaxxer API Server Binary
//!
//! Serves the onboarding and daily target endpoints for the web and mobile
//! clients.

use anyhow::Result;
use clap::Parser;
use lookmaxxer_api::{config::environment::ServerConfig, logging, server};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "lookmaxxer-api")]
#[command(about = "LookMaxxer API - onboarding and daily calorie/macro targets")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override bind address
    #[arg(long)]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Container runtimes sometimes pass arguments clap cannot parse
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Argument parsing failed: {e}");
            eprintln!("Using environment configuration only");
            Args {
                http_port: None,
                host: None,
            }
        }
    };

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }

    info!("Starting LookMaxxer API");
    info!("{}", config.summary());
    display_available_endpoints(&config);

    if let Err(e) = server::run(config).await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    Ok(())
}

/// Display all available API endpoints
#[allow(clippy::cognitive_complexity)]
fn display_available_endpoints(config: &ServerConfig) {
    let host = &config.host;
    let port = config.http_port;

    info!("=== Available API Endpoints ===");
    info!("   Health:            GET    http://{host}:{port}/health");
    info!("   Readiness:         GET    http://{host}:{port}/ready");
    info!("   Daily Targets:     POST   http://{host}:{port}/api/onboarding");
    info!("   New Session:       POST   http://{host}:{port}/api/onboarding/sessions");
    info!("   Session State:     GET    http://{host}:{port}/api/onboarding/sessions/{{id}}");
    info!("   Submit Step:       POST   http://{host}:{port}/api/onboarding/sessions/{{id}}/{{biometrics|goal|activity}}");
    info!("   Previous Step:     POST   http://{host}:{port}/api/onboarding/sessions/{{id}}/back");
    info!("   Discard Session:   DELETE http://{host}:{port}/api/onboarding/sessions/{{id}}");
    info!("=== End of Endpoint List ===");
}
