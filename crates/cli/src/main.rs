mod cli;
mod commands;
mod config;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use site_content_cms::CmsConfig;
use tracing_subscriber::EnvFilter;

use crate::config::{LogConfig, LogFormat};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Load .env file if present (dev convenience)
    let _ = dotenvy::dotenv();

    let args = cli::Cli::parse();

    let log = LogConfig::from_env().context("failed to load logging configuration")?;
    init_tracing(&log);

    let mut cms = CmsConfig::from_env().context("failed to load CMS configuration")?;
    if let Some(url) = args.cms_url {
        cms = cms.with_base_url(url);
    }
    if args.verbose {
        cms = cms.with_debug(true);
    }

    tracing::debug!(base_url = %cms.base_url, tenant = %cms.tenant_slug, "configuration loaded");

    commands::run(args.command, &cms).await
}

/// Logs go to stderr so command output on stdout stays machine-readable.
fn init_tracing(log: &LogConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match log.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.compact().init(),
    }
}
