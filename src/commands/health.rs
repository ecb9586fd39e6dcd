use owo_colors::OwoColorize;
use serde_json::json;

use super::{CommandOutput, connect, print_json};
use crate::api::Gateway;
use crate::cli::OutputOptions;
use crate::console::HealthStatus;
use crate::error::Result;

/// Probe the backend; an unreachable API is an error
pub async fn health_report<G: Gateway>(gateway: &G, api_base: &str) -> Result<CommandOutput> {
    gateway.health().await?;

    Ok(CommandOutput::new(json!({
        "status": "online",
        "api_base": api_base,
    }))
    .with_text(format!(
        "{}  {}",
        HealthStatus::Online.label().green(),
        api_base.dimmed()
    )))
}

/// `palletctl health`
pub async fn cmd_health(api_base: Option<&str>, output: OutputOptions) -> Result<()> {
    let client = connect(api_base)?;

    match health_report(&client, client.base_url()).await {
        Ok(report) => report.print(output),
        Err(e) => {
            tracing::warn!(api_base = client.base_url(), error = %e, "health check failed");
            if output.json {
                print_json(&json!({
                    "status": "offline",
                    "api_base": client.base_url(),
                    "error": e.to_string(),
                }))?;
            } else {
                eprintln!("{}", HealthStatus::Offline.label().red());
            }
            Err(e)
        }
    }
}
