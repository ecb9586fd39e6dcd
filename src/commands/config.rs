//! Configuration commands.
//!
//! - `config show`: Effective settings and where the base address comes from
//! - `config get`: A single stored key
//! - `config set`: Validate and store a key

use owo_colors::OwoColorize;
use serde_json::json;

use super::CommandOutput;
use crate::cli::OutputOptions;
use crate::config::{CONFIG_KEYS, Config};
use crate::error::{PalletctlError, Result};

/// Build the `config show` output for `config`, resolving the base address
/// against the `--api-base` override and the environment.
pub fn config_show_report(config: &Config, api_base: Option<&str>) -> Result<CommandOutput> {
    let (url, source) = config.resolve_api_base(api_base)?;
    let path = Config::config_path();

    let json_output = json!({
        "api_base": url.as_str(),
        "api_base_source": source.to_string(),
        "stored_api_base": config.api_base,
        "request_timeout_secs": config.request_timeout_secs,
        "config_file": path.to_string_lossy(),
    });

    let mut text = format!("{}\n\n", "Configuration:".cyan().bold());
    text.push_str(&format!(
        "{}: {} {}\n",
        "api_base".cyan(),
        url,
        format!("({source})").dimmed()
    ));
    text.push_str(&format!(
        "{}: {}\n\n",
        "request_timeout_secs".cyan(),
        config.request_timeout_secs
    ));
    text.push_str(&format!("Config file: {}", path.display()).dimmed().to_string());

    Ok(CommandOutput::new(json_output).with_text(text))
}

/// `palletctl config show`
pub fn cmd_config_show(api_base: Option<&str>, output: OutputOptions) -> Result<()> {
    let config = Config::load()?;
    config_show_report(&config, api_base)?.print(output)
}

/// `palletctl config set`
pub fn cmd_config_set(key: &str, value: &str, output: OutputOptions) -> Result<()> {
    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;

    let stored = config.get(key)?.unwrap_or_default();
    CommandOutput::new(json!({
        "action": "config_set",
        "key": key,
        "value": stored,
        "success": true,
    }))
    .with_text(format!("Set {} = {}", key.cyan(), stored))
    .print(output)
}

/// `palletctl config get`
pub fn cmd_config_get(key: &str, output: OutputOptions) -> Result<()> {
    let config = Config::load()?;
    let value = config.get(key)?;

    if output.json {
        return super::print_json(&json!({ "key": key, "value": value }));
    }

    match value {
        Some(value) => {
            println!("{value}");
            Ok(())
        }
        None => Err(PalletctlError::Config(format!(
            "{key} is not set (valid keys: {})",
            CONFIG_KEYS.join(", ")
        ))),
    }
}
