//! Command handlers behind the `palletctl` subcommands.
//!
//! Handlers that talk to the backend are generic over [`Gateway`] and build a
//! [`CommandOutput`] that is printed as text or JSON depending on `--json`.

mod config;
mod console;
mod health;
pub mod interactive;
mod overview;
mod pack;
mod pallet;

pub use config::{cmd_config_get, cmd_config_set, cmd_config_show};
pub use console::cmd_console;
pub use health::{cmd_health, health_report};
pub use overview::{cmd_overview, overview_report};
pub use pack::{
    PackFields, cmd_pack_create, cmd_pack_ls, cmd_pack_rm, cmd_pack_update, pack_create_report,
    pack_list_report, pack_update_report,
};
pub use pallet::{
    PalletEdits, cmd_pallet_create, cmd_pallet_ls, cmd_pallet_rm, cmd_pallet_show,
    cmd_pallet_update, pallet_create_report, pallet_list_report, pallet_show_report,
    pallet_update_report,
};

use serde_json::Value;

use crate::api::ApiClient;
use crate::cli::OutputOptions;
use crate::config::Config;
use crate::error::Result;

/// Output of a command: a JSON document and an optional human-readable text.
///
/// Without text, the JSON document is printed in both modes.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    json: Value,
    text: Option<String>,
}

impl CommandOutput {
    pub fn new(json: Value) -> Self {
        Self { json, text: None }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn json(&self) -> &Value {
        &self.json
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn print(self, output: OutputOptions) -> Result<()> {
        match self.text {
            Some(text) if !output.json => {
                println!("{text}");
                Ok(())
            }
            _ => print_json(&self.json),
        }
    }
}

/// Pretty-print a JSON value to stdout
pub fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Build the HTTP client from the config file and the `--api-base` override
pub fn connect(api_base: Option<&str>) -> Result<ApiClient> {
    let config = Config::load()?;
    ApiClient::from_config(&config, api_base)
}
