//! Pallet commands
//!
//! - `pallet ls`: One page of pallets
//! - `pallet show`: A single pallet
//! - `pallet create`: Create a pallet from a sequence number
//! - `pallet update`: Edit fields of an existing pallet
//! - `pallet rm`: Delete a pallet (and, server-side, its packs)

use owo_colors::OwoColorize;
use serde_json::json;
use tabled::Table;
use tabled::settings::Style;

use super::interactive::confirm_delete;
use super::{CommandOutput, connect};
use crate::api::{Gateway, ListQuery, Page};
use crate::cli::OutputOptions;
use crate::console::parse_seq_pallet;
use crate::controller::RecordForm;
use crate::display::{PalletRow, format_pallet_line, page_summary, pallet_fields};
use crate::error::{PalletctlError, Result};
use crate::types::{NewPallet, Pallet, PalletUpdate, RecordId};

/// Field overrides for `pallet update`. Values are raw operator text and go
/// through the same sanitising as the console editor.
#[derive(Debug, Clone, Default)]
pub struct PalletEdits {
    pub qr_code: Option<String>,
    pub completed: Option<bool>,
    pub num_doca: Option<String>,
    pub seq_pallet: Option<String>,
    pub station: Option<String>,
}

impl PalletEdits {
    pub fn is_empty(&self) -> bool {
        self.qr_code.is_none()
            && self.completed.is_none()
            && self.num_doca.is_none()
            && self.seq_pallet.is_none()
            && self.station.is_none()
    }

    /// Apply the overrides on top of `current` and sanitise the result
    pub fn apply(&self, current: &Pallet) -> PalletUpdate {
        let mut form = RecordForm::for_pallet(current);
        let text_fields = [
            ("qr_code", &self.qr_code),
            ("num_doca", &self.num_doca),
            ("seq_pallet", &self.seq_pallet),
            ("station", &self.station),
        ];
        for (name, value) in text_fields {
            if let Some(value) = value {
                form.set(name, value.as_str());
            }
        }
        if let Some(completed) = self.completed {
            form.set("completed", completed.to_string());
        }
        form.to_pallet_update()
    }
}

fn pallet_detail_text(pallet: &Pallet) -> String {
    let mut text = format_pallet_line(pallet);
    for (label, value) in pallet_fields(pallet) {
        text.push_str(&format!("\n  {:<12} {}", label.dimmed(), value));
    }
    text
}

pub async fn pallet_list_report<G: Gateway>(
    gateway: &G,
    query: &ListQuery,
) -> Result<CommandOutput> {
    let Page { items, total } = gateway.list_pallets(query).await?;

    let json_output = json!({
        "items": items,
        "total": total,
        "limit": query.limit,
        "offset": query.offset,
        "search": query.search,
    });

    let text = if items.is_empty() {
        if query.search.is_empty() {
            "No pallets found.".to_string()
        } else {
            format!("No pallets matching '{}'.", query.search)
        }
    } else {
        let rows: Vec<PalletRow> = items.iter().map(PalletRow::from).collect();
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        format!(
            "{table}\n\n{}",
            page_summary(query.limit, query.offset, total).dimmed()
        )
    };

    Ok(CommandOutput::new(json_output).with_text(text))
}

pub async fn pallet_show_report<G: Gateway>(gateway: &G, id: RecordId) -> Result<CommandOutput> {
    let pallet = gateway.get_pallet(id).await?;
    let text = pallet_detail_text(&pallet);
    Ok(CommandOutput::new(serde_json::to_value(&pallet)?).with_text(text))
}

/// Create a pallet. An absent or empty `seq_pallet` defaults to `now_ms`.
pub async fn pallet_create_report<G: Gateway>(
    gateway: &G,
    seq_pallet: Option<&str>,
    now_ms: i64,
) -> Result<CommandOutput> {
    let seq_pallet = parse_seq_pallet(seq_pallet.unwrap_or_default(), now_ms)
        .ok_or_else(|| PalletctlError::InvalidInput("seq_pallet must be a number".to_string()))?;

    let pallet = gateway.create_pallet(&NewPallet { seq_pallet }).await?;
    tracing::info!(id = pallet.id, seq_pallet, "created pallet");

    let text = format!("Created {}", format_pallet_line(&pallet));
    Ok(CommandOutput::new(serde_json::to_value(&pallet)?).with_text(text))
}

pub async fn pallet_update_report<G: Gateway>(
    gateway: &G,
    id: RecordId,
    edits: &PalletEdits,
) -> Result<CommandOutput> {
    if edits.is_empty() {
        return Err(PalletctlError::InvalidInput(
            "nothing to update: pass at least one field option".to_string(),
        ));
    }

    let current = gateway.get_pallet(id).await?;
    let update = edits.apply(&current);
    let saved = gateway.update_pallet(id, &update).await?;
    tracing::info!(id, "updated pallet");

    let text = format!("Updated {}", pallet_detail_text(&saved));
    Ok(CommandOutput::new(serde_json::to_value(&saved)?).with_text(text))
}

/// `palletctl pallet ls`
pub async fn cmd_pallet_ls(
    api_base: Option<&str>,
    query: ListQuery,
    output: OutputOptions,
) -> Result<()> {
    let client = connect(api_base)?;
    pallet_list_report(&client, &query).await?.print(output)
}

/// `palletctl pallet show`
pub async fn cmd_pallet_show(
    api_base: Option<&str>,
    id: RecordId,
    output: OutputOptions,
) -> Result<()> {
    let client = connect(api_base)?;
    pallet_show_report(&client, id).await?.print(output)
}

/// `palletctl pallet create`
pub async fn cmd_pallet_create(
    api_base: Option<&str>,
    seq_pallet: Option<&str>,
    output: OutputOptions,
) -> Result<()> {
    let client = connect(api_base)?;
    pallet_create_report(&client, seq_pallet, crate::console::now_ms())
        .await?
        .print(output)
}

/// `palletctl pallet update`
pub async fn cmd_pallet_update(
    api_base: Option<&str>,
    id: RecordId,
    edits: PalletEdits,
    output: OutputOptions,
) -> Result<()> {
    let client = connect(api_base)?;
    pallet_update_report(&client, id, &edits).await?.print(output)
}

/// `palletctl pallet rm`
pub async fn cmd_pallet_rm(
    api_base: Option<&str>,
    id: RecordId,
    yes: bool,
    output: OutputOptions,
) -> Result<()> {
    if !confirm_delete(&format!("pallet #{id} and all of its packs"), yes, output.json)? {
        println!("Cancelled");
        return Ok(());
    }

    let client = connect(api_base)?;
    client.delete_pallet(id).await?;
    tracing::info!(id, "deleted pallet");

    CommandOutput::new(json!({
        "id": id,
        "action": "deleted",
        "success": true,
    }))
    .with_text(format!("Deleted pallet #{id}"))
    .print(output)
}
