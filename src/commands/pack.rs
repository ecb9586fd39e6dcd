//! Pack commands
//!
//! Packs live under a pallet (`--pallet ID`) or are orphans (no pallet).

use owo_colors::OwoColorize;
use serde_json::json;
use tabled::Table;
use tabled::settings::Style;

use super::interactive::confirm_delete;
use super::{CommandOutput, connect};
use crate::api::{Gateway, ListQuery, Page, PackScope};
use crate::cli::OutputOptions;
use crate::controller::RecordForm;
use crate::display::{PackRow, pack_fields, page_summary};
use crate::error::{PalletctlError, Result};
use crate::types::{Pack, PackPayload, RecordId};

/// Pack fields as typed on the command line. Every create/update sends the
/// full record, so an omitted field is sent as null.
#[derive(Debug, Clone, Default)]
pub struct PackFields {
    pub qr_code: Option<String>,
    pub orig: Option<String>,
    pub seq_pack: Option<String>,
    pub lastpack: bool,
    pub pospallet: Option<String>,
    pub robot_num: Option<String>,
}

impl PackFields {
    /// Flags of the value fields that were not given
    pub fn missing_flags(&self) -> Vec<&'static str> {
        [
            ("--qr-code", &self.qr_code),
            ("--orig", &self.orig),
            ("--seq-pack", &self.seq_pack),
            ("--pospallet", &self.pospallet),
            ("--robot-num", &self.robot_num),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_none())
        .map(|(flag, _)| flag)
        .collect()
    }

    /// Sanitised payload. `default_seq_pack` fills `seq_pack` when it was not given.
    pub fn to_payload(&self, default_seq_pack: Option<i64>) -> PackPayload {
        let mut form = RecordForm::for_pack(None, default_seq_pack.unwrap_or_default());
        if default_seq_pack.is_none() {
            form.set("seq_pack", "");
        }

        let text_fields = [
            ("qr_code", &self.qr_code),
            ("orig", &self.orig),
            ("seq_pack", &self.seq_pack),
            ("pospallet", &self.pospallet),
            ("robot_num", &self.robot_num),
        ];
        for (name, value) in text_fields {
            if let Some(value) = value {
                form.set(name, value.as_str());
            }
        }
        form.set("lastpack", self.lastpack.to_string());
        form.to_pack_payload()
    }
}

fn pack_detail_text(verb: &str, pack: &Pack) -> String {
    let mut text = format!("{verb} {}", format!("pack #{}", pack.id).cyan());
    for (label, value) in pack_fields(pack) {
        text.push_str(&format!("\n  {:<12} {}", label.dimmed(), value));
    }
    text
}

pub async fn pack_list_report<G: Gateway>(
    gateway: &G,
    scope: PackScope,
    query: &ListQuery,
) -> Result<CommandOutput> {
    let Page { items, total } = gateway.list_packs(scope, query).await?;

    let json_output = json!({
        "scope": scope.to_string(),
        "items": items,
        "total": total,
        "limit": query.limit,
        "offset": query.offset,
    });

    let text = if items.is_empty() {
        match scope {
            PackScope::Pallet(_) => "No pack items".to_string(),
            PackScope::Orphans => "No orphan packs".to_string(),
        }
    } else {
        let rows: Vec<PackRow> = items.iter().map(PackRow::from).collect();
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        format!(
            "{}\n{table}\n\n{}",
            format!("Packs ({scope})").bold(),
            page_summary(query.limit, query.offset, total).dimmed()
        )
    };

    Ok(CommandOutput::new(json_output).with_text(text))
}

/// Create a pack under `scope`; `seq_pack` defaults to `now_ms`
pub async fn pack_create_report<G: Gateway>(
    gateway: &G,
    scope: PackScope,
    fields: &PackFields,
    now_ms: i64,
) -> Result<CommandOutput> {
    let payload = fields.to_payload(Some(now_ms));
    let pack = gateway.create_pack(scope, &payload).await?;
    tracing::info!(id = pack.id, %scope, "created pack");

    let text = pack_detail_text("Created", &pack);
    Ok(CommandOutput::new(serde_json::to_value(&pack)?).with_text(text))
}

/// Replace every field of pack `id`.
///
/// The backend has no way to read a single pack, so omitted fields cannot be
/// kept. Unless `replace` is set, an update that would clear fields is refused.
pub async fn pack_update_report<G: Gateway>(
    gateway: &G,
    id: RecordId,
    fields: &PackFields,
    replace: bool,
) -> Result<CommandOutput> {
    let missing = fields.missing_flags();
    if !replace && !missing.is_empty() {
        return Err(PalletctlError::InvalidInput(format!(
            "pack update replaces the whole record; {} would be cleared. \
             Pass them, or add --replace to clear them",
            missing.join(", ")
        )));
    }

    let payload = fields.to_payload(None);
    let pack = gateway.update_pack(id, &payload).await?;
    tracing::info!(id, "updated pack");

    let text = pack_detail_text("Updated", &pack);
    Ok(CommandOutput::new(serde_json::to_value(&pack)?).with_text(text))
}

/// `palletctl pack ls`
pub async fn cmd_pack_ls(
    api_base: Option<&str>,
    scope: PackScope,
    query: ListQuery,
    output: OutputOptions,
) -> Result<()> {
    let client = connect(api_base)?;
    pack_list_report(&client, scope, &query).await?.print(output)
}

/// `palletctl pack create`
pub async fn cmd_pack_create(
    api_base: Option<&str>,
    scope: PackScope,
    fields: PackFields,
    output: OutputOptions,
) -> Result<()> {
    let client = connect(api_base)?;
    pack_create_report(&client, scope, &fields, crate::console::now_ms())
        .await?
        .print(output)
}

/// `palletctl pack update`
pub async fn cmd_pack_update(
    api_base: Option<&str>,
    id: RecordId,
    fields: PackFields,
    replace: bool,
    output: OutputOptions,
) -> Result<()> {
    let client = connect(api_base)?;
    pack_update_report(&client, id, &fields, replace)
        .await?
        .print(output)
}

/// `palletctl pack rm`
pub async fn cmd_pack_rm(
    api_base: Option<&str>,
    id: RecordId,
    yes: bool,
    output: OutputOptions,
) -> Result<()> {
    if !confirm_delete(&format!("pack #{id}"), yes, output.json)? {
        println!("Cancelled");
        return Ok(());
    }

    let client = connect(api_base)?;
    client.delete_pack(id).await?;
    tracing::info!(id, "deleted pack");

    CommandOutput::new(json!({
        "id": id,
        "action": "deleted",
        "success": true,
    }))
    .with_text(format!("Deleted pack #{id}"))
    .print(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_payload_defaults_seq_pack() {
        let payload = PackFields::default().to_payload(Some(1_700_000_000_000));
        assert_eq!(payload.seq_pack, Some(1_700_000_000_000.0));
        assert_eq!(payload.qr_code, None);
        assert!(!payload.lastpack);
    }

    #[test]
    fn test_update_payload_is_full_replacement() {
        let fields = PackFields {
            qr_code: Some("P-1".to_string()),
            lastpack: true,
            ..Default::default()
        };
        let payload = fields.to_payload(None);
        assert_eq!(
            payload,
            PackPayload {
                qr_code: Some("P-1".to_string()),
                orig: None,
                seq_pack: None,
                lastpack: true,
                pospallet: None,
                robot_num: None,
            }
        );
    }

    #[test]
    fn test_payload_sanitises_numbers() {
        let fields = PackFields {
            orig: Some("4.5".to_string()),
            seq_pack: Some("12.25".to_string()),
            pospallet: Some("abc".to_string()),
            robot_num: Some("0".to_string()),
            ..Default::default()
        };
        let payload = fields.to_payload(Some(1));
        assert_eq!(payload.orig, None);
        assert_eq!(payload.seq_pack, Some(12.25));
        assert_eq!(payload.pospallet, None);
        assert_eq!(payload.robot_num, Some(0));
    }

    #[test]
    fn test_missing_flags() {
        let fields = PackFields {
            qr_code: Some("P-1".to_string()),
            seq_pack: Some("".to_string()),
            ..Default::default()
        };
        assert_eq!(fields.missing_flags(), vec!["--orig", "--pospallet", "--robot-num"]);
    }
}
