//! Text rendering of records shared by the CLI and the console.

use owo_colors::OwoColorize;
use serde_json::Value;

use crate::controller::PageWindow;
use crate::controller::pagination::page_count;
use crate::controller::editor::format_number;
use crate::types::{OverviewRow, Pack, Pallet, is_truthy};

pub mod tables;

pub use tables::{OverviewTableRow, PackRow, PalletRow};

/// Placeholder for missing values
pub const DASH: &str = "—";

/// Overview column headings, in display order
pub const OVERVIEW_HEADERS: [&str; 9] = [
    "FECHA",
    "HORA",
    "EAN",
    "ORIGEM ENFARDADEIRA",
    "OT",
    "IDEN ROBOT",
    "IDEN PALLET",
    "PALET COMPLETO",
    "DESTINO MUELLE",
];

/// Render an optional value, or [`DASH`] when absent
pub fn or_dash<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| DASH.to_string())
}

/// Render an optional number without a trailing `.0`
pub fn num_or_dash(value: Option<f64>) -> String {
    value.map(format_number).unwrap_or_else(|| DASH.to_string())
}

pub fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

/// Render a raw report cell: null and empty strings become [`DASH`]
pub fn cell(value: &Value) -> String {
    match value {
        Value::Null => DASH.to_string(),
        Value::String(s) if s.is_empty() => DASH.to_string(),
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if !n.is_i64() && !n.is_u64() => format_number(f),
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}

/// Format a report date as `DD-MM-YYYY`.
///
/// Values starting with a `YYYY-MM-DD` date are reordered; anything else is
/// shown unchanged, and falsy values become [`DASH`].
///
/// # Examples
///
/// ```
/// use palletctl::display::fmt_date;
/// use serde_json::json;
///
/// assert_eq!(fmt_date(&json!("2024-10-06")), "06-10-2024");
/// assert_eq!(fmt_date(&json!("2024-10-06T08:00:00Z")), "06-10-2024");
/// assert_eq!(fmt_date(&json!(null)), "—");
/// assert_eq!(fmt_date(&json!("yesterday")), "yesterday");
/// ```
pub fn fmt_date(value: &Value) -> String {
    if !is_truthy(value) {
        return DASH.to_string();
    }
    let text = match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    match split_iso_date(&text) {
        Some((year, month, day)) => format!("{day}-{month}-{year}"),
        None => text,
    }
}

fn split_iso_date(text: &str) -> Option<(&str, &str, &str)> {
    let date = text.get(..10)?;
    let bytes = date.as_bytes();
    let shape_ok = bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    });
    shape_ok.then(|| (&date[..4], &date[5..7], &date[8..10]))
}

/// `'1'` when the pallet-complete cell is truthy, `'0'` otherwise
pub fn completo_cell(row: &OverviewRow) -> &'static str {
    if row.is_complete() { "1" } else { "0" }
}

/// Overview row as display cells, in [`OVERVIEW_HEADERS`] order
pub fn overview_cells(row: &OverviewRow) -> [String; 9] {
    [
        fmt_date(&row.fecha),
        cell(&row.hora),
        cell(&row.idea_ean),
        cell(&row.origem_enfardadeira),
        cell(&row.ot),
        cell(&row.iden_robot),
        cell(&row.iden_pallet),
        completo_cell(row).to_string(),
        cell(&row.destino_muelle),
    ]
}

/// Plain status tag for a pallet
pub fn completion_tag(completed: bool) -> &'static str {
    if completed { "Completed" } else { "Open" }
}

/// One-line pallet summary: `#id — qr  seq: …  doca: …`
pub fn pallet_summary(pallet: &Pallet) -> String {
    format!(
        "#{} {} {}  seq: {}  doca: {}",
        pallet.id,
        DASH,
        pallet.qr_code.as_deref().unwrap_or(DASH),
        num_or_dash(pallet.seq_pallet),
        num_or_dash(pallet.num_doca),
    )
}

/// Colored pallet line for CLI output
pub fn format_pallet_line(pallet: &Pallet) -> String {
    let tag = format!("[{}]", completion_tag(pallet.completed));
    let tag = if pallet.completed {
        tag.green().to_string()
    } else {
        tag.yellow().to_string()
    };
    format!("{} {}", pallet_summary(pallet).cyan(), tag)
}

/// Pallet detail as label/value pairs
pub fn pallet_fields(pallet: &Pallet) -> Vec<(&'static str, String)> {
    vec![
        ("QR Code", pallet.qr_code.clone().unwrap_or_else(|| DASH.to_string())),
        ("Completed", yes_no(pallet.completed).to_string()),
        ("Num Doca", num_or_dash(pallet.num_doca)),
        ("seq_pallet", num_or_dash(pallet.seq_pallet)),
        ("station", num_or_dash(pallet.station)),
        ("Created", or_dash(pallet.created_at.as_deref())),
        ("Updated", or_dash(pallet.updated_at.as_deref())),
    ]
}

/// Pack record as label/value pairs
pub fn pack_fields(pack: &Pack) -> Vec<(&'static str, String)> {
    vec![
        ("QR Code", pack.qr_code.clone().unwrap_or_else(|| DASH.to_string())),
        ("seq_pallet", num_or_dash(pack.seq_pallet)),
        ("orig", or_dash(pack.orig)),
        ("seq_pack", num_or_dash(pack.seq_pack)),
        ("lastpack", yes_no(pack.lastpack).to_string()),
        ("pospallet", or_dash(pack.pospallet)),
        ("robot_num", or_dash(pack.robot_num)),
    ]
}

/// `Page 2 of 5 · 45 total · 20 per page`
pub fn page_label(window: &PageWindow) -> String {
    page_summary(window.limit(), window.offset(), window.total())
}

/// [`page_label`] for a raw `limit` / `offset` pair, as used by the CLI
pub fn page_summary(limit: u32, offset: u64, total: u64) -> String {
    let limit = limit.max(1);
    format!(
        "Page {} of {} · {} total · {} per page",
        offset / u64::from(limit) + 1,
        page_count(total, limit),
        total,
        limit
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fmt_date() {
        assert_eq!(fmt_date(&json!("2024-01-15")), "15-01-2024");
        assert_eq!(fmt_date(&json!("")), DASH);
        assert_eq!(fmt_date(&json!(0)), DASH);
        assert_eq!(fmt_date(&json!("15/01/2024")), "15/01/2024");
    }

    #[test]
    fn test_cell() {
        assert_eq!(cell(&json!(null)), DASH);
        assert_eq!(cell(&json!("")), DASH);
        assert_eq!(cell(&json!("OT-1")), "OT-1");
        assert_eq!(cell(&json!(42)), "42");
        assert_eq!(cell(&json!(2.0)), "2");
        assert_eq!(cell(&json!(2.5)), "2.5");
    }

    #[test]
    fn test_overview_cells() {
        let row = OverviewRow {
            fecha: json!("2024-10-06"),
            palet_completo: json!(1),
            ot: json!("OT-9"),
            ..Default::default()
        };
        let cells = overview_cells(&row);
        assert_eq!(cells[0], "06-10-2024");
        assert_eq!(cells[1], DASH);
        assert_eq!(cells[4], "OT-9");
        assert_eq!(cells[7], "1");

        let open = OverviewRow::default();
        assert_eq!(overview_cells(&open)[7], "0");
    }

    #[test]
    fn test_pallet_summary() {
        let pallet = Pallet {
            id: 3,
            qr_code: None,
            completed: false,
            num_doca: Some(2.0),
            seq_pallet: Some(1000.0),
            station: None,
            created_at: None,
            updated_at: None,
        };
        assert_eq!(pallet_summary(&pallet), "#3 — —  seq: 1000  doca: 2");
    }

    #[test]
    fn test_page_label() {
        let mut window = PageWindow::new(crate::controller::PALLET_PAGE_SIZES, 20);
        window.set_total(45);
        window.go_next();
        assert_eq!(page_label(&window), "Page 2 of 3 · 45 total · 20 per page");
    }

    #[test]
    fn test_page_summary_empty_collection() {
        assert_eq!(page_summary(10, 0, 0), "Page 1 of 1 · 0 total · 10 per page");
        assert_eq!(page_summary(5, 10, 11), "Page 3 of 3 · 11 total · 5 per page");
    }
}
