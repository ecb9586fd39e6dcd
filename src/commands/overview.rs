use owo_colors::OwoColorize;
use serde_json::json;
use tabled::Table;
use tabled::settings::Style;

use super::{CommandOutput, connect};
use crate::api::{Gateway, ListQuery, Page};
use crate::cli::OutputOptions;
use crate::display::{OverviewTableRow, page_summary};
use crate::error::Result;

/// One page of the pack overview report
pub async fn overview_report<G: Gateway>(gateway: &G, query: &ListQuery) -> Result<CommandOutput> {
    let Page { items, total } = gateway.list_overview(query).await?;

    let json_output = json!({
        "items": items,
        "total": total,
        "limit": query.limit,
        "offset": query.offset,
        "search": query.search,
    });

    let text = if items.is_empty() {
        "No overview data".to_string()
    } else {
        let rows: Vec<OverviewTableRow> = items.iter().map(OverviewTableRow::from).collect();
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        format!(
            "{table}\n\n{}",
            page_summary(query.limit, query.offset, total).dimmed()
        )
    };

    Ok(CommandOutput::new(json_output).with_text(text))
}

/// `palletctl overview`
pub async fn cmd_overview(
    api_base: Option<&str>,
    query: ListQuery,
    output: OutputOptions,
) -> Result<()> {
    let client = connect(api_base)?;
    overview_report(&client, &query).await?.print(output)
}
