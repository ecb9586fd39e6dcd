use super::connect;
use crate::error::Result;

/// `palletctl console`: open the interactive console
pub async fn cmd_console(api_base: Option<&str>) -> Result<()> {
    let client = connect(api_base)?;
    tracing::info!(api_base = client.base_url(), "starting console");
    crate::tui::run_console(client).await
}
