//! TUI module for the interactive console
//!
//! The console model lives in [`crate::console`]; this module renders it
//! with iocraft and feeds it terminal events.

pub mod components;
pub mod console;
pub mod theme;

use iocraft::prelude::*;

use crate::api::ApiClient;
use crate::error::Result;

pub use console::{ConsoleApp, ConsoleAppProps};
pub use theme::Theme;

/// Run the console fullscreen until the operator quits
pub async fn run_console(client: ApiClient) -> Result<()> {
    element!(ConsoleApp(client: Some(client)))
        .fullscreen()
        .await?;
    Ok(())
}
