pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod console;
pub mod controller;
pub mod display;
pub mod error;
pub mod logging;
pub mod tui;
pub mod types;

pub use api::{ApiClient, Gateway, ListQuery, Page, PackScope, RequestError};
pub use config::Config;
pub use console::{Console, ConsoleState, Msg};
pub use error::{PalletctlError, Result};
pub use types::{NewPallet, OverviewRow, Pack, PackPayload, Pallet, PalletUpdate, RecordId};
