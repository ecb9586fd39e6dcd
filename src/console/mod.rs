//! Headless core of the interactive console.
//!
//! [`model`] is a pure reducer; [`runner`] executes the requests it emits.
//! The terminal UI in [`crate::tui`] is a thin rendering layer over both.

pub mod model;
pub mod runner;

pub use model::{
    Command, ConfirmAction, ConfirmDialogState, ConsoleState, ConsoleView, HealthStatus,
    LineInput, LineTarget, Msg, Notice, NoticeLevel, Pane, now_ms, parse_seq_pallet,
};
pub use runner::{Console, execute, run_commands};
