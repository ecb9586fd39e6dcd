//! Operator prompts for destructive commands

use std::io::{self, BufRead, IsTerminal, Write};

use crate::error::{PalletctlError, Result};

/// Prompt for a yes/no answer on stdin. Only `y` / `yes` confirm.
pub fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt}? [y/N] ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;

    Ok(is_yes(&input))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Gate a delete behind `--yes` or an interactive confirmation.
///
/// Returns `Ok(false)` when the operator declines. Without a terminal (or in
/// JSON mode) the prompt cannot be shown and `--yes` is required.
pub fn confirm_delete(what: &str, assume_yes: bool, json: bool) -> Result<bool> {
    if assume_yes {
        return Ok(true);
    }
    if json || !io::stdin().is_terminal() {
        return Err(PalletctlError::ConfirmationRequired(format!(
            "deleting {what} requires --yes in non-interactive contexts"
        )));
    }
    confirm(&format!("Delete {what}"))
}
