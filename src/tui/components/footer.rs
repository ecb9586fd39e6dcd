//! Keyboard shortcuts bar component
//!
//! Displays available keyboard shortcuts at the bottom of the screen.

use iocraft::prelude::*;

use super::shortcuts::ShortcutsBuilder;
use crate::tui::theme::theme;

/// A single keyboard shortcut entry
#[derive(Debug, Clone)]
pub struct Shortcut {
    /// The key or key combination (e.g., "q", "Tab", "Enter")
    pub key: String,
    /// Description of the action (e.g., "Quit", "Save", "Next field")
    pub action: String,
}

impl Shortcut {
    /// Create a new shortcut
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Props for the Footer component
#[derive(Default, Props)]
pub struct FooterProps {
    /// List of keyboard shortcuts to display
    pub shortcuts: Vec<Shortcut>,
}

/// Keyboard shortcuts bar at the bottom of the screen
#[component]
pub fn Footer(props: &FooterProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            min_height: 1,
            flex_direction: FlexDirection::Row,
            flex_wrap: FlexWrap::Wrap,
            flex_shrink: 0.0,
            padding_left: 1,
            padding_right: 1,
            column_gap: 2,
            background_color: theme.border,
        ) {
            #(props.shortcuts.iter().map(|shortcut| {
                let key = shortcut.key.clone();
                let action = shortcut.action.clone();
                element! {
                    View(flex_direction: FlexDirection::Row) {
                        Text(
                            content: format!("[{}]", key),
                            color: theme.highlight,
                            weight: Weight::Bold,
                        )
                        Text(
                            content: format!(" {}", action),
                            color: theme.text,
                        )
                    }
                }
            }))
        }
    }
}

/// Shortcuts for the pallets screen
pub fn pallets_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new()
        .with_navigation()
        .with_paging()
        .with_search()
        .add("Tab", "Switch Pane")
        .add("n", "New Pallet")
        .add("a", "Add Pack")
        .add("e", "Edit")
        .add("d", "Delete")
        .add("o", "Orphans")
        .add("r", "Refresh")
        .add("v", "Overview")
        .with_quit()
        .build()
}

/// Shortcuts for the overview screen
pub fn overview_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new()
        .with_paging()
        .with_search()
        .add("r", "Refresh")
        .add("v", "Pallets")
        .with_quit()
        .build()
}

/// Shortcuts for the record editor
pub fn editor_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new()
        .add("Tab", "Next Field")
        .add("S-Tab", "Prev Field")
        .add("Space", "Toggle Flag")
        .add("Enter", "Save")
        .add("Esc", "Cancel")
        .build()
}

/// Shortcuts for single-line prompts (search, new pallet)
pub fn prompt_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new()
        .add("Enter", "Submit")
        .add("Esc", "Cancel")
        .build()
}

/// Shortcuts for the confirm dialog
pub fn confirm_dialog_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new()
        .add("y", "Yes")
        .add("n/Esc", "No")
        .build()
}
