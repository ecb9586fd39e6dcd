//! Empty state component
//!
//! Shown in place of a list while it loads, when it is empty, or when the
//! last fetch failed.

use iocraft::prelude::*;

use crate::tui::theme::theme;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EmptyStateKind {
    #[default]
    Loading,
    /// Nothing to show; carries the list's own empty text
    Empty(String),
    /// Nothing matched the search term
    NoSearchResults(String),
    /// The fetch failed
    Failed(String),
}

#[derive(Default, Props)]
pub struct EmptyStateProps {
    pub kind: EmptyStateKind,
}

#[component]
pub fn EmptyState(props: &EmptyStateProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let (message, hint, color) = match &props.kind {
        EmptyStateKind::Loading => ("Loading…".to_string(), None, theme.text_dimmed),
        EmptyStateKind::Empty(text) => (text.clone(), None, theme.text_dimmed),
        EmptyStateKind::NoSearchResults(search) => (
            format!("No results for \"{}\"", search),
            Some("Press Esc to clear the search"),
            theme.search_match,
        ),
        EmptyStateKind::Failed(error) => (
            error.clone(),
            Some("Press r to retry"),
            theme.notice_error,
        ),
    };

    element! {
        View(
            flex_grow: 1.0,
            width: 100pct,
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
        ) {
            Text(content: message, color: color)
            #(hint.map(|hint| element! {
                View(margin_top: 1) {
                    Text(content: hint, color: theme.text_dimmed)
                }
            }))
        }
    }
}
