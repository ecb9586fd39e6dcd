//! App header bar component
//!
//! Displays the application title, the active screen and the API health badge.

use iocraft::prelude::*;

use crate::console::HealthStatus;
use crate::tui::theme::theme;

/// Props for the Header component
#[derive(Default, Props)]
pub struct HeaderProps<'a> {
    /// Title (defaults to "palletctl")
    pub title: Option<&'a str>,

    /// Subtitle, usually the active screen
    pub subtitle: Option<&'a str>,

    /// Backend base URL
    pub api_base: Option<String>,

    /// Health probe result
    pub health: HealthStatus,
}

/// App header bar showing title and health badge
#[component]
pub fn Header<'a>(props: &HeaderProps<'a>) -> impl Into<AnyElement<'a>> {
    let theme = theme();

    let title = props.title.unwrap_or("palletctl");
    let left_text = match props.subtitle {
        Some(sub) => format!("{} - {}", title, sub),
        None => title.to_string(),
    };

    element! {
        View(
            width: 100pct,
            height: 1,
            flex_direction: FlexDirection::Row,
            flex_shrink: 0.0,
            justify_content: JustifyContent::SpaceBetween,
            padding_left: 1,
            padding_right: 1,
            background_color: theme.highlight,
        ) {
            Text(
                content: left_text,
                color: theme.text,
                weight: Weight::Bold,
            )
            View(flex_direction: FlexDirection::Row, gap: 2) {
                #(props.api_base.clone().map(|base| element! {
                    Text(content: base, color: theme.text)
                }))
                Text(
                    content: format!("● {}", props.health.label()),
                    color: theme.health_color(props.health),
                    weight: Weight::Bold,
                )
            }
        }
    }
}
