//! Toast notification bar
//!
//! Renders the console's current [`Notice`] at the bottom of the screen.

use iocraft::prelude::*;

use crate::console::Notice;
use crate::tui::theme::theme;

/// Render a notice as an optional element for use inside `element!`
pub fn render_toast(notice: &Option<Notice>) -> Option<AnyElement<'static>> {
    notice.as_ref().map(|n| {
        let color = theme().notice_color(n.level);
        element! {
            View(
                width: 100pct,
                height: 3,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                background_color: Color::Black,
                border_edges: Edges::Top,
                border_style: BorderStyle::Single,
                border_color: color,
            ) {
                Text(content: n.message.clone(), color: color)
            }
        }
        .into_any()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_notice_renders_nothing() {
        assert!(render_toast(&None).is_none());
    }

    #[test]
    fn test_notice_renders() {
        assert!(render_toast(&Some(Notice::error("boom"))).is_some());
    }
}
