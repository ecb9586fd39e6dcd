//! Modal container component
//!
//! A bordered box with a title row, a content area and an optional hint row.
//! Used by the record editor, the confirm dialog and the line prompt.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Border color presets
#[derive(Clone, Copy, Default)]
pub enum ModalBorderColor {
    #[default]
    Focused,
    Warning,
    Error,
}

impl ModalBorderColor {
    pub fn to_color(&self) -> Color {
        match self {
            Self::Focused => theme().border_focused,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }
}

#[derive(Default, Props)]
pub struct ModalContainerProps<'a> {
    /// Width in columns (default 60)
    pub width: Option<u32>,
    pub border_color: ModalBorderColor,
    pub title: Option<String>,
    /// Dimmed hint below the content, e.g. key bindings
    pub footer_text: Option<String>,
    pub children: Vec<AnyElement<'a>>,
}

#[component]
pub fn ModalContainer<'a>(props: &mut ModalContainerProps<'a>) -> impl Into<AnyElement<'a>> {
    let theme = theme();
    let border_color = props.border_color.to_color();
    let title = props.title.clone();
    let footer = props.footer_text.clone();

    element! {
        View(
            width: Size::Length(props.width.unwrap_or(60)),
            background_color: theme.background,
            border_style: BorderStyle::Double,
            border_color: border_color,
            padding: 1,
            flex_direction: FlexDirection::Column,
        ) {
            #(title.map(|title| element! {
                View(
                    width: 100pct,
                    padding_bottom: 1,
                    border_edges: Edges::Bottom,
                    border_style: BorderStyle::Single,
                    border_color: theme.border,
                ) {
                    Text(content: title, color: theme.label, weight: Weight::Bold)
                }
            }))

            View(
                width: 100pct,
                flex_direction: FlexDirection::Column,
                overflow: Overflow::Hidden,
            ) {
                #(std::mem::take(&mut props.children))
            }

            #(footer.map(|footer| element! {
                View(
                    width: 100pct,
                    padding_top: 1,
                    border_edges: Edges::Top,
                    border_style: BorderStyle::Single,
                    border_color: theme.border,
                ) {
                    Text(content: footer, color: theme.text_dimmed)
                }
            }))
        }
    }
}
