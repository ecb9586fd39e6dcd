//! Console modals: record editor, delete confirmation and line prompt

use iocraft::prelude::*;

use crate::console::{ConfirmDialogState, LineInput};
use crate::controller::{EditorState, FieldKind};
use crate::tui::components::{ModalBorderColor, ModalContainer, ModalOverlay};
use crate::tui::theme::theme;

#[derive(Default, Props)]
pub struct EditorModalProps {
    pub editor: Option<EditorState>,
}

/// Form editor for a pallet or pack
#[component]
pub fn EditorModal(props: &EditorModalProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let Some(editor) = props.editor.clone() else {
        return element! { View() }.into_any();
    };

    let focused = editor.form.focused;
    let footer = if editor.saving {
        "Saving…".to_string()
    } else {
        "Tab/S-Tab field · Space toggle · Enter save · Esc cancel".to_string()
    };

    element! {
        ModalOverlay(show_backdrop: true) {
            ModalContainer(
                width: Some(64),
                border_color: if editor.error.is_some() { ModalBorderColor::Error } else { ModalBorderColor::Focused },
                title: Some(editor.target.title()),
                footer_text: Some(footer),
            ) {
                #(editor.form.fields.iter().enumerate().map(|(i, field)| {
                    let is_focused = i == focused;
                    let value = match field.kind {
                        FieldKind::Flag => format!("[{}]", if field.is_on() { "x" } else { " " }),
                        _ if is_focused => format!("{}▏", field.value),
                        _ => field.value.clone(),
                    };
                    element! {
                        View(
                            height: 1,
                            width: 100pct,
                            flex_direction: FlexDirection::Row,
                            background_color: if is_focused { Some(theme.highlight) } else { None },
                        ) {
                            Text(content: format!("{:<12}", field.label), color: theme.label)
                            Text(content: value, color: theme.text)
                        }
                    }
                }))
                #(editor.error.clone().map(|error| element! {
                    View(margin_top: 1) {
                        Text(content: error, color: theme.notice_error)
                    }
                }))
            }
        }
    }
    .into_any()
}

#[derive(Default, Props)]
pub struct ConfirmModalProps {
    pub dialog: Option<ConfirmDialogState>,
}

#[component]
pub fn ConfirmModal(props: &ConfirmModalProps) -> impl Into<AnyElement<'static>> {
    let Some(dialog) = props.dialog.clone() else {
        return element! { View() }.into_any();
    };

    element! {
        ModalOverlay(show_backdrop: true) {
            ModalContainer(
                width: Some(56),
                border_color: ModalBorderColor::Warning,
                title: Some(dialog.title),
                footer_text: Some("[y]es / [n]o".to_string()),
            ) {
                Text(content: dialog.message, color: theme().text)
            }
        }
    }
    .into_any()
}

#[derive(Default, Props)]
pub struct PromptModalProps {
    pub input: Option<LineInput>,
}

/// Single-line prompt used for search terms and the new pallet's sequence
#[component]
pub fn PromptModal(props: &PromptModalProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let Some(input) = props.input.clone() else {
        return element! { View() }.into_any();
    };

    element! {
        ModalOverlay {
            ModalContainer(
                width: Some(50),
                title: Some(input.prompt().to_string()),
                footer_text: Some("Enter submit · Esc cancel".to_string()),
            ) {
                View(flex_direction: FlexDirection::Row, height: 1) {
                    Text(content: "> ", color: theme.border_focused)
                    Text(content: format!("{}▏", input.buffer), color: theme.text)
                }
            }
        }
    }
    .into_any()
}
