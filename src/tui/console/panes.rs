//! Console panes: pallet list, pallet detail, pack table and overview report

use iocraft::prelude::*;

use crate::controller::Collection;
use crate::display::{
    DASH, OVERVIEW_HEADERS, completion_tag, num_or_dash, or_dash, overview_cells, pallet_fields,
    yes_no,
};
use crate::tui::components::{EmptyState, EmptyStateKind};
use crate::tui::theme::theme;
use crate::types::{OverviewRow, Pack, Pallet, RecordId};

/// What to show instead of rows, if anything
pub fn placeholder<T>(collection: &Collection<T>, empty_text: &str) -> Option<EmptyStateKind> {
    if !collection.items().is_empty() {
        return None;
    }
    if collection.is_loading() {
        return Some(EmptyStateKind::Loading);
    }
    if let Some(error) = collection.error() {
        return Some(EmptyStateKind::Failed(error.to_string()));
    }
    if !collection.search().is_empty() {
        return Some(EmptyStateKind::NoSearchResults(collection.search().to_string()));
    }
    Some(EmptyStateKind::Empty(empty_text.to_string()))
}

/// Status line under a list: page position, loading marker and last error
fn status_line(page_label: String, loading: bool, error: Option<String>) -> AnyElement<'static> {
    let theme = theme();
    element! {
        View(width: 100pct, height: 1, flex_direction: FlexDirection::Row, gap: 2, padding_left: 1) {
            Text(content: page_label, color: theme.text_dimmed)
            #(loading.then(|| element! { Text(content: "loading…", color: theme.search_match) }))
            #(error.map(|e| element! { Text(content: e, color: theme.notice_error) }))
        }
    }
    .into_any()
}

fn pane_border(focused: bool) -> Color {
    let theme = theme();
    if focused { theme.border_focused } else { theme.border }
}

// ============================================================================
// Pallet list
// ============================================================================

#[derive(Default, Props)]
pub struct PalletListPaneProps {
    pub pallets: Vec<Pallet>,
    pub selected_id: Option<RecordId>,
    pub focused: bool,
    pub placeholder: Option<EmptyStateKind>,
    pub search: String,
    pub page_label: String,
    pub loading: bool,
    pub error: Option<String>,
}

#[component]
pub fn PalletListPane(props: &PalletListPaneProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let title = if props.search.is_empty() {
        "Pallets".to_string()
    } else {
        format!("Pallets  /{}", props.search)
    };

    element! {
        View(
            width: 45pct,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: pane_border(props.focused),
        ) {
            View(height: 1, padding_left: 1) {
                Text(content: title, color: theme.label, weight: Weight::Bold)
            }
            #(Some(match props.placeholder.clone() {
                Some(kind) => element! { EmptyState(kind) }.into_any(),
                None => element! {
                    View(flex_grow: 1.0, width: 100pct, flex_direction: FlexDirection::Column, overflow: Overflow::Hidden) {
                        #(props.pallets.iter().map(|pallet| {
                            let is_selected = Some(pallet.id) == props.selected_id;
                            let indicator = if is_selected { ">" } else { " " };
                            element! {
                                View(
                                    height: 1,
                                    width: 100pct,
                                    padding_left: 1,
                                    flex_direction: FlexDirection::Row,
                                    background_color: if is_selected { Some(theme.highlight) } else { None },
                                ) {
                                    Text(content: indicator, color: theme.text)
                                    Text(
                                        content: format!(" #{:<6}", pallet.id),
                                        color: if is_selected { theme.text } else { theme.id_color },
                                    )
                                    Text(
                                        content: format!(" {:<16}", pallet.qr_code.as_deref().unwrap_or(DASH)),
                                        color: theme.text,
                                    )
                                    Text(
                                        content: format!(" seq: {:<14}", num_or_dash(pallet.seq_pallet)),
                                        color: theme.text_dimmed,
                                    )
                                    Text(
                                        content: format!(" doca: {:<4}", num_or_dash(pallet.num_doca)),
                                        color: theme.text_dimmed,
                                    )
                                    Text(
                                        content: format!(" [{}]", completion_tag(pallet.completed)),
                                        color: if is_selected { theme.text } else { theme.completion_color(pallet.completed) },
                                    )
                                }
                            }
                        }))
                    }
                }
                .into_any(),
            }))
            #(Some(status_line(props.page_label.clone(), props.loading, props.error.clone())))
        }
    }
}

// ============================================================================
// Pallet detail
// ============================================================================

#[derive(Default, Props)]
pub struct PalletDetailPaneProps {
    pub selected_id: Option<RecordId>,
    pub record: Option<Pallet>,
}

#[component]
pub fn PalletDetailPane(props: &PalletDetailPaneProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let body: AnyElement<'static> = match (&props.record, props.selected_id) {
        (Some(pallet), _) => {
            let fields = pallet_fields(pallet);
            element! {
                View(flex_direction: FlexDirection::Column, width: 100pct) {
                    Text(
                        content: format!("Pallet #{}", pallet.id),
                        color: theme.id_color,
                        weight: Weight::Bold,
                    )
                    #(fields.into_iter().map(|(label, value)| element! {
                        View(flex_direction: FlexDirection::Row, height: 1) {
                            Text(content: format!("{:<12}", label), color: theme.label)
                            Text(content: value, color: theme.text)
                        }
                    }))
                }
            }
            .into_any()
        }
        (None, Some(_)) => element! { EmptyState(kind: EmptyStateKind::Loading) }.into_any(),
        (None, None) => element! {
            EmptyState(kind: EmptyStateKind::Empty("Select a pallet to view details".to_string()))
        }
        .into_any(),
    };

    element! {
        View(
            width: 100pct,
            height: 11,
            padding_left: 1,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: theme.border,
        ) {
            #(Some(body))
        }
    }
}

// ============================================================================
// Pack table
// ============================================================================

const PACK_COLUMNS: [(&str, usize); 7] = [
    ("ID", 7),
    ("QR", 16),
    ("orig", 6),
    ("seq_pack", 15),
    ("lastpack", 9),
    ("pospallet", 10),
    ("robot_num", 9),
];

fn pack_cells(pack: &Pack) -> [String; 7] {
    [
        pack.id.to_string(),
        pack.qr_code.clone().unwrap_or_else(|| DASH.to_string()),
        or_dash(pack.orig),
        num_or_dash(pack.seq_pack),
        yes_no(pack.lastpack).to_string(),
        or_dash(pack.pospallet),
        or_dash(pack.robot_num),
    ]
}

fn pad_row<'a>(
    cells: impl IntoIterator<Item = &'a str>,
    widths: impl IntoIterator<Item = usize>,
) -> String {
    cells
        .into_iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = width))
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Default, Props)]
pub struct PackTablePaneProps {
    pub title: String,
    pub orphan_mode: bool,
    pub packs: Vec<Pack>,
    pub cursor: usize,
    pub focused: bool,
    pub placeholder: Option<EmptyStateKind>,
    pub page_label: String,
    pub loading: bool,
    pub error: Option<String>,
}

#[component]
pub fn PackTablePane(props: &PackTablePaneProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let widths = PACK_COLUMNS.map(|(_, w)| w);
    let header = pad_row(PACK_COLUMNS.iter().map(|(h, _)| *h), widths);

    element! {
        View(
            width: 100pct,
            flex_grow: 1.0,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: pane_border(props.focused),
        ) {
            View(height: 1, padding_left: 1) {
                Text(
                    content: props.title.clone(),
                    color: if props.orphan_mode { theme.orphan } else { theme.label },
                    weight: Weight::Bold,
                )
            }
            View(height: 1, padding_left: 3) {
                Text(content: header, color: theme.text_dimmed, weight: Weight::Bold)
            }
            #(Some(match props.placeholder.clone() {
                Some(kind) => element! { EmptyState(kind) }.into_any(),
                None => element! {
                    View(flex_grow: 1.0, width: 100pct, flex_direction: FlexDirection::Column, overflow: Overflow::Hidden) {
                        #(props.packs.iter().enumerate().map(|(i, pack)| {
                            let is_cursor = props.focused && i == props.cursor;
                            let cells = pack_cells(pack);
                            let line = pad_row(cells.iter().map(String::as_str), widths);
                            element! {
                                View(
                                    height: 1,
                                    width: 100pct,
                                    padding_left: 1,
                                    background_color: if is_cursor { Some(theme.highlight) } else { None },
                                ) {
                                    Text(content: if is_cursor { "> " } else { "  " }, color: theme.text)
                                    Text(content: line, color: theme.text)
                                }
                            }
                        }))
                    }
                }
                .into_any(),
            }))
            #(Some(status_line(props.page_label.clone(), props.loading, props.error.clone())))
        }
    }
}

// ============================================================================
// Overview report
// ============================================================================

const OVERVIEW_WIDTHS: [usize; 9] = [11, 9, 14, 20, 10, 11, 12, 15, 15];

#[derive(Default, Props)]
pub struct OverviewPaneProps {
    pub rows: Vec<OverviewRow>,
    pub placeholder: Option<EmptyStateKind>,
    pub search: String,
    pub page_label: String,
    pub loading: bool,
    pub error: Option<String>,
}

#[component]
pub fn OverviewPane(props: &OverviewPaneProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let header = pad_row(OVERVIEW_HEADERS, OVERVIEW_WIDTHS);
    let title = if props.search.is_empty() {
        "Pack Overview".to_string()
    } else {
        format!("Pack Overview  /{}", props.search)
    };

    element! {
        View(
            width: 100pct,
            flex_grow: 1.0,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: theme.border_focused,
        ) {
            View(height: 1, padding_left: 1) {
                Text(content: title, color: theme.label, weight: Weight::Bold)
            }
            View(height: 1, padding_left: 1) {
                Text(content: header, color: theme.text_dimmed, weight: Weight::Bold)
            }
            #(Some(match props.placeholder.clone() {
                Some(kind) => element! { EmptyState(kind) }.into_any(),
                None => element! {
                    View(flex_grow: 1.0, width: 100pct, flex_direction: FlexDirection::Column, overflow: Overflow::Hidden) {
                        #(props.rows.iter().map(|row| {
                            let cells = overview_cells(row);
                            let line = pad_row(cells.iter().map(String::as_str), OVERVIEW_WIDTHS);
                            element! {
                                View(height: 1, width: 100pct, padding_left: 1) {
                                    Text(
                                        content: line,
                                        color: if row.is_complete() { theme.completed } else { theme.text },
                                    )
                                }
                            }
                        }))
                    }
                }
                .into_any(),
            }))
            #(Some(status_line(props.page_label.clone(), props.loading, props.error.clone())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Page;
    use crate::controller::{PACK_PAGE_SIZES, PageWindow};

    fn collection() -> Collection<u32> {
        Collection::new(PageWindow::new(PACK_PAGE_SIZES, 10))
    }

    #[test]
    fn test_placeholder_loading_then_empty() {
        let mut c = collection();
        let ticket = c.begin_fetch();
        assert_eq!(placeholder(&c, "No pack items"), Some(EmptyStateKind::Loading));

        c.finish(ticket.generation, Ok(Page { items: vec![], total: 0 }));
        assert_eq!(
            placeholder(&c, "No pack items"),
            Some(EmptyStateKind::Empty("No pack items".to_string()))
        );
    }

    #[test]
    fn test_placeholder_failure_and_search() {
        let mut c = collection();
        let ticket = c.begin_fetch();
        c.finish(ticket.generation, Err("Request failed".to_string()));
        assert_eq!(
            placeholder(&c, "x"),
            Some(EmptyStateKind::Failed("Request failed".to_string()))
        );

        let mut c = collection();
        c.set_search("QR");
        let ticket = c.begin_fetch();
        c.finish(ticket.generation, Ok(Page { items: vec![], total: 0 }));
        assert_eq!(
            placeholder(&c, "x"),
            Some(EmptyStateKind::NoSearchResults("QR".to_string()))
        );
    }

    #[test]
    fn test_placeholder_none_with_rows() {
        let mut c = collection();
        let ticket = c.begin_fetch();
        c.finish(ticket.generation, Ok(Page { items: vec![1], total: 1 }));
        assert_eq!(placeholder(&c, "x"), None);
    }

    #[test]
    fn test_pad_row() {
        assert_eq!(pad_row(["a", "bb"], [3, 2]), "a   bb");
    }
}
