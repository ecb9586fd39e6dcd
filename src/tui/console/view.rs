//! Main console view component
//!
//! Holds the [`ConsoleState`] in a single iocraft `State`, maps key presses
//! to messages, and runs the commands those messages produce on an async
//! handler. Rendering is a pure function of the current state.

// State and Handler are Copy/cheap; cloned into closures for clarity
#![allow(clippy::clone_on_copy)]

use iocraft::prelude::*;

use crate::api::ApiClient;
use crate::console::{Command, ConsoleState, ConsoleView, Pane, now_ms, run_commands};
use crate::display::page_label;
use crate::tui::components::{
    Footer, Header, confirm_dialog_shortcuts, editor_shortcuts, overview_shortcuts,
    pallets_shortcuts, prompt_shortcuts, render_toast,
};
use crate::tui::theme::theme;

use super::keymap::key_to_msg;
use super::modals::{ConfirmModal, EditorModal, PromptModal};
use super::panes::{OverviewPane, PackTablePane, PalletDetailPane, PalletListPane, placeholder};

#[derive(Default, Props)]
pub struct ConsoleAppProps {
    pub client: Option<ApiClient>,
}

#[component]
pub fn ConsoleApp<'a>(props: &ConsoleAppProps, mut hooks: Hooks) -> impl Into<AnyElement<'a>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();
    let theme = theme();

    let console: State<ConsoleState> = hooks.use_state(ConsoleState::default);

    // Runs a batch of commands and everything their results trigger
    let run_handler: Handler<Vec<Command>> = hooks.use_async_handler({
        let console = console.clone();
        let client = props.client.clone();

        move |commands: Vec<Command>| {
            let mut console = console.clone();
            let client = client.clone();

            async move {
                let Some(client) = client else {
                    return;
                };
                run_commands(&client, commands, |msg| console.write().apply(msg)).await;
            }
        }
    });

    let mut fetch_started = hooks.use_state(|| false);
    if !fetch_started.get() {
        fetch_started.set(true);
        let commands = console.clone().write().start();
        run_handler.clone()(commands);
    }

    hooks.use_terminal_events({
        let mut console = console.clone();
        let run_handler = run_handler.clone();

        move |event| match event {
            TerminalEvent::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) if kind != KeyEventKind::Release => {
                let msg = key_to_msg(code, modifiers, &console.read(), now_ms());
                if let Some(msg) = msg {
                    let commands = console.write().apply(msg);
                    if !commands.is_empty() {
                        run_handler.clone()(commands);
                    }
                }
            }
            _ => {}
        }
    });

    let state = console.read().clone();

    if state.should_exit {
        system.exit();
    }

    let shortcuts = if state.confirm.is_some() {
        confirm_dialog_shortcuts()
    } else if state.editor.is_some() {
        editor_shortcuts()
    } else if state.input.is_some() {
        prompt_shortcuts()
    } else {
        match state.view {
            ConsoleView::Pallets => pallets_shortcuts(),
            ConsoleView::Overview => overview_shortcuts(),
        }
    };

    let subtitle = match state.view {
        ConsoleView::Pallets => "Pallets",
        ConsoleView::Overview => "Overview",
    };
    let api_base = props.client.as_ref().map(|c| c.base_url().to_string());

    let body = match state.view {
        ConsoleView::Pallets => element! {
            View(flex_grow: 1.0, width: 100pct, flex_direction: FlexDirection::Row) {
                PalletListPane(
                    pallets: state.pallets.items().to_vec(),
                    selected_id: state.selection.selected_id(),
                    focused: state.focus == Pane::Pallets,
                    placeholder: placeholder(&state.pallets, "No pallets"),
                    search: state.pallets.search().to_string(),
                    page_label: page_label(state.pallets.window()),
                    loading: state.pallets.is_loading(),
                    error: state.pallets.error().map(str::to_string),
                )
                View(flex_grow: 1.0, height: 100pct, flex_direction: FlexDirection::Column) {
                    PalletDetailPane(
                        selected_id: state.selection.selected_id(),
                        record: state.selection.record().cloned(),
                    )
                    PackTablePane(
                        title: state.pack_title(),
                        orphan_mode: state.pack_scope.orphan_mode(),
                        packs: state.packs.items().to_vec(),
                        cursor: state.pack_cursor,
                        focused: state.focus == Pane::Packs,
                        placeholder: placeholder(&state.packs, state.pack_empty_text()),
                        page_label: page_label(state.packs.window()),
                        loading: state.packs.is_loading(),
                        error: state.packs.error().map(str::to_string),
                    )
                }
            }
        }
        .into_any(),
        ConsoleView::Overview => element! {
            OverviewPane(
                rows: state.overview.items().to_vec(),
                placeholder: placeholder(&state.overview, "No overview data"),
                search: state.overview.search().to_string(),
                page_label: page_label(state.overview.window()),
                loading: state.overview.is_loading(),
                error: state.overview.error().map(str::to_string),
            )
        }
        .into_any(),
    };

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
        ) {
            Header(subtitle: Some(subtitle), api_base, health: state.health)
            #(Some(body))
            Footer(shortcuts)
            #(render_toast(&state.notice))
            EditorModal(editor: state.editor.clone())
            ConfirmModal(dialog: state.confirm.clone())
            PromptModal(input: state.input.clone())
        }
    }
}
