//! Console model for testable state management
//!
//! [`ConsoleState`] holds everything the interactive console shows. Every
//! user input and every finished request is a [`Msg`]; [`ConsoleState::apply`]
//! folds it into the state and returns the [`Command`]s (network requests)
//! that must run next. The model never performs I/O itself, so the whole
//! master/detail flow is unit-testable without a terminal or a server.

use crate::api::{Page, PackScope};
use crate::controller::editor::format_number;
use crate::controller::{
    Collection, DEFAULT_PAGE_SIZE, DetailTicket, EditTarget, EditorState, FetchOutcome,
    FetchTicket, PACK_PAGE_SIZES, PALLET_PAGE_SIZES, PackScopePolicy, PageWindow, Selection,
};
use crate::types::{NewPallet, OverviewRow, Pack, PackPayload, Pallet, PalletUpdate, RecordId};

pub const DELETE_PALLET_MESSAGE: &str = "This will also delete related pack rows. Continue?";
pub const DELETE_PACK_MESSAGE: &str = "Are you sure you want to delete this pack record?";
pub const ORPHAN_PACKS_TITLE: &str = "Orphan Packs (seq_pallet = null)";

// ============================================================================
// State Types
// ============================================================================

/// Result of the API health probe shown in the header badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HealthStatus {
    #[default]
    Checking,
    Online,
    Offline,
}

impl HealthStatus {
    pub fn label(&self) -> &'static str {
        match self {
            HealthStatus::Checking => "Checking…",
            HealthStatus::Online => "API Online",
            HealthStatus::Offline => "API Offline",
        }
    }
}

/// Top-level screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsoleView {
    /// Pallet list, pallet detail and pack table
    #[default]
    Pallets,
    /// Denormalized pack overview report
    Overview,
}

/// Focused pane on the pallets screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pane {
    #[default]
    Pallets,
    Packs,
}

/// What a single-line input is collecting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineTarget {
    PalletSearch,
    OverviewSearch,
    /// `seq_pallet` for a new pallet; an empty answer uses `default_seq`
    NewPalletSeq { default_seq: i64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineInput {
    pub target: LineTarget,
    pub buffer: String,
}

impl LineInput {
    pub fn prompt(&self) -> &'static str {
        match self.target {
            LineTarget::PalletSearch => "Search pallets",
            LineTarget::OverviewSearch => "Search QR / pallet / OT",
            LineTarget::NewPalletSeq { .. } => "seq_pallet (number)",
        }
    }
}

/// Action to perform when a confirmation dialog is accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    DeletePallet(RecordId),
    DeletePack(RecordId),
}

/// State for a confirmation dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmDialogState {
    pub title: String,
    pub message: String,
    pub action: ConfirmAction,
}

impl ConfirmDialogState {
    pub fn delete_pallet(id: RecordId) -> Self {
        Self {
            title: "Delete Pallet".to_string(),
            message: DELETE_PALLET_MESSAGE.to_string(),
            action: ConfirmAction::DeletePallet(id),
        }
    }

    pub fn delete_pack(id: RecordId) -> Self {
        Self {
            title: "Delete Pack".to_string(),
            message: DELETE_PACK_MESSAGE.to_string(),
            action: ConfirmAction::DeletePack(id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// One-line feedback after an operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub level: NoticeLevel,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NoticeLevel::Info,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NoticeLevel::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NoticeLevel::Error,
        }
    }
}

/// Everything the console shows
#[derive(Debug, Clone)]
pub struct ConsoleState {
    pub health: HealthStatus,
    pub view: ConsoleView,
    pub focus: Pane,

    // Pallets screen
    pub pallets: Collection<Pallet>,
    pub selection: Selection<Pallet>,
    /// Pallet to select once the in-flight pallet fetch lands, in place of repair
    pub pending_selection: Option<RecordId>,
    pub packs: Collection<Pack>,
    pub pack_scope: PackScopePolicy,
    /// Highlighted row of the pack table
    pub pack_cursor: usize,

    // Overview screen
    pub overview: Collection<OverviewRow>,

    // Overlays
    pub input: Option<LineInput>,
    pub editor: Option<EditorState>,
    pub confirm: Option<ConfirmDialogState>,
    pub notice: Option<Notice>,

    pub should_exit: bool,
}

impl Default for ConsoleState {
    fn default() -> Self {
        Self {
            health: HealthStatus::Checking,
            view: ConsoleView::default(),
            focus: Pane::default(),
            pallets: Collection::new(PageWindow::new(PALLET_PAGE_SIZES, DEFAULT_PAGE_SIZE)),
            selection: Selection::default(),
            pending_selection: None,
            packs: Collection::new(PageWindow::new(PACK_PAGE_SIZES, DEFAULT_PAGE_SIZE)),
            pack_scope: PackScopePolicy::default(),
            pack_cursor: 0,
            overview: Collection::new(PageWindow::new(PACK_PAGE_SIZES, DEFAULT_PAGE_SIZE)),
            input: None,
            editor: None,
            confirm: None,
            notice: None,
            should_exit: false,
        }
    }
}

// ============================================================================
// Message and Command Types
// ============================================================================

/// Everything that can happen to the console
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    // Navigation
    Quit,
    SwitchView,
    SwitchPane,
    MoveUp,
    MoveDown,
    SelectPallet(Option<RecordId>),
    PrevPage,
    NextPage,
    CycleLimit,
    Refresh,

    // Search
    StartSearch,
    SetSearch(String),
    ClearSearch,

    // Line input and editor text entry
    InputChar(char),
    InputBackspace,
    InputSubmit,
    InputCancel,
    NextField,
    PrevField,

    // Records
    NewPallet { now_ms: i64 },
    NewPack { now_ms: i64 },
    EditSelected,
    DeleteSelected,
    ToggleOrphans,

    // Dialogs
    ConfirmAccept,
    ConfirmCancel,
    DismissNotice,

    // Request completions
    HealthChecked(bool),
    PalletsLoaded {
        generation: u64,
        result: Result<Page<Pallet>, String>,
    },
    PalletDetailLoaded {
        generation: u64,
        record: Option<Pallet>,
    },
    PacksLoaded {
        generation: u64,
        result: Result<Page<Pack>, String>,
    },
    OverviewLoaded {
        generation: u64,
        result: Result<Page<OverviewRow>, String>,
    },
    PalletCreated(Result<Pallet, String>),
    PalletSaved(Result<Pallet, String>),
    PalletDeleted {
        id: RecordId,
        result: Result<(), String>,
    },
    PackSaved(Result<Pack, String>),
    PackDeleted {
        id: RecordId,
        result: Result<(), String>,
    },
}

/// A gateway request the console wants executed
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    CheckHealth,
    FetchPallets(FetchTicket),
    FetchPalletDetail(DetailTicket),
    FetchPacks {
        ticket: FetchTicket,
        scope: PackScope,
    },
    FetchOverview(FetchTicket),
    CreatePallet(NewPallet),
    UpdatePallet {
        id: RecordId,
        update: PalletUpdate,
    },
    DeletePallet(RecordId),
    CreatePack {
        scope: PackScope,
        payload: PackPayload,
    },
    UpdatePack {
        id: RecordId,
        payload: PackPayload,
    },
    DeletePack(RecordId),
}

// ============================================================================
// Reducer
// ============================================================================

impl ConsoleState {
    /// Commands to run when the console opens
    pub fn start(&mut self) -> Vec<Command> {
        vec![
            Command::CheckHealth,
            self.fetch_pallets(),
            self.fetch_packs(),
            self.fetch_overview(),
        ]
    }

    /// Apply a message, returning the commands it triggers
    pub fn apply(&mut self, msg: Msg) -> Vec<Command> {
        match msg {
            Msg::Quit => {
                self.should_exit = true;
                vec![]
            }
            Msg::SwitchView => match self.view {
                ConsoleView::Pallets => {
                    self.view = ConsoleView::Overview;
                    vec![self.fetch_overview()]
                }
                ConsoleView::Overview => {
                    self.view = ConsoleView::Pallets;
                    vec![]
                }
            },
            Msg::SwitchPane => {
                self.focus = match self.focus {
                    Pane::Pallets => Pane::Packs,
                    Pane::Packs => Pane::Pallets,
                };
                vec![]
            }
            Msg::MoveUp => self.move_cursor(-1),
            Msg::MoveDown => self.move_cursor(1),
            Msg::SelectPallet(id) => self.select_pallet(id),
            Msg::PrevPage => self.page_action(|c| c.go_prev()),
            Msg::NextPage => self.page_action(|c| c.go_next()),
            Msg::CycleLimit => self.page_action(|c| c.cycle_limit()),
            Msg::Refresh => match self.view {
                ConsoleView::Pallets => vec![
                    Command::CheckHealth,
                    self.fetch_pallets(),
                    self.fetch_packs(),
                ],
                ConsoleView::Overview => vec![Command::CheckHealth, self.fetch_overview()],
            },

            Msg::StartSearch => {
                let (target, current) = match self.view {
                    ConsoleView::Pallets => (LineTarget::PalletSearch, self.pallets.search()),
                    ConsoleView::Overview => (LineTarget::OverviewSearch, self.overview.search()),
                };
                self.input = Some(LineInput {
                    target,
                    buffer: current.to_string(),
                });
                vec![]
            }
            Msg::SetSearch(search) => self.set_search(search),
            Msg::ClearSearch => self.set_search(String::new()),

            Msg::InputChar(c) => {
                if let Some(editor) = self.editor.as_mut() {
                    editor.form.insert_char(c);
                } else if let Some(input) = self.input.as_mut() {
                    input.buffer.push(c);
                }
                vec![]
            }
            Msg::InputBackspace => {
                if let Some(editor) = self.editor.as_mut() {
                    editor.form.backspace();
                } else if let Some(input) = self.input.as_mut() {
                    input.buffer.pop();
                }
                vec![]
            }
            Msg::InputSubmit => {
                if self.editor.is_some() {
                    self.submit_editor()
                } else if let Some(input) = self.input.take() {
                    self.submit_line(input)
                } else {
                    vec![]
                }
            }
            Msg::InputCancel => {
                if self.editor.is_some() {
                    self.editor = None;
                } else {
                    self.input = None;
                }
                vec![]
            }
            Msg::NextField => {
                if let Some(editor) = self.editor.as_mut() {
                    editor.form.focus_next();
                }
                vec![]
            }
            Msg::PrevField => {
                if let Some(editor) = self.editor.as_mut() {
                    editor.form.focus_prev();
                }
                vec![]
            }

            Msg::NewPallet { now_ms } => {
                self.input = Some(LineInput {
                    target: LineTarget::NewPalletSeq { default_seq: now_ms },
                    buffer: now_ms.to_string(),
                });
                vec![]
            }
            Msg::NewPack { now_ms } => {
                self.editor = Some(EditorState::create_pack(self.pack_scope.scope(), now_ms));
                vec![]
            }
            Msg::EditSelected => {
                match self.focus {
                    Pane::Pallets => {
                        if let Some(pallet) = self.selection.record() {
                            self.editor = Some(EditorState::edit_pallet(pallet));
                        }
                    }
                    Pane::Packs => {
                        if let Some(pack) = self.selected_pack() {
                            self.editor = Some(EditorState::edit_pack(pack));
                        }
                    }
                }
                vec![]
            }
            Msg::DeleteSelected => {
                self.confirm = match self.focus {
                    Pane::Pallets => self
                        .selection
                        .selected_id()
                        .map(ConfirmDialogState::delete_pallet),
                    Pane::Packs => self
                        .selected_pack()
                        .map(|p| ConfirmDialogState::delete_pack(p.id)),
                };
                vec![]
            }
            Msg::ToggleOrphans => {
                if self.pack_scope.toggle() {
                    self.rescope_packs()
                } else {
                    self.notice = Some(Notice::info("Select a pallet to leave orphan mode"));
                    vec![]
                }
            }

            Msg::ConfirmAccept => match self.confirm.take().map(|c| c.action) {
                Some(ConfirmAction::DeletePallet(id)) => vec![Command::DeletePallet(id)],
                Some(ConfirmAction::DeletePack(id)) => vec![Command::DeletePack(id)],
                None => vec![],
            },
            Msg::ConfirmCancel => {
                self.confirm = None;
                vec![]
            }
            Msg::DismissNotice => {
                self.notice = None;
                vec![]
            }

            Msg::HealthChecked(online) => {
                self.health = if online {
                    HealthStatus::Online
                } else {
                    HealthStatus::Offline
                };
                vec![]
            }
            Msg::PalletsLoaded { generation, result } => {
                match self.pallets.finish(generation, result) {
                    FetchOutcome::Applied => {
                        let ticket = match self.pending_selection.take() {
                            Some(id) => self.selection.select(Some(id)),
                            None => self.selection.repair(self.pallets.items()),
                        };
                        self.after_selection_change(ticket)
                    }
                    FetchOutcome::Clamped => vec![self.fetch_pallets()],
                    FetchOutcome::Failed => match self.pending_selection.take() {
                        Some(id) => self.select_pallet(Some(id)),
                        None => vec![],
                    },
                    FetchOutcome::Stale => vec![],
                }
            }
            Msg::PalletDetailLoaded { generation, record } => {
                self.selection.finish_detail(generation, record);
                vec![]
            }
            Msg::PacksLoaded { generation, result } => {
                match self.packs.finish(generation, result) {
                    FetchOutcome::Applied => {
                        let len = self.packs.items().len();
                        self.pack_cursor = self.pack_cursor.min(len.saturating_sub(1));
                        vec![]
                    }
                    FetchOutcome::Clamped => vec![self.fetch_packs()],
                    FetchOutcome::Stale | FetchOutcome::Failed => vec![],
                }
            }
            Msg::OverviewLoaded { generation, result } => {
                match self.overview.finish(generation, result) {
                    FetchOutcome::Clamped => vec![self.fetch_overview()],
                    _ => vec![],
                }
            }

            Msg::PalletCreated(Ok(pallet)) => {
                self.notice = Some(Notice::success(format!("Created pallet #{}", pallet.id)));
                self.pallets.set_search(String::new());
                self.pallets.reset_offset();
                self.pending_selection = Some(pallet.id);
                vec![self.fetch_pallets()]
            }
            Msg::PalletCreated(Err(message)) => {
                self.notice = Some(Notice::error(message));
                vec![]
            }
            Msg::PalletSaved(Ok(pallet)) => {
                self.close_editor_for(EditTarget::Pallet(pallet.id));
                self.notice = Some(Notice::success(format!("Saved pallet #{}", pallet.id)));
                self.selection.replace(pallet);
                vec![self.fetch_pallets()]
            }
            Msg::PackSaved(Ok(pack)) => {
                self.close_pack_editor(&pack);
                self.notice = Some(Notice::success(format!("Saved pack #{}", pack.id)));
                vec![self.fetch_packs()]
            }
            Msg::PalletSaved(Err(message)) | Msg::PackSaved(Err(message)) => {
                self.fail_editor(message);
                vec![]
            }
            Msg::PalletDeleted { id, result } => match result {
                Ok(()) => {
                    self.notice = Some(Notice::success(format!("Deleted pallet #{id}")));
                    vec![self.fetch_pallets()]
                }
                Err(message) => {
                    self.notice = Some(Notice::error(message));
                    vec![]
                }
            },
            Msg::PackDeleted { id, result } => match result {
                Ok(()) => {
                    self.notice = Some(Notice::success(format!("Deleted pack #{id}")));
                    vec![self.fetch_packs()]
                }
                Err(message) => {
                    self.notice = Some(Notice::error(message));
                    vec![]
                }
            },
        }
    }

    // ------------------------------------------------------------------------
    // Fetch helpers
    // ------------------------------------------------------------------------

    fn fetch_pallets(&mut self) -> Command {
        Command::FetchPallets(self.pallets.begin_fetch())
    }

    fn fetch_packs(&mut self) -> Command {
        Command::FetchPacks {
            ticket: self.packs.begin_fetch(),
            scope: self.pack_scope.scope(),
        }
    }

    fn fetch_overview(&mut self) -> Command {
        Command::FetchOverview(self.overview.begin_fetch())
    }

    fn rescope_packs(&mut self) -> Vec<Command> {
        self.packs.rescope();
        self.pack_cursor = 0;
        vec![self.fetch_packs()]
    }

    // ------------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------------

    fn select_pallet(&mut self, id: Option<RecordId>) -> Vec<Command> {
        let ticket = self.selection.select(id);
        self.after_selection_change(ticket)
    }

    /// Fetch the new detail record and re-scope the pack list to the selection
    fn after_selection_change(&mut self, ticket: Option<DetailTicket>) -> Vec<Command> {
        let mut commands: Vec<Command> =
            ticket.map(Command::FetchPalletDetail).into_iter().collect();
        if self.pack_scope.set_parent(self.selection.selected_id()) {
            commands.extend(self.rescope_packs());
        }
        commands
    }

    fn move_cursor(&mut self, delta: isize) -> Vec<Command> {
        if self.view != ConsoleView::Pallets {
            return vec![];
        }
        match self.focus {
            Pane::Pallets => {
                let items = self.pallets.items();
                if items.is_empty() {
                    return vec![];
                }
                let current = self
                    .selection
                    .selected_id()
                    .and_then(|id| items.iter().position(|p| p.id == id))
                    .unwrap_or(0);
                let next = step(current, delta, items.len());
                let id = items[next].id;
                self.select_pallet(Some(id))
            }
            Pane::Packs => {
                let len = self.packs.items().len();
                if len > 0 {
                    self.pack_cursor = step(self.pack_cursor, delta, len);
                }
                vec![]
            }
        }
    }

    pub fn selected_pack(&self) -> Option<&Pack> {
        self.packs.items().get(self.pack_cursor)
    }

    // ------------------------------------------------------------------------
    // Paging and search
    // ------------------------------------------------------------------------

    /// Run a window change on the list the user is looking at; refetch if it moved
    fn page_action<F>(&mut self, change: F) -> Vec<Command>
    where
        F: FnOnce(&mut PageControl<'_>) -> bool,
    {
        match (self.view, self.focus) {
            (ConsoleView::Overview, _) => {
                if change(&mut PageControl::Overview(&mut self.overview)) {
                    vec![self.fetch_overview()]
                } else {
                    vec![]
                }
            }
            (ConsoleView::Pallets, Pane::Pallets) => {
                if change(&mut PageControl::Pallets(&mut self.pallets)) {
                    vec![self.fetch_pallets()]
                } else {
                    vec![]
                }
            }
            (ConsoleView::Pallets, Pane::Packs) => {
                if change(&mut PageControl::Packs(&mut self.packs)) {
                    self.pack_cursor = 0;
                    vec![self.fetch_packs()]
                } else {
                    vec![]
                }
            }
        }
    }

    fn set_search(&mut self, search: String) -> Vec<Command> {
        match self.view {
            ConsoleView::Pallets => {
                if self.pallets.set_search(search) {
                    vec![self.fetch_pallets()]
                } else {
                    vec![]
                }
            }
            ConsoleView::Overview => {
                if self.overview.set_search(search) {
                    vec![self.fetch_overview()]
                } else {
                    vec![]
                }
            }
        }
    }

    fn submit_line(&mut self, input: LineInput) -> Vec<Command> {
        match input.target {
            LineTarget::PalletSearch => {
                if self.pallets.set_search(input.buffer.trim()) {
                    vec![self.fetch_pallets()]
                } else {
                    vec![]
                }
            }
            LineTarget::OverviewSearch => {
                if self.overview.set_search(input.buffer.trim()) {
                    vec![self.fetch_overview()]
                } else {
                    vec![]
                }
            }
            LineTarget::NewPalletSeq { default_seq } => {
                match parse_seq_pallet(&input.buffer, default_seq) {
                    Some(seq_pallet) => vec![Command::CreatePallet(NewPallet { seq_pallet })],
                    None => {
                        self.notice = Some(Notice::error("seq_pallet must be a number"));
                        vec![]
                    }
                }
            }
        }
    }

    // ------------------------------------------------------------------------
    // Editor
    // ------------------------------------------------------------------------

    fn submit_editor(&mut self) -> Vec<Command> {
        let Some(editor) = self.editor.as_mut() else {
            return vec![];
        };
        if editor.saving {
            return vec![];
        }
        editor.saving = true;
        editor.error = None;

        let command = match editor.target {
            EditTarget::Pallet(id) => Command::UpdatePallet {
                id,
                update: editor.form.to_pallet_update(),
            },
            EditTarget::NewPack(scope) => Command::CreatePack {
                scope,
                payload: editor.form.to_pack_payload(),
            },
            EditTarget::Pack(id) => Command::UpdatePack {
                id,
                payload: editor.form.to_pack_payload(),
            },
        };
        vec![command]
    }

    fn close_editor_for(&mut self, target: EditTarget) {
        if self.editor.as_ref().is_some_and(|e| e.target == target) {
            self.editor = None;
        }
    }

    fn close_pack_editor(&mut self, pack: &Pack) {
        let saved_here = self.editor.as_ref().is_some_and(|e| match e.target {
            EditTarget::NewPack(_) => e.saving,
            EditTarget::Pack(id) => id == pack.id,
            EditTarget::Pallet(_) => false,
        });
        if saved_here {
            self.editor = None;
        }
    }

    fn fail_editor(&mut self, message: String) {
        match self.editor.as_mut() {
            Some(editor) => {
                editor.saving = false;
                editor.error = Some(message);
            }
            None => self.notice = Some(Notice::error(message)),
        }
    }

    // ------------------------------------------------------------------------
    // View helpers
    // ------------------------------------------------------------------------

    /// Title of the pack table
    pub fn pack_title(&self) -> String {
        if self.pack_scope.orphan_mode() {
            return ORPHAN_PACKS_TITLE.to_string();
        }
        let seq = self
            .selection
            .record()
            .and_then(|p| p.seq_pallet)
            .map(format_number)
            .unwrap_or_else(|| "—".to_string());
        format!("Packs for Pallet seq {seq}")
    }

    /// Text shown when the pack table is empty
    pub fn pack_empty_text(&self) -> &'static str {
        if self.pack_scope.orphan_mode() {
            "No orphan packs"
        } else {
            "No pack items"
        }
    }
}

/// Mutable handle on whichever collection a paging key applies to
enum PageControl<'a> {
    Pallets(&'a mut Collection<Pallet>),
    Packs(&'a mut Collection<Pack>),
    Overview(&'a mut Collection<OverviewRow>),
}

impl PageControl<'_> {
    fn go_prev(&mut self) -> bool {
        match self {
            PageControl::Pallets(c) => c.go_prev(),
            PageControl::Packs(c) => c.go_prev(),
            PageControl::Overview(c) => c.go_prev(),
        }
    }

    fn go_next(&mut self) -> bool {
        match self {
            PageControl::Pallets(c) => c.go_next(),
            PageControl::Packs(c) => c.go_next(),
            PageControl::Overview(c) => c.go_next(),
        }
    }

    fn cycle_limit(&mut self) -> bool {
        match self {
            PageControl::Pallets(c) => c.cycle_limit(),
            PageControl::Packs(c) => c.cycle_limit(),
            PageControl::Overview(c) => c.cycle_limit(),
        }
    }
}

/// Current wall-clock time in Unix milliseconds, used for default sequence numbers
pub fn now_ms() -> i64 {
    jiff::Timestamp::now().as_millisecond()
}

/// Parse the new-pallet prompt: empty means the default, otherwise a finite number
pub fn parse_seq_pallet(raw: &str, default_seq: i64) -> Option<f64> {
    let text = raw.trim();
    if text.is_empty() {
        return Some(default_seq as f64);
    }
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn step(current: usize, delta: isize, len: usize) -> usize {
    let next = current as isize + delta;
    next.clamp(0, len as isize - 1) as usize
}
