//! Pure state machines behind the list and detail views.
//!
//! Nothing here performs I/O; the console drives these controllers and
//! executes the requests they ask for.

pub mod collection;
pub mod editor;
pub mod orphan;
pub mod pagination;
pub mod selection;

pub use collection::{Collection, FetchOutcome, FetchTicket, LoadState};
pub use editor::{
    EditTarget, EditorState, FieldKind, FormField, NumberKind, RecordForm, sanitize_float,
    sanitize_integer, sanitize_number, sanitize_text,
};
pub use orphan::PackScopePolicy;
pub use pagination::{DEFAULT_PAGE_SIZE, PACK_PAGE_SIZES, PALLET_PAGE_SIZES, PageWindow};
pub use selection::{DetailTicket, Selection};
