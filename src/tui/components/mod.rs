//! Shared TUI components
//!
//! Building blocks used by the console screens and its modals.

pub mod empty_state;
pub mod footer;
pub mod header;
pub mod modal_container;
pub mod modal_overlay;
pub mod shortcuts;
pub mod toast;

pub use empty_state::{EmptyState, EmptyStateKind, EmptyStateProps};
pub use footer::{
    Footer, FooterProps, Shortcut, confirm_dialog_shortcuts, editor_shortcuts,
    overview_shortcuts, pallets_shortcuts, prompt_shortcuts,
};
pub use header::{Header, HeaderProps};
pub use modal_container::{ModalBorderColor, ModalContainer, ModalContainerProps};
pub use modal_overlay::{MODAL_BACKDROP, ModalOverlay, ModalOverlayProps};
pub use shortcuts::ShortcutsBuilder;
pub use toast::render_toast;
