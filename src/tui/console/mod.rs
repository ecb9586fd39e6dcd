//! Interactive console screen
//!
//! - `view` - root component wiring state, keys and async requests
//! - `keymap` - key bindings
//! - `panes` - list, detail and table panes
//! - `modals` - editor, confirm and prompt overlays

pub mod keymap;
pub mod modals;
pub mod panes;
pub mod view;

pub use keymap::key_to_msg;
pub use view::{ConsoleApp, ConsoleAppProps};
