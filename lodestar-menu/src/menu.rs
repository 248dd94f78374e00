#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod catalog;
pub mod error;
pub mod graphical;
pub mod layout;
pub mod selector;
pub mod state;
pub mod text;
pub mod theme;
pub mod traits;

#[cfg(test)]
mod tests;

// Re-exports
pub use error::{MenuError, Result};
pub use graphical::GraphicalMenu;
pub use layout::Geometry;
pub use selector::{NO_ENTRIES_MESSAGE, Outcome, Selector};
pub use state::{Mode, SelectionState, Transition};
pub use theme::{Color, Theme};
pub use traits::display::{Headless, Screen};
pub use traits::firmware::BootFirmware;
pub use traits::input::{Key, KeySource};
