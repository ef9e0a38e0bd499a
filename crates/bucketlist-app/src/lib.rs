//! View-models consumed by a presentation layer.
//!
//! [`MapViewModel`] backs the main map screen: unlocking, the saved pins and
//! the current selection. [`EditSession`] backs the sheet opened for one pin.

mod edit;
mod map;

pub use edit::EditSession;
pub use map::MapViewModel;
