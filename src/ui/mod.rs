//! User interface modules for the distance display

pub mod panes;

// Re-export commonly used items
pub use panes::format_selection;
