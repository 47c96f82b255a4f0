pub mod grid;
pub mod repeat;
pub mod types;

// Re-exports
pub use grid::{navigate, step_wrapped, GridMove, PaneGrid};
pub use repeat::RepeatFilter;
pub use types::{NavCursor, NavDirection, NavEvent, NavPhase, PaneMode};
