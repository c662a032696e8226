//! Input handling: platform-agnostic events and the interaction state
//! machine that gates label recomputation.

/// Platform-agnostic input events.
pub mod event;
/// Drag state machine and recomputation gating.
pub mod interaction;

pub use event::{InputEvent, MouseButton};
pub use interaction::{InteractionState, InteractionTracker, RecomputeGating};
