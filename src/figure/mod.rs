//! Figure boundary: the open figures and the engine that can save them.

/// Figure model and engine trait.
pub mod model;
/// In-memory engine for tests and debugging.
pub mod recording;

pub use model::{Figure, GraphicsEngine};
pub use recording::{RecordingEngine, SaveCall};
