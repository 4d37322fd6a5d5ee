// ============================================================================
// DOM MODULE - Helpers para manipulación DOM
// ============================================================================

pub mod element;
pub mod loader;

pub use element::*;
pub use loader::Loader;
