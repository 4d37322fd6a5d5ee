// ============================================================================
// STATE MODULE - Estado de la app con Rc<Cell/RefCell>
// ============================================================================

pub mod session_state;

pub use session_state::*;
