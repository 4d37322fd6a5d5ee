// ============================================================================
// OVERLAY - Loader visible mientras corre una navegación
// ============================================================================

use std::rc::Rc;

use super::{Overlay, Scheduler};

/// Muestra el overlay, ejecuta `work` y agenda el `hide`.
/// Ocultarlo en la misma tarea haría que el navegador nunca lo pinte.
pub fn with_overlay<T>(
    overlay: Rc<dyn Overlay>,
    scheduler: &dyn Scheduler,
    hide_delay_ms: u32,
    work: impl FnOnce() -> T,
) -> T {
    overlay.show();
    let result = work();
    scheduler.schedule(hide_delay_ms, Box::new(move || overlay.hide()));
    result
}
