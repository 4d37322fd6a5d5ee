use futures::future::LocalBoxFuture;

use crate::models::ToastOptions;

/// Navegación "dura" (recarga de página), p.ej. `location.assign`
pub trait Navigator {
    fn assign(&self, url: &str);
}

/// Scroll de la ventana
pub trait Viewport {
    fn scroll_to(&self, x: f64, y: f64);
}

/// Lanza un future en segundo plano sin esperarlo (sin cancelación)
pub trait Spawner {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>);
}

/// Ejecuta una tarea tras `delay_ms`
pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

/// Renderiza un toast
pub trait Toaster {
    fn show(&self, options: &ToastOptions);
}

/// History API + título del documento
pub trait History {
    /// URL actual relativa al origen (path + query)
    fn current_url(&self) -> String;
    fn push_state(&self, url: &str) -> Result<(), String>;
    fn replace_state(&self, url: &str) -> Result<(), String>;
    fn set_title(&self, title: &str);
}

/// Overlay de carga entre navegaciones
pub trait Overlay {
    fn show(&self);
    fn hide(&self);
}
