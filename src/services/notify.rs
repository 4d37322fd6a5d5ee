// ============================================================================
// NOTIFY - Toasts diferidos
// ============================================================================
// Cada toast se muestra `display_delay_ms` después de pedirlo para no
// pisarse con la animación de cambio de página.
// ============================================================================

use std::rc::Rc;

use crate::config::NotifyConfig;
use crate::models::{ServerMessages, Severity, ToastOptions, ToastOverrides};
use crate::platform::{Scheduler, Toaster};

#[derive(Clone)]
pub struct Notify {
    toaster: Rc<dyn Toaster>,
    scheduler: Rc<dyn Scheduler>,
    config: NotifyConfig,
}

impl Notify {
    pub fn new(toaster: Rc<dyn Toaster>, scheduler: Rc<dyn Scheduler>, config: NotifyConfig) -> Self {
        Self {
            toaster,
            scheduler,
            config,
        }
    }

    /// Opciones del llamador sobre los defaults; se agenda, no se muestra ya
    pub fn show_msg(&self, msg: &str, options: ToastOverrides) {
        let toast = ToastOptions::defaults(msg, self.config.delay_ms).merged(options);
        log::debug!("🔔 [NOTIFY] {:?}: {}", toast.severity, toast.content);

        let toaster = self.toaster.clone();
        self.scheduler
            .schedule(self.config.display_delay_ms, Box::new(move || toaster.show(&toast)));
    }

    pub fn show_success(&self, msg: &str) {
        self.show_msg(msg, ToastOverrides::titled(Severity::Success, "Success!"));
    }

    pub fn show_error(&self, msg: &str) {
        self.show_msg(msg, ToastOverrides::titled(Severity::Danger, "Uh-oh!"));
    }

    /// Un toast por mensaje: primero los éxitos, luego los errores
    pub fn handle_server_messages(&self, messages: Option<&ServerMessages>) {
        let Some(messages) = messages else {
            return;
        };

        for msg in &messages.successes {
            self.show_success(msg);
        }
        for msg in &messages.errors {
            self.show_error(msg);
        }
    }
}
