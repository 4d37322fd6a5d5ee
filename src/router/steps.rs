// ============================================================================
// STEPS - Pasos concretos del pipeline de navegación
// ============================================================================

use std::rc::Rc;

use crate::models::{NavigationInstruction, ToastOverrides};
use crate::platform::{Spawner, Viewport};
use crate::router::pipeline::{Next, PipelineStep, Proceed};
use crate::services::{Notify, SystemService};
use crate::utils::constants::*;
use crate::utils::storage::AppStorage;
use crate::utils::utility::{convert_to_string, handle_catch};

/// preActivate: la página actual pasa a ser la anterior
pub struct PagePreActivate {
    storage: AppStorage,
}

impl PagePreActivate {
    pub fn new(storage: AppStorage) -> Self {
        Self { storage }
    }
}

impl PipelineStep for PagePreActivate {
    fn name(&self) -> &'static str {
        "page-pre-activate"
    }

    fn run(&self, instruction: &NavigationInstruction, next: Next) -> Proceed {
        self.storage
            .set_opt(KEY_PREVIOUS_PAGE, self.storage.get(KEY_CURRENT_PAGE));
        self.storage
            .set(KEY_CURRENT_PAGE, instruction.page_key().into());

        next.proceed()
    }
}

/// preRender: chequeo de versión en segundo plano.
///
/// La navegación sigue sin esperar al chequeo. No hay cancelación: si la
/// respuesta llega después de otra navegación, igual escribe `app-version`
/// y puede mostrar el aviso sobre la página nueva.
pub struct PagePreRender {
    storage: AppStorage,
    system: SystemService,
    notify: Notify,
    spawner: Rc<dyn Spawner>,
}

impl PagePreRender {
    pub fn new(storage: AppStorage, system: SystemService, notify: Notify, spawner: Rc<dyn Spawner>) -> Self {
        Self {
            storage,
            system,
            notify,
            spawner,
        }
    }
}

impl PipelineStep for PagePreRender {
    fn name(&self) -> &'static str {
        "page-pre-render"
    }

    fn run(&self, _instruction: &NavigationInstruction, next: Next) -> Proceed {
        let storage = self.storage.clone();
        let system = self.system.clone();
        let notify = self.notify.clone();

        self.spawner
            .spawn(Box::pin(async move { check_version(&storage, &system, &notify).await }));

        next.proceed()
    }
}

/// Compara la versión publicada con la guardada y avisa si cambió.
/// Los errores se registran y se descartan.
pub async fn check_version(storage: &AppStorage, system: &SystemService, notify: &Notify) {
    let manifest = match system.get_version().await {
        Ok(manifest) => manifest,
        Err(e) => {
            handle_catch(&e);
            return;
        }
    };

    let current = convert_to_string(storage.get(KEY_VERSION).as_ref(), None);
    let released = manifest.version_string();

    storage.set_opt(KEY_VERSION, Some(manifest.version).filter(|v| !v.is_null()));

    if current != released {
        log::info!("🆕 [VERSION] {:?} → {:?}", current, released);
        notify.show_msg(UPDATE_RELEASED_MSG, ToastOverrides::default());
    }
}

/// postRender: vuelve arriba al cambiar de página
pub struct PagePostRender {
    viewport: Rc<dyn Viewport>,
}

impl PagePostRender {
    pub fn new(viewport: Rc<dyn Viewport>) -> Self {
        Self { viewport }
    }
}

impl PipelineStep for PagePostRender {
    fn name(&self) -> &'static str {
        "page-post-render"
    }

    fn run(&self, _instruction: &NavigationInstruction, next: Next) -> Proceed {
        self.viewport.scroll_to(0.0, 0.0);
        next.proceed()
    }
}
