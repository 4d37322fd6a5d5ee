// ============================================================================
// APP - Composición de la app sobre los adaptadores del navegador
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::config::CONFIG;
use crate::dom::Loader;
use crate::platform::web::{
    BootstrapToaster, BrowserHistory, LocalSpawner, TimeoutScheduler, WindowNavigator, WindowViewport,
};
use crate::platform::{with_overlay, Navigator, Overlay, Scheduler};
use crate::router::{default_routes, Pipeline, PipelineSlot, PagePostRender, PagePreActivate, PagePreRender, Router};
use crate::services::api_client::{GlooTransport, Transport};
use crate::services::{Notify, StubService, SystemService};
use crate::state::AppSession;
use crate::utils::constants::LOADER_HIDE_DELAY_MS;
use crate::utils::storage::{AppStorage, BrowserStorage};

/// Aplicación principal
pub struct App {
    router: Router,
    session: AppSession,
    storage: AppStorage,
    notify: Notify,
    transport: Rc<dyn Transport>,
    navigator: Rc<dyn Navigator>,
    scheduler: Rc<dyn Scheduler>,
    loader: Rc<dyn Overlay>,
}

impl App {
    /// Crear nueva aplicación
    pub fn new() -> Result<Self, JsValue> {
        let config = CONFIG.clone();
        let storage = AppStorage::new(Rc::new(BrowserStorage));
        let navigator: Rc<dyn Navigator> = Rc::new(WindowNavigator);
        let transport: Rc<dyn Transport> = Rc::new(GlooTransport);
        let scheduler: Rc<dyn Scheduler> = Rc::new(TimeoutScheduler);
        let notify = Notify::new(Rc::new(BootstrapToaster), scheduler.clone(), config.notify.clone());
        let system = SystemService::new(&config, transport.clone(), navigator.clone());

        let pipeline = Pipeline::new()
            .add_step(PipelineSlot::PreActivate, Rc::new(PagePreActivate::new(storage.clone())))
            .add_step(
                PipelineSlot::PreRender,
                Rc::new(PagePreRender::new(storage.clone(), system, notify.clone(), Rc::new(LocalSpawner))),
            )
            .add_step(PipelineSlot::PostRender, Rc::new(PagePostRender::new(Rc::new(WindowViewport))));

        let router = Router::new(default_routes(), pipeline, Rc::new(BrowserHistory), config);

        Ok(Self {
            router,
            session: AppSession::new(storage.clone()),
            storage,
            notify,
            transport,
            navigator,
            scheduler,
            loader: Rc::new(Loader),
        })
    }

    /// Primera navegación, sobre la URL con la que se cargó la página
    pub fn start(&self) -> Result<(), JsValue> {
        log::info!("🔐 [APP] Autenticado: {}", self.session.is_authenticated());
        self.with_loader(|router| router.load_current().map(|_| ()))
    }

    /// Navegación iniciada por la app (links, código)
    pub fn navigate(&self, url: &str) -> Result<(), JsValue> {
        self.with_loader(|router| router.push(url).map(|_| ()))
    }

    /// El navegador ya cambió la URL (atrás/adelante)
    pub fn on_popstate(&self) -> Result<(), JsValue> {
        self.with_loader(|router| router.load_current().map(|_| ()))
    }

    pub fn session(&self) -> &AppSession {
        &self.session
    }

    pub fn notify(&self) -> &Notify {
        &self.notify
    }

    /// Se arma en cada uso para leer el token vigente
    pub fn stub_service(&self) -> StubService {
        StubService::new(&self.storage, &CONFIG, self.transport.clone(), self.navigator.clone())
    }

    fn with_loader<F>(&self, navigation: F) -> Result<(), JsValue>
    where
        F: FnOnce(&Router) -> Result<(), crate::router::RouterError>,
    {
        with_overlay(self.loader.clone(), self.scheduler.as_ref(), LOADER_HIDE_DELAY_MS, || {
            navigation(&self.router)
        })
        .map_err(|e| {
            log::error!("❌ [APP] Error de navegación: {}", e);
            JsValue::from_str(&e.to_string())
        })
    }
}
