// ============================================================================
// WEB - Implementaciones de los puertos sobre web_sys / gloo
// ============================================================================

use futures::future::LocalBoxFuture;
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::{History, Navigator, Scheduler, Spawner, Toaster, Viewport};
use crate::models::ToastOptions;

/// `window.location.assign(url)`
#[derive(Clone, Copy, Default)]
pub struct WindowNavigator;

impl Navigator for WindowNavigator {
    fn assign(&self, url: &str) {
        let Some(window) = web_sys::window() else {
            log::error!("❌ [NAV] Sin window, no se puede ir a {}", url);
            return;
        };
        if let Err(e) = window.location().assign(url) {
            log::error!("❌ [NAV] location.assign({}) falló: {:?}", url, e);
        }
    }
}

#[derive(Clone, Copy, Default)]
pub struct WindowViewport;

impl Viewport for WindowViewport {
    fn scroll_to(&self, x: f64, y: f64) {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(x, y);
        }
    }
}

/// `wasm_bindgen_futures::spawn_local`
#[derive(Clone, Copy, Default)]
pub struct LocalSpawner;

impl Spawner for LocalSpawner {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        wasm_bindgen_futures::spawn_local(task);
    }
}

/// `setTimeout` vía gloo_timers
#[derive(Clone, Copy, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        // El timeout debe sobrevivir a este scope
        Timeout::new(delay_ms, task).forget();
    }
}

/// Toaster sobre el plugin jQuery `$.toast` (bs4-toast) que carga la página
#[derive(Clone, Copy, Default)]
pub struct BootstrapToaster;

impl Toaster for BootstrapToaster {
    fn show(&self, options: &ToastOptions) {
        let Some(window) = web_sys::window() else {
            return;
        };

        let js_options = match serde_json::to_string(options)
            .map_err(|e| JsValue::from_str(&e.to_string()))
            .and_then(|json| js_sys::JSON::parse(&json))
        {
            Ok(value) => value,
            Err(e) => {
                log::error!("❌ [TOAST] No se pudieron serializar las opciones: {:?}", e);
                return;
            }
        };

        let jquery = js_sys::Reflect::get(&window, &JsValue::from_str("$")).ok();
        let toast = jquery
            .as_ref()
            .and_then(|jq| js_sys::Reflect::get(jq, &JsValue::from_str("toast")).ok())
            .and_then(|f| f.dyn_into::<js_sys::Function>().ok());

        match (jquery, toast) {
            (Some(jq), Some(toast)) => {
                if let Err(e) = toast.call1(&jq, &js_options) {
                    log::error!("❌ [TOAST] $.toast falló: {:?}", e);
                }
            }
            _ => log::warn!("⚠️ [TOAST] $.toast no está cargado: {}", options.content),
        }
    }
}

/// `history.pushState` / `replaceState` y `document.title`
#[derive(Clone, Copy, Default)]
pub struct BrowserHistory;

impl BrowserHistory {
    fn history() -> Result<web_sys::History, String> {
        web_sys::window()
            .ok_or_else(|| "No window".to_string())?
            .history()
            .map_err(|e| format!("{:?}", e))
    }
}

impl History for BrowserHistory {
    fn current_url(&self) -> String {
        let Some(window) = web_sys::window() else {
            return String::new();
        };
        let location = window.location();
        let path = location.pathname().unwrap_or_default();
        let search = location.search().unwrap_or_default();
        format!("{}{}", path, search)
    }

    fn push_state(&self, url: &str) -> Result<(), String> {
        Self::history()?
            .push_state_with_url(&JsValue::NULL, "", Some(url))
            .map_err(|e| format!("{:?}", e))
    }

    fn replace_state(&self, url: &str) -> Result<(), String> {
        Self::history()?
            .replace_state_with_url(&JsValue::NULL, "", Some(url))
            .map_err(|e| format!("{:?}", e))
    }

    fn set_title(&self, title: &str) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(title);
        }
    }
}
