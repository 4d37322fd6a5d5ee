// ============================================================================
// ADAPOP CLIENT - SPA EN RUST PURO (WASM)
// ============================================================================
// - Router: tabla de rutas + pipeline (preActivate → preRender → postRender)
// - Services: perfiles HTTP, manejo uniforme de status, notificaciones
// - State: sesión derivada del storage
// - Platform: puertos hacia el navegador (implementación web solo en wasm32)
// ============================================================================

pub mod config;
pub mod models;
pub mod platform;
pub mod router;
pub mod services;
pub mod state;
pub mod utils;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
pub mod dom;

#[cfg(test)]
mod test_support;

#[cfg(target_arch = "wasm32")]
pub use wasm::*;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::cell::RefCell;

    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    use crate::app::App;
    use crate::config::CONFIG;

    // Variable estática global para mantener la instancia de App
    thread_local! {
        static APP: RefCell<Option<App>> = RefCell::new(None);
    }

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        // Inicializar panic hook para mejor debugging
        console_error_panic_hook::set_once();

        wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
        log::info!("🚀 {} - cliente Rust/WASM", CONFIG.app_title);

        let app = App::new()?;
        app.start()?;

        APP.with(|cell| {
            *cell.borrow_mut() = Some(app);
        });

        // Atrás/adelante del navegador. Listener global: se registra una sola vez aquí.
        if let Some(win) = web_sys::window() {
            let closure = Closure::wrap(Box::new(move |_e: web_sys::PopStateEvent| {
                with_app(|app| app.on_popstate());
            }) as Box<dyn FnMut(web_sys::PopStateEvent)>);

            win.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn with_app<F>(action: F)
    where
        F: FnOnce(&App) -> Result<(), JsValue>,
    {
        APP.with(|cell| match cell.borrow().as_ref() {
            Some(app) => {
                if let Err(e) = action(app) {
                    log::error!("❌ [APP] {:?}", e);
                }
            }
            None => log::warn!("⚠️ [APP] App no está inicializada"),
        });
    }

    /// Navegación programática (llamable desde JavaScript)
    #[wasm_bindgen]
    pub fn navigate(url: &str) {
        with_app(|app| app.navigate(url));
    }

    #[wasm_bindgen]
    pub fn is_authenticated() -> bool {
        APP.with(|cell| {
            cell.borrow()
                .as_ref()
                .map(|app| app.session().is_authenticated())
                .unwrap_or(false)
        })
    }

    /// Tras login/logout: la próxima consulta relee `app-auth` del storage
    #[wasm_bindgen]
    pub fn invalidate_session() {
        with_app(|app| {
            app.session().invalidate();
            Ok(())
        });
    }

    /// Toasts de un payload del API: `{ successes: [...], errors: [...] }`
    #[wasm_bindgen]
    pub fn handle_server_messages(json: &str) {
        let messages = serde_json::from_str::<crate::models::ServerMessages>(json)
            .map_err(|e| log::warn!("⚠️ [NOTIFY] Mensajes inválidos: {}", e))
            .ok();
        with_app(|app| {
            app.notify().handle_server_messages(messages.as_ref());
            Ok(())
        });
    }

    /// Ejemplo de alta contra el API: resuelve con el JSON devuelto
    #[wasm_bindgen]
    pub async fn create_stub(json: String) -> Result<JsValue, JsValue> {
        let value: serde_json::Value =
            serde_json::from_str(&json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let stub = crate::models::StubModel::from_value(Some(&value));

        let service = APP
            .with(|cell| cell.borrow().as_ref().map(|app| app.stub_service()))
            .ok_or_else(|| JsValue::from_str("App no está inicializada"))?;

        let created = service
            .create(&stub)
            .await
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        js_sys::JSON::parse(&created.to_string())
    }
}
