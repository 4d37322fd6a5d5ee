// ============================================================================
// CONFIG - Configuración resuelta en tiempo de compilación
// ============================================================================
// Los valores vienen de variables de entorno (o .env vía build.rs) y se
// congelan en el binario WASM. No hay configuración en runtime.
// ============================================================================

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base del API (servicios con perfil por defecto)
    pub url_api: String,
    /// Base del sitio web (manifest.json para el chequeo de versión)
    pub url_web: String,
    /// Título base que se compone con el título de cada ruta
    pub app_title: String,
    pub debug: bool,
    pub notify: NotifyConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotifyConfig {
    /// Tiempo que el toast queda visible (ms)
    pub delay_ms: u32,
    /// Espera antes de mostrar el toast, para no chocar con la animación de página (ms)
    pub display_delay_ms: u32,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            delay_ms: 5000,
            display_delay_ms: 500,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            url_api: "http://localhost:3000".to_string(),
            url_web: String::new(),
            app_title: "Adapop".to_string(),
            debug: true,
            notify: NotifyConfig::default(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            url_api: option_env!("URL_API")
                .map(str::to_string)
                .unwrap_or(defaults.url_api),
            url_web: option_env!("URL_WEB")
                .map(str::to_string)
                .unwrap_or(defaults.url_web),
            app_title: option_env!("APP_TITLE")
                .map(str::to_string)
                .unwrap_or(defaults.app_title),
            debug: parse_or(option_env!("DEBUG"), defaults.debug),
            notify: NotifyConfig {
                delay_ms: parse_or(option_env!("TOAST_DELAY_MS"), defaults.notify.delay_ms),
                display_delay_ms: parse_or(
                    option_env!("TOAST_DISPLAY_DELAY_MS"),
                    defaults.notify.display_delay_ms,
                ),
            },
        }
    }

    /// Nivel de log: debug en desarrollo, warn en producción
    pub fn log_level(&self) -> log::Level {
        if self.debug {
            log::Level::Debug
        } else {
            log::Level::Warn
        }
    }

    /// Compone "<título de ruta> | <título de la app>"
    pub fn page_title(&self, route_title: Option<&str>) -> String {
        match route_title {
            Some(title) if !title.is_empty() => format!("{} | {}", title, self.app_title),
            _ => self.app_title.clone(),
        }
    }
}

fn parse_or<T: std::str::FromStr>(raw: Option<&str>, default: T) -> T {
    raw.and_then(|value| value.trim().parse().ok()).unwrap_or(default)
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
