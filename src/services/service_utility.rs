// ============================================================================
// SERVICE UTILITY - Perfiles de cliente HTTP y manejo uniforme de respuestas
// ============================================================================
// Cadena de cada llamada:
//   send → handle_network_failure → response_filter → response_return
// Sin reintentos ni backoff: el primer fallo es terminal y redirige.
// ============================================================================

use std::fmt::Debug;
use std::rc::Rc;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::config::AppConfig;
use crate::platform::Navigator;
use crate::services::api_client::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};
use crate::utils::constants::*;
use crate::utils::storage::AppStorage;

const LOG_TARGET: &str = "app-service";

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ServiceError {
    #[error("HTTP 401: redirected to /logout")]
    Unauthorized,
    #[error("HTTP 403: redirected to /unauthorized")]
    Forbidden,
    #[error("HTTP 500: redirected to /system-error")]
    ServerError,
    #[error("Response status was unhandled: {0}")]
    Unhandled(u16),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Request build error: {0}")]
    Build(String),
}

/// Qué hacer con un status HTTP
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseAction {
    Parse,
    Redirect(&'static str),
    Unhandled,
}

/// Tabla status → acción
pub fn classify_status(status: u16) -> ResponseAction {
    match status {
        200 | 250 => ResponseAction::Parse,
        401 => ResponseAction::Redirect(ROUTE_LOGOUT),
        403 => ResponseAction::Redirect(ROUTE_UNAUTHORIZED),
        500 => ResponseAction::Redirect(ROUTE_SYSTEM_ERROR),
        _ => ResponseAction::Unhandled,
    }
}

fn rejection(status: u16) -> ServiceError {
    match status {
        401 => ServiceError::Unauthorized,
        403 => ServiceError::Forbidden,
        500 => ServiceError::ServerError,
        other => ServiceError::Unhandled(other),
    }
}

/// Body ya interpretado
#[derive(Clone, Debug, PartialEq)]
pub enum Payload {
    Json(Value),
    Text(String),
}

impl Payload {
    pub fn into_json(self) -> Value {
        match self {
            Payload::Json(value) => value,
            Payload::Text(text) => Value::String(text),
        }
    }
}

/// Interpreta la respuesta o redirige según su status
pub fn response_filter(
    navigator: &dyn Navigator,
    response: &HttpResponse,
    is_json: bool,
) -> Result<Payload, ServiceError> {
    log::info!(target: LOG_TARGET, "🌐 [HTTP] [{}] {} (json: {})", response.status, response.url, is_json);

    match classify_status(response.status) {
        ResponseAction::Parse if is_json => serde_json::from_str(&response.body)
            .map(Payload::Json)
            .map_err(|e| ServiceError::Parse(e.to_string())),
        ResponseAction::Parse => Ok(Payload::Text(response.body.clone())),
        ResponseAction::Redirect(target) => {
            log::warn!(target: LOG_TARGET, "↪️ [HTTP] {} → {}", response.status, target);
            navigator.assign(target);
            Err(rejection(response.status))
        }
        ResponseAction::Unhandled => {
            log::error!(target: LOG_TARGET, "❌ [HTTP] Response status was unhandled: {} {}", response.status, response.url);
            Err(rejection(response.status))
        }
    }
}

/// Sin respuesta: se trata igual que una sesión inválida
pub fn handle_network_failure(navigator: &dyn Navigator, error: &TransportError) -> ServiceError {
    log::error!(target: LOG_TARGET, "❌ [HTTP] handle_network_failure: {}", error);
    navigator.assign(ROUTE_LOGOUT);
    ServiceError::Network(error.0.clone())
}

/// Último eslabón: deja rastro del payload y lo devuelve
pub fn response_return<T: Debug>(data: T) -> T {
    log::info!(target: LOG_TARGET, "📦 [HTTP] response_return: {:?}", data);
    data
}

/// Headers por defecto + base URL de un cliente
#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    pub headers: Vec<(String, String)>,
}

impl ClientConfig {
    /// Perfil base: headers dados, base URL y anti-caché en GET
    pub fn base(headers: Vec<(String, String)>, base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            headers,
        }
    }

    /// Perfil por defecto: JSON + bearer token del storage + marca de origen
    pub fn default_profile(storage: &AppStorage, config: &AppConfig) -> Self {
        let token = storage.token().unwrap_or_default();
        Self::base(
            vec![
                ("Accept".to_string(), "application/json".to_string()),
                ("Authorization".to_string(), format!("Bearer {}", token)),
                ("X-Requested-With".to_string(), REQUESTED_WITH.to_string()),
            ],
            &config.url_api,
        )
    }

    /// Une base y path con un solo `/`; las URLs absolutas pasan tal cual
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") || self.base_url.is_empty() {
            return path.to_string();
        }
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Arma la request con los defaults y pasa el interceptor
    pub fn build_request(&self, method: HttpMethod, path: &str, body: Option<String>) -> HttpRequest {
        let mut request = HttpRequest {
            method,
            url: self.url_for(path),
            headers: self.headers.clone(),
            body,
        };
        if request.body.is_some() && request.header("Content-Type").is_none() {
            request
                .headers
                .push(("Content-Type".to_string(), "application/json".to_string()));
        }
        intercept_request(&mut request);
        request
    }
}

/// Anti-caché solo en GET
pub fn intercept_request(request: &mut HttpRequest) {
    if request.method != HttpMethod::Get {
        return;
    }
    request.headers.extend([
        ("Cache-Control".to_string(), "no-cache".to_string()),
        ("Pragma".to_string(), "no-cache".to_string()),
        ("Expires".to_string(), CACHE_EXPIRES.to_string()),
    ]);
}

/// Cliente configurado: perfil + transporte + navegador para redirecciones
#[derive(Clone)]
pub struct ServiceClient {
    config: ClientConfig,
    transport: Rc<dyn Transport>,
    navigator: Rc<dyn Navigator>,
}

impl ServiceClient {
    pub fn new(config: ClientConfig, transport: Rc<dyn Transport>, navigator: Rc<dyn Navigator>) -> Self {
        Self {
            config,
            transport,
            navigator,
        }
    }

    pub async fn fetch(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<String>,
        is_json: bool,
    ) -> Result<Payload, ServiceError> {
        let request = self.config.build_request(method, path, body);
        log::debug!(target: LOG_TARGET, "➡️ [HTTP] {} {}", request.method.as_str(), request.url);

        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(e) => return Err(handle_network_failure(self.navigator.as_ref(), &e)),
        };

        let payload = response_filter(self.navigator.as_ref(), &response, is_json)?;
        Ok(response_return(payload))
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ServiceError> {
        let payload = self.fetch(HttpMethod::Get, path, None, true).await?;
        serde_json::from_value(payload.into_json()).map_err(|e| ServiceError::Parse(e.to_string()))
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ServiceError> {
        let body = serde_json::to_string(body).map_err(|e| ServiceError::Build(e.to_string()))?;
        let payload = self.fetch(HttpMethod::Post, path, Some(body), true).await?;
        serde_json::from_value(payload.into_json()).map_err(|e| ServiceError::Parse(e.to_string()))
    }
}
