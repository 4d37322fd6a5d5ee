// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// Transporte crudo: envía una request ya armada y devuelve status + body.
// Headers por defecto, interceptores y manejo de status viven en
// service_utility.
// ============================================================================

use futures::future::LocalBoxFuture;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Valor del primer header con ese nombre (sin distinguir mayúsculas)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub url: String,
    pub body: String,
}

/// La request no obtuvo respuesta (red caída, CORS, DNS...)
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("Network error: {0}")]
pub struct TransportError(pub String);

pub trait Transport {
    fn send(&self, request: HttpRequest) -> LocalBoxFuture<'static, Result<HttpResponse, TransportError>>;
}

/// Transporte fetch del navegador vía gloo-net
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Default)]
pub struct GlooTransport;

#[cfg(target_arch = "wasm32")]
impl Transport for GlooTransport {
    fn send(&self, request: HttpRequest) -> LocalBoxFuture<'static, Result<HttpResponse, TransportError>> {
        use gloo_net::http::Request;

        Box::pin(async move {
            let builder = match request.method {
                HttpMethod::Get => Request::get(&request.url),
                HttpMethod::Post => Request::post(&request.url),
                HttpMethod::Put => Request::put(&request.url),
                HttpMethod::Delete => Request::delete(&request.url),
            };
            let builder = request
                .headers
                .iter()
                .fold(builder, |builder, (key, value)| builder.header(key, value));

            let response = match request.body {
                Some(body) => builder
                    .body(body)
                    .map_err(|e| TransportError(e.to_string()))?
                    .send()
                    .await,
                None => builder.send().await,
            }
            .map_err(|e| TransportError(e.to_string()))?;

            let status = response.status();
            let url = response.url();
            let body = response
                .text()
                .await
                .map_err(|e| TransportError(format!("No se pudo leer el body: {}", e)))?;

            Ok(HttpResponse { status, url, body })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_lookup_is_case_insensitive() {
        let request = HttpRequest {
            method: HttpMethod::Get,
            url: "/x".into(),
            headers: vec![("Accept".into(), "application/json".into())],
            body: None,
        };
        assert_eq!(request.header("accept"), Some("application/json"));
        assert_eq!(request.header("Pragma"), None);
    }

    #[test]
    fn transport_error_display() {
        assert_eq!(TransportError("offline".into()).to_string(), "Network error: offline");
    }
}
