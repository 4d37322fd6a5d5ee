// ============================================================================
// SYSTEM SERVICE - Versión publicada del cliente (para avisar de updates)
// ============================================================================

use std::rc::Rc;

use crate::config::AppConfig;
use crate::models::VersionManifest;
use crate::platform::Navigator;
use crate::services::api_client::Transport;
use crate::services::service_utility::{ClientConfig, ServiceClient, ServiceError};
use crate::utils::constants::REQUESTED_WITH;

const MANIFEST_PATH: &str = "/manifest.json";

#[derive(Clone)]
pub struct SystemService {
    client: ServiceClient,
}

impl SystemService {
    /// Perfil base contra el sitio web (sin token)
    pub fn new(config: &AppConfig, transport: Rc<dyn Transport>, navigator: Rc<dyn Navigator>) -> Self {
        let profile = ClientConfig::base(
            vec![
                ("Accept".to_string(), "application/json".to_string()),
                ("X-Requested-With".to_string(), REQUESTED_WITH.to_string()),
            ],
            &config.url_web,
        );
        Self {
            client: ServiceClient::new(profile, transport, navigator),
        }
    }

    pub async fn get_version(&self) -> Result<VersionManifest, ServiceError> {
        self.client.get_json(MANIFEST_PATH).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::api_client::HttpMethod;
    use crate::test_support::{MockTransport, RecordingNavigator};
    use futures::executor::block_on;
    use serde_json::json;

    #[test]
    fn get_version_hits_manifest_without_token() {
        let transport = MockTransport::default();
        transport.push_response(200, r#"{"version":"1.1"}"#);
        let config = AppConfig {
            url_web: "https://app.example.com".into(),
            ..AppConfig::default()
        };
        let service = SystemService::new(&config, Rc::new(transport.clone()), Rc::new(RecordingNavigator::default()));

        let manifest = block_on(service.get_version()).unwrap();

        assert_eq!(manifest.version, json!("1.1"));
        let sent = &transport.requests()[0];
        assert_eq!(sent.method, HttpMethod::Get);
        assert_eq!(sent.url, "https://app.example.com/manifest.json");
        assert_eq!(sent.header("Authorization"), None);
        assert_eq!(sent.header("Pragma"), Some("no-cache"));
    }
}
