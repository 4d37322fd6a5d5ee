// Servicio de ejemplo: plantilla para los servicios reales del API

use std::rc::Rc;

use serde_json::Value;

use crate::config::AppConfig;
use crate::models::StubModel;
use crate::platform::Navigator;
use crate::services::api_client::Transport;
use crate::services::service_utility::{ClientConfig, ServiceClient, ServiceError};
use crate::utils::storage::AppStorage;

#[derive(Clone)]
pub struct StubService {
    client: ServiceClient,
}

impl StubService {
    /// El token se lee del storage al construir el servicio
    pub fn new(
        storage: &AppStorage,
        config: &AppConfig,
        transport: Rc<dyn Transport>,
        navigator: Rc<dyn Navigator>,
    ) -> Self {
        Self {
            client: ServiceClient::new(ClientConfig::default_profile(storage, config), transport, navigator),
        }
    }

    pub async fn create(&self, stub: &StubModel) -> Result<Value, ServiceError> {
        self.client.post_json("endpoint", stub).await
    }
}
