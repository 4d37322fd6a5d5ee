use serde::{Deserialize, Serialize};

/// Mensajes que el API adjunta a sus payloads
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerMessages {
    #[serde(default)]
    pub successes: Vec<String>,
    #[serde(default)]
    pub errors: Vec<String>,
}
