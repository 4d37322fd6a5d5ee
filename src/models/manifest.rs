use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utils::utility::convert_to_string;

/// Respuesta de `GET /manifest.json`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VersionManifest {
    /// Opaco: se compara por igualdad tras convertir a string
    #[serde(default)]
    pub version: Value,
}

impl VersionManifest {
    pub fn version_string(&self) -> Option<String> {
        convert_to_string(Some(&self.version), None)
    }
}
