// ============================================================================
// STUB MODEL - Modelo de ejemplo para el servicio de creación
// ============================================================================

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utils::utility::{is_present, process_model_property};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StubModel {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<u32>,
}

impl StubModel {
    /// Construir desde un objeto JSON arbitrario.
    /// Campos ausentes, null o de tipo incorrecto conservan el default.
    pub fn from_value(model: Option<&Value>) -> Self {
        let mut stub = Self::default();

        if let Some(model) = model.filter(|m| is_present(Some(m))) {
            stub.first_name = process_model_property(
                model.get("firstName").and_then(Value::as_str).map(str::to_string),
                stub.first_name,
                None,
            );
            stub.last_name = process_model_property(
                model.get("lastName").and_then(Value::as_str).map(str::to_string),
                stub.last_name,
                None,
            );
            stub.age = process_model_property(
                model
                    .get("age")
                    .and_then(Value::as_u64)
                    .and_then(|age| u32::try_from(age).ok()),
                stub.age,
                None,
            );
        }

        stub
    }
}
