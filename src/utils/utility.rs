// ============================================================================
// UTILITY - Helpers puros usados en toda la app
// ============================================================================
// Convención de valores: `None` = undefined, `Some(Value::Null)` = null.
// "Presente" significa definido y no null.
// ============================================================================

use std::fmt::Display;

use chrono::Datelike;
use serde_json::{Map, Value};

/// Definido (aunque sea null)
pub fn is_defined(value: Option<&Value>) -> bool {
    value.is_some()
}

/// Ni undefined ni null
pub fn is_present(value: Option<&Value>) -> bool {
    matches!(value, Some(v) if !v.is_null())
}

/// Presente y no vacío
pub fn is_string_present(value: Option<&str>) -> bool {
    matches!(value, Some(s) if !s.is_empty())
}

/// Convierte a string; `def` si el valor no está presente
pub fn convert_to_string(value: Option<&Value>, def: Option<String>) -> Option<String> {
    match value {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Null) | None => def,
        Some(Value::Number(n)) => Some(number_to_string(n)),
        Some(other) => Some(other.to_string()),
    }
}

// Los floats enteros se imprimen sin decimales: 2.0 → "2"
fn number_to_string(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.is_finite() && f.fract() == 0.0 => {
            if f == 0.0 {
                "0".to_string()
            } else {
                format!("{:.0}", f)
            }
        }
        Some(f) if n.is_f64() => f.to_string(),
        _ => n.to_string(),
    }
}

/// Convierte a número; `def` si no está presente o no es numérico
pub fn convert_to_number(value: Option<&Value>, def: Option<f64>) -> Option<f64> {
    let number = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => parse_number(s),
        Some(Value::Bool(b)) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    };

    number.filter(|n| !n.is_nan()).or(def)
}

// Un string vacío o solo espacios vale 0, como en la coerción numérica del navegador
fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    if let Some(n) = parse_radix_literal(trimmed) {
        return n;
    }
    match trimmed {
        "Infinity" | "+Infinity" => Some(f64::INFINITY),
        "-Infinity" => Some(f64::NEG_INFINITY),
        _ if trimmed.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') => None,
        _ => trimmed.parse().ok(),
    }
}

// `0x10`, `0o17`, `0b101`; sin signo. `None` si no lleva prefijo de base
fn parse_radix_literal(raw: &str) -> Option<Option<f64>> {
    let prefix = raw.get(..2)?.to_ascii_lowercase();
    let radix = match prefix.as_str() {
        "0x" => 16,
        "0o" => 8,
        "0b" => 2,
        _ => return None,
    };
    let digits = &raw[2..];
    if digits.is_empty() {
        return Some(None);
    }

    let parsed = digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    });
    Some(parsed)
}

/// Quita las claves que empiezan por `_` y ordena el resto ascendentemente.
/// Los valores que no son objeto se devuelven tal cual.
pub fn clean_private_properties(obj: &Value) -> Value {
    let Value::Object(map) = obj else {
        return obj.clone();
    };

    let mut keys: Vec<&String> = map.keys().filter(|k| !k.starts_with('_')).collect();
    keys.sort();

    let ordered: Map<String, Value> = keys
        .into_iter()
        .map(|k| (k.clone(), map[k.as_str()].clone()))
        .collect();

    Value::Object(ordered)
}

/// Copia del objeto; None si no está presente
pub fn clone_object(target: Option<&Value>) -> Option<Value> {
    target.filter(|v| !v.is_null()).cloned()
}

/// `{ a: 1, b: "test" }` → `a=1&b=test`.
/// Conserva el orden de las claves, omite privadas y valores no presentes.
pub fn convert_object_to_query_string(target: Option<&Value>) -> Option<String> {
    if !is_present(target) {
        return None;
    }

    let Some(Value::Object(map)) = target else {
        return Some(String::new());
    };

    let query = map
        .iter()
        .filter(|(key, value)| !key.starts_with('_') && !value.is_null())
        .filter_map(|(key, value)| {
            convert_to_string(Some(value), None)
                .map(|s| format!("{}={}", key, urlencoding::encode(&s)))
        })
        .collect::<Vec<_>>()
        .join("&");

    Some(query)
}

/// Path más querystring; sin `?` si no hay parámetros
pub fn generate_url(path: &str, params: Option<&Value>) -> String {
    match convert_object_to_query_string(params) {
        Some(qs) if !qs.is_empty() => format!("{}?{}", path, qs),
        _ => path.to_string(),
    }
}

/// Serializa a JSON, opcionalmente sin propiedades privadas
pub fn serialize_object(target: Option<&Value>, clean_target: bool) -> Option<String> {
    let snapshot = clone_object(target)?;
    let snapshot = if clean_target {
        clean_private_properties(&snapshot)
    } else {
        snapshot
    };
    Some(snapshot.to_string())
}

/// Trunca a `target_length` caracteres, con "..." opcional
pub fn truncate_string(input: &str, target_length: usize, add_ellipsis: bool) -> String {
    if input.chars().count() <= target_length {
        return input.to_string();
    }

    let truncated: String = input.chars().take(target_length).collect();
    if add_ellipsis {
        format!("{}...", truncated)
    } else {
        truncated
    }
}

/// Valor del constructor de un modelo: override > valor > default
pub fn process_model_property<T>(value: Option<T>, default: Option<T>, override_value: Option<T>) -> Option<T> {
    match value {
        Some(v) => override_value.or(Some(v)),
        None => default,
    }
}

/// Timestamp en milisegundos
pub fn generate_timestamp() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

pub fn generate_uuid() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Número aleatorio en `[0, max)`; por defecto `max` es el timestamp actual
pub fn generate_random_number(max: Option<u64>) -> u64 {
    let max = max.unwrap_or_else(|| generate_timestamp().max(1) as u64);
    if max == 0 {
        return 0;
    }
    (uuid::Uuid::new_v4().as_u128() % u128::from(max)) as u64
}

pub fn get_current_year() -> i32 {
    chrono::Utc::now().year()
}

/// Destino común para errores de futures que no se propagan
pub fn handle_catch(e: &dyn Display) {
    log::error!(target: "app", "❌ [CATCH] {}", e);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn is_defined_distinguishes_undefined_from_null() {
        assert!(!is_defined(None));
        assert!(is_defined(Some(&Value::Null)));
    }

    #[test]
    fn is_present_rejects_undefined_and_null() {
        assert!(!is_present(None));
        assert!(!is_present(Some(&Value::Null)));
        assert!(is_present(Some(&json!("null"))));
        assert!(is_present(Some(&json!(0))));
        assert!(is_present(Some(&json!(""))));
    }

    #[test]
    fn is_string_present_checks_emptiness() {
        assert!(!is_string_present(Some("")));
        assert!(!is_string_present(None));
        assert!(is_string_present(Some("a")));
    }

    #[test]
    fn convert_to_string_handles_numbers_and_absence() {
        assert_eq!(convert_to_string(Some(&json!(10)), None), Some("10".to_string()));
        assert_eq!(convert_to_string(Some(&json!("1.1")), None), Some("1.1".to_string()));
        assert_eq!(convert_to_string(None, None), None);
        assert_eq!(
            convert_to_string(Some(&Value::Null), Some("x".to_string())),
            Some("x".to_string())
        );
    }

    #[test]
    fn convert_to_number_parses_and_defaults() {
        assert_eq!(convert_to_number(Some(&json!("10.5")), None), Some(10.5));
        assert_eq!(convert_to_number(Some(&Value::Null), Some(33.0)), Some(33.0));
        assert_eq!(convert_to_number(Some(&Value::Null), None), None);
        assert_eq!(convert_to_number(Some(&json!("abc")), Some(1.0)), Some(1.0));
        assert_eq!(convert_to_number(Some(&json!("  ")), None), Some(0.0));
        assert_eq!(convert_to_number(Some(&json!("1e3")), None), Some(1000.0));
        assert_eq!(convert_to_number(Some(&json!(7)), None), Some(7.0));
    }

    #[test]
    fn whole_floats_print_without_decimals() {
        assert_eq!(convert_to_string(Some(&json!(2.0)), None).as_deref(), Some("2"));
        assert_eq!(convert_to_string(Some(&json!(-0.0)), None).as_deref(), Some("0"));
        assert_eq!(convert_to_string(Some(&json!(2.5)), None).as_deref(), Some("2.5"));

        let page = convert_to_number(Some(&json!("2")), None).unwrap();
        assert_eq!(generate_url("/list", Some(&json!({ "page": page }))), "/list?page=2");
    }

    #[test]
    fn convert_to_number_accepts_radix_prefixes() {
        assert_eq!(convert_to_number(Some(&json!("0x10")), None), Some(16.0));
        assert_eq!(convert_to_number(Some(&json!("0O17")), None), Some(15.0));
        assert_eq!(convert_to_number(Some(&json!(" 0b101 ")), None), Some(5.0));
        assert_eq!(convert_to_number(Some(&json!("0x")), Some(-1.0)), Some(-1.0));
        assert_eq!(convert_to_number(Some(&json!("0b102")), None), None);
        assert_eq!(convert_to_number(Some(&json!("-0x10")), None), None);
    }

    #[test]
    fn clean_private_properties_sorts_and_strips() {
        let cleaned = clean_private_properties(&json!({ "c": 3, "_b": 2, "a": 1 }));
        assert_eq!(cleaned.to_string(), r#"{"a":1,"c":3}"#);

        let cleaned = clean_private_properties(&json!({ "a": 1, "_b": 2 }));
        assert_eq!(cleaned.to_string(), r#"{"a":1}"#);
    }

    #[test]
    fn clone_object_copies_present_values() {
        assert_eq!(clone_object(Some(&json!({ "a": 1 }))), Some(json!({ "a": 1 })));
        assert_eq!(clone_object(Some(&Value::Null)), None);
        assert_eq!(clone_object(None), None);
    }

    #[test]
    fn query_string_keeps_order_and_encodes() {
        let qs = convert_object_to_query_string(Some(&json!({ "a": 1, "b": "test" })));
        assert_eq!(qs.as_deref(), Some("a=1&b=test"));

        let qs = convert_object_to_query_string(Some(&json!({ "z": "a b&c", "_p": 1, "n": null, "a": 2 })));
        assert_eq!(qs.as_deref(), Some("z=a%20b%26c&a=2"));

        assert_eq!(convert_object_to_query_string(None), None);
    }

    #[test]
    fn generate_url_appends_query_only_when_needed() {
        assert_eq!(generate_url("/path", Some(&json!({ "a": 1, "b": "test" }))), "/path?a=1&b=test");
        assert_eq!(generate_url("/path", None), "/path");
        assert_eq!(generate_url("/path", Some(&json!({}))), "/path");
    }

    #[test]
    fn serialize_object_optionally_cleans() {
        let target = json!({ "a": 1, "_b": "test" });
        assert_eq!(serialize_object(Some(&target), false).as_deref(), Some(r#"{"a":1,"_b":"test"}"#));
        assert_eq!(serialize_object(Some(&target), true).as_deref(), Some(r#"{"a":1}"#));
        assert_eq!(serialize_object(None, true), None);
    }

    #[test]
    fn truncate_string_respects_length() {
        assert_eq!(truncate_string("myLongString", 6, true), "myLong...");
        assert_eq!(truncate_string("myLongString", 6, false), "myLong");
        assert_eq!(truncate_string("short", 6, true), "short");
    }

    #[test]
    fn process_model_property_precedence() {
        assert_eq!(process_model_property(Some(1), Some(0), None), Some(1));
        assert_eq!(process_model_property(Some(1), Some(0), Some(9)), Some(9));
        assert_eq!(process_model_property(None, Some(0), Some(9)), Some(0));
    }

    #[test]
    fn random_number_stays_below_max() {
        for _ in 0..50 {
            assert!(generate_random_number(Some(10)) < 10);
        }
        assert_eq!(generate_random_number(Some(0)), 0);
    }

    #[test]
    fn generators_return_values() {
        assert!(generate_timestamp() > 0);
        assert_eq!(generate_uuid().len(), 36);
        assert_ne!(generate_uuid(), generate_uuid());
        assert!(get_current_year() >= 2024);
    }
}
