use std::env;
use std::fs;
use std::path::Path;

/// Claves que `AppConfig::from_env` lee con `option_env!`
const CONFIG_KEYS: &[&str] = &[
    "URL_API",
    "URL_WEB",
    "APP_TITLE",
    "DEBUG",
    "TOAST_DELAY_MS",
    "TOAST_DISPLAY_DELAY_MS",
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");

    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let env_file = Path::new(".env");
    let contents = match fs::read_to_string(env_file) {
        Ok(contents) => contents,
        Err(_) => {
            println!("cargo:warning=No .env file found. Using compiled-in defaults for URL_API/URL_WEB.");
            return;
        }
    };

    for (key, value) in parse_env(&contents) {
        // Las variables del entorno real tienen prioridad sobre .env
        if env::var(key).is_ok() {
            continue;
        }
        if !CONFIG_KEYS.contains(&key) {
            println!("cargo:warning=Ignoring unknown .env key '{}'", key);
            continue;
        }
        println!("cargo:rustc-env={}={}", key, value);
    }
}

/// Parsear líneas KEY=VALUE, ignorando comentarios y comillas envolventes
fn parse_env(contents: &str) -> Vec<(&str, &str)> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim(), value.trim().trim_matches('"')))
        .collect()
}
