use anyhow::Context;
use serde::Deserialize;
use serde_yaml::{Mapping, Value};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Location of the config file, relative to the working directory.
pub const CONFIG_PATH: &str = "./httpd.conf";

const KNOWN_KEYS: [&str; 3] = ["listen", "thread_limit", "document_root"];

/// Server settings, built once at startup and shared read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// TCP port bound on all interfaces
    #[serde(rename = "listen")]
    pub listen_port: u16,
    /// Number of worker threads and accept loops
    pub thread_limit: usize,
    /// Directory every request path is resolved under
    pub document_root: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_port: 80,
            thread_limit: 8,
            document_root: PathBuf::from("/var/www/html"),
        }
    }
}

impl Config {
    /// Loads the config file at `path`.
    ///
    /// A missing file is not an error: a warning is logged and the defaults
    /// are returned. Other I/O failures are propagated.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();

        match std::fs::read_to_string(path) {
            Ok(text) => Ok(Self::parse(&text)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!("Config file at {} does not exist, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(e).with_context(|| format!("failed to read config file {}", path.display())),
        }
    }

    /// Parses whitespace-separated `key value` lines.
    ///
    /// Lines that are malformed, name an unknown key, or carry a value of the
    /// wrong type are logged and skipped. Later lines override earlier ones.
    pub fn parse(text: &str) -> Self {
        let mut accepted = Mapping::new();

        for (index, line) in text.lines().enumerate() {
            let line_no = index + 1;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let mut tokens = trimmed.split_whitespace();
            let (Some(key), Some(raw)) = (tokens.next(), tokens.next()) else {
                tracing::warn!(line = line_no, "Malformed config line: {}", trimmed);
                continue;
            };

            if !KNOWN_KEYS.contains(&key) {
                tracing::warn!(line = line_no, "Wrong config line: {} {}", key, raw);
                continue;
            }

            let value = match key {
                "document_root" => Value::String(raw.to_string()),
                _ => scalar(raw),
            };
            let mut single = Mapping::new();
            single.insert(Value::from(key), value.clone());

            match serde_yaml::from_value::<Config>(Value::Mapping(single)) {
                Ok(candidate) if key == "thread_limit" && candidate.thread_limit == 0 => {
                    tracing::warn!(line = line_no, "thread_limit must be at least 1, ignoring");
                }
                Ok(_) => {
                    accepted.insert(Value::from(key), value);
                }
                Err(e) => {
                    tracing::warn!(line = line_no, error = %e, "Invalid value for {}: {}", key, raw);
                }
            }
        }

        // every entry was checked on its own above
        serde_yaml::from_value(Value::Mapping(accepted)).unwrap_or_default()
    }
}

/// Reads a config value as a YAML scalar so numbers come out typed, falling
/// back to a plain string for anything YAML rejects.
fn scalar(raw: &str) -> Value {
    match serde_yaml::from_str::<Value>(raw) {
        Ok(value @ (Value::Number(_) | Value::String(_) | Value::Bool(_))) => value,
        _ => Value::String(raw.to_string()),
    }
}
