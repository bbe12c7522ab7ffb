use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::collections::HashMap;
use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use webhook_client::{
    WebhookSettings, DEFAULT_HEADER_NAME, HEADER_NAME_KEY, HEADER_VALUE_KEY, WEBHOOK_URL_KEY,
};

/// Setting naming the secrets file.
pub const SECRETS_PATH_KEY: &str = "INSIGHT_SECRETS_PATH";

/// Secrets file used when [`SECRETS_PATH_KEY`] is not set.
pub const DEFAULT_SECRETS_PATH: &str = ".secrets.toml";

/// Named secrets kept outside the process environment.
pub trait SecretStore: Send + Sync {
    fn get(&self, name: &str) -> Option<String>;
}

impl SecretStore for HashMap<String, String> {
    fn get(&self, name: &str) -> Option<String> {
        HashMap::get(self, name).cloned()
    }
}

/// Flat TOML file of secrets:
///
/// ```toml
/// N8N_WEBHOOK_URL = "https://n8n.example.com/webhook/insight"
/// N8N_HEADER_VALUE = "..."
/// ```
///
/// Non-string scalars are kept as their TOML text; tables and arrays are ignored.
#[derive(Debug, Default)]
pub struct FileSecretStore {
    values: HashMap<String, String>,
}

impl FileSecretStore {
    /// Load secrets from `path`. A missing file is an empty store.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content)
                .with_context(|| format!("Failed to parse secrets file {}", path.display())),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No secrets file, using environment only");
                Ok(Self::default())
            }
            Err(e) => {
                Err(e).with_context(|| format!("Failed to read secrets file {}", path.display()))
            }
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let table: toml::Table = toml::from_str(content)?;
        let values = table
            .into_iter()
            .filter_map(|(key, value)| match value {
                toml::Value::String(s) => Some((key, s)),
                toml::Value::Table(_) | toml::Value::Array(_) => None,
                other => Some((key, other.to_string())),
            })
            .collect();
        Ok(Self { values })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl SecretStore for FileSecretStore {
    fn get(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }
}

/// Settings lookup: process environment, then secrets, then a default.
///
/// The environment is captured once; later changes to the process
/// environment are not seen. Blank values count as unset at every step.
pub struct Settings {
    env: HashMap<String, String>,
    secrets: Box<dyn SecretStore>,
}

impl Settings {
    pub fn new(env: HashMap<String, String>, secrets: impl SecretStore + 'static) -> Self {
        Self {
            env,
            secrets: Box::new(secrets),
        }
    }

    /// Snapshot the current process environment.
    pub fn from_process(secrets: impl SecretStore + 'static) -> Self {
        Self::new(env::vars().collect(), secrets)
    }

    /// Resolve `name`, first hit wins.
    pub fn resolve(&self, name: &str, default: Option<&str>) -> Option<String> {
        present(self.env.get(name).cloned())
            .or_else(|| present(self.secrets.get(name)))
            .or_else(|| present(default.map(str::to_string)))
    }
}

fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Application configuration, resolved once at startup
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub webhook: WebhookSettings,
}

impl Config {
    /// Load configuration from the environment and the secrets file
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let secrets_path = env::var(SECRETS_PATH_KEY)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_SECRETS_PATH));
        let secrets = FileSecretStore::load(&secrets_path)?;
        tracing::debug!(count = secrets.len(), "Secrets loaded");

        Self::from_settings(&Settings::from_process(secrets))
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let port = settings
            .resolve("PORT", Some("8080"))
            .unwrap_or_default()
            .parse::<u16>()
            .context("PORT must be a valid number")?;

        let webhook = WebhookSettings {
            url: settings.resolve(WEBHOOK_URL_KEY, None),
            header_name: settings
                .resolve(HEADER_NAME_KEY, Some(DEFAULT_HEADER_NAME))
                .unwrap_or_else(|| DEFAULT_HEADER_NAME.to_string()),
            header_value: settings.resolve(HEADER_VALUE_KEY, None),
        };

        if !webhook.is_configured() {
            tracing::warn!(
                "{} / {} not set; live runs will fail until configured",
                WEBHOOK_URL_KEY,
                HEADER_VALUE_KEY
            );
        }

        Ok(Self { port, webhook })
    }
}
