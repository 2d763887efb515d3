use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port(), worker_threads: Some(DEFAULT_WORKER_THREADS) }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `compact` or `json`
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { format: default_log_format() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// Reject items whose `Store_ID` does not name an existing store.
    #[serde(default = "default_item_requires_store")]
    pub item_requires_store: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self { item_requires_store: default_item_requires_store() }
    }
}

const DEFAULT_WORKER_THREADS: usize = 4;

fn default_host() -> String { "127.0.0.1".into() }
fn default_port() -> u16 { 5000 }
fn default_log_format() -> String { "compact".into() }
fn default_item_requires_store() -> bool { true }

pub fn load_from_str(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Load the config file named by `CONFIG_PATH` (default `config.toml`)
    /// with process environment overrides. See [`AppConfig::load_or_env_from`].
    pub fn load_or_env() -> Result<Self> {
        let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
        Self::load_or_env_from(Path::new(&path), |k| std::env::var(k).ok())
    }

    /// Load `path` if it exists; otherwise start from defaults and fill in
    /// `SERVER_HOST`, `SERVER_PORT`, `TOKIO_WORKER_THREADS` and `LOG_FORMAT`
    /// through `lookup`. A file that exists but fails to parse or validate is
    /// an error.
    pub fn load_or_env_from<F>(path: &Path, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            load_from_str(&content).map_err(|e| anyhow!("{}: {e}", path.display()))?
        } else {
            let mut cfg = AppConfig::default();
            cfg.apply_env_overrides(lookup);
            cfg
        };
        cfg.normalize_and_validate()
            .map_err(|e| anyhow!("{}: {e}", path.display()))?;
        Ok(cfg)
    }

    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("SERVER_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("SERVER_PORT").and_then(|p| p.parse::<u16>().ok()) {
            self.server.port = port;
        }
        if let Some(w) = lookup("TOKIO_WORKER_THREADS").and_then(|v| v.parse::<usize>().ok()) {
            self.server.worker_threads = Some(w);
        }
        if let Some(fmt) = lookup("LOG_FORMAT") {
            self.logging.format = fmt;
        }
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.logging.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = default_host();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be within 1..=65535"));
        }
        match self.worker_threads {
            Some(w) if w > 0 => {}
            _ => self.worker_threads = Some(DEFAULT_WORKER_THREADS),
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> Result<()> {
        self.log_format().map(|_| ())
    }

    pub fn log_format(&self) -> Result<LogFormat> {
        match self.format.trim().to_ascii_lowercase().as_str() {
            "compact" | "" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            other => Err(anyhow!("logging.format must be `compact` or `json`, got `{other}`")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let mut cfg = load_from_str("").unwrap();
        cfg.normalize_and_validate().unwrap();
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 5000);
        assert_eq!(cfg.server.worker_threads, Some(4));
        assert_eq!(cfg.logging.log_format().unwrap(), LogFormat::Compact);
        assert!(cfg.catalog.item_requires_store);
    }

    #[test]
    fn parses_all_sections() {
        let raw = r#"
            [server]
            host = "0.0.0.0"
            port = 8088
            worker_threads = 2

            [logging]
            format = "JSON"

            [catalog]
            item_requires_store = false
        "#;
        let mut cfg = load_from_str(raw).unwrap();
        cfg.normalize_and_validate().unwrap();
        assert_eq!(cfg.server.bind_addr(), "0.0.0.0:8088");
        assert_eq!(cfg.server.worker_threads, Some(2));
        assert_eq!(cfg.logging.log_format().unwrap(), LogFormat::Json);
        assert!(!cfg.catalog.item_requires_store);
    }

    #[test]
    fn normalizes_host_and_threads() {
        let mut cfg = load_from_str("[server]\nhost = \"  \"\nport = 9000\nworker_threads = 0\n").unwrap();
        cfg.normalize_and_validate().unwrap();
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.worker_threads, Some(4));
    }

    #[test]
    fn rejects_port_zero_and_unknown_log_format() {
        let mut cfg = load_from_str("[server]\nport = 0\n").unwrap();
        assert!(cfg.normalize_and_validate().is_err());

        let mut cfg = load_from_str("[logging]\nformat = \"xml\"\n").unwrap();
        assert!(cfg.normalize_and_validate().is_err());
    }

    #[test]
    fn rejects_out_of_range_port_at_parse_time() {
        assert!(load_from_str("[server]\nport = 70000\n").is_err());
    }

    #[test]
    fn env_overrides_apply() {
        let mut cfg = AppConfig::default();
        cfg.apply_env_overrides(|k| match k {
            "SERVER_HOST" => Some("10.0.0.1".into()),
            "SERVER_PORT" => Some("7000".into()),
            "TOKIO_WORKER_THREADS" => Some("8".into()),
            "LOG_FORMAT" => Some("json".into()),
            _ => None,
        });
        cfg.normalize_and_validate().unwrap();
        assert_eq!(cfg.server.bind_addr(), "10.0.0.1:7000");
        assert_eq!(cfg.server.worker_threads, Some(8));
        assert_eq!(cfg.logging.log_format().unwrap(), LogFormat::Json);
    }

    #[test]
    fn unparsable_env_port_is_ignored() {
        let mut cfg = AppConfig::default();
        cfg.apply_env_overrides(|k| (k == "SERVER_PORT").then(|| "not-a-port".to_string()));
        assert_eq!(cfg.server.port, 5000);
    }

    fn temp_config(contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("catalog_config_{}.toml", uuid::Uuid::new_v4()));
        std::fs::write(&path, contents).expect("write temp config");
        path
    }

    fn env_lookup(k: &str) -> Option<String> {
        match k {
            "SERVER_HOST" => Some("10.0.0.1".into()),
            "SERVER_PORT" => Some("7000".into()),
            "LOG_FORMAT" => Some("json".into()),
            _ => None,
        }
    }

    #[test]
    fn load_or_env_reads_existing_file() {
        let path = temp_config("[server]\nport = 6001\n\n[catalog]\nitem_requires_store = false\n");
        let cfg = AppConfig::load_or_env_from(&path, env_lookup).unwrap();
        // file wins; env overrides only apply when there is no file
        assert_eq!(cfg.server.bind_addr(), "127.0.0.1:6001");
        assert_eq!(cfg.logging.log_format().unwrap(), LogFormat::Compact);
        assert!(!cfg.catalog.item_requires_store);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn load_or_env_falls_back_to_env_without_file() {
        let path = std::env::temp_dir().join(format!("catalog_missing_{}.toml", uuid::Uuid::new_v4()));
        let cfg = AppConfig::load_or_env_from(&path, env_lookup).unwrap();
        assert_eq!(cfg.server.bind_addr(), "10.0.0.1:7000");
        assert_eq!(cfg.server.worker_threads, Some(4));
        assert_eq!(cfg.logging.log_format().unwrap(), LogFormat::Json);
        assert!(cfg.catalog.item_requires_store);

        let cfg = AppConfig::load_or_env_from(&path, |_| None).unwrap();
        assert_eq!(cfg.server.bind_addr(), "127.0.0.1:5000");
    }

    #[test]
    fn load_or_env_rejects_broken_file() {
        let unparsable = temp_config("[server\nport = ");
        assert!(AppConfig::load_or_env_from(&unparsable, env_lookup).is_err());
        let _ = std::fs::remove_file(&unparsable);

        let invalid = temp_config("[logging]\nformat = \"xml\"\n");
        let err = AppConfig::load_or_env_from(&invalid, env_lookup).unwrap_err();
        assert!(err.to_string().contains("logging.format"), "{err}");
        let _ = std::fs::remove_file(&invalid);
    }
}
