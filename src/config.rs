//! Client configuration: API base URL and where the durable session lives.
//!
//! Values come from environment variables, optionally overridden by a TOML file named in
//! QBANK_CONFIG_PATH:
//!
//! ```toml
//! [client]
//! base_url = "http://localhost:8080/api"
//! session_dir = "/var/lib/qbank-admin"
//! ```

use std::path::PathBuf;

use serde::Deserialize;
use tracing::{error, info};

pub const DEFAULT_BASE_URL: &str = "https://capstone-1-y2mc.onrender.com/api";

/// Name of the durable session record.
pub const SESSION_KEY: &str = "user";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
  pub base_url: String,
  pub session_dir: PathBuf,
  pub session_key: String,
}

/// `[client]` table accepted in the TOML file. Every entry is optional.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct FileConfig {
  #[serde(default)]
  pub client: ClientSection,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ClientSection {
  #[serde(default)] pub base_url: Option<String>,
  #[serde(default)] pub session_dir: Option<PathBuf>,
}

impl Default for ClientConfig {
  fn default() -> Self {
    Self {
      base_url: DEFAULT_BASE_URL.to_string(),
      session_dir: default_session_dir(),
      session_key: SESSION_KEY.to_string(),
    }
  }
}

impl ClientConfig {
  /// Build from QBANK_API_BASE_URL / QBANK_SESSION_DIR, then apply QBANK_CONFIG_PATH.
  pub fn from_env() -> Self {
    let mut cfg = Self::default();
    if let Ok(url) = std::env::var("QBANK_API_BASE_URL") {
      cfg.base_url = url;
    }
    if let Ok(dir) = std::env::var("QBANK_SESSION_DIR") {
      cfg.session_dir = PathBuf::from(dir);
    }
    if let Some(file) = load_file_config_from_env() {
      cfg.apply(file);
    }
    cfg.base_url = cfg.base_url.trim_end_matches('/').to_string();
    cfg
  }

  pub fn apply(&mut self, file: FileConfig) {
    if let Some(url) = file.client.base_url {
      self.base_url = url;
    }
    if let Some(dir) = file.client.session_dir {
      self.session_dir = dir;
    }
  }
}

fn default_session_dir() -> PathBuf {
  dirs::config_dir()
    .map(|d| d.join("qbank-admin"))
    .unwrap_or_else(|| PathBuf::from(".qbank-admin"))
}

/// Attempt to load `FileConfig` from QBANK_CONFIG_PATH. On any parsing/IO error, returns None.
pub fn load_file_config_from_env() -> Option<FileConfig> {
  let path = std::env::var("QBANK_CONFIG_PATH").ok()?;
  match std::fs::read_to_string(&path) {
    Ok(s) => match toml::from_str::<FileConfig>(&s) {
      Ok(cfg) => {
        info!(target: "qbank_admin", %path, "Loaded client config (TOML)");
        Some(cfg)
      }
      Err(e) => {
        error!(target: "qbank_admin", %path, error = %e, "Failed to parse TOML config");
        None
      }
    },
    Err(e) => {
      error!(target: "qbank_admin", %path, error = %e, "Failed to read TOML config file");
      None
    }
  }
}
