use figment::{Figment, providers::{Env, Format, Yaml}};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level Breachpad configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreachpadConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub waf: WafConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

/// HTTP API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_addr")]
    pub addr: String,
    /// Permissive CORS for the dashboard dev server.
    #[serde(default = "default_true")]
    pub cors: bool,
}

/// WAF log feed settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WafConfig {
    /// Path to the error log the filtering proxy appends to.
    /// The file is written by a process outside this system's control.
    #[serde(default = "default_waf_log_path")]
    pub log_path: PathBuf,
}

/// Blog store settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// JSON state file for posts and comments. `None` disables persistence.
    #[serde(default = "default_state_file")]
    pub state_file: Option<PathBuf>,
    /// Apply the built-in seed posts/comments when the store starts empty.
    #[serde(default = "default_true")]
    pub seed: bool,
    /// Optional YAML file replacing the built-in seed definitions.
    #[serde(default)]
    pub seed_file: Option<PathBuf>,
}

// ── Defaults ──────────────────────────────────────────────────

fn default_addr() -> String { "0.0.0.0:3001".into() }
fn default_waf_log_path() -> PathBuf { PathBuf::from("data/nginx/error.log") }
fn default_state_file() -> Option<PathBuf> { Some(PathBuf::from("data/breachpad-state.json")) }
fn default_true() -> bool { true }

// ── Impls ─────────────────────────────────────────────────────

impl Default for BreachpadConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            waf: WafConfig::default(),
            store: StoreConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_addr(),
            cors: true,
        }
    }
}

impl Default for WafConfig {
    fn default() -> Self {
        Self {
            log_path: default_waf_log_path(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            state_file: default_state_file(),
            seed: true,
            seed_file: None,
        }
    }
}

impl BreachpadConfig {
    /// Load configuration from YAML file + env overrides.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let config: BreachpadConfig = Figment::new()
            .merge(Yaml::file(path))
            .merge(Env::prefixed("BREACHPAD_").split("_"))
            .extract()?;
        Ok(config)
    }
}
