use promo::{
    config::{build_config, load_settings},
    domain,
    errors::ConfigError,
    partner::Partner,
};
use serde::Deserialize;
use std::{
    path::PathBuf,
    sync::{OnceLock, RwLock},
};
use uuid::Uuid;
use validator::Validate;

static SERVER: OnceLock<RwLock<ServerConfig>> = OnceLock::new();

pub(crate) fn load(crate_dir: PathBuf) -> Result<ServerConfig, ConfigError> {
    load_settings(build_config(crate_dir)?)
}

fn load_server() -> Result<ServerConfig, ConfigError> {
    load(PathBuf::from(env!("CARGO_MANIFEST_DIR")))
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct ServerConfig {
    #[validate(nested)]
    pub server: ListenConfig,
    #[validate(nested)]
    pub partners: Vec<PartnerSeed>,
}

impl domain::Config for ServerConfig {
    fn get() -> Result<Self, ConfigError> {
        if let Some(cfg) = SERVER.get() {
            return cfg
                .read()
                .map(|c| c.clone())
                .map_err(|e| ConfigError::LockError(e.to_string()));
        }
        let cfg = load_server()?;
        let _ = SERVER.set(RwLock::new(cfg.clone()));
        Ok(cfg)
    }

    fn reload() -> Result<(), ConfigError> {
        let cfg = load_server()?;
        match SERVER.get() {
            Some(cell) => {
                let mut cell = cell
                    .write()
                    .map_err(|e| ConfigError::LockError(e.to_string()))?;
                *cell = cfg;
            }
            None => {
                let _ = SERVER.set(RwLock::new(cfg));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(default)]
pub struct ListenConfig {
    #[validate(length(min = 1))]
    pub host: String,
    #[validate(range(min = 1))]
    pub port: u16,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl ListenConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 启动时写入内存存储的合作伙伴
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PartnerSeed {
    pub id: Uuid,
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default = "active_by_default")]
    pub active: bool,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub issued_codes: i32,
}

fn active_by_default() -> bool {
    true
}

impl PartnerSeed {
    pub fn to_partner(&self) -> Partner {
        Partner::new(self.id, self.name.clone(), self.active).with_issued_codes(self.issued_codes)
    }
}
