//! # **promo** 配置加载

use crate::errors::ConfigError;
use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::path::PathBuf;
use validator::Validate;

/// 构建分层配置
///
/// 依次叠加 `default`、`PROMO_ENV` 指定的环境文件（缺省为 `dev`）与 `PROMO__` 前缀的环境变量。
/// 配置目录由 `PROMO_CONFIG_ROOT` 指定，缺省为 `crate_dir/config`。
pub fn build_config(crate_dir: PathBuf) -> Result<Config, ConfigError> {
    let config_root = std::env::var("PROMO_CONFIG_ROOT")
        .map(PathBuf::from)
        .unwrap_or_else(|_| crate_dir.join("config"));
    let env = std::env::var("PROMO_ENV").unwrap_or_else(|_| "dev".to_string());
    let config = Config::builder()
        .add_source(File::from(config_root.join("default")).required(false))
        .add_source(File::from(config_root.join(env)).required(false))
        .add_source(
            Environment::with_prefix("PROMO")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;
    Ok(config)
}

/// 反序列化并验证整体配置
pub fn load_settings<T>(config: Config) -> Result<T, ConfigError>
where
    T: DeserializeOwned + Validate,
{
    let cfg: T = config.try_deserialize()?;
    cfg.validate().map_err(|e| ConfigError::ValidationError(e.to_string()))?;
    Ok(cfg)
}
