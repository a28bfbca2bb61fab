use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::model::{DEFAULT_API_VERSION, ShopConfig, StockroomConfig};

const CONFIG_DIR: &str = ".stockroom";

pub const ENV_SHOP_URL: &str = "STOCKROOM_SHOP_URL";
pub const ENV_ACCESS_TOKEN: &str = "STOCKROOM_ACCESS_TOKEN";
pub const ENV_API_VERSION: &str = "STOCKROOM_API_VERSION";

/// `.stockroom/` directory holding `config.json` and the TUI log.
#[derive(Clone, Debug)]
pub struct ConfigStore {
    root: PathBuf,
}

impl ConfigStore {
    pub fn config_dir(root: &Path) -> PathBuf {
        root.join(CONFIG_DIR)
    }

    /// Opens the store under `workspace_root`; the directory is created lazily on first write.
    pub fn open(workspace_root: &Path) -> Self {
        Self {
            root: Self::config_dir(workspace_root),
        }
    }

    pub fn open_cwd() -> Result<Self> {
        let cwd = std::env::current_dir().context("get current dir")?;
        Ok(Self::open(&cwd))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn log_path(&self) -> PathBuf {
        self.root.join("stockroom.log")
    }

    pub fn read_config(&self) -> Result<StockroomConfig> {
        let path = self.root.join("config.json");
        if !path.exists() {
            return Ok(StockroomConfig::default());
        }
        let bytes = fs::read(&path).with_context(|| format!("read {}", path.display()))?;
        let cfg: StockroomConfig =
            serde_json::from_slice(&bytes).with_context(|| format!("parse {}", path.display()))?;
        Ok(cfg)
    }

    pub fn write_config(&self, cfg: &StockroomConfig) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(cfg).context("serialize config")?;
        write_atomic(&self.root.join("config.json"), &bytes).context("write config.json")?;
        Ok(())
    }
}

/// Values supplied on the command line; these win over env and file.
#[derive(Clone, Debug, Default)]
pub struct ShopOverrides {
    pub url: Option<String>,
    pub token: Option<String>,
    pub api_version: Option<String>,
}

/// Layers file config, environment, and flags into a usable shop connection.
pub fn resolve_shop(cfg: &StockroomConfig, overrides: &ShopOverrides) -> Result<ShopConfig> {
    resolve_shop_with(cfg, overrides, |k| std::env::var(k).ok())
}

pub fn resolve_shop_with(
    cfg: &StockroomConfig,
    overrides: &ShopOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> Result<ShopConfig> {
    let file = cfg.shop.as_ref();
    let non_empty = |v: Option<String>| v.filter(|s| !s.trim().is_empty());

    let base_url = non_empty(overrides.url.clone())
        .or_else(|| non_empty(env(ENV_SHOP_URL)))
        .or_else(|| file.map(|s| s.base_url.clone()))
        .context("no shop configured (run `stockroom login --url ... --token ...`)")?;
    let access_token = non_empty(overrides.token.clone())
        .or_else(|| non_empty(env(ENV_ACCESS_TOKEN)))
        .or_else(|| file.and_then(|s| s.access_token.clone()))
        .with_context(|| {
            format!(
                "no access token configured (set {} or run `stockroom login`)",
                ENV_ACCESS_TOKEN
            )
        })?;
    let api_version = non_empty(overrides.api_version.clone())
        .or_else(|| non_empty(env(ENV_API_VERSION)))
        .or_else(|| file.map(|s| s.api_version.clone()))
        .unwrap_or_else(|| DEFAULT_API_VERSION.to_string());

    Ok(ShopConfig {
        base_url: base_url.trim_end_matches('/').to_string(),
        api_version,
        access_token: Some(access_token),
    })
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("create parent directories")?;
    }
    let tmp = path.with_extension(format!("tmp.{}", std::process::id()));
    fs::write(&tmp, bytes).with_context(|| format!("write temp file {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("rename {} -> {}", tmp.display(), path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
