use std::path::Path;

use anyhow::anyhow;
use serde::de::DeserializeOwned;

use super::types::{BinaryConfig, ToolsConfig, VmConfig};
use crate::error::ConfigError;

pub const CONFIG_FILE: &str = "archtools.toml";
pub const ENV_OVERFLOW: &str = "ARCHTOOLS_OVERFLOW";
pub const ENV_VM_MAX_STEPS: &str = "ARCHTOOLS_VM_MAX_STEPS";

/// `[binary]` from `path` plus `ARCHTOOLS_OVERFLOW`. The `[vm]` table and
/// VM variables are never read, so a bad VM setting cannot fail conversion.
pub fn load_binary_from<F>(path: &Path, lookup: F) -> Result<BinaryConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg: BinaryConfig = load_section(path, "binary")?;
    apply_binary_overrides(&mut cfg, lookup)?;
    Ok(cfg)
}

/// `[vm]` from `path` plus `ARCHTOOLS_VM_MAX_STEPS`.
pub fn load_vm_from<F>(path: &Path, lookup: F) -> Result<VmConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg: VmConfig = load_section(path, "vm")?;
    apply_vm_overrides(&mut cfg, lookup)?;
    Ok(cfg)
}

/// Whole file, every section validated. Missing file yields the defaults.
pub fn load_file(path: &Path) -> Result<ToolsConfig, ConfigError> {
    let Some(s) = read_if_present(path)? else {
        return Ok(ToolsConfig::default());
    };
    let cfg = toml::from_str::<ToolsConfig>(&s).map_err(|e| ConfigError::Parse(e.into()))?;
    tracing::debug!(target: "archtools.config", path = %path.display(), "loaded config file");
    Ok(cfg)
}

/// Deserializes only `[key]`; other tables are never looked at.
fn load_section<T>(path: &Path, key: &str) -> Result<T, ConfigError>
where
    T: DeserializeOwned + Default,
{
    let Some(s) = read_if_present(path)? else {
        return Ok(T::default());
    };
    let table = toml::from_str::<toml::Table>(&s).map_err(|e| ConfigError::Parse(e.into()))?;
    let Some(section) = table.get(key) else {
        return Ok(T::default());
    };
    let cfg = section
        .clone()
        .try_into::<T>()
        .map_err(|e| ConfigError::Parse(e.into()))?;
    tracing::debug!(target: "archtools.config", path = %path.display(), section = key, "loaded config section");
    Ok(cfg)
}

fn read_if_present(path: &Path) -> Result<Option<String>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    std::fs::read_to_string(path)
        .map(Some)
        .map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })
}

pub fn apply_binary_overrides<F>(cfg: &mut BinaryConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(v) = lookup(ENV_OVERFLOW) {
        if !v.trim().is_empty() {
            cfg.overflow = v.parse().map_err(|e: String| ConfigError::EnvInvalid {
                key: ENV_OVERFLOW.to_string(),
                source: anyhow!(e),
            })?;
        }
    }
    Ok(())
}

pub fn apply_vm_overrides<F>(cfg: &mut VmConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(v) = lookup(ENV_VM_MAX_STEPS) {
        if !v.trim().is_empty() {
            cfg.max_steps = v.trim().parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::EnvInvalid {
                    key: ENV_VM_MAX_STEPS.to_string(),
                    source: e.into(),
                }
            })?;
        }
    }
    Ok(())
}
