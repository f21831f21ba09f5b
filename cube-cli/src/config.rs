use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cube_export::ExportOptions;
use cube_model::TextureAtlas;
use serde::Deserialize;

pub const CUBE_EXPORT_CONFIG_ENV: &str = "CUBE_EXPORT_CONFIG";

/// Optional TOML config. CLI flags override anything set here.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub export: ExportOptions,
    pub texture: TextureConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TextureConfig {
    /// PNG whose header gives the texture size.
    pub path: Option<PathBuf>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl TextureConfig {
    pub fn size(&self) -> Option<TextureAtlas> {
        Some(TextureAtlas::new(self.width?, self.height?))
    }
}

impl Config {
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw).context("invalid config")
    }

    /// Loads from `explicit`, else from `$CUBE_EXPORT_CONFIG`, else defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let Some(path) = config_path(explicit) else {
            return Ok(Self::default());
        };
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let mut config = Self::from_toml_str(&raw)
            .with_context(|| format!("in {}", path.display()))?;
        // Texture paths are relative to the config file.
        if let (Some(tex), Some(dir)) = (config.texture.path.as_mut(), path.parent())
            && tex.is_relative()
        {
            *tex = dir.join(&*tex);
        }
        Ok(config)
    }
}

fn config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    std::env::var_os(CUBE_EXPORT_CONFIG_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}
