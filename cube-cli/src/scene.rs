use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use cube_model::{Scene, TextureAtlas};
use tracing::{debug, info};

use crate::config::TextureConfig;

pub fn load_scene(path: &Path) -> Result<Scene> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read scene {}", path.display()))?;
    let scene: Scene = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse scene {}", path.display()))?;
    info!("loaded {} objects from {}", scene.objects.len(), path.display());
    Ok(scene)
}

/// Header-only read; pixels are never decoded.
pub fn texture_from_png(path: &Path) -> Result<TextureAtlas> {
    let (width, height) = image::image_dimensions(path)
        .with_context(|| format!("failed to read texture {}", path.display()))?;
    debug!("texture {} is {width}x{height}", path.display());
    Ok(TextureAtlas::new(width, height))
}

/// Texture sources in priority order. Falls back to 0x0 when nothing names one.
///
/// The scene's own texture outranks the config file, which only fills in for
/// snapshots taken without an active image.
#[derive(Debug, Default)]
pub struct TextureSources<'a> {
    pub size: Option<TextureAtlas>,
    pub png: Option<&'a Path>,
    pub scene: Option<TextureAtlas>,
    pub config: Option<&'a TextureConfig>,
}

impl TextureSources<'_> {
    pub fn resolve(&self) -> Result<TextureAtlas> {
        if let Some(size) = self.size {
            return Ok(size);
        }
        if let Some(png) = self.png {
            return texture_from_png(png);
        }
        if let Some(scene) = self.scene.filter(|t| !t.is_empty()) {
            return Ok(scene);
        }
        if let Some(config) = self.config {
            if let Some(size) = config.size() {
                return Ok(size);
            }
            if let Some(png) = config.path.as_deref() {
                return texture_from_png(png);
            }
        }
        Ok(TextureAtlas::NONE)
    }
}
