use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{ModelError, NlaTrack, Vec3};

/// Host object type. Only meshes are exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ObjectKind {
    #[default]
    Mesh,
    Empty,
    Camera,
    Light,
    Armature,
    #[serde(other)]
    Other,
}

/// Pixel size of the active texture image. `0x0` when there is none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct TextureAtlas {
    pub width: u32,
    pub height: u32,
}

impl TextureAtlas {
    pub const NONE: TextureAtlas = TextureAtlas {
        width: 0,
        height: 0,
    };

    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True when either axis is zero; UV ratios can't be computed against it.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl fmt::Display for TextureAtlas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for TextureAtlas {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ModelError::InvalidTextureSize(s.to_string());
        let (w, h) = s
            .split_once(['x', 'X'])
            .ok_or_else(invalid)?;
        let width = w.trim().parse().map_err(|_| invalid())?;
        let height = h.trim().parse().map_err(|_| invalid())?;
        Ok(Self { width, height })
    }
}

/// Read-only snapshot of one host object.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceObject {
    pub name: String,
    pub kind: ObjectKind,
    pub location: Vec3,
    /// Euler angles in radians, applied X→Y→Z.
    pub rotation: Vec3,
    pub scale: Vec3,
    /// World-axis bounding box size (already scaled).
    pub dimensions: Vec3,
    /// Smallest X, smallest Y, largest Z over the mesh vertices.
    pub min_vertex: Vec3,
    /// (u_min, 1 - v_max) of the active UV layer, (0, 0) without one.
    pub min_uv: [f64; 2],
    pub tracks: Vec<NlaTrack>,
}

impl SourceObject {
    /// A mesh object at the origin with identity transform and no geometry data.
    pub fn mesh(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ObjectKind::Mesh,
            location: [0.0; 3],
            rotation: [0.0; 3],
            scale: [1.0; 3],
            dimensions: [0.0; 3],
            min_vertex: [0.0; 3],
            min_uv: [0.0; 2],
            tracks: Vec::new(),
        }
    }

    pub fn is_mesh(&self) -> bool {
        self.kind == ObjectKind::Mesh
    }

    pub fn track(&self, name: &str) -> Option<&NlaTrack> {
        self.tracks.iter().find(|t| t.name == name)
    }
}

/// Cuboid in target-engine coordinates, ready for emission.
#[derive(Debug, Clone, PartialEq)]
pub struct Cuboid {
    pub name: String,
    /// Texture offset (u, v) in pixels.
    pub texture_offset: [i64; 2],
    /// Offset of the box's minimum corner from the pivot.
    pub offset: Vec3,
    /// Rounded (width, height, depth).
    pub size: [i64; 3],
    /// Rotation point.
    pub pivot: Vec3,
    /// `rotateAngleX/Y/Z` in radians.
    pub rotation: Vec3,
}
