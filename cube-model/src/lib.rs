//! Plain value model for box-based entity models.
//!
//! Key constraints for this crate:
//! - No live host handles. Everything is an immutable snapshot (`SourceObject`, `TextureAtlas`).
//! - Authoring space is right-handed, Z-up (Blender). Target space is the vanilla
//!   `ModelRenderer` space: Y-up origin shifted by 24px, rotations in radians.
//! - Rounding is `floor(x + 0.499)` everywhere. Output compatibility depends on it.

mod animation;
mod convert;
mod error;
mod extract;
mod types;

pub use animation::*;
pub use convert::*;
pub use error::*;
pub use extract::*;
pub use types::*;

/// Ordered (x, y, z) triple. Used for location, rotation (radians, X→Y→Z) and scale.
pub type Vec3 = [f64; 3];

/// Round-half-up with the exporter's `+0.499` bias.
///
/// `2.5` rounds to `2`, `2.6` rounds to `3`. This is not mathematical rounding.
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.499).floor() as i64
}

#[cfg(test)]
mod tests;
