use thiserror::Error;

/// Conditions raised while reading scene data.
///
/// Apart from `InvalidTextureSize`, these are recovered locally by the exporter:
/// the offending object or track is logged and skipped.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// The texture has a zero axis, so pixel ratios are undefined.
    #[error("texture has zero size ({width}x{height})")]
    EmptyTexture { width: u32, height: u32 },

    /// A mesh object carries no vertices and no precomputed min-vertex.
    #[error("mesh object `{name}` has no vertices")]
    EmptyMesh { name: String },

    /// The object has no usable keyframe track.
    #[error("object `{name}` has no animation data")]
    MissingAnimationData { name: String },

    /// Fewer than three curves were captured for a track.
    #[error("track `{track}` captures {channels} curve channels, need at least 3")]
    InsufficientCurveChannels { track: String, channels: usize },

    /// The track's frame range is longer than `MAX_FRAME_COUNT`.
    #[error("track `{track}` spans {frames} frames, limit is {max}")]
    TooManyFrames { track: String, frames: u32, max: u32 },

    /// Texture size string not in `WIDTHxHEIGHT` form.
    #[error("invalid texture size `{0}`, expected WIDTHxHEIGHT")]
    InvalidTextureSize(String),
}
