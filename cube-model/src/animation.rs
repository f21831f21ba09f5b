use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// Upper bound on the frames sampled from one track. Longer tracks are dropped.
pub const MAX_FRAME_COUNT: u32 = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Keyframe {
    pub frame: f64,
    pub value: f64,
}

impl From<(f64, f64)> for Keyframe {
    fn from((frame, value): (f64, f64)) -> Self {
        Self { frame, value }
    }
}

impl From<Keyframe> for (f64, f64) {
    fn from(key: Keyframe) -> Self {
        (key.frame, key.value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Interpolation {
    #[default]
    Linear,
    Constant,
}

#[derive(Deserialize)]
struct CurveRepr {
    #[serde(default)]
    keyframes: Vec<Keyframe>,
    #[serde(default)]
    interpolation: Interpolation,
}

/// One keyframed channel. Keyframes are kept sorted by frame.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(from = "CurveRepr")]
pub struct AnimationCurve {
    keyframes: Vec<Keyframe>,
    pub interpolation: Interpolation,
}

impl From<CurveRepr> for AnimationCurve {
    fn from(repr: CurveRepr) -> Self {
        Self::new(repr.keyframes, repr.interpolation)
    }
}

impl AnimationCurve {
    pub fn new(mut keyframes: Vec<Keyframe>, interpolation: Interpolation) -> Self {
        keyframes.sort_by(|a, b| a.frame.total_cmp(&b.frame));
        Self {
            keyframes,
            interpolation,
        }
    }

    pub fn linear(keys: &[(f64, f64)]) -> Self {
        Self::new(
            keys.iter().copied().map(Keyframe::from).collect(),
            Interpolation::Linear,
        )
    }

    pub fn constant(value: f64) -> Self {
        Self::new(vec![Keyframe { frame: 0.0, value }], Interpolation::Constant)
    }

    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    /// Value at `frame`. Holds the first/last key outside the keyed range; 0 when unkeyed.
    pub fn evaluate(&self, frame: f64) -> f64 {
        let (Some(first), Some(last)) = (self.keyframes.first(), self.keyframes.last()) else {
            return 0.0;
        };
        if frame <= first.frame {
            return first.value;
        }
        if frame >= last.frame {
            return last.value;
        }
        for pair in self.keyframes.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if frame >= b.frame {
                continue;
            }
            return match self.interpolation {
                Interpolation::Constant => a.value,
                Interpolation::Linear => {
                    let span = b.frame - a.frame;
                    if span <= 0.0 {
                        b.value
                    } else {
                        a.value + (b.value - a.value) * (frame - a.frame) / span
                    }
                }
            };
        }
        last.value
    }
}

/// Named keyframed track as captured on a host object (one strip per track).
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct NlaTrack {
    pub name: String,
    /// End of the action's frame range. Derived from the keys when absent.
    #[serde(default)]
    pub frame_end: Option<u32>,
    /// Channel order: locX, locY, locZ, rotX, rotY, rotZ, scaX, scaY, scaZ.
    #[serde(default)]
    pub curves: Vec<AnimationCurve>,
}

impl NlaTrack {
    pub fn new(name: impl Into<String>, frame_end: u32, curves: Vec<AnimationCurve>) -> Self {
        Self {
            name: name.into(),
            frame_end: Some(frame_end),
            curves,
        }
    }

    /// Number of integer frames sampled, `[0, frame_count)`.
    pub fn frame_count(&self) -> u32 {
        if let Some(end) = self.frame_end {
            return end;
        }
        self.curves
            .iter()
            .filter_map(|c| c.keyframes().last())
            .map(|k| (k.frame.max(0.0).floor() as u32).saturating_add(1))
            .max()
            .unwrap_or(0)
    }
}

/// Which transform channels a sampled track holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChannelKind {
    None,
    Loc,
    LocRot,
    LocRotScale,
}

impl ChannelKind {
    /// Kind for a captured curve count. Only 3, 6 and 9 are meaningful.
    pub fn from_curve_count(count: usize) -> Self {
        match count {
            9 => ChannelKind::LocRotScale,
            6 => ChannelKind::LocRot,
            3 => ChannelKind::Loc,
            _ => ChannelKind::None,
        }
    }

    pub fn channel_count(self) -> usize {
        match self {
            ChannelKind::None => 0,
            ChannelKind::Loc => 3,
            ChannelKind::LocRot => 6,
            ChannelKind::LocRotScale => 9,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            ChannelKind::None => "none",
            ChannelKind::Loc => "loc",
            ChannelKind::LocRot => "loc+rot",
            ChannelKind::LocRotScale => "loc+rot+scale",
        }
    }
}

impl fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Per-frame samples of one track. Every channel has exactly `frame_count` entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnimationTrack {
    pub name: String,
    pub frame_count: u32,
    pub kind: ChannelKind,
    pub channels: Vec<Vec<f64>>,
}

/// Sample `track` at every integer frame of its own range.
pub fn sample_track(track: &NlaTrack) -> Result<AnimationTrack, ModelError> {
    let captured = track.curves.len();
    if captured < 3 {
        return Err(ModelError::InsufficientCurveChannels {
            track: track.name.clone(),
            channels: captured,
        });
    }
    let frame_count = track.frame_count();
    if frame_count > MAX_FRAME_COUNT {
        return Err(ModelError::TooManyFrames {
            track: track.name.clone(),
            frames: frame_count,
            max: MAX_FRAME_COUNT,
        });
    }
    let kind = ChannelKind::from_curve_count(captured);
    let channels = track.curves[..kind.channel_count()]
        .iter()
        .map(|curve| {
            (0..frame_count)
                .map(|frame| curve.evaluate(frame as f64))
                .collect()
        })
        .collect();
    Ok(AnimationTrack {
        name: track.name.clone(),
        frame_count,
        kind,
        channels,
    })
}
