use super::{Direction, Timing};
use crate::geometry::{AxisRange, Projection, Rotate3d, Size};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackKind {
    /// In-plane rotation around a pivot given relative to the surface size.
    Spin {
        angle: AxisRange,
        pivot: (f64, f64),
    },
    /// Camera-projected 3D rotation around the surface center.
    Tilt(Rotate3d),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track {
    pub kind: TrackKind,
    pub timing: Timing,
}

impl Track {
    pub fn spin(direction: Direction, timing: Timing) -> Self {
        Self {
            kind: TrackKind::Spin {
                angle: direction.sweep(),
                pivot: (0.5, 0.5),
            },
            timing,
        }
    }

    pub fn tilt(rotation: Rotate3d, timing: Timing) -> Self {
        Self {
            kind: TrackKind::Tilt(rotation),
            timing,
        }
    }

    /// Finished tracks hold their final frame.
    pub fn transform_at(&self, elapsed: Duration, size: Size) -> Projection {
        let fraction = self.timing.fraction_at(elapsed).unwrap_or(1.0);
        match self.kind {
            TrackKind::Spin { angle, pivot } => {
                Projection::rotation_about(angle.at(fraction), size.relative(pivot.0, pivot.1))
            }
            TrackKind::Tilt(rotation) => rotation.projection_at(fraction, size.center()),
        }
    }
}

/// Tracks running together. Each track is applied after the ones added
/// before it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnimationSet {
    tracks: Vec<Track>,
}

impl AnimationSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, track: Track) -> Self {
        self.tracks.push(track);
        self
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        self.tracks.iter().all(|t| t.timing.is_finished(elapsed))
    }

    pub fn transform_at(&self, elapsed: Duration, size: Size) -> Projection {
        self.tracks
            .iter()
            .fold(Projection::IDENTITY, |acc, track| {
                track.transform_at(elapsed, size).then(&acc)
            })
    }
}
