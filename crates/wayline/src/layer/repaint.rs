use crate::style::{scene_key, Polyline};

/// The inputs that determine what a rendered frame looks like.
///
/// Captured once per painted frame and compared against the next frame's
/// snapshot to decide whether the raster can be reused.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameSnapshot {
    pub zoom: f64,
    pub rotation: f64,
    /// Content key over the ordered visible polylines (styles + geometry).
    pub scene: u64,
}

impl FrameSnapshot {
    pub fn capture(zoom: f64, rotation: f64, polylines: &[Polyline]) -> Self {
        Self {
            zoom,
            rotation,
            scene: scene_key(polylines),
        }
    }
}

/// Decides whether a previously rendered frame may be reused.
///
/// `layer_caching` reflects the host environment: rasters can only be reused
/// where the platform keeps the layer's backing store alive. The default is
/// the conservative one — no caching, always repaint.
#[derive(Debug, Copy, Clone, Default)]
pub struct RepaintPolicy {
    pub layer_caching: bool,
}

impl RepaintPolicy {
    pub fn new(layer_caching: bool) -> Self {
        Self { layer_caching }
    }

    /// True when the frame must be rendered again.
    pub fn should_repaint(&self, previous: &FrameSnapshot, current: &FrameSnapshot) -> bool {
        if !self.layer_caching {
            return true;
        }
        previous.zoom != current.zoom
            || previous.rotation != current.rotation
            || previous.scene != current.scene
    }
}
