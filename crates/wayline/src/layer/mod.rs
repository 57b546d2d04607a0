//! Polyline layer rendering.
//!
//! Control flow for one render pass:
//! 1. project each polyline's points into device space ([`project_points`])
//! 2. expand the stroke pattern into path geometry (`segment`)
//! 3. accumulate consecutive same-style polylines into one group and flush a
//!    submission per group boundary ([`Compositor`])
//!
//! [`RepaintPolicy`] sits outside the pass: it decides whether the previous
//! frame's raster can be reused at all.

mod compositor;
mod project;
mod repaint;
pub(crate) mod segment;

pub use compositor::Compositor;
pub use project::{effective_stroke_width, project_points, Projector};
pub use repaint::{FrameSnapshot, RepaintPolicy};

#[cfg(test)]
pub(crate) mod test_util {
    use crate::coords::{GeoPoint, Vec2};

    use super::Projector;

    /// Identity-ish projector: latitude → x, longitude → y, scaled by a
    /// constant zoom factor. Bearing 180° walks toward decreasing latitude.
    pub(crate) struct PlaneProjector {
        pub scale: f64,
    }

    impl PlaneProjector {
        pub(crate) fn unit() -> Self {
            Self { scale: 1.0 }
        }
    }

    impl Projector for PlaneProjector {
        fn project(&self, p: GeoPoint) -> Vec2 {
            Vec2::new((p.lat * self.scale) as f32, (p.lng * self.scale) as f32)
        }

        fn destination(&self, origin: GeoPoint, bearing_deg: f64, meters: f64) -> GeoPoint {
            let rad = bearing_deg.to_radians();
            GeoPoint::new(
                origin.lat + rad.cos() * meters,
                origin.lng + rad.sin() * meters,
            )
        }
    }
}
