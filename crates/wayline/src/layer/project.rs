use crate::coords::{GeoPoint, Vec2};
use crate::style::Polyline;

/// Host-supplied projection for the current view transform.
///
/// Both methods depend on zoom, pan, and rotation, so results are only valid
/// within the frame the projector was handed out for; nothing in this crate
/// caches them across frames.
pub trait Projector {
    /// Projects a geographic point into device space.
    fn project(&self, point: GeoPoint) -> Vec2;

    /// Returns the point reached by travelling `meters` along `bearing_deg`
    /// (degrees clockwise from north) on the ground.
    ///
    /// Used only for meter-width stroke conversion; a spherical
    /// destination-point formula is plenty accurate for that.
    fn destination(&self, origin: GeoPoint, bearing_deg: f64, meters: f64) -> GeoPoint;
}

/// Projects a point sequence, preserving order and length.
///
/// Empty input yields empty output; callers skip rendering for empty results.
pub fn project_points(projector: &impl Projector, points: &[GeoPoint]) -> Vec<Vec2> {
    points.iter().map(|&p| projector.project(p)).collect()
}

/// Resolves a polyline's stroke width to device pixels.
///
/// Plain widths pass through. Meter widths are measured by projecting the
/// first point and a second point `stroke_width` meters due south of it and
/// taking the device-space distance — an approximation that ignores local
/// projection distortion and the line's own bearing, recomputed every frame
/// because zoom changes the projected distance.
///
/// `first_offset` is the already-projected first point, so callers reuse the
/// projection they just computed.
pub fn effective_stroke_width(
    projector: &impl Projector,
    line: &Polyline,
    first_offset: Vec2,
) -> f32 {
    if !line.width_in_meters() {
        return line.stroke_width();
    }
    let Some(&first) = line.points().first() else {
        return line.stroke_width();
    };
    let shifted = projector.destination(first, 180.0, line.stroke_width() as f64);
    first_offset.distance(projector.project(shifted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::test_util::PlaneProjector;

    #[test]
    fn project_points_preserves_order_and_length() {
        let proj = PlaneProjector::unit();
        let points = vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(10.0, 0.0),
            GeoPoint::new(10.0, 10.0),
        ];
        let offsets = project_points(&proj, &points);
        assert_eq!(offsets.len(), 3);
        assert_eq!(offsets[1], Vec2::new(10.0, 0.0));
        assert_eq!(offsets[2], Vec2::new(10.0, 10.0));
    }

    #[test]
    fn project_points_empty_in_empty_out() {
        let proj = PlaneProjector::unit();
        assert!(project_points(&proj, &[]).is_empty());
    }

    #[test]
    fn plain_width_passes_through() {
        let proj = PlaneProjector { scale: 4.0 };
        let line = Polyline::new(vec![GeoPoint::new(0.0, 0.0)]).with_stroke_width(3.0);
        assert_eq!(effective_stroke_width(&proj, &line, Vec2::zero()), 3.0);
    }

    #[test]
    fn meter_width_scales_with_projection() {
        // At scale 2, a 5-meter ground distance spans 10 device pixels.
        let proj = PlaneProjector { scale: 2.0 };
        let line = Polyline::new(vec![GeoPoint::new(10.0, 10.0)])
            .with_stroke_width(5.0)
            .with_width_in_meters(true);
        let first = proj.project(GeoPoint::new(10.0, 10.0));
        let w = effective_stroke_width(&proj, &line, first);
        assert!((w - 10.0).abs() < 1e-4, "got {w}");
    }

    #[test]
    fn meter_width_empty_geometry_falls_back() {
        let proj = PlaneProjector::unit();
        let line = Polyline::new(vec![])
            .with_stroke_width(5.0)
            .with_width_in_meters(true);
        assert_eq!(effective_stroke_width(&proj, &line, Vec2::zero()), 5.0);
    }
}
