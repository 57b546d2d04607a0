//! End-to-end render-pass tests through the public API.

use wayline::coords::{GeoPoint, Vec2};
use wayline::layer::{Compositor, FrameSnapshot, Projector, RepaintPolicy};
use wayline::paint::{BlendMode, Color, Paint, PaintStyle};
use wayline::scene::{DrawList, PathEl};
use wayline::style::Polyline;

/// Treats latitude/longitude as plane coordinates; good enough for
/// device-space assertions.
struct PlaneProjector;

impl Projector for PlaneProjector {
    fn project(&self, p: GeoPoint) -> Vec2 {
        Vec2::new(p.lat as f32, p.lng as f32)
    }

    fn destination(&self, origin: GeoPoint, bearing_deg: f64, meters: f64) -> GeoPoint {
        let rad = bearing_deg.to_radians();
        GeoPoint::new(
            origin.lat + rad.cos() * meters,
            origin.lng + rad.sin() * meters,
        )
    }
}

#[test]
fn solid_three_point_polyline_traces_both_segments() {
    let line = Polyline::new(vec![
        GeoPoint::new(0.0, 0.0),
        GeoPoint::new(10.0, 0.0),
        GeoPoint::new(10.0, 10.0),
    ])
    .with_stroke_width(2.0)
    .with_color(Color::from_rgb8(200, 30, 30));

    let mut out = DrawList::new();
    Compositor::new().render(&[line], &PlaneProjector, &mut out);

    let cmds: Vec<_> = out.paths().collect();
    assert_eq!(cmds.len(), 1, "one paint configuration, one submission");

    let cmd = cmds[0];
    assert_eq!(
        cmd.path.elements(),
        &[
            PathEl::MoveTo(Vec2::new(0.0, 0.0)),
            PathEl::LineTo(Vec2::new(10.0, 0.0)),
            PathEl::LineTo(Vec2::new(10.0, 10.0)),
        ],
        "both segments traced without gaps"
    );
    assert_eq!(cmd.paint.paint, Paint::Solid(Color::from_rgb8(200, 30, 30)));
    assert_eq!(cmd.paint.width, 2.0);
    assert_eq!(cmd.paint.style, PaintStyle::Stroke);
    assert_eq!(cmd.paint.blend, BlendMode::SrcOver);
}

#[test]
fn style_runs_batch_in_input_order() {
    let seg =
        |color: Color| Polyline::new(vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(5.0, 5.0)])
            .with_stroke_width(1.0)
            .with_color(color);
    let red = Color::from_rgb8(255, 0, 0);
    let blue = Color::from_rgb8(0, 0, 255);

    let mut out = DrawList::new();
    Compositor::new().render(
        &[seg(red), seg(red), seg(blue), seg(red)],
        &PlaneProjector,
        &mut out,
    );

    let colors: Vec<&Paint> = out.paths().map(|p| &p.paint.paint).collect();
    assert_eq!(colors.len(), 3);
    assert_eq!(*colors[0], Paint::Solid(red));
    assert_eq!(*colors[1], Paint::Solid(blue));
    assert_eq!(*colors[2], Paint::Solid(red));
}

#[test]
fn repaint_skipped_only_for_identical_frames() {
    let lines = vec![
        Polyline::new(vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 0.0)])
            .with_stroke_width(3.0),
    ];
    let policy = RepaintPolicy::new(true);

    let a = FrameSnapshot::capture(10.0, 0.0, &lines);
    let b = FrameSnapshot::capture(10.0, 0.0, &lines);
    assert!(!policy.should_repaint(&a, &b));

    let zoomed = FrameSnapshot::capture(11.0, 0.0, &lines);
    assert!(policy.should_repaint(&a, &zoomed));
}

#[test]
fn draw_list_reuse_across_frames() {
    let line = Polyline::new(vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(5.0, 0.0)]);
    let mut out = DrawList::new();
    let compositor = Compositor::new();

    compositor.render(std::slice::from_ref(&line), &PlaneProjector, &mut out);
    assert_eq!(out.paths().count(), 1);

    out.clear();
    compositor.render(std::slice::from_ref(&line), &PlaneProjector, &mut out);
    assert_eq!(out.paths().count(), 1, "cleared list renders fresh");
}
