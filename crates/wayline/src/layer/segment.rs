//! Stroke-pattern expansion.
//!
//! Each generator walks an already-projected offset sequence and appends
//! geometry to a group path buffer. Degenerate segments are skipped, never
//! fatal: worst case is a visually thinner polyline, which beats aborting a
//! frame.

use crate::coords::Vec2;
use crate::scene::Path;

/// Appends dot centers along the whole polyline.
///
/// Spacing continuity is carried across segment boundaries: the overshoot of
/// the last step in one segment becomes the start offset of the next, so dots
/// stay evenly spaced around corners instead of resetting per segment. A
/// final dot is always placed on the last point.
pub(crate) fn append_dots(path: &mut Path, offsets: &[Vec2], radius: f32, spacing: f32) {
    if spacing <= 0.0 {
        log::trace!("non-positive dot spacing {spacing}, skipping pattern");
        return;
    }

    let mut carried = 0.0_f32;
    for w in offsets.windows(2) {
        let (p0, p1) = (w[0], w[1]);
        let len = p0.distance(p1);
        if len <= 0.0 {
            // Zero-length segment: keep the carried offset untouched.
            continue;
        }
        let mut dist = carried;
        while dist < len {
            path.circle(p0.lerp(p1, dist / len), radius);
            dist += spacing;
        }
        carried = dist - len;
    }

    if let Some(&last) = offsets.last() {
        path.circle(last, radius);
    }
}

/// Appends evenly distributed dashes per segment (the "balanced" strategy).
///
/// Per segment: `count = floor(len / (dash + gap·width))`; the remainder is
/// folded back into the inter-dash space so the pattern spans the exact
/// segment length. Dashes are inset half a stroke width from the segment
/// ends, and short bridge strokes underneath each interior vertex smooth the
/// corner joins. Segments too short to dash are skipped whole.
pub(crate) fn append_dashes_balanced(
    path: &mut Path,
    offsets: &[Vec2],
    dash_length: f32,
    gap: f32,
    width: f32,
) {
    let half = width / 2.0;
    let gap_px = gap * width;
    let period = dash_length + gap_px;
    if period <= 0.0 {
        log::trace!("non-positive dash period, skipping pattern");
        return;
    }

    for w in offsets.windows(2) {
        let (p0, p1) = (w[0], w[1]);
        let len = p0.distance(p1);
        if len <= width {
            continue;
        }
        let count = (len / period) as usize;
        if count == 0 {
            continue;
        }
        let space = len / count as f32 - dash_length;
        let dir = (p1 - p0) / len;

        let mut cursor = half;
        for _ in 0..count {
            path.move_to(p0 + dir * cursor);
            path.line_to(p0 + dir * (cursor + dash_length));
            cursor += dash_length + space;
        }
    }

    append_corner_joins(path, offsets, half);
}

/// Short strokes bridging the half-width inset on either side of each
/// interior vertex, so the dashed line does not show bare corners.
fn append_corner_joins(path: &mut Path, offsets: &[Vec2], half: f32) {
    for w in offsets.windows(3) {
        let (prev, corner, next) = (w[0], w[1], w[2]);
        let inbound = (corner - prev).normalized();
        let outbound = (next - corner).normalized();
        if inbound == Vec2::zero() || outbound == Vec2::zero() {
            continue;
        }
        path.move_to(corner - inbound * half);
        path.line_to(corner);
        path.line_to(corner + outbound * half);
    }
}

/// Appends rectangle-like dashes in fixed steps (the "stepped" strategy).
///
/// Both dash length and gap are multiples of the stroke width. A trailing
/// dash that would overshoot the segment is simply omitted. Each dash is a
/// two-point stroked path spanning the perpendicular half width; combined
/// with round caps, miter joins, and the compositor's oversized paint width
/// it rasterizes as a filled rectangle — a workaround for surfaces without a
/// rectangle-fill-along-path primitive.
pub(crate) fn append_dashes_stepped(
    path: &mut Path,
    offsets: &[Vec2],
    dash_length: f32,
    gap: f32,
    width: f32,
) {
    let half = width / 2.0;
    let dash_px = dash_length * width;
    let step = dash_px + gap * width;
    if step <= 0.0 {
        log::trace!("non-positive dash step, skipping pattern");
        return;
    }

    for w in offsets.windows(2) {
        let (p0, p1) = (w[0], w[1]);
        let len = p0.distance(p1);
        if len <= width {
            continue;
        }
        let dir = (p1 - p0) / len;
        let perp = dir.perp();

        let mut cursor = 0.0_f32;
        while cursor + dash_px <= len {
            let center = p0 + dir * cursor;
            path.move_to(center - perp * half);
            path.line_to(center + perp * half + dir * dash_px);
            cursor += step;
        }
    }
}
