use crate::coords::Vec2;

use super::Color;

/// A single gradient stop. `t` is expected in [0, 1].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// Linear gradient definition in device space.
///
/// Semantics:
/// - `start` and `end` are positions in the same coordinate space as geometry.
/// - For a polyline the gradient spans the first to the last projected point
///   of the whole line, never per-segment.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<ColorStop>,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2, stops: Vec<ColorStop>) -> Self {
        Self { start, end, stops }
    }

    /// Builds a gradient spanning `start → end`, pairing `colors` with
    /// explicit `stops` when usable (see [`resolve_stops`]).
    pub fn along(start: Vec2, end: Vec2, colors: &[Color], stops: Option<&[f32]>) -> Self {
        let ts = resolve_stops(colors, stops);
        let stops = ts
            .into_iter()
            .zip(colors.iter().copied())
            .map(|(t, color)| ColorStop::new(t, color))
            .collect();
        Self { start, end, stops }
    }

    /// Structural usability check; renderers may impose more (sorted stops,
    /// minimum counts, ...).
    pub fn is_valid(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && self.stops.len() >= 2
            && self
                .stops
                .iter()
                .all(|s| s.t.is_finite() && s.color.is_finite())
            && (self.end.x != self.start.x || self.end.y != self.start.y)
    }
}

/// Returns stop positions matching `colors` in length.
///
/// Explicit stops are used verbatim only when their count equals the color
/// count; any mismatch silently falls back to uniform positions
/// `stop[i] = i / count`. Empty colors yield an empty stop list.
pub fn resolve_stops(colors: &[Color], stops: Option<&[f32]>) -> Vec<f32> {
    if let Some(stops) = stops {
        if stops.len() == colors.len() {
            return stops.to_vec();
        }
        log::trace!(
            "gradient stop count {} != color count {}, using uniform stops",
            stops.len(),
            colors.len()
        );
    }
    let count = colors.len();
    (0..count).map(|i| i as f32 / count as f32).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_stops_for_three_colors() {
        let colors = [Color::black(), Color::white(), Color::black()];
        let stops = resolve_stops(&colors, None);
        assert_eq!(stops, vec![0.0, 1.0 / 3.0, 2.0 / 3.0]);
    }

    #[test]
    fn explicit_stops_used_when_lengths_match() {
        let colors = [Color::black(), Color::white()];
        let stops = resolve_stops(&colors, Some(&[0.2, 0.9]));
        assert_eq!(stops, vec![0.2, 0.9]);
    }

    #[test]
    fn mismatched_stops_fall_back_to_uniform() {
        let colors = [Color::black(), Color::white()];
        let stops = resolve_stops(&colors, Some(&[0.0, 0.5, 1.0]));
        assert_eq!(stops, vec![0.0, 0.5]);
    }

    #[test]
    fn no_colors_no_stops() {
        assert!(resolve_stops(&[], None).is_empty());
    }

    #[test]
    fn along_pairs_stops_with_colors() {
        let g = LinearGradient::along(
            Vec2::zero(),
            Vec2::new(100.0, 0.0),
            &[Color::black(), Color::white()],
            None,
        );
        assert_eq!(g.stops.len(), 2);
        assert_eq!(g.stops[0].t, 0.0);
        assert_eq!(g.stops[1].t, 0.5);
        assert!(g.is_valid());
    }

    #[test]
    fn degenerate_span_is_invalid() {
        let g = LinearGradient::along(
            Vec2::zero(),
            Vec2::zero(),
            &[Color::black(), Color::white()],
            None,
        );
        assert!(!g.is_valid());
    }
}
