use std::cell::OnceCell;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::coords::{GeoBounds, GeoPoint};
use crate::paint::{Color, StrokeCap, StrokeJoin};

/// Smallest stroke width accepted. Non-positive widths are clamped up to
/// this instead of failing the frame; a degenerate hairline beats a panic in
/// a rendering layer.
const MIN_STROKE_WIDTH: f32 = 0.001;

/// Dash expansion algorithm. The two produce visibly different output, so
/// the choice is part of the style rather than a crate-wide setting.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum DashStrategy {
    /// Per segment, distribute `floor(len / (dash + gap))` dashes evenly so
    /// the pattern ends exactly at the segment end; dashes are capped line
    /// strokes inset half a stroke width from the segment ends.
    #[default]
    Balanced,
    /// Walk the segment in fixed `dash + gap` steps, dropping a trailing
    /// partial dash; dashes are rectangle-like two-point strokes offset by
    /// the perpendicular half width.
    Stepped,
}

/// Stroke pattern of a polyline.
///
/// `gap` is always a multiple of the effective stroke width so the pattern
/// scales with line thickness (and with zoom for meter-width lines).
/// `length` is device pixels for [`DashStrategy::Balanced`] and a width
/// multiple for [`DashStrategy::Stepped`].
#[derive(Debug, Clone, PartialEq)]
pub enum StrokePattern {
    Solid,
    /// Filled circles of radius `width / 2` spaced `1.5 × width` apart.
    Dotted,
    Dashed {
        strategy: DashStrategy,
        length: f32,
        gap: f32,
    },
}

/// Color source of the primary stroke.
#[derive(Debug, Clone, PartialEq)]
pub enum LineColor {
    Solid(Color),
    /// Multi-stop gradient spanning the first to the last projected point.
    /// `stops` are used verbatim only when their count matches `colors`;
    /// otherwise uniform stops are computed at render time.
    Gradient {
        colors: Vec<Color>,
        stops: Option<Vec<f32>>,
    },
}

/// Border halo drawn around the primary stroke.
///
/// Rendered as an underlay `stroke_width + width` wide plus an erase-blended
/// cutout of the primary footprint, leaving a ring.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Color,
}

impl Border {
    #[inline]
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}

/// One renderable polyline: geographic geometry plus visual style.
///
/// Immutable after construction. The two derived fields (geographic bounds,
/// style key) are computed lazily, exactly once, through explicit
/// compute-once cells.
#[derive(Debug)]
pub struct Polyline {
    points: Vec<GeoPoint>,
    stroke_width: f32,
    color: LineColor,
    border: Option<Border>,
    pattern: StrokePattern,
    cap: StrokeCap,
    join: StrokeJoin,
    width_in_meters: bool,

    bounds: OnceCell<Option<GeoBounds>>,
    style_key: OnceCell<u64>,
}

impl Polyline {
    /// A solid black line, one logical pixel wide.
    pub fn new(points: Vec<GeoPoint>) -> Self {
        Self {
            points,
            stroke_width: 1.0,
            color: LineColor::Solid(Color::black()),
            border: None,
            pattern: StrokePattern::Solid,
            cap: StrokeCap::default(),
            join: StrokeJoin::default(),
            width_in_meters: false,
            bounds: OnceCell::new(),
            style_key: OnceCell::new(),
        }
    }

    // ── builder-style configuration ───────────────────────────────────────

    /// Non-positive widths are clamped to a minimum hairline.
    pub fn with_stroke_width(mut self, width: f32) -> Self {
        if width < MIN_STROKE_WIDTH {
            log::trace!("stroke width {width} clamped to {MIN_STROKE_WIDTH}");
        }
        self.stroke_width = width.max(MIN_STROKE_WIDTH);
        self.style_key.take();
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = LineColor::Solid(color);
        self.style_key.take();
        self
    }

    pub fn with_gradient(mut self, colors: Vec<Color>, stops: Option<Vec<f32>>) -> Self {
        self.color = LineColor::Gradient { colors, stops };
        self.style_key.take();
        self
    }

    pub fn with_border(mut self, width: f32, color: Color) -> Self {
        self.border = Some(Border::new(width, color));
        self.style_key.take();
        self
    }

    pub fn with_pattern(mut self, pattern: StrokePattern) -> Self {
        self.pattern = pattern;
        self.style_key.take();
        self
    }

    pub fn dotted(self) -> Self {
        self.with_pattern(StrokePattern::Dotted)
    }

    pub fn dashed(self, strategy: DashStrategy, length: f32, gap: f32) -> Self {
        self.with_pattern(StrokePattern::Dashed {
            strategy,
            length,
            gap,
        })
    }

    pub fn with_cap(mut self, cap: StrokeCap) -> Self {
        self.cap = cap;
        self.style_key.take();
        self
    }

    pub fn with_join(mut self, join: StrokeJoin) -> Self {
        self.join = join;
        self.style_key.take();
        self
    }

    /// When set, `stroke_width` is a ground distance in meters, converted to
    /// device pixels every frame via the projector.
    pub fn with_width_in_meters(mut self, enabled: bool) -> Self {
        self.width_in_meters = enabled;
        self.style_key.take();
        self
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    #[inline]
    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    #[inline]
    pub fn color(&self) -> &LineColor {
        &self.color
    }

    #[inline]
    pub fn border(&self) -> Option<Border> {
        self.border
    }

    #[inline]
    pub fn pattern(&self) -> &StrokePattern {
        &self.pattern
    }

    #[inline]
    pub fn cap(&self) -> StrokeCap {
        self.cap
    }

    #[inline]
    pub fn join(&self) -> StrokeJoin {
        self.join
    }

    #[inline]
    pub fn width_in_meters(&self) -> bool {
        self.width_in_meters
    }

    // ── derived, memoized ─────────────────────────────────────────────────

    /// Minimal geographic bounding box over the points; `None` for empty
    /// geometry. Computed once and reused.
    pub fn bounds(&self) -> Option<GeoBounds> {
        *self
            .bounds
            .get_or_init(|| GeoBounds::from_points(&self.points))
    }

    /// Style key: hash over every styling field and none of the geometry.
    ///
    /// Two polylines with equal keys batch into one draw submission; the key
    /// is stable within a process run, which is the only scope batching and
    /// repaint decisions need.
    pub fn style_key(&self) -> u64 {
        *self.style_key.get_or_init(|| {
            let mut h = DefaultHasher::new();
            self.hash_style(&mut h);
            h.finish()
        })
    }

    fn hash_style<H: Hasher>(&self, h: &mut H) {
        self.stroke_width.to_bits().hash(h);

        match &self.color {
            LineColor::Solid(c) => {
                0u8.hash(h);
                c.to_bits().hash(h);
            }
            LineColor::Gradient { colors, stops } => {
                1u8.hash(h);
                colors.len().hash(h);
                for c in colors {
                    c.to_bits().hash(h);
                }
                match stops {
                    None => 0u8.hash(h),
                    Some(stops) => {
                        1u8.hash(h);
                        stops.len().hash(h);
                        for s in stops {
                            s.to_bits().hash(h);
                        }
                    }
                }
            }
        }

        match self.border {
            None => 0u8.hash(h),
            Some(b) => {
                1u8.hash(h);
                b.width.to_bits().hash(h);
                b.color.to_bits().hash(h);
            }
        }

        match &self.pattern {
            StrokePattern::Solid => 0u8.hash(h),
            StrokePattern::Dotted => 1u8.hash(h),
            StrokePattern::Dashed {
                strategy,
                length,
                gap,
            } => {
                2u8.hash(h);
                strategy.hash(h);
                length.to_bits().hash(h);
                gap.to_bits().hash(h);
            }
        }

        self.cap.hash(h);
        self.join.hash(h);
        self.width_in_meters.hash(h);
    }
}

/// Content key over an ordered polyline slice: styles plus geometry.
///
/// Feeds the repaint decision — if neither the view transform nor this key
/// changed, the previous raster can be reused.
pub fn scene_key(polylines: &[Polyline]) -> u64 {
    let mut h = DefaultHasher::new();
    polylines.len().hash(&mut h);
    for line in polylines {
        line.style_key().hash(&mut h);
        line.points().len().hash(&mut h);
        for p in line.points() {
            p.lat.to_bits().hash(&mut h);
            p.lng.to_bits().hash(&mut h);
        }
    }
    h.finish()
}
