use super::Paint;

/// Shape drawn at the open ends of a stroked path.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum StrokeCap {
    Butt,
    #[default]
    Round,
    Square,
}

/// Shape drawn where two path segments meet.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum StrokeJoin {
    Miter,
    #[default]
    Round,
    Bevel,
}

/// Blend mode of one submission.
///
/// `DstOut` is the erase mode used by the border cutout pass: it subtracts
/// the stroke's footprint from what is already drawn.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum BlendMode {
    #[default]
    SrcOver,
    DstOut,
}

/// Whether a path's outline is stroked or its interior filled.
///
/// Dotted patterns submit filled circles; everything else strokes.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum PaintStyle {
    #[default]
    Stroke,
    Fill,
}

/// Full paint configuration of one draw submission.
///
/// A submission carries exactly one of these; a style change therefore forces
/// the compositor to flush (see `layer::compositor`).
#[derive(Debug, Clone, PartialEq)]
pub struct StrokePaint {
    pub paint: Paint,
    pub width: f32,
    pub cap: StrokeCap,
    pub join: StrokeJoin,
    pub blend: BlendMode,
    pub style: PaintStyle,
}

impl StrokePaint {
    /// Stroke configuration with default caps, joins, and blending.
    pub fn stroke(paint: impl Into<Paint>, width: f32) -> Self {
        Self {
            paint: paint.into(),
            width,
            cap: StrokeCap::default(),
            join: StrokeJoin::default(),
            blend: BlendMode::default(),
            style: PaintStyle::Stroke,
        }
    }

    /// Fill configuration (width is ignored by fills but kept for symmetry).
    pub fn fill(paint: impl Into<Paint>) -> Self {
        Self {
            paint: paint.into(),
            width: 0.0,
            cap: StrokeCap::default(),
            join: StrokeJoin::default(),
            blend: BlendMode::default(),
            style: PaintStyle::Fill,
        }
    }
}
