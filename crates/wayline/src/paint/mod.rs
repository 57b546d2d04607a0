//! Paint model for draw submissions.
//!
//! Scope:
//! - color representation (straight-alpha RGBA)
//! - paint sources (solid, linear gradient)
//! - stroke configuration (width, cap, join, blend, fill-vs-stroke)
//!
//! Geometry types remain in `coords`; path buffers in `scene`.

mod color;
mod gradient;
mod stroke;

pub use color::Color;
pub use gradient::{resolve_stops, ColorStop, LinearGradient};
pub use stroke::{BlendMode, PaintStyle, StrokeCap, StrokeJoin, StrokePaint};

/// Paint source for a submission.
///
/// Intentionally a small enum. Extend by adding variants (`RadialGradient`,
/// `Pattern`, ...) while keeping it stable for renderer dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    LinearGradient(LinearGradient),
}

impl Paint {
    #[inline]
    pub fn solid(color: Color) -> Self {
        Paint::Solid(color)
    }

    #[inline]
    pub fn is_opaque(&self) -> bool {
        match self {
            Paint::Solid(c) => c.a >= 1.0,
            Paint::LinearGradient(g) => g.stops.iter().all(|s| s.color.a >= 1.0),
        }
    }
}

impl From<Color> for Paint {
    #[inline]
    fn from(color: Color) -> Self {
        Paint::Solid(color)
    }
}
