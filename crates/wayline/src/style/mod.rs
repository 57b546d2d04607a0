//! Polyline style model.
//!
//! Responsibilities:
//! - describe one renderable polyline (geometry + visual style), immutable
//!   after construction
//! - memoize the derived geographic bounds and the style key used for
//!   batching and repaint decisions
//!
//! Invalid style combinations (dotted *and* dashed, gradient *and* flat
//! color) are unrepresentable: pattern and color source are tagged variants.

mod polyline;

pub use polyline::{scene_key, Border, DashStrategy, LineColor, Polyline, StrokePattern};
