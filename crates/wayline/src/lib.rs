//! Wayline: styled polyline rendering layer for interactive maps.
//!
//! The crate turns an ordered list of styled polylines into a
//! renderer-agnostic draw stream:
//! - project geographic points into device space (host-supplied [`Projector`])
//! - expand stroke patterns (solid / dotted / dashed) into path geometry
//! - composite optional border halos via underlay + cutout sub-passes
//! - batch consecutive polylines of identical style into one submission
//!
//! The crate ends at the draw-stream boundary: a host renderer consumes the
//! recorded [`scene::DrawList`] and owns rasterization, clipping, and layout.
//!
//! [`Projector`]: layer::Projector

pub mod logging;
pub mod coords;
pub mod paint;
pub mod scene;
pub mod style;
pub mod layer;
