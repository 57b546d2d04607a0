//! Coordinate and geometry types.
//!
//! Two coordinate spaces meet in this crate:
//! - **Geographic**: latitude/longitude degrees (`f64`), host projection input
//! - **Device**: logical pixels (`f32`), origin top-left, +X right, +Y down
//!
//! The host's projector converts between them per frame; nothing in this
//! module caches a projection.

mod geo;
mod rect;
mod vec2;

pub use geo::{GeoBounds, GeoPoint};
pub use rect::Rect;
pub use vec2::Vec2;
