//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw submissions in emission order
//! - keep the per-group layer-isolation brackets balanced
//! - own the path element buffers submissions point into
//!
//! A host renderer walks [`DrawList::items`] front to back; ordering is the
//! contract (border underlay, cutout, primary within each group).

mod cmd;
mod list;
mod path;

pub use cmd::{DrawCmd, PathCmd};
pub use list::DrawList;
pub use path::{Path, PathEl};
