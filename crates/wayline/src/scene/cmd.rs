use crate::paint::StrokePaint;
use crate::scene::Path;

/// Path draw payload: geometry plus the one paint configuration it is
/// rasterized with.
#[derive(Debug, Clone, PartialEq)]
pub struct PathCmd {
    pub path: Path,
    pub paint: StrokePaint,
}

impl PathCmd {
    #[inline]
    pub fn new(path: Path, paint: StrokePaint) -> Self {
        Self { path, paint }
    }
}

/// Renderer-agnostic draw command stream.
///
/// `PushLayer`/`PopLayer` bracket a polyline group when per-group isolation
/// is enabled: the host composites everything in between through a
/// transparency layer so the group's cutout pass cannot erase earlier
/// groups.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Path(PathCmd),
    PushLayer,
    PopLayer,
}
