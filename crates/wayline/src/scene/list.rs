use crate::paint::StrokePaint;

use super::{DrawCmd, Path, PathCmd};

/// Recorded draw stream for a frame.
///
/// Emission order is paint order; there is no z-sorting — the compositor
/// already emits groups in input order and sub-passes in their required
/// order (underlay, cutout, primary).
///
/// `push_layer` / `pop_layer` calls must be balanced; the compositor brackets
/// each group with them when isolation is enabled.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawCmd>,
    /// Open `PushLayer` brackets; only used to assert balance.
    layer_depth: u32,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.layer_depth = 0;
    }

    /// Returns commands in emission (paint) order.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
    }

    /// Records a path submission.
    #[inline]
    pub fn push_path(&mut self, path: Path, paint: StrokePaint) {
        self.push(DrawCmd::Path(PathCmd::new(path, paint)));
    }

    /// Begins an isolated compositing layer. Must be balanced with
    /// [`pop_layer`](DrawList::pop_layer).
    #[inline]
    pub fn push_layer(&mut self) {
        self.layer_depth += 1;
        self.push(DrawCmd::PushLayer);
    }

    /// Ends the most recent isolated compositing layer.
    ///
    /// # Panics
    /// Panics (debug only) if called without a matching `push_layer`.
    #[inline]
    pub fn pop_layer(&mut self) {
        debug_assert!(self.layer_depth > 0, "pop_layer without matching push_layer");
        self.layer_depth = self.layer_depth.saturating_sub(1);
        self.push(DrawCmd::PopLayer);
    }

    /// Path submissions only, in order, skipping layer brackets.
    pub fn paths(&self) -> impl Iterator<Item = &PathCmd> {
        self.items.iter().filter_map(|cmd| match cmd {
            DrawCmd::Path(p) => Some(p),
            _ => None,
        })
    }
}
