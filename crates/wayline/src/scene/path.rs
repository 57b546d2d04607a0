use crate::coords::{Rect, Vec2};

/// One path element.
///
/// Circles are first-class rather than flattened to curves: dotted polylines
/// emit thousands of them and surfaces have a direct ellipse primitive.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathEl {
    MoveTo(Vec2),
    LineTo(Vec2),
    Circle { center: Vec2, radius: f32 },
}

/// Growable path buffer.
///
/// Reused across groups within a render pass via [`clear`](Path::clear);
/// capacity survives clearing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    els: Vec<PathEl>,
}

impl Path {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn elements(&self) -> &[PathEl] {
        &self.els
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.els.is_empty()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.els.clear();
    }

    #[inline]
    pub fn move_to(&mut self, p: Vec2) {
        self.els.push(PathEl::MoveTo(p));
    }

    #[inline]
    pub fn line_to(&mut self, p: Vec2) {
        self.els.push(PathEl::LineTo(p));
    }

    #[inline]
    pub fn circle(&mut self, center: Vec2, radius: f32) {
        self.els.push(PathEl::Circle { center, radius });
    }

    /// Appends every point as one open polyline (move to the first point,
    /// lines to the rest). No-op for empty input; a single point degenerates
    /// to a bare move.
    pub fn add_polyline(&mut self, points: &[Vec2]) {
        let Some((&first, rest)) = points.split_first() else {
            return;
        };
        self.move_to(first);
        for &p in rest {
            self.line_to(p);
        }
    }

    /// Device-space bounding box of all elements, `None` when empty.
    ///
    /// Circle extents include their radius; stroke width is the paint's
    /// business and not accounted for. Hosts use this to size cached layer
    /// backing stores.
    pub fn bounds(&self) -> Option<Rect> {
        let mut acc: Option<Rect> = None;
        for el in &self.els {
            let r = match *el {
                PathEl::MoveTo(p) | PathEl::LineTo(p) => Rect::at(p),
                PathEl::Circle { center, radius } => Rect::new(
                    center - Vec2::new(radius, radius),
                    center + Vec2::new(radius, radius),
                ),
            };
            acc = Some(match acc {
                Some(a) => a.union(r),
                None => r,
            });
        }
        acc
    }
}
