use super::Vec2;

/// Axis-aligned rectangle in logical pixels, stored as min/max corners.
///
/// Corner form (rather than origin/size) because this crate grows boxes
/// point-by-point while walking geometry.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Degenerate rectangle covering a single point.
    #[inline]
    pub const fn at(p: Vec2) -> Self {
        Self { min: p, max: p }
    }

    /// Minimal rectangle containing every point, or `None` for empty input.
    pub fn from_points(points: &[Vec2]) -> Option<Self> {
        let (&first, rest) = points.split_first()?;
        let mut r = Rect::at(first);
        for &p in rest {
            r = r.expanded(p);
        }
        Some(r)
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Grows the rectangle to contain `p`.
    #[inline]
    pub fn expanded(self, p: Vec2) -> Self {
        Rect {
            min: Vec2::new(self.min.x.min(p.x), self.min.y.min(p.y)),
            max: Vec2::new(self.max.x.max(p.x), self.max.y.max(p.y)),
        }
    }

    /// Smallest rectangle containing both.
    #[inline]
    pub fn union(self, other: Rect) -> Self {
        self.expanded(other.min).expanded(other.max)
    }

    /// Closed-interval containment: both edges inclusive.
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// True when the rectangles share any area or edge.
    #[inline]
    pub fn overlaps(self, other: Rect) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }
}
