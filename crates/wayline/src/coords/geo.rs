/// Geographic coordinate in degrees.
///
/// `lat` in [-90, 90], `lng` in [-180, 180] by convention; not enforced here.
/// Projection to device space is entirely the host's business.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    #[inline]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

/// Geographic axis-aligned bounding box.
///
/// `south <= north` and `west <= east`; boxes never wrap the antimeridian
/// (a polyline crossing it produces one wide box, which only costs culling
/// precision, never correctness).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GeoBounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl GeoBounds {
    /// Degenerate box covering a single point.
    #[inline]
    pub const fn at(p: GeoPoint) -> Self {
        Self {
            south: p.lat,
            west: p.lng,
            north: p.lat,
            east: p.lng,
        }
    }

    /// Minimal box containing every point, or `None` for empty input.
    pub fn from_points(points: &[GeoPoint]) -> Option<Self> {
        let (&first, rest) = points.split_first()?;
        let mut b = GeoBounds::at(first);
        for &p in rest {
            b.extend(p);
        }
        Some(b)
    }

    /// Grows the box to contain `p`.
    pub fn extend(&mut self, p: GeoPoint) {
        self.south = self.south.min(p.lat);
        self.west = self.west.min(p.lng);
        self.north = self.north.max(p.lat);
        self.east = self.east.max(p.lng);
    }

    /// Viewport-overlap predicate used by hosts for culling (edge contact
    /// counts as overlap).
    #[inline]
    pub fn overlaps(&self, other: &GeoBounds) -> bool {
        self.west <= other.east
            && other.west <= self.east
            && self.south <= other.north
            && other.south <= self.north
    }

    #[inline]
    pub fn contains(&self, p: GeoPoint) -> bool {
        p.lat >= self.south && p.lat <= self.north && p.lng >= self.west && p.lng <= self.east
    }
}
