use beacon_geom::{COORD_LIMIT, Cube, Point};

/// A broadcaster covering every point within `radius` (Manhattan) of `center`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Emitter {
    pub center: Point,
    pub radius: i64,
}

impl Emitter {
    #[inline]
    pub const fn new(center: Point, radius: i64) -> Self {
        Self { center, radius }
    }

    #[inline]
    pub fn reaches(&self, p: Point) -> bool {
        self.center.distance(p) <= self.radius
    }

    /// Whether this emitter's center lies inside `other`'s range.
    #[inline]
    pub fn within_range_of(&self, other: &Emitter) -> bool {
        other.reaches(self.center)
    }

    /// True if some lattice point of `cube` is in range. Exact, not approximate.
    #[inline]
    pub fn could_reach_cube(&self, cube: &Cube) -> bool {
        cube.distance_to(self.center) <= self.radius
    }

    /// Lowest corner of the range's bounding box.
    #[inline]
    pub fn min_extent(&self) -> Point {
        self.center - Point::splat(self.radius)
    }

    /// Highest corner of the range's bounding box.
    #[inline]
    pub fn max_extent(&self) -> Point {
        self.center + Point::splat(self.radius)
    }

    /// Center and radius both lie within `COORD_LIMIT`, so the extents and
    /// every distance the search takes fit in `i64`.
    pub fn within_limit(&self) -> bool {
        self.center.within_limit() && (0..=COORD_LIMIT).contains(&self.radius)
    }
}
