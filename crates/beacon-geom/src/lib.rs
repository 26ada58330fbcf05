//! Integer lattice geometry under the Manhattan metric: points and power-of-two cubes.
#![forbid(unsafe_code)]

use core::fmt;
use core::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// Largest magnitude accepted for a coordinate or a radius.
///
/// With every input inside `±COORD_LIMIT` the padded bounding cube, its far
/// corner and any three-axis distance all stay below `i64::MAX`.
pub const COORD_LIMIT: i64 = 1 << 59;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "[i64; 3]", into = "[i64; 3]")]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct Point {
    #[cfg_attr(test, proptest(strategy = "-1_000_000i64..1_000_000"))]
    pub x: i64,
    #[cfg_attr(test, proptest(strategy = "-1_000_000i64..1_000_000"))]
    pub y: i64,
    #[cfg_attr(test, proptest(strategy = "-1_000_000i64..1_000_000"))]
    pub z: i64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0, z: 0 };

    #[inline]
    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn splat(v: i64) -> Self {
        Self { x: v, y: v, z: v }
    }

    /// Manhattan (L1) distance.
    #[inline]
    pub fn distance(self, other: Point) -> i64 {
        (self.x - other.x).abs() + (self.y - other.y).abs() + (self.z - other.z).abs()
    }

    #[inline]
    pub fn distance_to_origin(self) -> i64 {
        self.distance(Point::ORIGIN)
    }

    #[inline]
    pub fn component_min(self, other: Point) -> Point {
        Point::new(self.x.min(other.x), self.y.min(other.y), self.z.min(other.z))
    }

    #[inline]
    pub fn component_max(self, other: Point) -> Point {
        Point::new(self.x.max(other.x), self.y.max(other.y), self.z.max(other.z))
    }

    #[inline]
    pub fn axes(self) -> [i64; 3] {
        [self.x, self.y, self.z]
    }

    /// Every coordinate lies within `±COORD_LIMIT`.
    pub fn within_limit(self) -> bool {
        self.axes()
            .into_iter()
            .all(|v| v.unsigned_abs() <= COORD_LIMIT as u64)
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl From<[i64; 3]> for Point {
    fn from(v: [i64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl From<Point> for [i64; 3] {
    fn from(p: Point) -> Self {
        p.axes()
    }
}

impl From<(i64, i64, i64)> for Point {
    fn from(v: (i64, i64, i64)) -> Self {
        Self::new(v.0, v.1, v.2)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.x, self.y, self.z)
    }
}

/// Distance from `v` to the closed interval `[lo, hi]`; zero inside.
#[inline]
pub fn interval_distance(v: i64, lo: i64, hi: i64) -> i64 {
    if v < lo {
        lo - v
    } else if v > hi {
        v - hi
    } else {
        0
    }
}

/// Axis-aligned cube spanning `[corner, corner + side - 1]` on every axis.
///
/// `side` is always a power of two, so a cube halves cleanly down to a single
/// lattice point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cube {
    corner: Point,
    side: i64,
}

impl Cube {
    /// Returns `None` unless `side` is a positive power of two.
    pub fn new(corner: Point, side: i64) -> Option<Self> {
        if side > 0 && (side as u64).is_power_of_two() {
            Some(Self { corner, side })
        } else {
            None
        }
    }

    #[inline]
    pub const fn unit(corner: Point) -> Self {
        Self { corner, side: 1 }
    }

    /// Smallest cube anchored at `min` whose far corner reaches `max` on every axis.
    ///
    /// Axes where `max` lies below `min` are treated as empty spans.
    pub fn covering(min: Point, max: Point) -> Self {
        let span = (max - min).axes().into_iter().max().unwrap_or(0).max(0);
        let side = (span as u64 + 1).next_power_of_two() as i64;
        Self { corner: min, side }
    }

    #[inline]
    pub fn corner(&self) -> Point {
        self.corner
    }

    #[inline]
    pub fn side(&self) -> i64 {
        self.side
    }

    #[inline]
    pub fn is_unit(&self) -> bool {
        self.side == 1
    }

    /// Inclusive far corner.
    #[inline]
    pub fn far_corner(&self) -> Point {
        self.corner + Point::splat(self.side - 1)
    }

    pub fn contains(&self, p: Point) -> bool {
        self.distance_to(p) == 0
    }

    /// Minimum Manhattan distance from `p` to any lattice point of the cube.
    ///
    /// L1 separates per axis, so clamping each axis independently is exact.
    pub fn distance_to(&self, p: Point) -> i64 {
        let lo = self.corner;
        let hi = self.far_corner();
        interval_distance(p.x, lo.x, hi.x)
            + interval_distance(p.y, lo.y, hi.y)
            + interval_distance(p.z, lo.z, hi.z)
    }

    /// The eight half-size sub-cubes, ordered by (x, y, z) half with x most
    /// significant. `None` for a unit cube.
    pub fn octants(&self) -> Option<[Cube; 8]> {
        if self.is_unit() {
            return None;
        }
        let half = self.side / 2;
        let c = self.corner;
        Some(core::array::from_fn(|i| {
            let dx = if i & 0b100 != 0 { half } else { 0 };
            let dy = if i & 0b010 != 0 { half } else { 0 };
            let dz = if i & 0b001 != 0 { half } else { 0 };
            Cube {
                corner: c + Point::new(dx, dy, dz),
                side: half,
            }
        }))
    }

    /// Every lattice point in the cube, x-major. Intended for small cubes.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let lo = self.corner;
        let side = self.side;
        (0..side).flat_map(move |dx| {
            (0..side).flat_map(move |dy| {
                (0..side).map(move |dz| lo + Point::new(dx, dy, dz))
            })
        })
    }
}

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cube{}:{}", self.corner, self.side)
    }
}
