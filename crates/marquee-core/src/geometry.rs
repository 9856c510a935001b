#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! Coordinates are `f32` pixels in container-relative space (origin at the
//! container's top-left, y growing downward). [`Rect`] is the live drag
//! rectangle; [`BoundingBox`] is an edge-based candidate box as reported by
//! the host. Intersection is boundary-inclusive: boxes that merely touch
//! count as intersecting.

/// A 2D point in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Component-wise absolute distance to another point.
    #[must_use]
    pub fn axis_distance(self, other: Self) -> (f32, f32) {
        ((self.x - other.x).abs(), (self.y - other.y).abs())
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// A normalized rectangle with non-negative extent.
///
/// Invariant: `width >= 0` and `height >= 0`. Construct via
/// [`Rect::from_corners`] to derive a normalized rectangle from an anchor
/// and a live pointer point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge.
    pub left: f32,
    /// Top edge.
    pub top: f32,
    /// Width (non-negative).
    pub width: f32,
    /// Height (non-negative).
    pub height: f32,
}

impl Rect {
    /// Create a rectangle from position and size.
    #[inline]
    #[must_use]
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Normalize two opposite corners into a rectangle.
    ///
    /// The result always has `left == min(a.x, b.x)`, `top == min(a.y, b.y)`
    /// and non-negative width/height, regardless of corner order.
    #[must_use]
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            left: a.x.min(b.x),
            top: a.y.min(b.y),
            width: (a.x - b.x).abs(),
            height: (a.y - b.y).abs(),
        }
    }

    /// Right edge (inclusive).
    #[inline]
    #[must_use]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    /// Bottom edge (inclusive).
    #[inline]
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// View this rectangle as an edge-based box.
    #[inline]
    #[must_use]
    pub fn as_box(&self) -> BoundingBox {
        BoundingBox {
            left: self.left,
            top: self.top,
            right: self.right(),
            bottom: self.bottom(),
        }
    }

}

/// An axis-aligned box described by its four edges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl BoundingBox {
    /// Create a box from its edges.
    #[inline]
    #[must_use]
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Translate the box by the given offsets.
    #[must_use]
    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        Self {
            left: self.left + dx,
            top: self.top + dy,
            right: self.right + dx,
            bottom: self.bottom + dy,
        }
    }

    /// Boundary-inclusive AABB overlap test.
    ///
    /// Two boxes intersect unless one lies strictly to the left, right,
    /// above, or below the other. Touching edges count as intersecting.
    #[must_use]
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        !(other.right < self.left
            || other.left > self.right
            || other.bottom < self.top
            || other.top > self.bottom)
    }

    /// Check whether a point lies inside the box (edges inclusive).
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left && point.x <= self.right && point.y >= self.top && point.y <= self.bottom
    }
}
