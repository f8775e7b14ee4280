//! # Spatial Point
//!
//! A point record in the chain arena: coordinates, the caller's index and
//! the two chain links. Links are arena slots, not references, so a point
//! can be spliced in and out of a chain in O(1) without owning its
//! neighbors.

use glam::DVec3;

/// A 3D point with a stable input index and doubly-linked chain links.
///
/// `next` and `prev` hold arena slots (positions in the x-sorted
/// [`Chain`](crate::chain::Chain)), never input indices.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use kinetic_hull::Point;
///
/// let mut point = Point::new(DVec3::new(1.0, 2.0, 3.0), 0);
/// point.invert_z_axis();
/// assert_eq!(point.position.z, -3.0);
/// assert!(point.is_unlinked());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Coordinates (f64 throughout).
    pub position: DVec3,
    /// Index of the point in the caller's input.
    pub index: usize,
    /// Slot of the successor in the chain.
    pub next: Option<usize>,
    /// Slot of the predecessor in the chain.
    pub prev: Option<usize>,
}

impl Point {
    /// Creates an unlinked point.
    pub fn new(position: DVec3, index: usize) -> Self {
        Self {
            position,
            index,
            next: None,
            prev: None,
        }
    }

    /// Returns the x-coordinate, the sweep's ordering key.
    #[inline]
    pub fn x(&self) -> f64 {
        self.position.x
    }

    /// Rotates the point about the origin by `angle` radians in the XY,
    /// XZ and YZ planes, in that order.
    ///
    /// Used to push input into general position: distinct x-coordinates and
    /// no collinear triples in the XY projection. The plane rotations are
    /// applied in sequence, never folded into one matrix: on integer input
    /// the last-bit rounding decides ties.
    pub fn apply_rotation(&mut self, angle: f64) {
        let (s, c) = angle.sin_cos();
        let DVec3 { x, y, z } = self.position;

        let (x, y) = (x * c - y * s, x * s + y * c);
        let (x, z) = (x * c - z * s, x * s + z * c);
        let (y, z) = (y * c - z * s, y * s + z * c);

        self.position = DVec3::new(x, y, z);
    }

    /// Mirrors the point through the XY plane.
    ///
    /// The upper hull of a set is the lower hull of its mirror image.
    pub fn invert_z_axis(&mut self) {
        self.position.z = -self.position.z;
    }

    /// Drops both chain links.
    pub fn unlink(&mut self) {
        self.next = None;
        self.prev = None;
    }

    /// Returns true if the point has no chain links.
    pub fn is_unlinked(&self) -> bool {
        self.next.is_none() && self.prev.is_none()
    }

    /// Returns true if every coordinate is finite.
    pub fn is_finite(&self) -> bool {
        self.position.is_finite()
    }
}
