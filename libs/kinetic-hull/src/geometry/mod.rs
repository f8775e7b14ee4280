//! # Critical-Time Geometry
//!
//! Orientation tests on the XY projection and the synthetic time at which a
//! triple of chained points changes orientation.
//!
//! ## Kinetic Interpretation
//!
//! For a slope `t`, the kinetic 2D hull is the lower hull of the points
//! `(x, z - t·y)`. Near `t = -∞` this is the lower hull of the XY
//! projection; as `t` grows the hull changes only at the times where three
//! consecutive chain points become collinear. The merge never materializes
//! the tilted coordinates; it only compares these times.
//!
//! Every function takes optional positions: a missing neighbor at a chain
//! boundary yields "no turn" and "no event" instead of a sentinel number.

#[cfg(test)]
mod tests;

use glam::DVec3;

/// Signed doubled area of the triangle `(a, b, c)` projected onto the XY
/// plane.
///
/// Returns `None` if any point is absent.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use kinetic_hull::geometry::turn;
///
/// let a = DVec3::new(0.0, 0.0, 5.0);
/// let b = DVec3::new(1.0, 0.0, -2.0);
/// let c = DVec3::new(1.0, 1.0, 0.0);
/// assert_eq!(turn(Some(a), Some(b), Some(c)), Some(1.0));
/// assert_eq!(turn(None, Some(b), Some(c)), None);
/// ```
#[inline]
pub fn turn(a: Option<DVec3>, b: Option<DVec3>, c: Option<DVec3>) -> Option<f64> {
    let (a, b, c) = (a?, b?, c?);
    Some((b.x - a.x) * (c.y - b.y) - (b.y - a.y) * (c.x - b.x))
}

/// Returns true if `(a, b, c)` turns clockwise in the XY projection.
///
/// A missing point never turns.
#[inline]
pub fn clockwise_turn(a: Option<DVec3>, b: Option<DVec3>, c: Option<DVec3>) -> bool {
    turn(a, b, c).is_some_and(|area| area < 0.0)
}

/// Time at which the triple `(a, b, c)` becomes collinear under the tilted
/// projection.
///
/// Computed as the XZ turn of the triple over its XY turn. Returns `None`
/// when a point is absent, when the XY turn is exactly zero, or when the
/// quotient is not finite: such a triple never switches.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use kinetic_hull::geometry::orientation_switch_time;
///
/// let a = DVec3::new(0.0, 0.0, 0.0);
/// let b = DVec3::new(1.0, -1.0, 0.0);
/// let c = DVec3::new(2.0, 0.0, 0.0);
/// assert_eq!(orientation_switch_time(Some(a), Some(b), Some(c)), Some(0.0));
/// ```
pub fn orientation_switch_time(
    a: Option<DVec3>,
    b: Option<DVec3>,
    c: Option<DVec3>,
) -> Option<f64> {
    let area = turn(a, b, c)?;
    if area == 0.0 {
        return None;
    }

    let (a, b, c) = (a?, b?, c?);
    let tilt = (b.x - a.x) * (c.z - b.z) - (b.z - a.z) * (c.x - b.x);
    Some(tilt / area).filter(|time| time.is_finite())
}
