//! # Hull Driver
//!
//! Runs the kinetic merge twice over one x-sorted arena: once as given for
//! the lower hull, once with z mirrored for the upper hull.
//!
//! ## Pipeline
//!
//! ```text
//! input → index + rotate → sort by x → lower pass (Deletion parity)
//!       → unlink, mirror z → lower pass (Insertion parity)
//!       → concatenate, sort
//! ```
//!
//! Facets are not de-duplicated: each facet of a hull in general position is
//! found by exactly one of the two passes.

#[cfg(test)]
mod tests;

use crate::chain::{Chain, ChainEvent};
use crate::error::{HullError, HullResult};
use crate::facet::{extract_facets, Facet};
use crate::merge::lower_hull;
use crate::point::Point;
use config::constants::{HullConfig, MIN_HULL_POINTS};
use glam::DVec3;
use log::debug;

/// Computes the convex hull of `points` with the default configuration.
///
/// # Returns
///
/// Canonical facets, sorted, naming indices into `points`. Facets are
/// oriented counter-clockwise seen from outside.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use kinetic_hull::{convex_hull, Facet};
///
/// let points = [
///     DVec3::new(0.0, 0.0, 0.0),
///     DVec3::new(1.0, 0.0, 0.0),
///     DVec3::new(0.0, 1.0, 0.0),
///     DVec3::new(0.0, 0.0, 1.0),
/// ];
/// let facets = convex_hull(&points).unwrap();
/// assert_eq!(
///     facets,
///     vec![
///         Facet::new(0, 1, 3),
///         Facet::new(0, 2, 1),
///         Facet::new(0, 3, 2),
///         Facet::new(1, 2, 3),
///     ]
/// );
/// ```
pub fn convex_hull(points: &[DVec3]) -> HullResult<Vec<Facet>> {
    convex_hull_with(points, &HullConfig::default())
}

/// Computes the convex hull of `points`, perturbing them by
/// `config.perturbation_angle` first.
pub fn convex_hull_with(points: &[DVec3], config: &HullConfig) -> HullResult<Vec<Facet>> {
    hull_of_points(perturbed_points(points, config.perturbation_angle))
}

/// Computes the convex hull of points that are already in general position.
///
/// No perturbation is applied: callers own the general-position
/// precondition. Point indices are taken from [`Point::index`] and any
/// existing links are discarded.
///
/// # Errors
///
/// - [`HullError::InsufficientPoints`] for fewer than four points
/// - [`HullError::InvalidCoordinate`] for a NaN or infinite coordinate
pub fn hull_of_points(points: Vec<Point>) -> HullResult<Vec<Facet>> {
    if points.len() < MIN_HULL_POINTS {
        return Err(HullError::InsufficientPoints {
            count: points.len(),
            min: MIN_HULL_POINTS,
        });
    }
    check_finite(&points)?;

    let mut chain = Chain::new(points);
    chain.unlink_all();

    let mut facets = lower_pass(&mut chain, ChainEvent::Deletion);
    let lower_count = facets.len();

    chain.unlink_all();
    chain.invert_z_axis();
    facets.extend(lower_pass(&mut chain, ChainEvent::Insertion));

    debug!(
        "hull of {} points: {} lower + {} upper facets",
        chain.len(),
        lower_count,
        facets.len() - lower_count
    );

    facets.sort();
    Ok(facets)
}

/// Indexes `positions` in input order and rotates each by `angle`.
pub fn perturbed_points(positions: &[DVec3], angle: f64) -> Vec<Point> {
    positions
        .iter()
        .enumerate()
        .map(|(index, &position)| {
            let mut point = Point::new(position, index);
            point.apply_rotation(angle);
            point
        })
        .collect()
}

/// Runs one kinetic lower-hull pass over the whole arena and extracts its
/// facets with the given parity.
pub(crate) fn lower_pass(chain: &mut Chain, parity: ChainEvent) -> Vec<Facet> {
    let count = chain.len();
    let movie = lower_hull(chain, 0..count);
    debug!("lower pass over {count} points: {} events", movie.len());
    extract_facets(chain, &movie, parity)
}

/// Rejects points with NaN or infinite coordinates.
pub(crate) fn check_finite(points: &[Point]) -> HullResult<()> {
    match points.iter().find(|point| !point.is_finite()) {
        Some(point) => Err(HullError::InvalidCoordinate { index: point.index }),
        None => Ok(()),
    }
}
