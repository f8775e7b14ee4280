//! # Facets
//!
//! Triangular hull facets named by input indices, their extraction from a
//! lower-hull movie, and a closed-surface check.

use crate::chain::{Chain, ChainEvent};
use crate::error::{HullError, HullResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A hull triangle `(i, j, k)` of input indices.
///
/// Canonical facets start at their smallest index; the cyclic order, and
/// so the orientation, is preserved. Ordering is lexicographic on
/// `(i, j, k)`.
///
/// # Example
///
/// ```rust
/// use kinetic_hull::Facet;
///
/// let facet = Facet::canonical(5, 2, 9);
/// assert_eq!(facet, Facet::new(2, 9, 5));
/// assert_eq!(facet.to_string(), "2 9 5");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Facet {
    pub i: usize,
    pub j: usize,
    pub k: usize,
}

impl Facet {
    /// Creates a facet without reordering.
    pub fn new(i: usize, j: usize, k: usize) -> Self {
        Self { i, j, k }
    }

    /// Creates a facet rotated to its canonical start.
    pub fn canonical(i: usize, j: usize, k: usize) -> Self {
        let mut facet = Self::new(i, j, k);
        facet.canonicalize();
        facet
    }

    /// Rotates the indices so the smallest comes first.
    pub fn canonicalize(&mut self) {
        let Self { i, j, k } = *self;
        if j < k && j < i {
            *self = Self::new(j, k, i);
        } else if k < i && k < j {
            *self = Self::new(k, i, j);
        }
    }

    /// Returns true if the smallest index is first.
    pub fn is_canonical(&self) -> bool {
        self.i < self.j && self.i < self.k
    }

    /// Returns the indices in order.
    pub fn vertices(&self) -> [usize; 3] {
        [self.i, self.j, self.k]
    }

    /// Returns the three directed edges in rotation order.
    pub fn edges(&self) -> [(usize, usize); 3] {
        [(self.i, self.j), (self.j, self.k), (self.k, self.i)]
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.i, self.j, self.k)
    }
}

// =============================================================================
// EXTRACTION
// =============================================================================

/// Converts a movie into facets, consuming its events.
///
/// Each event point forms a facet with its two neighbors. Triggering the
/// event tells which way the chain moved; when that matches `parity` the
/// first two indices swap so every facet faces outward. The lower pass uses
/// [`ChainEvent::Deletion`] parity; the z-mirrored upper pass uses
/// [`ChainEvent::Insertion`].
///
/// # Panics
///
/// Panics if a movie point lacks a neighbor.
pub fn extract_facets(chain: &mut Chain, movie: &[usize], parity: ChainEvent) -> Vec<Facet> {
    movie
        .iter()
        .map(|&slot| {
            let (prev, next) = chain.neighbors(slot);
            let mut facet = Facet::new(chain.index(prev), chain.index(slot), chain.index(next));

            if chain.trigger_event(slot) == parity {
                std::mem::swap(&mut facet.i, &mut facet.j);
            }

            facet.canonicalize();
            facet
        })
        .collect()
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Checks that `facets` form a closed, consistently oriented surface.
///
/// Every directed edge must appear exactly once, together with its reverse.
///
/// # Example
///
/// ```rust
/// use kinetic_hull::{validate_closed, Facet};
///
/// let tetrahedron = [
///     Facet::new(0, 1, 2),
///     Facet::new(0, 2, 3),
///     Facet::new(0, 3, 1),
///     Facet::new(1, 3, 2),
/// ];
/// assert!(validate_closed(&tetrahedron).is_ok());
/// assert!(validate_closed(&tetrahedron[..3]).is_err());
/// ```
pub fn validate_closed(facets: &[Facet]) -> HullResult<()> {
    let mut edges: HashMap<(usize, usize), usize> = HashMap::new();
    for facet in facets {
        if facet.i == facet.j || facet.j == facet.k || facet.k == facet.i {
            return Err(HullError::invalid_topology(format!(
                "facet {facet} repeats a vertex"
            )));
        }
        for edge in facet.edges() {
            *edges.entry(edge).or_default() += 1;
        }
    }

    for (&(a, b), &count) in &edges {
        if count != 1 {
            return Err(HullError::invalid_topology(format!(
                "edge {a}->{b} used by {count} facets"
            )));
        }
        if !edges.contains_key(&(b, a)) {
            return Err(HullError::invalid_topology(format!(
                "edge {a}->{b} has no opposite edge"
            )));
        }
    }

    Ok(())
}
