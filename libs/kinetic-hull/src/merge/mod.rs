//! # Lower-Hull Merge
//!
//! Recursive divide-and-conquer over an x-sorted [`Chain`]. Each call
//! returns the *movie* of its range: the points that enter or leave the
//! kinetic 2D lower hull, in the order their events happen as time sweeps
//! from -∞ to +∞.
//!
//! ## Algorithm Steps
//!
//! 1. Solve both halves recursively
//! 2. Walk the bridge `(u, v)` to its position at t = -∞
//! 3. Sweep: repeatedly take the earliest of six candidate events (next
//!    left-movie event, next right-movie event, four bridge moves) that
//!    lies strictly after the current time
//! 4. Link the final bridge
//! 5. Rewind the merged movie, restoring the chain to its t = -∞ state so
//!    the parent merge can replay it
//!
//! ## References
//!
//! - T. M. Chan, "A minimalist's implementation of the 3-d
//!   divide-and-conquer convex hull algorithm" (2003)


use crate::chain::Chain;
use log::trace;
use std::ops::Range;

/// Chronological list of chain events, as arena slots.
pub type Movie = Vec<usize>;

// =============================================================================
// BRIDGE STEPS
// =============================================================================

/// One step of the sweep, in tie-break priority order.
///
/// Bridge moves carry the slot the bridge end moves to, so a selected move
/// always has its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// Next event of the left movie.
    Left(usize),
    /// Next event of the right movie.
    Right(usize),
    /// `u` leaves the hull; the bridge retreats to `u.prev`.
    RetreatU(usize),
    /// `u.next` joins the hull and becomes `u`.
    AdvanceU(usize),
    /// `v.prev` joins the hull and becomes `v`.
    RetreatV(usize),
    /// `v` leaves the hull; the bridge advances to `v.next`.
    AdvanceV(usize),
}

/// The edge between the two half-hulls: `u` is on the left, `v` on the
/// right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Bridge {
    u: usize,
    v: usize,
}

impl Bridge {
    /// Walks the bridge from the split to its t = -∞ position.
    fn initial(chain: &Chain, u: usize, v: usize) -> Self {
        let mut bridge = Self { u, v };
        loop {
            if let Some(next) = chain
                .next(bridge.v)
                .filter(|&next| chain.clockwise(Some(bridge.u), Some(bridge.v), Some(next)))
            {
                bridge.v = next;
            } else if let Some(prev) = chain
                .prev(bridge.u)
                .filter(|&prev| chain.clockwise(Some(prev), Some(bridge.u), Some(bridge.v)))
            {
                bridge.u = prev;
            } else {
                return bridge;
            }
        }
    }

    /// Candidate bridge moves with their switch times.
    fn moves(&self, chain: &Chain) -> [Option<(Step, f64)>; 4] {
        let Self { u, v } = *self;

        [
            timed(
                Step::RetreatU,
                chain.prev(u),
                chain.switch_time(chain.prev(u), Some(u), Some(v)),
            ),
            timed(
                Step::AdvanceU,
                chain.next(u),
                chain.switch_time(Some(u), chain.next(u), Some(v)),
            ),
            timed(
                Step::RetreatV,
                chain.prev(v),
                chain.switch_time(Some(u), chain.prev(v), Some(v)),
            ),
            timed(
                Step::AdvanceV,
                chain.next(v),
                chain.switch_time(Some(u), Some(v), chain.next(v)),
            ),
        ]
    }
}

/// Pairs a bridge move with its time when both exist.
fn timed(step: fn(usize) -> Step, target: Option<usize>, time: Option<f64>) -> Option<(Step, f64)> {
    Some((step(target?), time?))
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Builds the kinetic lower-hull movie of the slots in `range`.
///
/// On return the points of `range` are linked as the range's 2D lower hull
/// at t = -∞ (the lower hull of the XY projection); points that join the
/// hull later keep the links they will be spliced in with. Ranges of fewer
/// than two points produce an empty movie and are left untouched.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use kinetic_hull::{lower_hull, Chain, Point};
///
/// let mut chain = Chain::new(vec![
///     Point::new(DVec3::new(0.0, 0.0, 0.0), 0),
///     Point::new(DVec3::new(1.0, -1.0, 0.0), 1),
///     Point::new(DVec3::new(2.0, 0.0, 0.0), 2),
/// ]);
/// let movie = lower_hull(&mut chain, 0..3);
/// assert_eq!(movie, vec![1]);
/// assert_eq!(chain.walk(0), vec![0, 1, 2]);
/// ```
pub fn lower_hull(chain: &mut Chain, range: Range<usize>) -> Movie {
    if range.len() < 2 {
        return Movie::new();
    }

    let mid = range.start + range.len() / 2;
    let left = lower_hull(chain, range.start..mid);
    let right = lower_hull(chain, mid..range.end);

    let split = mid - 1;
    let mut bridge = Bridge::initial(chain, split, mid);
    let movie = sweep(chain, &mut bridge, &left, &right);

    let split_x = chain.x(split);
    chain.link(bridge.u, bridge.v);
    rewind(chain, bridge, &movie, split_x);

    trace!(
        "merged {:?}: {} + {} events -> {}",
        range,
        left.len(),
        right.len(),
        movie.len()
    );
    movie
}

// =============================================================================
// SWEEP
// =============================================================================

/// Returns the earliest candidate strictly after `after`.
///
/// Ties keep the earlier candidate.
fn earliest(
    candidates: impl IntoIterator<Item = Option<(Step, f64)>>,
    after: f64,
) -> Option<(Step, f64)> {
    let mut best: Option<(Step, f64)> = None;
    for (step, time) in candidates.into_iter().flatten() {
        if time > after && best.is_none_or(|(_, best_time)| time < best_time) {
            best = Some((step, time));
        }
    }
    best
}

/// Replays both half movies against the moving bridge, returning the
/// merged movie. Leaves `bridge` at its t = +∞ position.
fn sweep(chain: &mut Chain, bridge: &mut Bridge, left: &[usize], right: &[usize]) -> Movie {
    let mut movie = Movie::with_capacity(left.len() + right.len());
    let (mut left_cursor, mut right_cursor) = (0, 0);
    let mut now = f64::NEG_INFINITY;

    loop {
        let [retreat_u, advance_u, retreat_v, advance_v] = bridge.moves(chain);
        let candidates = [
            left.get(left_cursor)
                .and_then(|&slot| Some((Step::Left(slot), chain.event_time(slot)?))),
            right
                .get(right_cursor)
                .and_then(|&slot| Some((Step::Right(slot), chain.event_time(slot)?))),
            retreat_u,
            advance_u,
            retreat_v,
            advance_v,
        ];

        let Some((step, time)) = earliest(candidates, now) else {
            break;
        };

        match step {
            Step::Left(slot) => {
                if chain.x(slot) < chain.x(bridge.u) {
                    movie.push(slot);
                }
                chain.trigger_event(slot);
                left_cursor += 1;
            }
            Step::Right(slot) => {
                if chain.x(slot) > chain.x(bridge.v) {
                    movie.push(slot);
                }
                chain.trigger_event(slot);
                right_cursor += 1;
            }
            Step::RetreatU(prev) => {
                movie.push(bridge.u);
                bridge.u = prev;
            }
            Step::AdvanceU(next) => {
                bridge.u = next;
                movie.push(next);
            }
            Step::RetreatV(prev) => {
                bridge.v = prev;
                movie.push(prev);
            }
            Step::AdvanceV(next) => {
                movie.push(bridge.v);
                bridge.v = next;
            }
        }

        now = time;
    }

    movie
}

// =============================================================================
// REWIND
// =============================================================================

/// Replays `movie` backwards from t = +∞, undoing every event so the chain
/// ends in its t = -∞ state.
///
/// Events outside the bridge span toggle back through the chain. Events
/// strictly inside the span were bridge moves: the point is spliced between
/// `u` and `v` and becomes the new bridge end on its side of `split_x`.
fn rewind(chain: &mut Chain, mut bridge: Bridge, movie: &[usize], split_x: f64) {
    for &slot in movie.iter().rev() {
        let x = chain.x(slot);

        if x <= chain.x(bridge.u) || x >= chain.x(bridge.v) {
            chain.trigger_event(slot);
            if slot == bridge.u {
                if let Some(prev) = chain.prev(bridge.u) {
                    bridge.u = prev;
                }
            } else if slot == bridge.v {
                if let Some(next) = chain.next(bridge.v) {
                    bridge.v = next;
                }
            }
        } else {
            chain.link(bridge.u, slot);
            chain.link(slot, bridge.v);

            if x <= split_x {
                bridge.u = slot;
            } else {
                bridge.v = slot;
            }
        }
    }
}
