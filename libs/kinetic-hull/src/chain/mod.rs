//! # Point Chain
//!
//! Index-addressed arena of points sorted by x. Each point's `prev`/`next`
//! links are arena slots, so a kinetic 2D hull is a doubly-linked list
//! threaded through the arena.
//!
//! ## Chain Events
//!
//! [`Chain::trigger_event`] is the only operation that changes which points
//! are reachable from the chain. A point is *present* when its predecessor
//! links back to it and *pending* when it does not. Triggering a present
//! point splices it out (deletion); triggering a pending point splices it
//! back in (insertion). The point's own links are never touched, so two
//! consecutive triggers restore the chain.


use crate::geometry::{clockwise_turn, orientation_switch_time};
use crate::point::Point;
use glam::DVec3;

/// Outcome of a chain event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChainEvent {
    /// The point was spliced into the chain.
    Insertion,
    /// The point was spliced out of the chain.
    Deletion,
}

/// Arena of points sorted by ascending x.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use kinetic_hull::{Chain, ChainEvent, Point};
///
/// let mut chain = Chain::new(vec![
///     Point::new(DVec3::new(2.0, 0.0, 0.0), 0),
///     Point::new(DVec3::new(0.0, 0.0, 0.0), 1),
///     Point::new(DVec3::new(1.0, -1.0, 0.0), 2),
/// ]);
/// // Sorted by x: slots hold input indices 1, 2, 0
/// assert_eq!(chain.point(0).index, 1);
///
/// chain.link(0, 1);
/// chain.link(1, 2);
/// assert_eq!(chain.trigger_event(1), ChainEvent::Deletion);
/// assert_eq!(chain.next(0), Some(2));
/// assert_eq!(chain.trigger_event(1), ChainEvent::Insertion);
/// assert_eq!(chain.next(0), Some(1));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Chain {
    points: Vec<Point>,
}

impl Chain {
    /// Builds an arena from `points`, sorted by x.
    ///
    /// Existing links are kept as given; callers normally pass unlinked
    /// points.
    pub fn new(mut points: Vec<Point>) -> Self {
        points.sort_by(|a, b| a.x().total_cmp(&b.x()));
        Self { points }
    }

    /// Returns the number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the arena holds no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the points in slot order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns the point at `slot`.
    #[inline]
    pub fn point(&self, slot: usize) -> &Point {
        &self.points[slot]
    }

    /// Returns the caller's index of the point at `slot`.
    #[inline]
    pub fn index(&self, slot: usize) -> usize {
        self.points[slot].index
    }

    /// Returns the x-coordinate of the point at `slot`.
    #[inline]
    pub fn x(&self, slot: usize) -> f64 {
        self.points[slot].x()
    }

    /// Returns the successor of `slot`.
    #[inline]
    pub fn next(&self, slot: usize) -> Option<usize> {
        self.points[slot].next
    }

    /// Returns the predecessor of `slot`.
    #[inline]
    pub fn prev(&self, slot: usize) -> Option<usize> {
        self.points[slot].prev
    }

    /// Returns the position of an optional slot.
    #[inline]
    pub fn position(&self, slot: Option<usize>) -> Option<DVec3> {
        slot.map(|slot| self.points[slot].position)
    }

    /// Makes `right` the successor of `left` and `left` the predecessor of
    /// `right`.
    pub fn link(&mut self, left: usize, right: usize) {
        self.points[left].next = Some(right);
        self.points[right].prev = Some(left);
    }

    /// Toggles the point at `slot` between present and pending.
    ///
    /// # Panics
    ///
    /// Panics if the point lacks a predecessor or successor. Only interior
    /// points take part in chain events.
    pub fn trigger_event(&mut self, slot: usize) -> ChainEvent {
        let (prev, next) = self.neighbors(slot);

        if self.points[prev].next != Some(slot) {
            self.points[prev].next = Some(slot);
            self.points[next].prev = Some(slot);
            ChainEvent::Insertion
        } else {
            self.points[prev].next = Some(next);
            self.points[next].prev = Some(prev);
            ChainEvent::Deletion
        }
    }

    /// Returns both neighbors of an interior point.
    ///
    /// # Panics
    ///
    /// Panics if either link is missing.
    pub fn neighbors(&self, slot: usize) -> (usize, usize) {
        match (self.prev(slot), self.next(slot)) {
            (Some(prev), Some(next)) => (prev, next),
            _ => panic!(
                "chain invariant violated: slot {slot} (point {}) is missing a neighbor",
                self.index(slot)
            ),
        }
    }

    /// Drops every link in the arena.
    pub fn unlink_all(&mut self) {
        self.points.iter_mut().for_each(Point::unlink);
    }

    /// Mirrors every point through the XY plane.
    ///
    /// The x order, and so every slot, is unchanged.
    pub fn invert_z_axis(&mut self) {
        self.points.iter_mut().for_each(Point::invert_z_axis);
    }

    /// Returns true if `(a, b, c)` turns clockwise in the XY projection.
    pub fn clockwise(&self, a: Option<usize>, b: Option<usize>, c: Option<usize>) -> bool {
        clockwise_turn(self.position(a), self.position(b), self.position(c))
    }

    /// Returns the time at which `(a, b, c)` switches orientation.
    pub fn switch_time(&self, a: Option<usize>, b: Option<usize>, c: Option<usize>) -> Option<f64> {
        orientation_switch_time(self.position(a), self.position(b), self.position(c))
    }

    /// Returns the time of the next chain event of `slot`, judged from its
    /// own links.
    pub fn event_time(&self, slot: usize) -> Option<f64> {
        self.switch_time(self.prev(slot), Some(slot), self.next(slot))
    }

    /// Walks the chain forward from `start`, returning the visited slots.
    ///
    /// Stops after `len()` steps so a corrupted cycle cannot loop forever.
    pub fn walk(&self, start: usize) -> Vec<usize> {
        let mut slots = vec![start];
        let mut current = start;
        while let Some(next) = self.next(current) {
            if slots.len() > self.len() {
                break;
            }
            slots.push(next);
            current = next;
        }
        slots
    }

    /// Consumes the arena, returning its points in slot order.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}
