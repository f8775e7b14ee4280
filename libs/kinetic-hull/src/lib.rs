//! # Kinetic Hull
//!
//! Divide-and-conquer 3D convex hull in the style of Chan's kinetic
//! algorithm. The lower hull of a point set is recorded as a "movie": the
//! chronological list of insertions into and deletions from a kinetic 2D
//! hull chain while a synthetic time parameter sweeps from -∞ to +∞. Two
//! movies merge in linear time through a moving bridge edge; the facets fall
//! out of the final movie.
//!
//! ## Architecture
//!
//! ```text
//! points → perturb → sort by x → lower pass (Deletion parity)
//!                              → flip z → lower pass (Insertion parity)
//!                              → sorted facets
//! ```
//!
//! ## Modules
//!
//! - [`point`]: arena record with coordinates and chain links
//! - [`geometry`]: turn tests and orientation switch times
//! - [`chain`]: the point arena and its insert/delete event
//! - [`merge`]: the recursive movie merge
//! - [`facet`]: canonical facets and their extraction from a movie
//! - [`hull`]: the two-pass driver
//! - [`voronoi`]: Delaunay facets and Voronoi statistics by lifting
//! - [`io`]: text input parsing and output rendering
//!
//! ## Usage
//!
//! ```rust
//! use glam::DVec3;
//! use kinetic_hull::convex_hull;
//!
//! let points = [
//!     DVec3::new(1.0, 1.0, 1.0),
//!     DVec3::new(1.0, -1.0, -1.0),
//!     DVec3::new(-1.0, 1.0, -1.0),
//!     DVec3::new(-1.0, -1.0, 1.0),
//! ];
//! let facets = convex_hull(&points).unwrap();
//! assert_eq!(facets.len(), 4);
//! ```

pub mod chain;
pub mod error;
pub mod facet;
pub mod geometry;
pub mod hull;
pub mod io;
pub mod merge;
pub mod point;
pub mod voronoi;

pub use chain::{Chain, ChainEvent};
pub use error::{HullError, HullResult};
pub use facet::{validate_closed, Facet};
pub use hull::{convex_hull, convex_hull_with, hull_of_points};
pub use merge::{lower_hull, Movie};
pub use point::Point;
pub use voronoi::{delaunay_facets, mean_voronoi_polygon_edges};
