//! # Configuration Constants
//!
//! Centralized constants for the kinetic hull pipeline.
//!
//! ## Categories
//!
//! - **Perturbation**: Rotation angles that push input into general position
//! - **Limits**: Minimum input sizes accepted by the hull driver

// =============================================================================
// PERTURBATION CONSTANTS
// =============================================================================

/// Rotation angle (radians) applied to every 3D input point before the hull
/// is computed.
///
/// The point is rotated by this angle in the XY, XZ and YZ planes in turn.
/// Axis-aligned inputs (grids, boxes) share x-coordinates; after the rotation
/// they no longer do, which the kinetic merge relies on.
///
/// # Example
///
/// ```rust
/// use config::constants::PERTURBATION_ANGLE;
///
/// assert!(PERTURBATION_ANGLE > 0.0);
/// assert!(PERTURBATION_ANGLE < std::f64::consts::FRAC_PI_4);
/// ```
pub const PERTURBATION_ANGLE: f64 = 1e-2;

/// Rotation angle (radians) applied to sites lifted onto the paraboloid
/// `z = x² + y²` before their lower hull is computed.
///
/// Kept tiny so that the lower hull of the rotated paraboloid still projects
/// onto the Delaunay triangulation of the original sites.
///
/// # Example
///
/// ```rust
/// use config::constants::{LIFTED_PERTURBATION_ANGLE, PERTURBATION_ANGLE};
///
/// assert!(LIFTED_PERTURBATION_ANGLE < PERTURBATION_ANGLE);
/// ```
pub const LIFTED_PERTURBATION_ANGLE: f64 = 1e-8;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Minimum number of points accepted by the 3D hull driver.
///
/// Four affinely independent points span the smallest closed hull
/// (a tetrahedron).
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_HULL_POINTS;
///
/// let point_count = 3;
/// assert!(point_count < MIN_HULL_POINTS);
/// ```
pub const MIN_HULL_POINTS: usize = 4;

// =============================================================================
// CONFIG SNAPSHOT
// =============================================================================

/// Immutable snapshot of the tunable hull settings.
///
/// # Examples
/// ```
/// use config::constants::HullConfig;
/// let config = HullConfig::default();
/// assert!(config.perturbation_angle > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HullConfig {
    /// Rotation applied to 3D input points.
    pub perturbation_angle: f64,
    /// Rotation applied to paraboloid-lifted 2D sites.
    pub lifted_perturbation_angle: f64,
}

impl HullConfig {
    /// Returns a copy with the 3D perturbation angle replaced.
    pub fn with_perturbation_angle(mut self, angle: f64) -> Self {
        self.perturbation_angle = angle;
        self
    }

    /// Returns a copy with the lifted-site perturbation angle replaced.
    pub fn with_lifted_perturbation_angle(mut self, angle: f64) -> Self {
        self.lifted_perturbation_angle = angle;
        self
    }
}

impl Default for HullConfig {
    fn default() -> Self {
        Self {
            perturbation_angle: PERTURBATION_ANGLE,
            lifted_perturbation_angle: LIFTED_PERTURBATION_ANGLE,
        }
    }
}
