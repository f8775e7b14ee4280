//! # Config Crate
//!
//! Centralized configuration constants for the kinetic hull pipeline.
//! Perturbation angles and input limits live here so the library and the
//! command-line tools agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{HullConfig, PERTURBATION_ANGLE};
//!
//! let config = HullConfig::default();
//! assert_eq!(config.perturbation_angle, PERTURBATION_ANGLE);
//!
//! let tuned = config.with_perturbation_angle(1e-3);
//! assert_eq!(tuned.perturbation_angle, 1e-3);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Copyable Snapshot**: `HullConfig` is `Copy` and passed by value

pub mod constants;
