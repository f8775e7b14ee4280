//! # Voronoi Statistics by Lifting
//!
//! Lifts planar sites onto the paraboloid `z = x² + y²`. The lower hull of
//! the lifted points projects onto the Delaunay triangulation of the sites,
//! which is dual to their Voronoi diagram. Only the lower pass of the
//! kinetic merge is needed.


use crate::chain::{Chain, ChainEvent};
use crate::error::HullResult;
use crate::facet::Facet;
use crate::hull::{check_finite, lower_pass, perturbed_points};
use config::constants::HullConfig;
use glam::{DVec2, DVec3};
use log::debug;
use std::collections::HashMap;

/// Lifts a site onto the paraboloid `z = x² + y²`.
///
/// # Example
///
/// ```rust
/// use glam::{DVec2, DVec3};
/// use kinetic_hull::voronoi::lift;
///
/// assert_eq!(lift(DVec2::new(1.0, 2.0)), DVec3::new(1.0, 2.0, 5.0));
/// ```
#[inline]
pub fn lift(site: DVec2) -> DVec3 {
    site.extend(site.length_squared())
}

/// Computes the Delaunay triangles of `sites` with the default
/// configuration.
///
/// Facets name indices into `sites`, canonical and sorted. Fewer than
/// three sites give no triangles.
pub fn delaunay_facets(sites: &[DVec2]) -> HullResult<Vec<Facet>> {
    delaunay_facets_with(sites, &HullConfig::default())
}

/// Computes the Delaunay triangles of `sites`, rotating the lifted points by
/// `config.lifted_perturbation_angle`.
pub fn delaunay_facets_with(sites: &[DVec2], config: &HullConfig) -> HullResult<Vec<Facet>> {
    let lifted: Vec<DVec3> = sites.iter().copied().map(lift).collect();
    let points = perturbed_points(&lifted, config.lifted_perturbation_angle);
    check_finite(&points)?;

    let mut chain = Chain::new(points);
    let mut facets = lower_pass(&mut chain, ChainEvent::Deletion);
    facets.sort();
    Ok(facets)
}

/// Mean number of edges of the bounded Voronoi cells of `sites`, using the
/// default configuration.
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use kinetic_hull::mean_voronoi_polygon_edges;
///
/// // Only the middle site has a bounded cell, and it is a quadrilateral.
/// let sites = [
///     DVec2::new(0.0, 0.0),
///     DVec2::new(1.0, 0.0),
///     DVec2::new(0.0, 1.0),
///     DVec2::new(1.0, 1.1),
///     DVec2::new(0.5, 0.45),
/// ];
/// assert_eq!(mean_voronoi_polygon_edges(&sites).unwrap(), 4.0);
/// ```
pub fn mean_voronoi_polygon_edges(sites: &[DVec2]) -> HullResult<f64> {
    mean_voronoi_polygon_edges_with(sites, &HullConfig::default())
}

/// Mean number of edges of the bounded Voronoi cells of `sites`.
///
/// A site whose Delaunay star touches an edge used by an odd number of
/// triangles lies on the triangulation boundary; its cell is unbounded and
/// skipped. A bounded cell has one edge per Delaunay edge at its site.
/// Returns `0.0` when no cell is bounded.
pub fn mean_voronoi_polygon_edges_with(sites: &[DVec2], config: &HullConfig) -> HullResult<f64> {
    let facets = delaunay_facets_with(sites, config)?;

    let mut edge_uses: HashMap<(usize, usize), usize> = HashMap::new();
    let mut degree = vec![0_usize; sites.len()];
    for facet in &facets {
        for (a, b) in facet.edges() {
            *edge_uses.entry((a.min(b), a.max(b))).or_default() += 1;
        }
        for vertex in facet.vertices() {
            degree[vertex] += 2;
        }
    }

    let mut outer = vec![false; sites.len()];
    for (&(a, b), &uses) in &edge_uses {
        if uses % 2 != 0 {
            outer[a] = true;
            outer[b] = true;
        }
    }

    let (mut edges, mut polygons) = (0_usize, 0_usize);
    for (site, &star) in degree.iter().enumerate() {
        if !outer[site] {
            edges += star / 2;
            polygons += 1;
        }
    }

    debug!(
        "{} sites: {} triangles, {} bounded cells",
        sites.len(),
        facets.len(),
        polygons
    );

    Ok(if polygons == 0 {
        0.0
    } else {
        edges as f64 / polygons as f64
    })
}
