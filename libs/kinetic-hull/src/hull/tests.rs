//! # Hull Driver Tests
//!
//! Exact facet lists for small solids and structural checks on random sets.

use super::*;
use crate::facet::validate_closed;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn tetrahedron() -> Vec<DVec3> {
    vec![
        DVec3::new(1.0, 1.0, 1.0),
        DVec3::new(1.0, -1.0, -1.0),
        DVec3::new(-1.0, 1.0, -1.0),
        DVec3::new(-1.0, -1.0, 1.0),
    ]
}

fn on_sphere(longitude: f64, latitude: f64) -> DVec3 {
    DVec3::new(
        longitude.cos() * latitude.cos(),
        longitude.sin() * latitude.cos(),
        latitude.sin(),
    )
}

fn random_sphere(rng: &mut StdRng, count: usize) -> Vec<DVec3> {
    (0..count)
        .map(|_| {
            let v = DVec3::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            );
            v.normalize()
        })
        .collect()
}

/// Every other point must lie strictly behind every facet.
fn assert_outward(points: &[DVec3], facets: &[Facet]) {
    for facet in facets {
        let [a, b, c] = facet.vertices().map(|index| points[index]);
        let normal = (b - a).cross(c - a);
        for (index, &point) in points.iter().enumerate() {
            if facet.vertices().contains(&index) {
                continue;
            }
            assert!(
                normal.dot(point - a) < 0.0,
                "point {index} is in front of facet {facet}"
            );
        }
    }
}

fn hull_vertex_count(facets: &[Facet]) -> usize {
    let mut vertices: Vec<usize> = facets.iter().flat_map(Facet::vertices).collect();
    vertices.sort_unstable();
    vertices.dedup();
    vertices.len()
}

#[test]
fn test_tetrahedron_facets() {
    let facets = convex_hull(&tetrahedron()).unwrap();
    assert_eq!(
        facets,
        vec![
            Facet::new(0, 1, 2),
            Facet::new(0, 2, 3),
            Facet::new(0, 3, 1),
            Facet::new(1, 3, 2),
        ]
    );
}

#[test]
fn test_tetrahedron_vertices_in_three_facets() {
    let facets = convex_hull(&tetrahedron()).unwrap();
    assert!(facets.iter().all(Facet::is_canonical));
    for vertex in 0..4 {
        let uses = facets
            .iter()
            .filter(|facet| facet.vertices().contains(&vertex))
            .count();
        assert_eq!(uses, 3, "vertex {vertex}");
    }
}

#[test]
fn test_six_points_on_sphere() {
    let points: Vec<DVec3> = [
        (0.0, 0.1),
        (1.1, -0.4),
        (2.3, 0.5),
        (3.5, -0.2),
        (4.6, 0.3),
        (0.5, 1.3),
    ]
    .iter()
    .map(|&(longitude, latitude)| on_sphere(longitude, latitude))
    .collect();

    let facets = convex_hull(&points).unwrap();
    assert_eq!(facets.len(), 2 * points.len() - 4);
    validate_closed(&facets).unwrap();
    assert_outward(&points, &facets);
}

#[test]
fn test_icosahedron() {
    let phi = (1.0 + 5.0_f64.sqrt()) / 2.0;
    let mut points = Vec::new();
    for a in [-1.0, 1.0] {
        for b in [-phi, phi] {
            points.push(DVec3::new(0.0, a, b));
            points.push(DVec3::new(a, b, 0.0));
            points.push(DVec3::new(b, 0.0, a));
        }
    }

    let facets = convex_hull(&points).unwrap();
    assert_eq!(facets.len(), 20);
    validate_closed(&facets).unwrap();
    assert_outward(&points, &facets);
}

#[test]
fn test_random_sphere_sets_satisfy_euler() {
    let mut rng = StdRng::seed_from_u64(1);
    for count in [5, 8, 20, 50, 200] {
        let points = random_sphere(&mut rng, count);
        let facets = convex_hull(&points).unwrap();

        assert_eq!(facets.len(), 2 * count - 4, "{count} points");
        assert!(facets
            .iter()
            .flat_map(Facet::vertices)
            .all(|index| index < count));
        validate_closed(&facets).unwrap();
        assert_outward(&points, &facets);
    }
}

#[test]
fn test_random_cloud_has_interior_points() {
    let mut rng = StdRng::seed_from_u64(99);
    let points: Vec<DVec3> = (0..120)
        .map(|_| {
            DVec3::new(
                rng.gen_range(-5.0..5.0),
                rng.gen_range(-5.0..5.0),
                rng.gen_range(-5.0..5.0),
            )
        })
        .collect();

    let facets = convex_hull(&points).unwrap();
    let vertices = hull_vertex_count(&facets);

    assert!(vertices < points.len());
    assert_eq!(facets.len(), 2 * vertices - 4);
    validate_closed(&facets).unwrap();
    assert_outward(&points, &facets);
}

#[test]
fn test_passes_do_not_overlap() {
    let mut rng = StdRng::seed_from_u64(5);
    let points = random_sphere(&mut rng, 64);
    let facets = convex_hull(&points).unwrap();

    let mut unique = facets.clone();
    unique.dedup();
    assert_eq!(unique.len(), facets.len());
}

#[test]
fn test_result_independent_of_perturbation_angle() {
    let mut rng = StdRng::seed_from_u64(17);
    let points = random_sphere(&mut rng, 30);

    let default = convex_hull(&points).unwrap();
    let config = HullConfig::default().with_perturbation_angle(0.2);
    let tilted = convex_hull_with(&points, &config).unwrap();
    assert_eq!(default, tilted);
}

#[test]
fn test_hull_of_points_skips_perturbation() {
    let points = tetrahedron()
        .into_iter()
        .enumerate()
        .map(|(index, position)| Point::new(position + DVec3::new(0.1 * index as f64, 0.0, 0.0), index))
        .collect();
    let facets = hull_of_points(points).unwrap();
    assert_eq!(facets.len(), 4);
    validate_closed(&facets).unwrap();
}

#[test]
fn test_too_few_points() {
    let points = &tetrahedron()[..3];
    match convex_hull(points) {
        Err(HullError::InsufficientPoints { count, min }) => {
            assert_eq!(count, 3);
            assert_eq!(min, 4);
        }
        other => panic!("expected InsufficientPoints, got {other:?}"),
    }
    assert!(convex_hull(&[]).is_err());
}

#[test]
fn test_nan_coordinate_reported_with_input_index() {
    let mut points = tetrahedron();
    points.push(DVec3::new(0.0, f64::NAN, 0.0));
    match convex_hull(&points) {
        Err(HullError::InvalidCoordinate { index }) => assert_eq!(index, 4),
        other => panic!("expected InvalidCoordinate, got {other:?}"),
    }
}

#[test]
fn test_perturbed_points_keep_input_order() {
    let points = perturbed_points(&tetrahedron(), 1e-2);
    let indices: Vec<usize> = points.iter().map(|p| p.index).collect();
    assert_eq!(indices, vec![0, 1, 2, 3]);
    assert!(points.iter().all(Point::is_unlinked));
}

fn integer_points(coords: &[[i32; 3]]) -> Vec<DVec3> {
    coords
        .iter()
        .map(|&[x, y, z]| DVec3::new(x as f64, y as f64, z as f64))
        .collect()
}

fn facet_list(triples: &[(usize, usize, usize)]) -> Vec<Facet> {
    triples.iter().map(|&(i, j, k)| Facet::new(i, j, k)).collect()
}

#[test]
fn test_integer_cloud_exact_facets() {
    let points = integer_points(&[
        [5, -2, -3],
        [-2, 3, 5],
        [-2, 1, -1],
        [-5, 0, 1],
        [-3, -1, 0],
        [4, 4, -5],
        [4, 5, 0],
        [-4, 0, -1],
        [-3, -3, -1],
    ]);

    let facets = convex_hull(&points).unwrap();
    assert_eq!(
        facets,
        facet_list(&[
            (0, 1, 8),
            (0, 5, 6),
            (0, 6, 1),
            (0, 8, 5),
            (1, 3, 8),
            (1, 5, 3),
            (1, 6, 5),
            (3, 5, 7),
            (3, 7, 8),
            (5, 8, 7),
        ])
    );
    validate_closed(&facets).unwrap();
}

#[test]
fn test_unit_cube_corners() {
    // Coplanar square faces: the listing is fixed by the rotation rounding.
    let points = integer_points(&[
        [0, 0, 0],
        [1, 0, 0],
        [0, 1, 0],
        [1, 1, 0],
        [0, 0, 1],
        [1, 0, 1],
        [0, 1, 1],
        [1, 1, 1],
    ]);

    assert_eq!(
        convex_hull(&points).unwrap(),
        facet_list(&[
            (0, 1, 4),
            (0, 3, 1),
            (0, 4, 6),
            (0, 6, 7),
            (0, 7, 3),
            (1, 3, 5),
            (4, 5, 6),
            (5, 7, 6),
        ])
    );
}

#[test]
fn test_exact_octahedron_is_incomplete() {
    // Tied switch times between the axis points leave the surface open.
    let points = integer_points(&[
        [1, 0, 0],
        [-1, 0, 0],
        [0, 1, 0],
        [0, -1, 0],
        [0, 0, 1],
        [0, 0, -1],
    ]);

    let facets = convex_hull(&points).unwrap();
    assert_eq!(
        facets,
        facet_list(&[(0, 2, 4), (0, 3, 1), (0, 4, 3), (1, 3, 4), (1, 4, 2)])
    );
    assert!(validate_closed(&facets).is_err());
}
