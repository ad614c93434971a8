use super::*;
use nalgebra::vector;
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn electronics() -> ConstraintSet {
    ConstraintSet::new(vec![
        Constraint::new(2.0, 3.0, 240.0).labeled("processor_time"),
        Constraint::new(4.0, 6.0, 480.0).labeled("ram"),
        Constraint::new(1.0, 2.0, 150.0).labeled("batteries"),
    ])
}

fn close(p: Point2, q: Point2) -> bool {
    (p - q).norm() < 1e-9
}

#[test]
fn value_at_and_equation_row() {
    let h = Constraint::new(2.0, 3.0, 240.0);
    assert!((h.value_at(0.0).unwrap() - 80.0).abs() < 1e-12);
    assert!((h.value_at(30.0).unwrap() - 60.0).abs() < 1e-12);
    assert_eq!(h.as_equation_row(), (2.0, 3.0, 240.0));

    let vertical = Constraint::new(1.0, 0.0, 40.0).labeled("assembly");
    assert_eq!(
        vertical.value_at(1.0),
        Err(crate::Error::DivisionByZero {
            label: Some("assembly".into())
        })
    );
}

#[test]
fn sample_handles_vertical_lines() {
    let h = Constraint::new(2.0, 3.0, 240.0);
    let pts = h.sample((0.0, 120.0), 5);
    assert_eq!(pts.len(), 5);
    assert!(close(pts[0], vector![0.0, 80.0]));
    assert!(close(pts[4], vector![120.0, 0.0]));

    let vertical = Constraint::new(2.0, 0.0, 80.0);
    let seg = vertical.sample((0.0, 50.0), 400);
    assert_eq!(seg, vec![vector![40.0, 0.0], vector![40.0, 50.0]]);
    assert!(Constraint::new(0.0, 0.0, 1.0).sample((0.0, 1.0), 10).is_empty());
}

#[test]
fn intersection_of_crossing_lines() {
    let cpu = Constraint::new(2.0, 3.0, 240.0);
    let bat = Constraint::new(1.0, 2.0, 150.0);
    let p = intersect(&cpu, &bat, 1e-12).expect("crossing");
    assert!(close(p, vector![30.0, 60.0]));
    assert!(cpu.is_binding(p, 1e-9) && bat.is_binding(p, 1e-9));
}

#[test]
fn proportional_lines_have_no_intersection() {
    let cpu = Constraint::new(2.0, 3.0, 240.0);
    let ram = Constraint::new(4.0, 6.0, 480.0);
    assert!(intersect(&cpu, &ram, 1e-12).is_none());
    // coincident battery lines
    let a = Constraint::new(1.0, 2.0, 150.0);
    let b = Constraint::new(2.0, 4.0, 300.0);
    assert!(intersect(&a, &b, 1e-12).is_none());
    assert!(pairwise_intersections([(&a, &b)], 1e-12).is_empty());
}

#[test]
fn small_coefficients_still_intersect() {
    let h1 = Constraint::new(1e-7, 2e-7, 1e-5);
    let h2 = Constraint::new(2e-7, 1e-7, 1e-5);
    let p = intersect(&h1, &h2, GeomCfg::default().eps_det).expect("crossing");
    assert!(close(p, vector![100.0 / 3.0, 100.0 / 3.0]));
    assert!(h1.is_binding(p, 1e-15) && h2.is_binding(p, 1e-15));

    // same region, whatever the units of the rows
    let tiny: ConstraintSet = [h1, h2].into_iter().collect();
    let unit: ConstraintSet = [
        Constraint::new(1.0, 2.0, 100.0),
        Constraint::new(2.0, 1.0, 100.0),
    ]
    .into_iter()
    .collect();
    let cfg = GeomCfg::default();
    let a = build_feasible_region(&tiny, cfg);
    let b = build_feasible_region(&unit, cfg);
    assert!(a.polygon().is_some());
    assert_eq!(a.vertices().len(), 4);
    assert_eq!(b.vertices().len(), 4);
    for (p, q) in a.vertices().iter().zip(b.vertices()) {
        assert!(close(*p, *q));
    }
}

#[test]
fn feasibility_applies_non_negativity_and_slack() {
    let set = electronics();
    assert!(is_feasible(vector![30.0, 60.0], &set, 1e-9));
    assert!(is_feasible(vector![30.0 + 1e-11, 60.0], &set, 1e-9));
    assert!(!is_feasible(vector![30.0, 60.1], &set, 1e-9));
    assert!(!is_feasible(vector![-1e-6, 10.0], &set, 1e-9));
    assert!(is_feasible(vector![-1e-12, 10.0], &set, 1e-9));
    // empty set: only the quadrant matters
    assert!(is_feasible(vector![1e9, 1e9], &ConstraintSet::default(), 0.0));
}

#[test]
fn axis_caps_use_tightest_resource() {
    let set = electronics();
    assert_eq!(axis_cap(&set, Axis::X1), Some(120.0));
    assert_eq!(axis_cap(&set, Axis::X2), Some(75.0));
    let pts = axis_intercepts(&set);
    assert_eq!(pts, vec![vector![0.0, 0.0], vector![120.0, 0.0], vector![0.0, 75.0]]);
}

#[test]
fn zero_coefficient_is_not_a_zero_cap() {
    // x1 <= 40 only bounds x1; it must not pin x2 to 0 nor divide by zero
    let set = ConstraintSet::new(vec![
        Constraint::new(1.0, 0.0, 40.0),
        Constraint::new(1.0, 1.0, 100.0),
    ]);
    assert_eq!(axis_cap(&set, Axis::X1), Some(40.0));
    assert_eq!(axis_cap(&set, Axis::X2), Some(100.0));

    let only_x1 = ConstraintSet::new(vec![Constraint::new(1.0, 0.0, 40.0)]);
    assert_eq!(axis_cap(&only_x1, Axis::X2), None);
    assert_eq!(axis_intercepts(&only_x1).len(), 2);
}

#[test]
fn ordering_is_ccw_around_centroid() {
    let pts = vec![
        vector![0.0, 75.0],
        vector![120.0, 0.0],
        vector![0.0, 0.0],
        vector![30.0, 60.0],
    ];
    let poly = order_by_angle(pts);
    assert_eq!(
        poly.vertices,
        vec![
            vector![0.0, 0.0],
            vector![120.0, 0.0],
            vector![30.0, 60.0],
            vector![0.0, 75.0]
        ]
    );
    assert!(poly.signed_area() > 0.0);
    assert!(order_by_angle(Vec::new()).is_empty());
}

#[test]
fn dedup_and_collinear_cleanup() {
    let pts = vec![
        vector![0.0, 0.0],
        vector![1e-12, 0.0],
        vector![2.0, 0.0],
        vector![1.0, 0.0],
        vector![2.0, 2.0],
        vector![0.0, 2.0],
    ];
    let distinct = dedup_eps(pts, 1e-9);
    assert_eq!(distinct.len(), 5);
    let ring = drop_collinear(order_by_angle(distinct), 1e-9);
    assert_eq!(ring.len(), 4);
    assert!(!ring.vertices.contains(&vector![1.0, 0.0]));

    // flat input collapses to its end points
    let flat = vec![vector![0.0, 0.0], vector![1.0, 0.0], vector![3.0, 0.0]];
    let seg = drop_collinear(order_by_angle(flat), 1e-9);
    assert_eq!(seg.len(), 2);
    assert!(seg.vertices.contains(&vector![0.0, 0.0]));
    assert!(seg.vertices.contains(&vector![3.0, 0.0]));
}

#[test]
fn scenario_electronics_region() {
    let region = build_feasible_region(&electronics(), GeomCfg::default());
    let poly = region.polygon().expect("bounded polygon");
    let expected = [
        vector![0.0, 0.0],
        vector![120.0, 0.0],
        vector![30.0, 60.0],
        vector![0.0, 75.0],
    ];
    assert_eq!(poly.len(), expected.len());
    for (got, want) in poly.vertices.iter().zip(expected) {
        assert!(close(*got, want), "{got:?} != {want:?}");
    }
    assert!(poly.is_convex_ccw(1e-9));
    // 0.5 * |shoelace| of the quadrilateral
    assert!((poly.signed_area() - 4725.0).abs() < 1e-6);
}

#[test]
fn coincident_pair_yields_no_spurious_point() {
    let set = ConstraintSet::new(vec![
        Constraint::new(1.0, 2.0, 150.0),
        Constraint::new(2.0, 4.0, 300.0),
    ]);
    assert!(pairwise_intersections(set.pairs(), 1e-12).is_empty());
    let region = build_feasible_region(&set, GeomCfg::default());
    assert_eq!(region.vertices().len(), 3);
}

#[test]
fn vertical_constraint_region() {
    let set = ConstraintSet::new(vec![
        Constraint::new(1.0, 0.0, 40.0),
        Constraint::new(1.0, 1.0, 100.0),
    ]);
    let region = build_feasible_region(&set, GeomCfg::default());
    let poly = region.polygon().expect("polygon");
    assert_eq!(poly.len(), 4);
    assert!(poly.vertices.iter().any(|p| close(*p, vector![40.0, 60.0])));
    assert!(poly.vertices.iter().any(|p| close(*p, vector![0.0, 100.0])));
}

#[test]
fn empty_region_is_reported() {
    // x1 + x2 <= -1 excludes the whole quadrant
    let set = ConstraintSet::new(vec![Constraint::new(1.0, 1.0, -1.0)]);
    assert_eq!(build_feasible_region(&set, GeomCfg::default()), FeasibleRegion::Empty);
}

#[test]
fn degenerate_regions_are_reported() {
    let point = ConstraintSet::new(vec![Constraint::new(1.0, 1.0, 0.0)]);
    match build_feasible_region(&point, GeomCfg::default()) {
        FeasibleRegion::Degenerate(v) => assert_eq!(v, vec![vector![0.0, 0.0]]),
        other => panic!("expected point, got {other:?}"),
    }
    let segment = ConstraintSet::new(vec![
        Constraint::new(0.0, 1.0, 0.0),
        Constraint::new(1.0, 0.0, 5.0),
    ]);
    match build_feasible_region(&segment, GeomCfg::default()) {
        FeasibleRegion::Degenerate(v) => assert_eq!(v.len(), 2),
        other => panic!("expected segment, got {other:?}"),
    }
}

#[test]
fn unbounded_regions_are_reported() {
    let only_x1 = ConstraintSet::new(vec![Constraint::new(1.0, 0.0, 40.0)]);
    match build_feasible_region(&only_x1, GeomCfg::default()) {
        FeasibleRegion::Unbounded { direction, .. } => assert!(close(direction, vector![0.0, 1.0])),
        other => panic!("expected unbounded, got {other:?}"),
    }
    // diagonal strip: both axes capped, still unbounded along (1, 1)
    let strip = ConstraintSet::new(vec![
        Constraint::new(1.0, -1.0, 1.0),
        Constraint::new(-1.0, 1.0, 1.0),
    ]);
    let region = build_feasible_region(&strip, GeomCfg::default());
    assert!(!region.is_bounded());
    assert!(recession_direction(&electronics(), 1e-9).is_none());
    let tiny = ConstraintSet::new(vec![Constraint::new(1e-10, 1e-10, 1e-8)]);
    assert!(recession_direction(&tiny, 1e-9).is_none());
    assert!(!build_feasible_region(&ConstraintSet::default(), GeomCfg::default()).is_bounded());
}

#[test]
fn negative_limit_corner_is_found() {
    // x1 >= 1 written as -x1 <= -1; the corner (1, 0) is not an axis cap
    let set = ConstraintSet::new(vec![
        Constraint::new(-1.0, 0.0, -1.0),
        Constraint::new(1.0, 0.0, 3.0),
        Constraint::new(0.0, 1.0, 2.0),
    ]);
    let region = build_feasible_region(&set, GeomCfg::default());
    let poly = region.polygon().expect("box");
    assert_eq!(poly.len(), 4);
    assert!((poly.signed_area() - 4.0).abs() < 1e-9);
}

#[test]
fn random_instances_are_convex_and_feasible() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let m = rng.gen_range(1..6);
        let set: ConstraintSet = (0..m)
            .map(|_| {
                Constraint::new(
                    rng.gen_range(0.1..5.0),
                    rng.gen_range(0.1..5.0),
                    rng.gen_range(1.0..100.0),
                )
            })
            .collect();
        let region = build_feasible_region(&set, GeomCfg::default());
        let poly = region.polygon().expect("positive rates give a bounded polygon");
        assert!(poly.is_convex_ccw(1e-7));
        assert!(poly.signed_area() > 0.0);
        for v in &poly.vertices {
            assert!(is_feasible(*v, &set, 1e-9));
        }
    }
}

fn coeff() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), 0.1f64..10.0]
}

proptest! {
    #[test]
    fn prop_intersection_satisfies_both_equations(
        a1 in -10.0f64..10.0, b1 in -10.0f64..10.0, c1 in 0.0f64..500.0,
        a2 in -10.0f64..10.0, b2 in -10.0f64..10.0, c2 in 0.0f64..500.0,
    ) {
        let h1 = Constraint::new(a1, b1, c1);
        let h2 = Constraint::new(a2, b2, c2);
        prop_assume!((a1 * b2 - a2 * b1).abs() > 1e-3);
        let p = intersect(&h1, &h2, 1e-12).expect("non-parallel");
        let tol = 1e-6 * (1.0 + p.norm() + c1 + c2);
        prop_assert!((h1.lhs(p) - c1).abs() < tol);
        prop_assert!((h2.lhs(p) - c2).abs() < tol);
    }

    #[test]
    fn prop_scaled_copies_are_parallel(
        a in 0.1f64..10.0, b in 0.1f64..10.0, c in 0.0f64..500.0, k in 0.5f64..4.0,
    ) {
        let h1 = Constraint::new(a, b, c);
        let h2 = Constraint::new(a * k, b * k, c * k);
        prop_assert!(intersect(&h1, &h2, 1e-9).is_none());
    }

    #[test]
    fn prop_feasibility_is_order_independent(
        rows in prop::collection::vec((coeff(), coeff(), 0.0f64..200.0), 1..6),
        x1 in -5.0f64..100.0, x2 in -5.0f64..100.0,
    ) {
        let set: ConstraintSet = rows.iter().map(|&(a, b, c)| Constraint::new(a, b, c)).collect();
        let mut rev = set.clone();
        rev.constraints.reverse();
        let p = vector![x1, x2];
        let verdict = is_feasible(p, &set, 1e-9);
        prop_assert_eq!(verdict, is_feasible(p, &rev, 1e-9));
        prop_assert_eq!(verdict, is_feasible(p, &set, 1e-9));
    }

    #[test]
    fn prop_region_is_simple_ccw(
        rows in prop::collection::vec((coeff(), coeff(), 1.0f64..200.0), 1..6),
    ) {
        let set: ConstraintSet = rows.iter().map(|&(a, b, c)| Constraint::new(a, b, c)).collect();
        if let FeasibleRegion::Polygon(poly) = build_feasible_region(&set, GeomCfg::default()) {
            prop_assert!(poly.is_convex_ccw(1e-6));
            prop_assert!(poly.signed_area() > 0.0);
        }
    }
}
