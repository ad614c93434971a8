//! Angular ordering of convex vertex sets around their centroid.
//!
//! Sorting by `atan2` around the vertex mean yields a simple CCW ring because
//! a feasible region of linear inequalities is convex and the mean of its
//! vertices lies inside it.

use super::types::{Point2, Polygon};

/// Arithmetic mean of `points`; `None` when empty.
pub fn centroid(points: &[Point2]) -> Option<Point2> {
    if points.is_empty() {
        return None;
    }
    let sum = points.iter().fold(Point2::zeros(), |acc, p| acc + p);
    Some(sum / points.len() as f64)
}

/// Drop every point within `eps` of an earlier one (first occurrence wins).
pub fn dedup_eps(points: Vec<Point2>, eps: f64) -> Vec<Point2> {
    let mut out: Vec<Point2> = Vec::with_capacity(points.len());
    for p in points {
        if out.iter().all(|q| (p - q).norm() > eps) {
            out.push(p);
        }
    }
    out
}

/// Order points counterclockwise by angle around their centroid.
///
/// Consumes the candidate set. Empty input gives an empty polygon (an empty
/// region, for the caller to report); duplicates are not removed here.
pub fn order_by_angle(points: Vec<Point2>) -> Polygon {
    let Some(center) = centroid(&points) else {
        return Polygon::default();
    };
    let mut keyed: Vec<(f64, Point2)> = points
        .into_iter()
        .map(|p| ((p.y - center.y).atan2(p.x - center.x), p))
        .collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
    Polygon {
        vertices: keyed.into_iter().map(|(_, p)| p).collect(),
    }
}

/// Remove ring vertices that sit in the middle of a straight edge.
///
/// A turn counts as straight when `|cross| <= eps · |ab| · |bc|`. If the whole
/// ring is flat (a segment), the two farthest-apart points are returned.
pub fn drop_collinear(poly: Polygon, eps: f64) -> Polygon {
    let mut ring = poly.vertices;
    if ring.len() < 3 {
        return Polygon { vertices: ring };
    }
    if is_flat(&ring, eps) {
        return Polygon {
            vertices: extreme_pair(&ring),
        };
    }
    let mut k = 0;
    while ring.len() > 3 && k < ring.len() {
        let m = ring.len();
        let a = ring[(k + m - 1) % m];
        let b = ring[k];
        let c = ring[(k + 1) % m];
        let (ab, bc) = (b - a, c - b);
        let straight = crate::parallelogram_area(ab, bc).abs() <= eps * ab.norm() * bc.norm();
        if straight && ab.dot(&bc) > 0.0 {
            ring.remove(k);
        } else {
            k += 1;
        }
    }
    Polygon { vertices: ring }
}

fn is_flat(ring: &[Point2], eps: f64) -> bool {
    let pair = extreme_pair(ring);
    if pair.len() < 2 {
        return true;
    }
    let (a, ab) = (pair[0], pair[1] - pair[0]);
    let scale = ab.norm_squared();
    ring.iter()
        .all(|p| crate::parallelogram_area(ab, p - a).abs() <= eps * scale)
}

fn extreme_pair(ring: &[Point2]) -> Vec<Point2> {
    let mut best: Option<(f64, Point2, Point2)> = None;
    for (i, p) in ring.iter().enumerate() {
        for q in &ring[i + 1..] {
            let d = (p - q).norm();
            if best.is_none_or(|(bd, _, _)| d > bd) {
                best = Some((d, *p, *q));
            }
        }
    }
    match best {
        Some((_, p, q)) => vec![p, q],
        None => ring.to_vec(),
    }
}
