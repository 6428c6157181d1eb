//! Polygon boolean operations.
//!
//! Provides subtraction and union of simple polygons via a Weiler–Atherton
//! style boundary walk: edge/edge crossings are spliced into both vertex
//! rings, then the result boundary is traced by walking one ring and
//! switching to the other at every proper crossing. Subtraction walks the
//! subtrahend in reverse; union walks both rings forward.
//!
//! Inputs must be simple (non-self-intersecting) polygons in a consistent
//! winding; that precondition is the caller's responsibility and is not
//! validated. The walk itself is bounded by an explicit step limit so that
//! numerical noise near coincident intersection points surfaces as
//! [`MeshError::BoundaryWalkDiverged`] instead of a silent wrong answer.

use crate::error::MeshError;
use crate::polygon::core::{signed_area, Polygon};
use crate::primitives::{Point2, Segment2};
use crate::tolerance::{segments_intersect, SegmentIntersection};
use log::{debug, trace};
use num_traits::Float;

/// A proper crossing between an edge of each polygon.
#[derive(Debug, Clone, Copy)]
struct Crossing<F> {
    point: Point2<F>,
    edge_a: usize,
    t_a: F,
    edge_b: usize,
    t_b: F,
}

/// One node of an augmented vertex ring: an original vertex or a spliced-in
/// crossing.
#[derive(Debug, Clone, Copy)]
struct RingNode<F> {
    point: Point2<F>,
    crossing: Option<usize>,
}

/// Subtracts `subtrahend` from `minuend`, returning the polygons covering
/// `minuend \ subtrahend`.
///
/// Special cases:
/// - subtrahend fully outside the minuend: `[minuend]` unchanged
/// - minuend fully inside the subtrahend: `[]`
/// - subtrahend fully inside the minuend: `[minuend]` unchanged (carving a
///   hole is the decomposition engine's job, not subtraction's)
///
/// Result polygons carry the minuend's name and winding. The first result
/// polygon starts at the first minuend vertex (in original index order) that
/// lies outside the subtrahend, and proceeds in the minuend's winding.
///
/// # Example
///
/// ```
/// use walkmesh::polygon::{subtract, Polygon};
/// use walkmesh::Point2;
///
/// let floor = Polygon::new("floor", vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(2.0, 0.0),
///     Point2::new(2.0, 2.0),
///     Point2::new(0.0, 2.0),
/// ]);
/// let pillar = Polygon::new("pillar", vec![
///     Point2::new(1.0, 1.0),
///     Point2::new(3.0, 1.0),
///     Point2::new(3.0, 3.0),
///     Point2::new(1.0, 3.0),
/// ]);
///
/// let walkable = subtract(&floor, &pillar, 1e-9).unwrap();
/// assert_eq!(walkable.len(), 1);
/// assert_eq!(walkable[0].len(), 6); // L-shaped remainder
/// ```
pub fn subtract<F: Float>(
    minuend: &Polygon<F>,
    subtrahend: &Polygon<F>,
    eps: F,
) -> Result<Vec<Polygon<F>>, MeshError> {
    if minuend.is_empty() {
        return Ok(Vec::new());
    }
    if subtrahend.len() < 3 {
        return Ok(vec![minuend.clone()]);
    }

    let crossings = find_crossings(minuend, subtrahend, eps);
    debug!(
        "subtract '{}' - '{}': {} proper crossings",
        minuend.name,
        subtrahend.name,
        crossings.len()
    );

    if crossings.is_empty() {
        let enclosed = minuend
            .vertices
            .iter()
            .all(|&v| subtrahend.contains(v) || subtrahend.on_boundary(v, eps));
        return if enclosed {
            Ok(Vec::new())
        } else {
            Ok(vec![minuend.clone()])
        };
    }

    let loops = boundary_walk(minuend, subtrahend, &crossings, true, eps)?;
    Ok(emit(loops, minuend, &minuend.name, eps))
}

/// Computes the union of two polygons.
///
/// Overlapping or nested inputs merge into a single polygon; disjoint inputs
/// pass through unchanged, each in its own output entry. Any hole the union
/// would enclose is dropped (holes are reintroduced downstream via contour
/// decomposition, not carried by boolean results).
///
/// # Example
///
/// ```
/// use walkmesh::polygon::{union, Polygon};
/// use walkmesh::Point2;
///
/// let a = Polygon::new("a", vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(2.0, 0.0),
///     Point2::new(2.0, 2.0),
///     Point2::new(0.0, 2.0),
/// ]);
/// let b = Polygon::new("b", vec![
///     Point2::new(5.0, 0.0),
///     Point2::new(6.0, 0.0),
///     Point2::new(6.0, 1.0),
///     Point2::new(5.0, 1.0),
/// ]);
///
/// // Disjoint polygons pass through unchanged.
/// let merged = union(&a, &b, 1e-9).unwrap();
/// assert_eq!(merged.len(), 2);
/// ```
pub fn union<F: Float>(
    a: &Polygon<F>,
    b: &Polygon<F>,
    eps: F,
) -> Result<Vec<Polygon<F>>, MeshError> {
    if a.is_empty() {
        return Ok(if b.is_empty() {
            Vec::new()
        } else {
            vec![b.clone()]
        });
    }
    if b.is_empty() {
        return Ok(vec![a.clone()]);
    }

    let crossings = find_crossings(a, b, eps);
    debug!(
        "union '{}' | '{}': {} proper crossings",
        a.name,
        b.name,
        crossings.len()
    );

    if crossings.is_empty() {
        let b_inside = b
            .vertices
            .iter()
            .all(|&v| a.contains(v) || a.on_boundary(v, eps));
        if b_inside {
            return Ok(vec![a.clone()]);
        }
        let a_inside = a
            .vertices
            .iter()
            .all(|&v| b.contains(v) || b.on_boundary(v, eps));
        if a_inside {
            return Ok(vec![b.clone()]);
        }
        return Ok(vec![a.clone(), b.clone()]);
    }

    let merged_name = format!("{}|{}", a.name, b.name);
    let loops = boundary_walk(a, b, &crossings, false, eps)?;
    Ok(emit(loops, a, &merged_name, eps))
}

/// Merges every pairwise-overlapping (or nested) polygon in `polygons` until
/// no two entries overlap; disjoint polygons pass through unchanged.
///
/// A single-element input is returned as-is.
pub fn union_all<F: Float>(
    polygons: &[Polygon<F>],
    eps: F,
) -> Result<Vec<Polygon<F>>, MeshError> {
    let mut pool: Vec<Polygon<F>> = polygons.to_vec();

    'merge: loop {
        for i in 0..pool.len() {
            for j in (i + 1)..pool.len() {
                let merged = union(&pool[i], &pool[j], eps)?;
                if merged.len() == 1 {
                    let combined = merged.into_iter().next().unwrap();
                    pool.remove(j);
                    pool.remove(i);
                    pool.insert(i, combined);
                    continue 'merge;
                }
            }
        }
        break;
    }

    Ok(pool)
}

/// Finds all proper edge/edge crossings between two polygons.
///
/// Touching contacts and collinear overlaps are classified and skipped here;
/// they never become walk switch points. Any sliver they would produce is
/// removed by the duplicate-collapse and zero-area filters on emission.
fn find_crossings<F: Float>(a: &Polygon<F>, b: &Polygon<F>, eps: F) -> Vec<Crossing<F>> {
    let mut crossings = Vec::new();
    let n_a = a.len();
    let n_b = b.len();

    for i in 0..n_a {
        let ea = Segment2::new(a.vertices[i], a.vertices[(i + 1) % n_a]);
        for j in 0..n_b {
            let eb = Segment2::new(b.vertices[j], b.vertices[(j + 1) % n_b]);
            match segments_intersect(ea, eb, eps) {
                SegmentIntersection::Proper { point, t1, t2 } => {
                    crossings.push(Crossing {
                        point,
                        edge_a: i,
                        t_a: t1,
                        edge_b: j,
                        t_b: t2,
                    });
                }
                SegmentIntersection::Touching { .. }
                | SegmentIntersection::CollinearOverlap { .. }
                | SegmentIntersection::None => {}
            }
        }
    }

    crossings
}

/// Builds an augmented ring for one polygon: original vertices in order with
/// crossings spliced into their edges by ascending parameter.
///
/// Returns the ring and, for each crossing id, the index of its node.
fn build_ring<F: Float>(
    vertices: &[Point2<F>],
    crossings: &[Crossing<F>],
    edge_of: impl Fn(&Crossing<F>) -> (usize, F),
) -> (Vec<RingNode<F>>, Vec<usize>) {
    let mut ring = Vec::with_capacity(vertices.len() + crossings.len());
    let mut node_of = vec![0usize; crossings.len()];

    for (i, &v) in vertices.iter().enumerate() {
        ring.push(RingNode {
            point: v,
            crossing: None,
        });

        let mut on_edge: Vec<(usize, F)> = crossings
            .iter()
            .enumerate()
            .filter_map(|(id, c)| {
                let (edge, t) = edge_of(c);
                (edge == i).then_some((id, t))
            })
            .collect();
        on_edge.sort_by(|x, y| x.1.partial_cmp(&y.1).unwrap_or(std::cmp::Ordering::Equal));

        for (id, _) in on_edge {
            node_of[id] = ring.len();
            ring.push(RingNode {
                point: crossings[id].point,
                crossing: Some(id),
            });
        }
    }

    (ring, node_of)
}

/// Traces every result loop of one boolean operation.
///
/// Walks start at each minuend vertex (original index order) lying strictly
/// outside the other polygon, then at unused exit crossings in minuend
/// boundary order. Each walk follows ring A forward, switching rings at
/// every crossing; ring B is walked in reverse for subtraction and forward
/// for union.
fn boundary_walk<F: Float>(
    a: &Polygon<F>,
    b: &Polygon<F>,
    crossings: &[Crossing<F>],
    reverse_b: bool,
    eps: F,
) -> Result<Vec<Vec<Point2<F>>>, MeshError> {
    let (ring_a, node_a_of) = build_ring(&a.vertices, crossings, |c| (c.edge_a, c.t_a));
    let (ring_b, node_b_of) = build_ring(&b.vertices, crossings, |c| (c.edge_b, c.t_b));

    let max_steps = 4 * (ring_a.len() + ring_b.len());
    let mut visited_a = vec![false; ring_a.len()];
    let mut used = vec![false; crossings.len()];
    let mut loops = Vec::new();

    // First the deterministic starts: minuend vertices outside the other
    // polygon, in original order.
    for start in 0..ring_a.len() {
        let node = ring_a[start];
        if node.crossing.is_some() || visited_a[start] {
            continue;
        }
        if b.contains(node.point) || b.on_boundary(node.point, eps) {
            continue;
        }
        trace!("boundary walk from minuend vertex node {}", start);
        loops.push(walk_from(
            start,
            &ring_a,
            &ring_b,
            &node_a_of,
            &node_b_of,
            reverse_b,
            &mut used,
            &mut visited_a,
            max_steps,
        )?);
    }

    // Components that contain no original minuend vertex are picked up from
    // the remaining crossings. The kept part of ring A lies outside the
    // other polygon, so a walk must start at an exit crossing (the arc
    // ahead is outside); starting at an entry would trace the discarded
    // inside arc instead of the result loop. Candidates are taken in
    // minuend boundary order, which keeps the output independent of the
    // other ring's rotation.
    loop {
        let mut next: Option<usize> = None;
        for c in 0..crossings.len() {
            if used[c] {
                continue;
            }
            let node = node_a_of[c];
            let after = (node + 1) % ring_a.len();
            let mid = ring_a[node].point.midpoint(ring_a[after].point);
            if b.contains(mid) || b.on_boundary(mid, eps) {
                continue;
            }
            let earlier = next.map_or(true, |n| {
                (crossings[c].edge_a, crossings[c].t_a) < (crossings[n].edge_a, crossings[n].t_a)
            });
            if earlier {
                next = Some(c);
            }
        }
        let Some(c) = next else { break };
        trace!("boundary walk from exit crossing {}", c);
        loops.push(walk_from(
            node_a_of[c],
            &ring_a,
            &ring_b,
            &node_a_of,
            &node_b_of,
            reverse_b,
            &mut used,
            &mut visited_a,
            max_steps,
        )?);
    }

    Ok(loops)
}

/// Traces one result loop starting at `start` on ring A.
#[allow(clippy::too_many_arguments)]
fn walk_from<F: Float>(
    start: usize,
    ring_a: &[RingNode<F>],
    ring_b: &[RingNode<F>],
    node_a_of: &[usize],
    node_b_of: &[usize],
    reverse_b: bool,
    used: &mut [bool],
    visited_a: &mut [bool],
    max_steps: usize,
) -> Result<Vec<Point2<F>>, MeshError> {
    let mut points = vec![ring_a[start].point];
    visited_a[start] = true;
    if let Some(c) = ring_a[start].crossing {
        used[c] = true;
    }

    let mut on_a = true;
    let mut idx = start;
    let mut steps = 0usize;

    loop {
        steps += 1;
        if steps > max_steps {
            return Err(MeshError::BoundaryWalkDiverged { iterations: steps });
        }

        idx = if on_a {
            (idx + 1) % ring_a.len()
        } else if reverse_b {
            (idx + ring_b.len() - 1) % ring_b.len()
        } else {
            (idx + 1) % ring_b.len()
        };

        if on_a && idx == start {
            break;
        }

        let node = if on_a { ring_a[idx] } else { ring_b[idx] };

        if let Some(c) = node.crossing {
            used[c] = true;
            points.push(node.point);
            // Every proper crossing is a switch point: the kept boundary
            // continues on the other ring.
            on_a = !on_a;
            idx = if on_a { node_a_of[c] } else { node_b_of[c] };
            if on_a && idx == start {
                break;
            }
        } else {
            points.push(node.point);
            if on_a {
                visited_a[idx] = true;
            }
        }
    }

    Ok(points)
}

/// Turns raw walk loops into result polygons: collapses consecutive
/// near-identical points, drops zero-area slivers, and drops loops whose
/// winding flipped relative to the input (hole loops, out of scope for
/// boolean results).
fn emit<F: Float>(
    loops: Vec<Vec<Point2<F>>>,
    reference: &Polygon<F>,
    name: &str,
    eps: F,
) -> Vec<Polygon<F>> {
    let reference_ccw = reference.signed_area() >= F::zero();
    let mut out = Vec::new();

    for raw in loops {
        let pts = collapse_duplicates(raw, eps);
        if pts.len() < 3 {
            continue;
        }
        let area = signed_area(&pts);
        // eps is a length; the sliver cutoff is the area of an eps-wide
        // ribbon along the loop, so it tracks coordinate scale.
        let mut perimeter = F::zero();
        for i in 0..pts.len() {
            perimeter = perimeter + pts[i].distance(pts[(i + 1) % pts.len()]);
        }
        if area.abs() <= eps * perimeter / F::from(2.0).unwrap() {
            continue;
        }
        if (area > F::zero()) != reference_ccw {
            trace!("dropping result loop with flipped winding");
            continue;
        }
        out.push(Polygon::new(name, pts));
    }

    out
}

/// Collapses consecutive near-identical points, including the closing pair.
fn collapse_duplicates<F: Float>(points: Vec<Point2<F>>, eps: F) -> Vec<Point2<F>> {
    let mut pts: Vec<Point2<F>> = Vec::with_capacity(points.len());
    for p in points {
        if pts.last().map_or(true, |last| !last.approx_eq(p, eps)) {
            pts.push(p);
        }
    }
    while pts.len() > 1 && pts[0].approx_eq(*pts.last().unwrap(), eps) {
        pts.pop();
    }
    pts
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPS: f64 = 1e-9;

    fn square(name: &str, x: f64, y: f64, size: f64) -> Polygon<f64> {
        Polygon::new(
            name,
            vec![
                Point2::new(x, y),
                Point2::new(x + size, y),
                Point2::new(x + size, y + size),
                Point2::new(x, y + size),
            ],
        )
    }

    fn points_of(p: &Polygon<f64>) -> Vec<(f64, f64)> {
        p.vertices.iter().map(|v| (v.x, v.y)).collect()
    }

    #[test]
    fn test_subtract_disjoint_returns_minuend() {
        let a = square("a", 0.0, 0.0, 1.0);
        let b = square("b", 5.0, 5.0, 1.0);

        let result = subtract(&a, &b, EPS).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0], a);
    }

    #[test]
    fn test_subtract_minuend_inside_subtrahend_is_empty() {
        let a = square("a", 1.0, 1.0, 1.0);
        let b = square("b", 0.0, 0.0, 4.0);

        let result = subtract(&a, &b, EPS).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_subtract_subtrahend_inside_minuend_returns_minuend() {
        // Hole carving is not subtraction's job; the minuend passes through.
        let a = square("a", 0.0, 0.0, 4.0);
        let b = square("b", 1.0, 1.0, 2.0);

        let result = subtract(&a, &b, EPS).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0], a);
    }

    #[test]
    fn test_subtract_side_strip() {
        // Square minus a strip covering its right half: the walk starts at
        // the first minuend vertex outside the strip and keeps the minuend's
        // CCW winding.
        let a = square("floor", 0.0, 0.0, 4.0);
        let b = Polygon::new(
            "strip",
            vec![
                Point2::new(2.0, -1.0),
                Point2::new(5.0, -1.0),
                Point2::new(5.0, 5.0),
                Point2::new(2.0, 5.0),
            ],
        );

        let result = subtract(&a, &b, EPS).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "floor");
        assert_eq!(
            points_of(&result[0]),
            vec![(0.0, 0.0), (2.0, 0.0), (2.0, 4.0), (0.0, 4.0)]
        );
        assert_relative_eq!(result[0].signed_area(), 8.0, epsilon = 1e-9);
    }

    #[test]
    fn test_subtract_corner_overlap() {
        let a = square("a", 0.0, 0.0, 2.0);
        let b = square("b", 1.0, 1.0, 2.0);

        let result = subtract(&a, &b, EPS).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(
            points_of(&result[0]),
            vec![
                (0.0, 0.0),
                (2.0, 0.0),
                (2.0, 1.0),
                (1.0, 1.0),
                (1.0, 2.0),
                (0.0, 2.0)
            ]
        );
        assert_relative_eq!(result[0].signed_area(), 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_subtract_preserves_cw_winding() {
        let a = square("a", 0.0, 0.0, 2.0).reversed();
        let b = square("b", 1.0, 1.0, 2.0).reversed();

        let result = subtract(&a, &b, EPS).unwrap();
        assert_eq!(result.len(), 1);
        assert!(result[0].signed_area() < 0.0);
        assert_relative_eq!(result[0].area(), 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_subtract_split_into_two_pieces() {
        // A horizontal bar cut in half by a vertical bar.
        let a = Polygon::new(
            "bar",
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(6.0, 0.0),
                Point2::new(6.0, 2.0),
                Point2::new(0.0, 2.0),
            ],
        );
        let b = Polygon::new(
            "cutter",
            vec![
                Point2::new(2.0, -1.0),
                Point2::new(4.0, -1.0),
                Point2::new(4.0, 3.0),
                Point2::new(2.0, 3.0),
            ],
        );

        let result = subtract(&a, &b, EPS).unwrap();
        assert_eq!(result.len(), 2);
        let total: f64 = result.iter().map(|p| p.area()).sum();
        assert_relative_eq!(total, 8.0, epsilon = 1e-9);
        // Both pieces keep the minuend's winding.
        for piece in &result {
            assert!(piece.signed_area() > 0.0);
            assert_eq!(piece.name, "bar");
        }
    }

    #[test]
    fn test_subtract_empty_inputs() {
        let a = square("a", 0.0, 0.0, 1.0);
        let empty: Polygon<f64> = Polygon::new("none", vec![]);

        assert!(subtract(&empty, &a, EPS).unwrap().is_empty());
        let kept = subtract(&a, &empty, EPS).unwrap();
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0], a);
    }

    #[test]
    fn test_union_overlapping_squares() {
        let a = square("a", 0.0, 0.0, 2.0);
        let b = square("b", 1.0, 1.0, 2.0);

        let result = union(&a, &b, EPS).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "a|b");
        assert_eq!(
            points_of(&result[0]),
            vec![
                (0.0, 0.0),
                (2.0, 0.0),
                (2.0, 1.0),
                (3.0, 1.0),
                (3.0, 3.0),
                (1.0, 3.0),
                (1.0, 2.0),
                (0.0, 2.0)
            ]
        );
        assert_relative_eq!(result[0].signed_area(), 7.0, epsilon = 1e-9);
    }

    #[test]
    fn test_union_disjoint_passes_through() {
        let a = square("a", 0.0, 0.0, 1.0);
        let b = square("b", 5.0, 0.0, 1.0);

        let result = union(&a, &b, EPS).unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result[0], a);
        assert_eq!(result[1], b);
    }

    #[test]
    fn test_union_contained_returns_container() {
        let outer = square("outer", 0.0, 0.0, 4.0);
        let inner = square("inner", 1.0, 1.0, 1.0);

        let result = union(&outer, &inner, EPS).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0], outer);

        let result = union(&inner, &outer, EPS).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0], outer);
    }

    #[test]
    fn test_union_all_single_is_unchanged() {
        let a = square("a", 0.0, 0.0, 1.0);
        let result = union_all(&[a.clone()], EPS).unwrap();
        assert_eq!(result, vec![a]);
    }

    #[test]
    fn test_union_all_merges_chain() {
        // Two overlapping squares merge; a distant one passes through.
        let a = square("a", 0.0, 0.0, 2.0);
        let b = square("b", 1.0, 1.0, 2.0);
        let c = square("c", 10.0, 10.0, 1.0);

        let result = union_all(&[a, b, c.clone()], EPS).unwrap();
        assert_eq!(result.len(), 2);
        assert_relative_eq!(result[0].area(), 7.0, epsilon = 1e-9);
        assert_eq!(result[1], c);
    }

    #[test]
    fn test_union_all_empty() {
        let result = union_all::<f64>(&[], EPS).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_shared_edge_no_duplicate_vertices() {
        // Subtrahend sharing the minuend's right edge: collinear contact must
        // not leave duplicate or degenerate vertices in the result.
        let a = square("a", 0.0, 0.0, 2.0);
        let b = square("b", 2.0, 0.0, 2.0);

        let result = subtract(&a, &b, EPS).unwrap();
        assert_eq!(result.len(), 1);
        assert_relative_eq!(result[0].area(), 4.0, epsilon = 1e-9);
        // No two consecutive vertices coincide.
        let n = result[0].len();
        for i in 0..n {
            let p = result[0].vertices[i];
            let q = result[0].vertices[(i + 1) % n];
            assert!(!p.approx_eq(q, EPS));
        }
    }

    #[test]
    fn test_subtract_component_with_no_outside_vertex() {
        // A cover polygon hides the whole floor except a slot open to the
        // right, so every floor vertex lies inside it and the result loop
        // can only be traced from a crossing. The walk has to begin where
        // the floor boundary exits the cover; the cover's vertex rotation
        // must not change the result.
        let floor = square("floor", 0.0, 0.0, 4.0);
        let ring = vec![
            Point2::new(-1.0, -1.0),
            Point2::new(5.0, -1.0),
            Point2::new(5.0, 1.5),
            Point2::new(2.0, 1.5),
            Point2::new(2.0, 2.5),
            Point2::new(5.0, 2.5),
            Point2::new(5.0, 5.0),
            Point2::new(-1.0, 5.0),
        ];

        for rotation in 0..ring.len() {
            let mut rotated = ring.clone();
            rotated.rotate_left(rotation);
            let cover = Polygon::new("cover", rotated);

            let result = subtract(&floor, &cover, EPS).unwrap();
            assert_eq!(result.len(), 1, "rotation {}", rotation);
            assert_eq!(
                points_of(&result[0]),
                vec![(4.0, 1.5), (4.0, 2.5), (2.0, 2.5), (2.0, 1.5)],
                "rotation {}",
                rotation
            );
            assert_relative_eq!(result[0].area(), 2.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_subtract_keeps_small_features_at_small_scale() {
        // A micro-scale triangle loses its right half; the surviving piece
        // has area well below eps itself, but it is no sliver and must not
        // be filtered out.
        let a = Polygon::new(
            "micro",
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(4e-5, 0.0),
                Point2::new(0.0, 4e-5),
            ],
        );
        let b = Polygon::new(
            "cut",
            vec![
                Point2::new(2e-5, -1.0),
                Point2::new(1.0, -1.0),
                Point2::new(1.0, 1.0),
                Point2::new(2e-5, 1.0),
            ],
        );

        let result = subtract(&a, &b, EPS).unwrap();
        assert_eq!(result.len(), 1);
        assert_relative_eq!(result[0].area(), 6e-10, epsilon = 1e-15);
    }

    #[test]
    fn test_f32_support() {
        let a: Polygon<f32> = Polygon::new(
            "a",
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(2.0, 0.0),
                Point2::new(2.0, 2.0),
                Point2::new(0.0, 2.0),
            ],
        );
        let b: Polygon<f32> = Polygon::new(
            "b",
            vec![
                Point2::new(1.0, 1.0),
                Point2::new(3.0, 1.0),
                Point2::new(3.0, 3.0),
                Point2::new(1.0, 3.0),
            ],
        );

        let result = subtract(&a, &b, 1e-5).unwrap();
        assert_eq!(result.len(), 1);
        assert!((result[0].area() - 3.0).abs() < 1e-4);
    }
}
