//! Sweep-line decomposition of a contour set into y-monotone polygons.
//!
//! The input is one outer contour plus zero or more hole contours, all
//! indexing a shared point array (outer CCW, holes CW — caller-guaranteed,
//! not validated). A single top-to-bottom sweep classifies every vertex as
//! start / end / split / merge / regular and inserts diagonals at split and
//! merge vertices, fusing holes into the outer region. The resulting planar
//! subdivision is then traced face by face; every traced face is one
//! y-monotone piece, ready for the triangulator.
//!
//! Vertex order is total and deterministic: descending y, ties toward
//! smaller x, then by index. Given identical input, the emitted pieces and
//! their vertex orderings are fixed.

use crate::primitives::Point2;
use crate::tolerance::{orient2d, Orientation};
use log::{debug, trace};
use num_traits::Float;

/// An ordered index loop into a shared point array, with a provenance name.
///
/// The first contour of a decomposition batch is the outer boundary;
/// subsequent contours are holes. The name is diagnostics-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contour {
    /// Human-readable provenance, carried through for diagnostics.
    pub name: String,
    /// Indices into the shared point array, in ring order.
    pub indices: Vec<usize>,
}

impl Contour {
    /// Creates a contour from explicit indices.
    #[inline]
    pub fn new(name: impl Into<String>, indices: Vec<usize>) -> Self {
        Self {
            name: name.into(),
            indices,
        }
    }

    /// Creates a contour over a contiguous range of the shared point array.
    ///
    /// This is the natural constructor when contours are handed over as a
    /// flat point array plus end-of-contour offsets.
    #[inline]
    pub fn from_range(name: impl Into<String>, range: std::ops::Range<usize>) -> Self {
        Self {
            name: name.into(),
            indices: range.collect(),
        }
    }
}

/// One y-monotone piece of a decomposed region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonotonePolygon {
    /// Vertex indices into the shared point array, in CCW ring order.
    pub indices: Vec<usize>,
    /// Diagonals on this piece's boundary, as traversed (directed index
    /// pairs). These are the hand-off edges for adjacency stitching when the
    /// pieces are triangulated independently.
    pub shared_edges: Vec<(usize, usize)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VertexKind {
    Start,
    End,
    Split,
    Merge,
    /// Boundary descends through the vertex; region interior to its right.
    RegularLeft,
    /// Boundary ascends through the vertex; region interior to its left.
    RegularRight,
}

/// An active left-bounding edge in the sweep status, identified by its
/// origin vertex, with the helper vertex used for diagonal placement.
#[derive(Debug, Clone, Copy)]
struct StatusEdge {
    origin: usize,
    helper: usize,
}

/// Decomposes an outer contour plus holes into y-monotone polygons.
///
/// Returns the pieces in deterministic order together with the diagonals
/// inserted to achieve monotonicity (recorded per piece in
/// [`MonotonePolygon::shared_edges`]). The union of the pieces exactly
/// covers the outer contour minus the holes.
///
/// Preconditions (not validated): the outer contour is CCW, holes are CW,
/// holes lie strictly inside the outer contour and do not intersect each
/// other or the outer boundary.
///
/// # Example
///
/// ```
/// use walkmesh::polygon::{decompose, Contour};
/// use walkmesh::Point2;
///
/// let points = vec![
///     Point2::new(-1.0, -1.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(-1.0, 1.0),
/// ];
/// let contours = vec![Contour::new("island", vec![0, 1, 2])];
///
/// let pieces = decompose(&points, &contours, 1e-9);
/// assert_eq!(pieces.len(), 1);
/// assert_eq!(pieces[0].indices, vec![0, 1, 2]);
/// assert!(pieces[0].shared_edges.is_empty());
/// ```
pub fn decompose<F: Float>(
    points: &[Point2<F>],
    contours: &[Contour],
    eps: F,
) -> Vec<MonotonePolygon> {
    let total: usize = contours.iter().map(|c| c.indices.len()).sum();
    if total < 3 {
        return Vec::new();
    }

    // Ring neighbors per point index. A point index belongs to exactly one
    // contour.
    let mut ring_next = vec![usize::MAX; points.len()];
    let mut ring_prev = vec![usize::MAX; points.len()];
    for contour in contours {
        let n = contour.indices.len();
        for k in 0..n {
            let v = contour.indices[k];
            ring_next[v] = contour.indices[(k + 1) % n];
            ring_prev[v] = contour.indices[(k + n - 1) % n];
        }
    }

    let below = |i: usize, j: usize| -> bool {
        let (pi, pj) = (points[i], points[j]);
        pi.y < pj.y || (pi.y == pj.y && pi.x > pj.x)
    };

    // Classify every vertex against its ring neighbors.
    let mut kind = vec![VertexKind::RegularLeft; points.len()];
    let mut sweep: Vec<usize> = Vec::with_capacity(total);
    for contour in contours {
        for &v in &contour.indices {
            sweep.push(v);
            let (prev, next) = (ring_prev[v], ring_next[v]);
            let prev_below = below(prev, v);
            let next_below = below(next, v);
            let convex =
                orient2d(points[prev], points[v], points[next], eps) != Orientation::Clockwise;
            kind[v] = match (prev_below, next_below) {
                (true, true) => {
                    if convex {
                        VertexKind::Start
                    } else {
                        VertexKind::Split
                    }
                }
                (false, false) => {
                    if convex {
                        VertexKind::End
                    } else {
                        VertexKind::Merge
                    }
                }
                // prev above, next below: the boundary descends through v.
                (false, true) => VertexKind::RegularLeft,
                (true, false) => VertexKind::RegularRight,
            };
        }
    }

    // Deterministic total order: descending y, ties toward smaller x, then
    // by index.
    sweep.sort_by(|&a, &b| {
        let (pa, pb) = (points[a], points[b]);
        pb.y
            .partial_cmp(&pa.y)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(pa.x.partial_cmp(&pb.x).unwrap_or(std::cmp::Ordering::Equal))
            .then(a.cmp(&b))
    });

    // x of an active edge at sweep height y, for the left-of search.
    let edge_x_at = |origin: usize, y: F| -> F {
        let a = points[origin];
        let b = points[ring_next[origin]];
        let dy = a.y - b.y;
        if dy.abs() <= eps {
            a.x.min(b.x)
        } else {
            a.x + (b.x - a.x) * (a.y - y) / dy
        }
    };

    let mut status: Vec<StatusEdge> = Vec::new();
    let mut diagonals: Vec<(usize, usize)> = Vec::new();

    for &v in &sweep {
        let pv = points[v];

        let left_of = |status: &[StatusEdge]| -> Option<usize> {
            let mut best: Option<(usize, F)> = None;
            for (pos, e) in status.iter().enumerate() {
                let x = edge_x_at(e.origin, pv.y);
                if x <= pv.x && best.map_or(true, |(_, bx)| x > bx) {
                    best = Some((pos, x));
                }
            }
            best.map(|(pos, _)| pos)
        };

        // Removes the edge arriving at v, adding a diagonal if its helper
        // was a merge vertex.
        let close_incoming = |status: &mut Vec<StatusEdge>,
                              diagonals: &mut Vec<(usize, usize)>| {
            if let Some(pos) = status.iter().position(|e| e.origin == ring_prev[v]) {
                let helper = status[pos].helper;
                if kind[helper] == VertexKind::Merge {
                    diagonals.push((v, helper));
                }
                status.remove(pos);
            }
        };

        match kind[v] {
            VertexKind::Start => {
                status.push(StatusEdge { origin: v, helper: v });
            }
            VertexKind::End => {
                close_incoming(&mut status, &mut diagonals);
            }
            VertexKind::Split => {
                if let Some(pos) = left_of(&status) {
                    diagonals.push((v, status[pos].helper));
                    status[pos].helper = v;
                }
                status.push(StatusEdge { origin: v, helper: v });
            }
            VertexKind::Merge => {
                close_incoming(&mut status, &mut diagonals);
                if let Some(pos) = left_of(&status) {
                    if kind[status[pos].helper] == VertexKind::Merge {
                        diagonals.push((v, status[pos].helper));
                    }
                    status[pos].helper = v;
                }
            }
            VertexKind::RegularLeft => {
                close_incoming(&mut status, &mut diagonals);
                status.push(StatusEdge { origin: v, helper: v });
            }
            VertexKind::RegularRight => {
                if let Some(pos) = left_of(&status) {
                    if kind[status[pos].helper] == VertexKind::Merge {
                        diagonals.push((v, status[pos].helper));
                    }
                    status[pos].helper = v;
                }
            }
        }
    }

    debug!(
        "decompose: {} contours, {} vertices, {} diagonals",
        contours.len(),
        total,
        diagonals.len()
    );

    trace_faces(points, contours, &diagonals, total)
}

/// Traces the faces of the subdivision formed by the contour edges plus the
/// inserted diagonals.
///
/// Contour edges are directed as given (region interior on the left);
/// diagonals contribute both directions. Every traced face is therefore a
/// region piece in CCW order — hole interiors and the unbounded face are
/// never visited. At each arrival the walk takes the next outgoing edge
/// clockwise from the reversed incoming edge.
fn trace_faces<F: Float>(
    points: &[Point2<F>],
    contours: &[Contour],
    diagonals: &[(usize, usize)],
    total: usize,
) -> Vec<MonotonePolygon> {
    let mut edges: Vec<(usize, usize)> = Vec::with_capacity(total + 2 * diagonals.len());
    for contour in contours {
        let n = contour.indices.len();
        for k in 0..n {
            edges.push((contour.indices[k], contour.indices[(k + 1) % n]));
        }
    }
    let contour_edge_count = edges.len();
    for &(u, v) in diagonals {
        edges.push((u, v));
        edges.push((v, u));
    }

    // Outgoing adjacency per point index, in edge order.
    let mut out: Vec<Vec<usize>> = vec![Vec::new(); points.len()];
    for (id, &(u, _)) in edges.iter().enumerate() {
        out[u].push(id);
    }

    let angle = |from: usize, to: usize| -> F {
        let d = points[to] - points[from];
        d.y.atan2(d.x)
    };
    let two_pi = F::from(std::f64::consts::TAU).unwrap();

    let mut used = vec![false; edges.len()];
    let mut faces = Vec::new();

    for start in 0..edges.len() {
        if used[start] {
            continue;
        }

        let mut indices = Vec::new();
        let mut shared = Vec::new();
        let mut edge = start;
        let max_steps = edges.len() + 1;
        let mut steps = 0usize;

        loop {
            steps += 1;
            if steps > max_steps {
                // Degenerate subdivision; bail out of this face rather than
                // spin. Precondition violations land here.
                trace!("face trace exceeded {} steps, abandoning face", max_steps);
                break;
            }

            used[edge] = true;
            let (u, v) = edges[edge];
            indices.push(u);
            if edge >= contour_edge_count {
                shared.push((u, v));
            }

            // Next outgoing edge clockwise from the reversed incoming edge.
            let theta_in = angle(v, u);
            let mut next_edge: Option<(usize, F)> = None;
            for &cand in &out[v] {
                let theta_out = angle(v, edges[cand].1);
                let mut delta = theta_in - theta_out;
                while delta <= F::zero() {
                    delta = delta + two_pi;
                }
                if next_edge.map_or(true, |(_, best)| delta < best) {
                    next_edge = Some((cand, delta));
                }
            }

            match next_edge {
                Some((e, _)) if e == start => break,
                Some((e, _)) => edge = e,
                None => break,
            }
        }

        if indices.len() >= 3 {
            faces.push(MonotonePolygon {
                indices,
                shared_edges: shared,
            });
        }
    }

    faces
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_single_triangle_is_one_piece() {
        let points = vec![
            Point2::new(-1.0, -1.0),
            Point2::new(1.0, 1.0),
            Point2::new(-1.0, 1.0),
        ];
        let contours = vec![Contour::new("tri", vec![0, 1, 2])];

        let pieces = decompose(&points, &contours, EPS);
        assert_eq!(pieces.len(), 1);
        assert_eq!(pieces[0].indices, vec![0, 1, 2]);
        assert!(pieces[0].shared_edges.is_empty());
    }

    #[test]
    fn test_monotone_l_shape_needs_no_diagonals() {
        // The L-shape's reflex corner is a regular vertex, not a split or
        // merge: the piece comes back whole.
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 2.0),
            Point2::new(0.0, 2.0),
        ];
        let contours = vec![Contour::new("l", vec![0, 1, 2, 3, 4, 5])];

        let pieces = decompose(&points, &contours, EPS);
        assert_eq!(pieces.len(), 1);
        assert_eq!(pieces[0].indices, vec![0, 1, 2, 3, 4, 5]);
        assert!(pieces[0].shared_edges.is_empty());
    }

    #[test]
    fn test_merge_vertex_splits_into_two_pieces() {
        // A notch in the top edge creates one merge vertex and one diagonal.
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 3.0),
            Point2::new(2.0, 1.5),
            Point2::new(0.0, 3.0),
        ];
        let contours = vec![Contour::new("notched", vec![0, 1, 2, 3, 4])];

        let pieces = decompose(&points, &contours, EPS);
        assert_eq!(pieces.len(), 2);
        assert_eq!(pieces[0].indices, vec![0, 1, 2, 3]);
        assert_eq!(pieces[0].shared_edges, vec![(3, 0)]);
        assert_eq!(pieces[1].indices, vec![3, 4, 0]);
        assert_eq!(pieces[1].shared_edges, vec![(0, 3)]);
    }

    #[test]
    fn test_square_with_hole() {
        // Outer square CCW, hole square CW: exactly two pieces joined by
        // exactly two diagonals, each piece referencing outer and hole
        // vertices.
        let points = vec![
            Point2::new(0.0, 0.0), // 0 outer
            Point2::new(4.0, 0.0), // 1
            Point2::new(4.0, 4.0), // 2
            Point2::new(0.0, 4.0), // 3
            Point2::new(1.0, 1.0), // 4 hole
            Point2::new(1.0, 3.0), // 5
            Point2::new(3.0, 3.0), // 6
            Point2::new(3.0, 1.0), // 7
        ];
        let contours = vec![
            Contour::new("outer", vec![0, 1, 2, 3]),
            Contour::new("hole", vec![4, 5, 6, 7]),
        ];

        let pieces = decompose(&points, &contours, EPS);
        assert_eq!(pieces.len(), 2);

        assert_eq!(pieces[0].indices, vec![0, 1, 2, 5, 6, 7]);
        assert_eq!(pieces[0].shared_edges, vec![(2, 5), (7, 0)]);
        assert_eq!(pieces[1].indices, vec![2, 3, 0, 7, 4, 5]);
        assert_eq!(pieces[1].shared_edges, vec![(0, 7), (5, 2)]);

        // Two undirected diagonals in total.
        let mut undirected: Vec<(usize, usize)> = pieces
            .iter()
            .flat_map(|p| p.shared_edges.iter())
            .map(|&(u, v)| (u.min(v), u.max(v)))
            .collect();
        undirected.sort_unstable();
        undirected.dedup();
        assert_eq!(undirected, vec![(0, 7), (2, 5)]);

        // Every piece references both contours.
        for piece in &pieces {
            assert!(piece.indices.iter().any(|&i| i < 4));
            assert!(piece.indices.iter().any(|&i| i >= 4));
        }
    }

    #[test]
    fn test_two_holes_decompose() {
        // Wide floor with two square holes side by side. Hole vertices 4
        // and 6 are collinear with outer vertex 0 (on y = x), and 5 and 7
        // with outer vertex 3 (on y = 4 - x); the sweep must not be thrown
        // by either alignment. Two diagonals per hole fuse everything into
        // three y-monotone pieces.
        let points = vec![
            Point2::new(0.0, 0.0), // 0 outer
            Point2::new(8.0, 0.0), // 1
            Point2::new(8.0, 4.0), // 2
            Point2::new(0.0, 4.0), // 3
            Point2::new(1.0, 1.0), // 4 left hole
            Point2::new(1.0, 3.0), // 5
            Point2::new(3.0, 3.0), // 6
            Point2::new(3.0, 1.0), // 7
            Point2::new(5.0, 1.0), // 8 right hole
            Point2::new(5.0, 3.0), // 9
            Point2::new(7.0, 3.0), // 10
            Point2::new(7.0, 1.0), // 11
        ];
        let contours = vec![
            Contour::new("floor", vec![0, 1, 2, 3]),
            Contour::new("left", vec![4, 5, 6, 7]),
            Contour::new("right", vec![8, 9, 10, 11]),
        ];

        let pieces = decompose(&points, &contours, EPS);
        assert_eq!(pieces.len(), 3);

        assert_eq!(pieces[0].indices, vec![0, 1, 2, 5, 6, 9, 10, 11]);
        assert_eq!(pieces[0].shared_edges, vec![(2, 5), (6, 9), (11, 0)]);
        assert_eq!(pieces[1].indices, vec![2, 3, 0, 11, 8, 7, 4, 5]);
        assert_eq!(pieces[1].shared_edges, vec![(0, 11), (8, 7), (5, 2)]);
        assert_eq!(pieces[2].indices, vec![6, 7, 8, 9]);
        assert_eq!(pieces[2].shared_edges, vec![(7, 8), (9, 6)]);

        // Four undirected diagonals in total, each shared by two pieces.
        let mut undirected: Vec<(usize, usize)> = pieces
            .iter()
            .flat_map(|p| p.shared_edges.iter())
            .map(|&(u, v)| (u.min(v), u.max(v)))
            .collect();
        undirected.sort_unstable();
        assert_eq!(
            undirected,
            vec![(0, 11), (0, 11), (2, 5), (2, 5), (6, 9), (6, 9), (7, 8), (7, 8)]
        );
    }

    #[test]
    fn test_duplicate_position_vertices_terminate() {
        // Indices 2 and 3 sit on the same coordinates (a collapsed edge);
        // decomposition must still terminate and emit the loop.
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 2.0),
            Point2::new(2.0, 2.0),
            Point2::new(0.0, 2.0),
        ];
        let contours = vec![Contour::new("pinched", vec![0, 1, 2, 3, 4])];

        let pieces = decompose(&points, &contours, EPS);
        assert_eq!(pieces.len(), 1);
        assert_eq!(pieces[0].indices, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_empty_and_tiny_inputs() {
        let points: Vec<Point2<f64>> = vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)];
        assert!(decompose(&points, &[], EPS).is_empty());
        assert!(decompose(&points, &[Contour::new("seg", vec![0, 1])], EPS).is_empty());
    }

    #[test]
    fn test_contour_from_range() {
        let c = Contour::from_range("outer", 3..7);
        assert_eq!(c.indices, vec![3, 4, 5, 6]);
        assert_eq!(c.name, "outer");
    }
}
