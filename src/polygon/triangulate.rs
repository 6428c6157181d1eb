//! Triangulation of y-monotone polygons with triangle adjacency.
//!
//! The input ring must be y-monotone: splitting it at its highest and lowest
//! vertices yields two chains that each descend strictly in the sweep order
//! (descending y, ties toward smaller x). The classic two-chain stack sweep
//! then emits exactly `n - 2` triangles in a single pass. Monotonicity is
//! validated up front and violations are reported as
//! [`MeshError::NonMonotoneInput`] rather than producing a bad fan.
//!
//! Triangles index the shared point array and carry per-edge neighbor links,
//! so the output is directly usable as a navigation mesh fragment.

use crate::error::MeshError;
use crate::polygon::Winding;
use crate::primitives::Point2;
use crate::tolerance::{orient2d, Orientation};
use log::trace;
use num_traits::Float;
use std::collections::HashMap;

/// One triangle of a mesh: three point indices plus per-edge neighbors.
///
/// `neighbors[k]` is the triangle sharing the edge from `vertices[k]` to
/// `vertices[(k + 1) % 3]`, or `None` on the mesh boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle {
    /// Indices into the shared point array.
    pub vertices: [usize; 3],
    /// Neighbor triangle per edge, `None` on the boundary.
    pub neighbors: [Option<usize>; 3],
}

impl Triangle {
    /// Returns the slot of the edge `(a, b)` in either direction, if this
    /// triangle has it.
    pub fn edge_slot(&self, a: usize, b: usize) -> Option<usize> {
        (0..3).find(|&k| {
            let (u, v) = (self.vertices[k], self.vertices[(k + 1) % 3]);
            (u, v) == (a, b) || (u, v) == (b, a)
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Chain {
    Left,
    Right,
}

/// Triangulates one y-monotone ring into triangles with adjacency.
///
/// `indices` is the ring in its given order; `winding` declares its
/// orientation and every emitted triangle is normalized to it. Rings with
/// fewer than three vertices produce an empty mesh. Returns
/// [`MeshError::NonMonotoneInput`] if either chain fails to descend.
///
/// Duplicate positions under distinct indices are kept distinct; they can
/// yield degenerate (zero-area) triangles, which are emitted as-is.
///
/// # Example
///
/// ```
/// use walkmesh::polygon::{triangulate, Winding};
/// use walkmesh::Point2;
///
/// let points = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(0.0, 1.0),
/// ];
/// let tris = triangulate(&points, &[0, 1, 2, 3], Winding::CounterClockwise, 1e-9)?;
/// assert_eq!(tris.len(), 2);
/// # Ok::<(), walkmesh::MeshError>(())
/// ```
pub fn triangulate<F: Float>(
    points: &[Point2<F>],
    indices: &[usize],
    winding: Winding,
    eps: F,
) -> Result<Vec<Triangle>, MeshError> {
    let n = indices.len();
    if n < 3 {
        return Ok(Vec::new());
    }

    let below = |i: usize, j: usize| -> bool {
        let (pi, pj) = (points[indices[i]], points[indices[j]]);
        pi.y < pj.y || (pi.y == pj.y && pi.x > pj.x)
    };

    // Ring positions of the highest and lowest vertices.
    let mut top = 0;
    let mut bottom = 0;
    for pos in 1..n {
        if below(top, pos) {
            top = pos;
        }
        if below(pos, bottom) {
            bottom = pos;
        }
    }

    // Walking the ring forward from the top follows the left chain when the
    // ring is CCW, the right chain when CW.
    let forward_chain = match winding {
        Winding::CounterClockwise => Chain::Left,
        Winding::Clockwise => Chain::Right,
    };
    let backward_chain = match forward_chain {
        Chain::Left => Chain::Right,
        Chain::Right => Chain::Left,
    };

    let mut forward = Vec::new();
    let mut pos = (top + 1) % n;
    while pos != bottom {
        forward.push(pos);
        pos = (pos + 1) % n;
    }
    let mut backward = Vec::new();
    let mut pos = (top + n - 1) % n;
    while pos != bottom {
        backward.push(pos);
        pos = (pos + n - 1) % n;
    }

    // Each chain must descend from top to bottom; a vertex strictly above
    // its predecessor means the ring is not y-monotone.
    for chain in [&forward, &backward] {
        let mut prev = top;
        for &cur in chain.iter().chain(std::iter::once(&bottom)) {
            if below(prev, cur) {
                return Err(MeshError::NonMonotoneInput);
            }
            prev = cur;
        }
    }

    // Merge the chains into a single top-to-bottom order, tagging each
    // vertex with its chain.
    let mut sorted: Vec<(usize, Chain)> = Vec::with_capacity(n);
    sorted.push((top, Chain::Left));
    let (mut fi, mut bi) = (0, 0);
    while fi < forward.len() || bi < backward.len() {
        let take_backward = match (forward.get(fi), backward.get(bi)) {
            (Some(&f), Some(&b)) => below(f, b),
            (None, Some(_)) => true,
            _ => false,
        };
        if take_backward {
            sorted.push((backward[bi], backward_chain));
            bi += 1;
        } else {
            sorted.push((forward[fi], forward_chain));
            fi += 1;
        }
    }
    sorted.push((bottom, Chain::Left));

    let desired = match winding {
        Winding::CounterClockwise => Orientation::CounterClockwise,
        Winding::Clockwise => Orientation::Clockwise,
    };
    let mut triangles: Vec<Triangle> = Vec::with_capacity(n - 2);
    let mut emit = |a: usize, b: usize, c: usize| {
        let (mut v1, mut v2) = (indices[b], indices[c]);
        let o = orient2d(points[indices[a]], points[v1], points[v2], eps);
        if o != desired && o != Orientation::Collinear {
            std::mem::swap(&mut v1, &mut v2);
        }
        triangles.push(Triangle {
            vertices: [indices[a], v1, v2],
            neighbors: [None; 3],
        });
    };

    let mut stack: Vec<(usize, Chain)> = vec![sorted[0], sorted[1]];
    for j in 2..n - 1 {
        let (u, chain) = sorted[j];
        let (_, top_chain) = *stack.last().unwrap();

        if chain != top_chain {
            // Opposite chain: the whole stack is visible from u.
            let old_top = *stack.last().unwrap();
            for w in (1..stack.len()).rev() {
                emit(u, stack[w].0, stack[w - 1].0);
            }
            stack.clear();
            stack.push(old_top);
            stack.push((u, chain));
        } else {
            // Same chain: clip ears while the turn stays convex toward the
            // interior.
            let mut last = stack.pop().unwrap();
            while let Some(&(t, _)) = stack.last() {
                let o = orient2d(points[indices[u]], points[indices[last.0]], points[indices[t]], eps);
                let convex = match chain {
                    Chain::Left => o == Orientation::Clockwise,
                    Chain::Right => o == Orientation::CounterClockwise,
                };
                if !convex {
                    break;
                }
                emit(u, last.0, t);
                last = stack.pop().unwrap();
            }
            stack.push(last);
            stack.push((u, chain));
        }
    }

    // The bottom vertex closes off everything left on the stack.
    let u = sorted[n - 1].0;
    for w in 0..stack.len() - 1 {
        emit(u, stack[w].0, stack[w + 1].0);
    }

    trace!("triangulated {} ring vertices into {} triangles", n, triangles.len());

    link_neighbors(&mut triangles);
    Ok(triangles)
}

/// Links triangles sharing an undirected edge, writing both neighbor slots.
fn link_neighbors(triangles: &mut [Triangle]) {
    let mut open: HashMap<(usize, usize), (usize, usize)> = HashMap::new();
    for t in 0..triangles.len() {
        for k in 0..3 {
            let (a, b) = (triangles[t].vertices[k], triangles[t].vertices[(k + 1) % 3]);
            let key = (a.min(b), a.max(b));
            match open.remove(&key) {
                Some((other, slot)) => {
                    triangles[t].neighbors[k] = Some(other);
                    triangles[other].neighbors[slot] = Some(t);
                }
                None => {
                    open.insert(key, (t, k));
                }
            }
        }
    }
}
