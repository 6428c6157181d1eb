//! Tolerance-aware orientation and segment-intersection predicates.

use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// Result of an orientation test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Points are counter-clockwise (positive area).
    CounterClockwise,
    /// Points are clockwise (negative area).
    Clockwise,
    /// Points are collinear (within tolerance).
    Collinear,
}

/// Computes the orientation of three points with tolerance.
///
/// Returns the orientation of the triangle formed by points `a`, `b`, `c`:
/// - `CounterClockwise` if `c` is to the left of the line from `a` to `b`
/// - `Clockwise` if `c` is to the right of the line from `a` to `b`
/// - `Collinear` if `c` is on the line (within `eps` tolerance)
///
/// The test compares twice the signed triangle area against `eps`.
#[inline]
pub fn orient2d<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>, eps: F) -> Orientation {
    let ab = b - a;
    let ac = c - a;
    let cross = ab.cross(ac);

    if cross > eps {
        Orientation::CounterClockwise
    } else if cross < -eps {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Checks if a point lies on a line segment within tolerance.
///
/// Returns `true` if the point `p` is within distance `eps` of the segment.
#[inline]
pub fn point_on_segment<F: Float>(p: Point2<F>, segment: Segment2<F>, eps: F) -> bool {
    segment.distance_squared_to_point(p) <= eps * eps
}

/// Classified result of a segment intersection test.
///
/// The boolean boundary walk only switches rings at [`Proper`] crossings;
/// touching contacts and collinear overlaps are absorbed by vertex collapse
/// and the zero-area result filter downstream.
///
/// [`Proper`]: SegmentIntersection::Proper
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentIntersection<F> {
    /// Segments do not intersect.
    None,
    /// Segments cross at a single interior point of both.
    Proper {
        /// The intersection point.
        point: Point2<F>,
        /// Parameter along first segment (0 = start, 1 = end).
        t1: F,
        /// Parameter along second segment (0 = start, 1 = end).
        t2: F,
    },
    /// One segment's endpoint lies on the other segment (within tolerance);
    /// the boundaries touch without crossing transversally at an interior
    /// point of both.
    Touching {
        /// The contact point.
        point: Point2<F>,
        /// Parameter along first segment.
        t1: F,
        /// Parameter along second segment.
        t2: F,
    },
    /// Segments are collinear and share a stretch of the same line.
    CollinearOverlap {
        /// Start of the overlapping region.
        start: Point2<F>,
        /// End of the overlapping region.
        end: Point2<F>,
    },
}

/// Tests if two line segments intersect, classifying the contact.
///
/// - `Proper` if the segments cross at a point interior to both
/// - `Touching` if an endpoint of one lies on the other
/// - `CollinearOverlap` if they are collinear and overlap along a stretch
/// - `None` otherwise
pub fn segments_intersect<F: Float>(
    s1: Segment2<F>,
    s2: Segment2<F>,
    eps: F,
) -> SegmentIntersection<F> {
    let d1 = s1.direction();
    let d2 = s2.direction();
    let cross = d1.cross(d2);

    let d = s2.start - s1.start;
    let eps_sq = eps * eps;

    if cross.abs() <= eps {
        // Parallel segments. Only collinear ones can make contact.
        let dist_sq = s1.distance_squared_to_point(s2.start);
        let dist_sq_end = s1.distance_squared_to_point(s2.end);
        if dist_sq > eps_sq && dist_sq_end > eps_sq {
            return SegmentIntersection::None;
        }

        let len_sq = d1.magnitude_squared();
        if len_sq <= eps_sq {
            // s1 is degenerate (a point)
            if point_on_segment(s1.start, s2, eps) {
                let (_, t2) = s2.closest_point(s1.start);
                return SegmentIntersection::Touching {
                    point: s1.start,
                    t1: F::zero(),
                    t2,
                };
            }
            return SegmentIntersection::None;
        }

        // Project s2 endpoints onto s1's line
        let t2_start = (s2.start - s1.start).dot(d1) / len_sq;
        let t2_end = (s2.end - s1.start).dot(d1) / len_sq;

        let (t2_min, t2_max) = if t2_start <= t2_end {
            (t2_start, t2_end)
        } else {
            (t2_end, t2_start)
        };

        let overlap_start = t2_min.max(F::zero());
        let overlap_end = t2_max.min(F::one());

        if overlap_start > overlap_end + eps {
            return SegmentIntersection::None;
        }

        if (overlap_end - overlap_start).abs() <= eps {
            // Endpoint-to-endpoint contact
            let point = s1.point_at(overlap_start);
            let (_, t2) = s2.closest_point(point);
            return SegmentIntersection::Touching {
                point,
                t1: overlap_start,
                t2,
            };
        }

        return SegmentIntersection::CollinearOverlap {
            start: s1.point_at(overlap_start),
            end: s1.point_at(overlap_end),
        };
    }

    // Non-parallel segments. Solve s1.start + t1*d1 = s2.start + t2*d2 by
    // Cramer's rule.
    let t1 = d.cross(d2) / cross;
    let t2 = d.cross(d1) / cross;

    let neg_eps = -eps;
    let one_plus_eps = F::one() + eps;

    if t1 < neg_eps || t1 > one_plus_eps || t2 < neg_eps || t2 > one_plus_eps {
        return SegmentIntersection::None;
    }

    let t1_clamped = t1.max(F::zero()).min(F::one());
    let t2_clamped = t2.max(F::zero()).min(F::one());
    let point = s1.point_at(t1_clamped);

    // A crossing is proper only when it is interior to both segments;
    // endpoint contact is a touch.
    let interior = |t: F| t > eps && t < F::one() - eps;
    if interior(t1) && interior(t2) {
        SegmentIntersection::Proper {
            point,
            t1: t1_clamped,
            t2: t2_clamped,
        }
    } else {
        SegmentIntersection::Touching {
            point,
            t1: t1_clamped,
            t2: t2_clamped,
        }
    }
}
