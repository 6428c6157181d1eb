//! Geometric predicates with explicit tolerance.
//!
//! Every comparison in the crate goes through an explicit `eps` parameter;
//! there is no global epsilon. The predicates here classify the degenerate
//! contact cases (touching endpoints, collinear overlaps) that the boolean
//! engine must distinguish from proper crossings.

mod predicates;

pub use predicates::{
    orient2d, point_on_segment, segments_intersect, Orientation, SegmentIntersection,
};
