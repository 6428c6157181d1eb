//! walkmesh - 2D walkable-area geometry
//!
//! Building blocks for turning a floor outline plus obstacle outlines into a
//! triangulated navigation mesh: polygon booleans to carve obstacles out of
//! the floor, monotone decomposition to handle holes, and a triangulator
//! that links triangles into an adjacency graph.
//!
//! Every geometric comparison takes an explicit `eps` tolerance; there is no
//! global epsilon and no hidden configuration.

pub mod error;
pub mod polygon;
pub mod primitives;
pub mod tolerance;

pub use error::MeshError;
pub use primitives::{Point2, Segment2, Vec2};
pub use tolerance::{
    orient2d, point_on_segment, segments_intersect, Orientation, SegmentIntersection,
};
