//! Polygon operations for walkable-area construction.
//!
//! This module provides the polygon pipeline of the crate:
//! - Area, winding and point containment queries
//! - Boolean subtraction and union of simple polygons
//! - Sweep-line decomposition into y-monotone pieces (with holes)
//! - Triangulation of monotone pieces into adjacency-linked triangles
//!
//! # Example
//!
//! ```
//! use walkmesh::polygon::{subtract, Polygon};
//! use walkmesh::Point2;
//!
//! // Carve an obstacle out of a floor quad.
//! let floor = Polygon::new("floor", vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(4.0, 0.0),
//!     Point2::new(4.0, 4.0),
//!     Point2::new(0.0, 4.0),
//! ]);
//!
//! let pillar = Polygon::new("pillar", vec![
//!     Point2::new(2.0, -1.0),
//!     Point2::new(5.0, -1.0),
//!     Point2::new(5.0, 5.0),
//!     Point2::new(2.0, 5.0),
//! ]);
//!
//! let walkable = subtract(&floor, &pillar, 1e-9)?;
//! assert_eq!(walkable.len(), 1);
//! assert_eq!(walkable[0].len(), 4); // the left half of the floor
//! # Ok::<(), walkmesh::MeshError>(())
//! ```

mod boolean;
mod core;
mod monotone;
mod triangulate;

pub use boolean::{subtract, union, union_all};
pub use core::{point_in_polygon, signed_area, Polygon, Winding};
pub use monotone::{decompose, Contour, MonotonePolygon};
pub use triangulate::{triangulate, Triangle};
