//! Core polygon type and basic geometric queries.

use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// Winding order of a closed vertex loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    /// Vertices run clockwise (negative signed area).
    Clockwise,
    /// Vertices run counter-clockwise (positive signed area).
    CounterClockwise,
}

/// A simple polygon: an ordered, implicitly closed sequence of vertices with
/// a provenance name.
///
/// The name travels through boolean operations for diagnostics only; it has
/// no effect on geometry. Polygons are constructed once and treated as
/// immutable by every engine in this crate.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<F> {
    /// Human-readable provenance, carried through for diagnostics.
    pub name: String,
    /// The vertices of the closed loop.
    pub vertices: Vec<Point2<F>>,
}

impl<F: Float> Polygon<F> {
    /// Creates a new polygon from a name and vertices.
    #[inline]
    pub fn new(name: impl Into<String>, vertices: Vec<Point2<F>>) -> Self {
        Self {
            name: name.into(),
            vertices,
        }
    }

    /// Returns true if the polygon has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the signed area of the polygon using the shoelace formula.
    ///
    /// Positive for CCW winding, negative for CW winding.
    pub fn signed_area(&self) -> F {
        signed_area(&self.vertices)
    }

    /// Returns the absolute area of the polygon.
    pub fn area(&self) -> F {
        self.signed_area().abs()
    }

    /// Returns the winding order implied by the vertex sequence.
    pub fn winding(&self) -> Winding {
        if self.signed_area() < F::zero() {
            Winding::Clockwise
        } else {
            Winding::CounterClockwise
        }
    }

    /// Tests if a point is strictly inside the polygon.
    ///
    /// Points on the boundary may return either true or false; use
    /// [`Polygon::on_boundary`] where the distinction matters.
    pub fn contains(&self, point: Point2<F>) -> bool {
        point_in_polygon(&self.vertices, point)
    }

    /// Tests if a point lies on the polygon boundary within `eps`.
    pub fn on_boundary(&self, point: Point2<F>, eps: F) -> bool {
        self.edges()
            .any(|e| e.distance_squared_to_point(point) <= eps * eps)
    }

    /// Returns an iterator over the polygon's edges as segments, in order,
    /// closing from the last vertex back to the first.
    pub fn edges(&self) -> impl Iterator<Item = Segment2<F>> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| Segment2::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Returns the bounding box as (min, max) points.
    pub fn bounding_box(&self) -> Option<(Point2<F>, Point2<F>)> {
        if self.vertices.is_empty() {
            return None;
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            if v.x < min.x {
                min.x = v.x;
            }
            if v.y < min.y {
                min.y = v.y;
            }
            if v.x > max.x {
                max.x = v.x;
            }
            if v.y > max.y {
                max.y = v.y;
            }
        }

        Some((min, max))
    }

    /// Returns a polygon with reversed winding order, same name.
    pub fn reversed(&self) -> Self {
        let mut vertices = self.vertices.clone();
        vertices.reverse();
        Self {
            name: self.name.clone(),
            vertices,
        }
    }
}

/// Computes the signed area of a vertex loop using the shoelace formula.
///
/// Positive for CCW winding, negative for CW winding.
pub fn signed_area<F: Float>(vertices: &[Point2<F>]) -> F {
    if vertices.len() < 3 {
        return F::zero();
    }

    let mut area = F::zero();
    let n = vertices.len();

    for i in 0..n {
        let j = (i + 1) % n;
        area = area + vertices[i].x * vertices[j].y;
        area = area - vertices[j].x * vertices[i].y;
    }

    area / F::from(2.0).unwrap()
}

/// Tests if a point is inside a vertex loop using the ray casting algorithm.
///
/// Points on the boundary may return either true or false.
pub fn point_in_polygon<F: Float>(vertices: &[Point2<F>], point: Point2<F>) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    let mut inside = false;
    let n = vertices.len();

    let mut j = n - 1;
    for i in 0..n {
        let vi = vertices[i];
        let vj = vertices[j];

        if ((vi.y > point.y) != (vj.y > point.y))
            && (point.x < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x)
        {
            inside = !inside;
        }
        j = i;
    }

    inside
}
