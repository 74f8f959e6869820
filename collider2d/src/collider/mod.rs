//! Colliders for narrow-phase collision tests.
//!
//! There are three concrete colliders: [LinePieceCollider], [CircleCollider] and
//! [RectangleCollider]. Each implements [Collider], which carries one intersection test per concrete
//! kind, so every pair of colliders can be tested from either side with the same result. [Shape]
//! wraps the closed set of kinds for callers that hold colliders without knowing their kind.
mod circle;
mod line_piece;
mod rectangle;
mod shape;

pub use circle::*;
pub use line_piece::*;
pub use rectangle::*;
pub use shape::*;

use crate::core::{math::Vector2, traits::Real};

/// Common capability every collider provides.
///
/// `a.intersects_x(&b)` and `b.intersects_y(&a)` always agree, the pairs that involve two
/// different kinds are implemented once and the other side delegates to it.
pub trait Collider<T = f64>
where
    T: Real,
{
    /// Smallest axis aligned rectangle containing the collider.
    fn bounding_box(&self) -> RectangleCollider<T>;

    /// Returns `true` if `point` lies within the collider.
    fn contains(&self, point: Vector2<T>) -> bool;

    /// Returns `true` if this collider overlaps the line segment `other`.
    fn intersects_line(&self, other: &LinePieceCollider<T>) -> bool;

    /// Returns `true` if this collider overlaps the circle `other`.
    fn intersects_circle(&self, other: &CircleCollider<T>) -> bool;

    /// Returns `true` if this collider overlaps the rectangle `other`.
    fn intersects_rectangle(&self, other: &RectangleCollider<T>) -> bool;

    /// Routes to the intersection test matching the kind of `other`.
    #[inline]
    fn intersects_shape(&self, other: &Shape<T>) -> bool {
        match other {
            Shape::Line(line) => self.intersects_line(line),
            Shape::Circle(circle) => self.intersects_circle(circle),
            Shape::Rectangle(rect) => self.intersects_rectangle(rect),
        }
    }
}
