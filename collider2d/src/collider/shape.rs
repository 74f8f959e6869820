use super::{CircleCollider, Collider, LinePieceCollider, RectangleCollider};
use crate::core::{math::Vector2, traits::Real};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The closed set of collider kinds.
///
/// Pairwise tests are resolved by matching on both kinds, see [Shape::intersects].
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(tag = "kind", rename_all = "camelCase")
)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Shape<T = f64> {
    Line(LinePieceCollider<T>),
    Circle(CircleCollider<T>),
    Rectangle(RectangleCollider<T>),
}

/// Tag identifying the kind of a [Shape].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Line,
    Circle,
    Rectangle,
}

impl<T> Shape<T>
where
    T: Real,
{
    #[inline]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Line(_) => ShapeKind::Line,
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Rectangle(_) => ShapeKind::Rectangle,
        }
    }

    /// Returns `true` if `self` and `other` overlap.
    ///
    /// Dispatches on the pair of kinds, each of the nine ordered pairs resolves to the concrete
    /// test so `a.intersects(&b) == b.intersects(&a)`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use collider2d::collider::*;
    /// # use collider2d::core::math::Vector2;
    /// let laser = Shape::Line(LinePieceCollider::new(Vector2::new(0.0, 5.0), Vector2::new(20.0, 5.0)));
    /// let ship = Shape::Rectangle(RectangleCollider::new(Vector2::new(8.0, 0.0), Vector2::new(4.0, 10.0)));
    /// assert!(laser.intersects(&ship));
    /// assert!(ship.intersects(&laser));
    /// ```
    pub fn intersects(&self, other: &Shape<T>) -> bool {
        use Shape::*;
        match (self, other) {
            (Line(a), Line(b)) => a.intersects_line(b),
            (Line(a), Circle(b)) => a.intersects_circle(b),
            (Line(a), Rectangle(b)) => a.intersects_rectangle(b),
            (Circle(a), Line(b)) => a.intersects_line(b),
            (Circle(a), Circle(b)) => a.intersects_circle(b),
            (Circle(a), Rectangle(b)) => a.intersects_rectangle(b),
            (Rectangle(a), Line(b)) => a.intersects_line(b),
            (Rectangle(a), Circle(b)) => a.intersects_circle(b),
            (Rectangle(a), Rectangle(b)) => a.intersects_rectangle(b),
        }
    }

    /// The wrapped collider as a trait object.
    #[inline]
    pub fn as_collider(&self) -> &dyn Collider<T> {
        match self {
            Shape::Line(line) => line,
            Shape::Circle(circle) => circle,
            Shape::Rectangle(rect) => rect,
        }
    }
}

impl<T> Collider<T> for Shape<T>
where
    T: Real,
{
    #[inline]
    fn bounding_box(&self) -> RectangleCollider<T> {
        self.as_collider().bounding_box()
    }

    #[inline]
    fn contains(&self, point: Vector2<T>) -> bool {
        self.as_collider().contains(point)
    }

    #[inline]
    fn intersects_line(&self, other: &LinePieceCollider<T>) -> bool {
        self.as_collider().intersects_line(other)
    }

    #[inline]
    fn intersects_circle(&self, other: &CircleCollider<T>) -> bool {
        self.as_collider().intersects_circle(other)
    }

    #[inline]
    fn intersects_rectangle(&self, other: &RectangleCollider<T>) -> bool {
        self.as_collider().intersects_rectangle(other)
    }

    #[inline]
    fn intersects_shape(&self, other: &Shape<T>) -> bool {
        self.intersects(other)
    }
}

impl<T> From<LinePieceCollider<T>> for Shape<T> {
    #[inline]
    fn from(line: LinePieceCollider<T>) -> Self {
        Shape::Line(line)
    }
}

impl<T> From<CircleCollider<T>> for Shape<T> {
    #[inline]
    fn from(circle: CircleCollider<T>) -> Self {
        Shape::Circle(circle)
    }
}

impl<T> From<RectangleCollider<T>> for Shape<T> {
    #[inline]
    fn from(rect: RectangleCollider<T>) -> Self {
        Shape::Rectangle(rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        let line: Shape = LinePieceCollider::new(Vector2::zero(), Vector2::new(1.0, 0.0)).into();
        let circle: Shape = CircleCollider::new(Vector2::zero(), 1.0).into();
        let rect: Shape = RectangleCollider::new(Vector2::zero(), Vector2::new(1.0, 1.0)).into();
        assert_eq!(line.kind(), ShapeKind::Line);
        assert_eq!(circle.kind(), ShapeKind::Circle);
        assert_eq!(rect.kind(), ShapeKind::Rectangle);
    }

    #[test]
    fn bounding_box_forwards_to_wrapped_collider() {
        let circle = CircleCollider::new(Vector2::new(3.0, 3.0), 1.0);
        assert_eq!(Shape::from(circle).bounding_box(), circle.bounding_box());
    }

    #[test]
    fn concrete_collider_tests_against_shape() {
        let circle = CircleCollider::new(Vector2::new(0.0, 0.0), 2.0);
        let near: Shape =
            RectangleCollider::new(Vector2::new(1.0, 1.0), Vector2::new(2.0, 2.0)).into();
        let far: Shape =
            RectangleCollider::new(Vector2::new(5.0, 5.0), Vector2::new(2.0, 2.0)).into();
        assert!(circle.intersects_shape(&near));
        assert!(!circle.intersects_shape(&far));
    }
}
