use super::{Collider, LinePieceCollider, RectangleCollider};
use crate::core::{math::Vector2, traits::Real};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Circle defined by a `center` and a non negative `radius`.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CircleCollider<T = f64> {
    pub center: Vector2<T>,
    pub radius: T,
}

impl<T> CircleCollider<T>
where
    T: Real,
{
    #[inline]
    pub fn new(center: Vector2<T>, radius: T) -> Self {
        CircleCollider { center, radius }
    }
}

impl<T> Collider<T> for CircleCollider<T>
where
    T: Real,
{
    /// Square of side `2 * radius` centered on `center`.
    fn bounding_box(&self) -> RectangleCollider<T> {
        let half = Vector2::new(self.radius, self.radius);
        RectangleCollider::new(self.center - half, half * T::two())
    }

    /// Closed disc test, points exactly `radius` away are contained.
    fn contains(&self, point: Vector2<T>) -> bool {
        point.distance(self.center) <= self.radius
    }

    fn intersects_line(&self, other: &LinePieceCollider<T>) -> bool {
        other.intersects_circle(self)
    }

    fn intersects_circle(&self, other: &CircleCollider<T>) -> bool {
        self.center.distance(other.center) <= self.radius + other.radius
    }

    fn intersects_rectangle(&self, other: &RectangleCollider<T>) -> bool {
        self.contains(other.clamp_point(self.center))
    }
}
