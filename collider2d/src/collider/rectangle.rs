use super::{CircleCollider, Collider, LinePieceCollider};
use crate::core::{math::Vector2, traits::Real};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use static_aabb2d_index::AABB;

/// Axis aligned rectangle defined by its top left `location` and its `size` (width, height).
///
/// Uses screen space orientation: y grows downward so `top` is the smaller y value.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct RectangleCollider<T = f64> {
    /// Top left corner.
    pub location: Vector2<T>,
    /// Width (`x`) and height (`y`), both expected to be non negative.
    pub size: Vector2<T>,
}

impl<T> RectangleCollider<T>
where
    T: Real,
{
    #[inline]
    pub fn new(location: Vector2<T>, size: Vector2<T>) -> Self {
        RectangleCollider { location, size }
    }

    /// Rectangle of `size` centered on `center`.
    #[inline]
    pub fn from_center(center: Vector2<T>, size: Vector2<T>) -> Self {
        RectangleCollider::new(center - size.scale(T::one() / T::two()), size)
    }

    /// Rectangle spanning from the `min` corner to the `max` corner.
    #[inline]
    pub fn from_corners(min: Vector2<T>, max: Vector2<T>) -> Self {
        RectangleCollider::new(min, max - min)
    }

    #[inline]
    pub fn left(&self) -> T {
        self.location.x
    }

    #[inline]
    pub fn right(&self) -> T {
        self.location.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> T {
        self.location.y
    }

    #[inline]
    pub fn bottom(&self) -> T {
        self.location.y + self.size.y
    }

    #[inline]
    pub fn width(&self) -> T {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> T {
        self.size.y
    }

    #[inline]
    pub fn center(&self) -> Vector2<T> {
        self.location + self.size.scale(T::one() / T::two())
    }

    /// Corners in the order top left, top right, bottom left, bottom right.
    #[inline]
    pub fn corners(&self) -> [Vector2<T>; 4] {
        let (left, right, top, bottom) = (self.left(), self.right(), self.top(), self.bottom());
        [
            Vector2::new(left, top),
            Vector2::new(right, top),
            Vector2::new(left, bottom),
            Vector2::new(right, bottom),
        ]
    }

    /// The four sides as segments in the order top, bottom, left, right.
    ///
    /// Sides of a zero width or zero height rectangle are zero length segments.
    pub fn sides(&self) -> [LinePieceCollider<T>; 4] {
        let [top_left, top_right, bottom_left, bottom_right] = self.corners();
        [
            LinePieceCollider::new(top_left, top_right),
            LinePieceCollider::new(bottom_left, bottom_right),
            LinePieceCollider::new(top_left, bottom_left),
            LinePieceCollider::new(top_right, bottom_right),
        ]
    }

    /// Closest point to `point` inside (or on the boundary of) the rectangle.
    #[inline]
    pub fn clamp_point(&self, point: Vector2<T>) -> Vector2<T> {
        Vector2::new(
            point.x.clamp_range(self.left(), self.right()),
            point.y.clamp_range(self.top(), self.bottom()),
        )
    }

    /// Bounds as an [AABB] for use with a spatial index.
    #[inline]
    pub fn to_aabb(&self) -> AABB<T> {
        AABB::new(self.left(), self.top(), self.right(), self.bottom())
    }

    #[inline]
    pub fn from_aabb(aabb: &AABB<T>) -> Self {
        RectangleCollider::from_corners(
            Vector2::new(aabb.min_x, aabb.min_y),
            Vector2::new(aabb.max_x, aabb.max_y),
        )
    }
}

impl<T> From<AABB<T>> for RectangleCollider<T>
where
    T: Real,
{
    #[inline]
    fn from(aabb: AABB<T>) -> Self {
        RectangleCollider::from_aabb(&aabb)
    }
}

impl<T> Collider<T> for RectangleCollider<T>
where
    T: Real,
{
    /// A rectangle is its own bounding box.
    fn bounding_box(&self) -> RectangleCollider<T> {
        *self
    }

    /// Inclusive on all four edges.
    fn contains(&self, point: Vector2<T>) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    fn intersects_line(&self, other: &LinePieceCollider<T>) -> bool {
        other.intersects_rectangle(self)
    }

    fn intersects_circle(&self, other: &CircleCollider<T>) -> bool {
        other.intersects_rectangle(self)
    }

    /// Overlap on both axes, rectangles sharing only an edge or a corner overlap.
    fn intersects_rectangle(&self, other: &RectangleCollider<T>) -> bool {
        self.left() <= other.right()
            && other.left() <= self.right()
            && self.top() <= other.bottom()
            && other.top() <= self.bottom()
    }
}
