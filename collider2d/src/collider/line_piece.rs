use super::{CircleCollider, Collider, RectangleCollider};
use crate::core::{
    math::{
        angle_from_up, direction, line_line_intr, line_line_intr_eps, seg_nearest_point,
        LineLineIntr, StandardForm, Vector2,
    },
    traits::{FuzzyOrd, Real},
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A bounded line segment going from `start` to `end`.
///
/// Everything that depends on the direction of the segment (length changes, the standard form
/// coefficients, containment and intersection) assumes `start != end`. A zero length segment has
/// no direction, its direction and standard form are NaN and the NaN propagates into intersect
/// points. Containment and intersection tests involving it return `false`, except that a
/// rectangle still reports an intersection when the degenerate point lies inside it.
///
/// Equality is order sensitive, the segment `a -> b` is not equal to `b -> a`.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct LinePieceCollider<T = f64> {
    /// Start point of the segment.
    pub start: Vector2<T>,
    /// End point of the segment.
    pub end: Vector2<T>,
}

impl<T> LinePieceCollider<T>
where
    T: Real,
{
    #[inline]
    pub fn new(start: Vector2<T>, end: Vector2<T>) -> Self {
        LinePieceCollider { start, end }
    }

    /// Construct a segment starting at `start` and extending `length` along `direction`.
    ///
    /// `direction` is expected to be unit length, it is not normalized.
    #[inline]
    pub fn from_direction(start: Vector2<T>, direction: Vector2<T>, length: T) -> Self {
        LinePieceCollider::new(start, start + direction * length)
    }

    /// Unit vector pointing from `start` to `end`.
    #[inline]
    pub fn direction(&self) -> Vector2<T> {
        direction(self.start, self.end)
    }

    /// Angle of the segment direction measured from the up vector, see [angle_from_up].
    #[inline]
    pub fn angle(&self) -> T {
        angle_from_up(self.direction())
    }

    /// Distance from `start` to `end`.
    #[inline]
    pub fn length(&self) -> T {
        (self.end - self.start).length()
    }

    /// Change the length of the segment by moving `end`, `start` and the direction are kept.
    #[inline]
    pub fn set_length(&mut self, length: T) {
        self.end = self.start + self.direction() * length;
    }

    /// Same as [LinePieceCollider::set_length] but returns the resized segment.
    #[inline]
    pub fn with_length(mut self, length: T) -> Self {
        self.set_length(length);
        self
    }

    /// Standard form `A * x + B * y + C = 0` of the infinite line through the segment.
    #[inline]
    pub fn standard_form(&self) -> StandardForm<T> {
        StandardForm::from_point_direction(self.start, self.direction())
    }

    /// `A` coefficient of the standard form line equation (`-direction.y`).
    #[inline]
    pub fn standard_a(&self) -> T {
        self.standard_form().a
    }

    /// `B` coefficient of the standard form line equation (`direction.x`).
    #[inline]
    pub fn standard_b(&self) -> T {
        self.standard_form().b
    }

    /// `C` coefficient of the standard form line equation.
    #[inline]
    pub fn standard_c(&self) -> T {
        self.standard_form().c
    }

    /// Intersect point of the infinite lines through `self` and `other`, `None` if they are
    /// parallel within `epsilon`.
    #[inline]
    pub fn try_intersection_eps(&self, other: &Self, epsilon: T) -> Option<Vector2<T>> {
        line_line_intr_eps(self.standard_form(), other.standard_form(), epsilon).point()
    }

    /// Intersect point of the infinite lines through `self` and `other`, `None` only if they are
    /// exactly parallel.
    #[inline]
    pub fn try_intersection(&self, other: &Self) -> Option<Vector2<T>> {
        line_line_intr(self.standard_form(), other.standard_form()).point()
    }

    /// Intersect point of the infinite lines through `self` and `other`.
    ///
    /// Parallel (or coincident) lines return the zero vector. The zero vector is also a valid
    /// intersect when both lines pass through the origin, use
    /// [LinePieceCollider::try_intersection] to tell the two apart.
    #[inline]
    pub fn intersection(&self, other: &Self) -> Vector2<T> {
        self.try_intersection(other).unwrap_or_else(Vector2::zero)
    }

    /// Closed counterpart of [Collider::contains], the projection of `point` may fall on either
    /// endpoint (within `epsilon` relative to the length).
    #[inline]
    pub fn contains_inclusive_eps(&self, point: Vector2<T>, epsilon: T) -> bool {
        let v = self.end - self.start;
        let length_squared = v.length_squared();
        v.dot(point - self.start)
            .fuzzy_in_range_eps(T::zero(), length_squared, epsilon * length_squared)
    }

    /// Same as [LinePieceCollider::contains_inclusive_eps] using the default fuzzy epsilon.
    #[inline]
    pub fn contains_inclusive(&self, point: Vector2<T>) -> bool {
        self.contains_inclusive_eps(point, T::fuzzy_epsilon())
    }

    /// Closest point to `point` on the bounded segment.
    #[inline]
    pub fn nearest_point(&self, point: Vector2<T>) -> Vector2<T> {
        seg_nearest_point(self.start, self.direction(), self.length(), point)
    }
}

impl<T> Collider<T> for LinePieceCollider<T>
where
    T: Real,
{
    /// Axis aligned box spanning both endpoints.
    fn bounding_box(&self) -> RectangleCollider<T> {
        RectangleCollider::from_corners(self.start.min(self.end), self.start.max(self.end))
    }

    /// Tests whether the projection of `point` onto the segment falls strictly between `start`
    /// and `end`, i.e. `0 < t < length` for `t = dot(point - start, direction)`.
    ///
    /// The interval is open so the endpoints themselves are not contained. Only the projection is
    /// tested, the distance of `point` from the line is not.
    fn contains(&self, point: Vector2<T>) -> bool {
        // scaled by length to compare against length squared, keeps `end` itself exactly on the
        // boundary instead of depending on the rounding of the normalized direction
        let v = self.end - self.start;
        let t_scaled = v.dot(point - self.start);
        t_scaled > T::zero() && t_scaled < v.length_squared()
    }

    /// The infinite line intersect must lie strictly inside both segments, so segments touching
    /// only at an endpoint do not intersect and parallel segments never do.
    fn intersects_line(&self, other: &LinePieceCollider<T>) -> bool {
        match self.try_intersection(other) {
            Some(point) => self.contains(point) && other.contains(point),
            None => false,
        }
    }

    fn intersects_circle(&self, other: &CircleCollider<T>) -> bool {
        other.contains(self.nearest_point(other.center))
    }

    /// Either endpoint inside the rectangle or the segment crossing one of its sides.
    ///
    /// Sides are closed like rectangle containment, a segment passing exactly through a corner or
    /// running along an edge intersects.
    fn intersects_rectangle(&self, other: &RectangleCollider<T>) -> bool {
        if other.contains(self.start) || other.contains(self.end) {
            return true;
        }

        let form = self.standard_form();
        other.sides().iter().any(|side| {
            match line_line_intr(form, side.standard_form()) {
                LineLineIntr::Intersect { point } => {
                    self.contains(point) && side.contains_inclusive(point)
                }
                LineLineIntr::Parallel => {
                    log::trace!("skipping side {:?} parallel to {:?}", side, self);
                    false
                }
            }
        })
    }
}
