use super::Vector2;
use crate::core::traits::Real;

/// Unit direction vector pointing from `p0` to `p1`.
///
/// If `p0 == p1` there is no direction and the result has NaN components.
///
/// # Examples
///
/// ```
/// # use collider2d::core::math::*;
/// let d = direction(Vector2::new(1.0, 1.0), Vector2::new(1.0, 5.0));
/// assert_eq!(d, Vector2::new(0.0, 1.0));
/// assert!(direction(Vector2::new(2.0, 2.0), Vector2::new(2.0, 2.0)).is_nan());
/// ```
#[inline]
pub fn direction<T>(p0: Vector2<T>, p1: Vector2<T>) -> Vector2<T>
where
    T: Real,
{
    let d = p1 - p0;
    if log::log_enabled!(log::Level::Trace) && d.length_squared() == T::zero() {
        log::trace!("direction requested between coincident points {:?}", p0);
    }
    d.normalize()
}

/// Angle in radians of `direction` measured from the up vector, `atan2(y, x) + PI / 2`.
///
/// With y growing downward (screen space) an up pointing direction `(0, -1)` gives `0` and a
/// right pointing direction `(1, 0)` gives `PI / 2`, which is the rotation to apply to a sprite
/// drawn facing up.
///
/// # Examples
///
/// ```
/// # use collider2d::core::math::*;
/// # use collider2d::core::traits::*;
/// use std::f64::consts::{FRAC_PI_2, PI};
/// assert!(angle_from_up(Vector2::new(0.0, -1.0)).fuzzy_eq(0.0));
/// assert!(angle_from_up(Vector2::new(1.0, 0.0)).fuzzy_eq(FRAC_PI_2));
/// assert!(angle_from_up(Vector2::new(0.0, 1.0)).fuzzy_eq(PI));
/// ```
#[inline]
pub fn angle_from_up<T>(direction: Vector2<T>) -> T
where
    T: Real,
{
    T::atan2(direction.y, direction.x) + T::half_pi()
}

/// Scalar projection of `point` onto the line through `origin` with unit `direction`.
///
/// Because `direction` is unit length the result is a distance along the line from `origin`.
#[inline]
pub fn project_onto<T>(origin: Vector2<T>, direction: Vector2<T>, point: Vector2<T>) -> T
where
    T: Real,
{
    direction.dot(point - origin)
}

/// Returns the closest point to `point` on the bounded segment going from `start` along unit
/// `direction` for `length`.
///
/// The projection is clamped to `[0, length]` so the result never leaves the segment.
#[inline]
pub fn seg_nearest_point<T>(
    start: Vector2<T>,
    direction: Vector2<T>,
    length: T,
    point: Vector2<T>,
) -> Vector2<T>
where
    T: Real,
{
    let t = project_onto(start, direction, point).clamp_range(T::zero(), length);
    start + direction * t
}
