use crate::core::traits::Real;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::ops;

/// 2D vector (or point) with `x` and `y` components.
///
/// Values are treated as immutable, every operation returns a new vector.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vector2<T = f64> {
    pub x: T,
    pub y: T,
}

impl<T> Vector2<T>
where
    T: Real,
{
    /// Create a new vector with x and y components.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Vector2 { x, y }
    }

    /// Create a zero vector (x = 0, y = 0).
    #[inline]
    pub fn zero() -> Self {
        Vector2::new(T::zero(), T::zero())
    }

    /// Uniformly scale the vector by `scale_factor`.
    #[inline]
    pub fn scale(&self, scale_factor: T) -> Self {
        vec2(scale_factor * self.x, scale_factor * self.y)
    }

    /// Dot product.
    #[inline]
    pub fn dot(&self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Squared length of the vector.
    #[inline]
    pub fn length_squared(&self) -> T {
        self.dot(*self)
    }

    /// Length of the vector.
    #[inline]
    pub fn length(&self) -> T {
        self.dot(*self).sqrt()
    }

    /// Distance between this point and `other`.
    #[inline]
    pub fn distance(&self, other: Self) -> T {
        (other - self).length()
    }

    /// Normalize the vector (length = 1).
    ///
    /// The zero vector has no direction, normalizing it yields NaN components.
    #[inline]
    pub fn normalize(&self) -> Self {
        self.scale(T::one() / self.length())
    }

    /// Componentwise minimum.
    #[inline]
    pub fn min(&self, other: Self) -> Self {
        vec2(
            num_traits::real::Real::min(self.x, other.x),
            num_traits::real::Real::min(self.y, other.y),
        )
    }

    /// Componentwise maximum.
    #[inline]
    pub fn max(&self, other: Self) -> Self {
        vec2(
            num_traits::real::Real::max(self.x, other.x),
            num_traits::real::Real::max(self.y, other.y),
        )
    }

    /// Returns `true` if either component is NaN.
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }

    /// Fuzzy equal comparison with another vector using `fuzzy_epsilon` given.
    #[inline]
    pub fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: T) -> bool {
        self.x.fuzzy_eq_eps(other.x, fuzzy_epsilon) && self.y.fuzzy_eq_eps(other.y, fuzzy_epsilon)
    }

    /// Fuzzy equal comparison with another vector using T::fuzzy_epsilon().
    #[inline]
    pub fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }
}

#[inline(always)]
pub fn vec2<T>(x: T, y: T) -> Vector2<T>
where
    T: Real,
{
    Vector2::new(x, y)
}

macro_rules! ImplBinaryOp {
    ($op_trait:ident, $op_func:ident, $op:tt) => {
        impl<T: Real> ops::$op_trait<Vector2<T>> for Vector2<T> {
            type Output = Vector2<T>;
            fn $op_func(self, rhs: Vector2<T>) -> Self::Output {
                Vector2::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl<T: Real> ops::$op_trait<&Vector2<T>> for Vector2<T> {
            type Output = Vector2<T>;
            fn $op_func(self, rhs: &Vector2<T>) -> Self::Output {
                Vector2::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl<'a, 'b, T: Real> ops::$op_trait<&'b Vector2<T>> for &'a Vector2<T> {
            type Output = Vector2<T>;
            fn $op_func(self, rhs: &'b Vector2<T>) -> Self::Output {
                Vector2::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl<T: Real> ops::$op_trait<Vector2<T>> for &Vector2<T> {
            type Output = Vector2<T>;
            fn $op_func(self, rhs: Vector2<T>) -> Self::Output {
                Vector2::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }
    };
}

ImplBinaryOp!(Add, add, +);
ImplBinaryOp!(Sub, sub, -);

impl<T: Real> ops::Mul<T> for Vector2<T> {
    type Output = Vector2<T>;
    fn mul(self, rhs: T) -> Self::Output {
        self.scale(rhs)
    }
}

impl<T: Real> ops::Neg for Vector2<T> {
    type Output = Vector2<T>;
    fn neg(self) -> Self::Output {
        Vector2::new(-self.x, -self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::FuzzyEq;

    macro_rules! test_binary_op {
        ($v1:ident, $v2:ident, $op:tt, $expected:expr) => {
            assert!(($v1 $op $v2).fuzzy_eq($expected));
            assert!((&$v1 $op $v2).fuzzy_eq($expected));
            assert!(($v1 $op &$v2).fuzzy_eq($expected));
            assert!((&$v1 $op &$v2).fuzzy_eq($expected));
        };
    }

    #[test]
    fn ops() {
        let v1 = vec2(4.0, 5.0);
        let v2 = vec2(1.0, 2.0);
        test_binary_op!(v1, v2, +, vec2(5.0, 7.0));
        test_binary_op!(v1, v2, -, vec2(3.0, 3.0));
        assert!((v1 * 2.0).fuzzy_eq(vec2(8.0, 10.0)));
        assert!((-v2).fuzzy_eq(vec2(-1.0, -2.0)));
    }

    #[test]
    fn componentwise_min_max() {
        let a = vec2(1.0, 7.0);
        let b = vec2(3.0, -2.0);
        assert_eq!(a.min(b), vec2(1.0, -2.0));
        assert_eq!(a.max(b), vec2(3.0, 7.0));
    }

    #[test]
    fn normalize_zero_is_nan() {
        let n = Vector2::<f64>::zero().normalize();
        assert!(n.is_nan());
    }

    #[test]
    fn distance() {
        assert!(vec2(0.0, 0.0).distance(vec2(3.0, 4.0)).fuzzy_eq(5.0));
    }
}
