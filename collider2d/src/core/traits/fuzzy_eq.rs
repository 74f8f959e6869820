/// Trait for fuzzy equality comparisons with floating point numbers.
///
/// Collision tests compare computed quantities (divisors of the line solve, distances, projected
/// lengths) that are rarely exactly equal after floating point arithmetic, this trait gives them a
/// tolerance.
///
/// # Examples
///
/// ```
/// # use collider2d::core::traits::*;
/// let a = 0.1 + 0.2;
/// let b = 0.3;
///
/// assert_ne!(a, b);
/// assert!(a.fuzzy_eq(b));
/// ```
pub trait FuzzyEq: Sized + Copy {
    /// Returns the default epsilon value for fuzzy comparisons.
    fn fuzzy_epsilon() -> Self;

    /// Returns `true` is this object is approximately equal to the other one, using
    /// a provided epsilon value.
    fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    /// Returns `true` is this object is approximately equal to the other one, using
    /// the implemented [FuzzyEq::fuzzy_epsilon] value.
    #[inline]
    fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, Self::fuzzy_epsilon())
    }

    /// Returns `true` if this value is approximately equal to zero, using
    /// a provided epsilon value.
    fn fuzzy_eq_zero_eps(&self, fuzzy_epsilon: Self) -> bool;

    /// Returns `true` if this value is approximately equal to zero, using
    /// the implemented [FuzzyEq::fuzzy_epsilon] value.
    #[inline]
    fn fuzzy_eq_zero(&self) -> bool {
        self.fuzzy_eq_zero_eps(Self::fuzzy_epsilon())
    }
}

macro_rules! impl_fuzzy_eq {
    ($ty:ty, $eps:expr) => {
        impl FuzzyEq for $ty {
            #[inline]
            fn fuzzy_epsilon() -> Self {
                $eps
            }
            #[inline]
            fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool {
                (*self - other).abs() < fuzzy_epsilon
            }
            #[inline]
            fn fuzzy_eq_zero_eps(&self, fuzzy_epsilon: Self) -> bool {
                self.abs() < fuzzy_epsilon
            }
        }
    };
}

// f32 only carries ~7 significant digits, 1e-8 would make every comparison exact
impl_fuzzy_eq!(f32, 1.0e-5);
impl_fuzzy_eq!(f64, 1.0e-8);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_is_never_fuzzy_equal() {
        assert!(!f64::NAN.fuzzy_eq(f64::NAN));
        assert!(!f64::NAN.fuzzy_eq_zero());
        assert!(!f32::NAN.fuzzy_eq(0.0));
    }

    #[test]
    fn f32_epsilon_absorbs_rounding() {
        let a = 0.1f32 + 0.2f32;
        assert!(a.fuzzy_eq(0.3));
    }
}
