use super::FuzzyEq;

/// Ordering with a tolerance, used where a closed range test must survive the rounding of a
/// computed intersect point.
pub trait FuzzyOrd: FuzzyEq {
    /// `self > other - fuzzy_epsilon`.
    fn fuzzy_gt_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    /// `self < other + fuzzy_epsilon`.
    fn fuzzy_lt_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    /// Closed range test `[min, max]` widened by `fuzzy_epsilon` on both ends.
    ///
    /// # Examples
    ///
    /// ```
    /// # use collider2d::core::traits::*;
    /// assert!(0.0f64.fuzzy_in_range_eps(0.0, 100.0, 1e-6));
    /// assert!(100.0f64.fuzzy_in_range_eps(0.0, 100.0, 1e-6));
    /// assert!((-1e-9f64).fuzzy_in_range_eps(0.0, 100.0, 1e-6));
    /// assert!(!(-0.5f64).fuzzy_in_range_eps(0.0, 100.0, 1e-6));
    ///```
    #[inline]
    fn fuzzy_in_range_eps(&self, min: Self, max: Self, fuzzy_epsilon: Self) -> bool {
        self.fuzzy_gt_eps(min, fuzzy_epsilon) && self.fuzzy_lt_eps(max, fuzzy_epsilon)
    }
}

macro_rules! impl_fuzzy_ord {
    ($ty:ty) => {
        impl FuzzyOrd for $ty {
            #[inline]
            fn fuzzy_gt_eps(&self, other: $ty, fuzzy_epsilon: $ty) -> bool {
                self + fuzzy_epsilon > other
            }
            #[inline]
            fn fuzzy_lt_eps(&self, other: $ty, fuzzy_epsilon: $ty) -> bool {
                *self < other + fuzzy_epsilon
            }
        }
    };
}

impl_fuzzy_ord!(f32);
impl_fuzzy_ord!(f64);
