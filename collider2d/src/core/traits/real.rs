use super::FuzzyOrd;
use static_aabb2d_index::IndexableNum;

/// Trait representing a real number (e.g. 1.1, -3.5, etc.) that can be fuzzy compared and ordered.
///
/// Every collider is generic over this trait so the same geometry runs in `f32` (typical for game
/// loops) or `f64`.
pub trait Real:
    num_traits::real::Real
    + num_traits::Bounded
    + FuzzyOrd
    + std::default::Default
    + std::fmt::Debug
    + IndexableNum
    + Send
    + Sync
    + 'static
{
    /// `PI / 2`, the offset between the x axis and the up vector.
    fn half_pi() -> Self;

    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// Returns `true` if the value is NaN.
    fn is_nan(self) -> bool;

    /// Clamp `self` to the inclusive range `[min, max]`.
    ///
    /// NaN is passed through unchanged so degenerate geometry keeps propagating NaN.
    #[inline]
    fn clamp_range(self, min: Self, max: Self) -> Self {
        if self < min {
            min
        } else if self > max {
            max
        } else {
            self
        }
    }
}

impl Real for f32 {
    #[inline]
    fn is_nan(self) -> bool {
        f32::is_nan(self)
    }

    #[inline]
    fn half_pi() -> Self {
        std::f32::consts::FRAC_PI_2
    }
}

impl Real for f64 {
    #[inline]
    fn is_nan(self) -> bool {
        f64::is_nan(self)
    }

    #[inline]
    fn half_pi() -> Self {
        std::f64::consts::FRAC_PI_2
    }
}
