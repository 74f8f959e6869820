use super::{base_math::direction, Vector2};
use crate::core::traits::Real;

/// Coefficients of the standard form line equation `A * x + B * y + C = 0`.
///
/// Built from a point and a unit direction `d` with `A = -d.y`, `B = d.x` and
/// `C = -(A * p.x + B * p.y)`. `(A, B)` is the unit normal of the line so every point on the
/// infinite line satisfies the equation and `A * x + B * y + C` is the signed distance of any
/// other point from the line.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StandardForm<T = f64> {
    pub a: T,
    pub b: T,
    pub c: T,
}

impl<T> StandardForm<T>
where
    T: Real,
{
    /// Standard form of the infinite line through `p0` and `p1`.
    ///
    /// Coefficients are NaN if `p0 == p1`.
    #[inline]
    pub fn from_points(p0: Vector2<T>, p1: Vector2<T>) -> Self {
        Self::from_point_direction(p0, direction(p0, p1))
    }

    /// Standard form of the infinite line through `point` along unit `direction`.
    #[inline]
    pub fn from_point_direction(point: Vector2<T>, direction: Vector2<T>) -> Self {
        let a = -direction.y;
        let b = direction.x;
        let c = -(a * point.x + b * point.y);
        StandardForm { a, b, c }
    }

    /// Evaluate `A * x + B * y + C` at `point`, zero for points on the line.
    #[inline]
    pub fn eval(&self, point: Vector2<T>) -> T {
        self.a * point.x + self.b * point.y + self.c
    }
}

/// Holds the result of solving for the intersect of two infinite lines.
#[derive(Debug, Copy, Clone)]
pub enum LineLineIntr<T>
where
    T: Real,
{
    /// Lines are parallel or coincident (divisor of the solve is zero).
    Parallel,
    /// Lines cross at a single point.
    Intersect {
        /// The intersect point.
        point: Vector2<T>,
    },
}

impl<T> LineLineIntr<T>
where
    T: Real,
{
    /// The intersect point, `None` if the lines are parallel.
    #[inline]
    pub fn point(self) -> Option<Vector2<T>> {
        match self {
            LineLineIntr::Parallel => None,
            LineLineIntr::Intersect { point } => Some(point),
        }
    }
}

/// Finds the intersect of the two infinite lines `l1` and `l2` using Cramer's rule.
///
/// ```text
/// divisor = A1 * B2 - B1 * A2
/// x = (B1 * C2 - C1 * B2) / divisor
/// y = (C1 * A2 - A1 * C2) / divisor
/// ```
///
/// Lines are parallel only when the divisor is exactly zero, shallow crossings still return their
/// (possibly distant) intersect. A NaN divisor (from a zero length segment) is not zero so NaN
/// propagates into the returned point. See [line_line_intr_eps] for a tolerant parallel test.
///
/// # Examples
///
/// ```
/// # use collider2d::core::math::*;
/// let horizontal = StandardForm::from_points(Vector2::new(0.0, 0.0), Vector2::new(10.0, 0.0));
/// let vertical = StandardForm::from_points(Vector2::new(5.0, -5.0), Vector2::new(5.0, 5.0));
/// let point = line_line_intr(horizontal, vertical).point().unwrap();
/// assert!(point.fuzzy_eq(Vector2::new(5.0, 0.0)));
///
/// let offset = StandardForm::from_points(Vector2::new(0.0, 1.0), Vector2::new(10.0, 1.0));
/// assert!(line_line_intr(horizontal, offset).point().is_none());
/// ```
pub fn line_line_intr<T>(l1: StandardForm<T>, l2: StandardForm<T>) -> LineLineIntr<T>
where
    T: Real,
{
    let divisor = l1.a * l2.b - l1.b * l2.a;
    if divisor == T::zero() {
        return LineLineIntr::Parallel;
    }

    solve(l1, l2, divisor)
}

/// Same as [line_line_intr] but lines whose divisor is within `epsilon` of zero are considered
/// parallel rather than returning a very distant intersect.
pub fn line_line_intr_eps<T>(
    l1: StandardForm<T>,
    l2: StandardForm<T>,
    epsilon: T,
) -> LineLineIntr<T>
where
    T: Real,
{
    let divisor = l1.a * l2.b - l1.b * l2.a;
    if divisor.fuzzy_eq_zero_eps(epsilon) {
        return LineLineIntr::Parallel;
    }

    solve(l1, l2, divisor)
}

#[inline]
fn solve<T>(l1: StandardForm<T>, l2: StandardForm<T>, divisor: T) -> LineLineIntr<T>
where
    T: Real,
{
    let x = (l1.b * l2.c - l1.c * l2.b) / divisor;
    let y = (l1.c * l2.a - l1.a * l2.c) / divisor;
    LineLineIntr::Intersect {
        point: Vector2::new(x, y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::FuzzyEq;

    #[test]
    fn points_on_line_satisfy_equation() {
        let p0 = Vector2::new(1.0, 2.0);
        let p1 = Vector2::new(4.0, 8.0);
        let form = StandardForm::from_points(p0, p1);
        assert!(form.eval(p0).fuzzy_eq_zero());
        assert!(form.eval(p1).fuzzy_eq_zero());
        assert!(form.eval(Vector2::new(2.5, 5.0)).fuzzy_eq_zero());
        assert!(!form.eval(Vector2::new(0.0, 5.0)).fuzzy_eq_zero());
    }

    #[test]
    fn b_is_direction_x() {
        let form = StandardForm::from_points(Vector2::new(0.0, 0.0), Vector2::new(3.0, 4.0));
        assert!(form.b.fuzzy_eq(0.6));
        assert!(form.a.fuzzy_eq(-0.8));
    }

    #[test]
    fn solve_is_order_independent() {
        let l1 = StandardForm::from_points(Vector2::new(-3.0, 1.0), Vector2::new(7.0, 4.0));
        let l2 = StandardForm::from_points(Vector2::new(2.0, -6.0), Vector2::new(-1.0, 9.0));
        let p12 = line_line_intr(l1, l2).point().unwrap();
        let p21 = line_line_intr(l2, l1).point().unwrap();
        assert_eq!(p12, p21);
        assert!(l1.eval(p12).fuzzy_eq_zero());
        assert!(l2.eval(p12).fuzzy_eq_zero());
    }

    #[test]
    fn degenerate_line_propagates_nan() {
        let point = Vector2::new(2.0, 2.0);
        let degenerate = StandardForm::from_points(point, point);
        let other = StandardForm::from_points(Vector2::new(0.0, 0.0), Vector2::new(1.0, 0.0));
        match line_line_intr(degenerate, other) {
            LineLineIntr::Intersect { point } => assert!(point.is_nan()),
            LineLineIntr::Parallel => panic!("NaN divisor must not be treated as parallel"),
        }
    }

    #[test]
    fn shallow_crossing_depends_on_epsilon() {
        let l1 = StandardForm::from_points(Vector2::new(0.0f64, 0.0), Vector2::new(1000.0, 1e-3));
        let l2 = StandardForm::from_points(Vector2::new(0.0, 5e-4), Vector2::new(1000.0, 5e-4));
        let point = line_line_intr(l1, l2).point().unwrap();
        assert!(point.fuzzy_eq_eps(Vector2::new(500.0, 5e-4), 1e-6));
        assert!(line_line_intr_eps(l1, l2, 1e-5).point().is_none());
    }
}
