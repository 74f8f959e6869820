/// Assert two values are fuzzy equal, optionally with an explicit epsilon.
///
/// Works for scalars and vectors (anything with `fuzzy_eq`/`fuzzy_eq_eps` methods).
///
/// # Examples
///
/// ```
/// # use collider2d::assert_fuzzy_eq;
/// # use collider2d::core::{math::Vector2, traits::FuzzyEq};
/// assert_fuzzy_eq!(0.1 + 0.2, 0.3);
/// assert_fuzzy_eq!(Vector2::new(1.0, 2.0), Vector2::new(1.0, 2.0 + 1e-4), 1e-3);
/// ```
#[doc(hidden)]
#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($left:expr, $right:expr) => {{
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !(left_val.fuzzy_eq(*right_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq(right)`
  left: `{:?}`,
 right: `{:?}`"#,
                        &*left_val, &*right_val
                    )
                }
            }
        }
    }};
    ($left:expr, $right:expr, $eps:expr) => {{
        match (&$left, &$right, &$eps) {
            (left_val, right_val, eps_val) => {
                if !(left_val.fuzzy_eq_eps(*right_val, *eps_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq_eps(right, eps)`
  left: `{:?}`,
 right: `{:?}`
 eps: `{:?}`"#,
                        &*left_val, &*right_val, &*eps_val
                    )
                }
            }
        }
    }};
}

/// Construct a [Shape](crate::collider::Shape) from a compact description.
///
/// # Examples
///
/// ```
/// # use collider2d::shape;
/// # use collider2d::collider::*;
/// let line = shape!(line (0.0, 0.0) -> (10.0, 0.0));
/// let circle = shape!(circle (5.0, 1.0), 2.0);
/// let rect = shape!(rect (4.0, -1.0), (2.0, 2.0));
/// assert!(line.intersects(&circle));
/// assert!(rect.intersects(&line));
/// ```
#[macro_export]
macro_rules! shape {
    (line ($x0:expr, $y0:expr) -> ($x1:expr, $y1:expr)) => {
        $crate::collider::Shape::Line($crate::collider::LinePieceCollider::new(
            $crate::core::math::Vector2::new($x0, $y0),
            $crate::core::math::Vector2::new($x1, $y1),
        ))
    };
    (circle ($x:expr, $y:expr), $r:expr) => {
        $crate::collider::Shape::Circle($crate::collider::CircleCollider::new(
            $crate::core::math::Vector2::new($x, $y),
            $r,
        ))
    };
    (rect ($x:expr, $y:expr), ($w:expr, $h:expr)) => {
        $crate::collider::Shape::Rectangle($crate::collider::RectangleCollider::new(
            $crate::core::math::Vector2::new($x, $y),
            $crate::core::math::Vector2::new($w, $h),
        ))
    };
}
