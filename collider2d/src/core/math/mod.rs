//! Core/common math functions for working with directions, angles, projections and line equations.
mod base_math;
mod line_line_intersect;
mod vector2;

pub use base_math::*;
pub use line_line_intersect::{line_line_intr, line_line_intr_eps, LineLineIntr, StandardForm};
pub use vector2::{vec2, Vector2};
