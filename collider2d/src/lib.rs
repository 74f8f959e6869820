//! 2D narrow-phase collision detection between line segments, circles and axis aligned
//! rectangles.
//!
//! All types are generic over the scalar type (`f32` or `f64`, default `f64`) through the
//! [core::traits::Real] trait.
//!
//! # Examples
//!
//! ```
//! use collider2d::collider::*;
//! use collider2d::core::math::Vector2;
//!
//! let laser = LinePieceCollider::new(Vector2::new(0.0, 0.0), Vector2::new(10.0, 0.0));
//! let asteroid = CircleCollider::new(Vector2::new(5.0, 2.0), 3.0);
//! assert!(laser.intersects_circle(&asteroid));
//! assert!(asteroid.intersects_line(&laser));
//! ```
#![forbid(unsafe_code)]

#[macro_use]
mod macros;
pub mod collider;
pub mod core;

pub use static_aabb2d_index::AABB;
