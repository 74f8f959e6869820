//! Core module has common/shared math and scalar traits used by every collider.
pub mod math;
pub mod traits;
