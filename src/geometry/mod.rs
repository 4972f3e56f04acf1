//! Plane geometry.

pub mod point;

pub use point::Point;
