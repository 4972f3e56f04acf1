//! Sample arithmetic and plane geometry, plus the report that exercises both.

pub mod arith;
pub mod config;
pub mod error;
pub mod geometry;
pub mod io;
pub mod logging;
pub mod report;

pub use arith::add;
pub use config::Settings;
pub use error::{Axis, GeometryError, GeometryResult, PlanarError, PlanarResult};
pub use geometry::Point;
pub use report::{DistanceStyle, SampleInputs, SampleReport};
