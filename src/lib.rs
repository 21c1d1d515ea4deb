//! Geometry engine for a celestial-navigation universal plotting sheet
//!
//! Computes everything a sight-reduction plot needs short of actually
//! drawing it: parsing sexagesimal latitude/longitude/altitude strings,
//! projecting geographic positions onto the sheet plane, reducing each
//! observed body to an azimuth line and a line of position, and laying
//! out the sheet's static scaffold (circle, reference lines, minute
//! ticks). The output is plain drawable primitives; rendering is someone
//! else's job.

use thiserror::Error;

pub mod angle;
pub mod math;
pub mod plot;
pub mod sheet;

pub use angle::{Altitude, Axis, Hemisphere, SexAngle};
pub use math::{Azimuth, Degree};
pub use plot::body::{Body, InterceptDirection, Observation};
pub use plot::layout::{build_sheet, SheetLayout};
pub use plot::primitives::{Anchor, Label, LineStyle, PlanePoint, Primitive};
pub use sheet::SheetConfig;

/// Errors from parsing navigational inputs or building geometry
///
/// A malformed input must never be coerced into a plausible-looking but
/// wrong plot, so every error is raised at the point of parsing or
/// construction and propagated to the caller.
#[derive(Error, Debug)]
pub enum Error {
    #[error("unrecognized angle format {0:?}")]
    Format(String),
    #[error("invalid {axis} direction {letter:?}")]
    Direction { axis: Axis, letter: char },
    #[error("non-numeric degrees field")]
    Degrees(#[from] std::num::ParseIntError),
    #[error("non-numeric minutes field")]
    Minutes(#[from] std::num::ParseFloatError),
    #[error("azimuth {0}° outside [0, 360)")]
    AzimuthRange(f64),
    #[error("{axis} {value}° outside valid domain")]
    PositionRange { axis: Axis, value: f64 },
}
