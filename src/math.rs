//! Mathy related things
//!
//! The base [Degree] type plus the bearing-to-math-angle conversion used
//! by all of the plot trigonometry.

use derive_more::Deref;
use glam::DVec2;

use crate::Error;

/// The base angle type used in the crate
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Degree(f64);
impl Default for Degree {
    fn default() -> Self {
        Self(0.0)
    }
}
impl Degree {
    pub fn new(deg: f64) -> Self {
        Self(deg)
    }
    pub fn degrees(&self) -> f64 {
        self.0
    }
    pub fn radians(&self) -> f64 {
        self.0.to_radians()
    }
}

/// True azimuth of an observed body
///
/// units: degrees clockwise from north, `[0, 360)`
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Deref)]
pub struct Azimuth(Degree);
impl Azimuth {
    pub fn new(deg: f64) -> Result<Self, Error> {
        if !(0.0..360.0).contains(&deg) {
            return Err(Error::AzimuthRange(deg));
        }
        Ok(Self(Degree::new(deg)))
    }
}

/// Convert a true bearing (clockwise from north) into a standard math
/// angle (counter-clockwise from the +x axis): `(450 - azimuth) mod 360`.
///
/// Due north (0°) maps to 90°, due east (90°) maps to 0°.
pub fn azimuth_to_math(azimuth: Azimuth) -> Degree {
    Degree::new((450.0 - azimuth.degrees()).rem_euclid(360.0))
}

/// Unit direction vector `(cos θ, sin θ)` for a math angle
pub fn unit_vector(angle: Degree) -> DVec2 {
    let rad = angle.radians();
    DVec2::new(rad.cos(), rad.sin())
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_azimuth_to_math() {
        let north = Azimuth::new(0.0).unwrap();
        let east = Azimuth::new(90.0).unwrap();
        assert_relative_eq!(azimuth_to_math(north).degrees(), 90.0);
        assert_relative_eq!(azimuth_to_math(east).degrees(), 0.0);
        assert_relative_eq!(
            azimuth_to_math(Azimuth::new(141.9).unwrap()).degrees(),
            308.1
        );
    }

    #[test]
    fn test_azimuth_range() {
        assert!(Azimuth::new(359.9).is_ok());
        assert!(Azimuth::new(360.0).is_err());
        assert!(Azimuth::new(-0.1).is_err());
    }

    #[test]
    fn test_unit_vector() {
        let v = unit_vector(Degree::new(90.0));
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(v.y, 1.0, epsilon = 1e-12);
    }
}
