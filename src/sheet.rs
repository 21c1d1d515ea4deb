//! Sheet configuration and coordinate projection
//!
//! A plotting sheet is centered on an assumed position; everything else
//! is plotted as an offset from it. One plot unit equals one degree of
//! latitude, and longitude is compressed by `cos(center latitude)` so a
//! 1°x1° cell looks near-square at the chart's center latitude (the
//! small-area Mercator-like approximation).

use serde::{Deserialize, Serialize};

use crate::angle::{parse_position, Axis, Hemisphere};
use crate::plot::primitives::PlanePoint;
use crate::Error;

/// Shared, read-only description of one plotting sheet
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SheetConfig {
    pub lat_hemisphere: Hemisphere,
    pub lon_hemisphere: Hemisphere,
    pub lat_degree: i32,
    pub lon_degree: i32,
    /// Plot units per degree of latitude, the sheet's scale unit
    pub lat_spacing: f64,
    /// Plot units per degree of longitude, always <= `lat_spacing`
    pub lon_spacing: f64,
}

impl SheetConfig {
    /// Build a sheet centered on whole-degree coordinates given as
    /// hemisphere letter plus degrees, e.g. `"N30"` and `"W60"`
    pub fn new(center_lat: &str, center_lon: &str) -> Result<Self, Error> {
        let lat = parse_position(center_lat, Axis::Latitude)?;
        let lon = parse_position(center_lon, Axis::Longitude)?;
        if lat.minutes != 0.0 || lon.minutes != 0.0 {
            return Err(Error::Format(format!("{center_lat} {center_lon}")));
        }

        let lat_spacing = 1.0;
        let lon_spacing = lat_spacing * (lat.degrees as f64).to_radians().cos();
        Ok(Self {
            lat_hemisphere: lat.hemisphere,
            lon_hemisphere: lon.hemisphere,
            lat_degree: lat.degrees,
            lon_degree: lon.degrees,
            lat_spacing,
            lon_spacing,
        })
    }

    /// The sheet's assumed latitude band, e.g. `"N30"`. Every celestial
    /// body is plotted on this band.
    pub fn apparent_latitude(&self) -> String {
        format!("{}{}", self.lat_hemisphere, self.lat_degree)
    }

    /// Vertical plot coordinate of a latitude string, in plot units from
    /// the center parallel
    pub fn project_latitude(&self, text: &str) -> Result<f64, Error> {
        let angle = parse_position(text, Axis::Latitude)?;
        let total_minutes = (angle.degrees - self.lat_degree) as f64 * 60.0 + angle.minutes;
        Ok(total_minutes / 60.0 * angle.hemisphere.sign())
    }

    /// Horizontal plot coordinate of a longitude string, compressed by
    /// the sheet's longitude spacing
    pub fn project_longitude(&self, text: &str) -> Result<f64, Error> {
        let angle = parse_position(text, Axis::Longitude)?;
        let total_minutes = (angle.degrees - self.lon_degree) as f64 * 60.0 + angle.minutes;
        Ok(total_minutes / 60.0 * self.lon_spacing * angle.hemisphere.sign())
    }

    /// Plane position of a geographic position given as a string pair
    pub fn project(&self, lat_text: &str, lon_text: &str) -> Result<PlanePoint, Error> {
        Ok(PlanePoint::new(
            self.project_longitude(lon_text)?,
            self.project_latitude(lat_text)?,
        ))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_hemisphere_sign() {
        let north = SheetConfig::new("N30", "W60").unwrap();
        assert_relative_eq!(north.project_latitude("N 31 0'").unwrap(), 1.0);

        let south = SheetConfig::new("S30", "W60").unwrap();
        assert_relative_eq!(south.project_latitude("S 31 0'").unwrap(), -1.0);
    }

    #[test]
    fn test_longitude_compression() {
        let config = SheetConfig::new("N60", "W60").unwrap();
        assert_relative_eq!(config.lon_spacing, 0.5, epsilon = 1e-12);
        assert_relative_eq!(
            config.project_longitude("W 61 0'").unwrap(),
            -0.5,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            config.project_longitude("E 59 0'").unwrap(),
            0.5,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_spacing_invariant() {
        for lat in ["N0", "N30", "N60", "S89"] {
            let config = SheetConfig::new(lat, "E10").unwrap();
            assert!(config.lon_spacing <= config.lat_spacing);
        }
    }

    #[test]
    fn test_project_pair() {
        let config = SheetConfig::new("N30", "W60").unwrap();
        let dr = config.project("N 30 12'", "W 60 10'").unwrap();
        assert_relative_eq!(dr.y, 0.2, epsilon = 1e-12);
        assert_relative_eq!(
            dr.x,
            -10.0 / 60.0 * 30f64.to_radians().cos(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_center_validation() {
        assert!(matches!(
            SheetConfig::new("N91", "W60"),
            Err(Error::PositionRange { .. })
        ));
        assert!(matches!(
            SheetConfig::new("N30", "W181"),
            Err(Error::PositionRange { .. })
        ));
        assert!(SheetConfig::new("N30 12'", "W60").is_err());
    }

    #[test]
    fn test_out_of_domain_position() {
        let config = SheetConfig::new("N30", "W60").unwrap();
        assert!(matches!(
            config.project_latitude("N 95 12'"),
            Err(Error::PositionRange { .. })
        ));
        assert!(matches!(
            config.project_longitude("W 200 0'"),
            Err(Error::PositionRange { .. })
        ));
    }
}
