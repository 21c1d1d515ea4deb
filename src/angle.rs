//! Sexagesimal angle parsing
//!
//! Navigational inputs arrive as free-form degree/minute strings like
//! `"N 30 12'"`, `"W60d 46.5'"` or `"26d 28.2'"`. The accepted shapes and
//! their disambiguation order are fixed by long-standing plotting-sheet
//! convention, so detection is an explicit ordered table of named shape
//! matchers rather than ad-hoc sniffing. Each matcher can be exercised on
//! its own.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::Error;

/// Which geographic axis a position string belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Axis {
    #[display(fmt = "latitude")]
    Latitude,
    #[display(fmt = "longitude")]
    Longitude,
}

/// Hemisphere letter leading a latitude or longitude string
///
/// `S` and `W` flip the sign of the plotted offset from the sheet center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum Hemisphere {
    N,
    S,
    E,
    W,
}

impl Hemisphere {
    /// Resolve a direction letter against its axis (`N|S` for latitude,
    /// `E|W` for longitude)
    pub fn for_axis(letter: char, axis: Axis) -> Result<Self, Error> {
        match (axis, letter) {
            (Axis::Latitude, 'N') => Ok(Self::N),
            (Axis::Latitude, 'S') => Ok(Self::S),
            (Axis::Longitude, 'E') => Ok(Self::E),
            (Axis::Longitude, 'W') => Ok(Self::W),
            _ => Err(Error::Direction { axis, letter }),
        }
    }

    pub fn sign(&self) -> f64 {
        match self {
            Self::S | Self::W => -1.0,
            Self::N | Self::E => 1.0,
        }
    }
}

/// A parsed latitude or longitude, immutable once built
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SexAngle {
    pub hemisphere: Hemisphere,
    pub degrees: i32,
    pub minutes: f64,
}

impl SexAngle {
    pub fn total_minutes(&self) -> f64 {
        self.degrees as f64 * 60.0 + self.minutes
    }

    /// Reformat to the canonical `"<DIR><deg>d <min>'"` shape
    pub fn canonical(&self) -> String {
        format!("{}{}d {}'", self.hemisphere, self.degrees, self.minutes)
    }
}

/// Extracted whole degrees and decimal minutes
pub type DegMin = (i32, f64);

/// One recognized input shape: a predicate plus its extraction rule
pub struct Shape {
    pub name: &'static str,
    pub matches: fn(&str) -> bool,
    pub extract: fn(&str) -> Result<DegMin, Error>,
}

fn degree_marker_matches(s: &str) -> bool {
    s.contains('d')
}

/// `<deg>d<min>'` — degrees before the `d`, minutes after it but only
/// when a `'` mark is present
fn degree_marker_extract(s: &str) -> Result<DegMin, Error> {
    let (deg_part, min_part) = s.split_once('d').unwrap_or((s, ""));
    let deg = deg_part.trim().parse::<i32>()?;
    let min = if min_part.contains('\'') {
        min_part.trim().trim_end_matches('\'').parse::<f64>()?
    } else {
        0.0
    };
    Ok((deg, min))
}

fn two_tokens_matches(s: &str) -> bool {
    s.split_whitespace().count() == 2
}

/// `<deg> <min>'`
fn two_tokens_extract(s: &str) -> Result<DegMin, Error> {
    let mut tokens = s.split_whitespace();
    let deg = tokens.next().unwrap_or("").parse::<i32>()?;
    let min = tokens
        .next()
        .unwrap_or("")
        .trim_end_matches('\'')
        .parse::<f64>()?;
    Ok((deg, min))
}

fn bare_minutes_matches(s: &str) -> bool {
    s.contains('\'')
}

/// `<min>'` — degrees omitted
fn bare_minutes_extract(s: &str) -> Result<DegMin, Error> {
    Ok((0, s.trim().trim_end_matches('\'').parse::<f64>()?))
}

fn bare_degrees_matches(_s: &str) -> bool {
    true
}

/// `<deg>` or `<deg>d` — minutes omitted
fn bare_degrees_extract(s: &str) -> Result<DegMin, Error> {
    Ok((s.trim().trim_end_matches('d').parse::<i32>()?, 0.0))
}

/// Recognized shapes in fixed priority order. The order reproduces the
/// legacy disambiguation exactly and must not be rearranged.
pub const SHAPES: &[Shape] = &[
    Shape {
        name: "degree-marker",
        matches: degree_marker_matches,
        extract: degree_marker_extract,
    },
    Shape {
        name: "two-tokens",
        matches: two_tokens_matches,
        extract: two_tokens_extract,
    },
    Shape {
        name: "bare-minutes",
        matches: bare_minutes_matches,
        extract: bare_minutes_extract,
    },
    Shape {
        name: "bare-degrees",
        matches: bare_degrees_matches,
        extract: bare_degrees_extract,
    },
];

/// Parse a latitude or longitude string: a leading hemisphere letter
/// followed by one of the shapes in [SHAPES]
pub fn parse_position(text: &str, axis: Axis) -> Result<SexAngle, Error> {
    let trimmed = text.trim();
    let letter = trimmed
        .chars()
        .next()
        .ok_or_else(|| Error::Format(text.to_string()))?;
    let hemisphere = Hemisphere::for_axis(letter, axis)?;

    let rest = trimmed[letter.len_utf8()..].trim();
    if rest.is_empty() {
        return Err(Error::Format(text.to_string()));
    }

    let shape = SHAPES
        .iter()
        .find(|shape| (shape.matches)(rest))
        .ok_or_else(|| Error::Format(text.to_string()))?;
    let (degrees, minutes) = (shape.extract)(rest)?;

    // Hemisphere letter carries the sign, so the magnitude must stay
    // within the axis domain: 90° of latitude, 180° of longitude
    let limit = match axis {
        Axis::Latitude => 90.0,
        Axis::Longitude => 180.0,
    };
    let total_degrees = degrees as f64 + minutes / 60.0;
    if !(0.0..=limit).contains(&total_degrees) {
        return Err(Error::PositionRange {
            axis,
            value: total_degrees,
        });
    }

    Ok(SexAngle {
        hemisphere,
        degrees,
        minutes,
    })
}

/// Observed or computed altitude of a body above the horizon
///
/// Altitude strings carry no direction letter: `"26d 28.2'"` or the
/// space-separated `"26 28.2'"` form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Altitude {
    pub degrees: i32,
    pub minutes: f64,
}

impl Altitude {
    pub fn parse(text: &str) -> Result<Self, Error> {
        let cleaned = text.trim().trim_end_matches('\'').replace('d', " ");
        let mut tokens = cleaned.split_whitespace();
        match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(deg), Some(min), None) => Ok(Self {
                degrees: deg.parse()?,
                minutes: min.parse()?,
            }),
            _ => Err(Error::Format(text.to_string())),
        }
    }

    pub fn total_minutes(&self) -> f64 {
        self.degrees as f64 * 60.0 + self.minutes
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_shape_priority() {
        // A 'd' wins over whitespace splitting
        let hits: Vec<&str> = SHAPES
            .iter()
            .filter(|s| (s.matches)("60d 46.5'"))
            .map(|s| s.name)
            .collect();
        assert_eq!(hits[0], "degree-marker");
    }

    #[test]
    fn test_degree_marker_shape() {
        assert_eq!(degree_marker_extract("60d 46.5'").unwrap(), (60, 46.5));
        // No minute mark means the tail is ignored
        assert_eq!(degree_marker_extract("60d").unwrap(), (60, 0.0));
    }

    #[test]
    fn test_two_tokens_shape() {
        assert!(two_tokens_matches("30 12'"));
        assert!(!two_tokens_matches("30"));
        assert_eq!(two_tokens_extract("30 12'").unwrap(), (30, 12.0));
    }

    #[test]
    fn test_bare_shapes() {
        assert_eq!(bare_minutes_extract("46.5'").unwrap(), (0, 46.5));
        assert_eq!(bare_degrees_extract("31").unwrap(), (31, 0.0));
        assert_eq!(bare_degrees_extract("31d").unwrap(), (31, 0.0));
    }

    #[test]
    fn test_parse_position_formats() {
        for text in ["N30d 12'", "N 30 12'", "N30d12'"] {
            let a = parse_position(text, Axis::Latitude).unwrap();
            assert_eq!(a.hemisphere, Hemisphere::N);
            assert_relative_eq!(a.total_minutes(), 1812.0);
        }
        let bare_min = parse_position("W 46.5'", Axis::Longitude).unwrap();
        assert_eq!(bare_min.degrees, 0);
        assert_relative_eq!(bare_min.minutes, 46.5);
        let bare_deg = parse_position("E120", Axis::Longitude).unwrap();
        assert_eq!(bare_deg.degrees, 120);
        assert_relative_eq!(bare_deg.minutes, 0.0);
    }

    #[test]
    fn test_parse_position_errors() {
        assert!(matches!(
            parse_position("E 30 12'", Axis::Latitude),
            Err(Error::Direction { .. })
        ));
        assert!(matches!(
            parse_position("N 3x 12'", Axis::Latitude),
            Err(Error::Degrees(_))
        ));
        assert!(matches!(
            parse_position("N", Axis::Latitude),
            Err(Error::Format(_))
        ));
    }

    #[test]
    fn test_position_domain() {
        // Out-of-domain positions must never project into a
        // plausible-looking plot
        assert!(matches!(
            parse_position("N 95 12'", Axis::Latitude),
            Err(Error::PositionRange { .. })
        ));
        assert!(matches!(
            parse_position("W 200 0'", Axis::Longitude),
            Err(Error::PositionRange { .. })
        ));
        // Minutes push the magnitude past the pole
        assert!(matches!(
            parse_position("S 90 0.1'", Axis::Latitude),
            Err(Error::PositionRange { .. })
        ));
        assert!(matches!(
            parse_position("N -5 10'", Axis::Latitude),
            Err(Error::PositionRange { .. })
        ));
        assert!(parse_position("S 90 0'", Axis::Latitude).is_ok());
        assert!(parse_position("W180", Axis::Longitude).is_ok());
    }

    #[test]
    fn test_canonical_round_trip() {
        for text in ["N30d 12'", "N 30 12'", "N 12'", "N30"] {
            let first = parse_position(text, Axis::Latitude).unwrap();
            let second = parse_position(&first.canonical(), Axis::Latitude).unwrap();
            assert_relative_eq!(
                first.total_minutes(),
                second.total_minutes(),
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn test_altitude_parse() {
        let ho = Altitude::parse("26d 28.2'").unwrap();
        assert_relative_eq!(ho.total_minutes(), 1588.2);
        let spaced = Altitude::parse("25 52.4'").unwrap();
        assert_relative_eq!(spaced.total_minutes(), 1552.4);
        assert!(Altitude::parse("26.5'").is_err());
        assert!(Altitude::parse("26d 28.2 4'").is_err());
        assert!(matches!(Altitude::parse("ad 28.2'"), Err(Error::Degrees(_))));
    }
}
