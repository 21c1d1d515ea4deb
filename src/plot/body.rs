//! Sight reduction of one celestial observation
//!
//! Reducing an observation yields three things: the body's plotted
//! ground position, its azimuth line, and the line of position offset
//! along the azimuth by the Ho/Hc intercept. The toward/away rule is the
//! standard one: Ho more, toward; Ho less, away.

use derive_more::Display;
use glam::DVec2;

use crate::angle::Altitude;
use crate::math::{azimuth_to_math, unit_vector, Azimuth, Degree};
use crate::plot::primitives::{Anchor, Color, Label, LineStyle, PlanePoint, Primitive};
use crate::sheet::SheetConfig;
use crate::Error;

/// Half-length of the drawn azimuth line, in plot units. Visual constant
/// tied to the sheet scale, not derived from anything.
pub const AZIMUTH_HALF_LEN: f64 = 1.0;
/// Half-length of the drawn line of position, in plot units
pub const LOP_HALF_LEN: f64 = 1.8;

const LOP_COLOR: &str = "green";
const NAME_OFFSET: f64 = 0.08;

/// Raw fields of one observation, exactly as recorded in the sight log.
/// Date and time are free text and never interpreted.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub name: String,
    pub date: String,
    pub time: String,
    /// Ground-position longitude string, e.g. `"W 60 46.5'"`
    pub longitude: String,
    /// True azimuth to the body, degrees clockwise from north
    pub azimuth: f64,
    /// Observed altitude string, e.g. `"26d 28.2'"`
    pub ho: String,
    /// Computed altitude string
    pub hc: String,
    pub color: Color,
}

/// Which way the line of position is offset from the ground position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum InterceptDirection {
    #[display(fmt = "T")]
    Toward,
    #[display(fmt = "A")]
    Away,
}

/// A fully reduced observation: all geometry computed eagerly at
/// construction, immutable afterwards
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub name: String,
    pub date: String,
    pub time: String,
    pub color: Color,
    /// Plotted ground position on the sheet's assumed latitude band
    pub position: PlanePoint,
    pub azimuth: Azimuth,
    /// Math angle (counter-clockwise from +x) of the azimuth direction
    pub azimuth_math: Degree,
    pub azimuth_line: (PlanePoint, PlanePoint),
    /// |Ho - Hc| in minutes of arc
    pub intercept_minutes: f64,
    pub intercept_direction: InterceptDirection,
    /// Line of position, perpendicular to the azimuth line
    pub lop: (PlanePoint, PlanePoint),
}

impl Body {
    /// Reduce an observation against a sheet. The body's latitude is the
    /// sheet's apparent latitude band, per plotting-sheet convention; only
    /// its longitude comes from the observation.
    pub fn reduce(obs: &Observation, config: &SheetConfig) -> Result<Self, Error> {
        let azimuth = Azimuth::new(obs.azimuth)?;
        let position = config.project(&config.apparent_latitude(), &obs.longitude)?;

        let azimuth_math = azimuth_to_math(azimuth);
        let dir = unit_vector(azimuth_math);
        let azimuth_line = (
            position - AZIMUTH_HALF_LEN * dir,
            position + AZIMUTH_HALF_LEN * dir,
        );

        let ho = Altitude::parse(&obs.ho)?.total_minutes();
        let hc = Altitude::parse(&obs.hc)?.total_minutes();
        let (intercept_minutes, intercept_direction) = if ho > hc {
            (ho - hc, InterceptDirection::Toward)
        } else {
            (hc - ho, InterceptDirection::Away)
        };

        let offset = intercept_minutes / 60.0 * dir;
        let base = match intercept_direction {
            InterceptDirection::Toward => position + offset,
            InterceptDirection::Away => position - offset,
        };

        // LOP is perpendicular to the azimuth direction
        let perp = DVec2::new(dir.y, -dir.x);
        let lop = (base + LOP_HALF_LEN * perp, base - LOP_HALF_LEN * perp);

        log::debug!(
            "reduced {}: intercept {:.1}' {}, azimuth {:.1}°",
            obs.name,
            intercept_minutes,
            intercept_direction,
            obs.azimuth
        );

        Ok(Self {
            name: obs.name.clone(),
            date: obs.date.clone(),
            time: obs.time.clone(),
            color: obs.color.clone(),
            position,
            azimuth,
            azimuth_math,
            azimuth_line,
            intercept_minutes,
            intercept_direction,
            lop,
        })
    }

    /// Emit the drawable primitives for this body. Separate from
    /// [Body::reduce] so geometry can be tested without a renderer.
    pub fn primitives(&self) -> Vec<Primitive> {
        vec![
            Primitive::Point {
                at: self.position,
                color: self.color.clone(),
            },
            Primitive::Segment {
                a: self.azimuth_line.0,
                b: self.azimuth_line.1,
                color: self.color.clone(),
                style: LineStyle::Solid,
            },
            Primitive::Arrow {
                origin: self.position,
                delta: self.azimuth_line.1 - self.position,
                color: self.color.clone(),
            },
            Primitive::Segment {
                a: self.lop.0,
                b: self.lop.1,
                color: LOP_COLOR.to_string(),
                style: LineStyle::Thick,
            },
            Primitive::Label(Label {
                at: self.position + DVec2::splat(NAME_OFFSET),
                text: self.name.clone(),
                anchor: Anchor::Left,
            }),
        ]
    }
}
