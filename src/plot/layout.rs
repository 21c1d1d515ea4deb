//! Static scaffold of the plotting sheet
//!
//! Pure geometric bookkeeping: the bounding circle, latitude/longitude
//! reference lines with their degree labels, minute ticks along the
//! central meridian and around the circle rim. Correctness here is exact
//! tick counts and positions, not visual inspection.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::angle::Hemisphere;
use crate::plot::primitives::{Anchor, Label, LineStyle, PlanePoint, Primitive};
use crate::sheet::SheetConfig;

/// Reference lines extend half a degree past the circle on each side
const SHEET_EXTENT: f64 = 1.5;
const LABEL_OFFSET: f64 = 0.05;
const LON_LABEL_Y: f64 = 1.05;

const MAJOR_TICK: f64 = 0.07;
const MEDIUM_TICK: f64 = 0.05;
const MINOR_TICK: f64 = 0.03;

/// One tick per arc-minute over the 2 degree core band, endpoints included
const MERIDIAN_TICK_COUNT: usize = 121;
const EXTENSION_TICK_COUNT: usize = 30;

/// Longitude lines converge near the poles; from this center latitude an
/// extra pair keeps the angular spacing meaningful
const EXTRA_LON_LINE_LAT: i32 = 60;

const SHEET_COLOR: &str = "black";

pub type Seg = (PlanePoint, PlanePoint);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: PlanePoint,
    pub radius: f64,
}

/// A minute or bearing tick, with its numeric label when one is due
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub line: Seg,
    pub label: Option<Label>,
}

/// Everything static on one sheet, ready for a renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetLayout {
    pub circle: Circle,
    pub h_lines: Vec<Seg>,
    pub v_lines: Vec<Seg>,
    pub axis_labels: Vec<Label>,
    pub meridian_ticks: Vec<Tick>,
    pub rim_ticks: Vec<Tick>,
}

fn tick_length(idx: usize) -> f64 {
    if idx % 10 == 0 {
        MAJOR_TICK
    } else if idx % 5 == 0 {
        MEDIUM_TICK
    } else {
        MINOR_TICK
    }
}

fn latitude_labels(config: &SheetConfig) -> Vec<Label> {
    let deg = config.lat_degree;
    // The degree value grows toward the pole of the sheet's hemisphere
    let (top, bottom) = match config.lat_hemisphere {
        Hemisphere::S => (deg - 1, deg + 1),
        _ => (deg + 1, deg - 1),
    };
    [
        (1.0, format!("{top}°")),
        (0.0, format!("{}{deg}°", config.lat_hemisphere)),
        (-1.0, format!("{bottom}°")),
    ]
    .into_iter()
    .map(|(y, text)| Label {
        at: DVec2::new(-SHEET_EXTENT, y + LABEL_OFFSET),
        text,
        anchor: Anchor::Left,
    })
    .collect()
}

fn longitude_labels(config: &SheetConfig) -> Vec<Label> {
    let deg = config.lon_degree;
    let spacing = config.lon_spacing;
    // Mirrored between hemispheres: degrees grow westward on a W sheet,
    // eastward on an E sheet
    let west = config.lon_hemisphere == Hemisphere::W;
    let step = |n: i32| if west { deg - n } else { deg + n };

    let mut entries = vec![
        (spacing, format!("{}°", step(1))),
        (0.0, format!("{}{deg}°", config.lon_hemisphere)),
        (-spacing, format!("{}°", step(-1))),
    ];
    if config.lat_degree >= EXTRA_LON_LINE_LAT {
        entries.push((2.0 * spacing, format!("{}°", step(2))));
        entries.push((-2.0 * spacing, format!("{}°", step(-2))));
    }

    entries
        .into_iter()
        .map(|(x, text)| Label {
            at: DVec2::new(x, LON_LABEL_Y),
            text,
            anchor: Anchor::Right,
        })
        .collect()
}

/// Ticks along the central meridian over the core band `y in [-1, 1]`,
/// one per arc-minute. Major ticks every 10th index are labeled with the
/// signed minutes-of-arc distance from the center parallel, endpoints
/// excepted.
fn meridian_core_ticks() -> Vec<Tick> {
    let step = 2.0 / (MERIDIAN_TICK_COUNT - 1) as f64;
    (0..MERIDIAN_TICK_COUNT)
        .map(|idx| {
            let y = -1.0 + idx as f64 * step;
            let length = tick_length(idx);
            let label = if idx % 10 == 0 && idx != 0 && idx != MERIDIAN_TICK_COUNT - 1 {
                let minutes = if idx >= 60 { idx - 60 } else { idx };
                Some(Label {
                    at: DVec2::new(length + LABEL_OFFSET, y),
                    text: format!("{minutes}'"),
                    anchor: Anchor::Center,
                })
            } else {
                None
            };
            Tick {
                line: (DVec2::new(0.0, y), DVec2::new(length, y)),
                label,
            }
        })
        .collect()
}

/// One 30-tick extension run of the meridian, `y in [y_start, y_end]`.
/// `label_base` is added to the index in the labels; the legacy run
/// numbering is kept verbatim.
fn meridian_extension_ticks(y_start: f64, y_end: f64, label_base: usize) -> Vec<Tick> {
    let step = (y_end - y_start) / (EXTENSION_TICK_COUNT - 1) as f64;
    (0..EXTENSION_TICK_COUNT)
        .map(|idx| {
            let y = y_start + idx as f64 * step;
            let length = tick_length(idx);
            let label = if idx % 10 == 0 && idx != 0 {
                Some(Label {
                    at: DVec2::new(length + LABEL_OFFSET, y),
                    text: format!("{}'", idx + label_base),
                    anchor: Anchor::Center,
                })
            } else {
                None
            };
            Tick {
                line: (DVec2::new(0.0, y), DVec2::new(length, y)),
                label,
            }
        })
        .collect()
}

/// 360 bearing ticks around the unit circle. Bearing 0 is at the top and
/// bearings run clockwise, so each is mapped through `(90 - angle) mod
/// 360` before the trigonometry. The major tier is suppressed at the
/// cardinal points where the reference lines already cross the rim.
fn rim_ticks() -> Vec<Tick> {
    (0..360)
        .map(|angle: i32| {
            let adjusted = (90 - angle).rem_euclid(360) as f64;
            let rad = adjusted.to_radians();
            let point = DVec2::new(rad.cos(), rad.sin());

            let major = angle % 10 == 0 && angle % 90 != 0;
            let length = if major {
                MAJOR_TICK
            } else if angle % 5 == 0 {
                MEDIUM_TICK
            } else {
                MINOR_TICK
            };

            let label = major.then(|| Label {
                at: point * (1.0 - length - LABEL_OFFSET),
                text: format!("{angle}°"),
                anchor: Anchor::Center,
            });

            Tick {
                line: (point * (1.0 - length), point),
                label,
            }
        })
        .collect()
}

/// Build the static scaffold for one sheet. Pure function of the config;
/// independent of any observation.
pub fn build_sheet(config: &SheetConfig) -> SheetLayout {
    let circle = Circle {
        center: DVec2::ZERO,
        radius: config.lat_spacing,
    };

    let h_lines = [-1.0, 0.0, 1.0]
        .into_iter()
        .map(|y| (DVec2::new(-SHEET_EXTENT, y), DVec2::new(SHEET_EXTENT, y)))
        .collect();

    let mut xs = vec![-config.lon_spacing, 0.0, config.lon_spacing];
    if config.lat_degree >= EXTRA_LON_LINE_LAT {
        xs.push(-2.0 * config.lon_spacing);
        xs.push(2.0 * config.lon_spacing);
    }
    let v_lines = xs
        .into_iter()
        .map(|x| (DVec2::new(x, -SHEET_EXTENT), DVec2::new(x, SHEET_EXTENT)))
        .collect();

    let mut axis_labels = latitude_labels(config);
    axis_labels.extend(longitude_labels(config));

    let mut meridian_ticks = meridian_core_ticks();
    meridian_ticks.extend(meridian_extension_ticks(
        -SHEET_EXTENT,
        -1.0,
        EXTENSION_TICK_COUNT,
    ));
    meridian_ticks.extend(meridian_extension_ticks(1.0, SHEET_EXTENT, 0));

    log::debug!(
        "sheet scaffold for {} {}{}: lon spacing {:.4}",
        config.apparent_latitude(),
        config.lon_hemisphere,
        config.lon_degree,
        config.lon_spacing
    );

    SheetLayout {
        circle,
        h_lines,
        v_lines,
        axis_labels,
        meridian_ticks,
        rim_ticks: rim_ticks(),
    }
}

impl SheetLayout {
    /// Flatten the scaffold into renderer primitives
    pub fn primitives(&self) -> Vec<Primitive> {
        let mut out = vec![Primitive::Circle {
            center: self.circle.center,
            radius: self.circle.radius,
            color: SHEET_COLOR.to_string(),
        }];

        for &(a, b) in self.h_lines.iter().chain(self.v_lines.iter()) {
            out.push(Primitive::Segment {
                a,
                b,
                color: SHEET_COLOR.to_string(),
                style: LineStyle::Solid,
            });
        }
        for tick in self.meridian_ticks.iter().chain(self.rim_ticks.iter()) {
            out.push(Primitive::Segment {
                a: tick.line.0,
                b: tick.line.1,
                color: SHEET_COLOR.to_string(),
                style: LineStyle::Solid,
            });
            if let Some(label) = &tick.label {
                out.push(Primitive::Label(label.clone()));
            }
        }
        for label in &self.axis_labels {
            out.push(Primitive::Label(label.clone()));
        }
        out
    }
}
