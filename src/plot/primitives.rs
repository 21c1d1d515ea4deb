//! Drawable primitives handed to the renderer
//!
//! The geometry engine never draws; it emits these plain data values and
//! an external renderer turns them into a visible chart. All types are
//! serializable so the renderer can live in another process or stack.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A point on the plot plane; 1.0 unit equals one degree of latitude
pub type PlanePoint = DVec2;

/// Renderer color, free-form named color or hex string
pub type Color = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineStyle {
    Solid,
    /// Lines of position are drawn wider than construction lines
    Thick,
}

/// Horizontal anchoring of label text relative to its position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Anchor {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub at: PlanePoint,
    pub text: String,
    pub anchor: Anchor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Primitive {
    Point {
        at: PlanePoint,
        color: Color,
    },
    Segment {
        a: PlanePoint,
        b: PlanePoint,
        color: Color,
        style: LineStyle,
    },
    Arrow {
        origin: PlanePoint,
        delta: PlanePoint,
        color: Color,
    },
    Circle {
        center: PlanePoint,
        radius: f64,
        color: Color,
    },
    Label(Label),
}
