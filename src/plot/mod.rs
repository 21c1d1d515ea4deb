//! Everything the renderer consumes
//!
//! [primitives] defines the drawable data types, [body] reduces one
//! celestial observation to its plot geometry, and [layout] builds the
//! static sheet scaffold. Nothing in here draws.

pub mod body;
pub mod layout;
pub mod primitives;
