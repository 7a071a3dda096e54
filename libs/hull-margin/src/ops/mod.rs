//! # Hull Operations
//!
//! Operations that derive new hulls from finished ones.

pub mod margin;

pub use margin::{add_margin, extrusion_points};
