//! Core domain types for scatter.
//!
//! This module contains the value types shared by the pipeline:
//! - `Colour` / `ColourSpec` - RGBA colour values and per-point colour choice
//! - `ShapeKind` / `ShapeSpec` - shapes and per-point shape choice
//! - `CompositeMode`, `DistributionKind`, `PointSize` - run-wide options

mod colour;
mod options;
mod shape;

pub use colour::{Colour, ColourSpec};
pub use options::{CompositeMode, DistributionKind, PointSize};
pub use shape::{ShapeKind, ShapeSpec};
