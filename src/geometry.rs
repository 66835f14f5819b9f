//! Basic geometric value types.
//!
//! Coordinates are `f64` in whatever unit system the caller uses; the crate
//! records them verbatim (after vertical inversion) and performs no unit
//! conversion of its own.

use serde::Serialize;

/// A position in the drawing plane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f64 {
        self.y
    }
}

/// Represents the dimensions of an element with width and height.
///
/// Negative dimensions are representable; a rectangle with negative width or
/// height is degenerate but valid, and downstream consumers decide how to
/// treat it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Size {
    width: f64,
    height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f64 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f64 {
        self.height
    }
}
