//! Recorded drawing objects.
//!
//! A [`Grob`] ("graphical object") is one immutable drawing instruction
//! recorded by a [`RenderDevice`](crate::RenderDevice). Its geometry is
//! already expressed in the device's inverted frame, and it owns its own
//! [`GContext`] snapshot taken at record time.
//!
//! Grobs serialize with `serde` so an embedding host's conversion layer can
//! reconstruct a presentation-parameter record per object.

use serde::Serialize;

use crate::gcontext::GContext;
use crate::geometry::{Point, Size};

/// One recorded drawing instruction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Grob {
    /// A text label anchored at `position`.
    Text {
        /// The text to draw. May be empty.
        label: String,
        /// Anchor position in the inverted frame.
        position: Point,
        /// Style snapshot taken when the grob was recorded.
        gc: GContext,
    },
    /// An axis-aligned rectangle.
    Rect {
        /// Anchor corner in the inverted frame.
        position: Point,
        /// Rectangle extent. Negative dimensions describe a degenerate
        /// rectangle and are recorded as-is.
        size: Size,
        /// Style snapshot taken when the grob was recorded.
        gc: GContext,
    },
}

impl Grob {
    /// Returns the style snapshot recorded with this grob.
    pub fn gc(&self) -> &GContext {
        match self {
            Self::Text { gc, .. } => gc,
            Self::Rect { gc, .. } => gc,
        }
    }

    /// Returns the anchor position in the inverted frame.
    pub fn position(&self) -> Point {
        match self {
            Self::Text { position, .. } => *position,
            Self::Rect { position, .. } => *position,
        }
    }
}
