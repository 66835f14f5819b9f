//! The recording session.
//!
//! A [`RenderDevice`] owns a growable sequence of recorded [`Grob`]s plus a
//! single vertical reference `y0`. Append operations translate caller
//! geometry into the inverted frame and snapshot the caller's [`GContext`];
//! [`release`](RenderDevice::release) hands the accumulated sequence back to
//! the caller.
//!
//! # Coordinate inversion
//!
//! The device reconciles two y-axis conventions by reflecting every vertical
//! coordinate about `y0`:
//!
//! ```text
//! y_out = 2 * y0 - y_in
//! ```
//!
//! The reflection is an involution (`invert(invert(y)) == y`) and fixes
//! `y0` itself. Rectangles are reflected as point sets: the recorded anchor
//! is the reflection of the *far* vertical edge, so the extent stays
//! positive-height-up in the output frame.
//!
//! # Lifecycle
//!
//! A device is designed for exclusive ownership by one recording session.
//! `release` consumes the device, so use-after-release is rejected at
//! compile time rather than defended with runtime handle checks.

use log::{debug, trace};

use crate::gcontext::GContext;
use crate::geometry::{Point, Size};
use crate::grob::Grob;

/// Initial slot count for a fresh device.
const INITIAL_CAPACITY: usize = 8;

/// Device extent in inches, used by callers mapping device-space heights.
const DEVICE_HEIGHT_IN: f64 = 7.0;

/// An in-progress recording session.
///
/// # Examples
///
/// ```
/// use gridrec::{GContext, RenderDevice};
///
/// let gc = GContext::new();
/// let mut device = RenderDevice::new(100.0);
/// device.draw_text("label", 10.0, 20.0, &gc);
/// assert_eq!(device.size(), 1);
///
/// let grobs = device.release();
/// assert_eq!(grobs.len(), 1);
/// ```
#[derive(Debug)]
pub struct RenderDevice {
    grobs: Vec<Grob>,
    y0: f64,
}

impl RenderDevice {
    /// Creates an empty device with the given inversion reference.
    ///
    /// The grob sequence starts with a small nonzero capacity and grows
    /// geometrically as primitives are appended, so amortized append cost
    /// is constant and previously recorded grobs are never lost.
    pub fn new(y0: f64) -> Self {
        debug!(y0; "Opening recording session");
        Self {
            grobs: Vec::with_capacity(INITIAL_CAPACITY),
            y0,
        }
    }

    /// Returns the inversion reference this device was created with.
    pub fn y0(&self) -> f64 {
        self.y0
    }

    /// Returns the number of recorded grobs.
    ///
    /// This count is authoritative for consumers; [`capacity`](Self::capacity)
    /// only reflects allocation.
    pub fn size(&self) -> usize {
        self.grobs.len()
    }

    /// Returns the number of allocated slots. Always `>= size()`.
    pub fn capacity(&self) -> usize {
        self.grobs.capacity()
    }

    /// Reflects a vertical coordinate about the device's `y0`.
    ///
    /// Applied uniformly to every recorded coordinate. The reflection is
    /// involutive and fixes `y0`.
    pub fn invert_y(&self, y: f64) -> f64 {
        2.0 * self.y0 - y
    }

    /// Records a text grob at `(x, y)` in the caller's frame.
    ///
    /// The label may be empty. The context is cloned into the recorded grob,
    /// so mutating `gc` afterwards does not affect it.
    pub fn draw_text(&mut self, label: &str, x: f64, y: f64, gc: &GContext) {
        trace!(label, x, y; "Recording text grob");
        self.grobs.push(Grob::Text {
            label: label.to_string(),
            position: Point::new(x, self.invert_y(y)),
            gc: gc.clone(),
        });
    }

    /// Records a rectangle grob spanning `y ..= y + height` in the caller's
    /// frame.
    ///
    /// The recorded rectangle is the exact reflection of the input as a
    /// point set: the anchor becomes `(x, invert_y(y + height))` with
    /// `width` and `height` unchanged, so the input anchor corner maps to
    /// the opposite vertical corner of the output.
    ///
    /// Negative `width`/`height` describe a degenerate rectangle and are
    /// recorded as-is.
    pub fn draw_rect(&mut self, x: f64, y: f64, width: f64, height: f64, gc: &GContext) {
        trace!(x, y, width, height; "Recording rect grob");
        self.grobs.push(Grob::Rect {
            position: Point::new(x, self.invert_y(y + height)),
            size: Size::new(width, height),
            gc: gc.clone(),
        });
    }

    /// Ends the session, transferring ownership of the recorded sequence to
    /// the caller.
    ///
    /// Consuming `self` makes any further use of the device a compile error,
    /// which replaces the released-handle precondition a host API would have
    /// to assert at runtime.
    pub fn release(self) -> Vec<Grob> {
        debug!(count = self.grobs.len(); "Releasing recording session");
        self.grobs
    }

    /// Returns the device height, in inches.
    ///
    /// A fixed conversion reference for callers that map device-space
    /// heights; independent of any session state.
    pub fn device_height() -> f64 {
        DEVICE_HEIGHT_IN
    }
}
