//! Gridrec — a retained-mode recorder for grid drawing primitives.
//!
//! This crate records structured drawing instructions ("grobs") instead of
//! rendering pixels. A caller builds a [`GContext`] style bundle, optionally
//! measures text with [`string_metrics`], and appends text and rectangle
//! primitives to a [`RenderDevice`]. Every recorded coordinate is expressed
//! in a frame whose vertical axis is reflected about the device's `y0`
//! reference, reconciling the caller's y-up convention with the host's
//! y-down convention (or vice versa).
//!
//! Modules:
//!
//! - **Geometry**: Basic geometric value types ([`geometry`] module)
//! - **Graphics context**: The mutable style bundle ([`gcontext`] module)
//! - **Grobs**: Recorded drawing objects ([`grob`] module)
//! - **Device**: The recording session ([`device`] module)
//! - **Metrics**: Text measurement queries ([`metrics`] module)
//!
//! # Quick Start
//!
//! ```
//! use gridrec::{GContext, RenderDevice};
//!
//! # fn main() -> Result<(), gridrec::Error> {
//! let mut gc = GContext::new();
//! gc.set_color("black")?;
//! gc.set_fontsize(12.0);
//!
//! let mut device = RenderDevice::new(100.0);
//! device.draw_text("Hi", 10.0, 20.0, &gc);
//! device.draw_rect(0.0, 0.0, 50.0, 30.0, &gc);
//!
//! let grobs = device.release();
//! assert_eq!(grobs.len(), 2);
//! # Ok(())
//! # }
//! ```

pub mod device;
pub mod error;
pub mod gcontext;
pub mod geometry;
pub mod grob;
pub mod metrics;

pub use device::RenderDevice;
pub use error::Error;
pub use gcontext::{FontFace, GContext, MAX_STYLE_LEN};
pub use grob::Grob;
pub use metrics::{TextMetrics, string_metrics};
