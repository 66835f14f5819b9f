//! Error types for recording operations.
//!
//! Only contract violations that a caller can meaningfully handle are
//! represented as error values. Allocation failure during sequence growth
//! aborts the process (the recording session cannot continue), and
//! use-after-release is unrepresentable because [`release`] consumes the
//! device by value.
//!
//! [`release`]: crate::RenderDevice::release

use thiserror::Error;

use crate::gcontext::MAX_STYLE_LEN;

/// The error type for gridrec operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A style string exceeded the bounded-buffer contract shared with the
    /// embedding host. Over-long values are rejected, never truncated.
    #[error("style string is {len} characters, limit is {MAX_STYLE_LEN}")]
    StyleTooLong { len: usize },

    /// A font face integer outside the host convention {1, 2, 3, 4}.
    #[error("invalid font face {0}, valid values: 1 (plain), 2 (bold), 3 (italic), 4 (bold italic)")]
    InvalidFontFace(i32),
}
