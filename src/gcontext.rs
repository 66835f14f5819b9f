//! Graphics context definitions for recorded primitives.
//!
//! This module provides [`GContext`], the mutable bundle of style attributes
//! in effect when a primitive is recorded, and [`FontFace`], the font face
//! enumeration shared with the embedding host.
//!
//! # Overview
//!
//! A `GContext` is a cheap value type: callers mutate one in place as
//! drawing proceeds, and the device clones it into every recorded grob so
//! that later mutation never changes what was already recorded.
//!
//! # Quick Start
//!
//! ```
//! # use gridrec::gcontext::{GContext, FontFace};
//! # fn main() -> Result<(), gridrec::Error> {
//! let mut gc = GContext::new();
//! gc.set_color("steelblue")?;
//! gc.set_fontfamily("Helvetica")?;
//! gc.set_fontface(FontFace::Bold);
//! gc.set_fontsize(14.0);
//! # Ok(())
//! # }
//! ```

use std::fmt;

use serde::Serialize;

use crate::error::Error;

/// Maximum length, in characters, of any string style attribute.
///
/// This bound is a hard interop contract with embedding hosts whose native
/// string buffers hold 200 characters plus a terminator. Setters reject
/// longer values rather than truncating them.
pub const MAX_STYLE_LEN: usize = 200;

/// Font face following the host integer convention.
///
/// | Variant | Host value |
/// |--------------|------------|
/// | `Plain` | 1 |
/// | `Bold` | 2 |
/// | `Italic` | 3 |
/// | `BoldItalic` | 4 |
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FontFace {
    /// Upright, regular weight (default)
    #[default]
    Plain,
    /// Upright, bold weight
    Bold,
    /// Slanted, regular weight
    Italic,
    /// Slanted, bold weight
    BoldItalic,
}

impl FontFace {
    /// Returns the host integer for this face.
    pub fn as_i32(self) -> i32 {
        match self {
            Self::Plain => 1,
            Self::Bold => 2,
            Self::Italic => 3,
            Self::BoldItalic => 4,
        }
    }

    /// Whether this face uses a bold weight.
    pub fn is_bold(self) -> bool {
        matches!(self, Self::Bold | Self::BoldItalic)
    }

    /// Whether this face uses an italic style.
    pub fn is_italic(self) -> bool {
        matches!(self, Self::Italic | Self::BoldItalic)
    }
}

impl TryFrom<i32> for FontFace {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Plain),
            2 => Ok(Self::Bold),
            3 => Ok(Self::Italic),
            4 => Ok(Self::BoldItalic),
            other => Err(Error::InvalidFontFace(other)),
        }
    }
}

impl fmt::Display for FontFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Plain => "plain",
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::BoldItalic => "bold italic",
        };
        write!(f, "{name}")
    }
}

/// The drawing style in effect at the moment a primitive is recorded.
///
/// # Default Values
///
/// | Property | Default |
/// |---------------|--------------------|
/// | Color | `""` (host default)|
/// | Fill | `""` (host default)|
/// | Font family | `""` (host default)|
/// | Font size | `12.0` points |
/// | Line height | `1.2` |
/// | Font face | [`FontFace::Plain`]|
///
/// String attributes share a bounded-length contract with the embedding
/// host ([`MAX_STYLE_LEN`]); their setters are fallible. Numeric attributes
/// are recorded unvalidated: a negative font size passes through untouched,
/// and it is the caller's job to supply physically sensible values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GContext {
    color: String,
    fill: String,
    fontsize: f64,
    lineheight: f64,
    fontface: FontFace,
    fontfamily: String,
}

impl GContext {
    /// Creates a new graphics context with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the drawing color (lines, text, etc.).
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Sets the drawing color.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StyleTooLong`] if `color` exceeds [`MAX_STYLE_LEN`]
    /// characters.
    pub fn set_color(&mut self, color: &str) -> Result<(), Error> {
        self.color = bounded(color)?;
        Ok(())
    }

    /// Returns the fill color.
    pub fn fill(&self) -> &str {
        &self.fill
    }

    /// Sets the fill color.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StyleTooLong`] if `fill` exceeds [`MAX_STYLE_LEN`]
    /// characters.
    pub fn set_fill(&mut self, fill: &str) -> Result<(), Error> {
        self.fill = bounded(fill)?;
        Ok(())
    }

    /// Returns the font family name.
    pub fn fontfamily(&self) -> &str {
        &self.fontfamily
    }

    /// Sets the font family name (e.g. "Helvetica", "serif", "mono").
    ///
    /// An empty family means the host's default family.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StyleTooLong`] if `family` exceeds [`MAX_STYLE_LEN`]
    /// characters.
    pub fn set_fontfamily(&mut self, family: &str) -> Result<(), Error> {
        self.fontfamily = bounded(family)?;
        Ok(())
    }

    /// Returns the font face.
    pub fn fontface(&self) -> FontFace {
        self.fontface
    }

    /// Sets the font face.
    pub fn set_fontface(&mut self, face: FontFace) {
        self.fontface = face;
    }

    /// Returns the font size in points.
    pub fn fontsize(&self) -> f64 {
        self.fontsize
    }

    /// Sets the font size in points. The value is recorded unvalidated.
    pub fn set_fontsize(&mut self, size: f64) {
        self.fontsize = size;
    }

    /// Returns the line height as a multiple of the font size.
    pub fn lineheight(&self) -> f64 {
        self.lineheight
    }

    /// Sets the line height as a multiple of the font size. The value is
    /// recorded unvalidated.
    pub fn set_lineheight(&mut self, lineheight: f64) {
        self.lineheight = lineheight;
    }
}

impl Default for GContext {
    fn default() -> Self {
        Self {
            color: String::new(),
            fill: String::new(),
            fontsize: 12.0,
            lineheight: 1.2,
            fontface: FontFace::Plain,
            fontfamily: String::new(),
        }
    }
}

/// Validates a style string against the bounded-length contract.
fn bounded(value: &str) -> Result<String, Error> {
    let len = value.chars().count();
    if len > MAX_STYLE_LEN {
        return Err(Error::StyleTooLong { len });
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_gcontext_defaults() {
        let gc = GContext::new();
        assert_eq!(gc.color(), "");
        assert_eq!(gc.fill(), "");
        assert_eq!(gc.fontfamily(), "");
        assert_eq!(gc.fontface(), FontFace::Plain);
        assert_approx_eq!(f64, gc.fontsize(), 12.0);
        assert_approx_eq!(f64, gc.lineheight(), 1.2);
    }

    #[test]
    fn test_gcontext_string_setters() {
        let mut gc = GContext::new();
        gc.set_color("black").unwrap();
        gc.set_fill("red").unwrap();
        gc.set_fontfamily("Times New Roman").unwrap();

        assert_eq!(gc.color(), "black");
        assert_eq!(gc.fill(), "red");
        assert_eq!(gc.fontfamily(), "Times New Roman");
    }

    #[test]
    fn test_gcontext_bounded_string_contract() {
        let mut gc = GContext::new();

        // 199 and 200 characters are within the contract
        let ok199 = "a".repeat(199);
        let ok200 = "a".repeat(200);
        assert_eq!(gc.set_color(&ok199), Ok(()));
        assert_eq!(gc.color(), ok199);
        assert_eq!(gc.set_color(&ok200), Ok(()));
        assert_eq!(gc.color(), ok200);

        // 201 characters is rejected, leaving the previous value intact
        let over = "a".repeat(201);
        assert_eq!(gc.set_color(&over), Err(Error::StyleTooLong { len: 201 }));
        assert_eq!(gc.color(), ok200);

        assert_eq!(gc.set_fill(&over), Err(Error::StyleTooLong { len: 201 }));
        assert_eq!(
            gc.set_fontfamily(&over),
            Err(Error::StyleTooLong { len: 201 })
        );
    }

    #[test]
    fn test_gcontext_bound_counts_characters_not_bytes() {
        let mut gc = GContext::new();
        // 200 two-byte characters: within the character bound
        let wide = "é".repeat(200);
        assert_eq!(gc.set_fontfamily(&wide), Ok(()));
        assert_eq!(gc.fontfamily(), wide);
    }

    #[test]
    fn test_gcontext_numeric_passthrough() {
        // Out-of-range numeric values are intentionally recorded unvalidated,
        // not clamped.
        let mut gc = GContext::new();
        gc.set_fontsize(-3.0);
        assert_approx_eq!(f64, gc.fontsize(), -3.0);

        gc.set_lineheight(-1.0);
        assert_approx_eq!(f64, gc.lineheight(), -1.0);

        gc.set_fontsize(0.0);
        assert_approx_eq!(f64, gc.fontsize(), 0.0);
    }

    #[test]
    fn test_gcontext_clone_is_deep() {
        let mut original = GContext::new();
        original.set_color("blue").unwrap();

        let snapshot = original.clone();
        original.set_color("green").unwrap();
        original.set_fontsize(30.0);

        assert_eq!(snapshot.color(), "blue");
        assert_approx_eq!(f64, snapshot.fontsize(), 12.0);
        assert_eq!(original.color(), "green");
    }

    #[test]
    fn test_fontface_host_integers() {
        assert_eq!(FontFace::Plain.as_i32(), 1);
        assert_eq!(FontFace::Bold.as_i32(), 2);
        assert_eq!(FontFace::Italic.as_i32(), 3);
        assert_eq!(FontFace::BoldItalic.as_i32(), 4);

        assert_eq!(FontFace::try_from(1).unwrap(), FontFace::Plain);
        assert_eq!(FontFace::try_from(4).unwrap(), FontFace::BoldItalic);

        assert_eq!(FontFace::try_from(0), Err(Error::InvalidFontFace(0)));
        assert_eq!(FontFace::try_from(5), Err(Error::InvalidFontFace(5)));
        assert_eq!(FontFace::try_from(-1), Err(Error::InvalidFontFace(-1)));
    }

    #[test]
    fn test_fontface_weight_and_style() {
        assert!(!FontFace::Plain.is_bold());
        assert!(!FontFace::Plain.is_italic());
        assert!(FontFace::Bold.is_bold());
        assert!(!FontFace::Bold.is_italic());
        assert!(!FontFace::Italic.is_bold());
        assert!(FontFace::Italic.is_italic());
        assert!(FontFace::BoldItalic.is_bold());
        assert!(FontFace::BoldItalic.is_italic());
    }
}
