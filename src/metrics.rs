//! Text measurement queries.
//!
//! [`string_metrics`] reports the ascent, descent, and advance width a label
//! would occupy under a given [`GContext`], so callers can lay text out
//! before recording it. The query is pure: it records nothing, and
//! identical `(label, context)` input yields identical output.
//!
//! Measurement is backed by a process-wide [`FontSystem`] that is expensive
//! to construct, so it is initialized lazily and reused across calls.

use std::sync::{Mutex, OnceLock};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping, Style, Weight};
use log::info;

use crate::gcontext::GContext;

/// Conversion from points to pixels at standard DPI.
const PX_PER_PT: f64 = 1.33;

/// Fraction of the font size attributed to ascent/descent when no font
/// could be resolved for the requested family.
const FALLBACK_ASCENT_FRAC: f64 = 0.8;
const FALLBACK_DESCENT_FRAC: f64 = 0.2;
const FALLBACK_ADVANCE_FRAC: f64 = 0.55;

static FONT_SYSTEM: OnceLock<Mutex<FontSystem>> = OnceLock::new();

/// The vertical and horizontal extent of a measured label.
///
/// All three quantities are non-negative. Ascent and descent are measured
/// from the baseline of the first and last line respectively; width is the
/// widest line's advance.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextMetrics {
    ascent: f64,
    descent: f64,
    width: f64,
}

impl TextMetrics {
    /// Extent above the baseline.
    pub fn ascent(self) -> f64 {
        self.ascent
    }

    /// Extent below the baseline.
    pub fn descent(self) -> f64 {
        self.descent
    }

    /// Advance width of the widest line.
    pub fn width(self) -> f64 {
        self.width
    }
}

/// Measures `label` under the font attributes of `gc`.
///
/// Returns all-zero metrics for an empty label or a non-positive font size.
/// Results are deterministic for identical input, so layout computed from
/// them is stable across calls.
///
/// # Examples
///
/// ```
/// use gridrec::{GContext, string_metrics};
///
/// let gc = GContext::new();
/// let metrics = string_metrics("Hello", &gc);
/// assert!(metrics.width() > 0.0);
/// assert!(metrics.ascent() >= 0.0);
/// assert!(metrics.descent() >= 0.0);
/// ```
pub fn string_metrics(label: &str, gc: &GContext) -> TextMetrics {
    if label.is_empty() || gc.fontsize() <= 0.0 {
        return TextMetrics::default();
    }

    let font_system = FONT_SYSTEM.get_or_init(|| {
        info!("Initializing FontSystem");
        Mutex::new(FontSystem::new())
    });
    let mut font_system = font_system.lock().expect("failed to lock FontSystem");

    let font_size_px = (gc.fontsize() * PX_PER_PT) as f32;
    let mut line_height = font_size_px * gc.lineheight() as f32;
    if !(line_height > 0.0) {
        line_height = font_size_px;
    }
    let metrics = Metrics::new(font_size_px, line_height);

    let mut buffer = Buffer::new(&mut font_system, metrics);
    let mut buffer = buffer.borrow_with(&mut font_system);

    let face = gc.fontface();
    let mut attrs = Attrs::new().family(resolve_family(gc.fontfamily()));
    if face.is_bold() {
        attrs = attrs.weight(Weight::BOLD);
    }
    if face.is_italic() {
        attrs = attrs.style(Style::Italic);
    }

    // Unlimited buffer size lets the text flow naturally; advanced shaping
    // accounts for ligatures and kerning in the measured width.
    buffer.set_size(None, None);
    buffer.set_text(label, &attrs, Shaping::Advanced, None);
    buffer.shape_until_scroll(true);

    let layout_runs: Vec<_> = buffer.layout_runs().collect();
    if layout_runs.is_empty() {
        // No font matched the requested family; estimate from the font size
        // so layout remains possible.
        let font_size_px = font_size_px as f64;
        return TextMetrics {
            ascent: font_size_px * FALLBACK_ASCENT_FRAC,
            descent: font_size_px * FALLBACK_DESCENT_FRAC,
            width: label.chars().count() as f64 * font_size_px * FALLBACK_ADVANCE_FRAC,
        };
    }

    let mut width: f32 = 0.0;
    for glyph in layout_runs.iter().filter_map(|run| run.glyphs.last()) {
        width = width.max(glyph.x + glyph.w);
    }

    // Ascent of the first line, descent of the last.
    let first = &layout_runs[0];
    let last = &layout_runs[layout_runs.len() - 1];
    let ascent = first.line_y - first.line_top;
    let descent = (last.line_top + last.line_height) - last.line_y;

    TextMetrics {
        ascent: f64::from(ascent).max(0.0),
        descent: f64::from(descent).max(0.0),
        width: f64::from(width).max(0.0),
    }
}

/// Maps a context font family to a shaping family, treating the host's
/// generic names and the empty string specially.
fn resolve_family(family: &str) -> Family<'_> {
    match family {
        "" | "sans" | "sans-serif" => Family::SansSerif,
        "serif" => Family::Serif,
        "mono" | "monospace" => Family::Monospace,
        name => Family::Name(name),
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use crate::gcontext::FontFace;

    use super::*;

    #[test]
    fn test_metrics_empty_label_is_zero() {
        let gc = GContext::new();
        let metrics = string_metrics("", &gc);
        assert_approx_eq!(f64, metrics.ascent(), 0.0);
        assert_approx_eq!(f64, metrics.descent(), 0.0);
        assert_approx_eq!(f64, metrics.width(), 0.0);
    }

    #[test]
    fn test_metrics_non_positive_fontsize_is_zero() {
        let mut gc = GContext::new();
        gc.set_fontsize(-3.0);
        let metrics = string_metrics("text", &gc);
        assert_approx_eq!(f64, metrics.width(), 0.0);
    }

    #[test]
    fn test_metrics_are_non_negative() {
        let gc = GContext::new();
        let metrics = string_metrics("Hello World", &gc);
        assert!(metrics.ascent() >= 0.0);
        assert!(metrics.descent() >= 0.0);
        assert!(metrics.width() > 0.0, "non-empty label should have width");
    }

    #[test]
    fn test_metrics_deterministic() {
        let mut gc = GContext::new();
        gc.set_fontfamily("serif").unwrap();
        gc.set_fontface(FontFace::BoldItalic);
        gc.set_fontsize(18.0);

        let first = string_metrics("Determinism", &gc);
        let second = string_metrics("Determinism", &gc);
        assert_eq!(first, second);
    }

    #[test]
    fn test_metrics_wider_label_is_wider() {
        let gc = GContext::new();
        let short = string_metrics("Hi", &gc);
        let long = string_metrics("Hi there, neighbor", &gc);
        assert!(long.width() > short.width());
    }

    #[test]
    fn test_metrics_scale_with_fontsize() {
        let mut small = GContext::new();
        small.set_fontsize(10.0);
        let mut large = GContext::new();
        large.set_fontsize(20.0);

        let small_metrics = string_metrics("Sample", &small);
        let large_metrics = string_metrics("Sample", &large);
        assert!(large_metrics.width() > small_metrics.width());
    }

    #[test]
    fn test_resolve_family_generics() {
        assert_eq!(resolve_family(""), Family::SansSerif);
        assert_eq!(resolve_family("sans"), Family::SansSerif);
        assert_eq!(resolve_family("serif"), Family::Serif);
        assert_eq!(resolve_family("mono"), Family::Monospace);
        assert_eq!(resolve_family("Helvetica"), Family::Name("Helvetica"));
    }
}
