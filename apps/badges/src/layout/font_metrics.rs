//! Static font-metric tables for the two builtin PDF faces used on badges.
//!
//! Character widths are in em units (relative to font size), taken from the Adobe
//! Helvetica and Helvetica-Bold AFM files. Kerning is ignored, which keeps measured widths
//! within a few percent of what a PDF viewer draws.
//! All tables cover ASCII 0x20..=0x7E (95 printable characters).
//! Index = (char as usize) - 32.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Points per inch. Font sizes are in points, layout is in inches.
pub const POINTS_PER_INCH: f32 = 72.0;

// ────────────────────────────────────────────────────────────────────────────
// Font weight + measurement capability
// ────────────────────────────────────────────────────────────────────────────

/// Weight of a text run. Maps to Helvetica / Helvetica-Bold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontWeight {
    Normal,
    Bold,
}

#[derive(Debug, Error, PartialEq)]
pub enum MeasureError {
    #[error("cannot measure character {ch:?} in {text:?}")]
    Unmeasurable { ch: char, text: String },
}

/// Text-measurement capability every renderer provides.
///
/// Layout code takes a `&impl TextMeasure` explicitly; there is no ambient drawing surface.
pub trait TextMeasure {
    /// Width of `text` rendered at `font_size_pt` with `weight`, in inches.
    fn measure_width(
        &self,
        text: &str,
        font_size_pt: f32,
        weight: FontWeight,
    ) -> Result<f32, MeasureError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Font metric table
// ────────────────────────────────────────────────────────────────────────────

/// Static character-width table for one face.
///
/// `widths[i]` = width of ASCII character `(i + 32)`, covering 0x20 (space) through 0x7E (~).
///
/// Width array slot layout:
/// ```text
/// [0]=sp  [1]=!   [2]="   [3]=#   [4]=$   [5]=%   [6]=&   [7]='
/// [8]=(   [9]=)   [10]=*  [11]=+  [12]=,  [13]=-  [14]=.  [15]=/
/// [16..25]=0-9
/// [26]=:  [27]=;  [28]=<  [29]==  [30]=>  [31]=?  [32]=@
/// [33..58]=A-Z
/// [59]=[  [60]=\  [61]=]  [62]=^  [63]=_  [64]=`
/// [65..90]=a-z
/// [91]={  [92]=|  [93]=}  [94]=~
/// ```
pub struct FontMetricTable {
    widths: [f32; 95],
    /// Fallback width for printable non-ASCII characters (accented Latin letters mostly).
    pub average_char_width: f32,
    /// Distance from baseline to the top of capitals/ascenders.
    pub ascent: f32,
}

impl FontMetricTable {
    /// Measures the rendered width of a string in em units.
    ///
    /// Non-ASCII characters fall back to `average_char_width`. Control characters have no
    /// glyph and are rejected.
    pub fn measure_str(&self, s: &str) -> Result<f32, MeasureError> {
        s.chars().try_fold(0.0_f32, |acc, c| {
            let code = c as usize;
            if (32..=126).contains(&code) {
                Ok(acc + self.widths[code - 32])
            } else if c.is_control() {
                Err(MeasureError::Unmeasurable {
                    ch: c,
                    text: s.to_string(),
                })
            } else {
                Ok(acc + self.average_char_width)
            }
        })
    }

    /// Ascent in inches at the given point size.
    pub fn ascent_in(&self, font_size_pt: f32) -> f32 {
        self.ascent * font_size_pt / POINTS_PER_INCH
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static width tables  (95 ASCII printable characters each)
// ────────────────────────────────────────────────────────────────────────────

/// Helvetica, used for the badge label and organization text.
static HELVETICA_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.278, 0.278, 0.355, 0.556, 0.556, 0.889, 0.667, 0.191, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
        // 0      1      2      3      4      5      6      7      8      9
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
        // :      ;      <      =      >      ?      @
        0.278, 0.278, 0.584, 0.584, 0.584, 0.556, 1.015,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.667, 0.667, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.500, 0.667, 0.556, 0.833,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
        // [      \      ]      ^      _      `
        0.278, 0.278, 0.278, 0.469, 0.556, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.556, 0.556, 0.500, 0.556, 0.556, 0.278, 0.556, 0.556, 0.222, 0.222, 0.500, 0.222, 0.833,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.556, 0.556, 0.556, 0.556, 0.333, 0.500, 0.278, 0.556, 0.500, 0.722, 0.500, 0.500, 0.500,
        // {      |      }      ~
        0.334, 0.260, 0.334, 0.584,
    ],
    average_char_width: 0.556,
    ascent: 0.718,
};

/// Helvetica-Bold, used for attendee names.
static HELVETICA_BOLD_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.278, 0.333, 0.474, 0.556, 0.556, 0.889, 0.722, 0.238, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
        // 0      1      2      3      4      5      6      7      8      9
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
        // :      ;      <      =      >      ?      @
        0.333, 0.333, 0.584, 0.584, 0.584, 0.611, 0.975,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.722, 0.722, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.556, 0.722, 0.611, 0.833,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
        // [      \      ]      ^      _      `
        0.333, 0.278, 0.333, 0.584, 0.556, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.556, 0.611, 0.556, 0.611, 0.556, 0.333, 0.611, 0.611, 0.278, 0.278, 0.556, 0.278, 0.889,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.611, 0.611, 0.611, 0.611, 0.389, 0.556, 0.333, 0.611, 0.556, 0.778, 0.556, 0.556, 0.500,
        // {      |      }      ~
        0.389, 0.280, 0.389, 0.584,
    ],
    average_char_width: 0.611,
    ascent: 0.718,
};

/// Returns the static metric table for a given weight.
pub fn get_metrics(weight: FontWeight) -> &'static FontMetricTable {
    match weight {
        FontWeight::Normal => &HELVETICA_TABLE,
        FontWeight::Bold => &HELVETICA_BOLD_TABLE,
    }
}

/// `TextMeasure` backed by the static Helvetica tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinMetrics;

impl TextMeasure for BuiltinMetrics {
    fn measure_width(
        &self,
        text: &str,
        font_size_pt: f32,
        weight: FontWeight,
    ) -> Result<f32, MeasureError> {
        let em = get_metrics(weight).measure_str(text)?;
        Ok(em * font_size_pt / POINTS_PER_INCH)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_str_empty_returns_zero() {
        let metrics = get_metrics(FontWeight::Normal);
        assert_eq!(metrics.measure_str(""), Ok(0.0));
    }

    #[test]
    fn test_measure_str_single_space() {
        let width = get_metrics(FontWeight::Normal).measure_str(" ").unwrap();
        assert!(
            (width - 0.278).abs() < 1e-4,
            "space width should be 0.278, got {width}"
        );
    }

    #[test]
    fn test_measure_str_ascii_characters() {
        let metrics = get_metrics(FontWeight::Normal);
        // "QMAG" = Q(0.778) + M(0.833) + A(0.667) + G(0.778) = 3.056
        let width = metrics.measure_str("QMAG").unwrap();
        assert!(
            (width - 3.056).abs() < 1e-3,
            "QMAG width should be ~3.056, got {width}"
        );
    }

    #[test]
    fn test_measure_str_non_ascii_falls_back() {
        let metrics = get_metrics(FontWeight::Normal);
        let width = metrics.measure_str("é").unwrap();
        assert!(
            (width - metrics.average_char_width).abs() < 1e-4,
            "non-ASCII should use average_char_width"
        );
    }

    #[test]
    fn test_measure_str_control_char_is_error() {
        let metrics = get_metrics(FontWeight::Normal);
        let err = metrics.measure_str("Ann\u{7}").unwrap_err();
        assert!(matches!(err, MeasureError::Unmeasurable { ch: '\u{7}', .. }));
    }

    #[test]
    fn test_bold_wider_than_normal() {
        let text = "Margaret Hamilton";
        let normal = get_metrics(FontWeight::Normal).measure_str(text).unwrap();
        let bold = get_metrics(FontWeight::Bold).measure_str(text).unwrap();
        assert!(bold > normal, "bold {bold} should exceed normal {normal}");
    }

    #[test]
    fn test_builtin_metrics_scales_to_inches() {
        // 72 pt font: one em is exactly one inch.
        let width = BuiltinMetrics
            .measure_width("m", 72.0, FontWeight::Normal)
            .unwrap();
        assert!((width - 0.833).abs() < 1e-4, "got {width}");

        let half = BuiltinMetrics
            .measure_width("m", 36.0, FontWeight::Normal)
            .unwrap();
        assert!((half - width / 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_ascent_in_inches() {
        let ascent = get_metrics(FontWeight::Bold).ascent_in(12.0);
        assert!((ascent - 0.718 * 12.0 / 72.0).abs() < 1e-5);
    }
}
