//! Greedy word-wrap against a measured width.

use crate::layout::font_metrics::{FontWeight, MeasureError, TextMeasure};

/// Wraps `text` into lines whose measured width stays below `max_width` (inches).
///
/// Words are appended to the current line while the joined candidate measures strictly
/// less than `max_width`. A word that does not fit starts a new line. A word that is
/// wider than `max_width` on its own still gets a line to itself; words are never split.
///
/// Empty or whitespace-only input yields a single empty line. The number of lines is not
/// bounded.
pub fn wrap_text(
    text: &str,
    max_width: f32,
    font_size_pt: f32,
    weight: FontWeight,
    measure: &impl TextMeasure,
) -> Result<Vec<String>, MeasureError> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };

        // The first word of a line is kept even when it alone is too wide.
        let fits = measure.measure_width(&candidate, font_size_pt, weight)? < max_width;
        if fits || current.is_empty() {
            current = candidate;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }
    lines.push(current);

    Ok(lines)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::font_metrics::BuiltinMetrics;

    /// Every character is 0.1in wide regardless of size or weight.
    struct FixedWidth;

    impl TextMeasure for FixedWidth {
        fn measure_width(&self, text: &str, _: f32, _: FontWeight) -> Result<f32, MeasureError> {
            Ok(text.chars().count() as f32 * 0.1)
        }
    }

    /// Fails on any input, to prove errors are not swallowed.
    struct Broken;

    impl TextMeasure for Broken {
        fn measure_width(&self, text: &str, _: f32, _: FontWeight) -> Result<f32, MeasureError> {
            Err(MeasureError::Unmeasurable {
                ch: '?',
                text: text.to_string(),
            })
        }
    }

    fn wrap(text: &str, max_width: f32) -> Vec<String> {
        wrap_text(text, max_width, 12.0, FontWeight::Normal, &FixedWidth).unwrap()
    }

    #[test]
    fn test_empty_input_is_one_empty_line() {
        assert_eq!(wrap("", 1.0), vec![String::new()]);
        assert_eq!(wrap("   \t ", 1.0), vec![String::new()]);
    }

    #[test]
    fn test_short_text_stays_on_one_line() {
        assert_eq!(wrap("Ada Lovelace", 2.0), vec!["Ada Lovelace"]);
    }

    #[test]
    fn test_breaks_between_words() {
        // "aaa bbb" = 0.7in, "aaa bbb ccc" = 1.1in
        assert_eq!(wrap("aaa bbb ccc", 1.0), vec!["aaa bbb", "ccc"]);
    }

    #[test]
    fn test_collapses_runs_of_whitespace() {
        assert_eq!(wrap("  aaa \n  bbb  ", 5.0), vec!["aaa bbb"]);
    }

    #[test]
    fn test_width_equal_to_max_is_rejected() {
        // "aaaa bbbbb" measures exactly 1.0in; strict less-than pushes it to two lines.
        assert_eq!(wrap("aaaa bbbbb", 1.0), vec!["aaaa", "bbbbb"]);
        assert_eq!(wrap("aaaa bbbbb", 1.01), vec!["aaaa bbbbb"]);
    }

    #[test]
    fn test_overlong_single_word_is_never_split() {
        let word = "Supercalifragilisticexpialidocious";
        assert_eq!(wrap(word, 0.5), vec![word]);
    }

    #[test]
    fn test_overlong_word_mid_text_gets_own_line() {
        assert_eq!(
            wrap("at Internationalization GmbH", 1.0),
            vec!["at", "Internationalization", "GmbH"]
        );
    }

    #[test]
    fn test_rewrapping_output_is_idempotent() {
        let texts = [
            "Royal Institute of Magnetic Anomalies and Gravitational Studies",
            "Dr Jean-Baptiste Emmanuel Zorg",
            "Internationalization at a Very Long Department",
            "a b c d e f g h i j k l m n o p",
        ];
        for text in texts {
            for max_width in [0.3, 0.8, 1.5, 2.8] {
                let first = wrap(text, max_width);
                let second = wrap(&first.join(" "), max_width);
                assert_eq!(first, second, "text={text:?} max_width={max_width}");
            }
        }
    }

    #[test]
    fn test_every_multi_word_line_fits() {
        let text = "Queensland Magnetic Resonance Group for Applied Research";
        let lines = wrap_text(text, 2.0, 10.0, FontWeight::Normal, &BuiltinMetrics).unwrap();
        assert!(lines.len() > 1);
        for line in &lines {
            let width = BuiltinMetrics
                .measure_width(line, 10.0, FontWeight::Normal)
                .unwrap();
            assert!(
                width < 2.0 || !line.contains(' '),
                "{line:?} is {width}in wide"
            );
        }
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn test_bold_wraps_no_earlier_than_normal() {
        let text = "Maximiliano Alessandro Bartholomew";
        let normal = wrap_text(text, 2.0, 12.0, FontWeight::Normal, &BuiltinMetrics).unwrap();
        let bold = wrap_text(text, 2.0, 12.0, FontWeight::Bold, &BuiltinMetrics).unwrap();
        assert!(bold.len() >= normal.len());
    }

    #[test]
    fn test_measure_error_propagates() {
        let err = wrap_text("two words", 1.0, 12.0, FontWeight::Normal, &Broken).unwrap_err();
        assert!(matches!(err, MeasureError::Unmeasurable { .. }));
    }

    #[test]
    fn test_first_word_is_measured_too() {
        let err = wrap_text("solo", 1.0, 12.0, FontWeight::Normal, &Broken).unwrap_err();
        assert!(matches!(err, MeasureError::Unmeasurable { .. }));
    }
}
