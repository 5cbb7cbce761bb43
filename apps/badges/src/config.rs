use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};

use crate::layout::{BadgeStyle, PageGeometry};

/// Run configuration loaded from environment variables (and `.env`, if present).
/// Only the input and output paths are required; everything else has a default.
#[derive(Debug, Clone)]
pub struct Config {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub geometry: PageGeometry,
    pub name_font_size: f32,
    pub org_font_size: f32,
    /// Text encoding label for the roster file.
    pub input_encoding: String,
    pub input_delimiter: u8,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup. `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = PageGeometry::default();
        let style = BadgeStyle::default();

        Ok(Config {
            input_path: require(&lookup, "BADGE_INPUT_PATH")?.into(),
            output_path: require(&lookup, "BADGE_OUTPUT_PATH")?.into(),
            geometry: PageGeometry {
                page_width: parse_or(&lookup, "BADGE_PAGE_WIDTH_IN", defaults.page_width)?,
                page_height: parse_or(&lookup, "BADGE_PAGE_HEIGHT_IN", defaults.page_height)?,
                badge_width: parse_or(&lookup, "BADGE_WIDTH_IN", defaults.badge_width)?,
                badge_height: parse_or(&lookup, "BADGE_HEIGHT_IN", defaults.badge_height)?,
            },
            name_font_size: parse_or(&lookup, "BADGE_NAME_FONT_SIZE", style.name_font_size)?,
            org_font_size: parse_or(&lookup, "BADGE_ORG_FONT_SIZE", style.org_font_size)?,
            input_encoding: lookup("BADGE_INPUT_ENCODING")
                .unwrap_or_else(|| "ISO-8859-1".to_string()),
            input_delimiter: delimiter(&lookup)?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }

    /// Badge style with the configured font sizes.
    pub fn style(&self) -> BadgeStyle {
        BadgeStyle {
            name_font_size: self.name_font_size,
            org_font_size: self.org_font_size,
            ..BadgeStyle::default()
        }
    }
}

fn require(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<String> {
    lookup(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a number, got '{raw}'")),
        None => Ok(default),
    }
}

fn delimiter(lookup: &impl Fn(&str) -> Option<String>) -> Result<u8> {
    let Some(raw) = lookup("BADGE_INPUT_DELIMITER") else {
        return Ok(b',');
    };
    match raw.as_str() {
        "\\t" | "tab" => Ok(b'\t'),
        s if s.len() == 1 && s.is_ascii() => Ok(s.as_bytes()[0]),
        _ => bail!("BADGE_INPUT_DELIMITER must be a single ASCII character, got '{raw}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    const PATHS: [(&str, &str); 2] = [
        ("BADGE_INPUT_PATH", "attendees.csv"),
        ("BADGE_OUTPUT_PATH", "badges.pdf"),
    ];

    #[test]
    fn test_defaults_when_only_paths_set() {
        let config = Config::from_lookup(lookup_from(&PATHS)).unwrap();
        assert_eq!(config.input_path, PathBuf::from("attendees.csv"));
        assert_eq!(config.output_path, PathBuf::from("badges.pdf"));
        assert_eq!(config.geometry, PageGeometry::default());
        assert_eq!(config.name_font_size, 12.0);
        assert_eq!(config.org_font_size, 10.0);
        assert_eq!(config.input_encoding, "ISO-8859-1");
        assert_eq!(config.input_delimiter, b',');
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_missing_input_path_is_error() {
        let err = Config::from_lookup(lookup_from(&[("BADGE_OUTPUT_PATH", "x.pdf")])).unwrap_err();
        assert!(err.to_string().contains("BADGE_INPUT_PATH"));
    }

    #[test]
    fn test_overrides_are_parsed() {
        let mut pairs = PATHS.to_vec();
        pairs.extend([
            ("BADGE_PAGE_WIDTH_IN", "8.5"),
            ("BADGE_PAGE_HEIGHT_IN", " 11 "),
            ("BADGE_WIDTH_IN", "4"),
            ("BADGE_HEIGHT_IN", "3"),
            ("BADGE_NAME_FONT_SIZE", "14"),
            ("BADGE_ORG_FONT_SIZE", "9.5"),
            ("BADGE_INPUT_ENCODING", "utf-8"),
            ("BADGE_INPUT_DELIMITER", "tab"),
        ]);
        let config = Config::from_lookup(lookup_from(&pairs)).unwrap();
        assert_eq!(
            config.geometry,
            PageGeometry {
                page_width: 8.5,
                page_height: 11.0,
                badge_width: 4.0,
                badge_height: 3.0,
            }
        );
        assert_eq!(config.input_encoding, "utf-8");
        assert_eq!(config.input_delimiter, b'\t');

        let style = config.style();
        assert_eq!(style.name_font_size, 14.0);
        assert_eq!(style.org_font_size, 9.5);
        assert_eq!(style.label, "QMAG");
    }

    #[test]
    fn test_malformed_number_is_error() {
        let mut pairs = PATHS.to_vec();
        pairs.push(("BADGE_WIDTH_IN", "wide"));
        let err = Config::from_lookup(lookup_from(&pairs)).unwrap_err();
        assert!(err.to_string().contains("BADGE_WIDTH_IN"));
    }

    #[test]
    fn test_multi_char_delimiter_is_error() {
        let mut pairs = PATHS.to_vec();
        pairs.push(("BADGE_INPUT_DELIMITER", ";;"));
        assert!(Config::from_lookup(lookup_from(&pairs)).is_err());
    }
}
