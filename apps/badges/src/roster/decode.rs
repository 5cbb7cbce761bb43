use std::borrow::Cow;

use encoding_rs::Encoding;

use crate::roster::RecordSourceError;

/// Decodes raw roster bytes using the encoding named by `label` (WHATWG labels, e.g.
/// `ISO-8859-1`, `utf-8`, `windows-1252`).
///
/// A byte-order mark in the input wins over `label`. Bytes that are malformed for the
/// chosen encoding are an error rather than silently replaced.
pub fn decode_input<'a>(bytes: &'a [u8], label: &str) -> Result<Cow<'a, str>, RecordSourceError> {
    let encoding = Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| RecordSourceError::UnknownEncoding(label.to_string()))?;

    let (text, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        return Err(RecordSourceError::Decode {
            encoding: used.name().to_string(),
        });
    }

    Ok(text)
}
