// ABOUTME: Loads the document to rewrite from a file or stdin and decodes it to text.
// ABOUTME: Honors a --charset label or Content-Type value, a BOM, or falls back to detection.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{bail, Context, Result};
use encoding_rs::Encoding;

/// A decoded input document.
#[derive(Debug)]
pub struct Input {
    pub html: String,
    /// The encoding actually used; a byte order mark beats any hint.
    pub encoding: &'static Encoding,
    /// True when malformed sequences were replaced during decoding.
    pub had_errors: bool,
}

/// Reads raw bytes from `target`, or from stdin when it is `-`.
pub fn read_bytes(target: &str) -> Result<Vec<u8>> {
    if target == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        return Ok(buf);
    }

    let path = Path::new(target);
    if !path.exists() {
        bail!("file not found: {}", target);
    }
    fs::read(path).with_context(|| format!("reading {}", target))
}

/// Resolves a `--charset` value.
///
/// Accepts a bare label (`iso-8859-1`) or a Content-Type value
/// (`text/html; charset="Shift_JIS"`). Unknown labels are an error rather
/// than a silent fallback.
pub fn resolve_charset(hint: &str) -> Result<&'static Encoding> {
    let label = hint
        .split(';')
        .map(str::trim)
        .find_map(|part| {
            part.get(..8)
                .filter(|key| key.eq_ignore_ascii_case("charset="))
                .map(|_| &part[8..])
        })
        .unwrap_or(hint)
        .trim()
        .trim_matches(|c| c == '"' || c == '\'');

    match Encoding::for_label(label.as_bytes()) {
        Some(encoding) => Ok(encoding),
        None => bail!("unknown charset: {}", label),
    }
}

/// Decodes `bytes`, using `hint` when given and byte-level detection otherwise.
pub fn decode(bytes: &[u8], hint: Option<&str>) -> Result<Input> {
    let guessed = match hint {
        Some(hint) => resolve_charset(hint)?,
        None => {
            let mut detector = chardetng::EncodingDetector::new();
            detector.feed(bytes, true);
            detector.guess(None, true)
        }
    };

    let (text, encoding, had_errors) = guessed.decode(bytes);
    Ok(Input {
        html: text.into_owned(),
        encoding,
        had_errors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_utf8() {
        let html = "<p>caf\u{e9}</p>";
        let input = decode(html.as_bytes(), None).unwrap();
        assert_eq!(input.html, html);
        assert_eq!(input.encoding, encoding_rs::UTF_8);
        assert!(!input.had_errors);
    }

    #[test]
    fn test_explicit_label() {
        let latin1: &[u8] = &[0x63, 0x61, 0x66, 0xe9];
        let input = decode(latin1, Some("iso-8859-1")).unwrap();
        assert_eq!(input.html, "caf\u{e9}");
    }

    #[test]
    fn test_content_type_hint() {
        let encoding = resolve_charset("text/html; Charset=\"Shift_JIS\"").unwrap();
        assert_eq!(encoding, encoding_rs::SHIFT_JIS);
    }

    #[test]
    fn test_unknown_charset_is_an_error() {
        let err = resolve_charset("not-a-charset").unwrap_err();
        assert_eq!(err.to_string(), "unknown charset: not-a-charset");
    }

    #[test]
    fn test_bom_overrides_hint() {
        let mut bytes = vec![0xef, 0xbb, 0xbf];
        bytes.extend_from_slice("<p>\u{e9}</p>".as_bytes());
        let input = decode(&bytes, Some("iso-8859-1")).unwrap();
        assert_eq!(input.encoding, encoding_rs::UTF_8);
        assert_eq!(input.html, "<p>\u{e9}</p>");
    }
}
