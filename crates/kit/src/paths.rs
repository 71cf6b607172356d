// ABOUTME: Path builders for body-anchored XPath expressions and image asset paths.
// ABOUTME: Plain string concatenation, no validation of the inputs.

use once_cell::sync::Lazy;
use regex::Regex;

const BODY_PREFIX: &str = "/html/body//";
const IMAGE_PREFIX: &str = "images/";

// Optional dot, optional slash, optional slash.
static LEADING_AXIS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\.?/?/?").unwrap());

/// Turns a relative or descendant path into an absolute one rooted at `<body>`.
///
/// Leading `.`, `/` and `//` are dropped before prefixing, so `//div/span`,
/// `./div/span` and `div/span` all become `/html/body//div/span`.
pub fn xpath_from_body(path: &str) -> String {
    let relative = LEADING_AXIS.replace(path, "");
    format!("{}{}", BODY_PREFIX, relative)
}

/// Prefixes a file name with the image asset directory.
pub fn get_image_path(filename: &str) -> String {
    format!("{}{}", IMAGE_PREFIX, filename)
}
