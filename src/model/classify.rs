//! Label classification
//!
//! Labels are scanned in order. Each label matches at most one prefix and a
//! later match overwrites an earlier one of the same category. The result is
//! the language feature if any, else the subsystem, else the resolution.

const AREA_PREFIX: &str = "area-";
const IDE_PREFIX: &str = "ide-";
const NEW_FEATURE_PREFIX: &str = "new feature - ";
const NEW_LANGUAGE_FEATURE_PREFIX: &str = "new language feature - ";
const RESOLUTION_PREFIX: &str = "resolution-";

/// Classify an issue from its label names
///
/// Prefix matching is ASCII case-insensitive and the prefix is stripped from
/// the returned value. Returns an empty string when nothing matches.
pub fn categorize<S: AsRef<str>>(labels: &[S]) -> String {
    let mut language_feature = "";
    let mut subsystem = "";
    let mut resolution = "";

    for label in labels {
        let label = label.as_ref();
        if let Some(rest) = strip_prefix_ignore_case(label, AREA_PREFIX) {
            subsystem = rest;
        } else if let Some(rest) = strip_prefix_ignore_case(label, IDE_PREFIX) {
            subsystem = rest;
        } else if let Some(rest) = strip_prefix_ignore_case(label, NEW_FEATURE_PREFIX) {
            language_feature = rest;
        } else if let Some(rest) = strip_prefix_ignore_case(label, NEW_LANGUAGE_FEATURE_PREFIX) {
            language_feature = rest;
        } else if let Some(rest) = strip_prefix_ignore_case(label, RESOLUTION_PREFIX) {
            resolution = rest;
        }
    }

    [language_feature, subsystem, resolution]
        .into_iter()
        .find(|value| !value.is_empty())
        .unwrap_or_default()
        .to_string()
}

fn strip_prefix_ignore_case<'a>(label: &'a str, prefix: &str) -> Option<&'a str> {
    let head = label.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        label.get(prefix.len()..)
    } else {
        None
    }
}
