use once_cell::sync::Lazy;
use regex::Regex;

/// Compiled tag-recognition pattern: `[=]?<digits>.<digits>[:<digits>][-<component>]`.
///
/// The component is one or more alphanumeric runs joined by single hyphens,
/// so multi-part components (`KOMP-123`) land in one match and a match
/// never ends on a dangling hyphen. Matches without a component are kept at
/// this stage; the normalizer is the one that drops them.
static TAG_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"=?\d+\.\d+(?::\d+)?(?:-[A-Za-z0-9]+(?:-[A-Za-z0-9]+)*)?")
        .expect("tag pattern is valid")
});

/// Scans a block of text, yielding each raw match with its byte range.
pub(crate) fn scan_text(text: &str) -> impl Iterator<Item = (usize, usize, &str)> {
    TAG_PATTERN
        .find_iter(text)
        .map(|m| (m.start(), m.end(), m.as_str()))
}
