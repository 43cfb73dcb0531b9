use regex::Regex;

fn external_reference_patterns() -> &'static [Regex] {
    use std::sync::OnceLock;

    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS
        .get_or_init(|| {
            vec![
                Regex::new(r"(?i)^https?://").expect("invalid http(s) regex"),
                Regex::new(r"^//").expect("invalid protocol-relative regex"),
                Regex::new(r"(?i)^data:").expect("invalid data URI regex"),
            ]
        })
        .as_slice()
}

/// Determine whether an asset reference already points somewhere else.
///
/// Absolute URLs, protocol-relative URLs and data URIs are deliberately
/// left untouched by resolution; rewriting them onto an asset host would
/// produce broken links.
pub fn is_external_reference(value: &str) -> bool {
    external_reference_patterns()
        .iter()
        .any(|pattern| pattern.is_match(value))
}
