//! One-time DOM annotations applied at startup. Each helper is idempotent:
//! feeding its own output back in changes nothing.

pub const SAFE_REL_TOKENS: [&str; 2] = ["noopener", "noreferrer"];

/// `true` for links that leave the page over http(s).
pub fn is_external_href(href: &str) -> bool {
    let lower = href.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Merge the safety tokens into an existing `rel` value, keeping any tokens
/// the author already set.
pub fn external_rel(existing: Option<&str>) -> String {
    let mut tokens: Vec<&str> = existing
        .map(|s| s.split_ascii_whitespace().collect())
        .unwrap_or_default();
    for safe in SAFE_REL_TOKENS {
        if !tokens.iter().any(|t| t.eq_ignore_ascii_case(safe)) {
            tokens.push(safe);
        }
    }
    tokens.join(" ")
}

/// Loading hint for an image. An explicit `eager` is left alone.
pub fn lazy_loading_hint(existing: Option<&str>) -> Option<&'static str> {
    match existing {
        Some(v) if v.eq_ignore_ascii_case("eager") => None,
        Some(v) if v.eq_ignore_ascii_case("lazy") => None,
        _ => Some("lazy"),
    }
}

pub fn footer_text(year: i32, owner: &str) -> String {
    format!("© {year} {owner}. All rights reserved.")
}
