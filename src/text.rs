//! Text helpers for page content
//!
//! Slug generation, contact form email checks and display formatting. The email
//! and slug rules are deliberately permissive and must stay that way: the
//! contact page accepts anything shaped like `local@domain.tld`.

use regex::Regex;
use std::sync::LazyLock;

/// Whitespace as browsers define it for `\s` and `String.prototype.trim`
///
/// Unlike Unicode `White_Space` it includes U+FEFF and excludes U+0085.
const WEB_WHITESPACE: &str =
    r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("[{}]+", WEB_WHITESPACE)).expect("whitespace pattern is valid")
});

static INVALID_SLUG_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\-_]").expect("slug charset pattern is valid"));

static HYPHEN_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-+").expect("hyphen pattern is valid"));

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    let local = format!("[^{}@]+", WEB_WHITESPACE);
    Regex::new(&format!(r"^{local}@{local}\.{local}$")).expect("email pattern is valid")
});

fn is_web_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | ' ' | '\u{A0}' | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}' | '\u{2029}' | '\u{202F}' | '\u{205F}' | '\u{3000}' | '\u{FEFF}'
    )
}

fn web_trim(text: &str) -> &str {
    text.trim_matches(is_web_whitespace)
}

/// Turn arbitrary text into a URL slug
///
/// Lowercases, trims, turns whitespace runs into `-`, drops everything outside
/// `[a-z0-9_-]`, collapses hyphen runs and strips hyphens from both ends.
/// Non-ASCII letters are dropped rather than transliterated.
///
/// # Examples
/// ```
/// use floral_site::normalize_slug;
///
/// assert_eq!(normalize_slug("Star of Bethlehem"), "star-of-bethlehem");
/// assert_eq!(normalize_slug("  Wild Oat  "), "wild-oat");
/// assert_eq!(normalize_slug("Version 2.0"), "version-20");
/// assert_eq!(normalize_slug("!@#$%^&*()"), "");
/// ```
pub fn normalize_slug(text: &str) -> String {
    let lowered = text.to_lowercase();
    let hyphenated = WHITESPACE_RUN.replace_all(web_trim(&lowered), "-");
    let filtered = INVALID_SLUG_CHARS.replace_all(&hyphenated, "");
    let collapsed = HYPHEN_RUN.replace_all(&filtered, "-");
    collapsed.trim_matches('-').to_string()
}

/// Check that a string looks like an email address
///
/// Surrounding whitespace is ignored. The check only requires one `@`, no
/// whitespace, and a dot somewhere inside the domain part, so addresses such as
/// `user..name@example.com` pass.
///
/// # Examples
/// ```
/// use floral_site::validate_email;
///
/// assert!(validate_email("  user@example.com  "));
/// assert!(validate_email("user..name@example.com"));
/// assert!(!validate_email("double@@domain.com"));
/// assert!(!validate_email("missing@domain"));
/// ```
pub fn validate_email(email: &str) -> bool {
    EMAIL.is_match(web_trim(email))
}

/// Uppercase the first character and lowercase the rest
///
/// # Examples
/// ```
/// use floral_site::capitalize;
///
/// assert_eq!(capitalize("mIxEd"), "Mixed");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
    }
}

/// Shorten text to `max_len` characters, adding `...` when it was cut
///
/// The kept prefix is trimmed before the ellipsis so no whitespace sits in
/// front of it. Lengths count characters, not bytes.
///
/// # Examples
/// ```
/// use floral_site::truncate;
///
/// assert_eq!(truncate("Short text", 20), "Short text");
/// assert_eq!(truncate("This is a long text that needs to be truncated", 10), "This is a...");
/// ```
pub fn truncate(text: &str, max_len: usize) -> String {
    match text.char_indices().nth(max_len) {
        None => text.to_string(),
        Some((cut, _)) => format!("{}...", web_trim(&text[..cut])),
    }
}
