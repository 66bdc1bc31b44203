use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));
static DISALLOWED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9-]").expect("slug charset pattern is valid"));

/// URL slug for a game title.
///
/// Lowercases, turns each whitespace run into a single `-` and drops every
/// character outside `[a-z0-9-]`. Punctuation between spaces therefore leaves
/// a double dash (`"Tips & Tricks"` becomes `"tips--tricks"`); detail routes
/// and the sitemap both rely on this exact form.
#[must_use]
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let dashed = WHITESPACE_RUN.replace_all(&lowered, "-");
    DISALLOWED.replace_all(&dashed, "").into_owned()
}
