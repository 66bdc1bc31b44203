//! Sitemap model and XML rendering.

use crate::catalog::Catalog;
use serde::Serialize;
use std::fmt::Write as _;

pub const DEFAULT_BASE_URL: &str = "https://eggycaronline.org";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

/// Static pages in sitemap order: path suffix, change frequency, priority.
const STATIC_PAGES: &[(&str, ChangeFrequency, f32)] = &[
    ("", ChangeFrequency::Daily, 1.0),
    ("/about", ChangeFrequency::Monthly, 0.8),
    ("/privacy", ChangeFrequency::Yearly, 0.3),
    ("/terms", ChangeFrequency::Yearly, 0.3),
];

const GAME_FREQUENCY: ChangeFrequency = ChangeFrequency::Weekly;
const GAME_PRIORITY: f32 = 0.9;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SitemapError {
    #[error("base URL `{0}` must start with http:// or https://")]
    InvalidBaseUrl(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: String,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

/// Trim surrounding whitespace and trailing slashes, and require an HTTP(S) scheme.
///
/// # Errors
///
/// Returns [`SitemapError::InvalidBaseUrl`] for anything without an
/// `http://` or `https://` prefix and a host.
pub fn normalize_base_url(raw: &str) -> Result<String, SitemapError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let host = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"));
    match host {
        Some(rest) if !rest.is_empty() => Ok(trimmed.to_string()),
        _ => Err(SitemapError::InvalidBaseUrl(raw.to_string())),
    }
}

/// Static pages followed by one entry per catalog game, all stamped with
/// `last_modified` (a W3C datetime string).
///
/// # Errors
///
/// Returns an error if `base_url` is not a valid HTTP(S) URL.
pub fn build_sitemap(
    base_url: &str,
    catalog: &Catalog,
    last_modified: &str,
) -> Result<Vec<SitemapEntry>, SitemapError> {
    let base = normalize_base_url(base_url)?;
    let pages = STATIC_PAGES
        .iter()
        .map(|(path, change_frequency, priority)| SitemapEntry {
            url: format!("{base}{path}"),
            last_modified: last_modified.to_string(),
            change_frequency: *change_frequency,
            priority: *priority,
        });
    let games = catalog.games().iter().map(|game| SitemapEntry {
        url: format!("{base}{}", game.details_path()),
        last_modified: last_modified.to_string(),
        change_frequency: GAME_FREQUENCY,
        priority: GAME_PRIORITY,
    });
    Ok(pages.chain(games).collect())
}

fn escape_xml(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

/// Render entries as a sitemaps.org 0.9 `urlset` document.
#[must_use]
pub fn render_xml(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for entry in entries {
        let _ = write!(
            xml,
            "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n    <changefreq>{}</changefreq>\n    <priority>{:.1}</priority>\n  </url>\n",
            escape_xml(&entry.url),
            escape_xml(&entry.last_modified),
            entry.change_frequency.as_str(),
            entry.priority
        );
    }
    xml.push_str("</urlset>\n");
    xml
}
