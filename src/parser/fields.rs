//! Per-field extraction inside a single item/entry block.
//!
//! Each field is located independently with its own tag pattern. For text
//! fields the CDATA-wrapped form is tried before the plain inline form; the
//! patterns do not cross line breaks except for the whitespace around a
//! CDATA section.

use chrono::{SecondsFormat, Utc};
use lazy_static::lazy_static;
use regex::{Captures, Regex};

use super::entities::decode_entities;
use crate::types::{NO_LINK, UNTITLED};

lazy_static! {
    static ref RE_TITLE: Regex = Regex::new(
        r"(?i)<title[^>]*>\s*<!\[CDATA\[(.*?)\]\]>\s*</title>|<title[^>]*>(.*?)</title>"
    )
    .unwrap();
    static ref RE_LINK: Regex =
        Regex::new(r#"(?i)<link[^>]*>(.*?)</link>|<link[^>]*href=["'](.*?)["']"#).unwrap();
    static ref RE_DATE: Regex = Regex::new(
        r"(?i)<(?:pubDate|published|updated)[^>]*>(.*?)</(?:pubDate|published|updated)>"
    )
    .unwrap();
    static ref RE_SUMMARY: Regex = Regex::new(
        r"(?i)<(?:description|summary|content)[^>]*>\s*<!\[CDATA\[(.*?)\]\]>\s*</(?:description|summary|content)>|<(?:description|summary|content)[^>]*>(.*?)</(?:description|summary|content)>"
    )
    .unwrap();
    static ref RE_TAG: Regex = Regex::new(r"<[^>]*>").unwrap();
}

/// First non-empty capture among the pattern's alternatives.
fn first_capture<'t>(caps: &Captures<'t>) -> &'t str {
    caps.iter()
        .skip(1)
        .flatten()
        .map(|m| m.as_str())
        .find(|s| !s.is_empty())
        .unwrap_or("")
}

fn find_field<'t>(re: &Regex, block: &'t str) -> Option<&'t str> {
    re.captures(block).map(|caps| first_capture(&caps).trim())
}

/// Decoded title, or [`UNTITLED`] when missing or blank.
pub fn title(block: &str) -> String {
    match find_field(&RE_TITLE, block).map(decode_entities) {
        Some(t) if !t.trim().is_empty() => t,
        _ => UNTITLED.to_string(),
    }
}

/// RSS element text first, then an Atom `href`; anything that does not
/// start with `http` becomes [`NO_LINK`].
pub fn link(block: &str) -> String {
    match find_field(&RE_LINK, block) {
        Some(l) if l.starts_with("http") => l.to_string(),
        _ => NO_LINK.to_string(),
    }
}

/// Raw `pubDate`/`published`/`updated` text, or the current time.
pub fn published_at(block: &str) -> String {
    match find_field(&RE_DATE, block) {
        Some(d) if !d.is_empty() => d.to_string(),
        _ => Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}

/// Description/summary/content with tags stripped and entities decoded.
pub fn summary(block: &str) -> String {
    match find_field(&RE_SUMMARY, block) {
        Some(raw) => decode_entities(RE_TAG.replace_all(raw, "").trim()),
        None => String::new(),
    }
}
