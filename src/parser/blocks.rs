//! Best-effort block extractor.
//!
//! Finds `<item>...</item>` (RSS) and `<entry>...</entry>` (Atom) regions
//! in arbitrary text without requiring well-formed XML. Matching is
//! case-insensitive and non-greedy, so sibling blocks never merge and a
//! block with no closing tag is simply skipped.

use lazy_static::lazy_static;
use regex::{Matches, Regex};

lazy_static! {
    static ref RE_BLOCK: Regex =
        Regex::new(r"(?is)<(?:item|entry)\b.*?</(?:item|entry)\s*>").unwrap();
}

/// Iterator over the raw block substrings of a feed, in document order.
pub struct Blocks<'t> {
    inner: Matches<'static, 't>,
}

impl<'t> Iterator for Blocks<'t> {
    type Item = &'t str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|m| m.as_str())
    }
}

/// Scan `text` for item/entry blocks.
pub fn find_blocks(text: &str) -> Blocks<'_> {
    let re: &'static Regex = &RE_BLOCK;
    Blocks {
        inner: re.find_iter(text),
    }
}
