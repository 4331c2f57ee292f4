//! HTML character reference decoding.
//!
//! Only a fixed table of references is decoded; anything else (including
//! numeric references other than `&#39;`) is left untouched.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref RE_ENTITY: Regex = Regex::new(r"&[#\w]+;").unwrap();
}

fn lookup(entity: &str) -> Option<&'static str> {
    match entity {
        "&amp;" => Some("&"),
        "&lt;" => Some("<"),
        "&gt;" => Some(">"),
        "&quot;" => Some("\""),
        "&#39;" | "&apos;" => Some("'"),
        "&nbsp;" => Some(" "),
        _ => None,
    }
}

/// Decode the known character references in `text`.
pub fn decode_entities(text: &str) -> String {
    RE_ENTITY
        .replace_all(text, |caps: &Captures| {
            let entity = &caps[0];
            lookup(entity).unwrap_or(entity).to_string()
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_entities() {
        assert_eq!(
            decode_entities("Tom &amp; Jerry &lt;3 &quot;hi&quot; it&#39;s&nbsp;&apos;ok&apos; &gt;"),
            "Tom & Jerry <3 \"hi\" it's 'ok' >"
        );
    }

    #[test]
    fn test_unknown_entities_untouched() {
        assert_eq!(decode_entities("&copy; &#8217; &bogus;"), "&copy; &#8217; &bogus;");
    }

    #[test]
    fn test_single_pass() {
        // &amp;lt; decodes once, to the literal text "&lt;"
        assert_eq!(decode_entities("&amp;lt;"), "&lt;");
    }

    #[test]
    fn test_bare_ampersand() {
        assert_eq!(decode_entities("A & B"), "A & B");
    }
}
