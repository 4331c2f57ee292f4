//! Lenient RSS/Atom article extraction.
//!
//! This is a scanner, not an XML parser: truncated, mismatched or invalid
//! markup yields whatever articles can still be recognized, possibly none.

pub mod blocks;
pub mod entities;
pub mod fields;

pub use blocks::find_blocks;
pub use entities::decode_entities;

use crate::types::Article;

/// Extract up to `max_count` articles from raw feed text, in document order.
pub fn extract_articles(feed_text: &str, max_count: usize) -> Vec<Article> {
    let articles: Vec<Article> = find_blocks(feed_text)
        .take(max_count)
        .map(parse_block)
        .collect();

    tracing::debug!(
        count = articles.len(),
        max_count,
        input_len = feed_text.len(),
        "extracted articles"
    );
    articles
}

/// Build one article from a single item/entry block.
pub fn parse_block(block: &str) -> Article {
    Article {
        title: fields::title(block),
        link: fields::link(block),
        published_at: fields::published_at(block),
        summary: fields::summary(block),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RSS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Test Blog</title>
    <description>A test blog</description>
    <item>
      <title><![CDATA[Test Article 1]]></title>
      <link>https://example.com/article-1</link>
      <pubDate>Mon, 01 Jan 2024 12:00:00 GMT</pubDate>
      <description><![CDATA[This is test article 1 content]]></description>
    </item>
    <item>
      <title>Test Article 2</title>
      <link>https://example.com/article-2</link>
      <pubDate>Sun, 31 Dec 2023 12:00:00 GMT</pubDate>
      <description>This is test article 2 content</description>
    </item>
  </channel>
</rss>"#;

    const ATOM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Test Atom Feed</title>
  <entry>
    <title>Atom Article 1</title>
    <link href="https://example.com/atom-1"/>
    <published>2024-01-01T12:00:00Z</published>
    <summary>Atom article 1 summary</summary>
  </entry>
</feed>"#;

    fn numbered_items(n: usize) -> String {
        (1..=n)
            .map(|i| format!("<item><title>Item {}</title><link>https://example.com/{}</link></item>", i, i))
            .collect()
    }

    #[test]
    fn test_rss_items() {
        let articles = extract_articles(RSS, 5);
        assert_eq!(articles.len(), 2);

        assert_eq!(articles[0].title, "Test Article 1");
        assert_eq!(articles[0].link, "https://example.com/article-1");
        assert_eq!(articles[0].published_at, "Mon, 01 Jan 2024 12:00:00 GMT");
        assert_eq!(articles[0].summary, "This is test article 1 content");

        assert_eq!(articles[1].title, "Test Article 2");
        assert_eq!(articles[1].summary, "This is test article 2 content");
    }

    #[test]
    fn test_atom_entry() {
        let articles = extract_articles(ATOM, 5);
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "Atom Article 1");
        assert_eq!(articles[0].link, "https://example.com/atom-1");
        assert_eq!(articles[0].published_at, "2024-01-01T12:00:00Z");
        assert_eq!(articles[0].summary, "Atom article 1 summary");
    }

    #[test]
    fn test_max_count_bounds_result() {
        let feed = numbered_items(10);
        for max in [0, 1, 3, 10, 25] {
            let articles = extract_articles(&feed, max);
            assert_eq!(articles.len(), max.min(10));
            for (i, a) in articles.iter().enumerate() {
                assert_eq!(a.title, format!("Item {}", i + 1));
            }
        }
    }

    #[test]
    fn test_channel_title_is_not_an_article() {
        let articles = extract_articles(RSS, 5);
        assert!(articles.iter().all(|a| a.title != "Test Blog"));
    }

    #[test]
    fn test_garbage_yields_nothing() {
        assert!(extract_articles("", 5).is_empty());
        assert!(extract_articles("not a feed", 5).is_empty());
        assert!(extract_articles("<rss><channel><item><title>cut off", 5).is_empty());
        assert!(extract_articles("<<<>>></item><item", 5).is_empty());
    }

    #[test]
    fn test_malformed_item_still_yields_defaults() {
        let articles = extract_articles("<item><title>Broken<link>ftp://x</item>", 5);
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "Untitled");
        assert_eq!(articles[0].link, "#");
        assert_eq!(articles[0].summary, "");
    }
}
