use anyhow::Context;

use crate::article::Article;
use crate::frontmatter;

// slug / Markdown source; the path under posts/ mirrors the slug
static SOURCES: &[(&str, &str)] = &[
    (
        "2024/01/the-evolution-of-ransomware",
        include_str!("../posts/2024/01/the-evolution-of-ransomware.md"),
    ),
    (
        "2024/01/building-secure-apis",
        include_str!("../posts/2024/01/building-secure-apis.md"),
    ),
    (
        "2024/01/container-security-production",
        include_str!("../posts/2024/01/container-security-production.md"),
    ),
];

/// Parses every embedded source into an article.
pub(crate) fn builtin() -> anyhow::Result<Vec<Article>> {
    SOURCES
        .iter()
        .map(|&(slug, raw)| {
            let doc = frontmatter::parse(raw)
                .with_context(|| format!("while preprocessing {:?}", slug))?;
            Ok(Article {
                slug: slug.to_string(),
                title: doc.title,
                date: doc.date,
                excerpt: doc.excerpt,
                read_time: doc.read_time,
                tags: doc.tags,
                author: doc.author,
                body: doc.body,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_embedded_source_parses() {
        let articles = builtin().unwrap();
        assert_eq!(articles.len(), SOURCES.len());
        for article in &articles {
            assert!(!article.title.is_empty());
            assert!(!article.body.is_empty());
            assert!(!article.tags.is_empty());
        }
    }
}
