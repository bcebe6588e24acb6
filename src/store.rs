use std::collections::{BTreeSet, HashMap, HashSet};

use anyhow::bail;
use log::{debug, info};

use crate::article::{is_valid_slug, Article};
use crate::posts;

/// How many entries `related` returns at most.
const RELATED_LIMIT: usize = 3;

/// Read-only collection of articles. Built once, queried forever: every
/// operation is a pure synchronous function, so a shared reference can be
/// used from any handler without coordination.
///
/// Articles are held in the canonical listing order (date descending,
/// insertion order on equal dates), which every filtering operation
/// preserves by construction.
#[derive(Debug)]
pub struct ArticleStore {
    articles: Vec<Article>,
    by_slug: HashMap<String, usize>,
}

/// Filter for the blog listing view. Both conditions are optional and
/// combine with AND; the default value matches everything.
#[derive(Debug, Clone, Default)]
pub struct SearchFilter {
    /// Case-insensitive substring, checked against title, excerpt and tags.
    /// `None` or an empty string matches every article.
    pub text: Option<String>,
    /// Exact tag, matched like `ArticleStore::with_tag`.
    pub tag: Option<String>,
}

impl SearchFilter {
    pub fn matches(&self, article: &Article) -> bool {
        let matches_text = match self.text.as_deref() {
            None | Some("") => true,
            Some(text) => {
                let needle = text.to_lowercase();
                article.title.to_lowercase().contains(&needle)
                    || article.excerpt.to_lowercase().contains(&needle)
                    || article
                        .tags
                        .iter()
                        .any(|t| t.to_lowercase().contains(&needle))
            }
        };
        let matches_tag = match self.tag.as_deref() {
            None => true,
            Some(tag) => article.has_tag(tag),
        };
        matches_text && matches_tag
    }
}

impl ArticleStore {
    /// Validates the collection and fixes the canonical order. The data
    /// invariants are checked here once so the query operations never have
    /// to re-establish them.
    pub fn new(mut articles: Vec<Article>) -> anyhow::Result<Self> {
        for article in &articles {
            if !is_valid_slug(&article.slug) {
                bail!("invalid slug: {:?}", article.slug);
            }
            let mut seen = HashSet::new();
            for tag in &article.tags {
                if !seen.insert(tag.as_str()) {
                    bail!("duplicate tag {:?} in {}", tag, article.slug);
                }
            }
            debug!("registered {}", article.slug);
        }

        // ordering by date(descending); a stable sort keeps equal dates in
        // insertion order
        articles.sort_by(|a, b| b.date.cmp(&a.date));

        let mut by_slug = HashMap::new();
        for (idx, article) in articles.iter().enumerate() {
            if by_slug.insert(article.slug.clone(), idx).is_some() {
                bail!("duplicate slug: {}", article.slug);
            }
        }

        info!("article store ready ({} articles)", articles.len());
        Ok(Self { articles, by_slug })
    }

    /// Store over the sources embedded in the crate.
    pub fn builtin() -> anyhow::Result<Self> {
        Self::new(posts::builtin()?)
    }

    /// Every article, newest first.
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Exact slug lookup. A miss is a normal outcome (callers typically
    /// redirect to the listing page), so it is `None` rather than an error.
    pub fn by_slug(&self, slug: &str) -> Option<&Article> {
        self.by_slug.get(slug).map(|&idx| &self.articles[idx])
    }

    /// Articles carrying `tag`, matched case-insensitively.
    pub fn with_tag(&self, tag: &str) -> Vec<&Article> {
        self.articles.iter().filter(|a| a.has_tag(tag)).collect()
    }

    /// Articles whose slug year segment equals `year`.
    pub fn in_year(&self, year: &str) -> Vec<&Article> {
        self.articles.iter().filter(|a| a.year() == year).collect()
    }

    /// Distinct tags across the collection, ascending. The union is
    /// case-sensitive: tags are stored lowercase and displayed as stored.
    pub fn tags(&self) -> Vec<&str> {
        self.articles
            .iter()
            .flat_map(|a| a.tags.iter().map(String::as_str))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn search(&self, filter: &SearchFilter) -> Vec<&Article> {
        self.articles.iter().filter(|a| filter.matches(a)).collect()
    }

    /// Up to three other articles sharing at least one tag with `article`,
    /// in listing order. No ranking beyond order of appearance.
    pub fn related(&self, article: &Article) -> Vec<&Article> {
        self.articles
            .iter()
            .filter(|a| a.slug != article.slug && a.shares_tag_with(article))
            .take(RELATED_LIMIT)
            .collect()
    }

    /// The `n` newest articles (the landing page shows the top three).
    pub fn recent(&self, n: usize) -> &[Article] {
        &self.articles[..n.min(self.articles.len())]
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}
