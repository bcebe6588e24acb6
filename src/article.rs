use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// A single blog article. The collection is fixed at construction and every
/// record stays immutable afterwards, so all fields are plain owned data.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Article {
    /// `year/month/kebab-case-title`, unique across the collection.
    pub slug: String,
    pub title: String,
    pub date: chrono::NaiveDate,
    pub excerpt: String,
    /// Display string ("8 min read"), never computed.
    pub read_time: String,
    /// Lowercase labels in display order, unique within one article.
    pub tags: Vec<String>,
    pub author: String,
    /// Markdown source, opaque to this crate.
    pub body: String,
}

// year 4 digits / month 2 digits / lowercase kebab-case title
static SLUG_PATTERN: OnceLock<Regex> = OnceLock::new();

fn slug_pattern() -> &'static Regex {
    SLUG_PATTERN
        .get_or_init(|| Regex::new(r"^\d{4}/\d{2}/[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap())
}

pub(crate) fn is_valid_slug(slug: &str) -> bool {
    slug_pattern().is_match(slug)
}

impl Article {
    /// First slug segment. Derived, not stored.
    pub fn year(&self) -> &str {
        self.slug.split('/').next().unwrap_or("")
    }

    /// Second slug segment.
    pub fn month(&self) -> &str {
        self.slug.split('/').nth(1).unwrap_or("")
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    pub fn shares_tag_with(&self, other: &Article) -> bool {
        other.tags.iter().any(|t| self.has_tag(t))
    }
}
