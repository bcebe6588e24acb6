use anyhow::{bail, Context};
use chrono::NaiveDate;

/// Parsed pandoc-style metadata block plus the remaining Markdown body.
#[derive(Debug, Clone)]
pub(crate) struct Document {
    pub title: String,
    pub date: NaiveDate,
    pub tags: Vec<String>,
    pub excerpt: String,
    pub read_time: String,
    pub author: String,
    pub body: String,
}

pub(crate) fn parse(content: &str) -> anyhow::Result<Document> {
    // parsing pandoc-style metadata block
    let header_pattern = regex::RegexBuilder::new(r"^---\r?\n(.*?)---\r?\n(.*)")
        .dot_matches_new_line(true)
        .build()
        .unwrap();

    let Some(caps) = header_pattern.captures(content) else {
        bail!("missing metadata block");
    };

    let mut title = String::new();
    let mut date = None;
    let mut tags = vec![];
    let mut excerpt = String::new();
    let mut read_time = String::new();
    let mut author = String::new();

    let header = &caps[1];
    for line in header.split('\n') {
        if line.trim().is_empty() {
            continue;
        }
        // values may contain ':' (titles do), so split on the first one only
        let Some((name, value)) = line.split_once(':') else {
            bail!("Invalid header: {}", line);
        };

        let name = name.trim();
        let value = value.trim();
        match name {
            "title" => {
                title = value.to_string();
            }
            "tag" => {
                tags = value.split(',').map(|s| s.trim().to_string()).collect();
            }
            "date" => {
                date = Some(
                    NaiveDate::parse_from_str(value, "%Y-%m-%d").context("Invalid date format")?,
                );
            }
            "excerpt" => {
                excerpt = value.to_string();
            }
            "read-time" => {
                read_time = value.to_string();
            }
            "author" => {
                author = value.to_string();
            }
            _ => {}
        }
    }

    if title.is_empty() {
        bail!("missing title");
    }
    if author.is_empty() {
        bail!("missing author");
    }

    Ok(Document {
        title,
        date: date.context("missing date")?,
        tags,
        excerpt,
        read_time,
        author,
        body: caps[2].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_header() {
        let doc = parse(
            "---\n\
             title: Ports: A Field Guide\n\
             date: 2024-01-15\n\
             tag: networking, security\n\
             excerpt: Short summary.\n\
             read-time: 5 min read\n\
             author: Alaa Abuiteiwi\n\
             ---\n\
             # Body\n",
        )
        .unwrap();
        // the first ':' ends the key, the rest belongs to the value
        assert_eq!(doc.title, "Ports: A Field Guide");
        assert_eq!(doc.date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(doc.tags, vec!["networking", "security"]);
        assert_eq!(doc.excerpt, "Short summary.");
        assert_eq!(doc.read_time, "5 min read");
        assert_eq!(doc.author, "Alaa Abuiteiwi");
        assert_eq!(doc.body, "# Body\n");
    }

    #[test]
    fn accepts_crlf_fences() {
        let doc =
            parse("---\r\ntitle: T\r\ndate: 2024-01-02\r\nauthor: A\r\n---\r\nbody").unwrap();
        assert_eq!(doc.title, "T");
        assert_eq!(doc.body, "body");
    }

    #[test]
    fn header_stops_at_the_first_fence() {
        // a later "---" line inside the body must not extend the header
        let doc = parse("---\ntitle: T\ndate: 2024-01-02\nauthor: A\n---\nabove\n---\nbelow\n")
            .unwrap();
        assert_eq!(doc.body, "above\n---\nbelow\n");
    }

    #[test]
    fn rejects_missing_header() {
        assert!(parse("# Just a body\n").is_err());
    }

    #[test]
    fn rejects_missing_required_fields() {
        assert!(parse("---\ndate: 2024-01-02\nauthor: A\n---\nbody").is_err());
        assert!(parse("---\ntitle: T\nauthor: A\n---\nbody").is_err());
        assert!(parse("---\ntitle: T\ndate: 2024-01-02\n---\nbody").is_err());
    }

    #[test]
    fn rejects_a_bad_date() {
        assert!(parse("---\ntitle: T\ndate: Jan 2 2024\nauthor: A\n---\nbody").is_err());
    }
}
