//! Post and Author models

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::fields::{opt_string_or_vec, string_or_vec};
use crate::error::ContentError;
use crate::helpers::parse_date_string;

/// Author slug used when a post names no authors
pub const DEFAULT_AUTHOR: &str = "default";

/// Compiled body of a document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Unparsed markup source
    #[serde(default)]
    pub raw: String,

    /// Compiled renderable payload, handed to the renderer untouched
    #[serde(default)]
    pub code: String,
}

/// A post as it appears in a store snapshot, before date validation
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    pub date: String,
    #[serde(default)]
    pub lastmod: Option<String>,
    #[serde(default, deserialize_with = "string_or_vec")]
    pub authors: Vec<String>,
    #[serde(default, deserialize_with = "opt_string_or_vec")]
    pub images: Option<Vec<String>>,
    #[serde(default)]
    pub layout: Option<String>,
    #[serde(default)]
    pub draft: bool,
    #[serde(default, deserialize_with = "string_or_vec")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub structured_data: Option<Map<String, Value>>,
    #[serde(default)]
    pub body: Body,
    #[serde(default)]
    pub toc: Value,

    /// Fields the pipeline does not interpret
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// A blog post
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Unique lookup key, `/`-separated
    pub slug: String,

    /// Post title
    pub title: String,

    /// Short description
    pub summary: Option<String>,

    /// Publication date
    pub date: DateTime<Utc>,

    /// Last modification date
    pub lastmod: Option<DateTime<Utc>>,

    /// Author slugs, in display order
    pub authors: Vec<String>,

    /// Image references; `None` means the site banner is used
    pub images: Option<Vec<String>>,

    /// Layout identifier
    pub layout: Option<String>,

    /// Drafts are left out of the feed
    pub draft: bool,

    /// Post tags
    pub tags: Vec<String>,

    /// Pre-seeded linked-data description
    pub structured_data: Map<String, Value>,

    /// Compiled body
    pub body: Body,

    /// Table of contents, passed through
    pub toc: Value,

    /// Custom fields
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl TryFrom<PostRecord> for Post {
    type Error = ContentError;

    fn try_from(record: PostRecord) -> Result<Self, Self::Error> {
        let date = parse_date_field(&record.slug, "date", &record.date)?;
        let lastmod = record
            .lastmod
            .as_deref()
            .map(|value| parse_date_field(&record.slug, "lastmod", value))
            .transpose()?;

        Ok(Self {
            slug: record.slug,
            title: record.title,
            summary: record.summary,
            date,
            lastmod,
            authors: record.authors,
            images: record.images,
            layout: record.layout,
            draft: record.draft,
            tags: record.tags,
            structured_data: record.structured_data.unwrap_or_default(),
            body: record.body,
            toc: record.toc,
            extra: record.extra,
        })
    }
}

impl Post {
    /// Create a new post with minimal required fields
    pub fn new(slug: impl Into<String>, title: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            summary: None,
            date,
            lastmod: None,
            authors: Vec::new(),
            images: None,
            layout: None,
            draft: false,
            tags: Vec::new(),
            structured_data: Map::new(),
            body: Body::default(),
            toc: Value::Null,
            extra: IndexMap::new(),
        }
    }

    /// Modification time, falling back to the publication date
    pub fn modified(&self) -> DateTime<Utc> {
        self.lastmod.unwrap_or(self.date)
    }

    /// Author slugs, or the implicit default author when none are listed
    pub fn author_slugs(&self) -> Vec<&str> {
        if self.authors.is_empty() {
            vec![DEFAULT_AUTHOR]
        } else {
            self.authors.iter().map(String::as_str).collect()
        }
    }
}

fn parse_date_field(slug: &str, field: &'static str, value: &str) -> Result<DateTime<Utc>, ContentError> {
    parse_date_string(value).ok_or_else(|| ContentError::MalformedDate {
        slug: slug.to_string(),
        field,
        value: value.to_string(),
    })
}

/// A contributor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    /// Unique identifier referenced from `Post::authors`
    pub slug: String,

    /// Display name
    pub name: String,

    #[serde(default)]
    pub body: Body,

    /// Profile fields (avatar, occupation, links...), passed through
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl Author {
    pub fn new(slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            body: Body::default(),
            extra: IndexMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(yaml: &str) -> PostRecord {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_post_from_record() {
        let post = Post::try_from(record(
            r#"
slug: 2024/hello
title: Hello
date: 2024-01-15
lastmod: 2024-02-01T08:00:00Z
authors: alice
images: /static/a.png
tags: [rust, web]
readingTime: 3
"#,
        ))
        .unwrap();

        assert_eq!(post.slug, "2024/hello");
        assert_eq!(post.date, Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap());
        assert_eq!(
            post.modified(),
            Utc.with_ymd_and_hms(2024, 2, 1, 8, 0, 0).unwrap()
        );
        assert_eq!(post.authors, vec!["alice"]);
        assert_eq!(post.images, Some(vec!["/static/a.png".to_string()]));
        assert_eq!(post.tags, vec!["rust", "web"]);
        assert_eq!(post.extra.get("readingTime"), Some(&Value::from(3)));
        assert!(!post.draft);
    }

    #[test]
    fn test_images_unset_vs_empty() {
        let unset = record("slug: a\ntitle: A\ndate: 2024-01-01\n");
        assert_eq!(unset.images, None);

        let empty = record("slug: a\ntitle: A\ndate: 2024-01-01\nimages: []\n");
        assert_eq!(empty.images, Some(Vec::new()));

        let null = record("slug: a\ntitle: A\ndate: 2024-01-01\nimages: ~\n");
        assert_eq!(null.images, None);
    }

    #[test]
    fn test_malformed_date_is_an_error() {
        let err = Post::try_from(record("slug: broken\ntitle: B\ndate: someday\n")).unwrap_err();
        match err {
            ContentError::MalformedDate { slug, field, value } => {
                assert_eq!(slug, "broken");
                assert_eq!(field, "date");
                assert_eq!(value, "someday");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_malformed_lastmod_is_an_error() {
        let err = Post::try_from(record(
            "slug: broken\ntitle: B\ndate: 2024-01-01\nlastmod: soon\n",
        ))
        .unwrap_err();
        assert!(matches!(
            err,
            ContentError::MalformedDate { field: "lastmod", .. }
        ));
    }

    #[test]
    fn test_author_slugs_default() {
        let date = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut post = Post::new("a", "A", date);
        assert_eq!(post.author_slugs(), vec![DEFAULT_AUTHOR]);

        post.authors = vec!["bob".to_string(), "alice".to_string()];
        assert_eq!(post.author_slugs(), vec!["bob", "alice"]);
    }

    #[test]
    fn test_author_passthrough_fields() {
        let author: Author = serde_json::from_str(
            r#"{"slug":"default","name":"Tails Azimuth","avatar":"/static/images/avatar.png"}"#,
        )
        .unwrap();
        assert_eq!(author.name, "Tails Azimuth");
        assert_eq!(
            author.extra.get("avatar"),
            Some(&Value::from("/static/images/avatar.png"))
        );
    }
}
