//! Core content projection
//!
//! The renderer only ever sees projected records: the raw markup source,
//! the compiled body and the store's bookkeeping fields (`_id`, `_raw`)
//! are left behind. The compiled body is handed over separately.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};

use super::post::{Author, Post};

/// Reduce a record to its render-safe, serializable subset
pub trait Project {
    type Core: Serialize + Clone;

    fn project(&self) -> Self::Core;
}

/// The projected form of `T`
pub type CoreContent<T> = <T as Project>::Core;

/// Project any record
pub fn project<T: Project>(entity: &T) -> CoreContent<T> {
    entity.project()
}

/// Projected post
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CorePost {
    pub slug: String,
    pub title: String,
    pub summary: Option<String>,
    pub date: DateTime<Utc>,
    pub lastmod: Option<DateTime<Utc>>,
    pub authors: Vec<String>,
    pub images: Option<Vec<String>>,
    pub layout: Option<String>,
    pub draft: bool,
    pub tags: Vec<String>,
    pub structured_data: Map<String, Value>,
    pub toc: Value,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// Projected author
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoreAuthor {
    pub slug: String,
    pub name: String,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl Project for Post {
    type Core = CorePost;

    fn project(&self) -> CorePost {
        CorePost {
            slug: self.slug.clone(),
            title: self.title.clone(),
            summary: self.summary.clone(),
            date: self.date,
            lastmod: self.lastmod,
            authors: self.authors.clone(),
            images: self.images.clone(),
            layout: self.layout.clone(),
            draft: self.draft,
            tags: self.tags.clone(),
            structured_data: self.structured_data.clone(),
            toc: self.toc.clone(),
            extra: public_fields(&self.extra),
        }
    }
}

impl Project for Author {
    type Core = CoreAuthor;

    fn project(&self) -> CoreAuthor {
        CoreAuthor {
            slug: self.slug.clone(),
            name: self.name.clone(),
            extra: public_fields(&self.extra),
        }
    }
}

/// Drop store bookkeeping fields (`_id`, `_raw`, ...)
fn public_fields(extra: &IndexMap<String, Value>) -> IndexMap<String, Value> {
    extra
        .iter()
        .filter(|(key, _)| !key.starts_with('_'))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
