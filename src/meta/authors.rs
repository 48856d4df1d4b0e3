//! Author resolution

use serde::Serialize;

use crate::content::{Author, CoreAuthor, Post, Project};

/// One entry of a post's author list, found or not
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedAuthor {
    /// Slug as written in the post
    pub slug: String,

    /// Author record, `None` when the slug is not in the store
    pub details: Option<CoreAuthor>,
}

impl ResolvedAuthor {
    /// Display name of a found author
    pub fn name(&self) -> Option<&str> {
        self.details.as_ref().map(|a| a.name.as_str())
    }

    /// Display name, or `fallback` for an unknown author
    pub fn display_name<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.name().unwrap_or(fallback)
    }
}

/// Look up each of a post's authors, in order
///
/// Unknown slugs are kept with no details so downstream consumers can
/// still account for them.
pub fn resolve_authors(post: &Post, authors: &[Author]) -> Vec<ResolvedAuthor> {
    post.author_slugs()
        .into_iter()
        .map(|slug| {
            let details = authors.iter().find(|a| a.slug == slug).map(Project::project);
            if details.is_none() {
                tracing::warn!("Post '{}' references unknown author '{}'", post.slug, slug);
            }
            ResolvedAuthor {
                slug: slug.to_string(),
                details,
            }
        })
        .collect()
}
