//! In-memory content store

use std::collections::HashSet;

use super::post::{Author, Post};
use crate::error::ContentError;

/// The parsed post and author collections for one generation pass
///
/// Read-only once built; every pipeline step borrows from it.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    posts: Vec<Post>,
    authors: Vec<Author>,
}

impl ContentStore {
    /// Build a store, rejecting duplicate post slugs
    pub fn new(posts: Vec<Post>, authors: Vec<Author>) -> Result<Self, ContentError> {
        let mut seen = HashSet::new();
        for post in &posts {
            if !seen.insert(post.slug.as_str()) {
                return Err(ContentError::DuplicateSlug(post.slug.clone()));
            }
        }

        Ok(Self { posts, authors })
    }

    /// All posts, drafts included, in store order
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    /// Find a post by its exact slug
    pub fn find_post(&self, slug: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.slug == slug)
    }

    /// Find an author by slug
    pub fn find_author(&self, slug: &str) -> Option<&Author> {
        self.authors.iter().find(|a| a.slug == slug)
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn post(slug: &str) -> Post {
        Post::new(slug, slug, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let err = ContentStore::new(vec![post("a"), post("b"), post("a")], Vec::new()).unwrap_err();
        assert!(matches!(err, ContentError::DuplicateSlug(ref s) if s == "a"));
    }

    #[test]
    fn test_lookups() {
        let store = ContentStore::new(
            vec![post("a"), post("nested/b")],
            vec![Author::new("default", "Site Owner")],
        )
        .unwrap();

        assert_eq!(store.find_post("nested/b").map(|p| p.slug.as_str()), Some("nested/b"));
        assert!(store.find_post("Nested/B").is_none());
        assert_eq!(store.find_author("default").map(|a| a.name.as_str()), Some("Site Owner"));
        assert!(store.find_author("ghost").is_none());
    }
}
