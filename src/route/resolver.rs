//! Slug resolution with previous/next neighbours

use crate::content::{ordered_feed_with, CorePost, FeedOptions, OrderedFeed, Post};
use crate::helpers::decode_uri;

/// A post found by slug, with its neighbours in the feed
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<'a> {
    pub post: &'a Post,
    /// Next older post
    pub prev: Option<CorePost>,
    /// Next newer post
    pub next: Option<CorePost>,
}

/// Resolves path segments against a set of posts
///
/// The ordered feed is built once and reused for every lookup.
pub struct Resolver<'a> {
    posts: &'a [Post],
    feed: OrderedFeed,
}

impl<'a> Resolver<'a> {
    /// Create a resolver over the public feed
    pub fn new(posts: &'a [Post]) -> Self {
        Self::with_options(posts, FeedOptions::default())
    }

    pub fn with_options(posts: &'a [Post], options: FeedOptions) -> Self {
        Self {
            posts,
            feed: ordered_feed_with(posts, options),
        }
    }

    /// The ordered feed neighbours are taken from
    pub fn feed(&self) -> &[CorePost] {
        &self.feed
    }

    /// Look up a post by its path segments
    ///
    /// Returns `None` when no post matches. A post outside the feed (a
    /// draft) still resolves, with no neighbours.
    pub fn resolve<S: AsRef<str>>(&self, segments: &[S]) -> Option<Resolved<'a>> {
        let slug = slug_from_segments(segments)?;
        let post = self.posts.iter().find(|p| p.slug == slug)?;

        let (prev, next) = match self.feed.iter().position(|p| p.slug == slug) {
            Some(index) => (
                self.feed.get(index + 1).cloned(),
                index
                    .checked_sub(1)
                    .and_then(|i| self.feed.get(i))
                    .cloned(),
            ),
            None => {
                tracing::debug!("Post '{}' is not in the feed, resolving without neighbours", slug);
                (None, None)
            }
        };

        Some(Resolved { post, prev, next })
    }
}

/// Look up a post by its path segments against the public feed
pub fn resolve<'a, S: AsRef<str>>(segments: &[S], posts: &'a [Post]) -> Option<Resolved<'a>> {
    Resolver::new(posts).resolve(segments)
}

/// Join segments with `/` and percent-decode the result once
///
/// `None` when the decoded bytes are not valid UTF-8; such a path cannot
/// name any post.
pub fn slug_from_segments<S: AsRef<str>>(segments: &[S]) -> Option<String> {
    let joined = segments
        .iter()
        .map(|segment| segment.as_ref())
        .collect::<Vec<&str>>()
        .join("/");
    decode_uri(&joined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn post(slug: &str, y: i32, m: u32, d: u32) -> Post {
        Post::new(slug, slug, Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap())
    }

    fn store() -> Vec<Post> {
        // Feed order: p0 (newest), p1, p2 (oldest)
        vec![
            post("p1", 2024, 2, 1),
            post("p2", 2024, 1, 1),
            post("p0", 2024, 3, 1),
        ]
    }

    fn slug_of(p: &Option<CorePost>) -> Option<&str> {
        p.as_ref().map(|p| p.slug.as_str())
    }

    #[test]
    fn test_resolve_every_post() {
        let posts = store();
        for p in &posts {
            let resolved = resolve(&[p.slug.as_str()], &posts).unwrap();
            assert_eq!(resolved.post, p);
        }
    }

    #[test]
    fn test_not_found() {
        let posts = store();
        assert!(resolve(&["missing"], &posts).is_none());
        assert!(resolve(&["P1"], &posts).is_none());
        assert!(resolve::<&str>(&[], &posts).is_none());
    }

    #[test]
    fn test_neighbours() {
        let posts = store();
        let resolver = Resolver::new(&posts);

        let middle = resolver.resolve(&["p1"]).unwrap();
        assert_eq!(slug_of(&middle.prev), Some("p2"));
        assert_eq!(slug_of(&middle.next), Some("p0"));

        let newest = resolver.resolve(&["p0"]).unwrap();
        assert_eq!(slug_of(&newest.next), None);
        assert_eq!(slug_of(&newest.prev), Some("p1"));

        let oldest = resolver.resolve(&["p2"]).unwrap();
        assert_eq!(slug_of(&oldest.prev), None);
        assert_eq!(slug_of(&oldest.next), Some("p1"));
    }

    #[test]
    fn test_draft_resolves_without_neighbours() {
        let mut posts = store();
        let mut draft = post("wip", 2024, 2, 15);
        draft.draft = true;
        posts.push(draft);

        let resolved = resolve(&["wip"], &posts).unwrap();
        assert!(resolved.post.draft);
        assert!(resolved.prev.is_none());
        assert!(resolved.next.is_none());

        // Drafts do not appear as neighbours either
        let p0 = resolve(&["p0"], &posts).unwrap();
        assert_eq!(slug_of(&p0.prev), Some("p1"));
    }

    #[test]
    fn test_nested_and_encoded_segments() {
        let posts = vec![post("2024/你好 世界", 2024, 1, 1)];

        assert!(resolve(&["2024", "你好 世界"], &posts).is_some());
        assert!(resolve(&["2024", "%E4%BD%A0%E5%A5%BD%20%E4%B8%96%E7%95%8C"], &posts).is_some());
        assert!(resolve(&["2024%2F你好 世界"], &posts).is_none());
    }

    #[test]
    fn test_invalid_encoding_is_not_found() {
        let posts = store();
        assert!(resolve(&["p1%FF"], &posts).is_none());
    }
}
