//! Static path enumeration

use crate::content::Post;
use crate::helpers::decode_uri;

/// Path segments of every post to pre-render, in store order
///
/// Drafts are included. Each `/`-separated segment is decoded on its
/// own; a segment that does not decode to UTF-8 is kept verbatim.
pub fn enumerate_slugs(posts: &[Post]) -> Vec<Vec<String>> {
    posts
        .iter()
        .map(|post| {
            post.slug
                .split('/')
                .map(|segment| {
                    decode_uri(segment).unwrap_or_else(|| {
                        tracing::warn!("Slug '{}' has an undecodable segment", post.slug);
                        segment.to_string()
                    })
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ordered_feed;
    use crate::route::resolve;
    use chrono::{TimeZone, Utc};

    fn post(slug: &str, y: i32, m: u32, d: u32) -> Post {
        Post::new(slug, slug, Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap())
    }

    #[test]
    fn test_enumeration_is_draft_agnostic() {
        let mut b = post("b", 2024, 6, 1);
        b.draft = true;
        let posts = vec![post("a", 2024, 1, 1), b, post("c", 2024, 3, 1)];

        let feed: Vec<_> = ordered_feed(&posts).into_iter().map(|p| p.slug).collect();
        assert_eq!(feed, vec!["c", "a"]);

        assert_eq!(
            enumerate_slugs(&posts),
            vec![vec!["a"], vec!["b"], vec!["c"]]
        );
    }

    #[test]
    fn test_nested_slugs_split() {
        let posts = vec![post("guides/rust/intro", 2024, 1, 1)];
        assert_eq!(enumerate_slugs(&posts), vec![vec!["guides", "rust", "intro"]]);
    }

    #[test]
    fn test_enumerated_paths_resolve_to_their_post() {
        let posts = vec![
            post("hello", 2024, 1, 1),
            post("2024/日本語", 2024, 2, 1),
            post("deep/nested/path", 2024, 3, 1),
        ];

        for (segments, p) in enumerate_slugs(&posts).iter().zip(&posts) {
            assert_eq!(segments.join("/"), p.slug);
            let resolved = resolve(segments.as_slice(), &posts).unwrap();
            assert_eq!(resolved.post.slug, p.slug);
        }
    }

    #[test]
    fn test_empty_store() {
        assert!(enumerate_slugs(&[]).is_empty());
    }
}
