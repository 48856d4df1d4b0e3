//! Ordered feed - the draft-filtered, newest-first listing of posts

use chrono::{DateTime, Utc};

use super::post::Post;
use super::projection::{CorePost, Project};

/// Projected posts, newest first
pub type OrderedFeed = Vec<CorePost>;

/// Anything that can be ordered by publication date
pub trait Dated {
    fn date(&self) -> DateTime<Utc>;
}

impl Dated for Post {
    fn date(&self) -> DateTime<Utc> {
        self.date
    }
}

impl Dated for CorePost {
    fn date(&self) -> DateTime<Utc> {
        self.date
    }
}

/// Feed construction options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeedOptions {
    /// Keep drafts in the feed (local preview)
    pub include_drafts: bool,
}

/// Sort by date, newest first; equal dates keep their relative order
pub fn sort_posts<T: Dated>(items: &mut [T]) {
    items.sort_by(|a, b| b.date().cmp(&a.date()));
}

/// Build the public feed: drafts removed, newest first, projected
pub fn ordered_feed(posts: &[Post]) -> OrderedFeed {
    ordered_feed_with(posts, FeedOptions::default())
}

/// Build the feed with explicit options
pub fn ordered_feed_with(posts: &[Post], options: FeedOptions) -> OrderedFeed {
    let mut visible: Vec<CorePost> = posts
        .iter()
        .filter(|p| options.include_drafts || !p.draft)
        .map(Project::project)
        .collect();
    sort_posts(&mut visible);
    visible
}

/// Posts of a feed carrying `tag`, compared by slugified form
pub fn posts_with_tag<'a>(feed: &'a [CorePost], tag: &str) -> Vec<&'a CorePost> {
    let wanted = slug::slugify(tag);
    feed.iter()
        .filter(|p| p.tags.iter().any(|t| slug::slugify(t) == wanted))
        .collect()
}
