//! List the ordered feed

use anyhow::Result;

use crate::content::{ordered_feed_with, posts_with_tag, CorePost, FeedOptions};
use crate::Site;

/// Print the feed, optionally filtered by tag and truncated
pub fn run(site: &Site, tag: Option<&str>, limit: Option<usize>) -> Result<()> {
    let store = site.load_store()?;
    let feed = ordered_feed_with(
        store.posts(),
        FeedOptions {
            include_drafts: site.config.render_drafts,
        },
    );

    let posts: Vec<&CorePost> = match tag {
        Some(tag) => posts_with_tag(&feed, tag),
        None => feed.iter().collect(),
    };
    let shown = limit.unwrap_or(posts.len()).min(posts.len());

    println!("Posts ({}):", posts.len());
    for post in &posts[..shown] {
        println!(
            "  {} - {} [{}]{}",
            post.date.format("%Y-%m-%d"),
            post.title,
            post.slug,
            if post.draft { " (draft)" } else { "" }
        );
    }

    Ok(())
}
