//! Content module - posts, authors, and the content store they live in

mod feed;
mod fields;
pub mod loader;
mod post;
mod projection;
mod store;

pub use feed::{ordered_feed, ordered_feed_with, posts_with_tag, sort_posts, Dated, FeedOptions, OrderedFeed};
pub use post::{Author, Body, Post, PostRecord, DEFAULT_AUTHOR};
pub use projection::{project, CoreAuthor, CoreContent, CorePost, Project};
pub use store::ContentStore;
