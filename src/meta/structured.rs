//! Linked-data (schema.org) description of a post

use serde_json::{json, Map, Value};

use super::authors::ResolvedAuthor;
use crate::config::SiteConfig;
use crate::content::Post;
use crate::helpers::{absolute_url, iso_utc};

/// A JSON-LD object
pub type LinkedData = Map<String, Value>;

/// Seed the `BlogPosting` description for a post that arrived without one
pub fn seed_structured_data(post: &Post, config: &SiteConfig) -> LinkedData {
    let image = post
        .images
        .as_ref()
        .and_then(|images| images.first())
        .unwrap_or(&config.social_banner);

    let mut data = LinkedData::new();
    data.insert("@context".to_string(), json!("https://schema.org"));
    data.insert("@type".to_string(), json!("BlogPosting"));
    data.insert("headline".to_string(), json!(post.title));
    data.insert("datePublished".to_string(), json!(iso_utc(&post.date)));
    data.insert("dateModified".to_string(), json!(iso_utc(&post.modified())));
    if let Some(summary) = &post.summary {
        data.insert("description".to_string(), json!(summary));
    }
    data.insert("image".to_string(), json!(image));
    data.insert(
        "url".to_string(),
        json!(absolute_url(&config.url, &config.post_path(&post.slug))),
    );
    data
}

/// Add the resolved authors to a copy of the post's linked data
///
/// One `Person` per entry of the post's author list, in order. An author
/// missing from the store takes the site author's name, matching the page
/// metadata. The post itself is left untouched.
pub fn compose_structured_data(
    post: &Post,
    authors: &[ResolvedAuthor],
    config: &SiteConfig,
) -> LinkedData {
    let mut data = post.structured_data.clone();
    let people: Vec<Value> = authors
        .iter()
        .map(|author| {
            json!({
                "@type": "Person",
                "name": author.display_name(&config.author),
            })
        })
        .collect();
    data.insert("author".to_string(), Value::Array(people));
    data
}
