//! Page metadata for search engines and social previews

use serde::Serialize;

use super::authors::{resolve_authors, ResolvedAuthor};
use crate::config::SiteConfig;
use crate::content::{Author, Post};
use crate::helpers::{absolute_url, iso_utc};

/// Everything the hosting page needs to describe a post
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub title: String,
    pub description: Option<String>,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
}

/// OpenGraph article description
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph {
    pub title: String,
    pub description: Option<String>,
    pub site_name: String,
    pub locale: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub published_time: String,
    pub modified_time: String,
    pub url: String,
    pub images: Vec<OgImage>,
    pub authors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OgImage {
    pub url: String,
}

/// Twitter card description
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TwitterCard {
    pub card: String,
    pub title: String,
    pub description: Option<String>,
    pub images: Vec<String>,
}

/// Image references of a post, falling back to the site banner
///
/// An unset field gives the banner; a present list (even an empty one)
/// is used as-is.
pub fn image_list(post: &Post, config: &SiteConfig) -> Vec<String> {
    match &post.images {
        Some(images) => images.clone(),
        None => vec![config.social_banner.clone()],
    }
}

/// Derive metadata for a resolved post
///
/// `None` in gives `None` out, so a not-found lookup passes straight
/// through without touching the author store.
pub fn derive_metadata(
    post: Option<&Post>,
    authors: &[Author],
    config: &SiteConfig,
) -> Option<PageMetadata> {
    let post = post?;
    let resolved = resolve_authors(post, authors);
    Some(metadata_for(post, &resolved, config))
}

/// Build metadata from a post and its already-resolved authors
pub fn metadata_for(post: &Post, authors: &[ResolvedAuthor], config: &SiteConfig) -> PageMetadata {
    let images: Vec<String> = image_list(post, config)
        .iter()
        .map(|img| absolute_url(&config.url, img))
        .collect();

    let mut author_names: Vec<String> = authors
        .iter()
        .filter_map(ResolvedAuthor::name)
        .map(str::to_string)
        .collect();
    if author_names.is_empty() {
        author_names.push(config.author.clone());
    }

    PageMetadata {
        title: post.title.clone(),
        description: post.summary.clone(),
        open_graph: OpenGraph {
            title: post.title.clone(),
            description: post.summary.clone(),
            site_name: config.title.clone(),
            locale: config.locale.clone(),
            kind: "article".to_string(),
            published_time: iso_utc(&post.date),
            modified_time: iso_utc(&post.modified()),
            url: "./".to_string(),
            images: images.iter().map(|url| OgImage { url: url.clone() }).collect(),
            authors: author_names,
        },
        twitter: TwitterCard {
            card: "summary_large_image".to_string(),
            title: post.title.clone(),
            description: post.summary.clone(),
            images,
        },
    }
}
