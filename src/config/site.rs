//! Site configuration (site.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
///
/// These are the site-wide constants the page pipeline reads: the base
/// URL and default banner for absolute image URLs, the default author
/// name, and the OpenGraph site name and locale.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub author: String,
    pub description: String,
    pub language: String,
    /// OpenGraph locale tag
    pub locale: String,

    // URL
    pub url: String,
    pub social_banner: String,
    pub blog_dir: String,

    // Directory
    pub content_dir: String,
    pub public_dir: String,

    // Writing
    pub default_layout: String,
    pub render_drafts: bool,

    // Home page
    pub feed_limit: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Blog".to_string(),
            author: "John Doe".to_string(),
            description: String::new(),
            language: "en-us".to_string(),
            locale: "en_US".to_string(),

            url: "http://example.com".to_string(),
            social_banner: "/static/images/twitter-card.png".to_string(),
            blog_dir: "blog".to_string(),

            content_dir: ".contentlayer/generated".to_string(),
            public_dir: "public".to_string(),

            default_layout: "PostLayout".to_string(),
            render_drafts: false,

            feed_limit: 5,
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// URL path of a post page, e.g. `/blog/2024/hello`
    pub fn post_path(&self, slug: &str) -> String {
        let dir = self.blog_dir.trim_matches('/');
        if dir.is_empty() {
            format!("/{}", slug)
        } else {
            format!("/{}/{}", dir, slug)
        }
    }
}
