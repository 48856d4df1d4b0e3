//! Generator module - assembles page payloads and writes them to the public directory

use anyhow::Result;
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::SiteConfig;
use crate::content::{ContentStore, CorePost, FeedOptions, Project};
use crate::layout::{Layout, LayoutFeatures, LayoutRegistry};
use crate::meta::{
    compose_structured_data, metadata_for, render_head, resolve_authors, LinkedData, PageMetadata,
    ResolvedAuthor,
};
use crate::route::{enumerate_slugs, Resolver};
use crate::Site;

/// Everything the renderer needs for one post page
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagePayload {
    pub slug: String,
    pub path: String,
    pub layout: Layout,
    pub template: String,
    pub features: LayoutFeatures,
    pub content: CorePost,
    pub author_details: Vec<ResolvedAuthor>,
    pub prev: Option<CorePost>,
    pub next: Option<CorePost>,
    /// Compiled body
    pub code: String,
    pub toc: Value,
    pub metadata: PageMetadata,
    pub json_ld: LinkedData,
    /// Rendered `<head>` fragment
    pub head: String,
}

/// Home page listing
#[derive(Debug, Clone, Serialize)]
pub struct ListingPayload {
    pub posts: Vec<CorePost>,
    pub total: usize,
}

/// Summary of a generation pass
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GenerateStats {
    pub pages: usize,
    pub skipped: usize,
}

/// Builds page payloads from a content store
pub struct PageBuilder<'a> {
    config: &'a SiteConfig,
    store: &'a ContentStore,
    resolver: Resolver<'a>,
    layouts: LayoutRegistry,
}

impl<'a> PageBuilder<'a> {
    pub fn new(config: &'a SiteConfig, store: &'a ContentStore) -> Self {
        let options = FeedOptions {
            include_drafts: config.render_drafts,
        };
        Self {
            config,
            store,
            resolver: Resolver::with_options(store.posts(), options),
            layouts: LayoutRegistry::builtin(&config.default_layout),
        }
    }

    /// The ordered feed
    pub fn feed(&self) -> &[CorePost] {
        self.resolver.feed()
    }

    /// Build the payload for one path, `None` when no post matches
    pub fn build<S: AsRef<str>>(&self, segments: &[S]) -> Option<PagePayload> {
        let resolved = self.resolver.resolve(segments)?;
        let post = resolved.post;

        let authors = resolve_authors(post, self.store.authors());
        let metadata = metadata_for(post, &authors, self.config);
        let json_ld = compose_structured_data(post, &authors, self.config);
        let head = render_head(&metadata, &json_ld);
        let layout = *self.layouts.select(post.layout.as_deref());

        Some(PagePayload {
            slug: post.slug.clone(),
            path: self.config.post_path(&post.slug),
            layout,
            template: layout.template().to_string(),
            features: layout.features(),
            content: post.project(),
            author_details: authors,
            prev: resolved.prev,
            next: resolved.next,
            code: post.body.code.clone(),
            toc: post.toc.clone(),
            metadata,
            json_ld,
            head,
        })
    }

    /// The first `limit` posts of the feed
    pub fn listing(&self, limit: usize) -> ListingPayload {
        let feed = self.feed();
        ListingPayload {
            posts: feed.iter().take(limit).cloned().collect(),
            total: feed.len(),
        }
    }
}

/// Writes page payloads for a site
pub struct Generator<'a> {
    site: &'a Site,
}

impl<'a> Generator<'a> {
    pub fn new(site: &'a Site) -> Self {
        Self { site }
    }

    /// Generate the listing and one page per enumerated slug
    ///
    /// Pages left over from a previous run are removed first when posts
    /// live under a `blog_dir`. With an empty `blog_dir` pages share the
    /// public root with other output, so stale pages stay until `clean`.
    pub fn generate(&self, store: &ContentStore) -> Result<GenerateStats> {
        let builder = PageBuilder::new(&self.site.config, store);
        let mut stats = GenerateStats::default();

        self.prune_pages()?;
        fs::create_dir_all(&self.site.public_dir)?;

        let listing = builder.listing(self.site.config.feed_limit);
        write_json(&self.site.public_dir.join("index.json"), &listing)?;

        for segments in enumerate_slugs(store.posts()) {
            let Some(dir) = self.page_dir(&segments) else {
                tracing::warn!("Skipping unsafe path {:?}", segments);
                stats.skipped += 1;
                continue;
            };

            match builder.build(segments.as_slice()) {
                Some(page) => {
                    let output_path = dir.join("index.json");
                    write_json(&output_path, &page)?;
                    tracing::debug!("Generated post: {:?}", output_path);
                    stats.pages += 1;
                }
                None => {
                    tracing::warn!("No post resolves for {:?}, skipping", segments.join("/"));
                    stats.skipped += 1;
                }
            }
        }

        Ok(stats)
    }

    /// Remove the `public/<blog_dir>` subtree written by an earlier run
    fn prune_pages(&self) -> Result<()> {
        let blog_dir = self.site.config.blog_dir.trim_matches('/');
        if blog_dir.is_empty() || blog_dir.split('/').any(|part| part.is_empty() || part == "." || part == "..") {
            return Ok(());
        }
        let pages = self.site.public_dir.join(blog_dir);
        if pages.exists() {
            fs::remove_dir_all(&pages)
                .map_err(|e| anyhow::anyhow!("Failed to remove {:?}: {}", pages, e))?;
            tracing::debug!("Removed stale pages in {:?}", pages);
        }
        Ok(())
    }

    /// Output directory for a page, `None` if a segment could escape the public dir
    fn page_dir(&self, segments: &[String]) -> Option<PathBuf> {
        let mut dir = self.site.public_dir.clone();
        let blog_dir = self.site.config.blog_dir.trim_matches('/');
        if !blog_dir.is_empty() {
            dir.push(blog_dir);
        }
        for segment in segments {
            if segment.is_empty()
                || segment == "."
                || segment == ".."
                || segment.contains(['/', '\\'])
            {
                return None;
            }
            dir.push(segment);
        }
        Some(dir)
    }
}

fn write_json<T: Serialize>(output_path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| anyhow::anyhow!("Failed to create dir {:?}: {}", parent, e))?;
    }
    let json = serde_json::to_string_pretty(value)?;
    fs::write(output_path, json)
        .map_err(|e| anyhow::anyhow!("Failed to write {:?}: {}", output_path, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Author, Post};
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn post(slug: &str, y: i32, m: u32, d: u32) -> Post {
        Post::new(slug, slug.to_uppercase(), Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap())
    }

    fn store() -> ContentStore {
        let mut banner = post("c", 2024, 3, 1);
        banner.layout = Some("PostBanner".to_string());
        banner.authors = vec!["alice".to_string()];
        banner.body.code = "compiled".to_string();

        let mut draft = post("b", 2024, 6, 1);
        draft.draft = true;
        draft.layout = Some("Unknown".to_string());

        ContentStore::new(
            vec![post("a", 2024, 1, 1), draft, banner],
            vec![
                Author::new("default", "Site Owner"),
                Author::new("alice", "Alice"),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_build_page() {
        let config = SiteConfig::default();
        let store = store();
        let builder = PageBuilder::new(&config, &store);

        let page = builder.build(&["c"]).unwrap();
        assert_eq!(page.layout, Layout::PostBanner);
        assert_eq!(page.path, "/blog/c");
        assert_eq!(page.code, "compiled");
        assert_eq!(page.metadata.open_graph.authors, vec!["Alice"]);
        assert_eq!(page.json_ld["author"][0]["name"], "Alice");
        assert_eq!(page.prev.as_ref().map(|p| p.slug.as_str()), Some("a"));
        assert!(page.next.is_none());
        assert!(page.head.contains("application/ld+json"));

        let json = serde_json::to_value(&page).unwrap();
        assert!(json["content"].get("body").is_none());
    }

    #[test]
    fn test_build_unknown_layout_and_missing_post() {
        let config = SiteConfig::default();
        let store = store();
        let builder = PageBuilder::new(&config, &store);

        let draft = builder.build(&["b"]).unwrap();
        assert_eq!(draft.layout, Layout::PostLayout);
        assert!(builder.build(&["zzz"]).is_none());
    }

    #[test]
    fn test_listing() {
        let config = SiteConfig::default();
        let store = store();
        let builder = PageBuilder::new(&config, &store);

        let listing = builder.listing(1);
        assert_eq!(listing.total, 2);
        assert_eq!(listing.posts.len(), 1);
        assert_eq!(listing.posts[0].slug, "c");
    }

    #[test]
    fn test_render_drafts_option() {
        let config = SiteConfig {
            render_drafts: true,
            ..SiteConfig::default()
        };
        let store = store();
        let builder = PageBuilder::new(&config, &store);
        assert_eq!(builder.listing(10).total, 3);
    }

    #[test]
    fn test_generate_writes_every_page() {
        let tmp = TempDir::new().unwrap();
        let site = Site::new(tmp.path()).unwrap();
        let stats = Generator::new(&site).generate(&store()).unwrap();

        assert_eq!(stats, GenerateStats { pages: 3, skipped: 0 });
        assert!(site.public_dir.join("index.json").exists());
        for slug in ["a", "b", "c"] {
            assert!(site.public_dir.join("blog").join(slug).join("index.json").exists());
        }
    }

    #[test]
    fn test_generate_removes_stale_pages() {
        let tmp = TempDir::new().unwrap();
        let site = Site::new(tmp.path()).unwrap();
        let stale = site.public_dir.join("blog").join("old");
        fs::create_dir_all(&stale).unwrap();
        fs::write(stale.join("index.json"), "{}").unwrap();
        fs::write(site.public_dir.join("robots.txt"), "").unwrap();

        let stats = Generator::new(&site).generate(&store()).unwrap();

        assert_eq!(stats.pages, 3);
        assert!(!stale.exists());
        assert!(site.public_dir.join("blog").join("a").join("index.json").exists());
        assert!(site.public_dir.join("robots.txt").exists());
    }

    #[test]
    fn test_generate_skips_unsafe_paths() {
        let tmp = TempDir::new().unwrap();
        let site = Site::new(tmp.path()).unwrap();
        let store = ContentStore::new(vec![post("../escape", 2024, 1, 1)], Vec::new()).unwrap();

        let stats = Generator::new(&site).generate(&store).unwrap();
        assert_eq!(stats, GenerateStats { pages: 0, skipped: 1 });
    }
}
