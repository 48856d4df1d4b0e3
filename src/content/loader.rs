//! Content loader - reads a parsed content snapshot into a `ContentStore`
//!
//! Two layouts are understood:
//!
//! - a generated directory with one JSON document per record under
//!   `Blog/` and `Authors/`, visited in file-name order. Files starting
//!   with `_` (the generated `_index.json` aggregates) are skipped;
//! - a single YAML or JSON file with top-level `posts` and `authors` lists.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::post::{Author, Post, PostRecord};
use super::store::ContentStore;
use crate::config::SiteConfig;
use crate::error::ContentError;
use crate::meta::seed_structured_data;
use crate::Site;

/// Single-file snapshot
#[derive(Debug, Deserialize)]
struct Snapshot {
    #[serde(default)]
    posts: Vec<PostRecord>,
    #[serde(default)]
    authors: Vec<Author>,
}

/// Loads the content store from the content directory
pub struct ContentLoader<'a> {
    config: &'a SiteConfig,
    content_path: PathBuf,
}

impl<'a> ContentLoader<'a> {
    /// Create a loader for a site
    pub fn new(site: &'a Site) -> Self {
        Self::with_path(&site.config, &site.content_dir)
    }

    /// Create a loader reading from an explicit path
    pub fn with_path<P: AsRef<Path>>(config: &'a SiteConfig, content_path: P) -> Self {
        Self {
            config,
            content_path: content_path.as_ref().to_path_buf(),
        }
    }

    /// Load and validate the whole store
    pub fn load(&self) -> Result<ContentStore, ContentError> {
        let (records, authors) = if self.content_path.is_dir() {
            (
                self.load_dir::<PostRecord>("Blog")?,
                self.load_dir::<Author>("Authors")?,
            )
        } else if self.content_path.is_file() {
            let snapshot = self.load_snapshot(&self.content_path)?;
            (snapshot.posts, snapshot.authors)
        } else {
            tracing::warn!("Content path {:?} does not exist", self.content_path);
            (Vec::new(), Vec::new())
        };

        let mut posts = Vec::with_capacity(records.len());
        for record in records {
            posts.push(self.build_post(record)?);
        }

        tracing::debug!("Loaded {} posts and {} authors", posts.len(), authors.len());
        ContentStore::new(posts, authors)
    }

    /// Validate one record and seed its linked data when the snapshot has none
    fn build_post(&self, record: PostRecord) -> Result<Post, ContentError> {
        let seeded = record.structured_data.is_some();
        let mut post = Post::try_from(record)?;
        if !seeded {
            post.structured_data = seed_structured_data(&post, self.config);
        }
        Ok(post)
    }

    /// Load every per-record JSON document below `<content>/<kind>/`
    fn load_dir<T: for<'de> Deserialize<'de>>(&self, kind: &str) -> Result<Vec<T>, ContentError> {
        let dir = self.content_path.join(kind);
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut items = Vec::new();

        for entry in WalkDir::new(&dir).follow_links(true).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry in {:?}: {}", dir, e);
                    continue;
                }
            };
            let path = entry.path();
            if path.is_file() && is_json_file(path) && !is_aggregate(path) {
                let content = fs::read_to_string(path)?;
                let item = serde_json::from_str(&content).map_err(|e| {
                    tracing::error!("Failed to parse {:?}: {}", path, e);
                    e
                })?;
                items.push(item);
            }
        }

        Ok(items)
    }

    fn load_snapshot(&self, path: &Path) -> Result<Snapshot, ContentError> {
        let content = fs::read_to_string(path)?;
        let snapshot = if is_json_file(path) {
            serde_json::from_str(&content)?
        } else {
            serde_yaml::from_str(&content)?
        };
        Ok(snapshot)
    }
}

/// Generated aggregates such as `_index.json` repeat the per-record files
fn is_aggregate(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with('_'))
        .unwrap_or(false)
}

/// Check if a file is a JSON document
fn is_json_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "json")
        .unwrap_or(false)
}
