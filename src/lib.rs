//! tailblog: content resolution and static page generation for MDX-style blogs
//!
//! Given an already-parsed store of posts and authors, this crate orders
//! the public feed, resolves path segments to a single post, derives the
//! page metadata and linked data describing it, and picks the layout the
//! renderer should use.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod layout;
pub mod meta;
pub mod route;

use anyhow::Result;
use std::path::{Path, PathBuf};

pub use error::ContentError;

/// A site: its configuration and resolved directories
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Content store snapshot (directory or single file)
    pub content_dir: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
}

impl Site {
    /// Create a site from a directory, reading `site.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("site.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let content_dir = base_dir.join(&config.content_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Ok(Self {
            config,
            base_dir,
            content_dir,
            public_dir,
        })
    }

    /// Path of the configuration file
    pub fn config_path(&self) -> PathBuf {
        self.base_dir.join("site.yml")
    }

    /// Load the content store
    pub fn load_store(&self) -> Result<content::ContentStore> {
        let store = content::loader::ContentLoader::new(self).load()?;
        Ok(store)
    }

    /// Generate the static site
    pub fn generate(&self) -> Result<()> {
        commands::generate::run(self)
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
