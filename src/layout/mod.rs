//! Post layouts and the registry that selects one per post
//!
//! Layout identifiers come from authored content, so selection never
//! fails: a missing or unknown identifier gets the registry default.

use indexmap::IndexMap;
use serde::Serialize;

/// Built-in post layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Layout {
    /// Title, date and body only
    PostSimple,
    /// Author sidebar, tags and navigation
    PostLayout,
    /// Full-width banner image above the body
    PostBanner,
}

/// What a layout shows besides the body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutFeatures {
    pub banner_image: bool,
    pub author_sidebar: bool,
    pub tags: bool,
}

impl Layout {
    pub const ALL: [Layout; 3] = [Layout::PostSimple, Layout::PostLayout, Layout::PostBanner];

    /// Identifier used in post front-matter
    pub fn id(&self) -> &'static str {
        match self {
            Layout::PostSimple => "PostSimple",
            Layout::PostLayout => "PostLayout",
            Layout::PostBanner => "PostBanner",
        }
    }

    /// Template the renderer should use
    pub fn template(&self) -> &'static str {
        match self {
            Layout::PostSimple => "post-simple.html",
            Layout::PostLayout => "post.html",
            Layout::PostBanner => "post-banner.html",
        }
    }

    pub fn features(&self) -> LayoutFeatures {
        match self {
            Layout::PostSimple => LayoutFeatures {
                banner_image: false,
                author_sidebar: false,
                tags: false,
            },
            Layout::PostLayout => LayoutFeatures {
                banner_image: false,
                author_sidebar: true,
                tags: true,
            },
            Layout::PostBanner => LayoutFeatures {
                banner_image: true,
                author_sidebar: false,
                tags: false,
            },
        }
    }
}

/// Named rendering strategies with a mandatory default
#[derive(Debug, Clone)]
pub struct LayoutRegistry<S = Layout> {
    entries: IndexMap<String, S>,
    default_index: usize,
}

impl<S> LayoutRegistry<S> {
    /// Create a registry holding only its default strategy
    pub fn new(default_key: impl Into<String>, default: S) -> Self {
        let mut entries = IndexMap::new();
        entries.insert(default_key.into(), default);
        Self {
            entries,
            default_index: 0,
        }
    }

    /// Add or replace a strategy
    pub fn register(&mut self, key: impl Into<String>, strategy: S) -> &mut Self {
        self.entries.insert(key.into(), strategy);
        self
    }

    /// Strategy registered under `key`, without fallback
    pub fn get(&self, key: &str) -> Option<&S> {
        self.entries.get(key)
    }

    pub fn default_key(&self) -> &str {
        self.entries
            .get_index(self.default_index)
            .map(|(key, _)| key.as_str())
            .unwrap_or_default()
    }

    pub fn default_strategy(&self) -> &S {
        &self.entries[self.default_index]
    }

    /// Registered keys, in registration order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Pick the strategy for an identifier, falling back to the default
    pub fn select(&self, identifier: Option<&str>) -> &S {
        match identifier {
            Some(id) => self.get(id).unwrap_or_else(|| {
                tracing::debug!(
                    "Unknown layout '{}', using '{}'",
                    id,
                    self.default_key()
                );
                self.default_strategy()
            }),
            None => self.default_strategy(),
        }
    }
}

impl LayoutRegistry<Layout> {
    /// Registry of the built-in layouts with `default_key` as fallback
    ///
    /// An unknown `default_key` falls back to `PostLayout`.
    pub fn builtin(default_key: &str) -> Self {
        let default = Layout::ALL
            .into_iter()
            .find(|layout| layout.id() == default_key)
            .unwrap_or_else(|| {
                tracing::warn!("Unknown default layout '{}', using PostLayout", default_key);
                Layout::PostLayout
            });

        let mut registry = Self::new(default.id(), default);
        for layout in Layout::ALL {
            registry.register(layout.id(), layout);
        }
        registry
    }
}

impl Default for LayoutRegistry<Layout> {
    fn default() -> Self {
        Self::builtin(Layout::PostLayout.id())
    }
}

/// Select a layout for a post's declared identifier
pub fn select_layout<'a, S>(identifier: Option<&str>, registry: &'a LayoutRegistry<S>) -> &'a S {
    registry.select(identifier)
}
