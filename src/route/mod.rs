//! Routing - slug resolution and static path enumeration

mod paths;
mod resolver;

pub use paths::enumerate_slugs;
pub use resolver::{resolve, slug_from_segments, Resolved, Resolver};
