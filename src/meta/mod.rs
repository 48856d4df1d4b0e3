//! Page description - metadata, linked data and the rendered `<head>`

mod authors;
mod head;
mod metadata;
mod structured;

pub use authors::{resolve_authors, ResolvedAuthor};
pub use head::render_head;
pub use metadata::{
    derive_metadata, image_list, metadata_for, OgImage, OpenGraph, PageMetadata, TwitterCard,
};
pub use structured::{compose_structured_data, seed_structured_data, LinkedData};
