//! Helper functions shared by the page pipeline
//!
//! URL joining and decoding, date normalization, and HTML escaping.

mod date;
mod html;
mod url;

pub use date::*;
pub use html::*;
pub use url::*;
