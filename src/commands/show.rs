//! Show the payload for one post

use anyhow::Result;

use crate::generator::PageBuilder;
use crate::Site;

/// Print the page payload for a slug as JSON
pub fn run(site: &Site, slug: &str) -> Result<()> {
    let store = site.load_store()?;
    let builder = PageBuilder::new(&site.config, &store);

    let segments: Vec<&str> = slug.trim_matches('/').split('/').collect();
    match builder.build(segments.as_slice()) {
        Some(page) => {
            println!("{}", serde_json::to_string_pretty(&page)?);
            Ok(())
        }
        None => anyhow::bail!("Not found: {}", slug),
    }
}
