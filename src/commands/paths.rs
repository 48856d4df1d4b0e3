//! Print every path that gets pre-rendered

use anyhow::Result;

use crate::route::enumerate_slugs;
use crate::Site;

pub fn run(site: &Site) -> Result<()> {
    let store = site.load_store()?;
    for segments in enumerate_slugs(store.posts()) {
        println!("{}", segments.join("/"));
    }
    Ok(())
}
