//! Generate page payloads

use anyhow::Result;
use notify::Watcher;
use std::sync::mpsc::channel;
use std::time::Duration;

use crate::generator::Generator;
use crate::Site;

/// Generate the listing and every post page
pub fn run(site: &Site) -> Result<()> {
    let start = std::time::Instant::now();

    let store = site.load_store()?;
    tracing::info!(
        "Loaded {} posts and {} authors",
        store.posts().len(),
        store.authors().len()
    );

    let stats = Generator::new(site).generate(&store)?;
    if stats.skipped > 0 {
        tracing::warn!("Skipped {} pages", stats.skipped);
    }

    let duration = start.elapsed();
    tracing::info!(
        "Generated {} pages in {:.2}s",
        stats.pages,
        duration.as_secs_f64()
    );

    Ok(())
}

/// Watch the content snapshot and config, regenerating on change
///
/// The site is re-read on every change so edits to `site.yml` apply.
pub fn watch(site: &Site) -> Result<()> {
    let (tx, rx) = channel();

    let mut watcher = notify::recommended_watcher(move |res| {
        if let Ok(event) = res {
            let _ = tx.send(event);
        }
    })?;

    if site.content_dir.exists() {
        watcher.watch(site.content_dir.as_ref(), notify::RecursiveMode::Recursive)?;
    }

    let config_path = site.config_path();
    if config_path.exists() {
        watcher.watch(config_path.as_ref(), notify::RecursiveMode::NonRecursive)?;
    }

    tracing::info!("Watching for changes. Press Ctrl+C to stop.");

    let mut last_rebuild = std::time::Instant::now();

    loop {
        match rx.recv_timeout(Duration::from_millis(100)) {
            Ok(_event) => {
                // Debounce: only rebuild if more than 500ms since last rebuild
                if last_rebuild.elapsed() > Duration::from_millis(500) {
                    tracing::info!("Content changed, regenerating...");
                    let result = Site::new(&site.base_dir).and_then(|site| run(&site));
                    if let Err(e) = result {
                        tracing::error!("Generation failed: {}", e);
                    }
                    last_rebuild = std::time::Instant::now();
                }
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => {
                break;
            }
        }
    }

    Ok(())
}
