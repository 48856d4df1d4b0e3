//! `<head>` fragment for a post page

use super::metadata::PageMetadata;
use super::structured::LinkedData;
use crate::helpers::{html_escape, json_ld_script, meta_tag};

/// Render metadata as `<meta>` tags followed by the linked-data script
pub fn render_head(meta: &PageMetadata, linked_data: &LinkedData) -> String {
    let og = &meta.open_graph;
    let mut tags = vec![format!("<title>{}</title>", html_escape(&meta.title))];

    if let Some(description) = &meta.description {
        tags.push(meta_tag("name", "description", description));
    }

    tags.push(meta_tag("property", "og:title", &og.title));
    if let Some(description) = &og.description {
        tags.push(meta_tag("property", "og:description", description));
    }
    tags.push(meta_tag("property", "og:site_name", &og.site_name));
    tags.push(meta_tag("property", "og:locale", &og.locale));
    tags.push(meta_tag("property", "og:type", &og.kind));
    tags.push(meta_tag("property", "og:url", &og.url));
    for image in &og.images {
        tags.push(meta_tag("property", "og:image", &image.url));
    }
    tags.push(meta_tag("property", "article:published_time", &og.published_time));
    tags.push(meta_tag("property", "article:modified_time", &og.modified_time));
    for author in &og.authors {
        tags.push(meta_tag("property", "article:author", author));
    }

    let twitter = &meta.twitter;
    tags.push(meta_tag("name", "twitter:card", &twitter.card));
    tags.push(meta_tag("name", "twitter:title", &twitter.title));
    if let Some(description) = &twitter.description {
        tags.push(meta_tag("name", "twitter:description", description));
    }
    for image in &twitter.images {
        tags.push(meta_tag("name", "twitter:image", image));
    }

    tags.push(json_ld_script(&serde_json::Value::Object(linked_data.clone())));
    tags.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::content::Post;
    use crate::meta::{compose_structured_data, derive_metadata, resolve_authors};
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_render_head() {
        let mut post = Post::new("a", "Cats & Dogs", Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        post.images = Some(vec!["/a.png".to_string(), "/b.png".to_string()]);
        let config = SiteConfig::default();

        let meta = derive_metadata(Some(&post), &[], &config).unwrap();
        let data = compose_structured_data(&post, &resolve_authors(&post, &[]), &config);
        let head = render_head(&meta, &data);

        assert!(head.starts_with("<title>Cats &amp; Dogs</title>"));
        assert!(head.contains(r#"<meta property="og:type" content="article">"#));
        assert!(head.contains(r#"<meta property="og:image" content="http://example.com/a.png">"#));
        assert!(head.contains(r#"<meta property="og:image" content="http://example.com/b.png">"#));
        assert!(head.contains(r#"<meta property="article:author" content="John Doe">"#));
        assert!(head.contains(r#"<meta name="twitter:card" content="summary_large_image">"#));
        assert!(!head.contains("og:description"));
        assert!(head.ends_with("</script>"));
        assert!(head.contains(r#""author":[{"@type":"Person","name":"John Doe"}]"#));
    }
}
