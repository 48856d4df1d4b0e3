//! HTML helper functions

use serde_json::Value;

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Generate a `<meta>` tag keyed by `property` (OpenGraph) or `name` (Twitter)
pub fn meta_tag(key: &str, value: &str, content: &str) -> String {
    format!(
        r#"<meta {}="{}" content="{}">"#,
        key,
        html_escape(value),
        html_escape(content)
    )
}

/// Generate an `application/ld+json` script tag
///
/// The payload is embedded verbatim, so `</` is escaped to keep text
/// inside the JSON from closing the script element.
pub fn json_ld_script(data: &Value) -> String {
    let json = data.to_string().replace("</", "<\\/");
    format!(r#"<script type="application/ld+json">{}</script>"#, json)
}
