//! Index page rendering
//!
//! The page is embedded at build time; only the title and the optional
//! community link are filled in per deployment.

use crate::types::PageConfig;

const INDEX_TEMPLATE: &str = include_str!("../../static/index.html");

fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Fill the index template for a deployment
pub fn render_index(page: &PageConfig) -> String {
    let community_link = page
        .community_url
        .as_deref()
        .map(|url| {
            format!(
                r#"<a class="community" href="{}" target="_blank" rel="noopener noreferrer">Join the group to download</a>"#,
                escape_html(url)
            )
        })
        .unwrap_or_default();

    INDEX_TEMPLATE
        .replace("{{page_title}}", &escape_html(&page.title))
        .replace("{{community_link}}", &community_link)
}
