//! Post index renderer
//!
//! Turns an ordered slice of posts into an HTML listing. The output is
//! produced in a single pass: posts are never re-sorted and nothing is kept
//! between calls, so identical inputs always render to identical bytes.

use crate::content::{ExcerptMode, PageContext, Post};
use crate::helpers::{
    html_escape, link_to, localize, resolve_date_format, strip_html, time_tag, url_for,
};

/// Render the post index as an HTML fragment
///
/// # Examples
/// ```ignore
/// let html = render_index(&posts, &PageContext::new("Posts"));
/// ```
pub fn render_index(posts: &[Post], ctx: &PageContext) -> String {
    let date_format = resolve_date_format(ctx.date_format.as_deref());

    let mut html = String::from("<div class=\"home\">\n");
    html.push_str(&format!(
        "  <h2 class=\"post-list-heading\">{}</h2>\n",
        html_escape(&ctx.page_title)
    ));
    html.push_str("  <ul class=\"post-list\">\n");

    for post in posts {
        let date = localize(&post.date, ctx.timezone);
        let href = url_for(&ctx.base_path, &post.url);

        html.push_str("    <li>\n");
        html.push_str(&format!(
            "      <span class=\"post-meta\">{}</span>\n",
            time_tag(&date, &date_format)
        ));
        html.push_str(&format!(
            "      <h3>{}</h3>\n",
            link_to(&href, &post.title, Some("post-link"))
        ));
        html.push_str(&format!(
            "      <div class=\"post-excerpt\">{}</div>\n",
            render_excerpt(&post.excerpt, ctx.excerpt_mode)
        ));
        html.push_str("    </li>\n");
    }

    html.push_str("  </ul>\n");
    html.push_str("</div>\n");

    tracing::debug!("Rendered index with {} posts", posts.len());
    html
}

/// Render the post index wrapped in a complete HTML document
pub fn render_document(posts: &[Post], ctx: &PageContext) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"{}\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n{}</body>\n</html>\n",
        html_escape(&ctx.language),
        html_escape(&ctx.page_title),
        render_index(posts, ctx)
    )
}

fn render_excerpt(excerpt: &str, mode: ExcerptMode) -> String {
    match mode {
        ExcerptMode::Verbatim => excerpt.to_string(),
        ExcerptMode::Escaped => html_escape(excerpt),
        ExcerptMode::Plain => strip_html(excerpt).trim().to_string(),
    }
}
