//! List the posts of a site

use anyhow::Result;

use crate::content::{PageContext, Post};
use crate::helpers::{format_date, localize, resolve_date_format};
use crate::Site;

/// Print the posts in manifest order, as text or JSON
pub fn run(site: &Site, json: bool) -> Result<()> {
    let posts = site.load_posts()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&posts)?);
        return Ok(());
    }

    let ctx = site.page_context()?;
    println!("Posts ({}):", posts.len());
    for line in listing(&posts, &ctx) {
        println!("  {}", line);
    }

    Ok(())
}

/// One `date - title [url]` line per post
pub fn listing(posts: &[Post], ctx: &PageContext) -> Vec<String> {
    let format = resolve_date_format(ctx.date_format.as_deref());
    posts
        .iter()
        .map(|post| {
            format!(
                "{} - {} [{}]",
                format_date(&localize(&post.date, ctx.timezone), &format),
                post.title,
                post.url
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::parse_date;

    #[test]
    fn test_listing() {
        let posts = vec![
            Post::new("Boot ROM", "/boot-rom/", parse_date("2025-01-05", None).unwrap()),
            Post::new("FFI", "/ffi/", parse_date("2024-11-20", None).unwrap()),
        ];
        let ctx = PageContext {
            date_format: Some("%Y-%m-%d".to_string()),
            ..PageContext::default()
        };

        assert_eq!(
            listing(&posts, &ctx),
            vec![
                "2025-01-05 - Boot ROM [/boot-rom/]".to_string(),
                "2024-11-20 - FFI [/ffi/]".to_string(),
            ]
        );
    }

    #[test]
    fn test_listing_default_format() {
        let posts = vec![Post::new("A", "/a/", parse_date("2025-01-05", None).unwrap())];
        assert_eq!(
            listing(&posts, &PageContext::default()),
            vec!["Jan 5, 2025 - A [/a/]".to_string()]
        );
    }
}
