//! URL helper functions

/// Whether a link already points somewhere absolute
pub fn is_absolute_url(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://") || path.starts_with("//")
}

/// Join a post URL onto the site's base path
///
/// Absolute and empty URLs come back unchanged, as does everything when
/// the base path is empty or `/`.
///
/// # Examples
/// ```ignore
/// url_for("/blog", "/2025/01/05/hello/") // -> "/blog/2025/01/05/hello/"
/// ```
pub fn url_for(base_path: &str, path: &str) -> String {
    let root = base_path.trim_end_matches('/');
    if path.is_empty() || root.is_empty() || is_absolute_url(path) {
        return path.to_string();
    }

    let root = if root.starts_with('/') {
        root.to_string()
    } else {
        format!("/{}", root)
    };
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for() {
        assert_eq!(url_for("/blog/", "/css/style.css"), "/blog/css/style.css");
        assert_eq!(url_for("blog", "about/"), "/blog/about/");
        assert_eq!(url_for("/blog", "/"), "/blog/");
    }

    #[test]
    fn test_url_for_passthrough() {
        assert_eq!(url_for("", "/2025/01/05/hello/"), "/2025/01/05/hello/");
        assert_eq!(url_for("/", "/about/"), "/about/");
        assert_eq!(url_for("/blog", ""), "");
        assert_eq!(
            url_for("/blog", "https://example.com/post"),
            "https://example.com/post"
        );
        assert_eq!(url_for("/blog", "//cdn.example.com/x"), "//cdn.example.com/x");
    }
}
