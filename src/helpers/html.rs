//! HTML helper functions

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Strip HTML tags from a string
///
/// A `<` only opens a tag when followed by a letter, `/` or `!`; any other
/// `<` or `>` is kept as text.
pub fn strip_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut in_tag = false;
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '<' if !in_tag => {
                let opens_tag = chars
                    .peek()
                    .is_some_and(|&next| next.is_ascii_alphabetic() || next == '/' || next == '!');
                if opens_tag {
                    in_tag = true;
                } else {
                    result.push(c);
                }
            }
            '>' if in_tag => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }

    result
}

/// Generate an anchor tag; both the href and the text are escaped
///
/// # Examples
/// ```ignore
/// link_to("/2025/01/05/hello/", "Hello & welcome", Some("post-link"))
/// // -> <a class="post-link" href="/2025/01/05/hello/">Hello &amp; welcome</a>
/// ```
pub fn link_to(href: &str, text: &str, class: Option<&str>) -> String {
    let class_attr = class
        .map(|c| format!(r#" class="{}""#, html_escape(c)))
        .unwrap_or_default();
    format!(
        r#"<a{} href="{}">{}</a>"#,
        class_attr,
        html_escape(href),
        html_escape(text)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_strip_html() {
        assert_eq!(strip_html("<p>Hello <b>World</b></p>"), "Hello World");
        assert_eq!(strip_html("<!-- more --><p>a</p>"), "a");
    }

    #[test]
    fn test_strip_html_keeps_bare_brackets() {
        assert_eq!(strip_html("<p>1 < 2</p>"), "1 < 2");
        assert_eq!(strip_html("<p>3 > 2 and x <= y</p>"), "3 > 2 and x <= y");
    }

    #[test]
    fn test_link_to() {
        assert_eq!(
            link_to("/a?b=1&c=2", "A <B>", Some("post-link")),
            r#"<a class="post-link" href="/a?b=1&amp;c=2">A &lt;B&gt;</a>"#
        );
        assert_eq!(link_to("", "", None), r#"<a href=""></a>"#);
    }
}
