//! # Index Page Rendering
//!
//! String-building helpers for the aggregate `index.html`. The page is plain
//! concatenated markup with a fixed header and footer; the pipeline supplies
//! the body as one fragment per spec.

/// Fixed opening boilerplate of the index page.
pub const PAGE_HEADER: &str = r#"<html>
<head>
<title>OCI specs latest</title>
</head>
<body style="background:#e8e9ff;padding: 20px;font-family: monospace">
<div style="width:100%px; max-width:700px;text-align:left;padding: 20px;border:1px solid #c7c2c2; background:white">
<h1>OCI specs latest</h1>
"#;

/// Fixed closing boilerplate of the index page.
pub const PAGE_FOOTER: &str = "</div>\n</body>\n</html>\n";

/// Heading fragment opening one spec's section.
pub fn spec_heading(name: &str) -> String {
    format!("<hr/><h2>{}</h2>\n", name)
}

/// List item for one release, keyed by its checkout target.
pub fn release_item(target: &str) -> String {
    format!(
        "<li><div><h3>{}</h3><p>release date: TODO</p></div></li>\n",
        target
    )
}

/// Assemble the complete page around an accumulated body.
pub fn page(body: &str) -> String {
    let mut page = String::with_capacity(PAGE_HEADER.len() + body.len() + PAGE_FOOTER.len());
    page.push_str(PAGE_HEADER);
    page.push_str(body);
    page.push_str(PAGE_FOOTER);
    page
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_heading() {
        assert_eq!(spec_heading("runtime"), "<hr/><h2>runtime</h2>\n");
    }

    #[test]
    fn test_release_item_carries_target() {
        let item = release_item("v1.0.2");
        assert!(item.starts_with("<li><div><h3>v1.0.2</h3>"));
        assert!(item.ends_with("</li>\n"));
    }

    #[test]
    fn test_page_wraps_body() {
        let page = page("<p>body</p>");
        assert!(page.starts_with("<html>\n"));
        assert!(page.contains("<h1>OCI specs latest</h1>"));
        assert!(page.contains("<p>body</p>"));
        assert!(page.ends_with("</html>\n"));
    }

    #[test]
    fn test_empty_body_is_just_boilerplate() {
        let page = page("");
        assert_eq!(page, format!("{}{}", PAGE_HEADER, PAGE_FOOTER));
    }
}
