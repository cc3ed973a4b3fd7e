//! The fixed HTML shell shared by every output page.

/// A navbar entry: (label, href).
pub type NavLink<'a> = (&'a str, &'a str);

/// Assemble a full page: Bootstrap head, navbar, and the given body markup
/// inside the content container. `extra_head` is inserted verbatim before
/// `</head>` for page-specific script tags.
pub fn page(title: &str, brand: &str, nav_links: &[NavLink], extra_head: &str, body: &str) -> String {
    let mut html = String::new();
    html.push_str("<!doctype html>\n<html lang=\"en\">\n  <head>\n");
    html.push_str("    <meta charset=\"utf-8\">\n");
    html.push_str("    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("    <title>{}</title>\n", escape_html(title)));
    html.push_str("    <link href=\"https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css\" rel=\"stylesheet\">\n");
    html.push_str("    <link rel=\"stylesheet\" href=\"./css/style.css\">\n");
    html.push_str("    <script src=\"https://cdn.plot.ly/plotly-latest.min.js\"></script>\n");
    html.push_str("    <script src=\"https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/js/bootstrap.bundle.min.js\"></script>\n");
    if !extra_head.is_empty() {
        html.push_str(extra_head);
        if !extra_head.ends_with('\n') {
            html.push('\n');
        }
    }
    html.push_str("  </head>\n  <body>\n");

    html.push_str("  <nav class=\"navbar navbar-expand-lg bg-body-tertiary\">\n");
    html.push_str("    <div class=\"container-fluid\">\n");
    html.push_str(&format!(
        "      <a class=\"navbar-brand\" href=\"#\">{}</a>\n",
        escape_html(brand)
    ));
    html.push_str("      <button class=\"navbar-toggler\" type=\"button\" data-bs-toggle=\"collapse\" data-bs-target=\"#navbarNavAltMarkup\" aria-controls=\"navbarNavAltMarkup\" aria-expanded=\"false\" aria-label=\"Toggle navigation\">\n");
    html.push_str("        <span class=\"navbar-toggler-icon\"></span>\n");
    html.push_str("      </button>\n");
    html.push_str("      <div class=\"collapse navbar-collapse\" id=\"navbarNavAltMarkup\">\n");
    html.push_str("        <div class=\"navbar-nav\">\n");
    for (i, (label, href)) in nav_links.iter().enumerate() {
        let active = if i == 0 { " active\" aria-current=\"page" } else { "" };
        html.push_str(&format!(
            "          <a class=\"nav-link{}\" href=\"{}\">{}</a>\n",
            active,
            escape_html(href),
            escape_html(label)
        ));
    }
    html.push_str("        </div>\n      </div>\n    </div>\n  </nav>\n");

    html.push_str("  <div class=\"container-md\">\n");
    html.push_str(body);
    if !body.ends_with('\n') {
        html.push('\n');
    }
    html.push_str("  </div>\n  </body>\n</html>\n");
    html
}

/// Escape text for safe embedding in HTML markup.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_structure() {
        let html = page(
            "Network | The language use web",
            "Network",
            &[("Home", "index.html")],
            "",
            "<div id=\"network\"></div>",
        );
        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains("<title>Network | The language use web</title>"));
        assert!(html.contains("navbar-brand"));
        assert!(html.contains("href=\"index.html\""));
        assert!(html.contains("<div id=\"network\"></div>"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_first_nav_link_is_active() {
        let html = page("t", "b", &[("Home", "index.html"), ("Media", "#media")], "", "");
        assert!(html.contains("nav-link active"));
        let media = html.find("#media").unwrap();
        let active = html.find("nav-link active").unwrap();
        assert!(active < media);
    }

    #[test]
    fn test_escaping() {
        let html = page("<script>", "A & B", &[], "", "");
        assert!(!html.contains("<title><script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("A &amp; B"));
    }
}
