//! Minimal HTML listing of the catalog for `GET /`.

use crate::catalog::types::Link;

use std::fmt::Write;

pub fn render_home(links: &[Link]) -> String {
    let mut page = String::from(
        "<!DOCTYPE html>\n<h1>Links</h1>\n\
         <p>Submit a link: <tt>curl -X POST -d '{\"URL\":\"http://example.com\",\"Title\":\"optional title\"}' \
         http://localhost:7000/links</tt></p>\n\
         <p>Newly added links without titles appear only after they've been fetched.</p>\n",
    );

    let _ = writeln!(page, "<h2>Links ({})</h2>\n<ol>", links.len());
    for link in links {
        let _ = writeln!(
            page,
            "  <li><a href=\"{}\">{}</a></li>",
            escape_html(link.url()),
            escape_html(link.title())
        );
    }
    page.push_str("</ol>\n");

    page
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
