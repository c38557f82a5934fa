use std::fmt::Write;

use crate::config::SiteLayout;
use crate::request::PostRequest;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render the post body: the front matter block plus one trailing newline.
///
/// The title goes between double quotes as-is; no YAML escaping is applied.
pub fn render_front_matter(request: &PostRequest, layout: &SiteLayout) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "---");
    let _ = writeln!(out, "layout: {}", layout.layout);
    let _ = writeln!(out, "title: \"{}\"", request.title);
    let _ = writeln!(out, "date: {}", request.created.format(TIMESTAMP_FORMAT));
    let _ = writeln!(out, "categories: {}", request.categories_line());
    let _ = writeln!(out, "published: false");
    let _ = writeln!(out, "---");
    out.push('\n');

    out
}
