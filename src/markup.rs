/// HTML rendering of a page view
///
/// Used to export the current page as a standalone HTML document. Every
/// value that comes from a record is escaped before it is interpolated, in
/// text and attribute positions alike, so titles or sources containing markup
/// cannot change the structure of the page.

use std::path::PathBuf;

use crate::error::Result;
use crate::state::data::ImageRecord;
use crate::state::view::DerivedView;

/// Image shown by exported cards whose image fails to load
pub const PLACEHOLDER_URL: &str =
    "https://via.placeholder.com/400/f5f5f5/999999?text=Image+Not+Available";

const STYLE: &str = "body{font-family:sans-serif;margin:2rem;background:#fafafa}\
.meme-grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(220px,1fr));gap:1rem}\
.meme-card{background:#fff;border-radius:8px;overflow:hidden;box-shadow:0 1px 3px rgba(0,0,0,.15)}\
.meme-image{width:100%;aspect-ratio:1;object-fit:cover}\
.meme-info{padding:.5rem .75rem}.meme-title{font-weight:600}.meme-source{color:#666;font-size:.85rem}\
.no-results{color:#666}.page-info{margin-top:1.5rem;color:#666}";

/// Escape text for both element content and quoted attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Image URL safe to place in a `src` attribute; script URLs become the placeholder
fn image_src(url: &str) -> String {
    let scheme = url.trim_start().to_ascii_lowercase();
    if scheme.starts_with("javascript:") || scheme.starts_with("vbscript:") {
        return PLACEHOLDER_URL.to_string();
    }
    escape_html(url)
}

fn render_card(record: &ImageRecord) -> String {
    format!(
        concat!(
            "<div class=\"meme-card\">",
            "<img src=\"{src}\" alt=\"{alt}\" class=\"meme-image\" loading=\"lazy\" ",
            "onerror=\"this.onerror=null;this.src='{placeholder}';this.alt='Image not available'\">",
            "<div class=\"meme-info\">",
            "<div class=\"meme-title\">{title}</div>",
            "<div class=\"meme-source\">Source: {source}</div>",
            "</div></div>"
        ),
        src = image_src(&record.url),
        alt = escape_html(&record.title),
        placeholder = PLACEHOLDER_URL,
        title = escape_html(&record.title),
        source = escape_html(&record.source),
    )
}

/// Render the page as a complete HTML document
pub fn render_page(view: &DerivedView, search_term: &str) -> String {
    let mut body = String::new();

    if view.is_empty() {
        body.push_str("<div class=\"no-results\">No memes found. Try a different search.</div>");
    } else {
        body.push_str("<div class=\"meme-grid\">");
        for record in &view.records {
            body.push_str(&render_card(record));
        }
        body.push_str("</div>");
        body.push_str(&format!(
            "<div class=\"page-info\">{}</div>",
            escape_html(&view.page_info())
        ));
    }

    let heading = if search_term.is_empty() {
        "AI Memes".to_string()
    } else {
        format!("AI Memes matching \"{}\"", escape_html(search_term))
    };

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>AI Memes</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
         <h1>{heading}</h1>\n{body}\n</body>\n</html>\n"
    )
}

/// Write a rendered page to disk, returning where it went
pub async fn write_page(path: PathBuf, html: String) -> Result<PathBuf> {
    tokio::fs::write(&path, html).await?;
    Ok(path)
}
