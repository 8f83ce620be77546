//! HTML render target: one standalone page per document, styled for the
//! browser's print dialog. Nothing here is served as application UI.

use std::fmt::Write;

use super::{Block, Document};

const PAGE_STYLE: &str = "\
body { font-family: Georgia, 'Times New Roman', serif; color: #1a1a1a; \
margin: 48px auto; max-width: 720px; text-align: center; }\n\
h1 { font-size: 28px; margin: 16px 0; } h2 { font-size: 20px; margin: 12px 0; }\n\
p { font-size: 15px; margin: 10px 0; }\n\
hr { border: none; border-top: 1px solid #999; margin: 18px 0; }\n\
table { margin: 18px auto; border-collapse: collapse; }\n\
table.kv th { text-align: right; padding: 4px 12px 4px 0; font-weight: normal; color: #555; }\n\
table.kv td { text-align: left; padding: 4px 0 4px 12px; }\n\
table.list th, table.list td { border: 1px solid #ccc; padding: 6px 10px; font-size: 14px; }\n\
.signature { margin-top: 48px; }\n\
.signature img { max-height: 60px; }\n\
.signature .name { margin-top: 4px; border-top: 1px solid #333; display: inline-block; \
padding: 4px 24px 0; font-weight: bold; }\n\
.signature .title { font-size: 13px; color: #555; }\n\
.gallery { display: flex; flex-wrap: wrap; gap: 16px; justify-content: center; }\n\
.gallery figure { width: 140px; margin: 0; }\n\
.gallery img { width: 120px; height: 120px; object-fit: cover; border-radius: 4px; }\n\
.gallery .placeholder { width: 120px; height: 120px; background: #eee; border-radius: 4px; \
display: inline-block; }\n\
.gallery figcaption { font-size: 13px; } .gallery .detail { font-size: 11px; color: #777; }\n\
@media print { body { margin: 0 auto; } }";

pub fn escape(text: &str) -> String {
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

pub fn render(doc: &Document) -> String {
    let mut body = String::new();
    for block in &doc.blocks {
        render_block(&mut body, block);
    }

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n<style>\n{}\n</style>\n</head>\n<body>\n{}</body>\n</html>\n",
        escape(&doc.title),
        PAGE_STYLE,
        body,
    )
}

fn render_block(out: &mut String, block: &Block) {
    match block {
        Block::Heading { level, text } => {
            let level = (*level).clamp(1, 6);
            let _ = writeln!(out, "<h{level}>{}</h{level}>", escape(text));
        }
        Block::Paragraph { text } => {
            let _ = writeln!(out, "<p>{}</p>", escape(text));
        }
        Block::KeyValues { rows } => {
            out.push_str("<table class=\"kv\">\n");
            for (label, value) in rows {
                let _ = writeln!(
                    out,
                    "<tr><th>{}</th><td>{}</td></tr>",
                    escape(label),
                    escape(value)
                );
            }
            out.push_str("</table>\n");
        }
        Block::Table { headers, rows } => {
            out.push_str("<table class=\"list\">\n<thead><tr>");
            for header in headers {
                let _ = write!(out, "<th>{}</th>", escape(header));
            }
            out.push_str("</tr></thead>\n<tbody>\n");
            for row in rows {
                out.push_str("<tr>");
                for cell in row {
                    let _ = write!(out, "<td>{}</td>", escape(cell));
                }
                out.push_str("</tr>\n");
            }
            out.push_str("</tbody>\n</table>\n");
        }
        Block::Signature { image, name, title } => {
            out.push_str("<div class=\"signature\">\n");
            if let Some(image) = image {
                let _ = writeln!(out, "<img src=\"{}\" alt=\"Signature\">", escape(image));
            }
            let _ = writeln!(out, "<div class=\"name\">{}</div>", escape(name));
            let _ = writeln!(out, "<div class=\"title\">{}</div>", escape(title));
            out.push_str("</div>\n");
        }
        Block::Gallery { items } => {
            out.push_str("<div class=\"gallery\">\n");
            for item in items {
                out.push_str("<figure>");
                match &item.image {
                    Some(image) => {
                        let _ = write!(out, "<img src=\"{}\" alt=\"{}\">", escape(image), escape(&item.caption));
                    }
                    None => out.push_str("<span class=\"placeholder\"></span>"),
                }
                let _ = write!(
                    out,
                    "<figcaption>{}<div class=\"detail\">{}</div></figcaption>",
                    escape(&item.caption),
                    escape(&item.detail)
                );
                out.push_str("</figure>\n");
            }
            out.push_str("</div>\n");
        }
        Block::Rule => out.push_str("<hr>\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::documents::Document;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b>"O'Brien & Sons"</b>"#),
            "&lt;b&gt;&quot;O&#39;Brien &amp; Sons&quot;&lt;/b&gt;"
        );
        assert_eq!(escape("plain text"), "plain text");
    }

    #[test]
    fn test_render_is_standalone_and_escaped() {
        let doc = Document::new("Receipt <1>")
            .heading(1, "A & B")
            .paragraph("line");
        let html = render(&doc);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Receipt &lt;1&gt;</title>"));
        assert!(html.contains("<h1>A &amp; B</h1>"));
        assert!(html.contains("<p>line</p>"));
        assert!(html.ends_with("</html>\n"));
    }

    #[test]
    fn test_heading_level_is_clamped() {
        let html = render(&Document::new("t").heading(9, "deep"));
        assert!(html.contains("<h6>deep</h6>"));
    }

    #[test]
    fn test_signature_without_image_omits_img() {
        let html = render(&Document::new("t").signature(None, "Name", "Title"));
        assert!(!html.contains("<img"));
        assert!(html.contains("<div class=\"name\">Name</div>"));
    }
}
