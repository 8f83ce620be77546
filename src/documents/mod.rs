//! Printable output as a structured document model. Builders turn records
//! into a block list; render targets (HTML, CSV) are separate, so document
//! content is testable without matching markup strings.

pub mod builders;
pub mod export;
pub mod html;

/// One printable page.
#[derive(Debug, Clone)]
pub struct Document {
    pub title: String,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone)]
pub enum Block {
    Heading { level: u8, text: String },
    Paragraph { text: String },
    /// Label/value pairs rendered as a two-column table.
    KeyValues { rows: Vec<(String, String)> },
    Table { headers: Vec<String>, rows: Vec<Vec<String>> },
    /// Officiant sign-off: optional signature image above name and title.
    Signature {
        image: Option<String>,
        name: String,
        title: String,
    },
    /// Captioned image grid, used by the photo directory.
    Gallery { items: Vec<GalleryItem> },
    Rule,
}

#[derive(Debug, Clone)]
pub struct GalleryItem {
    pub image: Option<String>,
    pub caption: String,
    pub detail: String,
}

impl Document {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            blocks: Vec::new(),
        }
    }

    pub fn heading(mut self, level: u8, text: impl Into<String>) -> Self {
        self.blocks.push(Block::Heading {
            level,
            text: text.into(),
        });
        self
    }

    pub fn paragraph(mut self, text: impl Into<String>) -> Self {
        self.blocks.push(Block::Paragraph { text: text.into() });
        self
    }

    pub fn key_values(mut self, rows: Vec<(String, String)>) -> Self {
        self.blocks.push(Block::KeyValues { rows });
        self
    }

    pub fn table(mut self, headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        self.blocks.push(Block::Table { headers, rows });
        self
    }

    pub fn signature(
        mut self,
        image: Option<String>,
        name: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        self.blocks.push(Block::Signature {
            image,
            name: name.into(),
            title: title.into(),
        });
        self
    }

    pub fn gallery(mut self, items: Vec<GalleryItem>) -> Self {
        self.blocks.push(Block::Gallery { items });
        self
    }

    pub fn rule(mut self) -> Self {
        self.blocks.push(Block::Rule);
        self
    }

    /// All heading text in order, a convenience for content assertions.
    pub fn headings(&self) -> Vec<&str> {
        self.blocks
            .iter()
            .filter_map(|b| match b {
                Block::Heading { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_keeps_block_order() {
        let doc = Document::new("Test")
            .heading(1, "First")
            .rule()
            .paragraph("Body")
            .heading(2, "Second");

        assert_eq!(doc.blocks.len(), 4);
        assert_eq!(doc.headings(), vec!["First", "Second"]);
        assert!(matches!(doc.blocks[1], Block::Rule));
    }
}
