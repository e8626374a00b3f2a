//! Core data structures for the rich document tree.
//!
//! The serialized form is the TipTap JSON node shape: every node carries a
//! `type` tag, containers carry `content`, text nodes carry `text` and an
//! optional `marks` list, and attribute-bearing nodes carry `attrs`. Fields
//! that are empty are omitted entirely, so an empty paragraph serializes as
//! `{"type":"paragraph"}` and round-trips losslessly.

use serde::{Deserialize, Serialize};

/// A node in the document tree.
///
/// The tag set is closed: anything a converter cannot express with these
/// variants is either unwrapped into its children or dropped at import time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Node {
    Doc {
        content: Vec<Node>,
    },
    Paragraph {
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        content: Vec<Node>,
    },
    Heading {
        attrs: HeadingAttrs,
        content: Vec<Node>,
    },
    Text {
        text: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        marks: Vec<Mark>,
    },
    BulletList {
        content: Vec<Node>,
    },
    OrderedList {
        content: Vec<Node>,
    },
    ListItem {
        content: Vec<Node>,
    },
    Blockquote {
        content: Vec<Node>,
    },
    CodeBlock {
        content: Vec<Node>,
    },
    Image {
        attrs: ImageAttrs,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        marks: Vec<Mark>,
    },
    HardBreak,
    HorizontalRule,
    Table {
        content: Vec<Node>,
    },
    TableRow {
        content: Vec<Node>,
    },
    TableCell {
        content: Vec<Node>,
    },
    TableHeader {
        content: Vec<Node>,
    },
}

/// An inline formatting annotation attached to a text (or image) node.
///
/// Marks compose rather than replace: nested formatting accumulates marks on
/// the innermost text nodes, one entry per mark type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Mark {
    Bold,
    Italic,
    Strike,
    Code,
    Highlight,
    Link { attrs: LinkAttrs },
}

/// Attributes for heading nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadingAttrs {
    pub level: u8,
}

/// Attributes for image nodes. `src` is always a resolved URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageAttrs {
    pub src: String,
    pub alt: String,
}

/// Attributes for link marks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkAttrs {
    pub href: String,
}

impl Node {
    /// A `doc` root. Containers are never left empty, so a document without
    /// content gets a single empty paragraph.
    pub fn doc(content: Vec<Node>) -> Node {
        if content.is_empty() {
            Node::Doc {
                content: vec![Node::empty_paragraph()],
            }
        } else {
            Node::Doc { content }
        }
    }

    pub fn text(text: impl Into<String>) -> Node {
        Node::Text {
            text: text.into(),
            marks: Vec::new(),
        }
    }

    pub fn paragraph(content: Vec<Node>) -> Node {
        Node::Paragraph { content }
    }

    pub fn empty_paragraph() -> Node {
        Node::Paragraph {
            content: Vec::new(),
        }
    }

    /// Child nodes, or an empty slice for leaf nodes.
    pub fn content(&self) -> &[Node] {
        match self {
            Node::Doc { content }
            | Node::Paragraph { content }
            | Node::Heading { content, .. }
            | Node::BulletList { content }
            | Node::OrderedList { content }
            | Node::ListItem { content }
            | Node::Blockquote { content }
            | Node::CodeBlock { content }
            | Node::Table { content }
            | Node::TableRow { content }
            | Node::TableCell { content }
            | Node::TableHeader { content } => content,
            Node::Text { .. } | Node::Image { .. } | Node::HardBreak | Node::HorizontalRule => &[],
        }
    }

    /// Append a mark to a text or image node. Leaf nodes that cannot carry
    /// marks are left untouched, and a mark whose type is already present is
    /// not added twice.
    pub fn add_mark(&mut self, mark: Mark) {
        match self {
            Node::Text { marks, .. } | Node::Image { marks, .. } => {
                if !marks.iter().any(|m| m.kind_matches(&mark)) {
                    marks.push(mark);
                }
            }
            _ => {}
        }
    }

    pub fn marks(&self) -> &[Mark] {
        match self {
            Node::Text { marks, .. } | Node::Image { marks, .. } => marks,
            _ => &[],
        }
    }
}

impl Mark {
    /// Whether two marks are of the same type, ignoring attributes.
    pub fn kind_matches(&self, other: &Mark) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}
