//! Note Station markup parsing (HTML → document tree)
//!
//! Pipeline: markup string → html5ever DOM → recursive descent → document tree
//!
//! The walk keeps two conversion contexts apart. Block context (the document
//! root and the inside of containers) produces block nodes and applies the
//! drop-empty-paragraph and unwrap rules. Inline context (the inside of a
//! paragraph, heading, or table cell text run) produces only text, hardBreak
//! and image nodes; a block element encountered there cannot nest, so its
//! inline content is flattened into the surrounding run.
//!
//! Conversion never fails. Anything the parser cannot make sense of degrades
//! to a partial tree, and an empty result becomes the minimal document with a
//! single empty paragraph. A bad note must not abort a bulk import.

use html5ever::tendril::TendrilSink;
use html5ever::{parse_document, ParseOpts};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use crate::doc::{HeadingAttrs, ImageAttrs, LinkAttrs, Mark, Node};
use crate::format::ImportOptions;

/// Nesting depth at which conversion stops recursing and flattens the rest
/// of the subtree to its literal text. Real notes stay far below this; only
/// adversarial input reaches it.
const MAX_DEPTH: usize = 128;

/// Note Station emits this placeholder for images that were never uploaded.
const IMAGE_PLACEHOLDER: &str = "transparent.gif";

/// Inline elements that keep their own dispatch when encountered in a text
/// run; everything else is treated as an invisible wrapper there.
const INLINE_TAGS: &[&str] = &[
    "strong", "b", "em", "i", "s", "strike", "del", "u", "code", "a", "span", "img",
];

/// Convert Note Station markup to a document tree.
///
/// Empty or unparseable markup yields the minimal document (one empty
/// paragraph); this function has no failure mode.
pub fn import_document(markup: &str, options: &ImportOptions) -> Node {
    let dom = parse_document(RcDom::default(), ParseOpts::default()).one(markup);

    let content = match find_body(&dom.document) {
        Some(body) => convert_block_children(&body, options, 0),
        None => Vec::new(),
    };

    Node::doc(content)
}

/// Strip noise the Note Station editor leaves behind: empty style attributes
/// and runs of whitespace. Callers apply this before [`import_document`].
pub fn clean_markup(markup: &str) -> String {
    let stripped = markup.replace(" style=\"\"", "");

    let mut cleaned = String::with_capacity(stripped.len());
    let mut in_whitespace = false;
    for ch in stripped.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                cleaned.push(' ');
            }
            in_whitespace = true;
        } else {
            cleaned.push(ch);
            in_whitespace = false;
        }
    }
    cleaned
}

/// Convert child nodes in block context.
fn convert_block_children(node: &Handle, options: &ImportOptions, depth: usize) -> Vec<Node> {
    let mut result = Vec::new();
    for child in node.children.borrow().iter() {
        result.extend(convert_node(child, options, depth + 1));
    }
    result
}

/// Convert a single DOM node in block context.
///
/// Returns zero nodes for dropped input and more than one when an element is
/// unwrapped into its children.
fn convert_node(node: &Handle, options: &ImportOptions, depth: usize) -> Vec<Node> {
    if depth >= MAX_DEPTH {
        return flatten_to_paragraph(node);
    }

    match &node.data {
        NodeData::Text { contents } => {
            let text = contents.borrow().to_string();
            // Whitespace between block elements is formatting, not content.
            if text.trim().is_empty() {
                Vec::new()
            } else {
                vec![Node::text(text)]
            }
        }

        NodeData::Element { name, .. } => {
            let tag: &str = &name.local;
            match tag {
                "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                    let level = tag.as_bytes()[1] - b'0';
                    vec![convert_heading(node, level, options, depth)]
                }

                "p" | "div" => convert_paragraph(node, options, depth)
                    .into_iter()
                    .collect(),

                "br" => vec![Node::HardBreak],

                "ul" => convert_list(node, false, options, depth),
                "ol" => convert_list(node, true, options, depth),
                "li" => convert_list_item(node, options, depth).into_iter().collect(),

                "blockquote" => vec![convert_blockquote(node, options, depth)],

                "pre" => vec![convert_code_block(node)],

                // Inline code is a mark, not a block.
                "code" => convert_inline_code(node),

                "a" => convert_link(node, options, depth),

                "img" => convert_image(node, options).into_iter().collect(),

                "strong" | "b" => apply_mark(node, Mark::Bold, options, depth),
                "em" | "i" => apply_mark(node, Mark::Italic, options, depth),
                "s" | "strike" | "del" => apply_mark(node, Mark::Strike, options, depth),

                // No underline mark in the document model; unwrap.
                "u" => convert_block_children(node, options, depth),

                "span" => convert_span(node, options, depth),

                "table" => vec![convert_table(node, options, depth)],

                // thead/tbody outside a table: unwrap to reach the rows.
                "thead" | "tbody" => convert_block_children(node, options, depth),

                "hr" => vec![Node::HorizontalRule],

                "body" => convert_block_children(node, options, depth),

                _ => {
                    if options.fallback_to_paragraph {
                        convert_block_children(node, options, depth)
                    } else {
                        Vec::new()
                    }
                }
            }
        }

        // Comments, doctype, processing instructions.
        _ => Vec::new(),
    }
}

/// Convert child nodes in inline context (paragraph, heading, table cell).
///
/// Text is kept whenever it is non-empty so interior whitespace between
/// inline elements survives. Block elements found here are flattened into
/// their inline content.
fn convert_inline_children(node: &Handle, options: &ImportOptions, depth: usize) -> Vec<Node> {
    if depth >= MAX_DEPTH {
        let text = text_content(node);
        return if text.is_empty() {
            Vec::new()
        } else {
            vec![Node::text(text)]
        };
    }

    let mut result = Vec::new();
    for child in node.children.borrow().iter() {
        match &child.data {
            NodeData::Text { contents } => {
                let text = contents.borrow().to_string();
                if !text.is_empty() {
                    result.push(Node::text(text));
                }
            }
            NodeData::Element { name, .. } => {
                let tag: &str = &name.local;
                if INLINE_TAGS.contains(&tag) {
                    result.extend(convert_node(child, options, depth + 1));
                } else if tag == "br" {
                    result.push(Node::HardBreak);
                } else {
                    result.extend(convert_inline_children(child, options, depth + 1));
                }
            }
            _ => {}
        }
    }
    result
}

fn convert_heading(node: &Handle, level: u8, options: &ImportOptions, depth: usize) -> Node {
    let mut content = convert_inline_children(node, options, depth + 1);
    // A heading is never childless.
    if content.is_empty() {
        content.push(Node::text(""));
    }
    Node::Heading {
        attrs: HeadingAttrs { level },
        content,
    }
}

/// Paragraphs that convert to nothing are elided entirely; only the document
/// fallback produces an intentionally empty paragraph.
fn convert_paragraph(node: &Handle, options: &ImportOptions, depth: usize) -> Option<Node> {
    let content = convert_inline_children(node, options, depth + 1);
    if content.is_empty() {
        None
    } else {
        Some(Node::Paragraph { content })
    }
}

/// Lists keep only their `li` children; a list that ends up with no items is
/// omitted rather than emitted empty.
fn convert_list(node: &Handle, ordered: bool, options: &ImportOptions, depth: usize) -> Vec<Node> {
    let items: Vec<Node> = node
        .children
        .borrow()
        .iter()
        .filter(|child| tag_name(child) == Some("li"))
        .filter_map(|li| convert_list_item(li, options, depth + 1))
        .collect();

    if items.is_empty() {
        return Vec::new();
    }

    if ordered {
        vec![Node::OrderedList { content: items }]
    } else {
        vec![Node::BulletList { content: items }]
    }
}

fn convert_list_item(node: &Handle, options: &ImportOptions, depth: usize) -> Option<Node> {
    let content = wrap_bare_inline(convert_block_children(node, options, depth));
    if content.is_empty() {
        None
    } else {
        Some(Node::ListItem { content })
    }
}

fn convert_blockquote(node: &Handle, options: &ImportOptions, depth: usize) -> Node {
    let mut content = convert_block_children(node, options, depth);
    if content.is_empty() {
        content.push(Node::empty_paragraph());
    }
    Node::Blockquote { content }
}

/// The full literal text of the element, marks and nested tags ignored.
fn convert_code_block(node: &Handle) -> Node {
    Node::CodeBlock {
        content: vec![Node::text(text_content(node))],
    }
}

fn convert_inline_code(node: &Handle) -> Vec<Node> {
    vec![Node::Text {
        text: text_content(node),
        marks: vec![Mark::Code],
    }]
}

fn convert_link(node: &Handle, options: &ImportOptions, depth: usize) -> Vec<Node> {
    let href = attr_value(node, "href").unwrap_or_default();
    let mut content = convert_inline_children(node, options, depth + 1);
    for child in &mut content {
        child.add_mark(Mark::Link {
            attrs: LinkAttrs { href: href.clone() },
        });
    }
    content
}

/// Resolve an image source, preferring the Note Station `ref` token through
/// the caller's reference map over the literal `src`. Unresolvable images and
/// the upload placeholder produce nothing.
fn convert_image(node: &Handle, options: &ImportOptions) -> Option<Node> {
    let mut src = attr_value(node, "src");

    if let Some(reference) = attr_value(node, "ref") {
        if let Some(mapped) = options.image_ref_map.get(&reference) {
            src = Some(mapped.clone());
        }
    }

    let src = src.filter(|s| !s.is_empty())?;
    if src.contains(IMAGE_PLACEHOLDER) {
        return None;
    }

    Some(Node::Image {
        attrs: ImageAttrs {
            src,
            alt: attr_value(node, "alt").unwrap_or_default(),
        },
        marks: Vec::new(),
    })
}

/// Apply a mark to every node the element's inline content produces. Nested
/// wrappers accumulate marks innermost-first; the append skips types already
/// present.
fn apply_mark(node: &Handle, mark: Mark, options: &ImportOptions, depth: usize) -> Vec<Node> {
    let mut content = convert_inline_children(node, options, depth + 1);
    for child in &mut content {
        child.add_mark(mark.clone());
    }
    content
}

/// Spans only contribute a highlight mark, and only for a non-transparent
/// background color. All other span styling passes through unmarked.
fn convert_span(node: &Handle, options: &ImportOptions, depth: usize) -> Vec<Node> {
    let mut content = convert_inline_children(node, options, depth + 1);

    let style = attr_value(node, "style").unwrap_or_default();
    let highlighted =
        style.contains("background-color") && !style.contains("background-color: transparent");

    if highlighted {
        for child in &mut content {
            child.add_mark(Mark::Highlight);
        }
    }
    content
}

fn convert_table(node: &Handle, options: &ImportOptions, depth: usize) -> Node {
    let mut rows = Vec::new();

    for child in node.children.borrow().iter() {
        match tag_name(child) {
            Some(section @ ("thead" | "tbody")) => {
                let header_section = section == "thead";
                for row in child.children.borrow().iter() {
                    if tag_name(row) == Some("tr") {
                        if let Some(converted) =
                            convert_table_row(row, header_section, options, depth + 2)
                        {
                            rows.push(converted);
                        }
                    }
                }
            }
            Some("tr") => {
                if let Some(converted) = convert_table_row(child, false, options, depth + 1) {
                    rows.push(converted);
                }
            }
            _ => {}
        }
    }

    // A table is never empty: synthesize one empty cell if nothing survived.
    if rows.is_empty() {
        rows.push(Node::TableRow {
            content: vec![Node::TableCell {
                content: vec![Node::empty_paragraph()],
            }],
        });
    }

    Node::Table { content: rows }
}

fn convert_table_row(
    node: &Handle,
    header_row: bool,
    options: &ImportOptions,
    depth: usize,
) -> Option<Node> {
    let mut cells = Vec::new();

    for child in node.children.borrow().iter() {
        if let Some(tag @ ("td" | "th")) = tag_name(child) {
            // A `th` is a header cell wherever it appears.
            cells.push(convert_table_cell(
                child,
                tag == "th" || header_row,
                options,
                depth + 1,
            ));
        }
    }

    if cells.is_empty() {
        None
    } else {
        Some(Node::TableRow { content: cells })
    }
}

fn convert_table_cell(node: &Handle, header: bool, options: &ImportOptions, depth: usize) -> Node {
    let mut content = wrap_bare_inline(convert_block_children(node, options, depth));
    if content.is_empty() {
        content.push(Node::empty_paragraph());
    }

    if header {
        Node::TableHeader { content }
    } else {
        Node::TableCell { content }
    }
}

/// List items and table cells hold block content; any bare inline node that
/// block conversion produced gets its own synthetic paragraph.
fn wrap_bare_inline(nodes: Vec<Node>) -> Vec<Node> {
    nodes
        .into_iter()
        .map(|node| match node {
            inline @ (Node::Text { .. } | Node::Image { .. } | Node::HardBreak) => {
                Node::Paragraph {
                    content: vec![inline],
                }
            }
            block => block,
        })
        .collect()
}

/// Past the depth cap the subtree collapses to its text, preserving content
/// without risking the stack.
fn flatten_to_paragraph(node: &Handle) -> Vec<Node> {
    let text = text_content(node);
    if text.trim().is_empty() {
        Vec::new()
    } else {
        vec![Node::Paragraph {
            content: vec![Node::text(text)],
        }]
    }
}

fn find_body(node: &Handle) -> Option<Handle> {
    if tag_name(node) == Some("body") {
        return Some(node.clone());
    }
    for child in node.children.borrow().iter() {
        if let Some(body) = find_body(child) {
            return Some(body);
        }
    }
    None
}

fn tag_name(node: &Handle) -> Option<&str> {
    match &node.data {
        NodeData::Element { name, .. } => Some(&name.local),
        _ => None,
    }
}

fn attr_value(node: &Handle, attr: &str) -> Option<String> {
    match &node.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|a| &*a.name.local == attr)
            .map(|a| a.value.to_string()),
        _ => None,
    }
}

/// Concatenated text of a subtree. Iterative so the depth cap is the only
/// recursion bound that matters.
fn text_content(node: &Handle) -> String {
    let mut out = String::new();
    let mut stack = vec![node.clone()];
    while let Some(current) = stack.pop() {
        if let NodeData::Text { contents } = &current.data {
            out.push_str(&contents.borrow());
        }
        for child in current.children.borrow().iter().rev() {
            stack.push(child.clone());
        }
    }
    out
}
