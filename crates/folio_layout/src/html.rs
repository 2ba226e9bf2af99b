//! HTML and JSON snapshots of a render tree

use std::fmt::Write as _;

use crate::element::{Element, Node};

/// Serializes a render tree to HTML
#[derive(Clone, Debug, Default)]
pub struct HtmlRenderer {
    /// Indent nested elements that contain no text
    pretty: bool,
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    pub fn render(&self, node: &Node) -> String {
        let mut out = String::new();
        self.write_node(node, 0, &mut out);
        out
    }

    pub fn render_element(&self, element: &Element) -> String {
        let mut out = String::new();
        self.write_element(element, 0, &mut out);
        out
    }

    /// Full standalone document around `body`
    pub fn document(&self, title: &str, html_class: &str, body: &Element) -> String {
        let mut out = String::new();
        out.push_str("<!DOCTYPE html>\n");
        let _ = write!(
            out,
            "<html lang=\"en\" class=\"{}\">",
            html_escape::encode_double_quoted_attribute(html_class)
        );
        out.push_str("<head><meta charset=\"utf-8\">");
        let _ = write!(out, "<title>{}</title>", html_escape::encode_text(title));
        out.push_str("</head><body>");
        if self.pretty {
            out.push('\n');
        }
        self.write_element(body, 0, &mut out);
        if self.pretty {
            out.push('\n');
        }
        out.push_str("</body></html>\n");
        out
    }

    fn write_node(&self, node: &Node, depth: usize, out: &mut String) {
        match node {
            Node::Text(t) => out.push_str(&html_escape::encode_text(t)),
            Node::Element(el) => self.write_element(el, depth, out),
        }
    }

    fn write_element(&self, el: &Element, depth: usize, out: &mut String) {
        let tag = el.tag.as_str();
        out.push('<');
        out.push_str(tag);

        if let Some(id) = &el.id {
            write_attr(out, "id", id);
        }
        if !el.classes.is_empty() {
            write_attr(out, "class", &el.classes.join(" "));
        }
        for (name, value) in &el.attrs {
            write_attr(out, name, value);
        }
        let css = el.style.to_css();
        if !css.is_empty() {
            write_attr(out, "style", &css);
        }
        out.push('>');

        let block = self.pretty
            && !el.children.is_empty()
            && el.children.iter().all(|c| matches!(c, Node::Element(_)));

        for child in &el.children {
            if block {
                out.push('\n');
                out.push_str(&"  ".repeat(depth + 1));
            }
            self.write_node(child, depth + 1, out);
        }
        if block {
            out.push('\n');
            out.push_str(&"  ".repeat(depth));
        }

        out.push_str("</");
        out.push_str(tag);
        out.push('>');
    }
}

fn write_attr(out: &mut String, name: &str, value: &str) {
    let _ = write!(
        out,
        " {}=\"{}\"",
        name,
        html_escape::encode_double_quoted_attribute(value)
    );
}

/// Compact HTML for a node
pub fn render_html(node: &Node) -> String {
    HtmlRenderer::new().render(node)
}

/// Pretty-printed JSON for a node
pub fn to_json(node: &Node) -> serde_json::Result<String> {
    serde_json::to_string_pretty(node)
}
