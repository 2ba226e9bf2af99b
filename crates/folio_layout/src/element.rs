//! Render tree
//!
//! A page renders into a tree of [`Element`]s and text [`Node`]s. Elements
//! carry an inline [`Style`] holding the visual properties animations write
//! to, so a snapshot of the tree at time `t` is a complete picture of the
//! page at that moment.
//!
//! ```
//! use folio_layout::element::{div, span, Length};
//!
//! let ui = div()
//!     .class("hero")
//!     .relative()
//!     .child(span().opacity(0.5).translate_y(Length::Px(10.0)).child("Hi"));
//!
//! assert_eq!(ui.text_content(), "Hi");
//! ```

use folio_animation::MotionProps;
use folio_core::Color;
use serde::{Deserialize, Serialize};

/// Format a CSS number with at most three decimals
pub(crate) fn css_number(value: f32) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    let s = format!("{rounded:.3}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// A CSS length
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "unit", content = "value")]
pub enum Length {
    Px(f32),
    Percent(f32),
}

impl Length {
    pub fn value(&self) -> f32 {
        match self {
            Length::Px(v) | Length::Percent(v) => *v,
        }
    }

    pub fn to_css(&self) -> String {
        match self {
            Length::Px(v) => format!("{}px", css_number(*v)),
            Length::Percent(v) => format!("{}%", css_number(*v)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Display {
    Block,
    InlineBlock,
    Flex,
    None,
}

impl Display {
    fn as_css(&self) -> &'static str {
        match self {
            Display::Block => "block",
            Display::InlineBlock => "inline-block",
            Display::Flex => "flex",
            Display::None => "none",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Relative,
    Absolute,
}

impl Position {
    fn as_css(&self) -> &'static str {
        match self {
            Position::Relative => "relative",
            Position::Absolute => "absolute",
        }
    }
}

/// White-space handling; `Pre` keeps a lone space from collapsing
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WhiteSpace {
    Normal,
    Pre,
}

impl WhiteSpace {
    fn as_css(&self) -> &'static str {
        match self {
            WhiteSpace::Normal => "normal",
            WhiteSpace::Pre => "pre",
        }
    }
}

/// Inline style of an element
///
/// Unset properties are omitted from both the CSS and the JSON form.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Style {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub display: Option<Display>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub position: Option<Position>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub white_space: Option<WhiteSpace>,
    #[serde(skip_serializing_if = "std::ops::Not::not", default)]
    pub overflow_hidden: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub width: Option<Length>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub height: Option<Length>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub left: Option<Length>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub top: Option<Length>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub border_radius: Option<Length>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub background: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub opacity: Option<f32>,
    /// Visual offset; does not affect layout flow
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub translate_y: Option<Length>,
}

impl Style {
    pub fn is_empty(&self) -> bool {
        *self == Style::default()
    }

    /// Render as an inline CSS declaration list
    pub fn to_css(&self) -> String {
        let mut decls: Vec<String> = Vec::new();

        if let Some(display) = self.display {
            decls.push(format!("display: {}", display.as_css()));
        }
        if let Some(position) = self.position {
            decls.push(format!("position: {}", position.as_css()));
        }
        if let Some(ws) = self.white_space {
            decls.push(format!("white-space: {}", ws.as_css()));
        }
        if self.overflow_hidden {
            decls.push("overflow: hidden".to_string());
        }
        let lengths = [
            ("width", self.width),
            ("height", self.height),
            ("left", self.left),
            ("top", self.top),
            ("border-radius", self.border_radius),
        ];
        for (name, value) in lengths {
            if let Some(value) = value {
                decls.push(format!("{name}: {}", value.to_css()));
            }
        }
        if let Some(color) = self.color {
            decls.push(format!("color: {}", color.to_css()));
        }
        if let Some(bg) = self.background {
            decls.push(format!("background-color: {}", bg.to_css()));
        }
        if let Some(opacity) = self.opacity {
            decls.push(format!("opacity: {}", css_number(opacity)));
        }
        if let Some(ty) = self.translate_y {
            decls.push(format!("transform: translateY({})", ty.to_css()));
        }

        decls.join("; ")
    }
}

/// Element tag
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Main,
    Header,
    Section,
    Footer,
    Div,
    Span,
    H1,
    H2,
    P,
    A,
    Button,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Main => "main",
            Tag::Header => "header",
            Tag::Section => "section",
            Tag::Footer => "footer",
            Tag::Div => "div",
            Tag::Span => "span",
            Tag::H1 => "h1",
            Tag::H2 => "h2",
            Tag::P => "p",
            Tag::A => "a",
            Tag::Button => "button",
        }
    }
}

/// A node in the render tree
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }

    pub fn text_content(&self) -> String {
        match self {
            Node::Element(el) => el.text_content(),
            Node::Text(t) => t.clone(),
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::Text(s.to_string())
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::Text(s)
    }
}

/// An element with attributes, inline style and children
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub tag: Tag,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub classes: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub attrs: Vec<(String, String)>,
    #[serde(skip_serializing_if = "Style::is_empty", default)]
    pub style: Style,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub children: Vec<Node>,
}

/// Create an element with the given tag
pub fn el(tag: Tag) -> Element {
    Element::new(tag)
}

pub fn div() -> Element {
    Element::new(Tag::Div)
}

pub fn span() -> Element {
    Element::new(Tag::Span)
}

/// Create a text node
pub fn text(content: impl Into<String>) -> Node {
    Node::Text(content.into())
}

/// Decorative icon placeholder of a fixed square size
pub fn icon(name: &str, size: f32) -> Element {
    span()
        .class("icon")
        .class(format!("icon-{name}"))
        .attr("aria-hidden", "true")
        .inline_block()
        .w(Length::Px(size))
        .h(Length::Px(size))
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            id: None,
            classes: Vec::new(),
            attrs: Vec::new(),
            style: Style::default(),
            children: Vec::new(),
        }
    }

    // =========================================================================
    // Attributes
    // =========================================================================

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add a class; duplicates are ignored
    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
        self
    }

    /// Set an attribute, replacing an earlier value
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    /// Link that opens in a new browsing context
    pub fn external_link(self, href: impl Into<String>) -> Self {
        self.attr("href", href)
            .attr("target", "_blank")
            .attr("rel", "noopener noreferrer")
    }

    // =========================================================================
    // Children
    // =========================================================================

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    // =========================================================================
    // Style
    // =========================================================================

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn display(mut self, display: Display) -> Self {
        self.style.display = Some(display);
        self
    }

    pub fn inline_block(self) -> Self {
        self.display(Display::InlineBlock)
    }

    pub fn flex(self) -> Self {
        self.display(Display::Flex)
    }

    pub fn relative(mut self) -> Self {
        self.style.position = Some(Position::Relative);
        self
    }

    pub fn absolute(mut self) -> Self {
        self.style.position = Some(Position::Absolute);
        self
    }

    pub fn white_space(mut self, ws: WhiteSpace) -> Self {
        self.style.white_space = Some(ws);
        self
    }

    pub fn overflow_hidden(mut self) -> Self {
        self.style.overflow_hidden = true;
        self
    }

    pub fn w(mut self, width: Length) -> Self {
        self.style.width = Some(width);
        self
    }

    pub fn h(mut self, height: Length) -> Self {
        self.style.height = Some(height);
        self
    }

    pub fn left(mut self, left: Length) -> Self {
        self.style.left = Some(left);
        self
    }

    pub fn top(mut self, top: Length) -> Self {
        self.style.top = Some(top);
        self
    }

    pub fn rounded_full(mut self) -> Self {
        self.style.border_radius = Some(Length::Percent(50.0));
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.style.color = Some(color);
        self
    }

    pub fn bg(mut self, color: Color) -> Self {
        self.style.background = Some(color);
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.style.opacity = Some(opacity.clamp(0.0, 1.0));
        self
    }

    pub fn translate_y(mut self, offset: Length) -> Self {
        self.style.translate_y = Some(offset);
        self
    }

    /// Apply sampled motion values
    pub fn motion(self, props: MotionProps) -> Self {
        self.opacity(props.display_opacity())
            .translate_y(Length::Px(props.translate_y))
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Child elements, skipping text nodes
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Concatenated text of all descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(t) => out.push_str(t),
                Node::Element(el) => el.collect_text(out),
            }
        }
    }

    /// Depth-first search by id
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.child_elements().find_map(|c| c.find_by_id(id))
    }

    /// All descendants (including self) carrying a class, in document order
    pub fn find_all_by_class(&self, class: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_by_class(class, &mut found);
        found
    }

    fn collect_by_class<'a>(&'a self, class: &str, found: &mut Vec<&'a Element>) {
        if self.has_class(class) {
            found.push(self);
        }
        for child in self.child_elements() {
            child.collect_by_class(class, found);
        }
    }
}
