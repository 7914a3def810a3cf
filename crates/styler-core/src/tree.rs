//! Style tree data model.
//!
//! A [`Document`] is an ordered sequence of [`StyleNode`]s: plain-text leaves, hard line
//! breaks, and style wrappers. Wrappers nest freely across kinds (bold inside colored inside
//! underlined is valid and commonly produced), but a wrapper's style is fixed at creation:
//! restyling a range always removes the old wrappers and creates a new one (see
//! [`restyle`](crate::restyle)).
//!
//! Document ordering is reading order and is preserved exactly by every operation.

/// The closed set of supported style kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleKind {
    /// Bold text weight.
    Bold,
    /// Underlined text.
    Underline,
    /// Text (foreground) color.
    Foreground,
    /// Highlight (background) color.
    Background,
}

impl StyleKind {
    /// Stable lowercase name, used by host-facing boundaries.
    pub fn as_str(&self) -> &'static str {
        match self {
            StyleKind::Bold => "bold",
            StyleKind::Underline => "underline",
            StyleKind::Foreground => "foreground",
            StyleKind::Background => "background",
        }
    }

    /// Parse a stable lowercase name back into a kind.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "bold" => Some(StyleKind::Bold),
            "underline" => Some(StyleKind::Underline),
            "foreground" => Some(StyleKind::Foreground),
            "background" => Some(StyleKind::Background),
            _ => None,
        }
    }

    /// Whether this kind carries a color value. `Bold` and `Underline` do not.
    pub fn takes_value(&self) -> bool {
        matches!(self, StyleKind::Foreground | StyleKind::Background)
    }
}

/// Exactly one `(kind, value)` pair carried by a style wrapper.
///
/// `value` is a hex color string (e.g. `"#dc322f"`) for [`StyleKind::Foreground`] and
/// [`StyleKind::Background`], and is always empty for [`StyleKind::Bold`] and
/// [`StyleKind::Underline`]; the constructors enforce this.
///
/// Color values are *not* validated against the supported swatch set. An unmapped value is
/// accepted by the model and degrades to a default code at serialization time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    kind: StyleKind,
    value: String,
}

impl Style {
    /// Create a style from a host request triple. The value is ignored for kinds that do not
    /// take one.
    pub fn new(kind: StyleKind, value: &str) -> Self {
        if kind.takes_value() {
            Self {
                kind,
                value: value.to_string(),
            }
        } else {
            Self {
                kind,
                value: String::new(),
            }
        }
    }

    /// Bold style.
    pub fn bold() -> Self {
        Self::new(StyleKind::Bold, "")
    }

    /// Underline style.
    pub fn underline() -> Self {
        Self::new(StyleKind::Underline, "")
    }

    /// Text color style with a hex color value.
    pub fn foreground(color: &str) -> Self {
        Self::new(StyleKind::Foreground, color)
    }

    /// Highlight color style with a hex color value.
    pub fn background(color: &str) -> Self {
        Self::new(StyleKind::Background, color)
    }

    /// The style kind.
    pub fn kind(&self) -> StyleKind {
        self.kind
    }

    /// The color value; empty for kinds that do not take one.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A node in the style tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleNode {
    /// An immutable run of plain text. Hard breaks are modeled as [`StyleNode::Break`], not
    /// embedded newlines.
    Leaf(String),
    /// A hard line break. Childless and style-less; counts as one character.
    Break,
    /// A style wrapper around an ordered sequence of child nodes.
    Styled {
        /// The single style carried by this wrapper; fixed at creation.
        style: Style,
        /// The wrapped content, in reading order.
        children: Vec<StyleNode>,
    },
}

impl StyleNode {
    /// Create a text leaf.
    pub fn leaf(text: impl Into<String>) -> Self {
        StyleNode::Leaf(text.into())
    }

    /// Create a style wrapper around `children`.
    pub fn styled(style: Style, children: Vec<StyleNode>) -> Self {
        StyleNode::Styled { style, children }
    }

    /// Number of characters (Unicode scalar values) under this node. A break counts as one.
    pub fn char_count(&self) -> usize {
        match self {
            StyleNode::Leaf(text) => text.chars().count(),
            StyleNode::Break => 1,
            StyleNode::Styled { children, .. } => children.iter().map(StyleNode::char_count).sum(),
        }
    }

    /// Number of nodes in this sub-tree, wrappers included.
    pub fn node_count(&self) -> usize {
        match self {
            StyleNode::Leaf(_) | StyleNode::Break => 1,
            StyleNode::Styled { children, .. } => {
                1 + children.iter().map(StyleNode::node_count).sum::<usize>()
            }
        }
    }

    pub(crate) fn collect_text(&self, out: &mut String) {
        match self {
            StyleNode::Leaf(text) => out.push_str(text),
            StyleNode::Break => out.push('\n'),
            StyleNode::Styled { children, .. } => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Plain text under this node, with breaks rendered as `'\n'`.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }
}

/// The fixed placeholder text shown before the user has entered anything, and restored by
/// [`Document::placeholder`].
pub const PLACEHOLDER_TEXT: &str = "Enter your text here...";

/// The full editable content: an ordered sequence of [`StyleNode`]s.
///
/// A document is owned exclusively by one editing session (see
/// [`StylerSession`](crate::session::StylerSession)), mutated only through
/// [`apply_to_range`](Document::apply_to_range), and replaced wholesale on reset. Serialization
/// reads it without mutating it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    nodes: Vec<StyleNode>,
}

impl Document {
    /// The initial/post-reset document: a single leaf holding [`PLACEHOLDER_TEXT`].
    pub fn placeholder() -> Self {
        Self {
            nodes: vec![StyleNode::leaf(PLACEHOLDER_TEXT)],
        }
    }

    /// Build an unstyled document from plain text. `'\n'` characters become break nodes; CRLF
    /// input is normalized to plain breaks.
    pub fn from_text(text: &str) -> Self {
        let mut nodes = Vec::new();
        for (i, segment) in text.split('\n').enumerate() {
            if i > 0 {
                nodes.push(StyleNode::Break);
            }
            let segment = segment.strip_suffix('\r').unwrap_or(segment);
            if !segment.is_empty() {
                nodes.push(StyleNode::leaf(segment));
            }
        }
        Self { nodes }
    }

    /// Build a document from an explicit node sequence.
    pub fn from_nodes(nodes: Vec<StyleNode>) -> Self {
        Self { nodes }
    }

    /// The top-level node sequence, in reading order.
    pub fn nodes(&self) -> &[StyleNode] {
        &self.nodes
    }

    pub(crate) fn take_nodes(&mut self) -> Vec<StyleNode> {
        std::mem::take(&mut self.nodes)
    }

    pub(crate) fn set_nodes(&mut self, nodes: Vec<StyleNode>) {
        self.nodes = nodes;
    }

    /// Total character count (Unicode scalar values; breaks count as one).
    pub fn char_count(&self) -> usize {
        self.nodes.iter().map(StyleNode::char_count).sum()
    }

    /// Total node count across the whole tree.
    pub fn node_count(&self) -> usize {
        self.nodes.iter().map(StyleNode::node_count).sum()
    }

    /// Plain text of the whole document, with breaks rendered as `'\n'`.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for node in &self.nodes {
            node.collect_text(&mut out);
        }
        out
    }

    /// Whether this document is exactly the placeholder document.
    pub fn is_placeholder(&self) -> bool {
        matches!(self.nodes.as_slice(), [StyleNode::Leaf(text)] if text == PLACEHOLDER_TEXT)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::placeholder()
    }
}
