//! # Presentation Elements
//!
//! The output side of composition. An [`Element`] tree mirrors the shape of
//! the node tree it was composed from, with type-specific transformations
//! applied at each level.
//!
//! The model is DOM-like on purpose: tags with ordered classes, attributes
//! and children, plus text leaves and wrapper-less fragments. Serializers in
//! `folio-std` turn it into HTML or wrapped plain text; hosts are free to
//! walk it themselves.

/// Class carried by diagnostic elements emitted for nodes that could not be
/// rendered.
pub const DIAGNOSTIC_CLASS: &str = "not-implemented";

/// A node of the presentation tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    /// A named element with classes, attributes and children.
    Tag(Tag),
    /// A text leaf.
    Text(String),
    /// An ordered group of elements without a wrapper.
    Fragment(Vec<Element>),
    /// Nothing.
    Empty,
}

/// A named element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    /// Element name, e.g. `div`, `code`, `dl`.
    pub name: String,
    /// Style classes in insertion order.
    pub classes: Vec<String>,
    /// Attributes in insertion order.
    pub attrs: Vec<(String, String)>,
    /// Children in document order.
    pub children: Vec<Element>,
}

impl Tag {
    /// Create an empty element with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            classes: Vec::new(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add a style class.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Add an attribute.
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((key.into(), value.into()));
        self
    }

    /// Append one child.
    pub fn child(mut self, child: impl Into<Element>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append several children, keeping their order.
    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    /// Whether the element carries `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Look up an attribute.
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl From<Tag> for Element {
    fn from(tag: Tag) -> Self {
        Element::Tag(tag)
    }
}

impl From<String> for Element {
    fn from(text: String) -> Self {
        Element::Text(text)
    }
}

impl From<&str> for Element {
    fn from(text: &str) -> Self {
        Element::Text(text.to_string())
    }
}

impl Element {
    /// Create a text leaf.
    pub fn text(text: impl Into<String>) -> Self {
        Element::Text(text.into())
    }

    /// Group elements without a wrapper.
    pub fn fragment(children: impl IntoIterator<Item = Element>) -> Self {
        Element::Fragment(children.into_iter().collect())
    }

    /// The element as a tag, if it is one.
    pub fn as_tag(&self) -> Option<&Tag> {
        match self {
            Element::Tag(tag) => Some(tag),
            _ => None,
        }
    }

    /// Direct children; empty for leaves.
    pub fn child_elements(&self) -> &[Element] {
        match self {
            Element::Tag(tag) => &tag.children,
            Element::Fragment(children) => children,
            Element::Text(_) | Element::Empty => &[],
        }
    }

    /// Whether this is a diagnostic element emitted for an unrenderable node.
    pub fn is_diagnostic(&self) -> bool {
        self.as_tag().is_some_and(|tag| tag.has_class(DIAGNOSTIC_CLASS))
    }

    /// Whether any element of the tree is a diagnostic element.
    pub fn contains_diagnostic(&self) -> bool {
        self.is_diagnostic() || self.child_elements().iter().any(Element::contains_diagnostic)
    }

    /// All text leaves concatenated in document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Element::Text(text) => out.push_str(text),
            Element::Empty => {}
            Element::Tag(_) | Element::Fragment(_) => {
                for child in self.child_elements() {
                    child.collect_text(out);
                }
            }
        }
    }

    /// First tag named `name`, in pre-order.
    pub fn find_tag(&self, name: &str) -> Option<&Tag> {
        self.find(&|tag| tag.name == name)
    }

    /// First tag carrying `class`, in pre-order.
    pub fn find_class(&self, class: &str) -> Option<&Tag> {
        self.find(&|tag| tag.has_class(class))
    }

    /// Every tag named `name`, in pre-order.
    pub fn find_all_tags(&self, name: &str) -> Vec<&Tag> {
        let mut found = Vec::new();
        self.walk(&mut |tag| {
            if tag.name == name {
                found.push(tag);
            }
        });
        found
    }

    fn find(&self, pred: &dyn Fn(&Tag) -> bool) -> Option<&Tag> {
        if let Element::Tag(tag) = self {
            if pred(tag) {
                return Some(tag);
            }
        }
        self.child_elements().iter().find_map(|child| child.find(pred))
    }

    fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a Tag)) {
        if let Element::Tag(tag) = self {
            visit(tag);
        }
        for child in self.child_elements() {
            child.walk(visit);
        }
    }
}
