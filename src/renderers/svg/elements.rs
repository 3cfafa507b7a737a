//! SVG element tree
//!
//! A small owned DOM for the chart snapshot. Names are kept exactly as they
//! appear in the markup (including prefixes such as `xlink:href`), and
//! namespace declarations are ordinary attributes, so a parse/serialize pass
//! does not reorder or rename anything.

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
pub const XLINK_NAMESPACE: &str = "http://www.w3.org/1999/xlink";

#[derive(Debug, Clone, PartialEq)]
pub enum SvgNode {
    Element(SvgElement),
    Text(String),
    CData(String),
    Comment(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SvgElement {
    /// Qualified name as written (`svg`, `text`, `svg:g`)
    pub name: String,
    /// Attributes in document order; values are unescaped
    pub attributes: Vec<(String, String)>,
    pub children: Vec<SvgNode>,
}

impl SvgElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(key, value);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(SvgNode::Text(text.into()));
        self
    }

    /// Name without namespace prefix
    pub fn local_name(&self) -> &str {
        self.name.rsplit(':').next().unwrap_or(&self.name)
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set an attribute, replacing an existing value in place
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((key, value)),
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .map(|list| list.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    /// Append a class to the `class` list unless it is already present
    pub fn add_class(&mut self, class: &str) {
        if class.is_empty() || self.has_class(class) {
            return;
        }
        let list = match self.attribute("class") {
            Some(existing) if !existing.trim().is_empty() => format!("{} {}", existing.trim(), class),
            _ => class.to_string(),
        };
        self.set_attribute("class", list);
    }

    /// Insert nodes before all existing children, keeping their given order
    pub fn prepend_children(&mut self, nodes: Vec<SvgNode>) {
        self.children.splice(0..0, nodes);
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &SvgElement> {
        self.children.iter().filter_map(|node| match node {
            SvgNode::Element(el) => Some(el),
            _ => None,
        })
    }

    /// All descendant elements (not including self) with the given local name,
    /// in document order
    pub fn descendants_named<'a>(&'a self, local: &str) -> Vec<&'a SvgElement> {
        let mut found = Vec::new();
        collect_named(self, local, &mut found);
        found
    }

    /// Concatenated text and CDATA content of this element's subtree
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }

    /// True when any attribute in the subtree uses the `xlink:` prefix
    pub fn uses_xlink(&self) -> bool {
        self.attributes
            .iter()
            .any(|(k, _)| k.starts_with("xlink:") && k != "xmlns:xlink")
            || self.child_elements().any(SvgElement::uses_xlink)
    }
}

fn collect_named<'a>(el: &'a SvgElement, local: &str, found: &mut Vec<&'a SvgElement>) {
    for child in el.child_elements() {
        if child.local_name() == local {
            found.push(child);
        }
        collect_named(child, local, found);
    }
}

fn collect_text(el: &SvgElement, out: &mut String) {
    for node in &el.children {
        match node {
            SvgNode::Text(text) | SvgNode::CData(text) => out.push_str(text),
            SvgNode::Element(child) => collect_text(child, out),
            SvgNode::Comment(_) => {}
        }
    }
}
