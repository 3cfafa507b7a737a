//! Stylesheet injection for standalone SVG documents
//!
//! On the host page the chart is styled by rules scoped to its container
//! element, e.g. `.webtrees-fan-chart-container svg .name`. A downloaded file
//! has no such container, so the root `<svg>` takes over the container class
//! and selectors that step from the container into the `svg` are rewritten
//! to match the root directly.

use super::elements::{SvgElement, SvgNode};

/// Attribute naming the stylesheet an injected `<style>` node came from
pub const STYLESHEET_ATTRIBUTE: &str = "data-stylesheet";

/// CSS text of one stylesheet, ready to be inlined
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedStyle {
    pub name: String,
    pub css: String,
}

impl ResolvedStyle {
    pub fn new(name: impl Into<String>, css: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            css: css.into(),
        }
    }
}

/// Insert one `<style>` node per stylesheet at the top of `root`, in the
/// given order, and scope the document to `container_class`.
///
/// An empty `styles` slice leaves the children untouched.
pub fn inject_styles(root: &mut SvgElement, styles: &[ResolvedStyle], container_class: &str) {
    root.add_class(container_class);

    if styles.is_empty() {
        return;
    }

    let style_name = match root.name.split_once(':') {
        Some((prefix, _)) => format!("{}:style", prefix),
        None => "style".to_string(),
    };

    let nodes = styles
        .iter()
        .map(|style| {
            SvgNode::Element(
                SvgElement::new(style_name.as_str())
                    .with_attribute("type", "text/css")
                    .with_attribute(STYLESHEET_ATTRIBUTE, style.name.as_str())
                    .with_text(scope_selectors(&style.css, container_class)),
            )
        })
        .collect();

    root.prepend_children(nodes);
}

/// Rewrite `.{container} svg` to `svg.{container}` so container-scoped
/// rules apply to a root `<svg>` carrying the container class.
///
/// The whole compound selector naming the container is replaced, so
/// `div.{container} svg` and `.page.{container} svg` become `svg.{container}`
/// as well. Their other parts only matched the host page element.
pub fn scope_selectors(css: &str, container_class: &str) -> String {
    if container_class.is_empty() {
        return css.to_string();
    }

    let needle = format!(".{}", container_class);
    let mut out = String::with_capacity(css.len());
    let mut rest = css;

    while let Some(pos) = rest.find(&needle) {
        let (before, after) = rest.split_at(pos);
        out.push_str(before);
        let tail = &after[needle.len()..];

        // `.container` followed by whitespace and a bare `svg` type selector
        let trimmed = tail.trim_start();
        let had_space = trimmed.len() < tail.len();
        if had_space && trimmed.starts_with("svg") && !continues_ident(&trimmed[3..]) {
            let compound_start = out.rfind(is_selector_boundary).map_or(0, |i| i + 1);
            out.truncate(compound_start);
            out.push_str("svg");
            out.push_str(&needle);
            rest = &trimmed[3..];
        } else {
            out.push_str(&needle);
            rest = tail;
        }
    }
    out.push_str(rest);
    out
}

/// Characters that end a compound selector when scanning backwards
fn is_selector_boundary(c: char) -> bool {
    c.is_ascii_whitespace() || matches!(c, ',' | '{' | '}' | '>' | '+' | '~' | '(' | ';' | '/')
}

fn continues_ident(s: &str) -> bool {
    s.chars()
        .next()
        .map(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        .unwrap_or(false)
}
