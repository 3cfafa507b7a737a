//! SVG markup reading and writing
//!
//! Parsing walks quick-xml events into an owned `SvgElement` tree; writing
//! walks the tree back out through a quick-xml `Writer`, which takes care of
//! escaping text and attribute values.

use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use super::elements::{SvgElement, SvgNode, SVG_NAMESPACE, XLINK_NAMESPACE};
use crate::error::{ExportError, Result};

/// Parse SVG markup into an element tree. The root element must be `svg`.
pub fn parse_svg(markup: &str) -> Result<SvgElement> {
    let mut reader = Reader::from_str(markup);
    reader.trim_text(false);

    let mut stack: Vec<SvgElement> = Vec::new();
    let mut root: Option<SvgElement> = None;

    loop {
        match reader.read_event()? {
            Event::Start(ref e) => {
                stack.push(element_from_start(e)?);
            }
            Event::Empty(ref e) => {
                let element = element_from_start(e)?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::End(_) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| ExportError::Parse("unexpected closing tag".to_string()))?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::Text(ref t) => {
                // Whitespace around the root element is not part of the tree
                if let Some(parent) = stack.last_mut() {
                    parent.children.push(SvgNode::Text(t.unescape()?.into_owned()));
                }
            }
            Event::CData(ref c) => {
                if let Some(parent) = stack.last_mut() {
                    parent
                        .children
                        .push(SvgNode::CData(String::from_utf8_lossy(c).into_owned()));
                }
            }
            Event::Comment(ref c) => {
                if let Some(parent) = stack.last_mut() {
                    parent
                        .children
                        .push(SvgNode::Comment(String::from_utf8_lossy(c).into_owned()));
                }
            }
            Event::Decl(_) | Event::PI(_) | Event::DocType(_) => {}
            Event::Eof => break,
        }
    }

    if let Some(open) = stack.last() {
        return Err(ExportError::Parse(format!("unclosed element <{}>", open.name)));
    }

    let root = root.ok_or_else(|| ExportError::Parse("document has no root element".to_string()))?;
    if root.local_name() != "svg" {
        return Err(ExportError::NotSvg(root.name));
    }
    Ok(root)
}

fn element_from_start(e: &BytesStart<'_>) -> Result<SvgElement> {
    let name = String::from_utf8(e.name().as_ref().to_vec())
        .map_err(|err| ExportError::Parse(format!("element name is not UTF-8: {}", err)))?;
    let mut element = SvgElement::new(name);

    for attr in e.attributes() {
        let attr = attr.map_err(|err| ExportError::Parse(err.to_string()))?;
        let key = String::from_utf8(attr.key.as_ref().to_vec())
            .map_err(|err| ExportError::Parse(format!("attribute name is not UTF-8: {}", err)))?;
        let value = attr.unescape_value()?.into_owned();
        element.attributes.push((key, value));
    }

    Ok(element)
}

fn attach(stack: &mut [SvgElement], root: &mut Option<SvgElement>, element: SvgElement) -> Result<()> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(SvgNode::Element(element));
        return Ok(());
    }
    if root.is_some() {
        return Err(ExportError::Parse(format!(
            "second root element <{}>",
            element.name
        )));
    }
    *root = Some(element);
    Ok(())
}

/// Add the namespace declarations a standalone SVG file needs to render
/// outside the host page
pub fn ensure_namespaces(root: &mut SvgElement) {
    if root.attribute("xmlns").is_none() && !root.name.contains(':') {
        root.set_attribute("xmlns", SVG_NAMESPACE);
    }
    if root.uses_xlink() && root.attribute("xmlns:xlink").is_none() {
        root.set_attribute("xmlns:xlink", XLINK_NAMESPACE);
    }
}

/// Serialize an element tree to a UTF-8 XML document
pub fn serialize_svg(root: &SvgElement) -> Result<String> {
    let mut writer = Writer::new(Vec::new());
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(serialize_error)?;
    write_element(&mut writer, root)?;

    String::from_utf8(writer.into_inner())
        .map_err(|err| ExportError::Serialize(format!("output is not UTF-8: {}", err)))
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &SvgElement) -> Result<()> {
    let mut start = BytesStart::new(element.name.as_str());
    for (key, value) in &element.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if element.children.is_empty() {
        writer.write_event(Event::Empty(start)).map_err(serialize_error)?;
        return Ok(());
    }

    writer.write_event(Event::Start(start)).map_err(serialize_error)?;
    for child in &element.children {
        match child {
            SvgNode::Element(el) => write_element(writer, el)?,
            SvgNode::Text(text) => writer
                .write_event(Event::Text(BytesText::new(text)))
                .map_err(serialize_error)?,
            SvgNode::CData(text) => writer
                .write_event(Event::CData(BytesCData::new(text.as_str())))
                .map_err(serialize_error)?,
            SvgNode::Comment(text) => writer
                .write_event(Event::Comment(BytesText::from_escaped(text.as_str())))
                .map_err(serialize_error)?,
        }
    }
    writer
        .write_event(Event::End(BytesEnd::new(element.name.as_str())))
        .map_err(serialize_error)?;
    Ok(())
}

fn serialize_error(err: quick_xml::Error) -> ExportError {
    ExportError::Serialize(err.to_string())
}
