//! Minimal HTML element writer on top of `quick_xml::Writer`.
//!
//! Attribute values and text are escaped by quick-xml; names are written
//! verbatim. Void elements (`<input/>`) go through [`MarkupWriter::empty`];
//! everything else is written as an explicit start/end pair so a `<select>`
//! or `<textarea>` without content never collapses to a self-closing tag.

use std::borrow::Cow;
use std::fmt::Display;

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::error::Result;

/// An element name with its attributes in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: &'static str,
    attributes: Vec<(Cow<'static, str>, String)>,
}

impl Element {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attributes: Vec::new(),
        }
    }

    /// `<input type="...">`.
    pub fn input(input_type: &'static str) -> Self {
        Self::new("input").attr("type", input_type)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn attr(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.set_attr(key, value);
        self
    }

    #[must_use]
    pub fn opt_attr(self, key: &'static str, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.attr(key, value),
            None => self,
        }
    }

    #[must_use]
    pub fn opt_display<T: Display>(self, key: &'static str, value: Option<T>) -> Self {
        match value {
            Some(value) => self.attr(key, value.to_string()),
            None => self,
        }
    }

    /// Boolean attribute, written as `key="key"` when set.
    #[must_use]
    pub fn flag(self, key: &'static str, set: bool) -> Self {
        if set { self.attr(key, key) } else { self }
    }

    /// Sets `key`, replacing an earlier value in place.
    pub fn set_attr(&mut self, key: impl Into<Cow<'static, str>>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((key, value)),
        }
    }

    /// Sets `key` only when the element does not carry it yet.
    /// Returns whether the attribute was added.
    pub fn set_attr_if_absent(
        &mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<String>,
    ) -> bool {
        let key = key.into();
        if self.attribute(&key).is_some() {
            return false;
        }
        self.attributes.push((key, value.into()));
        true
    }

    /// Appends a class to the `class` attribute. Blank classes are ignored.
    pub fn add_class(&mut self, class: &str) {
        let class = class.trim();
        if class.is_empty() {
            return;
        }
        match self.attributes.iter_mut().find(|(k, _)| k == "class") {
            Some((_, existing)) if existing.split_whitespace().any(|c| c == class) => {}
            Some((_, existing)) if existing.trim().is_empty() => *existing = class.to_string(),
            Some((_, existing)) => {
                existing.push(' ');
                existing.push_str(class);
            }
            None => self.attributes.push(("class".into(), class.to_string())),
        }
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value.as_str())
    }

    fn start(&self) -> BytesStart<'static> {
        let mut start = BytesStart::new(self.name);
        for (key, value) in &self.attributes {
            start.push_attribute((key.as_ref(), value.as_str()));
        }
        start
    }
}

/// Buffered markup output for one render pass.
pub struct MarkupWriter {
    writer: Writer<Vec<u8>>,
}

impl Default for MarkupWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkupWriter {
    pub fn new() -> Self {
        Self {
            writer: Writer::new(Vec::new()),
        }
    }

    /// Writes a void element such as `<input .../>`.
    pub fn empty(&mut self, element: &Element) -> Result<()> {
        self.writer.write_event(Event::Empty(element.start()))?;
        Ok(())
    }

    pub fn open(&mut self, element: &Element) -> Result<()> {
        self.writer.write_event(Event::Start(element.start()))?;
        Ok(())
    }

    pub fn close(&mut self, name: &str) -> Result<()> {
        self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    pub fn text(&mut self, text: &str) -> Result<()> {
        if !text.is_empty() {
            self.writer.write_event(Event::Text(BytesText::new(text)))?;
        }
        Ok(())
    }

    /// `<name attrs>text</name>`, with an explicit end tag even for empty text.
    pub fn text_element(&mut self, element: &Element, text: &str) -> Result<()> {
        self.open(element)?;
        self.text(text)?;
        self.close(element.name())
    }

    pub fn line_break(&mut self) {
        self.writer.get_mut().push(b'\n');
    }

    pub fn is_empty(&self) -> bool {
        self.writer.get_ref().is_empty()
    }

    pub fn into_string(self) -> Result<String> {
        Ok(String::from_utf8(self.writer.into_inner())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut MarkupWriter) -> Result<()>) -> String {
        let mut out = MarkupWriter::new();
        f(&mut out).expect("write");
        out.into_string().expect("utf8")
    }

    #[test]
    fn void_element_self_closes() {
        let html = render(|out| {
            out.empty(
                &Element::input("hidden")
                    .attr("name", "post[admin]")
                    .attr("value", "0"),
            )
        });
        assert_eq!(html, r#"<input type="hidden" name="post[admin]" value="0"/>"#);
    }

    #[test]
    fn empty_text_element_keeps_end_tag() {
        let html = render(|out| out.text_element(&Element::new("textarea").attr("name", "b"), ""));
        assert_eq!(html, r#"<textarea name="b"></textarea>"#);
    }

    #[test]
    fn attribute_values_and_text_are_escaped() {
        let html = render(|out| {
            out.text_element(&Element::new("option").attr("value", "a&b"), "<none>")
        });
        assert_eq!(html, r#"<option value="a&amp;b">&lt;none&gt;</option>"#);
    }

    #[test]
    fn flags_and_optional_attributes() {
        let element = Element::input("checkbox")
            .opt_attr("id", None)
            .flag("checked", true)
            .flag("disabled", false)
            .opt_display("size", Some(20));
        assert_eq!(element.attribute("checked"), Some("checked"));
        assert_eq!(element.attribute("disabled"), None);
        assert_eq!(element.attribute("id"), None);
        assert_eq!(element.attribute("size"), Some("20"));
    }

    #[test]
    fn classes_merge_without_duplicates() {
        let mut element = Element::input("text").attr("class", "wide");
        element.add_class("field-control");
        element.add_class("wide");
        element.add_class("  ");
        assert_eq!(element.attribute("class"), Some("wide field-control"));
    }

    #[test]
    fn absent_only_setter_keeps_existing_value() {
        let mut element = Element::input("text");
        assert!(!element.set_attr_if_absent("type".to_string(), "hidden"));
        assert!(element.set_attr_if_absent("data-role".to_string(), "x"));
        assert_eq!(element.attribute("type"), Some("text"));
        assert_eq!(element.attribute("data-role"), Some("x"));
    }

    #[test]
    fn set_attr_keeps_position() {
        let mut element = Element::input("text").attr("name", "a").attr("value", "1");
        element.set_attr("name", "b");
        let html = render(|out| out.empty(&element));
        assert_eq!(html, r#"<input type="text" name="b" value="1"/>"#);
    }
}
