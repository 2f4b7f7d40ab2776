//! # XML Command Builder
//!
//! Every GMP request is a single XML element, e.g.
//!
//! ```text
//! <get_assets type="host" filter="name=foo" details="1"/>
//! <create_ticket><result id="r1"/><assigned_to><user id="u1"/></assigned_to><open_note>note</open_note></create_ticket>
//! ```
//!
//! [`XmlCommand`] builds that element tree and serializes it with
//! `quick_xml::Writer`:
//! - attributes keep insertion order
//! - elements without text or children are written self-closing
//! - text escapes `<`, `>` and `&`; attribute values also escape quotes
//!
//! ## Usage
//!
//! ```rust
//! use gmp_protocol::xml::XmlCommand;
//!
//! let mut cmd = XmlCommand::new("create_asset");
//! let asset = cmd.add_element("asset", None);
//! asset.add_element("type", Some("host"));
//! asset.add_element("name", Some("10.0.0.1"));
//!
//! assert_eq!(
//!     cmd.to_xml_string().unwrap(),
//!     "<create_asset><asset><type>host</type><name>10.0.0.1</name></asset></create_asset>"
//! );
//! ```

use std::fmt;
use std::io::Write;

use gmp_core::{GmpError, Result};
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

/// Map a quick_xml failure into the crate error
pub(crate) fn xml_error(err: impl fmt::Display) -> GmpError {
    GmpError::Xml(err.to_string())
}

/// Render a boolean the way the manager expects it in attributes
pub fn to_bool(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

/// Join list arguments (user names, ids) into the comma separated wire form
pub fn to_comma_list<S: AsRef<str>>(values: &[S]) -> String {
    values
        .iter()
        .map(|value| value.as_ref())
        .collect::<Vec<_>>()
        .join(",")
}

/// One element of a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlCommandElement {
    name: String,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<XmlCommandElement>,
}

impl XmlCommandElement {
    pub fn new(name: impl Into<String>, text: Option<&str>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            text: text.map(str::to_string),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn children(&self) -> &[XmlCommandElement] {
        &self.children
    }

    /// Get an attribute value
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Set an attribute, replacing an existing value in place
    pub fn set_attribute(&mut self, name: &str, value: &str) -> &mut Self {
        match self.attributes.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.attributes.push((name.to_string(), value.to_string())),
        }
        self
    }

    pub fn set_text(&mut self, text: &str) -> &mut Self {
        self.text = Some(text.to_string());
        self
    }

    /// Append a child element and return it for further building
    pub fn add_element(&mut self, name: &str, text: Option<&str>) -> &mut XmlCommandElement {
        let index = self.children.len();
        self.children.push(XmlCommandElement::new(name, text));
        &mut self.children[index]
    }

    fn write<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let mut start = BytesStart::new(self.name.as_str());
        for (key, value) in &self.attributes {
            start.push_attribute((key.as_str(), value.as_str()));
        }

        if self.text.is_none() && self.children.is_empty() {
            return writer.write_event(Event::Empty(start)).map_err(xml_error);
        }

        writer.write_event(Event::Start(start)).map_err(xml_error)?;
        if let Some(text) = self.text.as_deref().filter(|text| !text.is_empty()) {
            writer
                .write_event(Event::Text(BytesText::from_escaped(partial_escape(text))))
                .map_err(xml_error)?;
        }
        for child in &self.children {
            child.write(writer)?;
        }
        writer
            .write_event(Event::End(BytesEnd::new(self.name.as_str())))
            .map_err(xml_error)
    }
}

/// A complete GMP request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlCommand {
    root: XmlCommandElement,
}

impl XmlCommand {
    pub fn new(name: &str) -> Self {
        Self {
            root: XmlCommandElement::new(name, None),
        }
    }

    /// Command name, i.e. the root element name
    pub fn name(&self) -> &str {
        self.root.name()
    }

    pub fn root(&self) -> &XmlCommandElement {
        &self.root
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.root.attribute(name)
    }

    pub fn set_attribute(&mut self, name: &str, value: &str) -> &mut Self {
        self.root.set_attribute(name, value);
        self
    }

    /// Set a boolean attribute as `"1"` / `"0"`
    pub fn set_bool_attribute(&mut self, name: &str, value: bool) -> &mut Self {
        self.set_attribute(name, to_bool(value))
    }

    pub fn add_element(&mut self, name: &str, text: Option<&str>) -> &mut XmlCommandElement {
        self.root.add_element(name, text)
    }

    /// Add the common `filter` / `filt_id` attributes of the get_* commands
    ///
    /// Empty strings are treated as absent.
    pub fn add_filter(&mut self, filter_string: Option<&str>, filter_id: Option<&str>) -> &mut Self {
        if let Some(filter_string) = filter_string.filter(|s| !s.is_empty()) {
            self.set_attribute("filter", filter_string);
        }
        if let Some(filter_id) = filter_id.filter(|s| !s.is_empty()) {
            self.set_attribute("filt_id", filter_id);
        }
        self
    }

    /// Serialize the request
    pub fn to_xml_string(&self) -> Result<String> {
        let mut writer = Writer::new(Vec::new());
        self.root.write(&mut writer)?;
        String::from_utf8(writer.into_inner()).map_err(xml_error)
    }
}

impl fmt::Display for XmlCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let xml = self.to_xml_string().map_err(|_| fmt::Error)?;
        f.write_str(&xml)
    }
}
