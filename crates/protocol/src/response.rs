//! # Response Checking
//!
//! Every manager response is a single root element carrying `status` and
//! `status_text` attributes:
//!
//! ```text
//! <get_version_response status="200" status_text="OK"><version>22.4</version></get_version_response>
//! <create_group_response status="400" status_text="Missing name"/>
//! ```
//!
//! A 2xx status is success; anything else becomes [`GmpError::Response`].

use gmp_core::{GmpError, Result};
use quick_xml::events::Event;
use quick_xml::Reader;

use crate::xml::xml_error;

/// A parsed manager response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    name: String,
    status: Option<String>,
    status_text: Option<String>,
    version: Option<String>,
    raw: String,
}

impl Response {
    /// Parse the root element of a response
    ///
    /// Only the root attributes and the first `<version>` text are extracted;
    /// the full document stays available through [`Response::raw`].
    pub fn parse(xml: &str) -> Result<Self> {
        if xml.trim().is_empty() {
            return Err(GmpError::Gmp("XML Command is empty".into()));
        }

        let mut reader = Reader::from_str(xml.trim());
        reader.trim_text(true);

        let mut root: Option<(String, Option<String>, Option<String>)> = None;
        let mut version = None;
        let mut in_version = false;

        loop {
            match reader.read_event().map_err(xml_error)? {
                Event::Start(e) | Event::Empty(e) if root.is_none() => {
                    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                    let mut status = None;
                    let mut status_text = None;
                    for attr in e.attributes() {
                        let attr = attr.map_err(xml_error)?;
                        let value = attr.unescape_value().map_err(xml_error)?.into_owned();
                        match attr.key.as_ref() {
                            b"status" => status = Some(value),
                            b"status_text" => status_text = Some(value),
                            _ => {}
                        }
                    }
                    root = Some((name, status, status_text));
                }
                Event::Start(e) if e.name().as_ref() == b"version" && version.is_none() => {
                    in_version = true;
                }
                Event::Text(t) if in_version => {
                    version = Some(t.unescape().map_err(xml_error)?.into_owned());
                }
                Event::End(e) if e.name().as_ref() == b"version" => in_version = false,
                Event::Eof => break,
                _ => {}
            }
        }

        let (name, status, status_text) =
            root.ok_or_else(|| GmpError::Xml("no root element in response".into()))?;
        tracing::debug!(response = %name, status = ?status, "parsed response");

        Ok(Self {
            name,
            status,
            status_text,
            version,
            raw: xml.to_string(),
        })
    }

    /// Root element name, e.g. `get_feeds_response`
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn status_text(&self) -> Option<&str> {
        self.status_text.as_deref()
    }

    /// Text of the `<version>` element of a get_version response
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn is_ok(&self) -> bool {
        self.check_status().is_ok()
    }

    /// Fail unless the response carries a 2xx status
    pub fn check_status(&self) -> Result<()> {
        let status = self
            .status
            .as_deref()
            .ok_or_else(|| GmpError::Server("No status in response.".into()))?;

        if status.starts_with('2') {
            Ok(())
        } else {
            Err(GmpError::Response {
                status: status.to_string(),
                message: self.status_text.clone().unwrap_or_default(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ok_response() {
        let response =
            Response::parse(r#"<get_feeds_response status="200" status_text="OK"/>"#).unwrap();
        assert_eq!(response.name(), "get_feeds_response");
        assert_eq!(response.status(), Some("200"));
        assert_eq!(response.status_text(), Some("OK"));
        assert!(response.is_ok());
        assert!(response.check_status().is_ok());
    }

    #[test]
    fn test_parse_version() {
        let response = Response::parse(
            r#"<get_version_response status="200" status_text="OK"><version>22.4</version></get_version_response>"#,
        )
        .unwrap();
        assert_eq!(response.version(), Some("22.4"));
    }

    #[test]
    fn test_error_status() {
        let response = Response::parse(
            r#"<create_group_response status="400" status_text="Missing name"/>"#,
        )
        .unwrap();
        match response.check_status() {
            Err(GmpError::Response { status, message }) => {
                assert_eq!(status, "400");
                assert_eq!(message, "Missing name");
            }
            other => panic!("Expected Response error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_status() {
        let response = Response::parse("<get_tickets_response/>").unwrap();
        assert!(matches!(response.check_status(), Err(GmpError::Server(_))));
    }

    #[test]
    fn test_empty_response() {
        assert!(matches!(Response::parse("  "), Err(GmpError::Gmp(_))));
    }

    #[test]
    fn test_malformed_response() {
        assert!(matches!(
            Response::parse("<a status=\"200\"></b>"),
            Err(GmpError::Xml(_))
        ));
    }

    #[test]
    fn test_escaped_status_text() {
        let response =
            Response::parse(r#"<x_response status="404" status_text="Failed to find &quot;t1&quot;"/>"#)
                .unwrap();
        assert_eq!(response.status_text(), Some("Failed to find \"t1\""));
    }
}
