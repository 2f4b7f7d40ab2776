//! Feed status requests

use gmp_core::Vocabulary;

use crate::types::FeedType;
use crate::xml::XmlCommand;

/// Request the status of all feeds
pub fn get_feeds() -> XmlCommand {
    XmlCommand::new("get_feeds")
}

/// Request the status of a single feed
///
/// # Format
/// ```text
/// <get_feeds type="{NVT|CERT|SCAP|GVMD_DATA}"/>
/// ```
pub fn get_feed(feed_type: FeedType) -> XmlCommand {
    let mut cmd = XmlCommand::new("get_feeds");
    cmd.set_attribute("type", feed_type.value());
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_feeds() {
        assert_eq!(get_feeds().to_xml_string().unwrap(), "<get_feeds/>");
    }

    #[test]
    fn test_get_feed() {
        let expected = [
            (FeedType::Nvt, r#"<get_feeds type="NVT"/>"#),
            (FeedType::Cert, r#"<get_feeds type="CERT"/>"#),
            (FeedType::Scap, r#"<get_feeds type="SCAP"/>"#),
            (FeedType::GvmdData, r#"<get_feeds type="GVMD_DATA"/>"#),
        ];
        for (feed_type, xml) in expected {
            assert_eq!(get_feed(feed_type).to_xml_string().unwrap(), xml);
        }
    }
}
