//! # Groups
//!
//! User groups. The only "special" a group can carry is `full`, granting
//! every member full access to the resources of the other members.

use gmp_core::Result;

use super::require;
use crate::xml::{to_comma_list, XmlCommand};

/// Clone an existing group
pub fn clone_group(group_id: &str) -> Result<XmlCommand> {
    let group_id = require(group_id, "group_id", "clone_group")?;

    let mut cmd = XmlCommand::new("create_group");
    cmd.add_element("copy", Some(group_id));
    Ok(cmd)
}

/// Create a new group
///
/// # Format
/// ```text
/// <create_group>
///   <name>{name}</name>
///   <comment>{comment}</comment>
///   <specials><full/></specials>
///   <users>{user1},{user2}</users>
/// </create_group>
/// ```
pub fn create_group(
    name: &str,
    comment: Option<&str>,
    special: bool,
    users: &[&str],
) -> Result<XmlCommand> {
    let name = require(name, "name", "create_group")?;

    let mut cmd = XmlCommand::new("create_group");
    cmd.add_element("name", Some(name));

    if let Some(comment) = comment.filter(|c| !c.is_empty()) {
        cmd.add_element("comment", Some(comment));
    }

    if special {
        cmd.add_element("specials", None).add_element("full", None);
    }

    if !users.is_empty() {
        cmd.add_element("users", Some(&to_comma_list(users)));
    }

    Ok(cmd)
}

/// Delete a group, moving it to the trashcan unless `ultimate` is set
pub fn delete_group(group_id: &str, ultimate: bool) -> Result<XmlCommand> {
    let group_id = require(group_id, "group_id", "delete_group")?;

    let mut cmd = XmlCommand::new("delete_group");
    cmd.set_attribute("group_id", group_id);
    cmd.set_bool_attribute("ultimate", ultimate);
    Ok(cmd)
}

/// Request a list of groups
pub fn get_groups(filter_string: Option<&str>, filter_id: Option<&str>, trash: Option<bool>) -> XmlCommand {
    let mut cmd = XmlCommand::new("get_groups");
    cmd.add_filter(filter_string, filter_id);

    if let Some(trash) = trash {
        cmd.set_bool_attribute("trash", trash);
    }

    cmd
}

/// Request a single group
pub fn get_group(group_id: &str) -> Result<XmlCommand> {
    let group_id = require(group_id, "group_id", "get_group")?;

    let mut cmd = XmlCommand::new("get_groups");
    cmd.set_attribute("group_id", group_id);
    Ok(cmd)
}

/// Modify an existing group
///
/// `users` replaces the member list; an empty slice leaves it unchanged.
pub fn modify_group(
    group_id: &str,
    comment: Option<&str>,
    name: Option<&str>,
    users: &[&str],
) -> Result<XmlCommand> {
    let group_id = require(group_id, "group_id", "modify_group")?;

    let mut cmd = XmlCommand::new("modify_group");
    cmd.set_attribute("group_id", group_id);

    if let Some(comment) = comment.filter(|c| !c.is_empty()) {
        cmd.add_element("comment", Some(comment));
    }

    if let Some(name) = name.filter(|n| !n.is_empty()) {
        cmd.add_element("name", Some(name));
    }

    if !users.is_empty() {
        cmd.add_element("users", Some(&to_comma_list(users)));
    }

    Ok(cmd)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gmp_core::GmpError;

    fn xml(cmd: XmlCommand) -> String {
        cmd.to_xml_string().unwrap()
    }

    #[test]
    fn test_clone_group() {
        assert_eq!(
            xml(clone_group("a1").unwrap()),
            "<create_group><copy>a1</copy></create_group>"
        );
        assert!(matches!(
            clone_group(""),
            Err(GmpError::RequiredArgument { .. })
        ));
    }

    #[test]
    fn test_create_group() {
        assert_eq!(
            xml(create_group("foo", None, false, &[]).unwrap()),
            "<create_group><name>foo</name></create_group>"
        );
        assert_eq!(
            xml(create_group("foo", Some("bar"), false, &[]).unwrap()),
            "<create_group><name>foo</name><comment>bar</comment></create_group>"
        );
        assert_eq!(
            xml(create_group("foo", None, true, &[]).unwrap()),
            "<create_group><name>foo</name><specials><full/></specials></create_group>"
        );
        assert_eq!(
            xml(create_group("foo", None, false, &["foo", "bar"]).unwrap()),
            "<create_group><name>foo</name><users>foo,bar</users></create_group>"
        );
    }

    #[test]
    fn test_create_group_missing_name() {
        let err = create_group("", None, false, &[]).unwrap_err();
        assert_eq!(err.to_string(), "create_group requires a name argument");
    }

    #[test]
    fn test_delete_group() {
        assert_eq!(
            xml(delete_group("a1", false).unwrap()),
            r#"<delete_group group_id="a1" ultimate="0"/>"#
        );
        assert_eq!(
            xml(delete_group("a1", true).unwrap()),
            r#"<delete_group group_id="a1" ultimate="1"/>"#
        );
        assert_eq!(delete_group("", false).unwrap_err().argument(), Some("group_id"));
    }

    #[test]
    fn test_get_groups() {
        assert_eq!(xml(get_groups(None, None, None)), "<get_groups/>");
        assert_eq!(
            xml(get_groups(Some("foo=bar"), None, None)),
            r#"<get_groups filter="foo=bar"/>"#
        );
        assert_eq!(
            xml(get_groups(None, Some("f1"), Some(true))),
            r#"<get_groups filt_id="f1" trash="1"/>"#
        );
    }

    #[test]
    fn test_get_group() {
        assert_eq!(xml(get_group("g1").unwrap()), r#"<get_groups group_id="g1"/>"#);
        assert_eq!(get_group("").unwrap_err().function(), Some("get_group"));
    }

    #[test]
    fn test_modify_group() {
        assert_eq!(
            xml(modify_group("g1", None, None, &[]).unwrap()),
            r#"<modify_group group_id="g1"/>"#
        );
        assert_eq!(
            xml(modify_group("g1", Some("foo"), Some("bar"), &["u1", "u2"]).unwrap()),
            r#"<modify_group group_id="g1"><comment>foo</comment><name>bar</name><users>u1,u2</users></modify_group>"#
        );
        assert_eq!(modify_group("", None, None, &[]).unwrap_err().argument(), Some("group_id"));
    }
}
