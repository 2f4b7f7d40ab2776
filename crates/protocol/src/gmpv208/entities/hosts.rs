//! # Hosts
//!
//! Hosts are stored by the manager as assets of type `host`, so all host
//! commands are `*_asset` / `get_assets` requests.

use gmp_core::Result;

use super::require;
use crate::xml::XmlCommand;

/// Create a new host asset
///
/// # Format
/// ```text
/// <create_asset><asset><type>host</type><name>{name}</name><comment>{comment}</comment></asset></create_asset>
/// ```
pub fn create_host(name: &str, comment: Option<&str>) -> Result<XmlCommand> {
    let name = require(name, "name", "create_host")?;

    let mut cmd = XmlCommand::new("create_asset");
    let asset = cmd.add_element("asset", None);
    asset.add_element("type", Some("host"));
    asset.add_element("name", Some(name));

    if let Some(comment) = comment.filter(|c| !c.is_empty()) {
        asset.add_element("comment", Some(comment));
    }

    Ok(cmd)
}

/// Delete a host asset
pub fn delete_host(host_id: &str) -> Result<XmlCommand> {
    let host_id = require(host_id, "host_id", "delete_host")?;

    let mut cmd = XmlCommand::new("delete_asset");
    cmd.set_attribute("asset_id", host_id);
    Ok(cmd)
}

/// Request a list of hosts
pub fn get_hosts(filter_string: Option<&str>, filter_id: Option<&str>, details: Option<bool>) -> XmlCommand {
    let mut cmd = XmlCommand::new("get_assets");
    cmd.set_attribute("type", "host");
    cmd.add_filter(filter_string, filter_id);

    if let Some(details) = details {
        cmd.set_bool_attribute("details", details);
    }

    cmd
}

/// Request a single host
pub fn get_host(host_id: &str, details: Option<bool>) -> Result<XmlCommand> {
    let host_id = require(host_id, "host_id", "get_host")?;

    let mut cmd = XmlCommand::new("get_assets");
    cmd.set_attribute("asset_id", host_id);
    cmd.set_attribute("type", "host");

    if let Some(details) = details {
        cmd.set_bool_attribute("details", details);
    }

    Ok(cmd)
}

/// Modify the comment of a host
///
/// The comment element is always sent; a missing comment clears it.
pub fn modify_host(host_id: &str, comment: Option<&str>) -> Result<XmlCommand> {
    let host_id = require(host_id, "host_id", "modify_host")?;

    let mut cmd = XmlCommand::new("modify_asset");
    cmd.set_attribute("asset_id", host_id);
    cmd.add_element("comment", comment.filter(|c| !c.is_empty()));
    Ok(cmd)
}
