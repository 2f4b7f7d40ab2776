//! # Tickets
//!
//! Tickets track the remediation of a single result. A ticket is created
//! from a result, assigned to a user, and moves through
//! [`TicketStatus`] `Open` → `Fixed` → `Closed`, each change carrying a note
//! (`open_note`, `fixed_note`, `closed_note`).

use gmp_core::{GmpError, Result, Vocabulary};

use super::require;
use crate::types::TicketStatus;
use crate::xml::XmlCommand;

/// Clone an existing ticket
///
/// # Format
/// ```text
/// <create_ticket><copy>{ticket_id}</copy></create_ticket>
/// ```
pub fn clone_ticket(ticket_id: &str) -> Result<XmlCommand> {
    let ticket_id = require(ticket_id, "ticket_id", "clone_ticket")?;

    let mut cmd = XmlCommand::new("create_ticket");
    cmd.add_element("copy", Some(ticket_id));
    Ok(cmd)
}

/// Create a new ticket for a result
///
/// # Format
/// ```text
/// <create_ticket>
///   <result id="{result_id}"/>
///   <assigned_to><user id="{assigned_to_user_id}"/></assigned_to>
///   <open_note>{note}</open_note>
///   <comment>{comment}</comment>
/// </create_ticket>
/// ```
pub fn create_ticket(
    result_id: &str,
    assigned_to_user_id: &str,
    note: &str,
    comment: Option<&str>,
) -> Result<XmlCommand> {
    let result_id = require(result_id, "result_id", "create_ticket")?;
    let assigned_to_user_id = require(assigned_to_user_id, "assigned_to_user_id", "create_ticket")?;
    let note = require(note, "note", "create_ticket")?;

    let mut cmd = XmlCommand::new("create_ticket");
    cmd.add_element("result", None).set_attribute("id", result_id);
    cmd.add_element("assigned_to", None)
        .add_element("user", None)
        .set_attribute("id", assigned_to_user_id);
    cmd.add_element("open_note", Some(note));

    if let Some(comment) = comment.filter(|c| !c.is_empty()) {
        cmd.add_element("comment", Some(comment));
    }

    Ok(cmd)
}

/// Delete a ticket, moving it to the trashcan unless `ultimate` is set
pub fn delete_ticket(ticket_id: &str, ultimate: bool) -> Result<XmlCommand> {
    let ticket_id = require(ticket_id, "ticket_id", "delete_ticket")?;

    let mut cmd = XmlCommand::new("delete_ticket");
    cmd.set_attribute("ticket_id", ticket_id);
    cmd.set_bool_attribute("ultimate", ultimate);
    Ok(cmd)
}

/// Request a list of tickets
pub fn get_tickets(
    trash: Option<bool>,
    filter_string: Option<&str>,
    filter_id: Option<&str>,
) -> XmlCommand {
    let mut cmd = XmlCommand::new("get_tickets");
    cmd.add_filter(filter_string, filter_id);

    if let Some(trash) = trash {
        cmd.set_bool_attribute("trash", trash);
    }

    cmd
}

/// Request a single ticket
pub fn get_ticket(ticket_id: &str) -> Result<XmlCommand> {
    let ticket_id = require(ticket_id, "ticket_id", "get_ticket")?;

    let mut cmd = XmlCommand::new("get_tickets");
    cmd.set_attribute("ticket_id", ticket_id);
    Ok(cmd)
}

/// Modify a ticket
///
/// `status` and `note` go together: the note is stored in the element named
/// after the new status (`fixed_note` for [`TicketStatus::Fixed`]).
pub fn modify_ticket(
    ticket_id: &str,
    status: Option<TicketStatus>,
    note: Option<&str>,
    assigned_to_user_id: Option<&str>,
    comment: Option<&str>,
) -> Result<XmlCommand> {
    let ticket_id = require(ticket_id, "ticket_id", "modify_ticket")?;
    let note = note.filter(|n| !n.is_empty());

    let status_note = match (status, note) {
        (Some(status), Some(note)) => Some((status, note)),
        (Some(_), None) => return Err(GmpError::required_argument("note", "modify_ticket")),
        (None, Some(_)) => return Err(GmpError::required_argument("status", "modify_ticket")),
        (None, None) => None,
    };

    let mut cmd = XmlCommand::new("modify_ticket");
    cmd.set_attribute("ticket_id", ticket_id);

    if let Some(user_id) = assigned_to_user_id.filter(|u| !u.is_empty()) {
        cmd.add_element("assigned_to", None)
            .add_element("user", None)
            .set_attribute("id", user_id);
    }

    if let Some((status, note)) = status_note {
        cmd.add_element("status", Some(status.value()));
        cmd.add_element(status.note_element(), Some(note));
    }

    if let Some(comment) = comment.filter(|c| !c.is_empty()) {
        cmd.add_element("comment", Some(comment));
    }

    Ok(cmd)
}
