//! Version request

use crate::xml::XmlCommand;

/// Ask the manager which GMP version it speaks
///
/// Needs no authentication; the answer drives dialect selection.
pub fn get_version() -> XmlCommand {
    XmlCommand::new("get_version")
}
