//! Static instructional content for the openspec CLI.
//!
//! Two independent stores, both compiled-in and immutable for the life of
//! the process: long-form reference documents keyed by [`DocumentId`], and
//! slash-command bodies keyed by [`SlashCommandId`], assembled from shared
//! and command-specific fragments. The CLI that scaffolds and validates
//! change proposals consumes these strings as-is; nothing here parses,
//! validates, or touches the filesystem.

pub mod agents;
pub mod command;
pub mod document;
pub mod error;

pub use command::{compose, SlashCommandId};
pub use document::DocumentId;
pub use error::{Result, TemplateError};

/// Look up a reference document by its string key.
///
/// Prefer [`DocumentId::content`] when the id is already typed; this entry
/// point exists for callers holding untrusted strings (CLI arguments,
/// config values) and fails with [`TemplateError::DocumentNotFound`] for
/// keys outside the closed set.
pub fn document(key: &str) -> Result<&'static str> {
    key.parse::<DocumentId>().map(DocumentId::content)
}

/// Look up a slash-command body by its string key.
///
/// Fails with [`TemplateError::InvalidCommandId`] for keys outside the
/// closed set; see [`SlashCommandId::body`] for the typed equivalent.
pub fn command_body(key: &str) -> Result<&'static str> {
    key.parse::<SlashCommandId>().map(SlashCommandId::body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_keyed_lookups_match_typed_accessors() {
        assert_eq!(document("agents").unwrap(), DocumentId::Agents.content());
        for id in SlashCommandId::all() {
            assert_eq!(command_body(id.as_str()).unwrap(), id.body());
        }
    }

    #[test]
    fn unknown_document_key_reports_not_found() {
        let err = document("no-such-doc").unwrap_err();
        assert_eq!(err.to_string(), "document not found: no-such-doc");
    }

    #[test]
    fn unknown_command_key_reports_invalid_id() {
        let err = command_body("deploy").unwrap_err();
        assert_eq!(err.to_string(), "invalid slash command id: deploy");
    }
}
