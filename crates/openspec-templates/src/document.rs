use crate::agents::AGENTS_GUIDE;
use crate::error::TemplateError;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// DocumentId
// ---------------------------------------------------------------------------

/// Closed set of long-form reference documents shipped with the crate.
///
/// Currently a single entry; adding a document means adding a variant and
/// its content constant, never extending anything at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentId {
    /// The `openspec/AGENTS.md` instruction guide.
    Agents,
}

impl DocumentId {
    pub fn all() -> &'static [DocumentId] {
        &[DocumentId::Agents]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DocumentId::Agents => "agents",
        }
    }

    /// The full literal content registered under this id.
    pub fn content(self) -> &'static str {
        match self {
            DocumentId::Agents => AGENTS_GUIDE,
        }
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DocumentId {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "agents" => Ok(DocumentId::Agents),
            _ => Err(TemplateError::DocumentNotFound(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_is_stable_and_nonempty() {
        for id in DocumentId::all() {
            assert!(!id.content().is_empty());
            // &'static str accessors hand back the same data every call.
            assert!(std::ptr::eq(id.content(), id.content()));
        }
    }

    #[test]
    fn as_str_round_trips() {
        for id in DocumentId::all() {
            assert_eq!(id.as_str().parse::<DocumentId>().unwrap(), *id);
        }
    }

    #[test]
    fn unknown_keys_are_not_found() {
        for key in ["", "agent", "Agents", "agents ", "guide", "AGENTS.md"] {
            assert!(matches!(
                key.parse::<DocumentId>(),
                Err(TemplateError::DocumentNotFound(_))
            ));
        }
    }

    #[test]
    fn serde_uses_snake_case_keys() {
        let json = serde_json::to_string(&DocumentId::Agents).unwrap();
        assert_eq!(json, "\"agents\"");
        let back: DocumentId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, DocumentId::Agents);
    }
}
