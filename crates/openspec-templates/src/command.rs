//! Slash-command bodies for the three stages of the change workflow.
//!
//! Each body is the ordered join [guardrails, steps, references] with one
//! blank line between fragments. The guardrail block is shared across all
//! three commands; the proposal command appends extra constraints to the
//! shared base rather than restating it, so an edit to the base propagates
//! everywhere it is used.

use crate::error::TemplateError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// SlashCommandId
// ---------------------------------------------------------------------------

/// Closed set of slash commands, one per workflow stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlashCommandId {
    /// Draft a change proposal (design documents only, no code).
    Proposal,
    /// Implement an approved change task by task.
    Apply,
    /// Archive a deployed change and refresh the specs.
    Archive,
}

impl SlashCommandId {
    pub fn all() -> &'static [SlashCommandId] {
        &[
            SlashCommandId::Proposal,
            SlashCommandId::Apply,
            SlashCommandId::Archive,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SlashCommandId::Proposal => "proposal",
            SlashCommandId::Apply => "apply",
            SlashCommandId::Archive => "archive",
        }
    }

    /// The guardrail block for this command. Apply and archive share the
    /// base block verbatim; proposal extends it with two extra constraints.
    pub fn guardrails(self) -> &'static str {
        match self {
            SlashCommandId::Proposal => proposal_guardrails(),
            SlashCommandId::Apply | SlashCommandId::Archive => BASE_GUARDRAILS,
        }
    }

    pub fn steps(self) -> &'static str {
        match self {
            SlashCommandId::Proposal => PROPOSAL_STEPS,
            SlashCommandId::Apply => APPLY_STEPS,
            SlashCommandId::Archive => ARCHIVE_STEPS,
        }
    }

    pub fn references(self) -> &'static str {
        match self {
            SlashCommandId::Proposal => PROPOSAL_REFERENCES,
            SlashCommandId::Apply => APPLY_REFERENCES,
            SlashCommandId::Archive => ARCHIVE_REFERENCES,
        }
    }

    /// The fully assembled command body.
    pub fn body(self) -> &'static str {
        static PROPOSAL: OnceLock<String> = OnceLock::new();
        static APPLY: OnceLock<String> = OnceLock::new();
        static ARCHIVE: OnceLock<String> = OnceLock::new();

        let cell = match self {
            SlashCommandId::Proposal => &PROPOSAL,
            SlashCommandId::Apply => &APPLY,
            SlashCommandId::Archive => &ARCHIVE,
        };
        cell.get_or_init(|| compose(&[self.guardrails(), self.steps(), self.references()]))
    }
}

impl fmt::Display for SlashCommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SlashCommandId {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "proposal" => Ok(SlashCommandId::Proposal),
            "apply" => Ok(SlashCommandId::Apply),
            "archive" => Ok(SlashCommandId::Archive),
            _ => Err(TemplateError::InvalidCommandId(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// compose
// ---------------------------------------------------------------------------

/// Join fragments with exactly one blank line between consecutive
/// non-empty entries. No leading or trailing separator; fragment interiors
/// pass through byte-for-byte.
pub fn compose(fragments: &[&str]) -> String {
    let mut out = String::new();
    for fragment in fragments {
        if fragment.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push_str("\n\n");
        }
        out.push_str(fragment);
    }
    out
}

// ---------------------------------------------------------------------------
// Guardrail fragments
// ---------------------------------------------------------------------------

const BASE_GUARDRAILS: &str = r#"**Guardrails**
- Favor straightforward, minimal implementations first and add complexity only when it is requested or clearly required.
- Keep changes tightly scoped to the requested outcome.
- Refer to `openspec/AGENTS.md` (located inside the `openspec/` directory; run `ls openspec` or `openspec update` if you don't see it) if you need additional OpenSpec conventions or clarifications."#;

/// Extra constraints for the proposal stage only, appended to the base.
const PROPOSAL_GUARDRAIL_EXTRAS: &str = r#"- Identify any vague or ambiguous details and ask clarifying questions before editing files.
- Do not write any code during the proposal stage. Only create design documents (proposal.md, tasks.md, design.md, and spec deltas). Implementation happens in the apply stage after approval."#;

fn proposal_guardrails() -> &'static str {
    static PROPOSAL_GUARDRAILS: OnceLock<String> = OnceLock::new();
    PROPOSAL_GUARDRAILS.get_or_init(|| format!("{BASE_GUARDRAILS}\n{PROPOSAL_GUARDRAIL_EXTRAS}"))
}

// ---------------------------------------------------------------------------
// Step fragments
// ---------------------------------------------------------------------------

const PROPOSAL_STEPS: &str = r#"**Steps**
1. Review `openspec/project.md`, run `openspec list` and `openspec list --specs`, and inspect related code or docs (e.g., via `rg`/`ls`) to ground the proposal in current behaviour; note any gaps that require clarification.
2. Choose a unique verb-led `change-id` and create the change directory `openspec/changes/<id>/`.
3. Create `proposal.md` in `openspec/changes/<id>/`:
   - **CRITICAL**: Check if `openspec/templates/proposal.md.template` exists
   - If exists: Read the template file and replace variables (`{{changeId}}` → actual change-id, `{{date}}` → current date in YYYY-MM-DD format)
   - If not exists: Use the default structure from `openspec/AGENTS.md` (see the Proposal Structure section)
4. Create `tasks.md` in `openspec/changes/<id>/`:
   - **CRITICAL**: Check if `openspec/templates/tasks.md.template` exists
   - If exists: Read the template file and replace variables (`{{changeId}}` → actual change-id, `{{date}}` → current date in YYYY-MM-DD format)
   - If not exists: Use the default structure from `openspec/AGENTS.md` (see the Proposal Structure section)
5. Create `design.md` in `openspec/changes/<id>/` (required for all changes):
   - **CRITICAL**: Check if `openspec/templates/design.md.template` exists
   - If exists: Read the template file and replace variables (`{{changeId}}` → actual change-id, `{{date}}` → current date in YYYY-MM-DD format)
   - If not exists: Use the default structure from `openspec/AGENTS.md` (see the Proposal Structure section)
6. Map the change into concrete capabilities or requirements, breaking multi-scope efforts into distinct spec deltas with clear relationships and sequencing.
7. Create spec deltas in `openspec/changes/<id>/specs/<capability>/spec.md` (one folder per capability):
   - **CRITICAL**: Check if `openspec/templates/spec.md.template` exists
   - If exists: Read the template file and replace variables (`{{changeId}}` → actual change-id, `{{date}}` → current date in YYYY-MM-DD format, `{{capability}}` → capability name)
   - If not exists: Use the `## ADDED|MODIFIED|REMOVED Requirements` format with at least one `#### Scenario:` per requirement
   - Cross-reference related capabilities when relevant
8. Validate with `openspec validate <id> --strict` and resolve every issue before sharing the proposal."#;

const APPLY_STEPS: &str = r#"**Steps**
Track these steps as TODOs and complete them one by one.
1. Read `openspec/changes/<id>/proposal.md`, `design.md`, and `tasks.md` to confirm scope and acceptance criteria.
2. Work through tasks sequentially, keeping edits minimal and focused on the requested change.
3. Before updating statuses, confirm every checklist item is finished before marking status in `tasks.md`.
4. Update the checklist after all work is done so each task is marked `- [x]` and reflects reality.
5. Reference `openspec list` or `openspec show <item>` when additional context is required."#;

const ARCHIVE_STEPS: &str = r#"**Steps**
1. Determine the change ID to archive:
   - If this prompt already includes a specific change ID (for example inside a `<ChangeId>` block populated by slash-command arguments), use that value after trimming whitespace.
   - If the conversation references a change loosely (for example by title or summary), run `openspec list` to surface likely IDs, share the relevant candidates, and confirm which one the user intends.
   - Otherwise, review the conversation, run `openspec list`, and ask the user which change to archive; wait for a confirmed change ID before proceeding.
   - If you still cannot identify a single change ID, stop and tell the user you cannot archive anything yet.
2. Validate the change ID by running `openspec list` (or `openspec show <id>`) and stop if the change is missing, already archived, or otherwise not ready to archive.
3. Run `openspec archive <id> --yes` so the CLI moves the change and applies spec updates without prompts (use `--skip-specs` only for tooling-only work).
4. Review the command output to confirm the target specs were updated and the change landed in `openspec/changes/archive/`.
5. Validate with `openspec validate --strict` and inspect with `openspec show <id>` if anything looks off."#;

// ---------------------------------------------------------------------------
// Reference fragments
// ---------------------------------------------------------------------------

const PROPOSAL_REFERENCES: &str = r#"**Reference**
- **Template Processing**: For each file type (proposal, tasks, design, spec), always check `openspec/templates/<type>.md.template` first. If the template exists, read it and replace all variables before writing the file. Template variables:
  - `{{changeId}}` → the actual change-id (e.g., `add-user-auth`)
  - `{{date}}` → current date in YYYY-MM-DD format (e.g., `2025-11-14`)
  - `{{capability}}` → capability name (only used in spec.md, e.g., `user-auth`)
- Use `openspec show <id> --json --deltas-only` or `openspec show <spec> --type spec` to inspect details when validation fails.
- Search existing requirements with `rg -n "Requirement:|Scenario:" openspec/specs` before writing new ones.
- Explore the codebase with `rg <keyword>`, `ls`, or direct file reads so proposals align with current implementation realities."#;

const APPLY_REFERENCES: &str = r#"**Reference**
- Use `openspec show <id> --json --deltas-only` if you need additional context from the proposal while implementing."#;

const ARCHIVE_REFERENCES: &str = r#"**Reference**
- Use `openspec list` to confirm change IDs before archiving.
- Inspect refreshed specs with `openspec list --specs` and address any validation issues before handing off."#;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compose_of_nothing_is_empty() {
        assert_eq!(compose(&[]), "");
    }

    #[test]
    fn compose_singleton_is_identity() {
        let text = "line one\n  indented line\n\ninternal blank kept";
        assert_eq!(compose(&[text]), text);
    }

    #[test]
    fn compose_separates_with_one_blank_line() {
        assert_eq!(compose(&["a", "b", "c"]), "a\n\nb\n\nc");
    }

    #[test]
    fn compose_skips_empty_fragments() {
        assert_eq!(compose(&["", "a", "", "b", ""]), "a\n\nb");
        assert_eq!(compose(&["", ""]), "");
    }

    #[test]
    fn bodies_join_role_fragments_in_order() {
        for id in SlashCommandId::all() {
            let expected = format!("{}\n\n{}\n\n{}", id.guardrails(), id.steps(), id.references());
            assert_eq!(id.body(), expected);
        }
    }

    #[test]
    fn bodies_have_no_leading_or_trailing_separator() {
        for id in SlashCommandId::all() {
            assert!(id.body().starts_with("**Guardrails**"));
            assert!(!id.body().ends_with('\n'));
        }
    }

    #[test]
    fn bodies_are_pointer_stable_across_calls() {
        for id in SlashCommandId::all() {
            assert!(std::ptr::eq(id.body(), id.body()));
        }
    }

    #[test]
    fn apply_and_archive_share_the_base_guardrails() {
        assert_eq!(SlashCommandId::Apply.guardrails(), BASE_GUARDRAILS);
        assert_eq!(SlashCommandId::Archive.guardrails(), BASE_GUARDRAILS);
    }

    #[test]
    fn proposal_guardrails_extend_the_base() {
        let proposal = SlashCommandId::Proposal.guardrails();
        assert!(proposal.starts_with(BASE_GUARDRAILS));
        let delta = &proposal[BASE_GUARDRAILS.len()..];
        assert!(!delta.trim().is_empty());
        assert_eq!(delta, format!("\n{PROPOSAL_GUARDRAIL_EXTRAS}"));
    }

    #[test]
    fn apply_body_carries_the_checklist_confirmation_step() {
        assert!(SlashCommandId::Apply
            .body()
            .contains("confirm every checklist item is finished before marking status"));
    }

    #[test]
    fn only_the_proposal_body_asks_clarifying_questions() {
        assert!(SlashCommandId::Proposal.body().contains("ask clarifying questions"));
        assert!(SlashCommandId::Proposal
            .body()
            .contains("Keep changes tightly scoped"));
        assert!(!SlashCommandId::Apply.body().contains("ask clarifying questions"));
        assert!(!SlashCommandId::Archive.body().contains("ask clarifying questions"));
    }

    #[test]
    fn as_str_round_trips() {
        for id in SlashCommandId::all() {
            assert_eq!(id.as_str().parse::<SlashCommandId>().unwrap(), *id);
        }
    }

    #[test]
    fn unknown_keys_are_invalid() {
        for key in ["", "Proposal", "apply ", "archived", "plan", "/proposal"] {
            assert!(matches!(
                key.parse::<SlashCommandId>(),
                Err(TemplateError::InvalidCommandId(_))
            ));
        }
    }

    #[test]
    fn serde_uses_snake_case_keys() {
        let json = serde_json::to_string(&SlashCommandId::Archive).unwrap();
        assert_eq!(json, "\"archive\"");
        let back: SlashCommandId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SlashCommandId::Archive);
    }
}
