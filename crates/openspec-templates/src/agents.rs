//! The long-form instruction guide written into `openspec/AGENTS.md`.
//!
//! This is payload text for AI coding assistants working in an
//! OpenSpec-managed repository. The crate treats it as opaque content;
//! nothing here is parsed or validated on this side of the boundary.

pub const AGENTS_GUIDE: &str = r#"# OpenSpec Instructions

Instructions for AI coding assistants using OpenSpec for spec-driven development.

## TL;DR Quick Checklist

- Search existing work: `openspec spec list --long`, `openspec list` (use `rg` only for full-text search)
- Decide scope: new capability vs modification of an existing one
- Pick a unique `change-id`: kebab-case, verb-led (`add-`, `update-`, `remove-`, `refactor-`)
- Scaffold: `proposal.md`, `design.md` (required), `tasks.md`, plus delta specs for every affected capability
- Write deltas: use `## ADDED|MODIFIED|REMOVED|RENAMED Requirements`; every requirement needs at least one `#### Scenario:` (with a mermaid flowchart)
- Validate: `openspec validate [change-id] --strict` and fix every issue
- Request approval: do not start implementation before the proposal is approved

## Three-Stage Workflow

### Stage 1: Creating Changes

Create a proposal when you need to:
- Add features or functionality
- Make breaking changes (API, schema)
- Change architecture or patterns
- Optimize performance (changes behavior)
- Update security patterns

Triggers (examples):
- "Help me create a change proposal"
- "Help me plan a change"
- "I want to create a spec proposal"

Loose matching guidance:
- Contains one of: `proposal`, `change`, `spec`
- With one of: `create`, `plan`, `make`, `start`, `help`

Skip the proposal for:
- Bug fixes (restore intended behavior)
- Typos, formatting, comments
- Dependency updates (non-breaking)
- Configuration changes
- Tests for existing behavior

Workflow:
1. Review `openspec/project.md`, `openspec list`, and `openspec list --specs` for current context.
2. Pick a unique verb-led `change-id` and scaffold under `openspec/changes/<id>/`:
   - `proposal.md` (high-level design)
   - `design.md` (detailed design, always required)
   - `tasks.md` (implementation checklist)
   - delta specs under `specs/`
3. Write spec deltas with `## ADDED|MODIFIED|REMOVED Requirements`; each requirement carries at least one `#### Scenario:` (with a mermaid flowchart).
4. Run `openspec validate <id> --strict` and resolve every issue before sharing the proposal.

### Stage 2: Implementing Changes

Track these steps as TODOs and complete them one by one.
1. **Read proposal.md** - understand the requirement background and system sequencing
2. **Read design.md** - technical decisions, interface design, database design
3. **Read spec.md under specs/** - per-capability flowcharts and scenarios
4. **Read tasks.md** - the implementation checklist
5. **Implement in order** - work through tasks sequentially
6. **Confirm completion** - every item in `tasks.md` must be finished before updating status
7. **Update the checklist** - once all work is done, mark each task `- [x]` to reflect reality
8. **Approval gate** - never start implementation before the proposal is reviewed and approved

### Stage 3: Archiving Changes

After deployment, in a separate PR:
- Move `changes/[name]/` to `changes/archive/YYYY-MM-DD-[name]/`
- Update `specs/` if capabilities changed
- Use `openspec archive <change-id> --skip-specs --yes` for tooling-only changes (always pass the change ID explicitly)
- Run `openspec validate --strict` to confirm the archived change still passes

## Before Any Task

**Context checklist:**
- [ ] Read relevant specs in `specs/[capability]/spec.md`
- [ ] Check pending changes in `changes/` for conflicts
- [ ] Read `openspec/project.md` for conventions
- [ ] Run `openspec list` to see active changes
- [ ] Run `openspec list --specs` to see existing capabilities

**Before creating specs:**
- Always check whether the capability already exists
- Prefer modifying existing specs over creating duplicates
- Use `openspec show [spec]` to review current state
- If the request is ambiguous, ask one or two clarifying questions before scaffolding

### Search Guidance

- Enumerate specs: `openspec spec list --long` (or `--json` for scripts)
- Enumerate changes: `openspec list`
- Show details:
  - Spec: `openspec show <spec-id> --type spec` (add `--json` for filters)
  - Change: `openspec show <change-id> --json --deltas-only`
- Full-text search (use ripgrep): `rg -n "Requirement:|Scenario:" openspec/specs`

## Quick Start

### CLI Commands

```bash
# Essential commands
openspec list                  # List active changes
openspec list --specs          # List specifications
openspec show [item]           # Display change or spec
openspec validate [item]       # Validate changes or specs
openspec archive <change-id> [--yes|-y]   # Archive after deployment

# Project management
openspec init [path]           # Initialize OpenSpec
openspec update [path]         # Update instruction files

# Debugging
openspec show [change] --json --deltas-only
openspec validate [change] --strict
```

### Command Flags

- `--json` - machine-readable output
- `--type change|spec` - disambiguate items
- `--strict` - comprehensive validation
- `--no-interactive` - disable prompts
- `--skip-specs` - archive without spec updates
- `--yes`/`-y` - skip confirmation prompts (non-interactive archive)

## Directory Structure

```
openspec/
├── project.md              # Project conventions
├── specs/                  # Current truth - what is built
│   └── [capability]/       # One focused capability
│       ├── spec.md         # Requirements and scenarios
│       └── design.md       # Technical patterns
├── changes/                # Proposals - what should change
│   ├── [change-name]/
│   │   ├── proposal.md     # Why, what, and system sequencing
│   │   ├── design.md       # Interface and database design (required)
│   │   ├── tasks.md        # Implementation checklist
│   │   └── specs/          # Delta changes
│   │       └── [capability]/
│   │           └── spec.md # ADDED/MODIFIED/REMOVED
│   └── archive/            # Completed changes
```

## Creating Change Proposals

### Decision Tree

```
New request?
├─ Bug fix restoring spec behavior? → Fix directly
├─ Typo/format/comment? → Fix directly
├─ New feature/capability? → Create proposal
├─ Breaking change? → Create proposal
├─ Architecture change? → Create proposal
└─ Unclear? → Create proposal (safer)
```

### Proposal Structure

1. **Create directory:** `changes/[change-id]/` (kebab-case, verb-led, unique)

2. **Write proposal.md:** requirement background, product interaction (optional),
   and a cross-system sequence diagram that pins down system responsibilities.
   Use mermaid for the sequence diagram; mark alternative branches with `alt`
   and concurrent calls with `par`:

```mermaid
sequenceDiagram
    participant User
    participant Frontend as System A
    participant Backend as System B

    User->>Frontend: open the feature page
    Frontend->>Backend: call the API (HTTP)
    Backend-->>Frontend: return result
    Frontend-->>User: render result
```

3. **Create spec deltas:** `specs/[capability]/spec.md`, one folder per
   affected capability. If a feature is a sequence of steps, keep all the
   steps inside one scenario's flowchart; only split into multiple
   scenarios for genuinely distinct business situations (different user
   types, different channels).

```markdown
## ADDED Requirements
### Requirement: Feature name
The system SHALL provide ...

#### Scenario: Scenario name
A mermaid flowchart with four elements:
1. Precondition: current-state check plus business rule
2. Trigger: user action, system task, or external callback
3. Postcondition: primary-record update, related writes, audit log
4. Related interface/component: method signature or endpoint + params
```

4. **Create tasks.md:** a numbered `- [ ]` checklist of implementation steps.

5. **Create design.md (required):** technical decisions, interface design,
   database design. For every endpoint list the path, method, request and
   response shapes, enum values, and error codes, and draw the detailed
   per-endpoint flowchart that the scenario flowcharts summarize.

## Spec File Format

### Critical: Scenario Formatting

Correct format (a `#### Scenario:` header followed by a mermaid flowchart):

```markdown
#### Scenario: User login succeeds
```

```mermaid
flowchart TD
    A[Precondition: user registered and account active] --> B[Trigger: user submits credentials]
    B --> C[Postcondition: issue JWT and update last-login time]
    C --> D[Related interface: POST /api/v1/auth/login]
```

Wrong formats (no bullets, no bold, no three-hash headers):

```markdown
- **Scenario: User login**
**Scenario**: User login
### Scenario: User login
```

Scenario requirements:
- Every requirement has at least one scenario
- Use a `#### Scenario:` header (exactly four hash marks)
- Describe the scenario with a mermaid flowchart under the header
- The flowchart covers all four elements: precondition, trigger, postcondition, related interface/component

A scenario is a complete business situation, possibly spanning many steps.
Do not split sequential steps (identity check, registry lookup, face scan,
credit query) into separate scenarios; they are nodes of one flowchart.

### Requirement Wording

- Use normative wording (SHALL, MUST); avoid MAY/COULD in requirement text

### Delta Operations

- `## ADDED Requirements` - new capability
- `## MODIFIED Requirements` - changed behavior
- `## REMOVED Requirements` - retired functionality
- `## RENAMED Requirements` - name changes

Header matching uses `trim(header)` - whitespace is ignored.

#### When to use ADDED vs MODIFIED

- **ADDED**: introduces a capability or sub-capability that stands on its
  own. Prefer ADDED when the change is orthogonal rather than a semantic
  change to an existing requirement.
- **MODIFIED**: changes the behavior, scope, or acceptance of an existing
  requirement. Always paste the complete updated requirement (header plus
  all scenarios); the archiver replaces the whole requirement with what you
  provide, so a partial delta loses the previous detail.
- **RENAMED**: only when the name changes. If behavior changes too, pair
  RENAMED (name) with MODIFIED (content) referencing the new name.

Common pitfall: using MODIFIED to bolt on a new concern without carrying
the previous text forward. That silently drops detail at archive time. If
you are not deliberately changing an existing requirement, add a new one
under ADDED instead.

Steps for a correct MODIFIED requirement:
1) Locate the existing requirement in `openspec/specs/<capability>/spec.md`.
2) Copy the entire block, from `### Requirement: ...` through all its scenarios.
3) Paste it under `## MODIFIED Requirements` and edit to the new behavior.
4) Keep the header text an exact match (whitespace ignored) and keep at least one `#### Scenario:`.

RENAMED example:

```markdown
## RENAMED Requirements
- FROM: `### Requirement: User Login`
- TO: `### Requirement: User Authentication`
```

## Troubleshooting

### Common Errors

**Change must have at least one delta**
- Check `changes/[name]/specs/` exists with .md files
- Verify files have operation prefixes (## ADDED Requirements)

**Requirement must have at least one scenario**
- Check scenarios use the `#### Scenario:` format (four hash marks)
- No bullets or bold for scenario headers

**Silent scenario parsing failures**
- Exact format required: `#### Scenario: Name`
- Debug with: `openspec show [change] --json --deltas-only`

### Validation Tips

```bash
# Always use strict mode for comprehensive checks
openspec validate [change] --strict

# Debug delta parsing
openspec show [change] --json | jq '.deltas'
```

## Multi-Capability Example

```
openspec/changes/add-2fa-notify/
├── proposal.md
├── tasks.md
└── specs/
    ├── auth/
    │   └── spec.md   # ADDED: two-factor authentication
    └── notifications/
        └── spec.md   # ADDED: OTP email notification
```

## Best Practices

### Simplicity First
- Default to under 100 lines of new code
- Single-file implementations until proven insufficient
- Avoid frameworks without clear justification
- Choose boring, proven patterns

### Complexity Triggers
Only add complexity with:
- Performance data showing the current solution is too slow
- Concrete scale requirements (>1000 users, >100MB data)
- Multiple proven use cases requiring the abstraction

### Clear References
- Use the `file.rs:42` form for code locations
- Reference specs as `specs/auth/spec.md`
- Link related changes and PRs

### Capability Naming
- Use verb-noun: `user-auth`, `payment-capture`
- Single purpose per capability
- Ten-minute understandability rule
- Split if the description needs an "AND"

### Change ID Naming
- Kebab-case, short and descriptive: `add-two-factor-auth`
- Prefer verb-led prefixes: `add-`, `update-`, `remove-`, `refactor-`
- Ensure uniqueness; if taken, append `-2`, `-3`, and so on

## Error Recovery

### Change Conflicts
1. Run `openspec list` to see active changes
2. Check for overlapping specs
3. Coordinate with change owners
4. Consider combining proposals

### Missing Context
1. Read project.md first
2. Check related specs
3. Review recent archives
4. Ask for clarification

## Quick Reference

### Stage Indicators
- `changes/` - proposed, not yet built
- `specs/` - built and deployed
- `archive/` - completed changes

### File Purposes
- `proposal.md` - why, what, and system sequencing
- `design.md` - interface and database design (required)
- `spec.md` - per-capability flowcharts and scenarios
- `tasks.md` - implementation checklist

Remember: specs are truth. Changes are proposals. Keep them in sync.
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guide_is_nonempty() {
        assert!(!AGENTS_GUIDE.is_empty());
    }

    #[test]
    fn guide_carries_delta_heading_vocabulary() {
        assert!(AGENTS_GUIDE.contains("## ADDED Requirements"));
        assert!(AGENTS_GUIDE.contains("## MODIFIED Requirements"));
        assert!(AGENTS_GUIDE.contains("## REMOVED Requirements"));
        assert!(AGENTS_GUIDE.contains("## RENAMED Requirements"));
    }

    #[test]
    fn guide_pins_four_hash_scenario_headers() {
        assert!(AGENTS_GUIDE.contains("#### Scenario:"));
        // The format rule itself is spelled out, not just used.
        assert!(AGENTS_GUIDE.contains("four hash marks"));
    }

    #[test]
    fn guide_embeds_diagram_blocks() {
        assert!(AGENTS_GUIDE.contains("```mermaid"));
        assert!(AGENTS_GUIDE.contains("flowchart TD"));
        assert!(AGENTS_GUIDE.contains("sequenceDiagram"));
    }
}
