//! Markdown deck file parsing.
//!
//! A deck file carries YAML frontmatter for metadata, followed by
//! Markdown sections for the boot log, the about/contact regions,
//! and the project vault.

use crate::constants::APP_BINARY_NAME;
use crate::models::{Deck, DeckMetadata, ProjectRecord};
use anyhow::{Context, Result};
use regex::Regex;
use std::path::Path;

/// Parsing state machine states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    /// Reading YAML frontmatter (between --- markers)
    InFrontmatter,
    /// Before or between recognized sections
    InContent,
    /// Reading boot-log list items
    InBootLog,
    /// Reading about body lines
    InAbout,
    /// Reading contact list items
    InContact,
    /// Reading the vault (between record headers)
    InVault,
    /// Reading a record's field lines
    InRecord,
}

/// Parses a Markdown deck file into a `Deck`.
///
/// # File Format
///
/// ```markdown
/// ---
/// name: "Kevin Wander"
/// prompt: "kevin@steel-core"
/// status: "core online // portfolio humming"
/// ---
///
/// # Boot Log
/// - forging profile: KEVIN_WANDER.asc
///
/// # About
/// Free-form lines.
///
/// # Contact
/// - github: kwander
///
/// # Vault
///
/// ## 01 // Tic-Tac-Toe
/// tagline: minimax in a 3x3 cage
/// blurb: Unbeatable opponent.
/// difficulty: LOW
/// tech: C++
/// link: projects/tictactoe
/// cmd: ./run tictactoe
/// ```
///
/// # Errors
///
/// Returns errors for a missing file, unterminated or invalid YAML
/// frontmatter, or a malformed record header. Missing optional record
/// fields are not errors.
pub fn parse_deck(path: &Path) -> Result<Deck> {
    if !path.exists() {
        anyhow::bail!(
            "Deck file not found: {}\n\n\
             Please check the file path and try again.\n\
             Run {} with no arguments to load the built-in deck.",
            path.display(),
            APP_BINARY_NAME
        );
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read deck file: {}", path.display()))?;

    parse_deck_str(&content)
        .with_context(|| format!("Failed to parse deck file: {}", path.display()))
}

/// Parses deck file content into a `Deck`.
pub fn parse_deck_str(content: &str) -> Result<Deck> {
    let section_re = Regex::new(r"^#\s+(.+?)\s*$").context("Invalid section regex")?;
    let record_re = Regex::new(r"^##\s*(.+?)\s*//\s*(.+?)\s*$").context("Invalid record regex")?;
    let field_re = Regex::new(r"^(\w+):\s*(.*)$").context("Invalid field regex")?;

    let mut deck = Deck {
        metadata: DeckMetadata::default(),
        ..Deck::default()
    };

    let mut lines = content.lines().peekable();
    let mut state = ParseState::InContent;

    // Frontmatter must open on the first non-blank line
    let mut frontmatter = String::new();
    let mut saw_frontmatter = false;
    while let Some(line) = lines.peek() {
        if line.trim().is_empty() {
            lines.next();
            continue;
        }
        if line.trim() == "---" {
            lines.next();
            state = ParseState::InFrontmatter;
        }
        break;
    }

    let mut current_record: Option<ProjectRecord> = None;

    for line in lines {
        let trimmed = line.trim();

        if state == ParseState::InFrontmatter {
            if trimmed == "---" {
                deck.metadata = serde_yml::from_str(&frontmatter)
                    .context("Invalid YAML frontmatter in deck file")?;
                saw_frontmatter = true;
                state = ParseState::InContent;
            } else {
                frontmatter.push_str(line);
                frontmatter.push('\n');
            }
            continue;
        }

        // Section switches apply in every content state
        if let Some(caps) = section_re.captures(trimmed) {
            if let Some(record) = current_record.take() {
                deck.records.push(record);
            }
            state = match caps[1].to_lowercase().as_str() {
                "boot log" => ParseState::InBootLog,
                "about" => ParseState::InAbout,
                "contact" => ParseState::InContact,
                "vault" => ParseState::InVault,
                // Unknown sections are skipped, not rejected
                _ => ParseState::InContent,
            };
            continue;
        }

        match state {
            ParseState::InBootLog | ParseState::InContact => {
                if let Some(item) = trimmed.strip_prefix("- ") {
                    let target = if state == ParseState::InBootLog {
                        &mut deck.boot_lines
                    } else {
                        &mut deck.contact
                    };
                    target.push(item.trim().to_string());
                }
            }
            ParseState::InAbout => {
                if !trimmed.is_empty() {
                    deck.about.push(trimmed.to_string());
                }
            }
            ParseState::InVault | ParseState::InRecord => {
                if let Some(caps) = record_re.captures(trimmed) {
                    if let Some(record) = current_record.take() {
                        deck.records.push(record);
                    }
                    current_record = Some(ProjectRecord::new(&caps[1], &caps[2]));
                    state = ParseState::InRecord;
                } else if trimmed.starts_with("##") {
                    anyhow::bail!("Malformed record header: {trimmed}\nExpected: ## INDEX // Title");
                } else if let Some(record) = current_record.as_mut() {
                    if let Some(caps) = field_re.captures(trimmed) {
                        apply_record_field(record, &caps[1], caps[2].trim());
                    }
                }
            }
            ParseState::InContent | ParseState::InFrontmatter => {}
        }
    }

    if let Some(record) = current_record.take() {
        deck.records.push(record);
    }

    if state == ParseState::InFrontmatter {
        anyhow::bail!("Unterminated YAML frontmatter in deck file");
    }
    if !saw_frontmatter {
        anyhow::bail!("Deck file is missing YAML frontmatter (--- block with at least a name)");
    }

    Ok(deck)
}

/// Applies one `key: value` line to a record. Unknown keys are skipped.
fn apply_record_field(record: &mut ProjectRecord, key: &str, value: &str) {
    match key {
        "tagline" => record.tagline = value.to_string(),
        "blurb" => record.blurb = value.to_string(),
        "difficulty" => record.difficulty = value.to_string(),
        "tech" => record.tech = value.to_string(),
        "link" if !value.is_empty() => record.link = Some(value.to_string()),
        "cmd" if !value.is_empty() => record.cmd = Some(value.to_string()),
        _ => {}
    }
}
