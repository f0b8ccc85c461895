//! Integration tests for parsing deck files from disk.

use std::io::Write;

use steelcore::parser::parse_deck;

const FULL_DECK: &str = r#"---
name: "Kevin Wander"
prompt: "kevin@steel-core"
status: "core online // portfolio humming"
---

# Boot Log
- forging profile: KEVIN_WANDER.asc
- binding: CS major @ Hunter College // NYC
- languages loaded: C++, Python, Kotlin

# About
CS student building interactive puzzles
and terminal-flavored experiments.

# Contact
- github: kwander
- mail: kevin@example.net

# Vault

## 01 // Tic-Tac-Toe
tagline: minimax in a 3x3 cage
blurb: Unbeatable opponent driven by game-tree search.
difficulty: LOW
tech: C++
link: projects/tictactoe
cmd: ./run tictactoe

## 02 // 2048
tagline: slide, merge, overflow
difficulty: MID
tech: Kotlin
link: projects/2048

## 03 // Closed Source
tagline: not public yet
"#;

fn write_deck(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn parses_a_complete_deck_file() {
    let file = write_deck(FULL_DECK);
    let deck = parse_deck(file.path()).unwrap();

    assert_eq!(deck.metadata.name, "Kevin Wander");
    assert_eq!(deck.metadata.prompt, "kevin@steel-core");
    assert_eq!(deck.boot_lines.len(), 3);
    assert_eq!(deck.about.len(), 2);
    assert_eq!(deck.contact.len(), 2);
    assert_eq!(deck.records.len(), 3);
}

#[test]
fn record_fields_and_optionals() {
    let file = write_deck(FULL_DECK);
    let deck = parse_deck(file.path()).unwrap();

    let first = &deck.records[0];
    assert_eq!(first.index, "01");
    assert_eq!(first.title, "Tic-Tac-Toe");
    assert_eq!(first.footer_path(), "./projects/tictactoe");
    assert_eq!(first.cmd.as_deref(), Some("./run tictactoe"));

    // Link without cmd
    let second = &deck.records[1];
    assert_eq!(second.link.as_deref(), Some("projects/2048"));
    assert!(second.cmd.is_none());

    // Neither link nor cmd
    let third = &deck.records[2];
    assert!(third.link.is_none());
    assert_eq!(third.footer_path(), "");
}

#[test]
fn missing_file_is_a_friendly_error() {
    let err = parse_deck(std::path::Path::new("/nonexistent/deck.md")).unwrap_err();
    assert!(err.to_string().contains("not found"));
}

#[test]
fn invalid_frontmatter_is_an_error() {
    let file = write_deck("---\nname: [unclosed\n---\n");
    assert!(parse_deck(file.path()).is_err());
}

#[test]
fn record_order_matches_file_order() {
    let file = write_deck(FULL_DECK);
    let deck = parse_deck(file.path()).unwrap();
    let titles: Vec<&str> = deck.records.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Tic-Tac-Toe", "2048", "Closed Source"]);
}
