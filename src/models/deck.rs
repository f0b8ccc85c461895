//! Deck data structures: everything parsed from a deck file.

use serde::{Deserialize, Serialize};

use super::ProjectRecord;

/// Deck metadata embedded in YAML frontmatter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckMetadata {
    /// Deck owner name shown in the title bar
    pub name: String,
    /// Prompt label used for command echo lines (e.g., "kevin@steel-core")
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// Status line shown once the core is ignited
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_prompt() -> String {
    "guest@steel-core".to_string()
}

fn default_status() -> String {
    "core online // deck humming".to_string()
}

impl Default for DeckMetadata {
    fn default() -> Self {
        Self {
            name: "steel-core".to_string(),
            prompt: default_prompt(),
            status: default_status(),
        }
    }
}

/// A complete parsed deck: metadata plus the content regions that the
/// UI renders and the overlay manager snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Deck {
    /// Frontmatter metadata
    pub metadata: DeckMetadata,
    /// Scripted boot-log lines appended by the ticker
    pub boot_lines: Vec<String>,
    /// About region body lines
    pub about: Vec<String>,
    /// Contact region list entries
    pub contact: Vec<String>,
    /// Ordered project records for the vault carousel
    pub records: Vec<ProjectRecord>,
}

impl Deck {
    /// The deck shipped in the binary, used when no deck file is given.
    #[must_use]
    pub fn builtin() -> Self {
        let mut tictactoe = ProjectRecord::new("01", "Tic-Tac-Toe");
        tictactoe.tagline = "minimax in a 3x3 cage".to_string();
        tictactoe.blurb =
            "Unbeatable opponent driven by exhaustive game-tree search.".to_string();
        tictactoe.difficulty = "LOW".to_string();
        tictactoe.tech = "C++".to_string();
        tictactoe.link = Some("projects/tictactoe".to_string());
        tictactoe.cmd = Some("./run tictactoe".to_string());

        let mut forge = ProjectRecord::new("02", "ASCII Forge");
        forge.tagline = "glyph art from raw pixels".to_string();
        forge.blurb = "Image-to-ascii converter with adjustable density ramps.".to_string();
        forge.difficulty = "MID".to_string();
        forge.tech = "Python".to_string();
        forge.link = Some("projects/forge".to_string());
        forge.cmd = Some("./run forge".to_string());

        let mut game2048 = ProjectRecord::new("03", "2048");
        game2048.tagline = "slide, merge, overflow".to_string();
        game2048.blurb = "Tile merger with undo stack and deterministic spawn seed.".to_string();
        game2048.difficulty = "MID".to_string();
        game2048.tech = "Kotlin".to_string();
        game2048.link = Some("projects/2048".to_string());
        game2048.cmd = Some("./run 2048".to_string());

        Self {
            metadata: DeckMetadata::default(),
            boot_lines: vec![
                "forging profile: GUEST.asc".to_string(),
                "binding: CS major // NYC".to_string(),
                "languages loaded: C++, Python, Kotlin".to_string(),
                "skills mounted: data structures, problem solving".to_string(),
                "injecting: interactive puzzles".to_string(),
                "scanning: opportunities for internships & collabs".to_string(),
            ],
            about: vec![
                "Systems tinkerer with a weakness for terminals that".to_string(),
                "pretend to be older than they are.".to_string(),
            ],
            contact: vec![
                "github: example".to_string(),
                "mail: guest@example.net".to_string(),
            ],
            records: vec![tictactoe, forge, game2048],
        }
    }
}
