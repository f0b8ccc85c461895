//! Data structures for deck content.

pub mod deck;
pub mod project;

pub use deck::{Deck, DeckMetadata};
pub use project::ProjectRecord;
