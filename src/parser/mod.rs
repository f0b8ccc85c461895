//! Deck file parsing.

pub mod deck;

pub use deck::{parse_deck, parse_deck_str};
