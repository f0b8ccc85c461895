//! steelcore library
//!
//! Core functionality for the steelcore terminal portfolio deck:
//! parsing deck files, the vault carousel and overlay panels, and the
//! timed boot-log and glitch effects.

// Module declarations
pub mod config;
pub mod constants;
pub mod models;
pub mod parser;
pub mod shortcuts;
pub mod tui;
