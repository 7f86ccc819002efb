//! hexfont: design hexagonal bitmap fonts and share them as short tokens.
//!
//! The glyph model and token codec live in `hexfont_core`; this crate adds
//! the persisted font, the editor, previews, and the command line.

pub mod app;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod editor;
pub mod geometry;
pub mod render;
pub mod store;
