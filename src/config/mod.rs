//! Configuration structures and loading logic.

mod io;

pub use io::{ConfigError, config_dir, config_path};

use serde::{Deserialize, Serialize};

use hexfont_core::DecodeMode;

/// Top-level configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub font: FontConfig,
    pub editor: EditorConfig,
    pub preview: PreviewConfig,
}

/// The persisted font.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Font token to start from. `None` means the built-in default font.
    pub token: Option<String>,
    /// Reject a pasted token outright if any record is malformed.
    pub strict_decode: bool,
}

/// Glyph editing behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Character selected when the editor opens.
    pub first_char: char,
    /// Upper-case typed characters before using them as glyph keys.
    pub uppercase: bool,
}

/// Text preview settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    pub text: String,
    pub scale: f32,
    /// Hexagon radius in SVG user units.
    pub hex_size: f32,
}

pub const MIN_PREVIEW_SCALE: f32 = 0.1;
pub const MAX_PREVIEW_SCALE: f32 = 2.0;

impl FontConfig {
    pub fn decode_mode(&self) -> DecodeMode {
        if self.strict_decode {
            DecodeMode::Strict
        } else {
            DecodeMode::Lenient
        }
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            first_char: 'P',
            uppercase: true,
        }
    }
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            text: "HELLO WORLD!".to_owned(),
            scale: 0.5,
            hex_size: 20.0,
        }
    }
}

impl PreviewConfig {
    /// Return scale clamped to [0.1, 2.0]. Non-finite values use the default.
    pub fn effective_scale(&self) -> f32 {
        if self.scale.is_finite() {
            self.scale.clamp(MIN_PREVIEW_SCALE, MAX_PREVIEW_SCALE)
        } else {
            Self::default().scale
        }
    }

    /// Return hex size, falling back to the default unless finite and positive.
    pub fn effective_hex_size(&self) -> f32 {
        if self.hex_size.is_finite() && self.hex_size > 0.0 {
            self.hex_size
        } else {
            Self::default().hex_size
        }
    }
}

#[cfg(test)]
mod tests;
