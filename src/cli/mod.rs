//! Command-line parsing.

use std::path::PathBuf;

use hexfont_core::{COLS, DecodeError, GlyphGrid, ParseGlyphError, ROWS};

use crate::clipboard::ClipboardError;
use crate::config::ConfigError;
use crate::editor::KeyError;

pub const USAGE: &str = "\
USAGE:
    hexfont [OPTIONS] <COMMAND>

OPTIONS:
    --config <PATH>   Use this config file instead of the default
    --print-config    Print the default configuration to stdout
    --version, -V     Print version information
    --help, -h        Print this help message

COMMANDS:
    token                     Print the font token
    copy                      Copy the font token to the clipboard
    paste                     Load a font token from the clipboard
    load <TOKEN>              Replace the font with a token
    import-legacy <TOKEN>     Replace the font with a first-generation token
    reset                     Go back to the built-in font
    show [CHAR]               Draw one glyph, or every designed glyph
    chart                     List the picker characters and their status
    set <CHAR> <ROWS>         Save a glyph, e.g. set A .##./#..#/####/#..#/#..#/#..#
    toggle <CHAR> <ROW> <COL> Flip one cell of a glyph
    clear <CHAR>              Save an empty glyph
    preview [TEXT]            Draw text as ASCII art
    svg [TEXT]                Draw text as SVG";

/// Errors surfaced to the user by the command line.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Key(#[from] KeyError),
    #[error("invalid glyph: {0}")]
    Glyph(#[from] ParseGlyphError),
    #[error("token rejected: {0}")]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) => 2,
            _ => 1,
        }
    }
}

/// What to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Version,
    PrintConfig,
    Token,
    Copy,
    Paste,
    Load(String),
    ImportLegacy(String),
    Reset,
    Show(Option<String>),
    Chart,
    Set { key: String, grid: GlyphGrid },
    Toggle { key: String, row: usize, col: usize },
    Clear(String),
    Preview(Option<String>),
    Svg(Option<String>),
}

impl Command {
    /// Whether running the command changes the persisted font.
    pub fn mutates_font(&self) -> bool {
        matches!(
            self,
            Self::Paste
                | Self::Load(_)
                | Self::ImportLegacy(_)
                | Self::Reset
                | Self::Set { .. }
                | Self::Toggle { .. }
                | Self::Clear(_)
        )
    }
}

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Config file override from `--config`.
    pub config_path: Option<PathBuf>,
    pub command: Command,
}

/// Parse arguments (without the program name).
pub fn parse_args(args: &[String]) -> Result<Invocation, CliError> {
    let mut config_path = None;
    let mut rest = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(flag(config_path, Command::Help)),
            "--version" | "-V" => return Ok(flag(config_path, Command::Version)),
            "--print-config" => return Ok(flag(config_path, Command::PrintConfig)),
            "--config" => {
                let path = iter
                    .next()
                    .ok_or_else(|| usage("--config needs a path"))?;
                config_path = Some(PathBuf::from(path));
            }
            _ => rest.push(arg.as_str()),
        }
    }

    let Some((&name, operands)) = rest.split_first() else {
        return Ok(flag(config_path, Command::Help));
    };

    let command = match (name, operands) {
        ("token", []) => Command::Token,
        ("copy", []) => Command::Copy,
        ("paste", []) => Command::Paste,
        ("load", [token]) => Command::Load((*token).to_owned()),
        ("import-legacy", [token]) => Command::ImportLegacy((*token).to_owned()),
        ("reset", []) => Command::Reset,
        ("show", []) => Command::Show(None),
        ("show", [key]) => Command::Show(Some((*key).to_owned())),
        ("chart", []) => Command::Chart,
        ("set", [key, rows]) => Command::Set {
            key: (*key).to_owned(),
            grid: rows.parse()?,
        },
        ("toggle", [key, row, col]) => Command::Toggle {
            key: (*key).to_owned(),
            row: cell_index(row, ROWS, "row")?,
            col: cell_index(col, COLS, "column")?,
        },
        ("clear", [key]) => Command::Clear((*key).to_owned()),
        ("preview", []) => Command::Preview(None),
        ("preview", text) => Command::Preview(Some(text.join(" "))),
        ("svg", []) => Command::Svg(None),
        ("svg", text) => Command::Svg(Some(text.join(" "))),
        (
            "token" | "copy" | "paste" | "load" | "import-legacy" | "reset" | "show" | "chart"
            | "set" | "toggle" | "clear",
            _,
        ) => return Err(usage(&format!("wrong number of arguments for '{name}'"))),
        _ => return Err(usage(&format!("unknown command '{name}'"))),
    };

    Ok(Invocation {
        config_path,
        command,
    })
}

fn flag(config_path: Option<PathBuf>, command: Command) -> Invocation {
    Invocation {
        config_path,
        command,
    }
}

fn usage(msg: &str) -> CliError {
    CliError::Usage(msg.to_owned())
}

/// Parse a row or column number and check it against the grid.
fn cell_index(text: &str, limit: usize, what: &str) -> Result<usize, CliError> {
    match text.parse::<usize>() {
        Ok(n) if n < limit => Ok(n),
        _ => Err(usage(&format!(
            "{what} must be a number from 0 to {}, got '{text}'",
            limit - 1
        ))),
    }
}
