//! Application: ties config, font store, and editor to CLI commands.

use std::io::Write;
use std::path::PathBuf;

use log::{debug, warn};

use hexfont_core::{DEFAULT_FONT_TOKEN, DecodeReport, FontCatalog, codec};

use crate::cli::{self, CliError, Command, Invocation};
use crate::clipboard;
use crate::config::{self, Config, ConfigError};
use crate::editor::{Editor, PALETTE};
use crate::geometry::HexLayout;
use crate::render;
use crate::store::FontStore;

/// One run of the program against one config file.
pub struct App {
    config: Config,
    config_path: PathBuf,
    store: FontStore,
    editor: Editor,
}

impl App {
    /// Parse `args` (without the program name), execute the command, and
    /// flush `out`.
    pub fn run(args: &[String], out: &mut impl Write) -> Result<(), CliError> {
        let Invocation {
            config_path,
            command,
        } = cli::parse_args(args)?;
        let mut app = Self::open(config_path);
        app.execute(command, out)?;
        out.flush()?;
        Ok(())
    }

    /// Load config (default path unless overridden) and bootstrap the font.
    pub fn open(config_path: Option<PathBuf>) -> Self {
        let config_path = config_path.unwrap_or_else(config::config_path);
        let config = Config::load_from(&config_path);
        Self::with_config(config, config_path)
    }

    /// Build an app around an already loaded config.
    pub fn with_config(config: Config, config_path: PathBuf) -> Self {
        let store = FontStore::bootstrap(config.font.token.as_deref());
        let editor = Editor::new(config.editor.first_char, config.editor.uppercase);
        debug!(
            "app: {} glyphs, editing {:?}",
            store.with_catalog(FontCatalog::len),
            editor.current()
        );
        Self {
            config,
            config_path,
            store,
            editor,
        }
    }

    pub fn store(&self) -> &FontStore {
        &self.store
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run one command, writing its output to `out`.
    ///
    /// Commands that change the font persist the new token to the config
    /// file before returning.
    pub fn execute(&mut self, command: Command, out: &mut impl Write) -> Result<(), CliError> {
        let persist = command.mutates_font();
        match command {
            Command::Help => {
                writeln!(out, "hexfont {}", env!("CARGO_PKG_VERSION"))?;
                writeln!(out, "Design hexagonal bitmap fonts and share them as short tokens\n")?;
                writeln!(out, "{}", cli::USAGE)?;
            }
            Command::Version => writeln!(out, "hexfont {}", env!("CARGO_PKG_VERSION"))?,
            Command::PrintConfig => {
                let text = toml::to_string_pretty(&Config::default()).map_err(ConfigError::from)?;
                write!(out, "{text}")?;
            }
            Command::Token => writeln!(out, "{}", self.store.token())?,
            Command::Copy => {
                let token = self.store.token();
                clipboard::set_text(&token)?;
                writeln!(out, "copied {} characters to the clipboard", token.chars().count())?;
            }
            Command::Paste => {
                let token = clipboard::get_text()?;
                let report = self
                    .store
                    .replace_from_token(&token, self.config.font.decode_mode())?;
                write_report(out, &report)?;
            }
            Command::Load(token) => {
                let report = self
                    .store
                    .replace_from_token(&token, self.config.font.decode_mode())?;
                write_report(out, &report)?;
            }
            Command::ImportLegacy(token) => {
                let report = self.store.import_legacy(&token)?;
                write_report(out, &report)?;
            }
            Command::Reset => {
                self.store.reset_to(FontCatalog::bootstrap(DEFAULT_FONT_TOKEN));
                writeln!(out, "restored the built-in font")?;
            }
            Command::Show(Some(key)) => {
                let ch = self.editor.select(&key)?;
                self.editor.load_from(&self.store, ch);
                if self.store.with_catalog(|c| c.contains(ch)) {
                    writeln!(out, "{}", codec::encode_record(ch, self.editor.grid()))?;
                    writeln!(out, "{}", self.editor.grid())?;
                } else {
                    writeln!(out, "{ch:?} is not designed yet")?;
                }
            }
            Command::Show(None) => {
                let catalog = self.store.snapshot();
                for (i, (ch, grid)) in catalog.entries().enumerate() {
                    if i > 0 {
                        writeln!(out)?;
                    }
                    writeln!(out, "{}", codec::encode_record(ch, grid))?;
                    writeln!(out, "{grid}")?;
                }
            }
            Command::Chart => {
                let catalog = self.store.snapshot();
                for ch in PALETTE.chars() {
                    match catalog.get(ch) {
                        Some(grid) => writeln!(out, "{ch:?}  {}", grid.to_pattern())?,
                        None => writeln!(out, "{ch:?}  -")?,
                    }
                }
            }
            Command::Set { key, grid } => {
                let ch = self.editor.select(&key)?;
                self.editor.load_from(&self.store, ch);
                for (point, on) in grid.cells() {
                    self.editor.paint(point.row, point.col, on);
                }
                self.editor.save_into(&self.store);
                writeln!(out, "{}", codec::encode_record(ch, self.editor.grid()))?;
            }
            Command::Toggle { key, row, col } => {
                let ch = self.editor.select(&key)?;
                self.editor.load_from(&self.store, ch);
                self.editor.toggle(row, col);
                self.editor.save_into(&self.store);
                writeln!(out, "{}", self.editor.grid())?;
            }
            Command::Clear(key) => {
                let ch = self.editor.select(&key)?;
                self.editor.load_from(&self.store, ch);
                self.editor.clear();
                self.editor.save_into(&self.store);
                writeln!(out, "{}", codec::encode_record(ch, self.editor.grid()))?;
            }
            Command::Preview(text) => {
                let text = self.preview_text(text);
                let art = self.store.with_catalog(|c| render::ascii(c, &text));
                writeln!(out, "{art}")?;
            }
            Command::Svg(text) => {
                let text = self.preview_text(text);
                let layout = HexLayout::new(self.config.preview.effective_hex_size());
                let scale = self.config.preview.effective_scale();
                let document = self
                    .store
                    .with_catalog(|c| render::svg::document(c, &text, &layout, scale));
                writeln!(out, "{document}")?;
            }
        }

        if persist {
            self.persist()?;
        }
        Ok(())
    }

    /// Text to preview: the argument or the configured default, upper-cased
    /// when the editor upper-cases keys.
    fn preview_text(&self, text: Option<String>) -> String {
        let text = text.unwrap_or_else(|| self.config.preview.text.clone());
        if self.config.editor.uppercase {
            text.to_uppercase()
        } else {
            text
        }
    }

    /// Write the live font's token to the config file.
    fn persist(&mut self) -> Result<(), CliError> {
        self.config.font.token = Some(self.store.token());
        self.config.save_to(&self.config_path)?;
        Ok(())
    }
}

fn write_report(out: &mut impl Write, report: &DecodeReport) -> std::io::Result<()> {
    writeln!(out, "loaded {} glyphs", report.glyphs)?;
    for skipped in &report.skipped {
        warn!("skipped record {}: {}", skipped.index, skipped.reason);
        writeln!(
            out,
            "skipped record {} ({:?}): {}",
            skipped.index, skipped.record, skipped.reason
        )?;
    }
    Ok(())
}
