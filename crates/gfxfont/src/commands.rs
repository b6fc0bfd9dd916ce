//! Command handlers
//!
//! Each subcommand loads the font file it is given, works on the model and
//! writes it back when something changed. Output goes to `out` so the
//! handlers can be tested without a terminal.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use gfxfont_engine::bit_packer::packed_len;
use gfxfont_engine::editor::{glyph_label, render_glyph};
use gfxfont_engine::persistence::{load_font, save_font};
use gfxfont_engine::{EditorSession, FontModel, GlyphGrid, PromptService, SessionMessage};

use crate::{CliResult, Settings};

/// Font layout options, unset values fall back to the settings or the current font
#[derive(clap::Args, Debug, Default, Clone)]
pub struct LayoutArgs {
    /// Glyph width in pixels
    #[arg(long)]
    pub width: Option<i32>,

    /// Glyph height in pixels
    #[arg(long)]
    pub height: Option<i32>,

    /// First ASCII code of the font
    #[arg(long)]
    pub start: Option<u32>,

    /// Last ASCII code of the font
    #[arg(long)]
    pub end: Option<u32>,
}

fn open(path: &Path) -> CliResult<FontModel> {
    load_font(path).with_context(|| format!("Can't load font {}", path.display()))
}

fn store(model: &mut FontModel, path: &Path) -> CliResult<()> {
    save_font(model, path).with_context(|| format!("Can't save font {}", path.display()))
}

pub fn new_font(path: &Path, layout: &LayoutArgs, settings: &Settings, force: bool, out: &mut dyn Write) -> CliResult<()> {
    if path.exists() && !force {
        bail!("{} already exists, use --force to overwrite it", path.display());
    }
    let mut model = FontModel::with_layout(
        layout.width.unwrap_or(settings.default_width),
        layout.height.unwrap_or(settings.default_height),
        layout.start.unwrap_or(settings.default_code_start),
        layout.end.unwrap_or(settings.default_code_end),
    )?;
    store(&mut model, path)?;
    writeln!(
        out,
        "Created {} with {} glyphs of {}x{}",
        path.display(),
        model.glyph_count(),
        model.width(),
        model.height()
    )?;
    Ok(())
}

pub fn info(path: &Path, out: &mut dyn Write) -> CliResult<()> {
    let model = open(path)?;
    let range = model.code_range();
    writeln!(out, "File:       {}", path.display())?;
    writeln!(out, "Size:       {}x{}", model.width(), model.height())?;
    writeln!(
        out,
        "Range:      {}..{} ({:?}..{:?}), {} glyphs",
        model.code_start(),
        model.code_end(),
        range.start(),
        range.end(),
        model.glyph_count()
    )?;
    writeln!(out, "Pixels set: {}", model.count_set_pixels())?;
    writeln!(
        out,
        "Bitmap:     {} bytes",
        packed_len(model.width(), model.height()) * model.glyph_count()
    )?;
    Ok(())
}

fn write_glyph(out: &mut dyn Write, ch: char, glyph: &GlyphGrid) -> CliResult<()> {
    writeln!(out, "{}", glyph_label(ch))?;
    for line in render_glyph(glyph, true, None) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

pub fn show(path: &Path, ch: Option<char>, out: &mut dyn Write) -> CliResult<()> {
    let model = open(path)?;
    match ch {
        Some(ch) => write_glyph(out, ch, model.glyph_at(ch)?)?,
        None => {
            for (ch, glyph) in model.glyphs() {
                write_glyph(out, ch, glyph)?;
                writeln!(out)?;
            }
        }
    }
    Ok(())
}

pub fn toggle(path: &Path, ch: char, x: i32, y: i32, out: &mut dyn Write) -> CliResult<()> {
    let mut model = open(path)?;
    model.toggle_pixel(ch, x, y)?;
    store(&mut model, path)?;

    let state = if model.glyph_at(ch)?.pixel(x, y) == Some(true) { "set" } else { "clear" };
    writeln!(out, "Pixel ({}, {}) of {:?} is now {}", x, y, ch, state)?;
    Ok(())
}

pub fn draw(path: &Path, ch: char, rows: &[String], out: &mut dyn Write) -> CliResult<()> {
    let mut model = open(path)?;
    let glyph = GlyphGrid::parse_pattern(rows)?;
    model.set_glyph(ch, glyph)?;
    store(&mut model, path)?;

    write_glyph(out, ch, model.glyph_at(ch)?)?;
    Ok(())
}

pub fn configure(path: &Path, layout: &LayoutArgs, out: &mut dyn Write) -> CliResult<()> {
    let mut model = open(path)?;
    let pixels = model.count_set_pixels();
    model.reconfigure(
        layout.width.unwrap_or(model.width()),
        layout.height.unwrap_or(model.height()),
        layout.start.unwrap_or(model.code_start() as u32),
        layout.end.unwrap_or(model.code_end() as u32),
    )?;
    store(&mut model, path)?;

    writeln!(
        out,
        "Font is now {}x{} for codes {}..{}",
        model.width(),
        model.height(),
        model.code_start(),
        model.code_end()
    )?;
    if pixels > 0 {
        writeln!(out, "All glyphs were cleared ({} pixels)", pixels)?;
    }
    Ok(())
}

/// Answers the export prompts from the command line, asking `fallback` only
/// for what was not given
pub struct ArgumentPrompt<P> {
    output: Option<PathBuf>,
    name: Option<String>,
    default_name: String,
    fallback: P,
}

impl<P: PromptService> ArgumentPrompt<P> {
    pub fn new(output: Option<PathBuf>, name: Option<String>, default_name: impl Into<String>, fallback: P) -> Self {
        Self {
            output,
            name,
            default_name: default_name.into(),
            fallback,
        }
    }
}

impl<P: PromptService> PromptService for ArgumentPrompt<P> {
    fn input(&mut self, prompt: &str, title: &str) -> Option<String> {
        self.name
            .take()
            .or_else(|| self.fallback.input(prompt, title))
            .or_else(|| Some(self.default_name.clone()))
    }

    fn select_file(&mut self, title: &str, save: bool) -> Option<PathBuf> {
        self.output.take().or_else(|| self.fallback.select_file(title, save))
    }
}

pub fn export_font(path: &Path, prompts: &mut dyn PromptService, out: &mut dyn Write) -> CliResult<()> {
    let mut session = EditorSession::new(open(path)?);
    match session.export(prompts) {
        message @ SessionMessage::Exported { .. } => {
            writeln!(out, "{}", message)?;
            Ok(())
        }
        SessionMessage::Failed { action, error } => Err(anyhow::Error::new(error).context(format!("Error {}", action))),
        SessionMessage::Cancelled => bail!("Export cancelled"),
        message => bail!("{}", message),
    }
}

pub fn config(settings: &Settings, write: bool, out: &mut dyn Write) -> CliResult<()> {
    write!(out, "{}", toml::to_string_pretty(settings)?)?;
    if write {
        let file = settings.store()?;
        writeln!(out, "Settings stored in {}", file.display())?;
    } else if let Some(file) = crate::settings::settings_file() {
        writeln!(out, "# {}", file.display())?;
    }
    Ok(())
}
