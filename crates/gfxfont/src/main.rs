#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc, clippy::cast_lossless)]

mod commands;
mod settings;

pub use settings::Settings;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming};
use gfxfont_engine::KDialogPrompt;
use semver::Version;

use commands::{ArgumentPrompt, LayoutArgs};

lazy_static::lazy_static! {
    pub static ref VERSION: Version = Version::parse(env!("CARGO_PKG_VERSION")).unwrap();
}

pub type CliResult<T> = anyhow::Result<T>;

#[derive(Parser, Debug)]
#[command(version, about = "Bitmap font editor for Adafruit GFX fonts", long_about = None)]
pub struct Args {
    /// Log debug output
    #[arg(long, short, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a blank font file
    New {
        file: PathBuf,
        #[command(flatten)]
        layout: LayoutArgs,
        /// Overwrite an existing file
        #[arg(long, default_value_t = false)]
        force: bool,
    },
    /// Print size, code range and pixel count of a font
    Info { file: PathBuf },
    /// Print one glyph or all glyphs
    Show {
        file: PathBuf,
        #[arg(long = "char", value_name = "CHAR")]
        ch: Option<char>,
    },
    /// Toggle one pixel of a glyph, x is the column and y the row
    Toggle {
        file: PathBuf,
        #[arg(value_name = "CHAR")]
        ch: char,
        x: i32,
        y: i32,
    },
    /// Replace a glyph with pattern rows, e.g. `.##.` (`#` set, `.` clear)
    Draw {
        file: PathBuf,
        #[arg(value_name = "CHAR")]
        ch: char,
        #[arg(value_name = "ROW", required = true)]
        rows: Vec<String>,
    },
    /// Change size or code range, this clears all glyphs
    Configure {
        file: PathBuf,
        #[command(flatten)]
        layout: LayoutArgs,
    },
    /// Write the Adafruit GFX header, missing values are asked with kdialog
    Export {
        file: PathBuf,
        #[arg(long, short)]
        output: Option<PathBuf>,
        #[arg(long, short)]
        name: Option<String>,
    },
    /// Print the settings
    Config {
        /// Store the settings file
        #[arg(long, default_value_t = false)]
        write: bool,
    },
}

fn start_logger(verbose: bool) -> Option<LoggerHandle> {
    let spec = if verbose { "debug" } else { "info" };
    let logger = match Logger::try_with_env_or_str(spec) {
        Ok(logger) => logger,
        Err(err) => {
            eprintln!("Failed to set up logging: {}", err);
            return None;
        }
    };

    let logger = if let Some(log_dir) = settings::config_dir() {
        logger
            .log_to_file(FileSpec::default().directory(&log_dir).basename("gfxfont").suffix("log").suppress_timestamp())
            .rotate(Criterion::Size(64 * 1024), Naming::Numbers, Cleanup::KeepLogFiles(3))
            .duplicate_to_stderr(flexi_logger::Duplicate::Warn)
    } else {
        eprintln!("Failed to create log file");
        logger.log_to_stderr()
    };

    match logger.start() {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("Failed to start logger: {}", err);
            None
        }
    }
}

fn run(command: Command) -> CliResult<()> {
    let settings = Settings::load_or_default();
    let mut out = std::io::stdout().lock();

    match command {
        Command::New { file, layout, force } => commands::new_font(&file, &layout, &settings, force, &mut out),
        Command::Info { file } => commands::info(&file, &mut out),
        Command::Show { file, ch } => commands::show(&file, ch, &mut out),
        Command::Toggle { file, ch, x, y } => commands::toggle(&file, ch, x, y, &mut out),
        Command::Draw { file, ch, rows } => commands::draw(&file, ch, &rows, &mut out),
        Command::Configure { file, layout } => commands::configure(&file, &layout, &mut out),
        Command::Export { file, output, name } => {
            let mut prompts = ArgumentPrompt::new(output, name, settings.default_font_name.clone(), KDialogPrompt::new());
            commands::export_font(&file, &mut prompts, &mut out)
        }
        Command::Config { write } => commands::config(&settings, write, &mut out),
    }
}

fn main() {
    let args = Args::parse();
    let logger = start_logger(args.verbose);

    log::debug!("Starting gfxfont {}", *VERSION);

    let result = run(args.command);
    drop(logger);
    if let Err(err) = result {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_toggle() {
        let args = Args::try_parse_from(["gfxfont", "toggle", "font.gfx", "A", "2", "3", "--verbose"]).unwrap();
        assert!(args.verbose);
        assert!(matches!(args.command, Command::Toggle { ch: 'A', x: 2, y: 3, .. }));
    }

    #[test]
    fn test_parse_draw_needs_rows() {
        assert!(Args::try_parse_from(["gfxfont", "draw", "font.gfx", "A"]).is_err());

        let args = Args::try_parse_from(["gfxfont", "draw", "font.gfx", "A", "#.#", ".#."]).unwrap();
        let Command::Draw { rows, .. } = args.command else {
            panic!("expected draw");
        };
        assert_eq!(rows, vec!["#.#", ".#."]);
    }

    #[test]
    fn test_parse_layout_options() {
        let args = Args::try_parse_from(["gfxfont", "configure", "font.gfx", "--width", "8", "--end", "90"]).unwrap();
        let Command::Configure { layout, .. } = args.command else {
            panic!("expected configure");
        };
        assert_eq!(layout.width, Some(8));
        assert_eq!(layout.height, None);
        assert_eq!(layout.end, Some(90));
    }
}
