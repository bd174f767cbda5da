use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::cli::menu::run_menu;
use crate::display::display_file;
use crate::search::search_lines;
use crate::utils::{get_data_dir, sanitize_for_terminal};

pub const FILE_NOT_FOUND_MESSAGE: &str = "File does not exist.";

#[derive(Parser)]
#[command(name = "record-explorer")]
#[command(version = "0.1.0")]
#[command(about = "Display and search key/value records in CSV, JSON and XML files", long_about = None)]
pub struct Cli {
    /// Directory searched by the search command [default: ./data]
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print every record in a data file
    Display {
        /// File to display (.csv, .json or .xml)
        file: PathBuf,
    },
    /// Find records whose key starts with KEY in every file of the data directory
    Search {
        /// Key prefix, matched case-insensitively
        key: String,
    },
}

/// Entry point of the binary. Without a subcommand the interactive menu reads
/// choices from stdin until the user exits.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Some(Commands::Display { file }) => {
            display_command(file, &mut out).context("Failed to write display output")?;
        }
        Some(Commands::Search { key }) => {
            let data_dir = get_data_dir(cli.data_dir.as_deref())?;
            search_command(&data_dir, key, &mut out).context("Failed to write search output")?;
        }
        None => {
            let data_dir = get_data_dir(cli.data_dir.as_deref())?;
            let stdin = io::stdin();
            run_menu(stdin.lock(), &mut out, &data_dir)?;
        }
    }

    out.flush().context("Failed to flush stdout")?;
    Ok(())
}

/// Print the records of one file, or the reason they cannot be shown.
///
/// Failures are reported to the user rather than returned; only write errors
/// propagate.
pub fn display_command(path: &Path, out: &mut impl Write) -> io::Result<()> {
    if !path.is_file() {
        return writeln!(out, "{}", FILE_NOT_FOUND_MESSAGE);
    }

    match display_file(path) {
        Ok(records) => {
            writeln!(out, "Data:")?;
            for record in records {
                writeln!(out, "{}", sanitize_for_terminal(&record.to_string()))?;
            }
        }
        Err(e) if e.is_extension_error() => writeln!(out, "{}", e)?,
        Err(e) => writeln!(out, "An error occurred while reading the file: {}", e)?,
    }

    Ok(())
}

/// Print the search result lines for `key` under `data_dir`
pub fn search_command(data_dir: &Path, key: &str, out: &mut impl Write) -> io::Result<()> {
    for line in search_lines(data_dir, key) {
        writeln!(out, "{}", sanitize_for_terminal(&line))?;
    }
    Ok(())
}
