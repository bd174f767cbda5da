use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::commands::{display_command, search_command};

const SEPARATOR: &str = "---------------------------------------";

/// Interactive loop: `1` displays a file, `2` searches the data directory, and
/// anything else (including end of input) exits.
pub fn run_menu<R: BufRead, W: Write>(mut input: R, out: &mut W, data_dir: &Path) -> Result<()> {
    writeln!(out, "Record Explorer!").context("Failed to write menu")?;

    loop {
        print_menu(out).context("Failed to write menu")?;

        let Some(choice) = read_line(&mut input)? else {
            return Ok(());
        };

        match choice.as_str() {
            "1" => {
                writeln!(out, "Enter the name of the file to display its content:")?;
                out.flush()?;
                let file_name = read_line(&mut input)?.unwrap_or_default();
                display_command(Path::new(&file_name), out)?;
            }
            "2" => {
                writeln!(out, "Enter the key to search.")?;
                out.flush()?;
                let key = read_line(&mut input)?.unwrap_or_default();
                search_command(data_dir, &key, out)?;
            }
            _ => return Ok(()),
        }
    }
}

fn print_menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\n{}\n", SEPARATOR)?;
    writeln!(out, "Choose an option from the following list:")?;
    writeln!(out, "\t1 - Display")?;
    writeln!(out, "\t2 - Search")?;
    writeln!(out, "\t3 - Exit")?;
    out.flush()
}

/// Next line without its line ending, or `None` at end of input
fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read from stdin")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
