//! Simple CLI that reads a Wiktionary page from stdin (or a file) and prints
//! the extracted word as JSON.
//!
//! Usage: `extract_stdin [--language NAME] [FILE]`

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use mot_du_jour::{extract_bytes_with_options, Options};

#[derive(Parser)]
#[command(name = "extract_stdin", about = "Extract a word from a saved Wiktionary page")]
struct Cli {
    /// HTML file to read instead of stdin
    file: Option<PathBuf>,

    /// Language section to extract
    #[arg(long, default_value = "French")]
    language: String,
}

fn read_input(file: Option<&PathBuf>) -> io::Result<Vec<u8>> {
    match file {
        Some(path) => fs::read(path),
        None => {
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let html = match read_input(cli.file.as_ref()) {
        Ok(html) => html,
        Err(err) => {
            eprintln!("Failed to read input: {err}");
            return ExitCode::FAILURE;
        }
    };

    let options = Options {
        language: cli.language,
        ..Options::default()
    };

    match extract_bytes_with_options(&html, &options) {
        Ok(word) => match serde_json::to_string_pretty(&word) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("Failed to serialize word: {err}");
                ExitCode::FAILURE
            }
        },
        Err(err) => {
            eprintln!("Extraction failed: {err}");
            ExitCode::FAILURE
        }
    }
}
