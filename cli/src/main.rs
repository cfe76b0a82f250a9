//! docxstrip CLI - raw text extraction from Word documents
//!
//! Reads `word/document.xml` out of a .docx file, strips the markup, and
//! writes the text to `extracted_doc_content.md` in the working directory.

use clap::Parser;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Extract raw text from a .docx document
#[derive(Parser)]
#[command(
    name = "docxstrip",
    version,
    about = "Extract raw text from a .docx document",
    long_about = "docxstrip - raw text extraction from Word documents.\n\n\
                  Strips the XML markup from word/document.xml and writes the \
                  text to extracted_doc_content.md in the current directory."
)]
struct Cli {
    /// Path to the .docx file
    #[arg(value_name = "PATH_TO_DOCX")]
    input: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    let Some(input) = cli.input else {
        println!("Usage: docxstrip <path_to_docx>");
        process::exit(1);
    };

    init_logging(cli.verbose);

    let code = if extract(&input) { 0 } else { 1 };
    process::exit(code);
}

/// Run one extraction and report the outcome on stdout.
fn extract(input: &Path) -> bool {
    let pb = create_spinner("Extracting text...");
    let result = docxstrip::extract_to_file(input);
    pb.finish_and_clear();

    match result {
        Ok(extraction) => {
            println!(
                "{} Text extracted successfully to {}",
                "✓".green().bold(),
                extraction.output.display()
            );
            true
        }
        Err(e) => {
            tracing::debug!(input = %input.display(), error = ?e, "extraction failed");
            println!("{} {}", "Error extracting text:".red().bold(), e);
            false
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.blue} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_input_is_optional() {
        let cli = Cli::try_parse_from(["docxstrip"]).unwrap();
        assert!(cli.input.is_none());

        let cli = Cli::try_parse_from(["docxstrip", "-vv", "report.docx"]).unwrap();
        assert_eq!(cli.input, Some(PathBuf::from("report.docx")));
        assert_eq!(cli.verbose, 2);
    }
}
