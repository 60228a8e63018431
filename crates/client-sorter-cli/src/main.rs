mod commands;
mod logging;
mod progress;
mod prompt;

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process;

use anyhow::Result;
use clap::Parser;
use client_sorter_core::models::DocumentKind;
use client_sorter_core::placement::{check_destination, prepare_destination};
use client_sorter_core::scanner::collect_candidate_files;
use client_sorter_core::{AppConfig, DocumentExtractor, Error, PlacementMode, Router};
use colored::*;
use commands::{Cli, Commands};
use dotenv::dotenv;
use progress::CliReporter;
use tracing::{error, info};

fn main() {
    dotenv().ok();

    let _guard = logging::init_logger();

    let args = Cli::parse();

    let config = match client_sorter_core::config::load_configuration() {
        Ok(config) => config,
        Err(err) => {
            error!("Error loading configuration: {}", err);
            process::exit(1);
        }
    };

    match args.command {
        Some(Commands::PrintConfig) => {
            println!("Configuration: {:?}", config);
        }
        None => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut output = io::stdout();
            if let Err(err) = run_sort(&args, &config, &mut input, &mut output) {
                error!("Error: {}", err);
                process::exit(1);
            }
        }
    }
}

/// One sorting run. Every startup check (source, destination, roster) runs
/// before anything is written, so a fatal error leaves the disk untouched.
fn run_sort<R: BufRead, W: Write>(
    args: &Cli,
    config: &AppConfig,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    writeln!(output, "=============================")?;
    writeln!(output, " Client File Sorter")?;
    writeln!(output, "=============================\n")?;
    if args.dry_run {
        writeln!(output, "--- DRY RUN: no files will be moved or copied ---\n")?;
    }

    let source = match &args.source {
        Some(path) => path.clone(),
        None => prompt::prompt_path(input, output, "Enter source folder path: ")?,
    };
    let dest = match &args.dest {
        Some(path) => path.clone(),
        None => prompt::prompt_path(input, output, "Enter destination folder path: ")?,
    };

    if !source.is_dir() {
        return Err(Error::InvalidSource(source).into());
    }
    check_destination(&dest)?;

    let roster = if args.clients.is_empty() {
        prompt::read_roster(input, output)?
    } else {
        prompt::parse_roster_args(&args.clients)
    };
    if roster.is_empty() {
        return Err(Error::EmptyRoster.into());
    }

    if !args.dry_run {
        prepare_destination(&dest)?;
    }

    let mode = PlacementMode::from_move_flag(args.move_files);
    let router = Router::new(roster, &dest, mode).with_dry_run(args.dry_run);
    display_client_mapping(&router, output)?;

    let files = collect_candidate_files(&source, &config.ignore_patterns, Some(dest.as_path()))?;
    if files.is_empty() {
        let extensions: Vec<String> = DocumentKind::SUPPORTED_EXTENSIONS
            .iter()
            .map(|ext| format!(".{}", ext))
            .collect();
        info!(
            "No valid files ({}) found in {}",
            extensions.join(", "),
            source.display()
        );
    }
    writeln!(output, "\nScanning {} files...\n", files.len())?;
    output.flush()?;

    let extractor = DocumentExtractor::from_config(&config.extractor);
    info!("Using '{}' for PDF/DOCX text", config.extractor.program);
    let reporter = CliReporter::new();
    let tally = router.route(&files, &extractor, &reporter);

    writeln!(output)?;
    writeln!(output, "Total files scanned: {}", tally.total)?;
    writeln!(
        output,
        "Matched {} files ({} by filename, {} by content).",
        format!("{}", tally.matched).green(),
        tally.by_filename,
        tally.by_content
    )?;
    writeln!(output, "No match found:      {}", format!("{}", tally.unmatched).yellow())?;
    if tally.failed > 0 {
        writeln!(output, "Errors:              {}", format!("{}", tally.failed).red())?;
        writeln!(output, "Details for failed files are in the log file.")?;
    }
    write_mode_line(&router, &dest, output)?;
    writeln!(output, "Done.")?;

    Ok(())
}

fn display_client_mapping<W: Write>(router: &Router, output: &mut W) -> io::Result<()> {
    writeln!(output, "\nClient -> Folder mapping:")?;
    for (client, folder) in router.mapping() {
        writeln!(output, "  {} -> {}", client.display_name().bold(), folder)?;
    }
    Ok(())
}

fn write_mode_line<W: Write>(router: &Router, dest: &Path, output: &mut W) -> io::Result<()> {
    if router.is_dry_run() {
        writeln!(output, "Dry run: nothing was written to {}.", dest.display())
    } else {
        info!("Destination: {}", dest.display());
        writeln!(output, "Files were {}.", router.mode().past_tense())
    }
}
