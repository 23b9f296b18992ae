// src/main.rs
use chrono::Utc;
use clap::Parser;
use resume_parser::extractors::FieldExtractor;
use resume_parser::pdf::{extract_resume_text, resolve_input_path};
use resume_parser::report::{render_record, OutputRow, SpreadsheetWriter, DEFAULT_OUTPUT_FILE};
use resume_parser::utils::{self, AppError};
use resume_parser::ExtractionConfig;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

const PROMPT: &str = "Enter the exact path of your resume: ";

/// Extracts contact details and sections from a PDF resume into a spreadsheet
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the resume PDF (asked for interactively when omitted)
    resume: Option<String>,

    /// Spreadsheet the extracted row is appended to
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Extraction config file (section headers, vocabularies, phone patterns)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the extracted record as JSON instead of the text report
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::debug!("Starting with args: {:?}", args);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), AppError> {
    // 3. Load extraction config and compile the recognizers
    let config = ExtractionConfig::load(args.config.as_deref())?;
    let extractor = FieldExtractor::new(&config)?;

    // 4. Get the resume path
    let input = match &args.resume {
        Some(path) => path.clone(),
        None => prompt_for_path()?,
    };
    let resume_path = resolve_input_path(&input);

    // 5. Extract text (fails before the spreadsheet is touched)
    let text = extract_resume_text(&resume_path)?;

    // 6. Recognize fields
    let record = extractor.extract(&text);

    // 7. Show the result
    if args.json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        print!("{}", render_record(&record));
    }

    // 8. Append the row to the spreadsheet
    let source = resume_path.canonicalize().unwrap_or_else(|_| resume_path.clone());
    let row = OutputRow::from_record(&record, &source, Utc::now());
    let writer = SpreadsheetWriter::new(&args.output);
    let saved = writer.append(&row)?;

    tracing::info!("Resume data written to {}", saved.display());
    Ok(())
}

fn prompt_for_path() -> Result<String, AppError> {
    print!("{}", PROMPT);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}
