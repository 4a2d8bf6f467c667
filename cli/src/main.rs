//! litlist CLI - literate source listings
//!
//! Converts commented source files to Markdown, TeX, HTML or PDF listings.

use clap::{ArgAction, CommandFactory, Parser};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use litlist::{
    CommentMarker, Delivery, Error, Language, ListingOptions, OutputFormat, OutputOptions,
    DEFAULT_DATE_FORMAT, DEFAULT_MARKER,
};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Literate listings from commented source files
#[derive(Parser, Debug)]
#[command(
    name = "litlist",
    version,
    about = "Produce readable listings from commented source files",
    long_about = "litlist - literate source listings.\n\n\
                  Lines starting with the comment marker become prose; all other\n\
                  lines become code blocks.\n\n\
                  Usage:\n  \
                  litlist main.go                 Print a Markdown listing\n  \
                  litlist -o pdf -d out *.go      Render PDF listings into out/\n  \
                  litlist -l python -o tex a.py   Use Python comments, write TeX"
)]
struct Cli {
    /// Pattern that starts a documentation line
    #[arg(short = 'c', long = "comment", default_value = DEFAULT_MARKER)]
    comment: String,

    /// Take the comment marker from a language ("help" lists them)
    #[arg(short = 'l', long = "lang")]
    lang: Option<String>,

    /// strftime format for the listing date
    #[arg(short = 't', long = "time-format", default_value = DEFAULT_DATE_FORMAT)]
    time_format: String,

    /// Leave the date out of the listing header
    #[arg(long)]
    no_date: bool,

    /// Output format (see --list-formats)
    #[arg(short = 'o', long = "output", default_value = "-")]
    output: String,

    /// Directory listings are saved in
    #[arg(short = 'd', long = "dir", default_value = ".")]
    dir: PathBuf,

    /// Convert files one at a time
    #[arg(long)]
    sequential: bool,

    /// List supported output formats
    #[arg(long)]
    list_formats: bool,

    /// More log output (-v info, -vv debug); RUST_LOG overrides
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,

    /// Source files to convert
    files: Vec<PathBuf>,
}

/// What a batch run did.
#[derive(Debug, Default, PartialEq, Eq)]
struct Summary {
    converted: usize,
    failed: usize,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(summary) => {
            tracing::info!(converted = summary.converted, failed = summary.failed, "done");
        }
        Err(e) => {
            eprintln!("{} {}", "[!]".red().bold(), e);
            print_alternatives(&e);
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Builds the run configuration and converts every file.
///
/// Only setup problems are returned as errors; failures on individual
/// files are reported and counted.
fn run(cli: Cli) -> Result<Summary, Error> {
    if cli.lang.as_deref().is_some_and(|lang| lang.eq_ignore_ascii_case("help")) {
        print_languages(&mut io::stdout().lock());
        return Ok(Summary::default());
    }
    if cli.list_formats {
        print_formats(&mut io::stdout().lock());
        return Ok(Summary::default());
    }

    let marker = match cli.lang {
        Some(ref name) => CommentMarker::for_language(name.parse::<Language>()?)?,
        None => CommentMarker::new(cli.comment.as_str())?,
    };
    let format: OutputFormat = cli.output.parse()?;

    let mut options = ListingOptions::default().with_marker(marker);
    options = if cli.no_date {
        options.without_date()
    } else {
        options.with_date_format(cli.time_format.as_str())?
    };
    if cli.sequential {
        options = options.sequential();
    }

    if cli.files.is_empty() {
        // Help output failing is not worth reporting.
        let _ = Cli::command().print_help();
        return Ok(Summary::default());
    }

    let delivery = Delivery::new(
        OutputOptions::new()
            .with_output_dir(&cli.dir)
            .with_format(format),
    );
    tracing::debug!(marker = options.marker.marker(), %format, files = cli.files.len(), "starting");

    Ok(convert_all(&cli.files, &options, &delivery))
}

fn convert_all(files: &[PathBuf], options: &ListingOptions, delivery: &Delivery) -> Summary {
    let pb = create_progress(files.len() as u64, delivery.format());
    pb.set_message("Converting...");

    // Every listing is built before the first one is delivered, so stdout
    // keeps input order; the bar counts deliveries.
    let listings = litlist::transform_files(files, delivery.format().dialect(), options);
    pb.set_message("Writing...");

    let mut summary = Summary::default();
    for converted in listings {
        let outcome = converted
            .result
            .and_then(|listing| pb.suspend(|| delivery.deliver(&listing, &converted.path)));

        match outcome {
            Ok(Some(path)) => {
                summary.converted += 1;
                pb.println(format!("{} {}", "✓".green().bold(), path.display()));
            }
            Ok(None) => summary.converted += 1,
            Err(e) => {
                summary.failed += 1;
                pb.suspend(|| {
                    eprintln!(
                        "{} couldn't convert {} to listing: {}",
                        "[!]".red().bold(),
                        converted.path.display(),
                        e
                    )
                });
            }
        }
        pb.inc(1);
    }

    pb.finish_and_clear();
    summary
}

fn create_progress(len: u64, format: OutputFormat) -> ProgressBar {
    // Listings on stdout must not be interleaved with a progress bar.
    if format == OutputFormat::Stdout {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len);
    if let Ok(style) = ProgressStyle::default_bar().template("{spinner:.blue} {msg} [{bar:30.cyan/blue}] {pos}/{len}") {
        pb.set_style(style.progress_chars("=> "));
    }
    // Keeps the spinner moving while the batch is converted.
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}

fn print_alternatives(error: &Error) {
    let mut stderr = io::stderr().lock();
    match error {
        Error::UnknownFormat(_) => print_formats(&mut stderr),
        Error::UnknownLanguage(_) => print_languages(&mut stderr),
        _ => {}
    }
}

fn print_formats(out: &mut impl Write) {
    let _ = writeln!(out, "Supported formats:");
    for format in OutputFormat::all() {
        let _ = writeln!(out, "\t{:<8} {}", format.keyword(), format.description());
    }
}

fn print_languages(out: &mut impl Write) {
    let _ = writeln!(out, "Currently supported languages:");
    for lang in Language::all() {
        let _ = writeln!(out, "\t{:<11} {}", lang.name(), lang.line_comment());
    }
}
