//! fontsift CLI - typography usage discovery tool

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use fontsift::render::{describe_font, to_text};
use fontsift::{
    detect_format_from_path, ExtractionOrchestrator, ExtractionResult, FileSource,
    JsonExportSink, JsonFormat, ReportSink, RunConfig, TextOptions,
};

#[derive(Parser)]
#[command(name = "fontsift")]
#[command(version)]
#[command(about = "Discover font usage in structured content exports", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze an export and write the font report as JSON
    Scan {
        /// Document export (JSON array or NDJSON, optionally gzipped)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        #[command(flatten)]
        scan: ScanArgs,
    },

    /// Analyze an export and print a text summary
    Summary {
        /// Document export (JSON array or NDJSON, optionally gzipped)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Show at most this many fonts (0 = all)
        #[arg(long, default_value = "0")]
        top: usize,

        /// List usage locations under each font
        #[arg(long)]
        usage: bool,

        #[command(flatten)]
        scan: ScanArgs,
    },

    /// Show export information
    Info {
        /// Document export
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print document type counts as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

#[derive(Args, Clone)]
struct ScanArgs {
    /// Comma-separated field names to scan (substring match; empty = all)
    #[arg(long, value_name = "NAMES", env = "FONTSIFT_FIELDS", default_value = "")]
    fields: String,

    /// Comma-separated document types to include (empty = all)
    #[arg(long, value_name = "TYPES", value_delimiter = ',')]
    types: Vec<String>,

    /// Maximum number of documents to analyze
    #[arg(long, default_value_t = fontsift::extract::DEFAULT_MAX_DOCUMENTS)]
    max_documents: usize,

    /// Skip inline style attributes
    #[arg(long)]
    no_inline_styles: bool,

    /// Skip CSS class attributes
    #[arg(long)]
    no_classes: bool,

    /// Skip rich text blocks
    #[arg(long)]
    no_rich_text: bool,

    /// Analyze documents in parallel
    #[arg(long)]
    parallel: bool,
}

impl From<ScanArgs> for RunConfig {
    fn from(args: ScanArgs) -> Self {
        RunConfig::new()
            .with_field_list(&args.fields)
            .with_document_types(args.types)
            .with_max_documents(args.max_documents)
            .with_inline_styles(!args.no_inline_styles)
            .with_css_classes(!args.no_classes)
            .with_rich_text(!args.no_rich_text)
            .with_parallel(args.parallel)
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Scan {
            input,
            output,
            compact,
            scan,
        } => cmd_scan(&input, output.as_deref(), compact, scan.into()),
        Commands::Summary {
            input,
            top,
            usage,
            scan,
        } => cmd_summary(&input, top, usage, scan.into()),
        Commands::Info { input, json } => cmd_info(&input, json),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run_with_progress(
    input: &Path,
    config: RunConfig,
) -> Result<ExtractionResult, Box<dyn std::error::Error>> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(format!("Analyzing {}...", input.display()));

    let source = FileSource::new(input);
    log::debug!("Run options: {:?}", config);
    let outcome = ExtractionOrchestrator::new(config).extract(&source);

    match &outcome {
        Ok(result) => pb.finish_with_message(format!(
            "Analyzed {} documents",
            result.total_documents
        )),
        Err(_) => pb.finish_and_clear(),
    }

    Ok(outcome?)
}

fn print_errors(result: &ExtractionResult) {
    if result.errors.is_empty() {
        return;
    }
    eprintln!(
        "{} {} documents could not be analyzed:",
        "Warning:".yellow().bold(),
        result.errors.len()
    );
    for error in &result.errors {
        eprintln!("  {} {}", "-".dimmed(), error);
    }
}

fn cmd_scan(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    config: RunConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = run_with_progress(input, config)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let writer: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    };
    let mut sink = JsonExportSink::new(writer, format);
    sink.report(&result);
    if let Some(e) = sink.take_error() {
        return Err(e.into());
    }

    print_errors(&result);
    if let Some(path) = output {
        eprintln!(
            "{} {} ({} fonts, {} usages)",
            "Saved to".green(),
            path.display(),
            result.summary.unique_fonts,
            result.summary.total_usages
        );
    }

    Ok(())
}

fn cmd_summary(
    input: &Path,
    top: usize,
    usage: bool,
    config: RunConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = run_with_progress(input, config)?;

    println!("{}", "Font Summary".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let options = TextOptions::new().with_max_fonts(top).with_usage(usage);
    print!("{}", to_text(&result, &options));

    if let Some(top_font) = result.most_used() {
        println!();
        println!("{}: {}", "Top entry".bold(), describe_font(top_font));
    }

    Ok(())
}

fn cmd_info(input: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let format = detect_format_from_path(input)?;
    log::debug!("Detected {} for {}", format, input.display());
    let entries = FileSource::new(input).load_all()?;

    let mut types: BTreeMap<String, usize> = BTreeMap::new();
    let mut untyped = 0;
    let mut undecodable = 0;
    for entry in &entries {
        match entry {
            Ok(node) => match node.str_field(fontsift::model::TYPE_FIELD) {
                Some(t) => *types.entry(t.to_string()).or_default() += 1,
                None => untyped += 1,
            },
            Err(_) => undecodable += 1,
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&types)?);
        return Ok(());
    }

    println!("{}", "Export Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Format".bold(), format);
    println!("{}: {}", "Documents".bold(), entries.len());
    if untyped > 0 {
        println!("{}: {}", "Without _type".bold(), untyped);
    }
    if undecodable > 0 {
        println!("{}: {}", "Undecodable".bold(), undecodable);
    }

    println!();
    println!("{}", "Document Types".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    for (name, count) in &types {
        println!("{}: {}", name.bold(), count);
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "fontsift".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Typography usage discovery tool");
    println!();
    println!("License: MIT");
}
