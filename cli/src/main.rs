//! docverify CLI - DOCX formatting and spelling validation tool

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use docverify::{
    load_file_with_options, BreakSource, CommandPagination, Docverify, FixedPage, JsonFormat,
    LoadOptions, NoPagination, PaginationOracle, RenderedBreaks, ReportFormat, SpellingScope,
    ValidationResult, WordListDictionary,
};

#[derive(Parser)]
#[command(name = "docverify")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Validate DOCX heading formatting and spelling", long_about = None)]
struct Cli {
    /// Input DOCX file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Report file (CSV unless the extension is .json)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a document and write the report
    Check(CheckArgs),

    /// Show document information
    Info {
        /// Input DOCX file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

#[derive(Args)]
struct CheckArgs {
    /// Input DOCX file
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Report file (listing on stdout if not specified)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Report format (default: from the output extension)
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// Output compact JSON
    #[arg(long)]
    compact: bool,

    /// Word list for the spelling check (`word` or `word count` per line)
    #[arg(long, value_name = "PATH", env = "DOCVERIFY_DICTIONARY")]
    dictionary: Option<PathBuf>,

    /// Paragraphs covered by the spelling check
    #[arg(long, value_enum, default_value = "all")]
    spelling: SpellingArg,

    /// Strip punctuation around words before the spelling check
    #[arg(long)]
    strip_punctuation: bool,

    /// How paragraph page numbers are determined
    #[arg(long, value_enum, default_value = "rendered")]
    pagination: PaginationArg,

    /// Page number for `--pagination fixed`
    #[arg(long, default_value = "1")]
    page: u32,

    /// Program for `--pagination command`; receives the document path
    #[arg(long, value_name = "CMD")]
    paginator: Option<String>,

    /// Extra argument passed to the paginator before the document path
    #[arg(long = "paginator-arg", value_name = "ARG", allow_hyphen_values = true)]
    paginator_args: Vec<String>,

    /// Paginator timeout in seconds
    #[arg(long, default_value = "30")]
    timeout_secs: u64,

    /// Tolerate malformed styles and metadata
    #[arg(long)]
    lenient: bool,

    /// Only list failing checks on stdout
    #[arg(long)]
    failures_only: bool,

    /// Exit with status 2 when any check fails
    #[arg(long)]
    deny_failures: bool,
}

impl CheckArgs {
    fn defaults(input: PathBuf, output: Option<PathBuf>) -> Self {
        Self {
            input,
            output,
            format: None,
            compact: false,
            dictionary: None,
            spelling: SpellingArg::All,
            strip_punctuation: false,
            pagination: PaginationArg::Rendered,
            page: 1,
            paginator: None,
            paginator_args: Vec::new(),
            timeout_secs: 30,
            lenient: false,
            failures_only: false,
            deny_failures: false,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    /// One CSV row per check
    Csv,
    /// JSON summary plus records
    Json,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum SpellingArg {
    /// Every paragraph
    All,
    /// Non-heading paragraphs only
    Body,
    /// No spelling check
    Off,
}

impl From<SpellingArg> for SpellingScope {
    fn from(arg: SpellingArg) -> Self {
        match arg {
            SpellingArg::All => SpellingScope::AllParagraphs,
            SpellingArg::Body => SpellingScope::BodyOnly,
            SpellingArg::Off => SpellingScope::Disabled,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum PaginationArg {
    /// Page breaks saved by the last application that laid the file out
    Rendered,
    /// Only page breaks inserted by the author
    Explicit,
    /// Every paragraph on the same page (`--page`)
    Fixed,
    /// No page numbers
    None,
    /// External program (`--paginator`)
    Command,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Check(args)) => cmd_check(args),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: check if input is provided
            if let Some(input) = cli.input {
                cmd_check(CheckArgs::defaults(input, cli.output))
            } else {
                println!("{}", "Usage: docverify <FILE> [OUTPUT]".yellow());
                println!("       docverify --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn pagination_oracle(
    args: &CheckArgs,
) -> Result<Box<dyn PaginationOracle>, Box<dyn std::error::Error>> {
    let oracle: Box<dyn PaginationOracle> = match args.pagination {
        PaginationArg::Rendered => Box::new(RenderedBreaks::new()),
        PaginationArg::Explicit => {
            Box::new(RenderedBreaks::new().with_source(BreakSource::Explicit))
        }
        PaginationArg::Fixed => Box::new(FixedPage(args.page)),
        PaginationArg::None => Box::new(NoPagination),
        PaginationArg::Command => {
            let program = args
                .paginator
                .as_deref()
                .ok_or("--pagination command requires --paginator")?;
            Box::new(
                CommandPagination::new(program)
                    .args(&args.paginator_args)
                    .with_timeout(Duration::from_secs(args.timeout_secs)),
            )
        }
    };
    Ok(oracle)
}

fn report_format(args: &CheckArgs, output: Option<&Path>) -> ReportFormat {
    let json = if args.compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    match (args.format, output) {
        (Some(FormatArg::Csv), _) => ReportFormat::Csv,
        (Some(FormatArg::Json), _) => ReportFormat::Json(json),
        (None, Some(path)) => match ReportFormat::from_path(path) {
            ReportFormat::Json(_) => ReportFormat::Json(json),
            csv => csv,
        },
        (None, None) => ReportFormat::Csv,
    }
}

fn cmd_check(args: CheckArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut builder = Docverify::new()
        .with_spelling(args.spelling.into())
        .with_pagination(pagination_oracle(&args)?);
    if args.lenient {
        builder = builder.lenient();
    }
    if args.strip_punctuation {
        builder = builder.strip_punctuation();
    }
    match &args.dictionary {
        Some(path) => builder = builder.with_dictionary(WordListDictionary::from_path(path)?),
        None if args.spelling != SpellingArg::Off => {
            log::warn!("No dictionary given; spelling check skipped");
        }
        None => {}
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(format!("Validating {}...", args.input.display()));

    let result = builder.check(&args.input);
    pb.finish_and_clear();
    let result = result?;

    match args.output.as_deref() {
        Some(path) => {
            let format = report_format(&args, Some(path));
            result.write(path, format)?;
            print_summary(&result);
            println!("{} {}", "Saved to".green(), path.display());
        }
        None => match args.format {
            Some(_) => {
                let format = report_format(&args, None);
                println!("{}", docverify::render::render(&result.report, format)?);
            }
            None => print_listing(&result, args.failures_only),
        },
    }

    if args.deny_failures && !result.all_passed() {
        std::process::exit(2);
    }
    Ok(())
}

fn print_summary(result: &ValidationResult) {
    let summary = result.summary();
    let failed = if summary.failed > 0 {
        summary.failed.to_string().red().bold()
    } else {
        summary.failed.to_string().green()
    };
    println!(
        "{} checks: {} passed, {} failed",
        summary.total.to_string().bold(),
        summary.passed.to_string().green(),
        failed
    );
}

fn print_listing(result: &ValidationResult, failures_only: bool) {
    print_summary(result);
    println!("{}", "─".repeat(40).dimmed());

    for record in result.report.records() {
        if failures_only && record.passed() {
            continue;
        }
        let status = if record.passed() {
            record.status.to_string().green()
        } else {
            record.status.to_string().red().bold()
        };
        println!(
            "{} {} {} {}: expected {}, got {}",
            status,
            format!("p.{}", record.page).dimmed(),
            record.category.cyan(),
            record.property,
            record.expected_str().bold(),
            record.actual.bold()
        );
        if !record.text.is_empty() {
            println!("     {}", record.text.dimmed());
        }
    }
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    // Lenient so that metadata shows even when styles are damaged
    let doc = load_file_with_options(input, LoadOptions::new().lenient())?;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    if let Some(ref title) = doc.metadata.title {
        println!("{}: {}", "Title".bold(), title);
    }
    if let Some(ref author) = doc.metadata.author {
        println!("{}: {}", "Author".bold(), author);
    }
    if let Some(ref subject) = doc.metadata.subject {
        println!("{}: {}", "Subject".bold(), subject);
    }
    if let Some(ref editor) = doc.metadata.last_modified_by {
        println!("{}: {}", "Last modified by".bold(), editor);
    }
    if let Some(ref created) = doc.metadata.created {
        println!("{}: {}", "Created".bold(), created);
    }
    if let Some(ref modified) = doc.metadata.modified {
        println!("{}: {}", "Modified".bold(), modified);
    }

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let pages = RenderedBreaks::new().resolve(&doc)?;
    let words: usize = doc.plain_text().split_whitespace().count();

    println!("{}: {}", "Paragraphs".bold(), doc.paragraph_count());
    println!("{}: {}", "Words".bold(), words);
    println!("{}: {}", "Styles".bold(), doc.styles.len());
    println!("{}: {}", "Pages".bold(), pages.page_count().unwrap_or(0));

    let mut levels: BTreeMap<Option<u32>, usize> = BTreeMap::new();
    for heading in doc.headings() {
        *levels.entry(heading.heading_level()).or_insert(0) += 1;
    }
    println!("{}: {}", "Headings".bold(), doc.headings().count());
    for (level, count) in levels {
        let label = match level {
            Some(level) => format!("Level {}", level),
            None => "No level".to_string(),
        };
        println!("  {} {}: {}", "├─".dimmed(), label, count);
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "docverify".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("DOCX formatting and spelling validation tool");
    println!();
    println!("License: MIT");
}
