use std::path::PathBuf;

use clap::{Parser, Subcommand};
use lead_consolidator::alias::AliasTable;
use lead_consolidator::export::{self, DEFAULT_BASE_NAME};
use lead_consolidator::{LeadError, Result, extract, logging};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli).await {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    logging::init_logging(cli.verbose)?;
    match cli.command {
        Command::Merge(args) => execute_merge(args).await,
    }
}

async fn execute_merge(args: MergeArgs) -> Result<()> {
    if args.input.is_empty() {
        return Err(LeadError::NoFilesSelected);
    }
    if let Some(missing) = args.input.iter().find(|path| !path.exists()) {
        return Err(LeadError::MissingInput(missing.clone()));
    }

    let aliases = match &args.aliases {
        Some(path) => AliasTable::load(path)?,
        None => AliasTable::default(),
    };

    let leads = extract::extract_leads(&args.input, &aliases).await?;
    if leads.is_empty() {
        return Err(LeadError::NoLeadsFound);
    }
    println!("found {} leads", leads.len());

    let path = export::export_leads(&leads, &args.output_dir, &args.name)?;
    println!("wrote {}", path.display());
    Ok(())
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Merge lead-form spreadsheet exports into one workbook."
)]
struct Cli {
    /// Log at debug level unless RUST_LOG is set.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Consolidate the leads of one or more spreadsheets.
    Merge(MergeArgs),
}

#[derive(clap::Args)]
struct MergeArgs {
    /// Spreadsheet to read (.xlsx, .xls). Repeat for several files.
    #[arg(long, required = true, num_args = 1..)]
    input: Vec<PathBuf>,

    /// Directory the consolidated workbook is written to.
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Base name of the output file, without extension.
    #[arg(long, default_value = DEFAULT_BASE_NAME)]
    name: String,

    /// JSON file overriding the column aliases.
    #[arg(long)]
    aliases: Option<PathBuf>,
}
