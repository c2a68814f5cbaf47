use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use datuk_sql::config;
use datuk_sql::convert::{self, ConvertOptions};
use datuk_sql::escape::Dialect;
use datuk_sql::relations::RelationPolicy;
use std::process::ExitCode;
use std::time::Instant;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(name = "datuk-sql")]
#[command(about = "Convert a parsed dictionary corpus into batched SQL inserts")]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a JSON Lines corpus into an SQL script
    Convert(ConvertArgs),
    /// Print the table definitions written at the top of every script
    Schema,
}

#[derive(Args)]
struct ConvertArgs {
    /// Path to the corpus (.jsonl, or .jsonl.bz2)
    #[arg(short, long)]
    input: String,

    /// Path of the SQL file to write
    #[arg(short, long)]
    output: String,

    /// Rows per INSERT statement
    #[arg(long, default_value_t = config::DEFAULT_BATCH_SIZE)]
    batch_size: usize,

    /// Quote escaping style for string literals
    #[arg(long, value_enum, default_value_t = Dialect::Mysql)]
    dialect: Dialect,

    /// Emit repeated word-definition relations instead of dropping them
    #[arg(long)]
    keep_duplicate_relations: bool,

    /// Don't write the DROP/CREATE TABLE preamble
    #[arg(long)]
    no_schema: bool,

    /// Limit number of entries to convert (for testing)
    #[arg(long)]
    limit: Option<usize>,

    /// Dry run - don't write the output file
    #[arg(long)]
    dry_run: bool,

    /// Also write the run statistics as JSON to this path
    #[arg(long)]
    stats_json: Option<String>,
}

fn run_convert(args: ConvertArgs) -> Result<()> {
    let batch_size = config::batch_size(args.batch_size)?;

    let options = ConvertOptions {
        input: args.input,
        output: args.output,
        batch_size,
        dialect: args.dialect,
        relation_policy: if args.keep_duplicate_relations {
            RelationPolicy::Keep
        } else {
            RelationPolicy::Dedup
        },
        write_schema: !args.no_schema,
        limit: args.limit,
        dry_run: args.dry_run,
    };

    let start = Instant::now();
    let stats = convert::run_conversion(&options)?;
    let duration = start.elapsed();
    info!(duration_secs = duration.as_secs_f64(), "Conversion complete");

    if let Some(ref path) = args.stats_json {
        convert::write_stats_json(&stats, path)?;
    }

    println!();
    println!("=== Summary ===");
    println!("Total time:          {:.2}s", duration.as_secs_f64());
    println!();
    println!("Entries read:        {}", stats.entries_read);
    println!(
        "Words:               {} ({} statements)",
        stats.words, stats.word_statements
    );
    println!(
        "Definitions:         {} ({} statements)",
        stats.definitions, stats.definition_statements
    );
    println!(
        "Relations:           {} ({} statements)",
        stats.relations, stats.relation_statements
    );
    println!("Duplicate relations: {}", stats.duplicate_relations);
    if options.dry_run {
        println!("(dry run, nothing written)");
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");

    let result = match cli.command {
        Commands::Convert(args) => run_convert(args),
        Commands::Schema => {
            print!("{}", datuk_sql::schema::SCHEMA);
            Ok(())
        }
    };

    match result {
        Ok(()) => {
            info!("Completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Error: {:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
