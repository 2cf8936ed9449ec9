use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use combinator::{
    total_count, walk, Combinator, Config, Job, Scheduler, UnimplementedScheduler, WalkOrder,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "combinator", about = "Enumerate fixed-width sequences in odometer order")]
struct Cli {
    /// TOML config file; command-line flags override its values.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every sequence, one per line, digits separated by spaces.
    Enumerate {
        /// Number of positions per sequence.
        #[arg(long, allow_negative_numbers = true)]
        length: Option<i64>,
        /// Largest value a position may hold.
        #[arg(long, allow_negative_numbers = true)]
        max_digit: Option<i64>,
        /// Stop after this many sequences.
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Print how many sequences an enumeration would produce.
    Count {
        /// Number of positions per sequence.
        #[arg(long, allow_negative_numbers = true)]
        length: Option<i64>,
        /// Largest value a position may hold.
        #[arg(long, allow_negative_numbers = true)]
        max_digit: Option<i64>,
    },
    /// List a directory tree in traversal order.
    Walk {
        /// Directory to start from (default: config `root`).
        root: Option<PathBuf>,
        /// Visit level by level instead of depth first.
        #[arg(long)]
        breadth_first: bool,
    },
    /// Submit a job to the scheduler.
    Schedule {
        /// Job name.
        #[arg(default_value = "default")]
        job: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::default(),
    };
    init_tracing(&config)?;

    match cli.command {
        Commands::Enumerate {
            length,
            max_digit,
            limit,
        } => run_enumerate(build_combinator(&config, length, max_digit)?, limit)?,
        Commands::Count { length, max_digit } => {
            let (length, max_digit) = with_overrides(&config, length, max_digit)
                .parameters()
                .context("invalid enumeration parameters")?;
            run_count(length, max_digit)
        }
        Commands::Walk {
            root,
            breadth_first,
        } => run_walk(&config, root, breadth_first)?,
        Commands::Schedule { job } => run_schedule(job)?,
    }

    Ok(())
}

fn init_tracing(config: &Config) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_filter)
            .with_context(|| format!("invalid log filter '{}'", config.log_filter))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

fn with_overrides(config: &Config, length: Option<i64>, max_digit: Option<i64>) -> Config {
    let mut config = config.clone();
    if let Some(length) = length {
        config.length = length.to_string();
    }
    if let Some(max_digit) = max_digit {
        config.max_digit = max_digit.to_string();
    }
    config
}

fn build_combinator(
    config: &Config,
    length: Option<i64>,
    max_digit: Option<i64>,
) -> Result<Combinator> {
    with_overrides(config, length, max_digit)
        .combinator()
        .context("failed to construct combinator")
}

fn run_enumerate(combinator: Combinator, limit: Option<usize>) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    for sequence in combinator.take(limit.unwrap_or(usize::MAX)) {
        let line = sequence
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(out, "{line}")?;
    }

    out.flush()?;
    Ok(())
}

fn run_count(length: usize, max_digit: u32) {
    match total_count(length, max_digit) {
        Some(total) => println!("{total}"),
        None => println!(
            "more than {} sequences ({}^{})",
            u128::MAX,
            u64::from(max_digit) + 1,
            length
        ),
    }
}

fn run_walk(config: &Config, root: Option<PathBuf>, breadth_first: bool) -> Result<()> {
    let order = if breadth_first {
        WalkOrder::BreadthFirst
    } else {
        config.walk_order()?
    };
    let root = root.unwrap_or_else(|| PathBuf::from(&config.root));

    let listing =
        walk(&root, order).with_context(|| format!("failed to walk {}", root.display()))?;
    for path in listing {
        println!("{path}");
    }
    Ok(())
}

fn run_schedule(job: String) -> Result<()> {
    let mut scheduler = UnimplementedScheduler::new();
    scheduler
        .schedule(Job::new(job))
        .context("failed to schedule job")?;
    scheduler.start().context("failed to start scheduler")?;
    Ok(())
}
