//! Entropass CLI
//!
//! Command-line interface for generating strengthened passwords and
//! inspecting the entropy model.

use clap::{Args, Parser, Subcommand};
use entropass::{
    analysis::{char_stats, entropy_bits, max_entropy, search_space, StrengthRating},
    charset::{CharClass, ClassPools},
    generation::{ConfigError, FileConfig, GenerateError, PasswordGenerator},
    metrics::{MetricsError, MetricsRegistry, MetricsSnapshot},
    rng::PasswordRng,
    strengthening::{has_adjacent_duplicates, remove_adjacent_duplicates, DuplicateError},
    ClassifyError,
};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "entropass")]
#[command(
    author,
    version,
    about = "Generate passwords strengthened to full character-class entropy"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate strengthened passwords
    Generate(GenerateArgs),
    /// Show the entropy estimate of a password
    Entropy {
        /// Password to score
        password: String,
    },
    /// Count the character classes in a password
    Stats {
        /// Password to inspect
        password: String,
    },
    /// Break up adjacent repeated characters
    Dedupe {
        /// Password to repair
        password: String,

        /// Random seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Check how often generated passwords reach maximum entropy
    Bench(BenchArgs),
}

#[derive(Args)]
struct GenerateArgs {
    /// Password length
    #[arg(short, long)]
    length: Option<usize>,

    /// Number of passwords
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Random seed for reproducible output
    #[arg(short, long)]
    seed: Option<u64>,

    /// Avoid equal neighbouring characters
    #[arg(long)]
    no_repeats: bool,

    /// Print passwords only, without entropy
    #[arg(short, long)]
    quiet: bool,

    /// TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[derive(Args)]
struct BenchArgs {
    /// Password length
    #[arg(short, long, default_value_t = 18)]
    length: usize,

    /// Number of passwords to generate
    #[arg(short = 'n', long, default_value_t = 1000)]
    count: usize,

    /// Random seed for reproducible output
    #[arg(short, long)]
    seed: Option<u64>,

    /// Avoid equal neighbouring characters
    #[arg(long)]
    no_repeats: bool,

    /// Print Prometheus metrics after the run
    #[arg(long)]
    metrics: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Generate(#[from] GenerateError),
    #[error(transparent)]
    Classify(#[from] ClassifyError),
    #[error(transparent)]
    Duplicate(#[from] DuplicateError),
    #[error(transparent)]
    Metrics(#[from] MetricsError),
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Generate(args) => run_generate(args),
        Command::Entropy { password } => run_entropy(&password),
        Command::Stats { password } => run_stats(&password),
        Command::Dedupe { password, seed } => run_dedupe(password, seed),
        Command::Bench(args) => run_bench(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn make_rng(seed: Option<u64>) -> PasswordRng {
    match seed {
        Some(seed) => PasswordRng::from_seed(seed),
        None => PasswordRng::from_os_entropy(),
    }
}

fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let mut config = match &args.config {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };

    // Flags override the file
    if let Some(length) = args.length {
        config.generator.length = length;
    }
    if let Some(count) = args.count {
        config.generator.count = count;
    }
    if args.seed.is_some() {
        config.generator.seed = args.seed;
    }
    if args.no_repeats {
        config.output.remove_duplicates = true;
    }
    if args.quiet {
        config.output.show_entropy = false;
    }
    config.generator.validate()?;

    let length = config.generator.length;
    let mut generator = PasswordGenerator::new(make_rng(config.generator.seed));

    if length < CharClass::COUNT {
        warn!(
            length,
            "Length is below {} characters; not every class can be included",
            CharClass::COUNT
        );
    }

    for _ in 0..config.generator.count {
        let password = if config.output.remove_duplicates {
            generator.generate_without_repeats(length)?.0
        } else {
            generator.generate(length)?
        };

        if config.output.show_entropy {
            let bits = entropy_bits(&password)?;
            println!(
                "{}  {:.2} bits ({})",
                password,
                bits,
                StrengthRating::from_bits(bits)
            );
        } else {
            println!("{}", password);
        }
    }

    info!(count = generator.generated(), length, "Generation complete");
    Ok(())
}

fn run_entropy(password: &str) -> Result<(), CliError> {
    let bits = entropy_bits(password)?;
    let length = password.chars().count();
    let max = max_entropy(length);

    println!("Entropy bits: {:.2}", bits);
    println!("Maximum for {} characters: {:.2}", length, max);
    println!("Rating: {}", StrengthRating::from_bits(bits));
    println!("Tries required to brute force: {:e}", search_space(bits));
    Ok(())
}

fn run_stats(password: &str) -> Result<(), CliError> {
    let stats = char_stats(password)?;

    for class in CharClass::ALL {
        println!("{:<10} {}", class.to_string(), stats[class]);
    }
    Ok(())
}

fn run_dedupe(password: String, seed: Option<u64>) -> Result<(), CliError> {
    let pools = ClassPools::new();
    let mut rng = make_rng(seed);
    let mut repaired = password.clone();

    println!("Before: {}", password);
    println!("Any duplicates? {}", has_adjacent_duplicates(&password));

    let report = remove_adjacent_duplicates(&mut repaired, pools.full(), &mut rng)?;

    println!("After:  {}", repaired);
    println!("Any duplicates? {}", has_adjacent_duplicates(&repaired));
    info!(resamples = report.resamples, "Duplicate removal complete");
    Ok(())
}

fn run_bench(args: BenchArgs) -> Result<(), CliError> {
    let mut generator = PasswordGenerator::new(make_rng(args.seed));
    let mut snapshot = MetricsSnapshot::default();
    let max = max_entropy(args.length);
    let mut at_max = 0usize;

    info!(
        length = args.length,
        count = args.count,
        no_repeats = args.no_repeats,
        "Benchmark starting"
    );

    for _ in 0..args.count {
        let (password, report) = if args.no_repeats {
            let (password, report, dedup) = generator.generate_without_repeats(args.length)?;
            snapshot.record_dedup(&dedup);
            (password, report)
        } else {
            generator.generate_with_report(args.length)?
        };
        let bits = entropy_bits(&password)?;
        if bits == max {
            at_max += 1;
        }
        snapshot.record_generation(&report, bits);
    }
    snapshot.rng_draws = generator.rng().draws();
    if args.no_repeats {
        info!(
            resamples = snapshot.duplicate_resamples,
            "Duplicate removal resamples"
        );
    }

    println!(
        "{} of {} passwords reached maximum entropy ({:.2} bits)",
        at_max, args.count, max
    );
    if at_max < args.count {
        warn!(
            failures = args.count - at_max,
            "Some passwords fell short of maximum entropy"
        );
    }

    if args.metrics {
        let registry = MetricsRegistry::new()?;
        registry.update(&snapshot);
        print!("{}", registry.encode()?);
    }
    Ok(())
}
