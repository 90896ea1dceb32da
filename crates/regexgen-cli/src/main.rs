mod logging;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use regexgen_core::{Error as CoreError, tree_from_json};
use regexgen_generate::{GenerateOptions, GenerationError, Generator, SampleOptions};
use thiserror::Error;

use logging::init_logging;

#[derive(Debug, Error)]
enum CliError {
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("tree error: {0}")]
    Tree(#[from] CoreError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("logging error: {0}")]
    Logging(String),
}

#[derive(Parser, Debug)]
#[command(name = "regexgen", version, about = "Generate strings matching regular expressions")]
struct Cli {
    /// Emit logs as JSON lines.
    #[arg(long, global = true, default_value_t = false)]
    log_json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate strings from a pattern.
    Generate(GenerateArgs),
    /// Generate strings from a JSON operation tree.
    Tree(TreeArgs),
    /// Sample strings from a named alphabet.
    Sample(SampleArgs),
}

#[derive(Args, Debug)]
struct RunArgs {
    /// TOML file with generator options.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
    /// Number of strings to print.
    #[arg(long, default_value_t = 1)]
    count: usize,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Regular expression to satisfy.
    pattern: String,
    /// Check every result against the pattern.
    #[arg(long, default_value_t = false)]
    verify: bool,
    #[command(flatten)]
    run: RunArgs,
}

#[derive(Args, Debug)]
struct TreeArgs {
    /// Path to a JSON array of operations.
    path: PathBuf,
    #[command(flatten)]
    run: RunArgs,
}

#[derive(Args, Debug)]
struct SampleArgs {
    /// Alphabet name, e.g. letters, digits, urlsafe.
    #[arg(long, default_value = "printable")]
    alphabet: String,
    #[arg(long)]
    min_len: Option<usize>,
    #[arg(long)]
    max_len: Option<usize>,
    /// Characters that must appear.
    #[arg(long, default_value = "")]
    include: String,
    /// Characters that must not appear.
    #[arg(long, default_value = "")]
    exclude: String,
    #[command(flatten)]
    run: RunArgs,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_logging(cli.log_json)?;

    match cli.command {
        Command::Generate(args) => run_generate(args),
        Command::Tree(args) => run_tree(args),
        Command::Sample(args) => run_sample(args),
    }
}

fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let mut options = load_options(&args.run)?;
    options.verify |= args.verify;
    let mut generator = Generator::new(options);
    tracing::info!(
        event = "generate_started",
        pattern = %args.pattern,
        count = args.run.count,
        seed = ?generator.options().seed,
        verify = generator.options().verify,
    );
    for _ in 0..args.run.count {
        println!("{}", generator.generate(&args.pattern)?);
    }
    Ok(())
}

fn run_tree(args: TreeArgs) -> Result<(), CliError> {
    let json = std::fs::read_to_string(&args.path)?;
    let ops = tree_from_json(&json)?;
    let mut generator = Generator::new(load_options(&args.run)?);
    tracing::info!(
        event = "tree_loaded",
        path = %args.path.display(),
        nodes = ops.len(),
        seed = ?generator.options().seed,
    );
    for _ in 0..args.run.count {
        println!("{}", generator.generate(&ops)?);
    }
    Ok(())
}

fn run_sample(args: SampleArgs) -> Result<(), CliError> {
    let mut generator = Generator::new(load_options(&args.run)?);
    let options = SampleOptions {
        min_len: args.min_len,
        max_len: args.max_len,
        include: args.include,
        exclude: args.exclude,
    };
    for _ in 0..args.run.count {
        println!("{}", generator.sample(&args.alphabet, &options)?);
    }
    Ok(())
}

fn load_options(run: &RunArgs) -> Result<GenerateOptions, CliError> {
    let mut options = match &run.config {
        Some(path) => read_config(path)?,
        None => GenerateOptions::default(),
    };
    if run.seed.is_some() {
        options.seed = run.seed;
    }
    if options.repeat_ceiling == 0 {
        return Err(CliError::InvalidConfig(
            "repeat_ceiling must be > 0".to_string(),
        ));
    }
    Ok(options)
}

fn read_config(path: &Path) -> Result<GenerateOptions, CliError> {
    let raw = std::fs::read_to_string(path)?;
    toml::from_str(&raw).map_err(|err| {
        CliError::InvalidConfig(format!("{}: {err}", path.display()))
    })
}
