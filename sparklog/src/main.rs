use clap::{Args, Parser, Subcommand};
use sparklog_core::cli::conf::{ConfigCmd, dump};
use sparklog_core::cli::{run_all, run_levels, run_timeline};
use sparklog_core::conf::{AnalyzerConfig, ConfigOverrides, load_config};
use sparklog_core::logging::{LogFormat, default_log_format, init_logging};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "sparklog",
    version,
    about = "sparklog: offline reports over Spark application logs"
)]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the extracted application_* folders
    #[arg(long, global = true)]
    raw_dir: Option<PathBuf>,

    /// Directory the reports are written to
    #[arg(long, global = true)]
    output_dir: Option<PathBuf>,

    /// Diagnostic log format (defaults to pretty on a terminal, JSON otherwise)
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug, Default)]
struct SampleArgs {
    /// Number of log lines kept in the random sample
    #[arg(long)]
    sample_size: Option<usize>,

    /// Seed for the sampling generator
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log level counts, a random sample of lines, and a summary
    Levels {
        #[command(flatten)]
        sample: SampleArgs,
    },

    /// Application timelines and per-cluster usage
    Timeline,

    /// Both reports
    All {
        #[command(flatten)]
        sample: SampleArgs,
    },

    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: ConfigCmd,
    },
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.log_format.unwrap_or_else(default_log_format));

    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let sample = match &cli.command {
        Command::Levels { sample } | Command::All { sample } => Some(sample),
        _ => None,
    };

    let overrides = ConfigOverrides {
        raw_dir: cli.raw_dir.clone(),
        output_dir: cli.output_dir.clone(),
        sample_size: sample.and_then(|s| s.sample_size),
        seed: sample.and_then(|s| s.seed),
    };
    let cfg = load_config(cli.config.as_deref(), overrides)?;

    match cli.command {
        Command::Levels { .. } => report(run_levels(&cfg)?),
        Command::Timeline => report(run_timeline(&cfg)?),
        Command::All { .. } => report(run_all(&cfg)?),
        Command::Config { cmd } => config(cmd, &cfg)?,
    }

    Ok(())
}

fn config(cmd: ConfigCmd, cfg: &AnalyzerConfig) -> anyhow::Result<()> {
    match cmd {
        ConfigCmd::Dump { compact } => dump(cfg, compact),
    }
}

fn report(written: Vec<PathBuf>) {
    println!("Wrote:");
    for path in written {
        println!(" - {}", path.display());
    }
}
