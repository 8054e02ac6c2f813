//! swagger2sdk
//!
//! Generates a typed API client from an OpenAPI document.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use swagger2sdk_define::{AuthStrategy, OpenApiDocument};
use swagger2sdk_gen::config::GeneratorConfig;
use swagger2sdk_gen::emit::TargetLanguage;
use swagger2sdk_gen::errors::GeneratorError;
use swagger2sdk_gen::output::{Progress, generate_and_write};
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// swagger2sdk - turns an OpenAPI document into a typed API client
#[derive(Parser, Debug)]
#[command(name = "swagger2sdk")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// OpenAPI document (JSON or YAML)
    #[arg(short, long)]
    spec: PathBuf,

    /// Client type name, also the output file stem
    #[arg(short = 'n', long)]
    sdk_name: String,

    /// Authentication strategy of the generated client
    #[arg(short, long, default_value_t = AuthStrategy::None)]
    auth_type: AuthStrategy,

    /// Base URL, overriding the document's first server
    #[arg(short, long)]
    base_url: Option<String>,

    /// Output directory
    #[arg(short, long, default_value = "generated")]
    output: PathBuf,

    /// Language of the generated client
    #[arg(short, long, default_value_t = TargetLanguage::Rust)]
    target: TargetLanguage,

    /// Also write a Cargo.toml next to a generated Rust client
    #[arg(long)]
    manifest: bool,

    /// Print generated code without writing files
    #[arg(long)]
    dry_run: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,swagger2sdk_gen=info".to_string(),
            2 => "info,swagger2sdk_gen=debug,swagger2sdk_define=debug".to_string(),
            _ => "debug,swagger2sdk_gen=trace,swagger2sdk_define=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_file(verbose >= 3)
                .with_line_number(verbose >= 3)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn run(cli: &Cli) -> Result<PathBuf, GeneratorError> {
    let doc = OpenApiDocument::from_path(&cli.spec)?;

    let mut config = GeneratorConfig::new(&cli.sdk_name)
        .with_auth(cli.auth_type)
        .with_output_dir(&cli.output)
        .with_target(cli.target)
        .with_dry_run(cli.dry_run)
        .with_manifest(cli.manifest);
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url);
    }

    let mut report = |p: Progress| {
        eprint!(
            "\r{} {:>3.0}% ({}/{} paths)",
            "Generating".cyan().bold(),
            p.fraction() * 100.0,
            p.completed_paths,
            p.total_paths
        );
    };
    generate_and_write(&doc, &config, &mut report)?;
    eprintln!();

    Ok(config.output_file())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(path) => {
            if !cli.dry_run {
                eprintln!("{} {}", "Generated".green().bold(), path.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!();
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
