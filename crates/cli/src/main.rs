// ABOUTME: CLI for rewriting HTML documents with a tritium-kit rule set.
// ABOUTME: Reads HTML from a file or stdin, applies JSON rules, and writes the result.

mod input;

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tritium_kit::{Rewriter, RuleSet};

/// Rewrite an HTML document with a JSON rule set.
#[derive(Parser, Debug)]
#[command(name = "tritium-kit")]
#[command(about = "Apply tritium-kit rewrite rules to an HTML document", long_about = None)]
struct Args {
    /// HTML file to rewrite. Use "-" to read from stdin.
    #[arg(default_value = "-")]
    input: String,

    /// Rule set JSON file.
    #[arg(short = 'r', long = "rules")]
    rules: PathBuf,

    /// Output file path (default: stdout).
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Emit only the inner HTML of <body>.
    #[arg(long, default_value_t = false)]
    fragment: bool,

    /// Fail on invalid selectors instead of skipping the rule.
    #[arg(long, default_value_t = false)]
    strict: bool,

    /// Input charset label or Content-Type value (default: detect).
    #[arg(long)]
    charset: Option<String>,

    /// Print rewrite counters as JSON to stderr.
    #[arg(long, default_value_t = false)]
    stats: bool,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::from(1)
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let rules_json = fs::read_to_string(&args.rules)
        .with_context(|| format!("reading rules from {}", args.rules.display()))?;
    let rules = RuleSet::from_json(&rules_json)?;
    if rules.is_empty() {
        tracing::warn!(path = %args.rules.display(), "rule set has no rules");
    }

    let bytes = input::read_bytes(&args.input)?;
    let decoded = input::decode(&bytes, args.charset.as_deref())?;
    if decoded.had_errors {
        tracing::warn!(encoding = decoded.encoding.name(), "input contained malformed sequences");
    }
    tracing::debug!(encoding = decoded.encoding.name(), "decoded input");

    let rewriter = Rewriter::builder()
        .rules(rules)
        .fragment(args.fragment)
        .strict(args.strict)
        .build();
    let (output, stats) = rewriter.rewrite_with_stats(&decoded.html)?;

    match &args.output {
        Some(path) => fs::write(path, &output)
            .with_context(|| format!("writing output to {}", path.display()))?,
        None => println!("{}", output),
    }

    if args.stats {
        writeln!(io::stderr(), "{}", serde_json::to_string(&stats)?)?;
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
