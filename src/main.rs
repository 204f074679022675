use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::{Value, json};
use std::path::{Path, PathBuf};

use seqcodec::{RenderOptions, diagnostics, parse_seq_json, render_edsl_bulk, render_edsl_with, to_seq_json};

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "seqcodec")]
#[command(about = "Convert SeqJSON command sequences to EDSL source", long_about = None, version)]
struct Cli {
    /// Render options file (JSON)
    #[arg(long, global = true, env = "SEQCODEC_CONFIG")]
    config: Option<PathBuf>,

    /// Put inline error comments before the trailing comma, as older renderers did
    #[arg(long, global = true)]
    legacy_error_comments: bool,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one SeqJSON document as EDSL.
    Edsl {
        #[arg(long)]
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short = 'o', long)]
        out: Option<PathBuf>,
    },

    /// Render a JSON array of SeqJSON documents; one result object per document.
    Bulk {
        #[arg(long)]
        input: PathBuf,

        #[arg(short = 'o', long)]
        out: Option<PathBuf>,

        /// Worker threads (overrides the config file)
        #[arg(long)]
        jobs: Option<usize>,
    },

    /// Validate a SeqJSON document and re-emit it in canonical form.
    Normalize {
        #[arg(long)]
        input: PathBuf,

        #[arg(short = 'o', long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut options = match &cli.config {
        Some(path) => RenderOptions::load(path)?,
        None => RenderOptions::default(),
    };
    if cli.legacy_error_comments {
        options.legacy_error_comments = true;
    }

    match cli.cmd {
        Commands::Edsl { input, out } => {
            let doc = read_json(&input)?;
            let seq = parse_seq_json(&doc)
                .map_err(|e| anyhow::anyhow!(diagnostics::error_message(e)))
                .with_context(|| format!("invalid sequence in {}", input.display()))?;
            write_output(out.as_deref(), &render_edsl_with(&seq, &options))?;
        }
        Commands::Bulk { input, out, jobs } => {
            if let Some(jobs) = jobs {
                anyhow::ensure!(jobs > 0, "--jobs must be at least 1");
                options.jobs = jobs;
            }
            let docs = match read_json(&input)? {
                Value::Array(docs) => docs,
                _ => anyhow::bail!("{}: expected a JSON array of sequences", input.display()),
            };

            let results: Vec<Value> = render_edsl_bulk(&docs, &options)
                .into_iter()
                .map(|result| match result {
                    Ok(edsl) => json!({ "edsl": edsl }),
                    Err(e) => json!({ "error": diagnostics::error_message(e) }),
                })
                .collect();
            let failed = results.iter().filter(|r| r.get("error").is_some()).count();
            if failed > 0 {
                tracing::warn!(failed, total = results.len(), "some documents failed validation");
            }
            write_output(out.as_deref(), &serde_json::to_string_pretty(&results)?)?;
        }
        Commands::Normalize { input, out } => {
            let doc = read_json(&input)?;
            let seq = parse_seq_json(&doc)
                .map_err(|e| anyhow::anyhow!(diagnostics::error_message(e)))
                .with_context(|| format!("invalid sequence in {}", input.display()))?;
            write_output(out.as_deref(), &serde_json::to_string_pretty(&to_seq_json(&seq))?)?;
        }
    }

    Ok(())
}

fn read_json(path: &Path) -> Result<Value> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing JSON in {}", path.display()))
}

fn write_output(out: Option<&Path>, text: &str) -> Result<()> {
    match out {
        Some(path) => {
            std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
            eprintln!("Wrote {}", path.display());
        }
        None => println!("{}", text),
    }
    Ok(())
}
