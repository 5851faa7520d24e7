//! texta — sentiment core CLI
//!
//! Developer interface for exercising the analysis core without a serving
//! layer: feed it classifier output JSON and text, get reports back.

use std::io::{self, IsTerminal, Read};

use clap::{Parser, Subcommand};
use texta_core::{ClassifierOutput, ToneDimension};

/// Texta sentiment core CLI
#[derive(Parser)]
#[command(name = "texta")]
#[command(version = texta_core::PKG_VERSION)]
#[command(about = "Texta sentiment analysis core")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List supported classifiers and their output schemas
    Models,

    /// Normalize raw classifier output JSON into canonical scores
    Normalize {
        /// Raw output JSON, e.g. '{"schema":"binary","label":"POSITIVE","score":0.99}'
        output: String,
        /// Classifier id the output came from
        #[arg(short, long, default_value = texta_core::DEFAULT_CLASSIFIER)]
        model: String,
    },

    /// Score tone dimensions for text
    Tone {
        /// Text to score (or omit to read from stdin)
        text: Option<String>,
    },

    /// Classify text with the rule-based fallback classifier
    RuleBased {
        /// Text to classify (or omit to read from stdin)
        text: Option<String>,
    },

    /// Full analysis: normalized sentiment plus tone in one report
    Analyze {
        /// Raw classifier output JSON
        #[arg(short, long)]
        output: String,
        /// Classifier id the output came from
        #[arg(short, long, default_value = texta_core::DEFAULT_CLASSIFIER)]
        model: String,
        /// Text to analyze (or omit to read from stdin)
        text: Option<String>,
    },

    /// Analyze a batch of JSON lines from stdin: {"text":"...","output":{...}}
    Batch {
        /// Classifier id for the whole batch
        #[arg(short, long, default_value = texta_core::DEFAULT_CLASSIFIER)]
        model: String,
    },
}

/// One line of `batch` input.
#[derive(serde::Deserialize)]
struct BatchItem {
    text: String,
    output: ClassifierOutput,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialise tracing (default: warn for CLI; override with RUST_LOG).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    match args.command {
        Command::Models => {
            for entry in texta_core::registry::supported() {
                let marker = if entry.id == texta_core::DEFAULT_CLASSIFIER {
                    " (default)"
                } else {
                    ""
                };
                println!("{} [{}]{marker}", entry.id, entry.schema);
            }
        }

        Command::Normalize { output, model } => {
            let output: ClassifierOutput = serde_json::from_str(&output)?;
            let scores = texta_core::normalize(&model, &output)?;
            println!("{}", serde_json::to_string_pretty(&scores)?);
        }

        Command::Tone { text } => {
            let text = resolve_text(text, "tone")?;
            let tone = texta_core::score_tone(&text);
            for dimension in ToneDimension::ALL {
                println!("{dimension}: {:.1}", tone.get(dimension));
            }
        }

        Command::RuleBased { text } => {
            let text = resolve_text(text, "rule-based")?;
            let scores = texta_core::rule_based::classify(&text);
            println!("{}", serde_json::to_string_pretty(&scores)?);
        }

        Command::Analyze {
            output,
            model,
            text,
        } => {
            let text = resolve_text(text, "analyze")?;
            let output: ClassifierOutput = serde_json::from_str(&output)?;
            let report = texta_core::analyze(&text, &model, &output)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }

        Command::Batch { model } => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;

            let mut items = Vec::new();
            for line in buf.lines().filter(|line| !line.trim().is_empty()) {
                let item: BatchItem = serde_json::from_str(line)?;
                items.push(item);
            }
            if items.len() > texta_core::MAX_BATCH_TEXTS {
                return Err(format!(
                    "batch too large: {} items (limit {})",
                    items.len(),
                    texta_core::MAX_BATCH_TEXTS
                )
                .into());
            }

            let reports = texta_core::analyze_batch(
                items.iter().map(|item| (item.text.as_str(), item.output.clone())),
                &model,
            )?;
            println!("{}", serde_json::to_string_pretty(&reports)?);
        }
    }

    Ok(())
}

/// Resolve text input from an optional CLI argument and/or stdin.
///
/// Combination rules:
/// - arg only → arg
/// - stdin only → stdin
/// - both → `"{arg}\n\n{stdin}"`
/// - neither → error
fn resolve_text(arg: Option<String>, command: &str) -> Result<String, Box<dyn std::error::Error>> {
    let stdin_is_pipe = !io::stdin().is_terminal();
    let stdin_text = if stdin_is_pipe {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        let trimmed = buf.trim().to_string();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    } else {
        None
    };

    match (arg, stdin_text) {
        (Some(a), Some(s)) => Ok(format!("{a}\n\n{s}")),
        (Some(a), None) => Ok(a),
        (None, Some(s)) => Ok(s),
        (None, None) => {
            Err(format!("{command}: no input provided (pass text as argument or via stdin)").into())
        }
    }
}
