use std::{fmt::Display, str::FromStr};

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use reglang_lib::{
    automaton::{Alphabet, Automaton, are_equivalent, serializable::SerializableAutomaton},
    config::{LoggerConfig, ReglangConfig},
    expr::RegularExpression,
};

/// How the resulting automaton is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Invalid output format: {}", s)),
        }
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "Regular Language Toolkit")]
#[command(version = "0.1")]
#[command(about = "Build, minimize and compare finite automata for regular expressions", long_about = None)]
struct Args {
    /// JSON file containing a pre-parsed regular expression.
    file: String,

    /// A second expression to compare the first one against.
    #[arg(long)]
    compare: Option<String>,

    #[arg(short, long)]
    config: Option<String>,

    #[arg(short, long, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Print the Thompson automaton without normalizing it.
    #[arg(long)]
    raw: bool,
}

fn init_tracing(config: &LoggerConfig) {
    if !*config.get_enabled() {
        return;
    }

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::from(*config.get_log_level()))
        .with_writer(std::io::stderr)
        .init();
}

fn load_expression(file: &str) -> anyhow::Result<RegularExpression> {
    let content =
        std::fs::read_to_string(file).with_context(|| format!("failed to read {}", file))?;
    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse expression in {}", file))
}

fn build(file: &str, alphabet: &Alphabet) -> anyhow::Result<(RegularExpression, Automaton)> {
    let expression = load_expression(file)?;
    let automaton = expression
        .to_automaton(alphabet)
        .with_context(|| format!("failed to build automaton for {}", expression))?;

    Ok((expression, automaton))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = ReglangConfig::from_optional_file(args.config.as_ref())?;
    init_tracing(config.get_logger());

    let alphabet = config.get_alphabet().to_alphabet()?;

    let (expression, automaton) = build(&args.file, &alphabet)?;
    tracing::info!("Built {} states for {}", automaton.state_count(), expression);

    let automaton = if args.raw {
        automaton
    } else {
        automaton.normalize()?
    };

    match args.format {
        OutputFormat::Text => print!("{}", automaton),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&SerializableAutomaton::from(&automaton))?
        ),
    }

    if let Some(other_file) = &args.compare {
        let (other_expression, other) = build(other_file, &alphabet)?;

        let left = if args.raw {
            automaton.normalize()?
        } else {
            automaton
        };
        let right = other.normalize()?;

        if are_equivalent(&left, &right)? {
            println!("{} {} {}", expression, "≡".bright_green(), other_expression);
        } else {
            println!("{} {} {}", expression, "≢".bright_red(), other_expression);
        }
    }

    Ok(())
}
