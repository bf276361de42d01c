//! srl — the SRL CLI
//!
//! Compile English-like queries into regular expressions.
//!
//! # Usage
//!
//! ```bash
//! # Compile a query
//! srl 'begin with digit exactly 2 times, letter at least 3 times'
//!
//! # Test subjects against it
//! srl 'capture (letter once or more) as "word"' --test "hello world"
//!
//! # Render with a delimiter
//! srl 'literally "foo", case insensitive' --delimiter /
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use srl::ast::{Resolved, COMMANDS};
use srl::Srl;

#[derive(Parser)]
#[command(name = "srl")]
#[command(version = "0.1.0")]
#[command(about = "Simple Regex Language — write regular expressions in plain English", long_about = None)]
#[command(after_help = "EXAMPLES:
    srl 'begin with digit exactly 2 times, letter at least 3 times'
    srl 'capture (anything once or more) as \"value\"' --test 'color:orange'
    srl 'literally \"colo\", optional \"u\", literally \"r\"' --delimiter /")]
struct Cli {
    /// The SRL query to compile
    query: Option<String>,

    /// Subjects to test against the compiled pattern (repeatable)
    #[arg(short, long)]
    test: Vec<String>,

    /// Wrap the pattern in this delimiter, with modifiers appended
    #[arg(short, long)]
    delimiter: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    format: OutputFormat,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse and explain an SRL query
    Explain {
        /// The SRL query to explain
        query: String,
    },
    /// Show the command vocabulary
    Vocabulary,
}

fn main() {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Explain { query }) => explain_query(query),
        Some(Commands::Vocabulary) => show_vocabulary(),
        None => {
            if let Some(query) = &cli.query {
                if let Err(e) = compile_query(query, &cli) {
                    eprintln!("{} {}", "Error:".red().bold(), e);
                    std::process::exit(1);
                }
            } else {
                println!("{}", "SRL — Simple Regex Language".cyan().bold());
                println!();
                println!("Usage: srl <QUERY> [OPTIONS]");
                println!();
                println!("Try: srl --help");
            }
        }
    }
}

fn compile_query(query: &str, cli: &Cli) -> Result<()> {
    if cli.verbose {
        println!("{} {}", "Input:".dimmed(), query.yellow());
    }

    let srl = Srl::new(query)?;
    let rendered = match &cli.delimiter {
        Some(delimiter) => srl.get(delimiter)?,
        None => srl.pattern(),
    };

    match cli.format {
        OutputFormat::Json => {
            let mut tests = Vec::new();
            for subject in &cli.test {
                tests.push(serde_json::json!({
                    "subject": subject,
                    "matched": srl.is_matching(subject)?,
                }));
            }
            let out = serde_json::json!({
                "query": srl.query(),
                "pattern": srl.pattern(),
                "modifiers": srl.modifiers(),
                "rendered": rendered,
                "tests": tests,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputFormat::Plain => {
            println!("{}", rendered.white());

            if !cli.test.is_empty() {
                println!();
                for subject in &cli.test {
                    let matched = srl.is_matching(subject)?;
                    let mark = if matched {
                        "✓".green()
                    } else {
                        "✗".red()
                    };
                    println!("{} {}", mark, subject.yellow());
                }
            }
        }
    }

    Ok(())
}

fn explain_query(query: &str) {
    println!("{}", "SRL Query Explanation".cyan().bold());
    println!();
    println!("{} {}", "Query:".dimmed(), query.yellow());
    println!();

    match srl::parser::parse(query) {
        Ok(resolved) => {
            println!("{}", "Resolved Structure:".green().bold());
            print_resolved(&resolved, 1);

            match Srl::new(query) {
                Ok(srl) => {
                    println!();
                    println!("{}", "Compiled Pattern:".green().bold());
                    println!("  {}", srl.pattern().white());
                    if !srl.modifiers().is_empty() {
                        println!("  {} {}", "Modifiers:".dimmed(), srl.modifiers().cyan());
                    }
                }
                Err(e) => {
                    eprintln!();
                    eprintln!("{} {}", "Build Error:".red().bold(), e);
                }
            }
        }
        Err(e) => {
            eprintln!("{} {}", "Parse Error:".red().bold(), e);
        }
    }
}

fn print_resolved(sequence: &[Resolved], depth: usize) {
    let indent = "  ".repeat(depth);
    for node in sequence {
        match node {
            Resolved::Command(spec) => {
                println!(
                    "{indent}{} {}",
                    "•".dimmed(),
                    spec.phrase.cyan()
                );
            }
            Resolved::Text(text) => {
                println!("{indent}{} {}", "•".dimmed(), text.yellow());
            }
            Resolved::Literal(literal) => {
                println!("{indent}{} {:?}", "•".dimmed(), literal.yellow());
            }
            Resolved::Group(inner) => {
                println!("{indent}{} {}", "•".dimmed(), "group".white().bold());
                print_resolved(inner, depth + 1);
            }
        }
    }
}

fn show_vocabulary() {
    println!("{}", "SRL Command Vocabulary".cyan().bold());
    println!();

    println!(
        "{:28} {}",
        "Command".white().bold(),
        "Category".white().bold()
    );
    println!("{}", "─".repeat(40).dimmed());

    for spec in COMMANDS {
        let category = format!("{:?}", spec.op.category()).to_lowercase();
        println!("{:28} {}", spec.phrase.cyan(), category.dimmed());
    }
}
