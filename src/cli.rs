//! Command-line front end.
//!
//! A thin wrapper over the engine: `scan` drives the derived rules across a
//! file by re-parse chaining and reports token spans, `check` applies one
//! rule to the whole input. No matching semantics live here.

use std::{
    fmt, fs,
    path::{Path, PathBuf},
    process,
};

use clap::{Parser, Subcommand, ValueEnum};
use miette::{Diagnostic, NamedSource, SourceSpan};
use serde::Serialize;
use thiserror::Error;

use crate::atoms::end_of_input;
use crate::combinators::sequence;
use crate::derived::{digit, name, number};
use crate::{parse, ExprRef, Input};

// ============================================================================
// CLI ARGUMENTS - Command-line argument definitions
// ============================================================================

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "vyaka",
    version,
    about = "A PEG combinator engine: scan or check inputs with the built-in derived rules."
)]
pub struct VyakaArgs {
    #[command(subcommand)]
    pub command: ArgsCommand,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum ArgsCommand {
    /// Tokenize a file with the name/number rules and report each span.
    Scan {
        /// The path to the file to scan.
        #[arg(required = true)]
        file: PathBuf,
        /// Emit the token report as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Check that a file matches a single rule in full.
    Check {
        /// The path to the file to check.
        #[arg(required = true)]
        file: PathBuf,
        /// The derived rule to apply.
        #[arg(long, value_enum, default_value_t = Rule::Name)]
        rule: Rule,
    },
}

/// The derived rules exposed on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Rule {
    Name,
    Number,
    Digit,
}

impl Rule {
    fn expression(self) -> ExprRef<str> {
        match self {
            Rule::Name => name(),
            Rule::Number => number(),
            Rule::Digit => digit(),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Name => write!(f, "name"),
            Rule::Number => write!(f, "number"),
            Rule::Digit => write!(f, "digit"),
        }
    }
}

// ============================================================================
// ERRORS - CLI-level failures, rendered through miette
// ============================================================================

/// Errors surfaced by the CLI layer.
///
/// The engine itself has no error channel beyond a failed match; everything
/// here belongs to the wrapper (I/O, report encoding, whole-input checks).
#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("could not read {path}")]
    #[diagnostic(code(vyaka::io))]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode the token report")]
    #[diagnostic(code(vyaka::report))]
    Report(#[from] serde_json::Error),

    #[error("input does not match rule `{rule}` in full")]
    #[diagnostic(
        code(vyaka::no_match),
        help("the rule must consume the entire input")
    )]
    NoMatch {
        rule: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("matching stopped here")]
        at: SourceSpan,
    },
}

// ============================================================================
// TOKEN REPORT - Output of the scan subcommand
// ============================================================================

/// One token recognized while scanning.
#[derive(Debug, Serialize)]
pub struct Token {
    pub kind: &'static str,
    pub start: usize,
    pub end: usize,
    pub text: String,
}

/// Tokenize `source` by re-parse chaining: at each position try `name`,
/// then `number`, otherwise skip one symbol.
pub fn scan(source: &str) -> Vec<Token> {
    let name_rule: ExprRef<str> = name();
    let number_rule: ExprRef<str> = number();
    let end = source.len();

    let mut tokens = Vec::new();
    let mut pos = 0;
    while pos != end {
        let m = parse(&name_rule, source, pos, end);
        if m.is_match() {
            tokens.push(token("name", source, m.span().begin(), m.span().end()));
            pos = m.span().end();
            continue;
        }
        let m = parse(&number_rule, source, pos, end);
        if m.is_match() {
            tokens.push(token("number", source, m.span().begin(), m.span().end()));
            pos = m.span().end();
            continue;
        }
        pos = source.advance(pos);
    }
    tokens
}

fn token(kind: &'static str, source: &str, start: usize, end: usize) -> Token {
    Token {
        kind,
        start,
        end,
        text: source[start..end].to_string(),
    }
}

// ============================================================================
// MAIN ENTRY POINT
// ============================================================================

/// The main entry point for the CLI.
pub fn run() {
    let args = VyakaArgs::parse();

    let result = match args.command {
        ArgsCommand::Scan { file, json } => scan_file(&file, json),
        ArgsCommand::Check { file, rule } => check_file(&file, rule),
    };

    if let Err(e) = result {
        eprintln!("{:?}", miette::Report::new(e));
        process::exit(1);
    }
}

fn scan_file(path: &Path, json: bool) -> Result<(), CliError> {
    let source = read_file(path)?;
    let tokens = scan(&source);
    if json {
        println!("{}", serde_json::to_string_pretty(&tokens)?);
    } else {
        for t in &tokens {
            println!("{:<8} {:>4}..{:<4} {}", t.kind, t.start, t.end, t.text);
        }
    }
    Ok(())
}

fn check_file(path: &Path, rule: Rule) -> Result<(), CliError> {
    let source = read_file(path)?;
    let rule_expr = rule.expression();
    let whole = sequence(vec![rule_expr.clone(), end_of_input()]);

    let m = parse(&whole, source.as_str(), 0, source.len());
    if m.is_match() {
        println!("match: {}..{}", m.span().begin(), m.span().end());
        return Ok(());
    }

    // Rerun the bare rule to locate the boundary for the diagnostic label.
    let partial = parse(&rule_expr, source.as_str(), 0, source.len());
    let stopped_at = if partial.is_match() {
        partial.span().end()
    } else {
        0
    };
    Err(CliError::NoMatch {
        rule: rule.to_string(),
        src: NamedSource::new(path.display().to_string(), source),
        at: (stopped_at, 0usize).into(),
    })
}

fn read_file(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.display().to_string(),
        source,
    })
}
