
use keycalc::expr::{evaluate_expression, evaluate_str, format_number, ErrorKind};
use keycalc::state::{CalculatorDisplay, Key};

use anyhow::Context;
use clap::Parser;
use log::info;
use serde::Serialize;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

/// Evaluate calculator expressions such as `2sin(90)` or `6÷4`.
#[derive(Debug, Parser)]
#[command(name = "keycalc", version, about)]
struct Args {
  /// Print each outcome as a JSON object.
  #[arg(long)]
  json: bool,

  /// Expressions to evaluate. With none, key presses are read from
  /// standard input, one line at a time. Each whitespace-separated
  /// word that is a key label (`=`, `C`, `AC`, `<`, `⌫`) presses that
  /// key; in any other word, every character is a key of its own.
  expressions: Vec<String>,
}

/// JSON payload for a single evaluated expression.
#[derive(Debug, Serialize)]
struct EvaluationPayload<'a> {
  input: &'a str,
  #[serde(skip_serializing_if = "Option::is_none")]
  result: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  error: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  kind: Option<ErrorKind>,
}

/// JSON payload for the display after an interactive line.
#[derive(Debug, Serialize)]
struct DisplayPayload<'a> {
  display: &'a str,
  error: bool,
}

impl<'a> EvaluationPayload<'a> {
  fn new(input: &'a str) -> Self {
    match evaluate_str(input) {
      Ok(value) => Self { input, result: Some(format_number(value)), error: None, kind: None },
      Err(err) => Self { input, result: None, error: Some(err.to_string()), kind: Some(err.kind()) },
    }
  }

  fn is_success(&self) -> bool {
    self.result.is_some()
  }
}

fn main() -> ExitCode {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
  let args = Args::parse();
  match run(&args) {
    Ok(true) => ExitCode::SUCCESS,
    Ok(false) => ExitCode::FAILURE,
    Err(err) => {
      eprintln!("keycalc: {err:#}");
      ExitCode::from(2)
    }
  }
}

/// Returns whether every evaluation succeeded.
fn run(args: &Args) -> anyhow::Result<bool> {
  let stdout = io::stdout();
  let mut out = stdout.lock();
  if args.expressions.is_empty() {
    info!("no expressions given, reading key presses from stdin");
    run_interactive(io::stdin().lock(), &mut out, args.json)?;
    Ok(true)
  } else {
    evaluate_all(&args.expressions, &mut out, args.json)
  }
}

fn evaluate_all(expressions: &[String], out: &mut impl Write, json: bool) -> anyhow::Result<bool> {
  let mut all_ok = true;
  for input in expressions {
    if json {
      let payload = EvaluationPayload::new(input);
      all_ok &= payload.is_success();
      let line = serde_json::to_string(&payload).context("failed to serialize result")?;
      writeln!(out, "{line}")?;
    } else {
      match evaluate_expression(input) {
        Ok(result) => writeln!(out, "{result}")?,
        Err(message) => {
          all_ok = false;
          writeln!(out, "Error: {message}")?;
        }
      }
    }
  }
  Ok(all_ok)
}

fn run_interactive(input: impl BufRead, out: &mut impl Write, json: bool) -> anyhow::Result<()> {
  let mut display = CalculatorDisplay::new();
  for line in input.lines() {
    let line = line.context("failed to read from stdin")?;
    for key in line_keys(&line) {
      display.press(key);
    }
    if json {
      let payload = DisplayPayload { display: display.text(), error: display.is_showing_error() };
      let line = serde_json::to_string(&payload).context("failed to serialize display")?;
      writeln!(out, "{line}")?;
    } else {
      writeln!(out, "{}", display.text())?;
    }
    out.flush()?;
  }
  Ok(())
}

fn line_keys(line: &str) -> Vec<Key> {
  line.split_whitespace()
    .flat_map(|word| match Key::from_label(word) {
      Key::Input(_) => word.chars().map(Key::from).collect(),
      key => vec![key],
    })
    .collect()
}
