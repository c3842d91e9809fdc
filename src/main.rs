// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use anyhow::{anyhow, bail, Context, Result};
use chordal::config::ChordSheet;
use chordal::{Chord, Interval, Tone, Value};
use std::env;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("chordal - Pitch-class music theory calculator");
    println!();
    println!("Usage: chordal [--verbose] <COMMAND>");
    println!();
    println!("Commands:");
    println!("  --chord <ROOT> [NOTES...]             Describe a chord built on ROOT");
    println!("  --interval <FROM> <TO>                Name the interval climbing from FROM to TO");
    println!("  --transpose <N> <ROOT> [NOTES...]     Transpose a chord by N semitones");
    println!("  --eval <EXPR...>                      Evaluate e.g. 'C + E + G' or 'E - C'");
    println!("  --sheet <FILE>                        Describe every chord in a YAML/TOML sheet");
    println!("  --help                                Show this help message");
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_chord(args: &[String]) -> Result<Chord> {
    let (root, notes) = args
        .split_first()
        .ok_or_else(|| anyhow!("a chord needs a root tone"))?;
    let root = Tone::new(root)?;
    let notes = notes
        .iter()
        .map(|n| Tone::new(n))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Chord::new(root, notes)?)
}

fn describe_chord(chord: &Chord) {
    println!("{} ({})", chord, chord.quality());
    for (tone, interval) in chord.tones().iter().zip(chord.intervals()) {
        println!("  {:<3} {}", tone.to_string(), interval);
    }
}

/// Evaluate operands and `+`/`-` operators strictly left to right
fn evaluate<S: AsRef<str>>(tokens: &[S]) -> Result<Value> {
    let mut tokens = tokens.iter().map(|t| t.as_ref());
    let first = tokens.next().ok_or_else(|| anyhow!("empty expression"))?;
    let mut acc = parse_operand(first)?;

    while let Some(op) = tokens.next() {
        let operand = tokens
            .next()
            .ok_or_else(|| anyhow!("operator '{}' is missing its right operand", op))?;
        let rhs = parse_operand(operand)?;
        acc = match op {
            "+" => acc.add(&rhs)?,
            "-" => acc.sub(&rhs)?,
            other => bail!("unknown operator '{}' (expected + or -)", other),
        };
        debug!(op, rhs = %rhs, result = %acc, "Evaluated step");
    }

    Ok(acc)
}

/// A leading `-` on an integer negates the interval
fn parse_operand(token: &str) -> Result<Value> {
    match token.strip_prefix('-') {
        Some(rest) if rest.parse::<i32>().is_ok() => Ok(Value::parse(rest)?.neg()?),
        _ => Ok(Value::parse(token)?),
    }
}

fn run(args: &[String]) -> Result<()> {
    match args[0].as_str() {
        "--chord" => {
            let chord = parse_chord(&args[1..])?;
            describe_chord(&chord);
        }
        "--interval" => {
            if args.len() != 3 {
                bail!("--interval requires exactly two tones");
            }
            let from = Tone::new(&args[1])?;
            let to = Tone::new(&args[2])?;
            let interval = to - from;
            println!("{} -> {}: {} ({} semitones)", from, to, interval, interval.semitones());
        }
        "--transpose" => {
            if args.len() < 3 {
                bail!("--transpose requires a semitone count and a chord");
            }
            let semitones: i32 = args[1]
                .parse()
                .map_err(|_| anyhow!("Invalid semitone count: {}", args[1]))?;
            let chord = parse_chord(&args[2..])?;
            let transposed = chord.transposed(semitones);
            println!("{} + {} = {}", chord, Interval::new(semitones), transposed);
        }
        "--eval" => {
            let value = evaluate(&args[1..])?;
            println!("{} = {}", value.kind(), value);
        }
        "--sheet" => {
            let path = args.get(1).ok_or_else(|| anyhow!("--sheet requires a file"))?;
            let sheet = ChordSheet::load(path)?;
            let chords = sheet
                .chords()
                .with_context(|| format!("Chord sheet {:?} has an invalid entry", path))?;
            println!("{}", sheet.name);
            for (name, chord) in &chords {
                println!("  {:<12} {:<16} {}", name, chord.to_string(), chord.quality());
            }
        }
        "--help" | "-h" => {
            print_usage();
        }
        other => {
            eprintln!("Unknown option: {}", other);
            print_usage();
            std::process::exit(1);
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let mut args: Vec<String> = env::args().skip(1).collect();

    let verbose = args.first().map(|a| a == "--verbose").unwrap_or(false);
    if verbose {
        args.remove(0);
    }
    init_logging(verbose);

    if args.is_empty() {
        println!("chordal - Pitch-class music theory calculator");
        println!("Run with --help for usage information");
        return Ok(());
    }

    run(&args).map_err(|e| {
        warn!(command = %args[0], "Command failed");
        e
    })
}
