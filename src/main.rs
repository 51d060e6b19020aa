//! `rootstream` command-line tool.
//!
//! Prints chunks or floats for a seed, and checks the published reference
//! vectors.
//!
//! ```text
//! rootstream [--seed HEX | --value FLOAT] [--chunks N] [--floats N] [--verify]
//! ```

use std::process::ExitCode;

use rootstream::{to_hex, FloatGenerator, RootstreamError, Seed, StreamGenerator};

/// Chunks printed when no output count is given.
const DEFAULT_CHUNKS: usize = 5;

const USAGE: &str = "\
Usage: rootstream [--seed HEX | --value FLOAT] [--chunks N] [--floats N] [--verify]

  --seed HEX      64-character hex seed
  --value FLOAT   derive the seed from a float (or: eta, pi, e, phi, tau)
  --chunks N      print N 16-byte chunks as hex
  --floats N      print N floats in [0, 1)
  --verify        check the reference vectors for the default seed
  --help          show this message

NOT FOR CRYPTOGRAPHIC USE.";

#[derive(Debug, Clone, PartialEq)]
enum SeedSource {
    Default,
    Hex(String),
    Value(f64),
}

#[derive(Debug, Clone, PartialEq)]
struct Options {
    seed: SeedSource,
    chunks: Option<usize>,
    floats: Option<usize>,
    verify: bool,
    help: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            seed: SeedSource::Default,
            chunks: None,
            floats: None,
            verify: false,
            help: false,
        }
    }
}

impl Options {
    fn seed(&self) -> Result<Seed, RootstreamError> {
        match &self.seed {
            SeedSource::Default => Ok(Seed::default()),
            SeedSource::Hex(hex) => Seed::parse(hex),
            SeedSource::Value(value) => Ok(Seed::from_value(*value)),
        }
    }

    /// Chunk count to print, falling back to [`DEFAULT_CHUNKS`] when no
    /// output was requested at all.
    fn chunk_count(&self) -> usize {
        match (self.chunks, self.floats, self.verify) {
            (Some(n), _, _) => n,
            (None, None, false) => DEFAULT_CHUNKS,
            _ => 0,
        }
    }
}

fn parse_value(text: &str) -> Result<f64, RootstreamError> {
    match text.to_ascii_lowercase().as_str() {
        "eta" => Ok(rootstream::ETA),
        "pi" => Ok(std::f64::consts::PI),
        "e" => Ok(std::f64::consts::E),
        "phi" => Ok((1.0 + 5f64.sqrt()) / 2.0),
        "tau" => Ok(std::f64::consts::TAU),
        _ => text.parse::<f64>().map_err(|_| {
            RootstreamError::InvalidArgument(format!("--value expects a float, got {:?}", text))
        }),
    }
}

fn parse_count(flag: &str, text: &str) -> Result<usize, RootstreamError> {
    text.parse::<usize>().map_err(|_| {
        RootstreamError::InvalidArgument(format!("{} expects a count, got {:?}", flag, text))
    })
}

fn parse_args<I>(args: I) -> Result<Options, RootstreamError>
where
    I: IntoIterator<Item = String>,
{
    let mut opts = Options::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        let mut value_for = |flag: &str| {
            args.next().ok_or_else(|| {
                RootstreamError::InvalidArgument(format!("{} requires a value", flag))
            })
        };
        match arg.as_str() {
            "--seed" | "--value" if opts.seed != SeedSource::Default => {
                return Err(RootstreamError::InvalidArgument(
                    "--seed and --value are mutually exclusive".to_string(),
                ));
            }
            "--seed" => opts.seed = SeedSource::Hex(value_for("--seed")?),
            "--value" => opts.seed = SeedSource::Value(parse_value(&value_for("--value")?)?),
            "--chunks" => opts.chunks = Some(parse_count("--chunks", &value_for("--chunks")?)?),
            "--floats" => opts.floats = Some(parse_count("--floats", &value_for("--floats")?)?),
            "--verify" => opts.verify = true,
            "--help" | "-h" => opts.help = true,
            other => {
                return Err(RootstreamError::InvalidArgument(format!(
                    "unknown option {:?}",
                    other
                )));
            }
        }
    }
    Ok(opts)
}

fn run(opts: &Options) -> Result<bool, RootstreamError> {
    let seed = opts.seed()?;
    let mut ok = true;

    if opts.verify {
        let report = rootstream::verify_vectors();
        for check in &report.checks {
            let status = if check.passed() { "PASS" } else { "FAIL" };
            println!("[{}]: {}  {}", check.index, status, check.actual);
            if !check.passed() {
                println!("  expected: {}", check.expected);
            }
        }
        ok = report.passed();
        println!(
            "{}",
            if ok {
                "All vectors match."
            } else {
                "Vectors do not match."
            }
        );
    }

    let chunks = opts.chunk_count();
    if chunks > 0 {
        for chunk in StreamGenerator::from_seed(&seed).take(chunks) {
            println!("{}", to_hex(&chunk));
        }
    }

    if let Some(n) = opts.floats {
        for value in FloatGenerator::from_seed(&seed).take(n) {
            println!("{}", value);
        }
    }

    Ok(ok)
}

fn main() -> ExitCode {
    let opts = match parse_args(std::env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("rootstream: {}", err);
            eprintln!("{}", USAGE);
            return ExitCode::from(2);
        }
    };
    if opts.help {
        println!("{}", USAGE);
        return ExitCode::SUCCESS;
    }
    match run(&opts) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("rootstream: {}", err);
            ExitCode::from(2)
        }
    }
}
