#![forbid(unsafe_code)]

//! Command-line argument parsing for the demo binary.
//!
//! Parses args manually (no external dependencies) to keep the binary lean.
//! Supports environment variable overrides via `RANGESUM_DEMO_*` prefix.

use std::env;
use std::process;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
rangesum-demo — Range-add / range-sum tree walkthrough

Builds an array of consecutive integers, applies two overlapping range
updates, and prints the range sums before and after each one.

USAGE:
    rangesum-demo [OPTIONS]

OPTIONS:
    --count=N            Number of elements, at least 1 (default: 8)
    --delta=N            Delta applied by the first update (default: 10)
    --verbose            Print tracing spans for every tree operation
    --quiet              Print only the final full-range sum
    --help, -h           Show this help message
    --version, -V        Show version

ENVIRONMENT VARIABLES:
    RANGESUM_DEMO_COUNT    Override --count
    RANGESUM_DEMO_DELTA    Override --delta
    RANGESUM_DEMO_VERBOSE  Set to 1 to enable --verbose";

/// Parsed command-line options.
pub struct Opts {
    /// Number of elements in the demo array.
    pub count: usize,
    /// Delta applied by the first range update.
    pub delta: i64,
    /// Whether tracing spans are printed.
    pub verbose: bool,
    /// Whether narration is suppressed.
    pub quiet: bool,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            count: 8,
            delta: 10,
            verbose: false,
            quiet: false,
        }
    }
}

impl Opts {
    /// Parse command-line arguments and environment variables.
    ///
    /// Environment variables take precedence over defaults but are overridden
    /// by explicit command-line flags.
    pub fn parse() -> Self {
        let mut opts = Self::default();

        // Apply environment variable defaults first
        if let Ok(val) = env::var("RANGESUM_DEMO_COUNT")
            && let Ok(n) = val.parse()
            && n >= 1
        {
            opts.count = n;
        }
        if let Ok(val) = env::var("RANGESUM_DEMO_DELTA")
            && let Ok(n) = val.parse()
        {
            opts.delta = n;
        }
        if let Ok(val) = env::var("RANGESUM_DEMO_VERBOSE") {
            opts.verbose = val == "1";
        }

        // Parse command-line args (override env vars)
        let args: Vec<String> = env::args().skip(1).collect();
        let mut i = 0;
        while i < args.len() {
            let arg = &args[i];
            match arg.as_str() {
                "--help" | "-h" => {
                    println!("{HELP_TEXT}");
                    process::exit(0);
                }
                "--version" | "-V" => {
                    println!("rangesum-demo {VERSION}");
                    process::exit(0);
                }
                "--verbose" => {
                    opts.verbose = true;
                }
                "--quiet" => {
                    opts.quiet = true;
                }
                other => {
                    if let Some(val) = other.strip_prefix("--count=") {
                        match val.parse() {
                            Ok(n) if n >= 1 => opts.count = n,
                            _ => {
                                eprintln!("Invalid --count value: {val}");
                                process::exit(1);
                            }
                        }
                    } else if let Some(val) = other.strip_prefix("--delta=") {
                        match val.parse() {
                            Ok(n) => opts.delta = n,
                            Err(_) => {
                                eprintln!("Invalid --delta value: {val}");
                                process::exit(1);
                            }
                        }
                    } else {
                        eprintln!("Unknown argument: {other}");
                        eprintln!("Run with --help for usage information.");
                        process::exit(1);
                    }
                }
            }
            i += 1;
        }

        opts
    }
}
