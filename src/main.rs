//! Tailcall - Sample Runner CLI

use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process;
use std::time::Duration;

use tailcall::config::{self, TrampolineConfig};
use tailcall::samples::{self, OsDirectories, ThreadSleeper};
use tracing::Level;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const COUNTDOWN_INTERVAL: Duration = Duration::from_millis(250);

fn print_usage() {
    eprintln!("tailcall v{}", VERSION);
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("    tailcall [OPTIONS] <SAMPLE> [ARGS...]");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("    -h, --help             Print this help message");
    eprintln!("    -V, --version          Print version information");
    eprintln!("    -v                     Increase log verbosity (repeatable)");
    eprintln!("    --config <FILE>        Load driver configuration from a TOML file");
    eprintln!();
    eprintln!("SAMPLES:");
    eprintln!("    count <N>              Count from 0 to N one step at a time");
    eprintln!("    fib <N>                Print the Nth Fibonacci number");
    eprintln!("    factorial <FROM> <TO>  Print the product FROM * ... * TO");
    eprintln!("    files <DIR>            List every file below DIR, level by level");
    eprintln!("    countdown <N>          Print N down to 0, pausing between lines");
    eprintln!();
    eprintln!("EXAMPLES:");
    eprintln!("    tailcall count 1000000");
    eprintln!("    tailcall -vv fib 90");
    eprintln!("    tailcall --config tailcall.toml files .");
}

fn print_version() {
    println!("tailcall {}", VERSION);
}

struct Options {
    verbosity: u8,
    config: Option<String>,
    sample: String,
    args: Vec<String>,
}

/// Number of `v`s in a `-v`, `-vv`, ... flag, capped at `u8::MAX`
fn count_verbosity(flag: &str) -> u8 {
    u8::try_from(flag.len().saturating_sub(1)).unwrap_or(u8::MAX)
}

fn parse_args() -> Result<Options, String> {
    let args: Vec<String> = env::args().collect();

    let mut verbosity = 0u8;
    let mut config = None;
    let mut positional = Vec::new();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_usage();
                process::exit(0);
            }
            "-V" | "--version" => {
                print_version();
                process::exit(0);
            }
            "--config" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing file after --config".to_string());
                }
                config = Some(args[i].clone());
            }
            flags if flags.starts_with("-v") && flags[1..].chars().all(|c| c == 'v') => {
                verbosity = verbosity.saturating_add(count_verbosity(flags));
            }
            arg if arg.starts_with('-') => {
                return Err(format!("Unknown option: {}", arg));
            }
            arg => positional.push(arg.to_string()),
        }
        i += 1;
    }

    let mut positional = positional.into_iter();
    let sample = positional
        .next()
        .ok_or_else(|| "No sample specified".to_string())?;

    Ok(Options {
        verbosity,
        config,
        sample,
        args: positional.collect(),
    })
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

/// Environment settings, replaced wholesale by a config file if one is given
fn load_config(path: Option<&str>) -> Result<TrampolineConfig, String> {
    match path {
        None => Ok(TrampolineConfig::from_env()),
        Some(path) => {
            if !Path::new(path).exists() {
                return Err(format!("Config file not found: {}", path));
            }
            let src = fs::read_to_string(path)
                .map_err(|e| format!("Failed to read config '{}': {}", path, e))?;
            TrampolineConfig::from_toml_str(&src)
                .map_err(|e| format!("Invalid config '{}': {}", path, e))
        }
    }
}

fn numeric_arg<T: std::str::FromStr>(args: &[String], idx: usize, name: &str) -> Result<T, String> {
    let raw = args
        .get(idx)
        .ok_or_else(|| format!("Missing argument <{}>", name))?;
    raw.parse()
        .map_err(|_| format!("Invalid value for <{}>: {}", name, raw))
}

fn run_sample(sample: &str, args: &[String]) -> Result<(), String> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match sample {
        "count" => {
            let limit: u64 = numeric_arg(args, 0, "N")?;
            writeln!(out, "{}", samples::count_up(0, limit)).map_err(|e| e.to_string())
        }
        "fib" => {
            let n: u32 = numeric_arg(args, 0, "N")?;
            match samples::fibonacci(n) {
                Some(value) => writeln!(out, "{}", value).map_err(|e| e.to_string()),
                None => Err(format!("fib({}) does not fit in 64 bits", n)),
            }
        }
        "factorial" => {
            let from: u64 = numeric_arg(args, 0, "FROM")?;
            let to: u64 = numeric_arg(args, 1, "TO")?;
            match samples::partial_factorial(from, to) {
                Some(value) => writeln!(out, "{}", value).map_err(|e| e.to_string()),
                None => Err(format!("product {}..={} does not fit in 64 bits", from, to)),
            }
        }
        "files" => {
            let dir = args
                .first()
                .ok_or_else(|| "Missing argument <DIR>".to_string())?;
            samples::print_files(&OsDirectories, dir, &mut out)
                .map_err(|e| format!("Failed to walk '{}': {}", dir, e))
        }
        "countdown" => {
            let n: u32 = numeric_arg(args, 0, "N")?;
            samples::timed_countdown(n, COUNTDOWN_INTERVAL, &ThreadSleeper, &mut out)
                .map_err(|e| e.to_string())
        }
        other => Err(format!("Unknown sample: {}", other)),
    }
}

fn main() {
    let options = match parse_args() {
        Ok(opts) => opts,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_usage();
            process::exit(1);
        }
    };

    init_logging(options.verbosity);

    let trampoline_config = match load_config(options.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    if config::configure(trampoline_config).is_err() {
        eprintln!("Warning: trampoline configuration was already installed");
    }

    if let Err(e) = run_sample(&options.sample, &options.args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_verbosity() {
        assert_eq!(count_verbosity("-v"), 1);
        assert_eq!(count_verbosity("-vvv"), 3);
        let long = format!("-{}", "v".repeat(300));
        assert_eq!(count_verbosity(&long), u8::MAX);
        assert_eq!(2u8.saturating_add(count_verbosity(&long)), u8::MAX);
    }
}
