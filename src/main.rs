use anyhow::{anyhow, Context, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use clap::{Args, Parser, Subcommand, ValueEnum};
use intervals::{complement, gaps, hull_all, union_all, Interval, Shape, Step};
use std::fmt::Display;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::PathBuf;
use std::process::exit;
use std::str::FromStr;
use std::thread;

fn read_file(file: impl Read) -> Vec<String> {
    BufReader::new(file).lines().map_while(io::Result::ok).collect()
}

// one interval per line; blank lines and `#` comments are skipped
fn parse_lines<T>(source: &str, lines: &[String]) -> Result<Vec<Interval<T>>>
where
    T: Step + FromStr,
    T::Err: Display,
{
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line_no, line)| {
            line.parse::<Interval<T>>()
                .with_context(|| format!("{source}:{line_no}: cannot parse {line:?}"))
        })
        .collect()
}

fn read_intervals<T>(files: &[PathBuf]) -> Result<Vec<Interval<T>>>
where
    T: Step + FromStr + Send,
    T::Err: Display,
{
    if files.is_empty() {
        log::info!("reading intervals from standard input");
        let lines = read_file(io::stdin().lock());
        return parse_lines("<stdin>", &lines);
    }

    thread::scope(|s| {
        let handles: Vec<_> = files
            .iter()
            .map(|path| {
                s.spawn(move || -> Result<Vec<Interval<T>>> {
                    let file = File::open(path)
                        .with_context(|| format!("Error opening {}", path.display()))?;
                    let lines = read_file(file);
                    log::debug!("{}: {} lines", path.display(), lines.len());
                    parse_lines(&path.display().to_string(), &lines)
                })
            })
            .collect();

        // keep the intervals in file order
        let mut intervals = Vec::new();
        for handle in handles {
            let parsed = handle
                .join()
                .map_err(|_| anyhow!("reader thread panicked"))??;
            intervals.extend(parsed);
        }
        log::info!("read {} intervals from {} files", intervals.len(), files.len());
        Ok(intervals)
    })
}

fn parse<T>(text: &str) -> Result<Interval<T>>
where
    T: Step + FromStr,
    T::Err: Display,
{
    text.parse::<Interval<T>>()
        .with_context(|| format!("cannot parse {text:?}"))
}

fn show<T: Display>(interval: Option<Interval<T>>) -> String {
    interval.map_or_else(|| String::from("none"), |interval| interval.to_string())
}

fn show_all<T: Display>(intervals: Vec<Interval<T>>) -> Vec<String> {
    intervals.iter().map(ToString::to_string).collect()
}

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Value type of the interval endpoints.
    #[arg(short = 't', long = "type", value_enum, default_value_t = ValueType::Int, global = true)]
    value_type: ValueType,

    /// Report half-open intervals sharing a boundary value as before/after
    /// rather than meets/met-by.
    #[arg(short, long, default_value_t = false, global = true)]
    strict: bool,

    /// Do not initialise logging.
    #[arg(short, long, default_value_t = false, global = true)]
    quiet: bool,

    /// Increase log verbosity.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ValueType {
    /// 64-bit signed integers, stepped by 1
    Int,
    /// 64-bit floats, stepped by 1.0
    Float,
    /// Calendar dates (2024-03-01), stepped by one day
    Date,
    /// Date and time (2024-03-01T12:00:00), stepped by one second
    Datetime,
    /// Time of day (12:00:00), stepped by one second
    Time,
}

#[derive(Args)]
struct Pair {
    /// First interval, e.g. "[1, 5)".
    a: String,

    /// Second interval.
    b: String,
}

#[derive(Subcommand)]
enum Command {
    /// Print the relation of A to B.
    Relate(Pair),
    /// Merge two connected intervals.
    Union(Pair),
    /// Print the points shared by A and B.
    Intersect(Pair),
    /// Print the span between the starts of two connected intervals.
    Except(Pair),
    /// Print the interval between two disjoint intervals.
    Gap(Pair),
    /// Print the smallest interval containing all arguments.
    Hull {
        #[arg(required = true)]
        intervals: Vec<String>,
    },
    /// Convert an interval to another boundary shape.
    Canonicalize {
        interval: String,

        /// Target shape: closed, open, closed-open or open-closed.
        #[arg(long, default_value = "closed")]
        shape: Shape,
    },
    /// Print the equivalent closed interval.
    Closure { interval: String },
    /// Print the equivalent open interval.
    Interior { interval: String },
    /// Merge overlapping intervals read from files (or standard input).
    Merge { files: Vec<PathBuf> },
    /// Print the holes between intervals read from files (or standard input).
    Gaps { files: Vec<PathBuf> },
    /// Print everything not covered by intervals read from files (or
    /// standard input).
    Complement { files: Vec<PathBuf> },
}

fn run<T>(cli: &Cli) -> Result<Vec<String>>
where
    T: Step + FromStr + Display + Send,
    T::Err: Display,
{
    let include_half_open = !cli.strict;

    let output = match &cli.command {
        Command::Relate(pair) => {
            let (a, b) = (parse::<T>(&pair.a)?, parse::<T>(&pair.b)?);
            vec![a.relation_with(&b, include_half_open).to_string()]
        }
        Command::Union(pair) => vec![show(parse::<T>(&pair.a)?.union(&parse(&pair.b)?))],
        Command::Intersect(pair) => {
            vec![show(parse::<T>(&pair.a)?.intersect(&parse(&pair.b)?))]
        }
        Command::Except(pair) => vec![show(parse::<T>(&pair.a)?.except(&parse(&pair.b)?))],
        Command::Gap(pair) => vec![show(parse::<T>(&pair.a)?.gap(&parse(&pair.b)?))],
        Command::Hull { intervals } => {
            let intervals = intervals
                .iter()
                .map(|text| parse::<T>(text))
                .collect::<Result<Vec<_>>>()?;
            vec![show(hull_all(intervals))]
        }
        Command::Canonicalize { interval, shape } => {
            vec![parse::<T>(interval)?.canonicalize_unit(*shape).to_string()]
        }
        Command::Closure { interval } => vec![parse::<T>(interval)?.closure_unit().to_string()],
        Command::Interior { interval } => {
            vec![parse::<T>(interval)?.interior_unit().to_string()]
        }
        Command::Merge { files } => show_all(union_all(read_intervals::<T>(files)?)),
        Command::Gaps { files } => show_all(gaps(read_intervals::<T>(files)?)),
        Command::Complement { files } => show_all(complement(read_intervals::<T>(files)?)),
    };

    Ok(output)
}

fn init_logging(cli: &Cli) {
    if cli.quiet {
        return;
    }

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);
    log::debug!("endpoint type {:?}", cli.value_type);

    let result = match cli.value_type {
        ValueType::Int => run::<i64>(&cli),
        ValueType::Float => run::<f64>(&cli),
        ValueType::Date => run::<NaiveDate>(&cli),
        ValueType::Datetime => run::<NaiveDateTime>(&cli),
        ValueType::Time => run::<NaiveTime>(&cli),
    };

    match result {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
        }
        Err(e) => {
            eprintln!("{e:#}");
            exit(1);
        }
    }
}
