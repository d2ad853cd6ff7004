use clap::{Parser, ValueEnum};
use detrand_core::Seed;
use detrand_op::{ambient_u64, randint, random, seed_global, shuffle};
use env_logger::Target;
use log::{debug, error};
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::process::exit;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Op {
    Random,
    Randint,
    Shuffle,
    Ambient,
}

#[derive(Parser, Debug)]
#[command(version, about = "replay a deterministic draw sequence for a seed", long_about = None, name = "detrand")]
struct Args {
    /// Integer seed, masked to 32 bits. Ignored when `--text` is given
    #[arg(short, long, env = "DETRAND_SEED", allow_negative_numbers = true)]
    seed: Option<i64>,

    /// Text seed, hashed with FNV-1a
    #[arg(short, long)]
    text: Option<String>,

    #[arg(short, long, value_enum, default_value_t = Op::Random)]
    op: Op,

    /// Number of draws, or of shuffles for `shuffle`
    #[arg(short = 'n', long, default_value_t = 10)]
    count: usize,

    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    low: i64,

    #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
    high: i64,

    // Items for shuffle
    #[arg(short, long, value_delimiter = ',', default_value = "1,2,3,4,5")]
    items: Vec<String>,

    // Optional log level
    #[arg(short, long, default_value = "info")]
    log_level: String,

    // Optional directory for outputting logs
    #[arg(short = 'd', long = "dir", default_value = "")]
    log_dir: String,
}

fn init_logger(args: &Args) {
    let log_level = log::LevelFilter::from_str(&args.log_level.to_lowercase())
        .unwrap_or(log::LevelFilter::Info);

    let target = if !args.log_dir.is_empty() {
        let log_dir = PathBuf::from(&args.log_dir);
        if !log_dir.exists()
            && let Err(e) = std::fs::create_dir_all(&log_dir)
        {
            eprintln!("failed to create log directory: {}", e);
            exit(1);
        }
        let log_file = log_dir.join(format!(
            "detrand_{}.log",
            chrono::Local::now().format("%Y%m%d_%H%M%S")
        ));
        match File::create(log_file) {
            Ok(file) => Target::Pipe(Box::new(file)),
            Err(e) => {
                eprintln!("failed to create log file: {}", e);
                exit(1);
            }
        }
    } else {
        Target::Stderr
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_module_path(false)
        .format_target(false)
        .format_timestamp_millis()
        .target(target)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logger(&args);

    let seed = match (&args.text, args.seed) {
        (Some(text), _) => Some(Seed::from(text.as_str())),
        (None, Some(seed)) => Some(Seed::from(seed)),
        (None, None) => None,
    };
    match seed {
        Some(seed) => {
            let derived = seed_global(seed.clone());
            debug!("{} -> {}", seed, derived);
        }
        None => debug!("no seed given, using the default"),
    }

    let mut out = BufWriter::new(stdout().lock());
    for _ in 0..args.count {
        match args.op {
            Op::Random => writeln!(out, "{:?}", random())?,
            Op::Randint => match randint(args.low, args.high) {
                Ok(v) => writeln!(out, "{}", v)?,
                Err(e) => {
                    out.flush()?;
                    error!("{}", e);
                    exit(1);
                }
            },
            Op::Shuffle => writeln!(out, "{}", shuffle(&args.items).join(","))?,
            Op::Ambient => writeln!(out, "{}", ambient_u64())?,
        }
    }
    out.flush()?;
    Ok(())
}
