use std::io::{self, Write};
use std::path::PathBuf;
use std::process::exit;
use std::time::Instant;

use log::info;
use structopt::StructOpt;

use word_dict::demo::{add_words, match_words, parse_tolerance, DemoConfig, SAMPLE_QUERIES, SAMPLE_WORDS};
use word_dict::{DictError, WordDict};


/// Match words against a dictionary exactly, with substitutions, or within a
/// Levenshtein distance.
#[derive(StructOpt)]
struct Cli {
    /// File to read extra words from, one per line
    #[structopt(short, long, parse(from_os_str))]
    words: Option<PathBuf>,
    /// Don't seed the dictionary with the sample words
    #[structopt(long)]
    no_samples: bool,
    /// Smallest substitution / edit budget tried
    #[structopt(long, default_value = "0", parse(try_from_str = parse_tolerance))]
    min: usize,
    /// Largest substitution / edit budget tried
    #[structopt(long, default_value = "4", parse(try_from_str = parse_tolerance))]
    max: usize,
    /// Print match results as JSON lines
    #[structopt(long)]
    json: bool,
    /// Print the dictionary tree and its words before matching
    #[structopt(long)]
    tree: bool,
    /// Words to match; the sample queries are used when none are given
    queries: Vec<String>,
}

fn run(args: Cli) -> Result<(), DictError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut dict = WordDict::new();

    if !args.no_samples {
        add_words(&mut dict, SAMPLE_WORDS.iter().copied(), &mut out)?;
    }
    if let Some(path) = &args.words {
        let report = dict.load_file(path)?;
        writeln!(out, "loaded {} words ({} rejected) from {:?}", report.added, report.rejected, path)?;
    }

    if args.tree {
        writeln!(out)?;
        dict.print_words_tree(&mut out)?;
        writeln!(out)?;
        dict.print_words_values(&mut out)?;
    }

    let config = DemoConfig::builder()
        .min_tolerance(args.min)
        .max_tolerance(args.max.max(args.min))
        .json(args.json)
        .build();

    let start = Instant::now();
    if args.queries.is_empty() {
        match_words(&dict, SAMPLE_QUERIES.iter().copied(), &config, &mut out)?;
    } else {
        match_words(&dict, args.queries.iter().map(String::as_str), &config, &mut out)?;
    }
    info!("matched in {:.3}s", start.elapsed().as_secs_f64());
    Ok(())
}

fn main() {
    env_logger::init();
    let args = Cli::from_args();

    if let Err(e) = run(args) {
        eprintln!("error: {}", e);
        exit(1);
    }
}
