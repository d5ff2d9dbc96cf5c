use doubling_primes::logging;
use doubling_primes::primes::{generate, word_limit};
use doubling_primes::render::{render, Dialect};
use log::{debug, error, info, warn};
use parse_int::parse;
use std::io::{Error, ErrorKind, Result};
use std::process;
use structopt::StructOpt;

const USAGE: &str = "Usage: prime-table <number_of_primes>";

fn parse_count(arg: &str) -> Result<usize> {
    parse::<usize>(arg.trim()).map_err(|err| Error::new(ErrorKind::InvalidInput, err))
}

/// Returns `None` unless exactly one positional count was given.
fn count_from(args: &[String]) -> Option<Result<usize>> {
    match args {
        [count] => Some(parse_count(count)),
        _ => None,
    }
}

fn run(args: Opt) -> Result<()> {
    let count = match count_from(&args.count) {
        Some(count) => count?,
        None => {
            println!("{}", USAGE);
            return Ok(());
        }
    };

    let limit = word_limit(args.width).ok_or_else(|| {
        Error::new(
            ErrorKind::InvalidInput,
            format!("word width must be 1 to 64 bits, got {}", args.width),
        )
    })?;

    info!("Target word is {}-bit, limit = {}", args.width, limit);

    let dialect = args.dialect.unwrap_or_default();
    debug!("Rendering {} prime(s) as {}", count, dialect);

    let table = generate(count, limit);

    for note in table.notes(args.width, limit) {
        warn!("{}", note);
    }

    print!("{}", render(&table.primes, dialect));

    Ok(())
}

fn main() {
    logging::init();

    if let Err(err) = run(Opt::from_args()) {
        error!("fatal error: {}", err);
        process::exit(1); // report failure
    }
}

/// Generates primes starting at 1009, each greater than double the previous
/// one, as a constant table for hash map growth.
#[derive(StructOpt)]
#[structopt(name = "prime-table")]
struct Opt {
    /// Word width in bits; no prime may exceed 2^width - 1
    #[structopt(long = "width", default_value = "64", parse(try_from_str = parse))]
    width: u32,

    /// Language of the emitted table [default: c]
    #[structopt(long = "dialect", possible_values = Dialect::VARIANTS)]
    dialect: Option<Dialect>,

    /// Number of primes to generate
    #[structopt(name = "number_of_primes")]
    count: Vec<String>,
}
