use doubling_primes::fib::{fib, MAX_INDEX};
use doubling_primes::logging;
use log::{debug, error};
use parse_int::parse;
use std::io::{Error, ErrorKind, Result};
use std::process;
use std::time::Instant;
use structopt::StructOpt;

fn run(args: Opt) -> Result<()> {
    if args.max > MAX_INDEX {
        return Err(Error::new(
            ErrorKind::InvalidInput,
            format!("fib({}) overflows u64, max is {}", args.max, MAX_INDEX),
        ));
    }

    debug!("Computing fib(0..={}) recursively", args.max);
    let start_time = Instant::now();

    for i in 0..=args.max {
        println!("fib({}) = {}", i, fib(i));
    }

    println!(
        "Finished in {:.6} seconds",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

fn main() {
    logging::init();

    if let Err(err) = run(Opt::from_args()) {
        error!("fatal error: {}", err);
        process::exit(1);
    }
}

/// Prints recursively computed Fibonacci numbers and the time taken.
#[derive(StructOpt)]
#[structopt(name = "fib-timer")]
struct Opt {
    /// Last index to compute
    #[structopt(long = "max", default_value = "33", parse(try_from_str = parse))]
    max: u32,
}
