use anyhow::{bail, Context, Result};
use clap::Parser;
use lucky_ticket::{Outcome, SearchReport, Solution, SolveError, Ticket, N_DIGITS};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Check whether six digit ticket numbers can be calculated to 100.
#[derive(Parser, Debug)]
#[command(name = "lucky-ticket", version)]
struct Args {
    /// Ticket numbers to check. Anything but digits is ignored.
    tickets: Vec<String>,

    /// Also check this many randomly generated tickets
    #[arg(long, value_name = "N", default_value_t = 0)]
    random: usize,

    /// List up to LIMIT solutions per ticket instead of only the first
    #[arg(long, value_name = "LIMIT", value_parser = clap::value_parser!(u64).range(1..))]
    all: Option<u64>,

    /// Give up on a ticket after this many seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Report progress and search statistics on stderr
    #[arg(short, long)]
    verbose: bool,
}

// Keep only the digits, a ticket number is often written with separators.
fn sanitize(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

// What became of a search on the worker thread
enum Searched {
    Done(Result<SearchReport, SolveError>),
    TimedOut(Duration),
}

// The search runs on a worker thread so that a timeout can be imposed from outside.
fn search(ticket: Ticket, limit: usize, timeout: Option<Duration>) -> Result<Searched> {
    let (sender, receiver) = mpsc::channel();
    thread::Builder::new()
        .name(format!("search-{}", ticket))
        .spawn(move || {
            // the receiver is gone after a timeout, nothing left to report to
            let _ = sender.send(ticket.search(limit));
        })
        .context("failed to spawn search thread")?;

    match timeout {
        Some(timeout) => match receiver.recv_timeout(timeout) {
            Ok(report) => Ok(Searched::Done(report)),
            Err(mpsc::RecvTimeoutError::Timeout) => Ok(Searched::TimedOut(timeout)),
            Err(mpsc::RecvTimeoutError::Disconnected) => bail!("search thread for ticket {} panicked", ticket),
        },
        None => receiver
            .recv()
            .map(Searched::Done)
            .with_context(|| format!("search thread for ticket {} panicked", ticket)),
    }
}

// The verdict for one input
enum Checked {
    /// `more` holds the solutions past the first with --all
    Finished { outcome: Outcome, more: Vec<Solution> },
    TimedOut(Duration),
}

fn check(input: &str, args: &Args) -> Result<Checked> {
    let finished = |outcome| Checked::Finished { outcome, more: vec![] };
    let ticket = match sanitize(input).parse::<Ticket>() {
        Ok(ticket) => ticket,
        Err(e) => return Ok(finished(Outcome::InvalidInput(e))),
    };

    if args.verbose {
        eprintln!("Searching for a solution for ticket {}...", ticket);
    }
    let limit = args.all.unwrap_or(1) as usize;
    let report = match search(ticket, limit, args.timeout.map(Duration::from_secs))? {
        Searched::Done(Ok(report)) => report,
        Searched::Done(Err(e)) => return Ok(finished(Outcome::Fault(e))),
        Searched::TimedOut(timeout) => return Ok(Checked::TimedOut(timeout)),
    };
    if args.verbose {
        let stats = report.stats;
        eprintln!(
            "ticket {}: {} partitions, {} trials, {} divisions by zero skipped",
            ticket, stats.partitions, stats.trials, stats.division_guards
        );
    }

    let mut solutions = report.solutions.into_iter();
    Ok(match solutions.next() {
        Some(first) => Checked::Finished {
            outcome: Outcome::Found(first),
            more: solutions.collect(),
        },
        None => finished(Outcome::NotFound),
    })
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut inputs = args.tickets.clone();
    inputs.extend((0..args.random).map(|_| Ticket::generate().to_string()));
    if inputs.is_empty() {
        eprintln!("Usage: lucky-ticket <TICKET>... [--random N]");
        bail!("no tickets given");
    }

    let mut n_unchecked = 0;
    for input in &inputs {
        let ticket = sanitize(input);
        let (outcome, more) = match check(input, &args)? {
            Checked::Finished { outcome, more } => (outcome, more),
            Checked::TimedOut(timeout) => {
                n_unchecked += 1;
                eprintln!("Gave up on ticket {} after {:?}", ticket, timeout);
                continue;
            }
        };
        match outcome {
            Outcome::Found(solution) => {
                for solution in std::iter::once(solution).chain(more) {
                    println!("Solution found for ticket {}: {}", ticket, solution);
                }
            }
            Outcome::NotFound => println!("No solution found for ticket {}", ticket),
            Outcome::InvalidInput(e) => {
                println!("Please enter a {}-digit ticket number. ({:?}: {})", N_DIGITS, input, e)
            }
            Outcome::Fault(e) => {
                n_unchecked += 1;
                eprintln!("An unexpected error occurred during calculation for ticket {}: {}", ticket, e);
            }
        }
    }

    if n_unchecked > 0 {
        bail!("{} of {} tickets could not be checked", n_unchecked, inputs.len());
    }
    Ok(())
}
