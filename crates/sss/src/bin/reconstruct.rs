// Reconstruction of a Shamir-shared secret from a JSON document of shares,
// reporting the shares that are inconsistent with the majority secret.

use std::{env, error::Error, process::exit};

use console::style;
use itertools::Itertools;
use sss::{ConsistencyVoter, ShareDocument, ShareSet, TextReport, VoterConfig};
use sss_traits::ReportSink;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn print_notice_and_exit(error: Option<String>) -> ! {
    println!(
        "{} Secret reconstruction with corrupted share detection",
        style("  overview:").magenta().bold()
    );
    println!(
        "{} sss-reconstruct [-h] [--help] <input.json> <output.txt>",
        style("     usage:").magenta().bold()
    );
    println!(
        "{} {} selects `exact` or `truncate` division, {} enables parallel voting",
        style("   options:").magenta().bold(),
        style("SSS_DIVISION").blue(),
        style("SSS_PARALLEL=1").blue(),
    );
    let code = match error {
        Some(error) => {
            println!("{} {}", style("     error:").red().bold(), error);
            2
        }
        None => 0,
    };
    exit(code);
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sss=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();

    // Print the help if requested.
    if args.contains(&"-h".to_string()) || args.contains(&"--help".to_string()) {
        print_notice_and_exit(None)
    }

    let (input, output) = match args.as_slice() {
        [input, output] => (input, output),
        [] | [_] => print_notice_and_exit(None),
        _ => print_notice_and_exit(Some(format!(
            "Unexpected arguments: {}",
            args[2..].iter().join(" ")
        ))),
    };

    let config = VoterConfig::from_env()?;
    let document = ShareDocument::from_path(input)?;
    let shares = ShareSet::from_source(&document)?;
    info!(
        shares = shares.len(),
        threshold = shares.threshold(),
        parallel = config.parallel,
        "Loaded {}",
        input
    );

    let outcome = ConsistencyVoter::new(&shares, config).reconstruct()?;

    let corrupted = outcome.corrupted_ids.iter().copied().collect_vec();
    let mut report = TextReport::create(output)?;
    report.write_report(&outcome.secret, &corrupted)?;

    println!("Done. Output written to {}", style(output).green());
    Ok(())
}
