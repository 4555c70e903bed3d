use std::io::{self, BufReader};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::{error, info, warn};

use magic_path::{FIXTURES, Scanner, Selection, Strategy, Writer, bench, testing};

#[derive(Parser)]
#[command(name = "magic-path")]
#[command(about = "Magic path recognizers and their benchmark", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decide whether inputs are magic paths
    Check {
        /// Recognizer to use, `all` runs every one of them and compares results
        #[arg(short, long, value_enum, default_value_t = Selection::All)]
        strategy: Selection,
        /// Inputs to check, one per line from stdin when none are given
        inputs: Vec<String>,
    },
    /// Run the case files of a suite against every recognizer
    Verify {
        #[arg(short, long, default_value = "fixtures")]
        suite: String,
        #[arg(short, long, default_value = "data")]
        data: PathBuf,
    },
    /// Time every recognizer over the sample inputs
    Bench {
        #[arg(short = 'n', long, default_value_t = 100_000)]
        iterations: u32,
    },
}

fn main() -> io::Result<()> {
    // install global collector configured based on RUST_LOG env var.
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check { strategy, inputs } => check(strategy, inputs),
        Commands::Verify { suite, data } => {
            let summary = testing::run_all_tests(&data, &suite, &Strategy::ALL);
            if summary.failed > 0 || summary.passed == 0 {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Bench { iterations } => {
            run_bench(iterations);
            Ok(())
        }
    }
}

fn check(selection: Selection, mut inputs: Vec<String>) -> io::Result<()> {
    if inputs.is_empty() {
        let mut scan = Scanner::new(BufReader::new(io::stdin()));
        while let Some(line) = scan.next_line()? {
            inputs.push(line);
        }
    }

    let mut out = Writer::new();
    let disagreements = magic_path::check(selection, &inputs, &mut out)?;

    out.flush_to(io::stdout().lock())?;
    if disagreements > 0 {
        error!("{} of {} inputs had conflicting answers", disagreements, inputs.len());
        std::process::exit(1);
    }
    Ok(())
}

fn run_bench(iterations: u32) {
    if let Some(notice) = bench::refusal() {
        warn!("{}", notice);
        eprintln!("{}", notice);
        return;
    }

    info!(
        "timing {} strategies over {} inputs, {} iterations each",
        Strategy::ALL.len(),
        FIXTURES.len(),
        iterations
    );

    let results = bench::run(&Strategy::ALL, FIXTURES, iterations);
    let fastest = results.first().map(|m| m.per_iteration());

    println!("{:<8} {:>14} {:>8} {:>9}", "strategy", "per pass", "ratio", "accepted");
    for m in &results {
        let ratio = fastest
            .filter(|f| !f.is_zero())
            .map(|f| m.per_iteration().as_secs_f64() / f.as_secs_f64())
            .unwrap_or(1.0);
        println!(
            "{:<8} {:>14} {:>7.2}x {:>4}/{:<4}",
            m.strategy.name(),
            format!("{:?}", m.per_iteration()),
            ratio,
            m.accepted,
            FIXTURES.len()
        );
    }
}
