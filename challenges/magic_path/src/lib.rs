use std::fmt;
use std::io::{self, BufRead, Write};

use log::error;

pub mod bench;
pub mod grammar;

pub use grammar::{cursor, range, span};

/// Inputs the benchmark is driven with. Every one of them is a magic path.
pub const FIXTURES: &[&str] = &[
    "U",
    "UDU",
    "LUDUDUR",
    "LUR",
    "LUDUR",
    "UDLLURR",
    "LUDLURDUR",
    "UDLURDLLURR",
    "LUDLURRDLURDU",
    "LLUDUDURDUDLURR",
    "LUDUDUDUDLUDURDUR",
    "LLLLUDLURRDURRDUR",
    "LUDUDLLURRDLLLURRRR",
    "LUDLURDLUDLURRDUDUR",
    "UDLUDURDLLLURDURDUR",
    "LLLUDLURRDUDUDURRDU",
    "LLLUDURRDLURDLUDURDUDUR",
    "LUDLUDURDUDUDLURDLURRDU",
    "LUDLLUDLURRDLUDLUDURRRR",
    "LLLLURRRRDLLUDUDURRDUDLURDU",
    "UDUDUDLLLLURDUDUDURRDLURDUR",
    "UDLURDLLLUDURDLLURDURRDUDLLURRR",
    "LLLLUDLUDUDURDLUDLUDURDUDUDURRRRDUR",
    "LLUDLLUDURDURDUDURDUDUDLLLURRDURDLURDUR",
    "LUDUDUDURDLLLUDLURDLLUDURDLURDLUDURRRRRDLUDUDUR",
];

/// The recognizer implementations. They accept the same language and differ
/// only in cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Strategy {
    /// Brute-force split search over index ranges (exponential)
    Range,
    /// Single advancing position threaded through the rules (linear)
    Cursor,
    /// Borrowed remainder slices, no position arithmetic (linear)
    Span,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Range, Strategy::Cursor, Strategy::Span];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Range => "range",
            Strategy::Cursor => "cursor",
            Strategy::Span => "span",
        }
    }

    pub fn matcher(self) -> fn(&str) -> bool {
        match self {
            Strategy::Range => range::is_magic_path,
            Strategy::Cursor => cursor::is_magic_path,
            Strategy::Span => span::is_magic_path,
        }
    }

    pub fn matches(self, text: &str) -> bool {
        (self.matcher())(text)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Line reader over any buffered source
pub struct Scanner {
    reader: Box<dyn BufRead>,
}

impl Scanner {
    pub fn new(reader: impl BufRead + 'static) -> Self {
        Self {
            reader: Box::new(reader),
        }
    }

    /// Next line with surrounding whitespace removed, `None` at end of input.
    pub fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut input = String::new();
        if self.reader.read_line(&mut input)? == 0 {
            return Ok(None);
        }
        Ok(Some(input.trim().to_string()))
    }
}

/// Output writer that collects into a memory buffer
pub struct Writer(Vec<u8>);

impl Writer {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn println<T: fmt::Display>(&mut self, value: T) -> io::Result<()> {
        writeln!(self.0, "{}", value)
    }

    pub fn flush_to(&self, mut out: impl Write) -> io::Result<()> {
        out.write_all(&self.0)?;
        out.flush()
    }

    pub(crate) fn into_string(self) -> Result<String, std::string::FromUtf8Error> {
        String::from_utf8(self.0)
    }
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

/// Answers one input per line with `YES` or `NO` until the scanner runs dry.
pub fn solve(strategy: Strategy, scan: &mut Scanner, out: &mut Writer) -> io::Result<()> {
    while let Some(line) = scan.next_line()? {
        out.println(verdict(strategy.matches(&line)))?;
    }
    Ok(())
}

pub fn verdict(is_magic: bool) -> &'static str {
    if is_magic { "YES" } else { "NO" }
}

/// Which recognizers `check` runs. `All` runs every one and compares them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Selection {
    Range,
    Cursor,
    Span,
    #[default]
    All,
}

impl Selection {
    pub fn strategies(self) -> &'static [Strategy] {
        match self {
            Selection::Range => &[Strategy::Range],
            Selection::Cursor => &[Strategy::Cursor],
            Selection::Span => &[Strategy::Span],
            Selection::All => &Strategy::ALL,
        }
    }
}

/// The shared answer when every result is the same, `None` on any disagreement.
pub fn agreement(results: &[bool]) -> Option<bool> {
    let (&first, rest) = results.split_first()?;
    rest.iter().all(|&r| r == first).then_some(first)
}

/// Writes `<input> YES|NO` per input and returns how many inputs the selected
/// recognizers disagreed on. A disagreement is reported as `NO`.
pub fn check<S: AsRef<str>>(selection: Selection, inputs: &[S], out: &mut Writer) -> io::Result<usize> {
    let mut disagreements = 0;

    for input in inputs {
        let input = input.as_ref();
        let results: Vec<bool> = selection
            .strategies()
            .iter()
            .map(|s| s.matches(input))
            .collect();
        let is_magic = match agreement(&results) {
            Some(is_magic) => is_magic,
            None => {
                error!("recognizers disagree on {:?}: {:?}", input, results);
                disagreements += 1;
                false
            }
        };
        out.println(format!("{} {}", input, verdict(is_magic)))?;
    }

    Ok(disagreements)
}

/// Test utilities for running and verifying case files.
///
/// A suite is a directory under the data root holding numbered pairs of
/// `<n>.in` (one input per line) and `<n>.out` (`YES`/`NO` per line).
pub mod testing {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use std::path::Path;
    use std::time::{Duration, Instant};

    use log::{debug, error, info};

    /// Discover all case numbers in a suite
    pub fn discover_tests(data_dir: &Path, suite: &str) -> Vec<usize> {
        let test_dir = data_dir.join(suite);

        let mut test_numbers = Vec::new();
        if let Ok(entries) = fs::read_dir(&test_dir) {
            for entry in entries.flatten() {
                if let Some(num) = entry
                    .file_name()
                    .to_str()
                    .and_then(|name| name.strip_suffix(".in"))
                    .and_then(|num| num.parse::<usize>().ok())
                {
                    test_numbers.push(num);
                }
            }
        }

        test_numbers.sort_unstable();
        debug!("found {} cases in {}", test_numbers.len(), test_dir.display());
        test_numbers
    }

    /// Run a single case and return (expected, actual, duration) output
    pub fn run_test_case(
        data_dir: &Path,
        suite: &str,
        test_num: usize,
        strategy: Strategy,
    ) -> Result<(String, String, Duration), String> {
        let test_dir = data_dir.join(suite);
        let in_file = test_dir.join(format!("{}.in", test_num));
        let out_file = test_dir.join(format!("{}.out", test_num));

        let input = fs::read_to_string(&in_file)
            .map_err(|e| format!("Failed to read {}: {}", in_file.display(), e))?;
        let expected = fs::read_to_string(&out_file)
            .map_err(|e| format!("Failed to read {}: {}", out_file.display(), e))?;

        let mut scanner = Scanner::new(Cursor::new(input));
        let mut writer = Writer::new();

        let start = Instant::now();
        solve(strategy, &mut scanner, &mut writer)
            .map_err(|e| format!("Failed to run {}: {}", in_file.display(), e))?;
        let duration = start.elapsed();

        let actual = writer
            .into_string()
            .map_err(|e| format!("Output is not valid UTF-8: {}", e))?;

        Ok((
            expected.trim().to_string(),
            actual.trim().to_string(),
            duration,
        ))
    }

    /// Verify all cases of a suite for one strategy
    pub fn verify_all_tests(data_dir: &Path, suite: &str, strategy: Strategy) {
        let test_cases = discover_tests(data_dir, suite);
        assert!(
            !test_cases.is_empty(),
            "No test cases found for {}/{}",
            data_dir.display(),
            suite
        );

        for test_num in test_cases {
            match run_test_case(data_dir, suite, test_num, strategy) {
                Ok((expected, actual, duration)) => {
                    assert_eq!(
                        actual,
                        expected,
                        "[{}] case {} failed (took {:.2}s)\nExpected:\n{}\nActual:\n{}",
                        strategy,
                        test_num,
                        duration.as_secs_f64(),
                        expected,
                        actual
                    );
                }
                Err(e) => panic!("[{}] case {} error: {}", strategy, test_num, e),
            }
        }
    }

    /// Tally of a suite run
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
    pub struct Summary {
        pub passed: usize,
        pub failed: usize,
    }

    /// Run all cases of a suite against each strategy and print results (for CLI usage)
    pub fn run_all_tests(data_dir: &Path, suite: &str, strategies: &[Strategy]) -> Summary {
        let mut summary = Summary::default();
        let test_cases = discover_tests(data_dir, suite);
        if test_cases.is_empty() {
            println!("No test cases found for {}/{}", data_dir.display(), suite);
            return summary;
        }

        info!(
            "running {} cases for {} against {} strategies",
            test_cases.len(),
            suite,
            strategies.len()
        );

        for &strategy in strategies {
            let mut total_duration = Duration::ZERO;
            for test_num in &test_cases {
                match run_test_case(data_dir, suite, *test_num, strategy) {
                    Ok((expected, actual, duration)) => {
                        total_duration += duration;
                        let secs = duration.as_secs_f64();
                        if actual == expected {
                            println!("✓ [{}] case {}: PASSED ({:.4}s)", strategy, test_num, secs);
                            summary.passed += 1;
                        } else {
                            println!("✗ [{}] case {}: FAILED ({:.4}s)", strategy, test_num, secs);
                            println!("  Expected: {}", expected);
                            println!("  Actual:   {}", actual);
                            summary.failed += 1;
                        }
                    }
                    Err(e) => {
                        error!("[{}] case {}: {}", strategy, test_num, e);
                        println!("✗ [{}] case {}: ERROR - {}", strategy, test_num, e);
                        summary.failed += 1;
                    }
                }
            }
            println!("[{}] total time: {:.4}s", strategy, total_duration.as_secs_f64());
        }

        println!(
            "\nResults: {} passed, {} failed",
            summary.passed, summary.failed
        );
        summary
    }
}
