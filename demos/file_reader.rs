//! Replays the transcript of a deliberately broken FileReader test suite.
//!
//! Pass `--verbose` to reveal the reasons of skipped and incomplete tests:
//! `cargo run --example file_reader -- --verbose`

use std::env;
use std::io;
use std::time::Duration;

use testdox::test::{DataSet, TestId};
use testdox::{Diagnostic, TestListener, TranscriptReporter};

enum Verdict {
    Passed,
    Errored(&'static str),
    Failed(&'static str),
    Incomplete(&'static str),
    Skipped(&'static str),
}

struct Step {
    id: TestId,
    verdict: Verdict,
    micros: u64,
}

fn steps() -> Vec<Step> {
    let file_reader = |test: &str| TestId::new("FileReader", test);
    vec![
        Step {
            id: file_reader("it is instantiated without errors"),
            verdict: Verdict::Passed,
            micros: 180,
        },
        Step {
            id: file_reader("it returns the path it was given"),
            verdict: Verdict::Passed,
            micros: 50,
        },
        Step {
            id: file_reader("it reads a line from the file"),
            verdict: Verdict::Failed(
                "expected reading the first line to succeed\n\
                 expected: 'Hello world!'\n\
                 actual:   'Hello world'",
            ),
            micros: 2_300,
        },
        Step {
            id: file_reader("it opens the file"),
            verdict: Verdict::Errored("io error: abc.txt does not exist"),
            micros: 1_100,
        },
        Step {
            id: file_reader("it reads the entire file at once"),
            verdict: Verdict::Incomplete("reading a whole file is not implemented yet"),
            micros: 900,
        },
        Step {
            id: file_reader("it converts the file to utf8"),
            verdict: Verdict::Skipped("no utf8 converter on this platform"),
            micros: 30,
        },
        Step {
            id: TestId::new("PathNormalizer", "it strips redundant separators")
                .with_data_set(DataSet::Index(0)),
            verdict: Verdict::Passed,
            micros: 40,
        },
        Step {
            id: TestId::new("PathNormalizer", "it strips redundant separators")
                .with_data_set(DataSet::Named("windows drive".to_owned())),
            verdict: Verdict::Passed,
            micros: 40,
        },
    ]
}

fn main() -> io::Result<()> {
    let verbose = env::args().any(|argument| argument == "--verbose");
    let mut reporter = TranscriptReporter::default().with_verbose(verbose);

    let steps = steps();
    for step in &steps {
        let elapsed = Duration::from_micros(step.micros);
        reporter.test_started(&step.id)?;
        match &step.verdict {
            Verdict::Passed => {}
            Verdict::Errored(message) => {
                reporter.test_errored(&step.id, &Diagnostic::from(*message), elapsed)?;
            }
            Verdict::Failed(message) => {
                reporter.test_failed(&step.id, &Diagnostic::from(*message), elapsed)?;
            }
            Verdict::Incomplete(message) => {
                reporter.test_incomplete(&step.id, &Diagnostic::from(*message), elapsed)?;
            }
            Verdict::Skipped(message) => {
                reporter.test_skipped(&step.id, &Diagnostic::from(*message), elapsed)?;
            }
        }
        reporter.test_ended(&step.id, elapsed)?;
    }
    reporter.run_completed(steps.len())
}
