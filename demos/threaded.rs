//! Bridges a parallel runner into the strictly sequential reporter.
//!
//! Worker threads pretend to run tests and send one completed record per
//! test. The main thread owns the reporter and replays each record's
//! lifecycle in arrival order, so the transcript interleaves classes the
//! same way the workers finished.

use std::io;
use std::thread;
use std::time::Duration;

use testdox::test::TestId;
use testdox::{Diagnostic, TestListener, TranscriptReporter};

enum Verdict {
    Passed,
    Failed(String),
    Skipped(String),
}

struct Completed {
    id: TestId,
    verdict: Verdict,
    elapsed: Duration,
}

fn fake_suite() -> Vec<Completed> {
    let case = |class: &str, test: &str, verdict, millis| Completed {
        id: TestId::new(class, test),
        verdict,
        elapsed: Duration::from_millis(millis),
    };
    vec![
        case("Tokenizer", "splits on whitespace", Verdict::Passed, 2),
        case("Tokenizer", "keeps quoted strings together", Verdict::Passed, 7),
        case(
            "Tokenizer",
            "rejects unterminated quotes",
            Verdict::Failed("unexpected end of input".to_owned()),
            4,
        ),
        case("Tokenizer", "handles empty input", Verdict::Passed, 1),
        case("Renderer", "prints a plain line", Verdict::Passed, 3),
        case(
            "Renderer",
            "paints severity colors",
            Verdict::Skipped("needs a color terminal".to_owned()),
            1,
        ),
        case("Renderer", "wraps long labels", Verdict::Passed, 6),
        case("Renderer", "flushes after every line", Verdict::Passed, 2),
    ]
}

fn main() -> io::Result<()> {
    let mut reporter = TranscriptReporter::default();
    let suite = fake_suite();
    let total = suite.len();

    thread::scope(|scope| {
        let (jtx, jrx) = crossbeam_channel::unbounded::<Completed>();
        let (ctx, crx) = crossbeam_channel::bounded::<Completed>(4);

        for _ in 0..3 {
            let jrx = jrx.clone();
            let ctx = ctx.clone();
            scope.spawn(move || {
                while let Ok(completed) = jrx.recv() {
                    // stand-in for actually running the test
                    thread::sleep(completed.elapsed);
                    let _ = ctx.send(completed);
                }
            });
        }
        drop(ctx);

        for completed in suite {
            let _ = jtx.send(completed);
        }
        drop(jtx);

        while let Ok(completed) = crx.recv() {
            reporter.test_started(&completed.id)?;
            match &completed.verdict {
                Verdict::Passed => {}
                Verdict::Failed(message) => {
                    reporter.test_failed(
                        &completed.id,
                        &Diagnostic::from(message.as_str()),
                        completed.elapsed,
                    )?;
                }
                Verdict::Skipped(message) => {
                    reporter.test_skipped(
                        &completed.id,
                        &Diagnostic::from(message.as_str()),
                        completed.elapsed,
                    )?;
                }
            }
            reporter.test_ended(&completed.id, completed.elapsed)?;
        }
        reporter.run_completed(total)
    })
}
