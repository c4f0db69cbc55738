//! The transcript reporter that turns lifecycle events into output.

use std::io;
use std::time::Duration;

use crate::color::{Color, ColorSetting, Colorizer, SupportsColor};
use crate::label::{NoPrettifier, Prettifier};
use crate::listener::{Diagnostic, TestListener};
use crate::outcome::{TestOutcome, glyph};
use crate::test::TestId;

/// A [`TestListener`] that prints a testdox-style transcript.
///
/// Each test's line reaches the target as soon as its end event arrives,
/// grouped under a class header whenever the class under test changes.
/// Failure detail is indented beneath the line. After the run, the
/// non-successful outcomes are repeated in a summary unless they make up
/// most of the run anyway.
///
/// # Example
///
/// ```
/// use testdox::test::TestId;
/// use testdox::{Diagnostic, TestListener, TranscriptReporter};
///
/// # fn main() -> std::io::Result<()> {
/// let mut reporter = TranscriptReporter::default();
/// let id = TestId::new("Calculator", "it adds two numbers");
/// reporter.test_started(&id)?;
/// reporter.test_ended(&id, std::time::Duration::from_millis(2))?;
/// reporter.run_completed(1)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct TranscriptReporter<W, P = NoPrettifier> {
    target: W,
    prettifier: P,
    color_setting: ColorSetting,
    verbose: bool,
    current: Option<TestOutcome>,
    previous: Option<TestOutcome>,
    non_successful: Vec<TestOutcome>,
}

impl<W: io::Write> TranscriptReporter<W> {
    pub fn new(target: W) -> Self {
        TranscriptReporter {
            target,
            prettifier: NoPrettifier,
            color_setting: ColorSetting::default(),
            verbose: false,
            current: None,
            previous: None,
            non_successful: Vec::new(),
        }
    }
}

impl Default for TranscriptReporter<io::Stdout> {
    fn default() -> Self {
        TranscriptReporter::new(io::stdout())
    }
}

impl<W, P> TranscriptReporter<W, P> {
    /// Replace the output target.
    pub fn with_target<WithTarget: io::Write>(
        self,
        target: WithTarget,
    ) -> TranscriptReporter<WithTarget, P> {
        TranscriptReporter {
            target,
            prettifier: self.prettifier,
            color_setting: self.color_setting,
            verbose: self.verbose,
            current: self.current,
            previous: self.previous,
            non_successful: self.non_successful,
        }
    }

    /// Replace the prettifier consulted for unlabeled tests.
    pub fn with_prettifier<WithPrettifier: Prettifier>(
        self,
        prettifier: WithPrettifier,
    ) -> TranscriptReporter<W, WithPrettifier> {
        TranscriptReporter {
            target: self.target,
            prettifier,
            color_setting: self.color_setting,
            verbose: self.verbose,
            current: self.current,
            previous: self.previous,
            non_successful: self.non_successful,
        }
    }

    /// Set when the output should be colored, [`ColorSetting::Automatic`]
    /// by default. Accepts a plain `bool` as a forced setting.
    pub fn with_color_setting(self, color_setting: impl Into<ColorSetting>) -> Self {
        TranscriptReporter {
            color_setting: color_setting.into(),
            ..self
        }
    }

    /// Set whether verbose-only detail blocks are printed.
    pub fn with_verbose(self, verbose: bool) -> Self {
        TranscriptReporter { verbose, ..self }
    }
}

impl<W: io::Write + SupportsColor, P> TranscriptReporter<W, P> {
    /// Whether this reporter will color its output right now.
    pub fn use_color(&self) -> bool {
        match self.color_setting {
            ColorSetting::Automatic => self.target.supports_color(),
            ColorSetting::Always => true,
            ColorSetting::Never => false,
        }
    }

    fn colorizer(&self) -> Colorizer {
        Colorizer::new(self.use_color())
    }

    fn fail_current(
        &mut self,
        symbol: &str,
        color: Color,
        diagnostic: &Diagnostic,
        verbose_only: bool,
    ) {
        let symbol = self.colorizer().colorize(symbol, color).into_owned();
        let Some(current) = self.current.as_mut() else {
            // failure-class event outside a running test
            return;
        };
        current.fail(symbol, diagnostic.message.as_str(), verbose_only);
    }
}

impl<W: io::Write + SupportsColor, P: Prettifier> TestListener for TranscriptReporter<W, P> {
    type Error = io::Error;

    fn test_started(&mut self, id: &TestId) -> io::Result<()> {
        let class = match &id.class_label {
            Some(label) => label.clone(),
            None => self.prettifier.prettify_class(&id.class_name),
        };
        let mut label = match &id.test_label {
            Some(label) => label.clone(),
            None => self.prettifier.prettify_test(&id.test_name),
        };
        if let Some(data_set) = &id.data_set {
            label = format!("{label} {data_set}");
        }
        self.current = Some(TestOutcome::new(self.colorizer(), class, label));
        Ok(())
    }

    fn test_errored(
        &mut self,
        _id: &TestId,
        diagnostic: &Diagnostic,
        _elapsed: Duration,
    ) -> io::Result<()> {
        self.fail_current(glyph::FAILED, Color::Yellow, diagnostic, false);
        Ok(())
    }

    fn test_warned(
        &mut self,
        _id: &TestId,
        diagnostic: &Diagnostic,
        _elapsed: Duration,
    ) -> io::Result<()> {
        self.fail_current(glyph::FAILED, Color::Yellow, diagnostic, false);
        Ok(())
    }

    fn test_failed(
        &mut self,
        _id: &TestId,
        diagnostic: &Diagnostic,
        _elapsed: Duration,
    ) -> io::Result<()> {
        self.fail_current(glyph::FAILED, Color::Red, diagnostic, false);
        Ok(())
    }

    fn test_incomplete(
        &mut self,
        _id: &TestId,
        diagnostic: &Diagnostic,
        _elapsed: Duration,
    ) -> io::Result<()> {
        self.fail_current(glyph::INCOMPLETE, Color::Yellow, diagnostic, true);
        Ok(())
    }

    fn test_risky(
        &mut self,
        _id: &TestId,
        diagnostic: &Diagnostic,
        _elapsed: Duration,
    ) -> io::Result<()> {
        self.fail_current(glyph::RISKY, Color::Yellow, diagnostic, true);
        Ok(())
    }

    fn test_skipped(
        &mut self,
        _id: &TestId,
        diagnostic: &Diagnostic,
        _elapsed: Duration,
    ) -> io::Result<()> {
        self.fail_current(glyph::SKIPPED, Color::Yellow, diagnostic, true);
        Ok(())
    }

    fn test_ended(&mut self, _id: &TestId, elapsed: Duration) -> io::Result<()> {
        let Some(mut outcome) = self.current.take() else {
            // end event without a started test
            return Ok(());
        };
        outcome.set_runtime(elapsed);
        let rendered = outcome.render(self.previous.as_ref(), self.verbose);
        self.target.write_all(rendered.as_bytes())?;
        self.target.flush()?;
        if !outcome.is_successful() {
            self.non_successful.push(outcome.clone());
        }
        self.previous = Some(outcome);
        Ok(())
    }

    fn run_completed(&mut self, executed_tests: usize) -> io::Result<()> {
        if self.non_successful.is_empty() {
            return Ok(());
        }
        // mostly-broken runs get no summary
        let ratio = self.non_successful.len() as f64 / executed_tests as f64;
        if ratio >= 0.7 {
            return Ok(());
        }
        self.target.write_all(b"Summary of non-successful tests:\n\n")?;
        let mut previous = None;
        for outcome in &self.non_successful {
            let rendered = outcome.render(previous, self.verbose);
            self.target.write_all(rendered.as_bytes())?;
            previous = Some(outcome);
        }
        self.target.flush()
    }
}
